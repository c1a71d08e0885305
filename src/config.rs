//! Configuration management for the resume screener

use crate::error::{Result, ScreenerError};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub scoring: ScoringWeights,
    pub semantic: SemanticConfig,
}

/// Weights used to collapse the four sub-scores into one overall score.
///
/// The reference configuration sums to 1.0, but the aggregate is a plain
/// weighted sum over whatever values are supplied; there is no
/// renormalization. Negative weights are rejected by [`validate`].
///
/// [`validate`]: ScoringWeights::validate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringWeights {
    pub skills: f64,
    pub experience: f64,
    pub education: f64,
    pub semantic: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SemanticConfig {
    /// Cap on the vocabulary size of the per-pair term vector space.
    pub max_features: usize,
    /// Tokens shorter than this are dropped before weighting.
    pub min_token_len: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            scoring: ScoringWeights::default(),
            semantic: SemanticConfig::default(),
        }
    }
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            skills: 0.40,
            experience: 0.25,
            education: 0.15,
            semantic: 0.20,
        }
    }
}

impl Default for SemanticConfig {
    fn default() -> Self {
        Self {
            max_features: 500,
            min_token_len: 2,
        }
    }
}

impl ScoringWeights {
    /// Reject weight sets that would produce a meaningless aggregate.
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("skills", self.skills),
            ("experience", self.experience),
            ("education", self.education),
            ("semantic", self.semantic),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ScreenerError::Configuration(format!(
                    "Weight '{}' must be a non-negative number, got {}",
                    name, value
                )));
            }
        }
        Ok(())
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path();

        if config_path.exists() {
            Self::load_from_path(&config_path)
        } else {
            let config = Self::default();
            config.save()?;
            Ok(config)
        }
    }

    pub fn load_from_path(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)
            .map_err(|e| ScreenerError::Configuration(format!("Failed to parse config: {}", e)))?;
        config.scoring.validate()?;
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        self.save_to_path(&Self::config_path())
    }

    pub fn save_to_path(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self).map_err(|e| {
            ScreenerError::Configuration(format!("Failed to serialize config: {}", e))
        })?;

        std::fs::write(path, content)?;
        Ok(())
    }

    fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")))
            .join("resume-screener")
            .join("config.toml")
    }
}
