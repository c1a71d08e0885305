//! Record types exchanged with the parsing, job-analysis, and persistence
//! collaborators.
//!
//! Everything here is an immutable value type with explicit defaults for
//! absent data, so a half-extracted resume can never fail scoring with a
//! missing-field error.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A parsed resume as produced by the document-parsing collaborator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResumeRecord {
    pub id: String,
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub skills: Vec<SkillTag>,
    pub years_experience: f64,
    #[serde(default)]
    pub education: EducationTier,
    pub raw_text: String,
}

/// A job posting as produced by the job-description-analysis collaborator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobPosting {
    pub id: String,
    pub title: String,
    pub description: String,
    pub required_skills: Vec<String>,
    pub preferred_skills: Vec<String>,
    pub min_experience: u32,
    #[serde(default)]
    pub education_requirement: EducationTier,
}

/// An extracted skill with its taxonomy category.
///
/// The category is metadata for reporting only; skill comparison always
/// goes through the canonicalized name.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillTag {
    pub name: String,
    pub category: SkillCategory,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SkillCategory {
    Technical,
    Soft,
    RoleSpecific,
    Domain,
}

impl SkillTag {
    pub fn new(name: impl Into<String>, category: SkillCategory) -> Self {
        Self {
            name: name.into(),
            category,
        }
    }

    /// Canonical form used for all skill comparisons.
    pub fn canonical(&self) -> String {
        canonical_skill(&self.name)
    }
}

/// Lowercased, trimmed skill string. Comparison never looks past this.
pub fn canonical_skill(name: &str) -> String {
    name.trim().to_lowercase()
}

/// Education levels on a fixed ordinal scale.
///
/// Variant order is the scale: comparisons between tiers use this order
/// exclusively, never label equality.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum EducationTier {
    #[default]
    Unknown,
    HighSchool,
    Associate,
    Bachelors,
    Masters,
    Doctorate,
}

impl EducationTier {
    /// Position on the ordinal scale, 0 (unknown) through 5 (doctorate).
    pub fn rank(&self) -> u8 {
        *self as u8
    }

    /// Map a free-form label onto the scale. Unrecognized labels fall back
    /// to `Unknown`, which scores as "no requirement" on the job side and
    /// zero credit on the candidate side.
    pub fn from_label(label: &str) -> Self {
        match label.trim().to_lowercase().as_str() {
            "phd" | "doctorate" => Self::Doctorate,
            "masters" | "mba" => Self::Masters,
            "bachelors" => Self::Bachelors,
            "associate" | "diploma" => Self::Associate,
            "high_school" => Self::HighSchool,
            _ => Self::Unknown,
        }
    }
}

/// The four independent sub-scores for one (resume, job) pair.
///
/// `skills`, `education`, and `semantic` are bounded to [0, 1] by their
/// scorers; `experience` may reach 1.2 through the overqualification
/// bonus.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreVector {
    pub skills: f64,
    pub experience: f64,
    pub education: f64,
    pub semantic: f64,
}

/// Score vector plus the aggregated overall score used for ranking.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MatchScores {
    pub vector: ScoreVector,
    pub overall: f64,
}

impl MatchScores {
    /// Human-readable summary of how the candidate matched, one line per
    /// dimension.
    pub fn explanations(&self) -> Vec<&'static str> {
        let mut lines = Vec::new();

        if self.vector.skills >= 0.8 {
            lines.push("Excellent skill match");
        } else if self.vector.skills >= 0.6 {
            lines.push("Good skill match");
        } else {
            lines.push("Partial skill match");
        }

        if self.vector.experience >= 0.9 {
            lines.push("Exceeds experience requirement");
        } else if self.vector.experience >= 0.7 {
            lines.push("Meets experience requirement");
        } else {
            lines.push("Below experience requirement");
        }

        if self.vector.education >= 0.9 {
            lines.push("Meets education requirement");
        }

        lines
    }
}

/// One candidate's evaluation and rank position for one job.
///
/// At most one entry per (job, resume) pair is active at a time; ranking
/// a job again replaces its whole entry set.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankingEntry {
    pub job_id: String,
    pub resume_id: String,
    pub scores: MatchScores,
    /// 1-based position within the job's ranking set.
    pub rank: usize,
    pub ranked_at: DateTime<Utc>,
}
