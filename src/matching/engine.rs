//! Matching engine combining the four sub-scorers into one overall score

use crate::config::{Config, ScoringWeights};
use crate::error::Result;
use crate::matching::education::education_score;
use crate::matching::experience::experience_score;
use crate::matching::semantic::SemanticScorer;
use crate::matching::skills::skill_score;
use crate::records::{JobPosting, MatchScores, ResumeRecord, ScoreVector};
use log::debug;

/// Scores (resume, job) pairs. Stateless apart from the semantic scorer's
/// tokenizer setup; every evaluation is a pure function of its inputs, so
/// one engine can be shared across threads.
pub struct MatchingEngine {
    semantic: SemanticScorer,
}

impl Default for MatchingEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl MatchingEngine {
    pub fn new() -> Self {
        Self {
            semantic: SemanticScorer::new(),
        }
    }

    pub fn with_config(config: &Config) -> Self {
        Self {
            semantic: SemanticScorer::with_config(&config.semantic),
        }
    }

    /// Evaluate a single (resume, job) pair.
    ///
    /// Weights are validated before any scoring begins; a negative or
    /// non-finite weight aborts with a configuration error.
    pub fn score(
        &self,
        resume: &ResumeRecord,
        job: &JobPosting,
        weights: &ScoringWeights,
    ) -> Result<MatchScores> {
        weights.validate()?;

        let vector = ScoreVector {
            skills: skill_score(&resume.skills, &job.required_skills, &job.preferred_skills),
            experience: experience_score(resume.years_experience, job.min_experience),
            education: education_score(resume.education, job.education_requirement),
            semantic: self.semantic.similarity(&resume.raw_text, &job.description),
        };

        let overall = aggregate(&vector, weights);

        debug!(
            "Scored resume {} against job {}: overall {:.3} (skills {:.3}, experience {:.3}, education {:.3}, semantic {:.3})",
            resume.id, job.id, overall, vector.skills, vector.experience, vector.education, vector.semantic
        );

        Ok(MatchScores { vector, overall })
    }
}

/// Plain weighted sum of the sub-scores, clamped to 1.0.
///
/// Weights are used as supplied, with no renormalization. The clamp is
/// applied only here: the experience sub-score may exceed 1.0 and must
/// keep that value inside the vector.
pub fn aggregate(vector: &ScoreVector, weights: &ScoringWeights) -> f64 {
    let weighted = vector.skills * weights.skills
        + vector.experience * weights.experience
        + vector.education * weights.education
        + vector.semantic * weights.semantic;

    weighted.min(1.0)
}
