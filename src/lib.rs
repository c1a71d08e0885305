//! Resume screener library
//!
//! Multi-factor scoring of (resume, job) pairs and deterministic ranking
//! of candidates per job. Document parsing, requirement extraction, and
//! persistence are external collaborators; this crate consumes their
//! records and hands back scored, ranked entries.

pub mod config;
pub mod error;
pub mod matching;
pub mod ranking;
pub mod records;

pub use config::{Config, ScoringWeights};
pub use error::{Result, ScreenerError};
pub use matching::MatchingEngine;
pub use ranking::Ranker;
pub use records::{
    EducationTier, JobPosting, MatchScores, RankingEntry, ResumeRecord, ScoreVector, SkillCategory,
    SkillTag,
};
