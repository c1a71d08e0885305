//! Candidate ranking with replace-and-commit semantics
//!
//! The `Ranker` owns the job registry and the active ranking set per job.
//! Scoring a batch is embarrassingly parallel across resumes; rank
//! assignment happens after all evaluations complete, and the previous
//! ranking set for a job is swapped out atomically under one write lock.
//! Readers see either the old set or the new one, never a mix.

use crate::config::{Config, ScoringWeights};
use crate::error::{Result, ScreenerError};
use crate::matching::MatchingEngine;
use crate::records::{JobPosting, RankingEntry, ResumeRecord};
use chrono::Utc;
use log::{debug, info};
use parking_lot::RwLock;
use rayon::prelude::*;
use std::collections::HashMap;

pub struct Ranker {
    engine: MatchingEngine,
    jobs: RwLock<HashMap<String, JobPosting>>,
    rankings: RwLock<HashMap<String, Vec<RankingEntry>>>,
}

impl Default for Ranker {
    fn default() -> Self {
        Self::new()
    }
}

impl Ranker {
    pub fn new() -> Self {
        Self {
            engine: MatchingEngine::new(),
            jobs: RwLock::new(HashMap::new()),
            rankings: RwLock::new(HashMap::new()),
        }
    }

    pub fn with_config(config: &Config) -> Self {
        Self {
            engine: MatchingEngine::with_config(config),
            jobs: RwLock::new(HashMap::new()),
            rankings: RwLock::new(HashMap::new()),
        }
    }

    /// Register a job posting, replacing any previous posting with the
    /// same id. Rankings for the job are left untouched until the next
    /// `rank` call.
    pub fn register_job(&self, job: JobPosting) {
        debug!("Registering job {} ({})", job.id, job.title);
        self.jobs.write().insert(job.id.clone(), job);
    }

    pub fn job(&self, job_id: &str) -> Option<JobPosting> {
        self.jobs.read().get(job_id).cloned()
    }

    /// Rank all given resumes for a job and commit the result as the
    /// job's active ranking set.
    ///
    /// Every resume is scored independently (in parallel), the batch is
    /// stable-sorted by overall score descending (equal scores keep
    /// their input order), and rank positions 1..N are assigned in that
    /// order. The job's previous ranking set is replaced as one atomic
    /// swap; if scoring fails or the job is unknown, nothing is touched.
    ///
    /// An empty resume batch is not an error: it commits an empty set.
    pub fn rank(
        &self,
        job_id: &str,
        resumes: &[ResumeRecord],
        weights: &ScoringWeights,
    ) -> Result<Vec<RankingEntry>> {
        weights.validate()?;

        let job = self
            .job(job_id)
            .ok_or_else(|| ScreenerError::JobNotFound(job_id.to_string()))?;

        info!("Ranking {} resumes for job {}", resumes.len(), job_id);

        let scored = resumes
            .par_iter()
            .map(|resume| {
                self.engine
                    .score(resume, &job, weights)
                    .map(|scores| (resume.id.clone(), scores))
            })
            .collect::<Result<Vec<_>>>()?;

        let ranked_at = Utc::now();
        let mut entries: Vec<RankingEntry> = scored
            .into_iter()
            .map(|(resume_id, scores)| RankingEntry {
                job_id: job_id.to_string(),
                resume_id,
                scores,
                rank: 0,
                ranked_at,
            })
            .collect();

        entries.sort_by(|a, b| b.scores.overall.total_cmp(&a.scores.overall));
        for (index, entry) in entries.iter_mut().enumerate() {
            entry.rank = index + 1;
        }

        self.rankings
            .write()
            .insert(job_id.to_string(), entries.clone());

        Ok(entries)
    }

    /// The committed ranking set for a job, in rank order. Empty if the
    /// job has never been ranked.
    pub fn active_rankings(&self, job_id: &str) -> Result<Vec<RankingEntry>> {
        if !self.jobs.read().contains_key(job_id) {
            return Err(ScreenerError::JobNotFound(job_id.to_string()));
        }
        Ok(self
            .rankings
            .read()
            .get(job_id)
            .cloned()
            .unwrap_or_default())
    }

    /// Top `n` candidates from the active ranking set.
    pub fn top_candidates(&self, job_id: &str, n: usize) -> Result<Vec<RankingEntry>> {
        let mut entries = self.active_rankings(job_id)?;
        entries.truncate(n);
        Ok(entries)
    }
}
