//! Skill coverage scoring

use crate::records::{canonical_skill, SkillTag};
use std::collections::HashSet;

/// Bonus ceiling contributed by preferred-skill coverage.
const PREFERRED_BONUS_CAP: f64 = 0.2;

/// Score candidate skills against a job's required and preferred sets.
///
/// All three inputs are canonicalized (lowercased, trimmed) and
/// deduplicated before comparison. Required coverage counts for the full
/// score; preferred coverage adds up to a 0.2 bonus; the result is capped
/// at 1.0. An empty required set scores 1.0, an empty preferred set adds
/// nothing.
pub fn skill_score(
    candidate_skills: &[SkillTag],
    required_skills: &[String],
    preferred_skills: &[String],
) -> f64 {
    let candidate: HashSet<String> = candidate_skills.iter().map(|s| s.canonical()).collect();
    let required = canonical_set(required_skills);
    let preferred = canonical_set(preferred_skills);

    let required_score = if required.is_empty() {
        1.0
    } else {
        let matches = required.intersection(&candidate).count();
        matches as f64 / required.len() as f64
    };

    let preferred_bonus = if preferred.is_empty() {
        0.0
    } else {
        let matches = preferred.intersection(&candidate).count();
        matches as f64 / preferred.len() as f64 * PREFERRED_BONUS_CAP
    };

    (required_score + preferred_bonus).min(1.0)
}

fn canonical_set(skills: &[String]) -> HashSet<String> {
    skills
        .iter()
        .map(|s| canonical_skill(s))
        .filter(|s| !s.is_empty())
        .collect()
}
