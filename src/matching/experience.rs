//! Years-of-experience scoring

/// Ceiling on the overqualification bonus.
const BONUS_CAP: f64 = 0.2;

/// Score candidate experience against a job's minimum requirement.
///
/// A minimum of zero imposes no requirement and always scores 1.0.
/// Meeting the minimum scores 1.0 plus a bonus of up to 0.2 for extra
/// years, so this is the one sub-score that can exceed 1.0 (never past
/// 1.2). Falling short earns linear partial credit down to 0.0 at zero
/// experience.
pub fn experience_score(candidate_years: f64, min_years: u32) -> f64 {
    if min_years == 0 {
        return 1.0;
    }

    let min_years = f64::from(min_years);
    let candidate_years = candidate_years.max(0.0);

    if candidate_years >= min_years {
        let bonus = ((candidate_years - min_years) / min_years * BONUS_CAP).min(BONUS_CAP);
        1.0 + bonus
    } else {
        candidate_years / min_years
    }
}
