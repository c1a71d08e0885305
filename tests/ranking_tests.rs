//! Integration tests for the resume screener

use resume_screener::{
    EducationTier, JobPosting, Ranker, ResumeRecord, ScoringWeights, ScreenerError, SkillCategory,
    SkillTag,
};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn make_resume(id: &str, skills: &[&str], years: f64, education: EducationTier) -> ResumeRecord {
    ResumeRecord {
        id: id.to_string(),
        name: format!("Candidate {}", id),
        email: Some(format!("{}@example.com", id)),
        phone: None,
        skills: skills
            .iter()
            .map(|s| SkillTag::new(*s, SkillCategory::Technical))
            .collect(),
        years_experience: years,
        education,
        raw_text: format!("Engineer experienced with {}", skills.join(", ")),
    }
}

fn senior_python_job() -> JobPosting {
    JobPosting {
        id: "senior-python".to_string(),
        title: "Senior Python Developer".to_string(),
        description:
            "Looking for a Python developer with Django, SQL skills, AWS and Docker experience."
                .to_string(),
        required_skills: vec!["python".into(), "django".into(), "sql".into()],
        preferred_skills: vec!["aws".into(), "docker".into()],
        min_experience: 5,
        education_requirement: EducationTier::Bachelors,
    }
}

#[test]
fn test_reference_candidate_scores() {
    init_logging();
    let ranker = Ranker::new();
    ranker.register_job(senior_python_job());

    let candidate = make_resume(
        "sample",
        &["Python", "Django", "PostgreSQL", "AWS"],
        6.0,
        EducationTier::Bachelors,
    );
    let entries = ranker
        .rank("senior-python", &[candidate], &ScoringWeights::default())
        .unwrap();

    assert_eq!(entries.len(), 1);
    let scores = &entries[0].scores;
    assert!((scores.vector.skills - (2.0 / 3.0 + 0.1)).abs() < 1e-9);
    assert!((scores.vector.experience - 1.04).abs() < 1e-9);
    assert_eq!(scores.vector.education, 1.0);
    assert!((0.0..=1.0).contains(&scores.vector.semantic));
    assert!((0.0..=1.0).contains(&scores.overall));
    assert_eq!(entries[0].rank, 1);
}

#[test]
fn test_rank_positions_are_a_permutation() {
    init_logging();
    let ranker = Ranker::new();
    ranker.register_job(senior_python_job());

    let resumes: Vec<ResumeRecord> = (0..20)
        .map(|i| {
            let skills: Vec<&str> = ["python", "django", "sql", "aws", "docker"]
                [..(i % 5) + 1]
                .to_vec();
            make_resume(
                &format!("r-{:02}", i),
                &skills,
                (i % 8) as f64,
                EducationTier::Bachelors,
            )
        })
        .collect();

    let entries = ranker
        .rank("senior-python", &resumes, &ScoringWeights::default())
        .unwrap();

    let mut ranks: Vec<usize> = entries.iter().map(|e| e.rank).collect();
    ranks.sort_unstable();
    let expected: Vec<usize> = (1..=20).collect();
    assert_eq!(ranks, expected);

    // Entries come back ordered best-first with non-increasing scores.
    for pair in entries.windows(2) {
        assert!(pair[0].scores.overall >= pair[1].scores.overall);
        assert_eq!(pair[0].rank + 1, pair[1].rank);
    }
}

#[test]
fn test_ranking_is_idempotent() {
    let ranker = Ranker::new();
    ranker.register_job(senior_python_job());

    let resumes: Vec<ResumeRecord> = (0..10)
        .map(|i| {
            make_resume(
                &format!("r-{}", i),
                &["python", "sql"],
                i as f64,
                EducationTier::Masters,
            )
        })
        .collect();

    let weights = ScoringWeights::default();
    let first = ranker.rank("senior-python", &resumes, &weights).unwrap();
    let second = ranker.rank("senior-python", &resumes, &weights).unwrap();

    assert_eq!(first.len(), second.len());
    for (a, b) in first.iter().zip(second.iter()) {
        assert_eq!(a.resume_id, b.resume_id);
        assert_eq!(a.rank, b.rank);
        assert_eq!(a.scores.overall, b.scores.overall);
    }
}

#[test]
fn test_zero_experience_against_requirement() {
    let ranker = Ranker::new();
    ranker.register_job(JobPosting {
        id: "strict".to_string(),
        title: "Strict".to_string(),
        description: "Four years required.".to_string(),
        required_skills: vec![],
        preferred_skills: vec![],
        min_experience: 4,
        education_requirement: EducationTier::Unknown,
    });

    let candidate = make_resume("junior", &["python"], 0.0, EducationTier::Bachelors);
    let entries = ranker
        .rank("strict", &[candidate], &ScoringWeights::default())
        .unwrap();
    assert_eq!(entries[0].scores.vector.experience, 0.0);
}

#[test]
fn test_empty_resume_list_is_not_an_error() {
    let ranker = Ranker::new();
    ranker.register_job(senior_python_job());

    let entries = ranker
        .rank("senior-python", &[], &ScoringWeights::default())
        .unwrap();
    assert!(entries.is_empty());
}

#[test]
fn test_unknown_job_leaves_other_rankings_untouched() {
    let ranker = Ranker::new();
    ranker.register_job(senior_python_job());

    let resumes = vec![make_resume(
        "only",
        &["python", "django", "sql"],
        5.0,
        EducationTier::Bachelors,
    )];
    ranker
        .rank("senior-python", &resumes, &ScoringWeights::default())
        .unwrap();

    let result = ranker.rank("no-such-job", &resumes, &ScoringWeights::default());
    assert!(matches!(result, Err(ScreenerError::JobNotFound(_))));

    let active = ranker.active_rankings("senior-python").unwrap();
    assert_eq!(active.len(), 1);
    assert_eq!(active[0].resume_id, "only");
}

#[test]
fn test_negative_weights_rejected_before_ranking() {
    let ranker = Ranker::new();
    ranker.register_job(senior_python_job());

    let weights = ScoringWeights {
        experience: -0.25,
        ..ScoringWeights::default()
    };
    let result = ranker.rank("senior-python", &[], &weights);
    assert!(matches!(result, Err(ScreenerError::Configuration(_))));
}

#[test]
fn test_rerank_supersedes_entries() {
    let ranker = Ranker::new();
    ranker.register_job(senior_python_job());
    let weights = ScoringWeights::default();

    let first = vec![
        make_resume("a", &["python"], 2.0, EducationTier::Bachelors),
        make_resume("b", &["python", "django"], 6.0, EducationTier::Masters),
    ];
    ranker.rank("senior-python", &first, &weights).unwrap();

    let second = vec![make_resume(
        "c",
        &["python", "django", "sql"],
        7.0,
        EducationTier::Doctorate,
    )];
    ranker.rank("senior-python", &second, &weights).unwrap();

    // At most one active entry per (job, resume) pair: the old batch is gone.
    let active = ranker.active_rankings("senior-python").unwrap();
    assert_eq!(active.len(), 1);
    assert_eq!(active[0].resume_id, "c");
}

#[test]
fn test_education_gate_orders_otherwise_equal_candidates() {
    let ranker = Ranker::new();
    ranker.register_job(JobPosting {
        id: "masters-required".to_string(),
        title: "Research Engineer".to_string(),
        description: "Research role requiring graduate study.".to_string(),
        required_skills: vec!["python".into()],
        preferred_skills: vec![],
        min_experience: 0,
        education_requirement: EducationTier::Masters,
    });

    let resumes = vec![
        make_resume("hs", &["python"], 3.0, EducationTier::HighSchool),
        make_resume("phd", &["python"], 3.0, EducationTier::Doctorate),
        make_resume("bsc", &["python"], 3.0, EducationTier::Bachelors),
        make_resume("none", &["python"], 3.0, EducationTier::Unknown),
    ];
    let entries = ranker
        .rank("masters-required", &resumes, &ScoringWeights::default())
        .unwrap();

    let order: Vec<&str> = entries.iter().map(|e| e.resume_id.as_str()).collect();
    assert_eq!(order, vec!["phd", "bsc", "hs", "none"]);
}

#[test]
fn test_custom_weights_change_the_ordering() {
    let ranker = Ranker::new();
    ranker.register_job(senior_python_job());

    let resumes = vec![
        // Full skill coverage, no experience.
        make_resume(
            "skilled",
            &["python", "django", "sql", "aws", "docker"],
            0.0,
            EducationTier::Bachelors,
        ),
        // One skill, deep experience.
        make_resume("veteran", &["python"], 15.0, EducationTier::Bachelors),
    ];

    let skills_heavy = ScoringWeights {
        skills: 1.0,
        experience: 0.0,
        education: 0.0,
        semantic: 0.0,
    };
    let entries = ranker.rank("senior-python", &resumes, &skills_heavy).unwrap();
    assert_eq!(entries[0].resume_id, "skilled");

    let experience_heavy = ScoringWeights {
        skills: 0.0,
        experience: 1.0,
        education: 0.0,
        semantic: 0.0,
    };
    let entries = ranker
        .rank("senior-python", &resumes, &experience_heavy)
        .unwrap();
    assert_eq!(entries[0].resume_id, "veteran");
}
