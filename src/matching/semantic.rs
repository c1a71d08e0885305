//! Text similarity over a per-pair tf-idf vector space
//!
//! The vector space is rebuilt for every (resume, job) comparison from
//! only those two documents. That keeps each pairwise score precise but
//! means scores are not comparable across different jobs; callers must
//! hold the job text fixed when comparing candidates.

use crate::config::SemanticConfig;
use regex::Regex;
use std::collections::{HashMap, HashSet};
use unicode_segmentation::UnicodeSegmentation;

/// Computes cosine similarity between two documents in a tf-idf weighted
/// unigram+bigram space.
pub struct SemanticScorer {
    token_pattern: Regex,
    stop_words: HashSet<String>,
    max_features: usize,
    min_token_len: usize,
}

impl Default for SemanticScorer {
    fn default() -> Self {
        Self::new()
    }
}

impl SemanticScorer {
    pub fn new() -> Self {
        Self::with_config(&SemanticConfig::default())
    }

    pub fn with_config(config: &SemanticConfig) -> Self {
        let token_pattern = Regex::new(r"^\w+$").expect("Invalid token regex");

        Self {
            token_pattern,
            stop_words: Self::create_stop_words(),
            max_features: config.max_features,
            min_token_len: config.min_token_len,
        }
    }

    /// Similarity between resume text and job description, in [0, 1].
    ///
    /// Degenerate input (either document yields no usable terms) scores
    /// 0.0 rather than erroring: semantic similarity is advisory for the
    /// rest of the pipeline.
    pub fn similarity(&self, resume_text: &str, job_text: &str) -> f64 {
        let resume_terms = self.extract_terms(resume_text);
        let job_terms = self.extract_terms(job_text);

        if resume_terms.is_empty() || job_terms.is_empty() {
            return 0.0;
        }

        let resume_tf = term_frequencies(&resume_terms);
        let job_tf = term_frequencies(&job_terms);

        let vocabulary = self.build_vocabulary(&resume_tf, &job_tf);

        // Smoothed idf over the two-document corpus: terms in both
        // documents weigh 1.0, terms in only one weigh ln(3/2) + 1.
        let mut resume_vec = Vec::with_capacity(vocabulary.len());
        let mut job_vec = Vec::with_capacity(vocabulary.len());
        for term in &vocabulary {
            let in_resume = resume_tf.contains_key(term.as_str());
            let in_job = job_tf.contains_key(term.as_str());
            let df = usize::from(in_resume) + usize::from(in_job);
            let idf = (3.0 / (1.0 + df as f64)).ln() + 1.0;

            resume_vec.push(resume_tf.get(term.as_str()).copied().unwrap_or(0.0) * idf);
            job_vec.push(job_tf.get(term.as_str()).copied().unwrap_or(0.0) * idf);
        }

        cosine_similarity(&resume_vec, &job_vec).clamp(0.0, 1.0)
    }

    /// Tokenize into lowercased unigrams and bigrams with stop words
    /// removed. Bigrams are joined with a single space.
    fn extract_terms(&self, text: &str) -> Vec<String> {
        let tokens: Vec<String> = text
            .unicode_words()
            .map(|w| w.to_lowercase())
            .filter(|w| w.chars().count() >= self.min_token_len)
            .filter(|w| self.token_pattern.is_match(w))
            .filter(|w| !self.stop_words.contains(w.as_str()))
            .collect();

        let mut terms = Vec::with_capacity(tokens.len() * 2);
        for pair in tokens.windows(2) {
            terms.push(format!("{} {}", pair[0], pair[1]));
        }
        terms.extend(tokens);
        terms
    }

    /// Union vocabulary of both documents, capped at `max_features` terms
    /// chosen by corpus-wide frequency. Frequency ties break
    /// lexicographically so the selected vocabulary is deterministic.
    fn build_vocabulary(
        &self,
        resume_tf: &HashMap<String, f64>,
        job_tf: &HashMap<String, f64>,
    ) -> Vec<String> {
        let mut totals: HashMap<&str, f64> = HashMap::new();
        for (term, count) in resume_tf.iter().chain(job_tf.iter()) {
            *totals.entry(term.as_str()).or_insert(0.0) += count;
        }

        let mut terms: Vec<(&str, f64)> = totals.into_iter().collect();
        terms.sort_by(|a, b| b.1.total_cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        terms.truncate(self.max_features);

        terms.into_iter().map(|(term, _)| term.to_string()).collect()
    }

    /// Common English stop words excluded from the vector space.
    fn create_stop_words() -> HashSet<String> {
        let stop_words = [
            "a", "about", "above", "after", "again", "all", "also", "am", "an", "and", "any",
            "are", "as", "at", "be", "because", "been", "before", "being", "below", "between",
            "both", "but", "by", "can", "could", "did", "do", "does", "doing", "down", "during",
            "each", "few", "for", "from", "further", "had", "has", "have", "having", "he", "her",
            "here", "hers", "him", "his", "how", "i", "if", "in", "into", "is", "it", "its",
            "just", "me", "more", "most", "my", "no", "nor", "not", "now", "of", "off", "on",
            "once", "only", "or", "other", "our", "ours", "out", "over", "own", "same", "she",
            "should", "so", "some", "such", "than", "that", "the", "their", "theirs", "them",
            "then", "there", "these", "they", "this", "those", "through", "to", "too", "under",
            "until", "up", "very", "was", "we", "were", "what", "when", "where", "which", "while",
            "who", "whom", "why", "will", "with", "would", "you", "your", "yours",
        ];

        stop_words.iter().map(|&s| s.to_string()).collect()
    }
}

fn term_frequencies(terms: &[String]) -> HashMap<String, f64> {
    let mut counts = HashMap::new();
    for term in terms {
        *counts.entry(term.clone()).or_insert(0.0) += 1.0;
    }
    counts
}

/// Cosine of the angle between two term-weight vectors.
fn cosine_similarity(a: &[f64], b: &[f64]) -> f64 {
    let dot_product: f64 = a.iter().zip(b.iter()).map(|(x, y)| x * y).sum();
    let norm_a: f64 = a.iter().map(|x| x * x).sum::<f64>().sqrt();
    let norm_b: f64 = b.iter().map(|x| x * x).sum::<f64>().sqrt();

    if norm_a == 0.0 || norm_b == 0.0 {
        0.0
    } else {
        dot_product / (norm_a * norm_b)
    }
}
