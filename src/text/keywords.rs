// Distinctive-term extraction for job descriptions.
//
// Uses the `keyword_extraction` crate with each sentence of the
// description as a separate document for IDF computation — terms that are
// distinctive to individual requirement lines get boosted over boilerplate
// that appears everywhere. The library handles tokenization, stop word
// removal, and scoring.

use keyword_extraction::tf_idf::{TfIdf, TfIdfParams};
use stop_words::{get, LANGUAGE};
use tracing::info;

/// Extract the top distinctive terms from a job description.
///
/// Returns (term, score) pairs ranked by TF-IDF score. An empty or
/// stop-word-only description returns an empty list rather than an error —
/// key terms are a display garnish, not a pipeline requirement.
pub fn job_key_terms(description: &str, top_n: usize) -> Vec<(String, f32)> {
    let sentences: Vec<String> = description
        .split(['.', '!', '?', '\n'])
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect();

    if sentences.is_empty() {
        return Vec::new();
    }

    let stop_words: Vec<String> = get(LANGUAGE::English);

    let params = TfIdfParams::UnprocessedDocuments(&sentences, &stop_words, None);
    let tfidf = TfIdf::new(params);

    let ranked = tfidf.get_ranked_word_scores(top_n);

    if !ranked.is_empty() {
        info!(
            terms = ranked.len(),
            top_term = %ranked[0].0,
            "Extracted job description key terms"
        );
    }

    ranked
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_terms_from_description() {
        let jd = "Looking for a Python developer with Django experience. \
                  Python skills are essential. \
                  The Django framework powers our backend. \
                  Strong collaboration skills expected.";
        let terms = job_key_terms(jd, 10);
        assert!(!terms.is_empty());
        let words: Vec<&str> = terms.iter().map(|(w, _)| w.as_str()).collect();
        assert!(words.iter().any(|w| w.contains("python") || w.contains("django")));
    }

    #[test]
    fn test_empty_description() {
        assert!(job_key_terms("", 10).is_empty());
        assert!(job_key_terms("  \n  ", 10).is_empty());
    }

    #[test]
    fn test_respects_top_n() {
        let jd = "Rust engineer. Tokio services. Kafka pipelines. Postgres storage. \
                  Kubernetes deployments. Terraform infrastructure. Grafana dashboards.";
        let terms = job_key_terms(jd, 3);
        assert!(terms.len() <= 3);
    }
}
