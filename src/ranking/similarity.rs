// Similarity measures — cosine over sparse weight maps, skill overlap.

use std::collections::{HashMap, HashSet};

use super::vectorize::{tfidf_vectors, tokenize};

/// Cosine similarity between two sparse weight maps.
///
/// Returns 0.0 to 1.0. Empty or zero-magnitude input scores 0.0 — this is
/// the degenerate case where one text is too short to vectorize.
pub fn cosine_from_weights(a: &HashMap<String, f64>, b: &HashMap<String, f64>) -> f64 {
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }

    let dot: f64 = a
        .iter()
        .filter_map(|(term, wa)| b.get(term).map(|wb| wa * wb))
        .sum();
    let mag_a: f64 = a.values().map(|w| w * w).sum::<f64>().sqrt();
    let mag_b: f64 = b.values().map(|w| w * w).sum::<f64>().sqrt();

    let denom = mag_a * mag_b;
    if denom < f64::EPSILON {
        0.0
    } else {
        (dot / denom).clamp(0.0, 1.0)
    }
}

/// TF-IDF cosine similarity between two normalized documents.
///
/// The two documents form their own corpus, so IDF reflects which terms
/// distinguish the resume from the job description.
pub fn document_similarity(a: &str, b: &str) -> f64 {
    let docs = vec![tokenize(a), tokenize(b)];
    let vectors = tfidf_vectors(&docs);
    cosine_from_weights(&vectors[0], &vectors[1])
}

/// Skill overlap between a job description and a resume.
///
/// Returns the matching skills (in job-skill order) and the ratio
/// |job ∩ resume| / |job|. A job with no skills scores 0.0.
pub fn skill_overlap(job_skills: &[String], resume_skills: &[String]) -> (Vec<String>, f64) {
    if job_skills.is_empty() {
        return (Vec::new(), 0.0);
    }

    let resume: HashSet<String> = resume_skills.iter().map(|s| s.to_lowercase()).collect();
    let matching: Vec<String> = job_skills
        .iter()
        .filter(|s| resume.contains(&s.to_lowercase()))
        .cloned()
        .collect();

    let ratio = matching.len() as f64 / job_skills.len() as f64;
    (matching, ratio)
}
