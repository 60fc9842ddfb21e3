// Combined match score and candidate ranking.
//
// score = skill_weight * overlap_ratio + text_weight * cosine
//
// Skill overlap dominates: a resume naming the right skills outranks one
// that merely shares vocabulary with the posting.

use serde::{Deserialize, Serialize};

/// Configurable weights for the combined score formula.
pub struct ScoreWeights {
    /// Weight of the skill overlap ratio (default 0.6)
    pub skill_weight: f64,
    /// Weight of the TF-IDF cosine similarity (default 0.4)
    pub text_weight: f64,
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            skill_weight: 0.6,
            text_weight: 0.4,
        }
    }
}

/// Match quality band for a candidate, derived from the percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchBand {
    Strong,
    Moderate,
    Weak,
}

impl MatchBand {
    /// Determine the band from a match percentage (0-100).
    pub fn from_percentage(pct: u32) -> Self {
        match pct {
            p if p >= 75 => MatchBand::Strong,
            p if p >= 50 => MatchBand::Moderate,
            _ => MatchBand::Weak,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            MatchBand::Strong => "Strong",
            MatchBand::Moderate => "Moderate",
            MatchBand::Weak => "Weak",
        }
    }
}

impl std::fmt::Display for MatchBand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A fully scored candidate, ready for ranking and display.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Candidate {
    pub filename: String,
    pub candidate_name: String,
    /// Raw extracted resume text (previews and storage)
    pub text: String,
    pub skills: Vec<String>,
    pub matching_skills: Vec<String>,
    pub similarity_score: f64,
    pub match_percentage: u32,
}

impl Candidate {
    pub fn band(&self) -> MatchBand {
        MatchBand::from_percentage(self.match_percentage)
    }
}

/// Compute the combined score from skill overlap and text similarity.
pub fn combined_score(skill_ratio: f64, cosine: f64, weights: &ScoreWeights) -> f64 {
    (weights.skill_weight * skill_ratio + weights.text_weight * cosine).clamp(0.0, 1.0)
}

/// Convert a combined score to a whole match percentage.
pub fn match_percentage(score: f64) -> u32 {
    (score * 100.0) as u32
}

/// Sort candidates by combined score, best first.
pub fn rank_candidates(mut candidates: Vec<Candidate>) -> Vec<Candidate> {
    candidates.sort_by(|a, b| {
        b.similarity_score
            .partial_cmp(&a.similarity_score)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    candidates
}

/// Apply the minimum-match filter and top-N cutoff to ranked candidates.
pub fn shortlist(candidates: &[Candidate], min_match: u32, top_n: usize) -> Vec<Candidate> {
    candidates
        .iter()
        .filter(|c| c.match_percentage >= min_match)
        .take(top_n)
        .cloned()
        .collect()
}

/// Frequency of job skills across the given candidates' skill lists,
/// most common first, limited to `top_n`. Ties break alphabetically so
/// the table is stable between runs.
pub fn common_matching_skills(
    candidates: &[Candidate],
    job_skills: &[String],
    top_n: usize,
) -> Vec<(String, usize)> {
    let job: std::collections::HashSet<String> =
        job_skills.iter().map(|s| s.to_lowercase()).collect();

    let mut counts: std::collections::HashMap<String, usize> = std::collections::HashMap::new();
    for candidate in candidates {
        for skill in &candidate.skills {
            if job.contains(&skill.to_lowercase()) {
                *counts.entry(skill.to_lowercase()).or_insert(0) += 1;
            }
        }
    }

    let mut ranked: Vec<(String, usize)> = counts.into_iter().collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    ranked.truncate(top_n);
    ranked
}
