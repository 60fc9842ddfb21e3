// Unit tests for the ranking math.
//
// Tests the vectorizer, cosine edge cases, skill overlap, and the
// combined score invariants the ranking relies on.

use std::collections::HashMap;

use shortlist::ranking::score::{
    combined_score, match_percentage, rank_candidates, shortlist, Candidate, MatchBand,
    ScoreWeights,
};
use shortlist::ranking::similarity::{cosine_from_weights, document_similarity, skill_overlap};
use shortlist::ranking::vectorize::{tfidf_vectors, tokenize};

fn candidate(name: &str, score: f64) -> Candidate {
    Candidate {
        filename: format!("{name}.pdf"),
        candidate_name: name.to_string(),
        text: String::new(),
        skills: Vec::new(),
        matching_skills: Vec::new(),
        similarity_score: score,
        match_percentage: match_percentage(score),
    }
}

// ============================================================
// cosine_from_weights — numerical edge cases
// ============================================================

#[test]
fn cosine_both_empty() {
    let empty: HashMap<String, f64> = HashMap::new();
    assert_eq!(cosine_from_weights(&empty, &empty), 0.0);
}

#[test]
fn cosine_one_empty_one_nonempty() {
    let empty: HashMap<String, f64> = HashMap::new();
    let nonempty: HashMap<String, f64> = [("python".to_string(), 0.5)].into();
    assert_eq!(cosine_from_weights(&empty, &nonempty), 0.0);
    assert_eq!(cosine_from_weights(&nonempty, &empty), 0.0);
}

#[test]
fn cosine_all_zero_weights() {
    let a: HashMap<String, f64> = [("a".to_string(), 0.0), ("b".to_string(), 0.0)].into();
    let b: HashMap<String, f64> = [("a".to_string(), 0.0)].into();
    // Magnitude is 0 -> denominator < EPSILON -> returns 0.0
    assert_eq!(cosine_from_weights(&a, &b), 0.0);
}

#[test]
fn cosine_single_shared_term_is_one() {
    let a: HashMap<String, f64> = [("python".to_string(), 0.7)].into();
    let b: HashMap<String, f64> = [("python".to_string(), 0.3)].into();
    let result = cosine_from_weights(&a, &b);
    assert!(
        (result - 1.0).abs() < 0.001,
        "Single shared term (same direction) should be ~1.0, got {result}"
    );
}

#[test]
fn cosine_orthogonal_vectors() {
    let a: HashMap<String, f64> = [("python".to_string(), 1.0)].into();
    let b: HashMap<String, f64> = [("design".to_string(), 1.0)].into();
    assert_eq!(cosine_from_weights(&a, &b), 0.0);
}

#[test]
fn cosine_large_sparse_vectors() {
    let mut a: HashMap<String, f64> = HashMap::new();
    let mut b: HashMap<String, f64> = HashMap::new();
    for i in 0..100 {
        a.insert(format!("a_term_{i}"), 0.01);
        b.insert(format!("b_term_{i}"), 0.01);
    }
    a.insert("shared".to_string(), 0.5);
    b.insert("shared".to_string(), 0.5);

    let result = cosine_from_weights(&a, &b);
    assert!(result > 0.0, "Should have some overlap via 'shared'");
    assert!(result < 1.0, "Should not be identical");
}

// ============================================================
// Vectorizer invariants
// ============================================================

#[test]
fn tokenize_empty_and_stop_word_only() {
    assert!(tokenize("").is_empty());
    assert!(tokenize("the of and is a").is_empty());
}

#[test]
fn vectors_align_with_corpus_size() {
    let docs = vec![
        tokenize("python backend services"),
        tokenize("frontend design systems"),
        tokenize("data pipelines warehouse"),
    ];
    assert_eq!(tfidf_vectors(&docs).len(), 3);
}

#[test]
fn repeated_term_weighs_more_than_single() {
    let docs = vec![
        tokenize("python python python testing"),
        tokenize("kafka streams"),
    ];
    let vectors = tfidf_vectors(&docs);
    assert!(
        vectors[0]["python"] > vectors[0]["testing"],
        "Repeated term should carry more weight"
    );
}

// ============================================================
// document_similarity — behavior the ranking depends on
// ============================================================

#[test]
fn more_shared_vocabulary_scores_higher() {
    let jd = "python developer with django and postgresql experience";
    let close = "python developer who knows django and postgresql well";
    let far = "python developer focused on embedded firmware";

    let close_score = document_similarity(jd, close);
    let far_score = document_similarity(jd, far);
    assert!(
        close_score > far_score,
        "Closer resume should score higher: {close_score} vs {far_score}"
    );
}

#[test]
fn stop_words_do_not_create_similarity() {
    let sim = document_similarity(
        "the and of in on at is was",
        "a an but if then else when",
    );
    assert_eq!(sim, 0.0, "Stop-word-only documents should score 0.0");
}

// ============================================================
// skill_overlap + combined score
// ============================================================

#[test]
fn overlap_monotonic_in_matches() {
    let job: Vec<String> = ["a", "b", "c", "d"].iter().map(|s| s.to_string()).collect();
    let mut last = -1.0;
    for take in 0..=4 {
        let resume: Vec<String> = job.iter().take(take).cloned().collect();
        let (_, ratio) = skill_overlap(&job, &resume);
        assert!(ratio > last, "Overlap should rise with each matched skill");
        last = ratio;
    }
}

#[test]
fn score_is_monotonic_in_overlap_for_fixed_cosine() {
    let weights = ScoreWeights::default();
    let lower = combined_score(0.2, 0.5, &weights);
    let higher = combined_score(0.8, 0.5, &weights);
    assert!(higher > lower);
}

#[test]
fn score_stays_in_unit_range() {
    let weights = ScoreWeights::default();
    for overlap in [0.0, 0.5, 1.0] {
        for cosine in [0.0, 0.5, 1.0] {
            let score = combined_score(overlap, cosine, &weights);
            assert!((0.0..=1.0).contains(&score));
        }
    }
}

// ============================================================
// Ranking and shortlist
// ============================================================

#[test]
fn ranking_is_stable_for_equal_scores() {
    let ranked = rank_candidates(vec![
        candidate("first", 0.5),
        candidate("second", 0.5),
        candidate("third", 0.5),
    ]);
    let names: Vec<&str> = ranked.iter().map(|c| c.candidate_name.as_str()).collect();
    assert_eq!(names, vec!["first", "second", "third"]);
}

#[test]
fn shortlist_empty_when_floor_too_high() {
    let ranked = rank_candidates(vec![candidate("a", 0.4), candidate("b", 0.3)]);
    assert!(shortlist(&ranked, 90, 5).is_empty());
}

#[test]
fn shortlist_zero_floor_keeps_everyone() {
    let ranked = rank_candidates(vec![candidate("a", 0.4), candidate("b", 0.0)]);
    assert_eq!(shortlist(&ranked, 0, 5).len(), 2);
}

#[test]
fn band_matches_percentage_boundaries() {
    assert_eq!(candidate("x", 0.75).band(), MatchBand::Strong);
    assert_eq!(candidate("x", 0.50).band(), MatchBand::Moderate);
    assert_eq!(candidate("x", 0.49).band(), MatchBand::Weak);
}
