// TF-IDF document vectors.
//
// Each document becomes a sparse term→weight map over the corpus
// vocabulary: term frequency scaled by smoothed inverse document
// frequency, L2-normalized. Sparse maps keep the vocabulary implicit —
// cosine runs over the union of keys.

use std::collections::{HashMap, HashSet};

use stop_words::{get, LANGUAGE};

/// Tokenize normalized text: whitespace split, English stop words and
/// single-character tokens dropped.
pub fn tokenize(text: &str) -> Vec<String> {
    let stop: HashSet<String> = get(LANGUAGE::English).into_iter().collect();

    text.split_whitespace()
        .filter(|t| t.chars().count() > 1)
        .filter(|t| !stop.contains(*t))
        .map(str::to_string)
        .collect()
}

/// Build one TF-IDF weight map per document over the shared corpus.
///
/// IDF is smoothed (ln((1+n)/(1+df)) + 1) so terms present in every
/// document keep a nonzero weight, and each vector is L2-normalized.
/// A tokenless document yields an empty map.
pub fn tfidf_vectors(docs: &[Vec<String>]) -> Vec<HashMap<String, f64>> {
    let n = docs.len() as f64;

    // Document frequency per term
    let mut df: HashMap<&str, f64> = HashMap::new();
    for doc in docs {
        let unique: HashSet<&str> = doc.iter().map(String::as_str).collect();
        for term in unique {
            *df.entry(term).or_insert(0.0) += 1.0;
        }
    }

    docs.iter()
        .map(|doc| {
            if doc.is_empty() {
                return HashMap::new();
            }

            let mut counts: HashMap<&str, f64> = HashMap::new();
            for term in doc {
                *counts.entry(term.as_str()).or_insert(0.0) += 1.0;
            }

            let doc_len = doc.len() as f64;
            let mut weights: HashMap<String, f64> = counts
                .into_iter()
                .map(|(term, count)| {
                    let idf = ((1.0 + n) / (1.0 + df[term])).ln() + 1.0;
                    (term.to_string(), (count / doc_len) * idf)
                })
                .collect();

            let norm = weights.values().map(|w| w * w).sum::<f64>().sqrt();
            if norm > f64::EPSILON {
                for w in weights.values_mut() {
                    *w /= norm;
                }
            }

            weights
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_drops_stop_words() {
        let tokens = tokenize("the quick brown fox is in the barn");
        assert!(tokens.contains(&"quick".to_string()));
        assert!(tokens.contains(&"fox".to_string()));
        assert!(!tokens.contains(&"the".to_string()));
        assert!(!tokens.contains(&"is".to_string()));
    }

    #[test]
    fn test_tokenize_drops_single_chars() {
        let tokens = tokenize("c is a x language");
        assert!(!tokens.contains(&"c".to_string()));
        assert!(!tokens.contains(&"x".to_string()));
        assert!(tokens.contains(&"language".to_string()));
    }

    #[test]
    fn test_vectors_are_normalized() {
        let docs = vec![
            tokenize("python developer django backend"),
            tokenize("python engineer flask backend"),
        ];
        for vector in tfidf_vectors(&docs) {
            let norm: f64 = vector.values().map(|w| w * w).sum::<f64>().sqrt();
            assert!(
                (norm - 1.0).abs() < 1e-9,
                "Vector should be L2-normalized, norm is {norm}"
            );
        }
    }

    #[test]
    fn test_distinctive_terms_outweigh_shared() {
        let docs = vec![
            tokenize("backend backend python"),
            tokenize("backend backend rust"),
        ];
        let vectors = tfidf_vectors(&docs);
        // "python" appears in one doc, "backend" in both — per-occurrence,
        // the distinctive term must carry more weight
        let python = vectors[0]["python"];
        let backend_per_occurrence = vectors[0]["backend"] / 2.0;
        assert!(
            python > backend_per_occurrence,
            "Distinctive term should outweigh shared term: {python} vs {backend_per_occurrence}"
        );
    }

    #[test]
    fn test_empty_document_yields_empty_map() {
        let docs = vec![tokenize("python developer"), Vec::new()];
        let vectors = tfidf_vectors(&docs);
        assert!(!vectors[0].is_empty());
        assert!(vectors[1].is_empty());
    }

    #[test]
    fn test_empty_corpus() {
        assert!(tfidf_vectors(&[]).is_empty());
    }
}
