// Ranking — TF-IDF vectorization, similarity measures, combined scoring.

pub mod score;
pub mod similarity;
pub mod vectorize;
