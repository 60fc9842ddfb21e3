// Text normalization applied before vectorization and skill matching.
//
// Lowercases, replaces everything outside [word chars + whitespace] with
// spaces, and collapses runs of whitespace. Entity extraction deliberately
// does NOT use this — line structure and capitalization carry signal there.

/// Normalize text for skill matching and TF-IDF vectorization.
pub fn preprocess(text: &str) -> String {
    let lowered = text.to_lowercase();
    let cleaned: String = lowered
        .chars()
        .map(|c| {
            if c.is_alphanumeric() || c == '_' {
                c
            } else {
                ' '
            }
        })
        .collect();

    cleaned.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lowercase_and_collapse() {
        assert_eq!(
            preprocess("Senior  Python\n\nDeveloper"),
            "senior python developer"
        );
    }

    #[test]
    fn test_punctuation_becomes_space() {
        assert_eq!(
            preprocess("C#, SQL; node.js (3+ years)"),
            "c sql node js 3 years"
        );
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(preprocess(""), "");
        assert_eq!(preprocess("  \n\t "), "");
    }

    #[test]
    fn test_underscores_survive() {
        assert_eq!(preprocess("snake_case stays"), "snake_case stays");
    }
}
