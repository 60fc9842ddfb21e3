// Skill extraction — lexicon-driven matching over normalized text.
//
// The lexicon has two layers: regex patterns grouped by category and
// matched on word boundaries, plus flat term lists (tooling, platforms,
// soft skills) matched by substring. The pattern table can be replaced by
// a JSON file ({"category": ["pattern", ...]}); the built-in table is the
// fallback when no file is configured or the file fails to parse.

use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::Path;

use regex_lite::Regex;
use tracing::warn;

/// Built-in skill patterns by category. Patterns are regex fragments
/// wrapped in word boundaries at compile time.
const BUILTIN_PATTERNS: &[(&str, &[&str])] = &[
    (
        "programming",
        &[
            "python",
            "java",
            "javascript",
            r"c\+\+",
            "typescript",
            "php",
            "ruby",
        ],
    ),
    (
        "web",
        &[
            "html",
            "css",
            "react",
            "angular",
            "vue",
            r"node\.?js",
            "express",
            "django",
            "flask",
        ],
    ),
    (
        "data_science",
        &[
            "machine learning",
            "deep learning",
            "pandas",
            "numpy",
            "sklearn",
            "tensorflow",
            "pytorch",
        ],
    ),
    (
        "database",
        &["sql", "mysql", "postgresql", "mongodb", "redis", "oracle"],
    ),
    (
        "devops",
        &[
            "docker",
            "kubernetes",
            "aws",
            "azure",
            "gcp",
            "jenkins",
            "ci/cd",
            "terraform",
        ],
    ),
];

/// Tooling, platform, and methodology terms matched by plain substring.
const ADDITIONAL_SKILLS: &[&str] = &[
    "c#",
    "scala",
    "golang",
    "rust",
    "swift",
    "kotlin",
    "matlab",
    "sas",
    "stata",
    "git",
    "github",
    "gitlab",
    "bitbucket",
    "jira",
    "confluence",
    "slack",
    "trello",
    "ansible",
    "puppet",
    "chef",
    "vagrant",
    "nginx",
    "apache",
    "elasticsearch",
    "cassandra",
    "firebase",
    "dynamodb",
    "sqlite",
    "redshift",
    "snowflake",
    "tableau",
    "power bi",
    "excel",
    "powerpoint",
    "outlook",
    "linux",
    "windows",
    "macos",
    "ubuntu",
    "agile",
    "scrum",
    "kanban",
    "waterfall",
    "rest",
    "graphql",
    "soap",
    "json",
    "xml",
    "yaml",
    "oauth",
    "jwt",
    "saml",
    "microservices",
    "serverless",
    "big data",
    "data mining",
    "data analysis",
    "data visualization",
    "nlp",
    "computer vision",
    "neural networks",
    "reinforcement learning",
    "statistics",
    "analytics",
    "reporting",
    "hadoop",
    "spark",
    "kafka",
    "airflow",
    "etl",
    "data warehouse",
    "business intelligence",
];

/// Soft skills and general workplace terms, also substring matched.
const SOFT_SKILLS: &[&str] = &[
    "communication",
    "teamwork",
    "leadership",
    "problem solving",
    "critical thinking",
    "time management",
    "adaptability",
    "creativity",
    "emotional intelligence",
    "negotiation",
    "conflict resolution",
    "decision making",
    "stress management",
    "flexibility",
    "patience",
    "empathy",
    "self-motivation",
    "reliability",
    "work ethic",
    "attention to detail",
    "organization",
    "interpersonal",
    "presentation",
    "mentoring",
    "coaching",
    "collaboration",
    "project management",
    "client management",
    "stakeholder management",
    "customer service",
];

/// A single compiled lexicon entry. Patterns that fail to compile fall
/// back to plain substring matching on the de-escaped pattern text.
enum LexiconPattern {
    Regex(Regex),
    Literal(String),
}

/// The skill lexicon: compiled category patterns plus flat term lists.
pub struct SkillLexicon {
    patterns: Vec<LexiconPattern>,
    terms: Vec<String>,
}

impl SkillLexicon {
    /// Build the lexicon from the built-in pattern table.
    pub fn builtin() -> Self {
        let raw: Vec<String> = BUILTIN_PATTERNS
            .iter()
            .flat_map(|(_, patterns)| patterns.iter().map(|p| p.to_string()))
            .collect();
        Self::from_patterns(&raw)
    }

    /// Build the lexicon, preferring a user-supplied pattern file.
    ///
    /// The file maps category names to pattern lists. Any read or parse
    /// failure falls back to the built-in table with a warning — a broken
    /// lexicon file should never make `analyze` unusable.
    pub fn load(skill_file: Option<&Path>) -> Self {
        let Some(path) = skill_file else {
            return Self::builtin();
        };

        let parsed = fs::read_to_string(path)
            .map_err(anyhow::Error::from)
            .and_then(|raw| {
                serde_json::from_str::<HashMap<String, Vec<String>>>(&raw)
                    .map_err(anyhow::Error::from)
            });

        match parsed {
            Ok(table) => {
                let raw: Vec<String> = table.into_values().flatten().collect();
                Self::from_patterns(&raw)
            }
            Err(e) => {
                warn!(path = %path.display(), error = %e, "Skill file unusable, using built-in lexicon");
                Self::builtin()
            }
        }
    }

    fn from_patterns(raw: &[String]) -> Self {
        let patterns = raw
            .iter()
            .map(|pattern| match Regex::new(&format!(r"(?i)\b(?:{pattern})\b")) {
                Ok(re) => LexiconPattern::Regex(re),
                Err(_) => LexiconPattern::Literal(pattern.replace('\\', "").to_lowercase()),
            })
            .collect();

        let terms = ADDITIONAL_SKILLS
            .iter()
            .chain(SOFT_SKILLS.iter())
            .map(|t| t.to_string())
            .collect();

        Self { patterns, terms }
    }

    /// Extract skills from text (expected lowercase — see `preprocess`).
    ///
    /// Results keep the order of first appearance, deduplicated
    /// case-insensitively; single-character matches are dropped.
    pub fn extract(&self, text: &str) -> Vec<String> {
        if text.is_empty() {
            return Vec::new();
        }

        let lower = text.to_lowercase();
        let mut matched: Vec<String> = Vec::new();

        for pattern in &self.patterns {
            match pattern {
                LexiconPattern::Regex(re) => {
                    for m in re.find_iter(&lower) {
                        let cleaned = clean_match(m.as_str());
                        if !cleaned.is_empty() {
                            matched.push(cleaned);
                        }
                    }
                }
                LexiconPattern::Literal(term) => {
                    if lower.contains(term.as_str()) {
                        matched.push(term.clone());
                    }
                }
            }
        }

        for term in &self.terms {
            if lower.contains(term.as_str()) {
                matched.push(term.clone());
            }
        }

        let mut seen = HashSet::new();
        matched
            .into_iter()
            .filter(|skill| {
                let normalized = skill.to_lowercase();
                normalized.chars().count() > 1 && seen.insert(normalized)
            })
            .collect()
    }
}

/// Strip characters that aren't word chars, whitespace, or +/-/. from a
/// matched skill, then trim.
fn clean_match(skill: &str) -> String {
    skill
        .chars()
        .filter(|c| c.is_alphanumeric() || c.is_whitespace() || matches!(c, '_' | '+' | '-' | '.'))
        .collect::<String>()
        .trim()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_basic_skills() {
        let lexicon = SkillLexicon::builtin();
        let skills =
            lexicon.extract("experienced python developer with django and postgresql knowledge");
        assert!(skills.iter().any(|s| s == "python"));
        assert!(skills.iter().any(|s| s == "django"));
        assert!(skills.iter().any(|s| s == "postgresql"));
    }

    #[test]
    fn test_no_duplicates() {
        let lexicon = SkillLexicon::builtin();
        let skills = lexicon.extract("python python python");
        let count = skills.iter().filter(|s| s.as_str() == "python").count();
        assert_eq!(count, 1);
    }

    #[test]
    fn test_word_boundaries_respected() {
        let lexicon = SkillLexicon::builtin();
        // "javascript" must not also produce a "java" match at the same spot
        let skills = lexicon.extract("javascript specialist");
        assert!(skills.iter().any(|s| s == "javascript"));
        assert!(!skills.iter().any(|s| s == "java"));
    }

    #[test]
    fn test_multiword_and_soft_skills() {
        let lexicon = SkillLexicon::builtin();
        let skills = lexicon.extract("machine learning engineer valuing teamwork and leadership");
        assert!(skills.iter().any(|s| s == "machine learning"));
        assert!(skills.iter().any(|s| s == "teamwork"));
        assert!(skills.iter().any(|s| s == "leadership"));
    }

    #[test]
    fn test_empty_text() {
        let lexicon = SkillLexicon::builtin();
        assert!(lexicon.extract("").is_empty());
    }

    #[test]
    fn test_missing_skill_file_falls_back() {
        let lexicon = SkillLexicon::load(Some(Path::new("/nonexistent/skills.json")));
        let skills = lexicon.extract("python and docker");
        assert!(skills.iter().any(|s| s == "python"));
        assert!(skills.iter().any(|s| s == "docker"));
    }
}
