// Entity extraction — contact details, education, experience heuristics.
//
// Runs over the raw (unpreprocessed) text: line structure and
// capitalization carry signal here. Everything is regex or line
// heuristics; no model involved.

use regex_lite::Regex;
use serde::{Deserialize, Serialize};

/// What kind of thing an extracted entity is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntityKind {
    Person,
    Email,
    Phone,
    Url,
    LinkedIn,
    GitHub,
    Education,
    Organization,
    Experience,
}

impl EntityKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityKind::Person => "PERSON",
            EntityKind::Email => "EMAIL",
            EntityKind::Phone => "PHONE",
            EntityKind::Url => "URL",
            EntityKind::LinkedIn => "LINKEDIN",
            EntityKind::GitHub => "GITHUB",
            EntityKind::Education => "EDUCATION",
            EntityKind::Organization => "ORGANIZATION",
            EntityKind::Experience => "EXPERIENCE",
        }
    }
}

impl std::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// An extracted entity: the matched text and its kind.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Entity {
    pub text: String,
    pub kind: EntityKind,
}

impl Entity {
    fn new(text: impl Into<String>, kind: EntityKind) -> Self {
        Self {
            text: text.into(),
            kind,
        }
    }
}

/// Extract entities from raw resume or job description text.
///
/// Deduplicated on (lowercased text, kind), order of first appearance.
pub fn extract_entities(text: &str) -> Vec<Entity> {
    if text.is_empty() {
        return Vec::new();
    }

    let mut entities = Vec::new();

    if let Some(name) = candidate_name_line(text) {
        entities.push(Entity::new(name, EntityKind::Person));
    }

    let email = Regex::new(r"(?i)\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}\b").unwrap();
    for m in email.find_iter(text) {
        entities.push(Entity::new(m.as_str(), EntityKind::Email));
    }

    // US-style, simple-separator, and bare 10-digit phone formats
    let phone_patterns = [
        r"\b(?:\+\d{1,3}\s?)?\(?\d{3}\)?[\s.-]?\d{3}[\s.-]?\d{4}\b",
        r"\b(?:\+\d{1,3}\s?)?\d{3}[\s.-]?\d{3}[\s.-]?\d{4}\b",
        r"\b(?:\+\d{1,3}\s?)?\d{10}\b",
    ];
    for pattern in phone_patterns {
        let re = Regex::new(pattern).unwrap();
        for m in re.find_iter(text) {
            entities.push(Entity::new(m.as_str().trim(), EntityKind::Phone));
        }
    }

    let url = Regex::new(r"(?i)https?://\S+").unwrap();
    for m in url.find_iter(text) {
        entities.push(Entity::new(m.as_str(), EntityKind::Url));
    }

    let linkedin = Regex::new(r"(?i)linkedin\.com/in/\S+").unwrap();
    for m in linkedin.find_iter(text) {
        entities.push(Entity::new(m.as_str(), EntityKind::LinkedIn));
    }

    let github = Regex::new(r"(?i)github\.com/[^\s/]+").unwrap();
    for m in github.find_iter(text) {
        entities.push(Entity::new(m.as_str(), EntityKind::GitHub));
    }

    let education_patterns = [
        r"(?i)\b(?:Bachelor|Master|PhD|MBA|B\.S\.|M\.S\.|B\.A\.|M\.A\.|B\.Sc\.|M\.Sc\.)[^\n]*",
        r"(?i)\b(?:Certified|Certification)\s+[A-Za-z\s]+",
        r"(?i)\b(?:AWS|Azure|Google|Microsoft|Oracle|Cisco)\s+Certified[^\n]*",
    ];
    for pattern in education_patterns {
        let re = Regex::new(pattern).unwrap();
        for m in re.find_iter(text) {
            entities.push(Entity::new(m.as_str().trim(), EntityKind::Education));
        }
    }

    // Company names: short lines carrying a corporate suffix
    let company_keywords = [
        "inc",
        "corp",
        "ltd",
        "llc",
        "company",
        "corporation",
        "limited",
        "technologies",
        "systems",
        "solutions",
    ];
    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() || line.split_whitespace().count() > 6 {
            continue;
        }
        let lower = line.to_lowercase();
        if company_keywords.iter().any(|kw| lower.contains(kw)) {
            entities.push(Entity::new(line, EntityKind::Organization));
        }
    }

    let experience =
        Regex::new(r"(?i)\b(\d+)\+?\s*(?:years?|yrs?)\s*(?:of\s*)?(?:experience|exp)\b").unwrap();
    for caps in experience.captures_iter(text) {
        if let Some(years) = caps.get(1) {
            entities.push(Entity::new(
                format!("{} years experience", years.as_str()),
                EntityKind::Experience,
            ));
        }
    }

    dedup_entities(entities)
}

/// Heuristic for the candidate's name: the first of the opening lines that
/// is short, digit-free, and not a "Resume"/"CV"-style header.
fn candidate_name_line(text: &str) -> Option<String> {
    let header_words = ["resume", "cv", "curriculum", "profile", "summary"];

    for line in text.lines().take(3) {
        let line = line.trim();
        if line.is_empty()
            || line.split_whitespace().count() > 4
            || line.chars().any(|c| c.is_ascii_digit())
        {
            continue;
        }
        let lower = line.to_lowercase();
        if header_words.iter().any(|w| lower.contains(w)) {
            continue;
        }
        return Some(line.to_string());
    }
    None
}

fn dedup_entities(entities: Vec<Entity>) -> Vec<Entity> {
    let mut seen = std::collections::HashSet::new();
    entities
        .into_iter()
        .filter(|e| seen.insert((e.text.to_lowercase(), e.kind)))
        .collect()
}
