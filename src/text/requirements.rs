// Job requirement extraction — structured view of a job description.
//
// Splits the description into sentences and routes the skills found in
// each one into required or preferred buckets based on indicator phrases.
// Unmarked sentences default to required. Experience, education,
// certification, and job-type signals come from dedicated patterns.

use std::collections::HashSet;

use regex_lite::Regex;
use serde::{Deserialize, Serialize};

use super::skills::SkillLexicon;

/// Categorized requirements extracted from a job description.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct JobRequirements {
    pub required_skills: Vec<String>,
    pub preferred_skills: Vec<String>,
    pub experience_years: Vec<String>,
    pub education: Vec<String>,
    pub certifications: Vec<String>,
    pub job_type: Vec<String>,
}

impl JobRequirements {
    pub fn is_empty(&self) -> bool {
        self.required_skills.is_empty()
            && self.preferred_skills.is_empty()
            && self.experience_years.is_empty()
            && self.education.is_empty()
            && self.certifications.is_empty()
            && self.job_type.is_empty()
    }
}

const REQUIRED_INDICATORS: &[&str] = &[
    "required",
    "must have",
    "essential",
    "mandatory",
    "minimum",
    "should have",
];

const PREFERRED_INDICATORS: &[&str] = &[
    "preferred",
    "nice to have",
    "bonus",
    "plus",
    "desired",
    "would be great",
];

const JOB_TYPE_KEYWORDS: &[&str] = &[
    "full-time",
    "part-time",
    "contract",
    "remote",
    "on-site",
    "hybrid",
    "freelance",
    "temporary",
    "permanent",
];

/// Extract structured requirements from raw job description text.
pub fn extract_requirements(text: &str, lexicon: &SkillLexicon) -> JobRequirements {
    if text.is_empty() {
        return JobRequirements::default();
    }

    let lower = text.to_lowercase();
    let mut requirements = JobRequirements::default();

    let experience_patterns = [
        r"(\d+)\+?\s*(?:years?|yrs?)\s*(?:of\s*)?(?:experience|exp)",
        r"minimum\s*(?:of\s*)?(\d+)\s*(?:years?|yrs?)",
        r"at\s*least\s*(\d+)\s*(?:years?|yrs?)",
    ];
    for pattern in experience_patterns {
        let re = Regex::new(pattern).unwrap();
        for caps in re.captures_iter(&lower) {
            if let Some(years) = caps.get(1) {
                requirements
                    .experience_years
                    .push(format!("{} years", years.as_str()));
            }
        }
    }

    let education_keywords = [
        ("bachelor'?s?\\s*(?:degree)?", "bachelor's degree"),
        ("master'?s?\\s*(?:degree)?", "master's degree"),
        ("phd", "phd"),
        ("doctorate", "doctorate"),
        (r"b\.s\.?", "b.s."),
        (r"b\.a\.?", "b.a."),
        (r"m\.s\.?", "m.s."),
        (r"m\.a\.?", "m.a."),
        ("mba", "mba"),
    ];
    for (pattern, label) in education_keywords {
        let re = Regex::new(&format!(r"\b(?:{pattern})")).unwrap();
        if re.is_match(&lower) {
            requirements.education.push(label.to_string());
        }
    }

    let cert_patterns = [
        r"(?:aws|azure|google|microsoft|oracle|cisco)\s+certified[^\n.]*",
        r"certified\s+[a-z\s]+(?:professional|associate|expert)",
        r"certification\s+in\s+[a-z\s]+",
    ];
    for pattern in cert_patterns {
        let re = Regex::new(pattern).unwrap();
        for m in re.find_iter(&lower) {
            requirements.certifications.push(m.as_str().trim().to_string());
        }
    }

    for keyword in JOB_TYPE_KEYWORDS {
        if lower.contains(keyword) {
            requirements.job_type.push(keyword.to_string());
        }
    }

    // Route skills sentence by sentence based on indicator phrases
    for sentence in text.split(['.', '!', '?']) {
        let sentence_lower = sentence.to_lowercase();
        let sentence_lower = sentence_lower.trim();
        if sentence_lower.is_empty() {
            continue;
        }

        let is_required = REQUIRED_INDICATORS.iter().any(|i| sentence_lower.contains(i));
        let is_preferred = PREFERRED_INDICATORS
            .iter()
            .any(|i| sentence_lower.contains(i));

        let sentence_skills = lexicon.extract(sentence_lower);
        if is_preferred && !is_required {
            requirements.preferred_skills.extend(sentence_skills);
        } else {
            requirements.required_skills.extend(sentence_skills);
        }
    }

    requirements.required_skills = dedup(requirements.required_skills);
    requirements.preferred_skills = dedup(requirements.preferred_skills);
    requirements.experience_years = dedup(requirements.experience_years);
    requirements.education = dedup(requirements.education);
    requirements.certifications = dedup(requirements.certifications);
    requirements.job_type = dedup(requirements.job_type);

    requirements
}

fn dedup(items: Vec<String>) -> Vec<String> {
    let mut seen = HashSet::new();
    items
        .into_iter()
        .filter(|item| seen.insert(item.to_lowercase()))
        .collect()
}
