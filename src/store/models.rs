// Store records — serde structs that map to the JSON array entries.
//
// These are the types that flow through the application. They're separate
// from the file handling so other modules can use them without touching
// the store itself.

use serde::{Deserialize, Serialize};

/// A saved job description.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobRecord {
    pub id: u64,
    pub description: String,
    pub skills: Vec<String>,
    pub created_at: String,
}

/// A saved resume with its extracted text and skills.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResumeRecord {
    pub id: u64,
    pub filename: String,
    pub candidate_name: String,
    pub text: String,
    pub skills: Vec<String>,
    pub created_at: String,
}

/// A saved analysis result linking a job and a resume by id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisRecord {
    pub id: u64,
    pub job_id: u64,
    pub resume_id: u64,
    pub similarity_score: f64,
    pub matching_skills: Vec<String>,
    pub created_at: String,
}

/// Joined view of an analysis with its job and resume resolved.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisView {
    pub id: u64,
    pub description: String,
    pub candidate_name: String,
    pub filename: String,
    pub skills: Vec<String>,
    pub similarity_score: f64,
    pub matching_skills: Vec<String>,
    pub created_at: String,
}

impl AnalysisView {
    pub fn match_percentage(&self) -> u32 {
        (self.similarity_score * 100.0) as u32
    }
}

/// Sort orders for the resume browser.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResumeSort {
    Newest,
    Oldest,
    NameAsc,
    NameDesc,
}
