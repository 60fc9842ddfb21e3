// Assistant context — what the assistant knows about the current analysis.
//
// Composed from the most recent analysis in the store: the ranked
// candidates and the job's skills. Both parts can be toggled off, which
// keeps a lid on how much resume content leaves the machine when the
// remote backend is in use.

use crate::store::models::AnalysisView;
use crate::store::JsonStore;

use anyhow::Result;

/// A candidate as the assistant sees it.
#[derive(Debug, Clone)]
pub struct CandidateSummary {
    pub filename: String,
    pub match_percentage: u32,
    pub skills: Vec<String>,
    pub matching_skills: Vec<String>,
}

impl From<&AnalysisView> for CandidateSummary {
    fn from(view: &AnalysisView) -> Self {
        Self {
            filename: view.filename.clone(),
            match_percentage: view.match_percentage(),
            skills: view.skills.clone(),
            matching_skills: view.matching_skills.clone(),
        }
    }
}

/// The assistant's working context.
#[derive(Debug, Clone, Default)]
pub struct AssistantContext {
    /// Ranked candidates from the most recent analysis, best first
    pub candidates: Vec<CandidateSummary>,
    pub job_skills: Vec<String>,
    pub include_summary: bool,
    pub include_job_skills: bool,
}

impl AssistantContext {
    /// Build the context from the most recent analysis in the store.
    /// An empty store produces an empty context — the assistant still
    /// answers, it just has nothing to cite.
    pub fn from_store(
        store: &JsonStore,
        include_summary: bool,
        include_job_skills: bool,
    ) -> Result<Self> {
        let (candidates, job_skills) = match store.latest_job_analyses()? {
            Some((job, views)) => {
                let summaries = views.iter().map(CandidateSummary::from).collect();
                (summaries, job.skills)
            }
            None => (Vec::new(), Vec::new()),
        };

        Ok(Self {
            candidates,
            job_skills,
            include_summary,
            include_job_skills,
        })
    }

    /// Render the context block that precedes the question in the remote
    /// prompt.
    pub fn render(&self, question: &str) -> String {
        let mut parts = vec!["You are an assistant helping shortlist resumes.".to_string()];

        if self.include_summary && !self.candidates.is_empty() {
            parts.push("The following are the top candidates:".to_string());
            for (i, c) in self.candidates.iter().enumerate() {
                parts.push(format!(
                    "Candidate {}: {} (Match: {}%), Skills: {}",
                    i + 1,
                    c.filename,
                    c.match_percentage,
                    c.skills.join(", ")
                ));
            }
        }

        if self.include_job_skills && !self.job_skills.is_empty() {
            parts.push(format!(
                "Job skills required: {}.",
                self.job_skills.join(", ")
            ));
        }

        parts.push(format!("User question: {question}"));
        parts.join("\n")
    }
}
