// JSON-file store — flat arrays on disk, one file per record type.
//
// Every write is a read-modify-write of the whole array: the data sets
// are sized for a single screening session, not a database workload.
// IDs are max+1, so deleting the files resets the sequence.

pub mod models;

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::info;

use self::models::{AnalysisRecord, AnalysisView, JobRecord, ResumeRecord, ResumeSort};

pub const JOBS_FILE: &str = "job_descriptions.json";
pub const RESUMES_FILE: &str = "resumes.json";
pub const ANALYSES_FILE: &str = "analysis_results.json";

#[derive(Debug)]
pub struct JsonStore {
    data_dir: PathBuf,
}

impl JsonStore {
    /// Create the data directory and seed empty arrays for any missing
    /// file. Safe to call repeatedly — existing data is left alone.
    pub fn initialize(data_dir: &Path) -> Result<Self> {
        fs::create_dir_all(data_dir)
            .with_context(|| format!("Failed to create data directory: {}", data_dir.display()))?;

        let store = Self {
            data_dir: data_dir.to_path_buf(),
        };
        for file in [JOBS_FILE, RESUMES_FILE, ANALYSES_FILE] {
            let path = store.path(file);
            if !path.exists() {
                fs::write(&path, "[]")
                    .with_context(|| format!("Failed to seed {}", path.display()))?;
            }
        }
        Ok(store)
    }

    /// Open an existing store (fails if it hasn't been initialized).
    pub fn open(data_dir: &Path) -> Result<Self> {
        if !data_dir.join(JOBS_FILE).exists() {
            anyhow::bail!(
                "No store found at {}. Run `shortlist init` first.",
                data_dir.display()
            );
        }
        Ok(Self {
            data_dir: data_dir.to_path_buf(),
        })
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    fn path(&self, file: &str) -> PathBuf {
        self.data_dir.join(file)
    }

    fn read_array<T: DeserializeOwned>(&self, file: &str) -> Result<Vec<T>> {
        let path = self.path(file);
        let raw = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        serde_json::from_str(&raw).with_context(|| format!("Malformed JSON in {}", path.display()))
    }

    fn write_array<T: Serialize>(&self, file: &str, records: &[T]) -> Result<()> {
        let path = self.path(file);
        let json = serde_json::to_string_pretty(records)?;
        fs::write(&path, json).with_context(|| format!("Failed to write {}", path.display()))
    }

    /// Save a job description, returning its assigned id.
    pub fn save_job(&self, description: &str, skills: &[String]) -> Result<u64> {
        let mut jobs: Vec<JobRecord> = self.read_array(JOBS_FILE)?;
        let id = next_id(jobs.iter().map(|j| j.id));
        jobs.push(JobRecord {
            id,
            description: description.to_string(),
            skills: skills.to_vec(),
            created_at: now(),
        });
        self.write_array(JOBS_FILE, &jobs)?;
        info!(id, "Job description saved");
        Ok(id)
    }

    /// Save a resume, returning its assigned id.
    pub fn save_resume(
        &self,
        filename: &str,
        candidate_name: &str,
        text: &str,
        skills: &[String],
    ) -> Result<u64> {
        let mut resumes: Vec<ResumeRecord> = self.read_array(RESUMES_FILE)?;
        let id = next_id(resumes.iter().map(|r| r.id));
        resumes.push(ResumeRecord {
            id,
            filename: filename.to_string(),
            candidate_name: candidate_name.to_string(),
            text: text.to_string(),
            skills: skills.to_vec(),
            created_at: now(),
        });
        self.write_array(RESUMES_FILE, &resumes)?;
        info!(id, "Resume saved");
        Ok(id)
    }

    /// Save an analysis result, returning its assigned id.
    pub fn save_analysis(
        &self,
        job_id: u64,
        resume_id: u64,
        similarity_score: f64,
        matching_skills: &[String],
    ) -> Result<u64> {
        let mut analyses: Vec<AnalysisRecord> = self.read_array(ANALYSES_FILE)?;
        let id = next_id(analyses.iter().map(|a| a.id));
        analyses.push(AnalysisRecord {
            id,
            job_id,
            resume_id,
            similarity_score,
            matching_skills: matching_skills.to_vec(),
            created_at: now(),
        });
        self.write_array(ANALYSES_FILE, &analyses)?;
        info!(id, "Analysis result saved");
        Ok(id)
    }

    /// All stored resumes, file order.
    pub fn resumes(&self) -> Result<Vec<ResumeRecord>> {
        self.read_array(RESUMES_FILE)
    }

    /// One stored resume by id.
    pub fn resume(&self, id: u64) -> Result<Option<ResumeRecord>> {
        Ok(self.resumes()?.into_iter().find(|r| r.id == id))
    }

    /// Search and sort stored resumes for the browser view.
    ///
    /// The search term matches candidate name, filename, skills, and the
    /// first 500 chars of the text, case-insensitively.
    pub fn search_resumes(&self, term: Option<&str>, sort: ResumeSort) -> Result<Vec<ResumeRecord>> {
        let mut resumes = self.resumes()?;

        if let Some(term) = term {
            let needle = term.to_lowercase();
            resumes.retain(|r| {
                let haystack = format!(
                    "{} {} {} {}",
                    r.candidate_name.to_lowercase(),
                    r.filename.to_lowercase(),
                    r.skills.join(" ").to_lowercase(),
                    r.text.chars().take(500).collect::<String>().to_lowercase(),
                );
                haystack.contains(&needle)
            });
        }

        match sort {
            ResumeSort::Newest => resumes.sort_by(|a, b| b.created_at.cmp(&a.created_at)),
            ResumeSort::Oldest => resumes.sort_by(|a, b| a.created_at.cmp(&b.created_at)),
            ResumeSort::NameAsc => resumes.sort_by(|a, b| {
                a.candidate_name
                    .to_lowercase()
                    .cmp(&b.candidate_name.to_lowercase())
            }),
            ResumeSort::NameDesc => resumes.sort_by(|a, b| {
                b.candidate_name
                    .to_lowercase()
                    .cmp(&a.candidate_name.to_lowercase())
            }),
        }

        Ok(resumes)
    }

    /// Joined analyses, newest first, up to `limit`.
    /// Analyses with a dangling job or resume reference are dropped.
    pub fn recent_analyses(&self, limit: usize) -> Result<Vec<AnalysisView>> {
        let analyses: Vec<AnalysisRecord> = self.read_array(ANALYSES_FILE)?;
        let jobs: HashMap<u64, JobRecord> = self
            .read_array::<JobRecord>(JOBS_FILE)?
            .into_iter()
            .map(|j| (j.id, j))
            .collect();
        let resumes: HashMap<u64, ResumeRecord> = self
            .resumes()?
            .into_iter()
            .map(|r| (r.id, r))
            .collect();

        let mut views: Vec<AnalysisView> = analyses
            .into_iter()
            .filter_map(|a| {
                let job = jobs.get(&a.job_id)?;
                let resume = resumes.get(&a.resume_id)?;
                Some(AnalysisView {
                    id: a.id,
                    description: job.description.clone(),
                    candidate_name: resume.candidate_name.clone(),
                    filename: resume.filename.clone(),
                    skills: resume.skills.clone(),
                    similarity_score: a.similarity_score,
                    matching_skills: a.matching_skills,
                    created_at: a.created_at,
                })
            })
            .collect();

        views.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        views.truncate(limit);
        Ok(views)
    }

    /// The most recent job description with its analyses, best match
    /// first. This is the assistant's context: "the current analysis".
    pub fn latest_job_analyses(&self) -> Result<Option<(JobRecord, Vec<AnalysisView>)>> {
        let jobs: Vec<JobRecord> = self.read_array(JOBS_FILE)?;
        let Some(job) = jobs.into_iter().max_by_key(|j| j.id) else {
            return Ok(None);
        };

        let resumes: HashMap<u64, ResumeRecord> = self
            .resumes()?
            .into_iter()
            .map(|r| (r.id, r))
            .collect();

        let mut views: Vec<AnalysisView> = self
            .read_array::<AnalysisRecord>(ANALYSES_FILE)?
            .into_iter()
            .filter(|a| a.job_id == job.id)
            .filter_map(|a| {
                let resume = resumes.get(&a.resume_id)?;
                Some(AnalysisView {
                    id: a.id,
                    description: job.description.clone(),
                    candidate_name: resume.candidate_name.clone(),
                    filename: resume.filename.clone(),
                    skills: resume.skills.clone(),
                    similarity_score: a.similarity_score,
                    matching_skills: a.matching_skills,
                    created_at: a.created_at,
                })
            })
            .collect();

        views.sort_by(|a, b| {
            b.similarity_score
                .partial_cmp(&a.similarity_score)
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        Ok(Some((job, views)))
    }
}

fn next_id(ids: impl Iterator<Item = u64>) -> u64 {
    ids.max().map_or(1, |max| max + 1)
}

fn now() -> String {
    chrono::Local::now().to_rfc3339()
}
