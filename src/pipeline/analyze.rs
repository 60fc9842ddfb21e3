// The analyze pipeline: job description in, ranked candidates out.
//
// Per-file failures are reported and skipped; the run only fails when no
// resume could be processed at all. Store failures degrade the same way —
// an analysis you can't save is still worth showing.

use std::path::{Path, PathBuf};

use anyhow::Result;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{error, warn};

use crate::extract;
use crate::ranking::score::{
    combined_score, match_percentage, rank_candidates, Candidate, ScoreWeights,
};
use crate::ranking::similarity::{document_similarity, skill_overlap};
use crate::store::JsonStore;
use crate::text::entities::{extract_entities, EntityKind};
use crate::text::keywords::job_key_terms;
use crate::text::preprocess::preprocess;
use crate::text::requirements::{extract_requirements, JobRequirements};
use crate::text::skills::SkillLexicon;

/// Everything the analyze command needs to display and the assistant
/// needs to answer questions later.
#[derive(Debug)]
pub struct AnalyzeOutcome {
    pub job_skills: Vec<String>,
    pub requirements: JobRequirements,
    pub key_terms: Vec<(String, f32)>,
    /// All processed candidates, best match first
    pub ranked: Vec<Candidate>,
    pub processed: usize,
    pub skipped: usize,
}

/// Run the full analysis: job description against a set of resume files.
pub fn run(
    store: &JsonStore,
    lexicon: &SkillLexicon,
    weights: &ScoreWeights,
    description: &str,
    resume_paths: &[PathBuf],
) -> Result<AnalyzeOutcome> {
    let preprocessed_jd = preprocess(description);
    let job_skills = lexicon.extract(&preprocessed_jd);
    let requirements = extract_requirements(description, lexicon);
    let key_terms = job_key_terms(description, 12);

    // A failed save costs history, not the analysis itself
    let job_id = match store.save_job(description, &job_skills) {
        Ok(id) => Some(id),
        Err(e) => {
            error!(error = %e, "Failed to save job description");
            None
        }
    };

    let pb = ProgressBar::new(resume_paths.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("  Analyzing [{bar:30}] {pos}/{len}")
            .unwrap(),
    );

    let mut candidates = Vec::new();
    let mut skipped = 0;

    for path in resume_paths {
        if extract::FileKind::from_path(path).is_none() {
            warn!(path = %path.display(), "Skipping unsupported file type");
            pb.println(format!(
                "  {} {} (unsupported file type)",
                "Skipped:".yellow(),
                path.display()
            ));
            skipped += 1;
            pb.inc(1);
            continue;
        }

        match process_resume(path, lexicon, weights, &preprocessed_jd, &job_skills) {
            Ok(candidate) => {
                if let Some(job_id) = job_id {
                    save_candidate(store, job_id, &candidate);
                }
                candidates.push(candidate);
            }
            Err(e) => {
                pb.println(format!(
                    "  {} {}: {e:#}",
                    "Error processing".red(),
                    path.display()
                ));
                skipped += 1;
            }
        }
        pb.inc(1);
    }
    pb.finish_and_clear();

    if candidates.is_empty() {
        anyhow::bail!("No resumes were successfully processed. Check the files and try again.");
    }

    let processed = candidates.len();
    let ranked = rank_candidates(candidates);

    Ok(AnalyzeOutcome {
        job_skills,
        requirements,
        key_terms,
        ranked,
        processed,
        skipped,
    })
}

/// Extract, analyze, and score a single resume file.
fn process_resume(
    path: &Path,
    lexicon: &SkillLexicon,
    weights: &ScoreWeights,
    preprocessed_jd: &str,
    job_skills: &[String],
) -> Result<Candidate> {
    let raw = extract::extract_text(path)?;
    let preprocessed = preprocess(&raw);
    let skills = lexicon.extract(&preprocessed);
    let entities = extract_entities(&raw);

    let cosine = document_similarity(preprocessed_jd, &preprocessed);
    let (matching_skills, skill_ratio) = skill_overlap(job_skills, &skills);
    let score = combined_score(skill_ratio, cosine, weights);

    // First PERSON entity, else the file stem
    let candidate_name = entities
        .iter()
        .find(|e| e.kind == EntityKind::Person)
        .map(|e| e.text.clone())
        .unwrap_or_else(|| {
            path.file_stem()
                .map(|s| s.to_string_lossy().into_owned())
                .unwrap_or_else(|| path.display().to_string())
        });

    let filename = path
        .file_name()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());

    Ok(Candidate {
        filename,
        candidate_name,
        text: raw,
        skills,
        matching_skills,
        similarity_score: score,
        match_percentage: match_percentage(score),
    })
}

/// Persist a processed candidate. Failures are logged, never fatal.
fn save_candidate(store: &JsonStore, job_id: u64, candidate: &Candidate) {
    let resume_id = match store.save_resume(
        &candidate.filename,
        &candidate.candidate_name,
        &candidate.text,
        &candidate.skills,
    ) {
        Ok(id) => id,
        Err(e) => {
            error!(error = %e, filename = %candidate.filename, "Failed to save resume");
            return;
        }
    };

    if let Err(e) = store.save_analysis(
        job_id,
        resume_id,
        candidate.similarity_score,
        &candidate.matching_skills,
    ) {
        error!(error = %e, filename = %candidate.filename, "Failed to save analysis result");
    }
}
