// System status display — store location, record counts, last analysis.

use anyhow::Result;

use crate::config::Config;
use crate::store::{JsonStore, ANALYSES_FILE, JOBS_FILE, RESUMES_FILE};

/// Display system status to the terminal.
pub fn show(config: &Config) -> Result<()> {
    let data_dir = &config.data_dir;
    if !data_dir.join(JOBS_FILE).exists() {
        println!("Store: not initialized");
        println!("\nRun `shortlist init` to set up the data directory.");
        return Ok(());
    }

    println!("Store: {}", data_dir.display());
    for file in [JOBS_FILE, RESUMES_FILE, ANALYSES_FILE] {
        let path = data_dir.join(file);
        let size = std::fs::metadata(&path)
            .map(|m| format_bytes(m.len()))
            .unwrap_or_else(|_| "missing".to_string());
        println!("  {file} ({size})");
    }

    let store = JsonStore::open(data_dir)?;
    let resumes = store.resumes()?.len();
    let analyses = store.recent_analyses(usize::MAX)?;
    println!("Resumes stored: {resumes}");
    println!("Analyses recorded: {}", analyses.len());

    match analyses.first() {
        Some(latest) => println!("Last analysis: {}", latest.created_at),
        None => {
            println!("Last analysis: never");
            println!("  Run `shortlist analyze` to score resumes against a job description");
        }
    }

    if config.remote_assistant_configured() {
        println!("Assistant: remote endpoint configured ({})", config.assistant_model);
    } else {
        println!("Assistant: rule-based fallback only (set SHORTLIST_ASSISTANT_URL to enable)");
    }

    Ok(())
}

fn format_bytes(bytes: u64) -> String {
    if bytes < 1024 {
        format!("{} B", bytes)
    } else if bytes < 1024 * 1024 {
        format!("{:.1} KB", bytes as f64 / 1024.0)
    } else {
        format!("{:.1} MB", bytes as f64 / (1024.0 * 1024.0))
    }
}
