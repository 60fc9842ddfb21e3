use std::env;
use std::path::PathBuf;

use anyhow::Result;

/// Central configuration loaded from environment variables.
///
/// All values come from env vars (never hardcoded). The .env file
/// is loaded automatically at startup via dotenvy.
pub struct Config {
    /// Directory holding the JSON store files (default ./data)
    pub data_dir: PathBuf,
    /// Optional path to a skill-pattern JSON file replacing the built-in table
    pub skill_file: Option<PathBuf>,
    /// Chat-completions endpoint for the remote assistant.
    /// When unset, the assistant answers from the rule-based fallback only.
    pub assistant_url: String,
    pub assistant_key: String,
    pub assistant_model: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Everything has a workable default — the remote assistant is the only
    /// optional capability, and it degrades to the rule-based fallback.
    pub fn load() -> Result<Self> {
        Ok(Self {
            data_dir: env::var("SHORTLIST_DATA_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("./data")),
            skill_file: env::var("SHORTLIST_SKILL_FILE").ok().map(PathBuf::from),
            assistant_url: env::var("SHORTLIST_ASSISTANT_URL").unwrap_or_default(),
            assistant_key: env::var("SHORTLIST_ASSISTANT_KEY").unwrap_or_default(),
            assistant_model: env::var("SHORTLIST_ASSISTANT_MODEL")
                .unwrap_or_else(|_| "gpt-4o-mini".to_string()),
        })
    }

    /// Whether a remote assistant endpoint has been configured.
    pub fn remote_assistant_configured(&self) -> bool {
        !self.assistant_url.is_empty()
    }
}
