use std::io::{BufRead, Read, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use tracing::warn;

use shortlist::assistant::context::AssistantContext;
use shortlist::assistant::remote::RemoteAssistant;
use shortlist::assistant::rules::RulesAssistant;
use shortlist::assistant::traits::Assistant;
use shortlist::config::Config;
use shortlist::output::terminal;
use shortlist::pipeline::analyze;
use shortlist::ranking::score::{common_matching_skills, shortlist as apply_shortlist, ScoreWeights};
use shortlist::store::models::ResumeSort;
use shortlist::store::JsonStore;
use shortlist::text::entities::extract_entities;
use shortlist::text::skills::SkillLexicon;
use shortlist::{extract, status};

/// Shortlist: resume screening and ranking.
///
/// Ranks candidate resumes against a job description using TF-IDF text
/// similarity and skill overlap, with a conversational assistant over
/// the results.
#[derive(Parser)]
#[command(name = "shortlist", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize the data directory and JSON store
    Init,

    /// Analyze resumes against a job description
    Analyze {
        /// Job description: a text/PDF/DOCX file, or - to read from stdin
        #[arg(long)]
        job: PathBuf,

        /// Resume files to analyze (.pdf or .docx)
        #[arg(required = true)]
        resumes: Vec<PathBuf>,

        /// Minimum match percentage for the shortlist (0-100)
        #[arg(long, default_value = "50")]
        min_match: u32,

        /// How many top candidates to show
        #[arg(long, default_value = "5")]
        top: usize,
    },

    /// Show previous analyses
    History {
        /// Maximum entries to show
        #[arg(long, default_value = "20")]
        limit: usize,

        /// Also show matching skills and the job description per entry
        #[arg(long)]
        detail: bool,
    },

    /// Browse stored resumes
    Resumes {
        /// Filter by candidate name, filename, skills, or content
        #[arg(long)]
        search: Option<String>,

        /// Sort order for the listing
        #[arg(long, value_enum, default_value = "newest")]
        sort: SortOrder,
    },

    /// Show one stored resume in full, with extracted entities
    Inspect {
        /// Resume id (shown in the `resumes` listing)
        id: u64,
    },

    /// Ask the shortlisting assistant a single question
    Ask {
        question: String,

        /// Leave the top-candidates overview out of the assistant context
        #[arg(long)]
        no_summary: bool,

        /// Leave the job skills out of the assistant context
        #[arg(long)]
        no_job_skills: bool,
    },

    /// Interactive assistant session
    Assist,

    /// Show store status (record counts, last analysis)
    Status,
}

#[derive(Clone, Copy, ValueEnum)]
enum SortOrder {
    Newest,
    Oldest,
    NameAsc,
    NameDesc,
}

impl From<SortOrder> for ResumeSort {
    fn from(order: SortOrder) -> Self {
        match order {
            SortOrder::Newest => ResumeSort::Newest,
            SortOrder::Oldest => ResumeSort::Oldest,
            SortOrder::NameAsc => ResumeSort::NameAsc,
            SortOrder::NameDesc => ResumeSort::NameDesc,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // Set up structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("shortlist=info")),
        )
        .init();

    let cli = Cli::parse();
    let config = Config::load()?;

    match cli.command {
        Commands::Init => {
            JsonStore::initialize(&config.data_dir)?;
            println!("Store initialized at: {}", config.data_dir.display());
            println!("\nShortlist is ready. Next step:");
            println!("  shortlist analyze --job jd.txt resumes/*.pdf");
        }

        Commands::Analyze {
            job,
            resumes,
            min_match,
            top,
        } => {
            let description = read_job_description(&job)?;
            if description.trim().is_empty() {
                anyhow::bail!("Job description is empty");
            }

            // The store is created on demand — analyze shouldn't require a
            // separate init step
            let store = JsonStore::initialize(&config.data_dir)?;
            let lexicon = SkillLexicon::load(config.skill_file.as_deref());
            let weights = ScoreWeights::default();

            println!("Processing resumes and job description...");
            let outcome = analyze::run(&store, &lexicon, &weights, &description, &resumes)?;

            println!(
                "{}",
                format!(
                    "Successfully processed {} resume(s){}",
                    outcome.processed,
                    if outcome.skipped > 0 {
                        format!(" ({} skipped)", outcome.skipped)
                    } else {
                        String::new()
                    }
                )
                .bold()
            );

            terminal::display_requirements(&outcome.requirements);
            terminal::display_key_terms(&outcome.key_terms);

            let shortlisted = apply_shortlist(&outcome.ranked, min_match, top);
            if shortlisted.is_empty() {
                println!(
                    "\n{}",
                    format!(
                        "No candidates meet the minimum match percentage of {min_match}%. \
                         Try a lower --min-match."
                    )
                    .yellow()
                );
                return Ok(());
            }

            terminal::display_ranked(&shortlisted, min_match);
            for candidate in &shortlisted {
                terminal::display_candidate_detail(candidate);
            }
            terminal::display_comparison(&shortlisted);

            let common = common_matching_skills(&shortlisted, &outcome.job_skills, 10);
            terminal::display_common_skills(&common);

            println!(
                "\n{}",
                "Ask the assistant about these results: shortlist ask \"compare the top 2\""
                    .dimmed()
            );
        }

        Commands::History { limit, detail } => {
            let store = JsonStore::open(&config.data_dir)?;
            let views = store.recent_analyses(limit)?;
            terminal::display_history(&views, detail);
        }

        Commands::Resumes { search, sort } => {
            let store = JsonStore::open(&config.data_dir)?;
            let records = store.search_resumes(search.as_deref(), sort.into())?;
            terminal::display_resume_list(&records);
        }

        Commands::Inspect { id } => {
            let store = JsonStore::open(&config.data_dir)?;
            match store.resume(id)? {
                Some(record) => {
                    let entities = extract_entities(&record.text);
                    terminal::display_resume_detail(&record, &entities);
                }
                None => anyhow::bail!("No stored resume with id {id}. See `shortlist resumes`."),
            }
        }

        Commands::Ask {
            question,
            no_summary,
            no_job_skills,
        } => {
            let store = JsonStore::open(&config.data_dir)?;
            let context = AssistantContext::from_store(&store, !no_summary, !no_job_skills)?;
            let answer = ask_assistant(&config, &context, &question).await;
            println!("{answer}");
        }

        Commands::Assist => {
            let store = JsonStore::open(&config.data_dir)?;
            let context = AssistantContext::from_store(&store, true, true)?;
            run_assist_session(&config, &context).await?;
        }

        Commands::Status => {
            status::show(&config)?;
        }
    }

    Ok(())
}

/// Read the job description from a file (text, PDF, or DOCX) or stdin.
fn read_job_description(path: &PathBuf) -> Result<String> {
    if path.as_os_str() == "-" {
        let mut buffer = String::new();
        std::io::stdin()
            .read_to_string(&mut buffer)
            .context("Failed to read the job description from stdin")?;
        return Ok(buffer);
    }

    match extract::FileKind::from_path(path) {
        Some(_) => extract::extract_text(path),
        None => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read job description: {}", path.display())),
    }
}

/// Answer a question: remote assistant first when configured, rule-based
/// fallback on any failure.
async fn ask_assistant(config: &Config, context: &AssistantContext, question: &str) -> String {
    if config.remote_assistant_configured() {
        let remote = RemoteAssistant::new(
            config.assistant_url.clone(),
            config.assistant_key.clone(),
            config.assistant_model.clone(),
        );
        match remote.reply(context, question).await {
            Ok(answer) => return answer,
            Err(e) => {
                warn!(error = %e, "Remote assistant unavailable, falling back to rules");
                println!(
                    "{}",
                    "(assistant offline — answering from the analysis data)".dimmed()
                );
            }
        }
    }

    RulesAssistant
        .reply(context, question)
        .await
        .unwrap_or_else(|e| format!("Assistant error: {e}"))
}

/// Interactive assistant loop with an in-memory transcript.
async fn run_assist_session(config: &Config, context: &AssistantContext) -> Result<()> {
    println!("{}", "Shortlisting assistant".bold());
    println!(
        "{}",
        "Ask about the analyzed candidates. Commands: /clear, /export [path], /quit".dimmed()
    );

    let mut transcript: Vec<(&'static str, String)> = Vec::new();
    let stdin = std::io::stdin();

    loop {
        print!("> ");
        std::io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break; // EOF
        }
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        if line == "/quit" || line == "/exit" {
            break;
        }
        if line == "/clear" {
            transcript.clear();
            println!("Transcript cleared.");
            continue;
        }
        if let Some(rest) = line.strip_prefix("/export") {
            let path = rest.trim();
            let path = if path.is_empty() {
                "assistant_chat.txt"
            } else {
                path
            };
            export_transcript(&transcript, path)?;
            println!("Transcript saved to: {path}");
            continue;
        }

        let answer = ask_assistant(config, context, line).await;
        println!("{answer}\n");
        transcript.push(("user", line.to_string()));
        transcript.push(("assistant", answer));
    }

    Ok(())
}

fn export_transcript(transcript: &[(&'static str, String)], path: &str) -> Result<()> {
    let rendered = transcript
        .iter()
        .map(|(role, content)| format!("{role}: {content}"))
        .collect::<Vec<_>>()
        .join("\n");
    std::fs::write(path, rendered)
        .with_context(|| format!("Failed to write transcript to {path}"))
}
