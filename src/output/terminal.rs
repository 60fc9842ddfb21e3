// Colored terminal output for rankings, requirements, and history.
//
// This module handles all terminal-specific formatting: colors, tables,
// comparison bars. The main.rs command handlers delegate here.

use colored::Colorize;

use crate::ranking::score::{Candidate, MatchBand};
use crate::store::models::{AnalysisView, ResumeRecord};
use crate::text::entities::Entity;
use crate::text::requirements::JobRequirements;

/// Display the structured job requirements summary.
pub fn display_requirements(req: &JobRequirements) {
    if req.is_empty() {
        return;
    }

    println!("\n{}", "=== Job Requirements Analysis ===".bold());

    let sections: [(&str, &[String], usize); 6] = [
        ("Required skills", &req.required_skills, 8),
        ("Preferred skills", &req.preferred_skills, 8),
        ("Experience", &req.experience_years, usize::MAX),
        ("Education", &req.education, usize::MAX),
        ("Certifications", &req.certifications, usize::MAX),
        ("Job type", &req.job_type, usize::MAX),
    ];

    for (title, items, cap) in sections {
        if items.is_empty() {
            continue;
        }
        println!("\n  {}", title.bold());
        for item in items.iter().take(cap) {
            println!("    - {item}");
        }
        if items.len() > cap {
            println!("    ... and {} more", items.len() - cap);
        }
    }
}

/// Display the distinctive key terms of the job description.
pub fn display_key_terms(terms: &[(String, f32)]) {
    if terms.is_empty() {
        return;
    }

    println!("\n  {}", "Key terms".bold());
    let listed = terms
        .iter()
        .map(|(term, _)| term.as_str())
        .collect::<Vec<_>>()
        .join(", ");
    println!("    {}", listed.dimmed());
}

/// Display the ranked shortlist as a table.
pub fn display_ranked(candidates: &[Candidate], min_match: u32) {
    println!(
        "\n{}",
        format!(
            "=== Top {} Candidates (Min. {}% Match) ===",
            candidates.len(),
            min_match
        )
        .bold()
    );
    println!();

    println!(
        "  {:>4}  {:<28} {:<24} {:>6}  {:<10}  {:>7}",
        "Rank".dimmed(),
        "Candidate".dimmed(),
        "File".dimmed(),
        "Match".dimmed(),
        "Band".dimmed(),
        "Skills".dimmed(),
    );
    println!("  {}", "-".repeat(86).dimmed());

    for (i, candidate) in candidates.iter().enumerate() {
        println!(
            "  {:>4}. {:<27} {:<24} {:>5}%  {:<10}  {:>7}",
            i + 1,
            super::truncate_chars(&candidate.candidate_name, 25),
            super::truncate_chars(&candidate.filename, 22),
            candidate.match_percentage,
            colorize_band(candidate.band()),
            candidate.matching_skills.len(),
        );
    }
}

/// Display one candidate's detailed result.
pub fn display_candidate_detail(candidate: &Candidate) {
    println!(
        "\n{}",
        format!(
            "--- {} ({}% match) ---",
            candidate.filename, candidate.match_percentage
        )
        .bold()
    );

    println!("  Candidate: {}", candidate.candidate_name);
    println!("  Band: {}", colorize_band(candidate.band()));

    if candidate.matching_skills.is_empty() {
        println!("  Matching skills: {}", "none found".dimmed());
    } else {
        println!("  Matching skills: {}", candidate.matching_skills.join(", "));
    }

    let matching: std::collections::HashSet<&str> = candidate
        .matching_skills
        .iter()
        .map(String::as_str)
        .collect();
    let other: Vec<&str> = candidate
        .skills
        .iter()
        .map(String::as_str)
        .filter(|s| !matching.contains(s))
        .collect();
    if !other.is_empty() {
        let shown = other.iter().take(10).copied().collect::<Vec<_>>().join(", ");
        if other.len() > 10 {
            println!(
                "  Other skills: {} ... and {} more",
                shown,
                other.len() - 10
            );
        } else {
            println!("  Other skills: {shown}");
        }
    }

    let preview = super::truncate_chars(candidate.text.trim(), 300);
    println!("  Preview: {}", preview.replace('\n', " ").dimmed());
}

/// Display the side-by-side comparison bars: match percentage and
/// matching-skill counts.
pub fn display_comparison(candidates: &[Candidate]) {
    if candidates.is_empty() {
        return;
    }

    println!("\n{}", "=== Candidate Comparison ===".bold());

    println!("\n  {}", "Match percentage".bold());
    for candidate in candidates {
        let bar = weight_bar(candidate.match_percentage as f64 / 100.0, 20);
        let colored_bar = match candidate.band() {
            MatchBand::Strong => bar.bright_green(),
            MatchBand::Moderate => bar.bright_yellow(),
            MatchBand::Weak => bar.bright_red(),
        };
        println!(
            "    {:<26} {} {:>3}%",
            super::truncate_chars(&candidate.filename, 24),
            colored_bar,
            candidate.match_percentage
        );
    }

    let max_skills = candidates
        .iter()
        .map(|c| c.matching_skills.len())
        .max()
        .unwrap_or(0);
    if max_skills == 0 {
        return;
    }

    println!("\n  {}", "Matching skills".bold());
    for candidate in candidates {
        let fraction = candidate.matching_skills.len() as f64 / max_skills as f64;
        println!(
            "    {:<26} {} {:>3}",
            super::truncate_chars(&candidate.filename, 24),
            weight_bar(fraction, 20).bright_blue(),
            candidate.matching_skills.len()
        );
    }
}

/// Display the common-matching-skills frequency table.
pub fn display_common_skills(common: &[(String, usize)]) {
    println!("\n{}", "=== Common Matching Skills ===".bold());

    if common.is_empty() {
        println!("  No common matching skills found among the top candidates.");
        return;
    }

    println!("\n  {:<28} {}", "Skill".dimmed(), "Candidates".dimmed());
    for (skill, count) in common {
        println!("  {skill:<28} {count}");
    }
}

/// Display previous analyses, newest first.
pub fn display_history(views: &[AnalysisView], detail: bool) {
    if views.is_empty() {
        println!("No previous analyses. Run `shortlist analyze` first.");
        return;
    }

    println!(
        "\n{}",
        format!("=== Analysis History ({} entries) ===", views.len()).bold()
    );
    println!();

    println!(
        "  {:<12} {:<26} {:>6}  {:<24}",
        "Date".dimmed(),
        "Candidate".dimmed(),
        "Match".dimmed(),
        "File".dimmed(),
    );
    println!("  {}", "-".repeat(74).dimmed());

    for view in views {
        let date = view.created_at.split('T').next().unwrap_or(&view.created_at);
        let pct = view.match_percentage();
        println!(
            "  {:<12} {:<26} {:>5}%  {:<24}",
            date,
            super::truncate_chars(&view.candidate_name, 24),
            pct,
            super::truncate_chars(&view.filename, 22),
        );

        if detail {
            if view.matching_skills.is_empty() {
                println!("      Matching skills: {}", "none".dimmed());
            } else {
                println!("      Matching skills: {}", view.matching_skills.join(", "));
            }
            let jd_preview = super::truncate_chars(view.description.trim(), 200);
            println!("      Job: {}", jd_preview.replace('\n', " ").dimmed());
            println!();
        }
    }
}

/// Display the resume browser list.
pub fn display_resume_list(records: &[ResumeRecord]) {
    println!("Found {} resume(s)", records.len());
    if records.is_empty() {
        println!("No resumes match. Try a different search term.");
        return;
    }

    for record in records {
        let date = record
            .created_at
            .split('T')
            .next()
            .unwrap_or(&record.created_at);
        println!(
            "\n  {} {} ({})",
            format!("[{}]", record.id).dimmed(),
            record.candidate_name.bold(),
            record.filename
        );
        println!("      Uploaded: {date}   Text: {} chars", record.text.chars().count());

        if record.skills.is_empty() {
            println!("      Skills: {}", "none detected".dimmed());
        } else {
            let shown = record
                .skills
                .iter()
                .take(15)
                .map(String::as_str)
                .collect::<Vec<_>>()
                .join(", ");
            if record.skills.len() > 15 {
                println!(
                    "      Skills: {} ... and {} more",
                    shown,
                    record.skills.len() - 15
                );
            } else {
                println!("      Skills: {shown}");
            }
        }
    }
    println!(
        "\n{}",
        "Use `shortlist inspect <id>` for the full text and entities.".dimmed()
    );
}

/// Display a single stored resume in full, with extracted entities.
pub fn display_resume_detail(record: &ResumeRecord, entities: &[Entity]) {
    println!(
        "\n{}",
        format!("=== {} ({}) ===", record.candidate_name, record.filename).bold()
    );
    println!("  Stored: {}   Id: {}", record.created_at, record.id);

    if !record.skills.is_empty() {
        println!("\n  {}", "Skills".bold());
        println!("    {}", record.skills.join(", "));
    }

    println!("\n  {}", "Entities".bold());
    if entities.is_empty() {
        println!("    {}", "none detected".dimmed());
    } else {
        for entity in entities {
            println!("    {:<14} {}", entity.kind.to_string().dimmed(), entity.text);
        }
    }

    println!("\n  {}", "Content".bold());
    let preview = super::truncate_chars(record.text.trim(), 800);
    for line in preview.lines() {
        println!("    {}", line.dimmed());
    }
}

/// Colorize a match band.
pub fn colorize_band(band: MatchBand) -> colored::ColoredString {
    match band {
        MatchBand::Strong => band.as_str().green().bold(),
        MatchBand::Moderate => band.as_str().yellow(),
        MatchBand::Weak => band.as_str().red(),
    }
}

/// Build a fixed-width bar: filled portion + empty portion.
fn weight_bar(fraction: f64, width: usize) -> String {
    let filled = (fraction.clamp(0.0, 1.0) * width as f64).round() as usize;
    let empty = width.saturating_sub(filled);
    format!("[{}{}]", "=".repeat(filled), " ".repeat(empty))
}
