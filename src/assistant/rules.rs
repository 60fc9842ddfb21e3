// Rule-based assistant — deterministic answers from the analysis data.
//
// No model, no network: the question is pattern-matched against the
// shapes the app can answer from its own ranking. This backend serves
// when no remote endpoint is configured or the remote call fails, so it
// must never error.

use anyhow::Result;
use async_trait::async_trait;
use regex_lite::Regex;

use super::context::{AssistantContext, CandidateSummary};
use super::traits::Assistant;

pub struct RulesAssistant;

#[async_trait]
impl Assistant for RulesAssistant {
    async fn reply(&self, context: &AssistantContext, question: &str) -> Result<String> {
        Ok(answer(context, question))
    }
}

/// Answer a question from the analysis data alone.
pub fn answer(ctx: &AssistantContext, question: &str) -> String {
    let q = question.to_lowercase();

    if ctx.candidates.is_empty() {
        return "No analysis results yet. Run `shortlist analyze` first, then ask me about the candidates.".to_string();
    }

    if q.contains("compare") {
        return compare_top_two(ctx);
    }
    if q.contains("missing") {
        let index = first_number(&q).unwrap_or(1);
        return missing_skills(ctx, index);
    }
    if q.contains("top") {
        let n = first_number(&q).unwrap_or(3) as usize;
        return top_candidates(ctx, n.max(1));
    }
    if let Some(skill) = mentioned_skill(ctx, &q) {
        return skill_holders(ctx, &skill);
    }
    if q.contains("summar") || q.contains("overview") {
        return summarize(ctx);
    }

    "I can answer questions about the analyzed candidates: try \"compare the top 2\", \
     \"who has python\", \"show the top 3\", \"missing skills for candidate 1\", \
     or \"summarize the matches\"."
        .to_string()
}

fn compare_top_two(ctx: &AssistantContext) -> String {
    if ctx.candidates.len() < 2 {
        let only = &ctx.candidates[0];
        return format!(
            "Only one candidate was analyzed: {} at {}% match.",
            only.filename, only.match_percentage
        );
    }

    let (first, second) = (&ctx.candidates[0], &ctx.candidates[1]);
    let first_only = skill_difference(first, second);
    let second_only = skill_difference(second, first);

    let mut lines = vec![format!(
        "{} leads at {}% match, ahead of {} at {}%.",
        first.filename, first.match_percentage, second.filename, second.match_percentage
    )];
    if !first_only.is_empty() {
        lines.push(format!(
            "{} additionally brings: {}.",
            first.filename,
            first_only.join(", ")
        ));
    }
    if !second_only.is_empty() {
        lines.push(format!(
            "{} additionally brings: {}.",
            second.filename,
            second_only.join(", ")
        ));
    }
    lines.join("\n")
}

/// Skills `a` has that `b` does not (case-insensitive).
fn skill_difference(a: &CandidateSummary, b: &CandidateSummary) -> Vec<String> {
    let other: std::collections::HashSet<String> =
        b.skills.iter().map(|s| s.to_lowercase()).collect();
    a.skills
        .iter()
        .filter(|s| !other.contains(&s.to_lowercase()))
        .cloned()
        .collect()
}

fn missing_skills(ctx: &AssistantContext, index: u32) -> String {
    let Some(candidate) = ctx.candidates.get(index.saturating_sub(1) as usize) else {
        return format!(
            "There is no candidate {index} — the analysis covers {} candidate(s).",
            ctx.candidates.len()
        );
    };

    if ctx.job_skills.is_empty() {
        return "The job description has no extracted skills to compare against.".to_string();
    }

    let have: std::collections::HashSet<String> =
        candidate.skills.iter().map(|s| s.to_lowercase()).collect();
    let missing: Vec<&String> = ctx
        .job_skills
        .iter()
        .filter(|s| !have.contains(&s.to_lowercase()))
        .collect();

    if missing.is_empty() {
        format!(
            "{} covers every skill extracted from the job description.",
            candidate.filename
        )
    } else {
        format!(
            "{} is missing {} of {} job skills: {}.",
            candidate.filename,
            missing.len(),
            ctx.job_skills.len(),
            missing
                .iter()
                .map(|s| s.as_str())
                .collect::<Vec<_>>()
                .join(", ")
        )
    }
}

fn top_candidates(ctx: &AssistantContext, n: usize) -> String {
    let mut lines = vec![format!(
        "Top {} candidate(s) by match:",
        n.min(ctx.candidates.len())
    )];
    for (i, c) in ctx.candidates.iter().take(n).enumerate() {
        let reason = if c.matching_skills.is_empty() {
            "text similarity only".to_string()
        } else {
            format!("matches {}", c.matching_skills.join(", "))
        };
        lines.push(format!(
            "{}. {} — {}% ({})",
            i + 1,
            c.filename,
            c.match_percentage,
            reason
        ));
    }
    lines.join("\n")
}

/// Find a known skill mentioned in the question, longest first so
/// "machine learning" wins over "learning".
fn mentioned_skill(ctx: &AssistantContext, q: &str) -> Option<String> {
    let mut known: Vec<String> = ctx
        .job_skills
        .iter()
        .chain(ctx.candidates.iter().flat_map(|c| c.skills.iter()))
        .map(|s| s.to_lowercase())
        .collect();
    known.sort_by_key(|s| std::cmp::Reverse(s.chars().count()));
    known.dedup();

    known.into_iter().find(|skill| q.contains(skill.as_str()))
}

fn skill_holders(ctx: &AssistantContext, skill: &str) -> String {
    let holders: Vec<&CandidateSummary> = ctx
        .candidates
        .iter()
        .filter(|c| c.skills.iter().any(|s| s.eq_ignore_ascii_case(skill)))
        .collect();

    if holders.is_empty() {
        return format!("No analyzed candidate lists {skill} as a skill.");
    }

    let list = holders
        .iter()
        .map(|c| format!("{} ({}%)", c.filename, c.match_percentage))
        .collect::<Vec<_>>()
        .join(", ");
    format!("Candidates listing {skill}: {list}.")
}

fn summarize(ctx: &AssistantContext) -> String {
    let best = &ctx.candidates[0];
    let strong = ctx
        .candidates
        .iter()
        .filter(|c| c.match_percentage >= 75)
        .count();

    let mut lines = vec![format!(
        "{} candidate(s) analyzed; {} scored a strong match (75%+).",
        ctx.candidates.len(),
        strong
    )];
    lines.push(format!(
        "Best match: {} at {}%{}.",
        best.filename,
        best.match_percentage,
        if best.matching_skills.is_empty() {
            String::new()
        } else {
            format!(", covering {}", best.matching_skills.join(", "))
        }
    ));
    if !ctx.job_skills.is_empty() {
        lines.push(format!(
            "The job asks for: {}.",
            ctx.job_skills.join(", ")
        ));
    }
    lines.join("\n")
}

fn first_number(q: &str) -> Option<u32> {
    let re = Regex::new(r"\d+").unwrap();
    re.find(q)?.as_str().parse().ok()
}
