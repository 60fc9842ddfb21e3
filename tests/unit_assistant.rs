// Unit tests for the assistant: context rendering and the rule-based
// backend's query shapes.

use shortlist::assistant::context::{AssistantContext, CandidateSummary};
use shortlist::assistant::rules::RulesAssistant;
use shortlist::assistant::traits::Assistant;

fn owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn summary(file: &str, pct: u32, skills: &[&str], matching: &[&str]) -> CandidateSummary {
    CandidateSummary {
        filename: file.to_string(),
        match_percentage: pct,
        skills: owned(skills),
        matching_skills: owned(matching),
    }
}

fn context() -> AssistantContext {
    AssistantContext {
        candidates: vec![
            summary("jane.pdf", 82, &["python", "docker", "aws"], &["python", "aws"]),
            summary("john.docx", 61, &["python", "excel"], &["python"]),
            summary("sam.pdf", 35, &["photoshop"], &[]),
        ],
        job_skills: owned(&["python", "aws", "sql"]),
        include_summary: true,
        include_job_skills: true,
    }
}

// ============================================================
// Context rendering
// ============================================================

#[test]
fn render_orders_summary_before_question() {
    let rendered = context().render("who fits best?");
    let candidates_pos = rendered.find("jane.pdf").unwrap();
    let question_pos = rendered.find("User question").unwrap();
    assert!(candidates_pos < question_pos);
}

#[test]
fn render_empty_context_is_just_preamble_and_question() {
    let ctx = AssistantContext {
        include_summary: true,
        include_job_skills: true,
        ..Default::default()
    };
    let rendered = ctx.render("hello");
    assert_eq!(rendered.lines().count(), 2);
}

// ============================================================
// Rule-based answers
// ============================================================

#[tokio::test]
async fn rules_compare_shows_skill_differences() {
    let reply = RulesAssistant
        .reply(&context(), "compare the top 2 and explain key differences")
        .await
        .unwrap();
    assert!(reply.contains("jane.pdf leads at 82%"));
    // docker and aws are jane-only; excel is john-only
    assert!(reply.contains("docker"));
    assert!(reply.contains("excel"));
}

#[tokio::test]
async fn rules_compare_with_single_candidate() {
    let ctx = AssistantContext {
        candidates: vec![summary("only.pdf", 70, &["python"], &["python"])],
        job_skills: owned(&["python"]),
        include_summary: true,
        include_job_skills: true,
    };
    let reply = RulesAssistant.reply(&ctx, "compare them").await.unwrap();
    assert!(reply.contains("Only one candidate"));
}

#[tokio::test]
async fn rules_skill_question_lists_only_holders() {
    let reply = RulesAssistant
        .reply(&context(), "who has excel?")
        .await
        .unwrap();
    assert!(reply.contains("john.docx"));
    assert!(!reply.contains("jane.pdf"));
}

#[tokio::test]
async fn rules_skill_question_for_unlisted_skill() {
    let reply = RulesAssistant
        .reply(&context(), "does anyone know sql?")
        .await
        .unwrap();
    assert!(reply.contains("No analyzed candidate lists sql"));
}

#[tokio::test]
async fn rules_missing_skills_defaults_to_first_candidate() {
    let reply = RulesAssistant
        .reply(&context(), "what skills are missing?")
        .await
        .unwrap();
    assert!(reply.contains("jane.pdf"));
    assert!(reply.contains("sql"));
}

#[tokio::test]
async fn rules_missing_skills_out_of_range() {
    let reply = RulesAssistant
        .reply(&context(), "missing skills for candidate 9")
        .await
        .unwrap();
    assert!(reply.contains("no candidate 9"));
}

#[tokio::test]
async fn rules_top_listing_caps_at_available() {
    let reply = RulesAssistant
        .reply(&context(), "show the top 10 candidates")
        .await
        .unwrap();
    assert!(reply.contains("sam.pdf"), "All three should be listed");
}

#[tokio::test]
async fn rules_summary_counts_strong_matches() {
    let reply = RulesAssistant
        .reply(&context(), "summarize the overall matches")
        .await
        .unwrap();
    assert!(reply.contains("1 scored a strong match"));
}

#[tokio::test]
async fn rules_empty_context_suggests_analyze() {
    let reply = RulesAssistant
        .reply(&AssistantContext::default(), "compare the top 2")
        .await
        .unwrap();
    assert!(reply.contains("shortlist analyze"));
}
