// Assistant trait — the swap-ready seam between backends.
//
// The remote backend needs HTTP, so the trait is async; the rule-based
// fallback simply never awaits. Callers hold a backend, try it, and
// decide what to do on failure.

use anyhow::Result;
use async_trait::async_trait;

use super::context::AssistantContext;

/// Trait for answering shortlisting questions over the current analysis.
#[async_trait]
pub trait Assistant: Send + Sync {
    /// Answer a user question given the composed analysis context.
    async fn reply(&self, context: &AssistantContext, question: &str) -> Result<String>;
}
