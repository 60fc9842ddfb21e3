// Shortlisting assistant — remote inference with a rule-based fallback.

pub mod context;
pub mod remote;
pub mod rules;
pub mod traits;
