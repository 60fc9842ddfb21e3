// PDF text extraction via the pdf-extract crate.

use std::path::Path;

use anyhow::{Context, Result};
use tracing::warn;

/// Extract the text content of a PDF file, all pages concatenated.
///
/// A PDF that parses but yields no text (scanned images without a text
/// layer) returns a placeholder string rather than an error.
pub fn extract(path: &Path) -> Result<String> {
    let text = pdf_extract::extract_text(path)
        .with_context(|| format!("Failed to extract text from PDF: {}", path.display()))?;

    if text.trim().is_empty() {
        warn!(path = %path.display(), "No text extracted from PDF");
        return Ok("No readable text found in PDF".to_string());
    }

    Ok(text)
}
