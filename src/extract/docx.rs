// DOCX text extraction.
//
// A .docx file is a ZIP archive; the document body lives in
// word/document.xml. Rather than pulling in a full OOXML parser we read
// that one entry and recover the text runs: paragraph ends and explicit
// breaks become newlines, tabs become tabs, and the remaining markup is
// stripped. Table cell text comes along for free — cells are made of
// ordinary paragraphs.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::warn;

/// Extract the text content of a DOCX file.
pub fn extract(path: &Path) -> Result<String> {
    let file = File::open(path)
        .with_context(|| format!("Failed to open DOCX file: {}", path.display()))?;

    let mut archive = zip::ZipArchive::new(file)
        .with_context(|| format!("Not a valid DOCX (zip) archive: {}", path.display()))?;

    let mut xml = String::new();
    archive
        .by_name("word/document.xml")
        .with_context(|| format!("DOCX has no document body: {}", path.display()))?
        .read_to_string(&mut xml)
        .with_context(|| format!("Failed to read DOCX document body: {}", path.display()))?;

    let text = document_text(&xml);
    if text.trim().is_empty() {
        warn!(path = %path.display(), "No text extracted from DOCX");
        return Ok("No readable text found in DOCX".to_string());
    }

    Ok(text)
}

/// Recover plain text from the document.xml markup.
fn document_text(xml: &str) -> String {
    // Structural tags become whitespace before the markup is stripped
    let with_breaks = xml
        .replace("</w:p>", "\n")
        .replace("<w:tab/>", "\t")
        .replace("<w:br/>", "\n");

    let mut out = String::with_capacity(with_breaks.len() / 4);
    let mut in_tag = false;
    for ch in with_breaks.chars() {
        match ch {
            '<' => in_tag = true,
            '>' => in_tag = false,
            c if !in_tag => out.push(c),
            _ => {}
        }
    }

    decode_entities(&out)
}

/// Decode the five XML character entities. `&amp;` goes last so that
/// escaped sequences like `&amp;lt;` don't get decoded twice.
fn decode_entities(text: &str) -> String {
    text.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&apos;", "'")
        .replace("&amp;", "&")
}
