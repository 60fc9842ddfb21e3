// Document text extraction — PDF and DOCX adapters.
//
// Resumes arrive as files; everything downstream works on plain text.
// Each format is a thin wrapper over an existing parsing crate. A file
// that parses but contains no text yields a placeholder string so one
// scanned-image resume doesn't abort a batch run.

pub mod docx;
pub mod pdf;

use std::path::Path;

use anyhow::Result;

/// Supported resume file formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    Pdf,
    Docx,
}

impl FileKind {
    /// Detect the format from the file extension (case-insensitive).
    /// Unsupported extensions return None.
    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension()?.to_str()?.to_ascii_lowercase().as_str() {
            "pdf" => Some(FileKind::Pdf),
            "docx" => Some(FileKind::Docx),
            _ => None,
        }
    }
}

/// Extract text from a resume file, dispatching on the extension.
pub fn extract_text(path: &Path) -> Result<String> {
    match FileKind::from_path(path) {
        Some(FileKind::Pdf) => pdf::extract(path),
        Some(FileKind::Docx) => docx::extract(path),
        None => anyhow::bail!("Unsupported file type: {}", path.display()),
    }
}
