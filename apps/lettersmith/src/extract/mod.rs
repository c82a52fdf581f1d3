//! Document Text Extractor — converts an uploaded binary resume into plain
//! text. PDF and DOCX are the two accepted upload formats.
//!
//! Output is trimmed of leading/trailing whitespace only: no re-encoding,
//! no OCR, no layout reconstruction — plain text concatenation in source
//! order.

pub mod docx;
pub mod pdf;

use std::io::{Cursor, Read, Seek};

use bytes::Bytes;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("I/O error reading document: {0}")]
    Io(#[from] std::io::Error),

    #[error("PDF extraction failed: {0}")]
    Pdf(String),

    #[error("DOCX extraction failed: {0}")]
    Docx(String),

    #[error("document contains no extractable text")]
    Empty,

    #[error("unsupported file extension: {0}")]
    UnsupportedExtension(String),
}

/// Declared format of an uploaded resume.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Pdf,
    Docx,
}

impl DocumentFormat {
    /// Derives the format from an uploaded file name. Only `.pdf` and
    /// `.docx` are accepted by the upload control.
    pub fn from_file_name(name: &str) -> Result<Self, ExtractionError> {
        let lower = name.to_lowercase();
        if lower.ends_with(".pdf") {
            Ok(DocumentFormat::Pdf)
        } else if lower.ends_with(".docx") {
            Ok(DocumentFormat::Docx)
        } else {
            Err(ExtractionError::UnsupportedExtension(name.to_string()))
        }
    }
}

/// An uploaded resume: raw bytes plus declared format. Never persisted;
/// retained in memory only so Regenerate can re-extract.
#[derive(Debug, Clone)]
pub struct ResumeDocument {
    pub content: Bytes,
    pub format: DocumentFormat,
}

impl ResumeDocument {
    pub fn new(content: Bytes, format: DocumentFormat) -> Self {
        Self { content, format }
    }

    /// Runs extraction over a fresh cursor. Each attempt reads the bytes
    /// from the start, so repeated extraction (Regenerate) is safe.
    pub fn extract_text(&self) -> Result<String, ExtractionError> {
        let mut cursor = Cursor::new(self.content.as_ref());
        extract_text(&mut cursor, self.format)
    }
}

/// Extracts plain text from a binary document stream.
///
/// The reader is consumed; for the PDF fallback path the cursor is rewound
/// to the start between attempts, since stream consumption is one-shot.
pub fn extract_text<R: Read + Seek>(
    reader: &mut R,
    format: DocumentFormat,
) -> Result<String, ExtractionError> {
    let text = match format {
        DocumentFormat::Pdf => pdf::extract(reader)?,
        DocumentFormat::Docx => docx::extract(reader)?,
    };

    let text = text.trim();
    if text.is_empty() {
        return Err(ExtractionError::Empty);
    }

    Ok(text.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extract::docx::test_support::make_test_docx;
    use crate::extract::pdf::test_support::make_test_pdf;

    #[test]
    fn test_format_from_file_name() {
        assert_eq!(
            DocumentFormat::from_file_name("resume.pdf").unwrap(),
            DocumentFormat::Pdf
        );
        assert_eq!(
            DocumentFormat::from_file_name("Resume.DOCX").unwrap(),
            DocumentFormat::Docx
        );
        assert!(matches!(
            DocumentFormat::from_file_name("resume.txt"),
            Err(ExtractionError::UnsupportedExtension(_))
        ));
    }

    #[test]
    fn test_pdf_and_docx_with_same_content_extract_equal_text() {
        let content = "5 years experience in distributed systems";
        let pdf = ResumeDocument::new(Bytes::from(make_test_pdf(content)), DocumentFormat::Pdf);
        let docx = ResumeDocument::new(Bytes::from(make_test_docx(content)), DocumentFormat::Docx);

        let pdf_text = pdf.extract_text().unwrap();
        let docx_text = docx.extract_text().unwrap();

        // Equal modulo incidental whitespace
        let normalize = |s: &str| s.split_whitespace().collect::<Vec<_>>().join(" ");
        assert_eq!(normalize(&pdf_text), normalize(&docx_text));
        assert_eq!(normalize(&pdf_text), content);
    }

    #[test]
    fn test_extracted_text_is_trimmed() {
        let docx =
            ResumeDocument::new(Bytes::from(make_test_docx("  padded  ")), DocumentFormat::Docx);
        let text = docx.extract_text().unwrap();
        assert_eq!(text, text.trim());
    }

    #[test]
    fn test_repeated_extraction_is_stable() {
        let doc = ResumeDocument::new(
            Bytes::from(make_test_pdf("Rust engineer")),
            DocumentFormat::Pdf,
        );
        let first = doc.extract_text().unwrap();
        let second = doc.extract_text().unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_garbage_bytes_fail_extraction() {
        let doc = ResumeDocument::new(
            Bytes::from_static(b"not a real document"),
            DocumentFormat::Pdf,
        );
        assert!(doc.extract_text().is_err());

        let doc = ResumeDocument::new(
            Bytes::from_static(b"not a real document"),
            DocumentFormat::Docx,
        );
        assert!(matches!(
            doc.extract_text(),
            Err(ExtractionError::Docx(_))
        ));
    }
}
