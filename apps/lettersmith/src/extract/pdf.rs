//! PDF extraction: primary pass via `pdf-extract`, fallback via `lopdf`.

use std::io::{Read, Seek, SeekFrom};

use tracing::warn;

use super::ExtractionError;

/// Extracts plain text from a PDF stream.
///
/// Attempts `pdf-extract` first; on any failure the stream is rewound to
/// the start (the first attempt consumed it) and `lopdf` takes a second
/// pass over the same bytes, concatenating pages in source order.
pub fn extract<R: Read + Seek>(reader: &mut R) -> Result<String, ExtractionError> {
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes)?;

    match pdf_extract::extract_text_from_mem(&bytes) {
        Ok(text) => Ok(text),
        Err(primary) => {
            warn!("primary PDF extraction failed ({primary}), trying fallback");
            reader.seek(SeekFrom::Start(0))?;
            extract_fallback(reader).map_err(|fallback| {
                ExtractionError::Pdf(format!("primary: {primary}; fallback: {fallback}"))
            })
        }
    }
}

fn extract_fallback<R: Read>(reader: R) -> Result<String, lopdf::Error> {
    let doc = lopdf::Document::load_from(reader)?;
    let pages: Vec<u32> = doc.get_pages().keys().copied().collect();
    doc.extract_text(&pages)
}


#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::test_support::make_test_pdf;
    use super::*;

    #[test]
    fn test_extracts_text_from_valid_pdf() {
        let bytes = make_test_pdf("Backend engineer with Go experience");
        let text = extract(&mut Cursor::new(bytes)).unwrap();
        assert!(text.contains("Backend engineer"));
    }

    #[test]
    fn test_invalid_pdf_errors_after_both_attempts() {
        let result = extract(&mut Cursor::new(b"not a pdf".to_vec()));
        let err = result.unwrap_err();
        let message = err.to_string();
        assert!(
            message.contains("primary") && message.contains("fallback"),
            "error should report both attempts, got: {message}"
        );
    }

    #[test]
    fn test_fallback_reads_from_start_of_stream() {
        // The fallback alone handles a valid PDF, proving it reads the
        // rewound stream rather than the consumed one.
        let bytes = make_test_pdf("Distributed systems");
        let text = extract_fallback(Cursor::new(bytes)).unwrap();
        assert!(text.contains("Distributed systems"));
    }
}
