//! DOCX extraction: single method, no fallback. A DOCX is a zip archive;
//! the text lives in `word/document.xml` as `<w:t>` runs grouped into
//! `<w:p>` paragraphs.

use std::io::{Read, Seek};

use quick_xml::events::Event;
use quick_xml::Reader;

use super::ExtractionError;

pub fn extract<R: Read + Seek>(reader: &mut R) -> Result<String, ExtractionError> {
    let mut archive =
        zip::ZipArchive::new(reader).map_err(|e| ExtractionError::Docx(e.to_string()))?;

    let mut xml = String::new();
    archive
        .by_name("word/document.xml")
        .map_err(|e| ExtractionError::Docx(e.to_string()))?
        .read_to_string(&mut xml)?;

    document_xml_to_text(&xml)
}

/// Walks the document XML, collecting text runs and emitting a newline per
/// paragraph and a tab per explicit tab mark.
fn document_xml_to_text(xml: &str) -> Result<String, ExtractionError> {
    let mut reader = Reader::from_str(xml);
    let mut out = String::new();
    let mut in_text_run = false;

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) if e.name().as_ref() == b"w:t" => in_text_run = true,
            Ok(Event::End(e)) => match e.name().as_ref() {
                b"w:t" => in_text_run = false,
                b"w:p" => out.push('\n'),
                _ => {}
            },
            Ok(Event::Empty(e)) if e.name().as_ref() == b"w:tab" => out.push('\t'),
            Ok(Event::Text(t)) if in_text_run => {
                let text = t
                    .unescape()
                    .map_err(|e| ExtractionError::Docx(e.to_string()))?;
                out.push_str(&text);
            }
            Ok(Event::Eof) => break,
            Ok(_) => {}
            Err(e) => return Err(ExtractionError::Docx(e.to_string())),
        }
    }

    Ok(out)
}

#[cfg(test)]
pub mod test_support {
    use std::io::Write;

    use zip::write::FileOptions;

    /// Builds a minimal DOCX archive whose document body is a single
    /// paragraph containing `text`.
    pub fn make_test_docx(text: &str) -> Vec<u8> {
        let escaped = text
            .replace('&', "&amp;")
            .replace('<', "&lt;")
            .replace('>', "&gt;");
        let document = format!(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main">
  <w:body>
    <w:p><w:r><w:t xml:space="preserve">{escaped}</w:t></w:r></w:p>
  </w:body>
</w:document>"#
        );

        let mut buf = std::io::Cursor::new(Vec::new());
        {
            let mut writer = zip::ZipWriter::new(&mut buf);
            writer
                .start_file("word/document.xml", FileOptions::default())
                .unwrap();
            writer.write_all(document.as_bytes()).unwrap();
            writer.finish().unwrap();
        }
        buf.into_inner()
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::test_support::make_test_docx;
    use super::*;

    #[test]
    fn test_extracts_paragraph_text() {
        let bytes = make_test_docx("5 years experience in distributed systems");
        let text = extract(&mut Cursor::new(bytes)).unwrap();
        assert_eq!(text.trim(), "5 years experience in distributed systems");
    }

    #[test]
    fn test_multiple_paragraphs_become_lines() {
        let xml = r#"<w:document xmlns:w="ns">
            <w:body>
              <w:p><w:r><w:t>first</w:t></w:r></w:p>
              <w:p><w:r><w:t>second</w:t></w:r></w:p>
            </w:body>
          </w:document>"#;
        let text = document_xml_to_text(xml).unwrap();
        assert_eq!(text.trim(), "first\nsecond");
    }

    #[test]
    fn test_entities_are_unescaped() {
        let xml = r#"<w:document><w:body>
            <w:p><w:r><w:t>C&amp;O analyst</w:t></w:r></w:p>
          </w:body></w:document>"#;
        let text = document_xml_to_text(xml).unwrap();
        assert_eq!(text.trim(), "C&O analyst");
    }

    #[test]
    fn test_non_zip_bytes_error() {
        let result = extract(&mut Cursor::new(b"plain text, not a zip".to_vec()));
        assert!(matches!(result, Err(ExtractionError::Docx(_))));
    }

    #[test]
    fn test_archive_without_document_xml_errors() {
        use std::io::Write;
        use zip::write::FileOptions;

        let mut buf = Cursor::new(Vec::new());
        {
            let mut writer = zip::ZipWriter::new(&mut buf);
            writer.start_file("other.xml", FileOptions::default()).unwrap();
            writer.write_all(b"<x/>").unwrap();
            writer.finish().unwrap();
        }
        let bytes = buf.into_inner();
        let result = extract(&mut Cursor::new(bytes));
        assert!(matches!(result, Err(ExtractionError::Docx(_))));
    }
}
