use std::fs::File;
use std::io::Read;
use std::path::Path;

use quick_xml::events::Event;
use quick_xml::Reader;
use zip::ZipArchive;

use crate::extraction::ExtractionError;

const DOCUMENT_PART: &str = "word/document.xml";

/// Returns the text of every paragraph in document order, one per line.
pub fn extract_docx_text(path: &Path) -> Result<String, ExtractionError> {
    let file = File::open(path)?;
    let mut archive = ZipArchive::new(file).map_err(|e| ExtractionError::Docx(e.to_string()))?;

    let mut xml = String::new();
    archive
        .by_name(DOCUMENT_PART)
        .map_err(|e| ExtractionError::Docx(format!("{DOCUMENT_PART}: {e}")))?
        .read_to_string(&mut xml)?;

    document_text(&xml)
}

/// Walks `w:p` paragraphs and collects their `w:t` runs.
///
/// Paragraph properties and `mc:Fallback` subtrees are skipped: the former
/// hold tab-stop definitions, the latter duplicate their `mc:Choice` content.
fn document_text(xml: &str) -> Result<String, ExtractionError> {
    let mut reader = Reader::from_str(xml);
    let mut paragraphs: Vec<String> = Vec::new();
    // Paragraphs can nest (text boxes), so keep a stack of open ones.
    let mut open: Vec<String> = Vec::new();
    let mut in_text = false;
    let mut run_depth = 0usize;
    // Depth inside a skipped subtree; 0 when reading normally.
    let mut skip_depth = 0usize;

    loop {
        match reader.read_event() {
            Ok(Event::Start(_)) if skip_depth > 0 => skip_depth += 1,
            Ok(Event::End(_)) if skip_depth > 0 => skip_depth -= 1,
            Ok(Event::Eof) => break,
            Err(e) => {
                return Err(ExtractionError::Docx(format!(
                    "malformed {DOCUMENT_PART} at byte {}: {e}",
                    reader.buffer_position()
                )))
            }
            Ok(_) if skip_depth > 0 => {}
            Ok(Event::Start(e)) => match e.name().as_ref() {
                b"w:pPr" | b"mc:Fallback" => skip_depth = 1,
                b"w:p" => open.push(String::new()),
                b"w:r" => run_depth += 1,
                b"w:t" => in_text = true,
                _ => {}
            },
            Ok(Event::Empty(e)) => match e.name().as_ref() {
                b"w:p" => paragraphs.push(String::new()),
                b"w:tab" if run_depth > 0 => push_char(&mut open, '\t'),
                b"w:br" | b"w:cr" if run_depth > 0 => push_char(&mut open, '\n'),
                _ => {}
            },
            Ok(Event::Text(t)) if in_text => {
                let text = t
                    .unescape()
                    .map_err(|e| ExtractionError::Docx(format!("{DOCUMENT_PART}: {e}")))?;
                if let Some(paragraph) = open.last_mut() {
                    paragraph.push_str(&text);
                }
            }
            Ok(Event::End(e)) => match e.name().as_ref() {
                b"w:t" => in_text = false,
                b"w:r" => run_depth = run_depth.saturating_sub(1),
                b"w:p" => {
                    if let Some(paragraph) = open.pop() {
                        paragraphs.push(paragraph);
                    }
                }
                _ => {}
            },
            _ => {}
        }
    }

    Ok(paragraphs.join("\n"))
}

fn push_char(open: &mut [String], c: char) {
    if let Some(paragraph) = open.last_mut() {
        paragraph.push(c);
    }
}


#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::test_support::*;
    use super::*;

    fn write_temp(bytes: &[u8]) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(".docx").tempfile().unwrap();
        file.write_all(bytes).unwrap();
        file
    }

    #[test]
    fn test_paragraphs_joined_by_newline() {
        let file = write_temp(&docx_with_paragraphs(&["Jane Doe", "Rust, SQL"]));
        assert_eq!(extract_docx_text(file.path()).unwrap(), "Jane Doe\nRust, SQL");
    }

    #[test]
    fn test_runs_within_paragraph_concatenate() {
        let body = r#"<w:p><w:r><w:t>Senior </w:t></w:r><w:r><w:rPr><w:b/></w:rPr><w:t>Engineer</w:t></w:r></w:p>"#;
        let file = write_temp(&docx_from_body(body));
        assert_eq!(extract_docx_text(file.path()).unwrap(), "Senior Engineer");
    }

    #[test]
    fn test_tabs_and_entities() {
        let body = r#"<w:p><w:r><w:t>R&amp;D</w:t><w:tab/><w:t>2019</w:t></w:r></w:p>"#;
        let file = write_temp(&docx_from_body(body));
        assert_eq!(extract_docx_text(file.path()).unwrap(), "R&D\t2019");
    }

    #[test]
    fn test_empty_paragraphs_are_kept() {
        let body = r#"<w:p><w:r><w:t>A</w:t></w:r></w:p><w:p/><w:p><w:r><w:t>B</w:t></w:r></w:p>"#;
        let file = write_temp(&docx_from_body(body));
        assert_eq!(extract_docx_text(file.path()).unwrap(), "A\n\nB");
    }

    #[test]
    fn test_non_text_elements_ignored() {
        let body = r#"<w:p><w:r><w:instrText>PAGE</w:instrText><w:t>Visible</w:t></w:r></w:p>"#;
        let file = write_temp(&docx_from_body(body));
        assert_eq!(extract_docx_text(file.path()).unwrap(), "Visible");
    }

    #[test]
    fn test_tab_stop_definitions_are_not_text() {
        let body = r#"<w:p><w:pPr><w:tabs><w:tab w:val="left" w:pos="720"/><w:tab w:val="right" w:pos="9000"/></w:tabs></w:pPr><w:r><w:t>Python</w:t></w:r></w:p>"#;
        let file = write_temp(&docx_from_body(body));
        assert_eq!(extract_docx_text(file.path()).unwrap(), "Python");
    }

    #[test]
    fn test_breaks_outside_runs_are_ignored() {
        let body = r#"<w:p><w:pPr><w:rPr><w:b/></w:rPr></w:pPr><w:br/><w:r><w:t>A</w:t><w:br/><w:t>B</w:t></w:r></w:p>"#;
        let file = write_temp(&docx_from_body(body));
        assert_eq!(extract_docx_text(file.path()).unwrap(), "A\nB");
    }

    #[test]
    fn test_alternate_content_fallback_is_read_once() {
        let body = r#"<w:p><w:r><w:t>Header</w:t></w:r><w:r><mc:AlternateContent><mc:Choice Requires="wps"><w:drawing><w:txbxContent><w:p><w:r><w:t>Boxed skills: Rust</w:t></w:r></w:p></w:txbxContent></w:drawing></mc:Choice><mc:Fallback><w:pict><w:txbxContent><w:p><w:r><w:t>Boxed skills: Rust</w:t></w:r></w:p></w:txbxContent></w:pict></mc:Fallback></mc:AlternateContent></w:r></w:p>"#;
        let file = write_temp(&docx_from_body(body));

        let text = extract_docx_text(file.path()).unwrap();
        assert_eq!(text.matches("Boxed skills: Rust").count(), 1);
        assert!(text.contains("Header"));
    }

    #[test]
    fn test_not_a_zip_is_docx_error() {
        let file = write_temp(b"plain text pretending to be docx");
        assert!(matches!(
            extract_docx_text(file.path()),
            Err(ExtractionError::Docx(_))
        ));
    }
}
