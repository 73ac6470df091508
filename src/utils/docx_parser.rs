use quick_xml::events::Event;
use quick_xml::Reader;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use thiserror::Error;
use tracing::info;
use zip::ZipArchive;

/// Failure modes when reading a DOCX container.
#[derive(Debug, Error)]
pub enum DocxError {
    #[error("not a DOCX container: {0}")]
    Container(#[from] zip::result::ZipError),
    #[error("word/document.xml missing from container")]
    MissingDocument,
    #[error("malformed document XML: {0}")]
    Xml(#[from] quick_xml::Error),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Extract paragraph text from a DOCX file.
///
/// DOCX is a ZIP archive whose main content lives in `word/document.xml`:
/// paragraphs are `w:p` elements, text runs are `w:t`. Tabs and explicit
/// breaks inside a paragraph map to `\t` and `\n`; paragraphs are joined
/// with `\n` in document order.
pub fn extract_text_from_docx(path: &Path) -> Result<String, DocxError> {
    info!("Extracting text from DOCX: {:?}", path);

    let file = File::open(path)?;
    let mut archive = ZipArchive::new(file)?;

    let mut xml = String::new();
    archive
        .by_name("word/document.xml")
        .map_err(|_| DocxError::MissingDocument)?
        .read_to_string(&mut xml)?;

    let paragraphs = parse_document_xml(&xml)?;
    info!("Extracted {} paragraphs from DOCX", paragraphs.len());

    Ok(paragraphs.join("\n"))
}

fn parse_document_xml(xml: &str) -> Result<Vec<String>, DocxError> {
    let mut reader = Reader::from_str(xml);
    let mut buf = Vec::new();

    let mut paragraphs = Vec::new();
    let mut current = String::new();
    let mut in_text_run = false;

    loop {
        match reader.read_event_into(&mut buf)? {
            Event::Start(e) => {
                if e.name().as_ref() == b"w:t" {
                    in_text_run = true;
                }
            }
            Event::Empty(e) => match e.name().as_ref() {
                b"w:tab" => current.push('\t'),
                b"w:br" | b"w:cr" => current.push('\n'),
                // A self-closing w:p is still a (blank) paragraph
                b"w:p" => paragraphs.push(String::new()),
                _ => {}
            },
            Event::Text(t) => {
                if in_text_run {
                    current.push_str(&t.unescape()?);
                }
            }
            Event::End(e) => match e.name().as_ref() {
                b"w:t" => in_text_run = false,
                b"w:p" => paragraphs.push(std::mem::take(&mut current)),
                _ => {}
            },
            Event::Eof => break,
            _ => {}
        }
        buf.clear();
    }

    Ok(paragraphs)
}
