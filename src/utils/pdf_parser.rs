use anyhow::{Context, Result};
use pdf_extract::extract_text;
use std::path::Path;
use tracing::{info, warn};

/// Extract the whole-document text of a PDF.
///
/// Reading order is preserved but layout is not: headers, footers and
/// multi-column pages may interleave with the body text.
pub fn extract_text_from_pdf(path: &Path) -> Result<String> {
    info!("Extracting text from PDF: {:?}", path);

    let text = extract_text(path)
        .with_context(|| format!("Failed to extract text from PDF: {:?}", path))?;

    if text.trim().is_empty() {
        warn!("PDF appears to be scanned or has no extractable text: {:?}", path);
    }

    Ok(text)
}
