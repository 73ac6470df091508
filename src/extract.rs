use anyhow::Result;
use std::fs;
use std::path::Path;
use tracing::warn;

use crate::utils::{extract_text_from_docx, extract_text_from_pdf};

/// Best-effort plain-text extraction, dispatched on file extension.
///
/// This never fails: any extraction error is folded into a placeholder
/// string that becomes part of the generated manual, so a corrupt or
/// unreadable source degrades a single slot instead of aborting the run.
pub fn extract_text(path: &Path) -> String {
    match try_extract(path) {
        Ok(text) => text,
        Err(e) => {
            warn!("Extraction failed for {:?}: {:#}", path, e);
            format!(
                "[ERROR] No se pudo extraer texto de {}: {:#}",
                file_name(path),
                e
            )
        }
    }
}

fn try_extract(path: &Path) -> Result<String> {
    let ext = path
        .extension()
        .and_then(|s| s.to_str())
        .unwrap_or("")
        .to_lowercase();

    match ext.as_str() {
        "docx" => Ok(extract_text_from_docx(path)?),
        // Legacy .doc files are often DOCX containers with the old
        // extension; try that first, otherwise tell the reader how to
        // resave the file instead of pretending we parsed it.
        "doc" => match extract_text_from_docx(path) {
            Ok(text) => Ok(text),
            Err(_) => Ok(format!(
                "[ATENCIÓN] Abrir este .doc en Word y Guardar como .docx para extracción \
                 limpia.\n\nArchivo: {}",
                file_name(path)
            )),
        },
        "pdf" => extract_text_from_pdf(path),
        _ => {
            let bytes = fs::read(path)?;
            Ok(String::from_utf8_lossy(&bytes).into_owned())
        }
    }
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
