use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

use crate::config::{ManualConfig, SlotSource};
use crate::extract::extract_text;
use crate::render::{build_html, build_rtf, Section, Slot};
use crate::utils::normalize;

/// Paths of the two artifacts written by a successful run.
#[derive(Debug, Clone)]
pub struct GeneratedManual {
    pub html_path: PathBuf,
    pub rtf_path: PathBuf,
}

fn resolve_slot(source: &SlotSource, base_dir: &Path, config: &ManualConfig) -> String {
    match source {
        SlotSource::Literal(text) => text.clone(),
        SlotSource::Empty => String::new(),
        SlotSource::File(name) => {
            let path = base_dir.join(name);
            if !path.exists() {
                warn!("Source document not found: {:?}", path);
                return format!("[AVISO] No se encontró el archivo: {name}");
            }
            normalize(
                &extract_text(&path),
                &config.rebrand_from,
                &config.rebrand_to,
            )
        }
    }
}

/// Build the ordered section list: the prologue first, then every outline
/// entry. Every declared slot is rendered even when its body is empty, so
/// the manual's structure never depends on which source files were present.
pub fn build_sections(config: &ManualConfig, base_dir: &Path) -> Vec<Section> {
    let mut sections = Vec::with_capacity(config.sections.len() + 1);

    sections.push(Section {
        heading: "Prólogo".to_string(),
        anchor: Some("prologo".to_string()),
        slots: vec![Slot {
            subheading: String::new(),
            body: config.prologue.clone(),
        }],
    });

    for section in &config.sections {
        let slots = section
            .slots
            .iter()
            .map(|slot| Slot {
                subheading: slot.subheading.clone(),
                body: resolve_slot(&slot.source, base_dir, config),
            })
            .collect();

        sections.push(Section {
            heading: section.heading.clone(),
            anchor: None,
            slots,
        });
    }

    sections
}

/// Generate both artifacts under `out_dir` from the documents in `base_dir`.
///
/// Per-document failures degrade to placeholder text inside the manual; only
/// a failed write of one of the two outputs aborts the run.
pub fn generate(config: &ManualConfig, base_dir: &Path, out_dir: &Path) -> Result<GeneratedManual> {
    info!("Assembling {} sections", config.sections.len() + 1);
    let sections = build_sections(config, base_dir);

    let html = build_html(config, &sections);
    let rtf = build_rtf(config);

    let html_path = out_dir.join(format!("{}.html", config.output_basename));
    let rtf_path = out_dir.join(format!("{}.rtf", config.output_basename));

    fs::write(&html_path, html).with_context(|| format!("Failed to write {:?}", html_path))?;
    fs::write(&rtf_path, rtf).with_context(|| format!("Failed to write {:?}", rtf_path))?;

    info!("Wrote {:?} and {:?}", html_path, rtf_path);

    Ok(GeneratedManual { html_path, rtf_path })
}
