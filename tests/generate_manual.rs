use std::fs;

use tempfile::TempDir;

use mediazion_manual::config::{ManualConfig, SectionConfig, SlotConfig, SlotSource};
use mediazion_manual::generate;

const NOTICE: &str = "[AVISO] No se encontró el archivo:";

#[test]
fn test_empty_directory_still_produces_both_artifacts() {
    let base = TempDir::new().unwrap();
    let out = TempDir::new().unwrap();
    let config = ManualConfig::default();

    let result = generate(&config, base.path(), out.path()).unwrap();

    let html = fs::read_to_string(&result.html_path).unwrap();
    let rtf = fs::read_to_string(&result.rtf_path).unwrap();

    // One notice per configured source file, nothing aborts the run
    assert_eq!(html.matches(NOTICE).count(), 13);
    for name in config.source_files() {
        assert!(html.contains(&format!("{NOTICE} {name}")), "missing notice for {name}");
    }

    // Prologue and appendix are always present
    assert!(html.contains("<h2>Prólogo</h2>"));
    assert!(html.contains("La sociedad moderna"));
    assert!(html.contains("<h2>Apéndice. Mediación y confianza cuántica</h2>"));
    assert!(html.contains("PQC (post-quantum cryptography)"));

    // The declared-but-empty slot keeps its sub-heading
    assert!(html.contains("<h3>2.2 Estándares y referencias europeas</h3>"));

    // RTF carries only front matter and prologue
    assert!(rtf.contains("Manual Profesional de Mediación"));
    assert!(rtf.contains("La sociedad moderna"));
    assert!(!rtf.contains(NOTICE));
    assert!(!rtf.contains("PQC"));
}

#[test]
fn test_output_filenames_follow_basename() {
    let base = TempDir::new().unwrap();
    let out = TempDir::new().unwrap();

    let result = generate(&ManualConfig::default(), base.path(), out.path()).unwrap();

    assert_eq!(
        result.html_path.file_name().unwrap(),
        "Manual-MEDIAZION-2025_ES.html"
    );
    assert_eq!(
        result.rtf_path.file_name().unwrap(),
        "Manual-MEDIAZION-2025_ES.rtf"
    );
}

#[test]
fn test_present_source_is_extracted_rebranded_and_escaped() {
    let base = TempDir::new().unwrap();
    let out = TempDir::new().unwrap();

    fs::write(
        base.path().join("reglamento.txt"),
        "Reglamento del IIMAT\n\n\n\nartículo 1 <ver anexo>",
    )
    .unwrap();

    let mut config = ManualConfig::default();
    config.sections = vec![SectionConfig {
        heading: "1. Reglamento".to_string(),
        slots: vec![SlotConfig {
            subheading: "1.1 Texto vigente".to_string(),
            source: SlotSource::File("reglamento.txt".to_string()),
        }],
    }];

    let result = generate(&config, base.path(), out.path()).unwrap();
    let html = fs::read_to_string(&result.html_path).unwrap();

    // Rebranded, blank lines collapsed, reserved characters escaped
    assert!(html.contains("<p>Reglamento del MEDIAZION</p><p>artículo 1 &lt;ver anexo&gt;</p>"));
    assert!(!html.contains("IIMAT"));
    assert!(!html.contains("<ver anexo>"));
}

#[test]
fn test_zero_length_document_renders_empty_paragraph() {
    let base = TempDir::new().unwrap();
    let out = TempDir::new().unwrap();

    fs::write(base.path().join("vacio.txt"), "").unwrap();

    let mut config = ManualConfig::default();
    config.sections = vec![SectionConfig {
        heading: "1. Sección".to_string(),
        slots: vec![SlotConfig {
            subheading: "1.1 Contenido pendiente".to_string(),
            source: SlotSource::File("vacio.txt".to_string()),
        }],
    }];

    let result = generate(&config, base.path(), out.path()).unwrap();
    let html = fs::read_to_string(&result.html_path).unwrap();

    // Structure is unaffected by empty content
    assert!(html.contains("<h3>1.1 Contenido pendiente</h3>\n<p></p>"));
}

#[test]
fn test_unreadable_legacy_doc_degrades_to_advisory() {
    let base = TempDir::new().unwrap();
    let out = TempDir::new().unwrap();

    // Real legacy .doc bytes, not a mislabeled DOCX container
    fs::write(
        base.path().join("8-arbitraje.doc"),
        b"\xd0\xcf\x11\xe0\xa1\xb1\x1a\xe1 legacy",
    )
    .unwrap();

    let result = generate(&ManualConfig::default(), base.path(), out.path()).unwrap();
    let html = fs::read_to_string(&result.html_path).unwrap();

    assert!(html.contains("[ATENCIÓN] Abrir este .doc en Word"));
    assert!(html.contains("Archivo: 8-arbitraje.doc"));
    // The other twelve files are still reported as missing
    assert_eq!(html.matches(NOTICE).count(), 12);
}
