use sosatree::document::{DocumentMeta, DocumentTemplate, assemble_document, write_document};
use sosatree::locale::Locale;
use sosatree::model::{GenerationCap, PersonName, PersonRecord, RecordIndex};
use sosatree::{ReportConfig, SosaError, generate_document, generate_document_from_file, trace_ancestors};
use std::path::Path;

fn fixture(name: &str) -> std::path::PathBuf {
    Path::new("tests").join("fixtures").join(name)
}

#[test]
fn test_generate_from_file() {
    let config = ReportConfig::new("@I1@").with_author("Tester");
    let result = generate_document_from_file(fixture("collapse.ged"), &config);
    if let Err(e) = &result {
        eprintln!("Error generating document: {e}");
    }
    let tex = result.unwrap();

    assert!(tex.starts_with("\\documentclass"));
    assert!(tex.contains("\\title{Family tree}"));
    assert!(tex.contains("\\author{Tester}"));

    // Trees before records, index at the end
    let trees = tex.find("\\chapter{The trees of my ancestors}").unwrap();
    let records = tex.find("\\chapter{The records of my ancestors}").unwrap();
    let index = tex.find("\\printindex").unwrap();
    assert!(trees < records && records < index);

    assert!(tex.contains("\\section{The root}"));
    assert!(tex.contains("\\node (n12) at (13.5,-1.5) {12 Martin, Henri};"));
    assert!(tex.contains("\\section{4. Martin, Louis}\n\\label{p4}\n"));
    assert!(tex.contains("\\section{6. Martin, Louis}\nSee \\hyperref[p4]{4}\n"));
    assert!(!tex.contains("\\label{p6}"));
}

#[test]
fn test_generate_french_with_pages() {
    let config = ReportConfig::new("@I1@")
        .with_locale(Locale::French)
        .with_max_generation_per_page(3)
        .with_max_generation(GenerationCap::Limited(6));
    let tex = generate_document_from_file(fixture("paternal_line.ged"), &config).unwrap();

    assert!(tex.contains("\\usepackage[french]{babel}"));
    assert!(tex.contains("\\section{La racine}"));
    assert!(tex.contains("\\section{Suite de la branche 4 (Line, Given3)}"));
    assert!(tex.contains("\\node (n4) at (9,9) {4 Line, Given3 \\\\ \\textbf{$\\Rightarrow$}};"));
    assert!(tex.contains("\\section{32. Line, Given6}"));
    assert!(!tex.contains("\\section{64."));
}

#[test]
fn test_missing_root() {
    let config = ReportConfig::new("@I999@");
    let err = generate_document_from_file(fixture("collapse.ged"), &config).unwrap_err();
    assert!(matches!(err, SosaError::MissingRoot(ref id) if id.as_str() == "@I999@"));

    // A family is not a person
    let config = ReportConfig::new("@F1@");
    let err = generate_document_from_file(fixture("collapse.ged"), &config).unwrap_err();
    assert!(matches!(err, SosaError::MissingRoot(_)));
}

#[test]
fn test_empty_record_store() {
    let err = generate_document(&RecordIndex::default(), &ReportConfig::new("@I1@")).unwrap_err();
    assert!(matches!(err, SosaError::EmptyRecordStore));
}

#[test]
fn test_invalid_config_is_rejected_first() {
    let config = ReportConfig::new("@I1@").with_max_generation_per_page(0);
    let err = generate_document(&RecordIndex::default(), &config).unwrap_err();
    assert!(matches!(err, SosaError::InvalidConfig(_)));
}

#[test]
fn test_parse_error_is_wrapped() {
    let err = generate_document_from_file(fixture("broken_level.ged"), &ReportConfig::new("@I1@")).unwrap_err();
    assert!(matches!(err, SosaError::Parsing(_)));
}

#[test]
fn test_trace_ancestors() {
    let root = PersonRecord::new("@I1@", PersonName::parse("Solo /Person/"));
    let index = RecordIndex::from_records(vec![root], vec![]);
    let (report, pages) = trace_ancestors(&index, &ReportConfig::new("@I1@")).unwrap();
    assert_eq!(report.len(), 1);
    assert_eq!(pages.len(), 1);
    assert!(pages[0].edges().is_empty());
}

/// Plain-text template for checking the assembler against another format
struct OutlineTemplate;

impl DocumentTemplate for OutlineTemplate {
    fn render(&self, meta: &DocumentMeta, body: &str) -> String {
        let sections = body.lines().filter(|l| l.starts_with("\\section")).count();
        format!("{}: {sections} sections", meta.title)
    }
}

#[test]
fn test_custom_template() {
    let root = PersonRecord::new("@I1@", PersonName::parse("Solo /Person/"));
    let index = RecordIndex::from_records(vec![root], vec![]);
    let (report, pages) = trace_ancestors(&index, &ReportConfig::new("@I1@")).unwrap();
    let meta = DocumentMeta {
        title: "Outline".to_string(),
        author: None,
        captions: Locale::English.captions(),
    };
    assert_eq!(assemble_document(&OutlineTemplate, &meta, &pages, &report), "Outline: 2 sections");
}

#[test]
fn test_write_document() {
    let path = std::env::temp_dir().join(format!("sosatree_test_{}.tex", std::process::id()));
    write_document(&path, "\\documentclass{scrbook}\n").unwrap();
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "\\documentclass{scrbook}\n");
    std::fs::remove_file(&path).unwrap();
}
