//! Sosatree is a library to number the ancestors of a person with
//! Sosa-Stradonitz numbers and to print them as a LaTeX book.
//!
//! Starting from one root person of a genealogical record store (such as a
//! GEDCOM file), the crate walks the root's ancestors and produces:
//! - a **report**: one numbered entry per ancestor, where the father of `n` is
//!   `2n` and the mother `2n+1`. Ancestors reached along several lines
//!   (pedigree collapse) are listed once; later occurrences refer back to
//!   the first one.
//! - a **tree**: the ancestors laid out as a binary tree and split into pages
//!   of bounded depth. A branch that does not fit continues on a later page.
//!
//! Core functionality provided:
//! - GEDCOM: read GEDCOM files into raw records, see [crate::gedcom].
//! - Record index: identity-keyed persons and families, or bring your own
//!   records through the [RawRecord](crate::model::RawRecord) trait. See [crate::model].
//! - Report: [SosaReportBuilder](crate::report::SosaReportBuilder).
//! - Tree pages: [Paginator](crate::layout::Paginator).
//! - Output: LaTeX fragments ([crate::latex]) wrapped into a document by a
//!   [DocumentTemplate](crate::document::DocumentTemplate).
//! - Configurability via [ReportConfig]:
//!   - Generation cap across report and tree pages
//!   - Generations per tree page
//!   - Caption language (English or French), title and author
//!
//! Missing records, broken links and cyclic data never abort a run: unknown
//! parents are treated as absent and logged with `tracing`.
//!
//! # Usage patterns
//! 1. The quick API [generate_document_from_file] and [generate_document]
//!    runs everything with a [ReportConfig].
//! 2. For full control, build a [RecordIndex](crate::model::RecordIndex) and
//!    run [SosaReportBuilder](crate::report::SosaReportBuilder) and
//!    [Paginator](crate::layout::Paginator) yourself.
//!
//! ## Example
//! ```no_run
//! use sosatree::{ReportConfig, generate_document_from_file};
//! use sosatree::model::GenerationCap;
//!
//! let config = ReportConfig::new("@I0123@")
//!     .with_max_generation(GenerationCap::Limited(12))
//!     .with_max_generation_per_page(5);
//! let tex = generate_document_from_file("tree.ged", &config)?;
//! sosatree::document::write_document("tree.tex", &tex)?;
//! # Ok::<(), sosatree::SosaError>(())
//! ```
//!
//! ## Example with own records
//! ```
//! use sosatree::{ReportConfig, trace_ancestors};
//! use sosatree::model::{FamilyRecord, PersonName, PersonRecord, RecordIndex};
//!
//! let root = PersonRecord::new("@I1@", PersonName::parse("Ada /Byron/")).with_child_of("@F1@");
//! let father = PersonRecord::new("@I2@", PersonName::parse("George /Byron/"));
//! let family = FamilyRecord::new("@F1@", Some("@I2@".into()), None);
//! let index = RecordIndex::from_records(vec![root, father], vec![family]);
//!
//! let (report, pages) = trace_ancestors(&index, &ReportConfig::new("@I1@"))?;
//! assert_eq!(report.len(), 2);
//! assert_eq!(pages.len(), 1);
//! # Ok::<(), sosatree::SosaError>(())
//! ```

pub mod config;
pub mod document;
pub mod error;
pub mod gedcom;
pub mod latex;
pub mod layout;
pub mod locale;
pub mod model;
pub mod parser;
pub mod report;

pub use crate::config::ReportConfig;
pub use crate::error::{Result, SosaError};

use crate::document::{DocumentMeta, assemble_document};
use crate::latex::LatexBookTemplate;
use crate::layout::{Page, Paginator};
use crate::model::{RecordIndex, SosaNumber};
use crate::report::{SosaReport, SosaReportBuilder};
use std::path::Path;
use tracing::info;

// ============================================================================
// Quick API
// ============================================================================
/// Builds the report and the tree pages for the root of `config`.
///
/// # Errors
/// * [SosaError::InvalidConfig] if `config` does not validate
/// * [SosaError::EmptyRecordStore] if `index` holds no records at all
/// * [SosaError::MissingRoot] if the root is not a person of `index`
pub fn trace_ancestors(index: &RecordIndex, config: &ReportConfig) -> Result<(SosaReport, Vec<Page>)> {
    config.validate()?;
    if index.is_empty() {
        return Err(SosaError::EmptyRecordStore);
    }
    let root = index
        .person(config.root())
        .ok_or_else(|| SosaError::MissingRoot(config.root().clone()))?;

    let report = SosaReportBuilder::new(index)
        .with_max_generation(config.max_generation())
        .build(root);
    let pages = Paginator::new(index)
        .with_max_generation(config.max_generation())
        .with_max_generation_per_page(config.max_generation_per_page())
        .with_geometry(config.geometry())
        .with_locale(config.locale())
        .paginate(root, SosaNumber::ROOT);

    info!(
        root = %config.root(),
        ancestors = report.visited().len(),
        entries = report.len(),
        pages = pages.len(),
        "traced ancestors"
    );
    Ok((report, pages))
}

/// Generates the complete LaTeX book for the root of `config`.
///
/// See [trace_ancestors] for errors.
pub fn generate_document(index: &RecordIndex, config: &ReportConfig) -> Result<String> {
    let (report, pages) = trace_ancestors(index, config)?;
    let meta = DocumentMeta {
        title: config.title().to_string(),
        author: config.author().map(str::to_string),
        captions: config.locale().captions(),
    };
    Ok(assemble_document(&LatexBookTemplate, &meta, &pages, &report))
}

/// Reads a GEDCOM file and generates the complete LaTeX book for the root of `config`.
///
/// # Errors
/// Returns [SosaError::Parsing] if the file cannot be read or is malformed,
/// otherwise see [trace_ancestors].
pub fn generate_document_from_file<P: AsRef<Path>>(path: P, config: &ReportConfig) -> Result<String> {
    let records = gedcom::parse_file(path)?;
    let index = RecordIndex::build(records);
    generate_document(&index, config)
}
