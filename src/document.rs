//! Document assembly: wraps rendered pages and report into a complete document.
//!
//! The assembler is independent of the output format. It builds the body from
//! the rendered fragments and hands it to a [DocumentTemplate], which adds
//! everything around it (preamble, title page, index, ...).

use crate::latex::{self, escape};
use crate::layout::Page;
use crate::locale::Captions;
use crate::report::SosaReport;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;
use tracing::info;

/// Metadata passed to a [DocumentTemplate].
#[derive(Debug, Clone, PartialEq)]
pub struct DocumentMeta {
    /// Document title (unescaped)
    pub title: String,
    /// Document author (unescaped)
    pub author: Option<String>,
    /// Captions of the document language
    pub captions: &'static Captions,
}

/// Turns a document body into a complete document.
pub trait DocumentTemplate {
    /// Returns the complete document for the given metadata and body.
    fn render(&self, meta: &DocumentMeta, body: &str) -> String;
}

/// Builds the document body: a chapter with all tree pages, then a chapter
/// with the report.
pub fn assemble_body(pages: &[Page], report: &SosaReport, captions: &Captions) -> String {
    let trees = latex::render_pages(pages);
    let records = latex::render_report(report, captions);

    let mut body = String::with_capacity(trees.len() + records.len() + 128);
    body.push_str(&format!("\\chapter{{{}}}\n\n", escape(captions.trees_chapter)));
    body.push_str(&trees);
    body.push_str("\\newpage\n");
    body.push_str(&format!("\\chapter{{{}}}\n\n", escape(captions.records_chapter)));
    body.push_str(&records);
    body
}

/// Assembles the complete document from pages and report.
pub fn assemble_document<T: DocumentTemplate + ?Sized>(
    template: &T,
    meta: &DocumentMeta,
    pages: &[Page],
    report: &SosaReport,
) -> String {
    let body = assemble_body(pages, report, meta.captions);
    template.render(meta, &body)
}

/// Writes a document to the given path, replacing any existing file.
///
/// # Errors
/// Returns an I/O error if the file cannot be created or written.
pub fn write_document<P: AsRef<Path>>(path: P, document: &str) -> io::Result<()> {
    let path = path.as_ref();
    let mut writer = BufWriter::new(File::create(path)?);
    writer.write_all(document.as_bytes())?;
    writer.flush()?;
    info!(path = %path.display(), bytes = document.len(), "wrote document");
    Ok(())
}
