//! Markup fragments for report entries and tree pages.

use crate::latex::defs::{CONTINUATION_MARKER, ENTRY_LABEL_PREFIX, LINE_BREAK, NODE_NAME_PREFIX, NODE_STYLE};
use crate::latex::{escape, escape_index};
use crate::layout::{LayoutNode, Page};
use crate::locale::Captions;
use crate::report::{EntryKind, ReportEntry, SosaReport};
use std::fmt::Write;

/// Rough number of characters per rendered entry or node
const CHARS_PER_ITEM: usize = 96;

// ============================================================================
// Report
// ============================================================================
/// Renders all entries of a report, in report order.
///
/// A full entry becomes a section `"{n}. {label}"` with the label `p{n}`, an
/// index entry and a table of birth and death. A cross-reference becomes a
/// section with a hyperlink to the label of the first occurrence.
///
/// # Example
/// ```
/// use sosatree::latex::render_report;
/// use sosatree::locale::Locale;
/// use sosatree::model::{GenerationCap, PersonName, PersonRecord, RecordIndex};
/// use sosatree::report::build_report;
///
/// let root = PersonRecord::new("@I1@", PersonName::parse("Ada /Byron/")).with_birth("10 DEC 1815");
/// let index = RecordIndex::from_records(vec![root.clone()], vec![]);
/// let report = build_report(&root, &index, GenerationCap::Unbounded);
///
/// let tex = render_report(&report, Locale::English.captions());
/// assert!(tex.contains(r"\section{1. Byron, Ada}"));
/// assert!(tex.contains(r"Birth : & 10 DEC 1815 \\"));
/// ```
pub fn render_report(report: &SosaReport, captions: &Captions) -> String {
    let mut tex = String::with_capacity(report.len() * CHARS_PER_ITEM);
    for entry in report.entries() {
        render_entry(&mut tex, entry, captions);
    }
    tex
}

fn render_entry(tex: &mut String, entry: &ReportEntry, captions: &Captions) {
    let sosa = entry.sosa();
    let label = escape(entry.label());
    // Writing into a String cannot fail
    let _ = writeln!(tex, r"\section{{{sosa}. {label}}}");

    match entry.kind() {
        EntryKind::Full { birth, death } => {
            let _ = writeln!(tex, r"\label{{{ENTRY_LABEL_PREFIX}{sosa}}}");
            let _ = writeln!(tex, r"\index{{{}}}", escape_index(entry.label()));
            tex.push_str("\\begin{tabular}{ll}\n");
            for (caption, date) in [(captions.birth, birth), (captions.death, death)] {
                let date = date.as_deref().map(escape).unwrap_or_default();
                let _ = writeln!(tex, "{caption} : & {date} {LINE_BREAK}");
            }
            tex.push_str("\\end{tabular}\n\n");
        }
        EntryKind::CrossReference { canonical } => {
            let _ = writeln!(
                tex,
                r"{} \hyperref[{ENTRY_LABEL_PREFIX}{canonical}]{{{canonical}}}",
                captions.see
            );
            tex.push('\n');
        }
    }
}

// ============================================================================
// Tree pages
// ============================================================================
/// Renders all pages, in page order.
pub fn render_pages(pages: &[Page]) -> String {
    let nodes: usize = pages.iter().map(|p| p.nodes().len()).sum();
    let mut tex = String::with_capacity(nodes * CHARS_PER_ITEM);
    for page in pages {
        tex.push_str(&render_page(page));
    }
    tex
}

/// Renders one page as a new page with a section and a centered TikZ picture.
///
/// Nodes are named `n{sosa}`; each edge is drawn from the descendant to the
/// parent. Continuation leaves carry an arrow below their label.
///
/// # Example
/// ```
/// use sosatree::latex::render_page;
/// use sosatree::layout::layout;
/// use sosatree::model::{GenerationCap, PersonName, PersonRecord, RecordIndex, SosaNumber};
///
/// let root = PersonRecord::new("@I1@", PersonName::parse("Ada /Byron/"));
/// let index = RecordIndex::from_records(vec![root.clone()], vec![]);
/// let pages = layout(&root, SosaNumber::ROOT, &index, GenerationCap::Unbounded, 5);
///
/// let tex = render_page(&pages[0]);
/// assert!(tex.contains(r"\node (n1) at (0,0) {1 Byron, Ada};"));
/// ```
pub fn render_page(page: &Page) -> String {
    let mut tex = String::with_capacity((page.nodes().len() + 8) * CHARS_PER_ITEM);

    tex.push_str("\\newpage\n");
    let _ = writeln!(tex, r"\section{{{}}}", escape(page.title()));
    tex.push_str("\\begin{center}\n");
    let _ = writeln!(tex, "\\begin{{tikzpicture}}[\n{NODE_STYLE}\n]");

    for node in page.nodes() {
        render_node(&mut tex, node);
    }
    for edge in page.edges() {
        let _ = writeln!(
            tex,
            r"\draw ({NODE_NAME_PREFIX}{}) -- ({NODE_NAME_PREFIX}{});",
            edge.from, edge.to
        );
    }

    tex.push_str("\\end{tikzpicture}\n");
    tex.push_str("\\end{center}\n\n");
    tex
}

fn render_node(tex: &mut String, node: &LayoutNode) {
    let position = node.position();
    let sosa = node.sosa();
    let _ = write!(
        tex,
        r"\node ({NODE_NAME_PREFIX}{sosa}) at ({},{}) {{{sosa} {}",
        position.x,
        position.y,
        escape(node.label())
    );
    if node.is_continuation() {
        let _ = write!(tex, " {LINE_BREAK} {CONTINUATION_MARKER}");
    }
    tex.push_str("};\n");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::{Coordinate, LayoutEdge};
    use crate::locale::Locale;
    use crate::model::{GenerationCap, PersonName, PersonRecord, RecordIndex, SosaNumber, XrefId};
    use crate::report::build_report;

    fn sosa(n: u64) -> SosaNumber {
        SosaNumber::new(n).unwrap()
    }

    #[test]
    fn test_render_cross_reference() {
        // Root whose father and mother are the same person
        let root = PersonRecord::new("@I1@", PersonName::parse("Ada /Byron/")).with_child_of("@F1@");
        let parent = PersonRecord::new("@I2@", PersonName::parse("Pat /Doe/")).with_death("1900");
        let family = crate::model::FamilyRecord::new(
            "@F1@",
            Some(XrefId::new("@I2@")),
            Some(XrefId::new("@I2@")),
        );
        let index = RecordIndex::from_records(vec![root.clone(), parent], vec![family]);
        let report = build_report(&root, &index, GenerationCap::Unbounded);

        let tex = render_report(&report, Locale::French.captions());
        assert!(tex.contains("\\section{2. Doe, Pat}\n\\label{p2}\n\\index{Doe, Pat}\n"));
        assert!(tex.contains("Décès : & 1900 \\\\\n"));
        assert!(tex.contains("Naissance : &  \\\\\n"));
        assert!(tex.contains("\\section{3. Doe, Pat}\nVoir \\hyperref[p2]{2}\n"));
        assert!(!tex.contains("\\label{p3}"));
    }

    #[test]
    fn test_render_escapes_labels() {
        let root = PersonRecord::new("@I1@", PersonName::new("O'Hara & Co", "J_R"));
        let index = RecordIndex::from_records(vec![root.clone()], vec![]);
        let report = build_report(&root, &index, GenerationCap::Unbounded);
        let tex = render_report(&report, Locale::English.captions());
        assert!(tex.contains(r"\section{1. O'Hara \& Co, J\_R}"));
    }

    #[test]
    fn test_render_page() {
        let mut page = Page::new("Continuation of branch 4 (Doe, Jo)".to_string(), XrefId::new("@I4@"), sosa(4), 2);
        page.nodes.push(LayoutNode {
            sosa: sosa(4),
            person: XrefId::new("@I4@"),
            label: "Doe, Jo".to_string(),
            position: Coordinate { x: 0.0, y: 0.0 },
            continuation: false,
        });
        page.nodes.push(LayoutNode {
            sosa: sosa(8),
            person: XrefId::new("@I8@"),
            label: "Doe, Al".to_string(),
            position: Coordinate { x: 4.5, y: 6.0 },
            continuation: true,
        });
        page.edges.push(LayoutEdge { from: sosa(4), to: sosa(8) });

        let tex = render_page(&page);
        assert!(tex.starts_with("\\newpage\n\\section{Continuation of branch 4 (Doe, Jo)}\n\\begin{center}\n"));
        assert!(tex.contains("\\node (n4) at (0,0) {4 Doe, Jo};\n"));
        assert!(tex.contains("\\node (n8) at (4.5,6) {8 Doe, Al \\\\ \\textbf{$\\Rightarrow$}};\n"));
        assert!(tex.contains("\\draw (n4) -- (n8);\n"));
        assert!(tex.ends_with("\\end{tikzpicture}\n\\end{center}\n\n"));
    }

    #[test]
    fn test_render_pages_concatenates_in_order() {
        let first = Page::new("A".to_string(), XrefId::new("@I1@"), sosa(1), 0);
        let second = Page::new("B".to_string(), XrefId::new("@I2@"), sosa(2), 1);
        let tex = render_pages(&[first, second]);
        let a = tex.find(r"\section{A}").unwrap();
        let b = tex.find(r"\section{B}").unwrap();
        assert!(a < b);
    }
}
