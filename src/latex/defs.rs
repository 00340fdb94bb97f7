//! LaTeX markup constants.

/// Horizontal line break inside a node or table row
pub(crate) const LINE_BREAK: &str = r"\\";

/// Marker appended to a continuation leaf
pub(crate) const CONTINUATION_MARKER: &str = r"\textbf{$\Rightarrow$}";

/// Style of all nodes of a tree page
pub(crate) const NODE_STYLE: &str =
    r"every node/.style={draw, rounded corners, align=center, font=\tiny, minimum width=2.6cm}";

/// Prefix of the label of a report entry, followed by its Sosa number
pub(crate) const ENTRY_LABEL_PREFIX: &str = "p";

/// Prefix of the TikZ name of a node, followed by its Sosa number
pub(crate) const NODE_NAME_PREFIX: &str = "n";

/// Document class options of the book template
pub(crate) const BOOK_CLASS_OPTIONS: &str = "fontsize=12pt, twoside=false, secnumdepth=1, a4paper";

/// Page margin of the book template
pub(crate) const BOOK_MARGIN: &str = "margin=2cm";
