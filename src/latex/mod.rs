//! LaTeX rendering of reports and tree pages.
//!
//! The functions in this module only produce markup fragments as strings:
//! * [`render_report`] - one section per [ReportEntry](crate::report::ReportEntry)
//! * [`render_pages`] - one TikZ picture per [Page](crate::layout::Page)
//!
//! Wrapping the fragments into a complete document is the job of a
//! [DocumentTemplate](crate::document::DocumentTemplate), such as the
//! [LatexBookTemplate] of this module.

mod defs;
mod template;
mod writer;

pub use self::template::LatexBookTemplate;
pub use self::writer::{render_page, render_pages, render_report};

/// Escapes text for use in LaTeX body text.
///
/// # Example
/// ```
/// use sosatree::latex::escape;
///
/// assert_eq!(escape("Smith & Sons_1"), r"Smith \& Sons\_1");
/// assert_eq!(escape("~50%"), r"\~{}50\%");
/// ```
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\\' => out.push_str(r"\textbackslash{}"),
            '{' => out.push_str(r"\{"),
            '}' => out.push_str(r"\}"),
            '$' => out.push_str(r"\$"),
            '&' => out.push_str(r"\&"),
            '#' => out.push_str(r"\#"),
            '^' => out.push_str(r"\^{}"),
            '_' => out.push_str(r"\_"),
            '%' => out.push_str(r"\%"),
            '~' => out.push_str(r"\~{}"),
            _ => out.push(c),
        }
    }
    out
}

/// Escapes text for use as a `\index` key.
///
/// Like [escape], but also quotes the `makeindex` control characters `! @ | "`.
pub fn escape_index(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in escape(text).chars() {
        if matches!(c, '!' | '@' | '|' | '"') {
            out.push('"');
        }
        out.push(c);
    }
    out
}
