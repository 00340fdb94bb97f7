//! Book document template.

use crate::document::{DocumentMeta, DocumentTemplate};
use crate::latex::defs::{BOOK_CLASS_OPTIONS, BOOK_MARGIN};
use crate::latex::escape;
use std::fmt::Write;

/// `scrbook` document with title page, table of contents and index.
///
/// Loads `babel` (in the language of the captions), `geometry`, `hyperref`,
/// `makeidx` and `tikz`. Compile twice, with `makeindex` in between, to get
/// the table of contents, hyperlinks and index right.
///
/// # Example
/// ```
/// use sosatree::document::{DocumentMeta, DocumentTemplate};
/// use sosatree::latex::LatexBookTemplate;
/// use sosatree::locale::Locale;
///
/// let meta = DocumentMeta {
///     title: "Arbre généalogique".to_string(),
///     author: Some("Marc".to_string()),
///     captions: Locale::French.captions(),
/// };
/// let tex = LatexBookTemplate.render(&meta, "BODY\n");
/// assert!(tex.contains(r"\usepackage[french]{babel}"));
/// assert!(tex.contains(r"\author{Marc}"));
/// assert!(tex.trim_end().ends_with(r"\end{document}"));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct LatexBookTemplate;

impl DocumentTemplate for LatexBookTemplate {
    fn render(&self, meta: &DocumentMeta, body: &str) -> String {
        let mut tex = String::with_capacity(body.len() + 1024);

        let _ = writeln!(tex, "\\documentclass[{BOOK_CLASS_OPTIONS}]{{scrbook}}");
        let _ = writeln!(tex, "\\usepackage[{}]{{babel}}", meta.captions.babel_language);
        for package in ["geometry", "hyperref", "makeidx", "tikz"] {
            let _ = writeln!(tex, "\\usepackage{{{package}}}");
        }
        let _ = writeln!(tex, "\\geometry{{{BOOK_MARGIN}}}");
        tex.push_str("\\makeindex\n\n");

        tex.push_str("\\begin{document}\n");
        let _ = writeln!(tex, "\\title{{{}}}", escape(&meta.title));
        if let Some(author) = &meta.author {
            let _ = writeln!(tex, "\\author{{{}}}", escape(author));
        }
        tex.push_str("\\date{\\today}\n");
        tex.push_str("\\maketitle\n\n");
        tex.push_str("\\newpage\n");
        tex.push_str("\\tableofcontents\n\n");

        tex.push_str(body);

        tex.push_str("\n\\printindex\n");
        tex.push_str("\\end{document}\n");
        tex
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::locale::Locale;

    #[test]
    fn test_preamble_and_frame() {
        let meta = DocumentMeta {
            title: "Family & friends".to_string(),
            author: None,
            captions: Locale::English.captions(),
        };
        let tex = LatexBookTemplate.render(&meta, "%BODY%\n");

        assert!(tex.starts_with("\\documentclass[fontsize=12pt, twoside=false, secnumdepth=1, a4paper]{scrbook}\n"));
        assert!(tex.contains("\\usepackage[english]{babel}\n"));
        assert!(tex.contains("\\usepackage{tikz}\n"));
        assert!(tex.contains("\\title{Family \\& friends}\n"));
        assert!(!tex.contains("\\author"));

        let body = tex.find("%BODY%").unwrap();
        assert!(tex.find("\\tableofcontents").unwrap() < body);
        assert!(tex.find("\\printindex").unwrap() > body);
    }
}
