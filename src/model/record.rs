//! Raw records as delivered by a record source.
//!
//! - [RawRecord]: accessor interface the record index relies on.
//! - [GedcomRecord]: tag/value tree produced by the [GEDCOM reader](crate::gedcom).

use crate::gedcom::defs::{GIVN, NAME, SURN};
use crate::model::person::{PersonName, XrefId};

// =#========================================================================#=
// RAW RECORD (Trait)
// =#========================================================================#=
/// Accessors a record source must offer for its records.
///
/// A raw record is a node of a tag/value tree: it has a tag, an optional
/// value, optional stable identity (only meaningful on top-level records)
/// and an ordered list of sub-records. The [RecordIndex](crate::model::RecordIndex)
/// only relies on this interface, not on any file format.
pub trait RawRecord {
    /// Stable identity of this record, if any.
    fn identity(&self) -> Option<&XrefId>;

    /// Tag of this record, e.g. `INDI` or `FAMC`.
    fn tag(&self) -> &str;

    /// Value of this record, if any.
    fn value(&self) -> Option<&str>;

    /// All sub-records, regardless of tag, in source order.
    fn sub_records(&self) -> &[Self]
    where
        Self: Sized;

    /// Iterates over the sub-records with the given tag, in source order.
    fn sub_tags<'a>(&'a self, tag: &'a str) -> impl Iterator<Item = &'a Self>
    where
        Self: Sized,
    {
        self.sub_records().iter().filter(move |r| r.tag() == tag)
    }

    /// Returns the first non-empty value among the sub-records with the given tag.
    fn first_value(&self, tag: &str) -> Option<&str>
    where
        Self: Sized,
    {
        self.sub_records()
            .iter()
            .filter(|r| r.tag() == tag)
            .filter_map(|r| r.value())
            .find(|v| !v.is_empty())
    }

    /// Structured name (surname, given name) of this record, if it has a `NAME`.
    fn name(&self) -> Option<PersonName>
    where
        Self: Sized,
    {
        let name_record = self.sub_tags(NAME).next()?;
        match name_record.value().filter(|v| !v.trim().is_empty()) {
            Some(value) => Some(PersonName::parse(value)),
            None => Some(PersonName::new(
                name_record.first_value(SURN).unwrap_or_default(),
                name_record.first_value(GIVN).unwrap_or_default(),
            )),
        }
    }
}

// =#========================================================================#=
// GEDCOM RECORD
// =#========================================================================#=
/// A GEDCOM line together with its nested lines.
///
/// Continuation lines (`CONC`, `CONT`) are already folded into [value](Self::value).
#[derive(Debug, Clone, PartialEq)]
pub struct GedcomRecord {
    /// Level of this line (0 for top-level records)
    level: usize,
    /// Cross-reference identifier, e.g. `@I1@`
    xref: Option<XrefId>,
    tag: String,
    value: Option<String>,
    children: Vec<GedcomRecord>,
}

impl GedcomRecord {
    /// Creates a record without children.
    pub fn new(level: usize, xref: Option<XrefId>, tag: impl Into<String>, value: Option<String>) -> Self {
        GedcomRecord {
            level,
            xref,
            tag: tag.into(),
            value,
            children: Vec::new(),
        }
    }

    /// Attaches a sub-record (builder style).
    pub fn with_child(mut self, child: GedcomRecord) -> Self {
        self.children.push(child);
        self
    }

    /// Returns the level of this line.
    pub fn level(&self) -> usize {
        self.level
    }

    pub(crate) fn push_child(&mut self, child: GedcomRecord) {
        self.children.push(child);
    }

    /// Appends continuation text to the value, optionally after a newline (`CONT`).
    pub(crate) fn append_value(&mut self, text: &str, newline: bool) {
        let value = self.value.get_or_insert_with(String::new);
        if newline {
            value.push('\n');
        }
        value.push_str(text);
    }
}

impl RawRecord for GedcomRecord {
    fn identity(&self) -> Option<&XrefId> {
        self.xref.as_ref()
    }

    fn tag(&self) -> &str {
        &self.tag
    }

    fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    fn sub_records(&self) -> &[Self] {
        &self.children
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn leaf(level: usize, tag: &str, value: &str) -> GedcomRecord {
        GedcomRecord::new(level, None, tag, Some(value.to_string()))
    }

    #[test]
    fn test_first_value_skips_empty_values() {
        let birth = GedcomRecord::new(1, None, "BIRT", None)
            .with_child(leaf(2, "DATE", ""))
            .with_child(leaf(2, "DATE", "12 MAR 1850"))
            .with_child(leaf(2, "DATE", "1851"));
        assert_eq!(birth.first_value("DATE"), Some("12 MAR 1850"));
        assert_eq!(birth.first_value("PLAC"), None);
    }

    #[test]
    fn test_name_from_value_and_from_parts() {
        let from_value = GedcomRecord::new(0, Some(XrefId::new("@I1@")), "INDI", None)
            .with_child(leaf(1, "NAME", "Jean Baptiste /Martin/"));
        let name = from_value.name().unwrap();
        assert_eq!(name.surname(), "Martin");
        assert_eq!(name.given(), "Jean Baptiste");

        let from_parts = GedcomRecord::new(0, Some(XrefId::new("@I2@")), "INDI", None).with_child(
            GedcomRecord::new(1, None, "NAME", None)
                .with_child(leaf(2, "GIVN", "Louise"))
                .with_child(leaf(2, "SURN", "Durand")),
        );
        let name = from_parts.name().unwrap();
        assert_eq!(name.surname(), "Durand");
        assert_eq!(name.given(), "Louise");

        let nameless = GedcomRecord::new(0, Some(XrefId::new("@I3@")), "INDI", None);
        assert!(nameless.name().is_none());
    }
}
