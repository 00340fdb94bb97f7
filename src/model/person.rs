//! Person and family records of a genealogical record store.
//!
//! - [XrefId]: stable identity of a record.
//! - [PersonRecord] / [FamilyRecord]: plain, immutable views on `INDI` / `FAM` records.
//! - [FamilyRole]: how a person is linked into a family.

use crate::gedcom::defs::{BIRT, CHIL, DATE, DEAT, FAMC, HUSB, WIFE};
use crate::model::record::RawRecord;
use std::fmt;

/// Placeholder label for persons without any name
const UNKNOWN_NAME: &str = "?";

// =#========================================================================#=
// XREF ID
// =#========================================================================#=
/// Stable opaque identity of a record, e.g. `@I0123@`.
///
/// Identities are compared verbatim, enclosing `@` included.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct XrefId(String);

impl XrefId {
    /// Creates an identity from its textual form.
    pub fn new(id: impl Into<String>) -> Self {
        XrefId(id.into())
    }

    /// Returns the textual form of this identity.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for XrefId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for XrefId {
    fn from(id: &str) -> Self {
        XrefId::new(id)
    }
}

impl From<String> for XrefId {
    fn from(id: String) -> Self {
        XrefId(id)
    }
}

// =#========================================================================#=
// PERSON NAME
// =#========================================================================#=
/// Structured name of a person: surname and given name.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PersonName {
    surname: String,
    given: String,
}

impl PersonName {
    /// Creates a name from its parts.
    pub fn new(surname: impl Into<String>, given: impl Into<String>) -> Self {
        PersonName {
            surname: surname.into().trim().to_string(),
            given: given.into().trim().to_string(),
        }
    }

    /// Parses a GEDCOM name value `Given /Surname/ suffix`.
    ///
    /// The surname is the text between the slashes and the given name the text
    /// before them; anything after the closing slash is dropped. Without slashes,
    /// the whole value is taken as the given name.
    ///
    /// # Examples
    /// ```
    /// use sosatree::model::PersonName;
    ///
    /// let name = PersonName::parse("Marie Anne /Lavoisier/");
    /// assert_eq!(name.surname(), "Lavoisier");
    /// assert_eq!(name.given(), "Marie Anne");
    /// assert_eq!(name.label(), "Lavoisier, Marie Anne");
    ///
    /// assert_eq!(PersonName::parse("Voltaire").label(), "Voltaire");
    /// ```
    pub fn parse(value: &str) -> Self {
        match value.split_once('/') {
            Some((given, rest)) => {
                let surname = rest.split_once('/').map_or(rest, |(surname, _)| surname);
                PersonName::new(surname, given)
            }
            None => PersonName::new("", value),
        }
    }

    /// Returns the surname (possibly empty).
    pub fn surname(&self) -> &str {
        &self.surname
    }

    /// Returns the given name (possibly empty).
    pub fn given(&self) -> &str {
        &self.given
    }

    /// Returns the display label `Surname, Given`.
    ///
    /// Missing parts are left out; a completely unknown name is shown as `?`.
    pub fn label(&self) -> String {
        match (self.surname.is_empty(), self.given.is_empty()) {
            (false, false) => format!("{}, {}", self.surname, self.given),
            (false, true) => self.surname.clone(),
            (true, false) => self.given.clone(),
            (true, true) => UNKNOWN_NAME.to_string(),
        }
    }
}

// =#========================================================================#=
// FAMILY ROLE
// =#========================================================================#=
/// Role of a person link inside a family record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FamilyRole {
    /// Father of the family's children (`HUSB`)
    Husband,
    /// Mother of the family's children (`WIFE`)
    Wife,
    /// Child of the family (`CHIL`)
    Child,
}

impl FamilyRole {
    /// Maps a GEDCOM tag to a role, or `None` for tags that are not person links.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            HUSB => Some(FamilyRole::Husband),
            WIFE => Some(FamilyRole::Wife),
            CHIL => Some(FamilyRole::Child),
            _ => None,
        }
    }
}

// =#========================================================================#=
// PERSON RECORD
// =#========================================================================#=
/// An individual of the record store.
#[derive(Debug, Clone, PartialEq)]
pub struct PersonRecord {
    id: XrefId,
    name: PersonName,
    birth: Option<String>,
    death: Option<String>,
    /// Family in which this person is a child (first `FAMC` link)
    child_of: Option<XrefId>,
}

impl PersonRecord {
    /// Creates a person record directly, e.g. for tests or custom record sources.
    pub fn new(id: impl Into<XrefId>, name: PersonName) -> Self {
        PersonRecord {
            id: id.into(),
            name,
            birth: None,
            death: None,
            child_of: None,
        }
    }

    /// Sets the birth date (builder style).
    pub fn with_birth(mut self, birth: impl Into<String>) -> Self {
        self.birth = Some(birth.into());
        self
    }

    /// Sets the death date (builder style).
    pub fn with_death(mut self, death: impl Into<String>) -> Self {
        self.death = Some(death.into());
        self
    }

    /// Sets the family in which this person is a child (builder style).
    pub fn with_child_of(mut self, family: impl Into<XrefId>) -> Self {
        self.child_of = Some(family.into());
        self
    }

    /// Builds a person from a raw `INDI` record; `None` if it has no identity.
    ///
    /// Birth and death are the first non-empty `DATE` of the first `BIRT`
    /// and `DEAT` event respectively.
    pub fn from_raw<R: RawRecord>(record: &R) -> Option<Self> {
        let id = record.identity()?.clone();
        let event_date = |tag: &str| {
            record
                .sub_tags(tag)
                .next()
                .and_then(|event| event.first_value(DATE))
                .map(str::to_string)
        };
        let child_of = record
            .sub_tags(FAMC)
            .filter_map(|link| link.value())
            .map(str::trim)
            .find(|v| !v.is_empty())
            .map(XrefId::from);

        Some(PersonRecord {
            id,
            name: record.name().unwrap_or_default(),
            birth: event_date(BIRT),
            death: event_date(DEAT),
            child_of,
        })
    }

    /// Returns the identity of this person.
    pub fn id(&self) -> &XrefId {
        &self.id
    }

    /// Returns the structured name.
    pub fn name(&self) -> &PersonName {
        &self.name
    }

    /// Returns the display label `Surname, Given`.
    pub fn label(&self) -> String {
        self.name.label()
    }

    /// Returns the birth date as free text, if known.
    pub fn birth(&self) -> Option<&str> {
        self.birth.as_deref()
    }

    /// Returns the death date as free text, if known.
    pub fn death(&self) -> Option<&str> {
        self.death.as_deref()
    }

    /// Returns the family in which this person is a child, if linked.
    pub fn child_of(&self) -> Option<&XrefId> {
        self.child_of.as_ref()
    }
}

// =#========================================================================#=
// FAMILY RECORD
// =#========================================================================#=
/// A family of the record store, linking parents and children.
#[derive(Debug, Clone, PartialEq)]
pub struct FamilyRecord {
    id: XrefId,
    husband: Option<XrefId>,
    wife: Option<XrefId>,
    children: Vec<XrefId>,
}

impl FamilyRecord {
    /// Creates a family record directly, e.g. for tests or custom record sources.
    pub fn new(id: impl Into<XrefId>, husband: Option<XrefId>, wife: Option<XrefId>) -> Self {
        FamilyRecord {
            id: id.into(),
            husband,
            wife,
            children: Vec::new(),
        }
    }

    /// Adds a child link (builder style).
    pub fn with_child(mut self, child: impl Into<XrefId>) -> Self {
        self.children.push(child.into());
        self
    }

    /// Builds a family from a raw `FAM` record; `None` if it has no identity.
    ///
    /// Only the first husband and the first wife link are kept.
    pub fn from_raw<R: RawRecord>(record: &R) -> Option<Self> {
        let mut family = FamilyRecord::new(record.identity()?.clone(), None, None);

        for link in record.sub_records() {
            let Some(role) = FamilyRole::from_tag(link.tag()) else {
                continue;
            };
            let Some(target) = link.value().map(str::trim).filter(|v| !v.is_empty()) else {
                continue;
            };
            match role {
                FamilyRole::Husband if family.husband.is_none() => family.husband = Some(target.into()),
                FamilyRole::Wife if family.wife.is_none() => family.wife = Some(target.into()),
                FamilyRole::Child => family.children.push(target.into()),
                _ => {}
            }
        }

        Some(family)
    }

    /// Returns the identity of this family.
    pub fn id(&self) -> &XrefId {
        &self.id
    }

    /// Returns the link for the given parent role, if present.
    ///
    /// Always `None` for [FamilyRole::Child]; use [children](Self::children) instead.
    pub fn parent(&self, role: FamilyRole) -> Option<&XrefId> {
        match role {
            FamilyRole::Husband => self.husband.as_ref(),
            FamilyRole::Wife => self.wife.as_ref(),
            FamilyRole::Child => None,
        }
    }

    /// Returns the children links in source order.
    pub fn children(&self) -> &[XrefId] {
        &self.children
    }
}
