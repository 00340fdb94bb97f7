//! Identity-keyed lookup table over the records of a record store.

use crate::gedcom::defs::{FAM, INDI};
use crate::model::person::{FamilyRecord, PersonRecord, XrefId};
use crate::model::record::RawRecord;
use std::collections::HashMap;
use tracing::debug;

// =#========================================================================#=
// RECORD
// =#========================================================================#=
/// An identified record of the store.
#[derive(Debug, Clone, PartialEq)]
pub enum Record {
    /// An individual (`INDI`)
    Person(PersonRecord),
    /// A family (`FAM`)
    Family(FamilyRecord),
    /// Any other identified record (sources, notes, ...), kept by tag only
    Other {
        /// Tag of the record, e.g. `SOUR`
        tag: String,
    },
}

// =#========================================================================#=
// RECORD INDEX
// =#========================================================================#=
/// Read-only mapping from identity to record.
///
/// Built once with [RecordIndex::build] and then shared by reference with
/// every traversal. Records without identity are ignored; if an identity
/// occurs twice, the later record wins.
///
/// # Example
/// ```
/// use sosatree::gedcom;
/// use sosatree::model::{RecordIndex, XrefId};
///
/// let records = gedcom::parse_str("0 @I1@ INDI\n1 NAME Ada /Byron/\n0 TRLR\n").unwrap();
/// let index = RecordIndex::build(records);
/// assert_eq!(index.len(), 1);
/// let ada = index.person(&XrefId::new("@I1@")).unwrap();
/// assert_eq!(ada.label(), "Byron, Ada");
/// ```
#[derive(Debug, Clone, Default)]
pub struct RecordIndex {
    records: HashMap<XrefId, Record>,
}

impl RecordIndex {
    /// Builds the index from raw records.
    ///
    /// `INDI` records become [Record::Person], `FAM` records [Record::Family],
    /// everything else with an identity [Record::Other].
    pub fn build<R, I>(records: I) -> Self
    where
        R: RawRecord,
        I: IntoIterator<Item = R>,
    {
        let mut index = RecordIndex::default();
        for raw in records {
            let Some(id) = raw.identity().cloned() else {
                continue;
            };
            let record = match raw.tag() {
                INDI => PersonRecord::from_raw(&raw).map(Record::Person),
                FAM => FamilyRecord::from_raw(&raw).map(Record::Family),
                other => Some(Record::Other {
                    tag: other.to_string(),
                }),
            };
            if let Some(record) = record {
                index.insert(id, record);
            }
        }

        debug!(
            records = index.len(),
            persons = index.num_persons(),
            families = index.num_families(),
            "built record index"
        );
        index
    }

    /// Builds the index from already constructed person and family records.
    pub fn from_records(persons: Vec<PersonRecord>, families: Vec<FamilyRecord>) -> Self {
        let mut index = RecordIndex::default();
        for person in persons {
            index.insert(person.id().clone(), Record::Person(person));
        }
        for family in families {
            index.insert(family.id().clone(), Record::Family(family));
        }
        index
    }

    fn insert(&mut self, id: XrefId, record: Record) {
        if self.records.insert(id.clone(), record).is_some() {
            debug!(%id, "duplicate identity, keeping later record");
        }
    }

    /// Returns the record with the given identity, if present.
    pub fn record(&self, id: &XrefId) -> Option<&Record> {
        self.records.get(id)
    }

    /// Returns the person with the given identity, if present and a person.
    pub fn person(&self, id: &XrefId) -> Option<&PersonRecord> {
        match self.records.get(id) {
            Some(Record::Person(person)) => Some(person),
            _ => None,
        }
    }

    /// Returns the family with the given identity, if present and a family.
    pub fn family(&self, id: &XrefId) -> Option<&FamilyRecord> {
        match self.records.get(id) {
            Some(Record::Family(family)) => Some(family),
            _ => None,
        }
    }

    /// Returns the number of identified records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns whether the index holds no record at all.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Returns the number of persons.
    pub fn num_persons(&self) -> usize {
        self.records
            .values()
            .filter(|r| matches!(r, Record::Person(_)))
            .count()
    }

    /// Returns the number of families.
    pub fn num_families(&self) -> usize {
        self.records
            .values()
            .filter(|r| matches!(r, Record::Family(_)))
            .count()
    }
}
