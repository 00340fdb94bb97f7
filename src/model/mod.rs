//! Data model of a genealogical record store.
//!
//! # Records
//! A record source (such as the [GEDCOM reader](crate::gedcom)) delivers
//! [RawRecord]s, tag/value trees with an optional identity. The
//! [RecordIndex] turns them into plain, immutable records keyed by [XrefId]:
//!
//! | Type | Source | Content |
//! |------|--------|---------|
//! | [PersonRecord] | `INDI` | name, birth, death, family as child |
//! | [FamilyRecord] | `FAM` | husband, wife, children |
//!
//! # Ancestry
//! [parents] resolves father and mother of a person through the index.
//! Ancestors are numbered with [SosaNumber]s, and traversals are bounded
//! by a [GenerationCap].

pub mod parent_resolver;
pub mod person;
pub mod record;
pub mod record_index;
pub mod sosa;

pub use parent_resolver::{Parents, parents};
pub use person::{FamilyRecord, FamilyRole, PersonName, PersonRecord, XrefId};
pub use record::{GedcomRecord, RawRecord};
pub use record_index::{Record, RecordIndex};
pub use sosa::{GenerationCap, MAX_SOSA_GENERATION, SosaNumber};
