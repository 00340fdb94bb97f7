//! Resolution of a person's parents through the record index.

use crate::model::person::{FamilyRole, PersonRecord};
use crate::model::record_index::RecordIndex;
use tracing::warn;

/// Father and mother of a person, each possibly unknown.
pub type Parents<'a> = (Option<&'a PersonRecord>, Option<&'a PersonRecord>);

/// Returns `(father, mother)` of `person`.
///
/// Follows the first family link in which `person` is a child, then the first
/// husband and wife links of that family. Any link pointing to an identity
/// missing from `index` is treated as an unknown parent, never as an error.
///
/// # Example
/// ```
/// use sosatree::model::{parents, FamilyRecord, PersonName, PersonRecord, RecordIndex};
///
/// let child = PersonRecord::new("@I1@", PersonName::parse("Ada /Byron/")).with_child_of("@F1@");
/// let father = PersonRecord::new("@I2@", PersonName::parse("George /Byron/"));
/// let family = FamilyRecord::new("@F1@", Some("@I2@".into()), Some("@I3@".into()));
/// let index = RecordIndex::from_records(vec![child.clone(), father], vec![family]);
///
/// let (father, mother) = parents(&child, &index);
/// assert_eq!(father.unwrap().label(), "Byron, George");
/// assert!(mother.is_none()); // @I3@ is not in the index
/// ```
pub fn parents<'a>(person: &PersonRecord, index: &'a RecordIndex) -> Parents<'a> {
    let Some(family_id) = person.child_of() else {
        return (None, None);
    };
    let Some(family) = index.family(family_id) else {
        warn!(person = %person.id(), family = %family_id, "unresolved family link");
        return (None, None);
    };

    let resolve = |role: FamilyRole| {
        let id = family.parent(role)?;
        let parent = index.person(id);
        if parent.is_none() {
            warn!(family = %family_id, parent = %id, ?role, "unresolved parent link");
        }
        parent
    };

    (resolve(FamilyRole::Husband), resolve(FamilyRole::Wife))
}

impl RecordIndex {
    /// Returns `(father, mother)` of `person`, see [parents].
    pub fn parents(&self, person: &PersonRecord) -> Parents<'_> {
        parents(person, self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::person::{FamilyRecord, PersonName, XrefId};

    fn person(id: &str) -> PersonRecord {
        PersonRecord::new(id, PersonName::new(id, ""))
    }

    #[test]
    fn test_no_family_link() {
        let root = person("@I1@");
        let index = RecordIndex::from_records(vec![root.clone()], vec![]);
        assert_eq!(parents(&root, &index), (None, None));
    }

    #[test]
    fn test_broken_family_link() {
        let root = person("@I1@").with_child_of("@F404@");
        let index = RecordIndex::from_records(vec![root.clone()], vec![]);
        assert_eq!(parents(&root, &index), (None, None));
    }

    #[test]
    fn test_family_link_to_non_family() {
        let root = person("@I1@").with_child_of("@I2@");
        let index = RecordIndex::from_records(vec![root.clone(), person("@I2@")], vec![]);
        assert_eq!(parents(&root, &index), (None, None));
    }

    #[test]
    fn test_both_parents() {
        let root = person("@I1@").with_child_of("@F1@");
        let family = FamilyRecord::new("@F1@", Some(XrefId::new("@I2@")), Some(XrefId::new("@I3@")))
            .with_child("@I1@");
        let index = RecordIndex::from_records(
            vec![root.clone(), person("@I2@"), person("@I3@")],
            vec![family],
        );
        let (father, mother) = index.parents(&root);
        assert_eq!(father.map(|p| p.id().as_str()), Some("@I2@"));
        assert_eq!(mother.map(|p| p.id().as_str()), Some("@I3@"));
    }

    #[test]
    fn test_mother_only() {
        let root = person("@I1@").with_child_of("@F1@");
        let family = FamilyRecord::new("@F1@", None, Some(XrefId::new("@I3@")));
        let index = RecordIndex::from_records(vec![root.clone(), person("@I3@")], vec![family]);
        let (father, mother) = parents(&root, &index);
        assert!(father.is_none());
        assert_eq!(mother.map(|p| p.id().as_str()), Some("@I3@"));
    }
}
