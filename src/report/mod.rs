//! Sosa report: the numbered list of all ancestors of a person.
//!
//! The [SosaReportBuilder] walks the ancestors depth-first in pre-order
//! (person, father's line, mother's line) and numbers them with
//! [SosaNumber]s. A person reached a second time (pedigree collapse) is
//! only listed as a cross-reference to the first occurrence, and the walk
//! does not descend into their ancestors again.
//!
//! The report is plain data; see [render_report](crate::latex::render_report)
//! for the LaTeX rendering.

use crate::model::{GenerationCap, PersonRecord, RecordIndex, SosaNumber, XrefId, parents};
use std::collections::HashMap;
use tracing::{debug, warn};

// =#========================================================================#=
// VISITED SET
// =#========================================================================#=
/// Canonical Sosa number of every person already listed in one report run.
#[derive(Debug, Clone, Default)]
pub struct VisitedSet {
    canonical: HashMap<XrefId, SosaNumber>,
}

impl VisitedSet {
    /// Returns the number the person was first listed under, if listed.
    pub fn canonical(&self, id: &XrefId) -> Option<SosaNumber> {
        self.canonical.get(id).copied()
    }

    /// Records the first occurrence of a person; later calls for the same person are ignored.
    fn record(&mut self, id: &XrefId, sosa: SosaNumber) {
        self.canonical.entry(id.clone()).or_insert(sosa);
    }

    /// Returns the number of distinct persons listed.
    pub fn len(&self) -> usize {
        self.canonical.len()
    }

    pub fn is_empty(&self) -> bool {
        self.canonical.is_empty()
    }
}

// =#========================================================================#=
// REPORT ENTRY
// =#========================================================================#=
/// Content of a report entry.
#[derive(Debug, Clone, PartialEq)]
pub enum EntryKind {
    /// First occurrence of a person, with life dates
    Full {
        birth: Option<String>,
        death: Option<String>,
    },
    /// Later occurrence, pointing at the first one
    CrossReference { canonical: SosaNumber },
}

/// One numbered entry of the report.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportEntry {
    sosa: SosaNumber,
    person: XrefId,
    label: String,
    kind: EntryKind,
}

impl ReportEntry {
    pub fn sosa(&self) -> SosaNumber {
        self.sosa
    }

    pub fn person(&self) -> &XrefId {
        &self.person
    }

    /// Display label `Surname, Given`.
    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn kind(&self) -> &EntryKind {
        &self.kind
    }

    /// Returns the canonical number if this entry is a cross-reference.
    pub fn cross_reference(&self) -> Option<SosaNumber> {
        match self.kind {
            EntryKind::CrossReference { canonical } => Some(canonical),
            EntryKind::Full { .. } => None,
        }
    }
}

// =#========================================================================#=
// SOSA REPORT
// =#========================================================================#=
/// Result of one report run: entries in pre-order plus the visited set.
#[derive(Debug, Clone, Default)]
pub struct SosaReport {
    entries: Vec<ReportEntry>,
    visited: VisitedSet,
}

impl SosaReport {
    /// Returns all entries in pre-order.
    pub fn entries(&self) -> &[ReportEntry] {
        &self.entries
    }

    /// Returns the entry for the given tree position, if it was emitted.
    pub fn entry(&self, sosa: SosaNumber) -> Option<&ReportEntry> {
        self.entries.iter().find(|e| e.sosa == sosa)
    }

    /// Returns the number a person was first listed under, if listed.
    pub fn canonical_sosa(&self, id: &XrefId) -> Option<SosaNumber> {
        self.visited.canonical(id)
    }

    pub fn visited(&self) -> &VisitedSet {
        &self.visited
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// =#========================================================================#=
// SOSA REPORT BUILDER
// =#========================================================================#=
/// Pending position of the walk.
struct Frame<'a> {
    person: &'a PersonRecord,
    sosa: SosaNumber,
    generation: u32,
}

/// Builds a [SosaReport] for one root person.
///
/// The walk runs on an explicit work stack, so its depth does not depend on
/// the call stack. Termination is guaranteed by the visited set (every person
/// is expanded at most once), by the [GenerationCap] and by the range of
/// [SosaNumber].
///
/// # Example
/// ```
/// use sosatree::model::{FamilyRecord, GenerationCap, PersonName, PersonRecord, RecordIndex, SosaNumber};
/// use sosatree::report::SosaReportBuilder;
///
/// let root = PersonRecord::new("@I1@", PersonName::parse("Ada /Byron/")).with_child_of("@F1@");
/// let father = PersonRecord::new("@I2@", PersonName::parse("George /Byron/"));
/// let family = FamilyRecord::new("@F1@", Some("@I2@".into()), None);
/// let index = RecordIndex::from_records(vec![root.clone(), father], vec![family]);
///
/// let report = SosaReportBuilder::new(&index)
///     .with_max_generation(GenerationCap::Limited(2))
///     .build(&root);
/// assert_eq!(report.len(), 2);
/// assert_eq!(report.entry(SosaNumber::new(2).unwrap()).unwrap().label(), "Byron, George");
/// ```
pub struct SosaReportBuilder<'a> {
    index: &'a RecordIndex,
    max_generation: GenerationCap,
}

impl<'a> SosaReportBuilder<'a> {
    /// Creates a builder without generation cap.
    pub fn new(index: &'a RecordIndex) -> Self {
        SosaReportBuilder {
            index,
            max_generation: GenerationCap::Unbounded,
        }
    }

    /// Sets the generation cap.
    pub fn with_max_generation(mut self, cap: GenerationCap) -> Self {
        self.max_generation = cap;
        self
    }

    /// Walks the ancestors of `root` (numbered 1) and returns the report.
    pub fn build(&self, root: &'a PersonRecord) -> SosaReport {
        let mut report = SosaReport::default();
        let mut stack = vec![Frame {
            person: root,
            sosa: SosaNumber::ROOT,
            generation: 0,
        }];

        while let Some(Frame { person, sosa, generation }) = stack.pop() {
            if !self.max_generation.allows(generation) {
                continue;
            }

            if let Some(canonical) = report.visited.canonical(person.id()) {
                report.entries.push(ReportEntry {
                    sosa,
                    person: person.id().clone(),
                    label: person.label(),
                    kind: EntryKind::CrossReference { canonical },
                });
                continue;
            }

            report.visited.record(person.id(), sosa);
            report.entries.push(ReportEntry {
                sosa,
                person: person.id().clone(),
                label: person.label(),
                kind: EntryKind::Full {
                    birth: person.birth().map(str::to_string),
                    death: person.death().map(str::to_string),
                },
            });

            // Mother pushed first, so the father's line is walked first
            let (father, mother) = parents(person, self.index);
            for (parent, number) in [(mother, sosa.mother()), (father, sosa.father())] {
                let Some(parent) = parent else {
                    continue;
                };
                match number {
                    Some(number) => stack.push(Frame {
                        person: parent,
                        sosa: number,
                        generation: generation + 1,
                    }),
                    None => warn!(person = %parent.id(), %sosa, "Sosa number range exhausted, branch truncated"),
                }
            }
        }

        debug!(
            entries = report.entries.len(),
            persons = report.visited.len(),
            "built Sosa report"
        );
        report
    }
}

/// Builds the Sosa report of `root` with the given generation cap.
///
/// Convenience wrapper around [SosaReportBuilder].
pub fn build_report(root: &PersonRecord, index: &RecordIndex, max_generation: GenerationCap) -> SosaReport {
    SosaReportBuilder::new(index)
        .with_max_generation(max_generation)
        .build(root)
}
