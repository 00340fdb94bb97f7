//! Graphical ancestor tree, split into pages of bounded depth.
//!
//! The [Paginator] lays out the ancestors of a person as a binary tree that
//! grows to the right: the root on the left, fathers above and mothers below.
//! A page shows at most a configured number of generations. A person on the
//! last generation of a page whose ancestors do not fit becomes a
//! *continuation leaf*: the page job for their subtree is queued and laid out
//! as a later page rooted at that person, keeping their [SosaNumber].
//!
//! Pages come out in queue order: the root page first, then continuation
//! pages in the order their leaves were found (breadth-first across pages,
//! depth-first within a page).
//!
//! Unlike the [report](crate::report), the layout does not merge repeated
//! ancestors: a person reached along two lines is drawn once per line.

mod page;

pub use self::page::{
    Coordinate, DEFAULT_BRANCH_SPREAD, DEFAULT_GENERATION_SPACING, LayoutEdge, LayoutGeometry,
    LayoutNode, Page,
};

use crate::config::DEFAULT_GENERATIONS_PER_PAGE;
use crate::locale::{Captions, Locale};
use crate::model::{GenerationCap, PersonRecord, RecordIndex, SosaNumber, XrefId, parents};
use std::collections::VecDeque;
use tracing::{debug, warn};

/// A page of ancestors still to be laid out.
struct PageJob<'a> {
    person: &'a PersonRecord,
    sosa: SosaNumber,
    generation_offset: u32,
    /// Identities of all descendants of `person` on the path from the global root
    lineage: Vec<XrefId>,
}

/// State of the page currently laid out.
struct PageWalk<'a, 'q> {
    page: Page,
    /// Identities from the global root down to the current node
    path: Vec<XrefId>,
    queue: &'q mut VecDeque<PageJob<'a>>,
}

// =#========================================================================#=
// PAGINATOR
// =#========================================================================#=
/// Lays out the ancestor tree of a person on bounded-depth pages.
///
/// # Configuration
/// * [`with_max_generation`](Self::with_max_generation) - global cap across all pages (default: unbounded)
/// * [`with_max_generation_per_page`](Self::with_max_generation_per_page) - generations per page (default: 5)
/// * [`with_geometry`](Self::with_geometry) - node spacing
/// * [`with_locale`](Self::with_locale) - language of page titles
///
/// # Termination
/// Every descent carries the identities on its path from the global root,
/// across page boundaries. A parent already on that path (cyclic data) is
/// not drawn. Together with the [SosaNumber] range, this bounds the layout
/// even without a generation cap.
///
/// # Example
/// ```
/// use sosatree::layout::Paginator;
/// use sosatree::model::{FamilyRecord, PersonName, PersonRecord, RecordIndex, SosaNumber};
///
/// let root = PersonRecord::new("@I1@", PersonName::parse("Ada /Byron/")).with_child_of("@F1@");
/// let father = PersonRecord::new("@I2@", PersonName::parse("George /Byron/"));
/// let family = FamilyRecord::new("@F1@", Some("@I2@".into()), None);
/// let index = RecordIndex::from_records(vec![root.clone(), father], vec![family]);
///
/// let pages = Paginator::new(&index).paginate(&root, SosaNumber::ROOT);
/// assert_eq!(pages.len(), 1);
/// assert_eq!(pages[0].nodes().len(), 2);
/// assert_eq!(pages[0].edges().len(), 1);
/// ```
pub struct Paginator<'a> {
    index: &'a RecordIndex,
    max_generation: GenerationCap,
    max_generation_per_page: u32,
    geometry: LayoutGeometry,
    captions: &'static Captions,
}

impl<'a> Paginator<'a> {
    /// Creates a paginator with default settings.
    pub fn new(index: &'a RecordIndex) -> Self {
        Paginator {
            index,
            max_generation: GenerationCap::Unbounded,
            max_generation_per_page: DEFAULT_GENERATIONS_PER_PAGE,
            geometry: LayoutGeometry::default(),
            captions: Locale::default().captions(),
        }
    }

    /// Sets the global generation cap.
    pub fn with_max_generation(mut self, cap: GenerationCap) -> Self {
        self.max_generation = cap;
        self
    }

    /// Sets the number of generations per page.
    ///
    /// A page always has room for its root and the root's parents, so values
    /// below 2 are treated as 2: a page root is never deferred to a page of its own.
    pub fn with_max_generation_per_page(mut self, generations: u32) -> Self {
        self.max_generation_per_page = generations;
        self
    }

    pub fn with_geometry(mut self, geometry: LayoutGeometry) -> Self {
        self.geometry = geometry;
        self
    }

    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.captions = locale.captions();
        self
    }

    /// Lays out the ancestors of `root`, numbered `root_sosa`, and returns all pages.
    pub fn paginate(&self, root: &'a PersonRecord, root_sosa: SosaNumber) -> Vec<Page> {
        let mut queue = VecDeque::from([PageJob {
            person: root,
            sosa: root_sosa,
            generation_offset: 0,
            lineage: Vec::new(),
        }]);
        let mut pages = Vec::new();

        while let Some(job) = queue.pop_front() {
            let title = if pages.is_empty() {
                self.captions.root_page.to_string()
            } else {
                format!("{} {} ({})", self.captions.continuation_page, job.sosa, job.person.label())
            };

            let mut walk = PageWalk {
                page: Page::new(title, job.person.id().clone(), job.sosa, job.generation_offset),
                path: job.lineage,
                queue: &mut queue,
            };
            self.place(&mut walk, job.person, job.sosa, 0, job.generation_offset, 0.0);

            debug!(
                page = pages.len(),
                root = %job.sosa,
                nodes = walk.page.nodes.len(),
                deferred = walk.queue.len(),
                "laid out tree page"
            );
            pages.push(walk.page);
        }

        pages
    }

    /// Number of generations a page may hold.
    fn page_depth(&self) -> u32 {
        self.max_generation_per_page.max(2)
    }

    /// Places `person` and, depth-first, its ancestors on the current page.
    fn place(
        &self,
        walk: &mut PageWalk<'a, '_>,
        person: &'a PersonRecord,
        sosa: SosaNumber,
        local_generation: u32,
        global_generation: u32,
        y: f64,
    ) {
        if !self.max_generation.allows(global_generation) {
            return;
        }

        let (father, mother) = parents(person, self.index);
        let expandable: Vec<(&'a PersonRecord, SosaNumber)> = [(father, sosa.father()), (mother, sosa.mother())]
            .into_iter()
            .filter_map(|(parent, number)| self.expandable_parent(walk, person, parent?, number))
            .collect();

        let position = Coordinate {
            x: local_generation as f64 * self.geometry.generation_spacing,
            y,
        };
        let parents_allowed = self.max_generation.allows(global_generation + 1);
        let is_page_leaf = local_generation + 1 >= self.page_depth();

        if is_page_leaf && parents_allowed && !expandable.is_empty() {
            walk.page.nodes.push(node(person, sosa, position, true));
            walk.queue.push_back(PageJob {
                person,
                sosa,
                generation_offset: global_generation,
                lineage: walk.path.clone(),
            });
            return;
        }

        walk.page.nodes.push(node(person, sosa, position, false));
        if !parents_allowed || is_page_leaf {
            return;
        }

        let offset = self.geometry.parent_offset(local_generation);
        walk.path.push(person.id().clone());
        for (parent, number) in expandable {
            let y = if number.is_paternal() { y + offset } else { y - offset };
            walk.page.edges.push(LayoutEdge { from: sosa, to: number });
            self.place(walk, parent, number, local_generation + 1, global_generation + 1, y);
        }
        walk.path.pop();
    }

    /// Returns the parent with its number, unless it cannot be drawn below `person`.
    fn expandable_parent(
        &self,
        walk: &PageWalk<'a, '_>,
        person: &PersonRecord,
        parent: &'a PersonRecord,
        number: Option<SosaNumber>,
    ) -> Option<(&'a PersonRecord, SosaNumber)> {
        if parent.id() == person.id() || walk.path.contains(parent.id()) {
            warn!(person = %person.id(), ancestor = %parent.id(), "cyclic ancestry, ancestor not drawn");
            return None;
        }
        match number {
            Some(number) => Some((parent, number)),
            None => {
                warn!(person = %parent.id(), "Sosa number range exhausted, branch truncated");
                None
            }
        }
    }
}

fn node(person: &PersonRecord, sosa: SosaNumber, position: Coordinate, continuation: bool) -> LayoutNode {
    LayoutNode {
        sosa,
        person: person.id().clone(),
        label: person.label(),
        position,
        continuation,
    }
}

/// Lays out the ancestor tree of `root` with default geometry and captions.
///
/// Convenience wrapper around [Paginator].
pub fn layout(
    root: &PersonRecord,
    root_sosa: SosaNumber,
    index: &RecordIndex,
    max_generation: GenerationCap,
    max_generation_per_page: u32,
) -> Vec<Page> {
    Paginator::new(index)
        .with_max_generation(max_generation)
        .with_max_generation_per_page(max_generation_per_page)
        .paginate(root, root_sosa)
}
