//! Pages of the graphical ancestor tree.

use crate::model::{SosaNumber, XrefId};

/// Default horizontal distance between two generations
pub const DEFAULT_GENERATION_SPACING: f64 = 4.5;

/// Default vertical distance between the root and each of its parents
pub const DEFAULT_BRANCH_SPREAD: f64 = 6.0;

// =#========================================================================#=
// GEOMETRY
// =#========================================================================#=
/// Spacing of the nodes on a tree page.
///
/// A node of local generation `g` is placed at `x = g * generation_spacing`.
/// Its father sits `branch_spread / 2^g` above it and its mother the same
/// distance below, so the vertical ranges of the two parent subtrees never overlap.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutGeometry {
    pub generation_spacing: f64,
    pub branch_spread: f64,
}

impl LayoutGeometry {
    /// Returns whether both distances are positive and finite.
    pub fn is_valid(&self) -> bool {
        [self.generation_spacing, self.branch_spread]
            .iter()
            .all(|d| d.is_finite() && *d > 0.0)
    }

    /// Returns the vertical offset between a node of local generation
    /// `local_generation` and each of its parents.
    pub fn parent_offset(&self, local_generation: u32) -> f64 {
        self.branch_spread / 2f64.powi(local_generation as i32)
    }
}

impl Default for LayoutGeometry {
    fn default() -> Self {
        LayoutGeometry {
            generation_spacing: DEFAULT_GENERATION_SPACING,
            branch_spread: DEFAULT_BRANCH_SPREAD,
        }
    }
}

/// Page-local position of a node.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinate {
    pub x: f64,
    pub y: f64,
}

// =#========================================================================#=
// NODES & EDGES
// =#========================================================================#=
/// A person drawn on a page.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutNode {
    pub(crate) sosa: SosaNumber,
    pub(crate) person: XrefId,
    pub(crate) label: String,
    pub(crate) position: Coordinate,
    pub(crate) continuation: bool,
}

impl LayoutNode {
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

    pub fn position(&self) -> Coordinate {
        self.position
    }

    /// Whether this node's ancestors are drawn on a later page.
    pub fn is_continuation(&self) -> bool {
        self.continuation
    }
}

/// A line between a person and one of their parents, both on the same page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutEdge {
    /// The descendant
    pub from: SosaNumber,
    /// The parent
    pub to: SosaNumber,
}

// =#========================================================================#=
// PAGE
// =#========================================================================#=
/// One page of the ancestor tree, rooted at some ancestor.
#[derive(Debug, Clone, PartialEq)]
pub struct Page {
    pub(crate) title: String,
    pub(crate) root_person: XrefId,
    pub(crate) root_sosa: SosaNumber,
    pub(crate) generation_offset: u32,
    pub(crate) nodes: Vec<LayoutNode>,
    pub(crate) edges: Vec<LayoutEdge>,
}

impl Page {
    pub(crate) fn new(title: String, root_person: XrefId, root_sosa: SosaNumber, generation_offset: u32) -> Self {
        Page {
            title,
            root_person,
            root_sosa,
            generation_offset,
            nodes: Vec::new(),
            edges: Vec::new(),
        }
    }

    /// Human-readable title (unescaped).
    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn root_person(&self) -> &XrefId {
        &self.root_person
    }

    pub fn root_sosa(&self) -> SosaNumber {
        self.root_sosa
    }

    /// Global generation of the page root.
    pub fn generation_offset(&self) -> u32 {
        self.generation_offset
    }

    /// Nodes in drawing order (pre-order, father before mother).
    pub fn nodes(&self) -> &[LayoutNode] {
        &self.nodes
    }

    pub fn edges(&self) -> &[LayoutEdge] {
        &self.edges
    }

    /// Returns the node for the given tree position, if drawn on this page.
    pub fn node(&self, sosa: SosaNumber) -> Option<&LayoutNode> {
        self.nodes.iter().find(|n| n.sosa == sosa)
    }

    /// Iterates over the nodes whose ancestors continue on later pages.
    pub fn continuation_leaves(&self) -> impl Iterator<Item = &LayoutNode> {
        self.nodes.iter().filter(|n| n.continuation)
    }

    /// Returns the page-local generation of a node drawn on this page.
    pub fn local_generation(&self, node: &LayoutNode) -> u32 {
        node.sosa.generation() - self.root_sosa.generation()
    }

    /// Returns the number of generations drawn on this page.
    pub fn generation_span(&self) -> u32 {
        self.nodes
            .iter()
            .map(|n| self.local_generation(n) + 1)
            .max()
            .unwrap_or(0)
    }
}
