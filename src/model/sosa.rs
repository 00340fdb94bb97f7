//! Sosa-Stradonitz numbers and generation caps.

use std::fmt;

/// Largest 0-based generation a [SosaNumber] can represent
pub const MAX_SOSA_GENERATION: u32 = u64::BITS - 1;

// =#========================================================================#=
// SOSA NUMBER
// =#========================================================================#=
/// Position of an ancestor in the Sosa-Stradonitz numbering.
///
/// The subject is `1`; the father of `n` is `2n` and the mother `2n + 1`.
/// Hence the generation of `n` (root = 0) is `bit_length(n) - 1`.
///
/// # Example
/// ```
/// use sosatree::model::SosaNumber;
///
/// let root = SosaNumber::ROOT;
/// let maternal_grandfather = root.mother().unwrap().father().unwrap();
/// assert_eq!(maternal_grandfather.get(), 6);
/// assert_eq!(maternal_grandfather.generation(), 2);
/// assert_eq!(maternal_grandfather.child(), Some(SosaNumber::new(3).unwrap()));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SosaNumber(u64);

impl SosaNumber {
    /// The subject of the tree
    pub const ROOT: SosaNumber = SosaNumber(1);

    /// Creates a Sosa number; `None` for 0.
    pub fn new(n: u64) -> Option<Self> {
        (n > 0).then_some(SosaNumber(n))
    }

    /// Returns the number itself.
    pub fn get(self) -> u64 {
        self.0
    }

    /// Returns the father's number `2n`, or `None` on overflow.
    pub fn father(self) -> Option<Self> {
        self.0.checked_mul(2).map(SosaNumber)
    }

    /// Returns the mother's number `2n + 1`, or `None` on overflow.
    pub fn mother(self) -> Option<Self> {
        self.0.checked_mul(2)?.checked_add(1).map(SosaNumber)
    }

    /// Returns the number of the descendant this ancestor belongs to, `None` for the root.
    pub fn child(self) -> Option<Self> {
        SosaNumber::new(self.0 / 2)
    }

    /// Returns whether this ancestor is a father (even number, except the root).
    pub fn is_paternal(self) -> bool {
        self.0 % 2 == 0
    }

    /// Returns the 0-based generation, i.e. `bit_length - 1`.
    pub fn generation(self) -> u32 {
        MAX_SOSA_GENERATION - self.0.leading_zeros()
    }

    /// Returns the number of bits of this number, i.e. the 1-based generation.
    pub fn bit_length(self) -> u32 {
        u64::BITS - self.0.leading_zeros()
    }
}

impl fmt::Display for SosaNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// =#========================================================================#=
// GENERATION CAP
// =#========================================================================#=
/// Maximum number of generations rendered, the root counting as the first one.
///
/// With `Limited(g)`, an ancestor of 0-based generation `k` is included iff
/// `k < g`, i.e. iff the bit length of its Sosa number is at most `g`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GenerationCap {
    /// At most this many generations
    Limited(u32),
    /// No cap; termination relies on cycle detection and the Sosa number range
    #[default]
    Unbounded,
}

impl GenerationCap {
    /// Returns whether an ancestor of the given 0-based generation is included.
    ///
    /// # Example
    /// ```
    /// use sosatree::model::GenerationCap;
    ///
    /// let cap = GenerationCap::Limited(2);
    /// assert!(cap.allows(0));   // subject
    /// assert!(cap.allows(1));   // parents
    /// assert!(!cap.allows(2));  // grandparents are cut
    /// assert!(GenerationCap::Unbounded.allows(1000));
    /// ```
    pub fn allows(self, generation: u32) -> bool {
        match self {
            GenerationCap::Limited(max) => generation < max,
            GenerationCap::Unbounded => true,
        }
    }
}

impl fmt::Display for GenerationCap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GenerationCap::Limited(max) => write!(f, "{max}"),
            GenerationCap::Unbounded => f.write_str("unbounded"),
        }
    }
}
