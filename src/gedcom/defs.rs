//! Constants for reading GEDCOM data and interpreting its records.

/// Individual record
pub(crate) const INDI: &str = "INDI";
/// Family record
pub(crate) const FAM: &str = "FAM";

// Individual sub-records
pub(crate) const NAME: &str = "NAME";
pub(crate) const GIVN: &str = "GIVN";
pub(crate) const SURN: &str = "SURN";
pub(crate) const BIRT: &str = "BIRT";
pub(crate) const DEAT: &str = "DEAT";
pub(crate) const DATE: &str = "DATE";
pub(crate) const FAMC: &str = "FAMC";

// Family roles
pub(crate) const HUSB: &str = "HUSB";
pub(crate) const WIFE: &str = "WIFE";
pub(crate) const CHIL: &str = "CHIL";

/// Continuation of the previous value on the same line
pub(crate) const CONC: &str = "CONC";
/// Continuation of the previous value on a new line
pub(crate) const CONT: &str = "CONT";
