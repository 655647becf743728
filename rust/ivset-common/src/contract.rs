//! Fatal caller errors.
//!
//! Interval sets never report a broken precondition through `Result`: a caller
//! that inserts into covered space or erases a gap has a logic error, and the
//! set refuses to continue. [`ContractViolation`] names the broken rule and
//! [`ContractViolation::raise`] turns it into a panic whose message always
//! starts with `contract violation:`, so tests can match on it.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContractViolation {
    #[error("{op}: non-positive length {len}")]
    NonPositiveLength { op: &'static str, len: String },

    #[error("{op}: range {start}~{len} overlaps existing interval {existing}")]
    Overlap {
        op: &'static str,
        start: String,
        len: String,
        existing: String,
    },

    #[error("{op}: range {start}~{len} is not covered by a single interval")]
    NotCovered {
        op: &'static str,
        start: String,
        len: String,
    },

    #[error("{op}: set is empty")]
    EmptySet { op: &'static str },

    #[error("{op}: position {pos} is covered")]
    Covered { op: &'static str, pos: String },

    #[error("{op}: position {pos} is not covered")]
    Uncovered { op: &'static str, pos: String },

    #[error("{op}: no interval starts at {start}")]
    StaleCursor { op: &'static str, start: String },

    #[error("{op}: run starting at {start} precedes set end {end}")]
    OutOfOrder {
        op: &'static str,
        start: String,
        end: String,
    },

    #[error("{op}: bucket capacity must be positive")]
    ZeroCapacity { op: &'static str },
}

impl ContractViolation {
    /// Aborts the current operation.
    #[cold]
    #[track_caller]
    pub fn raise(self) -> ! {
        panic!("contract violation: {self}")
    }
}
