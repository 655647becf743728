//! Constructors for the fatal errors raised by the set types.

use ivset_common::ContractViolation;
use ivset_ranges::{Interval, Position};

#[cold]
#[track_caller]
pub(crate) fn non_positive_len<T: Position>(op: &'static str, len: T) -> ! {
    ContractViolation::NonPositiveLength {
        op,
        len: len.to_string(),
    }
    .raise()
}

#[cold]
#[track_caller]
pub(crate) fn overlap<T: Position>(
    op: &'static str,
    start: T,
    len: T,
    existing: Interval<T>,
) -> ! {
    ContractViolation::Overlap {
        op,
        start: start.to_string(),
        len: len.to_string(),
        existing: existing.to_string(),
    }
    .raise()
}

#[cold]
#[track_caller]
pub(crate) fn not_covered<T: Position>(op: &'static str, start: T, len: T) -> ! {
    ContractViolation::NotCovered {
        op,
        start: start.to_string(),
        len: len.to_string(),
    }
    .raise()
}

#[cold]
#[track_caller]
pub(crate) fn empty_set(op: &'static str) -> ! {
    ContractViolation::EmptySet { op }.raise()
}

#[cold]
#[track_caller]
pub(crate) fn covered<T: Position>(op: &'static str, pos: T) -> ! {
    ContractViolation::Covered {
        op,
        pos: pos.to_string(),
    }
    .raise()
}

#[cold]
#[track_caller]
pub(crate) fn uncovered<T: Position>(op: &'static str, pos: T) -> ! {
    ContractViolation::Uncovered {
        op,
        pos: pos.to_string(),
    }
    .raise()
}

#[cold]
#[track_caller]
pub(crate) fn stale_cursor<T: Position>(op: &'static str, start: T) -> ! {
    ContractViolation::StaleCursor {
        op,
        start: start.to_string(),
    }
    .raise()
}

#[cold]
#[track_caller]
pub(crate) fn out_of_order<T: Position>(op: &'static str, start: T, end: T) -> ! {
    ContractViolation::OutOfOrder {
        op,
        start: start.to_string(),
        end: end.to_string(),
    }
    .raise()
}

#[cold]
#[track_caller]
pub(crate) fn zero_capacity(op: &'static str) -> ! {
    ContractViolation::ZeroCapacity { op }.raise()
}
