//! Canonical sets of integer positions stored as disjoint intervals.
//!
//! A set is kept as the minimal list of `start~len` intervals: sorted, with no
//! two intervals overlapping or touching. One logical set therefore has
//! exactly one representation, which makes `==` and hashing meaningful.
//!
//! # Key Types
//!
//! - [`IntervalSet`] - the flat, vector-backed representation.
//! - [`BucketedIntervalSet`] - an ordered map of bucket key to [`IntervalSet`],
//!   keeping each vector short when a set grows to many intervals.
//! - [`Encode`] / [`Decode`] - the count-prefixed `(start, len)` wire format
//!   shared by both representations.
//!
//! Broken preconditions (inserting over covered positions, erasing a gap,
//! asking an empty set for its bounds) are fatal: they panic with a
//! `contract violation:` message, see [`ivset_common::ContractViolation`].

pub mod bucketed;
pub mod codec;
pub mod cursor;
pub mod interval_set;
mod precondition;

#[cfg(test)]
mod tests;

pub use bucketed::BucketedIntervalSet;
pub use codec::{Decode, Encode, WireValue};
pub use cursor::Cursor;
pub use interval_set::IntervalSet;
pub use ivset_ranges::{Interval, IntervalSeq, Position};
