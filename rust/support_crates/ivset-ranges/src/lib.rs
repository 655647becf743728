//! Building blocks for canonical interval sets.
//!
//! This crate holds everything that both interval-set representations share:
//!
//! - **Values**: [`Interval`] (a `start~len` half-open range) over any
//!   [`Position`] integer type.
//! - **Abstractions**: [`Extent`] for anything covering a contiguous span
//!   (an interval, or a whole bucket of intervals), and [`IntervalSeq`] for
//!   ascending, canonical interval sequences with a `lower_bound` seek.
//! - **Set algebra**: the sorted merge-join in [`set_ops`] and the algorithms
//!   built on it (intersection, subset test, span extraction).

pub mod extent;
pub mod interval;
pub mod seq;
pub mod set_ops;

pub use extent::Extent;
pub use interval::{Interval, Position};
pub use seq::IntervalSeq;
