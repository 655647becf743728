//! Set algebra over ascending, non-overlapping interval streams.
//!
//! Everything here is built on one primitive, the sorted merge-join in
//! [`merge_join`]: two cursors walk their inputs in ascending order, the one
//! whose current extent ends first is advanced, and every overlapping pair is
//! reported with its `max(start)`/`min(end)` bounds. Because the join only
//! looks at [`Extent`](crate::Extent) bounds, the same code pairs up single
//! intervals of two flat sets and whole buckets of two bucketed sets.

pub mod intersection;
pub mod merge_join;
pub mod span;
pub mod subset;

pub use intersection::{Intersection, intersect, intersect_len};
pub use merge_join::{MergeJoin, Overlap, merge_join};
pub use span::{Span, span};
pub use subset::{is_subset, is_subset_of};
