//! Read access shared by every interval-set representation.

use std::fmt;

use crate::{Interval, Position};

/// An ascending, canonical sequence of intervals with positional lookup.
///
/// Implementors guarantee that [`intervals`](Self::intervals) yields
/// non-empty intervals sorted by start, where each interval ends strictly
/// before the next one starts (no overlap, no adjacency).
pub trait IntervalSeq<T: Position> {
    type Iter<'a>: Iterator<Item = Interval<T>> + Clone
    where
        Self: 'a;

    /// Iterates over all intervals in ascending order.
    fn intervals(&self) -> Self::Iter<'_>;

    /// Iterates starting at the first interval that ends after `pos`,
    /// i.e. the interval covering `pos` or the next one above it.
    fn intervals_from(&self, pos: T) -> Self::Iter<'_>;

    /// Total number of covered positions.
    fn size(&self) -> T;

    fn num_intervals(&self) -> usize;

    #[inline]
    fn is_empty(&self) -> bool {
        self.num_intervals() == 0
    }
}

/// Returns `true` if both sequences hold the same intervals.
pub fn same_intervals<T, A, B>(a: &A, b: &B) -> bool
where
    T: Position,
    A: IntervalSeq<T> + ?Sized,
    B: IntervalSeq<T> + ?Sized,
{
    a.size() == b.size()
        && a.num_intervals() == b.num_intervals()
        && a.intervals().eq(b.intervals())
}

/// Writes `[start1~len1,start2~len2,...]`.
pub fn fmt_intervals<T, S>(seq: &S, f: &mut fmt::Formatter<'_>) -> fmt::Result
where
    T: Position,
    S: IntervalSeq<T> + ?Sized,
{
    f.write_str("[")?;
    for (i, iv) in seq.intervals().enumerate() {
        if i > 0 {
            f.write_str(",")?;
        }
        write!(f, "{iv}")?;
    }
    f.write_str("]")
}
