//! Anything that covers one contiguous span of positions.

use crate::{Interval, Position};

/// A contiguous `[start, end)` span.
///
/// The merge-join in [`set_ops`](crate::set_ops) only needs these two bounds,
/// which lets the same algorithm walk single intervals or whole buckets of
/// intervals (a bucket's extent runs from its first start to its last end).
pub trait Extent<T> {
    fn start(&self) -> T;

    /// Exclusive end.
    fn end(&self) -> T;
}

impl<T: Position> Extent<T> for Interval<T> {
    #[inline]
    fn start(&self) -> T {
        self.start
    }

    #[inline]
    fn end(&self) -> T {
        Interval::end(self)
    }
}

impl<T, E: Extent<T>> Extent<T> for &E {
    #[inline]
    fn start(&self) -> T {
        (**self).start()
    }

    #[inline]
    fn end(&self) -> T {
        (**self).end()
    }
}
