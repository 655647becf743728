//! A single half-open `[start, start + len)` range.

use std::{
    fmt,
    hash::Hash,
    ops::Range,
};

use num_traits::PrimInt;

/// Integer type usable as a set position.
///
/// Positions are expected to be non-negative; signed types are accepted so
/// callers can keep their native id types.
pub trait Position: PrimInt + Hash + fmt::Debug + fmt::Display + Send + Sync + 'static {}

impl<T> Position for T where T: PrimInt + Hash + fmt::Debug + fmt::Display + Send + Sync + 'static {}

/// A half-open range `[start, start + len)` stored as a start and a length.
///
/// Intervals order by `start` first, which is the order every set keeps them in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Interval<T> {
    pub start: T,
    pub len: T,
}

impl<T: Position> Interval<T> {
    #[inline]
    pub fn new(start: T, len: T) -> Interval<T> {
        Interval { start, len }
    }

    #[inline]
    pub fn point(pos: T) -> Interval<T> {
        Interval::new(pos, T::one())
    }

    /// Builds an interval from its bounds. `end` must not precede `start`.
    #[inline]
    pub fn from_bounds(start: T, end: T) -> Interval<T> {
        debug_assert!(start <= end);
        Interval::new(start, end - start)
    }

    /// Exclusive end of the interval.
    #[inline]
    pub fn end(&self) -> T {
        self.start + self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len <= T::zero()
    }

    #[inline]
    pub fn contains(&self, pos: T) -> bool {
        pos >= self.start && pos < self.end()
    }

    /// Returns `true` if `[start, start + len)` lies entirely inside this interval.
    #[inline]
    pub fn covers(&self, start: T, len: T) -> bool {
        start >= self.start && start + len <= self.end()
    }

    /// Returns `true` if the two intervals share a position or touch end-to-start.
    #[inline]
    pub fn touches(&self, other: &Interval<T>) -> bool {
        self.start <= other.end() && other.start <= self.end()
    }

    #[inline]
    pub fn as_range(&self) -> Range<T> {
        self.start..self.end()
    }
}

impl<T: Position> From<(T, T)> for Interval<T> {
    #[inline]
    fn from((start, len): (T, T)) -> Self {
        Interval::new(start, len)
    }
}

impl<T: Position> From<Interval<T>> for (T, T) {
    #[inline]
    fn from(iv: Interval<T>) -> Self {
        (iv.start, iv.len)
    }
}

impl<T: Position> From<Range<T>> for Interval<T> {
    #[inline]
    fn from(r: Range<T>) -> Self {
        Interval::from_bounds(r.start, r.end)
    }
}

impl<T: Position> From<Interval<T>> for Range<T> {
    #[inline]
    fn from(iv: Interval<T>) -> Self {
        iv.as_range()
    }
}

impl<T: fmt::Display> fmt::Display for Interval<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}~{}", self.start, self.len)
    }
}

#[cfg(test)]
mod tests {
    use super::Interval;

    #[test]
    fn test_bounds() {
        let iv = Interval::new(5u64, 10);
        assert_eq!(iv.end(), 15);
        assert_eq!(iv.as_range(), 5..15);
        assert!(iv.contains(5));
        assert!(iv.contains(14));
        assert!(!iv.contains(15));
        assert!(!iv.contains(4));
        assert_eq!(Interval::from(5u64..15), iv);
        assert_eq!(Interval::from_bounds(5u64, 15), iv);
        assert_eq!(Interval::point(7u32), Interval::new(7, 1));
    }

    #[test]
    fn test_covers_and_touches() {
        let iv = Interval::new(10u32, 5);
        assert!(iv.covers(10, 5));
        assert!(iv.covers(11, 2));
        assert!(!iv.covers(9, 2));
        assert!(!iv.covers(14, 2));

        assert!(iv.touches(&Interval::new(15, 3)));
        assert!(iv.touches(&Interval::new(5, 5)));
        assert!(iv.touches(&Interval::new(12, 1)));
        assert!(!iv.touches(&Interval::new(16, 3)));
        assert!(!iv.touches(&Interval::new(0, 9)));
    }

    #[test]
    fn test_display_and_order() {
        assert_eq!(Interval::new(30u64, 10).to_string(), "30~10");
        let mut v = vec![Interval::new(9i64, 1), Interval::new(2, 3), Interval::new(2, 1)];
        v.sort();
        assert_eq!(
            v,
            vec![Interval::new(2, 1), Interval::new(2, 3), Interval::new(9, 1)]
        );
    }
}
