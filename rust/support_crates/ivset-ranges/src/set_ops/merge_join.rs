use std::marker::PhantomData;

use crate::{Extent, Interval, Position};

/// Creates an iterator over every overlapping pair of extents drawn from two
/// ordered, non-overlapping streams.
///
/// Both inputs must yield extents in strictly ascending order by `start`, and
/// extents within one input must not overlap. The produced iterator:
/// * Yields one [`Overlap`] per pair `(left, right)` whose extents share at
///   least one position, in ascending order of the shared span.
/// * Skips extents of either side that end at or before the other side's
///   current start ("passing" extents).
/// * After each overlap, advances whichever side ends first; both sides when
///   they end at the same position.
///
/// Complexity: O(len(a) + len(b)) comparisons; only the current item of each
/// side is held.
pub fn merge_join<T, L, R>(a: L, b: R) -> MergeJoin<L::IntoIter, R::IntoIter, T>
where
    T: Position,
    L: IntoIterator,
    R: IntoIterator,
    L::Item: Extent<T> + Clone,
    R::Item: Extent<T> + Clone,
{
    MergeJoin::new(a.into_iter(), b.into_iter())
}

/// One overlapping pair reported by [`MergeJoin`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Overlap<A, B, T> {
    pub left: A,
    pub right: B,
    /// `max(left.start, right.start)`
    pub start: T,
    /// `min(left.end, right.end)`
    pub end: T,
}

impl<A, B, T> Overlap<A, B, T>
where
    T: Position,
    A: Extent<T>,
    B: Extent<T>,
{
    /// Returns `true` if both sides cover exactly the same span, in which case
    /// the shared span is the left (or right) item itself.
    #[inline]
    pub fn is_identical(&self) -> bool {
        self.left.start() == self.right.start() && self.left.end() == self.right.end()
    }

    #[inline]
    pub fn len(&self) -> T {
        self.end - self.start
    }

    #[inline]
    pub fn interval(&self) -> Interval<T> {
        Interval::from_bounds(self.start, self.end)
    }
}

/// Iterator adapter yielding the overlapping pairs of two ordered,
/// non-overlapping extent streams. Created by [`merge_join`].
pub struct MergeJoin<I, J, T>
where
    I: Iterator,
    J: Iterator,
{
    a: I,
    b: J,
    cur_a: Option<I::Item>,
    cur_b: Option<J::Item>,
    _marker: PhantomData<T>,
}

impl<I, J, T> MergeJoin<I, J, T>
where
    I: Iterator,
    J: Iterator,
{
    pub fn new(mut a: I, mut b: J) -> Self {
        let cur_a = a.next();
        let cur_b = b.next();
        Self {
            a,
            b,
            cur_a,
            cur_b,
            _marker: PhantomData,
        }
    }
}

impl<I, J, T> Iterator for MergeJoin<I, J, T>
where
    T: Position,
    I: Iterator,
    J: Iterator,
    I::Item: Extent<T> + Clone,
    J::Item: Extent<T> + Clone,
{
    type Item = Overlap<I::Item, J::Item, T>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let (ra, rb) = match (&self.cur_a, &self.cur_b) {
                (Some(a), Some(b)) => (a, b),
                _ => return None,
            };
            let (a_start, a_end) = (ra.start(), ra.end());
            let (b_start, b_end) = (rb.start(), rb.end());

            // Passing: a ends before (or exactly at) b starts.
            if a_end <= b_start {
                self.cur_a = self.a.next();
                continue;
            }
            if b_end <= a_start {
                self.cur_b = self.b.next();
                continue;
            }

            let overlap = Overlap {
                left: ra.clone(),
                right: rb.clone(),
                start: a_start.max(b_start),
                end: a_end.min(b_end),
            };

            if a_end <= b_end {
                self.cur_a = self.a.next();
            }
            if b_end <= a_end {
                self.cur_b = self.b.next();
            }
            return Some(overlap);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::merge_join;
    use crate::Interval;

    fn ivs(pairs: &[(u64, u64)]) -> Vec<Interval<u64>> {
        pairs.iter().map(|&p| Interval::from(p)).collect()
    }

    fn spans(a: &[(u64, u64)], b: &[(u64, u64)]) -> Vec<(u64, u64)> {
        merge_join::<u64, _, _>(ivs(a), ivs(b))
            .map(|o| (o.start, o.end))
            .collect()
    }

    #[test]
    fn test_empty_inputs() {
        assert!(spans(&[], &[]).is_empty());
        assert!(spans(&[(0, 10)], &[]).is_empty());
        assert!(spans(&[], &[(0, 10)]).is_empty());
    }

    #[test]
    fn test_touching_is_not_overlap() {
        assert!(spans(&[(0, 5)], &[(5, 5)]).is_empty());
        assert!(spans(&[(5, 5)], &[(0, 5)]).is_empty());
    }

    #[test]
    fn test_nested_multi_segments() {
        // a: [0,5) [10,20) [30,40); b: [3,12) [18,35)
        let out = spans(&[(0, 5), (10, 10), (30, 10)], &[(3, 9), (18, 17)]);
        assert_eq!(out, vec![(3, 5), (10, 12), (18, 20), (30, 35)]);
    }

    #[test]
    fn test_advances_shorter_side() {
        // One long interval on the left against many short ones on the right.
        let out = spans(&[(0, 100)], &[(1, 1), (10, 5), (50, 60)]);
        assert_eq!(out, vec![(1, 2), (10, 15), (50, 100)]);
    }

    #[test]
    fn test_identical_pairs() {
        let joined: Vec<_> =
            merge_join::<u64, _, _>(ivs(&[(0, 5), (10, 5)]), ivs(&[(0, 5), (10, 4)])).collect();
        assert_eq!(joined.len(), 2);
        assert!(joined[0].is_identical());
        assert!(!joined[1].is_identical());
        assert_eq!(joined[1].interval(), Interval::new(10, 4));
        assert_eq!(joined[1].len(), 4);
    }

    #[test]
    fn test_reports_items() {
        let a = ivs(&[(0, 10)]);
        let b = ivs(&[(2, 2), (6, 2)]);
        let lefts: Vec<_> = merge_join::<u64, _, _>(a.iter(), b.iter())
            .map(|o| *o.left)
            .collect();
        assert_eq!(lefts, vec![Interval::new(0, 10), Interval::new(0, 10)]);
    }
}
