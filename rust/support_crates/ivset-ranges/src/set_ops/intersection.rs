use crate::{Extent, Interval, Position};

use super::merge_join::{MergeJoin, merge_join};

/// Creates an iterator that yields the set-intersection of two ordered,
/// canonical interval streams.
///
/// The two inputs must each yield intervals in strictly ascending order by
/// `start` that neither overlap nor touch. The returned iterator:
/// * Yields only the overlapping portions between intervals from the two sides.
/// * Yields intervals in ascending order; they never overlap or touch.
/// * Passes through unchanged any interval present, identically, on both
///   sides instead of rebuilding it from the overlap bounds.
///
/// This is a streaming, O(len(a) + len(b)) operation holding only the current
/// interval from each side.
pub fn intersect<T, L, R>(a: L, b: R) -> Intersection<L::IntoIter, R::IntoIter, T>
where
    T: Position,
    L: IntoIterator<Item = Interval<T>>,
    R: IntoIterator<Item = Interval<T>>,
{
    Intersection {
        join: merge_join(a, b),
    }
}

/// Returns the number of positions covered by both inputs.
///
/// Accepts any extent streams satisfying the [`merge_join`] preconditions.
pub fn intersect_len<T, L, R>(a: L, b: R) -> T
where
    T: Position,
    L: IntoIterator,
    R: IntoIterator,
    L::Item: Extent<T> + Clone,
    R::Item: Extent<T> + Clone,
{
    merge_join(a, b).fold(T::zero(), |acc, overlap| acc + overlap.len())
}

/// Iterator adapter yielding the intersection of two canonical interval
/// streams. Created by [`intersect`].
pub struct Intersection<I, J, T>
where
    I: Iterator<Item = Interval<T>>,
    J: Iterator<Item = Interval<T>>,
{
    join: MergeJoin<I, J, T>,
}

impl<I, J, T> Iterator for Intersection<I, J, T>
where
    T: Position,
    I: Iterator<Item = Interval<T>>,
    J: Iterator<Item = Interval<T>>,
{
    type Item = Interval<T>;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let overlap = self.join.next()?;
        if overlap.is_identical() {
            Some(overlap.left)
        } else {
            Some(overlap.interval())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{intersect, intersect_len};
    use crate::Interval;

    fn ivs(pairs: &[(u64, u64)]) -> Vec<Interval<u64>> {
        pairs.iter().map(|&p| Interval::from(p)).collect()
    }

    fn collect(a: &[(u64, u64)], b: &[(u64, u64)]) -> Vec<(u64, u64)> {
        intersect(ivs(a), ivs(b)).map(Into::into).collect()
    }

    #[test]
    fn test_empty_inputs() {
        assert!(collect(&[], &[]).is_empty());
        assert!(collect(&[(0, 10)], &[]).is_empty());
    }

    #[test]
    fn test_no_overlap_disjoint() {
        assert!(collect(&[(0, 5)], &[(5, 5)]).is_empty());
        assert!(collect(&[(5, 5)], &[(0, 5)]).is_empty());
        assert!(collect(&[(0, 2), (10, 2)], &[(4, 4), (20, 1)]).is_empty());
    }

    #[test]
    fn test_simple_overlap() {
        assert_eq!(collect(&[(0, 10)], &[(3, 4)]), vec![(3, 4)]);
        assert_eq!(collect(&[(3, 4)], &[(0, 10)]), vec![(3, 4)]);
        assert_eq!(collect(&[(0, 5)], &[(3, 5)]), vec![(3, 2)]);
    }

    #[test]
    fn test_identical_sets() {
        let a = [(0, 1), (5, 10), (30, 10)];
        assert_eq!(collect(&a, &a), a.to_vec());
    }

    #[test]
    fn test_superset_against_original() {
        let a = [(0, 1), (5, 10), (30, 10), (41, 5)];
        let b = [(0, 1), (5, 10), (30, 10)];
        assert_eq!(collect(&a, &b), b.to_vec());
    }

    #[test]
    fn test_complex_interleaving() {
        let a = [(0, 2), (4, 2), (8, 3), (15, 3)];
        let b = [(1, 8), (10, 6)];
        assert_eq!(
            collect(&a, &b),
            vec![(1, 1), (4, 2), (8, 1), (10, 1), (15, 1)]
        );
    }

    #[test]
    fn test_intersect_len() {
        let a = ivs(&[(0, 2), (4, 2), (8, 3), (15, 3)]);
        let b = ivs(&[(1, 8), (10, 6)]);
        assert_eq!(intersect_len::<u64, _, _>(&a, &b), 6);
        assert_eq!(intersect_len::<u64, _, _>(&a, &a), 10);
        assert_eq!(intersect_len::<u64, _, _>(&a, &Vec::<Interval<u64>>::new()), 0);
    }
}
