use crate::{Interval, IntervalSeq, Position};

use super::intersection::intersect_len;

/// Returns `true` if every position of `small` is also in `big`.
///
/// Both inputs must be canonical (ascending, neither overlapping nor
/// touching). Runs the merge-join once and compares the covered total with
/// the size of `small`.
pub fn is_subset<T, L, R>(small: L, big: R) -> bool
where
    T: Position,
    L: IntoIterator<Item = Interval<T>>,
    L::IntoIter: Clone,
    R: IntoIterator<Item = Interval<T>>,
{
    let small = small.into_iter();
    let total = small
        .clone()
        .fold(T::zero(), |acc, interval| acc + interval.len);
    intersect_len(small, big) == total
}

/// [`is_subset`] over two interval sequences, rejecting on size first and
/// seeking `big` to the first interval that can matter.
pub fn is_subset_of<T, A, B>(small: &A, big: &B) -> bool
where
    T: Position,
    A: IntervalSeq<T> + ?Sized,
    B: IntervalSeq<T> + ?Sized,
{
    let Some(first) = small.intervals().next() else {
        return true;
    };
    if small.size() > big.size() {
        return false;
    }
    is_subset(small.intervals(), big.intervals_from(first.start))
}

#[cfg(test)]
mod tests {
    use super::is_subset;
    use crate::Interval;

    fn ivs(pairs: &[(u32, u32)]) -> Vec<Interval<u32>> {
        pairs.iter().map(|&p| Interval::from(p)).collect()
    }

    #[test]
    fn test_subset() {
        let big = ivs(&[(0, 10), (20, 10)]);
        assert!(is_subset(ivs(&[]), big.clone()));
        assert!(is_subset(ivs(&[(0, 10)]), big.clone()));
        assert!(is_subset(ivs(&[(1, 2), (5, 1), (22, 8)]), big.clone()));
        assert!(is_subset(big.clone(), big.clone()));
    }

    #[test]
    fn test_not_subset() {
        let big = ivs(&[(0, 10), (20, 10)]);
        assert!(!is_subset(ivs(&[(5, 10)]), big.clone()));
        assert!(!is_subset(ivs(&[(10, 1)]), big.clone()));
        assert!(!is_subset(ivs(&[(0, 1), (29, 2)]), big.clone()));
        assert!(!is_subset(ivs(&[(0, 1)]), ivs(&[])));
    }
}
