use crate::{Extent, Interval, Position};

/// Creates an iterator over the first `len` positions of `source` that lie at
/// or after `start`, skipping gaps.
///
/// `source` must be ascending and non-overlapping. Intervals ending at or
/// before `start` are skipped, the first interval reaching past `start` is
/// clipped to begin there, and the last yielded interval is shortened so the
/// total never exceeds `len`. For example, spanning `[5~5,20~5]` from `8`
/// for `5` positions yields `8~2` and `20~3`.
///
/// A non-positive `len` yields nothing.
pub fn span<T, I>(source: I, start: T, len: T) -> Span<I::IntoIter, T>
where
    T: Position,
    I: IntoIterator,
    I::Item: Extent<T>,
{
    Span {
        source: source.into_iter(),
        start,
        remaining: len,
    }
}

/// Iterator adapter created by [`span`].
#[derive(Clone)]
pub struct Span<I, T> {
    source: I,
    start: T,
    remaining: T,
}

impl<I, T> Iterator for Span<I, T>
where
    T: Position,
    I: Iterator,
    I::Item: Extent<T>,
{
    type Item = Interval<T>;

    fn next(&mut self) -> Option<Self::Item> {
        while self.remaining > T::zero() {
            let extent = self.source.next()?;
            let start = extent.start().max(self.start);
            let end = extent.end();
            if end <= start {
                continue;
            }
            let len = (end - start).min(self.remaining);
            self.remaining = self.remaining - len;
            return Some(Interval::new(start, len));
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::span;
    use crate::Interval;

    fn collect(pairs: &[(u64, u64)], start: u64, len: u64) -> Vec<(u64, u64)> {
        let source: Vec<_> = pairs.iter().map(|&p| Interval::from(p)).collect();
        span(source, start, len).map(Into::into).collect()
    }

    #[test]
    fn test_skips_gaps() {
        assert_eq!(collect(&[(5, 5), (20, 5)], 8, 5), vec![(8, 2), (20, 3)]);
        assert_eq!(collect(&[(5, 10), (20, 5)], 8, 5), vec![(8, 5)]);
    }

    #[test]
    fn test_start_in_gap() {
        assert_eq!(collect(&[(5, 10), (20, 5)], 16, 3), vec![(20, 3)]);
        assert_eq!(collect(&[(5, 10), (20, 5)], 0, 3), vec![(5, 3)]);
    }

    #[test]
    fn test_source_exhausted() {
        assert_eq!(
            collect(&[(5, 10), (20, 5)], 6, 100),
            vec![(6, 9), (20, 5)]
        );
        assert!(collect(&[(5, 10)], 15, 4).is_empty());
    }

    #[test]
    fn test_zero_len() {
        assert!(collect(&[(5, 10)], 5, 0).is_empty());
    }

    #[test]
    fn test_exact_fit() {
        assert_eq!(collect(&[(5, 10), (20, 5)], 5, 10), vec![(5, 10)]);
        let mut it = span(vec![Interval::new(5u64, 10)], 5, 4);
        assert_eq!(it.next(), Some(Interval::new(5, 4)));
        assert_eq!(it.next(), None);
    }
}
