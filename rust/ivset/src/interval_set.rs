//! A vector-backed canonical interval set.

use std::{fmt, iter::FusedIterator, ops::Range, slice};

use itertools::Itertools;
use ivset_common::{Result, error::Error, verify_data};
use ivset_ranges::{
    Interval, IntervalSeq, Position,
    seq::{fmt_intervals, same_intervals},
    set_ops,
};

use crate::{cursor::Cursor, precondition};

/// A set of positions stored as a sorted vector of disjoint intervals.
///
/// The vector is sorted by `start`, every interval has a positive length, and
/// consecutive intervals `a`, `b` satisfy `a.end() < b.start`: intervals that
/// would touch are always merged. The cached `size` equals the sum of all
/// lengths. Every public mutation re-establishes these rules.
///
/// Lookups are O(log n) binary searches. Mutations that add or remove an
/// interval shift the vector tail and cost O(n); [`BucketedIntervalSet`]
/// bounds that cost by splitting a large set over many short vectors.
///
/// [`BucketedIntervalSet`]: crate::BucketedIntervalSet
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct IntervalSet<T> {
    intervals: Vec<Interval<T>>,
    size: T,
}

impl<T: Position> IntervalSet<T> {
    pub fn new() -> Self {
        IntervalSet {
            intervals: Vec::new(),
            size: T::zero(),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        IntervalSet {
            intervals: Vec::with_capacity(capacity),
            size: T::zero(),
        }
    }

    /// Creates a set holding the single interval `start~len`.
    pub fn from_interval(start: T, len: T) -> Self {
        let mut set = IntervalSet::new();
        set.insert_range(start, len);
        set
    }

    /// Wraps intervals already known to be canonical.
    pub(crate) fn from_canonical(intervals: Vec<Interval<T>>) -> Self {
        let size = intervals
            .iter()
            .fold(T::zero(), |acc, interval| acc + interval.len);
        IntervalSet { intervals, size }
    }

    /// Number of covered positions.
    #[inline]
    pub fn size(&self) -> T {
        self.size
    }

    #[inline]
    pub fn num_intervals(&self) -> usize {
        self.intervals.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.intervals.is_empty()
    }

    #[inline]
    pub fn as_slice(&self) -> &[Interval<T>] {
        &self.intervals
    }

    pub fn clear(&mut self) {
        self.intervals.clear();
        self.size = T::zero();
    }

    pub fn swap(&mut self, other: &mut IntervalSet<T>) {
        std::mem::swap(self, other);
    }

    /// Smallest covered position.
    ///
    /// # Panics
    ///
    /// Contract violation if the set is empty.
    pub fn range_start(&self) -> T {
        match self.intervals.first() {
            Some(first) => first.start,
            None => precondition::empty_set("range_start"),
        }
    }

    /// One past the largest covered position.
    ///
    /// # Panics
    ///
    /// Contract violation if the set is empty.
    pub fn range_end(&self) -> T {
        match self.intervals.last() {
            Some(last) => last.end(),
            None => precondition::empty_set("range_end"),
        }
    }

    /// Index of the first interval that ends after `pos`: the interval
    /// covering `pos` if there is one, otherwise the next one above it.
    fn find_inc(&self, pos: T) -> usize {
        let idx = self.intervals.partition_point(|iv| iv.start < pos);
        if idx > 0
            && self.intervals.get(idx).is_none_or(|iv| iv.start > pos)
            && self.intervals[idx - 1].end() > pos
        {
            idx - 1
        } else {
            idx
        }
    }

    /// Like [`find_inc`](Self::find_inc), but also steps back to an interval
    /// that ends exactly at `pos` (one `pos` would be appended to).
    fn find_adj(&self, pos: T) -> usize {
        let idx = self.intervals.partition_point(|iv| iv.start < pos);
        if idx > 0
            && self.intervals.get(idx).is_none_or(|iv| iv.start > pos)
            && self.intervals[idx - 1].end() >= pos
        {
            idx - 1
        } else {
            idx
        }
    }

    #[inline]
    pub fn contains(&self, pos: T) -> bool {
        self.containing(pos).is_some()
    }

    /// Returns the interval covering `pos`, if any.
    pub fn containing(&self, pos: T) -> Option<Interval<T>> {
        self.intervals
            .get(self.find_inc(pos))
            .filter(|iv| iv.start <= pos)
            .copied()
    }

    /// Returns `true` if `[start, start + len)` lies inside one stored interval.
    pub fn contains_range(&self, start: T, len: T) -> bool {
        self.containing(start)
            .is_some_and(|iv| iv.covers(start, len))
    }

    /// Returns `true` if any position of `[start, start + len)` is in the set.
    pub fn intersects(&self, start: T, len: T) -> bool {
        len > T::zero()
            && self
                .intervals
                .get(self.find_inc(start))
                .is_some_and(|iv| iv.start < start + len)
    }

    /// Returns `true` if some interval starts after the uncovered `pos`.
    ///
    /// # Panics
    ///
    /// Contract violation if `pos` is covered.
    pub fn starts_after(&self, pos: T) -> bool {
        self.start_after(pos).is_some()
    }

    /// Start of the first interval above the uncovered `pos`.
    ///
    /// # Panics
    ///
    /// Contract violation if `pos` is covered.
    pub fn start_after(&self, pos: T) -> Option<T> {
        let idx = self.find_inc(pos);
        match self.intervals.get(idx) {
            Some(iv) if iv.start <= pos => precondition::covered("start_after", pos),
            Some(iv) => Some(iv.start),
            None => None,
        }
    }

    /// End of the interval covering `pos`.
    ///
    /// # Panics
    ///
    /// Contract violation if `pos` is not covered.
    pub fn end_after(&self, pos: T) -> T {
        match self.containing(pos) {
            Some(iv) => iv.end(),
            None => precondition::uncovered("end_after", pos),
        }
    }

    #[inline]
    pub fn insert(&mut self, pos: T) -> Interval<T> {
        self.insert_range(pos, T::one())
    }

    /// Adds `[start, start + len)` and returns the interval that now holds it,
    /// after merging with a neighbor that ends at `start` and/or one that
    /// begins at `start + len`.
    ///
    /// # Panics
    ///
    /// Contract violation if `len` is not positive, or if any position of the
    /// range is already in the set. The set is left unchanged in both cases.
    pub fn insert_range(&mut self, start: T, len: T) -> Interval<T> {
        if len <= T::zero() {
            precondition::non_positive_len("insert", len);
        }
        let end = start + len;
        let idx = self.find_adj(start);

        let merged = match self.intervals.get(idx).copied() {
            None => {
                self.intervals.push(Interval::new(start, len));
                Interval::new(start, len)
            }
            Some(prev) if prev.start < start => {
                if prev.end() != start {
                    precondition::overlap("insert", start, len, prev);
                }
                match self.intervals.get(idx + 1).copied() {
                    Some(next) if next.start < end => {
                        precondition::overlap("insert", start, len, next)
                    }
                    Some(next) if next.start == end => {
                        // Fills the gap exactly: prev, range and next become one.
                        self.intervals[idx].len = prev.len + len + next.len;
                        self.intervals.remove(idx + 1);
                    }
                    _ => self.intervals[idx].len = prev.len + len,
                }
                self.intervals[idx]
            }
            Some(next) => {
                if next.start < end {
                    precondition::overlap("insert", start, len, next);
                }
                if next.start == end {
                    self.intervals[idx] = Interval::new(start, len + next.len);
                } else {
                    self.intervals.insert(idx, Interval::new(start, len));
                }
                self.intervals[idx]
            }
        };

        self.size = self.size + len;
        merged
    }

    #[inline]
    pub fn erase(&mut self, pos: T) {
        self.erase_range(pos, T::one())
    }

    /// Removes `[start, start + len)`, which must lie inside one stored
    /// interval. The host interval keeps its part before the range and the
    /// part after the range becomes a separate interval.
    ///
    /// # Panics
    ///
    /// Contract violation if `len` is not positive or the range is not fully
    /// covered by a single interval. The set is left unchanged in both cases.
    pub fn erase_range(&mut self, start: T, len: T) {
        if len <= T::zero() {
            precondition::non_positive_len("erase", len);
        }
        let idx = self.find_inc(start);
        let host = match self.intervals.get(idx) {
            Some(iv) if iv.covers(start, len) => *iv,
            _ => precondition::not_covered("erase", start, len),
        };

        let end = start + len;
        let before = start - host.start;
        let after = host.end() - end;
        match (before > T::zero(), after > T::zero()) {
            (true, true) => {
                self.intervals[idx].len = before;
                self.intervals.insert(idx + 1, Interval::new(end, after));
            }
            (true, false) => self.intervals[idx].len = before,
            (false, true) => self.intervals[idx] = Interval::new(end, after),
            (false, false) => {
                self.intervals.remove(idx);
            }
        }
        self.size = self.size - len;
    }

    /// Returns a cursor to the interval covering `pos`.
    pub fn cursor(&self, pos: T) -> Option<Cursor<T>> {
        self.containing(pos).map(|iv| Cursor::new(iv.start))
    }

    /// Removes the whole interval `cursor` refers to and returns it.
    ///
    /// # Panics
    ///
    /// Contract violation if no stored interval starts at `cursor.start()`.
    pub fn remove(&mut self, cursor: Cursor<T>) -> Interval<T> {
        let start = cursor.start();
        let idx = self.intervals.partition_point(|iv| iv.start < start);
        match self.intervals.get(idx) {
            Some(iv) if iv.start == start => {
                let removed = self.intervals.remove(idx);
                self.size = self.size - removed.len;
                removed
            }
            _ => precondition::stale_cursor("remove", start),
        }
    }

    /// Erases every interval of `other`; each must be covered by `self`.
    pub fn subtract<S>(&mut self, other: &S)
    where
        S: IntervalSeq<T> + ?Sized,
    {
        for interval in other.intervals() {
            self.erase_range(interval.start, interval.len);
        }
    }

    /// Inserts every interval of `other`; none may overlap `self`.
    pub fn insert_set<S>(&mut self, other: &S)
    where
        S: IntervalSeq<T> + ?Sized,
    {
        for interval in other.intervals() {
            self.insert_range(interval.start, interval.len);
        }
    }

    /// Replaces the contents of `self` with `a ∩ b`.
    ///
    /// `self` cannot be one of the operands; that is rejected at compile time:
    ///
    /// ```compile_fail
    /// use ivset::IntervalSet;
    ///
    /// let mut s = IntervalSet::<u64>::from_interval(0, 10);
    /// let t = s.clone();
    /// s.intersection_of(&s, &t);
    /// ```
    ///
    /// Use [`intersect_with`](Self::intersect_with) for `self = self ∩ b`.
    pub fn intersection_of(&mut self, a: &IntervalSet<T>, b: &IntervalSet<T>) {
        self.clear();
        for interval in set_ops::intersect(a.iter(), b.iter()) {
            self.push_back(interval);
        }
    }

    /// `self = self ∩ b`.
    pub fn intersect_with(&mut self, b: &IntervalSet<T>) {
        let a = std::mem::take(self);
        self.intersection_of(&a, b);
    }

    /// Replaces the contents of `self` with `a ∪ b`, computed as
    /// `a ∪ (b − (a ∩ b))`.
    pub fn union_of(&mut self, a: &IntervalSet<T>, b: &IntervalSet<T>) {
        self.clone_from(a);

        let mut ab = IntervalSet::new();
        ab.intersection_of(a, b);
        self.subtract(&ab);

        self.insert_set(b);
    }

    /// `self = self ∪ b`.
    pub fn union_with(&mut self, b: &IntervalSet<T>) {
        let a = std::mem::take(self);
        self.union_of(&a, b);
    }

    /// Adds `[start, start + len)`, tolerating positions already present.
    pub fn union_insert(&mut self, start: T, len: T) {
        let range = IntervalSet::from_interval(start, len);
        self.union_with(&range);
    }

    /// Returns `true` if every position of `self` is in `big`.
    pub fn subset_of<S>(&self, big: &S) -> bool
    where
        S: IntervalSeq<T> + ?Sized,
    {
        set_ops::is_subset_of(self, big)
    }

    /// Replaces the contents of `self` with the first `len` positions of
    /// `other` at or after `start`, skipping gaps:
    /// `span_of([5~5,20~5], 8, 5)` gives `[8~2,20~3]`.
    pub fn span_of<S>(&mut self, other: &S, start: T, len: T)
    where
        S: IntervalSeq<T> + ?Sized,
    {
        self.clear();
        for interval in set_ops::span(other.intervals_from(start), start, len) {
            self.push_back(interval);
        }
    }

    /// Collects `self ∩ other` without building a set.
    pub fn intersection_to_vec(&self, other: &IntervalSet<T>) -> Vec<Interval<T>> {
        set_ops::intersect(self.iter(), other.iter()).collect()
    }

    /// Moves all intervals of `other` to the end of `self`.
    ///
    /// An interval of `other` starting exactly at `self.range_end()` is merged
    /// with the last interval of `self`.
    ///
    /// # Panics
    ///
    /// Contract violation if `other` starts before `self.range_end()`.
    pub fn append(&mut self, other: IntervalSet<T>) {
        let Some(&first) = other.intervals.first() else {
            return;
        };
        let mut rest = other.intervals.into_iter();
        if let Some(last) = self.intervals.last_mut() {
            let end = last.end();
            if first.start < end {
                precondition::out_of_order("append", first.start, end);
            }
            if first.start == end {
                last.len = last.len + first.len;
                rest.next();
            }
        }
        self.intervals.extend(rest);
        self.size = self.size + other.size;
    }

    /// Appends an interval known to lie after (and not touch) the current end.
    #[inline]
    pub(crate) fn push_back(&mut self, interval: Interval<T>) {
        debug_assert!(interval.len > T::zero());
        debug_assert!(self.intervals.last().is_none_or(|last| last.end() < interval.start));
        self.size = self.size + interval.len;
        self.intervals.push(interval);
    }

    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            inner: self.intervals.iter(),
        }
    }

    /// Iterates from the interval covering `pos`, or the first one above it.
    pub fn lower_bound(&self, pos: T) -> Iter<'_, T> {
        Iter {
            inner: self.intervals[self.find_inc(pos)..].iter(),
        }
    }

    /// Verifies the canonical-form rules, e.g. after decoding untrusted bytes.
    pub fn check_invariants(&self) -> Result<()> {
        let mut total = T::zero();
        for interval in &self.intervals {
            verify_data!(interval, interval.len > T::zero());
            total = total
                .checked_add(&interval.len)
                .ok_or_else(|| Error::invalid_format("size", "sum of lengths overflows"))?;
        }
        for (prev, next) in self.intervals.iter().tuple_windows() {
            verify_data!(interval_order, prev.end() < next.start);
        }
        verify_data!(size, total == self.size);
        Ok(())
    }
}

impl<T: Position> Default for IntervalSet<T> {
    fn default() -> Self {
        IntervalSet::new()
    }
}

impl<T: Position> IntervalSeq<T> for IntervalSet<T> {
    type Iter<'a>
        = Iter<'a, T>
    where
        Self: 'a;

    #[inline]
    fn intervals(&self) -> Iter<'_, T> {
        self.iter()
    }

    #[inline]
    fn intervals_from(&self, pos: T) -> Iter<'_, T> {
        self.lower_bound(pos)
    }

    #[inline]
    fn size(&self) -> T {
        self.size
    }

    #[inline]
    fn num_intervals(&self) -> usize {
        self.intervals.len()
    }
}

impl<T: Position> FromIterator<Interval<T>> for IntervalSet<T> {
    /// Builds the canonical set covering every given interval; the input may
    /// be unsorted, overlapping or touching.
    fn from_iter<I: IntoIterator<Item = Interval<T>>>(iter: I) -> Self {
        let mut items: Vec<Interval<T>> = iter.into_iter().filter(|iv| !iv.is_empty()).collect();
        items.sort_unstable();
        let intervals = items
            .into_iter()
            .coalesce(|prev, next| {
                if prev.touches(&next) {
                    Ok(Interval::from_bounds(prev.start, prev.end().max(next.end())))
                } else {
                    Err((prev, next))
                }
            })
            .collect();
        IntervalSet::from_canonical(intervals)
    }
}

impl<T: Position> FromIterator<Range<T>> for IntervalSet<T> {
    fn from_iter<I: IntoIterator<Item = Range<T>>>(iter: I) -> Self {
        iter.into_iter()
            .filter(|r| r.start < r.end)
            .map(Interval::from)
            .collect()
    }
}

impl<T: Position> fmt::Display for IntervalSet<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_intervals(self, f)
    }
}

impl<T: Position> fmt::Debug for IntervalSet<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_intervals(self, f)
    }
}

impl<T: Position> PartialEq<[Interval<T>]> for IntervalSet<T> {
    fn eq(&self, other: &[Interval<T>]) -> bool {
        self.intervals == other
    }
}

impl<T: Position> PartialEq<crate::BucketedIntervalSet<T>> for IntervalSet<T> {
    fn eq(&self, other: &crate::BucketedIntervalSet<T>) -> bool {
        same_intervals(self, other)
    }
}

impl<'a, T: Position> IntoIterator for &'a IntervalSet<T> {
    type Item = Interval<T>;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Ascending iterator over the intervals of an [`IntervalSet`].
#[derive(Clone)]
pub struct Iter<'a, T> {
    inner: slice::Iter<'a, Interval<T>>,
}

impl<T: Copy> Iterator for Iter<'_, T> {
    type Item = Interval<T>;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().copied()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T: Copy> DoubleEndedIterator for Iter<'_, T> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().copied()
    }
}

impl<T: Copy> ExactSizeIterator for Iter<'_, T> {}

impl<T: Copy> FusedIterator for Iter<'_, T> {}
