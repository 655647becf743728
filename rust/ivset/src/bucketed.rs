//! An interval set split over many short vectors.

use std::{
    collections::{BTreeMap, btree_map},
    fmt,
    hash::{Hash, Hasher},
    iter::FusedIterator,
    ops::{Bound, Range},
};

use ivset_common::{Result, error::Error, verify_arg, verify_data};
use ivset_ranges::{
    Extent, Interval, IntervalSeq, Position,
    seq::{fmt_intervals, same_intervals},
    set_ops,
};

use crate::{cursor::Cursor, interval_set, interval_set::IntervalSet, precondition};

/// How far back a bucket lookup may reach from a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Reach {
    /// The bucket must cover the position.
    Overlap,
    /// A bucket ending exactly at the position also qualifies.
    Touch,
}

/// A canonical interval set stored as an ordered map of buckets.
///
/// Each bucket is a non-empty [`IntervalSet`] keyed by its smallest start.
/// Buckets are disjoint and never touch across a boundary, so the whole map
/// reads as one canonical interval sequence: a `BucketedIntervalSet` and an
/// [`IntervalSet`] with the same content compare equal and iterate the same.
///
/// Single-range mutations touch one bucket's vector only, which keeps the
/// vector-shift cost proportional to the bucket rather than the set. The
/// bucket capacity is advisory: inserts never split a bucket and may merge
/// two touching buckets into one larger than the capacity. Results built
/// wholesale (intersection, span, decode) are packed into buckets of at most
/// [`bucket_capacity`](Self::bucket_capacity) intervals, except that a piece
/// touching the previous bucket always joins it.
#[derive(Clone)]
pub struct BucketedIntervalSet<T> {
    buckets: BTreeMap<T, IntervalSet<T>>,
    size: T,
    num_intervals: usize,
    bucket_capacity: usize,
}

/// A bucket seen as one extent spanning from its first start to its last end.
#[derive(Clone, Copy)]
struct BucketView<'a, T> {
    key: T,
    set: &'a IntervalSet<T>,
}

impl<T: Position> Extent<T> for BucketView<'_, T> {
    #[inline]
    fn start(&self) -> T {
        self.key
    }

    #[inline]
    fn end(&self) -> T {
        self.set.range_end()
    }
}

impl<T: Position> BucketedIntervalSet<T> {
    pub const DEFAULT_BUCKET_CAPACITY: usize = 1024;

    pub fn new() -> Self {
        Self::with_bucket_capacity(Self::DEFAULT_BUCKET_CAPACITY)
    }

    /// Creates an empty set packing wholesale results into buckets of at most
    /// `bucket_capacity` intervals.
    ///
    /// # Panics
    ///
    /// Contract violation if `bucket_capacity` is zero.
    pub fn with_bucket_capacity(bucket_capacity: usize) -> Self {
        if bucket_capacity == 0 {
            precondition::zero_capacity("with_bucket_capacity");
        }
        BucketedIntervalSet {
            buckets: BTreeMap::new(),
            size: T::zero(),
            num_intervals: 0,
            bucket_capacity,
        }
    }

    /// Builds a set from canonical intervals, `bucket_capacity` per bucket.
    pub(crate) fn from_canonical(intervals: Vec<Interval<T>>, bucket_capacity: usize) -> Self {
        let mut set = Self::with_bucket_capacity(bucket_capacity);
        for chunk in intervals.chunks(bucket_capacity) {
            let bucket = IntervalSet::from_canonical(chunk.to_vec());
            set.size = set.size + bucket.size();
            set.num_intervals += bucket.num_intervals();
            set.buckets.insert(bucket.range_start(), bucket);
        }
        set
    }

    /// Adopts an existing bucket map after validating it.
    pub fn from_buckets(buckets: BTreeMap<T, IntervalSet<T>>) -> Result<Self> {
        let mut set = Self::new();
        for bucket in buckets.values() {
            set.size = set
                .size
                .checked_add(&bucket.size())
                .ok_or_else(|| Error::invalid_arg("buckets", "sum of sizes overflows"))?;
            set.num_intervals += bucket.num_intervals();
        }
        set.buckets = buckets;
        set.check_invariants()?;
        Ok(set)
    }

    /// Releases the bucket map.
    pub fn into_buckets(self) -> BTreeMap<T, IntervalSet<T>> {
        self.buckets
    }

    /// Number of covered positions.
    #[inline]
    pub fn size(&self) -> T {
        self.size
    }

    #[inline]
    pub fn num_intervals(&self) -> usize {
        self.num_intervals
    }

    #[inline]
    pub fn num_buckets(&self) -> usize {
        self.buckets.len()
    }

    #[inline]
    pub fn bucket_capacity(&self) -> usize {
        self.bucket_capacity
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    /// Removes all intervals; the bucket capacity is kept.
    pub fn clear(&mut self) {
        self.buckets.clear();
        self.size = T::zero();
        self.num_intervals = 0;
    }

    pub fn swap(&mut self, other: &mut BucketedIntervalSet<T>) {
        std::mem::swap(self, other);
    }

    /// Smallest covered position.
    ///
    /// # Panics
    ///
    /// Contract violation if the set is empty.
    pub fn range_start(&self) -> T {
        match self.buckets.first_key_value() {
            Some((&key, _)) => key,
            None => precondition::empty_set("range_start"),
        }
    }

    /// One past the largest covered position.
    ///
    /// # Panics
    ///
    /// Contract violation if the set is empty.
    pub fn range_end(&self) -> T {
        match self.buckets.last_key_value() {
            Some((_, bucket)) => bucket.range_end(),
            None => precondition::empty_set("range_end"),
        }
    }

    /// Finds the bucket covering (or, with [`Reach::Touch`], ending at) `pos`,
    /// falling back to the first bucket above `pos`.
    fn find_bucket(&self, pos: T, reach: Reach) -> Option<(T, &IntervalSet<T>)> {
        if let Some((&key, bucket)) = self.buckets.range(..pos).next_back() {
            let end = bucket.range_end();
            if end > pos || (reach == Reach::Touch && end == pos) {
                return Some((key, bucket));
            }
        }
        self.buckets
            .range(pos..)
            .next()
            .map(|(&key, bucket)| (key, bucket))
    }

    fn next_key(&self, key: T) -> Option<T> {
        self.buckets
            .range((Bound::Excluded(key), Bound::Unbounded))
            .next()
            .map(|(&key, _)| key)
    }

    fn bucket_mut(&mut self, key: T) -> &mut IntervalSet<T> {
        match self.buckets.get_mut(&key) {
            Some(bucket) => bucket,
            None => unreachable!("bucket {key} is not present"),
        }
    }

    fn bucket_views(&self) -> impl Iterator<Item = BucketView<'_, T>> + Clone {
        self.buckets
            .iter()
            .map(|(&key, set)| BucketView { key, set })
    }

    #[inline]
    pub fn contains(&self, pos: T) -> bool {
        self.containing(pos).is_some()
    }

    /// Returns the interval covering `pos`, if any.
    pub fn containing(&self, pos: T) -> Option<Interval<T>> {
        self.find_bucket(pos, Reach::Overlap)
            .and_then(|(_, bucket)| bucket.containing(pos))
    }

    /// Returns `true` if `[start, start + len)` lies inside one stored interval.
    pub fn contains_range(&self, start: T, len: T) -> bool {
        self.find_bucket(start, Reach::Overlap)
            .is_some_and(|(_, bucket)| bucket.contains_range(start, len))
    }

    /// Returns `true` if any position of `[start, start + len)` is in the set.
    ///
    /// The range may run past the end of the first bucket it meets, so every
    /// bucket starting below `start + len` is consulted.
    pub fn intersects(&self, start: T, len: T) -> bool {
        if len <= T::zero() {
            return false;
        }
        let Some((key, _)) = self.find_bucket(start, Reach::Overlap) else {
            return false;
        };
        let end = start + len;
        self.buckets
            .range(key..)
            .take_while(|(bucket_key, _)| **bucket_key < end)
            .any(|(_, bucket)| bucket.intersects(start, len))
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
        match self.lower_bound(pos).next() {
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

    /// Adds `[start, start + len)` and returns the interval that now holds it.
    ///
    /// The range goes to the bucket it touches (or the first bucket above it);
    /// a range past the last bucket opens a new one. A bucket whose smallest
    /// start drops is re-keyed, and a bucket that grows up to the next
    /// bucket's first position absorbs that bucket.
    ///
    /// # Panics
    ///
    /// Contract violation if `len` is not positive, or if any position of the
    /// range is already in the set. The set is left unchanged in both cases.
    pub fn insert_range(&mut self, start: T, len: T) -> Interval<T> {
        if len <= T::zero() {
            precondition::non_positive_len("insert", len);
        }
        let Some((key, _)) = self.find_bucket(start, Reach::Touch) else {
            self.buckets
                .insert(start, IntervalSet::from_interval(start, len));
            self.num_intervals += 1;
            self.size = self.size + len;
            return Interval::new(start, len);
        };

        let end = start + len;
        if let Some(next_key) = self.next_key(key) {
            if end > next_key {
                let existing = self.buckets[&next_key].as_slice()[0];
                precondition::overlap("insert", start, len, existing);
            }
        }

        let capacity = self.bucket_capacity;
        let bucket = self.bucket_mut(key);
        let before = bucket.num_intervals();
        let mut merged = bucket.insert_range(start, len);
        let after = bucket.num_intervals();
        let new_key = bucket.range_start();
        if before <= capacity && after > capacity {
            log::debug!("bucket {key} holds {after} intervals, above capacity {capacity}");
        }

        self.num_intervals = self.num_intervals + after - before;
        self.size = self.size + len;

        let key = if new_key != key {
            self.rekey(key, new_key)
        } else {
            key
        };
        if let Some(absorbed) = self.merge_with_next(key) {
            if merged.end() == absorbed.start {
                merged.len = merged.len + absorbed.len;
            }
        }
        merged
    }

    #[inline]
    pub fn erase(&mut self, pos: T) {
        self.erase_range(pos, T::one())
    }

    /// Removes `[start, start + len)`, which must lie inside one stored
    /// interval. A bucket left empty is dropped; a bucket whose smallest
    /// start moved up is re-keyed.
    ///
    /// # Panics
    ///
    /// Contract violation if `len` is not positive or the range is not fully
    /// covered by a single interval. The set is left unchanged in both cases.
    pub fn erase_range(&mut self, start: T, len: T) {
        if len <= T::zero() {
            precondition::non_positive_len("erase", len);
        }
        let Some((key, _)) = self.find_bucket(start, Reach::Overlap) else {
            precondition::not_covered("erase", start, len);
        };
        let bucket = self.bucket_mut(key);
        let before = bucket.num_intervals();
        bucket.erase_range(start, len);
        let after = bucket.num_intervals();

        self.num_intervals = self.num_intervals + after - before;
        self.size = self.size - len;
        self.settle(key);
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
        let Some((key, _)) = self.find_bucket(cursor.start(), Reach::Overlap) else {
            precondition::stale_cursor("remove", cursor.start());
        };
        let removed = self.bucket_mut(key).remove(cursor);
        self.num_intervals -= 1;
        self.size = self.size - removed.len;
        self.settle(key);
        removed
    }

    /// Drops the bucket under `key` if it became empty, or re-keys it if its
    /// smallest start moved.
    fn settle(&mut self, key: T) {
        let Some(bucket) = self.buckets.get(&key) else {
            return;
        };
        if bucket.is_empty() {
            self.buckets.remove(&key);
            log::trace!("dropped empty bucket {key}");
        } else {
            let new_key = bucket.range_start();
            if new_key != key {
                self.rekey(key, new_key);
            }
        }
    }

    /// Moves the bucket under `old` to `new`.
    fn rekey(&mut self, old: T, new: T) -> T {
        if let Some(bucket) = self.buckets.remove(&old) {
            self.buckets.insert(new, bucket);
            log::trace!("re-keyed bucket {old} -> {new}");
        }
        new
    }

    /// Folds the following bucket into the bucket under `key` when the two
    /// touch. Returns the first interval of the absorbed bucket.
    fn merge_with_next(&mut self, key: T) -> Option<Interval<T>> {
        let end = self.buckets.get(&key)?.range_end();
        let next_key = self.next_key(key)?;
        if next_key != end {
            return None;
        }
        let absorbed = self.buckets.get(&next_key)?.iter().next()?;
        let next = self.buckets.remove(&next_key)?;
        let capacity = self.bucket_capacity;
        let bucket = self.buckets.get_mut(&key)?;
        let before = bucket.num_intervals() + next.num_intervals();
        bucket.append(next);
        let after = bucket.num_intervals();
        self.num_intervals -= before - after;
        log::trace!("merged bucket {next_key} into bucket {key}");
        if after > capacity {
            log::debug!("bucket {key} holds {after} intervals, above capacity {capacity}");
        }
        Some(absorbed)
    }

    /// Appends a run lying at or after the current end.
    ///
    /// The run joins the last bucket whole if it touches that bucket or fits
    /// within its capacity; otherwise it is cut into new buckets of at most
    /// `bucket_capacity` intervals.
    fn append_run(&mut self, run: IntervalSet<T>) {
        if run.is_empty() {
            return;
        }
        let run_start = run.range_start();
        let run_size = run.size();
        let run_count = run.num_intervals();
        let capacity = self.bucket_capacity;

        let target = match self.buckets.last_key_value() {
            Some((&key, last)) => {
                let end = last.range_end();
                if run_start < end {
                    precondition::out_of_order("append", run_start, end);
                }
                (end == run_start || last.num_intervals() + run_count <= capacity).then_some(key)
            }
            None => None,
        };

        match target {
            Some(key) => {
                let bucket = self.bucket_mut(key);
                let before = bucket.num_intervals();
                bucket.append(run);
                let after = bucket.num_intervals();
                self.num_intervals = self.num_intervals + after - before;
            }
            None if run_count <= capacity => {
                self.buckets.insert(run_start, run);
                self.num_intervals += run_count;
            }
            None => {
                for chunk in run.as_slice().chunks(capacity) {
                    let bucket = IntervalSet::from_canonical(chunk.to_vec());
                    self.buckets.insert(bucket.range_start(), bucket);
                }
                self.num_intervals += run_count;
            }
        }
        self.size = self.size + run_size;
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
    /// Buckets of `a` and `b` are paired with the same merge-join the flat
    /// set uses for intervals; each overlapping pair is intersected as two
    /// flat sets and the result appended in order.
    ///
    /// ```compile_fail
    /// use ivset::BucketedIntervalSet;
    ///
    /// let mut s = BucketedIntervalSet::<u64>::new();
    /// s.insert_range(0, 10);
    /// let t = s.clone();
    /// s.intersection_of(&s, &t);
    /// ```
    pub fn intersection_of(&mut self, a: &BucketedIntervalSet<T>, b: &BucketedIntervalSet<T>) {
        self.clear();
        let mut pair = IntervalSet::new();
        for overlap in set_ops::merge_join::<T, _, _>(a.bucket_views(), b.bucket_views()) {
            pair.intersection_of(overlap.left.set, overlap.right.set);
            self.append_run(std::mem::take(&mut pair));
        }
    }

    /// `self = self ∩ b`.
    pub fn intersect_with(&mut self, b: &BucketedIntervalSet<T>) {
        let empty = Self::with_bucket_capacity(self.bucket_capacity);
        let a = std::mem::replace(self, empty);
        self.intersection_of(&a, b);
    }

    /// Replaces the contents of `self` with `a ∪ b`, computed as
    /// `a ∪ (b − (a ∩ b))`.
    pub fn union_of(&mut self, a: &BucketedIntervalSet<T>, b: &BucketedIntervalSet<T>) {
        self.buckets.clone_from(&a.buckets);
        self.size = a.size;
        self.num_intervals = a.num_intervals;

        let mut ab = Self::with_bucket_capacity(self.bucket_capacity);
        ab.intersection_of(a, b);
        self.subtract(&ab);

        self.insert_set(b);
    }

    /// `self = self ∪ b`.
    pub fn union_with(&mut self, b: &BucketedIntervalSet<T>) {
        let empty = Self::with_bucket_capacity(self.bucket_capacity);
        let a = std::mem::replace(self, empty);
        self.union_of(&a, b);
    }

    /// Adds `[start, start + len)`, tolerating positions already present.
    pub fn union_insert(&mut self, start: T, len: T) {
        let mut range = Self::with_bucket_capacity(self.bucket_capacity);
        range.insert_range(start, len);
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
    /// `other` at or after `start`, skipping gaps.
    ///
    /// Walks the buckets of `other` from the one covering `start`, taking a
    /// local span from each until `len` positions are collected.
    pub fn span_of(&mut self, other: &BucketedIntervalSet<T>, start: T, len: T) {
        self.clear();
        let mut offset = start;
        let mut remaining = len;
        while remaining > T::zero() {
            let Some((_, bucket)) = other.find_bucket(offset, Reach::Overlap) else {
                break;
            };
            let mut local = IntervalSet::new();
            local.span_of(bucket, offset, remaining);
            remaining = remaining - local.size();
            offset = bucket.range_end();
            self.append_run(local);
        }
    }

    /// Collects `self ∩ other` without building a set.
    pub fn intersection_to_vec(&self, other: &BucketedIntervalSet<T>) -> Vec<Interval<T>> {
        set_ops::intersect(self.iter(), other.iter()).collect()
    }

    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            buckets: self.buckets.range::<T, _>(..),
            current: None,
        }
    }

    /// Iterates from the interval covering `pos`, or the first one above it.
    pub fn lower_bound(&self, pos: T) -> Iter<'_, T> {
        match self.find_bucket(pos, Reach::Overlap) {
            Some((key, bucket)) => Iter {
                buckets: self
                    .buckets
                    .range((Bound::Excluded(key), Bound::Unbounded)),
                current: Some(bucket.lower_bound(pos)),
            },
            // Every bucket ends at or before `pos`.
            None => Iter {
                buckets: self
                    .buckets
                    .range((Bound::Excluded(pos), Bound::Unbounded)),
                current: None,
            },
        }
    }

    /// Verifies the canonical-form rules of every bucket and across bucket
    /// boundaries, plus the cached totals.
    pub fn check_invariants(&self) -> Result<()> {
        verify_arg!(bucket_capacity, self.bucket_capacity > 0);
        let mut size = T::zero();
        let mut count = 0usize;
        let mut prev_end: Option<T> = None;
        for (&key, bucket) in &self.buckets {
            verify_data!(bucket, !bucket.is_empty());
            bucket.check_invariants()?;
            verify_data!(bucket_key, key == bucket.range_start());
            if let Some(end) = prev_end {
                verify_data!(bucket_order, end < key);
            }
            prev_end = Some(bucket.range_end());
            size = size
                .checked_add(&bucket.size())
                .ok_or_else(|| Error::invalid_format("size", "sum of sizes overflows"))?;
            count += bucket.num_intervals();
        }
        verify_data!(size, size == self.size);
        verify_data!(num_intervals, count == self.num_intervals);
        Ok(())
    }
}

impl<T: Position> Default for BucketedIntervalSet<T> {
    fn default() -> Self {
        BucketedIntervalSet::new()
    }
}

impl<T: Position> IntervalSeq<T> for BucketedIntervalSet<T> {
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
        self.num_intervals
    }
}

impl<T: Position> PartialEq for BucketedIntervalSet<T> {
    fn eq(&self, other: &Self) -> bool {
        same_intervals(self, other)
    }
}

impl<T: Position> Eq for BucketedIntervalSet<T> {}

impl<T: Position> PartialEq<IntervalSet<T>> for BucketedIntervalSet<T> {
    fn eq(&self, other: &IntervalSet<T>) -> bool {
        same_intervals(self, other)
    }
}

impl<T: Position> Hash for BucketedIntervalSet<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.num_intervals.hash(state);
        for interval in self.iter() {
            interval.hash(state);
        }
        self.size.hash(state);
    }
}

impl<T: Position> From<IntervalSet<T>> for BucketedIntervalSet<T> {
    fn from(set: IntervalSet<T>) -> Self {
        BucketedIntervalSet::from_canonical(set.as_slice().to_vec(), Self::DEFAULT_BUCKET_CAPACITY)
    }
}

impl<T: Position> From<&BucketedIntervalSet<T>> for IntervalSet<T> {
    fn from(set: &BucketedIntervalSet<T>) -> Self {
        let mut flat = IntervalSet::with_capacity(set.num_intervals());
        for interval in set.iter() {
            flat.push_back(interval);
        }
        flat
    }
}

impl<T: Position> FromIterator<Interval<T>> for BucketedIntervalSet<T> {
    /// Builds the canonical set covering every given interval; the input may
    /// be unsorted, overlapping or touching.
    fn from_iter<I: IntoIterator<Item = Interval<T>>>(iter: I) -> Self {
        iter.into_iter().collect::<IntervalSet<T>>().into()
    }
}

impl<T: Position> FromIterator<Range<T>> for BucketedIntervalSet<T> {
    fn from_iter<I: IntoIterator<Item = Range<T>>>(iter: I) -> Self {
        iter.into_iter().collect::<IntervalSet<T>>().into()
    }
}

impl<T: Position> fmt::Display for BucketedIntervalSet<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_intervals(self, f)
    }
}

impl<T: Position> fmt::Debug for BucketedIntervalSet<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_intervals(self, f)
    }
}

impl<'a, T: Position> IntoIterator for &'a BucketedIntervalSet<T> {
    type Item = Interval<T>;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Ascending iterator over the intervals of a [`BucketedIntervalSet`].
///
/// Drains the current bucket's intervals, then moves on to the next bucket.
#[derive(Clone)]
pub struct Iter<'a, T> {
    buckets: btree_map::Range<'a, T, IntervalSet<T>>,
    current: Option<interval_set::Iter<'a, T>>,
}

impl<T: Position> Iterator for Iter<'_, T> {
    type Item = Interval<T>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(interval) = self.current.as_mut().and_then(Iterator::next) {
                return Some(interval);
            }
            let (_, bucket) = self.buckets.next()?;
            self.current = Some(bucket.iter());
        }
    }
}

impl<T: Position> FusedIterator for Iter<'_, T> {}
