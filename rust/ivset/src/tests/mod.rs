use std::collections::BTreeSet;

use crate::{BucketedIntervalSet, Interval, IntervalSeq, IntervalSet};

mod codec_tests;

pub(crate) fn flat(ranges: &[(u64, u64)]) -> IntervalSet<u64> {
    let mut set = IntervalSet::new();
    for &(start, len) in ranges {
        set.insert_range(start, len);
    }
    set
}

pub(crate) fn bucketed(ranges: &[(u64, u64)], bucket_capacity: usize) -> BucketedIntervalSet<u64> {
    let mut set = BucketedIntervalSet::with_bucket_capacity(bucket_capacity);
    for &(start, len) in ranges {
        set.insert_range(start, len);
    }
    set
}

pub(crate) fn pairs<S: IntervalSeq<u64>>(set: &S) -> Vec<(u64, u64)> {
    set.intervals().map(<(u64, u64)>::from).collect()
}

pub(crate) fn positions<S: IntervalSeq<u64>>(set: &S) -> BTreeSet<u64> {
    set.intervals().flat_map(|iv| iv.as_range()).collect()
}

/// Random canonical set built from `count` ranges starting below `max_pos`.
pub(crate) fn random_set(rng: &mut fastrand::Rng, max_pos: u64, count: usize) -> IntervalSet<u64> {
    (0..count)
        .map(|_| {
            let start = rng.u64(0..max_pos);
            Interval::new(start, rng.u64(1..=16))
        })
        .collect()
}

pub(crate) fn random_bucketed(
    rng: &mut fastrand::Rng,
    max_pos: u64,
    count: usize,
    bucket_capacity: usize,
) -> BucketedIntervalSet<u64> {
    let set = random_set(rng, max_pos, count);
    BucketedIntervalSet::from_canonical(set.as_slice().to_vec(), bucket_capacity)
}
