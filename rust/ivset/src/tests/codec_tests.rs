use std::io::Cursor;

use byteorder::{LE, WriteBytesExt};
use ivset_common::error::ErrorKind;

use crate::{BucketedIntervalSet, Decode, Encode, IntervalSet};

use super::{bucketed, flat, pairs};

fn raw(pairs: &[(u64, u64)]) -> Vec<u8> {
    let mut buf = Vec::new();
    buf.write_u32::<LE>(pairs.len() as u32).unwrap();
    for &(start, len) in pairs {
        buf.write_u64::<LE>(start).unwrap();
        buf.write_u64::<LE>(len).unwrap();
    }
    buf
}

#[test]
fn test_layout() {
    let set = flat(&[(5, 10), (20, 5)]);
    let bytes = set.to_bytes().unwrap();
    assert_eq!(bytes, raw(&[(5, 10), (20, 5)]));

    let mut size = 0;
    set.bound_encode(&mut size);
    assert_eq!(size, 36);
    assert_eq!(bytes.len(), size);

    let small = IntervalSet::<u16>::from_interval(1, 2);
    assert_eq!(small.to_bytes().unwrap(), [1, 0, 0, 0, 1, 0, 2, 0]);
}

#[test]
fn test_empty() {
    let bytes = IntervalSet::<u64>::new().to_bytes().unwrap();
    assert_eq!(bytes, [0, 0, 0, 0]);
    assert!(IntervalSet::<u64>::from_bytes(&bytes).unwrap().is_empty());
    assert!(BucketedIntervalSet::<u64>::from_bytes(&bytes).unwrap().is_empty());
}

#[test]
fn test_shared_format() {
    let f = flat(&[(0, 1), (5, 10), (30, 10)]);
    let b = bucketed(&[(0, 1), (5, 10), (30, 10)], 1);
    assert_eq!(b.num_buckets(), 3);
    assert_eq!(f.to_bytes().unwrap(), b.to_bytes().unwrap());

    let decoded = BucketedIntervalSet::<u64>::from_bytes(&f.to_bytes().unwrap()).unwrap();
    assert_eq!(decoded, f);
    assert_eq!(decoded.num_buckets(), 1);
    decoded.check_invariants().unwrap();

    let decoded = IntervalSet::<u64>::from_bytes(&b.to_bytes().unwrap()).unwrap();
    assert_eq!(decoded, b);
    assert_eq!(decoded.size(), 21);
}

#[test]
fn test_decode_with_capacity() {
    let set = flat(&[(0, 1), (2, 1), (4, 1), (6, 1), (8, 1)]);
    let bytes = set.to_bytes().unwrap();
    let decoded = BucketedIntervalSet::<u64>::decode_with_capacity(&mut Cursor::new(&bytes), 2).unwrap();
    assert_eq!(decoded.num_buckets(), 3);
    assert_eq!(decoded.num_intervals(), 5);
    assert_eq!(decoded.size(), 5);
    assert_eq!(decoded.bucket_capacity(), 2);
    assert_eq!(decoded, set);
    decoded.check_invariants().unwrap();
}

#[test]
fn test_nohead() {
    let set = flat(&[(3, 4), (10, 2)]);
    let mut buf = Vec::new();
    set.encode_nohead(&mut buf).unwrap();
    assert_eq!(buf.len(), 32);

    let decoded = IntervalSet::<u64>::decode_nohead(2, &mut buf.as_slice()).unwrap();
    assert_eq!(decoded, set);
    let decoded = BucketedIntervalSet::<u64>::decode_nohead(2, &mut buf.as_slice()).unwrap();
    assert_eq!(pairs(&decoded), [(3, 4), (10, 2)]);
}

#[test]
fn test_usize_positions() {
    let mut set = IntervalSet::<usize>::new();
    set.insert_range(7, 3);
    let bytes = set.to_bytes().unwrap();
    assert_eq!(bytes.len(), 4 + 16);
    assert_eq!(IntervalSet::<usize>::from_bytes(&bytes).unwrap(), set);
}

#[test]
fn test_truncated() {
    let bytes = flat(&[(5, 10)]).to_bytes().unwrap();
    let err = IntervalSet::<u64>::from_bytes(&bytes[..bytes.len() - 1]).unwrap_err();
    assert!(matches!(err.kind(), ErrorKind::Io { .. }));

    let err = BucketedIntervalSet::<u64>::from_bytes(&bytes[..2]).unwrap_err();
    assert!(matches!(err.kind(), ErrorKind::Io { .. }));
}

#[test]
fn test_trailing_bytes() {
    let mut bytes = flat(&[(5, 10)]).to_bytes().unwrap();
    bytes.push(0);
    let err = IntervalSet::<u64>::from_bytes(&bytes).unwrap_err();
    assert!(matches!(err.kind(), ErrorKind::InvalidFormat { .. }));
}

#[test]
fn test_size_overflow() {
    let bytes = raw(&[(0, u64::MAX), (10, 1)]);
    let err = IntervalSet::<u64>::from_bytes(&bytes).unwrap_err();
    assert!(matches!(err.kind(), ErrorKind::InvalidFormat { .. }));
    let err = BucketedIntervalSet::<u64>::from_bytes(&bytes).unwrap_err();
    assert!(matches!(err.kind(), ErrorKind::InvalidFormat { .. }));
}

#[test]
fn test_decode_trusts_layout() {
    // Touching intervals decode as-is; only check_invariants notices.
    let bytes = raw(&[(5, 1), (6, 1)]);
    let set = IntervalSet::<u64>::from_bytes(&bytes).unwrap();
    assert_eq!(set.num_intervals(), 2);
    assert_eq!(set.size(), 2);
    assert!(set.check_invariants().is_err());

    let set = BucketedIntervalSet::<u64>::from_bytes(&bytes).unwrap();
    assert!(set.check_invariants().is_err());
}
