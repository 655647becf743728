//! Binary encoding of interval sets.
//!
//! # Format
//!
//! ```text
//! count: u32 LE
//! count x (start: T LE, len: T LE)
//! ```
//!
//! Intervals are written in ascending order. The format carries no bucket
//! layout, so bytes written by an [`IntervalSet`] decode into a
//! [`BucketedIntervalSet`] and vice versa. Cached totals are never stored:
//! the decoder recomputes `size` and the interval count from the pairs.
//!
//! Decoding does not re-check canonical form. Bytes from an untrusted source
//! should be followed by `check_invariants()`.

use std::io::{self, Read, Write};

use byteorder::{LE, ReadBytesExt, WriteBytesExt};
use ivset_common::{Result, error::Error};
use ivset_ranges::{Interval, Position};

use crate::{BucketedIntervalSet, IntervalSet};

/// Upper bound on the number of intervals preallocated from an untrusted count.
const MAX_PREALLOC: usize = 64 * 1024;

/// A position type with a fixed-width little-endian encoding.
pub trait WireValue: Position {
    /// Number of bytes one value occupies on the wire.
    const ENCODED_LEN: usize;

    fn write_to<W: Write + ?Sized>(self, w: &mut W) -> io::Result<()>;

    fn read_from<R: Read + ?Sized>(r: &mut R) -> io::Result<Self>;
}

macro_rules! impl_wire_value {
    ($($ty:ty => $write:ident, $read:ident;)*) => {
        $(
            impl WireValue for $ty {
                const ENCODED_LEN: usize = std::mem::size_of::<$ty>();

                #[inline]
                fn write_to<W: Write + ?Sized>(self, w: &mut W) -> io::Result<()> {
                    w.$write::<LE>(self)
                }

                #[inline]
                fn read_from<R: Read + ?Sized>(r: &mut R) -> io::Result<Self> {
                    r.$read::<LE>()
                }
            }
        )*
    };
}

impl_wire_value! {
    u16 => write_u16, read_u16;
    u32 => write_u32, read_u32;
    u64 => write_u64, read_u64;
    i32 => write_i32, read_i32;
    i64 => write_i64, read_i64;
}

impl WireValue for usize {
    const ENCODED_LEN: usize = 8;

    #[inline]
    fn write_to<W: Write + ?Sized>(self, w: &mut W) -> io::Result<()> {
        w.write_u64::<LE>(self as u64)
    }

    fn read_from<R: Read + ?Sized>(r: &mut R) -> io::Result<Self> {
        let value = r.read_u64::<LE>()?;
        usize::try_from(value).map_err(|_| {
            io::Error::new(
                io::ErrorKind::InvalidData,
                format!("position {value} does not fit in usize"),
            )
        })
    }
}

/// Serialization into the count-prefixed interval format.
pub trait Encode {
    /// Adds the exact number of bytes [`encode`](Self::encode) writes to `size`.
    fn bound_encode(&self, size: &mut usize);

    /// Writes the interval count followed by every `(start, len)` pair.
    fn encode<W: Write + ?Sized>(&self, w: &mut W) -> Result<()>;

    /// Writes the `(start, len)` pairs without the leading count.
    fn encode_nohead<W: Write + ?Sized>(&self, w: &mut W) -> Result<()>;

    /// Encodes into a new, exactly sized buffer.
    ///
    /// # Example
    ///
    /// ```
    /// use ivset::{Encode, IntervalSet};
    ///
    /// let set = IntervalSet::<u32>::from_interval(5, 10);
    /// let bytes = set.to_bytes().unwrap();
    /// assert_eq!(bytes, [1, 0, 0, 0, 5, 0, 0, 0, 10, 0, 0, 0]);
    /// ```
    fn to_bytes(&self) -> Result<Vec<u8>> {
        let mut size = 0;
        self.bound_encode(&mut size);
        let mut buf = Vec::with_capacity(size);
        self.encode(&mut buf)?;
        Ok(buf)
    }
}

/// Deserialization from the count-prefixed interval format.
pub trait Decode: Sized {
    /// Reads the interval count, then that many `(start, len)` pairs.
    fn decode<R: Read + ?Sized>(r: &mut R) -> Result<Self> {
        let count = r
            .read_u32::<LE>()
            .map_err(|e| Error::io("interval count", e))?;
        Self::decode_nohead(count as usize, r)
    }

    /// Reads `count` pairs written by [`Encode::encode_nohead`].
    fn decode_nohead<R: Read + ?Sized>(count: usize, r: &mut R) -> Result<Self>;

    /// Decodes a complete buffer; trailing bytes are an error.
    ///
    /// # Example
    ///
    /// ```
    /// use ivset::{BucketedIntervalSet, Decode, Encode, IntervalSet};
    ///
    /// let flat: IntervalSet<u64> = [0..4, 10..12].into_iter().collect();
    /// let bucketed = BucketedIntervalSet::<u64>::from_bytes(&flat.to_bytes().unwrap()).unwrap();
    /// assert_eq!(bucketed, flat);
    /// ```
    fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let mut reader = io::Cursor::new(bytes);
        let set = Self::decode(&mut reader)?;
        let consumed = reader.position() as usize;
        if consumed != bytes.len() {
            return Err(Error::invalid_format(
                "bytes",
                format!("{} trailing bytes after interval list", bytes.len() - consumed),
            ));
        }
        Ok(set)
    }
}

fn write_count<W: Write + ?Sized>(count: usize, w: &mut W) -> Result<()> {
    let count = u32::try_from(count).map_err(|_| {
        Error::invalid_arg("count", format!("{count} intervals exceed the u32 count field"))
    })?;
    w.write_u32::<LE>(count)
        .map_err(|e| Error::io("interval count", e))
}

fn write_intervals<T, I, W>(intervals: I, w: &mut W) -> Result<()>
where
    T: WireValue,
    I: Iterator<Item = Interval<T>>,
    W: Write + ?Sized,
{
    for interval in intervals {
        interval
            .start
            .write_to(w)
            .and_then(|_| interval.len.write_to(w))
            .map_err(|e| Error::io("interval", e))?;
    }
    Ok(())
}

/// Reads `count` pairs, rejecting a list whose total size overflows `T`.
fn read_intervals<T, R>(count: usize, r: &mut R) -> Result<Vec<Interval<T>>>
where
    T: WireValue,
    R: Read + ?Sized,
{
    let mut intervals = Vec::with_capacity(count.min(MAX_PREALLOC));
    let mut total = T::zero();
    for _ in 0..count {
        let start = T::read_from(r).map_err(|e| Error::io("interval start", e))?;
        let len = T::read_from(r).map_err(|e| Error::io("interval len", e))?;
        total = total
            .checked_add(&len)
            .ok_or_else(|| Error::invalid_format("size", "sum of lengths overflows"))?;
        intervals.push(Interval::new(start, len));
    }
    Ok(intervals)
}

impl<T: WireValue> Encode for IntervalSet<T> {
    fn bound_encode(&self, size: &mut usize) {
        *size += 4 + self.num_intervals() * 2 * T::ENCODED_LEN;
    }

    fn encode<W: Write + ?Sized>(&self, w: &mut W) -> Result<()> {
        write_count(self.num_intervals(), w)?;
        self.encode_nohead(w)
    }

    fn encode_nohead<W: Write + ?Sized>(&self, w: &mut W) -> Result<()> {
        write_intervals(self.iter(), w)
    }
}

impl<T: WireValue> Decode for IntervalSet<T> {
    fn decode_nohead<R: Read + ?Sized>(count: usize, r: &mut R) -> Result<Self> {
        let set = IntervalSet::from_canonical(read_intervals(count, r)?);
        log::trace!("decoded {} intervals, size {}", set.num_intervals(), set.size());
        Ok(set)
    }
}

impl<T: WireValue> Encode for BucketedIntervalSet<T> {
    fn bound_encode(&self, size: &mut usize) {
        *size += 4 + self.num_intervals() * 2 * T::ENCODED_LEN;
    }

    fn encode<W: Write + ?Sized>(&self, w: &mut W) -> Result<()> {
        write_count(self.num_intervals(), w)?;
        self.encode_nohead(w)
    }

    fn encode_nohead<W: Write + ?Sized>(&self, w: &mut W) -> Result<()> {
        write_intervals(self.iter(), w)
    }
}

impl<T: WireValue> Decode for BucketedIntervalSet<T> {
    fn decode_nohead<R: Read + ?Sized>(count: usize, r: &mut R) -> Result<Self> {
        BucketedIntervalSet::decode_nohead_with_capacity(count, r, Self::DEFAULT_BUCKET_CAPACITY)
    }
}

impl<T: WireValue> BucketedIntervalSet<T> {
    /// Like [`Decode::decode`], packing the intervals into buckets of at most
    /// `bucket_capacity` intervals.
    ///
    /// # Panics
    ///
    /// Contract violation if `bucket_capacity` is zero.
    pub fn decode_with_capacity<R: Read + ?Sized>(
        r: &mut R,
        bucket_capacity: usize,
    ) -> Result<Self> {
        let count = r
            .read_u32::<LE>()
            .map_err(|e| Error::io("interval count", e))?;
        Self::decode_nohead_with_capacity(count as usize, r, bucket_capacity)
    }

    fn decode_nohead_with_capacity<R: Read + ?Sized>(
        count: usize,
        r: &mut R,
        bucket_capacity: usize,
    ) -> Result<Self> {
        // Capacity is checked before any bytes are consumed.
        let empty = BucketedIntervalSet::with_bucket_capacity(bucket_capacity);
        let intervals = read_intervals(count, r)?;
        if intervals.is_empty() {
            return Ok(empty);
        }
        let set = BucketedIntervalSet::from_canonical(intervals, bucket_capacity);
        log::trace!(
            "decoded {} intervals into {} buckets, size {}",
            set.num_intervals(),
            set.num_buckets(),
            set.size()
        );
        Ok(set)
    }
}
