//! Key/value records relayed from the companion device
//!
//! Payload layout of an INBOX frame:
//! ```text
//! [count] { [key: u32 LE][len][len bytes UTF-8] } * count
//! ```
//! Tuples keep the order the companion sent them in. Keys may repeat and
//! any key may be missing; interpreting the keys is left to the receiver.

use heapless::{String, Vec};

/// Maximum number of tuples in one record
pub const MAX_TUPLES: usize = 8;

/// Maximum length of a tuple value in bytes
pub const MAX_VALUE_LEN: usize = 64;

/// Structural errors in an encoded record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RecordError {
    /// Payload ended inside a tuple
    Truncated,
    /// More than [`MAX_TUPLES`] tuples
    TooManyTuples,
    /// A value longer than [`MAX_VALUE_LEN`]
    ValueTooLong,
    /// A value is not valid UTF-8
    InvalidUtf8,
    /// Bytes left over after the last tuple
    TrailingBytes,
    /// Output buffer cannot hold the encoded record
    BufferTooSmall,
}

/// One (key, value) pair
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Tuple {
    pub key: u32,
    pub value: String<MAX_VALUE_LEN>,
}

/// A received record, tuples in transport order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RawRecord {
    tuples: Vec<Tuple, MAX_TUPLES>,
}

impl RawRecord {
    pub const fn new() -> Self {
        Self { tuples: Vec::new() }
    }

    /// Build a record from (key, value) pairs, keeping their order
    pub fn from_pairs(pairs: &[(u32, &str)]) -> Result<Self, RecordError> {
        let mut record = Self::new();
        for &(key, value) in pairs {
            record.push(key, value)?;
        }
        Ok(record)
    }

    /// Append a tuple
    pub fn push(&mut self, key: u32, value: &str) -> Result<(), RecordError> {
        let value = String::try_from(value).map_err(|_| RecordError::ValueTooLong)?;
        self.tuples
            .push(Tuple { key, value })
            .map_err(|_| RecordError::TooManyTuples)
    }

    /// Tuples in the order they were received
    pub fn tuples(&self) -> impl Iterator<Item = &Tuple> {
        self.tuples.iter()
    }

    pub fn len(&self) -> usize {
        self.tuples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tuples.is_empty()
    }

    /// Parse a record from an INBOX payload
    pub fn parse(payload: &[u8]) -> Result<Self, RecordError> {
        let (&count, mut rest) = payload.split_first().ok_or(RecordError::Truncated)?;
        if count as usize > MAX_TUPLES {
            return Err(RecordError::TooManyTuples);
        }

        let mut record = Self::new();
        for _ in 0..count {
            if rest.len() < 5 {
                return Err(RecordError::Truncated);
            }
            let key = u32::from_le_bytes([rest[0], rest[1], rest[2], rest[3]]);
            let len = rest[4] as usize;
            rest = &rest[5..];

            if len > MAX_VALUE_LEN {
                return Err(RecordError::ValueTooLong);
            }
            if rest.len() < len {
                return Err(RecordError::Truncated);
            }
            let value = core::str::from_utf8(&rest[..len]).map_err(|_| RecordError::InvalidUtf8)?;
            record.push(key, value)?;
            rest = &rest[len..];
        }

        if !rest.is_empty() {
            return Err(RecordError::TrailingBytes);
        }
        Ok(record)
    }

    /// Number of bytes [`RawRecord::encode`] writes
    pub fn encoded_len(&self) -> usize {
        1 + self.tuples.iter().map(|t| 5 + t.value.len()).sum::<usize>()
    }

    /// Encode into `buffer`, returning the number of bytes used
    pub fn encode(&self, buffer: &mut [u8]) -> Result<usize, RecordError> {
        let len = self.encoded_len();
        if buffer.len() < len {
            return Err(RecordError::BufferTooSmall);
        }

        buffer[0] = self.tuples.len() as u8;
        let mut pos = 1;
        for tuple in &self.tuples {
            let bytes = tuple.value.as_bytes();
            buffer[pos..pos + 4].copy_from_slice(&tuple.key.to_le_bytes());
            buffer[pos + 4] = bytes.len() as u8;
            pos += 5;
            buffer[pos..pos + bytes.len()].copy_from_slice(bytes);
            pos += bytes.len();
        }
        Ok(pos)
    }
}
