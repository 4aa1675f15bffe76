//! Fixed-width big-endian `u64` coder.
//!
//! Every value is written as exactly 8 bytes, most significant byte first,
//! so unsigned numeric order and byte-lexicographic order agree.

use super::traits::{Coder, CoderError, CoderResult};
use byteorder::{BigEndian, ReadBytesExt, WriteBytesExt};
use std::io::{self, Read, Write};
use tracing::debug;

/// Encoded width of a `u64` in bytes.
pub const U64_LEN: usize = 8;

/// Identifier of [`BigEndianU64Coder`].
pub const BIG_ENDIAN_U64_CODER_ID: &str = "big-endian-u64";

/// Write `value` as 8 big-endian bytes.
#[inline]
pub fn write_u64(value: u64, out: &mut dyn Write) -> io::Result<()> {
    out.write_u64::<BigEndian>(value)
}

/// Read 8 big-endian bytes as a `u64`.
///
/// A source holding fewer than 8 bytes yields `UnexpectedEof`.
#[inline]
pub fn read_u64(input: &mut dyn Read) -> io::Result<u64> {
    input.read_u64::<BigEndian>()
}

/// Read a `u64` on behalf of `coder_id`, logging source failures.
pub(crate) fn read_u64_for(coder_id: &str, input: &mut dyn Read) -> CoderResult<u64> {
    read_u64(input).map_err(|e| {
        debug!(coder = coder_id, kind = ?e.kind(), error = %e, "source read failed");
        CoderError::from(e)
    })
}

/// Big-endian fixed-width `u64` coder.
///
/// # Example
///
/// ```
/// use ordstamp_codec::{BigEndianU64Coder, Coder};
///
/// let coder = BigEndianU64Coder;
/// let encoded = coder.encode_to_vec(&0x0102_0304_0506_0708).unwrap();
/// assert_eq!(encoded, vec![1, 2, 3, 4, 5, 6, 7, 8]);
/// assert_eq!(coder.decode_from_slice(&encoded).unwrap(), 0x0102_0304_0506_0708);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct BigEndianU64Coder;

impl Coder for BigEndianU64Coder {
    type Value = u64;

    fn encode(&self, value: &u64, out: &mut dyn Write) -> CoderResult<()> {
        write_u64(*value, out)?;
        Ok(())
    }

    fn decode(&self, input: &mut dyn Read) -> CoderResult<u64> {
        read_u64_for(BIG_ENDIAN_U64_CODER_ID, input)
    }

    fn coder_id(&self) -> &str {
        BIG_ENDIAN_U64_CODER_ID
    }

    fn is_order_preserving(&self) -> bool {
        true
    }

    fn verify_deterministic(&self) -> CoderResult<()> {
        Ok(())
    }
}
