//! Order-preserving timestamp coder.
//!
//! ## Wire Format
//!
//! ```text
//! [(millis - i64::MIN) mod 2^64: u64 BE]
//! ```
//!
//! Exactly 8 bytes, no tag, no length prefix, no version byte. The format is
//! frozen: changing it breaks every stored key.
//!
//! ## Bias Transform
//!
//! Two's-complement `i64` values do not sort correctly as raw big-endian
//! bytes because the sign bit makes negatives look larger than positives.
//! Subtracting `i64::MIN` with wrapping arithmetic (equivalently, flipping the
//! sign bit) maps `i64::MIN` to `0`, `0` to `2^63` and `i64::MAX` to
//! `u64::MAX`, preserving order. The subtraction must wrap: checked or
//! saturating arithmetic would fail or clamp at the boundaries.

use super::big_endian::{read_u64_for, write_u64, U64_LEN};
use super::traits::{Coder, CoderResult};
use ordstamp_core::Timestamp;
use std::io::{Read, Write};
use tracing::trace;

/// Encoded width of a timestamp in bytes.
pub const ENCODED_LEN: usize = U64_LEN;

/// Bias subtracted (mod 2^64) from the signed millisecond count.
pub const SIGN_BIAS: u64 = i64::MIN as u64;

/// Identifier of [`TimestampCoder`].
pub const TIMESTAMP_CODER_ID: &str = "timestamp-millis";

/// Map a signed millisecond count onto `u64`, preserving order.
#[inline]
pub const fn bias(millis: i64) -> u64 {
    (millis as u64).wrapping_sub(SIGN_BIAS)
}

/// Inverse of [`bias`].
#[inline]
pub const fn unbias(biased: u64) -> i64 {
    biased.wrapping_add(SIGN_BIAS) as i64
}

/// Encode a timestamp into its 8-byte sort key.
///
/// Produces the same bytes as [`TimestampCoder::encode`].
#[inline]
pub const fn to_sort_key(ts: Timestamp) -> [u8; ENCODED_LEN] {
    bias(ts.as_millis()).to_be_bytes()
}

/// Decode an 8-byte sort key. Every key is valid.
#[inline]
pub const fn from_sort_key(key: [u8; ENCODED_LEN]) -> Timestamp {
    Timestamp::from_millis(unbias(u64::from_be_bytes(key)))
}

/// Order-preserving fixed-width timestamp coder.
///
/// Stateless: one instance can be copied or shared across threads freely.
///
/// # Example
///
/// ```
/// use ordstamp_codec::{Coder, TimestampCoder};
/// use ordstamp_core::Timestamp;
///
/// let coder = TimestampCoder;
/// let before = coder.encode_to_vec(&Timestamp::from_millis(-1)).unwrap();
/// let after = coder.encode_to_vec(&Timestamp::from_millis(1)).unwrap();
///
/// assert!(before < after);
/// assert_eq!(coder.decode_from_slice(&before).unwrap(), Timestamp::from_millis(-1));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct TimestampCoder;

impl Coder for TimestampCoder {
    type Value = Timestamp;

    fn encode(&self, value: &Timestamp, out: &mut dyn Write) -> CoderResult<()> {
        write_u64(bias(value.as_millis()), out)?;
        Ok(())
    }

    fn decode(&self, input: &mut dyn Read) -> CoderResult<Timestamp> {
        let biased = read_u64_for(TIMESTAMP_CODER_ID, input)?;
        Ok(Timestamp::from_millis(unbias(biased)))
    }

    fn coder_id(&self) -> &str {
        TIMESTAMP_CODER_ID
    }

    fn is_order_preserving(&self) -> bool {
        true
    }

    fn verify_deterministic(&self) -> CoderResult<()> {
        trace!(coder = TIMESTAMP_CODER_ID, "deterministic by construction");
        Ok(())
    }
}
