//! Binary coders for ordstamp
//!
//! This crate provides:
//! - Coder: the encode/decode contract shared by all coders
//! - BigEndianU64Coder: fixed-width big-endian `u64` coder
//! - TimestampCoder: order-preserving 8-byte timestamp coder
//!
//! # Usage
//!
//! ```
//! use ordstamp_codec::{Coder, TimestampCoder};
//! use ordstamp_core::Timestamp;
//!
//! let coder = TimestampCoder;
//! let mut sink = Vec::new();
//! coder.encode(&Timestamp::from_millis(0), &mut sink)?;
//! assert_eq!(sink, [0x80, 0, 0, 0, 0, 0, 0, 0]);
//!
//! let decoded = coder.decode(&mut sink.as_slice())?;
//! assert_eq!(decoded, Timestamp::EPOCH);
//! # Ok::<(), ordstamp_codec::CoderError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod big_endian;
pub mod timestamp;
mod traits;

pub use big_endian::{read_u64, write_u64, BigEndianU64Coder, BIG_ENDIAN_U64_CODER_ID, U64_LEN};
pub use timestamp::{
    bias, from_sort_key, to_sort_key, unbias, TimestampCoder, ENCODED_LEN, SIGN_BIAS,
    TIMESTAMP_CODER_ID,
};
pub use traits::{Coder, CoderError, CoderResult};
