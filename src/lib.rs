//! ordstamp - order-preserving binary encoding for millisecond timestamps
//!
//! A [`Timestamp`] is encoded as exactly 8 bytes such that comparing the
//! encodings byte by byte gives the same order as comparing the timestamps.
//! This makes encoded timestamps usable directly as keys in sorted storage,
//! for range scans and for byte-wise partitioning.
//!
//! # Quick Start
//!
//! ```
//! use ordstamp::{to_sort_key, Coder, Timestamp, TimestampCoder};
//!
//! let coder = TimestampCoder;
//! let early = coder.encode_to_vec(&Timestamp::from_millis(-5_000))?;
//! let late = coder.encode_to_vec(&Timestamp::from_millis(5_000))?;
//! assert!(early < late);
//!
//! // Sort keys without going through a byte stream
//! assert_eq!(to_sort_key(Timestamp::from_millis(5_000)).as_slice(), late.as_slice());
//! # Ok::<(), ordstamp::CoderError>(())
//! ```
//!
//! # Architecture
//!
//! - `ordstamp-core` owns the [`Timestamp`] value type.
//! - `ordstamp-codec` owns the [`Coder`] contract and the coders.

pub use ordstamp_codec::*;
pub use ordstamp_core::Timestamp;
