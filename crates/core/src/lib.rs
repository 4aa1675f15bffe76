//! Core types for ordstamp
//!
//! This crate defines the value types shared by the codecs:
//! - Timestamp: signed millisecond count relative to the Unix epoch

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod timestamp;

pub use timestamp::Timestamp;
