//! Coder trait definitions.

use std::io::{self, Read, Write};

/// Coder trait.
///
/// A coder turns values into bytes written to a sink and reads them back
/// from a source. Transport concerns (buffering, retries) belong to the
/// sink or source, never to the coder.
///
/// # Thread Safety
///
/// Coders must be `Send + Sync` so a single instance can be shared by
/// every thread that encodes or decodes.
///
/// # Coder Identity
///
/// Each coder has a stable identifier. Encoded data is only readable by a
/// coder with the same identifier.
pub trait Coder: Send + Sync {
    /// The value type this coder handles.
    type Value;

    /// Encode `value` into `out`.
    ///
    /// Fails only when the sink fails; the sink's error is returned unchanged.
    fn encode(&self, value: &Self::Value, out: &mut dyn Write) -> CoderResult<()>;

    /// Decode one value from `input`.
    ///
    /// Fails only when the source fails or runs out of bytes.
    fn decode(&self, input: &mut dyn Read) -> CoderResult<Self::Value>;

    /// Unique coder identifier.
    fn coder_id(&self) -> &str;

    /// Whether byte-lexicographic order of encodings equals value order.
    fn is_order_preserving(&self) -> bool {
        false
    }

    /// Check that equal values always produce identical bytes.
    fn verify_deterministic(&self) -> CoderResult<()>;

    /// Encode a single value into a fresh buffer.
    fn encode_to_vec(&self, value: &Self::Value) -> CoderResult<Vec<u8>> {
        let mut buf = Vec::new();
        self.encode(value, &mut buf)?;
        Ok(buf)
    }

    /// Decode a buffer holding exactly one encoded value.
    fn decode_from_slice(&self, bytes: &[u8]) -> CoderResult<Self::Value> {
        let mut remaining = bytes;
        let value = self.decode(&mut remaining)?;
        if !remaining.is_empty() {
            return Err(CoderError::TrailingBytes {
                coder: self.coder_id().to_string(),
                remaining: remaining.len(),
            });
        }
        Ok(value)
    }
}

/// Result type alias for coder operations
pub type CoderResult<T> = std::result::Result<T, CoderError>;

/// Coder errors.
#[derive(Debug, thiserror::Error)]
pub enum CoderError {
    /// The sink or source failed, including truncated input.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// A buffer held more bytes than one encoded value.
    #[error("Trailing bytes after {coder} value: {remaining} byte(s) left")]
    TrailingBytes {
        /// Identifier of the coder that decoded the value
        coder: String,
        /// Number of unread bytes
        remaining: usize,
    },

    /// The coder cannot guarantee identical bytes for equal values.
    #[error("Coder {coder} is not deterministic: {reason}")]
    NonDeterministic {
        /// Identifier of the offending coder
        coder: String,
        /// Why determinism cannot be guaranteed
        reason: String,
    },
}

impl CoderError {
    /// The underlying I/O error kind, if this is a sink/source failure.
    pub fn io_kind(&self) -> Option<io::ErrorKind> {
        match self {
            CoderError::Io(e) => Some(e.kind()),
            _ => None,
        }
    }
}
