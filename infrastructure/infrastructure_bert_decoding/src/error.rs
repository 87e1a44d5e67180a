//! Decoding errors

use std::io;
use std::string::FromUtf8Error;

use entities_bert_terms::{tag_name, IntWidth};
use malachite::Integer;
use thiserror::Error;
use tracing::debug;

/// Decoding error types
///
/// Every failure is terminal for the call that raised it.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// First byte was not the version marker
    #[error("incorrect Erlang term version tag: {0}")]
    Version(u8),
    /// Tag not valid for the current target
    #[error("unexpected {} while decoding {expected}", tag_name(*.tag))]
    UnexpectedTag { tag: u8, expected: &'static str },
    /// Tuple arity differs from the number of declared record fields
    #[error("tuple has {actual} elements but the target declares {expected} fields")]
    ArityMismatch { expected: usize, actual: usize },
    /// Stream ended before a structurally required byte run was complete
    #[error("truncated data: needed {expected} bytes, got {actual}")]
    Truncated { expected: usize, actual: usize },
    /// Integer target too narrow to ever hold a BERT integer
    #[error("value out of range: {0} integer targets cannot hold BERT integers")]
    Range(IntWidth),
    /// Decoded integer does not fit the declared width
    #[error("integer {value} does not fit in a {width} target")]
    Overflow { value: Integer, width: IntWidth },
    /// Big integer magnitude shorter than its declared length
    #[error("parse big integer error: expected {expected} magnitude bytes, got {actual}")]
    BigIntegerLength { expected: usize, actual: usize },
    /// Big integer sign byte other than 0 or 1
    #[error("invalid big integer sign byte: {0}")]
    BigIntegerSign(u8),
    /// List not closed by `NIL_EXT`
    #[error("could not find nil: {}", found_name(.found))]
    MissingNil { found: Option<u8> },
    /// Text bytes are not UTF-8
    #[error("text is not valid UTF-8: {0}")]
    InvalidUtf8(#[from] FromUtf8Error),
    /// Charlist element is not a Unicode scalar value
    #[error("charlist element {0} is not a Unicode scalar value")]
    InvalidCodePoint(i64),
    /// Target kind the decoder does not support
    #[error("unhandled decoding target: {0}")]
    UnhandledTarget(&'static str),
    /// A typed target received a value of a different kind than its shape asked for
    #[error("target expected {expected} but the decoder produced {found}")]
    ShapeMismatch {
        expected: &'static str,
        found: &'static str,
    },
    /// Length prefix larger than the configured limit
    #[error("{what} length {len} exceeds the configured limit of {limit}")]
    LimitExceeded {
        what: &'static str,
        len: usize,
        limit: usize,
    },
    /// Nesting deeper than the configured limit
    #[error("term nesting exceeds the configured depth limit of {0}")]
    DepthExceeded(usize),
    /// The input stream failed
    #[error("read failed: {0}")]
    Io(#[from] io::Error),
}

impl DecodeError {
    /// Whether the error means the input ended early.
    pub fn is_truncation(&self) -> bool {
        matches!(
            self,
            DecodeError::Truncated { .. } | DecodeError::BigIntegerLength { .. }
        )
    }
}

/// Build an `UnexpectedTag` error, logging the mismatch.
pub(crate) fn unexpected_tag(tag: u8, expected: &'static str) -> DecodeError {
    debug!(tag = %tag_name(tag), expected, "Unexpected tag.");
    DecodeError::UnexpectedTag { tag, expected }
}

fn found_name(found: &Option<u8>) -> String {
    match found {
        Some(byte) => tag_name(*byte),
        None => "end of data".to_string(),
    }
}
