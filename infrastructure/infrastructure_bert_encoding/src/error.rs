//! Encoding errors

use std::io;

use thiserror::Error;

/// Encoding error types
#[derive(Debug, Error)]
pub enum EncodeError {
    /// The value's runtime shape is not one the codec can express
    #[error("unhandled type: {type_name}")]
    Unclassifiable { type_name: &'static str },
    /// Integer outside the 32-bit signed range handed to the integer path
    #[error("integer {0} is outside the 32-bit signed range")]
    IntegerOutOfRange(i128),
    /// Atom longer than a 2-byte length prefix can express
    #[error("atom is {0} bytes long, the limit is 65535")]
    AtomTooLong(usize),
    /// Binary, tuple or list longer than a 4-byte prefix can express
    #[error("{what} length {len} does not fit in a 4-byte prefix")]
    LengthOverflow { what: &'static str, len: usize },
    /// Big integer magnitude longer than a 1-byte length prefix can express
    #[error("big integer magnitude needs {0} bytes, the limit is 255")]
    BigIntegerTooLarge(usize),
    /// The output sink failed
    #[error("write failed: {0}")]
    Io(#[from] io::Error),
}
