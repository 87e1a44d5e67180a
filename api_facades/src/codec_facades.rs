//! Codec Facades
//!
//! Slice-oriented helpers over the stream entry points, and a single error type for
//! callers that both encode and decode.

use std::io::Cursor;

use infrastructure_bert_decoding::{decode_as_with_limits, DecodeError, DecodeLimits, FromBert};
use infrastructure_bert_encoding::{encode_to_vec, EncodeError, ToTerm};
use thiserror::Error;
use tracing::debug;

/// Either side of the codec failed
#[derive(Debug, Error)]
pub enum BertError {
    #[error("encoding failed: {0}")]
    Encode(#[from] EncodeError),
    #[error("decoding failed: {0}")]
    Decode(#[from] DecodeError),
}

/// Encode a value into a new buffer
pub fn to_vec<T: ToTerm + ?Sized>(value: &T) -> Result<Vec<u8>, EncodeError> {
    encode_to_vec(value)
}

/// Decode a complete message held in memory
///
/// Bytes after the term are ignored, as with the stream decoder.
pub fn from_slice<T: FromBert>(bytes: &[u8]) -> Result<T, DecodeError> {
    from_slice_with_limits(bytes, DecodeLimits::default())
}

/// [`from_slice`] with explicit limits
pub fn from_slice_with_limits<T: FromBert>(
    bytes: &[u8],
    limits: DecodeLimits,
) -> Result<T, DecodeError> {
    decode_as_with_limits(Cursor::new(bytes), limits)
}

/// Encode `value` and decode the bytes back as `U`
///
/// Useful for converting between a generic value and a typed record, and for
/// checking that a type survives the wire.
pub fn transcode<T, U>(value: &T) -> Result<U, BertError>
where
    T: ToTerm + ?Sized,
    U: FromBert,
{
    let bytes = encode_to_vec(value)?;
    from_slice(&bytes).map_err(|err| {
        debug!(error = %err, "Transcoded bytes did not match the target.");
        BertError::from(err)
    })
}
