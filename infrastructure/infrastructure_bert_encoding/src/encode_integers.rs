//! Integer Encoding Module
//!
//! Provides functionality to encode integers to BERT format.
//!
//! The integer path is canonical: a value in 0..=255 is always written as
//! `SMALL_INTEGER_EXT`, any other 32-bit value always as `INTEGER_EXT`. Callers cannot
//! pick the tag. Values outside the 32-bit range only reach the wire through
//! [`encode_big_integer`].

use std::io::Write;

use entities_bert_terms::Tag;
use malachite::Integer;

use crate::error::EncodeError;

/// Encode a signed 32-bit integer
///
/// # Arguments
/// * `writer` - Sink to append to
/// * `value` - The integer value to encode
///
/// # Returns
/// * `Ok(())` - Success
/// * `Err(EncodeError)` - The sink failed
pub fn encode_integer<W: Write + ?Sized>(writer: &mut W, value: i32) -> Result<(), EncodeError> {
    match u8::try_from(value) {
        Ok(small) => writer.write_all(&[Tag::SmallInteger.byte(), small])?,
        Err(_) => {
            let mut bytes = [0u8; 5];
            bytes[0] = Tag::Integer.byte();
            bytes[1..].copy_from_slice(&value.to_be_bytes());
            writer.write_all(&bytes)?;
        }
    }
    Ok(())
}

/// Encode an arbitrary precision integer
///
/// Values that fit in 32 bits take the canonical integer path. Anything else is
/// written as `SMALL_BIG_EXT`: 1 byte magnitude length, 1 byte sign (0 positive,
/// 1 negative), then the magnitude in little-endian base-256 digits.
///
/// # Returns
/// * `Ok(())` - Success
/// * `Err(EncodeError::BigIntegerTooLarge)` - Magnitude longer than 255 bytes
/// * `Err(EncodeError::Io)` - The sink failed
pub fn encode_big_integer<W: Write + ?Sized>(
    writer: &mut W,
    value: &Integer,
) -> Result<(), EncodeError> {
    if let Ok(small) = i32::try_from(value) {
        return encode_integer(writer, small);
    }

    let is_negative = *value < Integer::from(0);
    let digits = magnitude_bytes(value);
    let arity = u8::try_from(digits.len())
        .map_err(|_| EncodeError::BigIntegerTooLarge(digits.len()))?;

    writer.write_all(&[Tag::BigInteger.byte(), arity, u8::from(is_negative)])?;
    writer.write_all(&digits)?;
    Ok(())
}

/// Little-endian base-256 digits of |value|. Zero has no digits.
pub(crate) fn magnitude_bytes(value: &Integer) -> Vec<u8> {
    let mut v = if *value < Integer::from(0) {
        -value.clone()
    } else {
        value.clone()
    };
    let zero = Integer::from(0);
    let base = Integer::from(256u32);

    let mut digits = Vec::new();
    while v > zero {
        let remainder = &v % &base;
        // remainder < 256
        digits.push(u8::try_from(&remainder).unwrap_or(0));
        v = &v / &base;
    }
    digits
}
