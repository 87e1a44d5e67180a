//! Integer Decoding Module
//!
//! Reads the three integer encodings:
//! - `SMALL_INTEGER_EXT` (97): 1 unsigned byte
//! - `INTEGER_EXT` (98): 4 byte big-endian signed
//! - `SMALL_BIG_EXT` (110): 1 byte length N, 1 byte sign, N little-endian magnitude bytes
//!
//! All three are accepted wherever an integer is expected; the width check against
//! the target happens after the value is known.

use std::io::Read;

use entities_bert_terms::{IntWidth, Tag};
use malachite::Integer;

use crate::error::{unexpected_tag, DecodeError};
use crate::reader::TermReader;

/// Decode an integer term that must fit in `width`
///
/// # Returns
/// * `Ok(i64)` - The value
/// * `Err(DecodeError::Overflow)` - Valid integer wider than `width`
/// * `Err(DecodeError::UnexpectedTag)` - Not an integer tag
pub fn decode_integer<R: Read>(
    reader: &mut TermReader<R>,
    width: IntWidth,
) -> Result<i64, DecodeError> {
    let tag = reader.read_u8()?;
    decode_integer_with_tag(reader, tag, width)
}

/// Same as [`decode_integer`] with the tag byte already consumed
pub fn decode_integer_with_tag<R: Read>(
    reader: &mut TermReader<R>,
    tag: u8,
    width: IntWidth,
) -> Result<i64, DecodeError> {
    let value = match Tag::try_from(tag) {
        Ok(Tag::SmallInteger) => i64::from(reader.read_u8()?),
        Ok(Tag::Integer) => i64::from(reader.read_i32()?),
        Ok(Tag::BigInteger) => {
            let big = decode_big_integer_body(reader)?;
            i64::try_from(&big).map_err(|_| DecodeError::Overflow {
                value: big,
                width: IntWidth::W64,
            })?
        }
        _ => return Err(unexpected_tag(tag, "integer")),
    };
    if !width.fits(value) {
        return Err(DecodeError::Overflow {
            value: Integer::from(value),
            width,
        });
    }
    Ok(value)
}

/// Decode any integer term at arbitrary precision
pub fn decode_big_integer<R: Read>(reader: &mut TermReader<R>) -> Result<Integer, DecodeError> {
    let tag = reader.read_u8()?;
    decode_big_integer_with_tag(reader, tag)
}

/// Same as [`decode_big_integer`] with the tag byte already consumed
pub fn decode_big_integer_with_tag<R: Read>(
    reader: &mut TermReader<R>,
    tag: u8,
) -> Result<Integer, DecodeError> {
    match Tag::try_from(tag) {
        Ok(Tag::SmallInteger) => Ok(Integer::from(reader.read_u8()?)),
        Ok(Tag::Integer) => Ok(Integer::from(reader.read_i32()?)),
        Ok(Tag::BigInteger) => decode_big_integer_body(reader),
        _ => Err(unexpected_tag(tag, "integer")),
    }
}

/// Read the body of a `SMALL_BIG_EXT` term (after the tag)
pub fn decode_big_integer_body<R: Read>(
    reader: &mut TermReader<R>,
) -> Result<Integer, DecodeError> {
    let len = usize::from(reader.read_u8()?);
    let sign = reader.read_u8()?;
    if sign > 1 {
        return Err(DecodeError::BigIntegerSign(sign));
    }

    let digits = reader.read_bytes(len).map_err(|err| match err {
        DecodeError::Truncated { expected, actual } => {
            DecodeError::BigIntegerLength { expected, actual }
        }
        other => other,
    })?;

    let base = Integer::from(256u32);
    let magnitude = digits
        .iter()
        .rev()
        .fold(Integer::from(0), |acc, digit| acc * &base + Integer::from(*digit));

    Ok(if sign == 1 { -magnitude } else { magnitude })
}
