//! Header Decoding Module
//!
//! Container headers and the list terminator:
//! - `SMALL_TUPLE_EXT` (104): 1 byte arity
//! - `LARGE_TUPLE_EXT` (105): 4 byte arity
//! - `LIST_EXT` (108): 4 byte element count, elements, then `NIL_EXT` (106)

use std::io::Read;

use entities_bert_terms::Tag;

use crate::error::{unexpected_tag, DecodeError};
use crate::reader::TermReader;

/// Read a tuple arity, the tuple tag already consumed
pub fn decode_tuple_arity_with_tag<R: Read>(
    reader: &mut TermReader<R>,
    tag: u8,
) -> Result<usize, DecodeError> {
    let arity = match Tag::try_from(tag) {
        Ok(Tag::SmallTuple) => usize::from(reader.read_u8()?),
        Ok(Tag::LargeTuple) => reader.read_u32()? as usize,
        _ => return Err(unexpected_tag(tag, "tuple")),
    };
    reader.check_elements("tuple", arity)?;
    Ok(arity)
}

/// Read a `LIST_EXT` element count, the tag already consumed
pub fn decode_list_count<R: Read>(reader: &mut TermReader<R>) -> Result<usize, DecodeError> {
    let count = reader.read_u32()? as usize;
    reader.check_elements("list", count)?;
    Ok(count)
}

/// Consume the `NIL_EXT` that closes a list
///
/// # Returns
/// * `Ok(())` - Terminator present
/// * `Err(DecodeError::MissingNil)` - Another byte, or end of data
pub fn expect_nil<R: Read>(reader: &mut TermReader<R>) -> Result<(), DecodeError> {
    match reader.read_u8() {
        Ok(byte) if byte == Tag::Nil.byte() => Ok(()),
        Ok(byte) => Err(DecodeError::MissingNil { found: Some(byte) }),
        Err(DecodeError::Truncated { .. }) => Err(DecodeError::MissingNil { found: None }),
        Err(err) => Err(err),
    }
}
