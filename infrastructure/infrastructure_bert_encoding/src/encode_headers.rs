//! Header Encoding Module
//!
//! Provides functionality to encode compound type headers (tuples, lists) and the
//! `NIL_EXT` list terminator. Headers carry the tag and the element count; the
//! elements follow.
//!
//! - **Tuple Headers**: `SMALL_TUPLE_EXT` (arity <= 255) or `LARGE_TUPLE_EXT`
//! - **List Headers**: `LIST_EXT` with a 4-byte count, always closed by `NIL_EXT`

use std::io::Write;

use entities_bert_terms::tags::{LARGE_LENGTH_MAX, SMALL_LENGTH_MAX};
use entities_bert_terms::Tag;

use crate::error::EncodeError;

/// Encode a tuple header
///
/// # Arguments
/// * `writer` - Sink to append to
/// * `arity` - Number of elements in the tuple
pub fn encode_tuple_header<W: Write + ?Sized>(
    writer: &mut W,
    arity: usize,
) -> Result<(), EncodeError> {
    if arity <= SMALL_LENGTH_MAX {
        writer.write_all(&[Tag::SmallTuple.byte(), arity as u8])?;
    } else if arity <= LARGE_LENGTH_MAX {
        writer.write_all(&[Tag::LargeTuple.byte()])?;
        writer.write_all(&(arity as u32).to_be_bytes())?;
    } else {
        return Err(EncodeError::LengthOverflow {
            what: "tuple",
            len: arity,
        });
    }
    Ok(())
}

/// Encode a list header
///
/// The header is written even for zero elements, so an empty list is
/// `LIST_EXT 0` followed by `NIL_EXT`.
///
/// # Arguments
/// * `writer` - Sink to append to
/// * `len` - Number of elements in the list
pub fn encode_list_header<W: Write + ?Sized>(writer: &mut W, len: usize) -> Result<(), EncodeError> {
    if len > LARGE_LENGTH_MAX {
        return Err(EncodeError::LengthOverflow { what: "list", len });
    }
    writer.write_all(&[Tag::List.byte()])?;
    writer.write_all(&(len as u32).to_be_bytes())?;
    Ok(())
}

/// Encode the list terminator
pub fn encode_nil<W: Write + ?Sized>(writer: &mut W) -> Result<(), EncodeError> {
    writer.write_all(&[Tag::Nil.byte()])?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_small_tuple_header() {
        let mut buf = Vec::new();
        encode_tuple_header(&mut buf, 3).unwrap();
        assert_eq!(buf, vec![104, 3]);
    }

    #[test]
    fn test_encode_tuple_header_threshold() {
        let mut buf = Vec::new();
        encode_tuple_header(&mut buf, 255).unwrap();
        assert_eq!(buf, vec![104, 255]);

        let mut buf = Vec::new();
        encode_tuple_header(&mut buf, 256).unwrap();
        assert_eq!(buf, vec![105, 0, 0, 1, 0]);
    }

    #[test]
    fn test_encode_list_header_and_nil() {
        let mut buf = Vec::new();
        encode_list_header(&mut buf, 0).unwrap();
        encode_nil(&mut buf).unwrap();
        assert_eq!(buf, vec![108, 0, 0, 0, 0, 106]);
    }
}
