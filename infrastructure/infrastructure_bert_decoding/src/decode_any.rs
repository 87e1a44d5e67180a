//! Self-describing decoding
//!
//! Decodes whatever term is on the wire into a generic [`Term`], for callers that
//! do not know the shape up front. Mapping:
//!
//! - integer tags become `Integer`, or `BigInteger` when the value needs more than 32 bits
//! - every atom tag becomes `Atom`
//! - `BINARY_EXT` becomes `Text` (the bytes must be UTF-8)
//! - `STRING_EXT` becomes a `List` of byte-valued integers
//! - `NIL_EXT` becomes the empty `List`

use std::io::Read;

use entities_bert_terms::{Tag, Term};
use tracing::trace;

use crate::decode_headers::{decode_list_count, decode_tuple_arity_with_tag, expect_nil};
use crate::decode_integers::decode_big_integer_with_tag;
use crate::decode_strings::decode_text_with_tag;
use crate::error::{unexpected_tag, DecodeError};
use crate::reader::TermReader;

/// Decode the next term without a target shape
pub fn decode_any<R: Read>(reader: &mut TermReader<R>) -> Result<Term, DecodeError> {
    let tag = reader.read_u8()?;
    decode_any_with_tag(reader, tag)
}

/// Same as [`decode_any`] with the tag byte already consumed
pub fn decode_any_with_tag<R: Read>(
    reader: &mut TermReader<R>,
    tag: u8,
) -> Result<Term, DecodeError> {
    let parsed = Tag::try_from(tag).map_err(|_| unexpected_tag(tag, "term"))?;
    trace!(tag = parsed.name(), "Decoding untyped term.");
    match parsed {
        Tag::SmallInteger | Tag::Integer | Tag::BigInteger => {
            decode_big_integer_with_tag(reader, tag).map(Term::big_integer)
        }
        Tag::SmallAtomUtf8 | Tag::SmallAtom | Tag::AtomUtf8 | Tag::DeprecatedAtom => {
            decode_text_with_tag(reader, tag).map(Term::Atom)
        }
        Tag::Binary => decode_text_with_tag(reader, tag).map(Term::Text),
        Tag::String => {
            let len = usize::from(reader.read_u16()?);
            let bytes = reader.read_bytes(len)?;
            Ok(Term::List(
                bytes.into_iter().map(|b| Term::Integer(i32::from(b))).collect(),
            ))
        }
        Tag::Nil => Ok(Term::List(Vec::new())),
        Tag::SmallTuple | Tag::LargeTuple => {
            let arity = decode_tuple_arity_with_tag(reader, tag)?;
            let elements = reader.nested(|r| decode_elements(r, arity))?;
            Ok(Term::Tuple(elements))
        }
        Tag::List => {
            let count = decode_list_count(reader)?;
            let elements = reader.nested(|r| decode_elements(r, count))?;
            expect_nil(reader)?;
            Ok(Term::List(elements))
        }
    }
}

fn decode_elements<R: Read>(
    reader: &mut TermReader<R>,
    count: usize,
) -> Result<Vec<Term>, DecodeError> {
    // count is wire-supplied; grow as elements actually decode
    let mut elements = Vec::with_capacity(count.min(1024));
    for _ in 0..count {
        elements.push(decode_any(reader)?);
    }
    Ok(elements)
}
