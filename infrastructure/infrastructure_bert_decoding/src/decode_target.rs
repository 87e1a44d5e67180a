//! Shape-driven decoding
//!
//! The entry points read the version marker once, then decode exactly one term
//! against the caller's [`Shape`]. Shapes that can never succeed (8-bit integers,
//! unsigned integers) are rejected before the stream is touched.

use std::io::Read;

use entities_bert_terms::{Decoded, Field, IntWidth, RecordShape, Shape, Tag, Term, VERSION_MAGIC};
use tracing::{debug, trace};

use crate::config::DecodeLimits;
use crate::decode_any::decode_any_with_tag;
use crate::decode_headers::{decode_list_count, decode_tuple_arity_with_tag, expect_nil};
use crate::decode_integers::{decode_big_integer_with_tag, decode_integer_with_tag};
use crate::decode_strings::{decode_tagged_text_with_tag, decode_text_with_tag};
use crate::error::{unexpected_tag, DecodeError};
use crate::reader::TermReader;

/// Decode one BERT message from `reader` into `shape`, with default limits
///
/// # Arguments
/// * `reader` - Byte source positioned at the version marker
/// * `shape` - What the caller expects
///
/// # Returns
/// * `Ok(Decoded)` - The value, mirroring `shape`
/// * `Err(DecodeError)` - The first failure encountered
pub fn decode<R: Read>(reader: R, shape: &Shape) -> Result<Decoded, DecodeError> {
    decode_with_limits(reader, shape, DecodeLimits::default())
}

/// Decode one BERT message with explicit limits
pub fn decode_with_limits<R: Read>(
    reader: R,
    shape: &Shape,
    limits: DecodeLimits,
) -> Result<Decoded, DecodeError> {
    check_shape(shape)?;
    let mut reader = TermReader::with_limits(reader, limits);
    read_version(&mut reader)?;
    decode_shape(&mut reader, shape)
}

/// Reject shapes no BERT input could ever satisfy
pub fn check_shape(shape: &Shape) -> Result<(), DecodeError> {
    match shape {
        Shape::Integer(IntWidth::W8) => Err(DecodeError::Range(IntWidth::W8)),
        Shape::Unsigned(_) => Err(DecodeError::UnhandledTarget("unsigned integer")),
        Shape::Record(record) => record
            .fields()
            .iter()
            .try_for_each(|field| check_shape(&field.shape)),
        Shape::List(inner) => check_shape(inner),
        _ => Ok(()),
    }
}

/// Consume and verify the version marker
pub fn read_version<R: Read>(reader: &mut TermReader<R>) -> Result<(), DecodeError> {
    let version = reader.read_u8()?;
    if version != VERSION_MAGIC {
        debug!(version, "Incorrect version marker.");
        return Err(DecodeError::Version(version));
    }
    Ok(())
}

/// Decode one bare term (no version marker) into `shape`
pub fn decode_shape<R: Read>(
    reader: &mut TermReader<R>,
    shape: &Shape,
) -> Result<Decoded, DecodeError> {
    match shape {
        Shape::Integer(IntWidth::W8) => return Err(DecodeError::Range(IntWidth::W8)),
        Shape::Unsigned(_) => return Err(DecodeError::UnhandledTarget("unsigned integer")),
        _ => {}
    }

    let tag = reader.read_u8()?;
    trace!(tag, target = shape.kind(), "Decoding term.");
    match shape {
        Shape::Integer(width) => decode_integer_with_tag(reader, tag, *width).map(Decoded::Integer),
        Shape::Unsigned(_) => Err(DecodeError::UnhandledTarget("unsigned integer")),
        Shape::BigInteger => decode_big_integer_with_tag(reader, tag).map(Decoded::BigInteger),
        Shape::Text => decode_text_with_tag(reader, tag).map(Decoded::Text),
        Shape::TaggedText => decode_tagged_text_with_tag(reader, tag).map(Decoded::Tagged),
        Shape::Record(record) => decode_record(reader, tag, record),
        Shape::List(inner) => decode_list(reader, tag, inner),
        Shape::Any => decode_any_with_tag(reader, tag).map(Decoded::Term),
    }
}

fn decode_record<R: Read>(
    reader: &mut TermReader<R>,
    tag: u8,
    record: &RecordShape,
) -> Result<Decoded, DecodeError> {
    let arity = decode_tuple_arity_with_tag(reader, tag)?;
    if arity != record.arity() {
        debug!(expected = record.arity(), actual = arity, "Tuple arity mismatch.");
        return Err(DecodeError::ArityMismatch {
            expected: record.arity(),
            actual: arity,
        });
    }

    let fields = reader.nested(|r| {
        record
            .fields()
            .iter()
            .map(|descriptor| {
                decode_shape(r, &descriptor.shape).map(|value| Field {
                    name: descriptor.name.clone(),
                    value,
                })
            })
            .collect::<Result<Vec<_>, _>>()
    })?;
    Ok(Decoded::Record(fields))
}

fn decode_list<R: Read>(
    reader: &mut TermReader<R>,
    tag: u8,
    inner: &Shape,
) -> Result<Decoded, DecodeError> {
    match Tag::try_from(tag) {
        Ok(Tag::Nil) => Ok(Decoded::List(Vec::new())),
        Ok(Tag::String) => decode_byte_list(reader, inner),
        Ok(Tag::List) => {
            let count = decode_list_count(reader)?;
            let elements = reader.nested(|r| {
                let mut elements = Vec::with_capacity(count.min(1024));
                for _ in 0..count {
                    elements.push(decode_shape(r, inner)?);
                }
                Ok(elements)
            })?;
            expect_nil(reader)?;
            Ok(Decoded::List(elements))
        }
        _ => Err(unexpected_tag(tag, "list")),
    }
}

/// `STRING_EXT` as a list: each byte is one small integer element
fn decode_byte_list<R: Read>(
    reader: &mut TermReader<R>,
    inner: &Shape,
) -> Result<Decoded, DecodeError> {
    let element: fn(u8) -> Decoded = match inner {
        Shape::Integer(_) => |b| Decoded::Integer(i64::from(b)),
        Shape::BigInteger => |b| Decoded::BigInteger(b.into()),
        Shape::Any => |b| Decoded::Term(Term::Integer(i32::from(b))),
        _ => return Err(unexpected_tag(Tag::String.byte(), inner.kind())),
    };
    let len = usize::from(reader.read_u16()?);
    let bytes = reader.read_bytes(len)?;
    Ok(Decoded::List(bytes.into_iter().map(element).collect()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use entities_bert_terms::{BertString, FieldDescriptor};
    use std::io::Cursor;

    fn message(body: &[u8]) -> Cursor<Vec<u8>> {
        let mut bytes = vec![VERSION_MAGIC];
        bytes.extend_from_slice(body);
        Cursor::new(bytes)
    }

    #[test]
    fn test_version_checked_once() {
        let result = decode(Cursor::new(vec![130, 97, 1]), &Shape::Integer(IntWidth::W32));
        assert!(matches!(result, Err(DecodeError::Version(130))));
    }

    #[test]
    fn test_unsupported_shapes_fail_before_reading() {
        let mut cursor = message(&[97, 1]);
        let result = decode(&mut cursor, &Shape::Integer(IntWidth::W8));
        assert!(matches!(result, Err(DecodeError::Range(IntWidth::W8))));
        assert_eq!(cursor.position(), 0);

        let nested = Shape::list_of(Shape::Unsigned(IntWidth::W32));
        let result = decode(&mut cursor, &nested);
        assert!(matches!(result, Err(DecodeError::UnhandledTarget(_))));
        assert_eq!(cursor.position(), 0);
    }

    #[test]
    fn test_record_fields_in_order() {
        let shape = Shape::Record(RecordShape::new(vec![
            FieldDescriptor::named("status", Shape::TaggedText),
            FieldDescriptor::named("code", Shape::Integer(IntWidth::W32)),
        ]));
        let body = [104, 2, 119, 2, b'o', b'k', 98, 0, 0, 1, 0];
        let decoded = decode(message(&body), &shape).unwrap();
        assert_eq!(
            decoded.field("status"),
            Some(&Decoded::Tagged(BertString::atom("ok")))
        );
        assert_eq!(decoded.field("code").and_then(Decoded::as_integer), Some(256));
    }

    #[test]
    fn test_record_arity_mismatch() {
        let shape = Shape::Record(RecordShape::new(vec![FieldDescriptor::positional(
            Shape::Text,
        )]));
        let result = decode(message(&[104, 2, 106, 106]), &shape);
        assert!(matches!(
            result,
            Err(DecodeError::ArityMismatch {
                expected: 1,
                actual: 2
            })
        ));
    }

    #[test]
    fn test_list_forms() {
        let shape = Shape::list_of(Shape::Integer(IntWidth::W32));
        assert_eq!(decode(message(&[106]), &shape).unwrap(), Decoded::List(vec![]));
        assert_eq!(
            decode(message(&[107, 0, 2, 1, 2]), &shape).unwrap(),
            Decoded::List(vec![Decoded::Integer(1), Decoded::Integer(2)])
        );
        assert_eq!(
            decode(message(&[108, 0, 0, 0, 1, 97, 9, 106]), &shape).unwrap(),
            Decoded::List(vec![Decoded::Integer(9)])
        );
    }

    #[test]
    fn test_byte_list_for_text_elements_is_unexpected() {
        let shape = Shape::list_of(Shape::Text);
        assert!(matches!(
            decode(message(&[107, 0, 1, 65]), &shape),
            Err(DecodeError::UnexpectedTag { tag: 107, .. })
        ));
    }

    #[test]
    fn test_any_target() {
        let decoded = decode(message(&[104, 0]), &Shape::Any).unwrap();
        assert_eq!(decoded, Decoded::Term(Term::tuple(vec![])));
    }

    #[test]
    fn test_stream_positioned_after_term() {
        let mut cursor = message(&[97, 1, 0xFF, 0xFF]);
        decode(&mut cursor, &Shape::Integer(IntWidth::W16)).unwrap();
        assert_eq!(cursor.position(), 3);
    }
}
