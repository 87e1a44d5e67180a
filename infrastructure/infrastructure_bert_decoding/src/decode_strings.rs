//! String Decoding Module
//!
//! Text reaches the wire under many tags. All of them decode into a Rust `String`;
//! the tagged variant additionally reports which family the tag belonged to.
//!
//! | Tag | Length prefix | Family |
//! |---|---|---|
//! | `SMALL_ATOM_UTF8_EXT` (119), `SMALL_ATOM_EXT` (115) | 1 byte | atom |
//! | `ATOM_UTF8_EXT` (118), `ATOM_EXT` (100) | 2 bytes | atom |
//! | `STRING_EXT` (107) | 2 bytes | string |
//! | `BINARY_EXT` (109) | 4 bytes | string |
//! | `LIST_EXT` (108) | 4 byte count of integer code points, then `NIL_EXT` | string |
//! | `NIL_EXT` (106) | none, empty text | string |

use std::io::Read;

use entities_bert_terms::{BertString, IntWidth, StringType, Tag};

use crate::decode_headers::{decode_list_count, expect_nil};
use crate::decode_integers::decode_integer;
use crate::error::{unexpected_tag, DecodeError};
use crate::reader::TermReader;

/// Decode any text-carrying term into a string
pub fn decode_text<R: Read>(reader: &mut TermReader<R>) -> Result<String, DecodeError> {
    let tag = reader.read_u8()?;
    decode_text_with_tag(reader, tag)
}

/// Same as [`decode_text`] with the tag byte already consumed
pub fn decode_text_with_tag<R: Read>(
    reader: &mut TermReader<R>,
    tag: u8,
) -> Result<String, DecodeError> {
    let parsed = Tag::try_from(tag).map_err(|_| unexpected_tag(tag, "text"))?;
    match parsed {
        Tag::SmallAtomUtf8 | Tag::SmallAtom => {
            let len = usize::from(reader.read_u8()?);
            read_utf8(reader, len)
        }
        Tag::AtomUtf8 | Tag::DeprecatedAtom | Tag::String => {
            let len = usize::from(reader.read_u16()?);
            read_utf8(reader, len)
        }
        Tag::Binary => {
            let len = reader.read_u32()? as usize;
            read_utf8(reader, len)
        }
        Tag::List => decode_charlist(reader),
        Tag::Nil => Ok(String::new()),
        _ => Err(unexpected_tag(tag, "text")),
    }
}

/// Decode text together with the family of the tag it arrived under
pub fn decode_tagged_text_with_tag<R: Read>(
    reader: &mut TermReader<R>,
    tag: u8,
) -> Result<BertString, DecodeError> {
    let erlang_type = Tag::try_from(tag)
        .ok()
        .and_then(StringType::from_tag)
        .ok_or_else(|| unexpected_tag(tag, "tagged text"))?;
    let value = decode_text_with_tag(reader, tag)?;
    Ok(BertString::new(value, erlang_type))
}

/// Decode the body of a list of code points (after the `LIST_EXT` tag)
fn decode_charlist<R: Read>(reader: &mut TermReader<R>) -> Result<String, DecodeError> {
    let count = decode_list_count(reader)?;
    let mut text = String::new();
    for _ in 0..count {
        let code = decode_integer(reader, IntWidth::W64)?;
        let ch = u32::try_from(code)
            .ok()
            .and_then(char::from_u32)
            .ok_or(DecodeError::InvalidCodePoint(code))?;
        text.push(ch);
    }
    expect_nil(reader)?;
    Ok(text)
}

fn read_utf8<R: Read>(reader: &mut TermReader<R>, len: usize) -> Result<String, DecodeError> {
    let bytes = reader.read_bytes(len)?;
    Ok(String::from_utf8(bytes)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn text(bytes: &[u8]) -> Result<String, DecodeError> {
        decode_text(&mut TermReader::new(Cursor::new(bytes.to_vec())))
    }

    #[test]
    fn test_every_text_tag() {
        assert_eq!(text(&[119, 2, b'o', b'k']).unwrap(), "ok");
        assert_eq!(text(&[115, 2, b'o', b'k']).unwrap(), "ok");
        assert_eq!(text(&[118, 0, 2, b'o', b'k']).unwrap(), "ok");
        assert_eq!(text(&[100, 0, 2, b'o', b'k']).unwrap(), "ok");
        assert_eq!(text(&[107, 0, 2, b'o', b'k']).unwrap(), "ok");
        assert_eq!(text(&[109, 0, 0, 0, 2, b'o', b'k']).unwrap(), "ok");
        assert_eq!(text(&[106]).unwrap(), "");
    }

    #[test]
    fn test_charlist_with_wide_code_point() {
        // 🖖Hi
        let bytes = [108, 0, 0, 0, 3, 98, 0, 1, 245, 150, 97, 72, 97, 105, 106];
        assert_eq!(text(&bytes).unwrap(), "🖖Hi");
    }

    #[test]
    fn test_charlist_rejects_surrogate() {
        let bytes = [108, 0, 0, 0, 1, 98, 0, 0, 0xD8, 0x00, 106];
        assert!(matches!(text(&bytes), Err(DecodeError::InvalidCodePoint(0xD800))));
        let negative = [108, 0, 0, 0, 1, 98, 255, 255, 255, 255, 106];
        assert!(matches!(text(&negative), Err(DecodeError::InvalidCodePoint(-1))));
    }

    #[test]
    fn test_charlist_missing_nil() {
        let bytes = [108, 0, 0, 0, 1, 97, 72, 97];
        assert!(matches!(
            text(&bytes),
            Err(DecodeError::MissingNil { found: Some(97) })
        ));
    }

    #[test]
    fn test_invalid_utf8() {
        assert!(matches!(
            text(&[109, 0, 0, 0, 2, 0xC3, 0x28]),
            Err(DecodeError::InvalidUtf8(_))
        ));
    }

    #[test]
    fn test_truncated_binary() {
        assert!(matches!(
            text(&[109, 0, 0, 0, 5, b'a']),
            Err(DecodeError::Truncated {
                expected: 5,
                actual: 1
            })
        ));
    }

    #[test]
    fn test_non_text_tag() {
        assert!(matches!(
            text(&[97, 1]),
            Err(DecodeError::UnexpectedTag { tag: 97, .. })
        ));
        assert!(matches!(
            text(&[1]),
            Err(DecodeError::UnexpectedTag { tag: 1, .. })
        ));
    }

    #[test]
    fn test_tagged_text_families() {
        let mut reader = TermReader::new(Cursor::new(vec![2, b'o', b'k']));
        let atom = decode_tagged_text_with_tag(&mut reader, 119).unwrap();
        assert_eq!(atom, BertString::atom("ok"));

        let mut reader = TermReader::new(Cursor::new(vec![0, 2, b'o', b'k']));
        let string = decode_tagged_text_with_tag(&mut reader, 107).unwrap();
        assert_eq!(string, BertString::string("ok"));
    }
}
