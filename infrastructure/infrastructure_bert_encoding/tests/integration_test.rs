//! Integration tests for infrastructure_bert_encoding
//!
//! Tests the public encoding API end to end: canonical integer tags, text and atom
//! tags, container layouts, size calculation and classification failures.

use entities_bert_terms::{Atom, Term};
use infrastructure_bert_encoding::{
    encode, encode_term, encode_to_vec, encoded_ext_size, EncodeError, ToTerm,
};
use malachite::Integer;

#[test]
fn test_small_integer_range_uses_small_tag() {
    for value in [0, 1, 127, 128, 254, 255] {
        let encoded = encode_to_vec(&value).unwrap();
        assert_eq!(encoded, vec![131, 97, value as u8], "value {}", value);
    }
}

#[test]
fn test_other_integers_use_integer_tag() {
    for value in [-1, -255, 256, 65_536, i32::MIN, i32::MAX] {
        let encoded = encode_to_vec(&value).unwrap();
        assert_eq!(encoded.len(), 6, "value {}", value);
        assert_eq!(encoded[1], 98);
        assert_eq!(
            i32::from_be_bytes([encoded[2], encoded[3], encoded[4], encoded[5]]),
            value
        );
    }
}

#[test]
fn test_text_is_binary_and_atom_is_utf8_atom() {
    assert_eq!(
        encode_to_vec("Hello").unwrap(),
        vec![131, 109, 0, 0, 0, 5, 72, 101, 108, 108, 111]
    );
    assert_eq!(
        encode_to_vec(&Atom::new("ok")).unwrap(),
        vec![131, 119, 2, b'o', b'k']
    );
}

#[test]
fn test_error_reply_tuple() {
    let reply = (Atom::new("error"), Atom::new("not_found"));
    let encoded = encode_to_vec(&reply).unwrap();
    let mut expected = vec![131, 104, 2, 119, 5];
    expected.extend_from_slice(b"error");
    expected.extend_from_slice(&[119, 9]);
    expected.extend_from_slice(b"not_found");
    assert_eq!(encoded, expected);
}

#[test]
fn test_large_tuple_header() {
    let term = Term::tuple(vec![Term::Integer(0); 256]);
    let mut buf = Vec::new();
    encode_term(&mut buf, &term).unwrap();
    assert_eq!(&buf[..5], &[105, 0, 0, 1, 0]);
    assert_eq!(buf.len(), 5 + 256 * 2);
}

#[test]
fn test_list_of_typed_values() {
    let encoded = encode_to_vec(&vec!["a", "b"]).unwrap();
    assert_eq!(
        encoded,
        vec![131, 108, 0, 0, 0, 2, 109, 0, 0, 0, 1, b'a', 109, 0, 0, 0, 1, b'b', 106]
    );
}

#[test]
fn test_empty_list_has_header_and_nil() {
    let empty: [i32; 0] = [];
    assert_eq!(encode_to_vec(&empty).unwrap(), vec![131, 108, 0, 0, 0, 0, 106]);
}

#[test]
fn test_big_integer_encoding() {
    let value = -Integer::from(1_i64 << 40);
    let encoded = encode_to_vec(&value).unwrap();
    assert_eq!(encoded, vec![131, 110, 6, 1, 0, 0, 0, 0, 0, 1]);
}

#[test]
fn test_wide_integer_outside_range_fails() {
    let result = encode_to_vec(&(1_i64 << 40));
    assert!(matches!(result, Err(EncodeError::IntegerOutOfRange(_))));
}

#[test]
fn test_encode_appends_to_existing_buffer() {
    let mut buf = vec![0xAA];
    encode(&mut buf, &42u8).unwrap();
    assert_eq!(buf, vec![0xAA, 131, 97, 42]);
}

#[test]
fn test_size_matches_encoded_length() {
    let value = (Atom::new("reply"), vec![1, 2, 300], "payload", Integer::from(1_i64 << 33));
    let term = value.to_term().unwrap();
    let encoded = encode_to_vec(&value).unwrap();
    assert_eq!(encoded_ext_size(&term).unwrap(), encoded.len());
}

#[test]
fn test_unclassifiable_error_names_type() {
    let err = encode_to_vec(&(Atom::new("ratio"), 2.5f64)).unwrap_err();
    assert!(matches!(err, EncodeError::Unclassifiable { type_name: "f64" }));
}
