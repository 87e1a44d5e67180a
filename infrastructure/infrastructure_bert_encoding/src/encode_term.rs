//! Term Encoding Module
//!
//! Provides the depth-first term walker and the top-level encoding entry points.
//!
//! - [`encode_term`] writes a bare term, without the version marker. Use it when the
//!   term is embedded in a larger message.
//! - [`encode`] writes the version marker followed by the term.
//! - [`encode_to_vec`] does the same into a freshly sized buffer.

use std::io::Write;

use entities_bert_terms::{Term, VERSION_MAGIC};
use tracing::trace;

use crate::classify::ToTerm;
use crate::encode_atom::encode_atom;
use crate::encode_binary::encode_binary;
use crate::encode_headers::{encode_list_header, encode_nil, encode_tuple_header};
use crate::encode_integers::{encode_big_integer, encode_integer};
use crate::error::EncodeError;
use crate::size_calculation::encoded_ext_size;

/// Encode a term without the version marker
///
/// Elements of tuples and lists are written in order. Lists are always closed
/// with `NIL_EXT`, including empty ones. The first error aborts the walk; bytes
/// already handed to the sink stay there.
///
/// # Arguments
/// * `writer` - Sink to append to
/// * `term` - The term to encode
pub fn encode_term<W: Write + ?Sized>(writer: &mut W, term: &Term) -> Result<(), EncodeError> {
    match term {
        Term::Atom(name) => encode_atom(writer, name),
        Term::Text(text) => encode_binary(writer, text.as_bytes()),
        Term::Integer(value) => encode_integer(writer, *value),
        Term::BigInteger(value) => encode_big_integer(writer, value),
        Term::Tuple(elements) => {
            encode_tuple_header(writer, elements.len())?;
            elements.iter().try_for_each(|elem| encode_term(writer, elem))
        }
        Term::List(elements) => {
            encode_list_header(writer, elements.len())?;
            elements
                .iter()
                .try_for_each(|elem| encode_term(writer, elem))?;
            encode_nil(writer)
        }
    }
}

/// Encode a value as a complete BERT message
///
/// The value is classified into a [`Term`] first; nothing is written when
/// classification fails.
///
/// # Arguments
/// * `writer` - Sink to append to
/// * `value` - Any value with a [`ToTerm`] classification
///
/// # Returns
/// * `Ok(())` - Version marker and term written
/// * `Err(EncodeError)` - Classification, length or sink error
pub fn encode<W, T>(writer: &mut W, value: &T) -> Result<(), EncodeError>
where
    W: Write + ?Sized,
    T: ToTerm + ?Sized,
{
    let term = value.to_term()?;
    trace!(kind = term.type_name(), "Encoding term.");
    writer.write_all(&[VERSION_MAGIC])?;
    encode_term(writer, &term)
}

/// Encode a value as a complete BERT message into a new buffer
pub fn encode_to_vec<T: ToTerm + ?Sized>(value: &T) -> Result<Vec<u8>, EncodeError> {
    let term = value.to_term()?;
    trace!(kind = term.type_name(), "Encoding term.");
    let mut buf = Vec::with_capacity(encoded_ext_size(&term)?);
    buf.push(VERSION_MAGIC);
    encode_term(&mut buf, &term)?;
    Ok(buf)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_encode_term_has_no_marker() {
        let mut buf = Vec::new();
        encode_term(&mut buf, &Term::Integer(42)).unwrap();
        assert_eq!(buf, vec![97, 42]);
    }

    #[test]
    fn test_encode_prefixes_marker() {
        let mut buf = Vec::new();
        encode(&mut buf, &Term::Integer(42)).unwrap();
        assert_eq!(buf, vec![131, 97, 42]);
    }

    #[test]
    fn test_encode_tuple_in_order() {
        let term = Term::tuple(vec![Term::atom("ok"), Term::Integer(1)]);
        let mut buf = Vec::new();
        encode_term(&mut buf, &term).unwrap();
        assert_eq!(buf, vec![104, 2, 119, 2, b'o', b'k', 97, 1]);
    }

    #[test]
    fn test_encode_empty_list() {
        let mut buf = Vec::new();
        encode_term(&mut buf, &Term::list(vec![])).unwrap();
        assert_eq!(buf, vec![108, 0, 0, 0, 0, 106]);
    }

    #[test]
    fn test_encode_nested_list() {
        let term = Term::list(vec![Term::list(vec![Term::Integer(1)]), Term::text("a")]);
        let mut buf = Vec::new();
        encode_term(&mut buf, &term).unwrap();
        assert_eq!(
            buf,
            vec![
                108, 0, 0, 0, 2, // outer header
                108, 0, 0, 0, 1, 97, 1, 106, // [1]
                109, 0, 0, 0, 1, b'a', // <<"a">>
                106,
            ]
        );
    }

    #[test]
    fn test_encode_to_vec_matches_encode() {
        let term = Term::tuple(vec![Term::text("Hello"), Term::Integer(-256)]);
        let mut streamed = Vec::new();
        encode(&mut streamed, &term).unwrap();
        assert_eq!(encode_to_vec(&term).unwrap(), streamed);
    }

    struct FailingSink;

    impl Write for FailingSink {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_sink_error_propagates() {
        let result = encode(&mut FailingSink, &Term::atom("ok"));
        match result {
            Err(EncodeError::Io(err)) => assert_eq!(err.kind(), io::ErrorKind::BrokenPipe),
            other => panic!("Expected Io error, got {:?}", other),
        }
    }

    #[test]
    fn test_unclassifiable_value_writes_nothing() {
        let mut buf = Vec::new();
        let result = encode(&mut buf, &vec![1.5_f64]);
        assert!(matches!(
            result,
            Err(EncodeError::Unclassifiable { type_name: "f64" })
        ));
        assert!(buf.is_empty());
    }
}
