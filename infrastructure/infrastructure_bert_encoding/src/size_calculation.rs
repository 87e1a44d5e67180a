//! Size Calculation Module
//!
//! Computes the exact number of bytes the encoder will write for a term, so
//! buffers can be sized once up front.

use entities_bert_terms::tags::{LARGE_LENGTH_MAX, MEDIUM_LENGTH_MAX, SMALL_LENGTH_MAX};
use entities_bert_terms::Term;

use crate::encode_integers::magnitude_bytes;
use crate::error::EncodeError;

/// Size of a complete message: version marker plus term
pub fn encoded_ext_size(term: &Term) -> Result<usize, EncodeError> {
    Ok(1 + encoded_size(term)?)
}

/// Size of a bare term, without the version marker
///
/// Fails with the same error the encoder would raise for a term that cannot be
/// written (over-long atom, oversized bignum or length prefix).
pub fn encoded_size(term: &Term) -> Result<usize, EncodeError> {
    match term {
        Term::Atom(name) => {
            let len = name.len();
            if len <= SMALL_LENGTH_MAX {
                Ok(2 + len)
            } else if len <= MEDIUM_LENGTH_MAX {
                Ok(3 + len)
            } else {
                Err(EncodeError::AtomTooLong(len))
            }
        }
        Term::Text(text) => {
            check_large_length("binary", text.len())?;
            Ok(5 + text.len())
        }
        Term::Integer(value) => Ok(if u8::try_from(*value).is_ok() { 2 } else { 5 }),
        Term::BigInteger(value) => {
            if let Ok(small) = i32::try_from(value) {
                return encoded_size(&Term::Integer(small));
            }
            let arity = magnitude_bytes(value).len();
            if arity > SMALL_LENGTH_MAX {
                return Err(EncodeError::BigIntegerTooLarge(arity));
            }
            Ok(3 + arity)
        }
        Term::Tuple(elements) => {
            let header = if elements.len() <= SMALL_LENGTH_MAX {
                2
            } else {
                check_large_length("tuple", elements.len())?;
                5
            };
            elements_size(elements).map(|body| header + body)
        }
        Term::List(elements) => {
            check_large_length("list", elements.len())?;
            // header + elements + NIL_EXT
            elements_size(elements).map(|body| 5 + body + 1)
        }
    }
}

fn elements_size(elements: &[Term]) -> Result<usize, EncodeError> {
    elements
        .iter()
        .try_fold(0usize, |acc, elem| Ok(acc + encoded_size(elem)?))
}

fn check_large_length(what: &'static str, len: usize) -> Result<(), EncodeError> {
    if len > LARGE_LENGTH_MAX {
        Err(EncodeError::LengthOverflow { what, len })
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encode_term::encode_term;
    use malachite::Integer;

    fn assert_size_matches(term: Term) {
        let mut buf = Vec::new();
        encode_term(&mut buf, &term).unwrap();
        assert_eq!(encoded_size(&term).unwrap(), buf.len(), "size of {:?}", term);
    }

    #[test]
    fn test_sizes_match_encoder() {
        assert_size_matches(Term::Integer(0));
        assert_size_matches(Term::Integer(-1));
        assert_size_matches(Term::atom("ok"));
        assert_size_matches(Term::atom("x".repeat(300)));
        assert_size_matches(Term::text("Hello"));
        assert_size_matches(Term::BigInteger(Integer::from(1_i64 << 40)));
        assert_size_matches(Term::list(vec![]));
        assert_size_matches(Term::tuple((0..300).map(Term::Integer).collect()));
        assert_size_matches(Term::tuple(vec![
            Term::atom("reply"),
            Term::list(vec![Term::text("a"), Term::Integer(1000)]),
        ]));
    }

    #[test]
    fn test_ext_size_adds_marker() {
        assert_eq!(encoded_ext_size(&Term::Integer(42)).unwrap(), 3);
    }

    #[test]
    fn test_size_of_unencodable_atom() {
        let result = encoded_size(&Term::atom("a".repeat(70_000)));
        assert!(matches!(result, Err(EncodeError::AtomTooLong(70_000))));
    }
}
