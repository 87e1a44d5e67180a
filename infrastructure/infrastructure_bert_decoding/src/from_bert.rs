//! Typed targets
//!
//! [`FromBert`] ties a Rust type to the [`Shape`] it decodes from, so callers can
//! write `decode_as::<(String, i32)>(stream)` instead of building shapes by hand.
//! Tuples map to positional records; `Vec<T>` maps to a list of `T`.

use std::io::Read;

use entities_bert_terms::{
    BertString, Decoded, Field, FieldDescriptor, IntWidth, RecordShape, Shape, Term,
};
use malachite::Integer;

use crate::config::DecodeLimits;
use crate::decode_target::decode_with_limits;
use crate::error::DecodeError;

/// A Rust type that can be the target of a decode
pub trait FromBert: Sized {
    /// Shape the decoder is driven by
    fn shape() -> Shape;

    /// Build the value from what the decoder produced for [`FromBert::shape`]
    fn from_decoded(value: Decoded) -> Result<Self, DecodeError>;
}

/// Decode one BERT message straight into `T`
pub fn decode_as<T: FromBert, R: Read>(reader: R) -> Result<T, DecodeError> {
    decode_as_with_limits(reader, DecodeLimits::default())
}

/// Decode one BERT message into `T` with explicit limits
pub fn decode_as_with_limits<T: FromBert, R: Read>(
    reader: R,
    limits: DecodeLimits,
) -> Result<T, DecodeError> {
    let decoded = decode_with_limits(reader, &T::shape(), limits)?;
    T::from_decoded(decoded)
}

/// Unpack a decoded record with exactly `arity` fields
pub fn record_fields(
    value: Decoded,
    arity: usize,
) -> Result<std::vec::IntoIter<Field>, DecodeError> {
    match value {
        Decoded::Record(fields) if fields.len() == arity => Ok(fields.into_iter()),
        Decoded::Record(fields) => Err(DecodeError::ArityMismatch {
            expected: arity,
            actual: fields.len(),
        }),
        other => Err(mismatch("record", &other)),
    }
}

/// Convert the next record field into `T`
pub fn next_field<T: FromBert>(
    fields: &mut impl Iterator<Item = Field>,
) -> Result<T, DecodeError> {
    let field = fields.next().ok_or(DecodeError::ShapeMismatch {
        expected: "record field",
        found: "end of record",
    })?;
    T::from_decoded(field.value)
}

fn mismatch(expected: &'static str, found: &Decoded) -> DecodeError {
    DecodeError::ShapeMismatch {
        expected,
        found: found.kind(),
    }
}

macro_rules! signed_target {
    ($($t:ty => $width:expr),*) => {
        $(
            impl FromBert for $t {
                fn shape() -> Shape {
                    Shape::Integer($width)
                }

                fn from_decoded(value: Decoded) -> Result<Self, DecodeError> {
                    match value {
                        Decoded::Integer(v) => <$t>::try_from(v).map_err(|_| DecodeError::Overflow {
                            value: Integer::from(v),
                            width: $width,
                        }),
                        other => Err(mismatch("integer", &other)),
                    }
                }
            }
        )*
    };
}

signed_target!(
    i8 => IntWidth::W8,
    i16 => IntWidth::W16,
    i32 => IntWidth::W32,
    i64 => IntWidth::W64
);

impl FromBert for Integer {
    fn shape() -> Shape {
        Shape::BigInteger
    }

    fn from_decoded(value: Decoded) -> Result<Self, DecodeError> {
        match value {
            Decoded::BigInteger(v) => Ok(v),
            Decoded::Integer(v) => Ok(Integer::from(v)),
            other => Err(mismatch("big integer", &other)),
        }
    }
}

impl FromBert for String {
    fn shape() -> Shape {
        Shape::Text
    }

    fn from_decoded(value: Decoded) -> Result<Self, DecodeError> {
        match value {
            Decoded::Text(text) => Ok(text),
            Decoded::Tagged(tagged) => Ok(tagged.into()),
            other => Err(mismatch("text", &other)),
        }
    }
}

impl FromBert for BertString {
    fn shape() -> Shape {
        Shape::TaggedText
    }

    fn from_decoded(value: Decoded) -> Result<Self, DecodeError> {
        match value {
            Decoded::Tagged(tagged) => Ok(tagged),
            other => Err(mismatch("tagged text", &other)),
        }
    }
}

impl FromBert for Term {
    fn shape() -> Shape {
        Shape::Any
    }

    fn from_decoded(value: Decoded) -> Result<Self, DecodeError> {
        match value {
            Decoded::Term(term) => Ok(term),
            other => Err(mismatch("term", &other)),
        }
    }
}

impl<T: FromBert> FromBert for Vec<T> {
    fn shape() -> Shape {
        Shape::list_of(T::shape())
    }

    fn from_decoded(value: Decoded) -> Result<Self, DecodeError> {
        match value {
            Decoded::List(elements) => elements.into_iter().map(T::from_decoded).collect(),
            other => Err(mismatch("list", &other)),
        }
    }
}

impl FromBert for () {
    fn shape() -> Shape {
        Shape::Record(RecordShape::default())
    }

    fn from_decoded(value: Decoded) -> Result<Self, DecodeError> {
        record_fields(value, 0).map(|_| ())
    }
}

macro_rules! tuple_target {
    ($arity:expr; $($name:ident)+) => {
        impl<$($name: FromBert),+> FromBert for ($($name,)+) {
            fn shape() -> Shape {
                Shape::Record(RecordShape::new(vec![
                    $(FieldDescriptor::positional($name::shape())),+
                ]))
            }

            fn from_decoded(value: Decoded) -> Result<Self, DecodeError> {
                let mut fields = record_fields(value, $arity)?;
                Ok(($(next_field::<$name>(&mut fields)?,)+))
            }
        }
    };
}

tuple_target!(1; A);
tuple_target!(2; A B);
tuple_target!(3; A B C);
tuple_target!(4; A B C D);
tuple_target!(5; A B C D E);
tuple_target!(6; A B C D E F);
tuple_target!(7; A B C D E F G);
tuple_target!(8; A B C D E F G H);
