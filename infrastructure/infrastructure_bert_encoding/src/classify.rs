//! Value Classification
//!
//! Maps Rust values onto the closed set of [`Term`] variants. This is the only
//! place the encoder looks at caller types; the term walker itself only ever
//! sees `Term`.
//!
//! | Rust value | Term |
//! |---|---|
//! | `str`, `String` | `Text` |
//! | [`Atom`], `bool` | `Atom` (`true` / `false` for booleans) |
//! | [`BertString`] | `Atom` or `Text`, by its recorded family |
//! | `i8`, `i16`, `i32`, `u8`, `u16`, `char` | `Integer` |
//! | `i64`, `u32`, `u64`, `isize`, `usize` | `Integer`, or `IntegerOutOfRange` |
//! | `malachite::Integer` | `Integer` or `BigInteger` |
//! | slices, arrays, `Vec<T>` | `List` |
//! | tuples, `()` | `Tuple` |
//! | `f32`, `f64` | `Unclassifiable` |

use entities_bert_terms::{Atom, BertString, StringType, Term};
use malachite::Integer;
use tracing::debug;

use crate::error::EncodeError;

/// Conversion of a Rust value into a generic term
pub trait ToTerm {
    fn to_term(&self) -> Result<Term, EncodeError>;
}

impl ToTerm for Term {
    fn to_term(&self) -> Result<Term, EncodeError> {
        Ok(self.clone())
    }
}

impl ToTerm for Atom {
    fn to_term(&self) -> Result<Term, EncodeError> {
        Ok(Term::Atom(self.0.clone()))
    }
}

impl ToTerm for BertString {
    fn to_term(&self) -> Result<Term, EncodeError> {
        Ok(match self.erlang_type {
            StringType::Atom => Term::Atom(self.value.clone()),
            StringType::String => Term::Text(self.value.clone()),
        })
    }
}

impl ToTerm for str {
    fn to_term(&self) -> Result<Term, EncodeError> {
        Ok(Term::Text(self.to_string()))
    }
}

impl ToTerm for String {
    fn to_term(&self) -> Result<Term, EncodeError> {
        Ok(Term::Text(self.clone()))
    }
}

impl ToTerm for bool {
    fn to_term(&self) -> Result<Term, EncodeError> {
        Ok(Term::atom(if *self { "true" } else { "false" }))
    }
}

impl ToTerm for char {
    fn to_term(&self) -> Result<Term, EncodeError> {
        // code points stop at 0x10FFFF
        Ok(Term::Integer(u32::from(*self) as i32))
    }
}

impl ToTerm for () {
    fn to_term(&self) -> Result<Term, EncodeError> {
        Ok(Term::Tuple(Vec::new()))
    }
}

impl ToTerm for Integer {
    fn to_term(&self) -> Result<Term, EncodeError> {
        Ok(Term::big_integer(self.clone()))
    }
}

macro_rules! lossless_integer {
    ($($t:ty),*) => {
        $(
            impl ToTerm for $t {
                fn to_term(&self) -> Result<Term, EncodeError> {
                    Ok(Term::Integer(i32::from(*self)))
                }
            }
        )*
    };
}

macro_rules! checked_integer {
    ($($t:ty),*) => {
        $(
            impl ToTerm for $t {
                fn to_term(&self) -> Result<Term, EncodeError> {
                    i32::try_from(*self)
                        .map(Term::Integer)
                        .map_err(|_| EncodeError::IntegerOutOfRange(*self as i128))
                }
            }
        )*
    };
}

macro_rules! unclassifiable {
    ($($t:ty),*) => {
        $(
            impl ToTerm for $t {
                fn to_term(&self) -> Result<Term, EncodeError> {
                    let type_name = std::any::type_name::<$t>();
                    debug!(type_name, "Value cannot be classified as a term.");
                    Err(EncodeError::Unclassifiable { type_name })
                }
            }
        )*
    };
}

lossless_integer!(i8, i16, i32, u8, u16);
checked_integer!(i64, u32, u64, isize, usize);
unclassifiable!(f32, f64);

impl<T: ToTerm> ToTerm for [T] {
    fn to_term(&self) -> Result<Term, EncodeError> {
        self.iter()
            .map(ToTerm::to_term)
            .collect::<Result<Vec<_>, _>>()
            .map(Term::List)
    }
}

impl<T: ToTerm> ToTerm for Vec<T> {
    fn to_term(&self) -> Result<Term, EncodeError> {
        self.as_slice().to_term()
    }
}

impl<T: ToTerm, const N: usize> ToTerm for [T; N] {
    fn to_term(&self) -> Result<Term, EncodeError> {
        self.as_slice().to_term()
    }
}

impl<T: ToTerm + ?Sized> ToTerm for &T {
    fn to_term(&self) -> Result<Term, EncodeError> {
        (**self).to_term()
    }
}

impl<T: ToTerm + ?Sized> ToTerm for Box<T> {
    fn to_term(&self) -> Result<Term, EncodeError> {
        (**self).to_term()
    }
}

macro_rules! tuple_to_term {
    ($($name:ident)+) => {
        impl<$($name: ToTerm),+> ToTerm for ($($name,)+) {
            #[allow(non_snake_case)]
            fn to_term(&self) -> Result<Term, EncodeError> {
                let ($($name,)+) = self;
                Ok(Term::Tuple(vec![$($name.to_term()?),+]))
            }
        }
    };
}

tuple_to_term!(A);
tuple_to_term!(A B);
tuple_to_term!(A B C);
tuple_to_term!(A B C D);
tuple_to_term!(A B C D E);
tuple_to_term!(A B C D E F);
tuple_to_term!(A B C D E F G);
tuple_to_term!(A B C D E F G H);
