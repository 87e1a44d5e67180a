//! Term Module
//!
//! Provides the generic value model for BERT terms: the closed set of shapes the
//! encoder knows how to write and the self-describing decoder knows how to build.
//!
//! An atom and a text value carry the same information (a string). They differ only
//! in the wire tag they are written with.

use malachite::Integer;

/// Generic BERT term
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Term {
    /// Atom, written as `SMALL_ATOM_UTF8_EXT` or `ATOM_UTF8_EXT`
    Atom(String),
    /// Text, written as `BINARY_EXT`
    Text(String),
    /// Integer in the 32-bit signed range
    Integer(i32),
    /// Integer outside the 32-bit signed range, written as `SMALL_BIG_EXT`
    BigInteger(Integer),
    /// Tuple of terms, order preserved
    Tuple(Vec<Term>),
    /// Proper list of terms, order preserved
    List(Vec<Term>),
}

impl Term {
    /// Create an atom term
    pub fn atom(name: impl Into<String>) -> Self {
        Term::Atom(name.into())
    }

    /// Create a text term
    pub fn text(value: impl Into<String>) -> Self {
        Term::Text(value.into())
    }

    /// Create a tuple term
    pub fn tuple(elements: Vec<Term>) -> Self {
        Term::Tuple(elements)
    }

    /// Create a list term
    pub fn list(elements: Vec<Term>) -> Self {
        Term::List(elements)
    }

    /// Create an integer term from an arbitrary precision value.
    ///
    /// Values that fit in 32 bits become [`Term::Integer`], so the canonical
    /// integer encoding applies to them whatever the caller started from.
    pub fn big_integer(value: Integer) -> Self {
        match i32::try_from(&value) {
            Ok(small) => Term::Integer(small),
            Err(_) => Term::BigInteger(value),
        }
    }

    /// Short name of the variant, used in diagnostics.
    pub fn type_name(&self) -> &'static str {
        match self {
            Term::Atom(_) => "atom",
            Term::Text(_) => "text",
            Term::Integer(_) => "integer",
            Term::BigInteger(_) => "big integer",
            Term::Tuple(_) => "tuple",
            Term::List(_) => "list",
        }
    }

    /// Text carried by an atom or text term.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Term::Atom(s) | Term::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Value of an integer term that fits in 64 bits.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Term::Integer(i) => Some(i64::from(*i)),
            Term::BigInteger(big) => i64::try_from(big).ok(),
            _ => None,
        }
    }

    /// Elements of a tuple or list term.
    pub fn elements(&self) -> Option<&[Term]> {
        match self {
            Term::Tuple(elems) | Term::List(elems) => Some(elems),
            _ => None,
        }
    }
}

impl From<i32> for Term {
    fn from(value: i32) -> Self {
        Term::Integer(value)
    }
}

impl From<Integer> for Term {
    fn from(value: Integer) -> Self {
        Term::big_integer(value)
    }
}

impl From<Atom> for Term {
    fn from(atom: Atom) -> Self {
        Term::Atom(atom.0)
    }
}

impl From<&str> for Term {
    fn from(value: &str) -> Self {
        Term::Text(value.to_string())
    }
}

impl From<String> for Term {
    fn from(value: String) -> Self {
        Term::Text(value)
    }
}

impl From<Vec<Term>> for Term {
    fn from(elements: Vec<Term>) -> Self {
        Term::List(elements)
    }
}

/// Atom wrapper for caller values.
///
/// Plain strings are written as binaries; wrap a string in `Atom` to have it
/// written with an atom tag instead.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Atom(pub String);

impl Atom {
    /// Create a new atom
    pub fn new(name: impl Into<String>) -> Self {
        Atom(name.into())
    }

    /// Atom name
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Atom {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_factories() {
        assert_eq!(Term::atom("ok"), Term::Atom("ok".to_string()));
        assert_eq!(Term::text("ok"), Term::Text("ok".to_string()));
        assert_eq!(
            Term::tuple(vec![Term::Integer(1)]),
            Term::Tuple(vec![Term::Integer(1)])
        );
        assert_eq!(Term::list(vec![]), Term::List(vec![]));
    }

    #[test]
    fn test_big_integer_normalizes_small_values() {
        assert_eq!(Term::big_integer(Integer::from(42)), Term::Integer(42));
        assert_eq!(
            Term::big_integer(Integer::from(i32::MIN)),
            Term::Integer(i32::MIN)
        );
        let big = Integer::from(i64::from(i32::MAX) + 1);
        assert_eq!(Term::big_integer(big.clone()), Term::BigInteger(big));
    }

    #[test]
    fn test_accessors() {
        assert_eq!(Term::atom("a").as_str(), Some("a"));
        assert_eq!(Term::text("b").as_str(), Some("b"));
        assert_eq!(Term::Integer(3).as_str(), None);
        assert_eq!(Term::Integer(-3).as_i64(), Some(-3));
        assert_eq!(
            Term::BigInteger(Integer::from(1_i64 << 40)).as_i64(),
            Some(1_i64 << 40)
        );
        assert_eq!(Term::list(vec![Term::Integer(1)]).elements().map(|e| e.len()), Some(1));
        assert_eq!(Term::text("x").elements(), None);
    }

    #[test]
    fn test_conversions() {
        assert_eq!(Term::from(7), Term::Integer(7));
        assert_eq!(Term::from("hi"), Term::Text("hi".to_string()));
        assert_eq!(Term::from(Atom::new("ok")), Term::Atom("ok".to_string()));
        assert_eq!(Atom::new("ok").to_string(), "ok");
    }
}
