//! Decoded Values
//!
//! The result of a shape-driven decode. Each variant corresponds to one [`Shape`]
//! variant, so a caller that built the shape knows which variant comes back.
//!
//! [`Shape`]: crate::shape::Shape

use malachite::Integer;

use crate::bert_string::BertString;
use crate::term::Term;

/// Decoded value
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decoded {
    /// From `Shape::Integer`
    Integer(i64),
    /// From `Shape::BigInteger`
    BigInteger(Integer),
    /// From `Shape::Text`
    Text(String),
    /// From `Shape::TaggedText`
    Tagged(BertString),
    /// From `Shape::Record`, fields in declared order
    Record(Vec<Field>),
    /// From `Shape::List`
    List(Vec<Decoded>),
    /// From `Shape::Any`
    Term(Term),
}

/// A bound record field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    pub name: Option<String>,
    pub value: Decoded,
}

impl Decoded {
    /// Short name of the variant, used in diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            Decoded::Integer(_) => "integer",
            Decoded::BigInteger(_) => "big integer",
            Decoded::Text(_) => "text",
            Decoded::Tagged(_) => "tagged text",
            Decoded::Record(_) => "record",
            Decoded::List(_) => "list",
            Decoded::Term(_) => "term",
        }
    }

    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Decoded::Integer(i) => Some(*i),
            _ => None,
        }
    }

    /// Text of a `Text` or `Tagged` value.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Decoded::Text(s) => Some(s),
            Decoded::Tagged(s) => Some(s.as_str()),
            _ => None,
        }
    }

    pub fn fields(&self) -> Option<&[Field]> {
        match self {
            Decoded::Record(fields) => Some(fields),
            _ => None,
        }
    }

    /// Look a record field up by its declared name.
    pub fn field(&self, name: &str) -> Option<&Decoded> {
        self.fields()?
            .iter()
            .find(|f| f.name.as_deref() == Some(name))
            .map(|f| &f.value)
    }
}
