//! BERT String Module
//!
//! Text that remembers which family of wire tag it came from. Decoding into a plain
//! `String` forgets whether the peer sent an atom or a string; decoding into a
//! [`BertString`] keeps it.

use crate::tags::{Tag, TagFamily};

/// Origin of a decoded text value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StringType {
    /// `SMALL_ATOM_UTF8_EXT`, `ATOM_UTF8_EXT`, `ATOM_EXT` or `SMALL_ATOM_EXT`
    Atom,
    /// `BINARY_EXT`, `STRING_EXT`, a charlist, or `NIL_EXT`
    String,
}

impl StringType {
    /// Family for a text-carrying tag, `None` for tags that never carry text.
    pub fn from_tag(tag: Tag) -> Option<Self> {
        match tag.family() {
            TagFamily::AtomLike => Some(StringType::Atom),
            TagFamily::StringLike => Some(StringType::String),
            TagFamily::Other => None,
        }
    }
}

/// Text plus its wire family
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BertString {
    pub value: String,
    pub erlang_type: StringType,
}

impl BertString {
    pub fn new(value: impl Into<String>, erlang_type: StringType) -> Self {
        BertString {
            value: value.into(),
            erlang_type,
        }
    }

    pub fn atom(value: impl Into<String>) -> Self {
        Self::new(value, StringType::Atom)
    }

    pub fn string(value: impl Into<String>) -> Self {
        Self::new(value, StringType::String)
    }

    pub fn is_atom(&self) -> bool {
        self.erlang_type == StringType::Atom
    }

    pub fn as_str(&self) -> &str {
        &self.value
    }
}

impl std::fmt::Display for BertString {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.value)
    }
}

impl From<BertString> for String {
    fn from(s: BertString) -> Self {
        s.value
    }
}
