//! Tag Catalogue
//!
//! Defines the tag bytes of the Erlang External Term Format understood by the codec.
//! Values are fixed by the external format and cannot be renumbered.
//!
//! ## Layouts
//!
//! | Tag | Layout |
//! |---|---|
//! | `SmallInteger` | tag + 1 byte (unsigned) |
//! | `Integer` | tag + 4 bytes (signed, big-endian) |
//! | `BigInteger` | tag + 1 byte length N + 1 byte sign + N little-endian magnitude bytes |
//! | `SmallTuple` | tag + 1 byte arity + elements |
//! | `LargeTuple` | tag + 4 byte arity + elements |
//! | `List` | tag + 4 byte count + elements + `Nil` |
//! | `Nil` | tag only |
//! | `Binary` | tag + 4 byte length + bytes |
//! | `String` | tag + 2 byte length + bytes |
//! | `DeprecatedAtom` / `AtomUtf8` | tag + 2 byte length + bytes |
//! | `SmallAtom` / `SmallAtomUtf8` | tag + 1 byte length + bytes |
//!
//! A complete message is prefixed once by [`VERSION_MAGIC`].

use thiserror::Error;

/// External term format version magic byte (131).
pub const VERSION_MAGIC: u8 = 131;

/// Largest value carried by a `SmallInteger` term.
pub const SMALL_INTEGER_MAX: i64 = 255;

/// Largest length a one-byte length prefix can express.
pub const SMALL_LENGTH_MAX: usize = 0xFF;

/// Largest length a two-byte length prefix can express.
pub const MEDIUM_LENGTH_MAX: usize = 0xFFFF;

/// Largest length a four-byte length prefix can express.
pub const LARGE_LENGTH_MAX: usize = u32::MAX as usize;

/// Wire tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Tag {
    /// Unsigned 0..=255 (SMALL_INTEGER_EXT)
    SmallInteger = 97,
    /// Signed 32-bit (INTEGER_EXT)
    Integer = 98,
    /// Atom with 2-byte length (ATOM_EXT, deprecated)
    DeprecatedAtom = 100,
    /// Tuple with arity <= 255 (SMALL_TUPLE_EXT)
    SmallTuple = 104,
    /// Tuple with 4-byte arity (LARGE_TUPLE_EXT)
    LargeTuple = 105,
    /// Empty list and list terminator (NIL_EXT)
    Nil = 106,
    /// Byte list with 2-byte length (STRING_EXT)
    String = 107,
    /// Proper list (LIST_EXT)
    List = 108,
    /// Byte string (BINARY_EXT)
    Binary = 109,
    /// Arbitrary precision integer (SMALL_BIG_EXT)
    BigInteger = 110,
    /// Atom with 1-byte length (SMALL_ATOM_EXT, deprecated)
    SmallAtom = 115,
    /// UTF-8 atom with 2-byte length (ATOM_UTF8_EXT)
    AtomUtf8 = 118,
    /// UTF-8 atom with 1-byte length (SMALL_ATOM_UTF8_EXT)
    SmallAtomUtf8 = 119,
}

/// Which family of text a tag belongs to, when it carries text at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TagFamily {
    /// Atom tags.
    AtomLike,
    /// Binary, byte-list and charlist tags.
    StringLike,
    /// Numbers and containers that never carry text directly.
    Other,
}

/// A byte that is not in the catalogue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("unknown term tag: {0}")]
pub struct TagError(pub u8);

impl Tag {
    /// All catalogued tags, in byte order.
    pub const ALL: [Tag; 13] = [
        Tag::SmallInteger,
        Tag::Integer,
        Tag::DeprecatedAtom,
        Tag::SmallTuple,
        Tag::LargeTuple,
        Tag::Nil,
        Tag::String,
        Tag::List,
        Tag::Binary,
        Tag::BigInteger,
        Tag::SmallAtom,
        Tag::AtomUtf8,
        Tag::SmallAtomUtf8,
    ];

    /// The byte written on the wire.
    pub fn byte(self) -> u8 {
        self as u8
    }

    /// The mnemonic used by the external format documentation.
    pub fn name(self) -> &'static str {
        match self {
            Tag::SmallInteger => "SMALL_INTEGER_EXT",
            Tag::Integer => "INTEGER_EXT",
            Tag::DeprecatedAtom => "ATOM_EXT",
            Tag::SmallTuple => "SMALL_TUPLE_EXT",
            Tag::LargeTuple => "LARGE_TUPLE_EXT",
            Tag::Nil => "NIL_EXT",
            Tag::String => "STRING_EXT",
            Tag::List => "LIST_EXT",
            Tag::Binary => "BINARY_EXT",
            Tag::BigInteger => "SMALL_BIG_EXT",
            Tag::SmallAtom => "SMALL_ATOM_EXT",
            Tag::AtomUtf8 => "ATOM_UTF8_EXT",
            Tag::SmallAtomUtf8 => "SMALL_ATOM_UTF8_EXT",
        }
    }

    /// Text family of the tag.
    ///
    /// `Nil` counts as string-like because Erlang writes the empty string `""`
    /// as a bare `NIL_EXT`.
    pub fn family(self) -> TagFamily {
        match self {
            Tag::DeprecatedAtom | Tag::SmallAtom | Tag::AtomUtf8 | Tag::SmallAtomUtf8 => {
                TagFamily::AtomLike
            }
            Tag::String | Tag::Binary | Tag::List | Tag::Nil => TagFamily::StringLike,
            _ => TagFamily::Other,
        }
    }

    /// Width in bytes of the length/arity prefix that follows the tag, if any.
    pub fn length_prefix_width(self) -> Option<usize> {
        match self {
            Tag::SmallTuple | Tag::SmallAtom | Tag::SmallAtomUtf8 | Tag::BigInteger => Some(1),
            Tag::DeprecatedAtom | Tag::AtomUtf8 | Tag::String => Some(2),
            Tag::LargeTuple | Tag::List | Tag::Binary => Some(4),
            Tag::SmallInteger | Tag::Integer | Tag::Nil => None,
        }
    }
}

impl TryFrom<u8> for Tag {
    type Error = TagError;

    fn try_from(byte: u8) -> Result<Self, Self::Error> {
        Tag::ALL
            .iter()
            .copied()
            .find(|tag| tag.byte() == byte)
            .ok_or(TagError(byte))
    }
}

impl From<Tag> for u8 {
    fn from(tag: Tag) -> Self {
        tag.byte()
    }
}

impl std::fmt::Display for Tag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Render any byte for diagnostics, naming it when it is a catalogued tag.
pub fn tag_name(byte: u8) -> String {
    match Tag::try_from(byte) {
        Ok(tag) => format!("{} ({})", tag.name(), byte),
        Err(_) if byte == VERSION_MAGIC => format!("VERSION_MAGIC ({})", byte),
        Err(_) => format!("unknown tag ({})", byte),
    }
}
