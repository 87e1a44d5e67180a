//! Atom Encoding Module
//!
//! Provides functionality to encode atoms to BERT format. Atoms are always written
//! with the UTF-8 atom tags; the deprecated Latin-1 forms are decode-only.

use std::io::Write;

use entities_bert_terms::tags::{MEDIUM_LENGTH_MAX, SMALL_LENGTH_MAX};
use entities_bert_terms::Tag;

use crate::error::EncodeError;

/// Encode an atom
///
/// Names up to 255 bytes use `SMALL_ATOM_UTF8_EXT` (1-byte length), longer names
/// `ATOM_UTF8_EXT` (2-byte length).
///
/// # Arguments
/// * `writer` - Sink to append to
/// * `name` - Atom name; its UTF-8 bytes are written as-is
///
/// # Returns
/// * `Ok(())` - Success
/// * `Err(EncodeError::AtomTooLong)` - Name longer than 65535 bytes
/// * `Err(EncodeError::Io)` - The sink failed
pub fn encode_atom<W: Write + ?Sized>(writer: &mut W, name: &str) -> Result<(), EncodeError> {
    let len = name.len();
    if len <= SMALL_LENGTH_MAX {
        writer.write_all(&[Tag::SmallAtomUtf8.byte(), len as u8])?;
    } else if len <= MEDIUM_LENGTH_MAX {
        writer.write_all(&[Tag::AtomUtf8.byte()])?;
        writer.write_all(&(len as u16).to_be_bytes())?;
    } else {
        return Err(EncodeError::AtomTooLong(len));
    }
    writer.write_all(name.as_bytes())?;
    Ok(())
}
