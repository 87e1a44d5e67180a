//! Binary Encoding Module
//!
//! Provides functionality to encode binaries to BERT format. Text values are always
//! written this way; the encoder never emits `STRING_EXT` or charlists.

use std::io::Write;

use entities_bert_terms::tags::LARGE_LENGTH_MAX;
use entities_bert_terms::Tag;

use crate::error::EncodeError;

/// Encode a binary
///
/// # Arguments
/// * `writer` - Sink to append to
/// * `data` - Binary data to encode
///
/// # Returns
/// * `Ok(())` - Success
/// * `Err(EncodeError::LengthOverflow)` - More than `u32::MAX` bytes
/// * `Err(EncodeError::Io)` - The sink failed
pub fn encode_binary<W: Write + ?Sized>(writer: &mut W, data: &[u8]) -> Result<(), EncodeError> {
    if data.len() > LARGE_LENGTH_MAX {
        return Err(EncodeError::LengthOverflow {
            what: "binary",
            len: data.len(),
        });
    }
    writer.write_all(&[Tag::Binary.byte()])?;
    writer.write_all(&(data.len() as u32).to_be_bytes())?;
    writer.write_all(data)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_binary() {
        let mut buf = Vec::new();
        encode_binary(&mut buf, b"Hello").unwrap();
        assert_eq!(buf, vec![109, 0, 0, 0, 5, 72, 101, 108, 108, 111]);
    }

    #[test]
    fn test_encode_binary_empty() {
        let mut buf = Vec::new();
        encode_binary(&mut buf, &[]).unwrap();
        assert_eq!(buf, vec![109, 0, 0, 0, 0]);
    }
}
