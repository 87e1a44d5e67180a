//! Term Reader
//!
//! Wraps any `std::io::Read` with the primitive reads the tag decoders need:
//! single bytes, big-endian fixed-width integers and length-delimited byte runs.
//! Every read either completes or fails with [`DecodeError::Truncated`]; the reader
//! never consumes more than the term structure calls for, so bytes after the term
//! stay in the underlying stream.

use std::io::{ErrorKind, Read};

use crate::config::DecodeLimits;
use crate::error::DecodeError;

/// Initial allocation for a byte run; larger runs grow as data actually arrives
const INITIAL_RUN_CAPACITY: usize = 8 * 1024;

/// Bounded reader over a BERT byte stream
pub struct TermReader<R> {
    inner: R,
    limits: DecodeLimits,
    depth: usize,
    consumed: usize,
}

impl<R: Read> TermReader<R> {
    /// Create a reader with default limits
    pub fn new(inner: R) -> Self {
        Self::with_limits(inner, DecodeLimits::default())
    }

    /// Create a reader with explicit limits
    pub fn with_limits(inner: R, limits: DecodeLimits) -> Self {
        Self {
            inner,
            limits,
            depth: 0,
            consumed: 0,
        }
    }

    pub fn limits(&self) -> &DecodeLimits {
        &self.limits
    }

    /// Bytes consumed from the stream so far
    pub fn consumed(&self) -> usize {
        self.consumed
    }

    /// Give back the underlying stream, positioned just after the last byte read
    pub fn into_inner(self) -> R {
        self.inner
    }

    /// Read a single byte
    pub fn read_u8(&mut self) -> Result<u8, DecodeError> {
        let mut buf = [0u8; 1];
        self.read_array(&mut buf)?;
        Ok(buf[0])
    }

    /// Read a big-endian u16
    pub fn read_u16(&mut self) -> Result<u16, DecodeError> {
        let mut buf = [0u8; 2];
        self.read_array(&mut buf)?;
        Ok(u16::from_be_bytes(buf))
    }

    /// Read a big-endian u32
    pub fn read_u32(&mut self) -> Result<u32, DecodeError> {
        let mut buf = [0u8; 4];
        self.read_array(&mut buf)?;
        Ok(u32::from_be_bytes(buf))
    }

    /// Read a big-endian i32
    pub fn read_i32(&mut self) -> Result<i32, DecodeError> {
        let mut buf = [0u8; 4];
        self.read_array(&mut buf)?;
        Ok(i32::from_be_bytes(buf))
    }

    /// Read exactly `len` bytes
    ///
    /// `len` comes from the wire, so it is checked against `max_payload_len` before
    /// anything is allocated, and the buffer only grows as bytes arrive.
    pub fn read_bytes(&mut self, len: usize) -> Result<Vec<u8>, DecodeError> {
        if len > self.limits.max_payload_len {
            return Err(DecodeError::LimitExceeded {
                what: "byte run",
                len,
                limit: self.limits.max_payload_len,
            });
        }
        let mut buf = Vec::with_capacity(len.min(INITIAL_RUN_CAPACITY));
        let actual = (&mut self.inner).take(len as u64).read_to_end(&mut buf)?;
        self.consumed += actual;
        if actual < len {
            return Err(DecodeError::Truncated {
                expected: len,
                actual,
            });
        }
        Ok(buf)
    }

    /// Check a tuple arity or list count against `max_elements`
    pub fn check_elements(&self, what: &'static str, count: usize) -> Result<(), DecodeError> {
        if count > self.limits.max_elements {
            return Err(DecodeError::LimitExceeded {
                what,
                len: count,
                limit: self.limits.max_elements,
            });
        }
        Ok(())
    }

    /// Run `f` one container level deeper
    pub fn nested<T>(
        &mut self,
        f: impl FnOnce(&mut Self) -> Result<T, DecodeError>,
    ) -> Result<T, DecodeError> {
        if self.depth >= self.limits.max_depth {
            return Err(DecodeError::DepthExceeded(self.limits.max_depth));
        }
        self.depth += 1;
        let result = f(self);
        self.depth -= 1;
        result
    }

    fn read_array(&mut self, buf: &mut [u8]) -> Result<(), DecodeError> {
        let mut filled = 0;
        while filled < buf.len() {
            match self.inner.read(&mut buf[filled..]) {
                Ok(0) => {
                    return Err(DecodeError::Truncated {
                        expected: buf.len(),
                        actual: filled,
                    })
                }
                Ok(n) => {
                    filled += n;
                    self.consumed += n;
                }
                Err(err) if err.kind() == ErrorKind::Interrupted => {}
                Err(err) => return Err(err.into()),
            }
        }
        Ok(())
    }
}
