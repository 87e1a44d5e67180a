//! Decoder Configuration
//!
//! Limits applied while decoding untrusted input. Length prefixes come from the
//! peer; the limits stop a hostile prefix from forcing a huge allocation or an
//! unbounded recursion. They never change the result for input within them.

/// Options for decoding
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecodeLimits {
    /// Largest length-prefixed byte run (atom, binary, byte list) accepted
    pub max_payload_len: usize,
    /// Largest tuple arity or list count accepted
    pub max_elements: usize,
    /// Deepest tuple/list nesting accepted
    pub max_depth: usize,
}

impl Default for DecodeLimits {
    fn default() -> Self {
        Self {
            max_payload_len: 64 * 1024 * 1024,
            max_elements: 16 * 1024 * 1024,
            max_depth: 512,
        }
    }
}

impl DecodeLimits {
    /// No limits beyond what the wire format itself can express
    pub fn unbounded() -> Self {
        Self {
            max_payload_len: usize::MAX,
            max_elements: usize::MAX,
            max_depth: usize::MAX,
        }
    }

    pub fn with_max_payload_len(mut self, max_payload_len: usize) -> Self {
        self.max_payload_len = max_payload_len;
        self
    }

    pub fn with_max_elements(mut self, max_elements: usize) -> Self {
        self.max_elements = max_elements;
        self
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }
}
