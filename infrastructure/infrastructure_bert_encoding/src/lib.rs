//! Infrastructure Layer: BERT Encoding
//!
//! Serializes generic BERT terms into the Erlang External Term Format.
//!
//! ## Overview
//!
//! Encoding is a single depth-first pass over a [`Term`] that appends tagged bytes to
//! any [`std::io::Write`] sink. It never reads back or rewinds the sink. All
//! multi-byte integers are written big-endian; bignum magnitudes little-endian.
//!
//! Values that are not already a `Term` are classified once at the boundary through
//! the [`ToTerm`] trait. Classification happens before the first byte is written,
//! so a value that cannot be classified leaves the sink untouched.
//!
//! ## Modules
//!
//! - **[`encode_integers`](encode_integers/index.html)**: `SMALL_INTEGER_EXT`, `INTEGER_EXT`
//!   and `SMALL_BIG_EXT` writers
//! - **[`encode_atom`](encode_atom/index.html)**: UTF-8 atom writer
//! - **[`encode_binary`](encode_binary/index.html)**: `BINARY_EXT` writer
//! - **[`encode_headers`](encode_headers/index.html)**: Tuple and list headers, `NIL_EXT`
//! - **[`encode_term`](encode_term/index.html)**: Term walker and top-level entry points
//! - **[`size_calculation`](size_calculation/index.html)**: Exact encoded sizes
//! - **[`classify`](classify/index.html)**: `ToTerm` adapters for Rust values
//!
//! [`Term`]: entities_bert_terms::Term

pub mod classify;
pub mod encode_atom;
pub mod encode_binary;
pub mod encode_headers;
pub mod encode_integers;
pub mod encode_term;
pub mod error;
pub mod size_calculation;

pub use classify::ToTerm;
pub use encode_term::{encode, encode_term, encode_to_vec};
pub use error::EncodeError;
pub use size_calculation::{encoded_ext_size, encoded_size};
