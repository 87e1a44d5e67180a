//! Infrastructure Layer: BERT Decoding
//!
//! Parses Erlang External Term Format streams into caller-specified targets.
//!
//! ## Overview
//!
//! Decoding is receiver driven. The caller hands over a byte stream and a
//! [`Shape`] describing what it expects; the decoder reads the version marker once,
//! then reads exactly one term, checking every tag, length and terminator against
//! the shape as it goes. Where the wire itself disambiguates (text arrives under
//! several tags) the decoder accepts every valid form.
//!
//! A decode either returns a fully built value or one specific [`DecodeError`]. There
//! is no partial result.
//!
//! ## Modules
//!
//! - **[`reader`](reader/index.html)**: Bounded reads over any `std::io::Read`
//! - **[`config`](config/index.html)**: `DecodeLimits`
//! - **[`decode_integers`](decode_integers/index.html)**: Small, 32-bit and big integers
//! - **[`decode_strings`](decode_strings/index.html)**: Atoms, binaries, byte lists, charlists
//! - **[`decode_headers`](decode_headers/index.html)**: Tuple arity, list count, nil terminator
//! - **[`decode_any`](decode_any/index.html)**: Self-describing decoding into `Term`
//! - **[`decode_target`](decode_target/index.html)**: Shape dispatch and the entry points
//! - **[`from_bert`](from_bert/index.html)**: Typed targets
//!
//! [`Shape`]: entities_bert_terms::Shape

pub mod config;
pub mod decode_any;
pub mod decode_headers;
pub mod decode_integers;
pub mod decode_strings;
pub mod decode_target;
pub mod error;
pub mod from_bert;
pub mod reader;

pub use config::DecodeLimits;
pub use decode_target::{check_shape, decode, decode_shape, decode_with_limits, read_version};
pub use error::DecodeError;
pub use from_bert::{decode_as, decode_as_with_limits, next_field, record_fields, FromBert};
pub use reader::TermReader;
