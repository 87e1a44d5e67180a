//! Entities Layer: BERT Terms
//!
//! This crate provides the data model shared by the BERT (Erlang External Term Format)
//! encoder and decoder. It has no I/O and no dependencies on other crates in the
//! workspace, making it the foundation both codec pipelines are built on.
//!
//! ## Modules
//!
//! - **[`tags`](tags/index.html)**: The tag catalogue. Byte values and layout rules for
//!   every wire tag the codec understands, plus the version marker.
//!
//! - **[`term`](term/index.html)**: The generic value model (`Term`) the encoder walks and
//!   the self-describing decoder produces, with short factory functions.
//!
//! - **[`bert_string`](bert_string/index.html)**: Text wrapper that remembers whether the
//!   text travelled as an atom or as a string.
//!
//! - **[`shape`](shape/index.html)**: Decode target shapes. Callers describe what they
//!   expect (integer width, text, record field list, ...) and the decoder binds to it.
//!
//! - **[`decoded`](decoded/index.html)**: The value tree a shape-driven decode produces.
//!
//! ## Usage
//!
//! ```rust
//! use entities_bert_terms::{Term, Shape, FieldDescriptor, RecordShape};
//!
//! let reply = Term::tuple(vec![Term::atom("error"), Term::atom("not_found")]);
//! assert_eq!(reply.type_name(), "tuple");
//!
//! let shape = Shape::Record(RecordShape::new(vec![
//!     FieldDescriptor::named("result", Shape::Text),
//!     FieldDescriptor::named("reason", Shape::Text),
//! ]));
//! assert_eq!(shape.kind(), "record");
//! ```
//!
//! ## See Also
//!
//! - [`infrastructure_bert_encoding`](../infrastructure_bert_encoding/index.html): Term encoding
//! - [`infrastructure_bert_decoding`](../infrastructure_bert_decoding/index.html): Shape-driven decoding

pub mod bert_string;
pub mod decoded;
pub mod shape;
pub mod tags;
pub mod term;

pub use bert_string::{BertString, StringType};
pub use decoded::{Decoded, Field};
pub use shape::{FieldDescriptor, IntWidth, RecordShape, Shape};
pub use tags::{tag_name, Tag, TagError, TagFamily, VERSION_MAGIC};
pub use term::{Atom, Term};
