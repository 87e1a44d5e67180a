//! API Facades Layer
//!
//! Public surface of the BERT codec. Everything a caller needs is re-exported here:
//! the term model, the encoder entry points, the shape-driven decoder and the
//! [`bert_record!`] macro for declaring record types.
//!
//! ```
//! use bert_api_facades::{bert_record, from_slice, to_vec, Atom};
//!
//! bert_record! {
//!     #[derive(Debug, PartialEq)]
//!     pub struct Reply {
//!         pub status: String,
//!         pub code: i32,
//!     }
//! }
//!
//! let bytes = to_vec(&(Atom::new("ok"), 200)).unwrap();
//! let reply: Reply = from_slice(&bytes).unwrap();
//! assert_eq!(reply, Reply { status: "ok".to_string(), code: 200 });
//! ```

pub mod codec_facades;
pub mod record_facades;

pub use codec_facades::*;

pub use entities_bert_terms::{
    tag_name, Atom, BertString, Decoded, Field, FieldDescriptor, IntWidth, RecordShape, Shape,
    StringType, Tag, TagError, TagFamily, Term, VERSION_MAGIC,
};
pub use infrastructure_bert_decoding::{
    check_shape, decode, decode_as, decode_as_with_limits, decode_shape, decode_with_limits,
    next_field, read_version, record_fields, DecodeError, DecodeLimits, FromBert, TermReader,
};
pub use infrastructure_bert_encoding::{
    encode, encode_term, encode_to_vec, encoded_ext_size, encoded_size, EncodeError, ToTerm,
};
