//! # nbt-core
//!
//! Pure-Rust encoder and decoder for **NBT (Named Binary Tag)**.
//!
//! NBT is a self-describing, big-endian binary tree format: every value is a
//! tag of one of thirteen kinds (scalars, arrays, strings, lists and keyed
//! compounds), and the root of a stream is a named list or compound. Lists are
//! homogeneous and record their element type once; compounds are
//! self-terminating maps. Encoding is byte-for-byte reproducible: decoding and
//! re-encoding a stream yields the same bytes (for key-sorted input).
//!
//! ## Quick start
//!
//! ```rust
//! use nbt_core::{decode, encode, Compound, Document, Tag};
//!
//! let mut root = Compound::new();
//! root.insert("id".into(), Tag::Byte(5));
//! let doc = Document::compound("", root);
//!
//! let bytes = encode(&doc).unwrap();
//! assert_eq!(bytes, [0x0A, 0x00, 0x00, 0x01, 0x00, 0x02, b'i', b'd', 0x05, 0x00]);
//!
//! let back = decode(&bytes).unwrap();
//! assert_eq!(back, doc);
//! assert_eq!(*back.get("id").unwrap().value::<i8>().unwrap(), 5);
//! ```
//!
//! ## Modules
//!
//! - [`types`]: `Tag`, `List`, `Compound`, `NbtString`, `TagType`
//! - [`encoder`]: tree → bytes
//! - [`decoder`]: bytes → tree, with depth and length checks
//! - [`document`]: the named root wrapper
//! - [`access`]: typed accessors (`Tag::value`, `Tag::get`, `Tag::at`)
//! - [`options`]: `DecodeOptions`
//! - [`stats`]: tag counts and nesting depth
//! - [`error`]: error types

pub mod access;
pub mod decoder;
pub mod document;
pub mod encoder;
pub mod error;
pub mod options;
pub mod stats;
pub mod types;

pub use access::NbtValue;
pub use decoder::{decode, read_document, read_document_with, read_payload, Decoder};
pub use document::{Document, NamedRoot, Root};
pub use encoder::{encode, write_document, write_payload};
pub use error::{NbtError, Result};
pub use options::DecodeOptions;
pub use stats::TreeStats;
pub use types::{Compound, List, NbtString, Tag, TagType};
