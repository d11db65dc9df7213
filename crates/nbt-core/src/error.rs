//! Error types for NBT encoding, decoding and tree navigation.

use crate::types::TagType;
use thiserror::Error;

/// Errors that can occur while encoding, decoding or navigating an NBT tree.
#[derive(Error, Debug)]
pub enum NbtError {
    /// A type-tag byte outside the closed set `0..=12`, or a known tag that is
    /// not legal at the position it was read from (e.g. a scalar at the root).
    #[error("invalid tag type: {0:#04x}")]
    InvalidTagType(u8),

    /// The underlying reader or writer failed. Short reads surface here as
    /// `UnexpectedEof`.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A string length or array/list count read from the stream was negative.
    #[error("negative {kind} length: {len}")]
    NegativeLength { kind: &'static str, len: i32 },

    /// A string is too long for its 16-bit length prefix.
    #[error("string of {0} bytes exceeds the 32767-byte limit")]
    StringTooLong(usize),

    /// An array or list has more elements than a 32-bit count can describe.
    #[error("sequence of {0} elements exceeds the i32 count limit")]
    LengthTooLarge(usize),

    /// A compound entry holds an End tag. Its type byte would read back as
    /// the compound terminator, so it cannot be encoded.
    #[error("compound entry {0:?} holds an End tag")]
    EndInCompound(String),

    /// Nesting went deeper than `DecodeOptions::max_depth`.
    #[error("nesting depth exceeds limit of {0}")]
    DepthLimitExceeded(usize),

    /// An accessor expected a different tag (or list element) type.
    #[error("type mismatch: expected {expected}, found {found}")]
    TypeMismatch { expected: TagType, found: TagType },

    /// A compound lookup found no entry for the key.
    #[error("missing key: {0:?}")]
    MissingKey(String),

    /// A list lookup was past the end of the list.
    #[error("index {index} out of range for list of length {len}")]
    IndexOutOfRange { index: usize, len: usize },

    /// The document holds no root value.
    #[error("document is empty")]
    EmptyDocument,
}

/// Convenience alias used throughout nbt-core.
pub type Result<T> = std::result::Result<T, NbtError>;
