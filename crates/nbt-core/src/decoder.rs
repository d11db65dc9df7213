//! NBT decoder: reads big-endian wire bytes back into a [`Document`] tree.
//!
//! Decoding is runtime-dispatched: a type-tag byte is read, resolved through
//! `TagType::try_from` (the only place wire values map to types), and the
//! matching payload reader is invoked. Lists and compounds recurse through
//! [`Decoder::read_payload`].
//!
//! # Key design decisions
//!
//! - **Fail fast on tags**: an unknown tag byte aborts the decode before any
//!   further byte is read. Nothing partial is returned.
//! - **Lengths are validated**: negative string lengths and array/list counts
//!   are rejected. Large counts never pre-allocate more than
//!   [`MAX_PREALLOC`] elements; a count that outruns the stream fails with a
//!   short read.
//! - **Bounded recursion**: nested lists/compounds are limited by
//!   [`DecodeOptions::max_depth`].
//! - Trailing bytes after the document are left unread.

use crate::document::{Document, NamedRoot, Root};
use crate::error::{NbtError, Result};
use crate::options::DecodeOptions;
use crate::types::{Compound, List, NbtString, Tag, TagType};
use std::io::{self, Read};
use tracing::{debug, trace};

/// Upper bound on elements reserved up front for a counted sequence.
pub const MAX_PREALLOC: usize = 4096;

/// Decode a document from a byte slice with default options.
pub fn decode(bytes: &[u8]) -> Result<Document> {
    read_document(bytes)
}

/// Decode a document from a reader with default options.
pub fn read_document<R: Read>(reader: R) -> Result<Document> {
    Decoder::new(reader).read_document()
}

/// Decode a document from a reader with explicit options.
pub fn read_document_with<R: Read>(reader: R, options: DecodeOptions) -> Result<Document> {
    Decoder::with_options(reader, options).read_document()
}

/// Decode the bare payload of a tag whose type is already known.
pub fn read_payload<R: Read>(reader: R, ty: TagType) -> Result<Tag> {
    Decoder::new(reader).read_payload(ty)
}

/// Stateful reader that tracks nesting depth across recursive calls.
#[derive(Debug)]
pub struct Decoder<R> {
    reader: R,
    options: DecodeOptions,
    depth: usize,
}

impl<R: Read> Decoder<R> {
    pub fn new(reader: R) -> Self {
        Self::with_options(reader, DecodeOptions::default())
    }

    pub fn with_options(reader: R, options: DecodeOptions) -> Self {
        Self {
            reader,
            options,
            depth: 0,
        }
    }

    pub fn options(&self) -> &DecodeOptions {
        &self.options
    }

    pub fn into_inner(self) -> R {
        self.reader
    }

    /// Read a root document: End, or a List/Compound tag followed by a name
    /// and the bare root payload. Any other tag is rejected.
    pub fn read_document(&mut self) -> Result<Document> {
        let byte = self.read_u8()?;
        let (name, root) = match self.tag_type(byte)? {
            TagType::End => {
                debug!("decoded empty NBT document");
                return Ok(Document::empty());
            }
            TagType::Compound => {
                let name = self.read_string()?;
                (name, Root::Compound(self.read_compound()?))
            }
            TagType::List => {
                let name = self.read_string()?;
                (name, Root::List(self.read_list()?))
            }
            other => {
                trace!(tag = %other, "rejected non-container root");
                return Err(NbtError::InvalidTagType(byte));
            }
        };
        debug!(name = %name, root = %root.tag_type(), "decoded NBT document");
        Ok(Document::from(NamedRoot { name, root }))
    }

    /// Read the bare payload of a value of type `ty`.
    pub fn read_payload(&mut self, ty: TagType) -> Result<Tag> {
        Ok(match ty {
            TagType::End => Tag::End,
            TagType::Byte => Tag::Byte(self.read_i8()?),
            TagType::Short => Tag::Short(self.read_i16()?),
            TagType::Int => Tag::Int(self.read_i32()?),
            TagType::Long => Tag::Long(self.read_i64()?),
            TagType::Float => Tag::Float(self.read_f32()?),
            TagType::Double => Tag::Double(self.read_f64()?),
            TagType::ByteArray => Tag::ByteArray(self.read_byte_array()?),
            TagType::String => Tag::String(self.read_string()?),
            TagType::List => Tag::List(self.read_list()?),
            TagType::Compound => Tag::Compound(self.read_compound()?),
            TagType::IntArray => Tag::IntArray(self.read_int_array()?),
            TagType::LongArray => Tag::LongArray(self.read_long_array()?),
        })
    }

    /// Read a bare list: element-type byte, `i32` count, bare elements.
    pub fn read_list(&mut self) -> Result<List> {
        self.nested(|d| {
            let byte = d.read_u8()?;
            let ty = d.tag_type(byte)?;
            let count = d.read_count("list")?;
            Ok(match ty {
                TagType::End => List::End(vec![(); count]),
                TagType::Byte => List::Byte(d.read_numbers(count, i8::from_be_bytes)?),
                TagType::Short => List::Short(d.read_numbers(count, i16::from_be_bytes)?),
                TagType::Int => List::Int(d.read_numbers(count, i32::from_be_bytes)?),
                TagType::Long => List::Long(d.read_numbers(count, i64::from_be_bytes)?),
                TagType::Float => List::Float(d.read_numbers(count, f32::from_be_bytes)?),
                TagType::Double => List::Double(d.read_numbers(count, f64::from_be_bytes)?),
                TagType::ByteArray => List::ByteArray(d.read_each(count, Self::read_byte_array)?),
                TagType::String => List::String(d.read_each(count, Self::read_string)?),
                TagType::List => List::List(d.read_each(count, Self::read_list)?),
                TagType::Compound => List::Compound(d.read_each(count, Self::read_compound)?),
                TagType::IntArray => List::IntArray(d.read_each(count, Self::read_int_array)?),
                TagType::LongArray => List::LongArray(d.read_each(count, Self::read_long_array)?),
            })
        })
    }

    /// Read a bare compound: `(tag, key, payload)` entries until an End tag.
    /// A repeated key overwrites the earlier entry.
    pub fn read_compound(&mut self) -> Result<Compound> {
        self.nested(|d| {
            let mut compound = Compound::new();
            loop {
                let byte = d.read_u8()?;
                let ty = d.tag_type(byte)?;
                if ty == TagType::End {
                    return Ok(compound);
                }
                let key = d.read_string()?;
                let value = d.read_payload(ty)?;
                compound.insert(key, value);
            }
        })
    }

    /// Read a string: `i16` byte length, then that many raw bytes.
    pub fn read_string(&mut self) -> Result<NbtString> {
        let len = self.read_i16()?;
        let len = usize::try_from(len).map_err(|_| NbtError::NegativeLength {
            kind: "string",
            len: i32::from(len),
        })?;
        Ok(NbtString::from_bytes(self.read_bytes(len as u64)?))
    }

    fn read_byte_array(&mut self) -> Result<Vec<i8>> {
        let count = self.read_count("byte array")?;
        let bytes = self.read_bytes(count as u64)?;
        Ok(bytes.into_iter().map(|b| b as i8).collect())
    }

    fn read_int_array(&mut self) -> Result<Vec<i32>> {
        let count = self.read_count("int array")?;
        self.read_numbers(count, i32::from_be_bytes)
    }

    fn read_long_array(&mut self) -> Result<Vec<i64>> {
        let count = self.read_count("long array")?;
        self.read_numbers(count, i64::from_be_bytes)
    }

    /// Run `f` one nesting level deeper, failing once the limit is reached.
    fn nested<T>(&mut self, f: impl FnOnce(&mut Self) -> Result<T>) -> Result<T> {
        if self.depth >= self.options.max_depth {
            return Err(NbtError::DepthLimitExceeded(self.options.max_depth));
        }
        self.depth += 1;
        let result = f(self);
        self.depth -= 1;
        result
    }

    fn tag_type(&self, byte: u8) -> Result<TagType> {
        TagType::try_from(byte).inspect_err(|_| trace!(byte, "rejected unknown tag type"))
    }

    /// `i32` count prefix; negative values are rejected.
    fn read_count(&mut self, kind: &'static str) -> Result<usize> {
        let len = self.read_i32()?;
        usize::try_from(len).map_err(|_| NbtError::NegativeLength { kind, len })
    }

    /// `count` fixed-width big-endian values.
    fn read_numbers<T, const N: usize>(
        &mut self,
        count: usize,
        from_bytes: fn([u8; N]) -> T,
    ) -> Result<Vec<T>> {
        let bytes = self.read_bytes(count as u64 * N as u64)?;
        Ok(bytes
            .chunks_exact(N)
            .map(|chunk| {
                let mut raw = [0u8; N];
                raw.copy_from_slice(chunk);
                from_bytes(raw)
            })
            .collect())
    }

    /// `count` values read one after another by `read_one`.
    fn read_each<T>(
        &mut self,
        count: usize,
        mut read_one: impl FnMut(&mut Self) -> Result<T>,
    ) -> Result<Vec<T>> {
        let mut items = Vec::with_capacity(count.min(MAX_PREALLOC));
        for _ in 0..count {
            items.push(read_one(self)?);
        }
        Ok(items)
    }

    /// Exactly `len` bytes; the buffer grows with the data actually read.
    fn read_bytes(&mut self, len: u64) -> Result<Vec<u8>> {
        let mut buf = Vec::with_capacity(len.min(MAX_PREALLOC as u64) as usize);
        (&mut self.reader).take(len).read_to_end(&mut buf)?;
        if (buf.len() as u64) < len {
            return Err(NbtError::Io(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                format!("expected {len} bytes, stream ended after {}", buf.len()),
            )));
        }
        Ok(buf)
    }

    fn read_array<const N: usize>(&mut self) -> Result<[u8; N]> {
        let mut buf = [0u8; N];
        self.reader.read_exact(&mut buf)?;
        Ok(buf)
    }

    fn read_u8(&mut self) -> Result<u8> {
        Ok(u8::from_be_bytes(self.read_array()?))
    }

    fn read_i8(&mut self) -> Result<i8> {
        Ok(i8::from_be_bytes(self.read_array()?))
    }

    fn read_i16(&mut self) -> Result<i16> {
        Ok(i16::from_be_bytes(self.read_array()?))
    }

    fn read_i32(&mut self) -> Result<i32> {
        Ok(i32::from_be_bytes(self.read_array()?))
    }

    fn read_i64(&mut self) -> Result<i64> {
        Ok(i64::from_be_bytes(self.read_array()?))
    }

    fn read_f32(&mut self) -> Result<f32> {
        Ok(f32::from_be_bytes(self.read_array()?))
    }

    fn read_f64(&mut self) -> Result<f64> {
        Ok(f64::from_be_bytes(self.read_array()?))
    }
}
