//! NBT encoder: walks an in-memory tree and writes big-endian wire bytes.
//!
//! Two contexts exist on the wire:
//!
//! - **tagged**: a type-tag byte precedes the payload (compound entries, the
//!   document root). The caller writes the tag.
//! - **bare**: only the payload is written, because the type is already
//!   fixed by context (list elements, or after a tag the caller wrote).
//!
//! Every function here writes bare payloads except [`write_document`], which
//! writes the root tag and name.
//!
//! # Example
//! ```
//! use nbt_core::{encoder::write_payload, List, Tag};
//!
//! let mut out = Vec::new();
//! write_payload(&mut out, &Tag::List(List::Int(vec![1, 2, 3]))).unwrap();
//! assert_eq!(
//!     out,
//!     [3, 0, 0, 0, 3, 0, 0, 0, 1, 0, 0, 0, 2, 0, 0, 0, 3]
//! );
//! ```

use crate::document::{Document, Root};
use crate::error::{NbtError, Result};
use crate::types::{Compound, List, NbtString, Tag, TagType};
use std::io::Write;
use tracing::debug;

/// Encode a document into a new byte vector.
pub fn encode(document: &Document) -> Result<Vec<u8>> {
    let mut out = Vec::new();
    write_document(&mut out, document)?;
    debug!(bytes = out.len(), "encoded NBT document");
    Ok(out)
}

/// Write a document: the root tag, the name and the root payload, or a
/// single End byte for the empty document.
pub fn write_document<W: Write + ?Sized>(w: &mut W, document: &Document) -> Result<()> {
    let Some(data) = document.data() else {
        return write_tag_type(w, TagType::End);
    };
    write_tag_type(w, data.root.tag_type())?;
    write_string(w, &data.name)?;
    match &data.root {
        Root::List(list) => write_list(w, list),
        Root::Compound(compound) => write_compound(w, compound),
    }
}

/// Write the bare payload of `tag`. No type-tag byte is written.
pub fn write_payload<W: Write + ?Sized>(w: &mut W, tag: &Tag) -> Result<()> {
    match tag {
        Tag::End => Ok(()),
        Tag::Byte(v) => write_all(w, &v.to_be_bytes()),
        Tag::Short(v) => write_all(w, &v.to_be_bytes()),
        Tag::Int(v) => write_all(w, &v.to_be_bytes()),
        Tag::Long(v) => write_all(w, &v.to_be_bytes()),
        Tag::Float(v) => write_all(w, &v.to_be_bytes()),
        Tag::Double(v) => write_all(w, &v.to_be_bytes()),
        Tag::ByteArray(v) => write_byte_array(w, v),
        Tag::String(s) => write_string(w, s),
        Tag::List(list) => write_list(w, list),
        Tag::Compound(compound) => write_compound(w, compound),
        Tag::IntArray(v) => write_int_array(w, v),
        Tag::LongArray(v) => write_long_array(w, v),
    }
}

/// Write a list: element-type byte, `i32` count, then each element bare.
pub fn write_list<W: Write + ?Sized>(w: &mut W, list: &List) -> Result<()> {
    write_tag_type(w, list.element_type())?;
    match list {
        List::End(items) => write_count(w, items.len()),
        List::Byte(items) => write_numbers(w, items, i8::to_be_bytes),
        List::Short(items) => write_numbers(w, items, i16::to_be_bytes),
        List::Int(items) => write_numbers(w, items, i32::to_be_bytes),
        List::Long(items) => write_numbers(w, items, i64::to_be_bytes),
        List::Float(items) => write_numbers(w, items, f32::to_be_bytes),
        List::Double(items) => write_numbers(w, items, f64::to_be_bytes),
        List::ByteArray(items) => write_each(w, items, |w, v| write_byte_array(w, v)),
        List::String(items) => write_each(w, items, |w, s| write_string(w, s)),
        List::List(items) => write_each(w, items, |w, l| write_list(w, l)),
        List::Compound(items) => write_each(w, items, |w, c| write_compound(w, c)),
        List::IntArray(items) => write_each(w, items, |w, v| write_int_array(w, v)),
        List::LongArray(items) => write_each(w, items, |w, v| write_long_array(w, v)),
    }
}

/// Write a compound: `(tag, key, payload)` per entry in key order, then End.
///
/// An entry holding `Tag::End` fails with [`NbtError::EndInCompound`].
pub fn write_compound<W: Write + ?Sized>(w: &mut W, compound: &Compound) -> Result<()> {
    for (key, tag) in compound {
        if let Tag::End = tag {
            return Err(NbtError::EndInCompound(key.to_string_lossy().into_owned()));
        }
        write_tag_type(w, tag.tag_type())?;
        write_string(w, key)?;
        write_payload(w, tag)?;
    }
    write_tag_type(w, TagType::End)
}

/// Write a string: `i16` byte length, then the raw bytes.
pub fn write_string<W: Write + ?Sized>(w: &mut W, s: &NbtString) -> Result<()> {
    let len = i16::try_from(s.len()).map_err(|_| NbtError::StringTooLong(s.len()))?;
    write_all(w, &len.to_be_bytes())?;
    write_all(w, s.as_bytes())
}

fn write_byte_array<W: Write + ?Sized>(w: &mut W, v: &[i8]) -> Result<()> {
    write_count(w, v.len())?;
    let bytes: Vec<u8> = v.iter().map(|&b| b as u8).collect();
    write_all(w, &bytes)
}

fn write_int_array<W: Write + ?Sized>(w: &mut W, v: &[i32]) -> Result<()> {
    write_numbers(w, v, i32::to_be_bytes)
}

fn write_long_array<W: Write + ?Sized>(w: &mut W, v: &[i64]) -> Result<()> {
    write_numbers(w, v, i64::to_be_bytes)
}

/// Count followed by fixed-width big-endian elements, buffered into one write.
fn write_numbers<W, T, const N: usize>(
    w: &mut W,
    items: &[T],
    to_bytes: fn(T) -> [u8; N],
) -> Result<()>
where
    W: Write + ?Sized,
    T: Copy,
{
    write_count(w, items.len())?;
    let mut buf = Vec::with_capacity(items.len() * N);
    for &item in items {
        buf.extend_from_slice(&to_bytes(item));
    }
    write_all(w, &buf)
}

/// Count followed by each element through `write_one`.
fn write_each<W, T, F>(w: &mut W, items: &[T], mut write_one: F) -> Result<()>
where
    W: Write + ?Sized,
    F: FnMut(&mut W, &T) -> Result<()>,
{
    write_count(w, items.len())?;
    for item in items {
        write_one(w, item)?;
    }
    Ok(())
}

fn write_count<W: Write + ?Sized>(w: &mut W, len: usize) -> Result<()> {
    let count = i32::try_from(len).map_err(|_| NbtError::LengthTooLarge(len))?;
    write_all(w, &count.to_be_bytes())
}

fn write_tag_type<W: Write + ?Sized>(w: &mut W, ty: TagType) -> Result<()> {
    write_all(w, &[ty.id()])
}

fn write_all<W: Write + ?Sized>(w: &mut W, bytes: &[u8]) -> Result<()> {
    w.write_all(bytes)?;
    Ok(())
}
