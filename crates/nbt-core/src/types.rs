//! The NBT value model: the closed set of tag kinds and how they nest.
//!
//! [`Tag`] is a sum type with one arm per wire type. [`List`] is the
//! homogeneous counterpart: one arm per element type, each holding a `Vec`
//! of bare payloads. A [`Compound`] is a `BTreeMap`, so iteration (and
//! therefore encoding) order is the key order and is stable for any given
//! tree.

use crate::error::NbtError;
use serde::de::{self, SeqAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::borrow::{Borrow, Cow};
use std::collections::BTreeMap;
use std::fmt;

/// Wire discriminant of a tag. The numeric value is the type-tag byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum TagType {
    End = 0,
    Byte = 1,
    Short = 2,
    Int = 3,
    Long = 4,
    Float = 5,
    Double = 6,
    ByteArray = 7,
    String = 8,
    List = 9,
    Compound = 10,
    IntArray = 11,
    LongArray = 12,
}

impl TagType {
    /// Every tag type, in wire order.
    pub const ALL: [TagType; 13] = [
        TagType::End,
        TagType::Byte,
        TagType::Short,
        TagType::Int,
        TagType::Long,
        TagType::Float,
        TagType::Double,
        TagType::ByteArray,
        TagType::String,
        TagType::List,
        TagType::Compound,
        TagType::IntArray,
        TagType::LongArray,
    ];

    /// The type-tag byte written on the wire.
    pub fn id(self) -> u8 {
        self as u8
    }

    /// Human-readable name, e.g. `"Compound"`.
    pub fn name(self) -> &'static str {
        match self {
            TagType::End => "End",
            TagType::Byte => "Byte",
            TagType::Short => "Short",
            TagType::Int => "Int",
            TagType::Long => "Long",
            TagType::Float => "Float",
            TagType::Double => "Double",
            TagType::ByteArray => "ByteArray",
            TagType::String => "String",
            TagType::List => "List",
            TagType::Compound => "Compound",
            TagType::IntArray => "IntArray",
            TagType::LongArray => "LongArray",
        }
    }
}

/// The only mapping from wire bytes to tag types. Anything outside `0..=12`
/// is rejected.
impl TryFrom<u8> for TagType {
    type Error = NbtError;

    fn try_from(id: u8) -> Result<Self, Self::Error> {
        TagType::ALL
            .get(usize::from(id))
            .copied()
            .ok_or(NbtError::InvalidTagType(id))
    }
}

impl From<TagType> for u8 {
    fn from(ty: TagType) -> u8 {
        ty.id()
    }
}

impl fmt::Display for TagType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Raw NBT string payload.
///
/// The wire format carries bytes, not validated text, so the payload is kept
/// as bytes and round-trips exactly. Use [`NbtString::as_str`] when the
/// content is known to be UTF-8.
#[derive(Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NbtString(Vec<u8>);

impl NbtString {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn from_bytes(bytes: impl Into<Vec<u8>>) -> Self {
        Self(bytes.into())
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.0
    }

    /// The payload as text, or `None` if it is not valid UTF-8.
    pub fn as_str(&self) -> Option<&str> {
        std::str::from_utf8(&self.0).ok()
    }

    pub fn to_string_lossy(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.0)
    }

    /// Length in bytes (the value written in the length prefix).
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Borrow<[u8]> for NbtString {
    fn borrow(&self) -> &[u8] {
        &self.0
    }
}

impl From<&str> for NbtString {
    fn from(s: &str) -> Self {
        Self(s.as_bytes().to_vec())
    }
}

impl From<String> for NbtString {
    fn from(s: String) -> Self {
        Self(s.into_bytes())
    }
}

impl From<Vec<u8>> for NbtString {
    fn from(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }
}

impl From<&[u8]> for NbtString {
    fn from(bytes: &[u8]) -> Self {
        Self(bytes.to_vec())
    }
}

impl PartialEq<str> for NbtString {
    fn eq(&self, other: &str) -> bool {
        self.0 == other.as_bytes()
    }
}

impl PartialEq<&str> for NbtString {
    fn eq(&self, other: &&str) -> bool {
        self.0 == other.as_bytes()
    }
}

impl fmt::Debug for NbtString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.as_str() {
            Some(s) => fmt::Debug::fmt(s, f),
            None => write!(f, "b{:?}", self.0),
        }
    }
}

impl fmt::Display for NbtString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_string_lossy())
    }
}

/// Serializes as a string when the payload is UTF-8, as raw bytes otherwise.
impl Serialize for NbtString {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.as_str() {
            Some(s) => serializer.serialize_str(s),
            None => serializer.serialize_bytes(&self.0),
        }
    }
}

impl<'de> Deserialize<'de> for NbtString {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(NbtStringVisitor)
    }
}

struct NbtStringVisitor;

impl<'de> Visitor<'de> for NbtStringVisitor {
    type Value = NbtString;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a string or a sequence of bytes")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<NbtString, E> {
        Ok(NbtString::from(v))
    }

    fn visit_string<E: de::Error>(self, v: String) -> Result<NbtString, E> {
        Ok(NbtString::from(v))
    }

    fn visit_bytes<E: de::Error>(self, v: &[u8]) -> Result<NbtString, E> {
        Ok(NbtString::from(v))
    }

    fn visit_byte_buf<E: de::Error>(self, v: Vec<u8>) -> Result<NbtString, E> {
        Ok(NbtString::from(v))
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<NbtString, A::Error> {
        let mut bytes = Vec::with_capacity(seq.size_hint().unwrap_or(0));
        while let Some(b) = seq.next_element::<u8>()? {
            bytes.push(b);
        }
        Ok(NbtString(bytes))
    }
}

/// Keyed, heterogeneous collection of tags. Keys are unique; iteration
/// follows key order.
pub type Compound = BTreeMap<NbtString, Tag>;

/// A single typed value node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Tag {
    End,
    Byte(i8),
    Short(i16),
    Int(i32),
    Long(i64),
    Float(f32),
    Double(f64),
    ByteArray(Vec<i8>),
    String(NbtString),
    List(List),
    Compound(Compound),
    IntArray(Vec<i32>),
    LongArray(Vec<i64>),
}

impl Tag {
    /// The active variant's wire discriminant.
    pub fn tag_type(&self) -> TagType {
        match self {
            Tag::End => TagType::End,
            Tag::Byte(_) => TagType::Byte,
            Tag::Short(_) => TagType::Short,
            Tag::Int(_) => TagType::Int,
            Tag::Long(_) => TagType::Long,
            Tag::Float(_) => TagType::Float,
            Tag::Double(_) => TagType::Double,
            Tag::ByteArray(_) => TagType::ByteArray,
            Tag::String(_) => TagType::String,
            Tag::List(_) => TagType::List,
            Tag::Compound(_) => TagType::Compound,
            Tag::IntArray(_) => TagType::IntArray,
            Tag::LongArray(_) => TagType::LongArray,
        }
    }
}

/// A homogeneous sequence. The element type is recorded once, by the active
/// variant, and written once in the list header.
///
/// `End` lists carry only a count; their elements have no payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum List {
    End(Vec<()>),
    Byte(Vec<i8>),
    Short(Vec<i16>),
    Int(Vec<i32>),
    Long(Vec<i64>),
    Float(Vec<f32>),
    Double(Vec<f64>),
    ByteArray(Vec<Vec<i8>>),
    String(Vec<NbtString>),
    List(Vec<List>),
    Compound(Vec<Compound>),
    IntArray(Vec<Vec<i32>>),
    LongArray(Vec<Vec<i64>>),
}

impl List {
    /// An empty list with element type `End`.
    pub fn new() -> Self {
        List::End(Vec::new())
    }

    /// The declared element type.
    pub fn element_type(&self) -> TagType {
        match self {
            List::End(_) => TagType::End,
            List::Byte(_) => TagType::Byte,
            List::Short(_) => TagType::Short,
            List::Int(_) => TagType::Int,
            List::Long(_) => TagType::Long,
            List::Float(_) => TagType::Float,
            List::Double(_) => TagType::Double,
            List::ByteArray(_) => TagType::ByteArray,
            List::String(_) => TagType::String,
            List::List(_) => TagType::List,
            List::Compound(_) => TagType::Compound,
            List::IntArray(_) => TagType::IntArray,
            List::LongArray(_) => TagType::LongArray,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            List::End(v) => v.len(),
            List::Byte(v) => v.len(),
            List::Short(v) => v.len(),
            List::Int(v) => v.len(),
            List::Long(v) => v.len(),
            List::Float(v) => v.len(),
            List::Double(v) => v.len(),
            List::ByteArray(v) => v.len(),
            List::String(v) => v.len(),
            List::List(v) => v.len(),
            List::Compound(v) => v.len(),
            List::IntArray(v) => v.len(),
            List::LongArray(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Element `index` wrapped in a [`Tag`] of the list's element type.
    pub fn get(&self, index: usize) -> Option<Tag> {
        match self {
            List::End(v) => v.get(index).map(|_| Tag::End),
            List::Byte(v) => v.get(index).map(|&x| Tag::Byte(x)),
            List::Short(v) => v.get(index).map(|&x| Tag::Short(x)),
            List::Int(v) => v.get(index).map(|&x| Tag::Int(x)),
            List::Long(v) => v.get(index).map(|&x| Tag::Long(x)),
            List::Float(v) => v.get(index).map(|&x| Tag::Float(x)),
            List::Double(v) => v.get(index).map(|&x| Tag::Double(x)),
            List::ByteArray(v) => v.get(index).cloned().map(Tag::ByteArray),
            List::String(v) => v.get(index).cloned().map(Tag::String),
            List::List(v) => v.get(index).cloned().map(Tag::List),
            List::Compound(v) => v.get(index).cloned().map(Tag::Compound),
            List::IntArray(v) => v.get(index).cloned().map(Tag::IntArray),
            List::LongArray(v) => v.get(index).cloned().map(Tag::LongArray),
        }
    }
}

impl Default for List {
    fn default() -> Self {
        List::new()
    }
}

macro_rules! impl_from_payload {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<$ty> for Tag {
                fn from(value: $ty) -> Self {
                    Tag::$variant(value)
                }
            }

            impl From<Vec<$ty>> for List {
                fn from(items: Vec<$ty>) -> Self {
                    List::$variant(items)
                }
            }
        )*
    };
}

impl_from_payload! {
    i8 => Byte,
    i16 => Short,
    i32 => Int,
    i64 => Long,
    f32 => Float,
    f64 => Double,
    Vec<i8> => ByteArray,
    NbtString => String,
    List => List,
    Compound => Compound,
    Vec<i32> => IntArray,
    Vec<i64> => LongArray,
}

impl From<&str> for Tag {
    fn from(s: &str) -> Self {
        Tag::String(NbtString::from(s))
    }
}

impl From<String> for Tag {
    fn from(s: String) -> Self {
        Tag::String(NbtString::from(s))
    }
}

impl From<Vec<()>> for List {
    fn from(items: Vec<()>) -> Self {
        List::End(items)
    }
}
