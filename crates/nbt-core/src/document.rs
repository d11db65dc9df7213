//! The named top-level value of an NBT stream.
//!
//! A [`Document`] is either empty (encoded as a single End byte) or a name
//! paired with a [`Root`], which can only be a list or a compound.

use crate::error::{NbtError, Result};
use crate::types::{Compound, List, NbtString, Tag, TagType};
use serde::{Deserialize, Serialize};

/// Root payload. Scalars and arrays are not valid roots.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Root {
    List(List),
    Compound(Compound),
}

impl Root {
    pub fn tag_type(&self) -> TagType {
        match self {
            Root::List(_) => TagType::List,
            Root::Compound(_) => TagType::Compound,
        }
    }
}

impl From<List> for Root {
    fn from(list: List) -> Self {
        Root::List(list)
    }
}

impl From<Compound> for Root {
    fn from(compound: Compound) -> Self {
        Root::Compound(compound)
    }
}

impl From<Root> for Tag {
    fn from(root: Root) -> Self {
        match root {
            Root::List(list) => Tag::List(list),
            Root::Compound(compound) => Tag::Compound(compound),
        }
    }
}

/// Name and root value of a non-empty document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NamedRoot {
    pub name: NbtString,
    pub root: Root,
}

/// A decoded (or to-be-encoded) NBT stream.
///
/// Serializes as `null` when empty and as `{"name": .., "root": ..}`
/// otherwise.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Document {
    data: Option<NamedRoot>,
}

impl Document {
    /// The empty document.
    pub fn empty() -> Self {
        Self { data: None }
    }

    pub fn new(name: impl Into<NbtString>, root: impl Into<Root>) -> Self {
        Self {
            data: Some(NamedRoot {
                name: name.into(),
                root: root.into(),
            }),
        }
    }

    pub fn compound(name: impl Into<NbtString>, compound: Compound) -> Self {
        Self::new(name, Root::Compound(compound))
    }

    pub fn list(name: impl Into<NbtString>, list: List) -> Self {
        Self::new(name, Root::List(list))
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_none()
    }

    /// The document name. Fails on the empty document.
    pub fn name(&self) -> Result<&NbtString> {
        self.data
            .as_ref()
            .map(|d| &d.name)
            .ok_or(NbtError::EmptyDocument)
    }

    pub fn root(&self) -> Option<&Root> {
        self.data.as_ref().map(|d| &d.root)
    }

    pub fn root_mut(&mut self) -> Option<&mut Root> {
        self.data.as_mut().map(|d| &mut d.root)
    }

    pub fn data(&self) -> Option<&NamedRoot> {
        self.data.as_ref()
    }

    pub fn into_data(self) -> Option<NamedRoot> {
        self.data
    }

    /// The root value, dropping the name. `None` for the empty document.
    pub fn into_root(self) -> Option<Root> {
        self.data.map(|d| d.root)
    }

    /// Look up `key` in a compound root.
    pub fn get(&self, key: &str) -> Result<&Tag> {
        match self.root() {
            None => Err(NbtError::EmptyDocument),
            Some(Root::Compound(c)) => c
                .get(key.as_bytes())
                .ok_or_else(|| NbtError::MissingKey(key.to_string())),
            Some(Root::List(_)) => Err(NbtError::TypeMismatch {
                expected: TagType::Compound,
                found: TagType::List,
            }),
        }
    }

    pub fn get_mut(&mut self, key: &str) -> Result<&mut Tag> {
        match self.root_mut() {
            None => Err(NbtError::EmptyDocument),
            Some(Root::Compound(c)) => c
                .get_mut(key.as_bytes())
                .ok_or_else(|| NbtError::MissingKey(key.to_string())),
            Some(Root::List(_)) => Err(NbtError::TypeMismatch {
                expected: TagType::Compound,
                found: TagType::List,
            }),
        }
    }

    /// Encode to bytes. See [`crate::encoder::encode`].
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        crate::encoder::encode(self)
    }

    /// Decode from bytes. See [`crate::decoder::decode`].
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        crate::decoder::decode(bytes)
    }
}

impl From<NamedRoot> for Document {
    fn from(data: NamedRoot) -> Self {
        Self { data: Some(data) }
    }
}
