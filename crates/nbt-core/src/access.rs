//! Typed navigation over a decoded tree.
//!
//! [`NbtValue`] ties each Rust payload type to its [`TagType`], so a single
//! generic accessor serves all thirteen tag kinds:
//!
//! ```
//! use nbt_core::{Compound, List, Tag};
//!
//! let mut c = Compound::new();
//! c.insert("pos".into(), Tag::List(List::Double(vec![1.0, 64.0, -3.5])));
//! let tag = Tag::Compound(c);
//!
//! let pos = tag.get("pos").unwrap();
//! assert_eq!(*pos.at::<f64>(1).unwrap(), 64.0);
//! assert!(pos.at::<i32>(0).is_err());
//! ```

use crate::error::{NbtError, Result};
use crate::types::{Compound, List, NbtString, Tag, TagType};

/// A Rust type that is the payload of exactly one tag kind.
pub trait NbtValue: Sized {
    /// The tag kind whose payload is `Self`.
    const TAG_TYPE: TagType;

    fn from_tag(tag: &Tag) -> Option<&Self>;
    fn from_tag_mut(tag: &mut Tag) -> Option<&mut Self>;
    fn from_list(list: &List) -> Option<&[Self]>;
    fn from_list_mut(list: &mut List) -> Option<&mut Vec<Self>>;
}

macro_rules! impl_nbt_value {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl NbtValue for $ty {
                const TAG_TYPE: TagType = TagType::$variant;

                fn from_tag(tag: &Tag) -> Option<&Self> {
                    match tag {
                        Tag::$variant(v) => Some(v),
                        _ => None,
                    }
                }

                fn from_tag_mut(tag: &mut Tag) -> Option<&mut Self> {
                    match tag {
                        Tag::$variant(v) => Some(v),
                        _ => None,
                    }
                }

                fn from_list(list: &List) -> Option<&[Self]> {
                    match list {
                        List::$variant(v) => Some(v.as_slice()),
                        _ => None,
                    }
                }

                fn from_list_mut(list: &mut List) -> Option<&mut Vec<Self>> {
                    match list {
                        List::$variant(v) => Some(v),
                        _ => None,
                    }
                }
            }
        )*
    };
}

impl_nbt_value! {
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

/// `End` has no payload, so `()` stands in for it.
impl NbtValue for () {
    const TAG_TYPE: TagType = TagType::End;

    fn from_tag(tag: &Tag) -> Option<&Self> {
        match tag {
            Tag::End => Some(&()),
            _ => None,
        }
    }

    fn from_tag_mut(tag: &mut Tag) -> Option<&mut Self> {
        match tag {
            Tag::End => Some(Box::leak(Box::new(()))),
            _ => None,
        }
    }

    fn from_list(list: &List) -> Option<&[Self]> {
        match list {
            List::End(v) => Some(v.as_slice()),
            _ => None,
        }
    }

    fn from_list_mut(list: &mut List) -> Option<&mut Vec<Self>> {
        match list {
            List::End(v) => Some(v),
            _ => None,
        }
    }
}

impl Tag {
    /// The payload, if the active variant is `T`'s tag kind.
    pub fn value<T: NbtValue>(&self) -> Result<&T> {
        T::from_tag(self).ok_or(NbtError::TypeMismatch {
            expected: T::TAG_TYPE,
            found: self.tag_type(),
        })
    }

    pub fn value_mut<T: NbtValue>(&mut self) -> Result<&mut T> {
        let found = self.tag_type();
        T::from_tag_mut(self).ok_or(NbtError::TypeMismatch {
            expected: T::TAG_TYPE,
            found,
        })
    }

    /// Compound lookup. Fails if this is not a compound or `key` is absent.
    pub fn get(&self, key: &str) -> Result<&Tag> {
        self.value::<Compound>()?
            .get(key.as_bytes())
            .ok_or_else(|| NbtError::MissingKey(key.to_string()))
    }

    pub fn get_mut(&mut self, key: &str) -> Result<&mut Tag> {
        self.value_mut::<Compound>()?
            .get_mut(key.as_bytes())
            .ok_or_else(|| NbtError::MissingKey(key.to_string()))
    }

    /// Elements of a list of `T`.
    pub fn data<T: NbtValue>(&self) -> Result<&[T]> {
        self.value::<List>()?.data()
    }

    /// Element `index` of a list of `T`. Fails if this is not a list, the
    /// element type is not `T`, or `index` is out of range.
    pub fn at<T: NbtValue>(&self, index: usize) -> Result<&T> {
        self.value::<List>()?.at(index)
    }

    pub fn at_mut<T: NbtValue>(&mut self, index: usize) -> Result<&mut T> {
        self.value_mut::<List>()?.at_mut(index)
    }
}

impl List {
    pub fn data<T: NbtValue>(&self) -> Result<&[T]> {
        T::from_list(self).ok_or(NbtError::TypeMismatch {
            expected: T::TAG_TYPE,
            found: self.element_type(),
        })
    }

    pub fn data_mut<T: NbtValue>(&mut self) -> Result<&mut Vec<T>> {
        let found = self.element_type();
        T::from_list_mut(self).ok_or(NbtError::TypeMismatch {
            expected: T::TAG_TYPE,
            found,
        })
    }

    pub fn at<T: NbtValue>(&self, index: usize) -> Result<&T> {
        let items = self.data::<T>()?;
        items.get(index).ok_or(NbtError::IndexOutOfRange {
            index,
            len: items.len(),
        })
    }

    pub fn at_mut<T: NbtValue>(&mut self, index: usize) -> Result<&mut T> {
        let items = self.data_mut::<T>()?;
        let len = items.len();
        items
            .get_mut(index)
            .ok_or(NbtError::IndexOutOfRange { index, len })
    }
}
