//! Structural statistics for a decoded tree: tag counts and nesting depth.
//!
//! List elements count as tags of the list's element type; array elements do
//! not (an `IntArray` is one tag). The root value sits at depth 1.

use crate::document::{Document, Root};
use crate::types::{Compound, List, Tag, TagType};

/// Tag counts per type plus the deepest nesting level reached.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TreeStats {
    counts: [usize; 13],
    max_depth: usize,
}

impl TreeStats {
    /// Statistics for a whole document. The empty document has no tags.
    pub fn of_document(document: &Document) -> Self {
        let mut stats = Self::default();
        match document.root() {
            Some(Root::Compound(c)) => stats.visit_compound(c, 1),
            Some(Root::List(l)) => stats.visit_list(l, 1),
            None => {}
        }
        stats
    }

    /// Statistics for a single tag treated as the root.
    pub fn of_tag(tag: &Tag) -> Self {
        let mut stats = Self::default();
        stats.visit_tag(tag, 1);
        stats
    }

    /// Number of tags of type `ty`.
    pub fn count(&self, ty: TagType) -> usize {
        self.counts[usize::from(ty.id())]
    }

    /// Total number of tags.
    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }

    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// `(type, count)` for every type that occurs, in wire order.
    pub fn by_type(&self) -> impl Iterator<Item = (TagType, usize)> + '_ {
        TagType::ALL
            .iter()
            .map(|&ty| (ty, self.count(ty)))
            .filter(|&(_, n)| n > 0)
    }

    fn record(&mut self, ty: TagType, depth: usize) {
        self.counts[usize::from(ty.id())] += 1;
        self.max_depth = self.max_depth.max(depth);
    }

    fn visit_tag(&mut self, tag: &Tag, depth: usize) {
        match tag {
            Tag::List(l) => self.visit_list(l, depth),
            Tag::Compound(c) => self.visit_compound(c, depth),
            other => self.record(other.tag_type(), depth),
        }
    }

    fn visit_compound(&mut self, compound: &Compound, depth: usize) {
        self.record(TagType::Compound, depth);
        for tag in compound.values() {
            self.visit_tag(tag, depth + 1);
        }
    }

    fn visit_list(&mut self, list: &List, depth: usize) {
        self.record(TagType::List, depth);
        match list {
            List::List(items) => {
                for l in items {
                    self.visit_list(l, depth + 1);
                }
            }
            List::Compound(items) => {
                for c in items {
                    self.visit_compound(c, depth + 1);
                }
            }
            leaf => {
                for _ in 0..leaf.len() {
                    self.record(leaf.element_type(), depth + 1);
                }
            }
        }
    }
}
