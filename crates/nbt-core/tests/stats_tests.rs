use nbt_core::{Compound, Document, List, Tag, TagType, TreeStats};

#[test]
fn empty_document_has_no_tags() {
    let stats = TreeStats::of_document(&Document::empty());
    assert_eq!(stats.total(), 0);
    assert_eq!(stats.max_depth(), 0);
}

#[test]
fn flat_compound() {
    let mut c = Compound::new();
    c.insert("a".into(), Tag::Byte(1));
    c.insert("b".into(), Tag::IntArray(vec![1, 2, 3]));
    let stats = TreeStats::of_document(&Document::compound("", c));
    assert_eq!(stats.total(), 3);
    assert_eq!(stats.count(TagType::Compound), 1);
    assert_eq!(stats.count(TagType::IntArray), 1);
    assert_eq!(stats.max_depth(), 2);
}

#[test]
fn list_elements_count_as_tags() {
    let doc = Document::list("", List::Int(vec![1, 2, 3]));
    let stats = TreeStats::of_document(&doc);
    assert_eq!(stats.count(TagType::List), 1);
    assert_eq!(stats.count(TagType::Int), 3);
    assert_eq!(stats.max_depth(), 2);
}

#[test]
fn nested_lists_and_compounds() {
    let mut leaf = Compound::new();
    leaf.insert("x".into(), Tag::List(List::Byte(vec![1])));
    let doc = Document::list("", List::List(vec![List::Compound(vec![leaf])]));
    let stats = TreeStats::of_document(&doc);
    // List → List → Compound → List → Byte
    assert_eq!(stats.max_depth(), 5);
    assert_eq!(stats.count(TagType::List), 3);
    let by_type: Vec<_> = stats.by_type().collect();
    assert_eq!(
        by_type,
        [
            (TagType::Byte, 1),
            (TagType::List, 3),
            (TagType::Compound, 1)
        ]
    );
}

#[test]
fn single_tag() {
    let stats = TreeStats::of_tag(&Tag::Long(1));
    assert_eq!(stats.total(), 1);
    assert_eq!(stats.max_depth(), 1);
}
