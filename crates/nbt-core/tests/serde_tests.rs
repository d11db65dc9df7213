//! JSON interchange form of the tree (externally tagged serde enums).

use nbt_core::{Compound, Document, List, NbtString, Tag};
use serde_json::json;

fn sample_doc() -> Document {
    let mut c = Compound::new();
    c.insert("id".into(), Tag::Byte(5));
    c.insert("tags".into(), Tag::List(List::String(vec!["a".into()])));
    Document::compound("root", c)
}

#[test]
fn document_serializes_as_name_and_root() {
    let value = serde_json::to_value(sample_doc()).unwrap();
    assert_eq!(
        value,
        json!({
            "name": "root",
            "root": {"Compound": {
                "id": {"Byte": 5},
                "tags": {"List": {"String": ["a"]}}
            }}
        })
    );
}

#[test]
fn empty_document_serializes_as_null() {
    assert_eq!(serde_json::to_value(Document::empty()).unwrap(), json!(null));
    let doc: Document = serde_json::from_value(json!(null)).unwrap();
    assert!(doc.is_empty());
}

#[test]
fn document_json_roundtrip() {
    let doc = sample_doc();
    let text = serde_json::to_string(&doc).unwrap();
    let back: Document = serde_json::from_str(&text).unwrap();
    assert_eq!(back, doc);
}

#[test]
fn non_utf8_string_serializes_as_bytes() {
    let tag = Tag::String(NbtString::from_bytes(vec![0xFF, 0x00]));
    let value = serde_json::to_value(&tag).unwrap();
    assert_eq!(value, json!({"String": [255, 0]}));
    let back: Tag = serde_json::from_value(value).unwrap();
    assert_eq!(back, tag);
}

#[test]
fn end_list_serializes_as_nulls() {
    let value = serde_json::to_value(Tag::List(List::End(vec![(), ()]))).unwrap();
    assert_eq!(value, json!({"List": {"End": [null, null]}}));
}

#[test]
fn end_tag_serializes_as_unit_variant() {
    assert_eq!(serde_json::to_value(Tag::End).unwrap(), json!("End"));
}
