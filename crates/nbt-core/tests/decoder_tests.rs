use nbt_core::{
    decode, read_document_with, read_payload, DecodeOptions, Decoder, List, NbtError, Tag,
    TagType,
};
use std::io::ErrorKind;

/// Helper: decode a bare payload from a byte slice.
fn payload(bytes: &[u8], ty: TagType) -> nbt_core::Result<Tag> {
    read_payload(bytes, ty)
}

/// Helper: assert the error is a short read.
fn assert_short_read(err: NbtError) {
    match err {
        NbtError::Io(e) => assert_eq!(e.kind(), ErrorKind::UnexpectedEof),
        other => panic!("expected short read, got {other:?}"),
    }
}

// ============================================================================
// Documents
// ============================================================================

#[test]
fn decode_compound_document() {
    let doc = decode(&[0x0A, 0x00, 0x00, 0x01, 0x00, 0x02, b'i', b'd', 0x05, 0x00]).unwrap();
    assert_eq!(doc.name().unwrap(), "");
    assert_eq!(doc.get("id").unwrap(), &Tag::Byte(5));
}

#[test]
fn decode_named_list_document() {
    let doc = decode(&[0x09, 0x00, 0x02, b'h', b'i', 0x01, 0, 0, 0, 2, 0x05, 0xFB]).unwrap();
    assert_eq!(doc.name().unwrap(), "hi");
    match doc.root() {
        Some(nbt_core::Root::List(list)) => assert_eq!(list, &List::Byte(vec![5, -5])),
        other => panic!("expected list root, got {other:?}"),
    }
}

#[test]
fn decode_end_byte_is_empty_document() {
    let doc = decode(&[0x00]).unwrap();
    assert!(doc.is_empty());
    assert!(matches!(doc.name().unwrap_err(), NbtError::EmptyDocument));
}

#[test]
fn decode_empty_stream_is_short_read() {
    assert_short_read(decode(&[]).unwrap_err());
}

#[test]
fn decode_scalar_root_rejected() {
    for tag in [1u8, 2, 3, 4, 5, 6, 7, 8, 11, 12] {
        let err = decode(&[tag, 0x00, 0x00]).unwrap_err();
        assert!(
            matches!(err, NbtError::InvalidTagType(t) if t == tag),
            "tag {tag}: {err:?}"
        );
    }
}

#[test]
fn decode_unknown_root_tag_rejected() {
    let err = decode(&[0x0D]).unwrap_err();
    assert!(matches!(err, NbtError::InvalidTagType(0x0D)));
}

#[test]
fn decode_truncated_document_is_short_read() {
    // Compound root, name, one Int entry missing its last byte.
    let bytes = [0x0A, 0x00, 0x00, 0x03, 0x00, 0x01, b'n', 0x00, 0x00, 0x00];
    assert_short_read(decode(&bytes).unwrap_err());
}

#[test]
fn decode_missing_compound_terminator_is_short_read() {
    let bytes = [0x0A, 0x00, 0x00, 0x01, 0x00, 0x01, b'a', 0x01];
    assert_short_read(decode(&bytes).unwrap_err());
}

#[test]
fn decode_ignores_trailing_bytes() {
    let doc = decode(&[0x0A, 0x00, 0x00, 0x00, 0xDE, 0xAD]).unwrap();
    assert_eq!(doc.name().unwrap(), "");
}

// ============================================================================
// Payloads
// ============================================================================

#[test]
fn decode_scalars_big_endian() {
    assert_eq!(payload(&[0x80][..], TagType::Byte).unwrap(), Tag::Byte(-128));
    assert_eq!(
        payload(&[0x12, 0x34][..], TagType::Short).unwrap(),
        Tag::Short(0x1234)
    );
    assert_eq!(
        payload(&[0xFF, 0xFF, 0xFF, 0xFE][..], TagType::Int).unwrap(),
        Tag::Int(-2)
    );
    assert_eq!(
        payload(&[0, 0, 0, 0, 0, 0, 1, 0][..], TagType::Long).unwrap(),
        Tag::Long(256)
    );
    assert_eq!(
        payload(&[0x3F, 0x80, 0, 0][..], TagType::Float).unwrap(),
        Tag::Float(1.0)
    );
    assert_eq!(
        payload(&[0xC0, 0, 0, 0, 0, 0, 0, 0][..], TagType::Double).unwrap(),
        Tag::Double(-2.0)
    );
}

#[test]
fn decode_end_payload_reads_nothing() {
    assert_eq!(payload(&[][..], TagType::End).unwrap(), Tag::End);
}

#[test]
fn decode_arrays() {
    assert_eq!(
        payload(&[0, 0, 0, 2, 0x01, 0xFF][..], TagType::ByteArray).unwrap(),
        Tag::ByteArray(vec![1, -1])
    );
    assert_eq!(
        payload(&[0, 0, 0, 1, 0, 0, 1, 0][..], TagType::IntArray).unwrap(),
        Tag::IntArray(vec![256])
    );
    assert_eq!(
        payload(&[0, 0, 0, 0][..], TagType::LongArray).unwrap(),
        Tag::LongArray(vec![])
    );
}

#[test]
fn decode_negative_array_count_rejected() {
    let err = payload(&[0xFF, 0xFF, 0xFF, 0xFF][..], TagType::IntArray).unwrap_err();
    assert!(matches!(
        err,
        NbtError::NegativeLength {
            kind: "int array",
            len: -1
        }
    ));
}

#[test]
fn decode_negative_string_length_rejected() {
    let err = payload(&[0x80, 0x00][..], TagType::String).unwrap_err();
    assert!(matches!(
        err,
        NbtError::NegativeLength {
            kind: "string",
            len: -32768
        }
    ));
}

#[test]
fn decode_non_utf8_string_kept_as_bytes() {
    let tag = payload(&[0x00, 0x02, 0xC0, 0x80][..], TagType::String).unwrap();
    match tag {
        Tag::String(s) => {
            assert_eq!(s.as_bytes(), [0xC0, 0x80]);
            assert_eq!(s.as_str(), None);
        }
        other => panic!("expected string, got {other:?}"),
    }
}

// ============================================================================
// Lists
// ============================================================================

#[test]
fn decode_int_list() {
    let bytes = [0x03, 0, 0, 0, 3, 0, 0, 0, 1, 0, 0, 0, 2, 0, 0, 0, 3];
    assert_eq!(
        payload(&bytes[..], TagType::List).unwrap(),
        Tag::List(List::Int(vec![1, 2, 3]))
    );
}

#[test]
fn decode_end_list_with_count() {
    assert_eq!(
        payload(&[0x00, 0, 0, 0, 2][..], TagType::List).unwrap(),
        Tag::List(List::End(vec![(), ()]))
    );
}

#[test]
fn decode_unknown_list_element_type_rejected() {
    let err = payload(&[0x20, 0, 0, 0, 0][..], TagType::List).unwrap_err();
    assert!(matches!(err, NbtError::InvalidTagType(0x20)));
}

#[test]
fn decode_negative_list_count_rejected() {
    let err = payload(&[0x01, 0x80, 0, 0, 0][..], TagType::List).unwrap_err();
    assert!(matches!(
        err,
        NbtError::NegativeLength { kind: "list", .. }
    ));
}

#[test]
fn decode_list_of_compounds() {
    let bytes = [
        0x0A, 0, 0, 0, 2, //
        0x02, 0x00, 0x01, b'k', 0x00, 0x01, 0x00, //
        0x00,
    ];
    let tag = payload(&bytes[..], TagType::List).unwrap();
    let items = tag.data::<nbt_core::Compound>().unwrap();
    assert_eq!(items.len(), 2);
    assert_eq!(items[0].get("k".as_bytes()), Some(&Tag::Short(1)));
    assert!(items[1].is_empty());
}

// ============================================================================
// Compounds
// ============================================================================

#[test]
fn decode_duplicate_key_last_write_wins() {
    let bytes = [
        0x01, 0x00, 0x01, b'a', 0x01, //
        0x01, 0x00, 0x01, b'a', 0x02, //
        0x00,
    ];
    let tag = payload(&bytes[..], TagType::Compound).unwrap();
    assert_eq!(tag.get("a").unwrap(), &Tag::Byte(2));
    assert_eq!(tag.value::<nbt_core::Compound>().unwrap().len(), 1);
}

#[test]
fn decode_unknown_compound_entry_tag_rejected() {
    let bytes = [0x01, 0x00, 0x01, b'a', 0x01, 0xFF, 0x00];
    let err = payload(&bytes[..], TagType::Compound).unwrap_err();
    assert!(matches!(err, NbtError::InvalidTagType(0xFF)));
}

#[test]
fn decode_end_entry_inside_compound_terminates() {
    let bytes = [0x00, 0x01, 0x00, 0x01, b'a', 0x01];
    let tag = payload(&bytes[..], TagType::Compound).unwrap();
    assert_eq!(tag, Tag::Compound(Default::default()));
}

// ============================================================================
// Depth limit
// ============================================================================

/// `depth` compounds nested under key "c", as a root document.
fn nested_compounds(depth: usize) -> Vec<u8> {
    let mut bytes = vec![0x0A, 0x00, 0x00];
    for _ in 1..depth {
        bytes.extend_from_slice(&[0x0A, 0x00, 0x01, b'c']);
    }
    bytes.extend(std::iter::repeat_n(0x00, depth));
    bytes
}

#[test]
fn decode_within_depth_limit() {
    let options = DecodeOptions::default().with_max_depth(8);
    let doc = read_document_with(&nested_compounds(8)[..], options).unwrap();
    let mut tag = doc.get("c").unwrap();
    for _ in 2..7 {
        tag = tag.get("c").unwrap();
    }
    assert!(tag.get("c").is_ok());
}

#[test]
fn decode_beyond_depth_limit_rejected() {
    let options = DecodeOptions::default().with_max_depth(8);
    let err = read_document_with(&nested_compounds(9)[..], options).unwrap_err();
    assert!(matches!(err, NbtError::DepthLimitExceeded(8)));
}

#[test]
fn decode_deep_list_nesting_rejected_by_default() {
    // 10_000 nested lists: each level is [List elem type][count 1].
    let mut bytes = vec![0x09, 0x00, 0x00];
    for _ in 0..10_000 {
        bytes.extend_from_slice(&[0x09, 0, 0, 0, 1]);
    }
    bytes.extend_from_slice(&[0x00, 0, 0, 0, 0]);
    let err = decode(&bytes).unwrap_err();
    assert!(matches!(err, NbtError::DepthLimitExceeded(512)));
}

#[test]
fn decoder_reads_consecutive_documents() {
    let bytes: [u8; 6] = [0x00, 0x0A, 0x00, 0x01, b'x', 0x00];
    let mut decoder = Decoder::new(&bytes[..]);
    assert!(decoder.read_document().unwrap().is_empty());
    assert_eq!(decoder.read_document().unwrap().name().unwrap(), "x");
    assert_short_read(decoder.read_document().unwrap_err());
}
