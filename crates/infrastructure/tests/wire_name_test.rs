mod helpers;

use authdns_domain::WireError;
use authdns_infrastructure::dns::wire::{
    decode_name, encode_name, ByteReader, ByteWriter, CompressionTable,
};
use helpers::name;

fn decode(data: &[u8], offset: usize) -> Result<(authdns_domain::DomainName, usize), WireError> {
    decode_name(&ByteReader::new(data), offset)
}

#[test]
fn test_decode_follows_backward_pointer() {
    let mut data = b"\x0ccodecrafters\x02io\x00".to_vec();
    let second = data.len();
    data.extend_from_slice(&[0xC0, 0x00]);

    let (decoded, consumed) = decode(&data, second).unwrap();

    assert_eq!(decoded, name("codecrafters.io"));
    assert_eq!(consumed, 2);
}

#[test]
fn test_decode_labels_then_pointer() {
    let mut data = b"\x07example\x03com\x00".to_vec();
    let second = data.len();
    data.extend_from_slice(b"\x04mail\xC0\x00");

    let (decoded, consumed) = decode(&data, second).unwrap();

    assert_eq!(decoded, name("mail.example.com"));
    assert_eq!(consumed, 7);
}

#[test]
fn test_decode_pointer_chain() {
    // 0: "com", 5: "example" -> 0, 15: "www" -> 5, 21: pointer -> 15
    let mut data = b"\x03com\x00".to_vec();
    data.extend_from_slice(b"\x07example\xC0\x00");
    data.extend_from_slice(b"\x03www\xC0\x05");
    let start = data.len();
    data.extend_from_slice(&[0xC0, 0x0F]);

    let (decoded, consumed) = decode(&data, start).unwrap();

    assert_eq!(decoded, name("www.example.com"));
    assert_eq!(consumed, 2);
}

#[test]
fn test_self_pointer_is_rejected() {
    let data = [0x00, 0x00, 0xC0, 0x02];
    assert_eq!(
        decode(&data, 2),
        Err(WireError::InvalidPointer {
            pointer: 2,
            target: 2
        })
    );
}

#[test]
fn test_forward_pointer_is_rejected() {
    let data = [0xC0, 0x02, 0x00];
    assert!(matches!(
        decode(&data, 0),
        Err(WireError::InvalidPointer { pointer: 0, target: 2 })
    ));
}

#[test]
fn test_pointer_cycle_between_two_names_is_rejected() {
    // 0: "a" -> 4, 4: "b" -> 0
    let data = [0x01, b'a', 0xC0, 0x04, 0x01, b'b', 0xC0, 0x00];
    assert!(matches!(
        decode(&data, 4),
        Err(WireError::InvalidPointer { .. })
    ));
    assert!(matches!(
        decode(&data, 0),
        Err(WireError::InvalidPointer { .. })
    ));
}

#[test]
fn test_pointer_missing_second_byte_is_truncated() {
    let data = [0x00, 0xC0];
    assert_eq!(decode(&data, 1), Err(WireError::TruncatedInput));
}

#[test]
fn test_label_length_64_is_rejected() {
    let mut data = vec![64u8];
    data.extend_from_slice(&[b'a'; 64]);
    data.push(0);

    assert_eq!(decode(&data, 0), Err(WireError::LabelTooLong(64)));
}

#[test]
fn test_label_length_63_is_accepted() {
    let mut data = vec![63u8];
    data.extend_from_slice(&[b'a'; 63]);
    data.push(0);

    let (decoded, consumed) = decode(&data, 0).unwrap();
    assert_eq!(decoded.label_count(), 1);
    assert_eq!(consumed, 65);
}

#[test]
fn test_name_over_255_bytes_is_rejected() {
    // Four 63-byte labels encode to 257 bytes.
    let mut data = Vec::new();
    for _ in 0..4 {
        data.push(63u8);
        data.extend_from_slice(&[b'x'; 63]);
    }
    data.push(0);

    assert!(matches!(decode(&data, 0), Err(WireError::NameTooLong(_))));
}

#[test]
fn test_label_running_past_end_is_truncated() {
    let data = b"\x07exam";
    assert_eq!(decode(data, 0), Err(WireError::TruncatedInput));
}

#[test]
fn test_missing_terminator_is_truncated() {
    let data = b"\x03com";
    assert_eq!(decode(data, 0), Err(WireError::TruncatedInput));
}

#[test]
fn test_label_bytes_are_preserved() {
    let data = b"\x03CoM\x00";
    let (decoded, _) = decode(data, 0).unwrap();

    assert_ne!(decoded, name("com"));
    assert!(decoded.eq_ignore_case(&name("com")));
    assert_eq!(decoded.labels().next(), Some(&b"CoM"[..]));
}

#[test]
fn test_encode_reuses_longest_suffix() {
    let mut writer = ByteWriter::new();
    let mut table = CompressionTable::new();

    encode_name(&mut writer, &name("example.com"), &mut table);
    encode_name(&mut writer, &name("mail.example.com"), &mut table);
    encode_name(&mut writer, &name("example.com"), &mut table);

    let expected: &[u8] = b"\x07example\x03com\x00\x04mail\xC0\x00\xC0\x00";
    assert_eq!(writer.as_slice(), expected);
}

#[test]
fn test_encode_is_case_sensitive_for_reuse() {
    let mut writer = ByteWriter::new();
    let mut table = CompressionTable::new();

    encode_name(&mut writer, &name("example.com"), &mut table);
    encode_name(&mut writer, &name("EXAMPLE.com"), &mut table);

    let expected: &[u8] = b"\x07example\x03com\x00\x07EXAMPLE\xC0\x08";
    assert_eq!(writer.as_slice(), expected);
}

#[test]
fn test_encode_root_name() {
    let mut writer = ByteWriter::new();
    encode_name(&mut writer, &name("."), &mut CompressionTable::new());
    assert_eq!(writer.as_slice(), &[0x00]);
}

#[test]
fn test_encoded_pointers_decode_back() {
    let mut writer = ByteWriter::new();
    let mut table = CompressionTable::new();
    encode_name(&mut writer, &name("example.com"), &mut table);
    let second = writer.position();
    encode_name(&mut writer, &name("www.example.com"), &mut table);

    let bytes = writer.into_bytes();
    let (decoded, consumed) = decode(&bytes, second).unwrap();

    assert_eq!(decoded, name("www.example.com"));
    assert_eq!(consumed, 6);
}
