use super::*;

#[test]
fn header_default() {
    let h = FileHeader::default();
    assert!(h.validate_magic());
    assert!(h.validate_version());
}

#[test]
fn header_layout() {
    let bytes = FileHeader::default().to_bytes();
    assert_eq!(bytes, [b'S', b'V', b'M', b'B', 0, 0, 0, 1]);
}

#[test]
fn header_roundtrip() {
    let h = FileHeader::default();
    assert_eq!(FileHeader::from_bytes(&h.to_bytes()).unwrap(), h);
}

#[test]
fn header_wrong_size() {
    let err = FileHeader::from_bytes(&[0; 4]).unwrap_err();
    assert!(matches!(err, ModuleError::HeaderSize(4)));

    let err = FileHeader::from_bytes(&[0; 9]).unwrap_err();
    assert!(matches!(err, ModuleError::HeaderSize(9)));
}

#[test]
fn header_invalid_magic() {
    let mut bytes = FileHeader::default().to_bytes();
    bytes[0] = b'X';
    let err = FileHeader::from_bytes(&bytes).unwrap_err();
    assert!(matches!(err, ModuleError::InvalidMagic));
}

#[test]
fn header_wrong_version() {
    let h = FileHeader {
        magic: MAGIC,
        version: 99,
    };
    let err = FileHeader::from_bytes(&h.to_bytes()).unwrap_err();
    assert!(matches!(err, ModuleError::UnsupportedVersion(99)));
}
