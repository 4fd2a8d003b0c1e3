use sankey_license::{EnvelopeError, LicenseEnvelope, MIN_ENVELOPE_SIZE};

fn sample_blob(ciphertext_len: usize) -> Vec<u8> {
    let mut blob = Vec::new();
    blob.extend_from_slice(&[0xaa; 16]); // iv
    blob.extend_from_slice(&[0xbb; 32]); // mac
    blob.extend(std::iter::repeat(0xcc).take(ciphertext_len));
    blob
}

#[test]
fn min_envelope_size_is_48() {
    assert_eq!(MIN_ENVELOPE_SIZE, 48);
}

#[test]
fn parse_splits_fields_at_fixed_offsets() {
    let envelope = LicenseEnvelope::parse(&sample_blob(32)).unwrap();
    assert_eq!(envelope.iv(), &[0xaa; 16]);
    assert_eq!(envelope.mac(), &[0xbb; 32]);
    assert_eq!(envelope.ciphertext(), &[0xcc; 32]);
}

#[test]
fn parse_accepts_header_only_blob() {
    // 48 bytes exactly: empty ciphertext is structurally fine; it fails
    // later, at decryption.
    let envelope = LicenseEnvelope::parse(&sample_blob(0)).unwrap();
    assert!(envelope.ciphertext().is_empty());
}

#[test]
fn parse_rejects_short_blob() {
    for len in [0, 1, 16, 40, 47] {
        let result = LicenseEnvelope::parse(&vec![0u8; len]);
        assert!(matches!(result, Err(EnvelopeError::Truncated(n)) if n == len));
    }
}

#[test]
fn mac_input_concatenates_without_delimiters() {
    let envelope = LicenseEnvelope::parse(&sample_blob(16)).unwrap();
    let input = envelope.mac_input(b"1234");

    assert_eq!(input.len(), 16 + 16 + 4);
    assert_eq!(&input[..16], &[0xaa; 16]);
    assert_eq!(&input[16..32], &[0xcc; 16]);
    assert_eq!(&input[32..], b"1234");
}

#[test]
fn mac_input_with_empty_account() {
    let envelope = LicenseEnvelope::parse(&sample_blob(16)).unwrap();
    let input = envelope.mac_input(b"");
    assert_eq!(input.len(), 32);
}
