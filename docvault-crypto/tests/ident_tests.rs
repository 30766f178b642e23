use docvault_crypto::{decode_id, encode_id, new_record_id, sign, verify};

#[test]
fn encode_decode_roundtrip() {
    let raw = b"internal-unique-value-1700000000000";
    let encoded = encode_id(raw);
    assert_eq!(decode_id(&encoded).unwrap(), raw);
}

#[test]
fn decode_rejects_invalid_characters() {
    let result = decode_id("not!valid@base64#");
    assert!(result.is_err());
}

#[test]
fn decode_rejects_odd_length() {
    let result = decode_id("abcde");
    assert!(result.is_err());
}

#[test]
fn record_ids_are_unique() {
    let id1 = new_record_id();
    let id2 = new_record_id();
    assert_ne!(id1, id2);
}

#[test]
fn record_id_decodes_to_uuid_and_timestamp() {
    let id = new_record_id();
    let raw = decode_id(&id).unwrap();
    let text = String::from_utf8(raw).unwrap();

    // 32 hex chars of simple-format UUID followed by a millisecond timestamp
    assert!(text.len() > 32);
    assert!(text[..32].chars().all(|c| c.is_ascii_hexdigit()));
    assert!(text[32..].chars().all(|c| c.is_ascii_digit()));
}

#[test]
fn sign_is_deterministic() {
    let data = b"canonical metadata bytes";
    assert_eq!(sign(data), sign(data));
}

#[test]
fn sign_produces_hex_sha256() {
    let digest = sign(b"");
    assert_eq!(digest.len(), 64);
    // SHA-256 of the empty string
    assert_eq!(
        digest,
        "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
    );
}

#[test]
fn verify_accepts_matching_digest() {
    let data = b"some plaintext";
    let digest = sign(data);
    assert!(verify(data, &digest));
}

#[test]
fn verify_rejects_modified_data() {
    let digest = sign(b"original");
    assert!(!verify(b"tampered", &digest));
}

#[test]
fn verify_rejects_malformed_digest() {
    assert!(!verify(b"data", "deadbeef"));
    assert!(!verify(b"data", ""));
}

// Property-based tests
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn any_bytes_roundtrip_through_codec(raw in proptest::collection::vec(any::<u8>(), 0..128)) {
            let encoded = encode_id(&raw);
            prop_assert_eq!(decode_id(&encoded).unwrap(), raw);
        }

        #[test]
        fn digest_distinguishes_distinct_inputs(a in proptest::collection::vec(any::<u8>(), 0..64),
                                                b in proptest::collection::vec(any::<u8>(), 0..64)) {
            prop_assume!(a != b);
            prop_assert_ne!(sign(&a), sign(&b));
        }
    }
}
