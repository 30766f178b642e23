use docvault_crypto::{generate_record_key, unwrap_key, wrap_key, SystemKeyPair};

#[test]
fn wrap_unwrap_roundtrip() {
    let keys = SystemKeyPair::generate().unwrap();
    let record_key = generate_record_key();

    let wrapped = wrap_key(&record_key, &keys.public).unwrap();
    let recovered = unwrap_key(&wrapped, &keys.private).unwrap();

    assert_eq!(recovered.as_bytes(), record_key.as_bytes());
}

#[test]
fn wrapped_key_is_modulus_sized() {
    let keys = SystemKeyPair::generate().unwrap();
    let record_key = generate_record_key();

    let wrapped = wrap_key(&record_key, &keys.public).unwrap();
    // RSA-2048 ciphertext is always 256 bytes
    assert_eq!(wrapped.len(), 256);
}

#[test]
fn each_wrap_produces_different_ciphertext() {
    let keys = SystemKeyPair::generate().unwrap();
    let record_key = generate_record_key();

    let w1 = wrap_key(&record_key, &keys.public).unwrap();
    let w2 = wrap_key(&record_key, &keys.public).unwrap();

    // OAEP is randomized
    assert_ne!(w1, w2);
    assert_eq!(
        unwrap_key(&w1, &keys.private).unwrap().as_bytes(),
        unwrap_key(&w2, &keys.private).unwrap().as_bytes()
    );
}

#[test]
fn wrong_private_key_fails_to_unwrap() {
    let keys = SystemKeyPair::generate().unwrap();
    let other = SystemKeyPair::generate().unwrap();
    let record_key = generate_record_key();

    let wrapped = wrap_key(&record_key, &keys.public).unwrap();
    let result = unwrap_key(&wrapped, &other.private);

    assert!(result.is_err());
}

#[test]
fn tampered_wrapped_key_fails() {
    let keys = SystemKeyPair::generate().unwrap();
    let record_key = generate_record_key();

    let mut wrapped = wrap_key(&record_key, &keys.public).unwrap();
    wrapped[0] ^= 0xFF;

    let result = unwrap_key(&wrapped, &keys.private);
    assert!(result.is_err());
}

#[test]
fn oversized_input_fails_to_unwrap() {
    let keys = SystemKeyPair::generate().unwrap();
    let result = unwrap_key(&[0xAB; 512], &keys.private);
    assert!(result.is_err());
}

#[test]
fn pem_roundtrip_preserves_key_pair() {
    let keys = SystemKeyPair::generate().unwrap();
    let pem = keys.private_key_pem().unwrap();

    let reloaded = SystemKeyPair::from_pem(&pem).unwrap();
    let record_key = generate_record_key();

    let wrapped = wrap_key(&record_key, &keys.public).unwrap();
    let recovered = unwrap_key(&wrapped, &reloaded.private).unwrap();
    assert_eq!(recovered.as_bytes(), record_key.as_bytes());
}

#[test]
fn pem_file_loading() {
    let keys = SystemKeyPair::generate().unwrap();
    let pem = keys.private_key_pem().unwrap();

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("system_key.pem");
    std::fs::write(&path, pem).unwrap();

    let reloaded = SystemKeyPair::from_pem_file(&path).unwrap();
    assert_eq!(reloaded.public, keys.public);
}

#[test]
fn invalid_pem_rejected() {
    let result = SystemKeyPair::from_pem("not a pem at all");
    assert!(result.is_err());
}

#[test]
fn public_key_pem_parses_standalone() {
    let keys = SystemKeyPair::generate().unwrap();
    let pub_pem = keys.public_key_pem().unwrap();

    let public = SystemKeyPair::public_from_pem(&pub_pem).unwrap();
    assert_eq!(public, keys.public);
}
