use chrono::Utc;
use docvault_crypto::SystemKeyPair;
use docvault_records::{
    open_all, open_by_encoded_id, DocumentMetadata, DocumentService, InMemoryRecordStore,
    RecordError, RecordStore,
};
use std::sync::{Arc, OnceLock};

fn test_keys() -> Arc<SystemKeyPair> {
    static KEYS: OnceLock<Arc<SystemKeyPair>> = OnceLock::new();
    KEYS.get_or_init(|| Arc::new(SystemKeyPair::generate().unwrap()))
        .clone()
}

fn metadata(doc_type: &str) -> DocumentMetadata {
    DocumentMetadata {
        document_type: doc_type.to_string(),
        file_name: None,
        description: None,
        uploaded_at: Utc::now(),
    }
}

#[test]
fn insert_get_delete() {
    let service = DocumentService::new(test_keys());
    let store = InMemoryRecordStore::new();

    let record = service.seal_metadata(&metadata("Degree"), "u1").unwrap();
    let id = record.id.clone();

    store.insert(record).unwrap();
    assert_eq!(store.get(&id).unwrap().id, id);

    store.delete(&id).unwrap();
    assert!(matches!(store.get(&id), Err(RecordError::NotFound(_))));
    assert!(matches!(store.delete(&id), Err(RecordError::NotFound(_))));
}

#[test]
fn list_by_owner_filters_and_sorts() {
    let service = DocumentService::new(test_keys());
    let store = InMemoryRecordStore::new();

    for doc_type in ["A", "B", "C"] {
        store
            .insert(service.seal_metadata(&metadata(doc_type), "u1").unwrap())
            .unwrap();
    }
    store
        .insert(service.seal_metadata(&metadata("other"), "u2").unwrap())
        .unwrap();

    let records = store.list_by_owner("u1").unwrap();
    assert_eq!(records.len(), 3);
    assert!(records.windows(2).all(|w| w[0].created_at >= w[1].created_at));
}

#[test]
fn open_all_counts_skipped_records() {
    let service = DocumentService::new(test_keys());
    let store = InMemoryRecordStore::new();

    store
        .insert(service.seal_metadata(&metadata("Good"), "u1").unwrap())
        .unwrap();

    let mut corrupt = service.seal_metadata(&metadata("Bad"), "u1").unwrap();
    corrupt.wrapped_key = "AAAA".to_string();
    store.insert(corrupt).unwrap();

    let records = store.list_by_owner("u1").unwrap();
    let listing = open_all(&service, &records);

    assert_eq!(listing.views.len(), 1);
    assert_eq!(listing.skipped, 1);
    assert_eq!(listing.views[0].metadata.document_type, "Good");
}

#[test]
fn open_all_with_no_failures() {
    let service = DocumentService::new(test_keys());
    let records: Vec<_> = (0..3)
        .map(|i| service.seal_metadata(&metadata(&format!("D{i}")), "u1").unwrap())
        .collect();

    let listing = open_all(&service, &records);
    assert_eq!(listing.views.len(), 3);
    assert_eq!(listing.skipped, 0);
}

#[test]
fn open_by_encoded_id_roundtrip() {
    let service = DocumentService::new(test_keys());
    let store = InMemoryRecordStore::new();

    let record = service.seal_metadata(&metadata("Transcript"), "u1").unwrap();
    let id = record.id.clone();
    store.insert(record).unwrap();

    let view = open_by_encoded_id(&service, &store, &id).unwrap();
    assert_eq!(view.metadata.document_type, "Transcript");
}

#[test]
fn open_by_encoded_id_rejects_malformed_identifier() {
    let service = DocumentService::new(test_keys());
    let store = InMemoryRecordStore::new();

    let result = open_by_encoded_id(&service, &store, "***garbage***");
    assert!(matches!(
        result,
        Err(RecordError::Crypto(
            docvault_crypto::CryptoError::InvalidIdentifier(_)
        ))
    ));
}

#[test]
fn open_by_encoded_id_missing_record() {
    let service = DocumentService::new(test_keys());
    let store = InMemoryRecordStore::new();

    // Well-formed Base64 but no matching record
    let result = open_by_encoded_id(&service, &store, "dW5rbm93bg==");
    assert!(matches!(result, Err(RecordError::NotFound(_))));
}
