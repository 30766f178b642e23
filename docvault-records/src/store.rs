//! Storage collaborator interface and the in-memory reference store.
//!
//! The document service performs no I/O; persistence goes through
//! [`RecordStore`]. The in-memory implementation backs tests and demos.

use crate::error::{RecordError, RecordResult};
use crate::record::{DocumentView, EncryptedRecord};
use crate::service::DocumentService;
use docvault_crypto::decode_id;
use std::collections::HashMap;
use std::sync::RwLock;
use tracing::warn;

/// Persists and retrieves encrypted records.
///
/// Implementations must write a record atomically: the wrapped key and
/// ciphertexts land together or not at all, since ciphertext without its
/// wrapped key is unrecoverable.
pub trait RecordStore: Send + Sync {
    /// Persists a freshly sealed record.
    fn insert(&self, record: EncryptedRecord) -> RecordResult<()>;

    /// Fetches a record by its external identifier.
    fn get(&self, id: &str) -> RecordResult<EncryptedRecord>;

    /// Lists all records belonging to an owner, newest first.
    fn list_by_owner(&self, owner_ref: &str) -> RecordResult<Vec<EncryptedRecord>>;

    /// Irreversibly removes a record. No soft-delete exists.
    fn delete(&self, id: &str) -> RecordResult<()>;
}

/// HashMap-backed store for tests and demos.
pub struct InMemoryRecordStore {
    records: RwLock<HashMap<String, EncryptedRecord>>,
}

impl InMemoryRecordStore {
    pub fn new() -> Self {
        Self {
            records: RwLock::new(HashMap::new()),
        }
    }
}

impl Default for InMemoryRecordStore {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordStore for InMemoryRecordStore {
    fn insert(&self, record: EncryptedRecord) -> RecordResult<()> {
        self.records
            .write()
            .expect("record store lock poisoned")
            .insert(record.id.clone(), record);
        Ok(())
    }

    fn get(&self, id: &str) -> RecordResult<EncryptedRecord> {
        self.records
            .read()
            .expect("record store lock poisoned")
            .get(id)
            .cloned()
            .ok_or_else(|| RecordError::NotFound(id.to_string()))
    }

    fn list_by_owner(&self, owner_ref: &str) -> RecordResult<Vec<EncryptedRecord>> {
        let mut records: Vec<EncryptedRecord> = self
            .records
            .read()
            .expect("record store lock poisoned")
            .values()
            .filter(|r| r.owner_ref == owner_ref)
            .cloned()
            .collect();
        records.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(records)
    }

    fn delete(&self, id: &str) -> RecordResult<()> {
        self.records
            .write()
            .expect("record store lock poisoned")
            .remove(id)
            .map(|_| ())
            .ok_or_else(|| RecordError::NotFound(id.to_string()))
    }
}

/// Result of opening a batch of records with the skip-and-count policy.
#[derive(Debug)]
pub struct DecryptedListing {
    pub views: Vec<DocumentView>,
    /// Records that failed to open. Suppression is explicit and counted,
    /// never silent.
    pub skipped: usize,
}

/// Opens every record in `records`, skipping and counting failures.
///
/// The service itself always surfaces decrypt errors; this helper is the
/// collaborator-layer policy for bulk listings, where one corrupt record
/// must not hide the rest.
pub fn open_all(service: &DocumentService, records: &[EncryptedRecord]) -> DecryptedListing {
    let mut views = Vec::with_capacity(records.len());
    let mut skipped = 0;

    for record in records {
        match service.open(record) {
            Ok(view) => views.push(view),
            Err(err) => {
                warn!(record_id = %record.id, error = %err, "skipping undecryptable record");
                skipped += 1;
            }
        }
    }

    DecryptedListing { views, skipped }
}

/// Resolves an external identifier and opens the matching record.
///
/// The identifier is decoded first so malformed input fails with
/// `InvalidIdentifier` before any store access; the decoded bytes are a
/// debug value only, the lookup is an exact match on the stored string.
pub fn open_by_encoded_id(
    service: &DocumentService,
    store: &dyn RecordStore,
    encoded_id: &str,
) -> RecordResult<DocumentView> {
    decode_id(encoded_id)?;
    let record = store.get(encoded_id)?;
    service.open(&record)
}
