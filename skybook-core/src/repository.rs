use std::sync::Mutex;

use crate::identity::UserRecord;
use crate::CoreResult;

/// Backing storage for registered accounts.
pub trait CredentialStore: Send + Sync {
    /// Append a record. Existing records are never rewritten.
    fn append(&self, record: &UserRecord) -> CoreResult<()>;

    /// First record whose username and password both match, in insertion order.
    fn find(&self, username: &str, password: &str) -> CoreResult<Option<UserRecord>>;
}

/// Process-local store, used by tests and when no credential file is wanted.
#[derive(Default)]
pub struct InMemoryCredentialStore {
    records: Mutex<Vec<UserRecord>>,
}

impl InMemoryCredentialStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.records.lock().unwrap_or_else(|e| e.into_inner()).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl CredentialStore for InMemoryCredentialStore {
    fn append(&self, record: &UserRecord) -> CoreResult<()> {
        self.records
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(record.clone());
        Ok(())
    }

    fn find(&self, username: &str, password: &str) -> CoreResult<Option<UserRecord>> {
        let records = self.records.lock().unwrap_or_else(|e| e.into_inner());
        Ok(records
            .iter()
            .find(|record| record.matches(username, password))
            .cloned())
    }
}
