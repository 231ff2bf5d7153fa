//! Session Store - the key-value boundary holding session records
//!
//! The store is an explicitly injected object with a read/write/clear
//! contract; nothing in the portal reaches for ambient global state.

use crate::session::{SessionRecord, SessionToken};
use crate::{SessionError, SessionResult};
use std::collections::HashMap;
use std::sync::RwLock;
use tracing::debug;

/// Read/write/clear contract for session records.
///
/// All operations are synchronous and local; the gate never awaits the
/// store. `clear` on an absent token succeeds.
pub trait SessionStore: Send + Sync {
    /// Read the record for a token, `None` if no record exists
    fn read(&self, token: &SessionToken) -> SessionResult<Option<SessionRecord>>;

    /// Replace the record for a token
    fn write(&self, token: &SessionToken, record: SessionRecord) -> SessionResult<()>;

    /// Remove the record for a token, absent or not
    fn clear(&self, token: &SessionToken) -> SessionResult<()>;
}

/// In-memory session store, the default backing for a single portal process
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    records: RwLock<HashMap<String, SessionRecord>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of live records, for diagnostics
    pub fn len(&self) -> usize {
        self.records.read().map(|r| r.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl SessionStore for MemorySessionStore {
    fn read(&self, token: &SessionToken) -> SessionResult<Option<SessionRecord>> {
        let records = self
            .records
            .read()
            .map_err(|_| SessionError::store("session store lock poisoned"))?;
        Ok(records.get(token.as_str()).cloned())
    }

    fn write(&self, token: &SessionToken, record: SessionRecord) -> SessionResult<()> {
        let mut records = self
            .records
            .write()
            .map_err(|_| SessionError::store("session store lock poisoned"))?;
        records.insert(token.as_str().to_string(), record);
        debug!(token = %token, "Wrote session record");
        Ok(())
    }

    fn clear(&self, token: &SessionToken) -> SessionResult<()> {
        let mut records = self
            .records
            .write()
            .map_err(|_| SessionError::store("session store lock poisoned"))?;
        records.remove(token.as_str());
        debug!(token = %token, "Cleared session record");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::role::Role;

    #[test]
    fn read_returns_what_write_stored() {
        let store = MemorySessionStore::new();
        let token = SessionToken::generate();
        let record = SessionRecord::established(Role::Admin);

        store.write(&token, record.clone()).unwrap();
        assert_eq!(store.read(&token).unwrap(), Some(record));
    }

    #[test]
    fn unknown_token_reads_as_absent() {
        let store = MemorySessionStore::new();
        let token = SessionToken::from_raw("never-issued");
        assert_eq!(store.read(&token).unwrap(), None);
    }

    #[test]
    fn clear_removes_the_record() {
        let store = MemorySessionStore::new();
        let token = SessionToken::generate();
        store
            .write(&token, SessionRecord::established(Role::Store))
            .unwrap();

        store.clear(&token).unwrap();
        assert_eq!(store.read(&token).unwrap(), None);
        assert!(store.is_empty());
    }

    #[test]
    fn clear_on_absent_token_succeeds() {
        let store = MemorySessionStore::new();
        let token = SessionToken::from_raw("never-issued");
        assert!(store.clear(&token).is_ok());
    }
}
