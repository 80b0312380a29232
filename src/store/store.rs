//! Paste Store Module
//!
//! Main storage engine mapping retrieval codes to pastes, with TTL-based
//! visibility and support for the background reaper.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use tracing::warn;

use crate::error::{PasteError, Result};
use crate::store::{codes, Paste, MAX_CODE_RETRIES};

// == Paste Store ==
/// In-memory mapping from retrieval code to paste.
///
/// The store itself is single-threaded; callers share it behind
/// `Arc<RwLock<PasteStore>>` so reads stay concurrent and the
/// generate-and-insert sequence is atomic under the write lock.
///
/// Size is self-limiting: every paste carries a TTL, so under sustained load
/// the store holds at most (arrival rate x TTL) entries once the reaper and
/// lazy expiry keep up.
#[derive(Debug)]
pub struct PasteStore {
    /// Code-to-paste storage
    entries: HashMap<String, Paste>,
    /// Fixed TTL in seconds applied to every paste
    ttl_secs: u64,
}

impl PasteStore {
    // == Constructor ==
    /// Creates a new PasteStore with the given fixed TTL.
    pub fn new(ttl_secs: u64) -> Self {
        Self {
            entries: HashMap::new(),
            ttl_secs,
        }
    }

    // == Create ==
    /// Generates a unique code and stores `text` under it.
    ///
    /// Generation and insertion happen in one call so that, under the
    /// caller's write lock, no two concurrent sends can be assigned the same
    /// code. Collisions trigger regeneration, bounded by `MAX_CODE_RETRIES`;
    /// exhausting the retries fails with `CapacityExhausted` instead of
    /// looping forever or overwriting a live paste.
    pub fn create(&mut self, text: String) -> Result<(String, Paste)> {
        for attempt in 0..MAX_CODE_RETRIES {
            let code = codes::generate();
            match self.insert(code.clone(), text.clone()) {
                Ok(paste) => return Ok((code, paste)),
                Err(PasteError::CodeTaken(_)) => {
                    warn!("Code collision on attempt {}, regenerating", attempt + 1);
                }
                Err(e) => return Err(e),
            }
        }
        Err(PasteError::CapacityExhausted)
    }

    // == Insert ==
    /// Stores `text` under `code`, failing if the code is currently live.
    ///
    /// An expired-but-unreaped entry does not block the code: expiry makes
    /// the code eligible for reuse, so the stale entry is replaced.
    pub fn insert(&mut self, code: String, text: String) -> Result<Paste> {
        if let Some(existing) = self.entries.get(&code) {
            if !existing.is_expired() {
                return Err(PasteError::CodeTaken(code));
            }
        }

        let paste = Paste::new(text, self.ttl_secs);
        self.entries.insert(code, paste.clone());
        Ok(paste)
    }

    // == Get ==
    /// Retrieves the paste stored under `code`.
    ///
    /// Read-only: does not touch the TTL, so repeated reads within the
    /// lifetime window return identical results. The expiry check here is
    /// what makes visibility correct regardless of reaper cadence; an
    /// expired entry is reported as `Expired` but left in place for the
    /// caller to remove under a write lock.
    pub fn get(&self, code: &str) -> Result<Paste> {
        match self.entries.get(code) {
            Some(paste) if paste.is_expired() => Err(PasteError::Expired),
            Some(paste) => Ok(paste.clone()),
            None => Err(PasteError::NotFound),
        }
    }

    // == Remove ==
    /// Removes the entry under `code` unconditionally. Idempotent.
    pub fn remove(&mut self, code: &str) -> bool {
        self.entries.remove(code).is_some()
    }

    // == Remove Expired ==
    /// Removes the entry under `code` only if it has expired as of `now`.
    ///
    /// Used by the reaper after a snapshot: the re-check guarantees a code
    /// that was reused between snapshot and delete is never reaped while
    /// live. Returns true if an entry was removed.
    pub fn remove_expired(&mut self, code: &str, now: DateTime<Utc>) -> bool {
        match self.entries.get(code) {
            Some(paste) if paste.is_expired_at(now) => {
                self.entries.remove(code);
                true
            }
            _ => false,
        }
    }

    // == Snapshot ==
    /// Returns every live code with its expiration instant.
    ///
    /// Lets the reaper pick eviction candidates without holding the store
    /// lock for the duration of the sweep.
    pub fn snapshot(&self) -> Vec<(String, DateTime<Utc>)> {
        self.entries
            .iter()
            .map(|(code, paste)| (code.clone(), paste.expires_at))
            .collect()
    }

    // == Length ==
    /// Returns the current number of entries, expired-but-unreaped included.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    // == Is Empty ==
    /// Returns true if the store holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use std::collections::HashSet;

    const TEST_TTL: u64 = 1800;

    #[test]
    fn test_store_new() {
        let store = PasteStore::new(TEST_TTL);
        assert_eq!(store.len(), 0);
        assert!(store.is_empty());
    }

    #[test]
    fn test_create_and_get_roundtrip() {
        let mut store = PasteStore::new(TEST_TTL);

        let (code, _) = store.create("hello".to_string()).unwrap();
        let paste = store.get(&code).unwrap();

        assert_eq!(paste.text, "hello");
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_get_nonexistent() {
        let store = PasteStore::new(TEST_TTL);

        let result = store.get("ABC234");
        assert!(matches!(result, Err(PasteError::NotFound)));
    }

    #[test]
    fn test_get_does_not_mutate() {
        let mut store = PasteStore::new(TEST_TTL);

        let (code, _) = store.create("hello".to_string()).unwrap();
        let first = store.get(&code).unwrap();
        let second = store.get(&code).unwrap();

        assert_eq!(first.text, second.text);
        assert_eq!(first.expires_at, second.expires_at);
    }

    #[test]
    fn test_insert_rejects_live_code() {
        let mut store = PasteStore::new(TEST_TTL);

        store.insert("ABC234".to_string(), "first".to_string()).unwrap();
        let result = store.insert("ABC234".to_string(), "second".to_string());

        assert!(matches!(result, Err(PasteError::CodeTaken(_))));
        assert_eq!(store.get("ABC234").unwrap().text, "first");
    }

    #[test]
    fn test_insert_replaces_expired_entry() {
        let mut store = PasteStore::new(TEST_TTL);

        // Plant an already-expired entry under the code
        let stale = Paste::new("stale".to_string(), 0);
        store.entries.insert("ABC234".to_string(), stale);

        let result = store.insert("ABC234".to_string(), "fresh".to_string());

        assert!(result.is_ok());
        assert_eq!(store.get("ABC234").unwrap().text, "fresh");
    }

    #[test]
    fn test_expired_entry_not_returned() {
        let mut store = PasteStore::new(0);

        let (code, _) = store.create("hello".to_string()).unwrap();
        let result = store.get(&code);

        assert!(matches!(result, Err(PasteError::Expired)));
        // Entry is still physically present until someone removes it
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_remove_is_idempotent() {
        let mut store = PasteStore::new(TEST_TTL);

        let (code, _) = store.create("hello".to_string()).unwrap();
        assert!(store.remove(&code));
        assert!(!store.remove(&code));
        assert!(store.is_empty());
    }

    #[test]
    fn test_remove_expired_spares_live_entry() {
        let mut store = PasteStore::new(TEST_TTL);

        let (code, _) = store.create("hello".to_string()).unwrap();
        assert!(!store.remove_expired(&code, Utc::now()));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_remove_expired_removes_stale_entry() {
        let mut store = PasteStore::new(TEST_TTL);

        let (code, paste) = store.create("hello".to_string()).unwrap();
        let after_expiry = paste.expires_at + Duration::seconds(1);

        assert!(store.remove_expired(&code, after_expiry));
        assert!(store.is_empty());
    }

    #[test]
    fn test_snapshot_lists_all_entries() {
        let mut store = PasteStore::new(TEST_TTL);

        let (code_a, _) = store.create("a".to_string()).unwrap();
        let (code_b, _) = store.create("b".to_string()).unwrap();

        let snapshot = store.snapshot();
        let codes: HashSet<String> = snapshot.iter().map(|(c, _)| c.clone()).collect();

        assert_eq!(snapshot.len(), 2);
        assert!(codes.contains(&code_a));
        assert!(codes.contains(&code_b));
    }

    #[test]
    fn test_create_assigns_distinct_codes() {
        let mut store = PasteStore::new(TEST_TTL);
        let mut seen = HashSet::new();

        for i in 0..10_000 {
            let (code, _) = store.create(format!("paste {}", i)).unwrap();
            assert!(seen.insert(code), "duplicate code assigned to a live paste");
        }
        assert_eq!(store.len(), 10_000);
    }
}
