use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};

use anyhow::{Context, Result};
use chrono::Utc;
use tracing::{debug, warn};

use super::session::{SessionData, SessionState};

/// Session file name in the storage directory
const SESSION_FILE: &str = "session.json";

/// Shared session state for the whole process.
///
/// The navigation guard and the API client both hold a handle to the same
/// store; nothing else reads session state. All operations are synchronous
/// and total: disk persistence is best-effort and failures are logged, never
/// returned.
///
/// The sliding refresh in [`SessionStore::touch`] is a read-modify-write
/// under the store's mutex, so concurrent refreshes cannot interleave.
pub struct SessionStore {
    slot: Mutex<Option<SessionData>>,
    storage_dir: Option<PathBuf>,
}

impl SessionStore {
    /// Create an in-memory store with no session.
    pub fn new() -> Self {
        Self {
            slot: Mutex::new(None),
            storage_dir: None,
        }
    }

    /// Create a store persisted under `storage_dir`, loading any session
    /// saved by a previous run. A saved session that has already expired is
    /// discarded on load.
    pub fn with_persistence(storage_dir: PathBuf) -> Self {
        let data = match Self::load_from(&storage_dir) {
            Ok(data) => data,
            Err(e) => {
                warn!(error = %e, "Failed to load saved session, starting empty");
                None
            }
        };

        Self {
            slot: Mutex::new(data),
            storage_dir: Some(storage_dir),
        }
    }

    /// Read a snapshot of the current session, if any.
    pub fn read(&self) -> Option<SessionData> {
        self.lock().clone()
    }

    /// Replace the session record wholesale.
    pub fn write(&self, data: SessionData) {
        let mut slot = self.lock();
        *slot = Some(data);
        self.persist(&slot);
    }

    /// Drop the session and remove any persisted copy.
    pub fn clear(&self) {
        let mut slot = self.lock();
        *slot = None;
        if let Some(path) = self.session_path() {
            if path.exists() {
                if let Err(e) = std::fs::remove_file(&path) {
                    warn!(error = %e, "Failed to remove session file");
                }
            }
        }
    }

    /// Sliding refresh: stamp the session with the current time.
    ///
    /// No-op when no session is present. The read and the write happen under
    /// one lock acquisition, so two refreshes can never produce a timestamp
    /// that moves backwards.
    pub fn touch(&self) {
        let mut slot = self.lock();
        if let Some(ref mut data) = *slot {
            data.last_activity = Utc::now();
            self.persist(&slot);
        }
    }

    /// Derive the session state: absent, valid, or idle past the TTL.
    pub fn state(&self) -> SessionState {
        match *self.lock() {
            None => SessionState::Unauthenticated,
            Some(ref data) if data.is_expired() => SessionState::Expired,
            Some(_) => SessionState::Valid,
        }
    }

    /// Get the stored credential, if a session exists.
    pub fn credential(&self) -> Option<String> {
        self.lock().as_ref().map(|data| data.credential.clone())
    }

    /// Get the subject id, if a session exists.
    pub fn subject_id(&self) -> Option<String> {
        self.lock().as_ref().map(|data| data.subject_id.clone())
    }

    // Store operations are total: a poisoned lock hands back the inner data.
    fn lock(&self) -> MutexGuard<'_, Option<SessionData>> {
        self.slot.lock().unwrap_or_else(|e| e.into_inner())
    }

    fn session_path(&self) -> Option<PathBuf> {
        self.storage_dir.as_ref().map(|dir| dir.join(SESSION_FILE))
    }

    fn persist(&self, slot: &Option<SessionData>) {
        let Some(path) = self.session_path() else {
            return;
        };
        if let Some(ref data) = *slot {
            if let Err(e) = Self::save_to(&path, data) {
                warn!(error = %e, "Failed to save session");
            }
        }
    }

    fn save_to(path: &Path, data: &SessionData) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let contents = serde_json::to_string_pretty(data)?;
        std::fs::write(path, contents)?;
        Ok(())
    }

    fn load_from(storage_dir: &Path) -> Result<Option<SessionData>> {
        let path = storage_dir.join(SESSION_FILE);
        if !path.exists() {
            return Ok(None);
        }

        let contents =
            std::fs::read_to_string(&path).context("Failed to read session file")?;
        let data: SessionData =
            serde_json::from_str(&contents).context("Failed to parse session file")?;

        if data.is_expired() {
            debug!("Saved session has expired, discarding");
            return Ok(None);
        }

        Ok(Some(data))
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn temp_storage_dir(tag: &str) -> PathBuf {
        std::env::temp_dir().join(format!("sprintboard-store-{}-{}", tag, std::process::id()))
    }

    #[test]
    fn starts_unauthenticated() {
        let store = SessionStore::new();
        assert_eq!(store.state(), SessionState::Unauthenticated);
        assert!(store.read().is_none());
        assert!(store.credential().is_none());
    }

    #[test]
    fn write_then_read_round_trips() {
        let store = SessionStore::new();
        store.write(SessionData::new("tok-123", "u-1"));

        assert_eq!(store.state(), SessionState::Valid);
        assert_eq!(store.credential().as_deref(), Some("tok-123"));
        assert_eq!(store.subject_id().as_deref(), Some("u-1"));
    }

    #[test]
    fn clear_drops_the_session() {
        let store = SessionStore::new();
        store.write(SessionData::new("tok-123", "u-1"));
        store.clear();

        assert_eq!(store.state(), SessionState::Unauthenticated);
        assert!(store.read().is_none());
    }

    #[test]
    fn idle_session_derives_expired_without_mutation() {
        let store = SessionStore::new();
        let mut data = SessionData::new("tok-123", "u-1");
        data.last_activity = Utc::now() - Duration::minutes(31);
        store.write(data);

        assert_eq!(store.state(), SessionState::Expired);
        // Expiry is derived: the record itself is still there until cleared.
        assert!(store.read().is_some());
    }

    #[test]
    fn touch_advances_last_activity() {
        let store = SessionStore::new();
        let mut data = SessionData::new("tok-123", "u-1");
        data.last_activity = Utc::now() - Duration::minutes(10);
        store.write(data);

        let before = store.read().expect("session present").last_activity;
        store.touch();
        let after = store.read().expect("session present").last_activity;

        assert!(after > before, "touch must advance the activity stamp");
        assert_eq!(store.state(), SessionState::Valid);
    }

    #[test]
    fn touch_without_session_is_a_noop() {
        let store = SessionStore::new();
        store.touch();
        assert_eq!(store.state(), SessionState::Unauthenticated);
    }

    #[test]
    fn persists_across_store_instances() {
        let dir = temp_storage_dir("roundtrip");
        let _ = std::fs::remove_dir_all(&dir);

        let store = SessionStore::with_persistence(dir.clone());
        store.write(SessionData::new("tok-123", "u-1"));
        drop(store);

        let reloaded = SessionStore::with_persistence(dir.clone());
        let data = reloaded.read().expect("session should survive restart");
        assert_eq!(data.credential, "tok-123");
        assert_eq!(data.subject_id, "u-1");

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn expired_session_is_discarded_on_load() {
        let dir = temp_storage_dir("expired");
        let _ = std::fs::remove_dir_all(&dir);

        let store = SessionStore::with_persistence(dir.clone());
        let mut data = SessionData::new("tok-123", "u-1");
        data.last_activity = Utc::now() - Duration::minutes(45);
        store.write(data);
        drop(store);

        let reloaded = SessionStore::with_persistence(dir.clone());
        assert_eq!(reloaded.state(), SessionState::Unauthenticated);

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn clear_removes_the_session_file() {
        let dir = temp_storage_dir("clear");
        let _ = std::fs::remove_dir_all(&dir);

        let store = SessionStore::with_persistence(dir.clone());
        store.write(SessionData::new("tok-123", "u-1"));
        store.clear();
        assert!(!dir.join("session.json").exists());

        let _ = std::fs::remove_dir_all(&dir);
    }
}
