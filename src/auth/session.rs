use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// Session idle time-to-live in minutes.
/// The backend invalidates tokens after ~30 minutes of inactivity.
pub const SESSION_TTL_MINUTES: i64 = 30;

/// State of the current session, derived on demand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// No credential present.
    Unauthenticated,
    /// Credential present and within the idle TTL.
    Valid,
    /// Credential present but idle for longer than the TTL.
    Expired,
}

/// The current login: credential, subject, and last activity timestamp.
///
/// All three fields travel together. A credential without an activity
/// timestamp cannot be judged expired, so the struct makes that state
/// unrepresentable: either a whole `SessionData` exists or none does.
///
/// `last_activity` is serialized as epoch milliseconds to match what the
/// backend and the web frontend store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionData {
    pub credential: String,
    #[serde(rename = "subjectId")]
    pub subject_id: String,
    #[serde(rename = "lastActivity", with = "chrono::serde::ts_milliseconds")]
    pub last_activity: DateTime<Utc>,
}

impl SessionData {
    /// Create session data for a fresh login, stamped with the current time.
    pub fn new(credential: impl Into<String>, subject_id: impl Into<String>) -> Self {
        Self {
            credential: credential.into(),
            subject_id: subject_id.into(),
            last_activity: Utc::now(),
        }
    }

    /// Whether the session has been idle for longer than the TTL.
    pub fn is_expired(&self) -> bool {
        Utc::now() - self.last_activity > Duration::minutes(SESSION_TTL_MINUTES)
    }

    pub fn time_until_expiry(&self) -> Duration {
        let expiry = self.last_activity + Duration::minutes(SESSION_TTL_MINUTES);
        expiry - Utc::now()
    }

    /// Get minutes remaining until expiry (for display)
    pub fn minutes_until_expiry(&self) -> i64 {
        self.time_until_expiry().num_minutes().max(0)
    }
}
