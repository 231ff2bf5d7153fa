//! Session types
//!
//! The raw store-side record and the validated session view derived from it.

use crate::role::Role;
use serde::{Deserialize, Serialize};

/// Store key for the authentication flag
pub const IS_AUTHENTICATED_KEY: &str = "isAuthenticated";
/// Store key for the role identifier
pub const USER_ROLE_KEY: &str = "userRole";
/// The only flag value the gate accepts as authenticated
pub const AUTHENTICATED_VALUE: &str = "true";

/// Opaque session identifier carried by the client between requests
#[derive(Debug, Clone, Hash, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionToken(String);

impl SessionToken {
    /// Generate a fresh token for a new session
    pub fn generate() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }

    /// Wrap a raw token value received from the client.
    /// Unknown values are valid tokens; they simply miss in the store.
    pub fn from_raw<S: Into<String>>(raw: S) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for SessionToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Raw session record as held by the store.
///
/// Both fields are optional on purpose: partial and malformed records are
/// representable, and the gate treats every such record as unauthenticated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionRecord {
    /// Authentication flag, stored as a string under `isAuthenticated`
    #[serde(rename = "isAuthenticated", skip_serializing_if = "Option::is_none")]
    pub is_authenticated: Option<String>,
    /// Role identifier, stored as a string under `userRole`
    #[serde(rename = "userRole", skip_serializing_if = "Option::is_none")]
    pub user_role: Option<String>,
}

impl SessionRecord {
    /// Build the only record shape login is allowed to write: both fields
    /// set together, in one write.
    pub fn established(role: Role) -> Self {
        Self {
            is_authenticated: Some(AUTHENTICATED_VALUE.to_string()),
            user_role: Some(role.to_string()),
        }
    }

    /// Whether the record carries neither field
    pub fn is_empty(&self) -> bool {
        self.is_authenticated.is_none() && self.user_role.is_none()
    }
}

/// Validated session view.
///
/// A `Session` exists only when the record is fully present and well formed;
/// there is no partially-authenticated `Session` value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Session {
    pub role: Role,
}

impl Session {
    /// Derive the validated view from a raw record.
    ///
    /// Returns `None` for partial records, a flag other than `"true"`, and
    /// role strings that do not parse.
    pub fn from_record(record: &SessionRecord) -> Option<Session> {
        let flag = record.is_authenticated.as_deref()?;
        if flag != AUTHENTICATED_VALUE {
            return None;
        }

        let role = record.user_role.as_deref()?.parse::<Role>().ok()?;
        Some(Session { role })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn established_record_yields_session() {
        let record = SessionRecord::established(Role::Store);
        let session = Session::from_record(&record).unwrap();
        assert_eq!(session.role, Role::Store);
    }

    #[test]
    fn partial_records_yield_no_session() {
        let flag_only = SessionRecord {
            is_authenticated: Some(AUTHENTICATED_VALUE.to_string()),
            user_role: None,
        };
        assert!(Session::from_record(&flag_only).is_none());

        let role_only = SessionRecord {
            is_authenticated: None,
            user_role: Some("admin".to_string()),
        };
        assert!(Session::from_record(&role_only).is_none());
    }

    #[test]
    fn malformed_records_yield_no_session() {
        let wrong_flag = SessionRecord {
            is_authenticated: Some("yes".to_string()),
            user_role: Some("admin".to_string()),
        };
        assert!(Session::from_record(&wrong_flag).is_none());

        let unknown_role = SessionRecord {
            is_authenticated: Some(AUTHENTICATED_VALUE.to_string()),
            user_role: Some("superuser".to_string()),
        };
        assert!(Session::from_record(&unknown_role).is_none());
    }

    #[test]
    fn record_serializes_with_conventional_keys() {
        let record = SessionRecord::established(Role::FinanceManager);
        let json = serde_json::to_value(&record).unwrap();

        assert_eq!(json[IS_AUTHENTICATED_KEY], "true");
        assert_eq!(json[USER_ROLE_KEY], "financemanager");
    }

    #[test]
    fn generated_tokens_are_unique() {
        assert_ne!(SessionToken::generate(), SessionToken::generate());
    }
}
