use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Account status tiers, ordered from least to most privileged.
///
/// Persisted and serialized as a small integer level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "i16", from = "i16")]
pub enum UserStatus {
    Disabled,
    Unverified,
    Active,
}

impl UserStatus {
    /// Whether this status clears the threshold required for post operations.
    pub fn is_active(self) -> bool {
        self >= UserStatus::Active
    }
}

impl From<UserStatus> for i16 {
    fn from(status: UserStatus) -> Self {
        match status {
            UserStatus::Disabled => -1,
            UserStatus::Unverified => 0,
            UserStatus::Active => 1,
        }
    }
}

impl From<i16> for UserStatus {
    fn from(level: i16) -> Self {
        match level {
            l if l >= 1 => UserStatus::Active,
            0 => UserStatus::Unverified,
            _ => UserStatus::Disabled,
        }
    }
}

/// User entity - represents an account in the system.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub email: String,
    pub password_hash: String,
    pub status: UserStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Create a new, not yet persisted user. Storage assigns the id.
    pub fn new(email: String, password_hash: String, status: UserStatus) -> Self {
        let now = Utc::now();
        Self {
            id: 0,
            email,
            password_hash,
            status,
            created_at: now,
            updated_at: now,
        }
    }
}

/// The authenticated user acting on a single request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Requester {
    pub id: i64,
    pub status: UserStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_ordering() {
        assert!(UserStatus::Disabled < UserStatus::Unverified);
        assert!(UserStatus::Unverified < UserStatus::Active);
        assert!(UserStatus::Active.is_active());
        assert!(!UserStatus::Unverified.is_active());
        assert!(!UserStatus::Disabled.is_active());
    }

    #[test]
    fn test_status_from_level() {
        assert_eq!(UserStatus::from(5), UserStatus::Active);
        assert_eq!(UserStatus::from(0), UserStatus::Unverified);
        assert_eq!(UserStatus::from(-3), UserStatus::Disabled);
    }

    #[test]
    fn test_status_serializes_as_level() {
        let json = serde_json::to_string(&UserStatus::Disabled).unwrap();
        assert_eq!(json, "-1");

        let status: UserStatus = serde_json::from_str("1").unwrap();
        assert_eq!(status, UserStatus::Active);
    }
}
