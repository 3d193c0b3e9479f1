/// User domain type
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::UserId;

/// User account
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique user identifier
    pub id: UserId,

    /// Display name
    pub name: String,

    /// Contact address, not validated
    pub email: String,

    /// Account creation timestamp
    pub created_at: DateTime<Utc>,
}

impl User {
    /// The synthetic account every fresh store starts with.
    pub fn seed() -> Self {
        Self {
            id: UserId::new("1"),
            name: "Adam".to_string(),
            email: "_@anh.io".to_string(),
            created_at: Utc::now(),
        }
    }
}

/// Data needed to create a user; the store assigns id and timestamp.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateUser {
    /// Display name
    pub name: String,

    /// Contact address
    pub email: String,
}

impl CreateUser {
    /// Create a new user request
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
        }
    }
}
