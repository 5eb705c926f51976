use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// User model for API responses
///
/// Only the generated id and username go over the wire; the stored password
/// hash is a placeholder that is never returned or verified.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub username: String,
}

/// Post row and API response model
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Post {
    pub id: i64,
    pub title: String,
    pub content: String,
    /// Set once at insert; updates preserve the original value
    pub created_at: DateTime<Utc>,
}

/// Comment model for API responses
///
/// Comments are write-only at the API level: created, never read back.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Comment {
    pub id: i64,
    pub content: String,
    pub post_id: i64,
    pub created_at: DateTime<Utc>,
}
