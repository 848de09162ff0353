use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;

pub type ProfileId = i64;

/// A registered user. Serializes to the public `{id, email, name, bio}` shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, FromRow)]
pub struct UserProfile {
    pub id: ProfileId,
    pub email: String,
    pub name: String,
    pub bio: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    #[serde(skip_serializing)]
    pub created_at: DateTime<Utc>,
    #[serde(skip_serializing)]
    pub updated_at: DateTime<Utc>,
}

impl UserProfile {
    /// Each profile is its own account, so the owner is the record itself.
    pub fn owner_id(&self) -> ProfileId {
        self.id
    }
}

/// Row to insert; the store assigns id and timestamps.
#[derive(Debug, Clone)]
pub struct NewProfile {
    pub email: String,
    pub name: String,
    pub bio: String,
    pub password_hash: String,
}

/// Lower-cases the domain part of an address and trims surrounding whitespace.
/// The local part is kept as typed.
pub fn normalize_email(email: &str) -> String {
    let email = email.trim();
    match email.rsplit_once('@') {
        Some((local, domain)) => format!("{}@{}", local, domain.to_lowercase()),
        None => email.to_string(),
    }
}
