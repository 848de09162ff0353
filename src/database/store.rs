use async_trait::async_trait;
use thiserror::Error;

use super::models::{NewProfile, ProfileId, UserProfile};

/// Errors from a ProfileStore
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("user profile with this email already exists")]
    DuplicateEmail,

    #[error("profile {0} not found")]
    NotFound(ProfileId),

    #[error("store unavailable: {0}")]
    Unavailable(String),

    #[error(transparent)]
    Sqlx(#[from] sqlx::Error),
}

/// Persistence for user profiles.
///
/// Email uniqueness is the store's job: `create` and `save` report a clash
/// as [`StoreError::DuplicateEmail`] rather than leaving it to callers.
#[async_trait]
pub trait ProfileStore: Send + Sync {
    /// All profiles, ordered by id.
    async fn list(&self) -> Result<Vec<UserProfile>, StoreError>;

    async fn get(&self, id: ProfileId) -> Result<Option<UserProfile>, StoreError>;

    /// Inserts a profile and returns it with its assigned id and timestamps.
    async fn create(&self, profile: NewProfile) -> Result<UserProfile, StoreError>;

    /// Writes back email, name, bio and password hash of an existing record.
    async fn save(&self, profile: &UserProfile) -> Result<UserProfile, StoreError>;

    /// Returns whether a row was removed.
    async fn delete(&self, id: ProfileId) -> Result<bool, StoreError>;

    async fn health_check(&self) -> Result<(), StoreError>;

    /// Short backend name for logs and the health endpoint.
    fn backend(&self) -> &'static str;

    async fn get_or_404(&self, id: ProfileId) -> Result<UserProfile, StoreError> {
        self.get(id).await?.ok_or(StoreError::NotFound(id))
    }
}
