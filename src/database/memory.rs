use async_trait::async_trait;
use chrono::Utc;
use std::collections::BTreeMap;
use tokio::sync::RwLock;

use super::models::{NewProfile, ProfileId, UserProfile};
use super::store::{ProfileStore, StoreError};

/// In-process profile store used for development and tests.
/// Ids start at 1 and are never reused.
#[derive(Default)]
pub struct MemoryProfileStore {
    inner: RwLock<Inner>,
}

#[derive(Default)]
struct Inner {
    last_id: ProfileId,
    rows: BTreeMap<ProfileId, UserProfile>,
}

impl Inner {
    fn email_taken(&self, email: &str, except: Option<ProfileId>) -> bool {
        self.rows
            .values()
            .any(|row| Some(row.id) != except && row.email.eq_ignore_ascii_case(email))
    }
}

impl MemoryProfileStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ProfileStore for MemoryProfileStore {
    async fn list(&self) -> Result<Vec<UserProfile>, StoreError> {
        let inner = self.inner.read().await;
        Ok(inner.rows.values().cloned().collect())
    }

    async fn get(&self, id: ProfileId) -> Result<Option<UserProfile>, StoreError> {
        let inner = self.inner.read().await;
        Ok(inner.rows.get(&id).cloned())
    }

    async fn create(&self, profile: NewProfile) -> Result<UserProfile, StoreError> {
        let mut inner = self.inner.write().await;
        if inner.email_taken(&profile.email, None) {
            return Err(StoreError::DuplicateEmail);
        }

        inner.last_id += 1;
        let now = Utc::now();
        let row = UserProfile {
            id: inner.last_id,
            email: profile.email,
            name: profile.name,
            bio: profile.bio,
            password_hash: profile.password_hash,
            created_at: now,
            updated_at: now,
        };
        inner.rows.insert(row.id, row.clone());
        Ok(row)
    }

    async fn save(&self, profile: &UserProfile) -> Result<UserProfile, StoreError> {
        let mut inner = self.inner.write().await;
        if inner.email_taken(&profile.email, Some(profile.id)) {
            return Err(StoreError::DuplicateEmail);
        }

        let row = inner
            .rows
            .get_mut(&profile.id)
            .ok_or(StoreError::NotFound(profile.id))?;
        row.email = profile.email.clone();
        row.name = profile.name.clone();
        row.bio = profile.bio.clone();
        row.password_hash = profile.password_hash.clone();
        row.updated_at = Utc::now();
        Ok(row.clone())
    }

    async fn delete(&self, id: ProfileId) -> Result<bool, StoreError> {
        let mut inner = self.inner.write().await;
        Ok(inner.rows.remove(&id).is_some())
    }

    async fn health_check(&self) -> Result<(), StoreError> {
        Ok(())
    }

    fn backend(&self) -> &'static str {
        "memory"
    }
}
