use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use svcmarket_core::{AccountId, DomainError, DomainResult};

use crate::Profile;

/// Profile storage keyed by owning account.
pub trait ProfileStore: Send + Sync {
    fn get(&self, account_id: AccountId) -> DomainResult<Option<Profile>>;

    /// Insert the account's profile; fails if one is already stored.
    fn insert_once(&self, profile: Profile) -> DomainResult<()>;

    fn exists(&self, account_id: AccountId) -> DomainResult<bool> {
        Ok(self.get(account_id)?.is_some())
    }
}

impl<S> ProfileStore for Arc<S>
where
    S: ProfileStore + ?Sized,
{
    fn get(&self, account_id: AccountId) -> DomainResult<Option<Profile>> {
        (**self).get(account_id)
    }

    fn insert_once(&self, profile: Profile) -> DomainResult<()> {
        (**self).insert_once(profile)
    }
}

/// In-memory profile store.
#[derive(Debug, Default)]
pub struct InMemoryProfileStore {
    inner: RwLock<HashMap<AccountId, Profile>>,
}

impl InMemoryProfileStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ProfileStore for InMemoryProfileStore {
    fn get(&self, account_id: AccountId) -> DomainResult<Option<Profile>> {
        let map = self
            .inner
            .read()
            .map_err(|_| DomainError::internal("profile store lock poisoned"))?;
        Ok(map.get(&account_id).cloned())
    }

    fn insert_once(&self, profile: Profile) -> DomainResult<()> {
        let mut map = self
            .inner
            .write()
            .map_err(|_| DomainError::internal("profile store lock poisoned"))?;
        if map.contains_key(&profile.account_id) {
            return Err(DomainError::ProfileAlreadyExists);
        }
        map.insert(profile.account_id, profile);
        Ok(())
    }
}
