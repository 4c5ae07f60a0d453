//! Account records held by the identity store.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use svcmarket_core::{AccountId, DomainError, DomainResult};

use crate::Role;

/// Login secret as submitted by the client.
///
/// Stored verbatim (this backend does not hash); kept out of `Debug` output
/// and never serialized.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential(String);

impl Credential {
    pub fn new(secret: impl Into<String>) -> Self {
        Self(secret.into())
    }

    pub fn matches(&self, candidate: &str) -> bool {
        self.0 == candidate
    }
}

impl core::fmt::Debug for Credential {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str("Credential(***)")
    }
}

/// Input to registration.
#[derive(Debug, Clone)]
pub struct Registration {
    pub email: String,
    pub credential: Credential,
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
}

impl Registration {
    pub(crate) fn validate(&self) -> DomainResult<()> {
        if self.email.trim().is_empty() {
            return Err(DomainError::validation("email is required"));
        }
        if self.credential.matches("") {
            return Err(DomainError::validation("password is required"));
        }
        Ok(())
    }
}

/// A registered account.
///
/// # Invariants
/// - `email` is unique across the store (exact, case-sensitive match).
/// - `role`, `unique_id` and `profile_completed` are set together, once.
#[derive(Debug, Clone)]
pub struct Account {
    pub id: AccountId,
    pub email: String,
    pub credential: Credential,
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
    pub created_at: DateTime<Utc>,
    pub role: Option<Role>,
    pub unique_id: Option<String>,
    pub profile_completed: bool,
}

impl Account {
    pub fn new(id: AccountId, registration: Registration, now: DateTime<Utc>) -> Self {
        Self {
            id,
            email: registration.email,
            credential: registration.credential,
            first_name: registration.first_name,
            last_name: registration.last_name,
            phone: registration.phone,
            created_at: now,
            role: None,
            unique_id: None,
            profile_completed: false,
        }
    }

    /// Move the account into the profile-completed state.
    pub fn complete_profile(
        &mut self,
        role: Role,
        unique_id: impl Into<String>,
    ) -> DomainResult<()> {
        if self.profile_completed {
            return Err(DomainError::ProfileAlreadyExists);
        }
        self.role = Some(role);
        self.unique_id = Some(unique_id.into());
        self.profile_completed = true;
        Ok(())
    }

    pub fn summary(&self) -> AccountSummary {
        AccountSummary {
            id: self.id,
            email: self.email.clone(),
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            phone: self.phone.clone(),
            profile_completed: self.profile_completed,
            role: self.role,
            unique_id: self.unique_id.clone(),
        }
    }
}

/// Client-facing view of an account (no credential).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountSummary {
    pub id: AccountId,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
    pub profile_completed: bool,
    pub role: Option<Role>,
    pub unique_id: Option<String>,
}
