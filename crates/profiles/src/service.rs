//! Profile completion workflow on top of the identity and profile stores.

use chrono::{DateTime, Utc};
use rand::Rng;

use svcmarket_auth::{AccountSummary, IdentityStore, Role};
use svcmarket_core::{AccountId, DomainError, DomainResult};

use crate::{Profile, ProfileStore, UniqueId};

/// Input to profile completion.
#[derive(Debug, Clone)]
pub struct CompleteProfile {
    pub role: Role,
    pub profile_data: serde_json::Value,
    pub business_initials: Option<String>,
    pub chosen_number: Option<u32>,
}

/// An account together with its profile, if it has one.
#[derive(Debug, Clone, PartialEq)]
pub struct ProfileView {
    pub account: AccountSummary,
    pub profile: Option<Profile>,
}

/// Outcome of a successful profile completion.
#[derive(Debug, Clone, PartialEq)]
pub struct CompletedProfile {
    pub account: AccountSummary,
    pub profile: Profile,
}

/// Drives the `Registered -> ProfileCompleted` transition.
pub struct ProfileService<I, P> {
    identity: I,
    profiles: P,
}

impl<I, P> ProfileService<I, P>
where
    I: IdentityStore,
    P: ProfileStore,
{
    pub fn new(identity: I, profiles: P) -> Self {
        Self { identity, profiles }
    }

    pub fn identity(&self) -> &I {
        &self.identity
    }

    /// True until the account has a profile.
    pub fn needs_profile_completion(&self, account_id: AccountId) -> DomainResult<bool> {
        Ok(!self.profiles.exists(account_id)?)
    }

    pub fn get_profile(&self, account_id: AccountId) -> DomainResult<ProfileView> {
        let mut account = self.identity.account(account_id)?;
        let profile = self.profiles.get(account_id)?;
        account.profile_completed = profile.is_some();
        Ok(ProfileView { account, profile })
    }

    pub fn complete_profile<R: Rng + ?Sized>(
        &self,
        account_id: AccountId,
        request: CompleteProfile,
        now: DateTime<Utc>,
        rng: &mut R,
    ) -> DomainResult<CompletedProfile> {
        self.identity.account(account_id)?;
        if self.profiles.exists(account_id)? {
            return Err(DomainError::ProfileAlreadyExists);
        }

        let unique_id = UniqueId::generate(
            request.role,
            request.business_initials.as_deref(),
            request.chosen_number,
            now,
            rng,
        )?;

        let profile = Profile::new(account_id, unique_id, request.role, request.profile_data, now);
        self.profiles.insert_once(profile.clone())?;

        let account = self
            .identity
            .record_profile_completion(account_id, request.role, profile.unique_id.as_str())
            .inspect_err(|e| {
                tracing::warn!(
                    account_id = %account_id,
                    error = %e,
                    "profile stored but account update failed"
                );
            })?;

        tracing::info!(
            account_id = %account_id,
            role = %request.role,
            unique_id = %profile.unique_id,
            "profile completed"
        );

        Ok(CompletedProfile { account, profile })
    }
}
