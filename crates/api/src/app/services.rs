//! Service wiring shared by all handlers.
//!
//! The stores are owned here and injected into routes via `Extension`, so no
//! handler touches global state.

use std::sync::Arc;

use chrono::Utc;

use svcmarket_auth::{
    Credential, IdentityStore, InMemoryIdentityStore, IssuedSession, Registration, Role,
    SessionToken,
};
use svcmarket_core::{AccountId, DomainResult};
use svcmarket_profiles::{
    CompleteProfile, CompletedProfile, InMemoryProfileStore, ProfileService, ProfileStore,
    ProfileView,
};

use crate::app::dto::{self, DashboardData, DashboardStats};

type SharedIdentity = Arc<dyn IdentityStore>;
type SharedProfiles = Arc<dyn ProfileStore>;

/// Application services backing the HTTP surface.
pub struct AppServices {
    profiles: ProfileService<SharedIdentity, SharedProfiles>,
}

impl AppServices {
    pub fn new(identity: SharedIdentity, profiles: SharedProfiles) -> Self {
        Self {
            profiles: ProfileService::new(identity, profiles),
        }
    }

    /// Process-local stores; all state is lost on restart.
    pub fn in_memory() -> Self {
        Self::new(
            Arc::new(InMemoryIdentityStore::new()),
            Arc::new(InMemoryProfileStore::new()),
        )
    }

    fn identity(&self) -> &SharedIdentity {
        self.profiles.identity()
    }

    pub fn register(&self, body: dto::RegisterRequest) -> DomainResult<IssuedSession> {
        self.identity().register(
            Registration {
                email: body.email,
                credential: Credential::new(body.password),
                first_name: body.first_name,
                last_name: body.last_name,
                phone: body.phone,
            },
            Utc::now(),
        )
    }

    /// Log in and report whether the account still has to complete its profile.
    pub fn login(&self, body: dto::LoginRequest) -> DomainResult<(IssuedSession, bool)> {
        let mut session = self.identity().login(&body.email, &body.password)?;
        let needs_completion = self.profiles.needs_profile_completion(session.account.id)?;
        session.account.profile_completed = !needs_completion;
        Ok((session, needs_completion))
    }

    pub fn authenticate(&self, token: Option<&str>) -> DomainResult<(AccountId, SessionToken)> {
        self.identity().authenticate(token)
    }

    pub fn profile(&self, account_id: AccountId) -> DomainResult<ProfileView> {
        self.profiles.get_profile(account_id)
    }

    pub fn complete_profile(
        &self,
        account_id: AccountId,
        body: dto::CompleteProfileRequest,
    ) -> DomainResult<CompletedProfile> {
        let request = CompleteProfile {
            role: body.role.parse::<Role>()?,
            profile_data: body.profile_data,
            business_initials: body.business_initials,
            chosen_number: body
                .user_chosen_number
                .map(dto::ChosenNumber::into_number)
                .transpose()?
                .flatten(),
        };
        self.profiles
            .complete_profile(account_id, request, Utc::now(), &mut rand::rng())
    }

    pub fn dashboard(&self, account_id: AccountId) -> DomainResult<DashboardData> {
        let user = self.identity().account(account_id)?;
        Ok(DashboardData {
            user,
            stats: DashboardStats::placeholder(&mut rand::rng()),
            generated_at: Utc::now(),
        })
    }
}
