//! Identity & session storage.

use std::collections::HashMap;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use chrono::{DateTime, Utc};

use svcmarket_core::{AccountId, DomainError, DomainResult};

use crate::{Account, AccountSummary, IssuedSession, Registration, Role, SessionToken};

/// Accounts plus the token -> account session table.
pub trait IdentityStore: Send + Sync {
    /// Create an account and open a session for it.
    fn register(
        &self,
        registration: Registration,
        now: DateTime<Utc>,
    ) -> DomainResult<IssuedSession>;

    /// Open a new session for the account matching both email and credential.
    fn login(&self, email: &str, credential: &str) -> DomainResult<IssuedSession>;

    /// Resolve a bearer token to its account, returning the trimmed token it matched.
    fn authenticate(&self, token: Option<&str>) -> DomainResult<(AccountId, SessionToken)>;

    fn account(&self, account_id: AccountId) -> DomainResult<AccountSummary>;

    /// Record the one-time role/unique-ID assignment on the account.
    fn record_profile_completion(
        &self,
        account_id: AccountId,
        role: Role,
        unique_id: &str,
    ) -> DomainResult<AccountSummary>;
}

impl<S> IdentityStore for Arc<S>
where
    S: IdentityStore + ?Sized,
{
    fn register(
        &self,
        registration: Registration,
        now: DateTime<Utc>,
    ) -> DomainResult<IssuedSession> {
        (**self).register(registration, now)
    }

    fn login(&self, email: &str, credential: &str) -> DomainResult<IssuedSession> {
        (**self).login(email, credential)
    }

    fn authenticate(&self, token: Option<&str>) -> DomainResult<(AccountId, SessionToken)> {
        (**self).authenticate(token)
    }

    fn account(&self, account_id: AccountId) -> DomainResult<AccountSummary> {
        (**self).account(account_id)
    }

    fn record_profile_completion(
        &self,
        account_id: AccountId,
        role: Role,
        unique_id: &str,
    ) -> DomainResult<AccountSummary> {
        (**self).record_profile_completion(account_id, role, unique_id)
    }
}

#[derive(Debug, Default)]
struct IdentityState {
    accounts: HashMap<AccountId, Account>,
    by_email: HashMap<String, AccountId>,
    sessions: HashMap<SessionToken, AccountId>,
}

impl IdentityState {
    fn open_session(&mut self, account_id: AccountId) -> SessionToken {
        let token = SessionToken::issue();
        self.sessions.insert(token.clone(), account_id);
        token
    }
}

/// Process-local identity store. Everything is lost on restart.
#[derive(Debug, Default)]
pub struct InMemoryIdentityStore {
    inner: RwLock<IdentityState>,
}

impl InMemoryIdentityStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> DomainResult<RwLockReadGuard<'_, IdentityState>> {
        self.inner
            .read()
            .map_err(|_| DomainError::internal("identity store lock poisoned"))
    }

    fn write(&self) -> DomainResult<RwLockWriteGuard<'_, IdentityState>> {
        self.inner
            .write()
            .map_err(|_| DomainError::internal("identity store lock poisoned"))
    }
}

impl IdentityStore for InMemoryIdentityStore {
    fn register(
        &self,
        registration: Registration,
        now: DateTime<Utc>,
    ) -> DomainResult<IssuedSession> {
        registration.validate()?;

        let mut state = self.write()?;
        if state.by_email.contains_key(&registration.email) {
            return Err(DomainError::DuplicateEmail);
        }

        let account = Account::new(AccountId::new(), registration, now);
        let account_id = account.id;
        let summary = account.summary();
        state.by_email.insert(account.email.clone(), account_id);
        state.accounts.insert(account_id, account);
        let token = state.open_session(account_id);

        tracing::info!(account_id = %account_id, "account registered");
        Ok(IssuedSession { token, account: summary })
    }

    fn login(&self, email: &str, credential: &str) -> DomainResult<IssuedSession> {
        let mut state = self.write()?;

        let account = state
            .by_email
            .get(email)
            .and_then(|id| state.accounts.get(id))
            .filter(|a| a.credential.matches(credential))
            .ok_or(DomainError::InvalidCredentials)?;
        let account_id = account.id;
        let summary = account.summary();
        let token = state.open_session(account_id);

        tracing::info!(account_id = %account_id, "login succeeded");
        Ok(IssuedSession { token, account: summary })
    }

    fn authenticate(&self, token: Option<&str>) -> DomainResult<(AccountId, SessionToken)> {
        let token = token
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(SessionToken::from)
            .ok_or(DomainError::MissingToken)?;
        let state = self.read()?;
        let account_id = state
            .sessions
            .get(&token)
            .copied()
            .ok_or(DomainError::InvalidToken)?;
        Ok((account_id, token))
    }

    fn account(&self, account_id: AccountId) -> DomainResult<AccountSummary> {
        let state = self.read()?;
        state
            .accounts
            .get(&account_id)
            .map(Account::summary)
            .ok_or(DomainError::AccountNotFound)
    }

    fn record_profile_completion(
        &self,
        account_id: AccountId,
        role: Role,
        unique_id: &str,
    ) -> DomainResult<AccountSummary> {
        let mut state = self.write()?;
        let account = state
            .accounts
            .get_mut(&account_id)
            .ok_or(DomainError::AccountNotFound)?;
        account.complete_profile(role, unique_id)?;
        Ok(account.summary())
    }
}
