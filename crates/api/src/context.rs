use svcmarket_auth::SessionToken;
use svcmarket_core::AccountId;

/// Authenticated caller for a request.
///
/// Inserted by the bearer middleware; present on every protected route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountContext {
    account_id: AccountId,
    token: SessionToken,
}

impl AccountContext {
    pub fn new(account_id: AccountId, token: SessionToken) -> Self {
        Self { account_id, token }
    }

    pub fn account_id(&self) -> AccountId {
        self.account_id
    }

    /// The bearer token the request was made with.
    pub fn token(&self) -> &SessionToken {
        &self.token
    }
}
