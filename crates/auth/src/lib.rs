//! `svcmarket-auth`: identity & session store.
//!
//! Accounts, credentials, bearer sessions and the role catalogue. This crate
//! is decoupled from HTTP; the API layer injects a store into its handlers.

pub mod account;
pub mod roles;
pub mod session;
pub mod store;

pub use account::{Account, AccountSummary, Credential, Registration};
pub use roles::{Role, RoleInfo, catalogue};
pub use session::{IssuedSession, SessionToken};
pub use store::{IdentityStore, InMemoryIdentityStore};
