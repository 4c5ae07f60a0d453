//! `svcmarket-profiles`: profile completion and role-scoped unique IDs.

pub mod profile;
pub mod service;
pub mod store;
pub mod unique_id;

pub use profile::Profile;
pub use service::{CompleteProfile, CompletedProfile, ProfileService, ProfileView};
pub use store::{InMemoryProfileStore, ProfileStore};
pub use unique_id::UniqueId;
