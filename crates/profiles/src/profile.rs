use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use svcmarket_auth::Role;
use svcmarket_core::{AccountId, ProfileId};

use crate::UniqueId;

/// A completed profile. At most one exists per account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub id: ProfileId,
    #[serde(rename = "userId")]
    pub account_id: AccountId,
    pub unique_id: UniqueId,
    pub role: Role,
    /// Role-specific payload supplied by the client, stored as-is.
    pub profile_data: serde_json::Value,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Profile {
    pub fn new(
        account_id: AccountId,
        unique_id: UniqueId,
        role: Role,
        profile_data: serde_json::Value,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            id: ProfileId::new(),
            account_id,
            unique_id,
            role,
            profile_data,
            created_at: now,
            updated_at: now,
        }
    }
}
