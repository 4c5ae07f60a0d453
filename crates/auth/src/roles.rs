use core::str::FromStr;

use serde::{Deserialize, Serialize};

use svcmarket_core::DomainError;

/// Marketplace account category.
///
/// The set is fixed; the serialized form is the wire id (`"BusinessOwner"`).
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    Customer,
    BusinessOwner,
    ServiceProvider,
    Wholesaler,
}

/// Client-facing description of a role (`GET /api/roles`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoleInfo {
    pub id: Role,
    pub name: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
}

impl Role {
    /// All roles in catalogue order.
    pub const ALL: [Role; 4] = [
        Role::Customer,
        Role::BusinessOwner,
        Role::ServiceProvider,
        Role::Wholesaler,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Customer => "Customer",
            Role::BusinessOwner => "BusinessOwner",
            Role::ServiceProvider => "ServiceProvider",
            Role::Wholesaler => "Wholesaler",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Role::Customer => "Customer",
            Role::BusinessOwner => "Business Owner",
            Role::ServiceProvider => "Service Provider",
            Role::Wholesaler => "Wholesaler",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Role::Customer => "Find and book services from trusted local businesses",
            Role::BusinessOwner => "Manage your business and connect with customers",
            Role::ServiceProvider => "Offer your professional services to the community",
            Role::Wholesaler => "Supply products to businesses and retailers",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Role::Customer => "fas fa-user",
            Role::BusinessOwner => "fas fa-briefcase",
            Role::ServiceProvider => "fas fa-tools",
            Role::Wholesaler => "fas fa-warehouse",
        }
    }

    /// Roles that identify a trading business and get business-style unique IDs.
    pub fn is_business(&self) -> bool {
        matches!(self, Role::BusinessOwner | Role::Wholesaler)
    }

    pub fn info(&self) -> RoleInfo {
        RoleInfo {
            id: *self,
            name: self.display_name(),
            description: self.description(),
            icon: self.icon(),
        }
    }
}

/// The static role catalogue.
pub fn catalogue() -> Vec<RoleInfo> {
    Role::ALL.iter().map(Role::info).collect()
}

impl core::fmt::Display for Role {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Role::ALL
            .into_iter()
            .find(|r| r.as_str() == s)
            .ok_or_else(|| {
                DomainError::validation(format!(
                    "role must be one of: Customer, BusinessOwner, ServiceProvider, \
                     Wholesaler (got {s:?})"
                ))
            })
    }
}
