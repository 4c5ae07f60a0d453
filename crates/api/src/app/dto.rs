use axum::extract::FromRequest;
use chrono::{DateTime, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};

use svcmarket_auth::{AccountSummary, RoleInfo, SessionToken};
use svcmarket_core::{DomainError, DomainResult};
use svcmarket_profiles::Profile;

use crate::app::errors::ApiError;

/// `axum::Json` whose rejections use the standard error envelope.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct ApiJson<T>(pub T);

// -------------------------
// Request DTOs
// -------------------------

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub phone: String,
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompleteProfileRequest {
    pub role: String,
    #[serde(default)]
    pub profile_data: serde_json::Value,
    pub business_initials: Option<String>,
    pub user_chosen_number: Option<ChosenNumber>,
}

/// `userChosenNumber` as sent by form-driven clients: a number or a numeric string.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum ChosenNumber {
    Number(u32),
    Text(String),
}

impl ChosenNumber {
    /// Blank text counts as "not chosen".
    pub fn into_number(self) -> DomainResult<Option<u32>> {
        match self {
            ChosenNumber::Number(n) => Ok(Some(n)),
            ChosenNumber::Text(s) if s.trim().is_empty() => Ok(None),
            ChosenNumber::Text(s) => s
                .trim()
                .parse()
                .map(Some)
                .map_err(|_| DomainError::validation("userChosenNumber must be a whole number")),
        }
    }
}

// -------------------------
// Response DTOs
// -------------------------

#[derive(Debug, Serialize)]
pub struct RolesResponse {
    pub success: bool,
    pub data: Vec<RoleInfo>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthResponse {
    pub success: bool,
    pub message: &'static str,
    pub token: SessionToken,
    pub user: AccountSummary,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub needs_profile_completion: Option<bool>,
}

#[derive(Debug, Serialize)]
pub struct ProfileResponse {
    pub success: bool,
    pub user: AccountSummary,
    pub profile: Option<Profile>,
}

#[derive(Debug, Serialize)]
pub struct CompleteProfileResponse {
    pub success: bool,
    pub message: &'static str,
    pub token: SessionToken,
    pub user: AccountSummary,
    pub profile: Profile,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardResponse {
    pub success: bool,
    pub dashboard_data: DashboardData,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardData {
    pub user: AccountSummary,
    pub stats: DashboardStats,
    pub generated_at: DateTime<Utc>,
}

/// Placeholder metrics; randomly generated on every request.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_bookings: u32,
    pub active_services: u32,
    pub revenue: f64,
    pub rating: f64,
    pub notifications: u32,
}

impl DashboardStats {
    pub fn placeholder<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            total_bookings: rng.random_range(0..100),
            active_services: rng.random_range(0..20),
            revenue: f64::from(rng.random_range(0..1_000_000u32)) / 100.0,
            rating: f64::from(rng.random_range(30..=50u32)) / 10.0,
            notifications: rng.random_range(0..10),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub success: bool,
    pub message: &'static str,
    pub timestamp: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    #[test]
    fn chosen_number_accepts_number_or_numeric_text() {
        let n: ChosenNumber = serde_json::from_str("7").unwrap();
        assert_eq!(n.into_number().unwrap(), Some(7));

        let t: ChosenNumber = serde_json::from_str("\" 0042 \"").unwrap();
        assert_eq!(t.into_number().unwrap(), Some(42));

        let blank: ChosenNumber = serde_json::from_str("\"\"").unwrap();
        assert_eq!(blank.into_number().unwrap(), None);

        let bad: ChosenNumber = serde_json::from_str("\"seven\"").unwrap();
        assert!(bad.into_number().is_err());
    }

    #[test]
    fn complete_profile_request_defaults() {
        let req: CompleteProfileRequest = serde_json::from_str(r#"{"role":"Customer"}"#).unwrap();
        assert!(req.profile_data.is_null());
        assert!(req.business_initials.is_none());
        assert!(req.user_chosen_number.is_none());
    }

    #[test]
    fn register_request_uses_camel_case() {
        let req: RegisterRequest = serde_json::from_str(
            r#"{"email":"a@b.c","password":"pw","firstName":"A","lastName":"B","phone":"1"}"#,
        )
        .unwrap();
        assert_eq!(req.first_name, "A");
        assert_eq!(req.last_name, "B");
    }

    #[test]
    fn placeholder_stats_stay_in_range() {
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..200 {
            let s = DashboardStats::placeholder(&mut rng);
            assert!(s.total_bookings < 100);
            assert!(s.active_services < 20);
            assert!((0.0..10_000.0).contains(&s.revenue));
            assert!((3.0..=5.0).contains(&s.rating));
            assert!(s.notifications < 10);
        }
    }
}
