//! Human-readable unique IDs issued at profile completion.
//!
//! Two shapes, picked by role:
//! - business roles (`BusinessOwner`, `Wholesaler`): `INITIALS-NNNN-XXXXXX`
//! - everyone else: `ROLE-TTTTTTTT-XXXXXX`
//!
//! `NNNN` is the caller's chosen number (or a random one) padded to four
//! digits, `TTTTTTTT` the last eight digits of the Unix millisecond clock and
//! `XXXXXX` six random characters from `[0-9A-Z]`. No collision check is made.

use chrono::{DateTime, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};

use svcmarket_auth::Role;
use svcmarket_core::{DomainError, DomainResult};

pub const DEFAULT_BUSINESS_INITIALS: &str = "BIZ";
pub const MAX_CHOSEN_NUMBER: u32 = 9_999;

const SUFFIX_LEN: usize = 6;
const SUFFIX_ALPHABET: &[u8] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const TIMESTAMP_MODULUS: i64 = 100_000_000;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UniqueId(String);

impl UniqueId {
    /// Build a unique ID for `role`.
    ///
    /// `business_initials` and `chosen_number` only apply to business roles
    /// and are ignored otherwise. Clock and randomness are injected so the
    /// result is reproducible under test.
    pub fn generate<R: Rng + ?Sized>(
        role: Role,
        business_initials: Option<&str>,
        chosen_number: Option<u32>,
        now: DateTime<Utc>,
        rng: &mut R,
    ) -> DomainResult<Self> {
        let id = if role.is_business() {
            let initials = normalize_initials(business_initials)?;
            let number = match chosen_number {
                Some(n) if n > MAX_CHOSEN_NUMBER => {
                    return Err(DomainError::validation(format!(
                        "userChosenNumber must be between 0 and {MAX_CHOSEN_NUMBER}"
                    )));
                }
                Some(n) => n,
                None => rng.random_range(0..=MAX_CHOSEN_NUMBER),
            };
            format!("{initials}-{number:04}-{}", random_suffix(rng))
        } else {
            let timestamp = now.timestamp_millis().rem_euclid(TIMESTAMP_MODULUS);
            format!(
                "{}-{timestamp:08}-{}",
                role.as_str().to_ascii_uppercase(),
                random_suffix(rng)
            )
        };
        Ok(Self(id))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for UniqueId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

fn normalize_initials(raw: Option<&str>) -> DomainResult<String> {
    let trimmed = raw.map(str::trim).unwrap_or_default();
    if trimmed.is_empty() {
        return Ok(DEFAULT_BUSINESS_INITIALS.to_string());
    }
    if !trimmed.chars().all(|c| c.is_ascii_alphanumeric()) {
        return Err(DomainError::validation(
            "businessInitials may only contain letters and digits",
        ));
    }
    Ok(trimmed.to_ascii_uppercase())
}

fn random_suffix<R: Rng + ?Sized>(rng: &mut R) -> String {
    (0..SUFFIX_LEN)
        .map(|_| char::from(SUFFIX_ALPHABET[rng.random_range(0..SUFFIX_ALPHABET.len())]))
        .collect()
}
