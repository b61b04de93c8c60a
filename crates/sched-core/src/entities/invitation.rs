//! Invitation entity - a single-use, time-limited booking token
//!
//! Tokens re-arm on a permitted cancellation, so "single use" really means
//! at most one live booking per token at a time. Cancellations are capped;
//! past the cap the token is terminally spent.

use chrono::{DateTime, Duration, Utc};

/// Number of candidate-initiated cancellations allowed per invitation.
pub const MAX_CANCELLATIONS: i32 = 2;

/// Hours until a freshly issued invitation expires.
pub const INVITATION_TTL_HOURS: i64 = 48;

/// Invitation entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invitation {
    pub id: i64,
    pub recruiter_id: i64,
    pub token: String,
    pub used: bool,
    pub cancel_count: i32,
    pub expiration: DateTime<Utc>,
}

impl Invitation {
    /// Expiration timestamp for an invitation issued at `now`.
    pub fn expiration_from(now: DateTime<Utc>) -> DateTime<Utc> {
        now + Duration::hours(INVITATION_TTL_HOURS)
    }

    /// Check expiry against the supplied clock reading.
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.expiration < now
    }

    /// Whether another candidate-initiated cancellation is permitted.
    pub fn can_cancel(&self) -> bool {
        self.cancel_count < MAX_CANCELLATIONS
    }

    /// Booking link sent to the candidate.
    pub fn booking_url(&self, frontend_base: &str) -> String {
        format!(
            "{}/book-slot/{}/{}",
            frontend_base.trim_end_matches('/'),
            self.recruiter_id,
            self.token
        )
    }

    /// Cancellation link embedded in the confirmation email.
    pub fn cancellation_url(&self, frontend_base: &str, candidate_email: &str) -> String {
        format!(
            "{}/cancel-booking?email={}&token={}",
            frontend_base.trim_end_matches('/'),
            candidate_email,
            self.token
        )
    }
}

/// Generate an opaque invitation token (32 hex characters).
pub fn generate_invitation_token() -> String {
    uuid::Uuid::new_v4().simple().to_string()
}
