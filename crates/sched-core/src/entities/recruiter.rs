//! Recruiter entity - owns availability slots, bookings, and invitations

/// Recruiter entity
///
/// Credential material (password hash, OTP state) lives with the external
/// credential verifier; the meeting-provider tokens are carried here only
/// because the provisioner refreshes them per recruiter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recruiter {
    pub id: i64,
    pub name: String,
    pub email: String,
    /// IANA timezone name. `None` means the recruiter never picked one.
    pub timezone: Option<String>,
    pub meet_access_token: Option<String>,
    pub meet_refresh_token: Option<String>,
}

impl Recruiter {
    /// Effective timezone name, defaulting to UTC when unset.
    ///
    /// This is the only place the UTC fallback applies; the normalizer
    /// itself rejects unknown zone names.
    pub fn timezone_name(&self) -> &str {
        self.timezone.as_deref().unwrap_or("UTC")
    }

    /// Whether the recruiter has connected a meeting provider account.
    pub fn has_meet_credentials(&self) -> bool {
        self.meet_access_token.is_some()
    }
}
