//! Request DTOs for service operations
//!
//! All request DTOs implement `Deserialize` and `Validate` for input
//! validation. Dates arrive as `YYYY-MM-DD` and times as `HH:MM`, in the
//! recruiter's local zone.

use chrono::{NaiveDate, NaiveTime};
use serde::Deserialize;
use validator::Validate;

use sched_core::error::DomainError;

/// Parse a `YYYY-MM-DD` date string
pub fn parse_date(value: &str) -> Result<NaiveDate, DomainError> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map_err(|_| DomainError::InvalidFormat(value.to_string()))
}

/// Parse an `HH:MM` time string
pub fn parse_time(value: &str) -> Result<NaiveTime, DomainError> {
    NaiveTime::parse_from_str(value, "%H:%M")
        .map_err(|_| DomainError::InvalidFormat(value.to_string()))
}

// ============================================================================
// Recruiter Requests
// ============================================================================

/// Recruiter registration request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RegisterRecruiterRequest {
    #[validate(length(min = 1, max = 100, message = "Name must be 1-100 characters"))]
    pub name: String,

    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    /// IANA timezone name; validated against the zone database when present
    pub timezone: Option<String>,
}

/// Timezone update request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateTimezoneRequest {
    #[validate(length(min = 1, message = "Timezone is required"))]
    pub timezone: String,
}

// ============================================================================
// Availability Requests
// ============================================================================

/// Single slot creation request (recruiter-local wall-clock times)
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateSlotRequest {
    #[validate(length(min = 1, message = "Date is required"))]
    pub date: String,

    #[validate(length(min = 1, message = "Start time is required"))]
    pub start_time: String,

    #[validate(length(min = 1, message = "End time is required"))]
    pub end_time: String,
}

/// Weekly recurring slot creation request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateRecurringRequest {
    #[validate(length(min = 1, message = "Start date is required"))]
    pub start_date: String,

    #[validate(length(min = 1, message = "End date is required"))]
    pub end_date: String,

    #[validate(length(min = 1, message = "Start time is required"))]
    pub start_time: String,

    #[validate(length(min = 1, message = "End time is required"))]
    pub end_time: String,
}

/// Daily window slicing request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateDailySlicedRequest {
    #[validate(length(min = 1, message = "Date is required"))]
    pub date: String,

    #[validate(length(min = 1, message = "Start time is required"))]
    pub start_time: String,

    #[validate(length(min = 1, message = "End time is required"))]
    pub end_time: String,

    #[validate(range(min = 1, max = 1440, message = "Duration must be 1-1440 minutes"))]
    pub duration_minutes: i64,
}

/// Slot update request (recruiter-local wall-clock times)
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateSlotRequest {
    #[validate(length(min = 1, message = "Date is required"))]
    pub date: String,

    #[validate(length(min = 1, message = "Start time is required"))]
    pub start_time: String,

    #[validate(length(min = 1, message = "End time is required"))]
    pub end_time: String,
}

// ============================================================================
// Invitation Requests
// ============================================================================

/// Invitation dispatch request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SendInvitationRequest {
    #[validate(length(min = 1, max = 100, message = "Candidate name must be 1-100 characters"))]
    pub candidate_name: String,

    #[validate(email(message = "Invalid email format"))]
    pub candidate_email: String,
}

// ============================================================================
// Booking Requests
// ============================================================================

/// Candidate booking request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct BookSlotRequest {
    #[validate(length(min = 1, max = 100, message = "Candidate name must be 1-100 characters"))]
    pub candidate_name: String,

    #[validate(email(message = "Invalid email format"))]
    pub candidate_email: String,

    pub candidate_position: Option<String>,

    pub availability_id: i64,

    #[validate(length(min = 1, message = "Invitation token is required"))]
    pub invitation_token: String,
}

/// Candidate-initiated cancellation request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CancelByCandidateRequest {
    #[validate(length(min = 1, max = 100, message = "Candidate name must be 1-100 characters"))]
    pub candidate_name: String,

    #[validate(email(message = "Invalid email format"))]
    pub candidate_email: String,

    #[validate(length(min = 1, message = "Invitation token is required"))]
    pub invitation_token: String,
}
