//! Domain errors - error types for the domain layer

use thiserror::Error;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("Recruiter not found: {0}")]
    RecruiterNotFound(i64),

    #[error("Availability slot not found: {0}")]
    SlotNotFound(i64),

    #[error("Booking not found: {0}")]
    BookingNotFound(i64),

    #[error("Invitation token not found")]
    TokenNotFound,

    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Invalid date or time format: {0}")]
    InvalidFormat(String),

    #[error("Invalid timezone: {0}")]
    InvalidTimezone(String),

    // =========================================================================
    // Conflict Errors
    // =========================================================================
    #[error("Slot is not available")]
    SlotUnavailable,

    #[error("Cannot delete a booked slot")]
    SlotBooked,

    #[error("This invitation has already been used")]
    TokenAlreadyUsed,

    #[error("This invitation has expired")]
    TokenExpired,

    #[error("Cancellation limit reached")]
    CancellationLimitReached,

    #[error("Email already registered")]
    EmailAlreadyRegistered,

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Booking could not be completed")]
    BookingFailed,
}

impl DomainError {
    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            // Not Found
            Self::RecruiterNotFound(_) => "UNKNOWN_RECRUITER",
            Self::SlotNotFound(_) => "UNKNOWN_SLOT",
            Self::BookingNotFound(_) => "UNKNOWN_BOOKING",
            Self::TokenNotFound => "UNKNOWN_INVITATION",

            // Validation
            Self::ValidationError(_) => "VALIDATION_ERROR",
            Self::InvalidFormat(_) => "INVALID_FORMAT",
            Self::InvalidTimezone(_) => "INVALID_TIMEZONE",

            // Conflict
            Self::SlotUnavailable => "SLOT_UNAVAILABLE",
            Self::SlotBooked => "SLOT_BOOKED",
            Self::TokenAlreadyUsed => "TOKEN_ALREADY_USED",
            Self::TokenExpired => "TOKEN_EXPIRED",
            Self::CancellationLimitReached => "CANCELLATION_LIMIT_REACHED",
            Self::EmailAlreadyRegistered => "EMAIL_ALREADY_REGISTERED",

            // Infrastructure
            Self::DatabaseError(_) => "DATABASE_ERROR",
            Self::BookingFailed => "BOOKING_FAILED",
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::RecruiterNotFound(_)
                | Self::SlotNotFound(_)
                | Self::BookingNotFound(_)
                | Self::TokenNotFound
        )
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::ValidationError(_) | Self::InvalidFormat(_) | Self::InvalidTimezone(_)
        )
    }

    /// Check if this is a conflict error
    pub fn is_conflict(&self) -> bool {
        matches!(
            self,
            Self::SlotUnavailable
                | Self::SlotBooked
                | Self::TokenAlreadyUsed
                | Self::TokenExpired
                | Self::CancellationLimitReached
                | Self::EmailAlreadyRegistered
        )
    }
}
