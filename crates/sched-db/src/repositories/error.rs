//! Error handling utilities for repositories

use sched_core::error::DomainError;
use sqlx::Error as SqlxError;

/// Convert SQLx error to DomainError
pub fn map_db_error(e: SqlxError) -> DomainError {
    DomainError::DatabaseError(e.to_string())
}

/// Check for unique violation and return appropriate error or fallback
pub fn map_unique_violation<F>(e: SqlxError, on_unique: F) -> DomainError
where
    F: FnOnce() -> DomainError,
{
    if let Some(db_err) = e.as_database_error() {
        if db_err.is_unique_violation() {
            return on_unique();
        }
    }
    DomainError::DatabaseError(e.to_string())
}

/// Create a "recruiter not found" error
pub fn recruiter_not_found(id: i64) -> DomainError {
    DomainError::RecruiterNotFound(id)
}

/// Create a "slot not found" error
pub fn slot_not_found(id: i64) -> DomainError {
    DomainError::SlotNotFound(id)
}

/// Create a "booking not found" error
pub fn booking_not_found(id: i64) -> DomainError {
    DomainError::BookingNotFound(id)
}
