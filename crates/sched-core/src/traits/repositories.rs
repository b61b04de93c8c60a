//! Repository traits (ports) - define the interface for data access
//!
//! The domain layer defines what it needs; the infrastructure layer
//! provides the implementation. The multi-row booking transitions are
//! single trait methods so implementations can make them atomic.

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

use crate::entities::{AvailabilitySlot, Booking, Invitation, NewBooking, NewSlot, Recruiter};
use crate::error::DomainError;
use crate::timezone::SlotTimes;

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// Recruiter Repository
// ============================================================================

#[async_trait]
pub trait RecruiterRepository: Send + Sync {
    /// Find recruiter by ID
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Recruiter>>;

    /// Find recruiter by email (the verified identity supplied by the
    /// credential verifier)
    async fn find_by_email(&self, email: &str) -> RepoResult<Option<Recruiter>>;

    /// Check if email is already registered
    async fn email_exists(&self, email: &str) -> RepoResult<bool>;

    /// Create a new recruiter, returning the stored row
    async fn create(
        &self,
        name: &str,
        email: &str,
        timezone: Option<&str>,
    ) -> RepoResult<Recruiter>;

    /// Update the recruiter's timezone
    async fn update_timezone(&self, id: i64, timezone: &str) -> RepoResult<()>;

    /// Store refreshed meeting-provider credentials
    async fn update_meet_tokens(
        &self,
        id: i64,
        access_token: &str,
        refresh_token: &str,
    ) -> RepoResult<()>;
}

// ============================================================================
// Slot Repository
// ============================================================================

#[async_trait]
pub trait SlotRepository: Send + Sync {
    /// Find a slot by ID
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<AvailabilitySlot>>;

    /// Find a slot by ID, scoped to its owning recruiter
    async fn find_owned(&self, id: i64, recruiter_id: i64)
        -> RepoResult<Option<AvailabilitySlot>>;

    /// All slots for a recruiter
    async fn find_by_recruiter(&self, recruiter_id: i64) -> RepoResult<Vec<AvailabilitySlot>>;

    /// Slots for a recruiter on a given stored date
    async fn find_by_recruiter_and_date(
        &self,
        recruiter_id: i64,
        date: NaiveDate,
    ) -> RepoResult<Vec<AvailabilitySlot>>;

    /// Unbooked slots for a recruiter (public candidate view)
    async fn find_unbooked(&self, recruiter_id: i64) -> RepoResult<Vec<AvailabilitySlot>>;

    /// Insert one slot
    async fn create(&self, slot: &NewSlot) -> RepoResult<AvailabilitySlot>;

    /// Insert a batch of slots in one transaction, returning the count
    async fn create_many(&self, slots: &[NewSlot]) -> RepoResult<u64>;

    /// Overwrite a slot's date/time fields regardless of booked state
    async fn update_times(&self, id: i64, recruiter_id: i64, times: SlotTimes) -> RepoResult<()>;

    /// Delete a slot; fails with `SlotBooked` while a booking holds it
    async fn delete_unbooked(&self, id: i64, recruiter_id: i64) -> RepoResult<()>;
}

// ============================================================================
// Invitation Repository
// ============================================================================

#[async_trait]
pub trait InvitationRepository: Send + Sync {
    /// Persist a freshly issued invitation
    async fn create(
        &self,
        recruiter_id: i64,
        token: &str,
        expiration: DateTime<Utc>,
    ) -> RepoResult<Invitation>;

    /// Find an invitation by its opaque token
    async fn find_by_token(&self, token: &str) -> RepoResult<Option<Invitation>>;
}

// ============================================================================
// Booking Repository
// ============================================================================

#[async_trait]
pub trait BookingRepository: Send + Sync {
    /// Find a booking by ID
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Booking>>;

    /// Find a booking by ID, scoped to its recruiter
    async fn find_owned(&self, id: i64, recruiter_id: i64) -> RepoResult<Option<Booking>>;

    /// Find the booking holding a slot, if any
    async fn find_by_availability(&self, availability_id: i64) -> RepoResult<Option<Booking>>;

    /// Find the booking created under an invitation token, if any
    async fn find_by_token(&self, invitation_token: &str) -> RepoResult<Option<Booking>>;

    /// Total bookings for a recruiter
    async fn count_for_recruiter(&self, recruiter_id: i64) -> RepoResult<i64>;

    /// Bookings on or after the given UTC date
    async fn count_upcoming(&self, recruiter_id: i64, on_or_after: NaiveDate) -> RepoResult<i64>;

    /// Bookings starting inside the window with no reminder sent yet
    async fn find_due_reminders(
        &self,
        window_start: NaiveDateTime,
        window_end: NaiveDateTime,
    ) -> RepoResult<Vec<Booking>>;

    /// Record that a reminder went out for this booking
    async fn mark_reminder_sent(&self, id: i64, at: DateTime<Utc>) -> RepoResult<()>;

    /// Atomically claim the slot, insert the booking, and consume the
    /// invitation token. Exactly one of two concurrent callers racing for
    /// the same slot (or the same token) succeeds; the loser gets
    /// `SlotUnavailable` or `TokenAlreadyUsed`. A commit failure surfaces
    /// as `BookingFailed` with everything rolled back.
    async fn create_with_claim(&self, booking: &NewBooking) -> RepoResult<Booking>;

    /// Recruiter-initiated cancellation: delete the booking and release
    /// its slot in one transaction. The invitation is untouched.
    async fn delete_with_release(&self, booking_id: i64) -> RepoResult<()>;

    /// Candidate-initiated cancellation: delete the booking, release the
    /// slot, and increment the invitation's cancel count while re-arming
    /// it (`used = false`), all in one transaction. The increment is
    /// guarded by the cancellation cap; at the cap the whole transaction
    /// fails with `CancellationLimitReached` and nothing mutates.
    async fn delete_with_cancellation(
        &self,
        booking_id: i64,
        invitation_token: &str,
    ) -> RepoResult<()>;
}
