//! # sched-core
//!
//! Domain layer for the interview-scheduling backend: entities, the
//! timezone normalizer, repository ports, and collaborator ports.
//! This crate has zero dependencies on infrastructure (database, HTTP, etc.).

pub mod entities;
pub mod error;
pub mod timezone;
pub mod traits;

// Re-export commonly used types at crate root
pub use entities::{
    generate_fallback_link, generate_invitation_token, AvailabilitySlot, Booking, Invitation,
    NewBooking, NewSlot, Recruiter, MAX_CANCELLATIONS,
};
pub use error::DomainError;
pub use timezone::{parse_zone, to_local, to_utc, SlotTimes};
pub use traits::{
    BookingRepository, Clock, InvitationRepository, MeetingProvisioner, Notifier, NotifyError,
    ProvisionOutcome, RecruiterRepository, RepoResult, SlotRepository, SystemClock,
};
