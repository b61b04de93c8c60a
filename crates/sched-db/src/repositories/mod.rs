//! Repository implementations
//!
//! PostgreSQL implementations of the repository traits defined in
//! sched-core. Each repository handles database operations for a specific
//! domain entity; the booking repository owns the multi-table transitions.

mod booking;
mod error;
mod invitation;
mod recruiter;
mod slot;

pub use booking::PgBookingRepository;
pub use invitation::PgInvitationRepository;
pub use recruiter::PgRecruiterRepository;
pub use slot::PgSlotRepository;
