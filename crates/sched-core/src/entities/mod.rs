//! Domain entities

pub mod booking;
pub mod invitation;
pub mod recruiter;
pub mod slot;

pub use booking::{Booking, NewBooking};
pub use invitation::{generate_invitation_token, Invitation, MAX_CANCELLATIONS};
pub use recruiter::Recruiter;
pub use slot::{generate_fallback_link, intervals_overlap, AvailabilitySlot, NewSlot};
