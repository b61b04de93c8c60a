//! Database row models

pub mod booking;
pub mod invitation;
pub mod recruiter;
pub mod slot;

pub use booking::BookingModel;
pub use invitation::InvitationModel;
pub use recruiter::RecruiterModel;
pub use slot::AvailabilityModel;
