//! Business logic services
//!
//! This module contains all service layer implementations that handle
//! business logic, validation, and orchestration of domain operations.

pub mod availability;
pub mod booking;
pub mod context;
pub mod error;
pub mod invitation;
pub mod recruiter;
pub mod reminder;

// Re-export all services for convenience
pub use availability::AvailabilityService;
pub use booking::BookingService;
pub use context::{ServiceContext, ServiceContextBuilder};
pub use error::{ServiceError, ServiceResult};
pub use invitation::InvitationService;
pub use recruiter::RecruiterService;
pub use reminder::ReminderService;
