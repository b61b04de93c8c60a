//! # sched-service
//!
//! Application layer containing business logic, services, and DTOs.

pub mod dto;
pub mod services;

pub use services::{
    AvailabilityService, BookingService, InvitationService, RecruiterService, ReminderService,
    ServiceContext, ServiceContextBuilder, ServiceError, ServiceResult,
};
