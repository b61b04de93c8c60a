//! Data transfer objects for service requests and responses
//!
//! This module provides:
//! - Request DTOs with validation for service inputs
//! - Response DTOs for serializing service outputs

pub mod requests;
pub mod responses;

pub use requests::{
    parse_date, parse_time, BookSlotRequest, CancelByCandidateRequest, CreateDailySlicedRequest,
    CreateRecurringRequest, CreateSlotRequest, RegisterRecruiterRequest, SendInvitationRequest,
    UpdateSlotRequest, UpdateTimezoneRequest,
};
pub use responses::{
    AnalyticsResponse, BookingResponse, InvitationResponse, PublicSlotResponse, RecruiterResponse,
    SlotResponse,
};
