//! Response DTOs for service operations
//!
//! All response DTOs implement `Serialize` for JSON output. Dates are
//! formatted as `YYYY-MM-DD` and times as `HH:MM`.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::Serialize;

use sched_core::entities::{AvailabilitySlot, Booking, Invitation, Recruiter};
use sched_core::timezone::SlotTimes;

fn format_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

fn format_time(time: NaiveTime) -> String {
    time.format("%H:%M").to_string()
}

/// Recruiter profile
#[derive(Debug, Serialize)]
pub struct RecruiterResponse {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub timezone: Option<String>,
    pub meet_connected: bool,
}

impl From<Recruiter> for RecruiterResponse {
    fn from(recruiter: Recruiter) -> Self {
        let meet_connected = recruiter.has_meet_credentials();
        Self {
            id: recruiter.id,
            name: recruiter.name,
            email: recruiter.email,
            timezone: recruiter.timezone,
            meet_connected,
        }
    }
}

/// A recruiter's slot, converted to their local zone and annotated with
/// booking details when claimed
#[derive(Debug, Serialize)]
pub struct SlotResponse {
    pub id: i64,
    pub date: String,
    pub start_time: String,
    pub end_time: String,
    pub booked: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub candidate_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub candidate_email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub candidate_position: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub booking_id: Option<i64>,
}

impl SlotResponse {
    /// Build from a slot and its local-zone times.
    pub fn new(slot: &AvailabilitySlot, local: SlotTimes) -> Self {
        Self {
            id: slot.id,
            date: format_date(local.date),
            start_time: format_time(local.start_time),
            end_time: format_time(local.end_time),
            booked: slot.booked,
            candidate_name: None,
            candidate_email: None,
            candidate_position: None,
            booking_id: None,
        }
    }

    /// Attach the claiming booking's candidate details.
    pub fn with_booking(mut self, booking: &Booking) -> Self {
        self.candidate_name = Some(booking.candidate_name.clone());
        self.candidate_email = Some(booking.candidate_email.clone());
        self.candidate_position = booking.candidate_position.clone();
        self.booking_id = Some(booking.id);
        self
    }
}

/// An unbooked slot as candidates see it (times exactly as stored, UTC)
#[derive(Debug, Serialize)]
pub struct PublicSlotResponse {
    pub id: i64,
    pub date: String,
    pub start_time: String,
    pub end_time: String,
}

impl From<AvailabilitySlot> for PublicSlotResponse {
    fn from(slot: AvailabilitySlot) -> Self {
        Self {
            id: slot.id,
            date: format_date(slot.date),
            start_time: format_time(slot.start_time),
            end_time: format_time(slot.end_time),
        }
    }
}

/// An issued invitation with its candidate-facing booking link
#[derive(Debug, Serialize)]
pub struct InvitationResponse {
    pub token: String,
    pub booking_link: String,
    pub expiration: DateTime<Utc>,
}

impl InvitationResponse {
    pub fn new(invitation: &Invitation, frontend_base: &str) -> Self {
        Self {
            token: invitation.token.clone(),
            booking_link: invitation.booking_url(frontend_base),
            expiration: invitation.expiration,
        }
    }
}

/// A confirmed booking
#[derive(Debug, Serialize)]
pub struct BookingResponse {
    pub id: i64,
    pub candidate_name: String,
    pub candidate_email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub candidate_position: Option<String>,
    pub availability_id: i64,
    pub date: String,
    pub start_time: String,
    pub end_time: String,
    pub meeting_link: String,
}

impl From<Booking> for BookingResponse {
    fn from(booking: Booking) -> Self {
        Self {
            id: booking.id,
            candidate_name: booking.candidate_name,
            candidate_email: booking.candidate_email,
            candidate_position: booking.candidate_position,
            availability_id: booking.availability_id,
            date: format_date(booking.date),
            start_time: format_time(booking.start_time),
            end_time: format_time(booking.end_time),
            meeting_link: booking.meeting_link,
        }
    }
}

/// Booking counts for a recruiter
#[derive(Debug, Serialize)]
pub struct AnalyticsResponse {
    pub total_bookings: i64,
    pub upcoming_bookings: i64,
}
