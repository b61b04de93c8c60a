//! Booking entity - a claimed slot with candidate details

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};

/// Booking entity
///
/// Denormalizes the slot's UTC date/time at claim time; the snapshot is
/// immutable for the life of the booking. Carries the invitation token so
/// candidate-initiated cancellation resolves the booking unambiguously.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Booking {
    pub id: i64,
    pub candidate_name: String,
    pub candidate_email: String,
    pub candidate_position: Option<String>,
    pub availability_id: i64,
    pub recruiter_id: i64,
    pub invitation_token: String,
    pub date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub meeting_link: String,
    pub reminder_sent_at: Option<DateTime<Utc>>,
}

impl Booking {
    /// UTC start instant of the interview, for reminder-window matching.
    pub fn starts_at(&self) -> NaiveDateTime {
        self.date.and_time(self.start_time)
    }
}

/// Booking data prior to insertion (no id yet).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewBooking {
    pub candidate_name: String,
    pub candidate_email: String,
    pub candidate_position: Option<String>,
    pub availability_id: i64,
    pub recruiter_id: i64,
    pub invitation_token: String,
    pub date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub meeting_link: String,
}
