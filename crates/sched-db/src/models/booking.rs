//! Booking database model

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use sqlx::FromRow;

/// Database model for the bookings table
///
/// Date/time columns are the UTC snapshot taken when the slot was claimed.
#[derive(Debug, Clone, FromRow)]
pub struct BookingModel {
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
