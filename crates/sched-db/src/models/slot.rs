//! Availability slot database model

use chrono::{NaiveDate, NaiveTime};
use sqlx::FromRow;

/// Database model for the availabilities table (all times UTC)
#[derive(Debug, Clone, FromRow)]
pub struct AvailabilityModel {
    pub id: i64,
    pub recruiter_id: i64,
    pub date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub booked: bool,
}
