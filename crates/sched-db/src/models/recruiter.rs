//! Recruiter database model

use sqlx::FromRow;

/// Database model for the recruiters table
#[derive(Debug, Clone, FromRow)]
pub struct RecruiterModel {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub timezone: Option<String>,
    pub meet_access_token: Option<String>,
    pub meet_refresh_token: Option<String>,
}
