//! Invitation database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for the invitations table
///
/// Rows are never deleted; expiry is a timestamp comparison at read time.
#[derive(Debug, Clone, FromRow)]
pub struct InvitationModel {
    pub id: i64,
    pub recruiter_id: i64,
    pub token: String,
    pub used: bool,
    pub cancel_count: i32,
    pub expiration: DateTime<Utc>,
}
