//! Recruiter entity <-> model mapper

use sched_core::entities::Recruiter;

use crate::models::RecruiterModel;

/// Convert RecruiterModel to Recruiter entity
impl From<RecruiterModel> for Recruiter {
    fn from(model: RecruiterModel) -> Self {
        Recruiter {
            id: model.id,
            name: model.name,
            email: model.email,
            timezone: model.timezone,
            meet_access_token: model.meet_access_token,
            meet_refresh_token: model.meet_refresh_token,
        }
    }
}
