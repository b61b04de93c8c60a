//! Invitation entity <-> model mapper

use sched_core::entities::Invitation;

use crate::models::InvitationModel;

/// Convert InvitationModel to Invitation entity
impl From<InvitationModel> for Invitation {
    fn from(model: InvitationModel) -> Self {
        Invitation {
            id: model.id,
            recruiter_id: model.recruiter_id,
            token: model.token,
            used: model.used,
            cancel_count: model.cancel_count,
            expiration: model.expiration,
        }
    }
}
