//! Availability slot entity <-> model mapper

use sched_core::entities::AvailabilitySlot;

use crate::models::AvailabilityModel;

/// Convert AvailabilityModel to AvailabilitySlot entity
impl From<AvailabilityModel> for AvailabilitySlot {
    fn from(model: AvailabilityModel) -> Self {
        AvailabilitySlot {
            id: model.id,
            recruiter_id: model.recruiter_id,
            date: model.date,
            start_time: model.start_time,
            end_time: model.end_time,
            booked: model.booked,
        }
    }
}
