//! Booking entity <-> model mapper

use sched_core::entities::Booking;

use crate::models::BookingModel;

/// Convert BookingModel to Booking entity
impl From<BookingModel> for Booking {
    fn from(model: BookingModel) -> Self {
        Booking {
            id: model.id,
            candidate_name: model.candidate_name,
            candidate_email: model.candidate_email,
            candidate_position: model.candidate_position,
            availability_id: model.availability_id,
            recruiter_id: model.recruiter_id,
            invitation_token: model.invitation_token,
            date: model.date,
            start_time: model.start_time,
            end_time: model.end_time,
            meeting_link: model.meeting_link,
            reminder_sent_at: model.reminder_sent_at,
        }
    }
}
