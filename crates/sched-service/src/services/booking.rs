//! Booking service
//!
//! The booking engine: candidate booking under an invitation token,
//! recruiter- and candidate-initiated cancellation, and booking counts.
//!
//! A slot/invitation pair moves OPEN -> CLAIMED on booking, CLAIMED ->
//! REOPENED on a permitted candidate cancellation (the token re-arms),
//! and is terminal once the invitation expires or hits the cancellation
//! cap. All multi-table transitions are single repository transactions;
//! notifications always happen after commit and never fail an operation.

use tracing::{info, instrument, warn};
use validator::Validate;

use sched_core::entities::{Invitation, NewBooking};
use sched_core::DomainError;

use crate::dto::{AnalyticsResponse, BookSlotRequest, BookingResponse, CancelByCandidateRequest};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};
use super::invitation::InvitationService;

/// Booking service
pub struct BookingService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> BookingService<'a> {
    /// Create a new BookingService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Book a slot under an invitation token.
    ///
    /// The meeting link is provisioned before the claim transaction opens
    /// so no external round trip happens inside it. The claim itself is
    /// atomic: of two concurrent bookers of one slot (or one token),
    /// exactly one succeeds.
    #[instrument(skip(self, request), fields(availability_id = request.availability_id))]
    pub async fn book(&self, request: BookSlotRequest) -> ServiceResult<BookingResponse> {
        request.validate()?;

        let invitation = InvitationService::new(self.ctx)
            .validate_for_booking(&request.invitation_token)
            .await?;

        let slot = self
            .ctx
            .slot_repo()
            .find_by_id(request.availability_id)
            .await?
            .ok_or(DomainError::SlotNotFound(request.availability_id))?;
        if slot.booked {
            return Err(DomainError::SlotUnavailable.into());
        }

        let recruiter = self
            .ctx
            .recruiter_repo()
            .find_by_id(slot.recruiter_id)
            .await?
            .ok_or(DomainError::RecruiterNotFound(slot.recruiter_id))?;

        let outcome = self.ctx.provisioner().provision(&recruiter, &slot).await;
        if outcome.is_fallback() {
            warn!(
                recruiter_id = recruiter.id,
                slot_id = slot.id,
                "Meeting provisioning fell back to a generated link"
            );
        }
        let meeting_link = outcome.url().to_string();

        let booking = self
            .ctx
            .booking_repo()
            .create_with_claim(&NewBooking {
                candidate_name: request.candidate_name.clone(),
                candidate_email: request.candidate_email.clone(),
                candidate_position: request.candidate_position.clone(),
                availability_id: slot.id,
                recruiter_id: slot.recruiter_id,
                invitation_token: invitation.token.clone(),
                date: slot.date,
                start_time: slot.start_time,
                end_time: slot.end_time,
                meeting_link,
            })
            .await?;

        info!(
            booking_id = booking.id,
            slot_id = slot.id,
            recruiter_id = recruiter.id,
            "Slot booked"
        );

        self.send_booking_confirmations(&booking, &invitation, &recruiter.name, &recruiter.email)
            .await;

        Ok(BookingResponse::from(booking))
    }

    /// Post-commit booking notifications; failures are logged, never
    /// surfaced.
    async fn send_booking_confirmations(
        &self,
        booking: &sched_core::entities::Booking,
        invitation: &Invitation,
        recruiter_name: &str,
        recruiter_email: &str,
    ) {
        let cancellation_link =
            invitation.cancellation_url(self.ctx.frontend_url(), &booking.candidate_email);
        let position = booking.candidate_position.as_deref().unwrap_or("-");

        let candidate_body = format!(
            "Hello {},\n\n\
             Your interview is scheduled for {} at {}.\n\
             Position: {position}\n\
             Please join the meeting using this link: {}\n\n\
             If you need to cancel your booking, please use the following link:\n{cancellation_link}\n\n\
             Good luck!",
            booking.candidate_name, booking.date, booking.start_time, booking.meeting_link
        );
        if let Err(e) = self
            .ctx
            .notifier()
            .send(
                &booking.candidate_email,
                "Your Interview Slot is Confirmed",
                &candidate_body,
            )
            .await
        {
            warn!(booking_id = booking.id, error = %e, "Failed to send candidate confirmation");
        }

        let recruiter_body = format!(
            "Hello {recruiter_name},\n\n\
             A new booking has been made for the slot on {} from {} to {}.\n\
             Candidate: {} ({})\n\
             Position: {position}\n\
             Meeting Link: {}",
            booking.date,
            booking.start_time,
            booking.end_time,
            booking.candidate_name,
            booking.candidate_email,
            booking.meeting_link
        );
        if let Err(e) = self
            .ctx
            .notifier()
            .send(recruiter_email, "New Booking Received", &recruiter_body)
            .await
        {
            warn!(booking_id = booking.id, error = %e, "Failed to send recruiter alert");
        }
    }

    /// Recruiter-initiated cancellation: the booking is deleted and its
    /// slot released; the invitation is untouched, so the token stays
    /// spent.
    #[instrument(skip(self))]
    pub async fn cancel_by_recruiter(
        &self,
        recruiter_id: i64,
        booking_id: i64,
    ) -> ServiceResult<()> {
        let booking = self
            .ctx
            .booking_repo()
            .find_owned(booking_id, recruiter_id)
            .await?
            .ok_or(DomainError::BookingNotFound(booking_id))?;

        self.ctx.booking_repo().delete_with_release(booking_id).await?;

        info!(booking_id, recruiter_id, "Booking cancelled by recruiter");

        let body = format!(
            "Hello {},\n\n\
             Your interview booking scheduled for {} at {} has been cancelled.\n\
             Please contact the recruiter for further details.",
            booking.candidate_name, booking.date, booking.start_time
        );
        if let Err(e) = self
            .ctx
            .notifier()
            .send(
                &booking.candidate_email,
                "Your Interview Booking Has Been Cancelled",
                &body,
            )
            .await
        {
            warn!(booking_id, error = %e, "Failed to send cancellation notification");
        }

        Ok(())
    }

    /// Candidate-initiated cancellation.
    ///
    /// The booking is resolved by its stored invitation token and the
    /// supplied email must match it. Within the cancellation cap the
    /// token re-arms for rebooking; at the cap nothing mutates.
    #[instrument(skip(self, request))]
    pub async fn cancel_by_candidate(
        &self,
        request: CancelByCandidateRequest,
    ) -> ServiceResult<()> {
        request.validate()?;

        let invitation = self
            .ctx
            .invitation_repo()
            .find_by_token(&request.invitation_token)
            .await?
            .ok_or(DomainError::TokenNotFound)?;

        if invitation.is_expired(self.ctx.clock().now()) {
            return Err(DomainError::TokenExpired.into());
        }
        if !invitation.can_cancel() {
            return Err(DomainError::CancellationLimitReached.into());
        }

        let booking = self
            .ctx
            .booking_repo()
            .find_by_token(&invitation.token)
            .await?
            .ok_or_else(|| ServiceError::not_found("Booking", invitation.token.clone()))?;

        if booking.candidate_email != request.candidate_email {
            return Err(ServiceError::validation(
                "candidate email does not match this booking",
            ));
        }

        self.ctx
            .booking_repo()
            .delete_with_cancellation(booking.id, &invitation.token)
            .await?;

        info!(booking_id = booking.id, "Booking cancelled by candidate");

        let candidate_body = format!(
            "Hello {},\n\n\
             Your booking has been cancelled. You may rebook using your invitation token \
             if needed (cancellations allowed: 2 times).\n\n\
             Best regards,\nYour Recruitment Team",
            request.candidate_name
        );
        if let Err(e) = self
            .ctx
            .notifier()
            .send(&request.candidate_email, "Booking Cancelled", &candidate_body)
            .await
        {
            warn!(booking_id = booking.id, error = %e, "Failed to send candidate cancellation notice");
        }

        match self
            .ctx
            .recruiter_repo()
            .find_by_id(booking.recruiter_id)
            .await
        {
            Ok(Some(recruiter)) => {
                let recruiter_body = format!(
                    "Hello {},\n\n\
                     The booking for the slot on {} from {} to {} has been cancelled by {} ({}).\n\n\
                     Best regards,\nYour Scheduler App",
                    recruiter.name,
                    booking.date,
                    booking.start_time,
                    booking.end_time,
                    request.candidate_name,
                    request.candidate_email
                );
                if let Err(e) = self
                    .ctx
                    .notifier()
                    .send(&recruiter.email, "Booking Cancelled", &recruiter_body)
                    .await
                {
                    warn!(booking_id = booking.id, error = %e, "Failed to send recruiter cancellation notice");
                }
            }
            Ok(None) => {}
            Err(e) => {
                warn!(booking_id = booking.id, error = %e, "Failed to load recruiter for cancellation notice");
            }
        }

        Ok(())
    }

    /// Total and upcoming booking counts for a recruiter. "Upcoming"
    /// means the stored UTC date is today or later, per the injected
    /// clock.
    #[instrument(skip(self))]
    pub async fn analytics(&self, recruiter_id: i64) -> ServiceResult<AnalyticsResponse> {
        let today = self.ctx.clock().now().date_naive();

        let total_bookings = self
            .ctx
            .booking_repo()
            .count_for_recruiter(recruiter_id)
            .await?;
        let upcoming_bookings = self
            .ctx
            .booking_repo()
            .count_upcoming(recruiter_id, today)
            .await?;

        Ok(AnalyticsResponse {
            total_bookings,
            upcoming_bookings,
        })
    }
}
