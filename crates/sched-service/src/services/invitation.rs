//! Invitation service
//!
//! Issues single-use booking tokens, emails them to candidates, and
//! validates tokens ahead of a booking attempt.

use tracing::{error, info, instrument};
use validator::Validate;

use sched_core::entities::{generate_invitation_token, Invitation};
use sched_core::DomainError;

use crate::dto::{InvitationResponse, SendInvitationRequest};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Invitation service
pub struct InvitationService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> InvitationService<'a> {
    /// Create a new InvitationService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Issue a fresh invitation: unused, zero cancellations, expiring 48
    /// hours from now.
    #[instrument(skip(self))]
    pub async fn issue(&self, recruiter_id: i64) -> ServiceResult<Invitation> {
        let token = generate_invitation_token();
        let expiration = Invitation::expiration_from(self.ctx.clock().now());

        let invitation = self
            .ctx
            .invitation_repo()
            .create(recruiter_id, &token, expiration)
            .await?;

        info!(recruiter_id, invitation_id = invitation.id, "Invitation issued");
        Ok(invitation)
    }

    /// Issue an invitation and email its booking link to the candidate.
    ///
    /// Unlike every other notification in the system, a delivery failure
    /// here is surfaced: an invitation nobody received cannot be used.
    /// The issued row remains either way.
    #[instrument(skip(self, request))]
    pub async fn send_invitation(
        &self,
        recruiter_id: i64,
        request: SendInvitationRequest,
    ) -> ServiceResult<InvitationResponse> {
        request.validate()?;

        let recruiter = self
            .ctx
            .recruiter_repo()
            .find_by_id(recruiter_id)
            .await?
            .ok_or(DomainError::RecruiterNotFound(recruiter_id))?;

        let invitation = self.issue(recruiter.id).await?;
        let booking_link = invitation.booking_url(self.ctx.frontend_url());
        let expiration_str = invitation.expiration.format("%Y-%m-%d %H:%M UTC");

        let body = format!(
            "Hello {},\n\n\
             You have been invited to book an interview slot. Please use the following link to schedule your interview:\n\n\
             {booking_link}\n\n\
             For your reference, your invitation token is: {}\n\
             This token (and the link) will expire on {expiration_str}.\n\n\
             Best regards,\nYour Recruitment Team",
            request.candidate_name, invitation.token
        );

        if let Err(e) = self
            .ctx
            .notifier()
            .send(&request.candidate_email, "Interview Invitation", &body)
            .await
        {
            error!(recruiter_id, error = %e, "Failed to send invitation");
            return Err(ServiceError::internal(format!(
                "failed to send invitation: {e}"
            )));
        }

        info!(recruiter_id, candidate_email = %request.candidate_email, "Invitation sent");
        Ok(InvitationResponse::new(&invitation, self.ctx.frontend_url()))
    }

    /// Validate a token for booking: it must exist, be unused, and be
    /// unexpired, checked in that order.
    #[instrument(skip(self, token))]
    pub async fn validate_for_booking(&self, token: &str) -> ServiceResult<Invitation> {
        let invitation = self
            .ctx
            .invitation_repo()
            .find_by_token(token)
            .await?
            .ok_or(DomainError::TokenNotFound)?;

        if invitation.used {
            return Err(DomainError::TokenAlreadyUsed.into());
        }
        if invitation.is_expired(self.ctx.clock().now()) {
            return Err(DomainError::TokenExpired.into());
        }

        Ok(invitation)
    }
}
