//! Recruiter service
//!
//! Registration, profile lookup, and timezone management. Credential
//! verification (passwords, OTP) lives with the external verifier; this
//! service trusts the identity it is handed.

use tracing::{info, instrument};
use validator::Validate;

use sched_core::timezone::parse_zone;
use sched_core::DomainError;

use crate::dto::{RecruiterResponse, RegisterRecruiterRequest, UpdateTimezoneRequest};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Recruiter service
pub struct RecruiterService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> RecruiterService<'a> {
    /// Create a new RecruiterService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Register a new recruiter. Email must be unique; the timezone, when
    /// supplied, must be a known IANA zone.
    #[instrument(skip(self, request))]
    pub async fn register(
        &self,
        request: RegisterRecruiterRequest,
    ) -> ServiceResult<RecruiterResponse> {
        request.validate()?;

        if let Some(tz) = request.timezone.as_deref() {
            parse_zone(tz)?;
        }

        if self
            .ctx
            .recruiter_repo()
            .email_exists(&request.email)
            .await?
        {
            return Err(DomainError::EmailAlreadyRegistered.into());
        }

        let recruiter = self
            .ctx
            .recruiter_repo()
            .create(&request.name, &request.email, request.timezone.as_deref())
            .await?;

        info!(recruiter_id = recruiter.id, "Recruiter registered");
        Ok(RecruiterResponse::from(recruiter))
    }

    /// Fetch a recruiter's profile
    #[instrument(skip(self))]
    pub async fn profile(&self, recruiter_id: i64) -> ServiceResult<RecruiterResponse> {
        let recruiter = self
            .ctx
            .recruiter_repo()
            .find_by_id(recruiter_id)
            .await?
            .ok_or(DomainError::RecruiterNotFound(recruiter_id))?;

        Ok(RecruiterResponse::from(recruiter))
    }

    /// Resolve a verified email to a recruiter profile, for the
    /// credential verifier collaborator.
    #[instrument(skip(self, email))]
    pub async fn find_by_email(&self, email: &str) -> ServiceResult<Option<RecruiterResponse>> {
        let recruiter = self.ctx.recruiter_repo().find_by_email(email).await?;
        Ok(recruiter.map(RecruiterResponse::from))
    }

    /// Update a recruiter's timezone after validating the zone name
    #[instrument(skip(self, request))]
    pub async fn update_timezone(
        &self,
        recruiter_id: i64,
        request: UpdateTimezoneRequest,
    ) -> ServiceResult<()> {
        request.validate()?;
        parse_zone(&request.timezone)?;

        self.ctx
            .recruiter_repo()
            .update_timezone(recruiter_id, &request.timezone)
            .await?;

        info!(recruiter_id, timezone = %request.timezone, "Recruiter timezone updated");
        Ok(())
    }
}
