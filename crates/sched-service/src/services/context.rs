//! Service context - dependency container for services
//!
//! Holds the repositories, external collaborators, clock, and scheduling
//! settings that every service needs.

use std::sync::Arc;

use sched_common::SchedulingConfig;
use sched_core::traits::{
    BookingRepository, Clock, InvitationRepository, MeetingProvisioner, Notifier,
    RecruiterRepository, SlotRepository,
};

/// Service context containing all dependencies
///
/// This is the main dependency container that gets passed to all services.
/// It provides access to:
/// - Database repositories
/// - The notifier and meeting provisioner collaborators
/// - The injected clock (expiry and reminder windows are evaluated
///   against it, never against the wall clock directly)
/// - Scheduling settings (frontend base URL, reminder windows)
#[derive(Clone)]
pub struct ServiceContext {
    // Repositories
    recruiter_repo: Arc<dyn RecruiterRepository>,
    slot_repo: Arc<dyn SlotRepository>,
    invitation_repo: Arc<dyn InvitationRepository>,
    booking_repo: Arc<dyn BookingRepository>,

    // External collaborators
    notifier: Arc<dyn Notifier>,
    provisioner: Arc<dyn MeetingProvisioner>,

    // Clock
    clock: Arc<dyn Clock>,

    // Settings
    scheduling: SchedulingConfig,
}

impl ServiceContext {
    /// Create a new service context with all dependencies
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        recruiter_repo: Arc<dyn RecruiterRepository>,
        slot_repo: Arc<dyn SlotRepository>,
        invitation_repo: Arc<dyn InvitationRepository>,
        booking_repo: Arc<dyn BookingRepository>,
        notifier: Arc<dyn Notifier>,
        provisioner: Arc<dyn MeetingProvisioner>,
        clock: Arc<dyn Clock>,
        scheduling: SchedulingConfig,
    ) -> Self {
        Self {
            recruiter_repo,
            slot_repo,
            invitation_repo,
            booking_repo,
            notifier,
            provisioner,
            clock,
            scheduling,
        }
    }

    // === Repositories ===

    /// Get the recruiter repository
    pub fn recruiter_repo(&self) -> &dyn RecruiterRepository {
        self.recruiter_repo.as_ref()
    }

    /// Get the availability slot repository
    pub fn slot_repo(&self) -> &dyn SlotRepository {
        self.slot_repo.as_ref()
    }

    /// Get the invitation repository
    pub fn invitation_repo(&self) -> &dyn InvitationRepository {
        self.invitation_repo.as_ref()
    }

    /// Get the booking repository
    pub fn booking_repo(&self) -> &dyn BookingRepository {
        self.booking_repo.as_ref()
    }

    // === Collaborators ===

    /// Get the notifier
    pub fn notifier(&self) -> &dyn Notifier {
        self.notifier.as_ref()
    }

    /// Get the meeting provisioner
    pub fn provisioner(&self) -> &dyn MeetingProvisioner {
        self.provisioner.as_ref()
    }

    /// Get the clock
    pub fn clock(&self) -> &dyn Clock {
        self.clock.as_ref()
    }

    // === Settings ===

    /// Get the scheduling settings
    pub fn scheduling(&self) -> &SchedulingConfig {
        &self.scheduling
    }

    /// Base URL for candidate-facing links
    pub fn frontend_url(&self) -> &str {
        &self.scheduling.frontend_url
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("repositories", &"...")
            .field("collaborators", &"...")
            .field("scheduling", &self.scheduling)
            .finish()
    }
}

/// Builder for creating ServiceContext with custom configuration
pub struct ServiceContextBuilder {
    recruiter_repo: Option<Arc<dyn RecruiterRepository>>,
    slot_repo: Option<Arc<dyn SlotRepository>>,
    invitation_repo: Option<Arc<dyn InvitationRepository>>,
    booking_repo: Option<Arc<dyn BookingRepository>>,
    notifier: Option<Arc<dyn Notifier>>,
    provisioner: Option<Arc<dyn MeetingProvisioner>>,
    clock: Option<Arc<dyn Clock>>,
    scheduling: Option<SchedulingConfig>,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self {
            recruiter_repo: None,
            slot_repo: None,
            invitation_repo: None,
            booking_repo: None,
            notifier: None,
            provisioner: None,
            clock: None,
            scheduling: None,
        }
    }

    pub fn recruiter_repo(mut self, repo: Arc<dyn RecruiterRepository>) -> Self {
        self.recruiter_repo = Some(repo);
        self
    }

    pub fn slot_repo(mut self, repo: Arc<dyn SlotRepository>) -> Self {
        self.slot_repo = Some(repo);
        self
    }

    pub fn invitation_repo(mut self, repo: Arc<dyn InvitationRepository>) -> Self {
        self.invitation_repo = Some(repo);
        self
    }

    pub fn booking_repo(mut self, repo: Arc<dyn BookingRepository>) -> Self {
        self.booking_repo = Some(repo);
        self
    }

    pub fn notifier(mut self, notifier: Arc<dyn Notifier>) -> Self {
        self.notifier = Some(notifier);
        self
    }

    pub fn provisioner(mut self, provisioner: Arc<dyn MeetingProvisioner>) -> Self {
        self.provisioner = Some(provisioner);
        self
    }

    pub fn clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = Some(clock);
        self
    }

    pub fn scheduling(mut self, scheduling: SchedulingConfig) -> Self {
        self.scheduling = Some(scheduling);
        self
    }

    /// Build the ServiceContext
    ///
    /// # Errors
    /// Returns `ServiceError::Validation` if any required dependency is missing
    pub fn build(self) -> super::error::ServiceResult<ServiceContext> {
        use super::error::ServiceError;

        Ok(ServiceContext::new(
            self.recruiter_repo
                .ok_or_else(|| ServiceError::validation("recruiter_repo is required"))?,
            self.slot_repo
                .ok_or_else(|| ServiceError::validation("slot_repo is required"))?,
            self.invitation_repo
                .ok_or_else(|| ServiceError::validation("invitation_repo is required"))?,
            self.booking_repo
                .ok_or_else(|| ServiceError::validation("booking_repo is required"))?,
            self.notifier
                .ok_or_else(|| ServiceError::validation("notifier is required"))?,
            self.provisioner
                .ok_or_else(|| ServiceError::validation("provisioner is required"))?,
            self.clock
                .ok_or_else(|| ServiceError::validation("clock is required"))?,
            self.scheduling
                .ok_or_else(|| ServiceError::validation("scheduling is required"))?,
        ))
    }
}

impl Default for ServiceContextBuilder {
    fn default() -> Self {
        Self::new()
    }
}
