//! Collaborator traits (ports) for external services
//!
//! The notifier and meeting provisioner are consumed, not specified: their
//! failures never fail a committed booking mutation. The clock is injected
//! so expiry and reminder windows are testable with a fake.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::entities::{AvailabilitySlot, Recruiter};

/// Notifier failure; always absorbed (logged) by the caller except during
/// invitation delivery, where an undeliverable email makes the operation
/// pointless.
#[derive(Debug, Error)]
pub enum NotifyError {
    #[error("notification transport error: {0}")]
    Transport(String),

    #[error("notification rejected: {0}")]
    Rejected(String),
}

/// Outbound message delivery.
#[async_trait]
pub trait Notifier: Send + Sync {
    async fn send(&self, recipient: &str, subject: &str, body: &str) -> Result<(), NotifyError>;
}

/// Result of asking the external provider for a meeting link.
///
/// The two-attempt strategy (401, refresh, retry once) is explicit in the
/// type rather than buried in control flow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProvisionOutcome {
    /// Provider created the meeting on the first attempt
    Created(String),

    /// Provider created the meeting after a credential refresh
    RetriedAfterRefresh(String),

    /// Provider unreachable or rejected both attempts; a locally generated
    /// link is substituted
    Fallback(String),
}

impl ProvisionOutcome {
    /// The join URL, whichever path produced it.
    pub fn url(&self) -> &str {
        match self {
            Self::Created(url) | Self::RetriedAfterRefresh(url) | Self::Fallback(url) => url,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, Self::Fallback(_))
    }
}

/// Meeting-link provisioning. Must return within a bounded time; on any
/// provider failure the implementation substitutes a fallback link, so
/// booking never fails for provisioning reasons.
#[async_trait]
pub trait MeetingProvisioner: Send + Sync {
    async fn provision(&self, recruiter: &Recruiter, slot: &AvailabilitySlot) -> ProvisionOutcome;
}

/// Injected clock.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// Wall clock; the production implementation.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
