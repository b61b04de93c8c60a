//! HTTP meeting provisioner
//!
//! Talks to the external meeting provider with the recruiter's stored
//! OAuth credentials. A 401 triggers exactly one token refresh and one
//! retry; every other failure path substitutes a locally generated link,
//! so provisioning can never fail a booking.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use tracing::{error, warn};

use sched_common::MeetingConfig;
use sched_core::entities::{generate_fallback_link, AvailabilitySlot, Recruiter};
use sched_core::traits::{MeetingProvisioner, ProvisionOutcome, RecruiterRepository};

/// Meeting creation request body sent to the provider
#[derive(Debug, Serialize)]
struct MeetingRequest {
    topic: &'static str,
    #[serde(rename = "type")]
    meeting_type: u8,
    start_time: String,
    duration: i64,
    timezone: &'static str,
    agenda: &'static str,
    settings: MeetingSettings,
}

#[derive(Debug, Serialize)]
struct MeetingSettings {
    host_video: bool,
    participant_video: bool,
    join_before_host: bool,
    mute_upon_entry: bool,
}

#[derive(Debug, Deserialize)]
struct MeetingCreated {
    join_url: Option<String>,
}

#[derive(Debug, Deserialize)]
struct TokenRefreshed {
    access_token: String,
    refresh_token: String,
}

/// HTTP implementation of MeetingProvisioner
pub struct HttpMeetingProvisioner {
    client: reqwest::Client,
    config: MeetingConfig,
    recruiters: Arc<dyn RecruiterRepository>,
}

impl HttpMeetingProvisioner {
    /// Build a provisioner with a bounded request timeout.
    ///
    /// Refreshed credentials are written back through the recruiter
    /// repository so the next provisioning call starts from the new token.
    pub fn new(
        config: MeetingConfig,
        recruiters: Arc<dyn RecruiterRepository>,
    ) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()?;

        Ok(Self {
            client,
            config,
            recruiters,
        })
    }

    fn fallback(&self) -> ProvisionOutcome {
        ProvisionOutcome::Fallback(generate_fallback_link(&self.config.fallback_domain))
    }

    fn meeting_request(slot: &AvailabilitySlot) -> MeetingRequest {
        let start = slot.date.and_time(slot.start_time);
        let duration = (slot.end_time - slot.start_time).num_minutes();

        MeetingRequest {
            topic: "Interview Meeting",
            meeting_type: 2,
            start_time: format!("{}Z", start.format("%Y-%m-%dT%H:%M:%S")),
            duration,
            timezone: "UTC",
            agenda: "Interview scheduled via the scheduler",
            settings: MeetingSettings {
                host_video: true,
                participant_video: true,
                join_before_host: false,
                mute_upon_entry: true,
            },
        }
    }

    /// One creation attempt. `Ok(Some(url))` on success, `Ok(None)` when
    /// the provider answered 401, `Err` for anything else.
    async fn try_create(
        &self,
        access_token: &str,
        request: &MeetingRequest,
    ) -> Result<Option<String>, String> {
        let response = self
            .client
            .post(&self.config.api_url)
            .bearer_auth(access_token)
            .json(request)
            .send()
            .await
            .map_err(|e| format!("meeting request failed: {e}"))?;

        match response.status() {
            StatusCode::CREATED => {
                let created: MeetingCreated = response
                    .json()
                    .await
                    .map_err(|e| format!("meeting response unreadable: {e}"))?;
                created
                    .join_url
                    .map(Some)
                    .ok_or_else(|| "meeting created but join_url missing".to_string())
            }
            StatusCode::UNAUTHORIZED => Ok(None),
            status => Err(format!("meeting creation rejected with status {status}")),
        }
    }

    /// Exchange the refresh token for new credentials and persist them.
    async fn refresh_credentials(&self, recruiter: &Recruiter) -> Option<String> {
        let refresh_token = recruiter.meet_refresh_token.as_deref()?;
        let client_id = self.config.client_id.as_deref()?;
        let client_secret = self.config.client_secret.as_deref()?;

        let response = self
            .client
            .post(&self.config.token_url)
            .basic_auth(client_id, Some(client_secret))
            .query(&[
                ("grant_type", "refresh_token"),
                ("refresh_token", refresh_token),
            ])
            .send()
            .await;

        let response = match response {
            Ok(r) if r.status().is_success() => r,
            Ok(r) => {
                error!(status = %r.status(), "credential refresh rejected");
                return None;
            }
            Err(e) => {
                error!(error = %e, "credential refresh request failed");
                return None;
            }
        };

        let refreshed: TokenRefreshed = match response.json().await {
            Ok(t) => t,
            Err(e) => {
                error!(error = %e, "credential refresh response unreadable");
                return None;
            }
        };

        if let Err(e) = self
            .recruiters
            .update_meet_tokens(recruiter.id, &refreshed.access_token, &refreshed.refresh_token)
            .await
        {
            // The refreshed token still works for this attempt even if the
            // write-back failed.
            error!(error = %e, recruiter_id = recruiter.id, "failed to persist refreshed credentials");
        }

        Some(refreshed.access_token)
    }
}

#[async_trait]
impl MeetingProvisioner for HttpMeetingProvisioner {
    async fn provision(&self, recruiter: &Recruiter, slot: &AvailabilitySlot) -> ProvisionOutcome {
        let Some(access_token) = recruiter.meet_access_token.as_deref() else {
            warn!(
                recruiter_id = recruiter.id,
                "recruiter has no meeting provider credentials, using fallback link"
            );
            return self.fallback();
        };

        let request = Self::meeting_request(slot);

        match self.try_create(access_token, &request).await {
            Ok(Some(url)) => return ProvisionOutcome::Created(url),
            Ok(None) => {}
            Err(e) => {
                error!(recruiter_id = recruiter.id, "{e}, using fallback link");
                return self.fallback();
            }
        }

        // 401: refresh once and retry once.
        let Some(new_token) = self.refresh_credentials(recruiter).await else {
            return self.fallback();
        };

        match self.try_create(&new_token, &request).await {
            Ok(Some(url)) => ProvisionOutcome::RetriedAfterRefresh(url),
            Ok(None) => {
                error!(
                    recruiter_id = recruiter.id,
                    "meeting creation still unauthorized after refresh, using fallback link"
                );
                self.fallback()
            }
            Err(e) => {
                error!(
                    recruiter_id = recruiter.id,
                    "{e} after credential refresh, using fallback link"
                );
                self.fallback()
            }
        }
    }
}
