//! HTTP relay notifier

use async_trait::async_trait;
use serde::Serialize;
use tracing::instrument;

use sched_core::traits::{Notifier, NotifyError};

#[derive(Debug, Serialize)]
struct OutboundMessage<'a> {
    from: &'a str,
    to: &'a str,
    subject: &'a str,
    body: &'a str,
}

/// Notifier that posts messages to an HTTP mail relay
pub struct HttpNotifier {
    client: reqwest::Client,
    relay_url: String,
    sender: String,
}

impl HttpNotifier {
    pub fn new(relay_url: String, sender: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            relay_url,
            sender,
        }
    }
}

#[async_trait]
impl Notifier for HttpNotifier {
    #[instrument(skip(self, body))]
    async fn send(&self, recipient: &str, subject: &str, body: &str) -> Result<(), NotifyError> {
        let message = OutboundMessage {
            from: &self.sender,
            to: recipient,
            subject,
            body,
        };

        let response = self
            .client
            .post(&self.relay_url)
            .json(&message)
            .send()
            .await
            .map_err(|e| NotifyError::Transport(e.to_string()))?;

        if !response.status().is_success() {
            return Err(NotifyError::Rejected(format!(
                "relay answered {}",
                response.status()
            )));
        }

        Ok(())
    }
}
