//! Log-only notifier for development and tests

use async_trait::async_trait;
use tracing::info;

use sched_core::traits::{Notifier, NotifyError};

/// Notifier that writes messages to the log instead of delivering them
pub struct LogNotifier {
    sender: String,
}

impl LogNotifier {
    pub fn new(sender: String) -> Self {
        Self { sender }
    }
}

#[async_trait]
impl Notifier for LogNotifier {
    async fn send(&self, recipient: &str, subject: &str, body: &str) -> Result<(), NotifyError> {
        info!(
            from = %self.sender,
            to = %recipient,
            subject = %subject,
            body = %body,
            "outbound message (log-only delivery)"
        );
        Ok(())
    }
}
