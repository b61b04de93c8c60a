//! Outbound mail delivery

mod http;
mod log;

use std::sync::Arc;

use sched_common::MailConfig;
use sched_core::traits::Notifier;

pub use http::HttpNotifier;
pub use log::LogNotifier;

/// Pick the notifier implied by the mail configuration: an HTTP relay when
/// one is configured, the log-only notifier otherwise.
pub fn notifier_from_config(config: &MailConfig) -> Arc<dyn Notifier> {
    match &config.relay_url {
        Some(relay_url) => Arc::new(HttpNotifier::new(relay_url.clone(), config.sender.clone())),
        None => Arc::new(LogNotifier::new(config.sender.clone())),
    }
}
