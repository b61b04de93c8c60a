//! # sched-connect
//!
//! Outbound connectors: the HTTP meeting provisioner (two-attempt
//! credential-refresh strategy with local fallback links) and the mail
//! notifiers (HTTP relay for production, log-only for development).

pub mod meeting;
pub mod notify;

pub use meeting::HttpMeetingProvisioner;
pub use notify::{notifier_from_config, HttpNotifier, LogNotifier};
