//! Application configuration structs
//!
//! Loads configuration from environment variables (with `.env` support).

use serde::Deserialize;
use std::env;

/// Main application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub app: AppSettings,
    pub database: DatabaseConfig,
    pub mail: MailConfig,
    pub meeting: MeetingConfig,
    pub scheduling: SchedulingConfig,
}

/// General application settings
#[derive(Debug, Clone, Deserialize)]
pub struct AppSettings {
    #[serde(default = "default_app_name")]
    pub name: String,
    #[serde(default = "default_env")]
    pub env: Environment,
}

/// Environment type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Staging,
    Production,
}

impl Environment {
    #[must_use]
    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }

    #[must_use]
    pub fn is_development(&self) -> bool {
        matches!(self, Self::Development)
    }
}

/// Database configuration
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    pub url: String,
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
    #[serde(default = "default_min_connections")]
    pub min_connections: u32,
    /// Maximum seconds to wait for a connection from the pool
    #[serde(default = "default_acquire_timeout_secs")]
    pub acquire_timeout_secs: u64,
    /// Seconds a connection may sit idle before being closed
    #[serde(default = "default_idle_timeout_secs")]
    pub idle_timeout_secs: u64,
    /// Maximum lifetime of a pooled connection, in seconds
    #[serde(default = "default_max_lifetime_secs")]
    pub max_lifetime_secs: u64,
}

/// Outbound mail relay configuration
#[derive(Debug, Clone, Deserialize)]
pub struct MailConfig {
    /// HTTP relay endpoint. When absent, messages are logged instead of
    /// delivered (development mode).
    pub relay_url: Option<String>,
    #[serde(default = "default_mail_sender")]
    pub sender: String,
}

/// Meeting provider configuration
#[derive(Debug, Clone, Deserialize)]
pub struct MeetingConfig {
    #[serde(default = "default_meeting_api_url")]
    pub api_url: String,
    #[serde(default = "default_meeting_token_url")]
    pub token_url: String,
    pub client_id: Option<String>,
    pub client_secret: Option<String>,
    #[serde(default = "default_meeting_timeout_secs")]
    pub request_timeout_secs: u64,
    /// Host used when generating fallback join links
    #[serde(default = "default_fallback_domain")]
    pub fallback_domain: String,
}

/// Scheduling behavior configuration
#[derive(Debug, Clone, Deserialize)]
pub struct SchedulingConfig {
    /// Base URL for candidate-facing booking and cancellation links
    pub frontend_url: String,
    /// How far ahead of the interview the reminder fires, in minutes
    #[serde(default = "default_reminder_lead_minutes")]
    pub reminder_lead_minutes: i64,
    /// Half-width of the reminder matching window, in minutes
    #[serde(default = "default_reminder_window_minutes")]
    pub reminder_window_minutes: i64,
    /// Seconds between reminder sweeps
    #[serde(default = "default_reminder_interval_secs")]
    pub reminder_interval_secs: u64,
}

// Default value functions
fn default_app_name() -> String {
    "sched-server".to_string()
}

fn default_env() -> Environment {
    Environment::Development
}

fn default_max_connections() -> u32 {
    20
}

fn default_min_connections() -> u32 {
    5
}

fn default_acquire_timeout_secs() -> u64 {
    10
}

fn default_idle_timeout_secs() -> u64 {
    300
}

fn default_max_lifetime_secs() -> u64 {
    1800
}

fn default_mail_sender() -> String {
    "no-reply@scheduler.local".to_string()
}

fn default_meeting_api_url() -> String {
    "https://api.zoom.us/v2/users/me/meetings".to_string()
}

fn default_meeting_token_url() -> String {
    "https://zoom.us/oauth/token".to_string()
}

fn default_meeting_timeout_secs() -> u64 {
    10
}

fn default_fallback_domain() -> String {
    "meet.jit.si".to_string()
}

fn default_reminder_lead_minutes() -> i64 {
    120
}

fn default_reminder_window_minutes() -> i64 {
    5
}

fn default_reminder_interval_secs() -> u64 {
    600
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    /// Returns an error if required environment variables are missing
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Ok(Self {
            app: AppSettings {
                name: env::var("APP_NAME").unwrap_or_else(|_| default_app_name()),
                env: env::var("APP_ENV")
                    .ok()
                    .and_then(|s| match s.to_lowercase().as_str() {
                        "production" => Some(Environment::Production),
                        "staging" => Some(Environment::Staging),
                        "development" => Some(Environment::Development),
                        _ => None,
                    })
                    .unwrap_or_default(),
            },
            database: DatabaseConfig {
                url: env::var("DATABASE_URL")
                    .map_err(|_| ConfigError::MissingVar("DATABASE_URL"))?,
                max_connections: env::var("DATABASE_MAX_CONNECTIONS")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or_else(default_max_connections),
                min_connections: env::var("DATABASE_MIN_CONNECTIONS")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or_else(default_min_connections),
                acquire_timeout_secs: env::var("DATABASE_ACQUIRE_TIMEOUT_SECS")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or_else(default_acquire_timeout_secs),
                idle_timeout_secs: env::var("DATABASE_IDLE_TIMEOUT_SECS")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or_else(default_idle_timeout_secs),
                max_lifetime_secs: env::var("DATABASE_MAX_LIFETIME_SECS")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or_else(default_max_lifetime_secs),
            },
            mail: MailConfig {
                relay_url: env::var("MAIL_RELAY_URL").ok(),
                sender: env::var("MAIL_SENDER").unwrap_or_else(|_| default_mail_sender()),
            },
            meeting: MeetingConfig {
                api_url: env::var("MEETING_API_URL")
                    .unwrap_or_else(|_| default_meeting_api_url()),
                token_url: env::var("MEETING_TOKEN_URL")
                    .unwrap_or_else(|_| default_meeting_token_url()),
                client_id: env::var("MEETING_CLIENT_ID").ok(),
                client_secret: env::var("MEETING_CLIENT_SECRET").ok(),
                request_timeout_secs: env::var("MEETING_REQUEST_TIMEOUT_SECS")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or_else(default_meeting_timeout_secs),
                fallback_domain: env::var("MEETING_FALLBACK_DOMAIN")
                    .unwrap_or_else(|_| default_fallback_domain()),
            },
            scheduling: SchedulingConfig {
                frontend_url: env::var("FRONTEND_URL")
                    .map_err(|_| ConfigError::MissingVar("FRONTEND_URL"))?,
                reminder_lead_minutes: env::var("REMINDER_LEAD_MINUTES")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or_else(default_reminder_lead_minutes),
                reminder_window_minutes: env::var("REMINDER_WINDOW_MINUTES")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or_else(default_reminder_window_minutes),
                reminder_interval_secs: env::var("REMINDER_INTERVAL_SECS")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or_else(default_reminder_interval_secs),
            },
        })
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingVar(&'static str),

    #[error("Invalid value for {0}: {1}")]
    InvalidValue(&'static str, String),
}
