//! Reminder worker entry point
//!
//! Run with:
//! ```bash
//! cargo run -p sched-reminderd
//! ```
//!
//! Sweeps for bookings starting about two hours out and emails both
//! parties on a fixed interval. Configuration is loaded from environment
//! variables.

use std::sync::Arc;
use std::time::Duration;

use sched_common::{try_init_tracing, AppConfig};
use sched_connect::{notifier_from_config, HttpMeetingProvisioner};
use sched_core::traits::SystemClock;
use sched_db::{
    create_pool, run_migrations, PgBookingRepository, PgInvitationRepository,
    PgRecruiterRepository, PgSlotRepository,
};
use sched_service::{ReminderService, ServiceContextBuilder};
use tracing::{error, info};

#[tokio::main]
async fn main() {
    // Initialize tracing
    if let Err(e) = try_init_tracing() {
        eprintln!("Warning: Failed to initialize tracing: {e}");
    }

    // Run the worker
    if let Err(e) = run().await {
        error!(error = %e, "Reminder worker failed");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    info!("Starting reminder worker...");

    // Load configuration
    let config = AppConfig::from_env().map_err(|e| {
        error!(error = %e, "Failed to load configuration");
        e
    })?;

    info!(
        env = ?config.app.env,
        interval_secs = config.scheduling.reminder_interval_secs,
        "Configuration loaded"
    );

    // Database pool and repositories
    let pool = create_pool(&config.database).await?;
    run_migrations(&pool).await?;

    let recruiter_repo = Arc::new(PgRecruiterRepository::new(pool.clone()));
    let slot_repo = Arc::new(PgSlotRepository::new(pool.clone()));
    let invitation_repo = Arc::new(PgInvitationRepository::new(pool.clone()));
    let booking_repo = Arc::new(PgBookingRepository::new(pool));

    // Collaborators
    let notifier = notifier_from_config(&config.mail);
    let provisioner = Arc::new(HttpMeetingProvisioner::new(
        config.meeting.clone(),
        recruiter_repo.clone(),
    )?);

    let ctx = ServiceContextBuilder::new()
        .recruiter_repo(recruiter_repo)
        .slot_repo(slot_repo)
        .invitation_repo(invitation_repo)
        .booking_repo(booking_repo)
        .notifier(notifier)
        .provisioner(provisioner)
        .clock(Arc::new(SystemClock))
        .scheduling(config.scheduling.clone())
        .build()?;

    let mut ticker =
        tokio::time::interval(Duration::from_secs(config.scheduling.reminder_interval_secs));

    info!("Reminder worker started");
    loop {
        ticker.tick().await;
        match ReminderService::new(&ctx).sweep().await {
            Ok(sent) => {
                if sent > 0 {
                    info!(sent, "Reminders dispatched");
                }
            }
            Err(e) => error!(error = %e, "Reminder sweep failed"),
        }
    }
}
