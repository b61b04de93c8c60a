//! Reminder service
//!
//! Finds bookings starting about two hours out and emails both parties.
//! Each booking carries a `reminder_sent_at` marker, so the sweep is
//! idempotent across overlapping or repeated runs: a reminder whose
//! candidate email fails leaves the marker unset and is retried on the
//! next sweep.

use chrono::Duration;
use tracing::{info, instrument, warn};

use sched_core::entities::Booking;

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Reminder service
pub struct ReminderService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ReminderService<'a> {
    /// Create a new ReminderService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// One reminder sweep. Returns the number of reminders sent.
    #[instrument(skip(self))]
    pub async fn sweep(&self) -> ServiceResult<u64> {
        let now = self.ctx.clock().now();
        let scheduling = self.ctx.scheduling();
        let target = now + Duration::minutes(scheduling.reminder_lead_minutes);
        let window = Duration::minutes(scheduling.reminder_window_minutes);

        let due = self
            .ctx
            .booking_repo()
            .find_due_reminders((target - window).naive_utc(), (target + window).naive_utc())
            .await?;

        let mut sent = 0u64;
        for booking in due {
            if self.remind(&booking).await {
                self.ctx
                    .booking_repo()
                    .mark_reminder_sent(booking.id, now)
                    .await?;
                sent += 1;
            }
        }

        if sent > 0 {
            info!(sent, "Reminder sweep completed");
        }
        Ok(sent)
    }

    /// Send both reminder emails for one booking. Returns whether the
    /// candidate email went out; only then is the booking marked, the
    /// recruiter copy is best-effort.
    async fn remind(&self, booking: &Booking) -> bool {
        let candidate_body = format!(
            "Hello {},\n\n\
             This is a reminder that your interview is scheduled on {} at {}.\n\
             Please ensure you're available to join the meeting on time.\n\n\
             Best regards,\nYour Recruitment Team",
            booking.candidate_name, booking.date, booking.start_time
        );
        if let Err(e) = self
            .ctx
            .notifier()
            .send(
                &booking.candidate_email,
                "Reminder: Your Upcoming Interview",
                &candidate_body,
            )
            .await
        {
            warn!(booking_id = booking.id, error = %e, "Failed to send candidate reminder");
            return false;
        }

        match self
            .ctx
            .recruiter_repo()
            .find_by_id(booking.recruiter_id)
            .await
        {
            Ok(Some(recruiter)) => {
                let recruiter_body = format!(
                    "Hello {},\n\n\
                     This is a reminder that your interview with {} is scheduled on {} at {}.\n\n\
                     Best regards,\nYour Scheduler App",
                    recruiter.name, booking.candidate_name, booking.date, booking.start_time
                );
                if let Err(e) = self
                    .ctx
                    .notifier()
                    .send(
                        &recruiter.email,
                        "Reminder: Upcoming Interview",
                        &recruiter_body,
                    )
                    .await
                {
                    warn!(booking_id = booking.id, error = %e, "Failed to send recruiter reminder");
                }
            }
            Ok(None) => {}
            Err(e) => {
                warn!(booking_id = booking.id, error = %e, "Failed to load recruiter for reminder");
            }
        }

        true
    }
}
