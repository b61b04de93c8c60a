//! Test environment wiring

use std::sync::Arc;

use chrono::{DateTime, NaiveDate, NaiveTime, TimeZone, Utc};

use sched_common::SchedulingConfig;
use sched_service::{ServiceContext, ServiceContextBuilder};

use crate::fakes::{
    FakeBookingRepository, FakeInvitationRepository, FakeNotifier, FakeProvisioner,
    FakeRecruiterRepository, FakeSlotRepository, InMemoryBackend, ManualClock,
};

/// Frontend base URL used in every test environment
pub const FRONTEND_URL: &str = "https://app.example.com";

/// A full service context over the in-memory backend, with handles to
/// the fakes for assertions.
pub struct TestEnv {
    pub ctx: ServiceContext,
    pub backend: Arc<InMemoryBackend>,
    pub notifier: Arc<FakeNotifier>,
    pub provisioner: Arc<FakeProvisioner>,
    pub clock: Arc<ManualClock>,
}

impl TestEnv {
    /// Environment with the clock parked at 2025-06-01 12:00 UTC.
    pub fn new() -> Self {
        Self::at(Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap())
    }

    pub fn at(now: DateTime<Utc>) -> Self {
        let backend = InMemoryBackend::new();
        let notifier = FakeNotifier::new();
        let provisioner = FakeProvisioner::new();
        let clock = ManualClock::at(now);

        let ctx = ServiceContextBuilder::new()
            .recruiter_repo(Arc::new(FakeRecruiterRepository(backend.clone())))
            .slot_repo(Arc::new(FakeSlotRepository(backend.clone())))
            .invitation_repo(Arc::new(FakeInvitationRepository(backend.clone())))
            .booking_repo(Arc::new(FakeBookingRepository(backend.clone())))
            .notifier(notifier.clone())
            .provisioner(provisioner.clone())
            .clock(clock.clone())
            .scheduling(SchedulingConfig {
                frontend_url: FRONTEND_URL.to_string(),
                reminder_lead_minutes: 120,
                reminder_window_minutes: 5,
                reminder_interval_secs: 600,
            })
            .build()
            .expect("test context wiring is complete");

        Self {
            ctx,
            backend,
            notifier,
            provisioner,
            clock,
        }
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}

/// Shorthand date constructor
pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// Shorthand time constructor
pub fn time(h: u32, m: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(h, m, 0).unwrap()
}
