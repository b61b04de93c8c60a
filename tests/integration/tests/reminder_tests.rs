//! Reminder sweep scenarios: the two-hour window, idempotency via the
//! sent marker, and retry after a delivery failure.

use chrono::NaiveTime;
use integration_tests::{date, time, TestEnv};
use sched_service::dto::BookSlotRequest;
use sched_service::{BookingService, InvitationService, ReminderService};

/// Book a slot on 2025-06-01 starting at the given UTC time and return
/// the booking id.
async fn book_at(env: &TestEnv, recruiter_id: i64, start: NaiveTime) -> i64 {
    let end = start + chrono::Duration::minutes(30);
    let slot = env
        .backend
        .seed_slot(recruiter_id, date(2025, 6, 1), start, end);
    let invitation = InvitationService::new(&env.ctx).issue(recruiter_id).await.unwrap();
    let booking = BookingService::new(&env.ctx)
        .book(BookSlotRequest {
            candidate_name: "Kim".to_string(),
            candidate_email: "kim@example.com".to_string(),
            candidate_position: None,
            availability_id: slot.id,
            invitation_token: invitation.token,
        })
        .await
        .unwrap();
    booking.id
}

#[tokio::test]
async fn sweep_reminds_bookings_two_hours_out_and_marks_them() {
    let env = TestEnv::new(); // clock parked at 12:00 UTC
    let recruiter = env.backend.seed_recruiter("Dana", "dana@example.com", None);
    let booking_id = book_at(&env, recruiter.id, time(14, 0)).await;

    let sent = ReminderService::new(&env.ctx).sweep().await.unwrap();
    assert_eq!(sent, 1);

    let candidate_mail: Vec<_> = env
        .notifier
        .sent_to("kim@example.com")
        .into_iter()
        .filter(|(_, subject, _)| subject == "Reminder: Your Upcoming Interview")
        .collect();
    assert_eq!(candidate_mail.len(), 1);

    let recruiter_mail: Vec<_> = env
        .notifier
        .sent_to("dana@example.com")
        .into_iter()
        .filter(|(_, subject, _)| subject == "Reminder: Upcoming Interview")
        .collect();
    assert_eq!(recruiter_mail.len(), 1);

    let booking = env.backend.booking(booking_id).unwrap();
    assert!(booking.reminder_sent_at.is_some());
}

#[tokio::test]
async fn a_reminded_booking_is_skipped_by_later_sweeps() {
    let env = TestEnv::new();
    let recruiter = env.backend.seed_recruiter("Dana", "dana@example.com", None);
    book_at(&env, recruiter.id, time(14, 0)).await;

    let service = ReminderService::new(&env.ctx);
    assert_eq!(service.sweep().await.unwrap(), 1);
    assert_eq!(service.sweep().await.unwrap(), 0);
}

#[tokio::test]
async fn bookings_outside_the_window_are_left_alone() {
    let env = TestEnv::new();
    let recruiter = env.backend.seed_recruiter("Dana", "dana@example.com", None);
    // 14:06 is one minute past the +/- 5 minute window around 14:00
    let near_miss = book_at(&env, recruiter.id, time(14, 6)).await;
    let far_off = book_at(&env, recruiter.id, time(18, 0)).await;

    let sent = ReminderService::new(&env.ctx).sweep().await.unwrap();
    assert_eq!(sent, 0);
    assert!(env.backend.booking(near_miss).unwrap().reminder_sent_at.is_none());
    assert!(env.backend.booking(far_off).unwrap().reminder_sent_at.is_none());
}

#[tokio::test]
async fn failed_candidate_reminder_is_retried_on_the_next_sweep() {
    let env = TestEnv::new();
    let recruiter = env.backend.seed_recruiter("Dana", "dana@example.com", None);
    let booking_id = book_at(&env, recruiter.id, time(14, 0)).await;

    let service = ReminderService::new(&env.ctx);

    env.notifier.set_failing(true);
    assert_eq!(service.sweep().await.unwrap(), 0);
    // The marker stays unset so the booking remains due
    assert!(env.backend.booking(booking_id).unwrap().reminder_sent_at.is_none());

    env.notifier.set_failing(false);
    assert_eq!(service.sweep().await.unwrap(), 1);
    assert!(env.backend.booking(booking_id).unwrap().reminder_sent_at.is_some());
}
