//! Availability scenarios: slot creation variants, updates, deletion,
//! and the recruiter/candidate listings.

use integration_tests::{date, time, TestEnv};
use sched_core::DomainError;
use sched_service::dto::{
    BookSlotRequest, CreateDailySlicedRequest, CreateRecurringRequest, CreateSlotRequest,
    UpdateSlotRequest,
};
use sched_service::{AvailabilityService, BookingService, InvitationService, ServiceError};

fn slot_request(date: &str, start: &str, end: &str) -> CreateSlotRequest {
    CreateSlotRequest {
        date: date.to_string(),
        start_time: start.to_string(),
        end_time: end.to_string(),
    }
}

#[tokio::test]
async fn creates_slot_in_utc_storage_form() {
    let env = TestEnv::new();
    let recruiter = env
        .backend
        .seed_recruiter("Dana", "dana@example.com", Some("Asia/Karachi"));

    // 14:00 local in UTC+5 stores as 09:00 UTC
    AvailabilityService::new(&env.ctx)
        .create_slot(recruiter.id, slot_request("2025-06-02", "14:00", "14:30"))
        .await
        .unwrap();

    let slots = env.ctx.slot_repo().find_by_recruiter(recruiter.id).await.unwrap();
    assert_eq!(slots.len(), 1);
    assert_eq!(slots[0].date, date(2025, 6, 2));
    assert_eq!(slots[0].start_time, time(9, 0));
    assert_eq!(slots[0].end_time, time(9, 30));
    assert!(!slots[0].booked);
}

#[tokio::test]
async fn single_slot_creation_performs_no_overlap_check() {
    let env = TestEnv::new();
    let recruiter = env.backend.seed_recruiter("Dana", "dana@example.com", None);
    let service = AvailabilityService::new(&env.ctx);

    service
        .create_slot(recruiter.id, slot_request("2025-06-02", "09:00", "09:30"))
        .await
        .unwrap();
    service
        .create_slot(recruiter.id, slot_request("2025-06-02", "09:00", "09:30"))
        .await
        .unwrap();

    assert_eq!(env.backend.slot_count(), 2);
}

#[tokio::test]
async fn rejects_inverted_interval() {
    let env = TestEnv::new();
    let recruiter = env.backend.seed_recruiter("Dana", "dana@example.com", None);

    let err = AvailabilityService::new(&env.ctx)
        .create_slot(recruiter.id, slot_request("2025-06-02", "10:00", "09:00"))
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        ServiceError::Domain(DomainError::ValidationError(_))
    ));
}

#[tokio::test]
async fn rejects_slot_spanning_two_utc_dates() {
    let env = TestEnv::new();
    let recruiter = env
        .backend
        .seed_recruiter("Dana", "dana@example.com", Some("Asia/Karachi"));

    // 04:30-05:30 local in UTC+5 is 23:30-00:30 UTC, which the single-date
    // storage form cannot hold
    let err = AvailabilityService::new(&env.ctx)
        .create_slot(recruiter.id, slot_request("2025-06-02", "04:30", "05:30"))
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        ServiceError::Domain(DomainError::ValidationError(_))
    ));
    assert_eq!(env.backend.slot_count(), 0);
}

#[tokio::test]
async fn rejects_malformed_date() {
    let env = TestEnv::new();
    let recruiter = env.backend.seed_recruiter("Dana", "dana@example.com", None);

    let err = AvailabilityService::new(&env.ctx)
        .create_slot(recruiter.id, slot_request("06/02/2025", "09:00", "10:00"))
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        ServiceError::Domain(DomainError::InvalidFormat(_))
    ));
}

#[tokio::test]
async fn weekly_recurrence_creates_one_slot_per_week() {
    let env = TestEnv::new();
    let recruiter = env.backend.seed_recruiter("Dana", "dana@example.com", None);

    let created = AvailabilityService::new(&env.ctx)
        .create_recurring_weekly(
            recruiter.id,
            CreateRecurringRequest {
                start_date: "2025-06-02".to_string(),
                end_date: "2025-06-23".to_string(),
                start_time: "09:00".to_string(),
                end_time: "09:30".to_string(),
            },
        )
        .await
        .unwrap();

    assert_eq!(created, 4);
    let slots = env.ctx.slot_repo().find_by_recruiter(recruiter.id).await.unwrap();
    let dates: Vec<_> = slots.iter().map(|s| s.date).collect();
    assert_eq!(
        dates,
        vec![
            date(2025, 6, 2),
            date(2025, 6, 9),
            date(2025, 6, 16),
            date(2025, 6, 23)
        ]
    );
}

#[tokio::test]
async fn weekly_recurrence_with_inverted_range_creates_nothing() {
    let env = TestEnv::new();
    let recruiter = env.backend.seed_recruiter("Dana", "dana@example.com", None);

    let created = AvailabilityService::new(&env.ctx)
        .create_recurring_weekly(
            recruiter.id,
            CreateRecurringRequest {
                start_date: "2025-06-23".to_string(),
                end_date: "2025-06-02".to_string(),
                start_time: "09:00".to_string(),
                end_time: "09:30".to_string(),
            },
        )
        .await
        .unwrap();

    assert_eq!(created, 0);
}

#[tokio::test]
async fn daily_slicing_partitions_the_window() {
    let env = TestEnv::new();
    let recruiter = env.backend.seed_recruiter("Dana", "dana@example.com", None);

    // 09:00-10:00 in 20-minute slices: 09:00, 09:20, 09:40. A trailing
    // partial slice never appears.
    let created = AvailabilityService::new(&env.ctx)
        .create_daily_sliced(
            recruiter.id,
            CreateDailySlicedRequest {
                date: "2025-06-02".to_string(),
                start_time: "09:00".to_string(),
                end_time: "10:00".to_string(),
                duration_minutes: 20,
            },
        )
        .await
        .unwrap();

    assert_eq!(created, 3);
    let slots = env.ctx.slot_repo().find_by_recruiter(recruiter.id).await.unwrap();
    let times: Vec<_> = slots.iter().map(|s| (s.start_time, s.end_time)).collect();
    assert_eq!(
        times,
        vec![
            (time(9, 0), time(9, 20)),
            (time(9, 20), time(9, 40)),
            (time(9, 40), time(10, 0))
        ]
    );
}

#[tokio::test]
async fn daily_slicing_skips_candidates_overlapping_existing_slots() {
    let env = TestEnv::new();
    let recruiter = env.backend.seed_recruiter("Dana", "dana@example.com", None);
    env.backend
        .seed_slot(recruiter.id, date(2025, 6, 2), time(9, 0), time(9, 30));

    // Candidates 09:00 and 09:20 both intersect the existing 09:00-09:30
    // slot; only 09:40 survives.
    let created = AvailabilityService::new(&env.ctx)
        .create_daily_sliced(
            recruiter.id,
            CreateDailySlicedRequest {
                date: "2025-06-02".to_string(),
                start_time: "09:00".to_string(),
                end_time: "10:00".to_string(),
                duration_minutes: 20,
            },
        )
        .await
        .unwrap();

    assert_eq!(created, 1);
}

#[tokio::test]
async fn daily_slicing_window_shorter_than_duration_creates_nothing() {
    let env = TestEnv::new();
    let recruiter = env.backend.seed_recruiter("Dana", "dana@example.com", None);

    let created = AvailabilityService::new(&env.ctx)
        .create_daily_sliced(
            recruiter.id,
            CreateDailySlicedRequest {
                date: "2025-06-02".to_string(),
                start_time: "09:00".to_string(),
                end_time: "09:15".to_string(),
                duration_minutes: 20,
            },
        )
        .await
        .unwrap();

    assert_eq!(created, 0);
}

#[tokio::test]
async fn deleting_a_booked_slot_fails() {
    let env = TestEnv::new();
    let recruiter = env.backend.seed_recruiter("Dana", "dana@example.com", None);
    let slot = env
        .backend
        .seed_slot(recruiter.id, date(2025, 6, 2), time(9, 0), time(9, 30));

    let invitation = InvitationService::new(&env.ctx).issue(recruiter.id).await.unwrap();
    BookingService::new(&env.ctx)
        .book(BookSlotRequest {
            candidate_name: "Kim".to_string(),
            candidate_email: "kim@example.com".to_string(),
            candidate_position: None,
            availability_id: slot.id,
            invitation_token: invitation.token,
        })
        .await
        .unwrap();

    let err = AvailabilityService::new(&env.ctx)
        .delete_slot(recruiter.id, slot.id)
        .await
        .unwrap_err();
    assert!(matches!(err, ServiceError::Domain(DomainError::SlotBooked)));
    assert_eq!(env.backend.slot_count(), 1);
}

#[tokio::test]
async fn deleting_an_unbooked_slot_removes_it() {
    let env = TestEnv::new();
    let recruiter = env.backend.seed_recruiter("Dana", "dana@example.com", None);
    let slot = env
        .backend
        .seed_slot(recruiter.id, date(2025, 6, 2), time(9, 0), time(9, 30));

    AvailabilityService::new(&env.ctx)
        .delete_slot(recruiter.id, slot.id)
        .await
        .unwrap();
    assert_eq!(env.backend.slot_count(), 0);
}

#[tokio::test]
async fn updating_a_booked_slot_notifies_the_candidate() {
    let env = TestEnv::new();
    let recruiter = env.backend.seed_recruiter("Dana", "dana@example.com", None);
    let slot = env
        .backend
        .seed_slot(recruiter.id, date(2025, 6, 2), time(9, 0), time(9, 30));

    let invitation = InvitationService::new(&env.ctx).issue(recruiter.id).await.unwrap();
    BookingService::new(&env.ctx)
        .book(BookSlotRequest {
            candidate_name: "Kim".to_string(),
            candidate_email: "kim@example.com".to_string(),
            candidate_position: None,
            availability_id: slot.id,
            invitation_token: invitation.token,
        })
        .await
        .unwrap();

    AvailabilityService::new(&env.ctx)
        .update_slot(
            recruiter.id,
            slot.id,
            UpdateSlotRequest {
                date: "2025-06-03".to_string(),
                start_time: "10:00".to_string(),
                end_time: "10:30".to_string(),
            },
        )
        .await
        .unwrap();

    let updated = env.backend.slot(slot.id).unwrap();
    assert_eq!(updated.date, date(2025, 6, 3));
    assert_eq!(updated.start_time, time(10, 0));
    assert!(updated.booked);

    let reschedule: Vec<_> = env
        .notifier
        .sent_to("kim@example.com")
        .into_iter()
        .filter(|(_, subject, _)| subject == "Meeting Time Updated")
        .collect();
    assert_eq!(reschedule.len(), 1);
}

#[tokio::test]
async fn recruiter_listing_converts_to_local_zone_and_annotates_bookings() {
    let env = TestEnv::new();
    let recruiter = env
        .backend
        .seed_recruiter("Dana", "dana@example.com", Some("Asia/Karachi"));
    // Stored 09:00 UTC is 14:00 in Karachi
    let slot = env
        .backend
        .seed_slot(recruiter.id, date(2025, 6, 2), time(9, 0), time(9, 30));

    let invitation = InvitationService::new(&env.ctx).issue(recruiter.id).await.unwrap();
    BookingService::new(&env.ctx)
        .book(BookSlotRequest {
            candidate_name: "Kim".to_string(),
            candidate_email: "kim@example.com".to_string(),
            candidate_position: Some("Engineer".to_string()),
            availability_id: slot.id,
            invitation_token: invitation.token,
        })
        .await
        .unwrap();

    let listing = AvailabilityService::new(&env.ctx)
        .list_for_recruiter(recruiter.id)
        .await
        .unwrap();
    assert_eq!(listing.len(), 1);
    assert_eq!(listing[0].date, "2025-06-02");
    assert_eq!(listing[0].start_time, "14:00");
    assert_eq!(listing[0].end_time, "14:30");
    assert!(listing[0].booked);
    assert_eq!(listing[0].candidate_name.as_deref(), Some("Kim"));
    assert_eq!(listing[0].candidate_position.as_deref(), Some("Engineer"));
    assert!(listing[0].booking_id.is_some());
}

#[tokio::test]
async fn public_listing_shows_unbooked_slots_as_stored() {
    let env = TestEnv::new();
    let recruiter = env
        .backend
        .seed_recruiter("Dana", "dana@example.com", Some("Asia/Karachi"));
    let open = env
        .backend
        .seed_slot(recruiter.id, date(2025, 6, 2), time(9, 0), time(9, 30));
    let claimed = env
        .backend
        .seed_slot(recruiter.id, date(2025, 6, 2), time(10, 0), time(10, 30));

    let invitation = InvitationService::new(&env.ctx).issue(recruiter.id).await.unwrap();
    BookingService::new(&env.ctx)
        .book(BookSlotRequest {
            candidate_name: "Kim".to_string(),
            candidate_email: "kim@example.com".to_string(),
            candidate_position: None,
            availability_id: claimed.id,
            invitation_token: invitation.token,
        })
        .await
        .unwrap();

    let listing = AvailabilityService::new(&env.ctx)
        .list_public(recruiter.id)
        .await
        .unwrap();
    assert_eq!(listing.len(), 1);
    assert_eq!(listing[0].id, open.id);
    // No zone conversion for candidates: times come back as stored (UTC)
    assert_eq!(listing[0].start_time, "09:00");
}
