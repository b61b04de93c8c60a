//! Invitation lifecycle scenarios: issuing, dispatch, and token
//! validation ordering.

use chrono::Duration;
use integration_tests::{date, time, TestEnv, FRONTEND_URL};
use sched_core::traits::Clock;
use sched_core::DomainError;
use sched_service::dto::{BookSlotRequest, SendInvitationRequest};
use sched_service::{BookingService, InvitationService, ServiceError};

fn send_request() -> SendInvitationRequest {
    SendInvitationRequest {
        candidate_name: "Kim".to_string(),
        candidate_email: "kim@example.com".to_string(),
    }
}

#[tokio::test]
async fn issued_invitation_is_fresh_and_expires_in_48_hours() {
    let env = TestEnv::new();
    let recruiter = env.backend.seed_recruiter("Dana", "dana@example.com", None);

    let invitation = InvitationService::new(&env.ctx).issue(recruiter.id).await.unwrap();

    assert!(!invitation.used);
    assert_eq!(invitation.cancel_count, 0);
    assert_eq!(invitation.expiration, env.clock.now() + Duration::hours(48));
    assert!(env.backend.invitation(&invitation.token).is_some());
}

#[tokio::test]
async fn send_invitation_emails_the_booking_link_and_token() {
    let env = TestEnv::new();
    let recruiter = env.backend.seed_recruiter("Dana", "dana@example.com", None);

    let response = InvitationService::new(&env.ctx)
        .send_invitation(recruiter.id, send_request())
        .await
        .unwrap();

    assert_eq!(
        response.booking_link,
        format!("{FRONTEND_URL}/book-slot/{}/{}", recruiter.id, response.token)
    );

    let mail = env.notifier.sent_to("kim@example.com");
    assert_eq!(mail.len(), 1);
    assert_eq!(mail[0].1, "Interview Invitation");
    assert!(mail[0].2.contains(&response.booking_link));
    assert!(mail[0].2.contains(&response.token));
}

#[tokio::test]
async fn send_invitation_surfaces_delivery_failure_but_keeps_the_row() {
    let env = TestEnv::new();
    let recruiter = env.backend.seed_recruiter("Dana", "dana@example.com", None);
    env.notifier.set_failing(true);

    let err = InvitationService::new(&env.ctx)
        .send_invitation(recruiter.id, send_request())
        .await
        .unwrap_err();

    assert!(matches!(err, ServiceError::Internal(_)));
    // The issued token survives the failed dispatch
    assert_eq!(env.backend.invitation_count(), 1);
}

#[tokio::test]
async fn send_invitation_requires_an_existing_recruiter() {
    let env = TestEnv::new();

    let err = InvitationService::new(&env.ctx)
        .send_invitation(404, send_request())
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        ServiceError::Domain(DomainError::RecruiterNotFound(404))
    ));
    assert_eq!(env.backend.invitation_count(), 0);
}

#[tokio::test]
async fn used_is_reported_before_expired() {
    let env = TestEnv::new();
    let recruiter = env.backend.seed_recruiter("Dana", "dana@example.com", None);
    let slot = env
        .backend
        .seed_slot(recruiter.id, date(2025, 6, 2), time(9, 0), time(9, 30));
    let service = InvitationService::new(&env.ctx);
    let invitation = service.issue(recruiter.id).await.unwrap();

    BookingService::new(&env.ctx)
        .book(BookSlotRequest {
            candidate_name: "Kim".to_string(),
            candidate_email: "kim@example.com".to_string(),
            candidate_position: None,
            availability_id: slot.id,
            invitation_token: invitation.token.clone(),
        })
        .await
        .unwrap();

    // Now both spent and expired; the spent state wins.
    env.clock.advance(Duration::hours(49));

    let err = service
        .validate_for_booking(&invitation.token)
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        ServiceError::Domain(DomainError::TokenAlreadyUsed)
    ));
}

#[tokio::test]
async fn validating_an_unknown_token_fails() {
    let env = TestEnv::new();

    let err = InvitationService::new(&env.ctx)
        .validate_for_booking("nosuchtoken")
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        ServiceError::Domain(DomainError::TokenNotFound)
    ));
}
