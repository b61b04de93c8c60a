//! Recruiter registration and timezone management scenarios.

use integration_tests::TestEnv;
use sched_core::DomainError;
use sched_service::dto::{RegisterRecruiterRequest, UpdateTimezoneRequest};
use sched_service::{RecruiterService, ServiceError};

fn register_request(email: &str, timezone: Option<&str>) -> RegisterRecruiterRequest {
    RegisterRecruiterRequest {
        name: "Dana".to_string(),
        email: email.to_string(),
        timezone: timezone.map(String::from),
    }
}

#[tokio::test]
async fn registration_creates_a_profile_without_meeting_credentials() {
    let env = TestEnv::new();

    let profile = RecruiterService::new(&env.ctx)
        .register(register_request("dana@example.com", Some("Asia/Karachi")))
        .await
        .unwrap();

    assert_eq!(profile.email, "dana@example.com");
    assert_eq!(profile.timezone.as_deref(), Some("Asia/Karachi"));
    assert!(!profile.meet_connected);
}

#[tokio::test]
async fn registration_rejects_a_duplicate_email() {
    let env = TestEnv::new();
    env.backend.seed_recruiter("Dana", "dana@example.com", None);

    let err = RecruiterService::new(&env.ctx)
        .register(register_request("dana@example.com", None))
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        ServiceError::Domain(DomainError::EmailAlreadyRegistered)
    ));
}

#[tokio::test]
async fn registration_rejects_an_unknown_zone_name() {
    let env = TestEnv::new();

    let err = RecruiterService::new(&env.ctx)
        .register(register_request("dana@example.com", Some("Mars/Olympus")))
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        ServiceError::Domain(DomainError::InvalidTimezone(_))
    ));
}

#[tokio::test]
async fn registration_rejects_a_malformed_email() {
    let env = TestEnv::new();

    let err = RecruiterService::new(&env.ctx)
        .register(register_request("not-an-email", None))
        .await
        .unwrap_err();
    assert!(matches!(err, ServiceError::Validation(_)));
}

#[tokio::test]
async fn timezone_update_validates_the_zone() {
    let env = TestEnv::new();
    let recruiter = env.backend.seed_recruiter("Dana", "dana@example.com", None);
    let service = RecruiterService::new(&env.ctx);

    service
        .update_timezone(
            recruiter.id,
            UpdateTimezoneRequest {
                timezone: "Europe/Berlin".to_string(),
            },
        )
        .await
        .unwrap();
    let profile = service.profile(recruiter.id).await.unwrap();
    assert_eq!(profile.timezone.as_deref(), Some("Europe/Berlin"));

    let err = service
        .update_timezone(
            recruiter.id,
            UpdateTimezoneRequest {
                timezone: "Nowhere/Nothing".to_string(),
            },
        )
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        ServiceError::Domain(DomainError::InvalidTimezone(_))
    ));
}

#[tokio::test]
async fn profile_of_an_unknown_recruiter_is_not_found() {
    let env = TestEnv::new();

    let err = RecruiterService::new(&env.ctx).profile(404).await.unwrap_err();
    assert!(matches!(
        err,
        ServiceError::Domain(DomainError::RecruiterNotFound(404))
    ));
}
