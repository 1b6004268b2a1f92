//! Registration service against the mock backend

use serde_json::json;
use wiremock::matchers::{body_partial_json, method, path, query_param};
use wiremock::{Mock, ResponseTemplate};

use eventdesk::models::{CreateRegistrationRequest, EventRef, PaymentStatus, RegistrationType};

use crate::helpers::{fake_email, fake_name, registration_payload};
use crate::integration::setup_integration_test;

#[tokio::test]
async fn test_get_for_event_filters_by_wire_case_param() {
    let ctx = setup_integration_test().await;
    Mock::given(method("GET"))
        .and(path("/registrations/"))
        .and(query_param("conference_id", "c1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [registration_payload("r1", "c1", "paid"), registration_payload("r2", "c1", "unpaid")]
        })))
        .mount(&ctx.backend.server)
        .await;

    let registrations = ctx
        .services
        .registration_service
        .get_for_event(&EventRef::Conference("c1".to_string()))
        .await
        .unwrap();

    assert_eq!(registrations.len(), 2);
    assert!(registrations
        .iter()
        .all(|r| r.event() == Some(EventRef::Conference("c1".to_string()))));
    assert_eq!(registrations[1].payment_status, PaymentStatus::Pending);
}

#[tokio::test]
async fn test_register_for_webinar_sets_event_id() {
    let ctx = setup_integration_test().await;
    let name = fake_name();
    let email = fake_email();
    Mock::given(method("POST"))
        .and(path("/registrations/"))
        .and(body_partial_json(json!({
            "webinar_id": "w1",
            "name": name,
            "email": email,
            "registration_type": "student"
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "registration": {
                "id": "r10",
                "webinar": { "id": "w1" },
                "name": name,
                "email": email,
                "type": "student"
            }
        })))
        .mount(&ctx.backend.server)
        .await;

    let request = CreateRegistrationRequest {
        name: name.clone(),
        email: email.clone(),
        registration_type: RegistrationType::Student,
        ..Default::default()
    };
    let registration = ctx
        .services
        .registration_service
        .register_for_webinar("w1", request)
        .await
        .unwrap();

    assert_eq!(registration.id, "r10");
    assert_eq!(registration.event(), Some(EventRef::Webinar("w1".to_string())));
    assert_eq!(registration.attendee.name, name);
    assert_eq!(registration.registration_type, RegistrationType::Student);

    let requests = ctx.backend.received().await;
    let body: serde_json::Value = serde_json::from_slice(&requests[0].body).unwrap();
    assert!(body.get("conference_id").is_none());
}

#[tokio::test]
async fn test_update_payment_status_sends_only_that_field() {
    let ctx = setup_integration_test().await;
    Mock::given(method("PATCH"))
        .and(path("/registrations/r1/"))
        .and(body_partial_json(json!({ "payment_status": "refunded" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "id": "r1", "payment_status": "refunded" })))
        .mount(&ctx.backend.server)
        .await;

    let registration = ctx
        .services
        .registration_service
        .update_payment_status("r1", PaymentStatus::Refunded)
        .await
        .unwrap();
    assert_eq!(registration.payment_status, PaymentStatus::Refunded);

    let requests = ctx.backend.received().await;
    let body: serde_json::Value = serde_json::from_slice(&requests[0].body).unwrap();
    assert_eq!(body, json!({ "payment_status": "refunded" }));
}

#[tokio::test]
async fn test_flattened_attendee_fields() {
    let ctx = setup_integration_test().await;
    ctx.backend
        .mock_get(
            "/registrations/r2/",
            json!({
                "id": "r2",
                "conferenceId": 3,
                "first_name": "Ada",
                "last_name": "Lovelace",
                "email_address": "ada@example.org",
                "payment": "complimentary",
                "registered_at": "2025-03-01T10:00:00Z"
            }),
        )
        .await;

    let registration = ctx.services.registration_service.get_by_id("r2").await.unwrap();

    assert_eq!(registration.attendee.name, "Ada Lovelace");
    assert_eq!(registration.attendee.email, "ada@example.org");
    assert_eq!(registration.payment_status, PaymentStatus::Waived);
    assert_eq!(registration.conference_id, "3");
    assert_eq!(registration.created_at, "2025-03-01T10:00:00Z");
}
