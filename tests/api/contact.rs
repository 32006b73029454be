use crate::helpers::{spawn_app, valid_contact_payload};
use wiremock::matchers::{any, method, path};
use wiremock::{Mock, ResponseTemplate};

#[actix_rt::test]
async fn valid_submission_returns_200_and_dispatches_two_emails() {
    let app = spawn_app().await;

    Mock::given(path("/email"))
        .and(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(2)
        .mount(&app.email_server)
        .await;

    let response = app.post_contact(&valid_contact_payload()).await;

    assert_eq!(200, response.status().as_u16());
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["success"], true);
    assert_eq!(body["message"], "Emails sent successfully to Admin and User!");
}

#[actix_rt::test]
async fn admin_notice_is_attempted_before_the_acknowledgement() {
    let app = spawn_app().await;

    Mock::given(path("/email"))
        .and(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(2)
        .mount(&app.email_server)
        .await;

    app.post_contact(&valid_contact_payload()).await;

    let requests = app.email_server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 2);
    let first: serde_json::Value = serde_json::from_slice(&requests[0].body).unwrap();
    let second: serde_json::Value = serde_json::from_slice(&requests[1].body).unwrap();
    // Business-side notice goes out first, then the submitter's copy
    assert_eq!(first["To"], "owner@example.com");
    assert_eq!(
        first["Subject"],
        "New Contact Form Submission: Web Development"
    );
    assert_eq!(second["To"], "ada@example.com");
    assert_eq!(second["Subject"], "We've received your message!");
}

#[actix_rt::test]
async fn submission_with_a_missing_field_returns_400_and_sends_nothing() {
    let app = spawn_app().await;

    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&app.email_server)
        .await;

    let fields = [
        "name",
        "email",
        "country",
        "service",
        "description",
        "recipient",
    ];
    for field in fields {
        let mut payload = valid_contact_payload();
        payload.as_object_mut().unwrap().remove(field);

        let response = app.post_contact(&payload).await;

        assert_eq!(
            400,
            response.status().as_u16(),
            "The API did not fail with 400 Bad Request when {} was missing",
            field
        );
        let body: serde_json::Value = response.json().await.unwrap();
        assert_eq!(body["success"], false);
        assert_eq!(body["error"], "Missing required fields");
    }
}

#[actix_rt::test]
async fn submission_with_a_malformed_email_returns_400() {
    let app = spawn_app().await;

    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&app.email_server)
        .await;

    for email in ["a@b", "a.com", "spaced out@example.com"] {
        let mut payload = valid_contact_payload();
        payload["email"] = serde_json::json!(email);

        let response = app.post_contact(&payload).await;

        assert_eq!(
            400,
            response.status().as_u16(),
            "The API accepted {} as an email address",
            email
        );
        let body: serde_json::Value = response.json().await.unwrap();
        assert_eq!(body["error"], "Invalid email format");
    }
}

#[actix_rt::test]
async fn submission_still_succeeds_when_mail_dispatch_fails() {
    let app = spawn_app().await;

    // The admin notice fails, so the acknowledgement is never attempted
    Mock::given(path("/email"))
        .and(method("POST"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&app.email_server)
        .await;

    let response = app.post_contact(&valid_contact_payload()).await;

    assert_eq!(200, response.status().as_u16());
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["success"], true);
}

#[actix_rt::test]
async fn malformed_payload_returns_500_with_details() {
    let app = spawn_app().await;

    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&app.email_server)
        .await;

    let response = reqwest::Client::new()
        .post(format!("{}/api/contact", &app.address))
        .header("Content-Type", "application/json")
        .body("definitely not json")
        .send()
        .await
        .expect("Failed to execute contact request");

    assert_eq!(500, response.status().as_u16());
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], "Failed to send email");
    assert!(body["details"].is_string());
}

#[actix_rt::test]
async fn resubmitting_identical_data_yields_an_independent_success() {
    let app = spawn_app().await;

    // No deduplication: each submission dispatches its own pair of emails
    Mock::given(path("/email"))
        .and(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(4)
        .mount(&app.email_server)
        .await;

    let first = app.post_contact(&valid_contact_payload()).await;
    let second = app.post_contact(&valid_contact_payload()).await;

    assert_eq!(200, first.status().as_u16());
    assert_eq!(200, second.status().as_u16());
}
