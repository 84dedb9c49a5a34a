//! `POST /activities/{name}/signup` and `DELETE /activities/{name}/unregister`

use axum::http::{Method, StatusCode};

use crate::common::TestApp;

#[tokio::test]
async fn test_signup_for_activity_success() {
    let app = TestApp::new();
    let response = app.signup("Chess Club", "test@mergington.edu").await;

    assert_eq!(response.status, StatusCode::OK);
    let message = response.json["message"].as_str().expect("message");
    assert!(message.contains("test@mergington.edu"));
    assert!(message.contains("Chess Club"));

    assert!(
        app.participants("Chess Club")
            .await
            .contains(&"test@mergington.edu".to_string())
    );
}

#[tokio::test]
async fn test_signup_message_text() {
    let app = TestApp::new();
    let response = app.signup("Gym Class", "kim@mergington.edu").await;
    assert_eq!(
        response.json["message"],
        "Signed up kim@mergington.edu for Gym Class"
    );
}

#[tokio::test]
async fn test_signup_for_nonexistent_activity() {
    let app = TestApp::new();
    let response = app
        .signup("Nonexistent Activity", "test@mergington.edu")
        .await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.json["detail"], "Activity not found");
}

#[tokio::test]
async fn test_signup_duplicate_participant() {
    let app = TestApp::new();
    let email = "duplicate@mergington.edu";

    let first = app.signup("Chess Club", email).await;
    assert_eq!(first.status, StatusCode::OK);
    let after_first = app.participants("Chess Club").await;

    let second = app.signup("Chess Club", email).await;
    assert_eq!(second.status, StatusCode::BAD_REQUEST);
    assert_eq!(
        second.json["detail"],
        "Student already signed up for this activity"
    );
    assert_eq!(app.participants("Chess Club").await, after_first);
}

#[tokio::test]
async fn test_signup_without_email_is_unprocessable() {
    let app = TestApp::new();
    let response = app
        .request(Method::POST, "/activities/Chess%20Club/signup")
        .await;

    assert_eq!(response.status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(response.json["detail"].is_string());
}

#[tokio::test]
async fn test_signup_wrong_method() {
    let app = TestApp::new();
    let response = app
        .request(
            Method::GET,
            "/activities/Chess%20Club/signup?email=a@mergington.edu",
        )
        .await;
    assert_eq!(response.status, StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn test_unregister_from_activity_success() {
    let app = TestApp::new();
    let email = "unregister@mergington.edu";
    app.signup("Chess Club", email).await;

    let response = app.unregister("Chess Club", email).await;
    assert_eq!(response.status, StatusCode::OK);
    let message = response.json["message"].as_str().expect("message");
    assert!(message.contains(email));
    assert!(message.contains("Chess Club"));

    assert!(!app.participants("Chess Club").await.contains(&email.to_string()));
}

#[tokio::test]
async fn test_unregister_from_nonexistent_activity() {
    let app = TestApp::new();
    let response = app
        .unregister("Nonexistent Activity", "test@mergington.edu")
        .await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.json["detail"], "Activity not found");
}

#[tokio::test]
async fn test_unregister_non_participant() {
    let app = TestApp::new();
    let before = app.participants("Chess Club").await;

    let response = app
        .unregister("Chess Club", "notregistered@mergington.edu")
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(
        response.json["detail"],
        "Student is not signed up for this activity"
    );
    assert_eq!(app.participants("Chess Club").await, before);
}

#[tokio::test]
async fn test_unregister_existing_participant() {
    let app = TestApp::new();
    let email = "michael@mergington.edu";
    assert!(app.participants("Chess Club").await.contains(&email.to_string()));

    let response = app.unregister("Chess Club", email).await;
    assert_eq!(response.status, StatusCode::OK);
    assert!(!app.participants("Chess Club").await.contains(&email.to_string()));
}

#[tokio::test]
async fn test_unknown_activity_is_not_found_for_any_email() {
    let app = TestApp::new();
    for email in ["michael@mergington.edu", "", "not-an-email", "x%40y"] {
        assert_eq!(
            app.signup("Knitting", email).await.status,
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            app.unregister("Knitting", email).await.status,
            StatusCode::NOT_FOUND
        );
    }
}

#[tokio::test]
async fn test_undecodable_activity_name_returns_json_detail() {
    let app = TestApp::new();
    for (method, action) in [(Method::POST, "signup"), (Method::DELETE, "unregister")] {
        let response = app
            .request(method, &format!("/activities/%FF/{action}?email=a@x.edu"))
            .await;

        assert_eq!(response.status, StatusCode::BAD_REQUEST);
        let detail = response.json["detail"].as_str().expect("JSON detail");
        assert!(detail.contains("UTF-8"), "unexpected detail: {detail}");
    }
}

#[tokio::test]
async fn test_repeated_email_uses_last_value() {
    let app = TestApp::new();
    let response = app
        .request(
            Method::POST,
            "/activities/Chess%20Club/signup?email=first@mergington.edu&email=last@mergington.edu",
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(
        response.json["message"],
        "Signed up last@mergington.edu for Chess Club"
    );
    let participants = app.participants("Chess Club").await;
    assert!(participants.contains(&"last@mergington.edu".to_string()));
    assert!(!participants.contains(&"first@mergington.edu".to_string()));
}
