//! Multi-request flows across the API.

use axum::http::StatusCode;

use crate::common::TestApp;

#[tokio::test]
async fn test_signup_and_unregister_workflow() {
    let app = TestApp::new();
    let email = "workflow@mergington.edu";
    let initial = app.participants("Drama Club").await.len();

    assert_eq!(app.signup("Drama Club", email).await.status, StatusCode::OK);
    assert_eq!(app.participants("Drama Club").await.len(), initial + 1);

    assert_eq!(
        app.unregister("Drama Club", email).await.status,
        StatusCode::OK
    );
    assert_eq!(app.participants("Drama Club").await.len(), initial);
}

#[tokio::test]
async fn test_multiple_activities_signup() {
    let app = TestApp::new();
    let email = "multi@mergington.edu";
    let activities = ["Chess Club", "Drama Club", "Art Studio"];

    for activity in activities {
        assert_eq!(app.signup(activity, email).await.status, StatusCode::OK);
    }
    for activity in activities {
        assert!(
            app.participants(activity)
                .await
                .contains(&email.to_string()),
            "{email} missing from {activity}"
        );
    }
}

#[tokio::test]
async fn test_signup_appends_in_order() {
    let app = TestApp::new();
    let before = app.participants("Soccer Club").await;

    app.signup("Soccer Club", "first@mergington.edu").await;
    app.signup("Soccer Club", "second@mergington.edu").await;

    let after = app.participants("Soccer Club").await;
    assert_eq!(&after[..before.len()], &before[..]);
    assert_eq!(
        &after[before.len()..],
        ["first@mergington.edu", "second@mergington.edu"]
    );
}

#[tokio::test]
async fn test_signup_beyond_capacity_is_accepted() {
    let app = TestApp::new();
    let response = app.get("/activities").await;
    let max = response.json["Math Olympiad"]["max_participants"]
        .as_u64()
        .expect("max_participants");
    let current = app.participants("Math Olympiad").await.len() as u64;

    for i in 0..=(max - current) {
        let response = app
            .signup("Math Olympiad", &format!("student{i}@mergington.edu"))
            .await;
        assert_eq!(response.status, StatusCode::OK);
    }
    assert!(app.participants("Math Olympiad").await.len() as u64 > max);
}

#[tokio::test]
async fn test_apps_do_not_share_state() {
    let first = TestApp::new();
    let second = TestApp::new();

    first.signup("Chess Club", "isolated@mergington.edu").await;
    assert!(
        !second
            .participants("Chess Club")
            .await
            .contains(&"isolated@mergington.edu".to_string())
    );
}
