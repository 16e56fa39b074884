use axum::http::StatusCode;
use luct_api::middleware::auth::hash_password;
use luct_core::{
    errors::PortalError,
    models::user::{Credentials, NewUser, Role},
};
use luct_db::mock::repositories::MockStore;
use mockall::predicate::eq;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};

use crate::test_utils::{sample_user, server};

fn registration() -> Value {
    json!({
        "username": "alice",
        "email": "alice@luct.ac.ls",
        "password": "s3cret",
        "role": "Lecturer",
        "department": "FICT"
    })
}

#[tokio::test]
async fn register_stores_a_hash_and_returns_the_public_user() {
    let mut store = MockStore::new();
    store
        .expect_create_user()
        .withf(|user: &NewUser| {
            user.username == "alice"
                && user.role == Role::Lecturer
                && user.password_hash != "s3cret"
                && user.password_hash.starts_with("$argon2")
        })
        .times(1)
        .returning(|user| Ok(sample_user(1, &user.username, user.role)));

    let response = server(store).post("/api/register").json(&registration()).await;

    response.assert_status(StatusCode::CREATED);
    let body: Value = response.json();
    assert_eq!(body["message"], "Registration successful");
    assert_eq!(body["user"]["id"], 1);
    assert_eq!(body["user"]["username"], "alice");
    assert_eq!(body["user"]["role"], "Lecturer");
    assert!(body["user"].get("password").is_none());
}

#[tokio::test]
async fn duplicate_registration_is_a_bad_request() {
    let mut store = MockStore::new();
    store.expect_create_user().returning(|_| {
        Err(PortalError::Conflict(
            "Username or email already exists".to_string(),
        ))
    });

    let response = server(store).post("/api/register").json(&registration()).await;

    response.assert_status(StatusCode::BAD_REQUEST);
    response.assert_json(&json!({ "error": "Username or email already exists" }));
}

#[tokio::test]
async fn register_rejects_blank_fields_without_touching_the_store() {
    let mut store = MockStore::new();
    store.expect_create_user().never();

    let mut payload = registration();
    payload["password"] = json!("  ");
    let response = server(store).post("/api/register").json(&payload).await;

    response.assert_status(StatusCode::BAD_REQUEST);
    response.assert_json(&json!({ "error": "password is required" }));
}

#[tokio::test]
async fn register_rejects_unknown_role() {
    let mut store = MockStore::new();
    store.expect_create_user().never();

    let mut payload = registration();
    payload["role"] = json!("Dean");
    let response = server(store).post("/api/register").json(&payload).await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert!(body["error"].is_string());
}

fn credentials_for(password: &str) -> Credentials {
    Credentials {
        user: sample_user(7, "alice", Role::Lecturer),
        password_hash: hash_password(password).unwrap(),
    }
}

#[tokio::test]
async fn login_marks_the_account_logged_in() {
    let credentials = credentials_for("s3cret");
    let mut store = MockStore::new();
    store
        .expect_find_credentials()
        .with(eq("alice".to_string()), eq("Lecturer".to_string()))
        .times(1)
        .returning(move |_, _| Ok(Some(credentials.clone())));
    store
        .expect_set_logged_in()
        .with(eq(7), eq(true))
        .times(1)
        .returning(|_, _| Ok(()));

    let response = server(store)
        .post("/api/login")
        .json(&json!({ "username": "alice", "password": "s3cret", "role": "Lecturer" }))
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["message"], "Login successful");
    assert_eq!(body["user"]["id"], 7);
}

#[tokio::test]
async fn login_with_wrong_password_is_unauthorized() {
    let credentials = credentials_for("s3cret");
    let mut store = MockStore::new();
    store
        .expect_find_credentials()
        .returning(move |_, _| Ok(Some(credentials.clone())));
    store.expect_set_logged_in().never();

    let response = server(store)
        .post("/api/login")
        .json(&json!({ "username": "alice", "password": "guess", "role": "Lecturer" }))
        .await;

    response.assert_status(StatusCode::UNAUTHORIZED);
    response.assert_json(&json!({ "error": "Invalid credentials" }));
}

#[tokio::test]
async fn login_under_another_role_is_unauthorized() {
    let mut store = MockStore::new();
    store
        .expect_find_credentials()
        .with(eq("alice".to_string()), eq("Student".to_string()))
        .returning(|_, _| Ok(None));

    let response = server(store)
        .post("/api/login")
        .json(&json!({ "username": "alice", "password": "s3cret", "role": "Student" }))
        .await;

    response.assert_status(StatusCode::UNAUTHORIZED);
    response.assert_json(&json!({ "error": "Invalid credentials" }));
}

#[tokio::test]
async fn logout_succeeds_even_for_unknown_accounts() {
    let mut store = MockStore::new();
    store.expect_logout().returning(|_, _| Ok(0));

    let response = server(store)
        .post("/api/logout")
        .json(&json!({ "username": "nobody", "role": "Student" }))
        .await;

    response.assert_status_ok();
    response.assert_json(&json!({ "message": "Logout successful" }));
}

#[tokio::test]
async fn get_user_returns_404_for_missing_id() {
    let mut store = MockStore::new();
    store.expect_get_user().with(eq(99)).returning(|_| Ok(None));

    let response = server(store).get("/api/users/99").await;

    response.assert_status(StatusCode::NOT_FOUND);
    response.assert_json(&json!({ "error": "User not found" }));
}
