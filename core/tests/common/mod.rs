//! Shared setup and the user API checks run by both test binaries.
//!
//! Each `check_*` function issues one or two client calls and asserts on the
//! response. `users_api.rs` runs them against the in-process mock server,
//! `live_api.rs` against the configured JSONPlaceholder instance.

#![allow(dead_code)]

use std::sync::OnceLock;

use placeholder_core::fixtures::load_fixture;
use placeholder_core::{ApiError, SchemaValidator, Transport, User, UserClient};
use serde_json::Value;
use tracing::info;

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "placeholder_core=debug".into()),
        )
        .with_test_writer()
        .try_init();
}

/// Start the mock server on a random port, once per test binary.
pub fn mock_base_url() -> &'static str {
    static BASE_URL: OnceLock<String> = OnceLock::new();
    BASE_URL.get_or_init(|| {
        let std_listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = std_listener.local_addr().unwrap();
        std_listener.set_nonblocking(true).unwrap();

        std::thread::spawn(move || {
            let rt = tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()
                .unwrap();
            rt.block_on(async {
                let listener = tokio::net::TcpListener::from_std(std_listener).unwrap();
                mock_server::run(listener).await
            })
            .unwrap();
        });

        format!("http://{addr}")
    })
}

/// Session-wide client pointed at the mock server.
pub fn mock_client() -> &'static UserClient {
    static CLIENT: OnceLock<UserClient> = OnceLock::new();
    CLIENT.get_or_init(|| {
        init_tracing();
        UserClient::new(mock_base_url())
    })
}

fn payload(name: &str) -> Value {
    load_fixture(name).unwrap()
}

pub fn check_get_users<T: Transport>(client: &UserClient<T>) {
    let response = client.get_all_users().unwrap();

    assert_eq!(response.status, 200, "Expected status code 200, but got {}", response.status);
    let users = response.json_value().unwrap();
    let users = users.as_array().expect("Expected a JSON array of users");
    assert!(!users.is_empty(), "Expected at least one user in the response");
    assert!(
        users[0].get("username").is_some(),
        "Expected user object to contain 'username' field"
    );
}

pub fn check_get_specific_user<T: Transport>(client: &UserClient<T>) {
    let user_id = 1;
    let response = client.get_user_by_id(user_id).unwrap();

    assert_eq!(response.status, 200, "Expected status code 200, but got {}", response.status);
    let user: User = response.json().unwrap();
    info!(?user, "retrieved user data");
    assert_eq!(user.id, user_id, "Expected user ID {user_id}, but got {}", user.id);
    assert_eq!(user.name, "Leanne Graham");
    assert_eq!(user.username, "Bret");
}

pub fn check_user_matches_schema<T: Transport>(client: &UserClient<T>) {
    let schema = SchemaValidator::from_fixture("user_schema.json").unwrap();
    let response = client.get_user_by_id(1).unwrap();

    assert_eq!(response.status, 200);
    schema.validate(&response.json_value().unwrap()).unwrap();
}

pub fn check_users_match_schema<T: Transport>(client: &UserClient<T>) {
    let schema = SchemaValidator::from_fixture("users_schema.json").unwrap();
    let response = client.get_all_users().unwrap();

    assert_eq!(response.status, 200);
    schema.validate(&response.json_value().unwrap()).unwrap();
}

pub fn check_create_user<T: Transport>(client: &UserClient<T>) {
    let new_user = payload("create_user.json");
    let response = client.create_user(&new_user).unwrap();

    assert_eq!(response.status, 201, "Expected status code 201, but got {}", response.status);
    let created = response.json_value().unwrap();
    assert!(created["id"].is_u64(), "Expected the created user to carry an id");
    for (field, value) in new_user.as_object().unwrap() {
        assert_eq!(&created[field], value, "field {field} should be echoed back");
    }
}

pub fn check_update_user<T: Transport>(client: &UserClient<T>) {
    let replacement = payload("update_user.json");
    let response = client.update_user(1, &replacement).unwrap();

    assert_eq!(response.status, 200, "Expected status code 200, but got {}", response.status);
    let updated = response.json_value().unwrap();
    assert_eq!(updated["id"], 1);
    assert_eq!(updated["name"], replacement["name"]);
    assert_eq!(updated["email"], replacement["email"]);
}

pub fn check_patch_user<T: Transport>(client: &UserClient<T>) {
    let changes = payload("patch_user.json");
    let response = client.patch_user(1, &changes).unwrap();

    assert_eq!(response.status, 200, "Expected status code 200, but got {}", response.status);
    let patched = response.json_value().unwrap();
    assert_eq!(patched["id"], 1);
    assert_eq!(patched["email"], changes["email"]);
    assert_eq!(patched["username"], "Bret", "untouched fields should survive a PATCH");
}

pub fn check_delete_user<T: Transport>(client: &UserClient<T>) {
    let response = client.delete_user(1).unwrap();

    assert_eq!(response.status, 200, "Expected status code 200, but got {}", response.status);
    assert_eq!(response.json_value().unwrap(), serde_json::json!({}));
}

pub fn check_unknown_user<T: Transport>(client: &UserClient<T>) {
    let response = client.get_user_by_id(999_999).unwrap();

    assert_eq!(response.status, 404, "Expected status code 404, but got {}", response.status);
    let err = response.error_for_status().unwrap_err();
    assert!(matches!(err, ApiError::NotFound));
}
