//! Common fixtures for integration tests.
//!
//! Tests run the production adapters (reqwest over a wiremock server and
//! file storage in a temp directory) with a recording toaster in place of
//! the UI.

#![allow(dead_code)]

use std::sync::Arc;

use serde_json::{json, Value};
use tempfile::TempDir;
use wiremock::MockServer;

use gym_client::adapters::mock::RecordingToaster;
use gym_client::adapters::{FileStorage, ReqwestHttpClient};
use gym_client::storage::{AUTH_TOKEN_STORAGE, USER_STORAGE};
use gym_client::traits::StorageProvider;
use gym_client::GymApp;

/// Token the fake API issues on sign-in.
pub const TEST_TOKEN: &str = "test-token-12345";

/// User record as the API returns it.
pub fn user_json() -> Value {
    json!({
        "id": "user-1",
        "name": "Rian",
        "email": "rian@example.com",
        "avatar": "rian.png"
    })
}

/// Successful `/sessions` response body.
pub fn session_body() -> Value {
    json!({ "user": user_json(), "token": TEST_TOKEN })
}

/// Exercise record as the API returns it.
pub fn exercise_json(id: u64, name: &str, group: &str) -> Value {
    json!({
        "id": id,
        "name": name,
        "group": group,
        "series": 3,
        "repetitions": 12,
        "demo": format!("{}.gif", id),
        "thumb": format!("{}.png", id),
        "updated_at": "2023-01-10 12:00:00"
    })
}

/// An app wired to `server` whose storage lives in `dir`.
pub struct TestApp {
    pub app: GymApp,
    pub storage: FileStorage,
    pub toaster: RecordingToaster,
}

impl TestApp {
    pub fn new(server: &MockServer, dir: &TempDir) -> Self {
        let storage = FileStorage::with_root(dir.path());
        let toaster = RecordingToaster::new();
        let app = GymApp::with_parts(
            &server.uri(),
            Arc::new(ReqwestHttpClient::new()),
            Arc::new(storage.clone()),
            Arc::new(toaster.clone()),
        );
        Self {
            app,
            storage,
            toaster,
        }
    }
}

/// Write a complete session into `dir` as a previous run would have.
pub async fn seed_session(dir: &TempDir) {
    let storage = FileStorage::with_root(dir.path());
    storage
        .set_item(USER_STORAGE, &user_json().to_string())
        .await
        .unwrap();
    storage
        .set_item(AUTH_TOKEN_STORAGE, &json!({ "token": TEST_TOKEN }).to_string())
        .await
        .unwrap();
}
