//! In-memory session context.
//!
//! [`SessionContext`] owns the signed-in user and keeps three things in
//! step: the in-memory user, the persisted records, and the bearer token
//! on the shared [`ApiClient`].

use std::sync::{PoisonError, RwLock};
use tracing::{debug, info, warn};

use crate::api::ApiClient;
use crate::error::{AuthError, GymError, GymResult};
use crate::models::UserDto;
use crate::storage::SessionStore;
use crate::traits::StorageError;

/// Observable session state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionState {
    /// The signed-in user, if any.
    pub user: Option<UserDto>,
    /// True while session records are being read or written.
    pub is_loading_user_storage_data: bool,
}

impl Default for SessionState {
    /// A fresh context is loading until [`SessionContext::restore`] runs.
    fn default() -> Self {
        Self {
            user: None,
            is_loading_user_storage_data: true,
        }
    }
}

/// Holder of the current user and their session lifecycle.
#[derive(Debug)]
pub struct SessionContext {
    api: ApiClient,
    store: SessionStore,
    state: RwLock<SessionState>,
}

impl SessionContext {
    /// Create a signed-out context.
    pub fn new(api: ApiClient, store: SessionStore) -> Self {
        Self {
            api,
            store,
            state: RwLock::new(SessionState::default()),
        }
    }

    /// The shared API client.
    pub fn api(&self) -> &ApiClient {
        &self.api
    }

    /// Snapshot of the session state.
    pub fn state(&self) -> SessionState {
        self.state
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// The signed-in user, if any.
    pub fn user(&self) -> Option<UserDto> {
        self.state().user
    }

    pub fn is_signed_in(&self) -> bool {
        self.user().is_some()
    }

    pub fn is_loading_user_storage_data(&self) -> bool {
        self.state().is_loading_user_storage_data
    }

    /// Sign in with email and password.
    ///
    /// The session is established only when the server returns both a user
    /// and a token and both were persisted. On any failure nothing changes:
    /// no in-memory user, no bearer header.
    pub async fn sign_in(&self, email: &str, password: &str) -> GymResult<UserDto> {
        let response = self.api.create_session(email, password).await?;

        let (user, token) = match (response.user, response.token) {
            (Some(user), Some(token)) if !token.is_empty() => (user, token),
            (user, token) => {
                let has_token = token.is_some_and(|t| !t.is_empty());
                warn!(has_user = user.is_some(), has_token, "Incomplete sign-in response");
                return Err(AuthError::IncompleteSessionResponse {
                    has_user: user.is_some(),
                    has_token,
                }
                .into());
            }
        };

        self.set_loading(true);
        let saved = self.save_to_storage(&user, &token).await;
        self.set_loading(false);
        saved?;

        self.user_and_token_update(user.clone(), &token);
        info!(user_id = %user.id, "Signed in");
        Ok(user)
    }

    /// Sign out.
    ///
    /// In-memory state and the bearer header are always cleared. Storage
    /// cleanup is best effort: a failure on one record is logged and the
    /// other record is still removed.
    pub async fn sign_out(&self) {
        self.set_loading(true);

        {
            let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);
            state.user = None;
        }
        self.api.clear_auth_token();

        if let Err(e) = self.store.remove_user().await {
            warn!(error = %e, "Failed to remove stored user during sign-out");
        }
        if let Err(e) = self.store.remove_token().await {
            warn!(error = %e, "Failed to remove stored token during sign-out");
        }

        self.set_loading(false);
        info!("Signed out");
    }

    /// Restore a persisted session without touching the network.
    ///
    /// Returns the restored user, or `None` when either record is missing.
    /// The loading flag is cleared whatever the outcome.
    pub async fn restore(&self) -> GymResult<Option<UserDto>> {
        let restored = match self.load_from_storage().await {
            Ok((Some(user), Some(token))) => {
                self.user_and_token_update(user.clone(), &token);
                info!(user_id = %user.id, "Restored session from storage");
                Ok(Some(user))
            }
            Ok((user, token)) => {
                debug!(
                    has_user = user.is_some(),
                    has_token = token.is_some(),
                    "No complete session in storage"
                );
                Ok(None)
            }
            Err(e) => {
                let err = GymError::from(e);
                warn!(code = err.error_code(), error = %err, "Failed to read session from storage");
                Err(err)
            }
        };

        self.set_loading(false);
        restored
    }

    async fn load_from_storage(&self) -> Result<(Option<UserDto>, Option<String>), StorageError> {
        let user = self.store.get_user().await?;
        let token = self.store.get_token().await?;
        Ok((user, token))
    }

    /// Persist both records, or neither.
    async fn save_to_storage(&self, user: &UserDto, token: &str) -> Result<(), StorageError> {
        self.store.save_user(user).await?;

        if let Err(e) = self.store.save_token(token).await {
            self.roll_back_stored_user().await;
            return Err(e);
        }
        Ok(())
    }

    /// Make the stored user match memory again after a failed token write.
    ///
    /// The token record was not replaced, so it still belongs to the
    /// current in-memory user, if any.
    async fn roll_back_stored_user(&self) {
        let rollback = match self.user() {
            Some(current) => self.store.save_user(&current).await,
            None => self.store.remove_user().await,
        };
        if let Err(e) = rollback {
            warn!(error = %e, "Failed to roll back stored user");
        }
    }

    fn user_and_token_update(&self, user: UserDto, token: &str) {
        self.api.set_auth_token(token);
        let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);
        state.user = Some(user);
    }

    fn set_loading(&self, loading: bool) {
        let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);
        state.is_loading_user_storage_data = loading;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::mock::{InMemoryStorage, MockHttpClient, MockResponse};
    use crate::error::GymError;
    use crate::storage::{AUTH_TOKEN_STORAGE, USER_STORAGE};
    use std::sync::Arc;

    const SESSIONS_URL: &str = "http://api.test/sessions";

    struct Fixture {
        http: MockHttpClient,
        storage: InMemoryStorage,
        session: SessionContext,
    }

    fn fixture() -> Fixture {
        let http = MockHttpClient::new();
        let storage = InMemoryStorage::new();
        let api = ApiClient::new("http://api.test", Arc::new(http.clone()));
        let store = SessionStore::new(Arc::new(storage.clone()));
        Fixture {
            session: SessionContext::new(api, store),
            http,
            storage,
        }
    }

    fn session_json() -> serde_json::Value {
        serde_json::json!({
            "user": { "id": 1, "name": "Rian", "email": "rian@example.com", "avatar": null },
            "token": "token-123"
        })
    }

    #[test]
    fn test_new_context_is_loading_and_signed_out() {
        let f = fixture();
        assert!(f.session.is_loading_user_storage_data());
        assert!(!f.session.is_signed_in());
    }

    #[tokio::test]
    async fn test_sign_in_persists_and_sets_header() {
        let f = fixture();
        f.http
            .set_response("POST", SESSIONS_URL, MockResponse::json(200, session_json()));

        let user = f.session.sign_in("rian@example.com", "123456").await.unwrap();

        assert_eq!(user.id, "1");
        assert_eq!(f.session.user(), Some(user));
        assert_eq!(f.session.api().auth_token(), Some("token-123".to_string()));
        assert!(f.storage.item(USER_STORAGE).is_some());
        assert_eq!(
            f.storage.item(AUTH_TOKEN_STORAGE),
            Some(r#"{"token":"token-123"}"#.to_string())
        );
        assert!(!f.session.is_loading_user_storage_data());
    }

    #[tokio::test]
    async fn test_sign_in_without_token_establishes_nothing() {
        let f = fixture();
        f.http.set_response(
            "POST",
            SESSIONS_URL,
            MockResponse::json(200, serde_json::json!({ "user": session_json()["user"] })),
        );

        let err = f.session.sign_in("rian@example.com", "123456").await.unwrap_err();

        assert!(matches!(
            err,
            GymError::Auth(AuthError::IncompleteSessionResponse {
                has_user: true,
                has_token: false
            })
        ));
        assert!(!f.session.is_signed_in());
        assert!(f.session.api().auth_token().is_none());
        assert!(f.storage.is_empty());
    }

    #[tokio::test]
    async fn test_sign_in_token_save_failure_rolls_back_user() {
        let f = fixture();
        f.http
            .set_response("POST", SESSIONS_URL, MockResponse::json(200, session_json()));
        f.storage.fail_writes_of(AUTH_TOKEN_STORAGE);

        let err = f.session.sign_in("rian@example.com", "123456").await.unwrap_err();

        assert!(matches!(err, GymError::Storage(StorageError::WriteFailed(_))));
        assert!(f.storage.item(USER_STORAGE).is_none());
        assert!(!f.session.is_signed_in());
        assert!(f.session.api().auth_token().is_none());
        assert!(!f.session.is_loading_user_storage_data());
    }

    #[tokio::test]
    async fn test_second_sign_in_token_save_failure_keeps_previous_session() {
        let f = fixture();
        f.http
            .set_response("POST", SESSIONS_URL, MockResponse::json(200, session_json()));
        let first = f.session.sign_in("rian@example.com", "123456").await.unwrap();

        f.http.set_response(
            "POST",
            SESSIONS_URL,
            MockResponse::json(
                200,
                serde_json::json!({
                    "user": { "id": 2, "name": "Ana", "email": "ana@example.com" },
                    "token": "token-456"
                }),
            ),
        );
        f.storage.fail_writes_of(AUTH_TOKEN_STORAGE);

        let result = f.session.sign_in("ana@example.com", "654321").await;

        assert!(result.is_err());
        assert_eq!(f.session.user(), Some(first.clone()));
        assert_eq!(f.session.api().auth_token(), Some("token-123".to_string()));
        assert!(f.storage.item(USER_STORAGE).unwrap().contains("rian@example.com"));
        assert!(f.storage.item(AUTH_TOKEN_STORAGE).unwrap().contains("token-123"));

        // A fresh context over the same storage restores the surviving session.
        let api = ApiClient::new("http://api.test", Arc::new(MockHttpClient::new()));
        let restarted = SessionContext::new(api, SessionStore::new(Arc::new(f.storage.clone())));
        assert_eq!(restarted.restore().await.unwrap(), Some(first));
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn test_restore_installs_user_before_clearing_loading() {
        let storage = InMemoryStorage::with_items([
            (USER_STORAGE, r#"{"id":"1","name":"Rian","email":"rian@example.com"}"#),
            (AUTH_TOKEN_STORAGE, r#"{"token":"abc"}"#),
        ]);
        let api = ApiClient::new("http://api.test", Arc::new(MockHttpClient::new()));
        let session = Arc::new(SessionContext::new(api, SessionStore::new(Arc::new(storage))));

        let observer = {
            let session = Arc::clone(&session);
            tokio::spawn(async move {
                loop {
                    let state = session.state();
                    if !state.is_loading_user_storage_data {
                        return state.user.is_some();
                    }
                    tokio::task::yield_now().await;
                }
            })
        };

        session.restore().await.unwrap();

        assert!(observer.await.unwrap(), "loading cleared while signed out");
    }

    #[tokio::test]
    async fn test_sign_out_is_best_effort() {
        let f = fixture();
        f.http
            .set_response("POST", SESSIONS_URL, MockResponse::json(200, session_json()));
        f.session.sign_in("rian@example.com", "123456").await.unwrap();
        f.storage.fail_removes_of(USER_STORAGE);

        f.session.sign_out().await;

        assert!(!f.session.is_signed_in());
        assert!(f.session.api().auth_token().is_none());
        assert!(f.storage.item(AUTH_TOKEN_STORAGE).is_none());
        assert!(!f.session.is_loading_user_storage_data());
    }

    #[tokio::test]
    async fn test_restore_read_failure_leaves_signed_out() {
        let f = fixture();
        f.storage.fail_reads_of(AUTH_TOKEN_STORAGE);

        let result = f.session.restore().await;

        assert!(matches!(result, Err(GymError::Storage(_))));
        assert!(!f.session.is_signed_in());
        assert!(!f.session.is_loading_user_storage_data());
    }
}
