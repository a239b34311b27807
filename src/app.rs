//! Application wiring.
//!
//! [`GymApp`] builds the shared API client, the session store and the
//! session context from a [`ClientConfig`], restores any persisted session,
//! and hands out screens bound to that shared state.

use std::sync::Arc;
use tracing::{info, warn};

use crate::adapters::{FileStorage, ReqwestHttpClient};
use crate::api::ApiClient;
use crate::auth::SessionContext;
use crate::config::ClientConfig;
use crate::error::{GymResult, NetworkError, StorageError};
use crate::notifications::TracingToaster;
use crate::screens::{ExerciseScreen, HomeScreen, ProfileScreen, SignInScreen, SignUpScreen};
use crate::storage::SessionStore;
use crate::traits::{HttpClient, StorageProvider, Toaster};

/// Which navigation stack the host should show.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteStack {
    /// Session restoration has not finished.
    Loading,
    /// Sign-in and sign-up.
    Auth,
    /// Home, exercise, profile.
    App,
}

/// The assembled client application.
pub struct GymApp {
    session: Arc<SessionContext>,
    toaster: Arc<dyn Toaster>,
}

impl GymApp {
    /// Build the production stack and restore the persisted session.
    ///
    /// A storage read failure during restoration is logged and the app
    /// starts signed out.
    pub async fn start(config: ClientConfig) -> GymResult<Self> {
        let http = ReqwestHttpClient::with_timeout(config.request_timeout).map_err(|e| {
            NetworkError::Other {
                message: e.to_string(),
            }
        })?;
        let storage_dir = config
            .resolved_storage_dir()
            .ok_or_else(|| {
                StorageError::ReadFailed("Could not determine a storage directory".to_string())
            })?;

        info!(api_url = %config.api_url, storage_dir = %storage_dir.display(), "Starting gym client");

        let app = Self::with_parts(
            &config.api_url,
            Arc::new(http),
            Arc::new(FileStorage::with_root(storage_dir)),
            Arc::new(TracingToaster),
        );
        app.restore_session().await;
        Ok(app)
    }

    /// Assemble from explicit parts. The session is not restored yet.
    pub fn with_parts(
        api_url: &str,
        http: Arc<dyn HttpClient>,
        storage: Arc<dyn StorageProvider>,
        toaster: Arc<dyn Toaster>,
    ) -> Self {
        let api = ApiClient::new(api_url, http);
        let store = SessionStore::new(storage);
        Self {
            session: Arc::new(SessionContext::new(api, store)),
            toaster,
        }
    }

    /// Restore the persisted session, swallowing storage errors.
    pub async fn restore_session(&self) {
        if let Err(e) = self.session.restore().await {
            warn!(code = e.error_code(), error = %e, "Starting signed out");
        }
    }

    pub fn session(&self) -> &Arc<SessionContext> {
        &self.session
    }

    pub fn api(&self) -> &ApiClient {
        self.session.api()
    }

    /// The navigation stack matching the session state.
    pub fn route_stack(&self) -> RouteStack {
        let state = self.session.state();
        if state.user.is_some() {
            RouteStack::App
        } else if state.is_loading_user_storage_data {
            RouteStack::Loading
        } else {
            RouteStack::Auth
        }
    }

    pub fn sign_in_screen(&self) -> SignInScreen {
        SignInScreen::new(Arc::clone(&self.session), Arc::clone(&self.toaster))
    }

    pub fn sign_up_screen(&self) -> SignUpScreen {
        SignUpScreen::new(Arc::clone(&self.session), Arc::clone(&self.toaster))
    }

    pub fn home_screen(&self) -> HomeScreen {
        HomeScreen::new(self.api().clone(), Arc::clone(&self.toaster))
    }

    pub fn exercise_screen(&self, exercise_id: &str) -> ExerciseScreen {
        ExerciseScreen::new(self.api().clone(), Arc::clone(&self.toaster), exercise_id)
    }

    pub fn profile_screen(&self) -> ProfileScreen {
        ProfileScreen::new(Arc::clone(&self.session), Arc::clone(&self.toaster))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::mock::{InMemoryStorage, MockHttpClient, RecordingToaster};
    use crate::storage::{AUTH_TOKEN_STORAGE, USER_STORAGE};

    fn app_with(storage: InMemoryStorage) -> (GymApp, MockHttpClient) {
        let http = MockHttpClient::new();
        let app = GymApp::with_parts(
            "http://api.test",
            Arc::new(http.clone()),
            Arc::new(storage),
            Arc::new(RecordingToaster::new()),
        );
        (app, http)
    }

    #[tokio::test]
    async fn test_route_stack_follows_restoration() {
        let storage = InMemoryStorage::with_items([
            (USER_STORAGE, r#"{"id":"1","name":"Rian","email":"rian@example.com","avatar":null}"#),
            (AUTH_TOKEN_STORAGE, r#"{"token":"abc"}"#),
        ]);
        let (app, http) = app_with(storage);
        assert_eq!(app.route_stack(), RouteStack::Loading);

        app.restore_session().await;

        assert_eq!(app.route_stack(), RouteStack::App);
        assert_eq!(app.api().auth_token(), Some("abc".to_string()));
        assert!(http.get_requests().is_empty());
    }

    #[tokio::test]
    async fn test_restore_failure_starts_signed_out() {
        let storage = InMemoryStorage::new();
        storage.fail_reads_of(USER_STORAGE);
        let (app, _) = app_with(storage);

        app.restore_session().await;

        assert_eq!(app.route_stack(), RouteStack::Auth);
    }

    #[test]
    fn test_screens_share_api_headers() {
        let (app, _) = app_with(InMemoryStorage::new());
        app.api().set_auth_token("shared");
        let detail = app.exercise_screen("1");
        assert_eq!(detail.exercise_id(), "1");
        assert_eq!(app.home_screen().group_selected(), "antebraço");
    }
}
