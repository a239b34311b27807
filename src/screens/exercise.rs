//! Exercise detail screen.

use std::sync::Arc;
use tracing::debug;

use crate::api::ApiClient;
use crate::models::ExerciseDto;
use crate::traits::{Toast, Toaster};

pub const FETCH_DETAILS_FAILED: &str = "Não foi possivel carregar os detalhes do exercício.";
pub const REGISTER_FAILED: &str = "Não foi possivel registrar o exercício.";
pub const REGISTER_SUCCEEDED: &str = "Exercício registrado com sucesso!";

/// State of the exercise detail screen.
pub struct ExerciseScreen {
    api: ApiClient,
    toaster: Arc<dyn Toaster>,
    exercise_id: String,
    exercise: Option<ExerciseDto>,
    is_loading: bool,
    sending_register: bool,
}

impl ExerciseScreen {
    /// Open the screen for an exercise. Details are not fetched yet.
    pub fn new(api: ApiClient, toaster: Arc<dyn Toaster>, exercise_id: impl Into<String>) -> Self {
        Self {
            api,
            toaster,
            exercise_id: exercise_id.into(),
            exercise: None,
            is_loading: true,
            sending_register: false,
        }
    }

    pub fn exercise_id(&self) -> &str {
        &self.exercise_id
    }

    pub fn exercise(&self) -> Option<&ExerciseDto> {
        self.exercise.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn is_sending_register(&self) -> bool {
        self.sending_register
    }

    /// URL of the demonstration media of the loaded exercise.
    pub fn demo_url(&self) -> Option<String> {
        let demo = self.exercise.as_ref()?.demo.as_deref()?;
        Some(self.api.demo_url(demo))
    }

    /// Load the exercise.
    ///
    /// Failures are shown as a toast and never returned; `is_loading` is
    /// false afterwards either way.
    pub async fn fetch_details(&mut self) {
        self.is_loading = true;

        match self.api.fetch_exercise(&self.exercise_id).await {
            Ok(exercise) => self.exercise = Some(exercise),
            Err(e) => {
                debug!(
                    exercise_id = %self.exercise_id,
                    code = e.error_code(),
                    retryable = e.is_retryable(),
                    error = %e,
                    "Exercise fetch failed"
                );
                self.toaster
                    .show(Toast::error(e.toast_title(FETCH_DETAILS_FAILED)));
            }
        }

        self.is_loading = false;
    }

    /// Mark the exercise as done. Returns whether the server accepted it.
    pub async fn register(&mut self) -> bool {
        self.sending_register = true;

        let registered = match self.api.register_history(&self.exercise_id).await {
            Ok(()) => {
                self.toaster.show(Toast::success(REGISTER_SUCCEEDED));
                true
            }
            Err(e) => {
                debug!(
                    exercise_id = %self.exercise_id,
                    code = e.error_code(),
                    error = %e,
                    "History registration failed"
                );
                self.toaster.show(Toast::error(e.toast_title(REGISTER_FAILED)));
                false
            }
        };

        self.sending_register = false;
        registered
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::mock::{MockHttpClient, MockResponse, RecordingToaster};
    use crate::traits::{HttpError, ToastKind};

    fn screen(mock: &MockHttpClient, toaster: &RecordingToaster) -> ExerciseScreen {
        let api = ApiClient::new("http://api.test", Arc::new(mock.clone()));
        ExerciseScreen::new(api, Arc::new(toaster.clone()), "3")
    }

    #[tokio::test]
    async fn test_fetch_details_success() {
        let mock = MockHttpClient::new();
        mock.set_response(
            "GET",
            "http://api.test/exercises/3",
            MockResponse::json(
                200,
                serde_json::json!({
                    "id": 3, "name": "Remada", "group": "costas",
                    "series": 3, "repetitions": 12, "demo": "remada.gif"
                }),
            ),
        );
        let toaster = RecordingToaster::new();
        let mut screen = screen(&mock, &toaster);
        assert!(screen.is_loading());

        screen.fetch_details().await;

        assert!(!screen.is_loading());
        assert_eq!(screen.exercise().unwrap().name, "Remada");
        assert_eq!(
            screen.demo_url(),
            Some("http://api.test/exercise/demo/remada.gif".to_string())
        );
        assert!(toaster.toasts().is_empty());
    }

    #[tokio::test]
    async fn test_fetch_details_failure_shows_fallback() {
        let mock = MockHttpClient::new();
        mock.set_default_response(MockResponse::Error(HttpError::ConnectionFailed(
            "refused".into(),
        )));
        let toaster = RecordingToaster::new();
        let mut screen = screen(&mock, &toaster);

        screen.fetch_details().await;

        assert!(!screen.is_loading());
        assert!(screen.exercise().is_none());
        let toast = toaster.last().unwrap();
        assert_eq!(toast.kind, ToastKind::Error);
        assert_eq!(toast.title, FETCH_DETAILS_FAILED);
    }

    #[tokio::test]
    async fn test_register_failure_shows_server_message() {
        let mock = MockHttpClient::new();
        mock.set_response(
            "POST",
            "http://api.test/history",
            MockResponse::json(401, serde_json::json!({ "message": "JWT token inválido." })),
        );
        let toaster = RecordingToaster::new();
        let mut screen = screen(&mock, &toaster);

        assert!(!screen.register().await);

        assert!(!screen.is_sending_register());
        assert_eq!(toaster.last().unwrap().title, "JWT token inválido.");
    }

    #[tokio::test]
    async fn test_register_success_toast() {
        let mock = MockHttpClient::new();
        mock.set_response("POST", "http://api.test/history", MockResponse::empty(201));
        let toaster = RecordingToaster::new();
        let mut screen = screen(&mock, &toaster);

        assert!(screen.register().await);

        let toast = toaster.last().unwrap();
        assert_eq!(toast.kind, ToastKind::Success);
        assert_eq!(toast.title, REGISTER_SUCCEEDED);
    }
}
