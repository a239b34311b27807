//! Typed wrappers for the gym API endpoints.

use urlencoding::encode;

use super::client::ApiClient;
use crate::error::GymResult;
use crate::models::{
    ExerciseDto, HistoryRegistration, NewUser, ProfileUpdate, SessionResponse, SignInRequest,
};

impl ApiClient {
    /// Sign in.
    ///
    /// POST /sessions
    ///
    /// The response may lack the user or the token; callers decide whether
    /// that constitutes a session.
    pub async fn create_session(&self, email: &str, password: &str) -> GymResult<SessionResponse> {
        let body = SignInRequest {
            email: email.to_string(),
            password: password.to_string(),
        };
        self.post("/sessions", &body).await
    }

    /// Create an account.
    ///
    /// POST /users
    pub async fn create_user(&self, user: &NewUser) -> GymResult<()> {
        self.post_unit("/users", user).await
    }

    /// Update the signed-in user's profile.
    ///
    /// PUT /users
    pub async fn update_user(&self, update: &ProfileUpdate) -> GymResult<()> {
        self.put_unit("/users", update).await
    }

    /// List muscle groups.
    ///
    /// GET /groups
    pub async fn fetch_groups(&self) -> GymResult<Vec<String>> {
        self.get("/groups").await
    }

    /// List the exercises of a muscle group.
    ///
    /// GET /exercises/bygroup/:group
    pub async fn fetch_exercises_by_group(&self, group: &str) -> GymResult<Vec<ExerciseDto>> {
        self.get(&format!("/exercises/bygroup/{}", encode(group)))
            .await
    }

    /// Fetch one exercise.
    ///
    /// GET /exercises/:id
    pub async fn fetch_exercise(&self, exercise_id: &str) -> GymResult<ExerciseDto> {
        self.get(&format!("/exercises/{}", encode(exercise_id))).await
    }

    /// Record that the signed-in user completed an exercise.
    ///
    /// POST /history
    pub async fn register_history(&self, exercise_id: &str) -> GymResult<()> {
        let body = HistoryRegistration {
            exercise_id: exercise_id.to_string(),
        };
        self.post_unit("/history", &body).await
    }
}
