//! Exercise records.

use serde::{Deserialize, Serialize};

use super::deserialize_id;

/// An exercise as returned by `GET /exercises/:id` and
/// `GET /exercises/bygroup/:group`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExerciseDto {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    pub name: String,
    /// Muscle group the exercise belongs to.
    pub group: String,
    pub series: u32,
    pub repetitions: u32,
    /// Demonstration media reference, resolved against `/exercise/demo`.
    #[serde(default)]
    pub demo: Option<String>,
    /// Thumbnail reference, resolved against `/exercise/thumb`.
    #[serde(default)]
    pub thumb: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

/// Body of `POST /history`.
#[derive(Debug, Clone, Serialize)]
pub struct HistoryRegistration {
    pub exercise_id: String,
}
