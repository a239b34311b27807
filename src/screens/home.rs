//! Home screen: muscle groups and their exercises.

use std::sync::Arc;

use crate::api::ApiClient;
use crate::models::ExerciseDto;
use crate::traits::{Toast, Toaster};

use super::exercise::ExerciseScreen;

pub const FETCH_GROUPS_FAILED: &str = "Não foi possivel carregar os grupos musculares.";
pub const FETCH_EXERCISES_FAILED: &str = "Não foi possivel carregar os exercícios.";

/// Group selected when the screen opens.
pub const DEFAULT_GROUP: &str = "antebraço";

/// State of the home screen.
pub struct HomeScreen {
    api: ApiClient,
    toaster: Arc<dyn Toaster>,
    groups: Vec<String>,
    exercises: Vec<ExerciseDto>,
    group_selected: String,
    is_loading: bool,
}

impl HomeScreen {
    pub fn new(api: ApiClient, toaster: Arc<dyn Toaster>) -> Self {
        Self {
            api,
            toaster,
            groups: Vec::new(),
            exercises: Vec::new(),
            group_selected: DEFAULT_GROUP.to_string(),
            is_loading: true,
        }
    }

    pub fn groups(&self) -> &[String] {
        &self.groups
    }

    pub fn exercises(&self) -> &[ExerciseDto] {
        &self.exercises
    }

    pub fn group_selected(&self) -> &str {
        &self.group_selected
    }

    /// True while the exercise list is loading.
    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    /// Load the list of muscle groups.
    pub async fn fetch_groups(&mut self) {
        match self.api.fetch_groups().await {
            Ok(groups) => self.groups = groups,
            Err(e) => self.toaster.show(Toast::error(e.toast_title(FETCH_GROUPS_FAILED))),
        }
    }

    /// Load the exercises of the selected group.
    pub async fn fetch_exercises_by_group(&mut self) {
        self.is_loading = true;

        match self.api.fetch_exercises_by_group(&self.group_selected).await {
            Ok(exercises) => self.exercises = exercises,
            Err(e) => self
                .toaster
                .show(Toast::error(e.toast_title(FETCH_EXERCISES_FAILED))),
        }

        self.is_loading = false;
    }

    /// Select a group and reload its exercises.
    ///
    /// Group names compare case-insensitively; selecting the current group
    /// does nothing.
    pub async fn select_group(&mut self, group: &str) {
        if self.group_selected.to_lowercase() == group.to_lowercase() {
            return;
        }
        self.group_selected = group.to_string();
        self.fetch_exercises_by_group().await;
    }

    /// Detail screen for one of the listed exercises.
    pub fn open_exercise(&self, exercise_id: &str) -> ExerciseScreen {
        ExerciseScreen::new(self.api.clone(), Arc::clone(&self.toaster), exercise_id)
    }
}
