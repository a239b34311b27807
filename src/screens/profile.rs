//! Profile screen.

use std::sync::Arc;
use tracing::info;

use crate::auth::SessionContext;
use crate::models::ProfileUpdate;
use crate::traits::{Toast, Toaster};

pub const PROFILE_UPDATE_FAILED: &str =
    "Não foi possivel atualizar os dados. Tente novamente mais tarde";
pub const PROFILE_UPDATED: &str = "Perfil atualizado com sucesso.";

/// State of the profile screen.
pub struct ProfileScreen {
    session: Arc<SessionContext>,
    toaster: Arc<dyn Toaster>,
    is_updating: bool,
}

impl ProfileScreen {
    pub fn new(session: Arc<SessionContext>, toaster: Arc<dyn Toaster>) -> Self {
        Self {
            session,
            toaster,
            is_updating: false,
        }
    }

    pub fn is_updating(&self) -> bool {
        self.is_updating
    }

    /// Initial form values: the signed-in user's name and email.
    pub fn default_form(&self) -> ProfileUpdate {
        self.session
            .user()
            .map(|user| ProfileUpdate::from_user(&user))
            .unwrap_or_default()
    }

    /// Avatar URL of the signed-in user, when they have one.
    pub fn avatar_url(&self) -> Option<String> {
        let avatar = self.session.user()?.avatar?;
        Some(self.session.api().avatar_url(&avatar))
    }

    /// Submit the form. Returns whether the server accepted it.
    pub async fn handle_profile_update(&mut self, form: &ProfileUpdate) -> bool {
        self.is_updating = true;

        let updated = match self.session.api().update_user(form).await {
            Ok(()) => {
                info!("Profile updated");
                self.toaster.show(Toast::success(PROFILE_UPDATED));
                true
            }
            Err(e) => {
                self.toaster
                    .show(Toast::error(e.toast_title(PROFILE_UPDATE_FAILED)));
                false
            }
        };

        self.is_updating = false;
        updated
    }
}
