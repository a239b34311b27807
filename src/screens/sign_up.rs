//! Sign-up screen.

use std::sync::Arc;
use tracing::info;

use crate::auth::SessionContext;
use crate::error::GymResult;
use crate::models::NewUser;
use crate::traits::{Toast, Toaster};

pub const SIGN_UP_FAILED: &str = "Não foi possivel criar a conta. Tente novamente mais tarde.";

/// State of the sign-up screen.
pub struct SignUpScreen {
    session: Arc<SessionContext>,
    toaster: Arc<dyn Toaster>,
    is_loading: bool,
}

impl SignUpScreen {
    pub fn new(session: Arc<SessionContext>, toaster: Arc<dyn Toaster>) -> Self {
        Self {
            session,
            toaster,
            is_loading: false,
        }
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    /// Create the account, then sign in with the same credentials.
    ///
    /// Returns whether the user ended up signed in.
    pub async fn handle_sign_up(&mut self, name: &str, email: &str, password: &str) -> bool {
        self.is_loading = true;

        let signed_up = match self.create_and_sign_in(name, email, password).await {
            Ok(()) => true,
            Err(e) => {
                self.toaster.show(Toast::error(e.toast_title(SIGN_UP_FAILED)));
                false
            }
        };

        self.is_loading = false;
        signed_up
    }

    async fn create_and_sign_in(&self, name: &str, email: &str, password: &str) -> GymResult<()> {
        let user = NewUser {
            name: name.to_string(),
            email: email.to_string(),
            password: password.to_string(),
        };
        self.session.api().create_user(&user).await?;
        info!("Account created");

        self.session.sign_in(email, password).await?;
        Ok(())
    }
}
