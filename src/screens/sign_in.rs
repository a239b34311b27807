//! Sign-in screen.

use std::sync::Arc;

use crate::auth::SessionContext;
use crate::traits::{Toast, Toaster};

pub const SIGN_IN_FAILED: &str = "Não foi possivel entrar. Tente novamente mais tarde.";

/// State of the sign-in screen.
pub struct SignInScreen {
    session: Arc<SessionContext>,
    toaster: Arc<dyn Toaster>,
    is_loading: bool,
}

impl SignInScreen {
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

    /// Sign in. Returns whether a session was established.
    pub async fn handle_sign_in(&mut self, email: &str, password: &str) -> bool {
        self.is_loading = true;

        let signed_in = match self.session.sign_in(email, password).await {
            Ok(_) => true,
            Err(e) => {
                self.toaster.show(Toast::error(e.toast_title(SIGN_IN_FAILED)));
                false
            }
        };

        self.is_loading = false;
        signed_in
    }
}
