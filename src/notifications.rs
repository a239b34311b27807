//! Toast delivery through the log.
//!
//! Hosts without a native toast surface (headless runs, tests of the
//! wiring) can use [`TracingToaster`], which writes every toast to the
//! tracing subscriber instead of drawing it.

use crate::traits::{Toast, ToastKind, Toaster};

/// A [`Toaster`] that logs toasts.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingToaster;

impl Toaster for TracingToaster {
    fn show(&self, toast: Toast) {
        match toast.kind {
            ToastKind::Success => tracing::info!(title = %toast.title, "toast"),
            ToastKind::Error => tracing::warn!(title = %toast.title, "toast"),
        }
    }
}
