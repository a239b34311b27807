//! Recording toaster for testing.

use std::sync::{Arc, Mutex};

use crate::traits::{Toast, Toaster};

/// A [`Toaster`] that keeps every toast for later assertions.
#[derive(Debug, Clone, Default)]
pub struct RecordingToaster {
    toasts: Arc<Mutex<Vec<Toast>>>,
}

impl RecordingToaster {
    pub fn new() -> Self {
        Self::default()
    }

    /// All toasts shown so far, oldest first.
    pub fn toasts(&self) -> Vec<Toast> {
        self.toasts.lock().unwrap().clone()
    }

    /// The most recent toast.
    pub fn last(&self) -> Option<Toast> {
        self.toasts.lock().unwrap().last().cloned()
    }
}

impl Toaster for RecordingToaster {
    fn show(&self, toast: Toast) {
        self.toasts.lock().unwrap().push(toast);
    }
}
