//! Toast sink trait abstraction.
//!
//! Screens report success and failure as transient toasts. Rendering them
//! belongs to the host UI, which implements [`Toaster`].

/// Visual intent of a toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

/// A transient notification, shown at the top of the screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub title: String,
    pub kind: ToastKind,
}

impl Toast {
    /// An error toast.
    pub fn error(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            kind: ToastKind::Error,
        }
    }

    /// A success toast.
    pub fn success(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            kind: ToastKind::Success,
        }
    }
}

/// Receiver of toasts raised by screens.
pub trait Toaster: Send + Sync {
    /// Display a toast. Must not block.
    fn show(&self, toast: Toast);
}
