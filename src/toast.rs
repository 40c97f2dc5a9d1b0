//! Transient status messages shown at the bottom of the page.
//!
//! Only one toast is visible at a time: every toast is rendered as an
//! out-of-band swap of the whole toast container, so a new toast replaces
//! whatever was there. `static/app.js` fades the toast in and removes it
//! once its duration has passed.

use std::time::{Duration, Instant};

use maud::{Markup, html};

use crate::html::TOAST_CONTAINER_ID;

/// How long a toast stays on screen unless configured otherwise.
pub const DEFAULT_TOAST_DURATION: Duration = Duration::from_millis(3000);

/// How long the fade-out transition takes after the duration has passed.
pub const TOAST_FADE_DURATION: Duration = Duration::from_millis(300);

const ERROR_BACKGROUND: &str = "#d32f2f";

/// Toast message types for styling
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastVariant {
    Success,
    Error,
}

impl ToastVariant {
    fn as_str(self) -> &'static str {
        match self {
            ToastVariant::Success => "success",
            ToastVariant::Error => "error",
        }
    }
}

/// A single status message.
#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub variant: ToastVariant,
    pub message: String,
    pub duration: Duration,
    shown_at: Instant,
}

impl Toast {
    /// Whether the toast has finished fading out at `now`.
    pub fn is_expired_at(&self, now: Instant) -> bool {
        now.duration_since(self.shown_at) >= self.duration + TOAST_FADE_DURATION
    }

    /// Render the toast as an out-of-band swap that replaces the contents of
    /// the toast container.
    pub fn into_html(self) -> Markup {
        html! {
            div id=(TOAST_CONTAINER_ID) hx-swap-oob="innerHTML"
            {
                (self.into_inline_html())
            }
        }
    }

    /// Render the toast for placing directly inside the toast container of a
    /// full page.
    pub fn into_inline_html(self) -> Markup {
        let background = match self.variant {
            ToastVariant::Success => None,
            ToastVariant::Error => Some(format!("background-color: {ERROR_BACKGROUND};")),
        };

        html! {
            div
                id=(format!("toast-{}", self.id))
                class="toast px-4 py-3 rounded shadow text-white bg-green-600"
                role="alert"
                data-variant=(self.variant.as_str())
                data-toast-duration=(self.duration.as_millis().to_string())
                style=[background]
            {
                (self.message)
            }
        }
    }
}

/// Issues toasts and remembers the one currently on screen.
#[derive(Debug)]
pub struct ToastManager {
    duration: Duration,
    next_id: u64,
    current: Option<Toast>,
}

impl Default for ToastManager {
    fn default() -> Self {
        Self::new(DEFAULT_TOAST_DURATION)
    }
}

impl ToastManager {
    /// Create a manager whose toasts stay visible for `duration`.
    pub fn new(duration: Duration) -> Self {
        Self {
            duration,
            next_id: 0,
            current: None,
        }
    }

    /// Show a success toast, replacing any toast on screen.
    pub fn success(&mut self, message: impl Into<String>) -> Toast {
        self.show(ToastVariant::Success, message.into())
    }

    /// Show an error toast, replacing any toast on screen.
    pub fn error(&mut self, message: impl Into<String>) -> Toast {
        self.show(ToastVariant::Error, message.into())
    }

    fn show(&mut self, variant: ToastVariant, message: String) -> Toast {
        self.next_id += 1;

        let toast = Toast {
            id: self.next_id,
            variant,
            message,
            duration: self.duration,
            shown_at: Instant::now(),
        };

        if let Some(previous) = self.current.replace(toast.clone()) {
            tracing::debug!("Toast {} replaced by toast {}", previous.id, toast.id);
        }

        toast
    }

    /// The toast on screen, if it has not been dismissed yet.
    pub fn current(&self) -> Option<&Toast> {
        self.current_at(Instant::now())
    }

    /// Forget the toast on screen.
    pub fn clear(&mut self) {
        if let Some(previous) = self.current.take() {
            tracing::debug!("Cleared toast {}", previous.id);
        }
    }

    fn current_at(&self, now: Instant) -> Option<&Toast> {
        self.current
            .as_ref()
            .filter(|toast| !toast.is_expired_at(now))
    }
}
