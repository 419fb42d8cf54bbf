//! Transient notifications.
//!
//! `ToastService` is a copyable handle kept in context. It shows each
//! message through thaw's toaster when one is mounted and keeps a short
//! history of what was shown.

use std::time::Duration;

use leptos::prelude::*;
use thaw::{Toast as ThawToast, ToastIntent, ToastOptions, ToastTitle, ToasterInjection};

const HISTORY_LIMIT: usize = 20;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

impl ToastKind {
    fn intent(&self) -> ToastIntent {
        match self {
            ToastKind::Success => ToastIntent::Success,
            ToastKind::Error => ToastIntent::Error,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub kind: ToastKind,
    pub message: String,
}

#[derive(Clone, Copy)]
pub struct ToastService {
    history: RwSignal<Vec<Toast>>,
    toaster: StoredValue<Option<ToasterInjection>, LocalStorage>,
    timeout_ms: u32,
}

impl Default for ToastService {
    fn default() -> Self {
        Self::new()
    }
}

impl ToastService {
    /// History only; nothing is rendered.
    pub fn new() -> Self {
        Self {
            history: RwSignal::new(Vec::new()),
            toaster: StoredValue::new_local(None),
            timeout_ms: 0,
        }
    }

    /// Renders through `toaster`. Must be created under `ToasterProvider`.
    pub fn with_toaster(toaster: ToasterInjection, timeout_ms: u32) -> Self {
        Self {
            history: RwSignal::new(Vec::new()),
            toaster: StoredValue::new_local(Some(toaster)),
            timeout_ms,
        }
    }

    pub fn push(&self, kind: ToastKind, message: impl Into<String>) {
        let message = message.into();
        self.history.update(|history| {
            if history.len() == HISTORY_LIMIT {
                history.remove(0);
            }
            history.push(Toast {
                kind,
                message: message.clone(),
            });
        });

        let timeout = Duration::from_millis(u64::from(self.timeout_ms));
        self.toaster.with_value(|toaster| {
            if let Some(toaster) = toaster {
                toaster.dispatch_toast(
                    move || {
                        view! {
                            <ThawToast>
                                <ToastTitle>{message}</ToastTitle>
                            </ThawToast>
                        }
                    },
                    ToastOptions::default()
                        .with_intent(kind.intent())
                        .with_timeout(timeout),
                );
            }
        });
    }

    pub fn success(&self, message: impl Into<String>) {
        self.push(ToastKind::Success, message)
    }

    pub fn error(&self, message: impl Into<String>) {
        self.push(ToastKind::Error, message)
    }

    /// Shown toasts, oldest first. Untracked.
    pub fn snapshot(&self) -> Vec<Toast> {
        self.history.get_untracked()
    }

    pub fn messages(&self) -> Vec<String> {
        self.history
            .with_untracked(|history| history.iter().map(|t| t.message.clone()).collect())
    }
}
