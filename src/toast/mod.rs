//! Transient notifications with auto-dismiss.
//!
//! Each toast owns a cancellable timer handle; dismissing a toast by hand
//! clears its timer, so a late tick can never remove the wrong entry.

use leptos::prelude::*;
use leptos_dom::helpers::{set_timeout_with_handle, TimeoutHandle};
use std::collections::HashMap;
use std::time::Duration;
use strum::AsRefStr;

pub(crate) const TOAST_DISMISS_MS: u64 = 4000;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, AsRefStr)]
#[strum(serialize_all = "lowercase")]
pub enum ToastLevel {
    #[default]
    Info,
    Success,
    Error,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub level: ToastLevel,
    pub text: String,
}

#[derive(Clone, Copy)]
pub struct ToastController {
    toasts: RwSignal<Vec<Toast>>,
    timers: StoredValue<HashMap<u64, TimeoutHandle>, LocalStorage>,
    next_id: StoredValue<u64>,
}

impl ToastController {
    pub fn new() -> Self {
        Self {
            toasts: RwSignal::new(Vec::new()),
            timers: StoredValue::new_local(HashMap::new()),
            next_id: StoredValue::new(1),
        }
    }

    pub fn toasts_signal(&self) -> RwSignal<Vec<Toast>> {
        self.toasts
    }

    pub fn info(&self, text: impl Into<String>) {
        self.push(ToastLevel::Info, text);
    }

    pub fn success(&self, text: impl Into<String>) {
        self.push(ToastLevel::Success, text);
    }

    pub fn error(&self, text: impl Into<String>) {
        self.push(ToastLevel::Error, text);
    }

    pub fn push(&self, level: ToastLevel, text: impl Into<String>) -> u64 {
        let id = self.next_id.try_update_value(|n| {
            let id = *n;
            *n += 1;
            id
        });
        let Some(id) = id else {
            return 0;
        };

        self.toasts.update(|list| {
            list.push(Toast {
                id,
                level,
                text: text.into(),
            });
        });

        let ctrl = *self;
        let handle = set_timeout_with_handle(
            move || ctrl.dismiss(id),
            Duration::from_millis(TOAST_DISMISS_MS),
        );
        if let Ok(handle) = handle {
            self.timers.update_value(|t| {
                t.insert(id, handle);
            });
        }

        id
    }

    /// Removes a toast and cancels its pending timer. Unknown ids are a
    /// no-op, so the auto-dismiss tick racing a manual dismissal is harmless.
    pub fn dismiss(&self, id: u64) {
        if let Some(handle) = self.timers.try_update_value(|t| t.remove(&id)).flatten() {
            handle.clear();
        }
        self.toasts.update(|list| list.retain(|t| t.id != id));
    }
}

impl Default for ToastController {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toast_levels_have_stable_names() {
        assert_eq!(ToastLevel::Info.as_ref(), "info");
        assert_eq!(ToastLevel::Success.as_ref(), "success");
        assert_eq!(ToastLevel::Error.as_ref(), "error");
    }
}
