//! Confirmation workflow: an owned dialog controller that replaces blocking
//! native `confirm()` prompts with a non-blocking, accessible modal.
//!
//! The controller is constructed once in `App` and reaches triggers through
//! context; there is no free-standing global state. The dialog view itself
//! lives in `components::ui::dialog`.

use crate::a11y::{Announcer, Urgency};
use leptos::html;
use leptos::prelude::*;
use leptos_dom::helpers::{set_timeout_with_handle, TimeoutHandle};
use std::collections::HashMap;
use std::time::Duration;
use strum::{AsRefStr, EnumString};
use wasm_bindgen::JsCast;

/// Delay before keyboard focus moves into the dialog, so the open
/// transition has started and the browser will honor the focus call.
pub(crate) const FOCUS_SETTLE_MS: u64 = 200;

/// Visual treatment of the confirm button.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, AsRefStr, EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum ConfirmStyle {
    #[default]
    Primary,
    Danger,
    Warning,
}

/// What a confirmation dialog shows. Every field has a usable default, so
/// triggers only override what they care about; malformed or missing
/// configuration never fails, it falls back.
#[derive(Clone, Debug, PartialEq)]
pub struct ConfirmOptions {
    pub title: String,
    pub message: String,
    pub warning: Option<String>,
    pub confirm_label: String,
    pub confirm_style: ConfirmStyle,
}

impl Default for ConfirmOptions {
    fn default() -> Self {
        Self {
            title: "Confirm Action".to_string(),
            message: "Are you sure?".to_string(),
            warning: None,
            confirm_label: "Confirm".to_string(),
            confirm_style: ConfirmStyle::Primary,
        }
    }
}

impl ConfirmOptions {
    pub fn with_message(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            ..Self::default()
        }
    }
}

/// The action a trigger replays once the user confirms.
#[derive(Clone)]
pub enum ConfirmAction {
    /// Follow the link the confirmation intercepted.
    Navigate(String),
    /// Submit the trigger's owning form.
    Submit(NodeRef<html::Form>),
    /// Run an app-side callback. A bubbling `"confirmed"` CustomEvent is
    /// also dispatched on the trigger element for listeners outside the app.
    Notify(Callback<()>),
}

/// Singleton dialog controller.
///
/// All handles are `Copy`; cloning the controller shares the same dialog.
/// Non-`Send` state (pending callback, DOM element references, the timer
/// handle) lives in thread-local arena slots, which is fine: everything
/// runs on the UI thread.
#[derive(Clone, Copy)]
pub struct ConfirmController {
    open: RwSignal<bool>,
    options: RwSignal<ConfirmOptions>,
    pending: StoredValue<Option<Box<dyn FnOnce(bool)>>, LocalStorage>,
    prior_focus: StoredValue<Option<web_sys::HtmlElement>, LocalStorage>,
    focus_target: StoredValue<Option<web_sys::HtmlElement>, LocalStorage>,
    focus_timer: StoredValue<Option<TimeoutHandle>, LocalStorage>,
    registry: StoredValue<HashMap<String, ConfirmOptions>>,
    announcer: Announcer,
}

impl ConfirmController {
    pub fn new(announcer: Announcer) -> Self {
        Self {
            open: RwSignal::new(false),
            options: RwSignal::new(ConfirmOptions::default()),
            pending: StoredValue::new_local(None),
            prior_focus: StoredValue::new_local(None),
            focus_target: StoredValue::new_local(None),
            focus_timer: StoredValue::new_local(None),
            registry: StoredValue::new(HashMap::new()),
            announcer,
        }
    }

    /// Reactive open flag, for the dialog view.
    pub fn open_signal(&self) -> RwSignal<bool> {
        self.open
    }

    /// Reactive options, for the dialog view.
    pub fn options_signal(&self) -> RwSignal<ConfirmOptions> {
        self.options
    }

    pub fn is_open(&self) -> bool {
        self.open.get_untracked()
    }

    /// The dialog view registers its first focusable control here; the
    /// deferred focus shift targets it.
    pub(crate) fn set_focus_target(&self, el: Option<web_sys::HtmlElement>) {
        self.focus_target.set_value(el);
    }

    /// Opens the dialog and arranges for `on_decision` to be called exactly
    /// once with the user's choice: `true` only if the confirm button is
    /// activated, `false` on every dismissal path.
    pub fn request(&self, options: ConfirmOptions, on_decision: impl FnOnce(bool) + 'static) {
        // A request while open replaces the active one; the displaced
        // callback is settled with `false` first so each cycle still
        // resolves exactly once.
        if self.open.get_untracked() {
            self.settle(false);
        } else {
            // Only recorded on a fresh open: when replacing, the active
            // element is inside the dialog, and the restore point from the
            // first open still stands.
            self.prior_focus.set_value(current_active_element());
        }

        self.pending.set_value(Some(Box::new(on_decision)));

        let message = options.message.clone();
        self.options.set(options);
        self.open.set(true);
        lock_body_scroll(true);
        self.schedule_focus_shift();

        // Assertive: screen-reader users hear the question immediately,
        // bypassing the polite queue used elsewhere.
        self.announcer.announce(message, Urgency::Assertive);
    }

    /// Close with a positive decision.
    pub fn confirm(&self) {
        self.close_with(true);
    }

    /// Close with a negative decision. Safe to call when not open (no-op),
    /// and idempotent: the callback slot is cleared on first close, so a
    /// stray second close cannot invoke it again.
    pub fn dismiss(&self) {
        self.close_with(false);
    }

    fn close_with(&self, decision: bool) {
        if !self.open.get_untracked() {
            return;
        }

        self.clear_focus_timer();
        self.open.set(false);
        lock_body_scroll(false);

        if let Some(el) = self.prior_focus.try_update_value(|p| p.take()).flatten() {
            // The element may have been removed while the dialog was open.
            if el.is_connected() {
                let _ = el.focus();
            }
        }

        self.settle(decision);
    }

    fn settle(&self, decision: bool) {
        if let Some(cb) = self.pending.try_update_value(|p| p.take()).flatten() {
            cb(decision);
        }
    }

    fn schedule_focus_shift(&self) {
        self.clear_focus_timer();

        let ctrl = *self;
        let handle = set_timeout_with_handle(
            move || {
                // The timer can outlive an early close even though we try to
                // cancel it; never focus into a hidden dialog.
                if !ctrl.open.get_untracked() {
                    return;
                }
                if let Some(el) = ctrl.focus_target.get_value() {
                    let _ = el.focus();
                }
            },
            Duration::from_millis(FOCUS_SETTLE_MS),
        );
        if let Ok(handle) = handle {
            self.focus_timer.set_value(Some(handle));
        }
    }

    fn clear_focus_timer(&self) {
        if let Some(handle) = self.focus_timer.try_update_value(|t| t.take()).flatten() {
            handle.clear();
        }
    }

    /// Trigger registry: configuration is recorded once at setup and looked
    /// up by trigger id on activation, instead of being re-derived from DOM
    /// attributes on every click.
    pub fn register_trigger(&self, id: impl Into<String>, options: ConfirmOptions) {
        let id = id.into();
        self.registry.update_value(|r| {
            r.insert(id, options);
        });
    }

    pub fn unregister_trigger(&self, id: &str) {
        self.registry.update_value(|r| {
            r.remove(id);
        });
    }

    pub fn trigger_options(&self, id: &str) -> Option<ConfirmOptions> {
        self.registry.with_value(|r| r.get(id).cloned())
    }

    /// Activation path used by trigger components: look the trigger up,
    /// open the dialog, and replay `action` if the user confirms.
    /// Unregistered ids are silently skipped.
    pub fn activate(
        &self,
        id: &str,
        action: ConfirmAction,
        trigger: Option<web_sys::HtmlElement>,
    ) {
        let Some(options) = self.trigger_options(id) else {
            return;
        };
        self.request(options, move |confirmed| {
            if confirmed {
                replay(action, trigger);
            }
        });
    }
}

fn replay(action: ConfirmAction, trigger: Option<web_sys::HtmlElement>) {
    match action {
        ConfirmAction::Navigate(href) => {
            if let Some(window) = web_sys::window() {
                let _ = window.location().set_href(&href);
            }
        }
        ConfirmAction::Submit(form_ref) => {
            if let Some(form) = form_ref.get_untracked() {
                let _ = form.submit();
            }
        }
        ConfirmAction::Notify(cb) => {
            cb.run(());
            if let Some(el) = trigger {
                dispatch_confirmed(&el);
            }
        }
    }
}

fn dispatch_confirmed(el: &web_sys::HtmlElement) {
    let init = web_sys::CustomEventInit::new();
    init.set_bubbles(true);
    if let Ok(event) = web_sys::CustomEvent::new_with_event_init_dict("confirmed", &init) {
        let _ = el.dispatch_event(&event);
    }
}

fn current_active_element() -> Option<web_sys::HtmlElement> {
    web_sys::window()?
        .document()?
        .active_element()?
        .dyn_into::<web_sys::HtmlElement>()
        .ok()
}

fn lock_body_scroll(lock: bool) {
    if let Some(body) = web_sys::window().and_then(|w| w.document()).and_then(|d| d.body()) {
        let style = body.style();
        if lock {
            let _ = style.set_property("overflow", "hidden");
        } else {
            let _ = style.remove_property("overflow");
        }
    }
}
