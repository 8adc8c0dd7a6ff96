mod a11y;
mod app;
mod components;
mod confirm;
mod forms;
mod js_api;
mod models;
mod pages;
mod state;
mod storage;
mod toast;

pub use a11y::{Announcer, LiveRegions, Urgency};
pub use app::App;
pub use confirm::{ConfirmAction, ConfirmController, ConfirmOptions, ConfirmStyle};
pub use forms::{date_range_valid, DateRangeState, PendingSubmit};
pub use js_api::{close_confirm_modal, show_confirm_modal, validate_date_range};
pub use models::{Record, Theme, UiPrefs};
pub use toast::{Toast, ToastController, ToastLevel};

use leptos::prelude::mount_to_body;

// Needed for `#[wasm_bindgen(start)]` on the wasm entrypoint.
#[cfg(all(target_arch = "wasm32", not(test)))]
use wasm_bindgen::prelude::wasm_bindgen;

// Only register the WASM start function for normal builds (not for tests),
// otherwise wasm-bindgen-test will end up with multiple entry symbols.
#[cfg_attr(all(target_arch = "wasm32", not(test)), wasm_bindgen(start))]
pub fn main() {
    console_error_panic_hook::set_once();
    mount_to_body(App);
}

// WASM-only tests (run with `cargo test --target wasm32-unknown-unknown` + wasm-bindgen-test-runner)
#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use crate::models::{Theme, UiPrefs};
    use crate::storage::{clear_prefs, load_prefs, save_prefs};
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;
    use std::time::Duration;
    use wasm_bindgen::JsCast;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn decisions() -> (Rc<RefCell<Vec<bool>>>, impl FnOnce(bool) + 'static) {
        let log: Rc<RefCell<Vec<bool>>> = Rc::new(RefCell::new(Vec::new()));
        let sink = log.clone();
        (log, move |decision| sink.borrow_mut().push(decision))
    }

    fn document() -> web_sys::Document {
        web_sys::window().and_then(|w| w.document()).expect("document")
    }

    fn mounted_button(id: &str) -> web_sys::HtmlElement {
        let doc = document();
        let el: web_sys::HtmlElement = doc
            .create_element("button")
            .expect("create button")
            .dyn_into()
            .expect("button element");
        el.set_id(id);
        doc.body()
            .expect("body")
            .append_child(&el)
            .expect("append button");
        el
    }

    fn active_element_id() -> String {
        document()
            .active_element()
            .map(|el| el.id())
            .unwrap_or_default()
    }

    async fn sleep(ms: i32) {
        let promise = js_sys::Promise::new(&mut |resolve, _| {
            let _ = web_sys::window()
                .expect("window")
                .set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, ms);
        });
        let _ = wasm_bindgen_futures::JsFuture::from(promise).await;
    }

    fn body_overflow() -> String {
        web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.body())
            .map(|b| b.style().get_property_value("overflow").unwrap_or_default())
            .unwrap_or_default()
    }

    #[wasm_bindgen_test]
    fn test_confirm_invokes_callback_true_and_unlocks_scroll() {
        let ctrl = ConfirmController::new(Announcer::new());
        let (log, cb) = decisions();

        ctrl.request(ConfirmOptions::with_message("Delete this record?"), cb);
        assert!(ctrl.is_open());
        assert_eq!(body_overflow(), "hidden");

        ctrl.confirm();
        assert!(!ctrl.is_open());
        assert_eq!(body_overflow(), "");
        assert_eq!(*log.borrow(), vec![true]);
    }

    #[wasm_bindgen_test]
    fn test_dismiss_invokes_callback_false_exactly_once() {
        let ctrl = ConfirmController::new(Announcer::new());
        let (log, cb) = decisions();

        ctrl.request(ConfirmOptions::default(), cb);
        ctrl.dismiss();
        // A stray second close must not re-invoke the callback.
        ctrl.dismiss();

        assert_eq!(*log.borrow(), vec![false]);
        assert_eq!(body_overflow(), "");
    }

    #[wasm_bindgen_test]
    fn test_dismiss_when_closed_is_a_noop() {
        let ctrl = ConfirmController::new(Announcer::new());
        ctrl.dismiss();
        assert!(!ctrl.is_open());
    }

    #[wasm_bindgen_test]
    fn test_request_while_open_settles_previous_callback_first() {
        let ctrl = ConfirmController::new(Announcer::new());
        let (first_log, first_cb) = decisions();
        let (second_log, second_cb) = decisions();

        ctrl.request(ConfirmOptions::with_message("first"), first_cb);
        ctrl.request(ConfirmOptions::with_message("second"), second_cb);

        // The displaced request resolved negatively before the new one began.
        assert_eq!(*first_log.borrow(), vec![false]);
        assert!(second_log.borrow().is_empty());

        ctrl.confirm();
        assert_eq!(*first_log.borrow(), vec![false]);
        assert_eq!(*second_log.borrow(), vec![true]);
    }

    #[wasm_bindgen_test]
    fn test_request_announces_message_assertively() {
        let announcer = Announcer::new();
        let ctrl = ConfirmController::new(announcer);
        let (_log, cb) = decisions();

        ctrl.request(ConfirmOptions::with_message("Delete this record?"), cb);
        assert_eq!(
            announcer.assertive_text().get_untracked(),
            "Delete this record?"
        );
        ctrl.dismiss();
    }

    #[wasm_bindgen_test]
    fn test_activate_skips_unregistered_triggers() {
        let ctrl = ConfirmController::new(Announcer::new());
        ctrl.activate("missing", ConfirmAction::Navigate("/gone".to_string()), None);
        assert!(!ctrl.is_open());
    }

    #[wasm_bindgen_test]
    async fn test_focus_timer_is_inert_after_early_close() {
        let target = mounted_button("settle_probe_closed");
        let ctrl = ConfirmController::new(Announcer::new());
        ctrl.set_focus_target(Some(target.clone()));

        let (_log, cb) = decisions();
        ctrl.request(ConfirmOptions::default(), cb);
        ctrl.dismiss();

        // Even if the timer fires, a closed dialog must not take focus.
        sleep(crate::confirm::FOCUS_SETTLE_MS as i32 + 50).await;
        assert_ne!(active_element_id(), "settle_probe_closed");
        target.remove();
    }

    #[wasm_bindgen_test]
    async fn test_focus_settles_into_dialog_when_still_open() {
        let target = mounted_button("settle_probe_open");
        let ctrl = ConfirmController::new(Announcer::new());
        ctrl.set_focus_target(Some(target.clone()));

        let (_log, cb) = decisions();
        ctrl.request(ConfirmOptions::default(), cb);

        sleep(crate::confirm::FOCUS_SETTLE_MS as i32 + 50).await;
        assert_eq!(active_element_id(), "settle_probe_open");

        ctrl.dismiss();
        target.remove();
    }

    #[wasm_bindgen_test]
    fn test_replacing_request_restores_focus_from_before_first_open() {
        let outside = mounted_button("replace_outside");
        let inside = mounted_button("replace_inside");
        let _ = outside.focus();

        let ctrl = ConfirmController::new(Announcer::new());
        let (_first_log, first_cb) = decisions();
        ctrl.request(ConfirmOptions::with_message("first"), first_cb);

        // By the time a second request lands, focus sits inside the dialog;
        // it must not become the restore point.
        let _ = inside.focus();
        let (_second_log, second_cb) = decisions();
        ctrl.request(ConfirmOptions::with_message("second"), second_cb);

        ctrl.confirm();
        assert_eq!(active_element_id(), "replace_outside");

        outside.remove();
        inside.remove();
    }

    #[wasm_bindgen_test]
    async fn test_cancelled_pending_submit_never_completes() {
        let submit = PendingSubmit::new();
        let done = Rc::new(Cell::new(false));
        let flag = done.clone();
        submit.begin(Duration::from_millis(30), move || flag.set(true));
        assert!(submit.pending_signal().get_untracked());

        submit.cancel();
        assert!(!submit.pending_signal().get_untracked());

        // The cleared timer's tick must never arrive.
        sleep(80).await;
        assert!(!done.get());
    }

    #[wasm_bindgen_test]
    async fn test_pending_submit_completes_after_delay() {
        let submit = PendingSubmit::new();
        let done = Rc::new(Cell::new(false));
        let flag = done.clone();
        submit.begin(Duration::from_millis(20), move || flag.set(true));
        assert!(submit.pending_signal().get_untracked());

        sleep(60).await;
        assert!(done.get());
        assert!(!submit.pending_signal().get_untracked());
    }

    #[wasm_bindgen_test]
    fn test_confirmed_submit_with_unmounted_form_is_harmless() {
        use leptos::html;
        use leptos::prelude::NodeRef;

        let ctrl = ConfirmController::new(Announcer::new());
        ctrl.register_trigger("save", ConfirmOptions::with_message("Submit changes?"));

        // A form ref that never got mounted; the replay must be a no-op
        // rather than a crash.
        let form: NodeRef<html::Form> = NodeRef::new();
        ctrl.activate("save", ConfirmAction::Submit(form), None);
        assert!(ctrl.is_open());

        ctrl.confirm();
        assert!(!ctrl.is_open());
    }

    #[wasm_bindgen_test]
    fn test_options_from_js_reads_recognized_fields() {
        let obj = js_sys::Object::new();
        let set = |k: &str, v: &str| {
            let _ = js_sys::Reflect::set(
                &obj,
                &wasm_bindgen::JsValue::from_str(k),
                &wasm_bindgen::JsValue::from_str(v),
            );
        };
        set("message", "Delete this record?");
        set("confirmLabel", "Delete");
        set("confirmStyle", "danger");

        let opts = crate::js_api::options_from_js(&obj.into());
        assert_eq!(opts.message, "Delete this record?");
        assert_eq!(opts.confirm_label, "Delete");
        assert_eq!(opts.confirm_style, ConfirmStyle::Danger);
        // Unset fields keep their defaults.
        assert_eq!(opts.title, "Confirm Action");
        assert!(opts.warning.is_none());
    }

    #[wasm_bindgen_test]
    fn test_options_from_js_tolerates_non_objects() {
        let opts = crate::js_api::options_from_js(&wasm_bindgen::JsValue::NULL);
        assert_eq!(opts, ConfirmOptions::default());
    }

    #[wasm_bindgen_test]
    fn test_prefs_storage_roundtrip() {
        clear_prefs();
        assert_eq!(load_prefs(), UiPrefs::default());

        let prefs = UiPrefs {
            theme: Theme::Dark,
            sidebar_collapsed: true,
        };
        save_prefs(&prefs);
        assert_eq!(load_prefs(), prefs);

        clear_prefs();
        assert_eq!(load_prefs(), UiPrefs::default());
    }

    #[wasm_bindgen_test]
    fn test_toast_manual_dismiss_removes_and_cancels() {
        let toasts = ToastController::new();
        let id = toasts.push(ToastLevel::Success, "Date filter applied");
        assert_eq!(toasts.toasts_signal().get_untracked().len(), 1);

        toasts.dismiss(id);
        assert!(toasts.toasts_signal().get_untracked().is_empty());

        // Dismissing again (as a late auto-dismiss tick would) is harmless.
        toasts.dismiss(id);
        assert!(toasts.toasts_signal().get_untracked().is_empty());
    }
}
