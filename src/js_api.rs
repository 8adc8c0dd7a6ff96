//! Page-level API for scripts outside the app.
//!
//! The server-rendered pages hosting this bundle carry inline scripts that
//! still need the confirmation workflow; these exports give them the same
//! controller the components use. The controller itself stays owned by
//! `App`; this module only holds a handle registered at mount.

use crate::confirm::{ConfirmController, ConfirmOptions};
use std::cell::RefCell;
use wasm_bindgen::prelude::*;

thread_local! {
    static CONTROLLER: RefCell<Option<ConfirmController>> = const { RefCell::new(None) };
}

pub(crate) fn register_controller(ctrl: ConfirmController) {
    CONTROLLER.with(|slot| *slot.borrow_mut() = Some(ctrl));
}

fn with_controller(f: impl FnOnce(ConfirmController)) {
    if let Some(ctrl) = CONTROLLER.with(|slot| *slot.borrow()) {
        f(ctrl);
    }
}

/// Reads recognized fields from a plain options object; anything missing or
/// malformed falls back to the defaults, nothing throws.
pub(crate) fn options_from_js(options: &JsValue) -> ConfirmOptions {
    let mut opts = ConfirmOptions::default();
    if !options.is_object() {
        return opts;
    }

    let get = |key: &str| {
        js_sys::Reflect::get(options, &key.into())
            .ok()
            .and_then(|v| v.as_string())
    };

    if let Some(v) = get("title") {
        opts.title = v;
    }
    if let Some(v) = get("message") {
        opts.message = v;
    }
    opts.warning = get("warning");
    if let Some(v) = get("confirmLabel") {
        opts.confirm_label = v;
    }
    if let Some(v) = get("confirmStyle") {
        opts.confirm_style = v.parse().unwrap_or_default();
    }
    opts
}

#[wasm_bindgen(js_name = showConfirmModal)]
pub fn show_confirm_modal(options: JsValue, callback: js_sys::Function) {
    with_controller(move |ctrl| {
        ctrl.request(options_from_js(&options), move |confirmed| {
            let _ = callback.call1(&JsValue::NULL, &JsValue::from_bool(confirmed));
        });
    });
}

#[wasm_bindgen(js_name = closeConfirmModal)]
pub fn close_confirm_modal() {
    with_controller(|ctrl| ctrl.dismiss());
}

#[wasm_bindgen(js_name = validateDateRange)]
pub fn validate_date_range(start: String, end: String) -> bool {
    crate::forms::date_range_valid(&start, &end)
}
