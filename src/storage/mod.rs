use crate::models::UiPrefs;
use serde::{Deserialize, Serialize};

pub(crate) const UI_PREFS_KEY: &str = "atrium_ui_prefs";

pub(crate) fn load_json_from_storage<T: for<'de> Deserialize<'de>>(key: &str) -> Option<T> {
    let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten())?;
    let json = storage.get_item(key).ok().flatten()?;
    serde_json::from_str(&json).ok()
}

pub(crate) fn save_json_to_storage<T: Serialize>(key: &str, value: &T) {
    if let Ok(json) = serde_json::to_string(value) {
        if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
            let _ = storage.set_item(key, &json);
        }
    }
}

/// Falls back to defaults when storage is unavailable or the stored
/// document does not parse (e.g. written by an older build).
pub(crate) fn load_prefs() -> UiPrefs {
    load_json_from_storage(UI_PREFS_KEY).unwrap_or_default()
}

pub(crate) fn save_prefs(prefs: &UiPrefs) {
    save_json_to_storage(UI_PREFS_KEY, prefs);
}

pub(crate) fn clear_prefs() {
    if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
        let _ = storage.remove_item(UI_PREFS_KEY);
    }
}
