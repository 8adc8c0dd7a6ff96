use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString};

/// Color scheme applied to the document root.
///
/// Persisted inside [`UiPrefs`]; the serialized form is lowercase so the
/// stored JSON stays readable.
#[derive(
    Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq, AsRefStr, Display, EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

/// UI preferences persisted to localStorage as one JSON document.
///
/// Unknown fields are ignored on load so older documents keep working when
/// fields are added.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct UiPrefs {
    #[serde(default)]
    pub theme: Theme,
    #[serde(default)]
    pub sidebar_collapsed: bool,
}

/// A bookable record shown on the Records page.
///
/// The real application renders these server-side; the demo pages seed a
/// handful in memory so every affordance can be exercised end to end.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Record {
    pub id: u32,
    pub name: String,
    /// ISO `YYYY-MM-DD`; lexicographic order matches chronological order.
    pub starts_on: String,
    pub ends_on: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn theme_toggles_between_light_and_dark() {
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::Dark.toggled(), Theme::Light);
    }

    #[test]
    fn theme_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Theme::Dark).unwrap(), "\"dark\"");
        assert_eq!(Theme::Dark.as_ref(), "dark");
    }

    #[test]
    fn prefs_load_with_missing_fields() {
        let prefs: UiPrefs = serde_json::from_str("{}").expect("empty prefs should parse");
        assert_eq!(prefs.theme, Theme::Light);
        assert!(!prefs.sidebar_collapsed);
    }

    #[test]
    fn prefs_roundtrip() {
        let prefs = UiPrefs {
            theme: Theme::Dark,
            sidebar_collapsed: true,
        };
        let json = serde_json::to_string(&prefs).unwrap();
        let back: UiPrefs = serde_json::from_str(&json).unwrap();
        assert_eq!(back, prefs);
    }
}
