use crate::models::{Record, Theme, UiPrefs};
use crate::storage::{load_prefs, save_prefs};
use leptos::prelude::*;

#[derive(Clone, Copy)]
pub(crate) struct AppState {
    pub theme: RwSignal<Theme>,
    pub sidebar_collapsed: RwSignal<bool>,

    /// Seeded in memory; the server owns the real data.
    pub records: RwSignal<Vec<Record>>,
}

impl AppState {
    pub fn new() -> Self {
        let prefs = load_prefs();
        Self {
            theme: RwSignal::new(prefs.theme),
            sidebar_collapsed: RwSignal::new(prefs.sidebar_collapsed),
            records: RwSignal::new(seed_records()),
        }
    }

    pub fn toggle_theme(&self) {
        self.theme.update(|t| *t = t.toggled());
        self.persist();
    }

    pub fn toggle_sidebar(&self) {
        self.sidebar_collapsed.update(|v| *v = !*v);
        self.persist();
    }

    fn persist(&self) {
        save_prefs(&UiPrefs {
            theme: self.theme.get_untracked(),
            sidebar_collapsed: self.sidebar_collapsed.get_untracked(),
        });
    }
}

#[derive(Clone, Copy)]
pub(crate) struct AppContext(pub AppState);

fn seed_records() -> Vec<Record> {
    let mk = |id: u32, name: &str, starts_on: &str, ends_on: &str| Record {
        id,
        name: name.to_string(),
        starts_on: starts_on.to_string(),
        ends_on: ends_on.to_string(),
    };
    vec![
        mk(1, "Workshop: intro session", "2024-01-08", "2024-01-09"),
        mk(2, "Equipment loan #3114", "2024-01-10", "2024-01-17"),
        mk(3, "Room booking: atrium east", "2024-02-02", "2024-02-02"),
        mk(4, "Maintenance window", "2024-02-12", "2024-02-14"),
        mk(5, "Equipment loan #3127", "2024-03-01", "2024-03-08"),
    ]
}

/// Applies the theme to the document root so Tailwind's `dark:` variants
/// take effect.
pub(crate) fn apply_theme_class(theme: Theme) {
    if let Some(html) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
    {
        let _ = match theme {
            Theme::Dark => html.class_list().add_1("dark"),
            Theme::Light => html.class_list().remove_1("dark"),
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_records_are_well_formed() {
        let records = seed_records();
        assert!(!records.is_empty());
        for r in &records {
            // Seeds must satisfy the validation the filter form enforces.
            assert!(crate::forms::date_range_valid(&r.starts_on, &r.ends_on));
        }
    }
}
