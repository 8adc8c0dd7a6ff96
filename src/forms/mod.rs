//! Date-range validation for filter/booking forms.
//!
//! Validation is deliberately forgiving: empty fields are vacuously valid,
//! and input that does not parse as `YYYY-MM-DD` compares indeterminate and
//! is let through rather than blocking the form. Only a parseable range with
//! end before start is rejected.

use crate::a11y::{Announcer, Urgency};
use leptos::prelude::*;
use leptos_dom::helpers::{set_timeout_with_handle, TimeoutHandle};
use std::time::Duration;

pub(crate) const DATE_ORDER_ERROR: &str = "End date must be on or after start date";

fn parse_ymd(s: &str) -> Option<(i32, u32, u32)> {
    let mut parts = s.trim().splitn(3, '-');
    let y: i32 = parts.next()?.parse().ok()?;
    let m: u32 = parts.next()?.parse().ok()?;
    let d: u32 = parts.next()?.parse().ok()?;
    if !(1..=12).contains(&m) || !(1..=31).contains(&d) {
        return None;
    }
    Some((y, m, d))
}

/// True unless both fields parse and the end date precedes the start date.
pub fn date_range_valid(start: &str, end: &str) -> bool {
    if start.trim().is_empty() || end.trim().is_empty() {
        return true;
    }
    match (parse_ymd(start), parse_ymd(end)) {
        (Some(s), Some(e)) => e >= s,
        // Unparseable input is indeterminate; kept permissive.
        _ => true,
    }
}

/// Signal bundle for a start/end date pair.
///
/// One error slot means re-validation can never stack duplicate error
/// annotations: the inline message either exists once or not at all.
#[derive(Clone, Copy)]
pub struct DateRangeState {
    pub start: RwSignal<String>,
    pub end: RwSignal<String>,
    error: RwSignal<Option<&'static str>>,
}

impl DateRangeState {
    pub fn new() -> Self {
        Self {
            start: RwSignal::new(String::new()),
            end: RwSignal::new(String::new()),
            error: RwSignal::new(None),
        }
    }

    pub fn error_signal(&self) -> RwSignal<Option<&'static str>> {
        self.error
    }

    /// Live re-validation on field change.
    pub fn revalidate(&self) -> bool {
        let ok = date_range_valid(&self.start.get_untracked(), &self.end.get_untracked());
        self.error.set(if ok { None } else { Some(DATE_ORDER_ERROR) });
        ok
    }

    /// Submit-time gate: on failure the error annotation is (re)set and the
    /// message is announced assertively; the caller suppresses the submit.
    pub fn validate_for_submit(&self, announcer: &Announcer) -> bool {
        let ok = self.revalidate();
        if !ok {
            announcer.announce(DATE_ORDER_ERROR, Urgency::Assertive);
        }
        ok
    }
}

impl Default for DateRangeState {
    fn default() -> Self {
        Self::new()
    }
}

/// Loading-state window for a form submission.
///
/// The completion tick owns a cancellable timer handle, like the confirm
/// and toast timers; cancelling on page teardown keeps a late tick from
/// firing into a disposed scope.
#[derive(Clone, Copy)]
pub struct PendingSubmit {
    pending: RwSignal<bool>,
    timer: StoredValue<Option<TimeoutHandle>, LocalStorage>,
}

impl PendingSubmit {
    pub fn new() -> Self {
        Self {
            pending: RwSignal::new(false),
            timer: StoredValue::new_local(None),
        }
    }

    pub fn pending_signal(&self) -> RwSignal<bool> {
        self.pending
    }

    /// Marks the form pending and runs `on_done` once `delay` elapses,
    /// unless cancelled first. A new `begin` supersedes an in-flight one.
    pub fn begin(&self, delay: Duration, on_done: impl FnOnce() + 'static) {
        self.cancel();
        self.pending.set(true);

        let this = *self;
        let handle = set_timeout_with_handle(
            move || {
                this.timer.set_value(None);
                this.pending.set(false);
                on_done();
            },
            delay,
        );
        if let Ok(handle) = handle {
            self.timer.set_value(Some(handle));
        }
    }

    /// Clears the timer and the pending flag. Safe to call from
    /// `on_cleanup`, where the owning scope is already being disposed.
    pub fn cancel(&self) {
        if let Some(handle) = self.timer.try_update_value(|t| t.take()).flatten() {
            handle.clear();
        }
        self.pending.try_set(false);
    }
}

impl Default for PendingSubmit {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_fields_are_vacuously_valid() {
        assert!(date_range_valid("", ""));
        assert!(date_range_valid("2024-01-10", ""));
        assert!(date_range_valid("", "2024-01-05"));
        assert!(date_range_valid("   ", "2024-01-05"));
    }

    #[test]
    fn ordered_ranges_are_valid() {
        assert!(date_range_valid("2024-01-10", "2024-01-10"));
        assert!(date_range_valid("2024-01-10", "2024-01-11"));
        assert!(date_range_valid("2023-12-31", "2024-01-01"));
    }

    #[test]
    fn reversed_range_is_invalid() {
        assert!(!date_range_valid("2024-01-10", "2024-01-05"));
        assert!(!date_range_valid("2024-02-01", "2024-01-31"));
    }

    #[test]
    fn unparseable_input_passes() {
        // Indeterminate comparisons do not block the form.
        assert!(date_range_valid("not-a-date", "2024-01-05"));
        assert!(date_range_valid("2024-01-10", "soon"));
        assert!(date_range_valid("2024-13-40", "2024-01-05"));
    }

    #[test]
    fn revalidate_sets_and_clears_a_single_error() {
        let range = DateRangeState::new();
        range.start.set("2024-01-10".to_string());
        range.end.set("2024-01-05".to_string());

        assert!(!range.revalidate());
        assert_eq!(range.error_signal().get_untracked(), Some(DATE_ORDER_ERROR));

        // Repeated invalid validation does not change the (single) error slot.
        assert!(!range.revalidate());
        assert_eq!(range.error_signal().get_untracked(), Some(DATE_ORDER_ERROR));

        range.end.set("2024-01-12".to_string());
        assert!(range.revalidate());
        assert_eq!(range.error_signal().get_untracked(), None);
    }

    #[test]
    fn submit_validation_announces_assertively() {
        let announcer = Announcer::new();
        let range = DateRangeState::new();
        range.start.set("2024-01-10".to_string());
        range.end.set("2024-01-05".to_string());

        assert!(!range.validate_for_submit(&announcer));
        assert_eq!(
            announcer.assertive_text().get_untracked(),
            DATE_ORDER_ERROR
        );

        range.end.set("2024-01-10".to_string());
        assert!(range.validate_for_submit(&announcer));
    }
}
