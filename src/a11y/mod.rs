use leptos::prelude::*;
use strum::AsRefStr;

/// Queueing behavior for a live-region announcement.
///
/// Polite waits for the screen reader to finish what it is saying;
/// assertive interrupts it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, AsRefStr)]
#[strum(serialize_all = "lowercase")]
pub enum Urgency {
    Polite,
    Assertive,
}

/// Handle for pushing short status strings to assistive technology.
///
/// Backed by two always-mounted `aria-live` regions (see [`LiveRegions`]);
/// the ARIA live-region semantics carry the polite-queues / assertive-interrupts
/// contract, so `announce` only has to route the text to the right region.
#[derive(Clone, Copy)]
pub struct Announcer {
    polite: RwSignal<String>,
    assertive: RwSignal<String>,
}

impl Announcer {
    pub fn new() -> Self {
        Self {
            polite: RwSignal::new(String::new()),
            assertive: RwSignal::new(String::new()),
        }
    }

    pub fn announce(&self, text: impl Into<String>, urgency: Urgency) {
        let text = text.into();
        match urgency {
            Urgency::Polite => self.polite.set(text),
            Urgency::Assertive => self.assertive.set(text),
        }
    }

    pub(crate) fn polite_text(&self) -> RwSignal<String> {
        self.polite
    }

    pub(crate) fn assertive_text(&self) -> RwSignal<String> {
        self.assertive
    }
}

impl Default for Announcer {
    fn default() -> Self {
        Self::new()
    }
}

/// The two visually-hidden live regions the [`Announcer`] writes into.
/// Must be mounted once, near the document root, before anything announces.
#[component]
pub fn LiveRegions() -> impl IntoView {
    let announcer = expect_context::<Announcer>();
    let polite = announcer.polite_text();
    let assertive = announcer.assertive_text();

    view! {
        <div class="sr-only" aria-live="polite" role="status">
            {move || polite.get()}
        </div>
        <div class="sr-only" aria-live="assertive" role="alert">
            {move || assertive.get()}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn urgency_renders_aria_live_values() {
        assert_eq!(Urgency::Polite.as_ref(), "polite");
        assert_eq!(Urgency::Assertive.as_ref(), "assertive");
    }

    #[test]
    fn announce_routes_by_urgency() {
        let a = Announcer::new();
        a.announce("saved", Urgency::Polite);
        a.announce("end date invalid", Urgency::Assertive);

        assert_eq!(a.polite_text().get_untracked(), "saved");
        assert_eq!(a.assertive_text().get_untracked(), "end date invalid");

        // A later assertive announcement replaces (interrupts) the previous one.
        a.announce("record deleted", Urgency::Assertive);
        assert_eq!(a.assertive_text().get_untracked(), "record deleted");
        assert_eq!(a.polite_text().get_untracked(), "saved");
    }
}
