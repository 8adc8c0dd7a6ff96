use leptos::prelude::*;
use leptos_dom::helpers::request_animation_frame;
use tw_merge::tw_merge;

/// Fades its content in on mount. The `data-state` flip is deferred one
/// animation frame so the transition actually runs.
#[component]
pub fn FadeIn(children: Children, #[prop(optional, into)] class: String) -> impl IntoView {
    let shown = RwSignal::new(false);

    Effect::new(move |_| {
        request_animation_frame(move || shown.set(true));
    });

    let merged_class = tw_merge!(
        "transition-opacity duration-300 opacity-0 data-[state=open]:opacity-100",
        class
    );

    view! {
        <div
            data-name="FadeIn"
            class=merged_class
            data-state=move || if shown.get() { "open" } else { "closed" }
        >
            {children()}
        </div>
    }
}
