use leptos::context::Provider;
use leptos::ev;
use leptos::html;
use leptos::prelude::*;
use leptos_dom::helpers::window_event_listener;
use leptos_ui::clx;
use tw_merge::*;
use wasm_bindgen::JsCast;

use crate::components::hooks::use_random::use_random_id_for;
use crate::components::ui::button::{Button, ButtonSize, ButtonVariant};

mod components {
    use super::*;
    clx! {DropdownMenuLabel, span, "px-2 py-1.5 text-sm font-medium"}
    clx! {DropdownMenuItem, li, "inline-flex gap-2 items-center w-full rounded-sm px-2 py-1.5 text-sm cursor-pointer transition-colors duration-200 text-popover-foreground hover:bg-accent hover:text-accent-foreground [&_svg:not([class*='size-'])]:size-4"}
}

pub use components::*;

#[derive(Clone)]
struct DropdownContext {
    open: RwSignal<bool>,
    menu_id: String,
}

/// Menu visibility is one signal that follows the latest event: trigger
/// click toggles, content click / outside click / Escape close.
#[component]
pub fn DropdownMenu(children: Children, #[prop(optional, into)] class: String) -> impl IntoView {
    let open = RwSignal::new(false);
    let menu_id = use_random_id_for("dropdown");
    let root_ref: NodeRef<html::Div> = NodeRef::new();

    let ctx = DropdownContext {
        open,
        menu_id: menu_id.clone(),
    };

    let click_handle = window_event_listener(ev::click, move |ev: web_sys::MouseEvent| {
        if !open.get_untracked() {
            return;
        }
        let inside = root_ref
            .get_untracked()
            .zip(ev.target().and_then(|t| t.dyn_into::<web_sys::Node>().ok()))
            .map(|(root, node)| root.contains(Some(&node)))
            .unwrap_or(false);
        if !inside {
            open.set(false);
        }
    });
    on_cleanup(move || click_handle.remove());

    let key_handle = window_event_listener(ev::keydown, move |ev: web_sys::KeyboardEvent| {
        if ev.key() == "Escape" && open.get_untracked() {
            open.set(false);
        }
    });
    on_cleanup(move || key_handle.remove());

    let merged_class = tw_merge!("relative w-fit", class);

    view! {
        <Provider value=ctx>
            <div class=merged_class data-name="DropdownMenu" node_ref=root_ref>
                {children()}
            </div>
        </Provider>
    }
}

#[component]
pub fn DropdownMenuTrigger(
    children: Children,
    #[prop(optional, into)] class: String,
    #[prop(default = ButtonVariant::Outline)] variant: ButtonVariant,
    #[prop(default = ButtonSize::Default)] size: ButtonSize,
) -> impl IntoView {
    let ctx = expect_context::<DropdownContext>();
    let open = ctx.open;

    let on_click = move |ev: web_sys::MouseEvent| {
        // Keep the outside-click listener from immediately re-closing.
        ev.stop_propagation();
        open.update(|v| *v = !*v);
    };

    view! {
        <Button
            class=class
            variant=variant
            size=size
            attr:aria-haspopup="menu"
            attr:aria-expanded=move || open.get().to_string()
            attr:aria-controls=ctx.menu_id.clone()
            on:click=on_click
        >
            {children()}
        </Button>
    }
}

#[component]
pub fn DropdownMenuContent(
    children: Children,
    #[prop(optional, into)] class: String,
) -> impl IntoView {
    let ctx = expect_context::<DropdownContext>();
    let open = ctx.open;

    let merged_class = tw_merge!(
        "absolute right-0 top-full z-50 mt-1 min-w-[160px] rounded-md border bg-card p-1 shadow-lg transition-all duration-200 ease-out",
        "pointer-events-none invisible opacity-0 data-[state=open]:pointer-events-auto data-[state=open]:visible data-[state=open]:opacity-100",
        class
    );

    view! {
        <ul
            id=ctx.menu_id.clone()
            role="menu"
            class=merged_class
            data-state=move || if open.get() { "open" } else { "closed" }
            on:click=move |_| open.set(false)
        >
            {children()}
        </ul>
    }
}
