#![allow(dead_code)]

use icons::X;
use leptos::ev;
use leptos::html;
use leptos::prelude::*;
use leptos_dom::helpers::window_event_listener;
use leptos_ui::clx;
use tw_merge::*;
use wasm_bindgen::JsCast;

use crate::components::hooks::use_random::use_random_id_for;
use crate::components::ui::alert::{Alert, AlertDescription};
use crate::components::ui::button::{Button, ButtonSize, ButtonVariant};
use crate::confirm::{ConfirmAction, ConfirmController, ConfirmOptions, ConfirmStyle};

mod components {
    use super::*;
    clx! {DialogHeader, div, "flex flex-col gap-2 text-center sm:text-left"}
    clx! {DialogTitle, h3, "text-lg leading-none font-semibold"}
    clx! {DialogDescription, p, "text-muted-foreground text-sm"}
    clx! {DialogFooter, footer, "flex flex-col-reverse gap-2 sm:flex-row sm:justify-end"}
}

pub use components::*;

fn confirm_variant(style: ConfirmStyle) -> ButtonVariant {
    match style {
        ConfirmStyle::Primary => ButtonVariant::Default,
        ConfirmStyle::Danger => ButtonVariant::Destructive,
        ConfirmStyle::Warning => ButtonVariant::Warning,
    }
}

/// The one dialog instance the [`ConfirmController`] drives.
///
/// Mounted once near the document root and kept in the tree; visibility is
/// toggled through `data-state` so the open/close transition can run.
#[component]
pub fn ConfirmDialogHost() -> impl IntoView {
    let ctrl = expect_context::<ConfirmController>();
    let open = ctrl.open_signal();
    let options = ctrl.options_signal();

    let title_id = use_random_id_for("confirm_title");
    let message_id = use_random_id_for("confirm_message");

    let state_attr = move || if open.get() { "open" } else { "closed" };

    // The close button is the dialog's first focusable control; the
    // controller's deferred focus shift lands on it.
    let close_ref: NodeRef<html::Button> = NodeRef::new();
    Effect::new(move |_| {
        ctrl.set_focus_target(close_ref.get().map(web_sys::HtmlElement::from));
    });

    let key_handle = window_event_listener(ev::keydown, move |ev: web_sys::KeyboardEvent| {
        if ev.key() == "Escape" && ctrl.is_open() {
            ev.prevent_default();
            ctrl.dismiss();
        }
    });
    on_cleanup(move || key_handle.remove());

    let content_class = tw_merge!(
        "fixed top-[50%] left-[50%] z-100 w-full max-w-md translate-x-[-50%] translate-y-[-50%] rounded-2xl border bg-background p-6 shadow-lg transition-all duration-200",
        "pointer-events-none opacity-0 scale-95 data-[state=open]:pointer-events-auto data-[state=open]:opacity-100 data-[state=open]:scale-100"
    );

    let title_id_inner = title_id.clone();
    let message_id_inner = message_id.clone();

    view! {
        <div
            data-name="ConfirmBackdrop"
            class="fixed inset-0 z-60 bg-black/50 transition-opacity duration-200 pointer-events-none opacity-0 data-[state=open]:pointer-events-auto data-[state=open]:opacity-100"
            data-state=state_attr
            on:click=move |_| ctrl.dismiss()
        />

        <div
            data-name="ConfirmContent"
            class=content_class
            data-state=state_attr
            role="alertdialog"
            aria-modal="true"
            aria-labelledby=title_id.clone()
            aria-describedby=message_id.clone()
        >
            <button
                type="button"
                class="absolute top-4 right-4 rounded-sm p-1 focus:ring-2 focus:ring-offset-2 focus:ring-ring focus:outline-none [&_svg:not([class*='size-'])]:size-4"
                aria-label="Close dialog"
                node_ref=close_ref
                on:click=move |_| ctrl.dismiss()
            >
                <X />
            </button>

            {move || {
                let opts = options.get();
                let variant = confirm_variant(opts.confirm_style);
                let title_id = title_id_inner.clone();
                let message_id = message_id_inner.clone();
                view! {
                    <div class="flex flex-col gap-4">
                        <DialogHeader>
                            <DialogTitle attr:id=title_id>{opts.title}</DialogTitle>
                            <DialogDescription attr:id=message_id>
                                {opts.message}
                            </DialogDescription>
                        </DialogHeader>

                        {opts.warning.map(|warning| view! {
                            <Alert class="border-warning/40 bg-warning/10">
                                <AlertDescription class="text-warning-foreground">
                                    {warning}
                                </AlertDescription>
                            </Alert>
                        })}

                        <DialogFooter>
                            <Button
                                variant=ButtonVariant::Outline
                                size=ButtonSize::Default
                                on:click=move |_| ctrl.dismiss()
                            >
                                "Cancel"
                            </Button>
                            <Button
                                variant=variant
                                size=ButtonSize::Default
                                on:click=move |_| ctrl.confirm()
                            >
                                {opts.confirm_label}
                            </Button>
                        </DialogFooter>
                    </div>
                }
            }}
        </div>
    }
}

// Empty strings mean "no override"; the built-in defaults apply.
fn merge_trigger_options(
    message: String,
    warning: String,
    title: String,
    confirm_label: String,
    confirm_style: Option<ConfirmStyle>,
) -> ConfirmOptions {
    let mut opts = ConfirmOptions::with_message(message);
    if !warning.is_empty() {
        opts.warning = Some(warning);
    }
    if !title.is_empty() {
        opts.title = title;
    }
    if !confirm_label.is_empty() {
        opts.confirm_label = confirm_label;
    }
    if let Some(style) = confirm_style {
        opts.confirm_style = style;
    }
    opts
}

fn event_target_element(ev: &web_sys::MouseEvent) -> Option<web_sys::HtmlElement> {
    ev.current_target()?.dyn_into::<web_sys::HtmlElement>().ok()
}

/// Button whose action runs only after the user confirms.
///
/// Registers its configuration with the controller's trigger registry at
/// setup; a click looks the id up instead of reading DOM attributes.
#[component]
pub fn ConfirmButton(
    children: Children,
    #[prop(into)] message: String,
    #[prop(optional, into)] warning: String,
    #[prop(optional, into)] title: String,
    #[prop(optional, into)] confirm_label: String,
    #[prop(optional, into)] confirm_style: Option<ConfirmStyle>,
    /// Runs on a positive decision; a `"confirmed"` event is dispatched on
    /// the button as well.
    on_confirm: Callback<()>,
    #[prop(optional, into)] class: String,
    #[prop(default = ButtonVariant::Outline)] variant: ButtonVariant,
    #[prop(default = ButtonSize::Default)] size: ButtonSize,
) -> impl IntoView {
    let ctrl = expect_context::<ConfirmController>();

    let trigger_id = use_random_id_for("confirm_trigger");
    ctrl.register_trigger(
        trigger_id.clone(),
        merge_trigger_options(message, warning, title, confirm_label, confirm_style),
    );
    {
        let id = trigger_id.clone();
        on_cleanup(move || ctrl.unregister_trigger(&id));
    }

    let id_for_click = trigger_id.clone();
    let on_click = move |ev: web_sys::MouseEvent| {
        ev.prevent_default();
        let el = event_target_element(&ev);
        ctrl.activate(&id_for_click, ConfirmAction::Notify(on_confirm), el);
    };

    view! {
        <Button
            class=class
            variant=variant
            size=size
            attr:id=trigger_id
            attr:r#type="button"
            on:click=on_click
        >
            {children()}
        </Button>
    }
}

/// Submit button whose form is only submitted after the user confirms.
///
/// The intercepted submission is replayed through `form.submit()`, which
/// does not re-fire the form's `submit` event.
#[component]
pub fn ConfirmSubmitButton(
    children: Children,
    form: NodeRef<html::Form>,
    #[prop(into)] message: String,
    #[prop(optional, into)] warning: String,
    #[prop(optional, into)] title: String,
    #[prop(optional, into)] confirm_label: String,
    #[prop(optional, into)] confirm_style: Option<ConfirmStyle>,
    #[prop(optional, into)] class: String,
    #[prop(default = ButtonVariant::Default)] variant: ButtonVariant,
    #[prop(default = ButtonSize::Default)] size: ButtonSize,
) -> impl IntoView {
    let ctrl = expect_context::<ConfirmController>();

    let trigger_id = use_random_id_for("confirm_trigger");
    ctrl.register_trigger(
        trigger_id.clone(),
        merge_trigger_options(message, warning, title, confirm_label, confirm_style),
    );
    {
        let id = trigger_id.clone();
        on_cleanup(move || ctrl.unregister_trigger(&id));
    }

    let id_for_click = trigger_id.clone();
    let on_click = move |ev: web_sys::MouseEvent| {
        ev.prevent_default();
        let el = event_target_element(&ev);
        ctrl.activate(&id_for_click, ConfirmAction::Submit(form), el);
    };

    view! {
        <Button
            class=class
            variant=variant
            size=size
            attr:id=trigger_id
            attr:r#type="submit"
            on:click=on_click
        >
            {children()}
        </Button>
    }
}

/// Link that navigates to `href` only after the user confirms.
#[component]
pub fn ConfirmLink(
    children: Children,
    #[prop(into)] href: String,
    #[prop(into)] message: String,
    #[prop(optional, into)] warning: String,
    #[prop(optional, into)] title: String,
    #[prop(optional, into)] confirm_label: String,
    #[prop(optional, into)] confirm_style: Option<ConfirmStyle>,
    #[prop(optional, into)] class: String,
) -> impl IntoView {
    let ctrl = expect_context::<ConfirmController>();

    let trigger_id = use_random_id_for("confirm_trigger");
    ctrl.register_trigger(
        trigger_id.clone(),
        merge_trigger_options(message, warning, title, confirm_label, confirm_style),
    );
    {
        let id = trigger_id.clone();
        on_cleanup(move || ctrl.unregister_trigger(&id));
    }

    let merged_class = tw_merge!("text-primary underline underline-offset-4", class);

    let id_for_click = trigger_id.clone();
    let href_for_click = href.clone();
    let on_click = move |ev: web_sys::MouseEvent| {
        // Navigation is suppressed here and replayed on confirmation.
        ev.prevent_default();
        let el = event_target_element(&ev);
        ctrl.activate(
            &id_for_click,
            ConfirmAction::Navigate(href_for_click.clone()),
            el,
        );
    };

    view! {
        <a href=href class=merged_class id=trigger_id on:click=on_click>
            {children()}
        </a>
    }
}
