use icons::X;
use leptos::prelude::*;
use tw_merge::tw_merge;

use crate::components::ui::button::IconButton;
use crate::toast::{ToastController, ToastLevel};

fn level_class(level: ToastLevel) -> &'static str {
    match level {
        ToastLevel::Info => "border-border",
        ToastLevel::Success => "border-success/50",
        ToastLevel::Error => "border-destructive/50 text-destructive",
    }
}

/// Stacked toast region. Polite-live: toasts narrate outcomes, they never
/// interrupt.
#[component]
pub fn ToastViewport() -> impl IntoView {
    let toasts = expect_context::<ToastController>();
    let list = toasts.toasts_signal();

    view! {
        <div
            data-name="ToastViewport"
            class="fixed bottom-4 right-4 z-90 flex w-80 flex-col gap-2"
            aria-live="polite"
        >
            <For each=move || list.get() key=|t| t.id let:toast>
                {
                    let class = tw_merge!(
                        "flex items-start justify-between gap-2 rounded-lg border bg-background px-4 py-3 text-sm shadow-lg",
                        level_class(toast.level)
                    );
                    let id = toast.id;
                    view! {
                        <div class=class role="status">
                            <span>{toast.text.clone()}</span>
                            <IconButton
                                label="Dismiss notification"
                                class="size-6 shrink-0"
                                on:click=move |_| toasts.dismiss(id)
                            >
                                <X />
                            </IconButton>
                        </div>
                    }
                }
            </For>
        </div>
    }
}
