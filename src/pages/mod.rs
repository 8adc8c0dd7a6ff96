mod records;
mod settings;

pub use records::RecordsPage;
pub use settings::SettingsPage;

use crate::components::ui::{ConfirmDialogHost, IconButton, ToastViewport};
use crate::a11y::LiveRegions;
use crate::state::{apply_theme_class, AppContext};
use icons::ChevronRight;
use leptos::prelude::*;

#[component]
pub fn AppLayout(children: ChildrenFn) -> impl IntoView {
    let app_state = expect_context::<AppContext>();
    let sidebar_collapsed = app_state.0.sidebar_collapsed;
    let theme = app_state.0.theme;

    // Keep the document root's `dark` class in sync with the preference.
    Effect::new(move |_| {
        apply_theme_class(theme.get());
    });

    let sidebar_width_class = move || {
        if sidebar_collapsed.get() {
            "w-14"
        } else {
            "w-56"
        }
    };

    let toggle_icon_class = move || {
        if sidebar_collapsed.get() {
            ""
        } else {
            "rotate-180"
        }
    };

    view! {
        <div class="min-h-screen bg-background text-foreground">
            <LiveRegions />
            <ConfirmDialogHost />
            <ToastViewport />

            <div class="mx-auto flex min-h-screen w-full max-w-5xl gap-4 px-4 py-6">
                <aside class=move || format!("{} shrink-0", sidebar_width_class())>
                    <div class="sticky top-6 space-y-4">
                        <div class="flex items-center justify-between">
                            <a href="/" class="text-sm font-medium text-foreground">
                                <Show when=move || !sidebar_collapsed.get() fallback=|| view! { "A" }>
                                    "Atrium"
                                </Show>
                            </a>

                            <IconButton
                                label="Toggle sidebar"
                                class="h-8 w-8"
                                on:click=move |_| app_state.0.toggle_sidebar()
                            >
                                <span class=move || format!("inline-flex transition-transform {}", toggle_icon_class())>
                                    <ChevronRight />
                                </span>
                            </IconButton>
                        </div>

                        <Show when=move || !sidebar_collapsed.get() fallback=|| ().into_view()>
                            <nav class="flex flex-col gap-1 text-sm" aria-label="Main">
                                <a
                                    href="/"
                                    class="rounded-md px-2 py-1.5 hover:bg-accent hover:text-accent-foreground"
                                >
                                    "Records"
                                </a>
                                <a
                                    href="/settings"
                                    class="rounded-md px-2 py-1.5 hover:bg-accent hover:text-accent-foreground"
                                >
                                    "Settings"
                                </a>
                            </nav>
                        </Show>
                    </div>
                </aside>

                <main class="min-w-0 flex-1">{children()}</main>
            </div>
        </div>
    }
}
