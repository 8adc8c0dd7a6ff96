use crate::components::ui::{Button, ButtonVariant, ConfirmButton, FadeIn};
use crate::confirm::ConfirmStyle;
use crate::models::Theme;
use crate::state::AppContext;
use crate::storage::clear_prefs;
use crate::toast::ToastController;
use leptos::prelude::*;

#[component]
pub fn SettingsPage() -> impl IntoView {
    let app_state = expect_context::<AppContext>();
    let toasts = expect_context::<ToastController>();

    let theme = app_state.0.theme;
    let sidebar_collapsed = app_state.0.sidebar_collapsed;

    let reset_prefs = move |_| {
        clear_prefs();
        theme.set(Theme::Light);
        sidebar_collapsed.set(false);
        toasts.info("Preferences reset");
    };

    view! {
        <FadeIn>
            <div class="mb-6 space-y-1">
                <h1 class="text-xl font-semibold">"Settings"</h1>
                <p class="text-xs text-muted-foreground">"Stored locally in this browser."</p>
            </div>

            <div class="flex flex-col gap-6">
                <section class="space-y-2">
                    <h2 class="text-sm font-medium">"Appearance"</h2>
                    <div class="flex items-center gap-2">
                        <Button
                            variant=ButtonVariant::Outline
                            on:click=move |_| app_state.0.toggle_theme()
                        >
                            {move || match theme.get() {
                                Theme::Light => "Switch to dark theme",
                                Theme::Dark => "Switch to light theme",
                            }}
                        </Button>
                        <span class="text-xs text-muted-foreground">
                            {move || format!("Current: {}", theme.get())}
                        </span>
                    </div>
                </section>

                <section class="space-y-2">
                    <h2 class="text-sm font-medium">"Sidebar"</h2>
                    <Button
                        variant=ButtonVariant::Outline
                        on:click=move |_| app_state.0.toggle_sidebar()
                    >
                        {move || if sidebar_collapsed.get() {
                            "Expand sidebar"
                        } else {
                            "Collapse sidebar"
                        }}
                    </Button>
                </section>

                <section class="space-y-2">
                    <h2 class="text-sm font-medium">"Danger zone"</h2>
                    <ConfirmButton
                        message="Reset all preferences?"
                        warning="Theme and sidebar settings return to their defaults."
                        confirm_label="Reset"
                        confirm_style=ConfirmStyle::Warning
                        on_confirm=Callback::new(reset_prefs)
                    >
                        "Reset preferences"
                    </ConfirmButton>
                </section>
            </div>
        </FadeIn>
    }
}
