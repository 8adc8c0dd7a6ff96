use crate::a11y::Announcer;
use crate::confirm::ConfirmController;
use crate::pages::{AppLayout, RecordsPage, SettingsPage};
use crate::state::{AppContext, AppState};
use crate::toast::ToastController;
use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

#[component]
pub fn App() -> impl IntoView {
    let announcer = Announcer::new();
    let confirm = ConfirmController::new(announcer);

    provide_context(announcer);
    provide_context(confirm);
    provide_context(ToastController::new());
    provide_context(AppContext(AppState::new()));

    // Inline scripts on the hosting pages call the exported modal API.
    crate::js_api::register_controller(confirm);

    // IMPORTANT:
    // - Leptos CSR requires the `csr` feature on `leptos`.
    // - router hooks require a <Router> context.
    view! {
        <Router>
            <Routes fallback=|| view! { <div class="px-4 py-8 text-xs text-muted-foreground">"Not found"</div> }>
                <Route path=path!("settings") view=move || view! {
                    <AppLayout>
                        <SettingsPage />
                    </AppLayout>
                } />
                <Route path=path!("") view=move || view! {
                    <AppLayout>
                        <RecordsPage />
                    </AppLayout>
                } />
            </Routes>
        </Router>
    }
}
