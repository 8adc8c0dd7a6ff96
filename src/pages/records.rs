use crate::a11y::Announcer;
use crate::components::hooks::use_random::use_random_id_for;
use crate::components::ui::{
    Button, ConfirmButton, ConfirmLink, DropdownMenu, DropdownMenuContent, DropdownMenuItem,
    DropdownMenuTrigger, FadeIn, Input, Label, Spinner,
};
use crate::confirm::ConfirmStyle;
use crate::forms::{DateRangeState, PendingSubmit};
use crate::state::AppContext;
use crate::toast::ToastController;
use leptos::prelude::*;
use std::time::Duration;

#[derive(Clone, Copy, PartialEq, Eq)]
enum SortOrder {
    Newest,
    Oldest,
}

#[component]
pub fn RecordsPage() -> impl IntoView {
    let app_state = expect_context::<AppContext>();
    let announcer = expect_context::<Announcer>();
    let toasts = expect_context::<ToastController>();

    let records = app_state.0.records;

    let range = DateRangeState::new();
    let range_error = range.error_signal();
    let error_id = use_random_id_for("date_error");

    // The range the list is filtered by; only updated on a valid submit.
    let applied_start: RwSignal<String> = RwSignal::new(String::new());
    let applied_end: RwSignal<String> = RwSignal::new(String::new());

    let sort_order = RwSignal::new(SortOrder::Newest);

    let submit = PendingSubmit::new();
    let submit_pending = submit.pending_signal();
    // A tick landing after navigation away must not toast into the next page.
    on_cleanup(move || submit.cancel());

    let visible = Memo::new(move |_| {
        let start = applied_start.get();
        let end = applied_end.get();
        let mut list: Vec<_> = records
            .get()
            .into_iter()
            // ISO dates compare lexicographically; an empty bound is open.
            .filter(|r| start.is_empty() || r.ends_on >= start)
            .filter(|r| end.is_empty() || r.starts_on <= end)
            .collect();
        match sort_order.get() {
            SortOrder::Newest => list.sort_by(|a, b| b.starts_on.cmp(&a.starts_on)),
            SortOrder::Oldest => list.sort_by(|a, b| a.starts_on.cmp(&b.starts_on)),
        }
        list
    });

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        if !range.validate_for_submit(&announcer) {
            return;
        }
        if submit_pending.get_untracked() {
            return;
        }

        applied_start.set(range.start.get_untracked());
        applied_end.set(range.end.get_untracked());

        // Brief pending window so the button's loading state is visible,
        // matching the server round trip this form has in production.
        submit.begin(Duration::from_millis(300), move || {
            toasts.success("Date filter applied");
        });
    };

    let delete_record = move |id: u32, name: String| {
        records.update(|list| list.retain(|r| r.id != id));
        toasts.info(format!("Deleted \"{name}\""));
    };

    view! {
        <FadeIn>
            <div class="mb-4 flex items-center justify-between">
                <div class="space-y-1">
                    <h1 class="text-xl font-semibold">"Records"</h1>
                    <p class="text-xs text-muted-foreground">
                        {move || format!("{} shown", visible.get().len())}
                    </p>
                </div>

                <div class="flex items-center gap-2">
                    <DropdownMenu>
                        <DropdownMenuTrigger>
                            {move || match sort_order.get() {
                                SortOrder::Newest => "Newest first",
                                SortOrder::Oldest => "Oldest first",
                            }}
                        </DropdownMenuTrigger>
                        <DropdownMenuContent>
                            <DropdownMenuItem
                                attr:role="menuitem"
                                on:click=move |_| sort_order.set(SortOrder::Newest)
                            >
                                "Newest first"
                            </DropdownMenuItem>
                            <DropdownMenuItem
                                attr:role="menuitem"
                                on:click=move |_| sort_order.set(SortOrder::Oldest)
                            >
                                "Oldest first"
                            </DropdownMenuItem>
                        </DropdownMenuContent>
                    </DropdownMenu>

                    <ConfirmLink
                        href="/export"
                        message="Generate a full export? This can take a while."
                        confirm_label="Export"
                        class="text-sm"
                    >
                        "Export all"
                    </ConfirmLink>
                </div>
            </div>

            <form class="mb-6 flex flex-wrap items-end gap-4" on:submit=on_submit novalidate=true>
                <div class="flex flex-col gap-2">
                    <Label html_for="filter_start">"Start date"</Label>
                    <Input
                        id="filter_start"
                        r#type="date"
                        bind_value=range.start
                        on_change=Callback::new(move |_| {
                            range.revalidate();
                        })
                    />
                </div>

                <div class="flex flex-col gap-2">
                    <Label html_for="filter_end">"End date"</Label>
                    <Input
                        id="filter_end"
                        r#type="date"
                        bind_value=range.end
                        invalid=Signal::derive(move || range_error.get().is_some())
                        described_by=error_id.clone()
                        on_change=Callback::new(move |_| {
                            range.revalidate();
                        })
                    />
                </div>

                <Button attr:disabled=move || submit_pending.get()>
                    <span class="inline-flex items-center gap-2">
                        <Show when=move || submit_pending.get() fallback=|| ().into_view()>
                            <Spinner />
                        </Show>
                        {move || if submit_pending.get() { "Applying..." } else { "Apply filter" }}
                    </span>
                </Button>

                {
                    let error_id = error_id.clone();
                    move || {
                        range_error.get().map(|msg| view! {
                            <p id=error_id.clone() class="w-full text-sm text-destructive" role="alert">
                                {msg}
                            </p>
                        })
                    }
                }
            </form>

            <ul class="flex flex-col gap-2">
                <For each=move || visible.get() key=|r| r.id let:record>
                    {
                        let name_for_delete = record.name.clone();
                        let id = record.id;
                        view! {
                            <li class="flex items-center justify-between gap-2 rounded-md border px-4 py-3">
                                <div class="flex flex-col gap-1">
                                    <span class="text-sm font-medium">{record.name.clone()}</span>
                                    <span class="text-xs text-muted-foreground">
                                        {format!("{} to {}", record.starts_on, record.ends_on)}
                                    </span>
                                </div>

                                <ConfirmButton
                                    message="Delete this record?"
                                    warning="This cannot be undone."
                                    confirm_label="Delete"
                                    confirm_style=ConfirmStyle::Danger
                                    on_confirm=Callback::new(move |_| {
                                        delete_record(id, name_for_delete.clone());
                                    })
                                >
                                    "Delete"
                                </ConfirmButton>
                            </li>
                        }
                    }
                </For>
            </ul>

            <Show when=move || visible.get().is_empty() fallback=|| ().into_view()>
                <p class="mt-4 text-xs text-muted-foreground">"No records in this range."</p>
            </Show>
        </FadeIn>
    }
}
