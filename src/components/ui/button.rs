use leptos::prelude::*;
use leptos_ui::variants;

variants! {
    Button {
        base: "inline-flex items-center justify-center gap-2 whitespace-nowrap rounded-md text-sm font-medium transition-all disabled:pointer-events-none disabled:opacity-50 [&_svg]:pointer-events-none [&_svg:not([class*='size-'])]:size-4 shrink-0 [&_svg]:shrink-0 outline-none focus-visible:border-ring focus-visible:ring-ring/50 focus-visible:ring-[3px] w-fit hover:cursor-pointer active:scale-[0.98] touch-manipulation select-none",
        variants: {
            variant: {
                Default: "bg-primary text-primary-foreground shadow-xs hover:bg-primary/90",
                Destructive: "bg-destructive text-white shadow-xs hover:bg-destructive/90 focus-visible:ring-destructive/20 dark:focus-visible:ring-destructive/40 dark:bg-destructive/60",
                Outline: "border bg-border/30 shadow-xs hover:bg-border/50 hover:text-foreground dark:bg-input/30 dark:border-input dark:hover:bg-input/5",
                Ghost: "hover:bg-accent hover:text-accent-foreground dark:hover:bg-accent/50",
                Warning: "bg-warning text-warning-foreground hover:bg-warning/90"
            },
            size: {
                Default: "h-9 px-4 py-2 has-[>svg]:px-3",
                Sm: "h-8 rounded-md gap-1.5 px-3 has-[>svg]:px-2.5",
                Icon: "size-9"
            }
        },
        component: {
            element: button,
            support_href: true,
            support_aria_current: true
        }
    }
}

/// Icon-only button that cannot be rendered without an accessible name.
#[component]
pub fn IconButton(
    children: Children,
    /// Accessible name; also shown as a tooltip via `title`.
    #[prop(into)] label: String,
    #[prop(optional, into)] class: String,
    #[prop(default = ButtonVariant::Ghost)] variant: ButtonVariant,
) -> impl IntoView {
    view! {
        <Button
            class=class
            variant=variant
            size=ButtonSize::Icon
            attr:aria-label=label.clone()
            attr:title=label
            attr:r#type="button"
        >
            {children()}
        </Button>
    }
}
