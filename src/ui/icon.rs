use leptos::prelude::*;

/// Inline stroke icon, coloured with `currentColor`
#[component]
pub fn Icon(
    /// Icon name, one of `icons::*`
    name: &'static str,
    /// CSS classes for sizing
    #[prop(default = "w-5 h-5")]
    class: &'static str,
) -> impl IntoView {
    let path = icons::path(name);

    view! {
        <svg
            class=class
            fill="none"
            viewBox="0 0 24 24"
            stroke="currentColor"
            stroke-width="2"
            aria-hidden="true"
        >
            <path stroke-linecap="round" stroke-linejoin="round" d=path />
        </svg>
    }
}

pub mod icons {
    pub const ARROW_RIGHT: &str = "arrow-right";
    pub const CHECK: &str = "check";
    pub const CHART: &str = "chart";
    pub const SPARKLES: &str = "sparkles";
    pub const BOLT: &str = "bolt";
    pub const ALERT_CIRCLE: &str = "alert-circle";
    pub const QUOTE: &str = "quote";

    pub(super) fn path(name: &str) -> &'static str {
        match name {
            ARROW_RIGHT => "M13 7l5 5m0 0l-5 5m5-5H6",
            CHECK => "M5 13l4 4L19 7",
            CHART => "M9 19V13m4 6V9m4 10V5M5 19v-3",
            SPARKLES => "M5 3v4M3 5h4M6 17v4m-2-2h4m5-16l2.3 6.9L22 12l-6.7 2.1L13 21l-2.3-6.9L4 12l6.7-2.1z",
            BOLT => "M13 10V3L4 14h7v7l9-11h-7z",
            ALERT_CIRCLE => "M12 8v4m0 4h.01M21 12a9 9 0 11-18 0 9 9 0 0118 0z",
            QUOTE => "M7 8h4v4H8a1 1 0 00-1 1v3M13 8h4v4h-3a1 1 0 00-1 1v3",
            _ => "",
        }
    }
}
