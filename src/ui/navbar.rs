//! Top navigation bar shared by every screen

use leptos::prelude::*;

use crate::ui::common::{Button, ButtonSize, ButtonVariant};

/// Navbar with logo and auth buttons
///
/// Auth buttons are hidden mid-flow (sign-up, onboarding) and replaced by an
/// avatar once the user reaches the dashboard.
#[component]
pub fn Navbar(
    on_logo_click: Callback<()>,
    on_login: Callback<()>,
    on_signup: Callback<()>,
    #[prop(default = false)]
    hide_auth_buttons: bool,
    #[prop(default = false)]
    is_logged_in: bool,
    /// Dark treatment while the landing theme region is on screen
    #[prop(into, default = Signal::stored(false))]
    is_dark_mode: Signal<bool>,
) -> impl IntoView {
    view! {
        <header
            class="sticky top-0 z-50 backdrop-blur-md border-b transition-colors duration-700"
            class=(["bg-[#0D1C22]/80", "border-white/10", "text-white"], move || is_dark_mode.get())
            class=(["bg-[#FDFDF5]/80", "border-black/5", "text-gray-900"], move || !is_dark_mode.get())
        >
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex items-center justify-between h-16">
                    <button
                        type="button"
                        class="flex items-center gap-2 hover:opacity-80 transition-opacity"
                        on:click=move |_| on_logo_click.run(())
                        aria-label="Go to home page"
                    >
                        <Logo />
                        <span class="text-xl font-bold tracking-tight">"Verdant"</span>
                    </button>

                    {if is_logged_in {
                        view! {
                            <div class="flex items-center gap-3">
                                <span class="text-sm text-gray-500">"Workspace"</span>
                                <div class="w-8 h-8 rounded-full bg-[#D7F037] flex items-center justify-center text-sm font-semibold text-black">
                                    "V"
                                </div>
                            </div>
                        }
                        .into_any()
                    } else if hide_auth_buttons {
                        ().into_any()
                    } else {
                        view! {
                            <nav class="flex items-center gap-2">
                                <Button variant=ButtonVariant::Ghost size=ButtonSize::Small on_click=on_login>
                                    "Log in"
                                </Button>
                                <Button size=ButtonSize::Small on_click=on_signup>
                                    "Sign up"
                                </Button>
                            </nav>
                        }
                        .into_any()
                    }}
                </div>
            </div>
        </header>
    }
}

#[component]
fn Logo() -> impl IntoView {
    view! {
        <div class="w-8 h-8 bg-[#D7F037] rounded-lg flex items-center justify-center">
            <svg class="w-5 h-5 text-black" fill="none" viewBox="0 0 24 24" stroke="currentColor">
                <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2"
                      d="M5 21c6 0 14-4 14-16-7 0-14 4-14 12v4zm0 0l8-8" />
            </svg>
        </div>
    }
}
