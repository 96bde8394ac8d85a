use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::components::{Route, Router, Routes};
use leptos_router::StaticSegment;

use crate::core::{Intent, View};
use crate::ui::pages::{DashboardPage, LandingPage, NotFoundPage, OnboardingPage, SignupPage};
use crate::ui::{Navbar, provide_view_controller, use_view_controller};

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone() />
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    // Single navigation state for the whole page
    provide_view_controller();

    view! {
        // id=leptos means cargo-leptos will hot-reload this stylesheet
        <Stylesheet id="leptos" href="/pkg/verdant.css"/>
        <Title text="Verdant"/>

        // Views are not URL-addressed; the router only separates the app from 404s
        <Router>
            <Routes fallback=NotFoundPage>
                <Route path=StaticSegment("") view=Screens/>
            </Routes>
        </Router>
    }
}

/// Render selector: picks the screen set for the current view
#[component]
fn Screens() -> impl IntoView {
    let controller = use_view_controller();

    let on_logo_click = controller.callback(Intent::LogoClick);
    let on_login = controller.callback(Intent::Login);
    let on_signup = controller.callback(Intent::SignupRequestedFromNav);
    let on_start_signup = Callback::new(move |email: String| {
        controller.dispatch(Intent::StartSignup(email));
    });
    let on_signup_next = controller.callback(Intent::SignupNext);
    let on_onboarding_complete = controller.callback(Intent::OnboardingComplete);

    let is_dark_mode = Signal::derive(move || controller.is_dark_mode());

    // Re-render only when the screen changes or landing is re-entered,
    // not on theme signals
    let arm_key = controller.arm_key();

    move || {
        let key = arm_key.get();
        let props = controller.props_untracked();
        match key.view {
            View::Landing => {
                // Effects run after mount, so the theme region exists by now
                Effect::new(move |_| controller.arm_theme_observer());
                on_cleanup(move || controller.release_theme_observer());

                view! {
                    <div
                        class="min-h-screen text-gray-900 overflow-x-hidden transition-colors duration-700 ease-in-out selection:bg-[#D7F037] selection:text-black"
                        class=("bg-[#0D1C22]", move || is_dark_mode.get())
                        class=("bg-[#FDFDF5]", move || !is_dark_mode.get())
                    >
                        <Navbar
                            on_logo_click=on_logo_click
                            on_login=on_login
                            on_signup=on_signup
                            is_dark_mode=is_dark_mode
                        />
                        <LandingPage on_start_signup=on_start_signup is_dark_mode=is_dark_mode/>
                    </div>
                }
                .into_any()
            }
            View::Signup => view! {
                <div class="min-h-screen bg-[#FDFDF5]">
                    <Navbar
                        on_logo_click=on_logo_click
                        on_login=on_login
                        on_signup=on_signup
                        hide_auth_buttons=props.hide_auth_buttons
                    />
                    <SignupPage
                        email=props.user_email.unwrap_or_default()
                        on_next=on_signup_next
                    />
                </div>
            }
            .into_any(),
            View::Onboarding => view! {
                <div class="min-h-screen bg-[#FDFDF5]">
                    <Navbar
                        on_logo_click=on_logo_click
                        on_login=on_login
                        on_signup=on_signup
                        hide_auth_buttons=props.hide_auth_buttons
                    />
                    <OnboardingPage on_complete=on_onboarding_complete/>
                </div>
            }
            .into_any(),
            View::Dashboard => view! {
                <div class="min-h-screen bg-[#FDFDF5]">
                    <Navbar
                        on_logo_click=on_logo_click
                        on_login=on_login
                        on_signup=on_signup
                        is_logged_in=props.is_logged_in
                    />
                    <DashboardPage/>
                </div>
            }
            .into_any(),
        }
    }
}
