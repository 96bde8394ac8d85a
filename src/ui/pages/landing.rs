//! Landing page component
//!
//! Marketing page made of:
//! - Hero section with the email capture that starts sign-up
//! - Features section with benefit cards
//! - Testimonials and footer inside the theme region, which switch the whole
//!   page to its dark treatment while on screen

use leptos::prelude::*;
use leptos_meta::{Meta, Title};

use crate::core::THEME_REGION_ID;
use crate::ui::common::{Button, ButtonSize};
use crate::ui::icon::{Icon, icons};

/// Landing page sections below the navbar
#[component]
pub fn LandingPage(
    /// Email submitted from the hero form
    on_start_signup: Callback<String>,
    #[prop(into)]
    is_dark_mode: Signal<bool>,
) -> impl IntoView {
    view! {
        <SeoMeta />
        <main>
            <Hero on_start_signup=on_start_signup />
            <Features />
            // Visibility of this wrapper drives the theme flag
            <div id=THEME_REGION_ID>
                <Testimonials is_dark_mode=is_dark_mode />
                <Footer is_dark_mode=is_dark_mode />
            </div>
        </main>
    }
}

#[component]
fn SeoMeta() -> impl IntoView {
    view! {
        <Title text="Verdant - Grow your audience on autopilot"/>
        <Meta
            name="description"
            content="Verdant plans, writes and schedules your marketing so you can focus on the product."
        />
    }
}

#[component]
fn Hero(on_start_signup: Callback<String>) -> impl IntoView {
    let email = RwSignal::new(String::new());

    view! {
        <section class="relative pt-24 pb-32 px-4 overflow-hidden">
            <div class="max-w-4xl mx-auto text-center">
                <span class="inline-block mb-6 px-3 py-1 rounded-full bg-[#D7F037]/30 text-sm font-medium">
                    "New: campaign autopilot"
                </span>
                <h1 class="text-5xl sm:text-6xl lg:text-7xl font-bold tracking-tight mb-6 landing-fade-in-up">
                    "Marketing that grows while you build"
                </h1>
                <p class="text-xl text-gray-600 max-w-2xl mx-auto mb-10 leading-relaxed">
                    "Verdant plans, writes and schedules your campaigns, then tells you what actually worked."
                </p>

                <form
                    class="flex flex-col sm:flex-row items-center justify-center gap-3 max-w-lg mx-auto"
                    on:submit=move |ev| {
                        ev.prevent_default();
                        on_start_signup.run(email.get_untracked());
                    }
                >
                    <input
                        type="email"
                        class="input-base flex-1 w-full"
                        placeholder="you@company.com"
                        autocomplete="email"
                        aria-label="Email address"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <Button
                        size=ButtonSize::Large
                        submit=true
                        trailing_icon=icons::ARROW_RIGHT
                    >
                        "Get started"
                    </Button>
                </form>
                <p class="mt-4 text-sm text-gray-500">"Free for 14 days. No credit card required."</p>
            </div>
        </section>
    }
}

#[component]
fn Features() -> impl IntoView {
    view! {
        <section class="py-24 px-4">
            <div class="max-w-6xl mx-auto">
                <div class="text-center mb-16">
                    <h2 class="text-3xl sm:text-4xl font-bold mb-4">"Everything in one place"</h2>
                    <p class="text-lg text-gray-600 max-w-2xl mx-auto">
                        "From first idea to final report, without juggling five tools."
                    </p>
                </div>
                <div class="grid md:grid-cols-3 gap-8">
                    <FeatureCard
                        icon=icons::SPARKLES
                        title="Content on tap"
                        description="Draft posts, emails and landing copy in your brand voice."
                    />
                    <FeatureCard
                        icon=icons::BOLT
                        title="Autopilot scheduling"
                        description="Publish at the moment your audience is most likely to engage."
                    />
                    <FeatureCard
                        icon=icons::CHART
                        title="Clear analytics"
                        description="See which campaigns moved the needle, in plain language."
                    />
                </div>
            </div>
        </section>
    }
}

#[component]
fn FeatureCard(icon: &'static str, title: &'static str, description: &'static str) -> impl IntoView {
    view! {
        <div class="p-8 rounded-2xl bg-white border border-black/5 shadow-sm">
            <div class="w-12 h-12 mb-6 rounded-xl bg-[#D7F037] flex items-center justify-center text-black">
                <Icon name=icon class="w-6 h-6"/>
            </div>
            <h3 class="text-xl font-semibold mb-2">{title}</h3>
            <p class="text-gray-600 leading-relaxed">{description}</p>
        </div>
    }
}

const TESTIMONIALS: [(&str, &str, &str); 3] = [
    (
        "We doubled our newsletter sign-ups in the first month.",
        "Maya Chen",
        "Founder, Loop Studio",
    ),
    (
        "It replaced our scheduling tool, our copy doc and half our weekly meeting.",
        "Jonas Weber",
        "Head of Growth, Northwind",
    ),
    (
        "The reports finally tell me what to do next instead of just showing charts.",
        "Priya Raman",
        "Marketing Lead, Fieldnote",
    ),
];

#[component]
fn Testimonials(#[prop(into)] is_dark_mode: Signal<bool>) -> impl IntoView {
    view! {
        <section class="py-32 px-4">
            <div class="max-w-6xl mx-auto">
                <h2
                    class="text-3xl sm:text-4xl font-bold text-center mb-16 transition-colors duration-700"
                    class=("text-white", move || is_dark_mode.get())
                >
                    "Loved by small teams"
                </h2>
                <div class="grid md:grid-cols-3 gap-8">
                    {TESTIMONIALS
                        .into_iter()
                        .map(move |(quote, name, role)| {
                            view! {
                                <figure
                                    class="p-8 rounded-2xl border transition-colors duration-700"
                                    class=(["bg-white/5", "border-white/10", "text-white"], move || is_dark_mode.get())
                                    class=(["bg-white", "border-black/5"], move || !is_dark_mode.get())
                                >
                                    <Icon name=icons::QUOTE class="w-6 h-6 mb-4 text-[#D7F037]"/>
                                    <blockquote class="text-lg leading-relaxed mb-6">{quote}</blockquote>
                                    <figcaption>
                                        <div class="font-semibold">{name}</div>
                                        <div class="text-sm opacity-70">{role}</div>
                                    </figcaption>
                                </figure>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn Footer(#[prop(into)] is_dark_mode: Signal<bool>) -> impl IntoView {
    view! {
        <footer
            class="py-16 px-4 border-t transition-colors duration-700"
            class=(["border-white/10", "text-gray-400"], move || is_dark_mode.get())
            class=(["border-black/5", "text-gray-500"], move || !is_dark_mode.get())
        >
            <div class="max-w-6xl mx-auto flex flex-col sm:flex-row items-center justify-between gap-4">
                <span class="font-semibold">"Verdant"</span>
                <nav class="flex gap-6 text-sm">
                    <a href="#" class="hover:underline">"Privacy"</a>
                    <a href="#" class="hover:underline">"Terms"</a>
                    <a href="#" class="hover:underline">"Contact"</a>
                </nav>
                <p class="text-sm">"© 2026 Verdant. All rights reserved."</p>
            </div>
        </footer>
    }
}
