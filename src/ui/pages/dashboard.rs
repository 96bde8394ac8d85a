//! Dashboard page component
//!
//! Post-onboarding home. Static summary content; there is no backend to
//! load real campaigns from.

use leptos::prelude::*;

use crate::ui::icon::{Icon, icons};

#[component]
pub fn DashboardPage() -> impl IntoView {
    view! {
        <main class="max-w-6xl mx-auto px-4 py-12">
            <h1 class="text-3xl font-bold mb-2">"Welcome to your workspace"</h1>
            <p class="text-gray-600 mb-10">"Here is what to do first."</p>

            <div class="grid md:grid-cols-3 gap-6 mb-12">
                <StatCard label="Scheduled posts" value="0" />
                <StatCard label="Audience reached" value="0" />
                <StatCard label="Campaigns live" value="0" />
            </div>

            <section class="p-8 rounded-2xl bg-white border border-black/5 shadow-sm">
                <h2 class="text-xl font-semibold mb-6">"Getting started"</h2>
                <ul class="space-y-4">
                    <ChecklistItem done=true text="Create your account" />
                    <ChecklistItem done=true text="Tell us about your goals" />
                    <ChecklistItem done=false text="Connect your first channel" />
                    <ChecklistItem done=false text="Launch a campaign" />
                </ul>
            </section>
        </main>
    }
}

#[component]
fn StatCard(label: &'static str, value: &'static str) -> impl IntoView {
    view! {
        <div class="p-6 rounded-2xl bg-white border border-black/5 shadow-sm">
            <div class="text-sm text-gray-500 mb-1">{label}</div>
            <div class="text-3xl font-bold">{value}</div>
        </div>
    }
}

#[component]
fn ChecklistItem(done: bool, text: &'static str) -> impl IntoView {
    view! {
        <li class="flex items-center gap-3">
            <span
                class="w-6 h-6 rounded-full border flex items-center justify-center"
                class=(["bg-[#D7F037]", "border-transparent"], move || done)
                class=("border-gray-300", move || !done)
            >
                {done.then(|| view! { <Icon name=icons::CHECK class="w-4 h-4 text-black"/> })}
            </span>
            <span class:text-gray-400=move || !done class:line-through=move || done>{text}</span>
        </li>
    }
}
