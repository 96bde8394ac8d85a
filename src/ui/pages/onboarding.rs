//! Onboarding wizard page
//!
//! Walks the user through role, goals and workspace name. Finishing the
//! last step hands control back to the view controller.

use leptos::prelude::*;

use crate::core::onboarding::{GOALS, ROLES};
use crate::core::{OnboardingStep, OnboardingWizard, WizardProgress};
use crate::ui::common::{ChoiceCard, FormField, StepButtons};

#[component]
pub fn OnboardingPage(on_complete: Callback<()>) -> impl IntoView {
    let wizard = RwSignal::new(OnboardingWizard::new());
    let step = Memo::new(move |_| wizard.with(|w| w.step()));

    let on_next = Callback::new(move |_: ()| {
        let progress = wizard.try_update(|w| w.advance());
        if progress == Some(WizardProgress::Completed) {
            on_complete.run(());
        }
    });
    let on_back = Callback::new(move |_: ()| {
        wizard.update(|w| {
            w.back();
        });
    });

    let workspace = Signal::derive(move || wizard.with(|w| w.answers().workspace.clone()));

    view! {
        <main class="flex items-center justify-center px-4 py-16">
            <div class="w-full max-w-xl p-8 rounded-2xl bg-white border border-black/5 shadow-sm">
                // Progress
                <div class="flex items-center justify-between text-sm text-gray-500 mb-2">
                    <span>{move || step.get().to_string()}</span>
                    <span>
                        {move || format!("Step {} of {}", step.get().index() + 1, OnboardingStep::ALL.len())}
                    </span>
                </div>
                <div class="h-2 rounded-full bg-gray-100 mb-8 overflow-hidden">
                    <div
                        class="h-full bg-[#D7F037] transition-all duration-300"
                        style:width=move || format!("{}%", wizard.with(|w| w.progress_percent()))
                    ></div>
                </div>

                {move || match step.get() {
                    OnboardingStep::Role => view! {
                        <h1 class="text-2xl font-bold mb-6">"What best describes you?"</h1>
                        <div class="grid grid-cols-2 gap-3">
                            {ROLES
                                .into_iter()
                                .map(move |role| view! {
                                    <ChoiceCard
                                        label=role
                                        selected=Signal::derive(move || {
                                            wizard.with(|w| w.answers().role.as_deref() == Some(role))
                                        })
                                        on_select=Callback::new(move |_| wizard.update(|w| w.select_role(role)))
                                    />
                                })
                                .collect_view()}
                        </div>
                    }
                    .into_any(),
                    OnboardingStep::Goals => view! {
                        <h1 class="text-2xl font-bold mb-6">"What do you want to achieve?"</h1>
                        <div class="grid grid-cols-2 gap-3">
                            {GOALS
                                .into_iter()
                                .map(move |goal| view! {
                                    <ChoiceCard
                                        label=goal
                                        selected=Signal::derive(move || {
                                            wizard.with(|w| w.answers().goals.iter().any(|g| g == goal))
                                        })
                                        on_select=Callback::new(move |_| wizard.update(|w| w.toggle_goal(goal)))
                                    />
                                })
                                .collect_view()}
                        </div>
                    }
                    .into_any(),
                    OnboardingStep::Workspace => view! {
                        <h1 class="text-2xl font-bold mb-6">"Name your workspace"</h1>
                        <FormField
                            label="Workspace name"
                            placeholder="Acme Marketing"
                            value=workspace
                            on_input=Callback::new(move |v: String| wizard.update(|w| w.set_workspace(v)))
                        />
                    }
                    .into_any(),
                }}

                <StepButtons
                    next_text=Signal::derive(move || {
                        if step.get().is_last() { "Finish".to_string() } else { "Next".to_string() }
                    })
                    on_next=on_next
                    on_back=on_back
                    show_back=Signal::derive(move || step.get().previous().is_some())
                    next_disabled=Signal::derive(move || !wizard.with(|w| w.can_advance()))
                />
            </div>
        </main>
    }
}
