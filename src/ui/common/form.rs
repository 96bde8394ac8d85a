use crate::ui::icon::{Icon, icons};
use leptos::prelude::*;

/// Generic form field component with label, input and inline error
#[component]
pub fn FormField(
    /// Field label text
    label: &'static str,
    /// Input type (text, password, email, etc.)
    #[prop(default = "text")]
    input_type: &'static str,
    /// Placeholder text
    #[prop(default = "")]
    placeholder: &'static str,
    /// Browser autocomplete hint
    #[prop(default = "off")]
    autocomplete: &'static str,
    /// Current value signal
    value: Signal<String>,
    /// Input event callback
    on_input: Callback<String>,
    /// Error message to display, if any
    #[prop(into, default = Signal::stored(None::<String>))]
    error: Signal<Option<String>>,
) -> impl IntoView {
    view! {
        <div class="space-y-1.5">
            <label class="label">{label}</label>
            <input
                type=input_type
                class="input-base"
                class:input-error=move || error.get().is_some()
                placeholder=placeholder
                autocomplete=autocomplete
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
            />
            {move || {
                error.get().map(|err| view! {
                    <div class="flex items-center gap-1 text-sm text-red-600">
                        <Icon name=icons::ALERT_CIRCLE class="w-4 h-4"/>
                        <span>{err}</span>
                    </div>
                })
            }}
        </div>
    }
}

/// Selectable card used for single and multiple choice questions
#[component]
pub fn ChoiceCard(
    label: &'static str,
    #[prop(into)]
    selected: Signal<bool>,
    on_select: Callback<()>,
) -> impl IntoView {
    view! {
        <button
            type="button"
            class="choice-card"
            class:choice-card-selected=move || selected.get()
            aria-pressed=move || selected.get().to_string()
            on:click=move |_| on_select.run(())
        >
            <span>{label}</span>
            <Show when=move || selected.get()>
                <Icon name=icons::CHECK class="w-4 h-4"/>
            </Show>
        </button>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;

    #[test]
    fn test_error_is_optional() {
        let owner = Owner::new();
        owner.set();

        let html = view! {
            <FormField
                label="Workspace name"
                value=Signal::stored(String::new())
                on_input=Callback::new(|_: String| {})
            />
        }
        .to_html();
        assert!(html.contains("Workspace name"));
        assert!(!html.contains("text-red-600"));

        let html = view! {
            <FormField
                label="Email"
                value=Signal::stored(String::new())
                on_input=Callback::new(|_: String| {})
                error=Signal::stored(Some("Please enter a valid email".to_string()))
            />
        }
        .to_html();
        assert!(html.contains("Please enter a valid email"));
    }
}
