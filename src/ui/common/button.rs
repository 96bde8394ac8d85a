use crate::ui::icon::Icon;
use leptos::prelude::*;

/// Button variant types
#[derive(Clone, Copy, PartialEq)]
pub enum ButtonVariant {
    /// Lime call-to-action
    Primary,
    /// Text only, used in the navbar
    Ghost,
}

/// Button size options
#[derive(Clone, Copy, PartialEq)]
pub enum ButtonSize {
    Small,
    Medium,
    Large,
}

impl ButtonVariant {
    fn class(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => "btn-primary",
            ButtonVariant::Ghost => "btn-ghost",
        }
    }
}

impl ButtonSize {
    fn class(&self) -> &'static str {
        match self {
            ButtonSize::Small => "btn-sm",
            ButtonSize::Medium => "",
            ButtonSize::Large => "btn-lg",
        }
    }
}

/// Type-safe button component with variants and sizes
#[component]
pub fn Button(
    /// Button variant style
    #[prop(default = ButtonVariant::Primary)]
    variant: ButtonVariant,
    /// Button size
    #[prop(default = ButtonSize::Medium)]
    size: ButtonSize,
    /// Click handler. Submit buttons usually leave this to the form.
    #[prop(optional)]
    on_click: Option<Callback<()>>,
    /// Submit the enclosing form, which also enables Enter-to-submit
    #[prop(optional)]
    submit: bool,
    /// Whether button is disabled
    #[prop(into, default = Signal::stored(false))]
    disabled: Signal<bool>,
    /// Button content
    children: Children,
    /// Optional icon shown after the text
    #[prop(optional)]
    trailing_icon: Option<&'static str>,
    /// Additional CSS classes
    #[prop(into, default = String::new())]
    class: String,
) -> impl IntoView {
    let base_classes = format!("btn-base {} {}", variant.class(), size.class());
    let full_classes = if class.is_empty() {
        base_classes
    } else {
        format!("{} {}", base_classes, class)
    };

    view! {
        <button
            type=if submit { "submit" } else { "button" }
            class=full_classes
            on:click=move |_| {
                if let Some(on_click) = on_click
                    && !disabled.get_untracked()
                {
                    on_click.run(())
                }
            }
            disabled=move || disabled.get()
        >
            {children()}
            {trailing_icon.map(|name| view! { <Icon name=name class="w-4 h-4"/> })}
        </button>
    }
}

/// Back/Next button pair used by multi-step forms
#[component]
pub fn StepButtons(
    /// Next button text
    #[prop(into)]
    next_text: Signal<String>,
    on_next: Callback<()>,
    on_back: Callback<()>,
    /// Hide the back button on the first step
    #[prop(into)]
    show_back: Signal<bool>,
    #[prop(into)]
    next_disabled: Signal<bool>,
) -> impl IntoView {
    view! {
        <div class="flex items-center justify-between mt-8">
            <div>
                <Show when=move || show_back.get()>
                    <Button variant=ButtonVariant::Ghost on_click=on_back>
                        "Back"
                    </Button>
                </Show>
            </div>
            <Button
                on_click=on_next
                disabled=next_disabled
                trailing_icon=crate::ui::icon::icons::ARROW_RIGHT
            >
                {move || next_text.get()}
            </Button>
        </div>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;

    #[test]
    fn test_submit_button_submits_form() {
        let owner = Owner::new();
        owner.set();

        let html = view! { <Button submit=true>"Continue"</Button> }.to_html();
        assert!(html.contains(r#"type="submit""#));

        let html = view! { <Button on_click=Callback::new(|_: ()| {})>"Back"</Button> }.to_html();
        assert!(html.contains(r#"type="button""#));
    }
}
