//! Sign-up page component
//!
//! Pre-filled with the email captured on the landing page. The form is
//! validated locally; nothing is sent anywhere.

use leptos::prelude::*;

use crate::core::signup::error_for;
use crate::core::{SignupError, SignupField, SignupForm};
use crate::ui::common::{Button, ButtonSize, FormField};
use crate::ui::icon::icons;

/// Sign-up page component
#[component]
pub fn SignupPage(
    /// Email captured by the landing hero
    email: String,
    /// Called once the form validates
    on_next: Callback<()>,
) -> impl IntoView {
    let email = RwSignal::new(email);
    let full_name = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());

    // Errors are only shown after the first submit attempt
    let errors = RwSignal::new(Vec::<SignupError>::new());
    let field_error = move |field: SignupField| {
        Signal::derive(move || errors.with(|e| error_for(e, field).map(ToString::to_string)))
    };

    let on_submit = move || {
        let form = SignupForm {
            email: email.get_untracked(),
            full_name: full_name.get_untracked(),
            password: password.get_untracked(),
        };
        match form.validate() {
            Ok(()) => {
                errors.set(Vec::new());
                on_next.run(());
            }
            Err(found) => {
                tracing::debug!(count = found.len(), "sign-up form rejected");
                errors.set(found);
            }
        }
    };

    view! {
        <main class="flex items-center justify-center px-4 py-16">
            <div class="w-full max-w-md p-8 rounded-2xl bg-white border border-black/5 shadow-sm">
                <h1 class="text-3xl font-bold mb-2">"Create your account"</h1>
                <p class="text-gray-600 mb-8">"It takes less than a minute."</p>

                <form
                    class="space-y-5"
                    novalidate=true
                    on:submit=move |ev| {
                        ev.prevent_default();
                        on_submit();
                    }
                >
                    <FormField
                        label="Email"
                        input_type="email"
                        placeholder="you@company.com"
                        autocomplete="email"
                        value=email.into()
                        on_input=Callback::new(move |v| email.set(v))
                        error=field_error(SignupField::Email)
                    />
                    <FormField
                        label="Full name"
                        placeholder="Ada Lovelace"
                        autocomplete="name"
                        value=full_name.into()
                        on_input=Callback::new(move |v| full_name.set(v))
                        error=field_error(SignupField::Name)
                    />
                    <FormField
                        label="Password"
                        input_type="password"
                        placeholder="At least 8 characters"
                        autocomplete="new-password"
                        value=password.into()
                        on_input=Callback::new(move |v| password.set(v))
                        error=field_error(SignupField::Password)
                    />
                    <Button
                        size=ButtonSize::Large
                        class="w-full justify-center"
                        submit=true
                        trailing_icon=icons::ARROW_RIGHT
                    >
                        "Continue"
                    </Button>
                </form>
            </div>
        </main>
    }
}
