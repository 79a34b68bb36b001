//! Signup Page Component

use leptos::prelude::*;
use taskboard_core::forms::{FormErrors, FormField, SignupForm};

use super::login_page::FieldError;
use crate::commands;
use crate::context::use_app_context;
use crate::store::{use_app_store, AppStateStoreFields, AuthPage};

/// Text input bound to a signal
#[component]
fn SignupInput(
    #[prop(into)] input_type: String,
    #[prop(into)] placeholder: String,
    value: RwSignal<String>,
) -> impl IntoView {
    view! {
        <input
            type=input_type
            placeholder=placeholder
            prop:value=move || value.get()
            on:input=move |ev| value.set(event_target_value(&ev))
        />
    }
}

#[component]
pub fn SignupPage() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    let first_name = RwSignal::new(String::new());
    let last_name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm_password = RwSignal::new(String::new());
    let errors = RwSignal::new(FormErrors::default());

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let form = SignupForm {
            first_name: first_name.get_untracked(),
            last_name: last_name.get_untracked(),
            email: email.get_untracked(),
            password: password.get_untracked(),
            confirm_password: confirm_password.get_untracked(),
        };
        match form.validate() {
            Ok(request) => {
                errors.set(FormErrors::default());
                commands::register(ctx, store, request);
            }
            Err(field_errors) => {
                tracing::debug!(error = %field_errors.clone().into_error(), "signup form rejected");
                errors.set(field_errors);
            }
        }
    };

    view! {
        <div class="auth-page">
            <form class="auth-form" on:submit=on_submit>
                <h1>"Signup"</h1>
                <SignupInput input_type="text" placeholder="First Name" value=first_name />
                <FieldError errors=errors field=FormField::FirstName />
                <SignupInput input_type="text" placeholder="Last Name" value=last_name />
                <FieldError errors=errors field=FormField::LastName />
                <SignupInput input_type="email" placeholder="Email" value=email />
                <FieldError errors=errors field=FormField::Email />
                <SignupInput input_type="password" placeholder="Password" value=password />
                <FieldError errors=errors field=FormField::Password />
                <SignupInput input_type="password" placeholder="Confirm Password" value=confirm_password />
                <FieldError errors=errors field=FormField::ConfirmPassword />
                <button type="submit" class="auth-submit">"Signup"</button>
            </form>
            <p class="auth-switch">
                "Already have an account? "
                <a href="#" on:click=move |ev| {
                    ev.prevent_default();
                    store.auth_page().set(AuthPage::Login);
                }>"Login"</a>
            </p>
            <button class="google-btn" on:click=move |_| commands::google_login(ctx, store)>
                "Signup with Google"
            </button>
        </div>
    }
}
