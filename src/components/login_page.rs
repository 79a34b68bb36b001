//! Login Page Component

use leptos::prelude::*;
use taskboard_core::forms::{FormErrors, FormField, LoginForm};

use crate::commands;
use crate::context::use_app_context;
use crate::store::{use_app_store, AppStateStoreFields, AuthPage};

/// Inline message under a form input
#[component]
pub fn FieldError(errors: RwSignal<FormErrors>, field: FormField) -> impl IntoView {
    view! {
        <Show when=move || errors.with(|e| e.get(field).is_some())>
            <p class="field-error">{move || errors.with(|e| e.get(field).unwrap_or_default())}</p>
        </Show>
    }
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let errors = RwSignal::new(FormErrors::default());

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let form = LoginForm {
            email: email.get_untracked(),
            password: password.get_untracked(),
        };
        match form.validate() {
            Ok(credentials) => {
                errors.set(FormErrors::default());
                commands::login(ctx, store, credentials);
            }
            Err(field_errors) => {
                tracing::debug!(error = %field_errors.clone().into_error(), "login form rejected");
                errors.set(field_errors);
            }
        }
    };

    view! {
        <div class="auth-page">
            <form class="auth-form" on:submit=on_submit>
                <h1>"Login"</h1>
                <input
                    type="email"
                    placeholder="Email"
                    prop:value=move || email.get()
                    on:input=move |ev| set_email.set(event_target_value(&ev))
                />
                <FieldError errors=errors field=FormField::Email />
                <input
                    type="password"
                    placeholder="Password"
                    prop:value=move || password.get()
                    on:input=move |ev| set_password.set(event_target_value(&ev))
                />
                <FieldError errors=errors field=FormField::Password />
                <button type="submit" class="auth-submit">"Login"</button>
            </form>
            <p class="auth-switch">
                "Don't have an account? "
                <a href="#" on:click=move |ev| {
                    ev.prevent_default();
                    store.auth_page().set(AuthPage::Signup);
                }>"Signup"</a>
            </p>
            <button class="google-btn" on:click=move |_| commands::google_login(ctx, store)>
                "Login with Google"
            </button>
        </div>
    }
}
