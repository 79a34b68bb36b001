//! Account Intents
//!
//! Login, registration and identity-provider sign-in from the auth pages.

use leptos::prelude::*;
use leptos::task::spawn_local;
use taskboard_core::api::{AuthApi, Credentials, RegisterRequest};

use super::{identity, report_error};
use crate::context::AppContext;
use crate::store::{store_push_toast, AppStateStoreFields, AppStore, AuthPage, ToastKind};

pub fn login(ctx: AppContext, store: AppStore, credentials: Credentials) {
    spawn_local(async move {
        match ctx.auth_api().login(&credentials).await {
            Ok(session) => {
                store_push_toast(&store, ToastKind::Success, "Login successful!");
                ctx.login(session);
            }
            Err(err) => report_error(ctx, store, err, "An error occurred. Please try again."),
        }
    });
}

/// Create an account, then send the user to the login page
pub fn register(ctx: AppContext, store: AppStore, request: RegisterRequest) {
    spawn_local(async move {
        match ctx.auth_api().register(&request).await {
            Ok(message) => {
                store_push_toast(&store, ToastKind::Success, message);
                store.auth_page().set(AuthPage::Login);
            }
            Err(err) => report_error(ctx, store, err, "An error occurred. Please try again."),
        }
    });
}

pub fn google_login(ctx: AppContext, store: AppStore) {
    spawn_local(async move {
        let result = match identity::google_identity().await {
            Ok(identity) => ctx.auth_api().google_login(&identity).await,
            Err(err) => Err(err),
        };
        match result {
            Ok(session) => {
                store_push_toast(&store, ToastKind::Success, "Login successful!");
                ctx.login(session);
            }
            Err(err) => report_error(ctx, store, err, "An error occurred. Please try again."),
        }
    });
}
