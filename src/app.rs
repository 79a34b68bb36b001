//! Task Board Frontend App
//!
//! Root component: provides shared state, binds drag-and-drop once, and
//! picks the page from the session.

use leptos::prelude::*;
use leptos_dragdrop::{bind_global_mouseup, create_dnd_signals, DndSignals};
use reactive_stores::Store;
use taskboard_core::{Column, TaskId};

use crate::commands;
use crate::components::{Dashboard, LoginPage, Navbar, SignupPage, ToastStack};
use crate::config;
use crate::context::AppContext;
use crate::session;
use crate::store::{AppState, AppStateStoreFields, AuthPage};

#[component]
pub fn App() -> impl IntoView {
    let store = Store::new(AppState::default());
    provide_context(store);

    let ctx = AppContext::new(config::api_config(), session::load());
    provide_context(ctx);

    // Lives as long as the app; columns and cards read it from context
    let dnd: DndSignals<TaskId, Column> = create_dnd_signals();
    provide_context(dnd);
    bind_global_mouseup(dnd, move |id: TaskId, column: Column| {
        if let Some(engine) = ctx.current_engine() {
            commands::move_task(ctx, store, engine, id, column);
        }
    });

    view! {
        <div class="app-layout">
            <Navbar />
            <main class="main-content">
                {move || match ctx.engine.get() {
                    Some(engine) => view! { <Dashboard engine=engine /> }.into_any(),
                    None => match store.auth_page().get() {
                        AuthPage::Login => view! { <LoginPage /> }.into_any(),
                        AuthPage::Signup => view! { <SignupPage /> }.into_any(),
                    },
                }}
            </main>
            <ToastStack />
        </div>
    }
}
