//! Navbar Component
//!
//! Top bar with the app title and, when signed in, an account menu.

use leptos::prelude::*;

use crate::context::use_app_context;

#[component]
pub fn Navbar() -> impl IntoView {
    let ctx = use_app_context();
    let (menu_open, set_menu_open) = signal(false);
    let signed_in = move || ctx.engine.with(Option::is_some);

    view! {
        <nav class="navbar">
            <span class="navbar-title">"Task Board"</span>
            <Show when=signed_in>
                <button
                    class="navbar-menu-btn"
                    on:click=move |_| set_menu_open.update(|open| *open = !*open)
                >
                    "☰"
                </button>
            </Show>
        </nav>
        <Show when=move || signed_in() && menu_open.get()>
            <aside class="sidebar">
                <button class="sidebar-close" on:click=move |_| set_menu_open.set(false)>"×"</button>
                <button
                    class="sidebar-logout"
                    on:click=move |_| {
                        set_menu_open.set(false);
                        ctx.logout();
                    }
                >
                    "Logout"
                </button>
            </aside>
        </Show>
    }
}
