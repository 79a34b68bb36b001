//! Board Toolbar Component
//!
//! Search box, sort field selector and order toggle. Writes only the view
//! settings; the board itself is never touched.

use leptos::prelude::*;
use taskboard_core::SortKey;

use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn BoardToolbar(#[prop(into)] on_add: Callback<()>) -> impl IntoView {
    let store = use_app_store();
    let view_params = store.view();

    view! {
        <div class="board-toolbar">
            <button class="add-task-btn" on:click=move |_| on_add.run(())>"Add Task"</button>
            <input
                type="text"
                class="search-input"
                placeholder="Search tasks..."
                prop:value=move || view_params.with(|v| v.search.clone())
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    view_params.write().search = value;
                }
            />
            <select
                class="sort-select"
                on:change=move |ev| {
                    let key = event_target_value(&ev).parse::<SortKey>().unwrap_or_default();
                    view_params.write().sort_key = key;
                }
            >
                {SortKey::ALL.iter().map(|key| {
                    let key = *key;
                    view! {
                        <option
                            value=key.as_str()
                            selected=move || view_params.with(|v| v.sort_key == key)
                        >
                            {key.label()}
                        </option>
                    }
                }).collect_view()}
            </select>
            <button
                class="sort-order-btn"
                on:click=move |_| view_params.update(|v| v.order = v.order.toggle())
            >
                {move || view_params.with(|v| v.order.arrow())}
            </button>
        </div>
    }
}
