//! Task Card Component
//!
//! One draggable card. Pressing starts a pending drag; the card only lifts
//! once the pointer moves past the threshold, so its buttons still click.

use leptos::prelude::*;
use leptos_dragdrop::{make_on_mousedown, DndSignals};
use taskboard_core::{Column, Task, TaskId};

use super::task_modal::ModalMode;
use super::DeleteConfirmButton;
use crate::commands;
use crate::context::{use_app_context, SharedEngine};
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn TaskCard(
    task: Task,
    engine: SharedEngine,
    #[prop(into)] on_open: Callback<ModalMode>,
) -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();
    let dnd = expect_context::<DndSignals<TaskId, Column>>();

    let id = task.id.clone();
    let is_pending = {
        let id = id.clone();
        Signal::derive(move || store.pending().with(|pending| pending.contains(&id)))
    };
    let is_dragging = {
        let id = id.clone();
        move || dnd.is_dragging(&id)
    };
    let class = move || {
        let mut class = String::from("task-card");
        if is_dragging() {
            class.push_str(" dragging");
        }
        if is_pending.get() {
            class.push_str(" pending");
        }
        class
    };

    let on_mousedown = make_on_mousedown(dnd, id.clone());
    let on_delete = {
        let id = id.clone();
        Callback::new(move |_: ()| commands::delete_task(ctx, store, engine.clone(), id.clone()))
    };
    let edit_task = task.clone();
    let view_task = task.clone();
    let created = task.created_at.format("%Y-%m-%d %H:%M").to_string();

    view! {
        <div class=class on:mousedown=on_mousedown>
            <h3 class="task-title">{task.title.clone()}</h3>
            <p class="task-description">{task.description.clone()}</p>
            <p class="task-created">"Created: " {created}</p>
            <div class="task-actions">
                <DeleteConfirmButton button_class="task-delete-btn" disabled=is_pending on_confirm=on_delete />
                <button
                    class="task-edit-btn"
                    disabled=move || is_pending.get()
                    on:click=move |_| {
                        if !dnd.drag_just_ended.get_untracked() {
                            on_open.run(ModalMode::Edit(edit_task.clone()));
                        }
                    }
                >
                    "Edit"
                </button>
                <button
                    class="task-view-btn"
                    on:click=move |_| {
                        if !dnd.drag_just_ended.get_untracked() {
                            on_open.run(ModalMode::View(view_task.clone()));
                        }
                    }
                >
                    "View Details"
                </button>
            </div>
        </div>
    }
}
