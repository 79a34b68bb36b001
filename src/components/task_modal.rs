//! Task Modal Component
//!
//! Create, edit and read-only views of a task in one dialog.

use leptos::prelude::*;
use taskboard_core::{Column, Task, TaskDraft};

use crate::commands;
use crate::context::{use_app_context, SharedEngine};
use crate::store::use_app_store;

/// What the modal is showing
#[derive(Clone, Debug, PartialEq)]
pub enum ModalMode {
    Create,
    Edit(Task),
    View(Task),
}

impl ModalMode {
    fn heading(&self) -> &'static str {
        match self {
            ModalMode::Create => "Add Task",
            ModalMode::Edit(_) => "Edit Task",
            ModalMode::View(_) => "Task Details",
        }
    }

    fn draft(&self) -> TaskDraft {
        match self {
            ModalMode::Create => TaskDraft::default(),
            ModalMode::Edit(task) | ModalMode::View(task) => TaskDraft::from_task(task),
        }
    }
}

#[component]
pub fn TaskModal(mode: RwSignal<Option<ModalMode>>, engine: SharedEngine) -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    let (title, set_title) = signal(String::new());
    let (description, set_description) = signal(String::new());
    let (status, set_status) = signal(Column::default());
    let (title_error, set_title_error) = signal::<Option<&'static str>>(None);

    // Reset the fields whenever a new mode opens
    Effect::new(move |_| {
        if let Some(open) = mode.get() {
            let draft = open.draft();
            set_title.set(draft.title);
            set_description.set(draft.description);
            set_status.set(draft.status.unwrap_or_default());
            set_title_error.set(None);
        }
    });

    let read_only = move || mode.with(|m| matches!(m, Some(ModalMode::View(_))));
    let close = move || mode.set(None);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let Some(open) = mode.get_untracked() else { return };
        if matches!(open, ModalMode::View(_)) {
            return;
        }
        if title.get_untracked().trim().is_empty() {
            set_title_error.set(Some("Title is required"));
            return;
        }
        let draft = TaskDraft {
            id: open.draft().id,
            ..TaskDraft::new(title.get_untracked())
                .with_description(description.get_untracked())
                .with_status(status.get_untracked())
        };
        commands::save_task(ctx, store, engine.clone(), draft, move || mode.set(None));
    };

    view! {
        <Show when=move || mode.with(Option::is_some)>
            <div class="modal-backdrop" on:click=move |_| close()>
                <form
                    class="modal"
                    on:click=|ev| ev.stop_propagation()
                    on:submit=on_submit.clone()
                >
                    <h2>{move || mode.with(|m| m.as_ref().map(ModalMode::heading).unwrap_or_default())}</h2>

                    <label>"Title"</label>
                    <input
                        type="text"
                        prop:value=move || title.get()
                        readonly=read_only
                        on:input=move |ev| {
                            set_title.set(event_target_value(&ev));
                            set_title_error.set(None);
                        }
                    />
                    <Show when=move || title_error.get().is_some()>
                        <p class="field-error">{move || title_error.get().unwrap_or_default()}</p>
                    </Show>

                    <label>"Description"</label>
                    <textarea
                        prop:value=move || description.get()
                        readonly=read_only
                        on:input=move |ev| set_description.set(event_target_value(&ev))
                    ></textarea>

                    <label>"Status"</label>
                    <select
                        disabled=read_only
                        on:change=move |ev| set_status.set(Column::normalize(&event_target_value(&ev)))
                    >
                        {Column::ALL.iter().map(|column| {
                            let column = *column;
                            view! {
                                <option value=column.as_str() selected=move || status.get() == column>
                                    {column.as_str()}
                                </option>
                            }
                        }).collect_view()}
                    </select>

                    <div class="modal-actions">
                        <button type="button" class="cancel-btn" on:click=move |_| close()>
                            {move || if read_only() { "Close" } else { "Cancel" }}
                        </button>
                        <Show when=move || !read_only()>
                            <button type="submit" class="save-btn">"Save"</button>
                        </Show>
                    </div>
                </form>
            </div>
        </Show>
    }
}
