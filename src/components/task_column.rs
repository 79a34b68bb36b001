//! Task Column Component
//!
//! One status column and drop zone. Cards are keyed by id plus their
//! visible text so an edit re-renders the card.

use leptos::prelude::*;
use leptos_dragdrop::{make_on_mouseleave, make_on_zone_mouseenter, DndSignals};
use taskboard_core::{Column, Task, TaskId};

use super::task_modal::ModalMode;
use super::TaskCard;
use crate::context::SharedEngine;

#[component]
pub fn TaskColumn(
    column: Column,
    #[prop(into)] tasks: Signal<Vec<Task>>,
    engine: SharedEngine,
    #[prop(into)] on_open: Callback<ModalMode>,
) -> impl IntoView {
    let dnd = expect_context::<DndSignals<TaskId, Column>>();

    let class = move || {
        if dnd.is_over(&column) {
            "task-column drop-target"
        } else {
            "task-column"
        }
    };

    view! {
        <section
            class=class
            on:mouseenter=make_on_zone_mouseenter(dnd, column)
            on:mouseleave=make_on_mouseleave(dnd)
        >
            <h2 class="task-column-title">
                {column.as_str()}
                <span class="task-column-count">{move || tasks.with(Vec::len)}</span>
            </h2>
            <div class="task-column-body">
                <For
                    each=move || tasks.get()
                    key=|task| (task.id.clone(), task.title.clone(), task.description.clone())
                    children=move |task| {
                        view! { <TaskCard task=task engine=engine.clone() on_open=on_open /> }
                    }
                />
            </div>
        </section>
    }
}
