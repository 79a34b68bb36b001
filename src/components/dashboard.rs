//! Dashboard Component
//!
//! The signed-in page: toolbar, the three status columns and the task modal.

use leptos::prelude::*;
use taskboard_core::{project, Board, Column};

use super::task_modal::{ModalMode, TaskModal};
use super::{BoardToolbar, TaskColumn};
use crate::commands;
use crate::context::{use_app_context, SharedEngine};
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn Dashboard(engine: SharedEngine) -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();
    let modal = RwSignal::new(None::<ModalMode>);

    // New session: nothing from a previous account may show
    store.board().set(Board::default());
    store.board_revision().set(engine.revision());
    store.pending().set(Vec::new());
    commands::refresh_board(ctx, store, engine.clone());

    let projected = Memo::new(move |_| {
        let view = store.view().get();
        store.board().with(|board| project(board, &view))
    });

    let on_open = Callback::new(move |mode: ModalMode| modal.set(Some(mode)));
    let on_add = Callback::new(move |_: ()| modal.set(Some(ModalMode::Create)));

    view! {
        <div class="dashboard">
            <BoardToolbar on_add=on_add />
            <div class="board-columns">
                {Column::ALL.iter().map(|column| {
                    let column = *column;
                    let tasks = Signal::derive(move || projected.with(|board| board.column(column).to_vec()));
                    view! {
                        <TaskColumn column=column tasks=tasks engine=engine.clone() on_open=on_open />
                    }
                }).collect_view()}
            </div>
            <TaskModal mode=modal engine=engine.clone() />
        </div>
    }
}
