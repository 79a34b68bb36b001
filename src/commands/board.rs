//! Board Intents
//!
//! Runs engine operations from UI events, then copies the resulting board
//! into the store and reports the outcome as a toast.

use leptos::task::spawn_local;
use taskboard_core::{Column, TaskDraft, TaskId};

use super::report_error;
use crate::context::{AppContext, SharedEngine};
use crate::store::{store_mark_pending, store_push_toast, store_sync_engine, AppStore, ToastKind};

/// Initial load and manual refresh
pub fn refresh_board(ctx: AppContext, store: AppStore, engine: SharedEngine) {
    spawn_local(async move {
        if let Err(err) = engine.refresh().await {
            report_error(ctx, store, err, "Failed to fetch tasks. Please try again.");
        }
        store_sync_engine(&store, &engine);
    });
}

/// Drop of a card onto a column
pub fn move_task(ctx: AppContext, store: AppStore, engine: SharedEngine, id: TaskId, column: Column) {
    store_mark_pending(&store, &id);
    spawn_local(async move {
        match engine.move_task(&id, column).await {
            Ok(()) => store_push_toast(&store, ToastKind::Success, "Task status updated successfully"),
            Err(err) => report_error(ctx, store, err, "Failed to update task status. Please try again."),
        }
        store_sync_engine(&store, &engine);
    });
}

/// Modal save: create or update, `on_saved` runs only on success
pub fn save_task<F>(ctx: AppContext, store: AppStore, engine: SharedEngine, draft: TaskDraft, on_saved: F)
where
    F: FnOnce() + 'static,
{
    if let Err(err) = draft.validate() {
        report_error(ctx, store, err, "");
        return;
    }
    let is_update = draft.id.is_some();
    if let Some(id) = &draft.id {
        store_mark_pending(&store, id);
    }

    spawn_local(async move {
        match engine.save_task(draft).await {
            Ok(_) => {
                let message = if is_update { "Task updated successfully" } else { "New task created successfully" };
                store_push_toast(&store, ToastKind::Success, message);
                on_saved();
            }
            Err(err) => report_error(ctx, store, err, "Failed to save task. Please try again."),
        }
        store_sync_engine(&store, &engine);
    });
}

pub fn delete_task(ctx: AppContext, store: AppStore, engine: SharedEngine, id: TaskId) {
    store_mark_pending(&store, &id);
    spawn_local(async move {
        match engine.delete_task(&id).await {
            Ok(()) => store_push_toast(&store, ToastKind::Success, "Task deleted successfully"),
            Err(err) => report_error(ctx, store, err, "Failed to delete task. Please try again."),
        }
        store_sync_engine(&store, &engine);
    });
}
