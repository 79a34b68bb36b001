//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. The board held
//! here is a read-only snapshot copied out of the engine after each call.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;
use taskboard_core::{Board, TaskId, ViewParams};

use crate::context::SharedEngine;

/// How long a toast stays up
const TOAST_TTL_MS: u32 = 4_000;

/// Which signed-out page is showing
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AuthPage {
    #[default]
    Login,
    Signup,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

/// A transient notification
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: u32,
    pub kind: ToastKind,
    pub message: String,
}

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Last confirmed board copied from the engine
    pub board: Board,
    /// Engine revision `board` was copied at
    pub board_revision: u64,
    /// Tasks with a call in flight
    pub pending: Vec<TaskId>,
    /// Search and sort settings
    pub view: ViewParams,
    pub toasts: Vec<Toast>,
    pub next_toast_id: u32,
    pub auth_page: AuthPage,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Copy the engine's confirmed board and in-flight ids into the store.
///
/// The board is only re-read when the engine has replaced it since the last copy.
pub fn store_sync_engine(store: &AppStore, engine: &SharedEngine) {
    let revision = engine.revision();
    if store.board_revision().get_untracked() != revision {
        store.board().set(engine.board());
        store.board_revision().set(revision);
    }
    store.pending().set(engine.pending_ids());
}

/// Mark a task as in flight before its call is polled
pub fn store_mark_pending(store: &AppStore, id: &TaskId) {
    let pending_field = store.pending();
    let mut pending = pending_field.write();
    if !pending.contains(id) {
        pending.push(id.clone());
    }
}

/// Show a toast and schedule its dismissal
pub fn store_push_toast(store: &AppStore, kind: ToastKind, message: impl Into<String>) {
    let id = {
        let next_field = store.next_toast_id();
        let mut next = next_field.write();
        *next += 1;
        *next
    };
    store.toasts().write().push(Toast {
        id,
        kind,
        message: message.into(),
    });

    let store = *store;
    spawn_local(async move {
        TimeoutFuture::new(TOAST_TTL_MS).await;
        store_dismiss_toast(&store, id);
    });
}

/// Remove a toast by ID
pub fn store_dismiss_toast(store: &AppStore, toast_id: u32) {
    store.toasts().write().retain(|toast| toast.id != toast_id);
}
