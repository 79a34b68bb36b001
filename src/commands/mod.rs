//! UI Commands
//!
//! Bridges from UI events to the engine and account clients, organized by
//! domain. Every outcome ends up as a toast.

mod auth;
mod board;
mod identity;

use taskboard_core::{ClientError, ErrorKind};

use crate::context::AppContext;
use crate::store::{store_push_toast, AppStore, ToastKind};

// Re-export all public items
pub use auth::*;
pub use board::*;

/// Turn a failed intent into a notification.
///
/// Auth failures also end the session; local errors show their own text,
/// everything else shows `fallback`.
pub(crate) fn report_error(ctx: AppContext, store: AppStore, err: ClientError, fallback: &str) {
    tracing::warn!(error = %err, "intent failed");
    let message = match &err {
        ClientError::TaskNotFound(_) => "That task is no longer on the board.".to_string(),
        _ if err.kind() == ErrorKind::Auth && ctx.current_engine().is_some() => {
            ctx.logout();
            "Your session has expired. Please log in again.".to_string()
        }
        _ => err.user_message().unwrap_or(fallback).to_string(),
    };
    store_push_toast(&store, ToastKind::Error, message);
}
