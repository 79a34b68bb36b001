//! Session Persistence
//!
//! Keeps the bearer token in `localStorage` so a reload stays signed in.

use taskboard_core::api::SessionContext;

const TOKEN_KEY: &str = "token";

fn storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

/// Session saved by a previous login, if any
pub fn load() -> Option<SessionContext> {
    storage()?
        .get_item(TOKEN_KEY)
        .ok()
        .flatten()
        .filter(|token| !token.is_empty())
        .map(SessionContext::new)
}

pub fn save(session: &SessionContext) {
    match storage() {
        Some(storage) => {
            if storage.set_item(TOKEN_KEY, session.token()).is_err() {
                tracing::warn!("could not persist session token");
            }
        }
        None => tracing::warn!("localStorage unavailable, session will not survive a reload"),
    }
}

pub fn clear() {
    if let Some(storage) = storage() {
        let _ = storage.remove_item(TOKEN_KEY);
    }
}
