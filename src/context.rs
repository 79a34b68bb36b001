//! Application Context
//!
//! Shared state provided via Leptos Context API.

use std::sync::Arc;

use leptos::prelude::*;
use taskboard_core::api::{ApiConfig, HttpAuthApi, HttpTaskApi, SessionContext};
use taskboard_core::BoardEngine;

use crate::session;

/// Engine for the signed-in session
pub type SharedEngine = Arc<BoardEngine<HttpTaskApi>>;

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Where the REST API lives
    config: StoredValue<ApiConfig>,
    /// Engine bound to the current session (None = signed out)
    pub engine: RwSignal<Option<SharedEngine>>,
}

impl AppContext {
    /// Restores a persisted session if there is one
    pub fn new(config: ApiConfig, restored: Option<SessionContext>) -> Self {
        let engine = restored.map(|session| build_engine(&config, session));
        Self {
            config: StoredValue::new(config),
            engine: RwSignal::new(engine),
        }
    }

    /// Account client (no credential attached)
    pub fn auth_api(&self) -> HttpAuthApi {
        HttpAuthApi::new(self.config.get_value())
    }

    /// Current engine without tracking
    pub fn current_engine(&self) -> Option<SharedEngine> {
        self.engine.get_untracked()
    }

    /// Persist the session and switch to the board
    pub fn login(&self, session: SessionContext) {
        session::save(&session);
        let engine = build_engine(&self.config.get_value(), session);
        self.engine.set(Some(engine));
    }

    /// Forget the session and go back to the login page
    pub fn logout(&self) {
        session::clear();
        self.engine.set(None);
    }
}

fn build_engine(config: &ApiConfig, session: SessionContext) -> SharedEngine {
    Arc::new(BoardEngine::new(HttpAuthApi::new(config.clone()).task_api(session)))
}

pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
