//! API Layer
//!
//! Abstract seams to the remote task service and the account endpoints,
//! with an HTTP implementation and an in-memory one.
//!
//! Traits are `?Send` because browser futures are not `Send`.

mod config;
mod http;
mod memory;
pub mod routes;
mod session;

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::{Task, TaskId, TaskPayload};
use crate::error::ClientResult;

pub use config::{ApiConfig, API_URL_ENV, DEFAULT_API_URL};
pub use http::{HttpAuthApi, HttpTaskApi};
pub use memory::{ApiOp, MemoryTaskApi};
pub use session::SessionContext;

/// Remote task CRUD
#[async_trait(?Send)]
pub trait TaskApi {
    /// All tasks visible to the session
    async fn list(&self) -> ClientResult<Vec<Task>>;

    /// Persist a new task; any id in the payload is ignored
    async fn create(&self, task: &TaskPayload) -> ClientResult<Task>;

    /// Replace an existing task
    async fn update(&self, id: &TaskId, task: &TaskPayload) -> ClientResult<Task>;

    async fn delete(&self, id: &TaskId) -> ClientResult<()>;
}

/// Email/password login
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Account registration body
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Identity handed back by the external identity provider
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GoogleIdentity {
    #[serde(rename = "displayName", alias = "name", default)]
    pub name: String,
    pub email: String,
    pub uid: String,
}

/// Account endpoints; these run before a session exists
#[async_trait(?Send)]
pub trait AuthApi {
    /// Create an account, returning the server's confirmation message
    async fn register(&self, request: &RegisterRequest) -> ClientResult<String>;

    async fn login(&self, credentials: &Credentials) -> ClientResult<SessionContext>;

    /// Exchange a provider identity for a session
    async fn google_login(&self, identity: &GoogleIdentity) -> ClientResult<SessionContext>;
}
