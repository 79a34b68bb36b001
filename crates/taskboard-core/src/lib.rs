//! Task Board Core
//!
//! Platform-independent half of the task board client:
//! - domain: Task, Column and the wire shapes they are validated from
//! - board / view: column-partitioned board and its search/sort projection
//! - engine: turns user intents into API calls and refetches server truth
//! - api: REST clients (HTTP and in-memory) behind `TaskApi` / `AuthApi`
//! - forms: login and signup validation

pub mod api;
pub mod board;
pub mod domain;
pub mod engine;
pub mod error;
pub mod forms;
pub mod view;

pub use board::Board;
pub use domain::{Column, Task, TaskDraft, TaskId};
pub use engine::BoardEngine;
pub use error::{ClientError, ClientResult, ErrorKind};
pub use view::{project, SortKey, SortOrder, ViewParams};
