//! Domain Layer
//!
//! Board entities and the wire shapes they are validated from.

mod column;
mod task;

pub use column::Column;
pub use task::{Task, TaskDraft, TaskId, TaskPayload, TaskRecord};
