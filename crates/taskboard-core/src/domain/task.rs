//! Task Entity
//!
//! A card on the board. The server assigns identity and creation time;
//! everything coming off the wire passes through `TaskRecord` and is
//! validated into a closed `Task` before the rest of the crate sees it.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::column::Column;
use crate::error::{ClientError, ClientResult};

/// Opaque server-assigned task identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(String);

impl TaskId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for TaskId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TaskId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

/// A persisted task
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    pub id: TaskId,
    /// Never blank
    pub title: String,
    pub description: String,
    pub status: Column,
    pub created_at: DateTime<Utc>,
}

impl Task {
    /// Copy of this task placed in another column
    pub fn with_status(&self, status: Column) -> Self {
        Self {
            status,
            ..self.clone()
        }
    }
}

/// Form input for creating or editing a task.
///
/// `id` is `None` for a task that has never been persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskDraft {
    pub id: Option<TaskId>,
    pub title: String,
    pub description: String,
    pub status: Option<Column>,
}

impl TaskDraft {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Default::default()
        }
    }

    pub fn with_status(mut self, status: Column) -> Self {
        self.status = Some(status);
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Draft pre-filled from an existing task (edit form)
    pub fn from_task(task: &Task) -> Self {
        Self {
            id: Some(task.id.clone()),
            title: task.title.clone(),
            description: task.description.clone(),
            status: Some(task.status),
        }
    }

    /// Title must contain something other than whitespace
    pub fn validate(&self) -> ClientResult<()> {
        if self.title.trim().is_empty() {
            return Err(ClientError::Validation("Title is required".to_string()));
        }
        Ok(())
    }
}

/// Outgoing task body for create (no id) and update (full task)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaskPayload {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<TaskId>,
    pub title: String,
    pub description: String,
    pub status: Column,
    #[serde(rename = "createdAt", skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl From<&Task> for TaskPayload {
    fn from(task: &Task) -> Self {
        Self {
            id: Some(task.id.clone()),
            title: task.title.clone(),
            description: task.description.clone(),
            status: task.status,
            created_at: Some(task.created_at),
        }
    }
}

impl From<&TaskDraft> for TaskPayload {
    fn from(draft: &TaskDraft) -> Self {
        Self {
            id: draft.id.clone(),
            title: draft.title.clone(),
            description: draft.description.clone(),
            status: draft.status.unwrap_or_default(),
            created_at: None,
        }
    }
}

/// Loose wire shape of a task as the server sends it
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TaskRecord {
    #[serde(rename = "_id", default)]
    pub mongo_id: Option<String>,
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(rename = "createdAt", default)]
    pub created_at: Option<String>,
}

impl TryFrom<TaskRecord> for Task {
    type Error = ClientError;

    fn try_from(record: TaskRecord) -> ClientResult<Self> {
        let id = record
            .mongo_id
            .or(record.id)
            .filter(|id| !id.is_empty())
            .ok_or_else(|| ClientError::Server("task record without id".to_string()))?;

        let title = record
            .title
            .filter(|t| !t.trim().is_empty())
            .ok_or_else(|| ClientError::Server(format!("task {} has no title", id)))?;

        let raw_created = record
            .created_at
            .ok_or_else(|| ClientError::Server(format!("task {} has no createdAt", id)))?;
        let created_at = DateTime::parse_from_rfc3339(&raw_created)
            .map_err(|e| ClientError::Server(format!("task {} has bad createdAt {:?}: {}", id, raw_created, e)))?
            .with_timezone(&Utc);

        Ok(Task {
            id: TaskId(id),
            title,
            description: record.description.unwrap_or_default(),
            status: Column::normalize_opt(record.status.as_deref()),
            created_at,
        })
    }
}
