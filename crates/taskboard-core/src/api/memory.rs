//! In-Memory API Implementation
//!
//! Behaves like the REST service (assigns ids and creation times, 404s on
//! unknown ids) and records how often each call was made. A failure can be
//! queued for the next call of a given kind.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;
use chrono::{DateTime, Duration, TimeZone, Utc};

use super::TaskApi;
use crate::domain::{Task, TaskId, TaskPayload};
use crate::error::{ClientError, ClientResult};

/// Kind of remote call
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ApiOp {
    List,
    Create,
    Update,
    Delete,
}

struct MemoryState {
    tasks: Vec<Task>,
    next_id: u64,
    epoch: DateTime<Utc>,
    calls: HashMap<ApiOp, usize>,
    failures: HashMap<ApiOp, ClientError>,
}

pub struct MemoryTaskApi {
    state: Mutex<MemoryState>,
}

impl Default for MemoryTaskApi {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryTaskApi {
    pub fn new() -> Self {
        Self::with_tasks(Vec::new())
    }

    /// Start with tasks already stored server-side
    pub fn with_tasks(tasks: Vec<Task>) -> Self {
        Self {
            state: Mutex::new(MemoryState {
                next_id: tasks.len() as u64 + 1,
                tasks,
                epoch: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).single().unwrap_or_default(),
                calls: HashMap::new(),
                failures: HashMap::new(),
            }),
        }
    }

    fn lock(&self) -> MutexGuard<'_, MemoryState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Make the next call of `op` fail with `error` (once)
    pub fn fail_next(&self, op: ApiOp, error: ClientError) {
        self.lock().failures.insert(op, error);
    }

    pub fn calls(&self, op: ApiOp) -> usize {
        self.lock().calls.get(&op).copied().unwrap_or(0)
    }

    pub fn total_calls(&self) -> usize {
        self.lock().calls.values().sum()
    }

    /// Server-side contents, in storage order
    #[cfg(test)]
    pub fn tasks(&self) -> Vec<Task> {
        self.lock().tasks.clone()
    }

    /// Count the call and pop any queued failure
    fn enter(&self, op: ApiOp) -> ClientResult<MutexGuard<'_, MemoryState>> {
        let mut state = self.lock();
        *state.calls.entry(op).or_insert(0) += 1;
        match state.failures.remove(&op) {
            Some(err) => Err(err),
            None => Ok(state),
        }
    }
}

fn not_found(id: &TaskId) -> ClientError {
    ClientError::from_status(404, format!("task {} not found", id))
}

#[async_trait(?Send)]
impl TaskApi for MemoryTaskApi {
    async fn list(&self) -> ClientResult<Vec<Task>> {
        let state = self.enter(ApiOp::List)?;
        Ok(state.tasks.clone())
    }

    async fn create(&self, task: &TaskPayload) -> ClientResult<Task> {
        let mut state = self.enter(ApiOp::Create)?;
        let n = state.next_id;
        state.next_id += 1;

        let created = Task {
            id: TaskId::new(format!("task-{}", n)),
            title: task.title.clone(),
            description: task.description.clone(),
            status: task.status,
            created_at: state.epoch + Duration::minutes(n as i64),
        };
        state.tasks.push(created.clone());
        Ok(created)
    }

    async fn update(&self, id: &TaskId, task: &TaskPayload) -> ClientResult<Task> {
        let mut state = self.enter(ApiOp::Update)?;
        let stored = state
            .tasks
            .iter_mut()
            .find(|t| &t.id == id)
            .ok_or_else(|| not_found(id))?;

        stored.title = task.title.clone();
        stored.description = task.description.clone();
        stored.status = task.status;
        Ok(stored.clone())
    }

    async fn delete(&self, id: &TaskId) -> ClientResult<()> {
        let mut state = self.enter(ApiOp::Delete)?;
        let before = state.tasks.len();
        state.tasks.retain(|t| &t.id != id);
        if state.tasks.len() == before {
            return Err(not_found(id));
        }
        Ok(())
    }
}
