//! Board Reconciliation Engine
//!
//! Turns user intents (move, create, update, delete) into API calls and keeps
//! the board at the best-known server state. Every successful mutation is
//! followed by a full refetch; nothing is merged locally. A failed call
//! leaves the board at its last confirmed state.
//!
//! Mutations are not serialized against each other. Whichever refetch
//! resolves last wins.

use std::collections::HashSet;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError, RwLock, RwLockReadGuard};

use crate::api::TaskApi;
use crate::board::Board;
use crate::domain::{Column, Task, TaskDraft, TaskId, TaskPayload};
use crate::error::{ClientError, ClientResult};
use crate::view::{self, ViewParams};

/// Owns the board; presentation only ever sees snapshots and projections.
///
/// Locks are never held across an `.await`.
pub struct BoardEngine<A> {
    api: A,
    board: RwLock<Board>,
    revision: AtomicU64,
    pending: Mutex<HashSet<TaskId>>,
}

/// Marks a task as in flight until dropped
struct PendingGuard<'a> {
    pending: &'a Mutex<HashSet<TaskId>>,
    id: TaskId,
}

impl<'a> PendingGuard<'a> {
    fn new(pending: &'a Mutex<HashSet<TaskId>>, id: &TaskId) -> Self {
        pending
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(id.clone());
        Self {
            pending,
            id: id.clone(),
        }
    }
}

impl Drop for PendingGuard<'_> {
    fn drop(&mut self) {
        self.pending
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(&self.id);
    }
}

impl<A: TaskApi> BoardEngine<A> {
    pub fn new(api: A) -> Self {
        Self {
            api,
            board: RwLock::new(Board::new()),
            revision: AtomicU64::new(0),
            pending: Mutex::new(HashSet::new()),
        }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    fn read(&self) -> RwLockReadGuard<'_, Board> {
        self.board.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn pending(&self) -> MutexGuard<'_, HashSet<TaskId>> {
        self.pending.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Snapshot of the last confirmed board
    pub fn board(&self) -> Board {
        self.read().clone()
    }

    /// Filtered/sorted view of the last confirmed board
    pub fn project(&self, view: &ViewParams) -> Board {
        view::project(&self.read(), view)
    }

    /// Bumped on every wholesale board replacement
    pub fn revision(&self) -> u64 {
        self.revision.load(Ordering::SeqCst)
    }

    /// True while a move, update or delete for `id` is in flight
    pub fn is_pending(&self, id: &TaskId) -> bool {
        self.pending().contains(id)
    }

    pub fn pending_ids(&self) -> Vec<TaskId> {
        let mut ids: Vec<TaskId> = self.pending().iter().cloned().collect();
        ids.sort();
        ids
    }

    /// Swap in a board built from server truth
    fn adopt(&self, tasks: Vec<Task>) {
        let fresh = Board::from_tasks(tasks);
        *self.board.write().unwrap_or_else(PoisonError::into_inner) = fresh;
        self.revision.fetch_add(1, Ordering::SeqCst);
    }

    /// Fetch the full task list and replace the board.
    /// On failure the board is left as it was.
    pub async fn refresh(&self) -> ClientResult<()> {
        match self.api.list().await {
            Ok(tasks) => {
                tracing::debug!(count = tasks.len(), "board refreshed");
                self.adopt(tasks);
                Ok(())
            }
            Err(err) => {
                tracing::warn!(error = %err, "failed to fetch tasks");
                Err(err)
            }
        }
    }

    /// Reassign a task to `target`. The board only changes once the server
    /// confirms and the refetch lands.
    pub async fn move_task(&self, id: &TaskId, target: Column) -> ClientResult<()> {
        let task = self
            .read()
            .find(id)
            .cloned()
            .ok_or_else(|| ClientError::TaskNotFound(id.clone()))?;
        tracing::debug!(task_id = %id, from = %task.status, to = %target, "moving task");

        let moved = task.with_status(target);
        {
            let _pending = PendingGuard::new(&self.pending, id);
            if let Err(err) = self.api.update(id, &TaskPayload::from(&moved)).await {
                tracing::warn!(task_id = %id, error = %err, "failed to move task");
                return Err(err);
            }
        }
        self.refresh().await
    }

    /// Persist a new task. Blank titles are rejected before any call.
    pub async fn create_task(&self, draft: TaskDraft) -> ClientResult<Task> {
        draft.validate()?;
        let payload = TaskPayload {
            id: None,
            ..TaskPayload::from(&draft)
        };
        tracing::debug!(title = %payload.title, status = %payload.status, "creating task");

        let created = self.api.create(&payload).await.map_err(|err| {
            tracing::warn!(error = %err, "failed to create task");
            err
        })?;
        self.refresh().await?;
        Ok(created)
    }

    /// Replace an existing task. Drafts without an id must go through
    /// `create_task`.
    pub async fn update_task(&self, draft: TaskDraft) -> ClientResult<Task> {
        let id = draft
            .id
            .clone()
            .ok_or_else(|| ClientError::Validation("task has no id; create it instead".to_string()))?;
        draft.validate()?;

        let payload = TaskPayload {
            created_at: self.read().find(&id).map(|t| t.created_at),
            ..TaskPayload::from(&draft)
        };
        tracing::debug!(task_id = %id, "updating task");

        let updated = {
            let _pending = PendingGuard::new(&self.pending, &id);
            self.api.update(&id, &payload).await.map_err(|err| {
                tracing::warn!(task_id = %id, error = %err, "failed to update task");
                err
            })?
        };
        self.refresh().await?;
        Ok(updated)
    }

    /// Create or update depending on whether the draft was persisted
    pub async fn save_task(&self, draft: TaskDraft) -> ClientResult<Task> {
        if draft.id.is_some() {
            self.update_task(draft).await
        } else {
            self.create_task(draft).await
        }
    }

    pub async fn delete_task(&self, id: &TaskId) -> ClientResult<()> {
        tracing::debug!(task_id = %id, "deleting task");
        {
            let _pending = PendingGuard::new(&self.pending, id);
            if let Err(err) = self.api.delete(id).await {
                tracing::warn!(task_id = %id, error = %err, "failed to delete task");
                return Err(err);
            }
        }
        self.refresh().await
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;
    use crate::api::{ApiOp, MemoryTaskApi};
    use crate::error::ErrorKind;

    fn engine() -> BoardEngine<MemoryTaskApi> {
        BoardEngine::new(MemoryTaskApi::new())
    }

    fn titles(board: &Board, column: Column) -> Vec<String> {
        board.column(column).iter().map(|t| t.title.clone()).collect()
    }

    #[tokio::test]
    async fn test_create_move_delete_scenario() {
        let engine = engine();
        engine.refresh().await.unwrap();
        assert!(engine.board().is_empty());

        let created = engine
            .create_task(TaskDraft::new("Write spec").with_status(Column::ToDo))
            .await
            .unwrap();
        assert_eq!(titles(&engine.board(), Column::ToDo), vec!["Write spec"]);

        engine.move_task(&created.id, Column::Done).await.unwrap();
        let board = engine.board();
        assert!(board.column(Column::ToDo).is_empty());
        assert_eq!(titles(&board, Column::Done), vec!["Write spec"]);

        engine.delete_task(&created.id).await.unwrap();
        assert!(engine.board().column(Column::Done).is_empty());
        assert!(engine.board().is_empty());
    }

    #[tokio::test]
    async fn test_create_defaults_to_first_column() {
        let engine = engine();
        engine.create_task(TaskDraft::new("A")).await.unwrap();

        let board = engine.board();
        assert_eq!(board.len(), 1);
        assert_eq!(titles(&board, Column::ToDo), vec!["A"]);
    }

    #[tokio::test]
    async fn test_create_blank_title_makes_no_call() {
        let engine = engine();
        let err = engine.create_task(TaskDraft::new("")).await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Validation);
        assert_eq!(engine.api().total_calls(), 0);
    }

    #[tokio::test]
    async fn test_move_same_column_is_idempotent() {
        let engine = engine();
        let task = engine.create_task(TaskDraft::new("A")).await.unwrap();

        engine.move_task(&task.id, Column::InProgress).await.unwrap();
        let once = engine.board();
        engine.move_task(&task.id, Column::InProgress).await.unwrap();
        assert_eq!(engine.board(), once);
    }

    #[tokio::test]
    async fn test_move_failure_leaves_board_unchanged() {
        let engine = engine();
        let task = engine.create_task(TaskDraft::new("A")).await.unwrap();
        let before = engine.board();
        let lists_before = engine.api().calls(ApiOp::List);

        engine
            .api()
            .fail_next(ApiOp::Update, ClientError::Server("HTTP 500: boom".to_string()));
        let err = engine.move_task(&task.id, Column::Done).await.unwrap_err();

        assert_eq!(err, ClientError::Server("HTTP 500: boom".to_string()));
        assert_eq!(engine.board(), before);
        assert_eq!(engine.api().calls(ApiOp::List), lists_before);
        assert!(!engine.is_pending(&task.id));
    }

    #[tokio::test]
    async fn test_create_failure_leaves_board_unchanged() {
        let engine = engine();
        engine.create_task(TaskDraft::new("A")).await.unwrap();
        let before = engine.board();
        let revision = engine.revision();
        let lists_before = engine.api().calls(ApiOp::List);

        engine
            .api()
            .fail_next(ApiOp::Create, ClientError::Server("HTTP 500: insert failed".to_string()));
        let err = engine.create_task(TaskDraft::new("B")).await.unwrap_err();

        assert_eq!(err, ClientError::Server("HTTP 500: insert failed".to_string()));
        assert_eq!(engine.board(), before);
        assert_eq!(engine.revision(), revision);
        assert_eq!(engine.api().calls(ApiOp::List), lists_before);
        assert_eq!(engine.api().tasks().len(), 1);
    }

    #[tokio::test]
    async fn test_update_failure_leaves_board_unchanged() {
        let engine = engine();
        let task = engine.create_task(TaskDraft::new("A")).await.unwrap();
        let before = engine.board();
        let revision = engine.revision();
        let lists_before = engine.api().calls(ApiOp::List);

        engine
            .api()
            .fail_next(ApiOp::Update, ClientError::Server("HTTP 500: write failed".to_string()));
        let mut draft = TaskDraft::from_task(&task);
        draft.title = "B".to_string();
        let err = engine.update_task(draft).await.unwrap_err();

        assert_eq!(err, ClientError::Server("HTTP 500: write failed".to_string()));
        assert_eq!(engine.board(), before);
        assert_eq!(engine.revision(), revision);
        assert_eq!(engine.api().calls(ApiOp::List), lists_before);
        assert!(!engine.is_pending(&task.id));
        assert_eq!(engine.api().tasks()[0].title, "A");
    }

    #[tokio::test]
    async fn test_move_unknown_task() {
        let engine = engine();
        let err = engine
            .move_task(&TaskId::new("missing"), Column::Done)
            .await
            .unwrap_err();
        assert_eq!(err, ClientError::TaskNotFound(TaskId::new("missing")));
        assert_eq!(engine.api().total_calls(), 0);
    }

    #[tokio::test]
    async fn test_update_requires_id() {
        let engine = engine();
        let err = engine.update_task(TaskDraft::new("A")).await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Validation);
        assert_eq!(engine.api().total_calls(), 0);
    }

    #[tokio::test]
    async fn test_update_edits_fields() {
        let engine = engine();
        let task = engine.create_task(TaskDraft::new("A")).await.unwrap();

        let mut draft = TaskDraft::from_task(&task);
        draft.title = "B".to_string();
        draft.description = "details".to_string();
        engine.update_task(draft).await.unwrap();

        let stored = engine.board().find(&task.id).cloned().unwrap();
        assert_eq!(stored.title, "B");
        assert_eq!(stored.description, "details");
        assert_eq!(stored.created_at, task.created_at);
    }

    #[tokio::test]
    async fn test_save_dispatches_on_id() {
        let engine = engine();
        let created = engine.save_task(TaskDraft::new("A")).await.unwrap();
        assert_eq!(engine.api().calls(ApiOp::Create), 1);

        let draft = TaskDraft::from_task(&created).with_status(Column::Done);
        engine.save_task(draft).await.unwrap();
        assert_eq!(engine.api().calls(ApiOp::Update), 1);
        assert_eq!(titles(&engine.board(), Column::Done), vec!["A"]);
    }

    #[tokio::test]
    async fn test_delete_failure_keeps_task() {
        let engine = engine();
        let task = engine.create_task(TaskDraft::new("A")).await.unwrap();

        engine
            .api()
            .fail_next(ApiOp::Delete, ClientError::Network("offline".to_string()));
        let err = engine.delete_task(&task.id).await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Network);
        assert!(engine.board().contains(&task.id));
    }

    #[tokio::test]
    async fn test_failed_refetch_keeps_last_confirmed_board() {
        let engine = engine();
        engine.refresh().await.unwrap();
        let revision = engine.revision();

        engine
            .api()
            .fail_next(ApiOp::List, ClientError::Network("offline".to_string()));
        let err = engine.create_task(TaskDraft::new("A")).await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Network);
        assert!(engine.board().is_empty());
        assert_eq!(engine.revision(), revision);

        // the server did store it; the next refresh adopts it
        engine.refresh().await.unwrap();
        assert_eq!(titles(&engine.board(), Column::ToDo), vec!["A"]);
    }

    #[tokio::test]
    async fn test_auth_error_propagates() {
        let engine = engine();
        engine
            .api()
            .fail_next(ApiOp::List, ClientError::from_status(401, "jwt expired"));
        let err = engine.refresh().await.unwrap_err();
        assert!(err.is_auth());
    }

    #[tokio::test]
    async fn test_project_through_engine() {
        let engine = engine();
        engine.create_task(TaskDraft::new("Alpha")).await.unwrap();
        engine.create_task(TaskDraft::new("beta")).await.unwrap();

        let view = ViewParams {
            search: "ALP".to_string(),
            ..Default::default()
        };
        assert_eq!(titles(&engine.project(&view), Column::ToDo), vec!["Alpha"]);
        assert_eq!(engine.board().len(), 2);
    }

    #[test]
    fn test_pending_guard_lifecycle() {
        let engine = engine();
        let id = TaskId::new("t1");
        {
            let _guard = PendingGuard::new(&engine.pending, &id);
            assert!(engine.is_pending(&id));
            assert_eq!(engine.pending_ids(), vec![id.clone()]);
        }
        assert!(!engine.is_pending(&id));
    }
}
