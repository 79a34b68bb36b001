//! Board
//!
//! Tasks partitioned by column. A board is only ever rebuilt wholesale from a
//! flat task list; derived views come from `view::project`.

use std::collections::{BTreeMap, HashSet};

use crate::domain::{Column, Task, TaskId};

/// Column -> ordered tasks. Every column is always present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    columns: BTreeMap<Column, Vec<Task>>,
}

impl Default for Board {
    fn default() -> Self {
        Self {
            columns: Column::ALL.into_iter().map(|c| (c, Vec::new())).collect(),
        }
    }
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_tasks(tasks: impl IntoIterator<Item = Task>) -> Self {
        let mut board = Self::default();
        board.replace_all(tasks);
        board
    }

    /// Rebuild from a flat list, grouping by status.
    ///
    /// Server order is kept within a column. A repeated id keeps its first
    /// occurrence so an id never lives in two columns.
    pub fn replace_all(&mut self, tasks: impl IntoIterator<Item = Task>) {
        let mut columns: BTreeMap<Column, Vec<Task>> =
            Column::ALL.into_iter().map(|c| (c, Vec::new())).collect();
        let mut seen = HashSet::new();

        for task in tasks {
            if !seen.insert(task.id.clone()) {
                tracing::warn!(task_id = %task.id, "duplicate task id in listing, keeping first");
                continue;
            }
            columns.entry(task.status).or_default().push(task);
        }

        self.columns = columns;
    }

    /// Tasks in one column, in board order
    pub fn column(&self, column: Column) -> &[Task] {
        self.columns.get(&column).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Columns in display order
    pub fn iter(&self) -> impl Iterator<Item = (Column, &[Task])> {
        self.columns.iter().map(|(c, tasks)| (*c, tasks.as_slice()))
    }

    /// First match across columns in display order
    pub fn find(&self, id: &TaskId) -> Option<&Task> {
        self.columns.values().flatten().find(|task| &task.id == id)
    }

    pub fn contains(&self, id: &TaskId) -> bool {
        self.find(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.columns.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Build a board from already-grouped columns (used by projections)
    pub(crate) fn from_columns(columns: BTreeMap<Column, Vec<Task>>) -> Self {
        let mut board = Self::default();
        board.columns.extend(columns);
        board
    }
}
