//! View Parameters
//!
//! Search and sort settings for the dashboard and the pure projection that
//! applies them to a board.

use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::convert::Infallible;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::domain::Task;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortKey {
    #[default]
    CreatedAt,
    Title,
}

impl SortKey {
    pub const ALL: [SortKey; 2] = [SortKey::CreatedAt, SortKey::Title];

    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::CreatedAt => "createdAt",
            SortKey::Title => "title",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SortKey::CreatedAt => "Created At",
            SortKey::Title => "Title",
        }
    }

    fn compare(&self, a: &Task, b: &Task) -> Ordering {
        match self {
            SortKey::CreatedAt => a.created_at.cmp(&b.created_at),
            SortKey::Title => a.title.cmp(&b.title),
        }
    }
}

/// Unknown keys fall back to `createdAt`
impl FromStr for SortKey {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "title" => SortKey::Title,
            _ => SortKey::CreatedAt,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    pub fn toggle(self) -> Self {
        match self {
            SortOrder::Asc => SortOrder::Desc,
            SortOrder::Desc => SortOrder::Asc,
        }
    }

    pub fn arrow(&self) -> &'static str {
        match self {
            SortOrder::Asc => "↑",
            SortOrder::Desc => "↓",
        }
    }
}

/// Ephemeral dashboard view state
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewParams {
    /// Case-insensitive substring matched against titles
    pub search: String,
    pub sort_key: SortKey,
    pub order: SortOrder,
}

/// Filtered and sorted copy of `board`, column by column.
///
/// The sort is stable, so equal keys keep board order in both directions.
pub fn project(board: &Board, view: &ViewParams) -> Board {
    let needle = view.search.to_lowercase();

    let columns: BTreeMap<_, _> = board
        .iter()
        .map(|(column, tasks)| {
            let mut kept: Vec<Task> = tasks
                .iter()
                .filter(|t| needle.is_empty() || t.title.to_lowercase().contains(&needle))
                .cloned()
                .collect();
            kept.sort_by(|a, b| match view.order {
                SortOrder::Asc => view.sort_key.compare(a, b),
                SortOrder::Desc => view.sort_key.compare(b, a),
            });
            (column, kept)
        })
        .collect();

    Board::from_columns(columns)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::tests::make_task;
    use crate::domain::Column;

    #[test]
    fn test_sort_key_parse() {
        for key in SortKey::ALL {
            assert_eq!(key.as_str().parse::<SortKey>(), Ok(key));
        }
        assert_eq!("priority".parse::<SortKey>(), Ok(SortKey::CreatedAt));
    }

    fn ids(board: &Board, column: Column) -> Vec<&str> {
        board.column(column).iter().map(|t| t.id.as_str()).collect()
    }

    fn sample() -> Board {
        Board::from_tasks(vec![
            make_task("1", "Write spec", Column::ToDo, 3),
            make_task("2", "buy milk", Column::ToDo, 1),
            make_task("3", "Review SPEC", Column::Done, 2),
            make_task("4", "Deploy", Column::InProgress, 0),
            make_task("5", "Archive", Column::ToDo, 1),
        ])
    }

    #[test]
    fn test_empty_search_keeps_membership() {
        let board = sample();
        let projected = project(&board, &ViewParams::default());
        for column in Column::ALL {
            let mut before = ids(&board, column);
            let mut after = ids(&projected, column);
            before.sort();
            after.sort();
            assert_eq!(before, after);
        }
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let view = ViewParams {
            search: "SpEc".to_string(),
            ..Default::default()
        };
        let projected = project(&sample(), &view);
        assert_eq!(ids(&projected, Column::ToDo), vec!["1"]);
        assert_eq!(ids(&projected, Column::Done), vec!["3"]);
        assert!(projected.column(Column::InProgress).is_empty());
    }

    #[test]
    fn test_sort_created_at_ties_keep_board_order() {
        let projected = project(&sample(), &ViewParams::default());
        assert_eq!(ids(&projected, Column::ToDo), vec!["2", "5", "1"]);

        let desc = ViewParams {
            order: SortOrder::Desc,
            ..Default::default()
        };
        let projected = project(&sample(), &desc);
        assert_eq!(ids(&projected, Column::ToDo), vec!["1", "2", "5"]);
    }

    #[test]
    fn test_sort_by_title() {
        let view = ViewParams {
            sort_key: SortKey::Title,
            ..Default::default()
        };
        let projected = project(&sample(), &view);
        // byte order: uppercase before lowercase
        assert_eq!(ids(&projected, Column::ToDo), vec!["5", "1", "2"]);
    }

    #[test]
    fn test_project_does_not_mutate_input() {
        let board = sample();
        let snapshot = board.clone();
        let view = ViewParams {
            search: "x".to_string(),
            sort_key: SortKey::Title,
            order: SortOrder::Desc,
        };
        let _ = project(&board, &view);
        assert_eq!(board, snapshot);
        assert_eq!(project(&board, &view), project(&board, &view));
    }

    #[test]
    fn test_sort_order_toggle() {
        assert_eq!(SortOrder::Asc.toggle(), SortOrder::Desc);
        assert_eq!(SortOrder::Desc.toggle().toggle(), SortOrder::Desc);
    }
}
