//! Column Entity
//!
//! The fixed, closed set of status columns that partition the board.

use serde::{Deserialize, Serialize};

/// Status column. Declaration order is display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default)]
pub enum Column {
    /// First column, also the fallback for unknown statuses
    #[default]
    #[serde(rename = "To Do")]
    ToDo,
    #[serde(rename = "In Progress")]
    InProgress,
    #[serde(rename = "Done")]
    Done,
}

impl Column {
    /// All columns in display order
    pub const ALL: [Column; 3] = [Column::ToDo, Column::InProgress, Column::Done];

    pub fn as_str(&self) -> &'static str {
        match self {
            Column::ToDo => "To Do",
            Column::InProgress => "In Progress",
            Column::Done => "Done",
        }
    }

    /// Total mapping from a wire status to a column.
    /// Anything unrecognized lands in the first column.
    pub fn normalize(status: &str) -> Self {
        match status.trim() {
            "In Progress" => Column::InProgress,
            "Done" => Column::Done,
            _ => Column::ToDo,
        }
    }

    /// Same as `normalize`, treating an absent status as unrecognized
    pub fn normalize_opt(status: Option<&str>) -> Self {
        status.map(Self::normalize).unwrap_or_default()
    }
}

impl std::fmt::Display for Column {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_known() {
        for column in Column::ALL {
            assert_eq!(Column::normalize(column.as_str()), column);
        }
    }

    #[test]
    fn test_normalize_unknown_defaults_to_first() {
        assert_eq!(Column::normalize("Blocked"), Column::ToDo);
        assert_eq!(Column::normalize(""), Column::ToDo);
        assert_eq!(Column::normalize("done"), Column::ToDo);
        assert_eq!(Column::normalize_opt(None), Column::ToDo);
    }

    #[test]
    fn test_wire_names() {
        let json = serde_json::to_string(&Column::InProgress).unwrap();
        assert_eq!(json, r#""In Progress""#);
        let parsed: Column = serde_json::from_str(r#""Done""#).unwrap();
        assert_eq!(parsed, Column::Done);
    }
}
