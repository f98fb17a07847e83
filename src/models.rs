//! Frontend Models
//!
//! Data structures matching the task API's records.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::UnknownColumn;

/// Server-assigned task identifier
pub type TaskId = u32;

/// Workflow column a task sits in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Column {
    #[default]
    Backlog,
    InProgress,
    Review,
    Done,
}

impl Column {
    /// Board order, left to right
    pub const ALL: [Column; 4] = [
        Column::Backlog,
        Column::InProgress,
        Column::Review,
        Column::Done,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Column::Backlog => "backlog",
            Column::InProgress => "in_progress",
            Column::Review => "review",
            Column::Done => "done",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Column::Backlog => "Backlog",
            Column::InProgress => "In Progress",
            Column::Review => "Review",
            Column::Done => "Done",
        }
    }

    /// Column background colour
    pub fn color(&self) -> &'static str {
        match self {
            Column::Backlog => "#f5f5f5",
            Column::InProgress => "#e3f2fd",
            Column::Review => "#fff3e0",
            Column::Done => "#e8f5e8",
        }
    }
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Column {
    type Err = UnknownColumn;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Column::ALL
            .into_iter()
            .find(|column| column.as_str() == s)
            .ok_or_else(|| UnknownColumn(s.to_string()))
    }
}

/// Task record (matches the API)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    pub title: String,
    pub description: String,
    pub column: Column,
}

impl Task {
    /// Whether `needle` (already lowercased) occurs in the title or description
    pub fn matches(&self, needle: &str) -> bool {
        needle.is_empty()
            || self.title.to_lowercase().contains(needle)
            || self.description.to_lowercase().contains(needle)
    }
}

/// Body for create (POST) and full update (PUT); the server assigns ids
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskDraft {
    pub title: String,
    pub description: String,
    pub column: Column,
}

/// Body for the column-only PATCH used by drag moves
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ColumnPatch {
    pub column: Column,
}
