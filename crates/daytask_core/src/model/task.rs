//! Task domain model and the form validation boundary.
//!
//! # Responsibility
//! - Define the canonical task record stored per calendar day.
//! - Keep the closed category set in one place for grouping and display.
//! - Validate raw form input before it may reach the store.
//!
//! # Invariants
//! - `id` is stable and never reused for another task.
//! - A `Task` can only be produced from raw input via `TaskDraft::validate`;
//!   the store itself never validates.

use crate::model::date::DateKey;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Stable identifier assigned to every task at creation.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type TaskId = Uuid;

/// Closed classification set shared by display color and chart grouping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Success,
    Warning,
    Issue,
    Info,
}

impl Category {
    /// Every category, in declaration order. Chart output follows this order.
    pub const ALL: [Category; 4] = [
        Category::Success,
        Category::Warning,
        Category::Issue,
        Category::Info,
    ];

    /// Canonical lowercase name, matching the serde wire form.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Warning => "warning",
            Self::Issue => "issue",
            Self::Info => "info",
        }
    }

    /// Parses a canonical category name. Unknown names yield `None`.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "success" => Some(Self::Success),
            "warning" => Some(Self::Warning),
            "issue" => Some(Self::Issue),
            "info" => Some(Self::Info),
            _ => None,
        }
    }

    /// Fixed display color for this category.
    pub fn color(self) -> &'static str {
        match self {
            Self::Success => "#52c41a",
            Self::Warning => "#faad14",
            Self::Issue => "#f5222d",
            Self::Info => "#1890ff",
        }
    }
}

impl Display for Category {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Canonical task record stored under one calendar day.
///
/// `date` duplicates the store key on purpose so a task stays self-describing
/// when handed to the presentation layer on its own.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Stable global ID used for edit/delete addressing.
    pub id: TaskId,
    /// Non-empty display title.
    pub title: String,
    /// Free-form detail text, empty when the form left it blank.
    pub description: String,
    pub category: Category,
    /// The day this task belongs to. The store keeps it equal to the key the
    /// task is filed under.
    pub date: DateKey,
}

impl Task {
    /// Creates a task with a generated stable ID.
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        category: Category,
        date: DateKey,
    ) -> Self {
        Self::with_id(Uuid::new_v4(), title, description, category, date)
    }

    /// Creates a task with a caller-provided stable ID.
    ///
    /// Used by import/test paths where identity already exists externally.
    pub fn with_id(
        id: TaskId,
        title: impl Into<String>,
        description: impl Into<String>,
        category: Category,
        date: DateKey,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            description: description.into(),
            category,
            date,
        }
    }
}

/// Raw form payload as the presentation layer collects it.
///
/// Nothing here is trusted; `validate` is the only path to a `Task`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskDraft {
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub category: String,
}

/// Field-level rejection reasons for task form input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskValidationError {
    /// Title is missing or whitespace-only.
    EmptyTitle,
    /// Category text is not a member of the closed set.
    UnknownCategory(String),
}

impl Display for TaskValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyTitle => write!(f, "title is required"),
            Self::UnknownCategory(value) => write!(
                f,
                "category `{value}` is not one of success|warning|issue|info"
            ),
        }
    }
}

impl Error for TaskValidationError {}

impl TaskDraft {
    /// Validates this draft for the given day and produces a stored-shape task.
    ///
    /// # Contract
    /// - Title is trimmed; an empty result rejects the draft.
    /// - Category must parse into the closed set.
    /// - On success the task receives a fresh stable ID.
    ///
    /// # Errors
    /// - `EmptyTitle` or `UnknownCategory`; the store is never touched.
    pub fn validate(&self, date: DateKey) -> Result<Task, TaskValidationError> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err(TaskValidationError::EmptyTitle);
        }

        let category_text = self.category.trim();
        let category = Category::parse(category_text)
            .ok_or_else(|| TaskValidationError::UnknownCategory(category_text.to_string()))?;

        Ok(Task::new(title, self.description.clone(), category, date))
    }
}
