//! Date-keyed task store and its reducer command surface.
//!
//! # Responsibility
//! - Provide add/edit/delete over ordered per-day task sequences.
//! - Resolve stable task IDs to positions for the public addressing mode.
//!
//! # Invariants
//! - Empty sequences are pruned immediately; no key maps to an empty vec.
//! - Within one day, tasks keep insertion order.
//! - Every stored task's `date` field equals the key it is filed under.
//! - Missing dates and stale indices are reported no-ops, never panics.

use crate::model::date::DateKey;
use crate::model::task::{Task, TaskId};
use log::warn;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Outcome of one store mutation.
///
/// Out-of-bounds and missing-date commands leave the state untouched; the
/// outcome tells the caller which way the command missed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Applied {
    /// The command changed the store.
    Applied,
    /// No sequence exists for the requested date.
    MissingDate,
    /// The date exists but the index or ID matched no slot.
    IndexOutOfRange,
}

impl Applied {
    pub fn is_applied(self) -> bool {
        matches!(self, Self::Applied)
    }
}

/// Replayable store command.
///
/// A command sequence applied to an empty store is deterministic and
/// independent of how the commands were batched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "op")]
pub enum Command {
    Add {
        date: DateKey,
        task: Task,
    },
    Delete {
        date: DateKey,
        index: usize,
    },
    Edit {
        date: DateKey,
        index: usize,
        task: Task,
    },
}

/// Ordered per-day task sequences, created empty at process start.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskStore {
    by_date: BTreeMap<DateKey, Vec<Task>>,
}

impl TaskStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Applies one command and reports whether it changed the store.
    pub fn apply(&mut self, command: Command) -> Applied {
        match command {
            Command::Add { date, task } => {
                self.add_task(date, task);
                Applied::Applied
            }
            Command::Delete { date, index } => self.delete_task(&date, index),
            Command::Edit { date, index, task } => self.edit_task(&date, index, task),
        }
    }

    /// Appends `task` to the sequence at `date`, creating it if absent.
    ///
    /// # Contract
    /// - Never fails; validation happened at the model boundary.
    /// - The task's `date` field is rewritten to the key it is filed under.
    /// - The task becomes the last element of the day's sequence.
    pub fn add_task(&mut self, date: DateKey, mut task: Task) {
        task.date = date.clone();
        self.by_date.entry(date).or_default().push(task);
    }

    /// Removes the element at `index` from the sequence at `date`.
    ///
    /// Missing date or stale index is a reported no-op. Emptying a day's
    /// sequence removes its key entirely.
    pub fn delete_task(&mut self, date: &DateKey, index: usize) -> Applied {
        let Some(sequence) = self.by_date.get_mut(date) else {
            warn!("event=task_delete module=store status=noop reason=missing_date date={date}");
            return Applied::MissingDate;
        };

        if index >= sequence.len() {
            warn!(
                "event=task_delete module=store status=noop reason=index_out_of_range \
                 date={date} index={index} len={}",
                sequence.len()
            );
            return Applied::IndexOutOfRange;
        }

        sequence.remove(index);
        if sequence.is_empty() {
            self.by_date.remove(date);
        }
        Applied::Applied
    }

    /// Replaces the element at `index` with `updated`, keeping length and key
    /// presence unchanged.
    ///
    /// The replacement's `date` field is rewritten to the key, and its slot
    /// position is preserved. Missing date or stale index is a reported no-op.
    pub fn edit_task(&mut self, date: &DateKey, index: usize, mut updated: Task) -> Applied {
        let Some(sequence) = self.by_date.get_mut(date) else {
            warn!("event=task_edit module=store status=noop reason=missing_date date={date}");
            return Applied::MissingDate;
        };

        let Some(slot) = sequence.get_mut(index) else {
            warn!(
                "event=task_edit module=store status=noop reason=index_out_of_range \
                 date={date} index={index} len={}",
                sequence.len()
            );
            return Applied::IndexOutOfRange;
        };

        updated.date = date.clone();
        *slot = updated;
        Applied::Applied
    }

    /// Deletes the task with stable ID `id` under `date`.
    ///
    /// Positions shift under mutation, so external callers should prefer this
    /// over `delete_task`. An unknown ID reports like a stale index.
    pub fn delete_task_by_id(&mut self, date: &DateKey, id: TaskId) -> Applied {
        match self.position_of(date, id) {
            Ok(index) => self.delete_task(date, index),
            Err(miss) => miss,
        }
    }

    /// Replaces the task with stable ID `id` under `date`.
    ///
    /// The replacement keeps the slot position; its `id` need not match `id`
    /// (re-categorizing edits produce a fresh draft in the original design).
    pub fn edit_task_by_id(&mut self, date: &DateKey, id: TaskId, updated: Task) -> Applied {
        match self.position_of(date, id) {
            Ok(index) => self.edit_task(date, index, updated),
            Err(miss) => miss,
        }
    }

    fn position_of(&self, date: &DateKey, id: TaskId) -> Result<usize, Applied> {
        let Some(sequence) = self.by_date.get(date) else {
            warn!("event=task_lookup module=store status=noop reason=missing_date date={date}");
            return Err(Applied::MissingDate);
        };
        sequence
            .iter()
            .position(|task| task.id == id)
            .ok_or_else(|| {
                warn!(
                    "event=task_lookup module=store status=noop reason=unknown_id \
                     date={date} id={id}"
                );
                Applied::IndexOutOfRange
            })
    }

    /// Returns the day's tasks in insertion order, empty for an absent key.
    pub fn tasks_for(&self, date: &DateKey) -> &[Task] {
        self.by_date.get(date).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Days with at least one task, in chronological order.
    pub fn dates(&self) -> impl Iterator<Item = &DateKey> {
        self.by_date.keys()
    }

    /// All `(day, tasks)` pairs in chronological order.
    pub fn iter(&self) -> impl Iterator<Item = (&DateKey, &[Task])> {
        self.by_date
            .iter()
            .map(|(date, tasks)| (date, tasks.as_slice()))
    }

    /// Total task count across all days.
    pub fn total_tasks(&self) -> usize {
        self.by_date.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.by_date.is_empty()
    }
}
