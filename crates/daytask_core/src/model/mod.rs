//! Domain model for calendar-scoped tasks.
//!
//! # Responsibility
//! - Define the canonical task record and its fixed category set.
//! - Guard the validation boundary between form input and the store.
//!
//! # Invariants
//! - A `DateKey` always holds a real calendar date in `YYYY-MM-DD` form.
//! - Every `Task` carries a stable `TaskId` assigned at creation.

pub mod date;
pub mod task;
