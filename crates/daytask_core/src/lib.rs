//! Core domain logic for DayTask.
//! This crate is the single source of truth for business invariants.

pub mod chart;
pub mod logging;
pub mod model;
pub mod store;

pub use chart::{aggregate, CategorySlice};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::date::{DateKey, DateKeyError};
pub use model::task::{Category, Task, TaskDraft, TaskId, TaskValidationError};
pub use store::task_store::{Applied, Command, TaskStore};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
