//! In-memory task store keyed by calendar day.
//!
//! # Responsibility
//! - Hold the per-day task sequences behind a replayable command surface.
//! - Keep UI concerns (selection, modal, filter drafts) out of core state.
//!
//! # Invariants
//! - A date key is present exactly while its sequence is non-empty.
//! - The store trusts its callers: validation happens at the model boundary,
//!   never here.

pub mod task_store;
