//! Derived category breakdown for chart rendering.
//!
//! # Responsibility
//! - Flatten the whole store into per-category counts, optionally filtered.
//!
//! # Invariants
//! - Output order is fixed to `Category::ALL` declaration order.
//! - Categories with a zero count after filtering never appear.
//! - Aggregation is pure: it reads the store and produces a fresh vec.

use crate::model::task::Category;
use crate::store::task_store::TaskStore;
use serde::{Deserialize, Serialize};

/// One chart segment: a category and how many tasks fall into it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategorySlice {
    pub category: Category,
    pub count: usize,
}

/// Counts tasks per category across every day in the store.
///
/// With `filter` set, tasks of other categories are discarded first, so the
/// result degenerates to at most one slice. Dates play no role here; the
/// store is flattened wholesale.
///
/// Recomputing on every render is fine at this scale; an incremental count
/// index would only matter for much larger stores.
pub fn aggregate(store: &TaskStore, filter: Option<Category>) -> Vec<CategorySlice> {
    let mut counts = [0usize; Category::ALL.len()];

    for (_, tasks) in store.iter() {
        for task in tasks {
            if filter.is_some_and(|wanted| wanted != task.category) {
                continue;
            }
            counts[task.category as usize] += 1;
        }
    }

    Category::ALL
        .into_iter()
        .zip(counts)
        .filter(|(_, count)| *count > 0)
        .map(|(category, count)| CategorySlice { category, count })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::Category;

    #[test]
    fn category_discriminants_match_all_order() {
        for (position, category) in Category::ALL.into_iter().enumerate() {
            assert_eq!(category as usize, position);
        }
    }
}
