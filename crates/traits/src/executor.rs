//! Executor trait for per-section batch work.
//!
//! Sections of a page are independent, so a batch render can fan out. The
//! contract every executor keeps is positional: result `i` belongs to item `i`,
//! whatever order the work actually finished in.

use std::fmt::Debug;

/// Runs a batch of work items, possibly in parallel.
pub trait Executor: Send + Sync + Debug {
    /// Apply `f` to every item. Results are returned in input order.
    fn execute_all<T, R, F>(&self, items: Vec<T>, f: F) -> Vec<R>
    where
        T: Send + 'static,
        R: Send + 'static,
        F: Fn(T) -> R + Send + Sync + Clone + 'static;

    fn name(&self) -> &'static str;
}

/// Sequential executor. Always available, no threads.
#[derive(Debug, Clone, Default)]
pub struct SyncExecutor;

impl SyncExecutor {
    pub fn new() -> Self {
        Self
    }
}

impl Executor for SyncExecutor {
    fn execute_all<T, R, F>(&self, items: Vec<T>, f: F) -> Vec<R>
    where
        T: Send + 'static,
        R: Send + 'static,
        F: Fn(T) -> R + Send + Sync + Clone + 'static,
    {
        items.into_iter().map(f).collect()
    }

    fn name(&self) -> &'static str {
        "SyncExecutor"
    }
}
