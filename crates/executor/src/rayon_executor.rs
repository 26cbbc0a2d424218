//! Rayon-backed parallel executor.

use folio_traits::Executor;
use rayon::prelude::*;

/// Runs work on rayon's global thread pool.
///
/// Indexed parallel iterators collect positionally, so results come back in
/// input order even though sections render concurrently. Configure the pool
/// size with `rayon::ThreadPoolBuilder::build_global` before first use.
#[derive(Debug, Clone, Default)]
pub struct RayonExecutor;

impl RayonExecutor {
    pub fn new() -> Self {
        Self
    }
}

impl Executor for RayonExecutor {
    fn execute_all<T, R, F>(&self, items: Vec<T>, f: F) -> Vec<R>
    where
        T: Send + 'static,
        R: Send + 'static,
        F: Fn(T) -> R + Send + Sync + Clone + 'static,
    {
        items.into_par_iter().map(f).collect()
    }

    fn name(&self) -> &'static str {
        "RayonExecutor"
    }
}
