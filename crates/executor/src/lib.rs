//! Executors for batch section rendering.
//!
//! - [`RayonExecutor`]: work-stealing thread pool (feature: `rayon`)
//! - [`SyncExecutor`]: sequential, re-exported from folio-traits
//!
//! ```ignore
//! use folio_executor::ExecutorImpl;
//! use folio_traits::Executor;
//!
//! let executor = ExecutorImpl::default();
//! let fragments = executor.execute_all(sections, move |s| engine.render_body(&s));
//! ```

#[cfg(feature = "rayon")]
mod rayon_executor;

#[cfg(feature = "rayon")]
pub use rayon_executor::RayonExecutor;

pub use folio_traits::{Executor, SyncExecutor};

/// Names an executor kind, e.g. from configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExecutorKind {
    Sync,
    Rayon,
}

/// A type-erased executor.
///
/// `Executor` has generic methods and cannot be a trait object, so the engine
/// stores this enum and delegates.
#[derive(Clone, Debug)]
pub enum ExecutorImpl {
    Sync(SyncExecutor),

    #[cfg(feature = "rayon")]
    Rayon(RayonExecutor),
}

impl ExecutorImpl {
    /// Builds the requested executor. Asking for rayon without the `rayon`
    /// feature falls back to sequential execution.
    pub fn from_kind(kind: ExecutorKind) -> Self {
        match kind {
            ExecutorKind::Sync => ExecutorImpl::Sync(SyncExecutor::new()),
            #[cfg(feature = "rayon")]
            ExecutorKind::Rayon => ExecutorImpl::Rayon(RayonExecutor::new()),
            #[cfg(not(feature = "rayon"))]
            ExecutorKind::Rayon => ExecutorImpl::Sync(SyncExecutor::new()),
        }
    }
}

impl Executor for ExecutorImpl {
    fn execute_all<T, R, F>(&self, items: Vec<T>, f: F) -> Vec<R>
    where
        T: Send + 'static,
        R: Send + 'static,
        F: Fn(T) -> R + Send + Sync + Clone + 'static,
    {
        match self {
            ExecutorImpl::Sync(exec) => exec.execute_all(items, f),
            #[cfg(feature = "rayon")]
            ExecutorImpl::Rayon(exec) => exec.execute_all(items, f),
        }
    }

    fn name(&self) -> &'static str {
        match self {
            ExecutorImpl::Sync(exec) => exec.name(),
            #[cfg(feature = "rayon")]
            ExecutorImpl::Rayon(exec) => exec.name(),
        }
    }
}

impl Default for ExecutorImpl {
    fn default() -> Self {
        #[cfg(feature = "rayon")]
        {
            ExecutorImpl::Rayon(RayonExecutor::new())
        }
        #[cfg(not(feature = "rayon"))]
        {
            ExecutorImpl::Sync(SyncExecutor::new())
        }
    }
}
