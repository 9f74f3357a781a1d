//! Execution contexts for [`Scope::bind_in`](super::Scope::bind_in).
//!
//! An [`ExecutionContext`] runs a boxed task somewhere: inline, on a fresh
//! thread, on the global tokio runtime, or on a rayon pool. The binding
//! interpreter blocks the driving thread until the task reports back.

use std::panic::{self, AssertUnwindSafe};

use super::error::BindingError;
use super::latch::{Outcome, latch};
use crate::typeclass::panic_message;

/// A unit of work handed to an execution context.
pub type Task = Box<dyn FnOnce() + Send + 'static>;

/// Somewhere a task can run.
///
/// Implementations must either run the task or drop it; a dropped task is
/// reported to the waiting side as [`BindingError::ContextDropped`].
pub trait ExecutionContext {
    /// Name used in errors and log events.
    fn name(&self) -> &str;

    /// Runs `task`, now or later, on this context.
    fn execute(&self, task: Task);
}

/// Runs `thunk` on `context` and blocks until it finishes.
///
/// # Errors
///
/// Returns [`BindingError::ContextPanicked`] when `thunk` panics and
/// [`BindingError::ContextDropped`] when the context discards the task.
pub fn run_on<C, A, Thunk>(context: &C, thunk: Thunk) -> Result<A, BindingError>
where
    C: ExecutionContext + ?Sized,
    A: Send + 'static,
    Thunk: FnOnce() -> A + Send + 'static,
{
    let (latch, completion) = latch();
    tracing::debug!(context = context.name(), "dispatching bind_in task");
    context.execute(Box::new(move || match panic::catch_unwind(AssertUnwindSafe(thunk)) {
        Ok(value) => completion.complete(value),
        Err(payload) => completion.panicked(panic_message(payload.as_ref())),
    }));
    let result = match latch.wait() {
        Outcome::Completed(value) => Ok(value),
        Outcome::Panicked(message) => Err(BindingError::ContextPanicked {
            context: context.name().to_string(),
            message,
        }),
        Outcome::Pending | Outcome::Dropped => Err(BindingError::ContextDropped {
            context: context.name().to_string(),
        }),
    };
    match &result {
        Ok(_) => tracing::debug!(context = context.name(), "bind_in task completed"),
        Err(error) => tracing::warn!(context = context.name(), error = %error, "bind_in task failed"),
    }
    result
}

// =============================================================================
// Inline
// =============================================================================

/// Runs tasks immediately on the calling thread.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InlineContext;

impl ExecutionContext for InlineContext {
    fn name(&self) -> &str {
        "inline"
    }

    fn execute(&self, task: Task) {
        task();
    }
}

// =============================================================================
// Thread
// =============================================================================

/// Runs every task on a newly spawned OS thread.
///
/// # Examples
///
/// ```rust
/// use kindred::binding::{ExecutionContext, ThreadContext};
///
/// let context = ThreadContext::builder().name("io").stack_size(256 * 1024).build();
/// assert_eq!(context.name(), "io");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThreadContext {
    name: String,
    stack_size: Option<usize>,
}

impl ThreadContext {
    /// A context with the default name and stack size.
    #[must_use]
    pub fn new() -> Self {
        Self::builder().build()
    }

    /// Starts configuring a context.
    #[must_use]
    pub fn builder() -> ThreadContextBuilder {
        ThreadContextBuilder::default()
    }

    /// Stack size of spawned threads, if one was configured.
    #[must_use]
    pub const fn stack_size(&self) -> Option<usize> {
        self.stack_size
    }
}

impl Default for ThreadContext {
    fn default() -> Self {
        Self::new()
    }
}

impl ExecutionContext for ThreadContext {
    fn name(&self) -> &str {
        &self.name
    }

    fn execute(&self, task: Task) {
        let mut builder = std::thread::Builder::new().name(self.name.clone());
        if let Some(stack_size) = self.stack_size {
            builder = builder.stack_size(stack_size);
        }
        // A failed spawn drops the task, which the waiter sees as ContextDropped.
        if let Err(error) = builder.spawn(task) {
            tracing::warn!(context = %self.name, error = %error, "failed to spawn thread");
        }
    }
}

/// Builder for [`ThreadContext`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThreadContextBuilder {
    name: String,
    stack_size: Option<usize>,
}

impl Default for ThreadContextBuilder {
    fn default() -> Self {
        Self {
            name: "kindred-binding".to_string(),
            stack_size: None,
        }
    }
}

impl ThreadContextBuilder {
    /// Name given to spawned threads.
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Stack size in bytes of spawned threads.
    #[must_use]
    pub const fn stack_size(mut self, bytes: usize) -> Self {
        self.stack_size = Some(bytes);
        self
    }

    /// Finishes the configuration.
    #[must_use]
    pub fn build(self) -> ThreadContext {
        ThreadContext {
            name: self.name,
            stack_size: self.stack_size,
        }
    }
}

// =============================================================================
// Tokio
// =============================================================================

#[cfg(feature = "async")]
mod tokio_context {
    use std::sync::LazyLock;

    use tokio::runtime::{Builder, Handle, Runtime};

    use super::{ExecutionContext, Task};
    use crate::binding::BindingError;

    /// Lazily built multi-thread runtime with one worker per CPU core.
    ///
    /// Never dropped. A build failure is kept and reported on every access.
    static GLOBAL_RUNTIME: LazyLock<Result<Runtime, String>> = LazyLock::new(|| {
        Builder::new_multi_thread()
            .worker_threads(num_cpus::get())
            .thread_name("kindred-tokio")
            .enable_all()
            .build()
            .map_err(|error| error.to_string())
    });

    /// Runs tasks on tokio's blocking thread pool.
    ///
    /// Tasks go through `spawn_blocking`, so they never occupy an async
    /// worker. The driving thread still blocks: calling `bind_in` from inside
    /// an async task stalls that worker, and on a current-thread runtime it
    /// stalls the whole runtime.
    #[derive(Debug, Clone)]
    pub struct TokioContext {
        handle: Handle,
    }

    impl TokioContext {
        /// Uses the shared global runtime, creating it on first use.
        ///
        /// # Errors
        ///
        /// Returns [`BindingError::ContextUnavailable`] when the runtime could
        /// not be built.
        pub fn global() -> Result<Self, BindingError> {
            match &*GLOBAL_RUNTIME {
                Ok(runtime) => Ok(Self::from_handle(runtime.handle().clone())),
                Err(message) => Err(BindingError::ContextUnavailable {
                    context: "tokio".to_string(),
                    message: message.clone(),
                }),
            }
        }

        /// Uses the runtime the caller is running in, falling back to the
        /// global runtime outside of one.
        ///
        /// # Errors
        ///
        /// Same as [`TokioContext::global`].
        pub fn current() -> Result<Self, BindingError> {
            Handle::try_current().map_or_else(|_| Self::global(), |handle| Ok(Self::from_handle(handle)))
        }

        /// Uses an explicit runtime handle.
        #[must_use]
        pub const fn from_handle(handle: Handle) -> Self {
            Self { handle }
        }
    }

    impl ExecutionContext for TokioContext {
        fn name(&self) -> &str {
            "tokio"
        }

        fn execute(&self, task: Task) {
            // The JoinHandle is detached; completion is reported through the latch.
            drop(self.handle.spawn_blocking(task));
        }
    }
}

#[cfg(feature = "async")]
pub use tokio_context::TokioContext;

// =============================================================================
// Rayon
// =============================================================================

#[cfg(feature = "rayon")]
mod rayon_context {
    use std::sync::Arc;

    use rayon::ThreadPool;

    use super::{ExecutionContext, Task};

    /// Runs tasks on a rayon pool, the global one unless another is given.
    ///
    /// Calling `bind_in` from a worker of the same pool can deadlock once
    /// every worker is blocked waiting.
    #[derive(Debug, Clone, Default)]
    pub struct RayonContext {
        pool: Option<Arc<ThreadPool>>,
    }

    impl RayonContext {
        /// Uses rayon's global pool.
        #[must_use]
        pub const fn global() -> Self {
            Self { pool: None }
        }

        /// Uses a dedicated pool.
        #[must_use]
        pub const fn with_pool(pool: Arc<ThreadPool>) -> Self {
            Self { pool: Some(pool) }
        }
    }

    impl ExecutionContext for RayonContext {
        fn name(&self) -> &str {
            "rayon"
        }

        fn execute(&self, task: Task) {
            match &self.pool {
                Some(pool) => pool.spawn(task),
                None => rayon::spawn(task),
            }
        }
    }
}

#[cfg(feature = "rayon")]
pub use rayon_context::RayonContext;
