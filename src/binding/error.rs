//! Faults raised by the binding interpreter itself.

use thiserror::Error;

/// A failure of a binding block that is not a value of the monad's own
/// error type.
///
/// `binding_catch` hands these to its `on_failure` conversion, so they end up
/// as ordinary raised errors. Plain `binding` lets them unwind.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BindingError {
    /// The block panicked.
    #[error("binding block panicked: {message}")]
    Panicked {
        /// The rendered panic payload.
        message: String,
    },

    /// An execution context dropped a `bind_in` task without running it.
    #[error("execution context `{context}` dropped the task before completing it")]
    ContextDropped {
        /// Name of the context.
        context: String,
    },

    /// A `bind_in` task panicked on its execution context.
    #[error("task panicked on execution context `{context}`: {message}")]
    ContextPanicked {
        /// Name of the context.
        context: String,
        /// The rendered panic payload.
        message: String,
    },

    /// An execution context could not be created.
    #[error("execution context `{context}` is unavailable: {message}")]
    ContextUnavailable {
        /// Name of the context.
        context: String,
        /// Why it could not be created.
        message: String,
    },
}

impl BindingError {
    /// Name of the execution context involved, if any.
    #[must_use]
    pub fn context(&self) -> Option<&str> {
        match self {
            Self::Panicked { .. } => None,
            Self::ContextDropped { context }
            | Self::ContextPanicked { context, .. }
            | Self::ContextUnavailable { context, .. } => Some(context),
        }
    }
}
