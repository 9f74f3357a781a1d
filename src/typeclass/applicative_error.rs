//! `ApplicativeError` and `MonadError` - raising and handling errors in a context.
//!
//! Both traits are parameterized by the error type `E`, so one instance can
//! describe `Result<_, E>` for a specific `E`, `Option` with `E = ()`, or a
//! transformer whose error is carried by an inner context.
//!
//! # Laws
//!
//! ## Raise Handle Law
//!
//! ```text
//! handle_error_with(raise_error(e), handler) == handler(e)
//! ```
//!
//! ## Handle Pure Law
//!
//! ```text
//! handle_error_with(pure(a), handler) == pure(a)
//! ```
//!
//! ## Raise Short-Circuit Law (MonadError)
//!
//! ```text
//! flat_map(raise_error(e), f) == raise_error(e)
//! ```
//!
//! # Examples
//!
//! ```rust
//! use kindred::instances::ResultInstance;
//! use kindred::typeclass::{ApplicativeError, MonadError};
//!
//! let instance = ResultInstance::<String>::new();
//! let failed: Result<i32, String> = instance.raise_error("boom".to_string());
//! let recovered = instance.handle_error(failed, |error: String| i32::try_from(error.len()).unwrap_or(0));
//! assert_eq!(recovered, Ok(4));
//!
//! let checked = instance.ensure(Ok(3), || "too small".to_string(), |value: &i32| *value > 5);
//! assert_eq!(checked, Err("too small".to_string()));
//! ```

use std::any::Any;
use std::panic::{self, UnwindSafe};

use super::applicative::Applicative;
use super::kind::Kind;
use super::monad::Monad;

/// An applicative that can fail with an `E` and recover from it.
pub trait ApplicativeError<F: Kind, E: 'static>: Applicative<F> {
    /// A failed computation.
    fn raise_error<A: 'static>(&self, error: E) -> F::Of<A>;

    /// Replaces a failure with the computation produced by `handler`.
    ///
    /// Successful computations are returned unchanged.
    fn handle_error_with<A, Func>(&self, fa: F::Of<A>, handler: Func) -> F::Of<A>
    where
        A: 'static,
        Func: FnMut(E) -> F::Of<A> + 'static;

    /// Replaces a failure with the value produced by `handler`.
    fn handle_error<A, Func>(&self, fa: F::Of<A>, mut handler: Func) -> F::Of<A>
    where
        A: 'static,
        Func: FnMut(E) -> A + 'static,
    {
        let instance = self.clone();
        self.handle_error_with(fa, move |error: E| instance.pure(handler(error)))
    }

    /// Exposes the failure as a value.
    fn attempt<A: 'static>(&self, fa: F::Of<A>) -> F::Of<Result<A, E>> {
        let instance = self.clone();
        self.handle_error_with(self.map(fa, Ok::<A, E>), move |error: E| {
            instance.pure(Err(error))
        })
    }

    /// Recovers from the failures `partial` accepts; other failures are kept.
    fn recover<A, Func>(&self, fa: F::Of<A>, mut partial: Func) -> F::Of<A>
    where
        A: 'static,
        Func: FnMut(&E) -> Option<A> + 'static,
    {
        let instance = self.clone();
        self.handle_error_with(fa, move |error: E| match partial(&error) {
            Some(value) => instance.pure(value),
            None => instance.raise_error(error),
        })
    }

    /// Like [`recover`](ApplicativeError::recover), with a fallback computation.
    fn recover_with<A, Func>(&self, fa: F::Of<A>, mut partial: Func) -> F::Of<A>
    where
        A: 'static,
        Func: FnMut(&E) -> Option<F::Of<A>> + 'static,
    {
        let instance = self.clone();
        self.handle_error_with(fa, move |error: E| match partial(&error) {
            Some(fallback) => fallback,
            None => instance.raise_error(error),
        })
    }

    /// Lifts a `Result` into the context.
    fn from_result<A: 'static>(&self, result: Result<A, E>) -> F::Of<A> {
        match result {
            Ok(value) => self.pure(value),
            Err(error) => self.raise_error(error),
        }
    }

    /// Runs `thunk`, turning a panic into a raised error.
    ///
    /// `on_panic` receives the panic payload.
    fn catch_panic<A, Thunk, Convert>(&self, thunk: Thunk, on_panic: Convert) -> F::Of<A>
    where
        A: 'static,
        Thunk: FnOnce() -> A + UnwindSafe,
        Convert: FnOnce(Box<dyn Any + Send>) -> E,
    {
        match panic::catch_unwind(thunk) {
            Ok(value) => self.pure(value),
            Err(payload) => self.raise_error(on_panic(payload)),
        }
    }
}

/// A monad that can fail with an `E`.
///
/// Implemented for every instance that is both an [`ApplicativeError`] and a
/// [`Monad`] for the same witness; there is nothing extra to implement.
pub trait MonadError<F: Kind, E: 'static>: ApplicativeError<F, E> + Monad<F> {
    /// Fails with `error()` when `predicate` rejects the value.
    fn ensure<A, ErrorFunc, Predicate>(
        &self,
        fa: F::Of<A>,
        mut error: ErrorFunc,
        mut predicate: Predicate,
    ) -> F::Of<A>
    where
        A: 'static,
        ErrorFunc: FnMut() -> E + 'static,
        Predicate: FnMut(&A) -> bool + 'static,
    {
        let instance = self.clone();
        self.flat_map(fa, move |value: A| {
            if predicate(&value) {
                instance.pure(value)
            } else {
                instance.raise_error(error())
            }
        })
    }

    /// Moves an error held as a value back into the context.
    fn rethrow<A: 'static>(&self, fa: F::Of<Result<A, E>>) -> F::Of<A> {
        let instance = self.clone();
        self.flat_map(fa, move |result: Result<A, E>| instance.from_result(result))
    }
}

impl<F, E, T> MonadError<F, E> for T
where
    F: Kind,
    E: 'static,
    T: ApplicativeError<F, E> + Monad<F>,
{
}

/// Renders a panic payload as text, for error conversions.
pub fn panic_message(payload: &(dyn Any + Send)) -> String {
    payload
        .downcast_ref::<&str>()
        .map(|message| (*message).to_string())
        .or_else(|| payload.downcast_ref::<String>().cloned())
        .unwrap_or_else(|| "non-string panic payload".to_string())
}
