//! The replay-driven binding interpreter.
//!
//! A block is an ordinary closure over a [`Scope`]. When it asks for the
//! value inside `fa` with [`Scope::bind`], the interpreter cannot return one
//! directly: `fa` may hold zero, one or many values. Instead the scope
//! records `flat_map(fa, resume)` as the block's result and returns a
//! [`Shift`], which the block hands back with `?`. `resume` runs the block
//! again from the top with a replay log answering every bind point it has
//! already passed, and the newly delivered value answering the next one.
//!
//! Consequences of replay:
//!
//! - the block runs once per bind point per path, so side effects outside the
//!   monad must happen after the last bind or be idempotent
//! - every bound value is cloned out of the log, hence `A: Clone`
//! - a block that takes different bind points on replay is a programming
//!   error and panics

use std::any::{Any, type_name};
use std::fmt;
use std::panic::{self, AssertUnwindSafe};
use std::rc::Rc;

use smallvec::SmallVec;

use super::context::{ExecutionContext, run_on};
use super::error::BindingError;
use crate::typeclass::{ApplicativeError, Kind, Monad, MonoidK, panic_message};

/// Bind points kept inline before the replay log spills to the heap.
const INLINE_STEPS: usize = 8;

type Replay = SmallVec<[Rc<dyn Any>; INLINE_STEPS]>;

/// Prefix of the panic raised when replay diverges. `binding_catch` lets
/// these through instead of converting them.
const NOT_DETERMINISTIC: &str = "binding block is not deterministic";

/// A short-circuit of a binding block.
///
/// Only a [`Scope`] creates one, and only the driver of that scope's block
/// consumes it. Return it from the block with `?` (or `return Err(shift)`);
/// dropping it leaves the block's result to whatever the scope recorded.
#[must_use = "a Shift must be returned from the binding block"]
#[derive(Debug, PartialEq, Eq)]
pub struct Shift {
    _private: (),
}

impl Shift {
    const fn new() -> Self {
        Self { _private: () }
    }
}

/// What a binding block returns: its value, or the shift that suspended it.
pub type Bound<B> = Result<B, Shift>;

trait Resume<F: Kind, B: 'static> {
    fn resume(self: Rc<Self>, replay: Replay) -> F::Of<B>;
}

type Recovery<F, B> = Box<dyn Fn(BindingError) -> <F as Kind>::Of<B>>;

struct Driver<M, F: Kind, B: 'static, Block> {
    monad: M,
    block: Block,
    recovery: Option<Recovery<F, B>>,
}

impl<M, F, B, Block> Resume<F, B> for Driver<M, F, B, Block>
where
    F: Kind,
    B: 'static,
    M: Monad<F>,
    Block: Fn(&mut Scope<M, F, B>) -> Bound<B> + 'static,
{
    fn resume(self: Rc<Self>, replay: Replay) -> F::Of<B> {
        if !replay.is_empty() {
            tracing::trace!(steps = replay.len(), "replaying binding block");
        }
        let mut scope = Scope {
            monad: self.monad.clone(),
            driver: Rc::clone(&self) as Rc<dyn Resume<F, B>>,
            replay,
            cursor: 0,
            pending: None,
        };
        let outcome = match &self.recovery {
            None => (self.block)(&mut scope),
            Some(recovery) => match panic::catch_unwind(AssertUnwindSafe(|| (self.block)(&mut scope))) {
                Ok(outcome) => outcome,
                Err(payload) => {
                    let error = match payload.downcast::<BindingError>() {
                        Ok(error) => *error,
                        Err(payload) => {
                            let message = panic_message(payload.as_ref());
                            if message.starts_with(NOT_DETERMINISTIC) {
                                panic::resume_unwind(payload);
                            }
                            BindingError::Panicked { message }
                        }
                    };
                    tracing::warn!(error = %error, "binding block failed");
                    return recovery(error);
                }
            },
        };
        match (outcome, scope.pending.take()) {
            (_, Some(suspended)) => suspended,
            (Ok(value), None) => self.monad.pure(value),
            (Err(_), None) => panic!("binding block returned a Shift its own scope did not raise"),
        }
    }
}

/// The handle a binding block uses to sequence steps.
///
/// `M` is the instance, `F` its witness and `B` the block's result type.
/// Which operations are available depends on what `M` supports:
///
/// | Operation                         | Requires              |
/// |-----------------------------------|-----------------------|
/// | [`bind`](Scope::bind)             | `M: Monad<F>`         |
/// | [`bind_in`](Scope::bind_in)       | `M: Monad<F>`         |
/// | [`raise`](Scope::raise)           | `M: ApplicativeError` |
/// | [`bind_result`](Scope::bind_result) | `M: ApplicativeError` |
/// | [`continue_if`](Scope::continue_if) | `M: MonoidK<F>`     |
pub struct Scope<M, F: Kind, B: 'static> {
    monad: M,
    driver: Rc<dyn Resume<F, B>>,
    replay: Replay,
    cursor: usize,
    pending: Option<F::Of<B>>,
}

impl<M: fmt::Debug, F: Kind, B: 'static> fmt::Debug for Scope<M, F, B> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Scope")
            .field("monad", &self.monad)
            .field("step", &self.cursor)
            .field("recorded", &self.replay.len())
            .field("suspended", &self.pending.is_some())
            .finish()
    }
}

impl<M, F, B> Scope<M, F, B>
where
    F: Kind,
    B: 'static,
    M: Monad<F>,
{
    /// The instance the block runs against.
    pub const fn monad(&self) -> &M {
        &self.monad
    }

    /// Number of bind points this run has passed.
    pub const fn step(&self) -> usize {
        self.cursor
    }

    fn replayed<A: Clone + 'static>(&mut self) -> Option<A> {
        let recorded = self.replay.get(self.cursor)?;
        let value = recorded.downcast_ref::<A>().cloned().unwrap_or_else(|| {
            panic!(
                "{NOT_DETERMINISTIC}: step {} was recorded with another type than {}",
                self.cursor,
                type_name::<A>()
            )
        });
        tracing::trace!(step = self.cursor, "answering bind point from replay log");
        self.cursor += 1;
        Some(value)
    }

    fn suspend(&mut self, suspended: F::Of<B>) -> Shift {
        if self.pending.is_none() {
            self.pending = Some(suspended);
        }
        Shift::new()
    }

    /// Takes the value out of `fa`, continuing the block once per value.
    ///
    /// # Errors
    ///
    /// Returns a [`Shift`] the first time a bind point is reached; the block
    /// must propagate it.
    ///
    /// # Panics
    ///
    /// Panics when replay reaches this bind point with a value of another
    /// type, which means the block is not deterministic.
    pub fn bind<A: Clone + 'static>(&mut self, fa: F::Of<A>) -> Bound<A> {
        if self.pending.is_some() {
            return Err(Shift::new());
        }
        if let Some(value) = self.replayed() {
            return Ok(value);
        }
        tracing::trace!(step = self.cursor, "suspending binding block");
        let driver = Rc::clone(&self.driver);
        let prefix = self.replay.clone();
        let suspended = self.monad.flat_map(fa, move |value: A| {
            let mut replay = prefix.clone();
            replay.push(Rc::new(value));
            Rc::clone(&driver).resume(replay)
        });
        Err(self.suspend(suspended))
    }

    /// Evaluates `thunk` on `context`, blocking until it finishes.
    ///
    /// The result is recorded, so replays of the block do not run `thunk`
    /// again.
    ///
    /// Blocking waits for the context to make progress. If the context needs
    /// the current thread to do so (a single-threaded executor driving this
    /// block, or a pool whose every worker is blocked here) this deadlocks.
    ///
    /// # Panics
    ///
    /// When `thunk` panics or the context drops it, unwinds with the
    /// [`BindingError`] as payload. `binding_catch` converts that payload
    /// into a raised error; plain `binding` lets it propagate.
    pub fn bind_in<C, A, Thunk>(&mut self, context: &C, thunk: Thunk) -> A
    where
        C: ExecutionContext + ?Sized,
        A: Clone + Send + 'static,
        Thunk: FnOnce() -> A + Send + 'static,
    {
        if let Some(value) = self.replayed() {
            return value;
        }
        match run_on(context, thunk) {
            Ok(value) => {
                self.replay.push(Rc::new(value.clone()));
                self.cursor += 1;
                value
            }
            Err(error) => panic::resume_unwind(Box::new(error)),
        }
    }

    /// Ends the block with `raise_error(error)`.
    pub fn raise<E: 'static>(&mut self, error: E) -> Shift
    where
        M: ApplicativeError<F, E>,
    {
        tracing::trace!(step = self.cursor, "raising from binding block");
        let raised = self.monad.raise_error(error);
        self.suspend(raised)
    }

    /// Unwraps `result`, raising its error.
    ///
    /// # Errors
    ///
    /// Returns a [`Shift`] when `result` is an `Err`.
    pub fn bind_result<A, E: 'static>(&mut self, result: Result<A, E>) -> Bound<A>
    where
        M: ApplicativeError<F, E>,
    {
        result.map_err(|error| self.raise(error))
    }

    /// Ends the current path with `empty_k` unless `condition` holds.
    ///
    /// # Errors
    ///
    /// Returns a [`Shift`] when `condition` is false.
    pub fn continue_if(&mut self, condition: bool) -> Bound<()>
    where
        M: MonoidK<F>,
    {
        if condition {
            Ok(())
        } else {
            let empty = self.monad.empty_k();
            Err(self.suspend(empty))
        }
    }
}

fn drive<M, F, B, Block>(monad: &M, block: Block, recovery: Option<Recovery<F, B>>) -> F::Of<B>
where
    F: Kind,
    B: 'static,
    M: Monad<F>,
    Block: Fn(&mut Scope<M, F, B>) -> Bound<B> + 'static,
{
    let driver = Rc::new(Driver {
        monad: monad.clone(),
        block,
        recovery,
    });
    driver.resume(Replay::new())
}

/// Runs `block` as a chain of `flat_map`s over `monad`.
///
/// Each `scope.bind(fa)?` continues the rest of the block once for every
/// value of `fa`; the block's `Ok` value is wrapped with `pure`. An N-step
/// block builds an N-deep `flat_map` chain.
///
/// # Panics
///
/// Panics when the block is not deterministic (see [`Scope::bind`]), and
/// re-raises failures of [`Scope::bind_in`].
///
/// # Examples
///
/// ```rust
/// use kindred::binding::binding;
/// use kindred::instances::VecInstance;
///
/// let sums: Vec<i32> = binding(&VecInstance, |scope| {
///     let x = scope.bind(vec![1, 2])?;
///     let y = scope.bind(vec![10, 20])?;
///     Ok(x + y)
/// });
/// assert_eq!(sums, vec![11, 21, 12, 22]);
/// ```
pub fn binding<M, F, B, Block>(monad: &M, block: Block) -> F::Of<B>
where
    F: Kind,
    B: 'static,
    M: Monad<F>,
    Block: Fn(&mut Scope<M, F, B>) -> Bound<B> + 'static,
{
    drive(monad, block, None)
}

/// Like [`binding`], converting failures of the block into raised errors.
///
/// `scope.raise(e)` and `scope.bind_result(Err(e))` end the block with
/// `raise_error(e)`. A panic inside the block, or a failed
/// [`bind_in`](Scope::bind_in), is turned into a [`BindingError`] and raised
/// as `on_failure(error)`. Each block intercepts only its own failures: a
/// nested `binding_catch` yields a value of the monad like any other step.
///
/// # Panics
///
/// A block that takes different bind points on replay still panics; that
/// panic is not converted.
///
/// # Examples
///
/// ```rust
/// use kindred::binding::binding_catch;
/// use kindred::instances::ResultInstance;
///
/// let checked: Result<i32, String> = binding_catch(&ResultInstance::new(), |error| error.to_string(), |scope| {
///     let x = scope.bind(Ok(4))?;
///     if x > 3 {
///         return Err(scope.raise(format!("{x} is too large")));
///     }
///     Ok(x)
/// });
/// assert_eq!(checked, Err("4 is too large".to_string()));
/// ```
pub fn binding_catch<M, F, E, B, OnFailure, Block>(monad: &M, on_failure: OnFailure, block: Block) -> F::Of<B>
where
    F: Kind,
    E: 'static,
    B: 'static,
    M: Monad<F> + ApplicativeError<F, E>,
    OnFailure: Fn(BindingError) -> E + 'static,
    Block: Fn(&mut Scope<M, F, B>) -> Bound<B> + 'static,
{
    let raising = monad.clone();
    let recovery: Recovery<F, B> = Box::new(move |error| raising.raise_error(on_failure(error)));
    drive(monad, block, Some(recovery))
}

/// Like [`binding`], for instances with an empty value, where
/// [`continue_if`](Scope::continue_if) filters paths.
///
/// # Examples
///
/// ```rust
/// use kindred::binding::binding_filter;
/// use kindred::instances::VecInstance;
///
/// let pairs: Vec<(i32, i32)> = binding_filter(&VecInstance, |scope| {
///     let x = scope.bind(vec![1, 2, 3])?;
///     let y = scope.bind(vec![1, 2, 3])?;
///     scope.continue_if(x < y)?;
///     Ok((x, y))
/// });
/// assert_eq!(pairs, vec![(1, 2), (1, 3), (2, 3)]);
/// ```
pub fn binding_filter<M, F, B, Block>(monad: &M, block: Block) -> F::Of<B>
where
    F: Kind,
    B: 'static,
    M: Monad<F> + MonoidK<F>,
    Block: Fn(&mut Scope<M, F, B>) -> Bound<B> + 'static,
{
    drive(monad, block, None)
}
