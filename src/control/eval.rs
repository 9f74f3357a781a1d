//! Lazy, stack-safe evaluation.
//!
//! `Eval<A>` describes how to produce an `A` without producing it yet. It is the
//! deferred accumulator behind [`Foldable::fold_right`](crate::typeclass::Foldable::fold_right)
//! and the lazy second operand of
//! [`Applicative::map2_eval`](crate::typeclass::Applicative::map2_eval).
//!
//! # Stack safety
//!
//! `flat_map` never calls anything. Binds are recorded on an explicit
//! continuation list and evaluated by a loop in [`Eval::value`], so both
//! left-nested chains (`e.flat_map(f).flat_map(g)...`) and right-nested chains
//! (`e.flat_map(|x| f(x).flat_map(...))`) run in constant stack space.
//!
//! # Examples
//!
//! ```rust
//! use kindred::control::Eval;
//!
//! let mut eval = Eval::now(0_u64);
//! for step in 0..100_000_u64 {
//!     eval = eval.map(move |total| total + step);
//! }
//! assert_eq!(eval.value(), 4_999_950_000);
//! ```
//!
//! ```rust
//! use kindred::control::Eval;
//! use std::cell::Cell;
//! use std::rc::Rc;
//!
//! let forced = Rc::new(Cell::new(false));
//! let flag = Rc::clone(&forced);
//! let eval = Eval::later(move || {
//!     flag.set(true);
//!     21
//! })
//! .map(|value| value * 2);
//!
//! assert!(!forced.get());
//! assert_eq!(eval.value(), 42);
//! assert!(forced.get());
//! ```

use std::any::Any;
use std::fmt;

use super::either::Either;

type Erased = Box<dyn Any>;
type Continuation = Box<dyn FnOnce(Erased) -> Eval<Erased>>;

/// A lazily evaluated computation producing an `A`.
///
/// An `Eval` is consumed by [`Eval::value`]; it is evaluated at most once.
///
/// # Laws
///
/// - **Left Identity**: `Eval::now(a).flat_map(f).value() == f(a).value()`
/// - **Right Identity**: `m.flat_map(Eval::now).value() == m.value()`
/// - **Associativity**: `m.flat_map(f).flat_map(g).value() == m.flat_map(|x| f(x).flat_map(g)).value()`
pub struct Eval<A> {
    state: EvalState<A>,
}

enum EvalState<A> {
    Now(A),
    Later(Box<dyn FnOnce() -> A>),
    Defer(Box<dyn FnOnce() -> Eval<A>>),
    Bind {
        source: Box<Eval<Erased>>,
        continuations: Vec<Continuation>,
    },
}

impl<A: 'static> Eval<A> {
    const fn from_state(state: EvalState<A>) -> Self {
        Self { state }
    }

    /// An already computed value.
    #[inline]
    pub const fn now(value: A) -> Self {
        Self::from_state(EvalState::Now(value))
    }

    /// A value computed by `thunk` when it is first needed.
    pub fn later<F>(thunk: F) -> Self
    where
        F: FnOnce() -> A + 'static,
    {
        Self::from_state(EvalState::Later(Box::new(thunk)))
    }

    /// An `Eval` whose construction itself is postponed.
    ///
    /// Recursive definitions should go through `defer` so that building the
    /// next step does not recurse on the call stack.
    pub fn defer<F>(thunk: F) -> Self
    where
        F: FnOnce() -> Self + 'static,
    {
        Self::from_state(EvalState::Defer(Box::new(thunk)))
    }

    /// Transforms the eventual value.
    pub fn map<B, F>(self, function: F) -> Eval<B>
    where
        B: 'static,
        F: FnOnce(A) -> B + 'static,
    {
        self.flat_map(move |value| Eval::now(function(value)))
    }

    /// Sequences a dependent lazy computation.
    pub fn flat_map<B, F>(self, function: F) -> Eval<B>
    where
        B: 'static,
        F: FnOnce(A) -> Eval<B> + 'static,
    {
        let continuation: Continuation =
            Box::new(move |value: Erased| function(downcast::<A>(value)).erase());

        match self.state {
            EvalState::Bind {
                source,
                mut continuations,
            } => {
                continuations.push(continuation);
                Eval::from_state(EvalState::Bind {
                    source,
                    continuations,
                })
            }
            state => Eval::from_state(EvalState::Bind {
                source: Box::new(Self::from_state(state).erase()),
                continuations: vec![continuation],
            }),
        }
    }

    /// Combines two lazy values. `other` is not forced before `self`.
    pub fn map2<B, C, F>(self, other: Eval<B>, function: F) -> Eval<C>
    where
        B: 'static,
        C: 'static,
        F: FnOnce(A, B) -> C + 'static,
    {
        self.flat_map(move |left| other.map(move |right| function(left, right)))
    }

    /// Runs `step` until it yields `Either::Right`, in constant stack space.
    pub fn tail_rec_m<S, F>(initial: S, mut step: F) -> Self
    where
        S: 'static,
        F: FnMut(S) -> Eval<Either<S, A>> + 'static,
    {
        Self::defer(move || {
            step(initial).flat_map(move |next| match next {
                Either::Left(state) => Self::tail_rec_m(state, step),
                Either::Right(value) => Self::now(value),
            })
        })
    }

    /// Forces the computation.
    pub fn value(self) -> A {
        let mut current = self;
        loop {
            match current.state {
                EvalState::Now(value) => return value,
                EvalState::Later(thunk) => return thunk(),
                EvalState::Defer(thunk) => current = thunk(),
                EvalState::Bind {
                    source,
                    mut continuations,
                } => {
                    continuations.reverse();
                    return downcast(evaluate(*source, continuations));
                }
            }
        }
    }

    fn erase(self) -> Eval<Erased> {
        match self.state {
            EvalState::Now(value) => Eval::now(Box::new(value) as Erased),
            EvalState::Later(thunk) => Eval::later(move || Box::new(thunk()) as Erased),
            EvalState::Defer(thunk) => Eval::defer(move || thunk().erase()),
            EvalState::Bind {
                source,
                continuations,
            } => Eval::from_state(EvalState::Bind {
                source,
                continuations,
            }),
        }
    }
}

impl Eval<()> {
    /// The unit value, already computed.
    #[inline]
    pub const fn unit() -> Self {
        Self::now(())
    }
}

/// Drives an erased computation. `stack` holds pending continuations with the
/// next one to run on top.
fn evaluate(mut current: Eval<Erased>, mut stack: Vec<Continuation>) -> Erased {
    loop {
        let value = match current.state {
            EvalState::Now(value) => value,
            EvalState::Later(thunk) => thunk(),
            EvalState::Defer(thunk) => {
                current = thunk();
                continue;
            }
            EvalState::Bind {
                source,
                continuations,
            } => {
                stack.extend(continuations.into_iter().rev());
                current = *source;
                continue;
            }
        };

        match stack.pop() {
            Some(continuation) => current = continuation(value),
            None => return value,
        }
    }
}

fn downcast<A: 'static>(value: Erased) -> A {
    match value.downcast::<A>() {
        Ok(value) => *value,
        Err(_) => unreachable!("Eval continuation received a value of an unexpected type"),
    }
}

impl<A> fmt::Debug for Eval<A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = match &self.state {
            EvalState::Now(_) => "Now",
            EvalState::Later(_) => "Later",
            EvalState::Defer(_) => "Defer",
            EvalState::Bind { .. } => "Bind",
        };
        formatter.debug_tuple("Eval").field(&state).finish()
    }
}
