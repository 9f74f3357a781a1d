//! Monad type class - sequencing dependent computations.
//!
//! A `Monad<F>` extends [`Applicative<F>`] with `flat_map`, whose function
//! receives the value produced by the previous step, and `tail_rec_m`, the
//! stack-safe monadic loop every instance must supply.
//!
//! `map` and `ap` follow from `flat_map` and `pure`; the free functions
//! [`map_via_flat_map`] and [`ap_via_flat_map`] spell that out so an instance
//! can delegate to them explicitly instead of inheriting through a diamond.
//!
//! # Laws
//!
//! ## Left Identity
//!
//! ```text
//! flat_map(pure(a), f) == f(a)
//! ```
//!
//! ## Right Identity
//!
//! ```text
//! flat_map(m, pure) == m
//! ```
//!
//! ## Associativity
//!
//! ```text
//! flat_map(flat_map(m, f), g) == flat_map(m, |x| flat_map(f(x), g))
//! ```
//!
//! ## Tail recursion
//!
//! `tail_rec_m(a, f)` equals the naive unfolding
//! `flat_map(f(a), |e| match e { Left(a) => tail_rec_m(a, f), Right(b) => pure(b) })`
//! for every finite input, and runs in bounded stack space.
//!
//! # Examples
//!
//! ```rust
//! use kindred::control::Either;
//! use kindred::instances::OptionInstance;
//! use kindred::typeclass::Monad;
//!
//! let result = OptionInstance.tail_rec_m(0, |n: i32| {
//!     Some(if n < 100_000 { Either::Left(n + 1) } else { Either::Right(n) })
//! });
//! assert_eq!(result, Some(100_000));
//! ```

use super::applicative::Applicative;
use super::kind::{CloneK, Kind};
use crate::control::Either;

/// A type class for applicatives that can sequence dependent computations.
///
/// # Laws
///
/// ## Left Identity
///
/// ```text
/// monad.flat_map(monad.pure(a), f) == f(a)
/// ```
///
/// ## Right Identity
///
/// ```text
/// monad.flat_map(m, |x| monad.pure(x)) == m
/// ```
///
/// ## Associativity
///
/// ```text
/// monad.flat_map(monad.flat_map(m, f), g) == monad.flat_map(m, |x| monad.flat_map(f(x), g))
/// ```
pub trait Monad<F: Kind>: Applicative<F> {
    /// Feeds every value of `fa` to `function` and joins the results.
    fn flat_map<A, B, Func>(&self, fa: F::Of<A>, function: Func) -> F::Of<B>
    where
        A: 'static,
        B: 'static,
        Func: FnMut(A) -> F::Of<B> + 'static;

    /// Runs a monadic loop until `function` yields `Either::Right`.
    ///
    /// Implementations must not grow the call stack with the number of
    /// iterations.
    ///
    /// # Arguments
    ///
    /// * `initial` - The starting loop state
    /// * `function` - One loop step: `Left` continues with a new state,
    ///   `Right` finishes with a result
    fn tail_rec_m<A, B, Func>(&self, initial: A, function: Func) -> F::Of<B>
    where
        A: 'static,
        B: 'static,
        Func: FnMut(A) -> F::Of<Either<A, B>> + 'static;

    /// Removes one level of nesting.
    fn flatten<A: 'static>(&self, ffa: F::Of<F::Of<A>>) -> F::Of<A> {
        self.flat_map(ffa, |fa: F::Of<A>| fa)
    }

    /// Sequences two computations, keeping the second one's result.
    ///
    /// `fb` must be cloneable because it is produced once per value of `fa`.
    fn followed_by<A, B>(&self, fa: F::Of<A>, fb: F::Of<B>) -> F::Of<B>
    where
        A: 'static,
        B: 'static,
        F::Of<B>: Clone,
    {
        self.flat_map(fa, move |_: A| fb.clone())
    }

    /// Runs `function` for its effect, keeping the original value.
    fn for_effect<A, B, Func>(&self, fa: F::Of<A>, mut function: Func) -> F::Of<A>
    where
        A: Clone + 'static,
        B: 'static,
        Func: FnMut(A) -> F::Of<B> + 'static,
    {
        let monad = self.clone();
        self.flat_map(fa, move |value: A| {
            let kept = value.clone();
            monad.map(function(value), move |_: B| kept.clone())
        })
    }

    /// Chooses the next computation from a monadic condition.
    fn if_m<B>(&self, condition: F::Of<bool>, if_true: F::Of<B>, if_false: F::Of<B>) -> F::Of<B>
    where
        B: 'static,
        F::Of<B>: Clone,
    {
        self.flat_map(condition, move |flag: bool| {
            if flag {
                if_true.clone()
            } else {
                if_false.clone()
            }
        })
    }
}

/// `map` expressed through `flat_map` and `pure`.
pub fn map_via_flat_map<F, M, A, B, Func>(monad: &M, fa: F::Of<A>, mut function: Func) -> F::Of<B>
where
    F: Kind,
    M: Monad<F>,
    A: 'static,
    B: 'static,
    Func: FnMut(A) -> B + 'static,
{
    let lifted = monad.clone();
    monad.flat_map(fa, move |value: A| lifted.pure(function(value)))
}

/// `ap` expressed through `flat_map` and `map`.
///
/// Functions are taken in order from `ff`, and each is applied to every value
/// of `fa`.
pub fn ap_via_flat_map<F, M, A, B, Func>(monad: &M, fa: F::Of<A>, ff: F::Of<Func>) -> F::Of<B>
where
    F: CloneK,
    M: Monad<F>,
    A: Clone + 'static,
    B: 'static,
    Func: FnMut(A) -> B + Clone + 'static,
{
    let inner = monad.clone();
    monad.flat_map(ff, move |function: Func| {
        inner.map(F::clone_of(&fa), function)
    })
}
