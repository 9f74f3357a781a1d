//! Foldable type class - collapsing a structure into a summary value.
//!
//! A `Foldable<F>` instance has two primitives:
//!
//! - `fold_left`: strict, left-associative
//! - `fold_right`: lazy and right-associative; the accumulator is an [`Eval`]
//!   and the folding function decides whether to force it, which lets
//!   `exists`, `for_all` and `find` stop early on large structures
//!
//! Everything else (`exists`, `for_all`, `is_empty`, `size`, `find`, `to_vec`,
//! `fold_map`, `combine_all`, `fold_m`) is derived from those.
//!
//! # Laws
//!
//! ```text
//! fold_left(fa, b, f) == fold_right over the reversed elements with f flipped
//! fold_right(fa, lb, f) never forces more elements than f asks for
//! ```
//!
//! # Examples
//!
//! ```rust
//! use kindred::control::Eval;
//! use kindred::instances::VecInstance;
//! use kindred::typeclass::Foldable;
//!
//! let joined = VecInstance
//!     .fold_right(vec!["a", "b", "c"], Eval::now(String::new()), |element, rest| {
//!         rest.map(move |tail| format!("{element}{tail}"))
//!     })
//!     .value();
//! assert_eq!(joined, "abc");
//!
//! assert!(VecInstance.exists(vec![1, 2, 3], |value: &i32| *value == 2));
//! ```

use std::rc::Rc;

use super::kind::{Kind, Typeclass};
use super::monad::Monad;
use super::monoid::Monoid;
use crate::control::{Either, Eval};

/// A type class for structures that can be folded to a summary value.
pub trait Foldable<F: Kind>: Typeclass {
    /// Folds the elements from left to right.
    ///
    /// # Arguments
    ///
    /// * `fa` - The structure to fold
    /// * `initial` - The starting accumulator
    /// * `function` - Combines the accumulator with the next element
    fn fold_left<A, B, Func>(&self, fa: F::Of<A>, initial: B, function: Func) -> B
    where
        A: 'static,
        Func: FnMut(B, A) -> B;

    /// Folds the elements from right to left, lazily.
    ///
    /// `function` receives an element and the deferred fold of everything to
    /// its right. Returning without forcing that `Eval` stops the fold.
    fn fold_right<A, B, Func>(&self, fa: F::Of<A>, initial: Eval<B>, function: Func) -> Eval<B>
    where
        A: 'static,
        B: 'static,
        Func: Fn(A, Eval<B>) -> Eval<B> + 'static;

    /// Returns `true` if any element satisfies `predicate`. Stops at the first match.
    fn exists<A, P>(&self, fa: F::Of<A>, predicate: P) -> bool
    where
        A: 'static,
        P: Fn(&A) -> bool + 'static,
    {
        self.fold_right(fa, Eval::now(false), move |element, rest| {
            if predicate(&element) {
                Eval::now(true)
            } else {
                rest
            }
        })
        .value()
    }

    /// Returns `true` if every element satisfies `predicate`. Stops at the first failure.
    fn for_all<A, P>(&self, fa: F::Of<A>, predicate: P) -> bool
    where
        A: 'static,
        P: Fn(&A) -> bool + 'static,
    {
        self.fold_right(fa, Eval::now(true), move |element, rest| {
            if predicate(&element) {
                rest
            } else {
                Eval::now(false)
            }
        })
        .value()
    }

    /// Returns `true` if there are no elements.
    fn is_empty<A: 'static>(&self, fa: F::Of<A>) -> bool {
        !self.exists(fa, |_: &A| true)
    }

    /// Counts the elements.
    fn size<A: 'static>(&self, fa: F::Of<A>) -> usize {
        self.fold_left(fa, 0, |count, _: A| count + 1)
    }

    /// Returns the first element satisfying `predicate`.
    fn find<A, P>(&self, fa: F::Of<A>, predicate: P) -> Option<A>
    where
        A: 'static,
        P: Fn(&A) -> bool + 'static,
    {
        self.fold_right(fa, Eval::now(None), move |element, rest| {
            if predicate(&element) {
                Eval::now(Some(element))
            } else {
                rest
            }
        })
        .value()
    }

    /// Collects the elements in fold order.
    fn to_vec<A: 'static>(&self, fa: F::Of<A>) -> Vec<A> {
        self.fold_left(fa, Vec::new(), |mut elements, element| {
            elements.push(element);
            elements
        })
    }

    /// Maps every element into a monoid and combines the results.
    fn fold_map<A, M, Func>(&self, fa: F::Of<A>, mut function: Func) -> M
    where
        A: 'static,
        M: Monoid,
        Func: FnMut(A) -> M,
    {
        self.fold_left(fa, M::empty(), |accumulator, element| {
            accumulator.combine(function(element))
        })
    }

    /// Combines all elements with their monoid.
    fn combine_all<A: Monoid + 'static>(&self, fa: F::Of<A>) -> A {
        self.fold_left(fa, A::empty(), A::combine)
    }

    /// Folds with a function returning a monadic accumulator.
    ///
    /// Runs through [`Monad::tail_rec_m`] of `monad`, so the number of elements
    /// does not affect stack depth.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kindred::instances::{OptionInstance, VecInstance};
    /// use kindred::typeclass::Foldable;
    ///
    /// let safe_sum = VecInstance.fold_m(&OptionInstance, vec![1, 2, 3], 0, |total: i32, value: i32| {
    ///     total.checked_add(value)
    /// });
    /// assert_eq!(safe_sum, Some(6));
    /// ```
    fn fold_m<G, M, A, B, Func>(&self, monad: &M, fa: F::Of<A>, initial: B, function: Func) -> G::Of<B>
    where
        G: Kind,
        M: Monad<G>,
        A: Clone + 'static,
        B: 'static,
        Func: FnMut(B, A) -> G::Of<B> + 'static,
    {
        let elements: Rc<[A]> = self.to_vec(fa).into();
        let stepper = monad.clone();
        let mut function = function;
        monad.tail_rec_m((initial, 0_usize), move |(accumulator, index): (B, usize)| {
            match elements.get(index) {
                None => stepper.pure(Either::Right(accumulator)),
                Some(element) => stepper.map(function(accumulator, element.clone()), move |next: B| {
                    Either::Left((next, index + 1))
                }),
            }
        })
    }
}

/// Lazy right fold over any iterator, shared by the sequence-like instances.
///
/// Each step defers the rest of the fold, so evaluation proceeds through the
/// [`Eval`] loop rather than native recursion.
pub(crate) fn fold_right_iterator<I, A, B, Func>(
    mut elements: I,
    initial: Eval<B>,
    function: Rc<Func>,
) -> Eval<B>
where
    I: Iterator<Item = A> + 'static,
    A: 'static,
    B: 'static,
    Func: Fn(A, Eval<B>) -> Eval<B> + 'static,
{
    match elements.next() {
        None => initial,
        Some(element) => {
            let shared = Rc::clone(&function);
            (*function)(
                element,
                Eval::defer(move || fold_right_iterator(elements, initial, shared)),
            )
        }
    }
}
