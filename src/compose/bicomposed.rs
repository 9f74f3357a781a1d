//! Bifoldable for a foldable structure of two-parameter values.

use std::rc::Rc;

use super::nested::{ComposeBiK, NestedBi};
use crate::control::Eval;
use crate::typeclass::{Bifoldable, Foldable, Kind, Kind2};

/// The composition of a [`Foldable`] instance for `F` with a [`Bifoldable`]
/// instance for `G`, folding an `F` of `G`-values.
///
/// # Examples
///
/// ```rust
/// use kindred::compose::{BiComposed, NestedBi};
/// use kindred::control::Either;
/// use kindred::instances::{EitherBiInstance, EitherBiK, VecInstance, VecK};
/// use kindred::typeclass::Bifoldable;
///
/// let instance = BiComposed::new(VecInstance, EitherBiInstance);
/// let values: NestedBi<VecK, EitherBiK, i32, String> =
///     NestedBi::nest(vec![Either::Left(2), Either::Right("abc".to_string())]);
/// let total = instance.bifold_left(values, 0, |acc, n: i32| acc + n, |acc, s: String| acc + s.len() as i32);
/// assert_eq!(total, 5);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct BiComposed<Outer, Inner> {
    outer: Outer,
    inner: Inner,
}

impl<Outer, Inner> BiComposed<Outer, Inner> {
    /// Composes `outer` (Foldable for `F`) with `inner` (Bifoldable for `G`).
    #[inline]
    pub const fn new(outer: Outer, inner: Inner) -> Self {
        Self { outer, inner }
    }
}

impl<F, G, Outer, Inner> Bifoldable<ComposeBiK<F, G>> for BiComposed<Outer, Inner>
where
    F: Kind,
    G: Kind2,
    Outer: Foldable<F>,
    Inner: Bifoldable<G>,
{
    fn bifold_left<A, B, C, First, Second>(
        &self,
        fab: NestedBi<F, G, A, B>,
        initial: C,
        mut first: First,
        mut second: Second,
    ) -> C
    where
        A: 'static,
        B: 'static,
        First: FnMut(C, A) -> C,
        Second: FnMut(C, B) -> C,
    {
        let inner = &self.inner;
        self.outer.fold_left(fab.unnest(), initial, |accumulator, gab: G::Of<A, B>| {
            inner.bifold_left(gab, accumulator, &mut first, &mut second)
        })
    }

    fn bifold_right<A, B, C, First, Second>(
        &self,
        fab: NestedBi<F, G, A, B>,
        initial: Eval<C>,
        first: First,
        second: Second,
    ) -> Eval<C>
    where
        A: 'static,
        B: 'static,
        C: 'static,
        First: Fn(A, Eval<C>) -> Eval<C> + 'static,
        Second: Fn(B, Eval<C>) -> Eval<C> + 'static,
    {
        let inner = self.inner.clone();
        let first = Rc::new(first);
        let second = Rc::new(second);
        self.outer.fold_right(fab.unnest(), initial, move |gab: G::Of<A, B>, rest: Eval<C>| {
            let first = Rc::clone(&first);
            let second = Rc::clone(&second);
            inner.bifold_right(
                gab,
                rest,
                move |a: A, later: Eval<C>| (*first)(a, later),
                move |b: B, later: Eval<C>| (*second)(b, later),
            )
        })
    }
}
