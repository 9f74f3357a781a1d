//! `EitherT` - the error monad transformer.
//!
//! `EitherT<F, L, A>` wraps `F::Of<Either<L, A>>`: a computation in `F` that
//! may fail with an `L`. The error is raised and handled through
//! [`ApplicativeError`], so code written against `MonadError` runs unchanged.
//!
//! # Examples
//!
//! ```rust
//! use kindred::control::Either;
//! use kindred::instances::{VecInstance, VecK};
//! use kindred::transformer::{EitherT, EitherTInstance};
//! use kindred::typeclass::{ApplicativeError, Monad};
//!
//! let instance = EitherTInstance::new(VecInstance);
//! let start: EitherT<VecK, String, i32> = EitherT::new(vec![Either::Right(1), Either::Right(-1)]);
//! let checked = instance.flat_map(start, move |n: i32| {
//!     if n > 0 { EitherT::new(vec![Either::Right(n)]) } else { instance.raise_error(format!("{n} <= 0")) }
//! });
//! assert_eq!(checked.run(), vec![Either::Right(1), Either::Left("-1 <= 0".to_string())]);
//! ```

use std::convert::Infallible;
use std::fmt;
use std::marker::PhantomData;

use crate::compose::{Composed, Nested};
use crate::control::{Either, Eval};
use crate::instances::{EitherInstance, EitherK};
use crate::typeclass::{
    Applicative, ApplicativeError, CloneK, Foldable, Functor, Kind, Kinded, Monad, Traverse,
    ap_via_flat_map,
};

/// A computation in `F` that may fail with an `L`.
pub struct EitherT<F: Kind, L: 'static, A: 'static> {
    inner: F::Of<Either<L, A>>,
}

impl<F: Kind, L: 'static, A: 'static> EitherT<F, L, A> {
    /// Wraps `F::Of<Either<L, A>>`.
    #[inline]
    pub const fn new(inner: F::Of<Either<L, A>>) -> Self {
        Self { inner }
    }

    /// Runs the transformer, returning the wrapped computation.
    #[inline]
    pub fn run(self) -> F::Of<Either<L, A>> {
        self.inner
    }

    /// Borrows the wrapped computation.
    #[inline]
    pub const fn as_inner(&self) -> &F::Of<Either<L, A>> {
        &self.inner
    }
}

impl<F: Kind, L: 'static, A: 'static> Clone for EitherT<F, L, A>
where
    F::Of<Either<L, A>>: Clone,
{
    fn clone(&self) -> Self {
        Self::new(self.inner.clone())
    }
}

impl<F: Kind, L: 'static, A: 'static> PartialEq for EitherT<F, L, A>
where
    F::Of<Either<L, A>>: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.inner == other.inner
    }
}

impl<F: Kind, L: 'static, A: 'static> fmt::Debug for EitherT<F, L, A>
where
    F::Of<Either<L, A>>: fmt::Debug,
{
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_tuple("EitherT").field(&self.inner).finish()
    }
}

/// Witness for `EitherT<F, L, _>`.
pub struct EitherTK<F, L>(Infallible, PhantomData<(F, L)>);

impl<F: Kind, L: 'static> Kind for EitherTK<F, L> {
    type Of<A: 'static> = EitherT<F, L, A>;
}

impl<F: CloneK, L: Clone + 'static> CloneK for EitherTK<F, L> {
    fn clone_kind<A, C>(fa: &EitherT<F, L, A>, clone_element: C) -> EitherT<F, L, A>
    where
        A: 'static,
        C: Fn(&A) -> A,
    {
        EitherT::new(F::clone_kind(fa.as_inner(), |either: &Either<L, A>| {
            EitherK::<L>::clone_kind(either, &clone_element)
        }))
    }
}

impl<F: Kind, L: 'static, A: 'static> Kinded for EitherT<F, L, A> {
    type Witness = EitherTK<F, L>;
    type Inner = A;

    #[inline]
    fn into_kind(self) -> Self {
        self
    }

    #[inline]
    fn from_kind(kind: Self) -> Self {
        kind
    }
}

/// Capabilities of `EitherT<F, L, _>`, built from the capabilities `M` has for `F`.
///
/// | Capability                              | Requires                   |
/// |-----------------------------------------|----------------------------|
/// | Functor                                 | `M: Functor<F>`            |
/// | Applicative, Monad, ApplicativeError<L> | `M: Monad<F>`, `F: CloneK` |
/// | Foldable                                | `M: Foldable<F>`           |
/// | Traverse                                | `M: Traverse<F>`           |
///
/// Foldable and Traverse go through [`Composed`] of `M` and [`EitherInstance`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct EitherTInstance<M> {
    monad: M,
}

impl<M> EitherTInstance<M> {
    /// Builds the instance over `monad`.
    #[inline]
    pub const fn new(monad: M) -> Self {
        Self { monad }
    }

    /// The wrapped monad instance.
    #[inline]
    pub const fn monad(&self) -> &M {
        &self.monad
    }

    /// Lifts a computation of `F` into the transformer as a success.
    pub fn lift_inner<F, L, A>(&self, fa: F::Of<A>) -> EitherT<F, L, A>
    where
        F: Kind,
        L: 'static,
        A: 'static,
        M: Functor<F>,
    {
        EitherT::new(self.monad.map(fa, Either::Right::<L, A>))
    }

    /// Lifts an already computed `Either` into the transformer.
    pub fn from_either<F, L, A>(&self, either: Either<L, A>) -> EitherT<F, L, A>
    where
        F: Kind,
        L: 'static,
        A: 'static,
        M: Applicative<F>,
    {
        EitherT::new(self.monad.pure(either))
    }

    /// Collapses both outcomes into one value inside `F`.
    pub fn fold<F, L, A, C, OnLeft, OnRight>(
        &self,
        fa: EitherT<F, L, A>,
        mut on_left: OnLeft,
        mut on_right: OnRight,
    ) -> F::Of<C>
    where
        F: Kind,
        L: 'static,
        A: 'static,
        C: 'static,
        M: Functor<F>,
        OnLeft: FnMut(L) -> C + 'static,
        OnRight: FnMut(A) -> C + 'static,
    {
        self.monad.map(fa.run(), move |either: Either<L, A>| match either {
            Either::Left(error) => on_left(error),
            Either::Right(value) => on_right(value),
        })
    }

    fn composed<L>(&self) -> Composed<M, EitherInstance<L>>
    where
        M: Clone,
    {
        Composed::new(self.monad.clone(), EitherInstance::new())
    }
}

impl<F, L, M> Functor<EitherTK<F, L>> for EitherTInstance<M>
where
    F: Kind,
    L: 'static,
    M: Functor<F>,
{
    fn map<A, B, Func>(&self, fa: EitherT<F, L, A>, mut function: Func) -> EitherT<F, L, B>
    where
        A: 'static,
        B: 'static,
        Func: FnMut(A) -> B + 'static,
    {
        EitherT::new(self.monad.map(fa.run(), move |either: Either<L, A>| {
            either.map_right(&mut function)
        }))
    }
}

impl<F, L, M> Applicative<EitherTK<F, L>> for EitherTInstance<M>
where
    F: CloneK,
    L: Clone + 'static,
    M: Monad<F>,
{
    fn pure<A: 'static>(&self, value: A) -> EitherT<F, L, A> {
        EitherT::new(self.monad.pure(Either::Right(value)))
    }

    fn ap<A, B, Func>(&self, fa: EitherT<F, L, A>, ff: EitherT<F, L, Func>) -> EitherT<F, L, B>
    where
        A: Clone + 'static,
        B: 'static,
        Func: FnMut(A) -> B + Clone + 'static,
    {
        ap_via_flat_map::<EitherTK<F, L>, _, _, _, _>(self, fa, ff)
    }
}

impl<F, L, M> Monad<EitherTK<F, L>> for EitherTInstance<M>
where
    F: CloneK,
    L: Clone + 'static,
    M: Monad<F>,
{
    fn flat_map<A, B, Func>(&self, fa: EitherT<F, L, A>, mut function: Func) -> EitherT<F, L, B>
    where
        A: 'static,
        B: 'static,
        Func: FnMut(A) -> EitherT<F, L, B> + 'static,
    {
        let monad = self.monad.clone();
        EitherT::new(self.monad.flat_map(fa.run(), move |either: Either<L, A>| match either {
            Either::Right(value) => function(value).run(),
            Either::Left(error) => monad.pure(Either::Left(error)),
        }))
    }

    fn tail_rec_m<A, B, Func>(&self, initial: A, mut function: Func) -> EitherT<F, L, B>
    where
        A: 'static,
        B: 'static,
        Func: FnMut(A) -> EitherT<F, L, Either<A, B>> + 'static,
    {
        let monad = self.monad.clone();
        EitherT::new(self.monad.tail_rec_m(initial, move |state: A| {
            monad.map(function(state).run(), |step: Either<L, Either<A, B>>| match step {
                Either::Left(error) => Either::Right(Either::Left(error)),
                Either::Right(Either::Left(next)) => Either::Left(next),
                Either::Right(Either::Right(result)) => Either::Right(Either::Right(result)),
            })
        }))
    }
}

impl<F, L, M> ApplicativeError<EitherTK<F, L>, L> for EitherTInstance<M>
where
    F: CloneK,
    L: Clone + 'static,
    M: Monad<F>,
{
    fn raise_error<A: 'static>(&self, error: L) -> EitherT<F, L, A> {
        EitherT::new(self.monad.pure(Either::Left(error)))
    }

    fn handle_error_with<A, Func>(&self, fa: EitherT<F, L, A>, mut handler: Func) -> EitherT<F, L, A>
    where
        A: 'static,
        Func: FnMut(L) -> EitherT<F, L, A> + 'static,
    {
        let monad = self.monad.clone();
        EitherT::new(self.monad.flat_map(fa.run(), move |either: Either<L, A>| match either {
            Either::Left(error) => handler(error).run(),
            Either::Right(value) => monad.pure(Either::Right(value)),
        }))
    }
}

impl<F, L, M> Foldable<EitherTK<F, L>> for EitherTInstance<M>
where
    F: Kind,
    L: 'static,
    M: Foldable<F>,
{
    fn fold_left<A, B, Func>(&self, fa: EitherT<F, L, A>, initial: B, function: Func) -> B
    where
        A: 'static,
        Func: FnMut(B, A) -> B,
    {
        self.composed::<L>()
            .fold_left(Nested::<F, EitherK<L>, A>::nest(fa.run()), initial, function)
    }

    fn fold_right<A, B, Func>(&self, fa: EitherT<F, L, A>, initial: Eval<B>, function: Func) -> Eval<B>
    where
        A: 'static,
        B: 'static,
        Func: Fn(A, Eval<B>) -> Eval<B> + 'static,
    {
        self.composed::<L>()
            .fold_right(Nested::<F, EitherK<L>, A>::nest(fa.run()), initial, function)
    }
}

impl<F, L, M> Traverse<EitherTK<F, L>> for EitherTInstance<M>
where
    F: Kind,
    L: Clone + 'static,
    M: Traverse<F>,
{
    fn traverse<G, H, A, B, Func>(
        &self,
        applicative: &H,
        fa: EitherT<F, L, A>,
        function: Func,
    ) -> G::Of<EitherT<F, L, B>>
    where
        G: Kind,
        H: Applicative<G>,
        A: 'static,
        B: Clone + 'static,
        Func: FnMut(A) -> G::Of<B> + 'static,
    {
        let traversed = self.composed::<L>().traverse(
            applicative,
            Nested::<F, EitherK<L>, A>::nest(fa.run()),
            function,
        );
        applicative.map(traversed, |nested: Nested<F, EitherK<L>, B>| EitherT::new(nested.unnest()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::instances::{IdK, IdentityInstance, OptionInstance, OptionK, VecInstance, VecK};
    use crate::typeclass::{Identity, MonadError};
    use rstest::rstest;

    type Checked<A> = EitherT<OptionK, String, A>;

    fn instance() -> EitherTInstance<OptionInstance> {
        EitherTInstance::new(OptionInstance)
    }

    #[rstest]
    #[case(Some(Either::Right(1)))]
    #[case(Some(Either::Left("left".to_string())))]
    #[case(None)]
    fn round_trips_through_lift(#[case] value: Option<Either<String, i32>>) {
        let wrapped: Checked<i32> = EitherT::new(value);
        let recovered: Checked<i32> = crate::typeclass::recover(crate::typeclass::lift(wrapped.clone()));
        assert_eq!(recovered, wrapped);
    }

    #[rstest]
    fn raise_short_circuits_flat_map() {
        let raised: Checked<i32> = instance().raise_error("boom".to_string());
        let chained = instance().flat_map(raised, |n: i32| -> Checked<i32> { panic!("ran with {n}") });
        assert_eq!(chained.run(), Some(Either::Left("boom".to_string())));
    }

    #[rstest]
    fn handle_error_with_recovers() {
        let raised: Checked<i32> = instance().raise_error("boom".to_string());
        let handled = instance().handle_error_with(raised, |error: String| {
            EitherT::new(Some(Either::Right(i32::try_from(error.len()).unwrap_or(0))))
        });
        assert_eq!(handled.run(), Some(Either::Right(4)));
    }

    #[rstest]
    fn base_none_is_not_an_error() {
        let absent: Checked<i32> = EitherT::new(None);
        let handled = instance().handle_error(absent, |_: String| 0);
        assert_eq!(handled.run(), None);
    }

    #[rstest]
    fn ensure_through_monad_error() {
        let value: Checked<i32> = instance().pure(3);
        let ensured = instance().ensure(value, || "too small".to_string(), |n: &i32| *n > 5);
        assert_eq!(ensured.run(), Some(Either::Left("too small".to_string())));
    }

    #[rstest]
    fn tail_rec_m_delegates_and_stops_on_left() {
        let identity = EitherTInstance::new(IdentityInstance);
        let result: EitherT<IdK, String, u64> = identity.tail_rec_m(0_u64, |n: u64| {
            EitherT::new(Identity(if n == 100_000 {
                Either::Left(format!("stopped at {n}"))
            } else {
                Either::Right(Either::Left(n + 1))
            }))
        });
        assert_eq!(result.run(), Identity(Either::Left("stopped at 100000".to_string())));
    }

    #[rstest]
    fn fold_skips_lefts() {
        let values: EitherT<VecK, String, i32> =
            EitherT::new(vec![Either::Right(1), Either::Left("x".to_string()), Either::Right(2)]);
        assert_eq!(EitherTInstance::new(VecInstance).fold_left(values, 0, |acc, n: i32| acc + n), 3);
    }

    #[rstest]
    fn traverse_keeps_lefts_in_place() {
        let values: EitherT<VecK, String, i32> =
            EitherT::new(vec![Either::Right(1), Either::Left("x".to_string())]);
        let result = EitherTInstance::new(VecInstance).traverse(&OptionInstance, values, |n: i32| Some(n * 3));
        assert_eq!(
            result.map(EitherT::run),
            Some(vec![Either::Right(3), Either::Left("x".to_string())])
        );
    }

    #[rstest]
    fn fold_collapses_both_sides() {
        let values: Checked<i32> = EitherT::new(Some(Either::Left("bad".to_string())));
        let folded = instance().fold(values, |error: String| error.len(), |n: i32| usize::try_from(n).unwrap_or(0));
        assert_eq!(folded, Some(3));
    }
}
