//! `OptionT` - the optional-value monad transformer.
//!
//! `OptionT<F, A>` wraps `F::Of<Option<A>>`: a computation in `F` that may
//! produce no value. Sequencing stops at the first `None` without leaving `F`.
//!
//! # Examples
//!
//! ```rust
//! use kindred::instances::{ResultInstance, ResultK};
//! use kindred::transformer::{OptionT, OptionTInstance};
//! use kindred::typeclass::Monad;
//!
//! let instance = OptionTInstance::new(ResultInstance::<String>::new());
//! let found: OptionT<ResultK<String>, i32> = OptionT::new(Ok(Some(2)));
//! let doubled = instance.flat_map(found, |n: i32| OptionT::new(Ok(Some(n * 2))));
//! assert_eq!(doubled.run(), Ok(Some(4)));
//!
//! let none: OptionT<ResultK<String>, i32> = instance.none();
//! let missing = instance.flat_map(none, |n: i32| OptionT::new(Ok(Some(n))));
//! assert_eq!(missing.run(), Ok(None));
//! ```

use std::convert::Infallible;
use std::fmt;
use std::marker::PhantomData;

use crate::compose::{Composed, Nested};
use crate::control::{Either, Eval};
use crate::instances::{OptionInstance, OptionK};
use crate::typeclass::{
    Applicative, CloneK, Foldable, Functor, Kind, Kinded, Monad, Traverse, ap_via_flat_map,
};

/// A computation in `F` that may produce no value.
pub struct OptionT<F: Kind, A: 'static> {
    inner: F::Of<Option<A>>,
}

impl<F: Kind, A: 'static> OptionT<F, A> {
    /// Wraps `F::Of<Option<A>>`.
    #[inline]
    pub const fn new(inner: F::Of<Option<A>>) -> Self {
        Self { inner }
    }

    /// Runs the transformer, returning the wrapped computation.
    #[inline]
    pub fn run(self) -> F::Of<Option<A>> {
        self.inner
    }

    /// Borrows the wrapped computation.
    #[inline]
    pub const fn as_inner(&self) -> &F::Of<Option<A>> {
        &self.inner
    }
}

impl<F: Kind, A: 'static> Clone for OptionT<F, A>
where
    F::Of<Option<A>>: Clone,
{
    fn clone(&self) -> Self {
        Self::new(self.inner.clone())
    }
}

impl<F: Kind, A: 'static> PartialEq for OptionT<F, A>
where
    F::Of<Option<A>>: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.inner == other.inner
    }
}

impl<F: Kind, A: 'static> fmt::Debug for OptionT<F, A>
where
    F::Of<Option<A>>: fmt::Debug,
{
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_tuple("OptionT").field(&self.inner).finish()
    }
}

/// Witness for `OptionT<F, _>`.
pub struct OptionTK<F>(Infallible, PhantomData<F>);

impl<F: Kind> Kind for OptionTK<F> {
    type Of<A: 'static> = OptionT<F, A>;
}

impl<F: CloneK> CloneK for OptionTK<F> {
    fn clone_kind<A, C>(fa: &OptionT<F, A>, clone_element: C) -> OptionT<F, A>
    where
        A: 'static,
        C: Fn(&A) -> A,
    {
        OptionT::new(F::clone_kind(fa.as_inner(), |option: &Option<A>| {
            OptionK::clone_kind(option, &clone_element)
        }))
    }
}

impl<F: Kind, A: 'static> Kinded for OptionT<F, A> {
    type Witness = OptionTK<F>;
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

/// Capabilities of `OptionT<F, _>`, built from the capabilities `M` has for `F`.
///
/// | Capability           | Requires                   |
/// |----------------------|----------------------------|
/// | Functor              | `M: Functor<F>`            |
/// | Applicative, Monad   | `M: Monad<F>`, `F: CloneK` |
/// | Foldable             | `M: Foldable<F>`           |
/// | Traverse             | `M: Traverse<F>`           |
///
/// Foldable and Traverse go through [`Composed`] of `M` and [`OptionInstance`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct OptionTInstance<M> {
    monad: M,
}

impl<M> OptionTInstance<M> {
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

    /// A present value.
    pub fn some<F, A>(&self, value: A) -> OptionT<F, A>
    where
        F: Kind,
        A: 'static,
        M: Applicative<F>,
    {
        OptionT::new(self.monad.pure(Some(value)))
    }

    /// An absent value.
    pub fn none<F, A>(&self) -> OptionT<F, A>
    where
        F: Kind,
        A: 'static,
        M: Applicative<F>,
    {
        OptionT::new(self.monad.pure(None))
    }

    /// Lifts a computation of `F` into the transformer.
    pub fn lift_inner<F, A>(&self, fa: F::Of<A>) -> OptionT<F, A>
    where
        F: Kind,
        A: 'static,
        M: Functor<F>,
    {
        OptionT::new(self.monad.map(fa, Some))
    }

    /// Replaces an absent value with `default`.
    pub fn get_or_else<F, A>(&self, fa: OptionT<F, A>, default: A) -> F::Of<A>
    where
        F: Kind,
        A: Clone + 'static,
        M: Functor<F>,
    {
        self.monad.map(fa.run(), move |option: Option<A>| {
            option.unwrap_or_else(|| default.clone())
        })
    }

    fn composed(&self) -> Composed<M, OptionInstance>
    where
        M: Clone,
    {
        Composed::new(self.monad.clone(), OptionInstance)
    }
}

impl<F, M> Functor<OptionTK<F>> for OptionTInstance<M>
where
    F: Kind,
    M: Functor<F>,
{
    fn map<A, B, Func>(&self, fa: OptionT<F, A>, mut function: Func) -> OptionT<F, B>
    where
        A: 'static,
        B: 'static,
        Func: FnMut(A) -> B + 'static,
    {
        OptionT::new(self.monad.map(fa.run(), move |option: Option<A>| option.map(&mut function)))
    }
}

impl<F, M> Applicative<OptionTK<F>> for OptionTInstance<M>
where
    F: CloneK,
    M: Monad<F>,
{
    fn pure<A: 'static>(&self, value: A) -> OptionT<F, A> {
        self.some(value)
    }

    fn ap<A, B, Func>(&self, fa: OptionT<F, A>, ff: OptionT<F, Func>) -> OptionT<F, B>
    where
        A: Clone + 'static,
        B: 'static,
        Func: FnMut(A) -> B + Clone + 'static,
    {
        ap_via_flat_map::<OptionTK<F>, _, _, _, _>(self, fa, ff)
    }
}

impl<F, M> Monad<OptionTK<F>> for OptionTInstance<M>
where
    F: CloneK,
    M: Monad<F>,
{
    fn flat_map<A, B, Func>(&self, fa: OptionT<F, A>, mut function: Func) -> OptionT<F, B>
    where
        A: 'static,
        B: 'static,
        Func: FnMut(A) -> OptionT<F, B> + 'static,
    {
        let monad = self.monad.clone();
        OptionT::new(self.monad.flat_map(fa.run(), move |option: Option<A>| match option {
            Some(value) => function(value).run(),
            None => monad.pure(None),
        }))
    }

    fn tail_rec_m<A, B, Func>(&self, initial: A, mut function: Func) -> OptionT<F, B>
    where
        A: 'static,
        B: 'static,
        Func: FnMut(A) -> OptionT<F, Either<A, B>> + 'static,
    {
        let monad = self.monad.clone();
        OptionT::new(self.monad.tail_rec_m(initial, move |state: A| {
            monad.map(function(state).run(), |step: Option<Either<A, B>>| match step {
                None => Either::Right(None),
                Some(Either::Left(next)) => Either::Left(next),
                Some(Either::Right(result)) => Either::Right(Some(result)),
            })
        }))
    }
}

impl<F, M> Foldable<OptionTK<F>> for OptionTInstance<M>
where
    F: Kind,
    M: Foldable<F>,
{
    fn fold_left<A, B, Func>(&self, fa: OptionT<F, A>, initial: B, function: Func) -> B
    where
        A: 'static,
        Func: FnMut(B, A) -> B,
    {
        self.composed().fold_left(Nested::<F, OptionK, A>::nest(fa.run()), initial, function)
    }

    fn fold_right<A, B, Func>(&self, fa: OptionT<F, A>, initial: Eval<B>, function: Func) -> Eval<B>
    where
        A: 'static,
        B: 'static,
        Func: Fn(A, Eval<B>) -> Eval<B> + 'static,
    {
        self.composed().fold_right(Nested::<F, OptionK, A>::nest(fa.run()), initial, function)
    }
}

impl<F, M> Traverse<OptionTK<F>> for OptionTInstance<M>
where
    F: Kind,
    M: Traverse<F>,
{
    fn traverse<G, H, A, B, Func>(&self, applicative: &H, fa: OptionT<F, A>, function: Func) -> G::Of<OptionT<F, B>>
    where
        G: Kind,
        H: Applicative<G>,
        A: 'static,
        B: Clone + 'static,
        Func: FnMut(A) -> G::Of<B> + 'static,
    {
        let traversed = self
            .composed()
            .traverse(applicative, Nested::<F, OptionK, A>::nest(fa.run()), function);
        applicative.map(traversed, |nested: Nested<F, OptionK, B>| OptionT::new(nested.unnest()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::instances::{IdK, IdentityInstance, VecInstance, VecK};
    use crate::typeclass::Identity;
    use rstest::rstest;

    type VecOption<A> = OptionT<VecK, A>;

    fn instance() -> OptionTInstance<VecInstance> {
        OptionTInstance::new(VecInstance)
    }

    #[rstest]
    #[case(vec![Some(1), None])]
    #[case(vec![])]
    fn round_trips_through_lift(#[case] values: Vec<Option<i32>>) {
        let wrapped: VecOption<i32> = OptionT::new(values);
        let recovered: VecOption<i32> = crate::typeclass::recover(crate::typeclass::lift(wrapped.clone()));
        assert_eq!(recovered, wrapped);
    }

    #[rstest]
    fn flat_map_stops_each_path_at_none() {
        let start: VecOption<i32> = OptionT::new(vec![Some(1), None, Some(3)]);
        let result = instance().flat_map(start, |n: i32| OptionT::new(vec![Some(n), Some(n * 10)]));
        assert_eq!(result.run(), vec![Some(1), Some(10), None, Some(3), Some(30)]);
    }

    #[rstest]
    fn map_keeps_none() {
        let start: VecOption<i32> = OptionT::new(vec![Some(1), None]);
        assert_eq!(instance().map(start, |n: i32| n + 1).run(), vec![Some(2), None]);
    }

    #[rstest]
    fn ap_follows_flat_map() {
        let inner: Vec<Option<fn(i32) -> i32>> = vec![None, Some(|n| n + 1)];
        let functions: VecOption<fn(i32) -> i32> = OptionT::new(inner);
        let values: VecOption<i32> = OptionT::new(vec![Some(1), Some(2)]);
        assert_eq!(instance().ap(values, functions).run(), vec![None, Some(2), Some(3)]);
    }

    #[rstest]
    fn tail_rec_m_delegates_to_the_base_monad() {
        let identity = OptionTInstance::new(IdentityInstance);
        let result: OptionT<IdK, u64> = identity.tail_rec_m(0_u64, |n: u64| {
            OptionT::new(Identity(Some(if n < 100_000 { Either::Left(n + 1) } else { Either::Right(n) })))
        });
        assert_eq!(result.run(), Identity(Some(100_000)));
    }

    #[rstest]
    fn tail_rec_m_stops_at_none() {
        let identity = OptionTInstance::new(IdentityInstance);
        let result: OptionT<IdK, u64> = identity.tail_rec_m(0_u64, |n: u64| {
            OptionT::new(Identity(if n < 10 { Some(Either::Left(n + 1)) } else { None }))
        });
        assert_eq!(result.run(), Identity(None));
    }

    #[rstest]
    fn fold_uses_the_composed_instance() {
        let values: VecOption<i32> = OptionT::new(vec![Some(1), None, Some(5)]);
        assert_eq!(instance().fold_left(values, 0, |acc, n: i32| acc + n), 6);
    }

    #[rstest]
    fn traverse_rebuilds_the_transformer() {
        let values: VecOption<i32> = OptionT::new(vec![Some(1), None]);
        let result = instance().traverse(&OptionInstance, values, |n: i32| n.checked_add(1));
        assert_eq!(result.map(OptionT::run), Some(vec![Some(2), None]));
    }

    #[rstest]
    fn helpers() {
        let lifted: VecOption<i32> = instance().lift_inner(vec![1, 2]);
        assert_eq!(lifted.run(), vec![Some(1), Some(2)]);
        let missing: VecOption<i32> = instance().none();
        assert_eq!(instance().get_or_else(missing, 9), vec![9]);
    }
}
