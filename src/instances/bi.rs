//! Two-parameter witnesses: `Either<A, B>`, `Result<B, A>` and `(A, B)`.
//!
//! For `Result` the first parameter is the error, so `left_map` maps errors
//! and `right_map` maps successes, mirroring `Either`.

use crate::control::{Either, Eval};
use crate::typeclass::{Applicative, Bifoldable, Bifunctor, Bitraverse, Kind, Kind2};

/// Two-parameter witness for `Either<_, _>`.
#[derive(Debug)]
pub enum EitherBiK {}

impl Kind2 for EitherBiK {
    type Of<A: 'static, B: 'static> = Either<A, B>;
}

/// Two-parameter witness for `Result<_, _>`, error first.
#[derive(Debug)]
pub enum ResultBiK {}

impl Kind2 for ResultBiK {
    type Of<A: 'static, B: 'static> = Result<B, A>;
}

/// Two-parameter witness for pairs.
#[derive(Debug)]
pub enum PairK {}

impl Kind2 for PairK {
    type Of<A: 'static, B: 'static> = (A, B);
}

/// Bifunctor capabilities of `Either`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct EitherBiInstance;

/// Bifunctor capabilities of `Result`, error first.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct ResultBiInstance;

/// Bifunctor capabilities of pairs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct PairInstance;

static_assertions::assert_impl_all!(EitherBiInstance: Send, Sync, Copy);
static_assertions::assert_impl_all!(ResultBiInstance: Send, Sync, Copy);
static_assertions::assert_impl_all!(PairInstance: Send, Sync, Copy);

impl Bifunctor<EitherBiK> for EitherBiInstance {
    fn bimap<A, B, C, D, First, Second>(&self, fab: Either<A, B>, first: First, second: Second) -> Either<C, D>
    where
        A: 'static,
        B: 'static,
        C: 'static,
        D: 'static,
        First: FnMut(A) -> C,
        Second: FnMut(B) -> D,
    {
        fab.bimap(first, second)
    }
}

impl Bifoldable<EitherBiK> for EitherBiInstance {
    fn bifold_left<A, B, C, First, Second>(
        &self,
        fab: Either<A, B>,
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
        match fab {
            Either::Left(value) => first(initial, value),
            Either::Right(value) => second(initial, value),
        }
    }

    fn bifold_right<A, B, C, First, Second>(
        &self,
        fab: Either<A, B>,
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
        match fab {
            Either::Left(value) => first(value, initial),
            Either::Right(value) => second(value, initial),
        }
    }
}

impl Bitraverse<EitherBiK> for EitherBiInstance {
    fn bitraverse<G, H, A, B, C, D, First, Second>(
        &self,
        applicative: &H,
        fab: Either<A, B>,
        mut first: First,
        mut second: Second,
    ) -> G::Of<Either<C, D>>
    where
        G: Kind,
        H: Applicative<G>,
        A: 'static,
        B: 'static,
        C: Clone + 'static,
        D: Clone + 'static,
        First: FnMut(A) -> G::Of<C> + 'static,
        Second: FnMut(B) -> G::Of<D> + 'static,
    {
        match fab {
            Either::Left(value) => applicative.map(first(value), Either::Left::<C, D>),
            Either::Right(value) => applicative.map(second(value), Either::Right::<C, D>),
        }
    }
}

impl Bifunctor<ResultBiK> for ResultBiInstance {
    fn bimap<A, B, C, D, First, Second>(&self, fab: Result<B, A>, first: First, second: Second) -> Result<D, C>
    where
        A: 'static,
        B: 'static,
        C: 'static,
        D: 'static,
        First: FnMut(A) -> C,
        Second: FnMut(B) -> D,
    {
        fab.map(second).map_err(first)
    }
}

impl Bifoldable<ResultBiK> for ResultBiInstance {
    fn bifold_left<A, B, C, First, Second>(
        &self,
        fab: Result<B, A>,
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
        match fab {
            Err(error) => first(initial, error),
            Ok(value) => second(initial, value),
        }
    }

    fn bifold_right<A, B, C, First, Second>(
        &self,
        fab: Result<B, A>,
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
        match fab {
            Err(error) => first(error, initial),
            Ok(value) => second(value, initial),
        }
    }
}

impl Bitraverse<ResultBiK> for ResultBiInstance {
    fn bitraverse<G, H, A, B, C, D, First, Second>(
        &self,
        applicative: &H,
        fab: Result<B, A>,
        mut first: First,
        mut second: Second,
    ) -> G::Of<Result<D, C>>
    where
        G: Kind,
        H: Applicative<G>,
        A: 'static,
        B: 'static,
        C: Clone + 'static,
        D: Clone + 'static,
        First: FnMut(A) -> G::Of<C> + 'static,
        Second: FnMut(B) -> G::Of<D> + 'static,
    {
        match fab {
            Err(error) => applicative.map(first(error), Err::<D, C>),
            Ok(value) => applicative.map(second(value), Ok::<D, C>),
        }
    }
}

impl Bifunctor<PairK> for PairInstance {
    fn bimap<A, B, C, D, First, Second>(&self, (a, b): (A, B), mut first: First, mut second: Second) -> (C, D)
    where
        A: 'static,
        B: 'static,
        C: 'static,
        D: 'static,
        First: FnMut(A) -> C,
        Second: FnMut(B) -> D,
    {
        (first(a), second(b))
    }
}

impl Bifoldable<PairK> for PairInstance {
    fn bifold_left<A, B, C, First, Second>(
        &self,
        (a, b): (A, B),
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
        let after_first = first(initial, a);
        second(after_first, b)
    }

    fn bifold_right<A, B, C, First, Second>(
        &self,
        (a, b): (A, B),
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
        first(a, Eval::defer(move || second(b, initial)))
    }
}

impl Bitraverse<PairK> for PairInstance {
    fn bitraverse<G, H, A, B, C, D, First, Second>(
        &self,
        applicative: &H,
        (a, b): (A, B),
        mut first: First,
        mut second: Second,
    ) -> G::Of<(C, D)>
    where
        G: Kind,
        H: Applicative<G>,
        A: 'static,
        B: 'static,
        C: Clone + 'static,
        D: Clone + 'static,
        First: FnMut(A) -> G::Of<C> + 'static,
        Second: FnMut(B) -> G::Of<D> + 'static,
    {
        let left = first(a);
        applicative.map2(left, second(b), |c: C, d: D| (c, d))
    }
}
