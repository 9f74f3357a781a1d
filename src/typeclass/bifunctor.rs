//! Bifunctor, Bifoldable and Bitraverse - capabilities over two type parameters.
//!
//! These are the two-parameter counterparts of [`Functor`](super::Functor),
//! [`Foldable`](super::Foldable) and [`Traverse`](super::Traverse). They are
//! written against a [`Kind2`] witness, so `F::Of<A, B>` is "F applied to A and B".
//!
//! # Laws
//!
//! ```text
//! bimap(fab, |a| a, |b| b) == fab
//! bimap(bimap(fab, f1, g1), f2, g2) == bimap(fab, |a| f2(f1(a)), |b| g2(g1(b)))
//! bimap(fab, f, g) == right_map(left_map(fab, f), g)
//! ```
//!
//! # Examples
//!
//! ```rust
//! use kindred::control::Either;
//! use kindred::instances::{EitherBiInstance, PairInstance};
//! use kindred::typeclass::{Bifoldable, Bifunctor};
//!
//! let left: Either<i32, String> = Either::Left(42);
//! let mapped = EitherBiInstance.bimap(left, |x: i32| x * 2, |s: String| s.len());
//! assert_eq!(mapped, Either::Left(84));
//!
//! let total = PairInstance.bifold_left((1, 2), 10, |acc, a: i32| acc + a, |acc, b: i32| acc * b);
//! assert_eq!(total, 22);
//! ```

use super::applicative::Applicative;
use super::kind::{Kind, Kind2, Typeclass};
use super::monoid::Monoid;
use crate::control::Eval;

/// Mapping over both type parameters.
pub trait Bifunctor<F: Kind2>: Typeclass {
    /// Maps the first parameter with `first` and the second with `second`.
    fn bimap<A, B, C, D, First, Second>(
        &self,
        fab: F::Of<A, B>,
        first: First,
        second: Second,
    ) -> F::Of<C, D>
    where
        A: 'static,
        B: 'static,
        C: 'static,
        D: 'static,
        First: FnMut(A) -> C,
        Second: FnMut(B) -> D;

    /// Maps the first parameter only.
    fn left_map<A, B, C, First>(&self, fab: F::Of<A, B>, first: First) -> F::Of<C, B>
    where
        A: 'static,
        B: 'static,
        C: 'static,
        First: FnMut(A) -> C,
    {
        self.bimap(fab, first, |value: B| value)
    }

    /// Maps the second parameter only.
    fn right_map<A, B, D, Second>(&self, fab: F::Of<A, B>, second: Second) -> F::Of<A, D>
    where
        A: 'static,
        B: 'static,
        D: 'static,
        Second: FnMut(B) -> D,
    {
        self.bimap(fab, |value: A| value, second)
    }
}

/// Folding over both type parameters.
///
/// First-parameter values are visited before second-parameter values when a
/// structure holds both.
pub trait Bifoldable<F: Kind2>: Typeclass {
    /// Folds from the left, using `first` and `second` for the two kinds of value.
    fn bifold_left<A, B, C, First, Second>(
        &self,
        fab: F::Of<A, B>,
        initial: C,
        first: First,
        second: Second,
    ) -> C
    where
        A: 'static,
        B: 'static,
        First: FnMut(C, A) -> C,
        Second: FnMut(C, B) -> C;

    /// Folds from the right, lazily.
    fn bifold_right<A, B, C, First, Second>(
        &self,
        fab: F::Of<A, B>,
        initial: Eval<C>,
        first: First,
        second: Second,
    ) -> Eval<C>
    where
        A: 'static,
        B: 'static,
        C: 'static,
        First: Fn(A, Eval<C>) -> Eval<C> + 'static,
        Second: Fn(B, Eval<C>) -> Eval<C> + 'static;

    /// Maps both kinds of value into a monoid and combines them.
    fn bifold_map<A, B, M, First, Second>(
        &self,
        fab: F::Of<A, B>,
        mut first: First,
        mut second: Second,
    ) -> M
    where
        A: 'static,
        B: 'static,
        M: Monoid,
        First: FnMut(A) -> M,
        Second: FnMut(B) -> M,
    {
        self.bifold_left(
            fab,
            M::empty(),
            |accumulator: M, value: A| accumulator.combine(first(value)),
            |accumulator: M, value: B| accumulator.combine(second(value)),
        )
    }
}

/// Effectful traversal over both type parameters.
pub trait Bitraverse<F: Kind2>: Bifunctor<F> + Bifoldable<F> {
    /// Runs `first` and `second` on the values and collects the effects.
    fn bitraverse<G, H, A, B, C, D, First, Second>(
        &self,
        applicative: &H,
        fab: F::Of<A, B>,
        first: First,
        second: Second,
    ) -> G::Of<F::Of<C, D>>
    where
        G: Kind,
        H: Applicative<G>,
        A: 'static,
        B: 'static,
        C: Clone + 'static,
        D: Clone + 'static,
        First: FnMut(A) -> G::Of<C> + 'static,
        Second: FnMut(B) -> G::Of<D> + 'static;

    /// Turns a structure of effects into an effect of a structure.
    fn bisequence<G, H, A, B>(&self, applicative: &H, fgab: F::Of<G::Of<A>, G::Of<B>>) -> G::Of<F::Of<A, B>>
    where
        G: Kind,
        H: Applicative<G>,
        A: Clone + 'static,
        B: Clone + 'static,
    {
        self.bitraverse(applicative, fgab, |ga: G::Of<A>| ga, |gb: G::Of<B>| gb)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::control::Either;
    use crate::instances::{EitherBiInstance, OptionInstance, PairInstance, ResultBiInstance};
    use rstest::rstest;

    #[rstest]
    #[case(Either::Left(2), Either::Left(4))]
    #[case(Either::Right("abc".to_string()), Either::Right(3))]
    fn either_bimap(#[case] input: Either<i32, String>, #[case] expected: Either<i32, usize>) {
        let mapped = EitherBiInstance.bimap(input, |x: i32| x * 2, |s: String| s.len());
        assert_eq!(mapped, expected);
    }

    #[rstest]
    fn result_left_map_touches_errors_only() {
        let failed: Result<i32, String> = Err("bad".to_string());
        assert_eq!(ResultBiInstance.left_map(failed, |error: String| error.len()), Err(3));
        let succeeded: Result<i32, String> = Ok(1);
        assert_eq!(ResultBiInstance.left_map(succeeded, |error: String| error.len()), Ok(1));
    }

    #[rstest]
    fn pair_right_map_keeps_first() {
        assert_eq!(PairInstance.right_map((1, 2), |x: i32| x + 10), (1, 12));
    }

    #[rstest]
    fn pair_bifold_right_visits_first_then_second() {
        let rendered = PairInstance
            .bifold_right(
                ("a".to_string(), 1),
                Eval::now(String::new()),
                |a: String, rest| rest.map(move |text| format!("{a}{text}")),
                |b: i32, rest| rest.map(move |text| format!("{b}{text}")),
            )
            .value();
        assert_eq!(rendered, "a1");
    }

    #[rstest]
    fn pair_bifold_map_sums() {
        let total: String =
            PairInstance.bifold_map((1, 'x'), |a: i32| a.to_string(), |b: char| b.to_string());
        assert_eq!(total, "1x");
    }

    #[rstest]
    #[case(Either::Left(1), Some(Either::Left(2)))]
    #[case(Either::Right(-1), None)]
    fn either_bitraverse_option(#[case] input: Either<i32, i32>, #[case] expected: Option<Either<i32, i32>>) {
        let result = EitherBiInstance.bitraverse(
            &OptionInstance,
            input,
            |a: i32| Some(a + 1),
            |b: i32| if b > 0 { Some(b) } else { None },
        );
        assert_eq!(result, expected);
    }

    #[rstest]
    fn pair_bisequence_option() {
        assert_eq!(PairInstance.bisequence(&OptionInstance, (Some(1), Some('a'))), Some((1, 'a')));
        assert_eq!(PairInstance.bisequence(&OptionInstance, (Some(1), None::<char>)), None);
    }
}
