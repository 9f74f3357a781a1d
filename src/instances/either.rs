//! `Either<L, _>` as a right-biased monad with error type `L`.

use std::convert::Infallible;
use std::fmt;
use std::marker::PhantomData;

use crate::control::{Either, Eval};
use crate::typeclass::{
    Applicative, ApplicativeError, CloneK, Foldable, Functor, Kind, Kinded, Monad, SemigroupK,
    Traverse,
};

/// Witness for `Either<L, _>`, with the left type fixed.
pub struct EitherK<L>(Infallible, PhantomData<L>);

impl<L: 'static> Kind for EitherK<L> {
    type Of<A: 'static> = Either<L, A>;
}

impl<L: Clone + 'static> CloneK for EitherK<L> {
    fn clone_kind<A, C>(fa: &Either<L, A>, clone_element: C) -> Either<L, A>
    where
        A: 'static,
        C: Fn(&A) -> A,
    {
        match fa {
            Either::Left(left) => Either::Left(left.clone()),
            Either::Right(right) => Either::Right(clone_element(right)),
        }
    }
}

impl<L: 'static, R: 'static> Kinded for Either<L, R> {
    type Witness = EitherK<L>;
    type Inner = R;

    #[inline]
    fn into_kind(self) -> Self {
        self
    }

    #[inline]
    fn from_kind(kind: Self) -> Self {
        kind
    }
}

/// Capabilities of `Either<L, _>`, mapping over `Right`.
///
/// # Examples
///
/// ```rust
/// use kindred::control::Either;
/// use kindred::instances::EitherInstance;
/// use kindred::typeclass::Monad;
///
/// let instance = EitherInstance::<String>::new();
/// let halved = instance.flat_map(Either::Right(8), |n: i32| {
///     if n % 2 == 0 { Either::Right(n / 2) } else { Either::Left(format!("{n} is odd")) }
/// });
/// assert_eq!(halved, Either::Right(4));
/// ```
pub struct EitherInstance<L>(PhantomData<fn() -> L>);

impl<L> EitherInstance<L> {
    /// Creates the instance.
    #[inline]
    pub const fn new() -> Self {
        Self(PhantomData)
    }
}

impl<L> Clone for EitherInstance<L> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<L> Copy for EitherInstance<L> {}

impl<L> Default for EitherInstance<L> {
    fn default() -> Self {
        Self::new()
    }
}

impl<L> fmt::Debug for EitherInstance<L> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("EitherInstance")
    }
}

static_assertions::assert_impl_all!(EitherInstance<std::rc::Rc<String>>: Send, Sync, Copy);

impl<L: 'static> Functor<EitherK<L>> for EitherInstance<L> {
    fn map<A, B, Func>(&self, fa: Either<L, A>, function: Func) -> Either<L, B>
    where
        A: 'static,
        B: 'static,
        Func: FnMut(A) -> B + 'static,
    {
        fa.map_right(function)
    }
}

impl<L: 'static> Applicative<EitherK<L>> for EitherInstance<L> {
    fn pure<A: 'static>(&self, value: A) -> Either<L, A> {
        Either::Right(value)
    }

    fn ap<A, B, Func>(&self, fa: Either<L, A>, ff: Either<L, Func>) -> Either<L, B>
    where
        A: Clone + 'static,
        B: 'static,
        Func: FnMut(A) -> B + Clone + 'static,
    {
        match (ff, fa) {
            (Either::Left(error), _) | (Either::Right(_), Either::Left(error)) => Either::Left(error),
            (Either::Right(mut function), Either::Right(value)) => Either::Right(function(value)),
        }
    }

    fn map2<A, B, C, Func>(&self, fa: Either<L, A>, fb: Either<L, B>, mut function: Func) -> Either<L, C>
    where
        A: Clone + 'static,
        B: Clone + 'static,
        C: 'static,
        Func: FnMut(A, B) -> C + 'static,
    {
        match (fa, fb) {
            (Either::Left(error), _) | (Either::Right(_), Either::Left(error)) => Either::Left(error),
            (Either::Right(left), Either::Right(right)) => Either::Right(function(left, right)),
        }
    }

    fn map2_eval<A, B, C, Func>(
        &self,
        fa: Either<L, A>,
        fb: Eval<Either<L, B>>,
        mut function: Func,
    ) -> Eval<Either<L, C>>
    where
        A: Clone + 'static,
        B: Clone + 'static,
        C: 'static,
        Func: FnMut(A, B) -> C + 'static,
    {
        match fa {
            Either::Left(error) => Eval::now(Either::Left(error)),
            Either::Right(left) => {
                fb.map(move |fb: Either<L, B>| fb.map_right(|right| function(left, right)))
            }
        }
    }
}

impl<L: 'static> Monad<EitherK<L>> for EitherInstance<L> {
    fn flat_map<A, B, Func>(&self, fa: Either<L, A>, mut function: Func) -> Either<L, B>
    where
        A: 'static,
        B: 'static,
        Func: FnMut(A) -> Either<L, B> + 'static,
    {
        match fa {
            Either::Left(error) => Either::Left(error),
            Either::Right(value) => function(value),
        }
    }

    fn tail_rec_m<A, B, Func>(&self, initial: A, mut function: Func) -> Either<L, B>
    where
        A: 'static,
        B: 'static,
        Func: FnMut(A) -> Either<L, Either<A, B>> + 'static,
    {
        let mut state = initial;
        loop {
            match function(state) {
                Either::Left(error) => return Either::Left(error),
                Either::Right(Either::Left(next)) => state = next,
                Either::Right(Either::Right(result)) => return Either::Right(result),
            }
        }
    }
}

impl<L: 'static> Foldable<EitherK<L>> for EitherInstance<L> {
    fn fold_left<A, B, Func>(&self, fa: Either<L, A>, initial: B, function: Func) -> B
    where
        A: 'static,
        Func: FnMut(B, A) -> B,
    {
        fa.right().into_iter().fold(initial, function)
    }

    fn fold_right<A, B, Func>(&self, fa: Either<L, A>, initial: Eval<B>, function: Func) -> Eval<B>
    where
        A: 'static,
        B: 'static,
        Func: Fn(A, Eval<B>) -> Eval<B> + 'static,
    {
        match fa {
            Either::Left(_) => initial,
            Either::Right(value) => function(value, initial),
        }
    }
}

impl<L: 'static> Traverse<EitherK<L>> for EitherInstance<L> {
    fn traverse<G, H, A, B, Func>(
        &self,
        applicative: &H,
        fa: Either<L, A>,
        mut function: Func,
    ) -> G::Of<Either<L, B>>
    where
        G: Kind,
        H: Applicative<G>,
        A: 'static,
        B: Clone + 'static,
        Func: FnMut(A) -> G::Of<B> + 'static,
    {
        match fa {
            Either::Left(error) => applicative.pure(Either::Left(error)),
            Either::Right(value) => applicative.map(function(value), Either::Right::<L, B>),
        }
    }
}

impl<L: 'static> SemigroupK<EitherK<L>> for EitherInstance<L> {
    fn combine_k<A: 'static>(&self, x: Either<L, A>, y: Either<L, A>) -> Either<L, A> {
        match x {
            Either::Right(value) => Either::Right(value),
            Either::Left(_) => y,
        }
    }
}

impl<L: 'static> ApplicativeError<EitherK<L>, L> for EitherInstance<L> {
    fn raise_error<A: 'static>(&self, error: L) -> Either<L, A> {
        Either::Left(error)
    }

    fn handle_error_with<A, Func>(&self, fa: Either<L, A>, mut handler: Func) -> Either<L, A>
    where
        A: 'static,
        Func: FnMut(L) -> Either<L, A> + 'static,
    {
        match fa {
            Either::Left(error) => handler(error),
            right @ Either::Right(_) => right,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::typeclass::MonadError;
    use rstest::rstest;

    fn instance() -> EitherInstance<String> {
        EitherInstance::new()
    }

    #[rstest]
    fn map_leaves_left_untouched() {
        let left: Either<String, i32> = Either::Left("no".to_string());
        assert_eq!(instance().map(left, |n: i32| n + 1), Either::Left("no".to_string()));
    }

    #[rstest]
    fn tail_rec_m_runs_one_hundred_thousand_steps() {
        let result = instance().tail_rec_m(0_u64, |n: u64| {
            Either::Right(if n < 100_000 { Either::Left(n + 1) } else { Either::Right(n) })
        });
        assert_eq!(result, Either::Right(100_000));
    }

    #[rstest]
    fn ensure_raises_left() {
        let checked = instance().ensure(Either::Right(1), || "small".to_string(), |n: &i32| *n > 1);
        assert_eq!(checked, Either::Left("small".to_string()));
    }

    #[rstest]
    fn traverse_left_is_pure() {
        let left: Either<String, i32> = Either::Left("l".to_string());
        let result = instance().traverse(&crate::instances::VecInstance, left, |n: i32| vec![n]);
        assert_eq!(result, vec![Either::Left("l".to_string())]);
    }
}
