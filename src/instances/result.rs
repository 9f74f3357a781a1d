//! `Result<_, E>` as a monad with error type `E`.

use std::convert::Infallible;
use std::fmt;
use std::marker::PhantomData;

use crate::control::{Either, Eval};
use crate::typeclass::{
    Applicative, ApplicativeError, CloneK, Foldable, Functor, Kind, Kinded, Monad, SemigroupK,
    Traverse,
};

/// Witness for `Result<_, E>`, with the error type fixed.
pub struct ResultK<E>(Infallible, PhantomData<E>);

impl<E: 'static> Kind for ResultK<E> {
    type Of<A: 'static> = Result<A, E>;
}

impl<E: Clone + 'static> CloneK for ResultK<E> {
    fn clone_kind<A, C>(fa: &Result<A, E>, clone_element: C) -> Result<A, E>
    where
        A: 'static,
        C: Fn(&A) -> A,
    {
        match fa {
            Ok(value) => Ok(clone_element(value)),
            Err(error) => Err(error.clone()),
        }
    }
}

impl<A: 'static, E: 'static> Kinded for Result<A, E> {
    type Witness = ResultK<E>;
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

/// Capabilities of `Result<_, E>`.
///
/// The first error encountered wins; later computations are not run.
pub struct ResultInstance<E>(PhantomData<fn() -> E>);

impl<E> ResultInstance<E> {
    /// Creates the instance.
    #[inline]
    pub const fn new() -> Self {
        Self(PhantomData)
    }
}

impl<E> Clone for ResultInstance<E> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<E> Copy for ResultInstance<E> {}

impl<E> Default for ResultInstance<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> fmt::Debug for ResultInstance<E> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("ResultInstance")
    }
}

static_assertions::assert_impl_all!(ResultInstance<std::rc::Rc<String>>: Send, Sync, Copy);

impl<E: 'static> Functor<ResultK<E>> for ResultInstance<E> {
    fn map<A, B, Func>(&self, fa: Result<A, E>, function: Func) -> Result<B, E>
    where
        A: 'static,
        B: 'static,
        Func: FnMut(A) -> B + 'static,
    {
        fa.map(function)
    }
}

impl<E: 'static> Applicative<ResultK<E>> for ResultInstance<E> {
    fn pure<A: 'static>(&self, value: A) -> Result<A, E> {
        Ok(value)
    }

    fn ap<A, B, Func>(&self, fa: Result<A, E>, ff: Result<Func, E>) -> Result<B, E>
    where
        A: Clone + 'static,
        B: 'static,
        Func: FnMut(A) -> B + Clone + 'static,
    {
        let mut function = ff?;
        fa.map(|value| function(value))
    }

    fn map2<A, B, C, Func>(&self, fa: Result<A, E>, fb: Result<B, E>, mut function: Func) -> Result<C, E>
    where
        A: Clone + 'static,
        B: Clone + 'static,
        C: 'static,
        Func: FnMut(A, B) -> C + 'static,
    {
        Ok(function(fa?, fb?))
    }

    fn map2_eval<A, B, C, Func>(
        &self,
        fa: Result<A, E>,
        fb: Eval<Result<B, E>>,
        mut function: Func,
    ) -> Eval<Result<C, E>>
    where
        A: Clone + 'static,
        B: Clone + 'static,
        C: 'static,
        Func: FnMut(A, B) -> C + 'static,
    {
        match fa {
            Err(error) => Eval::now(Err(error)),
            Ok(left) => fb.map(move |fb: Result<B, E>| fb.map(|right| function(left, right))),
        }
    }
}

impl<E: 'static> Monad<ResultK<E>> for ResultInstance<E> {
    fn flat_map<A, B, Func>(&self, fa: Result<A, E>, function: Func) -> Result<B, E>
    where
        A: 'static,
        B: 'static,
        Func: FnMut(A) -> Result<B, E> + 'static,
    {
        fa.and_then(function)
    }

    fn tail_rec_m<A, B, Func>(&self, initial: A, mut function: Func) -> Result<B, E>
    where
        A: 'static,
        B: 'static,
        Func: FnMut(A) -> Result<Either<A, B>, E> + 'static,
    {
        let mut state = initial;
        loop {
            match function(state)? {
                Either::Left(next) => state = next,
                Either::Right(result) => return Ok(result),
            }
        }
    }
}

impl<E: 'static> Foldable<ResultK<E>> for ResultInstance<E> {
    fn fold_left<A, B, Func>(&self, fa: Result<A, E>, initial: B, function: Func) -> B
    where
        A: 'static,
        Func: FnMut(B, A) -> B,
    {
        fa.into_iter().fold(initial, function)
    }

    fn fold_right<A, B, Func>(&self, fa: Result<A, E>, initial: Eval<B>, function: Func) -> Eval<B>
    where
        A: 'static,
        B: 'static,
        Func: Fn(A, Eval<B>) -> Eval<B> + 'static,
    {
        match fa {
            Ok(value) => function(value, initial),
            Err(_) => initial,
        }
    }
}

impl<E: 'static> Traverse<ResultK<E>> for ResultInstance<E> {
    fn traverse<G, H, A, B, Func>(
        &self,
        applicative: &H,
        fa: Result<A, E>,
        mut function: Func,
    ) -> G::Of<Result<B, E>>
    where
        G: Kind,
        H: Applicative<G>,
        A: 'static,
        B: Clone + 'static,
        Func: FnMut(A) -> G::Of<B> + 'static,
    {
        match fa {
            Ok(value) => applicative.map(function(value), Ok::<B, E>),
            Err(error) => applicative.pure(Err(error)),
        }
    }
}

/// The first success wins; two failures keep the second error.
impl<E: 'static> SemigroupK<ResultK<E>> for ResultInstance<E> {
    fn combine_k<A: 'static>(&self, x: Result<A, E>, y: Result<A, E>) -> Result<A, E> {
        x.or(y)
    }
}

impl<E: 'static> ApplicativeError<ResultK<E>, E> for ResultInstance<E> {
    fn raise_error<A: 'static>(&self, error: E) -> Result<A, E> {
        Err(error)
    }

    fn handle_error_with<A, Func>(&self, fa: Result<A, E>, handler: Func) -> Result<A, E>
    where
        A: 'static,
        Func: FnMut(E) -> Result<A, E> + 'static,
    {
        fa.or_else(handler)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn instance() -> ResultInstance<String> {
        ResultInstance::new()
    }

    #[rstest]
    #[case(Ok(1), Ok(2), Ok(3))]
    #[case(Err("a"), Err("b"), Err("a"))]
    #[case(Ok(1), Err("b"), Err("b"))]
    fn map2_keeps_first_error(
        #[case] fa: Result<i32, &'static str>,
        #[case] fb: Result<i32, &'static str>,
        #[case] expected: Result<i32, &'static str>,
    ) {
        let instance = ResultInstance::<&'static str>::new();
        assert_eq!(instance.map2(fa, fb, |a: i32, b: i32| a + b), expected);
    }

    #[rstest]
    fn tail_rec_m_stops_at_first_error() {
        let result = instance().tail_rec_m(0, |n: i32| {
            if n == 5 { Err(format!("stopped at {n}")) } else { Ok(Either::<i32, i32>::Left(n + 1)) }
        });
        assert_eq!(result, Err("stopped at 5".to_string()));
    }

    #[rstest]
    fn tail_rec_m_runs_one_hundred_thousand_steps() {
        let result = instance().tail_rec_m(0_u64, |n: u64| {
            Ok(if n < 100_000 { Either::Left(n + 1) } else { Either::Right(n) })
        });
        assert_eq!(result, Ok(100_000));
    }

    #[rstest]
    fn combine_k_prefers_success() {
        assert_eq!(instance().combine_k(Err("a".to_string()), Ok(1)), Ok(1));
        assert_eq!(instance().combine_k(Ok(2), Ok(1)), Ok(2));
    }

    #[rstest]
    fn traverse_error_is_pure() {
        let failed: Result<i32, String> = Err("e".to_string());
        let result = instance().traverse(&crate::instances::OptionInstance, failed, |n: i32| Some(n));
        assert_eq!(result, Some(Err("e".to_string())));
    }
}
