//! `Option` as a monad, a traversable structure and a container monoid.

use static_assertions::assert_impl_all;

use crate::control::{Either, Eval};
use crate::typeclass::{
    Applicative, ApplicativeError, CloneK, Foldable, Functor, Kind, Kinded, Monad, MonoidK,
    SemigroupK, Traverse,
};

/// Witness for `Option<_>`.
#[derive(Debug)]
pub enum OptionK {}

impl Kind for OptionK {
    type Of<A: 'static> = Option<A>;
}

impl CloneK for OptionK {
    fn clone_kind<A, C>(fa: &Option<A>, clone_element: C) -> Option<A>
    where
        A: 'static,
        C: Fn(&A) -> A,
    {
        fa.as_ref().map(clone_element)
    }
}

impl<A: 'static> Kinded for Option<A> {
    type Witness = OptionK;
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

/// Capabilities of `Option`.
///
/// An absent value short-circuits every combination, and the error of
/// [`ApplicativeError`] is `()`.
///
/// # Examples
///
/// ```rust
/// use kindred::instances::OptionInstance;
/// use kindred::typeclass::{Applicative, Monad};
///
/// assert_eq!(OptionInstance.map2(Some(1), Some(2), |a: i32, b: i32| a + b), Some(3));
/// assert_eq!(OptionInstance.flat_map(Some(1), |_: i32| None::<i32>), None);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct OptionInstance;

assert_impl_all!(OptionInstance: Send, Sync, Copy);

impl Functor<OptionK> for OptionInstance {
    fn map<A, B, Func>(&self, fa: Option<A>, function: Func) -> Option<B>
    where
        A: 'static,
        B: 'static,
        Func: FnMut(A) -> B + 'static,
    {
        fa.map(function)
    }
}

impl Applicative<OptionK> for OptionInstance {
    fn pure<A: 'static>(&self, value: A) -> Option<A> {
        Some(value)
    }

    fn ap<A, B, Func>(&self, fa: Option<A>, ff: Option<Func>) -> Option<B>
    where
        A: Clone + 'static,
        B: 'static,
        Func: FnMut(A) -> B + Clone + 'static,
    {
        match (fa, ff) {
            (Some(value), Some(mut function)) => Some(function(value)),
            _ => None,
        }
    }

    fn map2<A, B, C, Func>(&self, fa: Option<A>, fb: Option<B>, mut function: Func) -> Option<C>
    where
        A: Clone + 'static,
        B: Clone + 'static,
        C: 'static,
        Func: FnMut(A, B) -> C + 'static,
    {
        fa.zip(fb).map(|(left, right)| function(left, right))
    }

    fn map2_eval<A, B, C, Func>(
        &self,
        fa: Option<A>,
        fb: Eval<Option<B>>,
        mut function: Func,
    ) -> Eval<Option<C>>
    where
        A: Clone + 'static,
        B: Clone + 'static,
        C: 'static,
        Func: FnMut(A, B) -> C + 'static,
    {
        match fa {
            None => Eval::now(None),
            Some(left) => fb.map(move |fb: Option<B>| fb.map(|right| function(left, right))),
        }
    }
}

impl Monad<OptionK> for OptionInstance {
    fn flat_map<A, B, Func>(&self, fa: Option<A>, function: Func) -> Option<B>
    where
        A: 'static,
        B: 'static,
        Func: FnMut(A) -> Option<B> + 'static,
    {
        fa.and_then(function)
    }

    fn tail_rec_m<A, B, Func>(&self, initial: A, mut function: Func) -> Option<B>
    where
        A: 'static,
        B: 'static,
        Func: FnMut(A) -> Option<Either<A, B>> + 'static,
    {
        let mut state = initial;
        loop {
            match function(state)? {
                Either::Left(next) => state = next,
                Either::Right(result) => return Some(result),
            }
        }
    }
}

impl Foldable<OptionK> for OptionInstance {
    fn fold_left<A, B, Func>(&self, fa: Option<A>, initial: B, function: Func) -> B
    where
        A: 'static,
        Func: FnMut(B, A) -> B,
    {
        fa.into_iter().fold(initial, function)
    }

    fn fold_right<A, B, Func>(&self, fa: Option<A>, initial: Eval<B>, function: Func) -> Eval<B>
    where
        A: 'static,
        B: 'static,
        Func: Fn(A, Eval<B>) -> Eval<B> + 'static,
    {
        match fa {
            None => initial,
            Some(value) => function(value, initial),
        }
    }
}

impl Traverse<OptionK> for OptionInstance {
    fn traverse<G, H, A, B, Func>(&self, applicative: &H, fa: Option<A>, mut function: Func) -> G::Of<Option<B>>
    where
        G: Kind,
        H: Applicative<G>,
        A: 'static,
        B: Clone + 'static,
        Func: FnMut(A) -> G::Of<B> + 'static,
    {
        match fa {
            None => applicative.pure(None),
            Some(value) => applicative.map(function(value), Some),
        }
    }
}

impl SemigroupK<OptionK> for OptionInstance {
    fn combine_k<A: 'static>(&self, x: Option<A>, y: Option<A>) -> Option<A> {
        x.or(y)
    }
}

impl MonoidK<OptionK> for OptionInstance {
    fn empty_k<A: 'static>(&self) -> Option<A> {
        None
    }
}

impl ApplicativeError<OptionK, ()> for OptionInstance {
    fn raise_error<A: 'static>(&self, (): ()) -> Option<A> {
        None
    }

    fn handle_error_with<A, Func>(&self, fa: Option<A>, mut handler: Func) -> Option<A>
    where
        A: 'static,
        Func: FnMut(()) -> Option<A> + 'static,
    {
        match fa {
            Some(value) => Some(value),
            None => handler(()),
        }
    }
}
