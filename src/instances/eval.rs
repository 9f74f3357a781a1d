//! [`Eval`] as a stack-safe lazy monad and comonad.
//!
//! Nothing is computed until [`Comonad::extract`] (or [`Eval::value`]) is
//! called. `EvalK` has no [`CloneK`](crate::typeclass::CloneK) instance: a
//! suspended computation cannot be duplicated.

use crate::control::{Either, Eval};
use crate::typeclass::{Applicative, Comonad, Foldable, Functor, Kind, Kinded, Monad};

/// Witness for `Eval<_>`.
#[derive(Debug)]
pub enum EvalK {}

impl Kind for EvalK {
    type Of<A: 'static> = Eval<A>;
}

impl<A: 'static> Kinded for Eval<A> {
    type Witness = EvalK;
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

/// Capabilities of [`Eval`].
///
/// # Examples
///
/// ```rust
/// use kindred::control::Eval;
/// use kindred::instances::EvalInstance;
/// use kindred::typeclass::{Comonad, Monad};
///
/// let chained = EvalInstance.flat_map(Eval::later(|| 20), |n: i32| Eval::now(n + 1));
/// assert_eq!(EvalInstance.extract(chained), 21);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct EvalInstance;

static_assertions::assert_impl_all!(EvalInstance: Send, Sync, Copy);

impl Functor<EvalK> for EvalInstance {
    fn map<A, B, Func>(&self, fa: Eval<A>, function: Func) -> Eval<B>
    where
        A: 'static,
        B: 'static,
        Func: FnMut(A) -> B + 'static,
    {
        fa.map(function)
    }
}

impl Applicative<EvalK> for EvalInstance {
    fn pure<A: 'static>(&self, value: A) -> Eval<A> {
        Eval::now(value)
    }

    fn ap<A, B, Func>(&self, fa: Eval<A>, ff: Eval<Func>) -> Eval<B>
    where
        A: Clone + 'static,
        B: 'static,
        Func: FnMut(A) -> B + Clone + 'static,
    {
        ff.map2(fa, |mut function: Func, value: A| function(value))
    }

    fn map2<A, B, C, Func>(&self, fa: Eval<A>, fb: Eval<B>, function: Func) -> Eval<C>
    where
        A: Clone + 'static,
        B: Clone + 'static,
        C: 'static,
        Func: FnMut(A, B) -> C + 'static,
    {
        fa.map2(fb, function)
    }

    fn map2_eval<A, B, C, Func>(
        &self,
        fa: Eval<A>,
        fb: Eval<Eval<B>>,
        function: Func,
    ) -> Eval<Eval<C>>
    where
        A: Clone + 'static,
        B: Clone + 'static,
        C: 'static,
        Func: FnMut(A, B) -> C + 'static,
    {
        Eval::now(fa.map2(fb.flat_map(|inner: Eval<B>| inner), function))
    }
}

impl Monad<EvalK> for EvalInstance {
    fn flat_map<A, B, Func>(&self, fa: Eval<A>, function: Func) -> Eval<B>
    where
        A: 'static,
        B: 'static,
        Func: FnMut(A) -> Eval<B> + 'static,
    {
        fa.flat_map(function)
    }

    fn tail_rec_m<A, B, Func>(&self, initial: A, function: Func) -> Eval<B>
    where
        A: 'static,
        B: 'static,
        Func: FnMut(A) -> Eval<Either<A, B>> + 'static,
    {
        Eval::tail_rec_m(initial, function)
    }
}

impl Comonad<EvalK> for EvalInstance {
    fn extract<A: 'static>(&self, wa: Eval<A>) -> A {
        wa.value()
    }

    fn coflat_map<A, B, Func>(&self, wa: Eval<A>, mut function: Func) -> Eval<B>
    where
        A: 'static,
        B: 'static,
        Func: FnMut(Eval<A>) -> B + 'static,
    {
        Eval::later(move || function(wa))
    }
}

impl Foldable<EvalK> for EvalInstance {
    fn fold_left<A, B, Func>(&self, fa: Eval<A>, initial: B, mut function: Func) -> B
    where
        A: 'static,
        Func: FnMut(B, A) -> B,
    {
        function(initial, fa.value())
    }

    fn fold_right<A, B, Func>(&self, fa: Eval<A>, initial: Eval<B>, function: Func) -> Eval<B>
    where
        A: 'static,
        B: 'static,
        Func: Fn(A, Eval<B>) -> Eval<B> + 'static,
    {
        fa.flat_map(move |value: A| function(value, initial))
    }
}
