//! `Identity` as the trivial monad and comonad.

use static_assertions::assert_impl_all;

use crate::control::{Either, Eval};
use crate::typeclass::{
    Applicative, CloneK, Comonad, Foldable, Functor, Identity, Kind, Kinded, Monad, Traverse,
};

/// Witness for `Identity<_>`.
#[derive(Debug)]
pub enum IdK {}

impl Kind for IdK {
    type Of<A: 'static> = Identity<A>;
}

impl CloneK for IdK {
    fn clone_kind<A, C>(fa: &Identity<A>, clone_element: C) -> Identity<A>
    where
        A: 'static,
        C: Fn(&A) -> A,
    {
        Identity(clone_element(&fa.0))
    }
}

impl<A: 'static> Kinded for Identity<A> {
    type Witness = IdK;
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

/// Capabilities of [`Identity`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct IdentityInstance;

assert_impl_all!(IdentityInstance: Send, Sync, Copy);

impl Functor<IdK> for IdentityInstance {
    fn map<A, B, Func>(&self, fa: Identity<A>, mut function: Func) -> Identity<B>
    where
        A: 'static,
        B: 'static,
        Func: FnMut(A) -> B + 'static,
    {
        Identity(function(fa.0))
    }
}

impl Applicative<IdK> for IdentityInstance {
    fn pure<A: 'static>(&self, value: A) -> Identity<A> {
        Identity(value)
    }

    fn ap<A, B, Func>(&self, fa: Identity<A>, ff: Identity<Func>) -> Identity<B>
    where
        A: Clone + 'static,
        B: 'static,
        Func: FnMut(A) -> B + Clone + 'static,
    {
        let Identity(mut function) = ff;
        Identity(function(fa.0))
    }

    fn map2<A, B, C, Func>(&self, fa: Identity<A>, fb: Identity<B>, mut function: Func) -> Identity<C>
    where
        A: Clone + 'static,
        B: Clone + 'static,
        C: 'static,
        Func: FnMut(A, B) -> C + 'static,
    {
        Identity(function(fa.0, fb.0))
    }
}

impl Monad<IdK> for IdentityInstance {
    fn flat_map<A, B, Func>(&self, fa: Identity<A>, mut function: Func) -> Identity<B>
    where
        A: 'static,
        B: 'static,
        Func: FnMut(A) -> Identity<B> + 'static,
    {
        function(fa.0)
    }

    fn tail_rec_m<A, B, Func>(&self, initial: A, mut function: Func) -> Identity<B>
    where
        A: 'static,
        B: 'static,
        Func: FnMut(A) -> Identity<Either<A, B>> + 'static,
    {
        let mut state = initial;
        loop {
            match function(state).0 {
                Either::Left(next) => state = next,
                Either::Right(result) => return Identity(result),
            }
        }
    }
}

impl Comonad<IdK> for IdentityInstance {
    fn extract<A: 'static>(&self, wa: Identity<A>) -> A {
        wa.0
    }

    fn coflat_map<A, B, Func>(&self, wa: Identity<A>, mut function: Func) -> Identity<B>
    where
        A: 'static,
        B: 'static,
        Func: FnMut(Identity<A>) -> B + 'static,
    {
        Identity(function(wa))
    }
}

impl Foldable<IdK> for IdentityInstance {
    fn fold_left<A, B, Func>(&self, fa: Identity<A>, initial: B, mut function: Func) -> B
    where
        A: 'static,
        Func: FnMut(B, A) -> B,
    {
        function(initial, fa.0)
    }

    fn fold_right<A, B, Func>(&self, fa: Identity<A>, initial: Eval<B>, function: Func) -> Eval<B>
    where
        A: 'static,
        B: 'static,
        Func: Fn(A, Eval<B>) -> Eval<B> + 'static,
    {
        function(fa.0, initial)
    }
}

impl Traverse<IdK> for IdentityInstance {
    fn traverse<G, H, A, B, Func>(&self, applicative: &H, fa: Identity<A>, mut function: Func) -> G::Of<Identity<B>>
    where
        G: Kind,
        H: Applicative<G>,
        A: 'static,
        B: Clone + 'static,
        Func: FnMut(A) -> G::Of<B> + 'static,
    {
        applicative.map(function(fa.0), Identity)
    }
}
