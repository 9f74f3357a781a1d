//! `Vec` as the non-determinism monad.
//!
//! Combinations are cartesian: the left operand varies slowest. `flat_map`
//! concatenates in order, and `tail_rec_m` produces results in the same
//! depth-first order as the equivalent chain of `flat_map`s.

use std::cell::RefCell;
use std::rc::Rc;

use static_assertions::assert_impl_all;

use crate::control::{Either, Eval};
use crate::typeclass::{
    Applicative, CloneK, Foldable, Functor, Kind, Kinded, Monad, MonoidK, SemigroupK, Traverse,
    fold_right_iterator,
};

/// Witness for `Vec<_>`.
#[derive(Debug)]
pub enum VecK {}

impl Kind for VecK {
    type Of<A: 'static> = Vec<A>;
}

impl CloneK for VecK {
    fn clone_kind<A, C>(fa: &Vec<A>, clone_element: C) -> Vec<A>
    where
        A: 'static,
        C: Fn(&A) -> A,
    {
        fa.iter().map(clone_element).collect()
    }
}

impl<A: 'static> Kinded for Vec<A> {
    type Witness = VecK;
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

/// Capabilities of `Vec`.
///
/// # Examples
///
/// ```rust
/// use kindred::instances::VecInstance;
/// use kindred::typeclass::{Applicative, Monad};
///
/// let pairs = VecInstance.product(vec![1, 2], vec!['a', 'b']);
/// assert_eq!(pairs, vec![(1, 'a'), (1, 'b'), (2, 'a'), (2, 'b')]);
///
/// let expanded = VecInstance.flat_map(vec![1, 2], |n: i32| vec![n; n as usize]);
/// assert_eq!(expanded, vec![1, 2, 2]);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct VecInstance;

assert_impl_all!(VecInstance: Send, Sync, Copy);

impl Functor<VecK> for VecInstance {
    fn map<A, B, Func>(&self, fa: Vec<A>, function: Func) -> Vec<B>
    where
        A: 'static,
        B: 'static,
        Func: FnMut(A) -> B + 'static,
    {
        fa.into_iter().map(function).collect()
    }
}

impl Applicative<VecK> for VecInstance {
    fn pure<A: 'static>(&self, value: A) -> Vec<A> {
        vec![value]
    }

    fn ap<A, B, Func>(&self, fa: Vec<A>, ff: Vec<Func>) -> Vec<B>
    where
        A: Clone + 'static,
        B: 'static,
        Func: FnMut(A) -> B + Clone + 'static,
    {
        let mut results = Vec::with_capacity(fa.len() * ff.len());
        for mut function in ff {
            results.extend(fa.iter().cloned().map(&mut function));
        }
        results
    }

    fn map2<A, B, C, Func>(&self, fa: Vec<A>, fb: Vec<B>, mut function: Func) -> Vec<C>
    where
        A: Clone + 'static,
        B: Clone + 'static,
        C: 'static,
        Func: FnMut(A, B) -> C + 'static,
    {
        let mut results = Vec::with_capacity(fa.len() * fb.len());
        for left in fa {
            for right in &fb {
                results.push(function(left.clone(), right.clone()));
            }
        }
        results
    }
}

impl Monad<VecK> for VecInstance {
    fn flat_map<A, B, Func>(&self, fa: Vec<A>, function: Func) -> Vec<B>
    where
        A: 'static,
        B: 'static,
        Func: FnMut(A) -> Vec<B> + 'static,
    {
        fa.into_iter().flat_map(function).collect()
    }

    fn tail_rec_m<A, B, Func>(&self, initial: A, mut function: Func) -> Vec<B>
    where
        A: 'static,
        B: 'static,
        Func: FnMut(A) -> Vec<Either<A, B>> + 'static,
    {
        let mut results = Vec::new();
        let mut pending = vec![function(initial).into_iter()];
        while let Some(branches) = pending.last_mut() {
            match branches.next() {
                None => {
                    pending.pop();
                }
                Some(Either::Left(next)) => pending.push(function(next).into_iter()),
                Some(Either::Right(result)) => results.push(result),
            }
        }
        results
    }
}

impl Foldable<VecK> for VecInstance {
    fn fold_left<A, B, Func>(&self, fa: Vec<A>, initial: B, function: Func) -> B
    where
        A: 'static,
        Func: FnMut(B, A) -> B,
    {
        fa.into_iter().fold(initial, function)
    }

    fn fold_right<A, B, Func>(&self, fa: Vec<A>, initial: Eval<B>, function: Func) -> Eval<B>
    where
        A: 'static,
        B: 'static,
        Func: Fn(A, Eval<B>) -> Eval<B> + 'static,
    {
        fold_right_iterator(fa.into_iter(), initial, Rc::new(function))
    }

    fn size<A: 'static>(&self, fa: Vec<A>) -> usize {
        fa.len()
    }

    fn to_vec<A: 'static>(&self, fa: Vec<A>) -> Vec<A> {
        fa
    }
}

impl Traverse<VecK> for VecInstance {
    /// Effects run left to right; the rest of the traversal is only forced
    /// when the applicative needs it, so `None` or `Err` stops early.
    fn traverse<G, H, A, B, Func>(&self, applicative: &H, fa: Vec<A>, function: Func) -> G::Of<Vec<B>>
    where
        G: Kind,
        H: Applicative<G>,
        A: 'static,
        B: Clone + 'static,
        Func: FnMut(A) -> G::Of<B> + 'static,
    {
        let capacity = fa.len();
        let function = RefCell::new(function);
        let step = applicative.clone();
        // The accumulator is built back to front, then reversed once.
        let reversed = fold_right_iterator(
            fa.into_iter(),
            Eval::now(applicative.pure(Vec::with_capacity(capacity))),
            Rc::new(move |element: A, rest: Eval<G::Of<Vec<B>>>| {
                let head = (function.borrow_mut())(element);
                step.map2_eval(head, rest, |value: B, mut tail: Vec<B>| {
                    tail.push(value);
                    tail
                })
            }),
        )
        .value();
        applicative.map(reversed, |mut elements: Vec<B>| {
            elements.reverse();
            elements
        })
    }
}

impl SemigroupK<VecK> for VecInstance {
    fn combine_k<A: 'static>(&self, mut x: Vec<A>, y: Vec<A>) -> Vec<A> {
        x.extend(y);
        x
    }
}

impl MonoidK<VecK> for VecInstance {
    fn empty_k<A: 'static>(&self) -> Vec<A> {
        Vec::new()
    }
}
