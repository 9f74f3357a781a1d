//! Capability instances for F-of-G, built from an instance for each layer.
//!
//! The F-level operation always runs first and the G-level one inside it, so
//! folds and traversals visit elements with F as the outer loop at every
//! nesting depth.

use std::cell::RefCell;
use std::rc::Rc;

use super::nested::{ComposeK, Nested};
use crate::control::Eval;
use crate::typeclass::{
    Applicative, CloneK, ClonedK, Foldable, Functor, Kind, MonoidK, SemigroupK, Traverse, Typeclass,
};

/// The composition of an instance for `F` with an instance for `G`.
///
/// `Composed<Outer, Inner>` provides capabilities for
/// [`ComposeK<F, G>`](super::ComposeK) whenever `Outer` and `Inner` provide
/// them for `F` and `G`:
///
/// | Capability           | Requires                                                  |
/// |----------------------|-----------------------------------------------------------|
/// | Functor              | Functor for both layers                                   |
/// | Foldable             | Foldable for both layers                                  |
/// | Traverse             | Traverse for both layers, `G: CloneK`                     |
/// | Applicative          | Applicative for both layers, `G: CloneK`                  |
/// | SemigroupK, MonoidK  | the same capability for the outer layer                   |
///
/// # Examples
///
/// ```rust
/// use kindred::compose::{Nested, compose};
/// use kindred::instances::{OptionInstance, OptionK, VecInstance, VecK};
/// use kindred::typeclass::{Foldable, Functor};
///
/// let instance = compose(VecInstance, OptionInstance);
/// let nested: Nested<VecK, OptionK, i32> = Nested::nest(vec![Some(1), None, Some(3)]);
/// let doubled = instance.map(nested, |n: i32| n * 2);
/// assert_eq!(doubled.as_inner(), &vec![Some(2), None, Some(6)]);
/// assert_eq!(instance.fold_left(doubled, 0, |acc, n: i32| acc + n), 8);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Composed<Outer, Inner> {
    outer: Outer,
    inner: Inner,
}

impl<Outer, Inner> Composed<Outer, Inner> {
    /// Composes `outer` (for `F`) with `inner` (for `G`).
    #[inline]
    pub const fn new(outer: Outer, inner: Inner) -> Self {
        Self { outer, inner }
    }

    /// The instance for the outer layer.
    #[inline]
    pub const fn outer(&self) -> &Outer {
        &self.outer
    }

    /// The instance for the inner layer.
    #[inline]
    pub const fn inner(&self) -> &Inner {
        &self.inner
    }
}

/// Composes an instance for `F` with an instance for `G`.
#[inline]
pub const fn compose<Outer, Inner>(outer: Outer, inner: Inner) -> Composed<Outer, Inner> {
    Composed::new(outer, inner)
}

/// Method form of [`compose`].
///
/// ```rust
/// use kindred::compose::{ComposeExt, Nested};
/// use kindred::instances::{OptionInstance, OptionK, VecInstance, VecK};
/// use kindred::typeclass::Applicative;
///
/// let instance = OptionInstance.compose(VecInstance);
/// let pure: Nested<OptionK, VecK, i32> = instance.pure(1);
/// assert_eq!(pure.unnest(), Some(vec![1]));
/// ```
pub trait ComposeExt: Typeclass {
    /// Composes `self` as the outer layer with `inner`.
    fn compose<Inner: Typeclass>(self, inner: Inner) -> Composed<Self, Inner> {
        Composed::new(self, inner)
    }
}

impl<T: Typeclass> ComposeExt for T {}

/// Shares an `FnMut` between the closures handed to each inner container.
fn shared<Func>(function: Func) -> Rc<RefCell<Func>> {
    Rc::new(RefCell::new(function))
}

impl<F, G, Outer, Inner> Functor<ComposeK<F, G>> for Composed<Outer, Inner>
where
    F: Kind,
    G: Kind,
    Outer: Functor<F>,
    Inner: Functor<G>,
{
    fn map<A, B, Func>(&self, fa: Nested<F, G, A>, function: Func) -> Nested<F, G, B>
    where
        A: 'static,
        B: 'static,
        Func: FnMut(A) -> B + 'static,
    {
        let inner = self.inner.clone();
        let function = shared(function);
        Nested::nest(self.outer.map(fa.unnest(), move |ga: G::Of<A>| {
            let function = Rc::clone(&function);
            inner.map(ga, move |value: A| (function.borrow_mut())(value))
        }))
    }
}

impl<F, G, Outer, Inner> Foldable<ComposeK<F, G>> for Composed<Outer, Inner>
where
    F: Kind,
    G: Kind,
    Outer: Foldable<F>,
    Inner: Foldable<G>,
{
    fn fold_left<A, B, Func>(&self, fa: Nested<F, G, A>, initial: B, mut function: Func) -> B
    where
        A: 'static,
        Func: FnMut(B, A) -> B,
    {
        let inner = &self.inner;
        self.outer.fold_left(fa.unnest(), initial, |accumulator, ga: G::Of<A>| {
            inner.fold_left(ga, accumulator, &mut function)
        })
    }

    fn fold_right<A, B, Func>(&self, fa: Nested<F, G, A>, initial: Eval<B>, function: Func) -> Eval<B>
    where
        A: 'static,
        B: 'static,
        Func: Fn(A, Eval<B>) -> Eval<B> + 'static,
    {
        let inner = self.inner.clone();
        let function = Rc::new(function);
        self.outer.fold_right(fa.unnest(), initial, move |ga: G::Of<A>, rest: Eval<B>| {
            let function = Rc::clone(&function);
            inner.fold_right(ga, rest, move |value: A, later: Eval<B>| (*function)(value, later))
        })
    }
}

impl<F, G, Outer, Inner> Traverse<ComposeK<F, G>> for Composed<Outer, Inner>
where
    F: Kind,
    G: CloneK,
    Outer: Traverse<F>,
    Inner: Traverse<G>,
{
    fn traverse<H, Ap, A, B, Func>(
        &self,
        applicative: &Ap,
        fa: Nested<F, G, A>,
        function: Func,
    ) -> H::Of<Nested<F, G, B>>
    where
        H: Kind,
        Ap: Applicative<H>,
        A: 'static,
        B: Clone + 'static,
        Func: FnMut(A) -> H::Of<B> + 'static,
    {
        let inner = self.inner.clone();
        let effects = applicative.clone();
        let function = shared(function);
        let traversed = self.outer.traverse(applicative, fa.unnest(), move |ga: G::Of<A>| {
            let function = Rc::clone(&function);
            let inner_traversed =
                inner.traverse(&effects, ga, move |value: A| (function.borrow_mut())(value));
            effects.map(inner_traversed, ClonedK::<G, B>::new)
        });
        let outer = self.outer.clone();
        applicative.map(traversed, move |fgb: F::Of<ClonedK<G, B>>| {
            Nested::nest(outer.map(fgb, ClonedK::into_inner))
        })
    }
}

impl<F, G, Outer, Inner> Applicative<ComposeK<F, G>> for Composed<Outer, Inner>
where
    F: Kind,
    G: CloneK,
    Outer: Applicative<F>,
    Inner: Applicative<G>,
{
    fn pure<A: 'static>(&self, value: A) -> Nested<F, G, A> {
        Nested::nest(self.outer.pure(self.inner.pure(value)))
    }

    fn ap<A, B, Func>(&self, fa: Nested<F, G, A>, ff: Nested<F, G, Func>) -> Nested<F, G, B>
    where
        A: Clone + 'static,
        B: 'static,
        Func: FnMut(A) -> B + Clone + 'static,
    {
        let inner = self.inner.clone();
        let functions = self.outer.map(ff.unnest(), ClonedK::<G, Func>::new);
        let values = self.outer.map(fa.unnest(), ClonedK::<G, A>::new);
        Nested::nest(self.outer.map2(
            functions,
            values,
            move |gf: ClonedK<G, Func>, ga: ClonedK<G, A>| inner.ap(ga.into_inner(), gf.into_inner()),
        ))
    }

    fn map2<A, B, C, Func>(&self, fa: Nested<F, G, A>, fb: Nested<F, G, B>, function: Func) -> Nested<F, G, C>
    where
        A: Clone + 'static,
        B: Clone + 'static,
        C: 'static,
        Func: FnMut(A, B) -> C + 'static,
    {
        let inner = self.inner.clone();
        let function = shared(function);
        let left = self.outer.map(fa.unnest(), ClonedK::<G, A>::new);
        let right = self.outer.map(fb.unnest(), ClonedK::<G, B>::new);
        Nested::nest(self.outer.map2(left, right, move |ga: ClonedK<G, A>, gb: ClonedK<G, B>| {
            let function = Rc::clone(&function);
            inner.map2(ga.into_inner(), gb.into_inner(), move |a: A, b: B| {
                (function.borrow_mut())(a, b)
            })
        }))
    }
}

impl<F, G, Outer, Inner> SemigroupK<ComposeK<F, G>> for Composed<Outer, Inner>
where
    F: Kind,
    G: Kind,
    Outer: SemigroupK<F>,
    Inner: Typeclass,
{
    fn combine_k<A: 'static>(&self, x: Nested<F, G, A>, y: Nested<F, G, A>) -> Nested<F, G, A> {
        Nested::nest(self.outer.combine_k(x.unnest(), y.unnest()))
    }
}

impl<F, G, Outer, Inner> MonoidK<ComposeK<F, G>> for Composed<Outer, Inner>
where
    F: Kind,
    G: Kind,
    Outer: MonoidK<F>,
    Inner: Typeclass,
{
    fn empty_k<A: 'static>(&self) -> Nested<F, G, A> {
        Nested::nest(self.outer.empty_k())
    }
}
