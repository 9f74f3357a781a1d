//! The witness of an F-of-G composition and its value type.

use std::convert::Infallible;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;

use crate::typeclass::{CloneK, Kind, Kind2, Kinded};

/// Witness for "`F` of `G`": `ComposeK<F, G>::Of<A>` is [`Nested<F, G, A>`].
pub struct ComposeK<F, G>(Infallible, PhantomData<(F, G)>);

impl<F: Kind, G: Kind> Kind for ComposeK<F, G> {
    type Of<A: 'static> = Nested<F, G, A>;
}

impl<F: CloneK, G: CloneK> CloneK for ComposeK<F, G> {
    fn clone_kind<A, C>(fa: &Nested<F, G, A>, clone_element: C) -> Nested<F, G, A>
    where
        A: 'static,
        C: Fn(&A) -> A,
    {
        Nested::nest(F::clone_kind(fa.as_inner(), |ga: &G::Of<A>| {
            G::clone_kind(ga, &clone_element)
        }))
    }
}

/// An `F::Of<G::Of<A>>` viewed as a single container of `A`.
///
/// [`nest`](Nested::nest) and [`unnest`](Nested::unnest) only move the value
/// in and out of the wrapper.
///
/// # Examples
///
/// ```rust
/// use kindred::compose::Nested;
/// use kindred::instances::{OptionK, VecK};
///
/// let nested: Nested<VecK, OptionK, i32> = Nested::nest(vec![Some(1), None]);
/// assert_eq!(nested.unnest(), vec![Some(1), None]);
/// ```
pub struct Nested<F: Kind, G: Kind, A: 'static> {
    value: F::Of<G::Of<A>>,
}

impl<F: Kind, G: Kind, A: 'static> Nested<F, G, A> {
    /// Wraps the nested containers.
    #[inline]
    pub const fn nest(value: F::Of<G::Of<A>>) -> Self {
        Self { value }
    }

    /// Takes the nested containers back out.
    #[inline]
    pub fn unnest(self) -> F::Of<G::Of<A>> {
        self.value
    }

    /// Borrows the nested containers.
    #[inline]
    pub const fn as_inner(&self) -> &F::Of<G::Of<A>> {
        &self.value
    }
}

impl<F: Kind, G: Kind, A: 'static> Kinded for Nested<F, G, A> {
    type Witness = ComposeK<F, G>;
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

impl<F: Kind, G: Kind, A: 'static> Clone for Nested<F, G, A>
where
    F::Of<G::Of<A>>: Clone,
{
    fn clone(&self) -> Self {
        Self::nest(self.value.clone())
    }
}

impl<F: Kind, G: Kind, A: 'static> PartialEq for Nested<F, G, A>
where
    F::Of<G::Of<A>>: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<F: Kind, G: Kind, A: 'static> Eq for Nested<F, G, A> where F::Of<G::Of<A>>: Eq {}

impl<F: Kind, G: Kind, A: 'static> Hash for Nested<F, G, A>
where
    F::Of<G::Of<A>>: Hash,
{
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

impl<F: Kind, G: Kind, A: 'static> fmt::Debug for Nested<F, G, A>
where
    F::Of<G::Of<A>>: fmt::Debug,
{
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_tuple("Nested").field(&self.value).finish()
    }
}

/// Witness for "`F` of a two-parameter `G`": `Of<A, B>` is [`NestedBi<F, G, A, B>`].
pub struct ComposeBiK<F, G>(Infallible, PhantomData<(F, G)>);

impl<F: Kind, G: Kind2> Kind2 for ComposeBiK<F, G> {
    type Of<A: 'static, B: 'static> = NestedBi<F, G, A, B>;
}

/// An `F::Of<G::Of<A, B>>` viewed as a single two-parameter container.
pub struct NestedBi<F: Kind, G: Kind2, A: 'static, B: 'static> {
    value: F::Of<G::Of<A, B>>,
}

impl<F: Kind, G: Kind2, A: 'static, B: 'static> NestedBi<F, G, A, B> {
    /// Wraps the nested containers.
    #[inline]
    pub const fn nest(value: F::Of<G::Of<A, B>>) -> Self {
        Self { value }
    }

    /// Takes the nested containers back out.
    #[inline]
    pub fn unnest(self) -> F::Of<G::Of<A, B>> {
        self.value
    }
}

impl<F: Kind, G: Kind2, A: 'static, B: 'static> PartialEq for NestedBi<F, G, A, B>
where
    F::Of<G::Of<A, B>>: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<F: Kind, G: Kind2, A: 'static, B: 'static> fmt::Debug for NestedBi<F, G, A, B>
where
    F::Of<G::Of<A, B>>: fmt::Debug,
{
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_tuple("NestedBi").field(&self.value).finish()
    }
}
