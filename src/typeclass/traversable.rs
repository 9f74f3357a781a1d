//! Traverse type class - mapping with effects while rebuilding the structure.
//!
//! `traverse(applicative, fa, f)` runs `f` on every element of `fa`, combines
//! the resulting `G` effects with the given [`Applicative<G>`], and rebuilds the
//! `F` structure inside `G`. Effects are combined in fold order.
//!
//! # Laws
//!
//! ```text
//! traverse(identity, fa, |a| Identity(f(a))) == Identity(map(fa, f))
//! traverse(g, fa, |a| g.pure(a)) == g.pure(fa)
//! traverse(g, fa, f) == sequence(g, map(fa, f))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use kindred::instances::{OptionInstance, VecInstance};
//! use kindred::typeclass::Traverse;
//!
//! let parse = |text: &str| text.parse::<i32>().ok();
//! assert_eq!(VecInstance.traverse(&OptionInstance, vec!["1", "2"], parse), Some(vec![1, 2]));
//! assert_eq!(VecInstance.traverse(&OptionInstance, vec!["1", "x"], parse), None);
//! ```

use super::applicative::Applicative;
use super::foldable::Foldable;
use super::functor::Functor;
use super::identity::Identity;
use super::kind::{CloneK, ClonedK, Kind};
use super::monad::Monad;
use crate::instances::IdentityInstance;

/// A type class for structures that can be traversed with an applicative effect.
pub trait Traverse<F: Kind>: Functor<F> + Foldable<F> {
    /// Maps every element to an effect and collects the effects.
    ///
    /// # Arguments
    ///
    /// * `applicative` - The instance combining the `G` effects
    /// * `fa` - The structure to traverse
    /// * `function` - Produces an effect per element, called in fold order
    ///
    /// # Returns
    ///
    /// The rebuilt structure inside `G`
    fn traverse<G, H, A, B, Func>(&self, applicative: &H, fa: F::Of<A>, function: Func) -> G::Of<F::Of<B>>
    where
        G: Kind,
        H: Applicative<G>,
        A: 'static,
        B: Clone + 'static,
        Func: FnMut(A) -> G::Of<B> + 'static;

    /// Turns a structure of effects into an effect of a structure.
    fn sequence<G, H, A>(&self, applicative: &H, fga: F::Of<G::Of<A>>) -> G::Of<F::Of<A>>
    where
        G: Kind,
        H: Applicative<G>,
        A: Clone + 'static,
    {
        self.traverse(applicative, fga, |ga: G::Of<A>| ga)
    }

    /// Traverses with a function returning nested structures, then flattens them.
    fn flat_traverse<G, H, A, B, Func>(
        &self,
        applicative: &H,
        fa: F::Of<A>,
        mut function: Func,
    ) -> G::Of<F::Of<B>>
    where
        Self: Monad<F>,
        F: CloneK,
        G: Kind,
        H: Applicative<G>,
        A: 'static,
        B: Clone + 'static,
        Func: FnMut(A) -> G::Of<F::Of<B>> + 'static,
    {
        let wrapper = applicative.clone();
        let traversed = self.traverse(applicative, fa, move |element: A| {
            wrapper.map(function(element), ClonedK::<F, B>::new)
        });
        let flattener = self.clone();
        applicative.map(traversed, move |nested: F::Of<ClonedK<F, B>>| {
            flattener.flat_map(nested, ClonedK::into_inner)
        })
    }
}

/// `map` expressed through `traverse` into [`Identity`].
///
/// # Examples
///
/// ```rust
/// use kindred::instances::{VecInstance, VecK};
/// use kindred::typeclass::map_via_traverse;
///
/// let doubled = map_via_traverse::<VecK, _, _, _, _>(&VecInstance, vec![1, 2], |value: i32| value * 2);
/// assert_eq!(doubled, vec![2, 4]);
/// ```
pub fn map_via_traverse<F, T, A, B, Func>(traverse: &T, fa: F::Of<A>, mut function: Func) -> F::Of<B>
where
    F: Kind,
    T: Traverse<F>,
    A: 'static,
    B: Clone + 'static,
    Func: FnMut(A) -> B + 'static,
{
    traverse
        .traverse(&IdentityInstance, fa, move |element: A| Identity(function(element)))
        .into_inner()
}
