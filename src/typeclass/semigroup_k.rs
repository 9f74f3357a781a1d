//! SemigroupK and MonoidK - semigroup and monoid structure on containers.
//!
//! Unlike [`Semigroup`](super::Semigroup), which combines values, `SemigroupK`
//! combines two containers regardless of their element type: the first
//! non-empty option, the concatenation of two vectors.
//!
//! # Laws
//!
//! ```text
//! combine_k(combine_k(x, y), z) == combine_k(x, combine_k(y, z))
//! combine_k(empty_k(), x) == x == combine_k(x, empty_k())
//! ```
//!
//! # Examples
//!
//! ```rust
//! use kindred::instances::{OptionInstance, VecInstance};
//! use kindred::typeclass::{MonoidK, SemigroupK};
//!
//! assert_eq!(OptionInstance.combine_k(None, Some(2)), Some(2));
//! assert_eq!(VecInstance.combine_k(vec![1], vec![2, 3]), vec![1, 2, 3]);
//! assert_eq!(VecInstance.empty_k::<i32>(), Vec::<i32>::new());
//! ```

use super::kind::{Kind, Typeclass};

/// Associative combination of two containers.
pub trait SemigroupK<F: Kind>: Typeclass {
    /// Combines two containers.
    fn combine_k<A: 'static>(&self, x: F::Of<A>, y: F::Of<A>) -> F::Of<A>;
}

/// A [`SemigroupK`] with an identity container.
pub trait MonoidK<F: Kind>: SemigroupK<F> {
    /// The identity container.
    fn empty_k<A: 'static>(&self) -> F::Of<A>;

    /// Combines all containers, starting from [`MonoidK::empty_k`].
    fn combine_all_k<A, I>(&self, containers: I) -> F::Of<A>
    where
        A: 'static,
        I: IntoIterator<Item = F::Of<A>>,
    {
        containers
            .into_iter()
            .fold(self.empty_k(), |accumulator, container| {
                self.combine_k(accumulator, container)
            })
    }
}
