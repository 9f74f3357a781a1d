//! Higher-kinded type emulation through witness types and Generic Associated Types.
//!
//! Rust cannot abstract over a type constructor such as `Option<_>` directly.
//! This module introduces a *witness*: an uninhabited marker type standing for
//! one container family, whose [`Kind::Of`] projection applies the family to an
//! element type. Capability traits are then written against the witness, so a
//! single algorithm can run over `Option`, `Vec`, `Result<_, E>` or a nesting of
//! two of them.
//!
//! # The encoding
//!
//! - [`Kind`]: implemented by a witness, `F::Of<A>` is "F applied to A".
//! - [`Kinded`]: implemented by a concrete container, naming its witness.
//! - [`Hk`]: the Kind application as a value, produced by [`lift`] and
//!   consumed by [`recover`].
//!
//! Because `F::Of<A>` *is* the concrete container (the projection normalizes to
//! `Option<A>` for `OptionK`), lifting and recovering never transform data and
//! never perform a runtime cast. Recovering into the wrong container is rejected
//! by the type checker.
//!
//! # Example
//!
//! ```rust
//! use kindred::instances::OptionK;
//! use kindred::typeclass::{Hk, Kind, lift, recover};
//!
//! fn rewrap<F: Kind>(value: F::Of<i32>) -> Hk<F, i32> {
//!     Hk::new(value)
//! }
//!
//! let lifted = rewrap::<OptionK>(Some(3));
//! assert_eq!(lifted.as_inner(), &Some(3));
//!
//! let round_tripped: Option<i32> = recover(lift(Some(3)));
//! assert_eq!(round_tripped, Some(3));
//! ```

use std::fmt;
use std::hash::{Hash, Hasher};

/// A witness for a unary type constructor.
///
/// Implementors are uninhabited marker types (`enum OptionK {}`), one per
/// container family. They exist only at the type level.
///
/// # Laws
///
/// For every container `T: Kinded`, `<T::Witness as Kind>::Of<T::Inner>` is
/// `T` itself.
pub trait Kind: 'static {
    /// The container family applied to the element type `A`.
    type Of<A: 'static>: 'static;
}

/// A witness for a binary type constructor, used by the bifunctor family.
pub trait Kind2: 'static {
    /// The container family applied to the element types `A` and `B`.
    type Of<A: 'static, B: 'static>: 'static;
}

/// A concrete container that knows its witness.
///
/// This is the value-level half of the encoding: it connects `Option<i32>` to
/// `OptionK` and `i32`. The conversions are identities that the type checker
/// verifies, which is what makes [`recover`] safe.
pub trait Kinded: Sized + 'static {
    /// The witness of the container family.
    type Witness: Kind;

    /// The element type the container is applied to.
    type Inner: 'static;

    /// Views the container as a Kind application.
    fn into_kind(self) -> <Self::Witness as Kind>::Of<Self::Inner>;

    /// Recovers the container from a Kind application.
    fn from_kind(kind: <Self::Witness as Kind>::Of<Self::Inner>) -> Self;
}

/// A Kind application as an explicit value: "container `F` of `A`".
///
/// `Hk` is a single-field newtype over `F::Of<A>`. Generic code that wants to
/// hide the concrete representation can pass `Hk<F, A>` around and only the
/// owner of the concrete type can take it apart again.
pub struct Hk<F: Kind, A: 'static> {
    value: F::Of<A>,
}

impl<F: Kind, A: 'static> Hk<F, A> {
    /// Wraps a Kind application.
    #[inline]
    pub const fn new(value: F::Of<A>) -> Self {
        Self { value }
    }

    /// Unwraps the Kind application.
    #[inline]
    pub fn into_inner(self) -> F::Of<A> {
        self.value
    }

    /// Borrows the Kind application.
    #[inline]
    pub const fn as_inner(&self) -> &F::Of<A> {
        &self.value
    }
}

impl<F: Kind, A: 'static> Clone for Hk<F, A>
where
    F::Of<A>: Clone,
{
    fn clone(&self) -> Self {
        Self::new(self.value.clone())
    }
}

impl<F: Kind, A: 'static> PartialEq for Hk<F, A>
where
    F::Of<A>: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<F: Kind, A: 'static> Eq for Hk<F, A> where F::Of<A>: Eq {}

impl<F: Kind, A: 'static> Hash for Hk<F, A>
where
    F::Of<A>: Hash,
{
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

impl<F: Kind, A: 'static> fmt::Debug for Hk<F, A>
where
    F::Of<A>: fmt::Debug,
{
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_tuple("Hk").field(&self.value).finish()
    }
}

/// Lifts a concrete container into its Kind application.
///
/// Zero-cost: no data is moved out of or into a different representation.
#[inline]
pub fn lift<T: Kinded>(container: T) -> Hk<T::Witness, T::Inner> {
    Hk::new(container.into_kind())
}

/// Recovers a concrete container from its Kind application.
///
/// The target container is chosen by the caller and checked statically: the
/// witness and element type of `T` must match those of the `Hk`.
#[inline]
pub fn recover<T: Kinded>(kind: Hk<T::Witness, T::Inner>) -> T {
    T::from_kind(kind.into_inner())
}

// =============================================================================
// CloneK
// =============================================================================

/// A witness whose containers can be cloned element by element.
///
/// A generic `F` cannot promise `F::Of<A>: Clone` for every `A: Clone`, so this
/// capability supplies the clone explicitly. The composition combinators rely
/// on it to clone inner containers through [`ClonedK`].
pub trait CloneK: Kind {
    /// Clones the container, using `clone_element` for each element.
    fn clone_kind<A, C>(fa: &Self::Of<A>, clone_element: C) -> Self::Of<A>
    where
        A: 'static,
        C: Fn(&A) -> A;

    /// Clones the container using the elements' own `Clone`.
    #[inline]
    fn clone_of<A: Clone + 'static>(fa: &Self::Of<A>) -> Self::Of<A> {
        Self::clone_kind(fa, A::clone)
    }
}

/// A Kind application that is `Clone` whenever its element type is.
///
/// Wrapping `G::Of<A>` in `ClonedK<G, A>` lets it be used as an element where
/// a `Clone` bound is required, without knowing `G` concretely.
pub struct ClonedK<G: Kind, A: 'static>(pub G::Of<A>);

impl<G: Kind, A: 'static> ClonedK<G, A> {
    /// Wraps a Kind application.
    #[inline]
    pub const fn new(value: G::Of<A>) -> Self {
        Self(value)
    }

    /// Unwraps the Kind application.
    #[inline]
    pub fn into_inner(self) -> G::Of<A> {
        self.0
    }
}

impl<G: CloneK, A: Clone + 'static> Clone for ClonedK<G, A> {
    fn clone(&self) -> Self {
        Self(G::clone_of(&self.0))
    }
}

impl<G: Kind, A: 'static> fmt::Debug for ClonedK<G, A>
where
    G::Of<A>: fmt::Debug,
{
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_tuple("ClonedK").field(&self.0).finish()
    }
}

// =============================================================================
// Typeclass
// =============================================================================

/// Marker for capability instances.
///
/// Instances are immutable values, created once and shared freely across
/// threads. Every type satisfying the bounds is a `Typeclass`.
pub trait Typeclass: Clone + Send + Sync + 'static {}

impl<T: Clone + Send + Sync + 'static> Typeclass for T {}
