//! Capability traits over the witness encoding of higher-kinded types.
//!
//! Every capability is a trait generic over a [`Kind`] witness and implemented
//! by a small instance value, so algorithms receive their capabilities as
//! ordinary arguments:
//!
//! - [`Functor`]: mapping over container values
//! - [`Applicative`]: lifting values and combining independent contexts
//! - [`Monad`]: sequencing dependent computations, with stack-safe `tail_rec_m`
//! - [`Comonad`]: extracting values and extending computations
//! - [`Foldable`]: folding a structure to a summary value
//! - [`Traverse`]: mapping with effects while rebuilding the structure
//! - [`SemigroupK`] / [`MonoidK`]: combining containers
//! - [`ApplicativeError`] / [`MonadError`]: raising and handling errors
//! - [`Bifunctor`] / [`Bifoldable`] / [`Bitraverse`]: the two-parameter family
//!
//! ## Higher-Kinded Types Emulation
//!
//! Rust does not have native support for higher-kinded types. A witness type
//! with a Generic Associated Type `Of<A>` stands in for the type constructor;
//! see the [`kind`](self::Kind) documentation.
//!
//! ## Algebraic Structures
//!
//! - [`Semigroup`]: types with an associative binary operation (`combine`)
//! - [`Monoid`]: semigroups with an identity element (`empty`)
//! - [`Sum`], [`Product`], [`Max`], [`Min`]: wrappers selecting a monoid
//!
//! # Examples
//!
//! ```rust
//! use kindred::instances::{OptionInstance, VecInstance};
//! use kindred::typeclass::{Functor, Kind, Monad};
//!
//! fn increment_all<F: Kind, I: Functor<F>>(functor: &I, fa: F::Of<i32>) -> F::Of<i32> {
//!     functor.map(fa, |value: i32| value + 1)
//! }
//!
//! assert_eq!(increment_all(&OptionInstance, Some(1)), Some(2));
//! assert_eq!(increment_all(&VecInstance, vec![1, 2]), vec![2, 3]);
//! assert_eq!(OptionInstance.flat_map(Some(2), |value: i32| value.checked_sub(3)), Some(-1));
//! ```

mod applicative;
mod applicative_error;
mod bifunctor;
mod comonad;
mod foldable;
mod functor;
mod identity;
mod kind;
mod monad;
mod monoid;
mod semigroup;
mod semigroup_k;
mod traversable;
mod wrappers;

pub use applicative::{Applicative, map_via_ap};
pub use applicative_error::{ApplicativeError, MonadError, panic_message};
pub use bifunctor::{Bifoldable, Bifunctor, Bitraverse};
pub use comonad::{Bimonad, Comonad};
pub use foldable::Foldable;
pub(crate) use foldable::fold_right_iterator;
pub use functor::Functor;
pub use identity::Identity;
pub use kind::{CloneK, ClonedK, Hk, Kind, Kind2, Kinded, Typeclass, lift, recover};
pub use monad::{Monad, ap_via_flat_map, map_via_flat_map};
pub use monoid::Monoid;
pub use semigroup::Semigroup;
pub use semigroup_k::{MonoidK, SemigroupK};
pub use traversable::{Traverse, map_via_traverse};
pub use wrappers::{Bounded, Max, Min, Product, Sum};
