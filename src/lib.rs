//! # kindred
//!
//! Higher-kinded programming for Rust: one algorithm written once over every
//! container that supports it.
//!
//! ## Overview
//!
//! - **Kinds**: a type constructor is named by an uninhabited witness type
//!   implementing [`Kind`](typeclass::Kind); `F::Of<A>` is "F applied to A".
//!   `#[derive(Kind)]` writes the witness for your own containers.
//! - **Type classes**: Functor, Applicative, Monad, Foldable, Traverse,
//!   Comonad, ApplicativeError, Bifunctor and friends, implemented by
//!   stateless instance values passed explicitly.
//! - **Instances**: `Option`, `Result`, `Vec`, `Identity`, `Eval`, `Either`
//!   and tuples.
//! - **Composition**: instances for F-of-G built from instances for F and G.
//! - **Transformers**: `OptionT` and `EitherT` over any base monad.
//! - **Binding**: direct-style blocks interpreted as `flat_map` chains, plus
//!   the `mdo!` macro.
//!
//! ## Feature Flags
//!
//! - `compose`: composition combinators (default)
//! - `transformer`: `OptionT` and `EitherT` (default)
//! - `binding`: the binding interpreter and `mdo!` (default)
//! - `derive`: `#[derive(Kind)]` (default)
//! - `async`: `TokioContext` on a shared tokio runtime
//! - `rayon`: `RayonContext`
//! - `serde`: serde support for `Either`, `Identity` and the wrappers
//! - `full`: all of the above
//!
//! ## Example
//!
//! ```rust
//! use kindred::prelude::*;
//!
//! fn double_all<F: Kind, I: Functor<F>>(instance: &I, values: F::Of<i32>) -> F::Of<i32> {
//!     instance.map(values, |n: i32| n * 2)
//! }
//!
//! assert_eq!(double_all(&OptionInstance, Some(4)), Some(8));
//! assert_eq!(double_all(&VecInstance, vec![1, 2]), vec![2, 4]);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// ```rust
/// use kindred::prelude::*;
/// ```
pub mod prelude {
    pub use crate::control::*;
    pub use crate::instances::*;
    pub use crate::typeclass::*;

    #[cfg(feature = "compose")]
    pub use crate::compose::*;

    #[cfg(feature = "transformer")]
    pub use crate::transformer::*;

    #[cfg(feature = "binding")]
    pub use crate::binding::*;

    #[cfg(feature = "derive")]
    pub use kindred_derive::Kind;
}

pub mod control;
pub mod instances;
pub mod typeclass;

#[cfg(feature = "compose")]
pub mod compose;

#[cfg(feature = "transformer")]
pub mod transformer;

#[cfg(feature = "binding")]
pub mod binding;

/// Derives a [`Kind`](typeclass::Kind) witness for a generic type.
///
/// For `struct Tree<A>` this generates `enum TreeK {}` with
/// `type Of<A> = Tree<A>`, and a [`Kinded`](typeclass::Kinded) impl for
/// `Tree<A>`. The element is the last type parameter; earlier ones become
/// parameters of the witness.
#[cfg(feature = "derive")]
pub use kindred_derive::Kind;
