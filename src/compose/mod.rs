//! Composition combinators: capability instances for F-of-G.
//!
//! Given an instance for an outer family `F` and one for an inner family `G`,
//! [`compose`] builds an instance for the nested family [`ComposeK<F, G>`],
//! whose values are [`Nested<F, G, A>`]. Nothing is written per pair of
//! containers: `Vec` of `Option`, `Option` of `Result`, or a transformer's
//! `M` of `Option` all share the same code.
//!
//! # Overview
//!
//! - [`ComposeK`] / [`Nested`]: the witness and value type of F-of-G
//! - [`Composed`], [`compose`], [`ComposeExt`]: Functor, Foldable, Traverse,
//!   Applicative, SemigroupK and MonoidK for F-of-G
//! - [`ComposeBiK`] / [`NestedBi`] / [`BiComposed`]: Bifoldable for an `F` of
//!   two-parameter values
//!
//! # Examples
//!
//! ```rust
//! use kindred::compose::{Nested, compose};
//! use kindred::instances::{OptionInstance, OptionK, VecInstance, VecK};
//! use kindred::typeclass::Traverse;
//!
//! let instance = compose(VecInstance, OptionInstance);
//! let nested: Nested<VecK, OptionK, &str> = Nested::nest(vec![Some("1"), None, Some("3")]);
//! let parsed = instance.traverse(&OptionInstance, nested, |text: &str| text.parse::<i32>().ok());
//! assert_eq!(parsed.map(Nested::unnest), Some(vec![Some(1), None, Some(3)]));
//! ```

mod bicomposed;
mod composed;
mod nested;

pub use bicomposed::BiComposed;
pub use composed::{ComposeExt, Composed, compose};
pub use nested::{ComposeBiK, ComposeK, Nested, NestedBi};
