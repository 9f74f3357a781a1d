//! Derive macro for kindred Kind witnesses.
//!
//! # Example
//!
//! ```rust,ignore
//! use kindred::Kind;
//! use kindred::typeclass::{Kind as _, Kinded, lift, recover};
//!
//! #[derive(Debug, PartialEq, Kind)]
//! struct Tagged<T, A> {
//!     tag: T,
//!     value: A,
//! }
//!
//! // Generated:
//! // - struct TaggedK<T>(Infallible, PhantomData<(T,)>);
//! // - impl<T: 'static> Kind for TaggedK<T> { type Of<A: 'static> = Tagged<T, A>; }
//! // - impl<T: 'static, A: 'static> Kinded for Tagged<T, A> { ... }
//!
//! let tagged = Tagged { tag: "x", value: 1 };
//! assert_eq!(recover::<Tagged<&str, i32>>(lift(tagged)), Tagged { tag: "x", value: 1 });
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

mod kind;

use proc_macro::TokenStream;

/// Derive macro generating a `Kind` witness for a generic type.
///
/// The last type parameter is the element. Earlier type parameters stay
/// fixed and become parameters of the witness, which is named after the type
/// with a `K` suffix and has the type's visibility.
///
/// # Requirements
///
/// - at least one type parameter
/// - no lifetime or const parameters
/// - no bounds on the element parameter, inline or in a where clause
///
/// # Generated Code
///
/// For `pub struct Tree<A>`:
///
/// ```rust,ignore
/// pub enum TreeK {}
///
/// impl ::kindred::typeclass::Kind for TreeK {
///     type Of<A: 'static> = Tree<A>;
/// }
///
/// impl<A: 'static> ::kindred::typeclass::Kinded for Tree<A> {
///     type Witness = TreeK;
///     type Inner = A;
///     fn into_kind(self) -> Self { self }
///     fn from_kind(kind: Self) -> Self { kind }
/// }
/// ```
#[proc_macro_derive(Kind)]
pub fn derive_kind(input: TokenStream) -> TokenStream {
    kind::derive_kind_impl(input)
}
