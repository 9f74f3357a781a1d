//! Comonad type class - the dual of Monad.
//!
//! Where a monad puts values into a context (`pure`) and sequences
//! context-producing functions (`flat_map`), a comonad takes values out of a
//! context (`extract`) and extends context-consuming functions over it
//! (`coflat_map`).
//!
//! # Laws
//!
//! ```text
//! extract(coflat_map(wa, f)) == f(wa)
//! coflat_map(wa, extract) == wa
//! coflat_map(coflat_map(wa, f), g) == coflat_map(wa, |x| g(coflat_map(x, f)))
//! ```
//!
//! [`Bimonad`] marks instances that are both a [`Monad`] and a [`Comonad`]
//! for the same witness. It adds no operations of its own.

use super::functor::Functor;
use super::kind::Kind;
use super::monad::Monad;

/// A type class for functors whose value can always be extracted.
pub trait Comonad<F: Kind>: Functor<F> {
    /// Takes the focused value out of the context.
    fn extract<A: 'static>(&self, wa: F::Of<A>) -> A;

    /// Extends a context-consuming function over the context.
    fn coflat_map<A, B, Func>(&self, wa: F::Of<A>, function: Func) -> F::Of<B>
    where
        A: 'static,
        B: 'static,
        Func: FnMut(F::Of<A>) -> B + 'static;

    /// Nests the context inside itself.
    fn coflatten<A: 'static>(&self, wa: F::Of<A>) -> F::Of<F::Of<A>> {
        self.coflat_map(wa, |inner: F::Of<A>| inner)
    }
}

/// Instances that are a monad and a comonad over the same witness.
///
/// Implemented automatically; requiring `Bimonad<F>` is shorthand for
/// requiring both.
pub trait Bimonad<F: Kind>: Monad<F> + Comonad<F> {}

impl<F: Kind, T: Monad<F> + Comonad<F>> Bimonad<F> for T {}
