//! Functor type class - mapping over container values.
//!
//! A `Functor<F>` instance knows how to apply a function to every element of an
//! `F::Of<A>` while preserving its shape.
//!
//! # Laws
//!
//! ## Identity Law
//!
//! ```text
//! functor.map(fa, |x| x) == fa
//! ```
//!
//! ## Composition Law
//!
//! ```text
//! functor.map(functor.map(fa, f), g) == functor.map(fa, |x| g(f(x)))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use kindred::instances::{OptionInstance, VecInstance};
//! use kindred::typeclass::{Functor, Kind};
//!
//! fn describe<F: Kind, I: Functor<F>>(functor: &I, fa: F::Of<i32>) -> F::Of<String> {
//!     functor.map(fa, |number: i32| format!("#{number}"))
//! }
//!
//! assert_eq!(describe(&OptionInstance, Some(5)), Some("#5".to_string()));
//! assert_eq!(
//!     describe(&VecInstance, vec![1, 2]),
//!     vec!["#1".to_string(), "#2".to_string()]
//! );
//! ```

use super::kind::{Kind, Typeclass};

/// A type class for witnesses whose containers can be mapped over.
///
/// # Laws
///
/// ## Identity Law
///
/// ```text
/// functor.map(fa, |x| x) == fa
/// ```
///
/// ## Composition Law
///
/// ```text
/// functor.map(functor.map(fa, f), g) == functor.map(fa, |x| g(f(x)))
/// ```
pub trait Functor<F: Kind>: Typeclass {
    /// Applies `function` to every element, preserving the structure.
    ///
    /// # Arguments
    ///
    /// * `fa` - The container to transform
    /// * `function` - The element transformation, called once per element
    ///
    /// # Returns
    ///
    /// A container of the same shape holding the transformed elements
    fn map<A, B, Func>(&self, fa: F::Of<A>, function: Func) -> F::Of<B>
    where
        A: 'static,
        B: 'static,
        Func: FnMut(A) -> B + 'static;

    /// Discards the elements, keeping only the structure.
    fn void<A: 'static>(&self, fa: F::Of<A>) -> F::Of<()> {
        self.map(fa, |_: A| ())
    }

    /// Replaces every element with `value` (the `as` operation).
    fn as_value<A, B>(&self, fa: F::Of<A>, value: B) -> F::Of<B>
    where
        A: 'static,
        B: Clone + 'static,
    {
        self.map(fa, move |_: A| value.clone())
    }

    /// Pairs every element with `value` on the left.
    fn tuple_left<A, B>(&self, fa: F::Of<A>, value: B) -> F::Of<(B, A)>
    where
        A: 'static,
        B: Clone + 'static,
    {
        self.map(fa, move |element: A| (value.clone(), element))
    }

    /// Pairs every element with `value` on the right.
    fn tuple_right<A, B>(&self, fa: F::Of<A>, value: B) -> F::Of<(A, B)>
    where
        A: 'static,
        B: Clone + 'static,
    {
        self.map(fa, move |element: A| (element, value.clone()))
    }

    /// Turns an element function into a container function.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kindred::instances::OptionInstance;
    /// use kindred::typeclass::Functor;
    ///
    /// let mut increment = OptionInstance.lift(|value: i32| value + 1);
    /// assert_eq!(increment(Some(1)), Some(2));
    /// assert_eq!(increment(None), None);
    /// ```
    fn lift<A, B, Func>(&self, function: Func) -> impl FnMut(F::Of<A>) -> F::Of<B> + 'static
    where
        A: 'static,
        B: 'static,
        Func: FnMut(A) -> B + Clone + 'static,
    {
        let functor = self.clone();
        move |fa| functor.map(fa, function.clone())
    }
}
