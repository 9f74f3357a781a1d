//! Applicative type class - lifting values and combining independent effects.
//!
//! An `Applicative<F>` extends [`Functor<F>`] with `pure`, which places a value
//! into a minimal context, and `ap`, which applies functions held in one
//! context to values held in another. Everything else (`product`, `map2`,
//! `map3`, `tupled`, `map2_eval`) is derived from those two primitives.
//!
//! Effects combined through an `Applicative` are independent: no order between
//! the two operands is guaranteed unless the instance documents one.
//!
//! # Laws
//!
//! ## Identity
//!
//! ```text
//! ap(fa, pure(|x| x)) == fa
//! ```
//!
//! ## Homomorphism
//!
//! ```text
//! ap(pure(a), pure(f)) == pure(f(a))
//! ```
//!
//! ## Interchange
//!
//! ```text
//! ap(pure(a), ff) == ap(ff, pure(|f| f(a)))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use kindred::instances::{OptionInstance, VecInstance};
//! use kindred::typeclass::Applicative;
//!
//! assert_eq!(OptionInstance.map2(Some(1), Some(2), |a: i32, b: i32| a + b), Some(3));
//! assert_eq!(
//!     VecInstance.product(vec![1, 2], vec!['a', 'b']),
//!     vec![(1, 'a'), (1, 'b'), (2, 'a'), (2, 'b')]
//! );
//! ```

use super::functor::Functor;
use super::kind::Kind;
use crate::control::Eval;

/// A type class for functors that can lift values and apply lifted functions.
///
/// # Laws
///
/// ## Identity
///
/// ```text
/// applicative.ap(fa, applicative.pure(|x| x)) == fa
/// ```
///
/// ## Homomorphism
///
/// ```text
/// applicative.ap(applicative.pure(a), applicative.pure(f)) == applicative.pure(f(a))
/// ```
///
/// ## Interchange
///
/// ```text
/// applicative.ap(applicative.pure(a), ff) == applicative.ap(ff, applicative.pure(|f| f(a)))
/// ```
pub trait Applicative<F: Kind>: Functor<F> {
    /// Places `value` into a minimal context.
    fn pure<A: 'static>(&self, value: A) -> F::Of<A>;

    /// Applies the functions in `ff` to the values in `fa`.
    ///
    /// # Arguments
    ///
    /// * `fa` - The values
    /// * `ff` - The functions to apply
    ///
    /// # Returns
    ///
    /// The results, shaped by both contexts
    fn ap<A, B, Func>(&self, fa: F::Of<A>, ff: F::Of<Func>) -> F::Of<B>
    where
        A: Clone + 'static,
        B: 'static,
        Func: FnMut(A) -> B + Clone + 'static;

    /// Pairs the values of two contexts.
    fn product<A, B>(&self, fa: F::Of<A>, fb: F::Of<B>) -> F::Of<(A, B)>
    where
        A: Clone + 'static,
        B: Clone + 'static,
    {
        let pairing = self.map(fa, |left: A| move |right: B| (left.clone(), right));
        self.ap(fb, pairing)
    }

    /// Combines the values of two contexts with `function`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kindred::instances::ResultInstance;
    /// use kindred::typeclass::Applicative;
    ///
    /// let instance = ResultInstance::<String>::new();
    /// let sum = instance.map2(Ok(1), Ok(2), |a: i32, b: i32| a + b);
    /// assert_eq!(sum, Ok(3));
    /// ```
    fn map2<A, B, C, Func>(&self, fa: F::Of<A>, fb: F::Of<B>, mut function: Func) -> F::Of<C>
    where
        A: Clone + 'static,
        B: Clone + 'static,
        C: 'static,
        Func: FnMut(A, B) -> C + 'static,
    {
        self.map(self.product(fa, fb), move |(left, right): (A, B)| {
            function(left, right)
        })
    }

    /// Combines the values of three contexts with `function`.
    fn map3<A, B, C, D, Func>(
        &self,
        fa: F::Of<A>,
        fb: F::Of<B>,
        fc: F::Of<C>,
        mut function: Func,
    ) -> F::Of<D>
    where
        A: Clone + 'static,
        B: Clone + 'static,
        C: Clone + 'static,
        D: 'static,
        Func: FnMut(A, B, C) -> D + 'static,
    {
        self.map2(
            self.product(fa, fb),
            fc,
            move |(first, second): (A, B), third: C| function(first, second, third),
        )
    }

    /// Collects three contexts into a context of a triple.
    fn tupled<A, B, C>(&self, fa: F::Of<A>, fb: F::Of<B>, fc: F::Of<C>) -> F::Of<(A, B, C)>
    where
        A: Clone + 'static,
        B: Clone + 'static,
        C: Clone + 'static,
    {
        self.map3(fa, fb, fc, |first, second, third| (first, second, third))
    }

    /// Like [`map2`](Applicative::map2), but the second operand is lazy.
    ///
    /// Instances that can decide the result from `fa` alone (an empty option, an
    /// error) override this so that `fb` is never forced. The default forces
    /// `fb` when the returned `Eval` is evaluated.
    fn map2_eval<A, B, C, Func>(
        &self,
        fa: F::Of<A>,
        fb: Eval<F::Of<B>>,
        function: Func,
    ) -> Eval<F::Of<C>>
    where
        A: Clone + 'static,
        B: Clone + 'static,
        C: 'static,
        Func: FnMut(A, B) -> C + 'static,
    {
        let applicative = self.clone();
        fb.map(move |fb| applicative.map2(fa, fb, function))
    }

    /// The unit value in a minimal context.
    fn unit(&self) -> F::Of<()> {
        self.pure(())
    }
}

/// `map` expressed through `pure` and `ap`.
///
/// Instances may delegate their [`Functor::map`] here when `ap` is their
/// natural primitive.
pub fn map_via_ap<F, I, A, B, Func>(applicative: &I, fa: F::Of<A>, function: Func) -> F::Of<B>
where
    F: Kind,
    I: Applicative<F>,
    A: Clone + 'static,
    B: 'static,
    Func: FnMut(A) -> B + Clone + 'static,
{
    applicative.ap(fa, applicative.pure(function))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::instances::{OptionInstance, VecInstance, VecK};
    use rstest::rstest;
    use std::cell::Cell;
    use std::rc::Rc;

    #[rstest]
    fn option_ap_some_some() {
        assert_eq!(
            OptionInstance.ap(Some(3), Some(|value: i32| value + 1)),
            Some(4)
        );
    }

    #[rstest]
    fn option_ap_none_function() {
        let none: Option<fn(i32) -> i32> = None;
        assert_eq!(OptionInstance.ap(Some(3), none), None);
    }

    #[rstest]
    fn vec_ap_applies_every_function_to_every_value() {
        let functions: Vec<fn(i32) -> i32> = vec![|x| x + 1, |x| x * 10];
        assert_eq!(VecInstance.ap(vec![1, 2], functions), vec![2, 3, 10, 20]);
    }

    #[rstest]
    fn vec_map3_is_cartesian() {
        let result = VecInstance.map3(vec![1, 2], vec![10], vec![100, 200], |a: i32, b: i32, c: i32| {
            a + b + c
        });
        assert_eq!(result, vec![111, 211, 112, 212]);
    }

    #[rstest]
    fn option_tupled() {
        assert_eq!(
            OptionInstance.tupled(Some(1), Some('b'), Some("c")),
            Some((1, 'b', "c"))
        );
    }

    #[rstest]
    fn option_map2_eval_skips_second_operand_on_none() {
        let forced = Rc::new(Cell::new(false));
        let flag = Rc::clone(&forced);
        let lazy = Eval::later(move || {
            flag.set(true);
            Some(1)
        });
        let result = OptionInstance.map2_eval(None::<i32>, lazy, |a: i32, b: i32| a + b);
        assert_eq!(result.value(), None);
        assert!(!forced.get());
    }

    #[rstest]
    fn map_via_ap_agrees_with_map() {
        let via_ap = map_via_ap::<VecK, _, _, _, _>(&VecInstance, vec![1, 2, 3], |value: i32| value * 2);
        assert_eq!(via_ap, VecInstance.map(vec![1, 2, 3], |value: i32| value * 2));
    }

    #[rstest]
    fn unit_is_pure_unit() {
        assert_eq!(OptionInstance.unit(), Some(()));
    }
}
