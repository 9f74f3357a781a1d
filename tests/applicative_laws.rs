//! Property-based tests for Applicative laws.
//!
//! - **Identity**: `ap(v, pure(id)) == v`
//! - **Homomorphism**: `ap(pure(x), pure(f)) == pure(f(x))`
//! - **Interchange**: `ap(pure(y), u) == ap(u, pure(|f| f(y)))`
//! - **map2 consistency**: `map2(fa, fb, f) == ap(fb, map(fa, curried f))`

use kindred::control::Either;
use kindred::instances::{EitherInstance, IdentityInstance, OptionInstance, ResultInstance, VecInstance};
use kindred::typeclass::{Applicative, Functor, Identity};
use proptest::prelude::*;

type IntFunction = fn(i32) -> i32;

fn identity(n: i32) -> i32 {
    n
}

fn add_three(n: i32) -> i32 {
    n.wrapping_add(3)
}

fn negate(n: i32) -> i32 {
    n.wrapping_neg()
}

// =============================================================================
// Option<A>
// =============================================================================

proptest! {
    #[test]
    fn prop_option_identity_law(value in any::<Option<i32>>()) {
        let functions: Option<IntFunction> = OptionInstance.pure(identity as IntFunction);
        prop_assert_eq!(OptionInstance.ap(value, functions), value);
    }

    #[test]
    fn prop_option_homomorphism_law(value in any::<i32>()) {
        let left = OptionInstance.ap(OptionInstance.pure(value), OptionInstance.pure(add_three as IntFunction));
        prop_assert_eq!(left, OptionInstance.pure(add_three(value)));
    }

    #[test]
    fn prop_option_interchange_law(value in any::<i32>(), present in any::<bool>()) {
        let functions: Option<IntFunction> = present.then_some(add_three as IntFunction);
        let left = OptionInstance.ap(OptionInstance.pure(value), functions);
        let right = OptionInstance.ap(functions, OptionInstance.pure(move |function: IntFunction| function(value)));
        prop_assert_eq!(left, right);
    }

    #[test]
    fn prop_option_map2_agrees_with_product(left in any::<Option<i32>>(), right in any::<Option<i32>>()) {
        let combined = OptionInstance.map2(left, right, |a: i32, b: i32| a.wrapping_add(b));
        let via_product = OptionInstance.map(OptionInstance.product(left, right), |(a, b): (i32, i32)| a.wrapping_add(b));
        prop_assert_eq!(combined, via_product);
    }
}

// =============================================================================
// Result<A, E>
// =============================================================================

proptest! {
    #[test]
    fn prop_result_identity_law(value in prop::result::maybe_ok(any::<i32>(), any::<String>())) {
        let instance = ResultInstance::<String>::new();
        let functions: Result<IntFunction, String> = instance.pure(identity as IntFunction);
        prop_assert_eq!(instance.ap(value.clone(), functions), value);
    }

    #[test]
    fn prop_result_map2_keeps_first_error(
        left in prop::result::maybe_ok(any::<i32>(), "[a-z]{1,4}"),
        right in prop::result::maybe_ok(any::<i32>(), "[A-Z]{1,4}"),
    ) {
        let instance = ResultInstance::<String>::new();
        let combined = instance.map2(left.clone(), right.clone(), |a: i32, b: i32| a.wrapping_sub(b));
        let expected = match (left, right) {
            (Err(error), _) | (Ok(_), Err(error)) => Err(error),
            (Ok(a), Ok(b)) => Ok(a.wrapping_sub(b)),
        };
        prop_assert_eq!(combined, expected);
    }
}

// =============================================================================
// Vec<A>
// =============================================================================

proptest! {
    #[test]
    fn prop_vec_identity_law(values in prop::collection::vec(any::<i32>(), 0..16)) {
        let functions: Vec<IntFunction> = VecInstance.pure(identity as IntFunction);
        prop_assert_eq!(VecInstance.ap(values.clone(), functions), values);
    }

    #[test]
    fn prop_vec_interchange_law(value in any::<i32>()) {
        let functions: Vec<IntFunction> = vec![add_three, negate];
        let left = VecInstance.ap(VecInstance.pure(value), functions.clone());
        let right = VecInstance.ap(functions, VecInstance.pure(move |function: IntFunction| function(value)));
        prop_assert_eq!(left, right);
    }

    #[test]
    fn prop_vec_map2_is_cartesian(
        left in prop::collection::vec(any::<i8>(), 0..8),
        right in prop::collection::vec(any::<i8>(), 0..8),
    ) {
        let combined = VecInstance.map2(left.clone(), right.clone(), |a: i8, b: i8| (a, b));
        let expected: Vec<(i8, i8)> = left.iter().flat_map(|a| right.iter().map(move |b| (*a, *b))).collect();
        prop_assert_eq!(combined, expected);
    }
}

// =============================================================================
// Identity, Either
// =============================================================================

proptest! {
    #[test]
    fn prop_identity_homomorphism_law(value in any::<i32>()) {
        let left = IdentityInstance.ap(IdentityInstance.pure(value), IdentityInstance.pure(negate as IntFunction));
        prop_assert_eq!(left, Identity(negate(value)));
    }

    #[test]
    fn prop_either_identity_law(right in any::<i32>(), is_left in any::<bool>()) {
        let instance = EitherInstance::<String>::new();
        let value: Either<String, i32> = if is_left { Either::Left(right.to_string()) } else { Either::Right(right) };
        let functions: Either<String, IntFunction> = instance.pure(identity as IntFunction);
        prop_assert_eq!(instance.ap(value.clone(), functions), value);
    }
}
