//! Property-based tests for Functor laws.
//!
//! - **Identity Law**: `map(fa, |x| x) == fa`
//! - **Composition Law**: `map(map(fa, f), g) == map(fa, |x| g(f(x)))`

use kindred::control::{Either, Eval};
use kindred::instances::{EitherInstance, EvalInstance, IdentityInstance, OptionInstance, ResultInstance, VecInstance};
use kindred::typeclass::{Functor, Identity};
use proptest::prelude::*;

fn increment(n: i32) -> i32 {
    n.wrapping_add(1)
}

fn double(n: i32) -> i32 {
    n.wrapping_mul(2)
}

fn either_strategy() -> impl Strategy<Value = Either<String, i32>> {
    prop_oneof![any::<String>().prop_map(Either::Left), any::<i32>().prop_map(Either::Right)]
}

// =============================================================================
// Option<A>
// =============================================================================

proptest! {
    #[test]
    fn prop_option_identity_law(value in any::<Option<i32>>()) {
        prop_assert_eq!(OptionInstance.map(value, |x: i32| x), value);
    }

    #[test]
    fn prop_option_composition_law(value in any::<Option<i32>>()) {
        let left = OptionInstance.map(OptionInstance.map(value, increment), double);
        let right = OptionInstance.map(value, |x: i32| double(increment(x)));
        prop_assert_eq!(left, right);
    }
}

// =============================================================================
// Result<A, E>
// =============================================================================

proptest! {
    #[test]
    fn prop_result_identity_law(value in prop::result::maybe_ok(any::<i32>(), any::<String>())) {
        let instance = ResultInstance::<String>::new();
        prop_assert_eq!(instance.map(value.clone(), |x: i32| x), value);
    }

    #[test]
    fn prop_result_composition_law(value in prop::result::maybe_ok(any::<i32>(), any::<String>())) {
        let instance = ResultInstance::<String>::new();
        let left = instance.map(instance.map(value.clone(), increment), double);
        let right = instance.map(value, |x: i32| double(increment(x)));
        prop_assert_eq!(left, right);
    }
}

// =============================================================================
// Vec<A>
// =============================================================================

proptest! {
    #[test]
    fn prop_vec_identity_law(values in prop::collection::vec(any::<i32>(), 0..32)) {
        prop_assert_eq!(VecInstance.map(values.clone(), |x: i32| x), values);
    }

    #[test]
    fn prop_vec_composition_law(values in prop::collection::vec(any::<i32>(), 0..32)) {
        let left = VecInstance.map(VecInstance.map(values.clone(), increment), double);
        let right = VecInstance.map(values, |x: i32| double(increment(x)));
        prop_assert_eq!(left, right);
    }

    #[test]
    fn prop_vec_map_preserves_length(values in prop::collection::vec(any::<String>(), 0..32)) {
        let length = values.len();
        prop_assert_eq!(VecInstance.map(values, |text: String| text.len()).len(), length);
    }
}

// =============================================================================
// Identity, Either, Eval
// =============================================================================

proptest! {
    #[test]
    fn prop_identity_composition_law(value in any::<i32>()) {
        let left = IdentityInstance.map(IdentityInstance.map(Identity(value), increment), double);
        prop_assert_eq!(left, Identity(double(increment(value))));
    }

    #[test]
    fn prop_either_identity_law(value in either_strategy()) {
        let instance = EitherInstance::<String>::new();
        prop_assert_eq!(instance.map(value.clone(), |x: i32| x), value);
    }

    #[test]
    fn prop_either_composition_law(value in either_strategy()) {
        let instance = EitherInstance::<String>::new();
        let left = instance.map(instance.map(value.clone(), increment), double);
        let right = instance.map(value, |x: i32| double(increment(x)));
        prop_assert_eq!(left, right);
    }

    #[test]
    fn prop_eval_composition_law(value in any::<i32>()) {
        let left = EvalInstance.map(EvalInstance.map(Eval::now(value), increment), double).value();
        let right = EvalInstance.map(Eval::later(move || value), |x: i32| double(increment(x))).value();
        prop_assert_eq!(left, right);
    }
}
