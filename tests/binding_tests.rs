//! Integration tests for the binding interpreter.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use kindred::binding::{BindingError, binding, binding_catch, binding_filter, cobinding};
use kindred::control::{Either, Eval};
use kindred::instances::{EitherInstance, EvalInstance, IdentityInstance, OptionInstance, ResultInstance, VecInstance};
use kindred::mdo;
use kindred::transformer::{OptionT, OptionTInstance};
use kindred::typeclass::{Identity, Monad};
use rstest::rstest;

// =============================================================================
// Sequencing
// =============================================================================

#[rstest]
fn list_binding_matches_triple_nested_flat_map() {
    let bound: Vec<i32> = binding(&VecInstance, |scope| {
        let x = scope.bind(vec![1, 2])?;
        let y = scope.bind(vec![10, 20])?;
        let z = scope.bind(vec![100])?;
        Ok(x + y + z)
    });

    let nested = VecInstance.flat_map(vec![1, 2], |x: i32| {
        VecInstance.flat_map(vec![10, 20], move |y: i32| VecInstance.flat_map(vec![100], move |z: i32| vec![x + y + z]))
    });

    assert_eq!(bound, vec![111, 121, 112, 122]);
    assert_eq!(bound, nested);
}

#[rstest]
fn later_steps_see_earlier_values() {
    let result: Option<String> = binding(&OptionInstance, |scope| {
        let name = scope.bind(Some("kindred".to_string()))?;
        let length = scope.bind(Some(name.len()))?;
        let doubled = scope.bind(length.checked_mul(2))?;
        Ok(format!("{name}:{length}:{doubled}"))
    });
    assert_eq!(result, Some("kindred:7:14".to_string()));
}

#[rstest]
fn eval_binding_stays_lazy_until_value() {
    let runs = Rc::new(Cell::new(0));
    let counter = Rc::clone(&runs);
    let deferred: Eval<i32> = binding(&EvalInstance, move |scope| {
        let counter = Rc::clone(&counter);
        let x = scope.bind(Eval::later(move || {
            counter.set(counter.get() + 1);
            20
        }))?;
        let y = scope.bind(Eval::now(22))?;
        Ok(x + y)
    });
    assert_eq!(runs.get(), 0);
    assert_eq!(deferred.value(), 42);
    assert_eq!(runs.get(), 1);
}

#[rstest]
fn identity_binding_is_plain_sequencing() {
    let result: Identity<i32> = binding(&IdentityInstance, |scope| {
        let x = scope.bind(Identity(6))?;
        let y = scope.bind(Identity(7))?;
        Ok(x * y)
    });
    assert_eq!(result, Identity(42));
}

#[rstest]
fn transformer_binding_stops_at_absent_value() {
    let instance = OptionTInstance::new(VecInstance);
    let result: OptionT<kindred::instances::VecK, i32> = binding(&instance, |scope| {
        let x = scope.bind(OptionT::new(vec![Some(1), None, Some(3)]))?;
        Ok(x * 10)
    });
    assert_eq!(result.run(), vec![Some(10), None, Some(30)]);
}

#[rstest]
fn hundreds_of_steps_build_one_chain() {
    let result: Option<u32> = binding(&OptionInstance, |scope| {
        let mut total = 0;
        for step in 0..300_u32 {
            total += scope.bind(Some(step))?;
        }
        Ok(total)
    });
    assert_eq!(result, Some((0..300).sum()));
}

// =============================================================================
// Short-circuit
// =============================================================================

#[rstest]
fn raise_at_step_two_of_five_skips_the_rest() {
    let entries = Rc::new(Cell::new(0));
    let after_first = Rc::new(Cell::new(0));
    let reached = Rc::new(RefCell::new(Vec::new()));
    let (entry_count, first_count, log) = (Rc::clone(&entries), Rc::clone(&after_first), Rc::clone(&reached));
    let result: Result<i32, String> = binding_catch(&ResultInstance::new(), |error| error.to_string(), move |scope| {
        entry_count.set(entry_count.get() + 1);
        let one = scope.bind(Ok(1))?;
        first_count.set(first_count.get() + 1);
        let two: i32 = scope.bind_result(Err(format!("failed after {one}")))?;
        for step in 3..=5 {
            log.borrow_mut().push(step);
            scope.bind(Ok(step))?;
        }
        Ok(one + two)
    });
    assert_eq!(result, Err("failed after 1".to_string()));
    // One run suspends at step 1, the replay reaches the raise at step 2.
    assert_eq!(entries.get(), 2);
    assert_eq!(after_first.get(), 1);
    assert!(reached.borrow().is_empty());
}

#[rstest]
fn block_prelude_runs_once_per_suspended_bind_plus_one() {
    let entries = Rc::new(Cell::new(0));
    let counter = Rc::clone(&entries);
    let result: Option<i32> = binding(&OptionInstance, move |scope| {
        counter.set(counter.get() + 1);
        let x = scope.bind(Some(1))?;
        let y = scope.bind(Some(2))?;
        let z = scope.bind(Some(3))?;
        Ok(x + y + z)
    });
    assert_eq!(result, Some(6));
    assert_eq!(entries.get(), 4);
}

#[rstest]
fn raise_matches_raise_error_of_the_instance() {
    let instance = EitherInstance::<String>::new();
    let result: Either<String, i32> = binding_catch(&instance, |error| error.to_string(), |scope| {
        let x = scope.bind(Either::Right(5))?;
        Err(scope.raise(format!("{x} rejected")))
    });
    assert_eq!(result, Either::Left("5 rejected".to_string()));
}

#[rstest]
fn nested_blocks_each_catch_their_own_raise() {
    let instance = ResultInstance::<String>::new();
    let result: Result<(Result<i32, String>, i32), String> =
        binding_catch(&instance, |error| format!("outer: {error}"), move |scope| {
            let inner: Result<i32, String> = binding_catch(&instance, |error| format!("inner: {error}"), |inner_scope| {
                let x = inner_scope.bind(Ok(1))?;
                Err(inner_scope.raise(format!("inner raised at {x}")))
            });
            let y = scope.bind(Ok(2))?;
            Ok((inner, y))
        });
    assert_eq!(result, Ok((Err("inner raised at 1".to_string()), 2)));
}

#[rstest]
fn outer_raise_is_not_swallowed_by_an_inner_block() {
    let instance = ResultInstance::<String>::new();
    let result: Result<i32, String> = binding_catch(&instance, |error| error.to_string(), move |scope| {
        let inner: Result<i32, String> = binding(&instance, |inner_scope| {
            let x = inner_scope.bind(Ok(20))?;
            Ok(x + 1)
        });
        let value = scope.bind(inner)?;
        Err(scope.raise(format!("outer raised with {value}")))
    });
    assert_eq!(result, Err("outer raised with 21".to_string()));
}

#[rstest]
fn inner_panic_is_converted_by_the_inner_block_only() {
    let instance = ResultInstance::<String>::new();
    let result: Result<String, String> = binding_catch(&instance, |error| format!("outer: {error}"), move |scope| {
        let inner: Result<i32, String> =
            binding_catch(&instance, |error| format!("inner: {error}"), |_inner_scope| panic!("inner boom"));
        let message = scope.bind(Ok(inner.unwrap_err()))?;
        Ok(message)
    });
    assert_eq!(result, Ok("inner: binding block panicked: inner boom".to_string()));
}

#[rstest]
fn panic_payload_becomes_a_binding_error() {
    let result: Result<i32, BindingError> =
        binding_catch(&ResultInstance::new(), |error| error, |_scope| panic!("{}", "formatted"));
    assert_eq!(result, Err(BindingError::Panicked { message: "formatted".to_string() }));
}

// =============================================================================
// Filtering
// =============================================================================

#[rstest]
fn filter_keeps_only_matching_paths() {
    let triples: Vec<(u32, u32, u32)> = binding_filter(&VecInstance, |scope| {
        let a = scope.bind((1..=15).collect::<Vec<u32>>())?;
        let b = scope.bind((a..=15).collect::<Vec<u32>>())?;
        let c = scope.bind((b..=15).collect::<Vec<u32>>())?;
        scope.continue_if(a * a + b * b == c * c)?;
        Ok((a, b, c))
    });
    assert_eq!(triples, vec![(3, 4, 5), (5, 12, 13), (6, 8, 10), (9, 12, 15)]);
}

#[rstest]
fn filter_on_option_is_none_when_rejected() {
    let kept: Option<i32> = binding_filter(&OptionInstance, |scope| {
        let x = scope.bind(Some(4))?;
        scope.continue_if(x % 2 == 0)?;
        Ok(x)
    });
    let dropped: Option<i32> = binding_filter(&OptionInstance, |scope| {
        let x = scope.bind(Some(5))?;
        scope.continue_if(x % 2 == 0)?;
        Ok(x)
    });
    assert_eq!(kept, Some(4));
    assert_eq!(dropped, None);
}

// =============================================================================
// Comonads and mdo!
// =============================================================================

#[rstest]
fn cobinding_extracts_in_order() {
    let order = RefCell::new(Vec::new());
    let total = cobinding(&IdentityInstance, |scope| {
        let a = scope.extract(Identity(1));
        order.borrow_mut().push(a);
        let b = scope.extract(Identity(2));
        order.borrow_mut().push(b);
        a + b
    });
    assert_eq!(total, 3);
    assert_eq!(order.into_inner(), vec![1, 2]);
}

#[rstest]
fn mdo_and_binding_agree() {
    let by_macro: Vec<i32> = mdo! { VecInstance;
        x <= vec![1, 2];
        y <= vec![10, 20];
        z <= vec![100];
        yield x + y + z
    };
    let by_interpreter: Vec<i32> = binding(&VecInstance, |scope| {
        let x = scope.bind(vec![1, 2])?;
        let y = scope.bind(vec![10, 20])?;
        let z = scope.bind(vec![100])?;
        Ok(x + y + z)
    });
    assert_eq!(by_macro, by_interpreter);
}
