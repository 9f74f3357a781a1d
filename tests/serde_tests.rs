#![cfg(feature = "serde")]

//! Serialization of the plain data types.

use kindred::control::Either;
use kindred::typeclass::{Identity, Max, Sum};
use rstest::rstest;

#[rstest]
fn either_json_roundtrip() {
    let left: Either<String, i32> = Either::Left("error".to_string());
    let right: Either<String, i32> = Either::Right(42);

    let left_json = serde_json::to_string(&left).unwrap();
    let right_json = serde_json::to_string(&right).unwrap();

    assert_eq!(left_json, r#"{"Left":"error"}"#);
    assert_eq!(serde_json::from_str::<Either<String, i32>>(&left_json).unwrap(), left);
    assert_eq!(serde_json::from_str::<Either<String, i32>>(&right_json).unwrap(), right);
}

#[rstest]
fn newtypes_serialize_as_their_content() {
    assert_eq!(serde_json::to_string(&Identity(7)).unwrap(), "7");
    assert_eq!(serde_json::to_string(&Sum(3_u8)).unwrap(), "3");
    assert_eq!(serde_json::from_str::<Max<i64>>("-4").unwrap(), Max(-4));
}

#[rstest]
fn nested_values_roundtrip() {
    let value: Vec<Identity<Either<u8, Option<String>>>> =
        vec![Identity(Either::Left(1)), Identity(Either::Right(Some("x".to_string()))), Identity(Either::Right(None))];
    let json = serde_json::to_string(&value).unwrap();
    let restored: Vec<Identity<Either<u8, Option<String>>>> = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, value);
}
