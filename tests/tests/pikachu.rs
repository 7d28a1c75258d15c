// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use ozul::Value;
use rstest::rstest;
use tests::interpret_expression;

#[rstest]
#[case("10", Value::Integer(10))]
#[case("5 + 2", Value::Integer(7))]
#[case("4 * 9", Value::Integer(36))]
#[case("9 / 2", Value::Integer(4))]
#[case("3 - 10", Value::Integer(-7))]
fn binary_operations(#[case] input: &str, #[case] expected: Value) {
    let actual = interpret_expression(input);
    assert_eq!(actual, expected);
}

#[rstest]
#[case("10 * 4 + 5", Value::Integer(45))]
#[case("10 + 4 + 5", Value::Integer(19))]
#[case("10 + 4 * 5", Value::Integer(30))]
#[case("10 + 5 * 2", Value::Integer(20))]
#[case("20 - 6 / 3 * 2", Value::Integer(16))]
#[case("100 / 10 / 5", Value::Integer(2))]
fn pemdas(#[case] input: &str, #[case] expected: Value) {
    let actual = interpret_expression(input);
    assert_eq!(actual, expected);
}

#[rstest]
#[case("1.5 + 1", Value::Float(2.5))]
#[case("7 / 2.0", Value::Float(3.5))]
#[case("0.5 * 0.5", Value::Float(0.25))]
fn psyduck(#[case] input: &str, #[case] expected: Value) {
    let actual = interpret_expression(input);
    assert_eq!(actual, expected);
}
