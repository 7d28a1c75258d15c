// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use ozul::Value;
use rstest::rstest;
use tests::interpret_expression;

#[rstest]
#[case("\"Hello \" + \"Ash\"", Value::from("Hello Ash"))]
#[case("\"Route \" + 1", Value::from("Route 1"))]
#[case("1 + \"st\"", Value::from("1st"))]
#[case("\"x\" + 0.5", Value::from("x0.500000"))]
#[case("\"speed \" + 2.5", Value::from("speed 2.500000"))]
#[case("\"a\" + \"b\" + \"c\"", Value::from("abc"))]
#[case("1 + 2 + \"!\"", Value::from("3!"))]
fn concatenation(#[case] input: &str, #[case] expected: Value) {
    let actual = interpret_expression(input);
    assert_eq!(actual, expected);
}

#[rstest]
#[case("\"4\" * \"5\"", Value::Integer(20))]
#[case("\"Ash\" * 3", Value::Integer(0))]
#[case("\"1.5\" - 0.5", Value::Float(1.0))]
fn numeric_operators_coerce(#[case] input: &str, #[case] expected: Value) {
    let actual = interpret_expression(input);
    assert_eq!(actual, expected);
}
