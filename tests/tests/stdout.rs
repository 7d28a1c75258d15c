// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use rstest::rstest;
use tests::{interpret_and_return_error, interpret_and_return_stdout, parse_with_diagnostics};

#[rstest]
#[case(
    r#"
        release "Hello!"
    "#,
    "",
    &[
        "Hello!",
    ],
)]
#[case(
    r#"
        Pikachu health is 10 + 5 * 2
        release health
        health evolves to health - 5
        release health
    "#,
    "",
    &[
        "20",
        "15",
    ],
)]
#[case(
    r#"
        Psyduck speed is 2
        release speed
        speed evolves to speed / 4
        release speed
    "#,
    "",
    &[
        "2.000000",
        "0.500000",
    ],
)]
#[case(
    r#"
        Eevee greeting is "Hello " + "Ash"
        release greeting
    "#,
    "",
    &[
        "Hello Ash",
    ],
)]
#[case(
    r#"
        catch age from wildgrass
        release age
    "#,
    "42\n",
    &[
        "42",
    ],
)]
#[case(
    r#"
        catch name from wildgrass
        catch level from wildgrass
        release name + " is level " + level
        release level * 2
    "#,
    "Pikachu\n12\n",
    &[
        "Pikachu is level 12",
        "24",
    ],
)]
#[case(
    r#"
        Pikachu a is 5 release a
        a
    "#,
    "",
    &[
        "5",
        "5",
    ],
)]
fn stdout(#[case] code: &str, #[case] stdin: &str, #[case] expected: &[&str]) {
    let actual = interpret_and_return_stdout(code, stdin);
    assert_eq!(actual, expected);
}

#[rstest]
#[case("release missingno", "UndefinedVariable")]
#[case("missingno evolves to 1", "VariableNotDeclared")]
#[case("release 5 / 0", "DivisionByZero")]
#[case("release 5.0 / 0", "DivisionByZero")]
fn fatal(#[case] code: &str, #[case] expected: &str) {
    let error = interpret_and_return_error(code);
    assert_eq!(error.name(), expected);
}

#[test]
fn malformed_statement_is_dropped() {
    let (program, diagnostics) = parse_with_diagnostics("Pikachu is 5\nrelease 1\n");

    assert!(!diagnostics.is_empty());
    assert_eq!(program.len(), 1);
}
