// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use ozul::{parse, tokenize, Expression, ParseDiagnostic, Parser, Program, Value};
use ozul_interpreter::{Interpreter, RuntimeError};

fn init_logger() {
    let _ = env_logger::builder()
        .is_test(true)
        .filter(None, log::LevelFilter::max())
        .try_init();
}

fn parse_program(input: &str) -> Program {
    init_logger();

    let (program, diagnostics) = parse(&tokenize(input));
    assert!(diagnostics.is_empty(), "Diagnostics: {diagnostics:#?}");

    program
}

fn parse_expression(input: &str) -> Expression {
    let tokens = tokenize(input);
    let mut parser = Parser::new(&tokens);

    let expr = parser.parse_expression().unwrap();
    assert!(parser.is_at_end());

    expr
}

/// Parses the input, returning the program and the diagnostics of the
/// statements that were dropped.
pub fn parse_with_diagnostics(input: &str) -> (Program, Vec<ParseDiagnostic>) {
    init_logger();
    parse(&tokenize(input))
}

pub fn interpret_expression(input: &str) -> Value {
    let expression = parse_expression(input);
    Interpreter::new("".as_bytes(), Vec::new())
        .execute_expression(&expression)
        .unwrap()
}

/// Runs the program with `stdin` as its input, returning the lines it wrote.
/// `catch` doesn't prompt, so only `release` output is collected.
pub fn interpret_and_return_stdout(input: &str, stdin: &str) -> Vec<String> {
    let program = parse_program(input);

    let mut interpreter = Interpreter::new(stdin.as_bytes(), Vec::new()).with_prompt(false);
    interpreter.execute_program(&program).unwrap();

    let output = String::from_utf8(interpreter.into_output()).unwrap();
    output.lines().map(str::to_string).collect()
}

pub fn interpret_and_return_error(input: &str) -> RuntimeError {
    let program = parse_program(input);

    let mut interpreter = Interpreter::new("".as_bytes(), Vec::new());
    interpreter.execute_program(&program).unwrap_err()
}

pub fn generate_c(input: &str) -> String {
    let program = parse_program(input);
    ozul_compiler::generate(&program).unwrap()
}
