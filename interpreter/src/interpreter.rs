// Copyright (C) 2023 - 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use std::io::{BufRead, StdinLock, Stdout, Write};

use log::{debug, trace};
use ozul::*;

use crate::{RuntimeError, RuntimeErrorKind, Scope};

/// Interprets the program on standard input and output.
pub fn run(program: &Program) -> Result<(), RuntimeError> {
    Interpreter::stdio().execute_program(program)
}

pub struct Interpreter<I, O>
        where I: BufRead, O: Write {
    input: I,
    output: O,
    scope: Scope,
    steps: usize,
    step_limit: usize,
    prompt: bool,
}

impl Interpreter<StdinLock<'static>, Stdout> {
    pub fn stdio() -> Self {
        Self::new(std::io::stdin().lock(), std::io::stdout())
    }
}

impl<I, O> Interpreter<I, O>
        where I: BufRead, O: Write {
    pub fn new(input: I, output: O) -> Self {
        Self {
            input,
            output,
            scope: Scope::new(),
            steps: 0,
            step_limit: DEFAULT_STEP_LIMIT,
            prompt: true,
        }
    }

    #[must_use]
    pub fn with_step_limit(mut self, step_limit: usize) -> Self {
        self.step_limit = step_limit;
        self
    }

    /// Whether `catch` writes `Enter value for <name>: ` before reading.
    #[must_use]
    pub fn with_prompt(mut self, prompt: bool) -> Self {
        self.prompt = prompt;
        self
    }

    #[must_use]
    pub fn with_config(self, config: &ConfigSectionInterpreter) -> Self {
        self.with_step_limit(config.step_limit)
            .with_prompt(config.prompt)
    }

    #[must_use]
    pub fn scope(&self) -> &Scope {
        &self.scope
    }

    pub fn into_output(self) -> O {
        self.output
    }

    pub fn execute_program(&mut self, program: &Program) -> Result<(), RuntimeError> {
        debug!("Executing {} statement(s)", program.len());

        for statement in program.statements() {
            self.execute_statement(statement)
                .map_err(|kind| RuntimeError::new(kind, statement.range))?;
        }

        self.output.flush()
            .map_err(|e| RuntimeError::new(RuntimeErrorKind::Io(e), FileRange::default()))
    }

    fn execute_statement(&mut self, statement: &Statement) -> Result<(), RuntimeErrorKind> {
        if self.steps >= self.step_limit {
            return Err(RuntimeErrorKind::StepLimitExceeded { limit: self.step_limit });
        }
        self.steps += 1;

        trace!("Executing statement: {statement}");

        match &statement.kind {
            StatementKind::Assignment(statement) => {
                let value = self.execute_expression(&statement.expression)?;
                let name = statement.name.value();

                let Some(typ) = self.scope.type_of(name) else {
                    return Err(RuntimeErrorKind::VariableNotDeclared { name: name.clone() });
                };

                self.scope.overwrite(name, value.coerce(typ));
            }

            StatementKind::Catch(statement) => {
                self.execute_catch_statement(statement)?;
            }

            StatementKind::Declaration(statement) => {
                let value = self.execute_expression(&statement.expression)?;
                self.scope.declare(statement.name.value(), value.coerce(*statement.typ.value()));
            }

            StatementKind::Release(statement) => {
                let value = self.execute_expression(&statement.expression)?;
                writeln!(self.output, "{value}")?;
            }
        }

        Ok(())
    }

    fn execute_catch_statement(&mut self, statement: &CatchStatement) -> Result<(), RuntimeErrorKind> {
        let name = statement.name.value();

        if self.prompt {
            write!(self.output, "Enter value for {name}: ")?;
            self.output.flush()?;
        }

        let mut line = String::new();
        self.input.read_line(&mut line)?;

        let line = line.trim_end_matches(['\n', '\r']);
        self.scope.declare(name, Value::from_input(line));
        Ok(())
    }

    pub fn execute_expression(&self, expression: &Expression) -> Result<Value, RuntimeErrorKind> {
        match expression {
            Expression::BiExpression(expr) => self.execute_bi_expression(expr),
            Expression::Primary(expr) => self.execute_expression_primary(expr),
        }
    }

    fn execute_expression_primary(&self, expression: &PrimaryExpression) -> Result<Value, RuntimeErrorKind> {
        Ok(match expression {
            PrimaryExpression::IntegerLiteral(integer) => Value::Integer(*integer),
            PrimaryExpression::FloatLiteral(float) => Value::Float(*float),
            PrimaryExpression::StringLiteral(str) => Value::String(str.clone()),

            PrimaryExpression::Reference(reference) => {
                match self.scope.find(reference.value()) {
                    Some(value) => value.clone(),
                    None => return Err(RuntimeErrorKind::UndefinedVariable { name: reference.value().clone() }),
                }
            }
        })
    }

    fn execute_bi_expression(&self, expression: &BiExpression) -> Result<Value, RuntimeErrorKind> {
        let lhs = self.execute_expression(&expression.lhs)?;
        let rhs = self.execute_expression(&expression.rhs)?;

        if expression.operator == BiOperator::Add && (lhs.is_string() || rhs.is_string()) {
            return Ok(Value::String(format!("{lhs}{rhs}")));
        }

        if lhs.is_float() || rhs.is_float() {
            return execute_bi_expression_float(expression.operator, lhs.as_float(), rhs.as_float());
        }

        execute_bi_expression_integer(expression.operator, lhs.as_integer(), rhs.as_integer())
    }
}

fn execute_bi_expression_float(operator: BiOperator, lhs: f64, rhs: f64) -> Result<Value, RuntimeErrorKind> {
    let result = match operator {
        BiOperator::Add => lhs + rhs,
        BiOperator::Subtract => lhs - rhs,
        BiOperator::Multiply => lhs * rhs,
        BiOperator::Divide => {
            if rhs == 0.0 {
                return Err(RuntimeErrorKind::DivisionByZero);
            }

            lhs / rhs
        }
    };

    Ok(Value::Float(result))
}

fn execute_bi_expression_integer(operator: BiOperator, lhs: i64, rhs: i64) -> Result<Value, RuntimeErrorKind> {
    let result = match operator {
        BiOperator::Add => lhs.wrapping_add(rhs),
        BiOperator::Subtract => lhs.wrapping_sub(rhs),
        BiOperator::Multiply => lhs.wrapping_mul(rhs),
        BiOperator::Divide => {
            if rhs == 0 {
                return Err(RuntimeErrorKind::DivisionByZero);
            }

            lhs.wrapping_div(rhs)
        }
    };

    Ok(Value::Integer(result))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn init_logger() {
        let _ = env_logger::builder()
            .is_test(true)
            .filter(None, log::LevelFilter::max())
            .try_init();
    }

    fn parse_source(source: &str) -> Program {
        init_logger();
        let (program, diagnostics) = parse(&tokenize(source));
        assert!(diagnostics.is_empty(), "Unexpected diagnostics: {diagnostics:#?}");
        program
    }

    fn interpret(source: &str, input: &str) -> Result<String, RuntimeError> {
        let program = parse_source(source);

        let mut interpreter = Interpreter::new(input.as_bytes(), Vec::new()).with_prompt(false);
        interpreter.execute_program(&program)?;

        Ok(String::from_utf8(interpreter.into_output()).unwrap())
    }

    #[rstest]
    #[case("release 10 + 5 * 2", "20\n")]
    #[case("release 7 / 2", "3\n")]
    #[case("release 2 - 5", "-3\n")]
    #[case("release 2.5 * 2", "5.000000\n")]
    #[case("release 7.0 / 2", "3.500000\n")]
    #[case("release \"Hello \" + \"Ash\"", "Hello Ash\n")]
    #[case("release \"Level \" + 5", "Level 5\n")]
    #[case("release 5 + \" badges\"", "5 badges\n")]
    #[case("release \"speed \" + 2.5", "speed 2.500000\n")]
    #[case("release \"3\" * 2", "6\n")]
    #[case("release \"Ash\" - 1", "-1\n")]
    #[case("release 9223372036854775807 + 1", "-9223372036854775808\n")]
    #[case("42", "42\n")]
    fn release_output(#[case] source: &str, #[case] expected: &str) {
        assert_eq!(interpret(source, "").unwrap(), expected);
    }

    #[rstest]
    #[case("Pikachu x is 2.9", Type::Pikachu, "2")]
    #[case("Psyduck x is 3", Type::Psyduck, "3.000000")]
    #[case("Eevee x is 42", Type::Eevee, "42")]
    #[case("Pikachu x is \"12\"", Type::Pikachu, "12")]
    #[case("Pikachu x is \"Ash\"", Type::Pikachu, "0")]
    fn declaration_coerces_to_declared_type(#[case] declaration: &str, #[case] typ: Type, #[case] expected: &str) {
        let program = parse_source(&format!("{declaration}\nrelease x"));
        let mut interpreter = Interpreter::new("".as_bytes(), Vec::new());

        interpreter.execute_program(&program).unwrap();

        assert_eq!(interpreter.scope().type_of("x"), Some(typ));
        assert_eq!(String::from_utf8(interpreter.into_output()).unwrap(), format!("{expected}\n"));
    }

    #[test]
    fn assignment_keeps_the_type() {
        let program = parse_source(concat!(
            "Pikachu health is 10\n",
            "health evolves to health * 2.55\n",
            "Eevee name is \"Ash\"\n",
            "name evolves to 7\n",
            "release health\n",
            "release name + \"!\"\n",
        ));
        let mut interpreter = Interpreter::new("".as_bytes(), Vec::new());

        interpreter.execute_program(&program).unwrap();

        assert_eq!(interpreter.scope().type_of("health"), Some(Type::Pikachu));
        assert_eq!(interpreter.scope().type_of("name"), Some(Type::Eevee));
        assert_eq!(String::from_utf8(interpreter.into_output()).unwrap(), "25\n7!\n");
    }

    #[rstest]
    #[case("release trainer", "UndefinedVariable")]
    #[case("Pikachu x is y + 1", "UndefinedVariable")]
    #[case("badges evolves to 8", "VariableNotDeclared")]
    #[case("release 5 / 0", "DivisionByZero")]
    #[case("release 5.0 / 0", "DivisionByZero")]
    #[case("Pikachu zero is 0\nrelease 1.5 / zero", "DivisionByZero")]
    fn fatal_error(#[case] source: &str, #[case] expected: &str) {
        let error = interpret(source, "").unwrap_err();
        assert_eq!(error.name(), expected);
    }

    #[test]
    fn error_carries_statement_range() {
        let error = interpret("release 1\n\nrelease oak", "").unwrap_err();

        assert_eq!(error.range.start().line(), 2);
        assert_eq!(error.to_string(), "Undefined variable: oak");
    }

    #[test]
    fn output_before_error_is_kept() {
        let program = parse_source("release 1\nrelease 1 / 0\nrelease 2");
        let mut interpreter = Interpreter::new("".as_bytes(), Vec::new());

        assert!(interpreter.execute_program(&program).is_err());
        assert_eq!(String::from_utf8(interpreter.into_output()).unwrap(), "1\n");
    }

    #[rstest]
    #[case("42\n", Value::Integer(42))]
    #[case("2.5\r\n", Value::Float(2.5))]
    #[case("Ash\n", Value::from("Ash"))]
    #[case("Misty", Value::from("Misty"))]
    #[case("", Value::from(""))]
    fn catch_classifies_input(#[case] input: &str, #[case] expected: Value) {
        let program = parse_source("catch age from wildgrass");
        let mut interpreter = Interpreter::new(input.as_bytes(), Vec::new()).with_prompt(false);

        interpreter.execute_program(&program).unwrap();

        assert_eq!(interpreter.scope().find("age"), Some(&expected));
    }

    #[test]
    fn catch_writes_prompt() {
        let program = parse_source("catch age from wildgrass\nrelease age");
        let mut interpreter = Interpreter::new("42\n".as_bytes(), Vec::new());

        interpreter.execute_program(&program).unwrap();

        assert_eq!(String::from_utf8(interpreter.into_output()).unwrap(), "Enter value for age: 42\n");
    }

    #[test]
    fn catch_reads_one_line_each() {
        let output = interpret(
            "catch a from wildgrass\ncatch b from wildgrass\nrelease a + b",
            "1\n2\n",
        ).unwrap();

        assert_eq!(output, "3\n");
    }

    #[test]
    fn step_limit() {
        let program = parse_source("release 1\nrelease 2\nrelease 3");

        let mut interpreter = Interpreter::new("".as_bytes(), Vec::new()).with_step_limit(3);
        assert!(interpreter.execute_program(&program).is_ok());

        let mut interpreter = Interpreter::new("".as_bytes(), Vec::new()).with_step_limit(2);
        let error = interpreter.execute_program(&program).unwrap_err();
        assert!(matches!(error.kind, RuntimeErrorKind::StepLimitExceeded { limit: 2 }));
        assert_eq!(String::from_utf8(interpreter.into_output()).unwrap(), "1\n2\n");
    }

    #[test]
    fn hand_built_program() {
        let program = Program::from_iter([
            StatementKind::release(Expression::binary(
                Expression::binary(Expression::integer(10), BiOperator::Multiply, Expression::integer(2)),
                BiOperator::Add,
                Expression::binary(Expression::integer(5), BiOperator::Subtract, Expression::integer(3)),
            )),
        ]);
        let mut interpreter = Interpreter::new("".as_bytes(), Vec::new());

        interpreter.execute_program(&program).unwrap();

        assert_eq!(String::from_utf8(interpreter.into_output()).unwrap(), "22\n");
    }
}
