// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use std::collections::HashMap;

use log::{debug, trace};
use ozul::*;

use crate::{CType, CodeGenError};

const INDENT: &str = "    ";

/// Size of the buffers that hold concatenated strings.
const STRING_BUFFER_SIZE: usize = 256;

#[derive(Debug, Default)]
pub struct CodeGenerator {
    lines: Vec<String>,
    types: HashMap<String, CType>,
    string_buffers: usize,
}

impl CodeGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn generate_program(&mut self, program: &Program) -> Result<String, CodeGenError> {
        self.emit_line("#include <stdio.h>");
        self.emit_line("#include <stdlib.h>");
        self.emit_line("#include <string.h>");
        self.emit_line("");
        self.emit_line("int main() {");

        for statement in program.statements() {
            trace!("Generating statement: {statement}");
            statement.generate(self)?;
        }

        self.emit_statement("return 0;");
        self.emit_line("}");

        debug!("Generated {} lines of C for {} statement(s)", self.lines.len(), program.len());

        let mut code = std::mem::take(&mut self.lines).join("\n");
        code.push('\n');
        Ok(code)
    }

    /// The C type recorded for the variable, if it was declared or caught.
    #[must_use]
    pub fn type_of(&self, name: &str) -> Option<CType> {
        self.types.get(name).copied()
    }

    fn emit_line(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
    }

    fn emit_statement(&mut self, statement: impl AsRef<str>) {
        self.lines.push(format!("{INDENT}{}", statement.as_ref()));
    }

    fn declare(&mut self, name: &str, typ: CType) {
        self.types.insert(name.to_string(), typ);
    }

    fn create_string_buffer(&mut self) -> String {
        let name = format!("str_buffer_{}", self.string_buffers);
        self.string_buffers += 1;

        self.emit_statement(format!("char {name}[{STRING_BUFFER_SIZE}];"));
        name
    }
}

trait GenerateStatement {
    fn generate(&self, generator: &mut CodeGenerator) -> Result<(), CodeGenError>;
}

impl GenerateStatement for Statement {
    fn generate(&self, generator: &mut CodeGenerator) -> Result<(), CodeGenError> {
        match &self.kind {
            StatementKind::Assignment(statement) => statement.generate(generator),
            StatementKind::Catch(statement) => statement.generate(generator),
            StatementKind::Declaration(statement) => statement.generate(generator),
            StatementKind::Release(statement) => statement.generate(generator),
        }
    }
}

impl GenerateStatement for AssignStatement {
    fn generate(&self, generator: &mut CodeGenerator) -> Result<(), CodeGenError> {
        let value = self.expression.generate(generator)?;
        let name = self.name.value();

        if generator.type_of(name).is_none() {
            return Err(CodeGenError::VariableNotDeclared { name: name.clone() });
        }

        generator.emit_statement(format!("{name} = {value};"));
        Ok(())
    }
}

impl GenerateStatement for CatchStatement {
    fn generate(&self, generator: &mut CodeGenerator) -> Result<(), CodeGenError> {
        let name = self.name.value();

        generator.emit_statement(format!("{} {name};", CType::Int));
        generator.emit_statement(format!("scanf(\"{}\", &{name});", CType::Int.format_specifier()));
        generator.declare(name, CType::Int);
        Ok(())
    }
}

impl GenerateStatement for DeclarationStatement {
    fn generate(&self, generator: &mut CodeGenerator) -> Result<(), CodeGenError> {
        let value = self.expression.generate(generator)?;
        let typ = CType::from(*self.typ.value());
        let name = self.name.value();

        generator.emit_statement(format!("{typ} {name} = {value};"));
        generator.declare(name, typ);
        Ok(())
    }
}

impl GenerateStatement for ReleaseStatement {
    fn generate(&self, generator: &mut CodeGenerator) -> Result<(), CodeGenError> {
        let value = self.expression.generate(generator)?;

        let typ = match &self.expression {
            Expression::Primary(PrimaryExpression::Reference(name)) => {
                generator.type_of(name.value())
                    .ok_or_else(|| CodeGenError::UndefinedVariable { name: name.value().clone() })?
            }

            Expression::Primary(PrimaryExpression::IntegerLiteral(..)) => CType::Int,
            Expression::Primary(PrimaryExpression::FloatLiteral(..)) => CType::Double,
            Expression::Primary(PrimaryExpression::StringLiteral(..)) => CType::CharPointer,

            // Binary expressions aren't typed, and are printed as integers.
            Expression::BiExpression(..) => CType::Int,
        };

        generator.emit_statement(format!("printf(\"{}\\n\", {value});", typ.format_specifier()));
        Ok(())
    }
}

trait GenerateExpression {
    /// Returns the C text of the expression. Statements it depends on are
    /// emitted before it.
    fn generate(&self, generator: &mut CodeGenerator) -> Result<String, CodeGenError>;
}

impl GenerateExpression for Expression {
    fn generate(&self, generator: &mut CodeGenerator) -> Result<String, CodeGenError> {
        match self {
            Self::BiExpression(expression) => expression.generate(generator),
            Self::Primary(expression) => expression.generate(generator),
        }
    }
}

impl GenerateExpression for PrimaryExpression {
    fn generate(&self, generator: &mut CodeGenerator) -> Result<String, CodeGenError> {
        Ok(match self {
            Self::IntegerLiteral(integer) => integer.to_string(),
            Self::FloatLiteral(float) => format!("{float:.6}"),
            Self::StringLiteral(str) => quote_c_string(str),

            Self::Reference(name) => {
                if generator.type_of(name.value()).is_none() {
                    return Err(CodeGenError::UndefinedVariable { name: name.value().clone() });
                }

                name.value().clone()
            }
        })
    }
}

impl GenerateExpression for BiExpression {
    fn generate(&self, generator: &mut CodeGenerator) -> Result<String, CodeGenError> {
        let lhs = self.lhs.generate(generator)?;
        let rhs = self.rhs.generate(generator)?;

        if lhs.starts_with('"') || rhs.starts_with('"') {
            let buffer = generator.create_string_buffer();
            generator.emit_statement(format!("strcpy({buffer}, {lhs});"));
            generator.emit_statement(format!("strcat({buffer}, {rhs});"));
            return Ok(buffer);
        }

        Ok(format!("({lhs} {} {rhs})", self.operator))
    }
}

fn quote_c_string(str: &str) -> String {
    let mut quoted = String::with_capacity(str.len() + 2);
    quoted.push('"');

    for c in str.chars() {
        match c {
            '\\' => quoted.push_str("\\\\"),
            '"' => quoted.push_str("\\\""),
            '\n' => quoted.push_str("\\n"),
            '\t' => quoted.push_str("\\t"),
            '\r' => quoted.push_str("\\r"),
            c => quoted.push(c),
        }
    }

    quoted.push('"');
    quoted
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

    fn generate_source(source: &str) -> Result<String, CodeGenError> {
        init_logger();

        let (program, diagnostics) = parse(&tokenize(source));
        assert!(diagnostics.is_empty(), "Unexpected diagnostics: {diagnostics:#?}");

        CodeGenerator::new().generate_program(&program)
    }

    /// The statement lines of the generated `main`, without the indentation.
    fn body(source: &str) -> Vec<String> {
        let code = generate_source(source).unwrap();
        let lines: Vec<&str> = code.lines().collect();

        lines[5..lines.len() - 2].iter()
            .map(|line| line.trim_start().to_string())
            .collect()
    }

    #[test]
    fn empty_program() {
        assert_eq!(generate_source("").unwrap(), concat!(
            "#include <stdio.h>\n",
            "#include <stdlib.h>\n",
            "#include <string.h>\n",
            "\n",
            "int main() {\n",
            "    return 0;\n",
            "}\n",
        ));
    }

    #[test]
    fn full_program() {
        let code = generate_source(concat!(
            "Pikachu health is 10 + 5 * 2\n",
            "health evolves to health - 1\n",
            "release health\n",
        )).unwrap();

        assert_eq!(code, concat!(
            "#include <stdio.h>\n",
            "#include <stdlib.h>\n",
            "#include <string.h>\n",
            "\n",
            "int main() {\n",
            "    int health = (10 + (5 * 2));\n",
            "    health = (health - 1);\n",
            "    printf(\"%d\\n\", health);\n",
            "    return 0;\n",
            "}\n",
        ));
    }

    #[rstest]
    #[case("Pikachu x is 42", "int x = 42;")]
    #[case("Psyduck y is 3.14159", "double y = 3.141590;")]
    #[case("Eevee msg is \"Hi\"", "char* msg = \"Hi\";")]
    #[case("Eevee quote is \"say \\\"", "char* quote = \"say \\\\\";")]
    #[case("release 5", "printf(\"%d\\n\", 5);")]
    #[case("release 2.5", "printf(\"%f\\n\", 2.500000);")]
    #[case("release \"Ash\"", "printf(\"%s\\n\", \"Ash\");")]
    #[case("release 1 + 2", "printf(\"%d\\n\", (1 + 2));")]
    fn single_statement(#[case] source: &str, #[case] expected: &str) {
        assert_eq!(body(source), vec![expected.to_string()]);
    }

    #[test]
    fn release_uses_recorded_type() {
        assert_eq!(body("Psyduck speed is 2.5\nrelease speed\nEevee name is \"Ash\"\nrelease name"), vec![
            "double speed = 2.500000;",
            "printf(\"%f\\n\", speed);",
            "char* name = \"Ash\";",
            "printf(\"%s\\n\", name);",
        ]);
    }

    #[test]
    fn catch_is_an_integer() {
        assert_eq!(body("catch age from wildgrass\nrelease age"), vec![
            "int age;",
            "scanf(\"%d\", &age);",
            "printf(\"%d\\n\", age);",
        ]);
    }

    #[test]
    fn string_concatenation_uses_buffers() {
        assert_eq!(body("Eevee greeting is \"Hello\" + \" Ash\" + \"!\""), vec![
            "char str_buffer_0[256];",
            "strcpy(str_buffer_0, \"Hello\");",
            "strcat(str_buffer_0, \" Ash\");",
            "char str_buffer_1[256];",
            "strcpy(str_buffer_1, str_buffer_0);",
            "strcat(str_buffer_1, \"!\");",
            "char* greeting = str_buffer_1;",
        ]);
    }

    /// Only a string literal operand triggers a buffer, and released binary
    /// expressions are printed as integers either way.
    #[rstest]
    #[case("Eevee a is \"x\"\nEevee b is \"y\"\nrelease a + b", &[
        "char* a = \"x\";",
        "char* b = \"y\";",
        "printf(\"%d\\n\", (a + b));",
    ])]
    #[case("Eevee a is \"x\"\nrelease a + \"!\"", &[
        "char* a = \"x\";",
        "char str_buffer_0[256];",
        "strcpy(str_buffer_0, a);",
        "strcat(str_buffer_0, \"!\");",
        "printf(\"%d\\n\", str_buffer_0);",
    ])]
    fn concatenation_of_variables(#[case] source: &str, #[case] expected: &[&str]) {
        assert_eq!(body(source), expected);
    }

    #[test]
    fn assignment_keeps_recorded_type() {
        let (program, _) = parse(&tokenize("Psyduck speed is 1.5\nspeed evolves to 3\n"));
        let mut generator = CodeGenerator::new();

        let code = generator.generate_program(&program).unwrap();

        assert!(code.contains("    speed = 3;\n"));
        assert_eq!(generator.type_of("speed"), Some(CType::Double));
    }

    #[rstest]
    #[case("release trainer", "UndefinedVariable")]
    #[case("Pikachu x is y * 2", "UndefinedVariable")]
    #[case("badges evolves to 8", "VariableNotDeclared")]
    fn fatal_error(#[case] source: &str, #[case] expected: &str) {
        let error = generate_source(source).unwrap_err();
        assert_eq!(error.name(), expected);
    }

    #[test]
    fn nested_arithmetic() {
        let program = Program::from_iter([
            StatementKind::declaration(Type::Pikachu, "result", Expression::binary(
                Expression::binary(Expression::integer(10), BiOperator::Multiply, Expression::integer(2)),
                BiOperator::Add,
                Expression::binary(Expression::integer(5), BiOperator::Subtract, Expression::integer(3)),
            )),
        ]);

        let code = CodeGenerator::new().generate_program(&program).unwrap();
        assert!(code.contains("    int result = ((10 * 2) + (5 - 3));\n"));
    }

    #[rstest]
    #[case("plain", "\"plain\"")]
    #[case("a\\b", "\"a\\\\b\"")]
    #[case("say \"hi\"", "\"say \\\"hi\\\"\"")]
    #[case("line\nbreak\ttab\r", "\"line\\nbreak\\ttab\\r\"")]
    fn quote_string(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(quote_c_string(input), expected);
    }
}
