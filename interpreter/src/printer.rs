// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use std::{fmt::Display, path::Path};

use colored::{Color, ColoredString, Colorize};
use ozul::FileRange;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
}

/// Prints a diagnostic with the offending source line and a caret under the
/// offending range.
pub struct ErrorPrinter<'source_code> {
    severity: Severity,
    path: &'source_code Path,
    source_code: &'source_code str,
    range: FileRange,
    message: String,

    color: Color,
    line_number: ColoredString,
}

impl<'source_code> ErrorPrinter<'source_code> {
    #[must_use = "Use the `print` method to actually print"]
    pub fn new(path: &'source_code Path, source_code: &'source_code str, range: FileRange, message: impl Display) -> Self {
        Self {
            path,
            source_code,
            range,
            severity: Severity::Error,
            message: message.to_string(),

            color: Color::Red,
            line_number: format!("{}", range.start().line() + 1).blue().bold(),
        }
    }

    #[must_use]
    pub fn severity(self, severity: Severity) -> Self {
        Self {
            severity,
            color: match severity {
                Severity::Error => Color::Red,
                Severity::Warning => Color::Yellow,
            },
            ..self
        }
    }

    pub fn print(self) {
        self.print_prelude();

        self.print_lines();

        self.print_postlude();
    }

    fn print_prelude(&self) {
        let severity_string = match self.severity {
            Severity::Error => "error".red().bold(),
            Severity::Warning => "warning".yellow().bold(),
        };
        eprintln!("{severity_string}: {}", self.message.bold());

        eprintln!();
    }

    fn print_lines(&self) {
        let line = self.source_code.lines().nth(self.range.start().line()).unwrap_or_default();

        self.print_line(true, line);
        self.print_error_indicator();
    }

    fn print_line(&self, is_primary: bool, line: &str) {
        self.print_line_prefix(is_primary);
        eprintln!("{line}");
    }

    fn print_error_indicator(&self) {
        let spaces = " ".repeat(self.range.start().column());
        let caret = "^".color(self.color).bold();

        let width = if self.range.start().line() == self.range.end().line() {
            self.range.end().column().saturating_sub(self.range.start().column())
        } else {
            1
        };
        let tildes = "~".repeat(width.saturating_sub(1)).color(self.color);

        self.print_line_prefix(false);
        eprintln!("{spaces}{caret}{tildes}");
    }

    fn print_line_prefix(&self, is_primary: bool) {
        let separator = " | ".blue().bold();

        if is_primary {
            eprint!("{} {separator}", self.line_number);
        } else {
            eprint!("{} {separator}", " ".repeat(self.line_number.len()));
        }
    }

    fn print_postlude(&self) {
        eprintln!();

        let path = self.path.display();
        let line = self.range.start().line() + 1;
        let column = self.range.start().column() + 1;

        eprintln!("In {path}:{line}:{column}\n");
    }
}
