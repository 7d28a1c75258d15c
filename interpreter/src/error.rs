// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use ozul::FileRange;
use strum::AsRefStr;
use thiserror::Error;

/// An error that aborts the program being interpreted.
#[derive(Debug, Error)]
#[error("{kind}")]
pub struct RuntimeError {
    pub kind: RuntimeErrorKind,

    /// The statement that was executing when the error occurred.
    pub range: FileRange,
}

impl RuntimeError {
    #[must_use]
    pub fn new(kind: RuntimeErrorKind, range: FileRange) -> Self {
        Self {
            kind,
            range,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        self.kind.as_ref()
    }
}

#[derive(Debug, Error, AsRefStr)]
pub enum RuntimeErrorKind {
    #[error("Undefined variable: {name}")]
    UndefinedVariable { name: String },

    #[error("Variable not declared: {name}")]
    VariableNotDeclared { name: String },

    #[error("Division by zero.")]
    DivisionByZero,

    #[error("Execution step limit of {limit} exceeded (possible infinite loop)")]
    StepLimitExceeded { limit: usize },

    #[error("I/O failure: {0}")]
    Io(#[from] std::io::Error),
}
