// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use strum::AsRefStr;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error, AsRefStr)]
pub enum CodeGenError {
    #[error("Undefined variable: {name}")]
    UndefinedVariable { name: String },

    #[error("Variable {name} not declared!")]
    VariableNotDeclared { name: String },
}

impl CodeGenError {
    #[must_use]
    pub fn name(&self) -> &str {
        self.as_ref()
    }
}
