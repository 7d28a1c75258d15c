// Copyright (C) 2023 - 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use std::fmt::Display;

use crate::Type;

#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Integer(i64),
    Float(f64),
    String(String),
}

impl Value {
    /// Classifies a line of user input: an integer if it parses as one, then
    /// a float, otherwise the text itself.
    #[must_use]
    pub fn from_input(input: &str) -> Self {
        if let Ok(integer) = input.parse() {
            return Self::Integer(integer);
        }

        if let Ok(float) = input.parse() {
            return Self::Float(float);
        }

        Self::String(input.to_string())
    }

    #[must_use]
    pub const fn typ(&self) -> Type {
        match self {
            Self::Integer(..) => Type::Pikachu,
            Self::Float(..) => Type::Psyduck,
            Self::String(..) => Type::Eevee,
        }
    }

    #[must_use]
    pub const fn is_string(&self) -> bool {
        matches!(self, Self::String(..))
    }

    #[must_use]
    pub const fn is_float(&self) -> bool {
        matches!(self, Self::Float(..))
    }

    /// Floats are truncated towards zero, strings that aren't a number become
    /// zero.
    #[must_use]
    pub fn as_integer(&self) -> i64 {
        match self {
            Self::Integer(integer) => *integer,
            Self::Float(float) => *float as i64,
            Self::String(str) => {
                let str = str.trim();
                str.parse::<i64>()
                    .or_else(|_| str.parse::<f64>().map(|float| float as i64))
                    .unwrap_or_default()
            }
        }
    }

    #[must_use]
    pub fn as_float(&self) -> f64 {
        match self {
            Self::Integer(integer) => *integer as f64,
            Self::Float(float) => *float,
            Self::String(str) => str.trim().parse().unwrap_or_default(),
        }
    }

    #[must_use]
    pub fn coerce(self, typ: Type) -> Self {
        match typ {
            Type::Pikachu => Self::Integer(self.as_integer()),
            Type::Psyduck => Self::Float(self.as_float()),
            Type::Eevee => match self {
                Self::String(..) => self,
                other => Self::String(other.to_string()),
            },
        }
    }
}

/// Floats are written with six fractional digits, both when released and
/// when concatenated.
impl Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Integer(i) => i.fmt(f),
            Self::Float(float) => f.write_fmt(format_args!("{float:.6}")),
            Self::String(str) => f.write_str(str),
        }
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}
