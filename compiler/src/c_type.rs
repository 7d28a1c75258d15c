// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use std::fmt::Display;

use ozul::Type;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CType {
    Int,
    Double,
    CharPointer,
}

impl CType {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Int => "int",
            Self::Double => "double",
            Self::CharPointer => "char*",
        }
    }

    /// The `printf` conversion for a value of this type.
    #[must_use]
    pub const fn format_specifier(&self) -> &'static str {
        match self {
            Self::Int => "%d",
            Self::Double => "%f",
            Self::CharPointer => "%s",
        }
    }
}

impl From<Type> for CType {
    fn from(value: Type) -> Self {
        match value {
            Type::Pikachu => Self::Int,
            Type::Psyduck => Self::Double,
            Type::Eevee => Self::CharPointer,
        }
    }
}

impl Display for CType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
