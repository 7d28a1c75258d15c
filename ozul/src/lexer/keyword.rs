// Copyright (C) 2023 - 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use strum::IntoEnumIterator;

use crate::Type;

#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[derive(strum::AsRefStr, strum::EnumIter)]
#[strum(serialize_all = "snake_case")]
pub enum Keyword {
    #[strum(serialize = "Pikachu")]
    Pikachu,
    #[strum(serialize = "Psyduck")]
    Psyduck,
    #[strum(serialize = "Eevee")]
    Eevee,

    Is,
    Evolves,
    To,
    Catch,
    Release,
    From,
    Wildgrass,
}

impl Keyword {
    /// Keywords are case-sensitive: `pikachu` is a plain identifier.
    pub fn parse(input: &str) -> Option<Self> {
        Self::iter().find(|x| x.as_ref() == input)
    }

    /// The type a declaration introduces when it starts with this keyword.
    #[must_use]
    pub const fn as_type(&self) -> Option<Type> {
        match self {
            Self::Pikachu => Some(Type::Pikachu),
            Self::Psyduck => Some(Type::Psyduck),
            Self::Eevee => Some(Type::Eevee),
            _ => None,
        }
    }
}
