// Copyright (C) 2023 - 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use std::fmt::Display;

use crate::{Expression, FileRange, Keyword, Ranged, Type};

#[derive(Debug, Clone)]
pub struct Statement {
    pub range: FileRange,
    pub kind: StatementKind,
}

impl From<StatementKind> for Statement {
    fn from(kind: StatementKind) -> Self {
        Self {
            range: FileRange::default(),
            kind,
        }
    }
}

/// Ranges are ignored, like [`Ranged`] does for its value.
impl PartialEq for Statement {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind
    }
}

impl Display for Statement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.kind.fmt(f)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum StatementKind {
    Assignment(AssignStatement),
    Catch(CatchStatement),
    Declaration(DeclarationStatement),
    Release(ReleaseStatement),
}

impl StatementKind {
    #[must_use]
    pub fn declaration(typ: Type, name: impl Into<String>, expression: Expression) -> Self {
        Self::Declaration(DeclarationStatement {
            typ: Ranged::unranged(typ),
            name: Ranged::unranged(name.into()),
            expression,
        })
    }

    #[must_use]
    pub fn assignment(name: impl Into<String>, expression: Expression) -> Self {
        Self::Assignment(AssignStatement {
            name: Ranged::unranged(name.into()),
            expression,
        })
    }

    #[must_use]
    pub fn release(expression: Expression) -> Self {
        Self::Release(ReleaseStatement { expression })
    }

    #[must_use]
    pub fn catch(name: impl Into<String>) -> Self {
        Self::Catch(CatchStatement {
            name: Ranged::unranged(name.into()),
        })
    }
}

impl Display for StatementKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Assignment(stmt) => {
                write!(f, "{} {} {} {}", stmt.name.value(), Keyword::Evolves.as_ref(), Keyword::To.as_ref(), stmt.expression)
            }

            Self::Catch(stmt) => {
                write!(f, "{} {} {} {}", Keyword::Catch.as_ref(), stmt.name.value(), Keyword::From.as_ref(), Keyword::Wildgrass.as_ref())
            }

            Self::Declaration(stmt) => {
                write!(f, "{} {} {} {}", stmt.typ.value(), stmt.name.value(), Keyword::Is.as_ref(), stmt.expression)
            }

            Self::Release(stmt) => {
                write!(f, "{} {}", Keyword::Release.as_ref(), stmt.expression)
            }
        }
    }
}

/// `<name> evolves to <expression>`, rebinding a variable that must already
/// exist.
#[derive(Clone, Debug, PartialEq)]
pub struct AssignStatement {
    pub name: Ranged<String>,
    pub expression: Expression,
}

/// `catch <name> from wildgrass`
#[derive(Clone, Debug, PartialEq)]
pub struct CatchStatement {
    pub name: Ranged<String>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct DeclarationStatement {
    pub typ: Ranged<Type>,
    pub name: Ranged<String>,
    pub expression: Expression,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ReleaseStatement {
    pub expression: Expression,
}
