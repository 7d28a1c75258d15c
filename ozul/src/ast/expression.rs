// Copyright (C) 2023 - 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use std::fmt::{Display, Write};

use crate::Ranged;

#[derive(Clone, Debug, PartialEq)]
pub enum PrimaryExpression {
    IntegerLiteral(i64),
    FloatLiteral(f64),
    StringLiteral(String),
    Reference(Ranged<String>),
}

impl Display for PrimaryExpression {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PrimaryExpression::IntegerLiteral(i) => f.write_fmt(format_args!("{i}")),
            PrimaryExpression::FloatLiteral(float) => f.write_fmt(format_args!("{float:.6}")),
            PrimaryExpression::StringLiteral(str) => {
                f.write_char('"')?;
                f.write_str(str)?;
                f.write_char('"')
            }
            PrimaryExpression::Reference(name) => f.write_str(name.value()),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Expression {
    BiExpression(BiExpression),
    Primary(PrimaryExpression),
}

impl Expression {
    #[must_use]
    pub const fn integer(value: i64) -> Self {
        Self::Primary(PrimaryExpression::IntegerLiteral(value))
    }

    #[must_use]
    pub const fn float(value: f64) -> Self {
        Self::Primary(PrimaryExpression::FloatLiteral(value))
    }

    #[must_use]
    pub fn string(value: impl Into<String>) -> Self {
        Self::Primary(PrimaryExpression::StringLiteral(value.into()))
    }

    #[must_use]
    pub fn reference(name: impl Into<String>) -> Self {
        Self::Primary(PrimaryExpression::Reference(Ranged::unranged(name.into())))
    }

    #[must_use]
    pub fn binary(lhs: Expression, operator: BiOperator, rhs: Expression) -> Self {
        Self::BiExpression(BiExpression {
            operator,
            lhs: Box::new(lhs),
            rhs: Box::new(rhs),
        })
    }
}

impl Display for Expression {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BiExpression(expr) => Display::fmt(expr, f),
            Self::Primary(expr) => Display::fmt(expr, f),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct BiExpression {
    pub operator: BiOperator,
    pub lhs: Box<Expression>,
    pub rhs: Box<Expression>,
}

impl Display for BiExpression {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_char('(')?;
        Display::fmt(&self.lhs, f)?;

        f.write_char(' ')?;
        f.write_str(self.operator.as_str())?;
        f.write_char(' ')?;

        Display::fmt(&self.rhs, f)?;
        f.write_char(')')
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum BiOperator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl BiOperator {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "*",
            Self::Divide => "/",
        }
    }

    /// Binding power used by precedence climbing; higher binds tighter.
    #[must_use]
    pub const fn precedence(&self) -> u8 {
        match self {
            Self::Add | Self::Subtract => 1,
            Self::Multiply | Self::Divide => 2,
        }
    }
}

impl Display for BiOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
