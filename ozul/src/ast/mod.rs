// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

mod expression;
mod parser;
mod program;
mod statement;
mod type_;

pub use self::{
    expression::*,
    parser::{parse, ParseDiagnostic, ParseError, ParseResult, Parser, DEFAULT_STATEMENT_LIMIT},
    program::Program,
    statement::{AssignStatement, CatchStatement, DeclarationStatement, ReleaseStatement, Statement, StatementKind},
    type_::Type,
};
