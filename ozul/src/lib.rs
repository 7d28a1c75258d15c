// Copyright (C) 2023 - 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

#![deny(elided_lifetimes_in_paths)]

mod ast;
mod config;
mod lexer;
mod util;
mod value;

pub use self::{
    ast::*,
    config::{ConfigRoot, ConfigSectionInterpreter, ConfigSectionLog, ConfigSectionParser, DEFAULT_STEP_LIMIT},
    lexer::{tokenize, Keyword, Lexer, LexerDiagnostic, LexerDiagnosticKind, Punctuator, Token, TokenKind},
    util::{FileLocation, FileRange, Ranged},
    value::Value,
};
