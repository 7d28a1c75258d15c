// Copyright (C) 2023 - 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use std::fmt::{Display, Formatter};

use crate::{FileLocation, FileRange};

use super::TokenKind;

#[derive(Clone, Debug, PartialEq)]
pub struct Token {
    pub kind: TokenKind,

    /// The source text of the token. For string literals this excludes the
    /// quotes, for floats it is the full numeral.
    pub text: String,

    pub begin: FileLocation,
    pub end: FileLocation,
}

impl Token {
    #[must_use]
    pub fn as_identifier(&self) -> Option<&str> {
        let TokenKind::Identifier(ident) = &self.kind else {
            return None;
        };

        Some(ident)
    }

    #[must_use]
    pub fn is_statement_boundary(&self) -> bool {
        matches!(self.kind, TokenKind::Newline | TokenKind::EndOfFile)
    }

    pub fn range(&self) -> FileRange {
        (self.begin, self.end).into()
    }
}

impl Display for Token {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        self.kind.fmt(f)
    }
}
