// Copyright (C) 2023 - 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use std::{error::Error, fmt::Display, str::CharIndices};

use log::debug;
use strum::AsRefStr;
use thiserror::Error;

use crate::{FileLocation, Keyword, Punctuator, Token, TokenKind};

/// Converts the source text into tokens. The returned list always ends with
/// exactly one [`TokenKind::EndOfFile`].
#[must_use]
pub fn tokenize(source: &str) -> Vec<Token> {
    let (tokens, diagnostics) = Lexer::new(source).collect_all();
    debug!("Lexed {} tokens with {} diagnostic(s)", tokens.len(), diagnostics.len());
    tokens
}

pub struct Lexer<'source_code> {
    input: &'source_code str,
    chars: CharIndices<'source_code>,

    current: Option<(FileLocation, char)>,
    line: usize,
    column: usize,
    finished: bool,
    diagnostics: Vec<LexerDiagnostic>,
}

impl<'source_code> Lexer<'source_code> {
    pub fn new(input: &'source_code str) -> Self {
        Self {
            input,
            chars: input.char_indices(),
            current: None,
            line: 0,
            column: 0,
            finished: false,
            diagnostics: Vec::new(),
        }
    }

    pub fn next(&mut self) -> Option<Token> {
        if self.finished {
            return None;
        }

        self.skip_whitespace();

        let Some(ch) = self.peek_char() else {
            return Some(self.end_of_file());
        };

        let tok = match ch {
            '\n' => self.consume_single_char_token(TokenKind::Newline),
            '"' => self.consume_string(),

            '+' => self.consume_single_char_token(TokenKind::Punctuator(Punctuator::PlusSign)),
            '-' => self.consume_single_char_token(TokenKind::Punctuator(Punctuator::HyphenMinus)),
            '*' => self.consume_single_char_token(TokenKind::Punctuator(Punctuator::Asterisk)),
            '/' => self.consume_single_char_token(TokenKind::Punctuator(Punctuator::Solidus)),

            '0'..='9' => self.consume_number(),
            c if c.is_alphabetic() => self.consume_identifier_or_keyword(),

            character => {
                // Anything we don't understand ends the token stream.
                let location = self.current_location();
                self.diagnostics.push(LexerDiagnostic {
                    location,
                    kind: LexerDiagnosticKind::IllegalCharacter { character },
                });
                self.end_of_file()
            }
        };

        Some(tok)
    }

    pub fn collect_all(mut self) -> (Vec<Token>, Vec<LexerDiagnostic>) {
        let mut tokens = Vec::new();

        while let Some(token) = self.next() {
            tokens.push(token);
        }

        (tokens, self.diagnostics)
    }

    #[must_use]
    pub fn diagnostics(&self) -> &[LexerDiagnostic] {
        &self.diagnostics
    }

    fn end_of_file(&mut self) -> Token {
        self.finished = true;

        let location = self.current_location();
        Token {
            kind: TokenKind::EndOfFile,
            text: String::new(),
            begin: location,
            end: location,
        }
    }

    fn consume_single_char_token(&mut self, kind: TokenKind) -> Token {
        let begin = self.current_location();

        self.consume_char();

        let end = self.current_location();

        Token {
            kind,
            text: self.input[begin.offset()..end.offset()].to_string(),
            begin,
            end,
        }
    }

    fn consume_string(&mut self) -> Token {
        let begin = self.current_location();
        self.consume_char();

        let offset_begin = self.current_location().offset();

        loop {
            let Some(c) = self.peek_char() else {
                break;
            };

            if c == '"' {
                break;
            }

            self.consume_char();
        }

        let offset_end = self.current_location().offset();
        let text = self.input[offset_begin..offset_end].to_string();

        if self.peek_char() == Some('"') {
            self.consume_char();
        } else {
            self.diagnostics.push(LexerDiagnostic {
                location: begin,
                kind: LexerDiagnosticKind::UnterminatedString,
            });
        }

        Token {
            kind: TokenKind::StringLiteral(text.clone()),
            text,
            begin,
            end: self.current_location(),
        }
    }

    fn consume_identifier_or_keyword(&mut self) -> Token {
        let begin = self.current_location();

        while let Some(c) = self.peek_char() {
            if !is_identifier_char(c) {
                break;
            }

            self.consume_char();
        }

        let end = self.current_location();
        let str = &self.input[begin.offset()..end.offset()];

        let kind = match Keyword::parse(str) {
            Some(keyword) => TokenKind::Keyword(keyword),
            None => TokenKind::Identifier(str.to_string()),
        };

        Token {
            kind,
            text: str.to_string(),
            begin,
            end,
        }
    }

    fn consume_number(&mut self) -> Token {
        let begin = self.current_location();

        self.consume_digits();

        let is_float = self.peek_char() == Some('.')
            && self.peek_second_char().is_some_and(|c| c.is_ascii_digit());

        if is_float {
            self.consume_char();
            self.consume_digits();
        }

        let end = self.current_location();
        let input = self.input;
        let str = &input[begin.offset()..end.offset()];

        let kind = if is_float {
            TokenKind::Float(self.parse_numeral(str, end))
        } else {
            TokenKind::Integer(self.parse_numeral(str, end))
        };

        Token {
            kind,
            text: str.to_string(),
            begin,
            end,
        }
    }

    fn consume_digits(&mut self) {
        while let Some(c) = self.peek_char() {
            if !c.is_ascii_digit() {
                break;
            }

            self.consume_char();
        }
    }

    fn parse_numeral<T>(&mut self, str: &str, location: FileLocation) -> T
            where T: std::str::FromStr + Default {
        match str.parse() {
            Ok(value) => value,
            Err(..) => {
                self.diagnostics.push(LexerDiagnostic {
                    location,
                    kind: LexerDiagnosticKind::InvalidNumber,
                });
                T::default()
            }
        }
    }

    fn skip_whitespace(&mut self) {
        while let Some(c) = self.peek_char() {
            if !matches!(c, ' ' | '\t' | '\r') {
                break;
            }

            self.consume_char();
        }
    }

    fn peek_char(&mut self) -> Option<char> {
        if let Some((_, c)) = self.current {
            return Some(c);
        }

        self.current = self.chars.next()
            .map(|(offset, char)| {
                let location = FileLocation::new(offset, self.line, self.column);

                if char == '\n' {
                    self.line += 1;
                    self.column = 0;
                } else {
                    self.column += 1;
                }

                (location, char)
            });
        Some(self.current?.1)
    }

    /// The character after the one returned by [`Self::peek_char`].
    fn peek_second_char(&mut self) -> Option<char> {
        _ = self.peek_char()?;
        self.chars.clone().next().map(|(_, c)| c)
    }

    fn consume_char(&mut self) {
        self.current = None;
        _ = self.peek_char();
    }

    fn current_location(&mut self) -> FileLocation {
        _ = self.peek_char();
        match self.current {
            Some((location, _)) => location,
            None => FileLocation::new(self.input.len(), self.line, self.column),
        }
    }
}

impl<'source_code> Iterator for Lexer<'source_code> {
    type Item = Token;

    fn next(&mut self) -> Option<Self::Item> {
        self.next()
    }
}

fn is_identifier_char(c: char) -> bool {
    c.is_alphabetic()
        || c.is_ascii_digit()
        || c == '_'
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LexerDiagnostic {
    pub location: FileLocation,
    pub kind: LexerDiagnosticKind,
}

impl Display for LexerDiagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.kind.fmt(f)
    }
}

impl Error for LexerDiagnostic {}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error, AsRefStr)]
pub enum LexerDiagnosticKind {
    #[error("Unterminated string, it runs until the end of the file")]
    UnterminatedString,

    #[error("Invalid number, it does not fit in 64 bits")]
    InvalidNumber,

    #[error("Illegal character `{character}`, the rest of the file is ignored")]
    IllegalCharacter { character: char },
}

impl LexerDiagnosticKind {
    #[must_use]
    pub fn name(&self) -> &str {
        self.as_ref()
    }
}
