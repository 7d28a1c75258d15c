// Copyright (C) 2023 - 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use log::{debug, warn};
use strum::AsRefStr;

use crate::{
    AssignStatement,
    BiOperator,
    CatchStatement,
    DeclarationStatement,
    Expression,
    FileLocation,
    FileRange,
    Keyword,
    PrimaryExpression,
    Program,
    Ranged,
    ReleaseStatement,
    Statement,
    StatementKind,
    Token,
    TokenKind,
};

pub type ParseResult<T> = Result<T, ParseError>;

pub const DEFAULT_STATEMENT_LIMIT: usize = 1000;

/// Parses the token stream into a [`Program`]. Malformed statements are left
/// out of the program and reported in the returned diagnostics.
pub fn parse(tokens: &[Token]) -> (Program, Vec<ParseDiagnostic>) {
    let mut parser = Parser::new(tokens);
    let program = parser.parse_program();
    (program, parser.into_diagnostics())
}

#[derive(Clone)]
pub struct Parser<'tokens> {
    tokens: &'tokens [Token],
    pub cursor: usize,
    pub token_end: FileLocation,
    statement_limit: usize,
    diagnostics: Vec<ParseDiagnostic>,
    end_of_file_token: Token,
}

impl<'tokens> Parser<'tokens> {
    pub fn new(tokens: &'tokens [Token]) -> Self {
        let end = tokens.last().map(|x| x.end).unwrap_or_default();

        Self {
            tokens,
            cursor: 0,
            token_end: Default::default(),
            statement_limit: DEFAULT_STATEMENT_LIMIT,
            diagnostics: Vec::new(),
            end_of_file_token: Token {
                kind: TokenKind::EndOfFile,
                text: String::new(),
                begin: end,
                end,
            },
        }
    }

    /// Sets the maximum number of statements attempted before parsing stops.
    #[must_use]
    pub fn with_statement_limit(mut self, statement_limit: usize) -> Self {
        self.statement_limit = statement_limit;
        self
    }

    pub fn parse_program(&mut self) -> Program {
        let mut program = Program::new();
        let mut attempts = 0;

        loop {
            self.skip_newlines();

            if self.is_at_end() {
                break;
            }

            if attempts == self.statement_limit {
                warn!("Statement limit of {} reached, ignoring the rest of the input", self.statement_limit);
                break;
            }
            attempts += 1;

            let cursor = self.cursor;
            match self.parse_statement() {
                Ok(statement) => program.push(statement),
                Err(ParseError::Malformed) => {
                    if self.cursor == cursor {
                        _ = self.consume_token();
                    }

                    self.skip_to_end_of_line();
                }
            }
        }

        debug!("Parsed {} statement(s) with {} diagnostic(s)", program.len(), self.diagnostics.len());
        program
    }

    #[must_use]
    pub fn diagnostics(&self) -> &[ParseDiagnostic] {
        &self.diagnostics
    }

    #[must_use]
    pub fn into_diagnostics(self) -> Vec<ParseDiagnostic> {
        self.diagnostics
    }

    #[must_use]
    pub fn is_at_end(&self) -> bool {
        self.peek_token().kind == TokenKind::EndOfFile
    }

    pub fn parse_statement(&mut self) -> ParseResult<Statement> {
        let start = self.peek_token().begin;

        let first = self.peek_token().kind.clone();
        let declared_type = match &first {
            TokenKind::Keyword(keyword) => keyword.as_type(),
            _ => None,
        };

        let kind = match first {
            _ if declared_type.is_some() => {
                StatementKind::Declaration(self.parse_declaration_statement()?)
            }

            TokenKind::Identifier(..) if self.peek_second_token().kind == TokenKind::Keyword(Keyword::Evolves) => {
                StatementKind::Assignment(self.parse_assign_statement()?)
            }

            TokenKind::Keyword(Keyword::Release) => {
                _ = self.consume_token();
                let expression = self.parse_expression()?;
                StatementKind::Release(ReleaseStatement { expression })
            }

            TokenKind::Keyword(Keyword::Catch) => {
                StatementKind::Catch(self.parse_catch_statement()?)
            }

            _ => {
                let expression = self.parse_expression()?;
                StatementKind::Release(ReleaseStatement { expression })
            }
        };

        Ok(Statement {
            range: FileRange::new(start, self.token_end),
            kind,
        })
    }

    fn parse_declaration_statement(&mut self) -> ParseResult<DeclarationStatement> {
        let type_token = self.consume_token();
        let TokenKind::Keyword(keyword) = type_token.kind else {
            return Err(ParseError::Malformed);
        };
        let Some(typ) = keyword.as_type() else {
            return Err(ParseError::Malformed);
        };
        let typ = Ranged::new(type_token.range(), typ);

        let name = self.expect_identifier(|token| ParseDiagnostic::ExpectedNameAfterType { token })?;
        self.expect_keyword(Keyword::Is, |token| ParseDiagnostic::ExpectedIsAfterName { token })?;

        let expression = self.parse_expression()?;

        Ok(DeclarationStatement {
            typ,
            name,
            expression,
        })
    }

    fn parse_assign_statement(&mut self) -> ParseResult<AssignStatement> {
        let name = self.expect_identifier(|token| ParseDiagnostic::ExpectedNameOfVariable { token })?;
        self.expect_keyword(Keyword::Evolves, |token| ParseDiagnostic::ExpectedEvolvesAfterName { token })?;
        self.expect_keyword(Keyword::To, |token| ParseDiagnostic::ExpectedToAfterEvolves { token })?;

        let expression = self.parse_expression()?;

        Ok(AssignStatement {
            name,
            expression,
        })
    }

    fn parse_catch_statement(&mut self) -> ParseResult<CatchStatement> {
        _ = self.consume_token();

        let name = self.expect_identifier(|token| ParseDiagnostic::ExpectedNameAfterCatch { token })?;
        self.expect_keyword(Keyword::From, |token| ParseDiagnostic::ExpectedFromAfterName { token })?;
        self.expect_keyword(Keyword::Wildgrass, |token| ParseDiagnostic::ExpectedWildgrassAfterFrom { token })?;

        Ok(CatchStatement { name })
    }

    pub fn parse_expression(&mut self) -> ParseResult<Expression> {
        self.parse_bi_expression(1)
    }

    /// Precedence climbing: operators binding at least as tight as
    /// `min_precedence` are folded into the left-hand side.
    fn parse_bi_expression(&mut self, min_precedence: u8) -> ParseResult<Expression> {
        let mut expr = self.parse_primary_expression()?;

        while let Some(operator) = self.peek_bi_operator() {
            if operator.precedence() < min_precedence {
                break;
            }

            _ = self.consume_token();

            let rhs = self.parse_bi_expression(operator.precedence() + 1)?;
            expr = Expression::binary(expr, operator, rhs);
        }

        Ok(expr)
    }

    fn parse_primary_expression(&mut self) -> ParseResult<Expression> {
        let token = self.peek_token().clone();

        let expression = match &token.kind {
            TokenKind::Integer(integer) => PrimaryExpression::IntegerLiteral(*integer),
            TokenKind::Float(float) => PrimaryExpression::FloatLiteral(*float),
            TokenKind::StringLiteral(literal) => PrimaryExpression::StringLiteral(literal.clone()),
            TokenKind::Identifier(name) => PrimaryExpression::Reference(Ranged::new(token.range(), name.clone())),

            _ => {
                self.skip_unless_boundary();
                self.emit_diagnostic(ParseDiagnostic::UnknownStartOfExpression { token: token.clone() });
                return Err(ParseError::Malformed);
            }
        };

        _ = self.consume_token();
        Ok(Expression::Primary(expression))
    }

    fn expect_identifier<F>(&mut self, diagnostic: F) -> ParseResult<Ranged<String>>
            where F: FnOnce(Token) -> ParseDiagnostic {
        let token = self.peek_token().clone();

        let Some(name) = token.as_identifier() else {
            self.skip_unless_boundary();
            self.emit_diagnostic(diagnostic(token));
            return Err(ParseError::Malformed);
        };

        let name = Ranged::new(token.range(), name.to_string());
        _ = self.consume_token();
        Ok(name)
    }

    fn expect_keyword<F>(&mut self, keyword: Keyword, diagnostic: F) -> ParseResult<()>
            where F: FnOnce(Token) -> ParseDiagnostic {
        let token = self.peek_token().clone();

        if token.kind != TokenKind::Keyword(keyword) {
            self.skip_unless_boundary();
            self.emit_diagnostic(diagnostic(token));
            return Err(ParseError::Malformed);
        }

        _ = self.consume_token();
        Ok(())
    }

    fn emit_diagnostic(&mut self, diagnostic: ParseDiagnostic) {
        self.diagnostics.push(diagnostic);
    }

    fn skip_unless_boundary(&mut self) {
        if !self.peek_token().is_statement_boundary() {
            _ = self.consume_token();
        }
    }

    fn skip_newlines(&mut self) {
        while self.peek_token().kind == TokenKind::Newline {
            _ = self.consume_token();
        }
    }

    fn skip_to_end_of_line(&mut self) {
        while !self.peek_token().is_statement_boundary() {
            _ = self.consume_token();
        }
    }

    fn peek_bi_operator(&self) -> Option<BiOperator> {
        match self.peek_token().kind {
            TokenKind::Punctuator(punctuator) => Some(punctuator.as_bi_operator()),
            _ => None,
        }
    }

    fn peek_token(&self) -> &Token {
        self.tokens.get(self.cursor).unwrap_or(&self.end_of_file_token)
    }

    fn peek_second_token(&self) -> &Token {
        self.tokens.get(self.cursor + 1).unwrap_or(&self.end_of_file_token)
    }

    fn consume_token(&mut self) -> Token {
        let token = self.peek_token().clone();

        if self.cursor < self.tokens.len() {
            self.token_end = token.end;
            self.cursor += 1;
        }

        token
    }
}

#[derive(Clone, Debug, thiserror::Error, AsRefStr)]
pub enum ParseDiagnostic {
    #[error("Expected a variable name after the type keyword, but got: {token}")]
    ExpectedNameAfterType { token: Token },

    #[error("Expected `is` after the variable name, but got: {token}")]
    ExpectedIsAfterName { token: Token },

    #[error("Expected a variable name, but got: {token}")]
    ExpectedNameOfVariable { token: Token },

    #[error("Expected `evolves` after the variable name, but got: {token}")]
    ExpectedEvolvesAfterName { token: Token },

    #[error("Expected `to` after `evolves`, but got: {token}")]
    ExpectedToAfterEvolves { token: Token },

    #[error("Expected a variable name after `catch`, but got: {token}")]
    ExpectedNameAfterCatch { token: Token },

    #[error("Expected `from` after the variable name, but got: {token}")]
    ExpectedFromAfterName { token: Token },

    #[error("Expected `wildgrass` after `from`, but got: {token}")]
    ExpectedWildgrassAfterFrom { token: Token },

    #[error("Unexpected token: {token}")]
    UnknownStartOfExpression { token: Token },
}

impl ParseDiagnostic {
    pub fn token(&self) -> &Token {
        match self {
            Self::ExpectedNameAfterType { token } => token,
            Self::ExpectedIsAfterName { token } => token,
            Self::ExpectedNameOfVariable { token } => token,
            Self::ExpectedEvolvesAfterName { token } => token,
            Self::ExpectedToAfterEvolves { token } => token,
            Self::ExpectedNameAfterCatch { token } => token,
            Self::ExpectedFromAfterName { token } => token,
            Self::ExpectedWildgrassAfterFrom { token } => token,
            Self::UnknownStartOfExpression { token } => token,
        }
    }

    pub fn range(&self) -> FileRange {
        self.token().range()
    }

    #[must_use]
    pub fn name(&self) -> &str {
        self.as_ref()
    }
}

#[derive(Clone, Debug, thiserror::Error, AsRefStr)]
pub enum ParseError {
    /// The statement was malformed, and a diagnostic has been emitted.
    #[error("Malformed statement")]
    Malformed,
}
