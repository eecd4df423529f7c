//! Main parser coordinator
//!
//! This module provides the [`Parser`] struct and core parsing infrastructure,
//! including the error type, cursor primitives, and the main parse entry point.
//!
//! # Parser Architecture
//!
//! The Parser is a recursive descent recognizer with one method per grammar
//! nonterminal:
//! - This module: Parser struct, cursor primitives, and coordination
//! - `declarations`: top-level declarations, parameters, type specifiers
//! - `statements`: compound, `if`, `while`, `for`, `return`, expression statements
//! - `expressions`: the layered expression grammar
//!
//! # Implementation
//!
//! Parser methods are split across multiple files using `impl Parser` blocks,
//! allowing each module to extend the Parser with related functionality while
//! maintaining access to the shared cursor.
//!
//! The parser borrows the token slice and never builds a tree: every method
//! returns `Ok(())` once its nonterminal has been derived. Comment, whitespace
//! and newline tokens are skipped by the cursor primitives, so grammar methods
//! only ever see significant tokens.

use crate::parser::token::{SourceLocation, Token, TokenKind};
use thiserror::Error;

/// Nesting depth allowed before the parser gives up.
///
/// The limit counts grammar levels, not source brackets: a statement, its
/// expression and every parenthesis, call argument or assignment right-hand
/// side each take one level.
pub const DEFAULT_MAX_DEPTH: usize = 256;

pub type ParseResult<T = ()> = Result<T, SyntaxError>;

/// The single diagnostic produced by a rejected parse.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SyntaxError {
    #[error("Syntax error: empty input, expected a declaration")]
    EmptyInput,

    #[error(
        "Syntax error at {}: expected {expected}, found {found}",
        .found.location
    )]
    UnexpectedToken { expected: String, found: Token },

    #[error("Syntax error: unexpected end of input, expected {expected}")]
    UnexpectedEof { expected: String },

    #[error("Syntax error at {}: unexpected {found} after last declaration", .found.location)]
    TrailingInput { found: Token },

    #[error("Syntax error at {location}: nesting limit of {limit} levels exceeded")]
    TooDeep {
        location: SourceLocation,
        limit: usize,
    },
}

impl SyntaxError {
    /// The offending token, when there is one.
    pub fn token(&self) -> Option<&Token> {
        match self {
            SyntaxError::UnexpectedToken { found, .. }
            | SyntaxError::TrailingInput { found } => Some(found),
            _ => None,
        }
    }

    pub fn location(&self) -> Option<SourceLocation> {
        match self {
            SyntaxError::TooDeep { location, .. } => Some(*location),
            other => other.token().map(|t| t.location),
        }
    }
}

/// Recursive descent recognizer for mini-C
pub struct Parser<'a> {
    pub(crate) tokens: &'a [Token],
    pub(crate) position: usize,
    depth: usize,
    max_depth: usize,
}

impl<'a> Parser<'a> {
    pub fn new(tokens: &'a [Token]) -> Self {
        Self::with_max_depth(tokens, DEFAULT_MAX_DEPTH)
    }

    pub fn with_max_depth(tokens: &'a [Token], max_depth: usize) -> Self {
        Self {
            tokens,
            position: 0,
            depth: 0,
            max_depth,
        }
    }

    /// Parse the entire program: `Program := Decl+ EOF`
    pub fn parse_program(&mut self) -> ParseResult {
        log::debug!("parsing {} tokens", self.tokens.len());

        if self.peek().is_none() {
            return Err(SyntaxError::EmptyInput);
        }

        loop {
            self.parse_declaration()?;
            if !self.is_type_keyword() {
                break;
            }
        }

        self.expect_end()?;
        log::debug!("program accepted");
        Ok(())
    }

    // ===== Cursor primitives =====

    /// Index of the n-th significant token at or after the cursor.
    fn significant_index(&self, n: usize) -> Option<usize> {
        self.tokens[self.position..]
            .iter()
            .enumerate()
            .filter(|(_, t)| !t.is_trivia())
            .nth(n)
            .map(|(i, _)| self.position + i)
    }

    /// The current significant token, without consuming it.
    pub fn peek(&self) -> Option<&'a Token> {
        self.peek_ahead(0)
    }

    /// The (n+1)-th significant token at or after the cursor.
    pub fn peek_ahead(&self, n: usize) -> Option<&'a Token> {
        let tokens = self.tokens;
        self.significant_index(n).map(|i| &tokens[i])
    }

    /// Consume the current significant token and any trivia before it.
    pub fn advance(&mut self) -> Option<&'a Token> {
        let tokens = self.tokens;
        let index = self.significant_index(0)?;
        self.position = index + 1;
        Some(&tokens[index])
    }

    /// Consume the current token, checking its category and/or lexeme.
    pub fn expect(
        &mut self,
        kind: Option<TokenKind>,
        lexeme: Option<&str>,
    ) -> ParseResult<&'a Token> {
        let expected = || match (kind, lexeme) {
            (_, Some(lexeme)) => format!("'{lexeme}'"),
            (Some(kind), None) => kind.to_string(),
            (None, None) => "a token".to_string(),
        };

        let token = self.peek().ok_or_else(|| SyntaxError::UnexpectedEof {
            expected: expected(),
        })?;

        let kind_ok = kind.map_or(true, |k| token.kind == k);
        let lexeme_ok = lexeme.map_or(true, |l| token.lexeme == l);
        if !(kind_ok && lexeme_ok) {
            return Err(SyntaxError::UnexpectedToken {
                expected: expected(),
                found: token.clone(),
            });
        }

        self.advance();
        Ok(token)
    }

    /// Fail if any significant token remains.
    pub fn expect_end(&mut self) -> ParseResult {
        match self.peek() {
            Some(found) => Err(SyntaxError::TrailingInput {
                found: found.clone(),
            }),
            None => {
                self.position = self.tokens.len();
                Ok(())
            }
        }
    }

    // ===== Helper methods =====

    pub(crate) fn check(&self, kind: TokenKind, lexeme: &str) -> bool {
        self.peek().is_some_and(|t| t.is(kind, lexeme))
    }

    pub(crate) fn check_special(&self, lexeme: &str) -> bool {
        self.check(TokenKind::SpecialCharacter, lexeme)
    }

    pub(crate) fn check_keyword(&self, lexeme: &str) -> bool {
        self.check(TokenKind::Keyword, lexeme)
    }

    pub(crate) fn check_kind(&self, kind: TokenKind) -> bool {
        self.peek().is_some_and(|t| t.kind == kind)
    }

    /// Consume the current token if it is the given operator.
    pub(crate) fn match_operator(&mut self, lexeme: &str) -> bool {
        if self.check(TokenKind::Operator, lexeme) {
            self.advance();
            true
        } else {
            false
        }
    }

    pub(crate) fn match_special(&mut self, lexeme: &str) -> bool {
        if self.check_special(lexeme) {
            self.advance();
            true
        } else {
            false
        }
    }

    pub(crate) fn match_keyword(&mut self, lexeme: &str) -> bool {
        if self.check_keyword(lexeme) {
            self.advance();
            true
        } else {
            false
        }
    }

    pub(crate) fn is_type_keyword(&self) -> bool {
        self.peek().is_some_and(|t| {
            t.kind == TokenKind::Keyword
                && matches!(t.lexeme.as_str(), "int" | "float" | "void")
        })
    }

    pub(crate) fn expect_special(&mut self, lexeme: &str) -> ParseResult {
        self.expect(Some(TokenKind::SpecialCharacter), Some(lexeme))
            .map(|_| ())
    }

    pub(crate) fn expect_identifier(&mut self) -> ParseResult<&'a Token> {
        self.expect(Some(TokenKind::Identifier), None)
    }

    /// Error describing what was wanted at the current cursor.
    pub(crate) fn unexpected(&self, expected: &str) -> SyntaxError {
        match self.peek() {
            Some(found) => SyntaxError::UnexpectedToken {
                expected: expected.to_string(),
                found: found.clone(),
            },
            None => SyntaxError::UnexpectedEof {
                expected: expected.to_string(),
            },
        }
    }

    /// Run `f` one nesting level deeper, failing past the depth limit.
    pub(crate) fn nested<T>(
        &mut self,
        f: impl FnOnce(&mut Self) -> ParseResult<T>,
    ) -> ParseResult<T> {
        if self.depth >= self.max_depth {
            let location = self
                .peek()
                .or_else(|| self.tokens.last())
                .map_or(SourceLocation::new(1, 1), |t| t.location);
            return Err(SyntaxError::TooDeep {
                location,
                limit: self.max_depth,
            });
        }

        self.depth += 1;
        let result = f(self);
        self.depth -= 1;
        result
    }
}

/// Parse a token sequence, accepting or returning the first syntax error.
pub fn parse(tokens: &[Token]) -> ParseResult {
    Parser::new(tokens).parse_program()
}
