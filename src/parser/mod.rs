//! Mini-C front end
//!
//! This module turns source text into a token stream and checks it against
//! the mini-C grammar:
//! - [`token`]: Token, category and location types
//! - [`classifier`]: Lexeme → category predicates
//! - [`lexer`]: Tokenization (source text → tokens)
//! - [`parse`]: Recognition (tokens → accept / [`SyntaxError`])
//!
//! # Supported language
//!
//! - Types: `int`, `float`, `void`
//! - Declarations: global variable lists, function definitions, local
//!   variable lists at the head of a block
//! - Statements: blocks, `if`/`else`, `while`, `for`, `return`, expression
//!   statements
//! - Expressions: assignment, `||`, `&&`, relational, `+ -`, `* /`, calls,
//!   parentheses, identifiers and numeric constants
//!
//! # Parser Implementation
//!
//! Hand-written recursive descent recognizer. It certifies well-formedness
//! only: no tree is built and no names or types are checked.

pub mod classifier;
mod declarations;
mod expressions;
pub mod lexer;
pub mod parse;
mod statements;
pub mod token;

pub use lexer::{tokenize, LexError, Lexer};
pub use parse::{parse, ParseResult, Parser, SyntaxError, DEFAULT_MAX_DEPTH};
pub use token::{SourceLocation, Token, TokenKind};

use thiserror::Error;

/// Failure of a combined tokenize-and-parse run.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CheckError {
    #[error(transparent)]
    Lex(#[from] LexError),
    #[error(transparent)]
    Syntax(#[from] SyntaxError),
}

/// Tokenize and parse `source`, returning the tokens on acceptance.
pub fn check(source: &str) -> Result<Vec<Token>, CheckError> {
    let tokens = tokenize(source)?;
    parse(&tokens)?;
    Ok(tokens)
}
