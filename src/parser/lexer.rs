//! Lexer (tokenizer) for mini-C source code
//!
//! Converts raw source text into a flat [`Token`] stream consumed by the parser.
//! Unlike a typical compiler front end nothing is dropped here: comments,
//! whitespace and line breaks become trivia tokens, so concatenating every
//! lexeme reproduces the input exactly.
//!
//! Scanning uses one compiled alternation. At each offset the first
//! alternative (in declaration order) that matches *at that offset* wins;
//! the matched text is then handed to the [`classifier`](super::classifier).
//!
//! Past the last `*/` in the input no block comment can close, so the lexer
//! switches to the same alternation without the block-comment entry. This keeps
//! runs of unterminated `/*` linear instead of rescanning to end of input.

use super::classifier;
use super::token::{SourceLocation, Token};
use once_cell::sync::Lazy;
use thiserror::Error;

/// Scanning alternatives, tried in this order.
const ALTERNATIVES: [&str; 9] = [
    // single-line comment
    r"//[^\n]*",
    // block comment, shortest match, may span lines
    r"(?s:/\*.*?\*/)",
    // character constant
    r"'[^']'",
    // numeric constant, decimal form first
    r"[0-9]+\.[0-9]+|[0-9]+",
    // identifier or keyword
    r"[A-Za-z_][A-Za-z0-9_]*",
    // multi-character operator
    r"==|!=|>=|<=|\+\+|--|&&|\|\|",
    // single-character operator
    r"[+\-*/%=><!&|^]",
    // special character
    r"[(){}\[\];,.#]",
    // whitespace run without line breaks, or a single line break
    r"[^\S\n]+|\n",
];

/// Index of the block-comment entry in [`ALTERNATIVES`].
const BLOCK_COMMENT: usize = 1;

fn alternation<'a>(alternatives: impl Iterator<Item = &'a &'static str>) -> regex::Regex {
    let pattern = alternatives
        .map(|alt| format!("(?:{alt})"))
        .collect::<Vec<_>>()
        .join("|");
    regex::Regex::new(&pattern).expect("scanner pattern must compile")
}

static SCANNER: Lazy<regex::Regex> = Lazy::new(|| alternation(ALTERNATIVES.iter()));

/// Every alternative except the block comment, in the same order.
static SCANNER_NO_BLOCK: Lazy<regex::Regex> = Lazy::new(|| {
    alternation(
        ALTERNATIVES
            .iter()
            .enumerate()
            .filter(|(i, _)| *i != BLOCK_COMMENT)
            .map(|(_, alt)| alt),
    )
});

/// Raised when no scanning alternative matches at the current offset.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Lexer error at {location}: unexpected character {character:?}")]
pub struct LexError {
    pub character: char,
    pub location: SourceLocation,
}

/// Lexer for mini-C source code
pub struct Lexer<'a> {
    input: &'a str,
    position: usize,
    line: usize,
    column: usize,
    /// Byte offset of the last `*/`, if any.
    last_close: Option<usize>,
}

impl<'a> Lexer<'a> {
    /// Create a new lexer for the given source string.
    pub fn new(input: &'a str) -> Self {
        Self {
            input,
            position: 0,
            line: 1,
            column: 1,
            last_close: input.rfind("*/"),
        }
    }

    /// Tokenize the entire input
    pub fn tokenize(mut self) -> Result<Vec<Token>, LexError> {
        let mut tokens = Vec::new();

        while let Some(token) = self.next_token()? {
            tokens.push(token);
        }

        log::debug!(
            "tokenized {} bytes into {} tokens",
            self.input.len(),
            tokens.len()
        );
        Ok(tokens)
    }

    /// Scan the token starting at the current offset, `None` at end of input.
    fn next_token(&mut self) -> Result<Option<Token>, LexError> {
        if self.is_at_end() {
            return Ok(None);
        }

        let loc = self.current_location();
        let lexeme = match self.scanner().find_at(self.input, self.position) {
            Some(m) if m.start() == self.position && !m.is_empty() => {
                m.as_str()
            }
            _ => {
                // Covers both "nothing matches" and "a later match exists",
                // i.e. a gap in the partition.
                let character = self.input[self.position..]
                    .chars()
                    .next()
                    .unwrap_or('\0');
                return Err(LexError {
                    character,
                    location: loc,
                });
            }
        };

        self.advance_over(lexeme);
        let kind = classifier::classify(lexeme);
        Ok(Some(Token::new(lexeme, kind, loc)))
    }

    /// A block comment opened here would need a `*/` at `position + 2` or later.
    fn scanner(&self) -> &'static regex::Regex {
        match self.last_close {
            Some(close) if close >= self.position + 2 => &*SCANNER,
            _ => &*SCANNER_NO_BLOCK,
        }
    }

    /// Move past `lexeme`, keeping line and column in step.
    fn advance_over(&mut self, lexeme: &str) {
        for ch in lexeme.chars() {
            if ch == '\n' {
                self.line += 1;
                self.column = 1;
            } else {
                self.column += 1;
            }
        }
        self.position += lexeme.len();
    }

    /// Check if at end of input
    fn is_at_end(&self) -> bool {
        self.position >= self.input.len()
    }

    /// Get current source location
    fn current_location(&self) -> SourceLocation {
        SourceLocation::new(self.line, self.column)
    }
}

/// Tokenize `source` into a fresh, fully materialized token vector.
pub fn tokenize(source: &str) -> Result<Vec<Token>, LexError> {
    Lexer::new(source).tokenize()
}
