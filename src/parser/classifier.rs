//! Lexeme classification
//!
//! One predicate per [`TokenKind`], plus [`classify`], which walks
//! [`TokenKind::PRIORITY`] and returns the first category whose predicate
//! accepts the lexeme.
//!
//! The predicates are independent of the scanning pattern in
//! [`lexer`](super::lexer): they decide *what* a lexeme is, not *where* one
//! ends.

use super::token::TokenKind;
use once_cell::sync::Lazy;
use regex::Regex;

static IDENTIFIER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").expect("identifier pattern")
});

static NUMERIC_CONSTANT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[0-9]+(\.[0-9]+)?$").expect("numeric pattern")
});

pub fn is_keyword(lexeme: &str) -> bool {
    matches!(
        lexeme,
        "int"
            | "float"
            | "char"
            | "double"
            | "if"
            | "else"
            | "for"
            | "while"
            | "do"
            | "return"
            | "void"
            | "switch"
            | "case"
            | "break"
            | "continue"
            | "struct"
            | "typedef"
            | "static"
            | "const"
            | "unsigned"
            | "signed"
    )
}

pub fn is_operator(lexeme: &str) -> bool {
    matches!(
        lexeme,
        "+" | "-"
            | "*"
            | "/"
            | "%"
            | "="
            | "=="
            | "!="
            | ">"
            | "<"
            | ">="
            | "<="
            | "&&"
            | "||"
            | "++"
            | "--"
            | "&"
            | "|"
            | "!"
            | "^"
    )
}

pub fn is_special_character(lexeme: &str) -> bool {
    matches!(lexeme, "(" | ")" | "{" | "}" | "[" | "]" | ";" | "," | "." | "#")
}

pub fn is_identifier(lexeme: &str) -> bool {
    IDENTIFIER.is_match(lexeme)
}

pub fn is_numeric_constant(lexeme: &str) -> bool {
    NUMERIC_CONSTANT.is_match(lexeme)
}

/// Exactly one character, other than a quote, between single quotes.
pub fn is_character_constant(lexeme: &str) -> bool {
    let mut chars = lexeme.chars();
    matches!(
        (chars.next(), chars.next(), chars.next(), chars.next()),
        (Some('\''), Some(c), Some('\''), None) if c != '\''
    )
}

pub fn is_comment(lexeme: &str) -> bool {
    lexeme.starts_with("//")
        || (lexeme.len() >= 4 && lexeme.starts_with("/*") && lexeme.ends_with("*/"))
}

/// A non-empty run of whitespace that does not contain a line break.
pub fn is_whitespace(lexeme: &str) -> bool {
    !lexeme.is_empty() && lexeme.chars().all(|c| c.is_whitespace() && c != '\n')
}

pub fn is_newline(lexeme: &str) -> bool {
    lexeme == "\n"
}

/// Does `lexeme` satisfy the predicate for `kind`?
pub fn matches_kind(kind: TokenKind, lexeme: &str) -> bool {
    match kind {
        TokenKind::Comment => is_comment(lexeme),
        TokenKind::Keyword => is_keyword(lexeme),
        TokenKind::Operator => is_operator(lexeme),
        TokenKind::SpecialCharacter => is_special_character(lexeme),
        TokenKind::CharacterConstant => is_character_constant(lexeme),
        TokenKind::NumericConstant => is_numeric_constant(lexeme),
        TokenKind::Identifier => is_identifier(lexeme),
        TokenKind::Whitespace => is_whitespace(lexeme),
        TokenKind::Newline => is_newline(lexeme),
    }
}

/// Classify a lexeme, or `None` if no predicate accepts it.
pub fn try_classify(lexeme: &str) -> Option<TokenKind> {
    TokenKind::PRIORITY
        .into_iter()
        .find(|&kind| matches_kind(kind, lexeme))
}

/// Classify a lexeme, falling back to [`TokenKind::Identifier`].
///
/// The lexer only hands over lexemes its pattern recognised, so the fallback
/// firing means the pattern and the predicates disagree.
pub fn classify(lexeme: &str) -> TokenKind {
    try_classify(lexeme).unwrap_or_else(|| {
        log::warn!(
            "no category accepts lexeme {:?}; classifying as identifier",
            lexeme
        );
        TokenKind::Identifier
    })
}
