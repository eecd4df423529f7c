//! Token definitions shared by the lexer and the parser

use serde::Serialize;
use std::fmt;

/// Source location information for error reporting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SourceLocation {
    pub line: usize,
    pub column: usize,
}

impl SourceLocation {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}, column {}", self.line, self.column)
    }
}

/// Lexical category of a token.
///
/// Variants are declared in the order used for summaries and serialization,
/// which is not the classification priority (see [`TokenKind::PRIORITY`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TokenKind {
    Keyword,
    Identifier,
    Operator,
    NumericConstant,
    CharacterConstant,
    SpecialCharacter,
    Comment,
    Whitespace,
    Newline,
}

impl TokenKind {
    /// Every category, in declaration order.
    pub const ALL: [TokenKind; 9] = [
        TokenKind::Keyword,
        TokenKind::Identifier,
        TokenKind::Operator,
        TokenKind::NumericConstant,
        TokenKind::CharacterConstant,
        TokenKind::SpecialCharacter,
        TokenKind::Comment,
        TokenKind::Whitespace,
        TokenKind::Newline,
    ];

    /// Order in which the classifier tries each category; first match wins.
    pub const PRIORITY: [TokenKind; 9] = [
        TokenKind::Comment,
        TokenKind::Keyword,
        TokenKind::Operator,
        TokenKind::SpecialCharacter,
        TokenKind::CharacterConstant,
        TokenKind::NumericConstant,
        TokenKind::Identifier,
        TokenKind::Whitespace,
        TokenKind::Newline,
    ];

    /// Trivia tokens are skipped transparently by the parser.
    pub fn is_trivia(self) -> bool {
        matches!(
            self,
            TokenKind::Comment | TokenKind::Whitespace | TokenKind::Newline
        )
    }

    /// Upper-case name used in token dumps, e.g. `NUMERIC_CONSTANT`.
    pub fn name(self) -> &'static str {
        match self {
            TokenKind::Keyword => "KEYWORD",
            TokenKind::Identifier => "IDENTIFIER",
            TokenKind::Operator => "OPERATOR",
            TokenKind::NumericConstant => "NUMERIC_CONSTANT",
            TokenKind::CharacterConstant => "CHARACTER_CONSTANT",
            TokenKind::SpecialCharacter => "SPECIAL_CHARACTER",
            TokenKind::Comment => "COMMENT",
            TokenKind::Whitespace => "WHITESPACE",
            TokenKind::Newline => "NEWLINE",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            TokenKind::Keyword => "keyword",
            TokenKind::Identifier => "identifier",
            TokenKind::Operator => "operator",
            TokenKind::NumericConstant => "numeric constant",
            TokenKind::CharacterConstant => "character constant",
            TokenKind::SpecialCharacter => "special character",
            TokenKind::Comment => "comment",
            TokenKind::Whitespace => "white space",
            TokenKind::Newline => "new line",
        };
        f.write_str(label)
    }
}

/// A classified lexeme and the position of its first character.
///
/// Serializes as `{"value", "type", "line", "column"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Token {
    #[serde(rename = "value")]
    pub lexeme: String,
    #[serde(rename = "type")]
    pub kind: TokenKind,
    #[serde(flatten)]
    pub location: SourceLocation,
}

impl Token {
    pub fn new(
        lexeme: impl Into<String>,
        kind: TokenKind,
        location: SourceLocation,
    ) -> Self {
        Self {
            lexeme: lexeme.into(),
            kind,
            location,
        }
    }

    pub fn is_trivia(&self) -> bool {
        self.kind.is_trivia()
    }

    /// True if this token has the given category and exact lexeme.
    pub fn is(&self, kind: TokenKind, lexeme: &str) -> bool {
        self.kind == kind && self.lexeme == lexeme
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} '{}'", self.kind, self.lexeme.escape_debug())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_as_flat_record() {
        let token =
            Token::new("main", TokenKind::Identifier, SourceLocation::new(1, 5));
        let json = serde_json::to_value(&token).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "value": "main",
                "type": "IDENTIFIER",
                "line": 1,
                "column": 5
            })
        );
    }

    #[test]
    fn test_trivia_kinds() {
        let trivia: Vec<_> =
            TokenKind::ALL.iter().filter(|k| k.is_trivia()).collect();
        assert_eq!(
            trivia,
            [&TokenKind::Comment, &TokenKind::Whitespace, &TokenKind::Newline]
        );
    }

    #[test]
    fn test_display_escapes_lexeme() {
        let token =
            Token::new("\n", TokenKind::Newline, SourceLocation::new(2, 7));
        assert_eq!(token.to_string(), "new line '\\n'");
    }
}
