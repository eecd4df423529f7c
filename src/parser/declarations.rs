//! Declaration parsing implementation
//!
//! This module handles the declaration forms of mini-C:
//!
//! - Top-level declarations: a function definition or a variable list
//! - Local variable declarations at the head of a compound statement
//! - Function parameter lists
//! - Type specifiers
//!
//! # Grammar
//!
//! ```text
//! decl       ::= type_spec ID ( "(" param_list ")" compound_stmt
//!                             | ( "," ID )* ";" )
//! param_list ::= "void" | ε | type_spec ID ( "," type_spec ID )*
//! var_decl   ::= type_spec ID ( "," ID )* ";"
//! type_spec  ::= "int" | "float" | "void"
//! ```
//!
//! All parsing methods are implemented as `pub(crate)` methods on the [`Parser`] struct.

use crate::parser::parse::{ParseResult, Parser};
use crate::parser::token::TokenKind;

impl Parser<'_> {
    /// Parse a top-level declaration (function definition or variable list)
    pub(crate) fn parse_declaration(&mut self) -> ParseResult {
        self.parse_type_spec()?;
        let name = self.expect_identifier()?;

        if self.match_special("(") {
            log::debug!("function definition '{}'", name.lexeme);
            self.parse_parameter_list()?;
            self.expect_special(")")?;
            return self.parse_compound_statement();
        }

        self.parse_identifier_tail()
    }

    /// Parse local variable declaration: type name, name, ...;
    pub(crate) fn parse_variable_declaration(&mut self) -> ParseResult {
        self.parse_type_spec()?;
        self.expect_identifier()?;
        self.parse_identifier_tail()
    }

    /// Parse the `("," ID)* ";"` tail shared by both declaration forms.
    fn parse_identifier_tail(&mut self) -> ParseResult {
        while self.match_special(",") {
            self.expect_identifier()?;
        }

        if self.match_special(";") {
            Ok(())
        } else {
            Err(self.unexpected("';' or ','"))
        }
    }

    /// Parse parameter list (between the parentheses)
    pub(crate) fn parse_parameter_list(&mut self) -> ParseResult {
        if self.check_special(")") {
            return Ok(());
        }

        // (void) means no parameters; `void x` is an ordinary parameter
        if self.check_keyword("void")
            && self.peek_ahead(1)
                .is_some_and(|t| t.is(TokenKind::SpecialCharacter, ")"))
        {
            self.advance();
            return Ok(());
        }

        loop {
            self.parse_type_spec()?;
            self.expect_identifier()?;

            if !self.match_special(",") {
                break;
            }
        }

        Ok(())
    }

    /// Parse type specifier: int | float | void
    pub(crate) fn parse_type_spec(&mut self) -> ParseResult {
        if self.is_type_keyword() {
            self.advance();
            Ok(())
        } else {
            Err(self.unexpected("type specifier ('int', 'float' or 'void')"))
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::parser::lexer::tokenize;
    use crate::parser::parse::{parse, ParseResult, SyntaxError};
    use crate::parser::token::{Token, TokenKind};

    fn check(source: &str) -> ParseResult {
        parse(&tokenize(source).unwrap())
    }

    #[test]
    fn test_global_variables() {
        assert_eq!(check("int x;"), Ok(()));
        assert_eq!(check("float a, b, c;"), Ok(()));
        assert_eq!(check("int x; float y; void z;"), Ok(()));
    }

    #[test]
    fn test_function_definitions() {
        assert_eq!(check("void f() {}"), Ok(()));
        assert_eq!(check("int add(int a, float b) { return a + b; }"), Ok(()));
        assert_eq!(check("int g(void x) {}"), Ok(()));
    }

    #[test]
    fn test_missing_terminator() {
        match check("int x").unwrap_err() {
            SyntaxError::UnexpectedEof { expected } => {
                assert_eq!(expected, "';' or ','")
            }
            other => panic!("Expected UnexpectedEof, got {other:?}"),
        }
    }

    #[test]
    fn test_bad_declarations() {
        assert!(check("char c;").is_err());
        assert!(check("int;").is_err());
        assert!(check("int x,;").is_err());
        assert!(check("int f(int) {}").is_err());
        assert!(check("int f(int a,) {}").is_err());
        assert!(check("int f(void, int a) {}").is_err());
        assert!(check("int f();").is_err());
        assert!(check("int x = 1;").is_err());
    }

    #[test]
    fn test_void_marker_needs_special_paren() {
        // A ')' lexeme of another category does not close `(void`
        let mut tokens = tokenize("int f(void) {}").unwrap();
        let paren = tokens.iter().position(|t| t.lexeme == ")").unwrap();
        let location = tokens[paren].location;
        tokens[paren] = Token::new(")", TokenKind::Identifier, location);

        match parse(&tokens).unwrap_err() {
            SyntaxError::UnexpectedToken { expected, found } => {
                assert_eq!(expected, "')'");
                assert!(found.is(TokenKind::SpecialCharacter, "{"));
            }
            other => panic!("Expected UnexpectedToken, got {other:?}"),
        }
    }

    #[test]
    fn test_first_token_must_be_type() {
        let err = check("x = 1;").unwrap_err();
        assert!(matches!(
            err,
            SyntaxError::UnexpectedToken { ref found, .. } if found.lexeme == "x"
        ));
    }
}
