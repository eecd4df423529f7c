//! Expression parsing implementation
//!
//! One method per precedence level, lowest first. Binary levels consume their
//! operator tails in a loop, so chains like `a - b - c` never recurse on the
//! right-hand side.
//!
//! # Grammar
//!
//! ```text
//! expr     ::= assign
//! assign   ::= ID "=" assign | or
//! or       ::= and ( "||" and )*
//! and      ::= rel ( "&&" rel )*
//! rel      ::= add ( ( "<" | "<=" | ">" | ">=" | "==" | "!=" ) add )?
//! add      ::= term ( ( "+" | "-" ) term )*
//! term     ::= factor ( ( "*" | "/" ) factor )*
//! factor   ::= "(" expr ")" | ID ( "(" args ")" )? | NUMBER
//! args     ::= ( expr ( "," expr )* )?
//! ```
//!
//! `assign` and `or` both start with an identifier. The assignment form is
//! tried first; when no `=` follows the identifier the cursor is restored and
//! the identifier is parsed again as a factor.
//!
//! All parsing methods are implemented as `pub(crate)` methods on the [`Parser`] struct.

use crate::parser::parse::{ParseResult, Parser};
use crate::parser::token::TokenKind;

const RELATIONAL_OPERATORS: [&str; 6] = ["<", "<=", ">", ">=", "==", "!="];

impl Parser<'_> {
    /// Parse expression (top-level entry point)
    pub(crate) fn parse_expression(&mut self) -> ParseResult {
        self.nested(|p| p.parse_assignment())
    }

    /// Parse assignment (right-associative)
    fn parse_assignment(&mut self) -> ParseResult {
        if self.check_kind(TokenKind::Identifier) {
            let saved_pos = self.position;
            self.advance(); // consume identifier

            if self.match_operator("=") {
                return self.nested(|p| p.parse_assignment());
            }

            log::trace!("no '=' after identifier, backtracking to {saved_pos}");
            self.position = saved_pos;
        }

        self.parse_logical_or()
    }

    /// Parse logical OR (||)
    fn parse_logical_or(&mut self) -> ParseResult {
        self.parse_logical_and()?;

        while self.match_operator("||") {
            self.parse_logical_and()?;
        }

        Ok(())
    }

    /// Parse logical AND (&&)
    fn parse_logical_and(&mut self) -> ParseResult {
        self.parse_relational()?;

        while self.match_operator("&&") {
            self.parse_relational()?;
        }

        Ok(())
    }

    /// Parse relational (< <= > >= == !=), non-associative
    fn parse_relational(&mut self) -> ParseResult {
        self.parse_additive()?;

        if RELATIONAL_OPERATORS.iter().any(|op| self.match_operator(op)) {
            self.parse_additive()?;
        }

        Ok(())
    }

    /// Parse additive (+ -)
    fn parse_additive(&mut self) -> ParseResult {
        self.parse_term()?;

        while self.match_operator("+") || self.match_operator("-") {
            self.parse_term()?;
        }

        Ok(())
    }

    /// Parse multiplicative (* /)
    fn parse_term(&mut self) -> ParseResult {
        self.parse_factor()?;

        while self.match_operator("*") || self.match_operator("/") {
            self.parse_factor()?;
        }

        Ok(())
    }

    /// Parse factor (parenthesized expression, variable, call, number)
    fn parse_factor(&mut self) -> ParseResult {
        if self.match_special("(") {
            self.parse_expression()?;
            return self.expect_special(")");
        }

        if self.check_kind(TokenKind::Identifier) {
            self.advance();

            // Function call
            if self.match_special("(") {
                self.parse_argument_list()?;
                return self.expect_special(")");
            }

            return Ok(());
        }

        if self.check_kind(TokenKind::NumericConstant) {
            self.advance();
            return Ok(());
        }

        Err(self.unexpected("expression"))
    }

    /// Parse argument list (between the parentheses)
    fn parse_argument_list(&mut self) -> ParseResult {
        if self.check_special(")") {
            return Ok(());
        }

        loop {
            self.parse_expression()?;

            if !self.match_special(",") {
                break;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::parser::lexer::tokenize;
    use crate::parser::parse::{parse, ParseResult, SyntaxError};

    fn check_expr(expr: &str) -> ParseResult {
        let source = format!("int main(void) {{ {expr}; }}");
        parse(&tokenize(&source).unwrap())
    }

    #[test]
    fn test_precedence_levels() {
        assert_eq!(check_expr("x = 1 + 2 * 3"), Ok(()));
        assert_eq!(check_expr("a || b && c < d + e * f"), Ok(()));
        assert_eq!(check_expr("(a + b) * (c - d) / 2.5"), Ok(()));
    }

    #[test]
    fn test_chained_assignment() {
        assert_eq!(check_expr("a = b = 3"), Ok(()));
        assert_eq!(check_expr("a = b = c = d + 1"), Ok(()));
    }

    #[test]
    fn test_backtracking_after_identifier() {
        assert_eq!(check_expr("a"), Ok(()));
        assert_eq!(check_expr("a + b"), Ok(()));
        assert_eq!(check_expr("a == b"), Ok(()));
        assert_eq!(check_expr("f(a, b)"), Ok(()));
    }

    #[test]
    fn test_assignment_target_must_be_identifier() {
        assert!(check_expr("1 = a").is_err());
        assert!(check_expr("(a) = 1").is_err());
        assert!(check_expr("a + b = c").is_err());
        assert!(check_expr("f() = 1").is_err());
    }

    #[test]
    fn test_relational_is_not_chained() {
        assert_eq!(check_expr("a < b"), Ok(()));
        assert!(check_expr("a < b < c").is_err());
        assert_eq!(check_expr("(a < b) < c"), Ok(()));
    }

    #[test]
    fn test_calls() {
        assert_eq!(check_expr("f()"), Ok(()));
        assert_eq!(check_expr("x = f(g(1), h(a = 2))"), Ok(()));
        assert!(check_expr("f(,)").is_err());
        assert!(check_expr("f(1,)").is_err());
        assert!(check_expr("f(1").is_err());
    }

    #[test]
    fn test_missing_operand() {
        match check_expr("x = a >").unwrap_err() {
            SyntaxError::UnexpectedToken { expected, found } => {
                assert_eq!(expected, "expression");
                assert_eq!(found.lexeme, ";");
            }
            other => panic!("Expected UnexpectedToken, got {other:?}"),
        }
    }

    #[test]
    fn test_out_of_grammar_operands() {
        assert!(check_expr("-1").is_err());
        assert!(check_expr("!a").is_err());
        assert!(check_expr("c = 'x'").is_err());
        assert!(check_expr("a % b").is_err());
        assert!(check_expr("i++").is_err());
    }

    #[test]
    fn test_deep_assignment_chain_hits_limit() {
        let chain = "a = ".repeat(400) + "1";
        assert!(matches!(
            check_expr(&chain),
            Err(SyntaxError::TooDeep { .. })
        ));
    }
}
