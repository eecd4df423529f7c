//! Statement parsing implementation
//!
//! This module handles parsing of all mini-C statement types:
//!
//! - Compound statements: `{ declarations... statements... }`
//! - Control flow: `if`/`else`, `while`, `for`
//! - `return`, with or without a value
//! - Expression statements, including the empty statement `;`
//!
//! # Grammar
//!
//! ```text
//! compound_stmt ::= "{" var_decl* stmt* "}"
//! stmt          ::= compound_stmt | if_stmt | while_stmt | for_stmt
//!                 | return_stmt | expr_stmt
//! expr_stmt     ::= expr? ";"
//! if_stmt       ::= "if" "(" expr ")" stmt ( "else" stmt )?
//! while_stmt    ::= "while" "(" expr ")" stmt
//! for_stmt      ::= "for" "(" expr_stmt expr_stmt expr? ")" stmt
//! return_stmt   ::= "return" expr? ";"
//! ```
//!
//! All parsing methods are implemented as `pub(crate)` methods on the [`Parser`] struct.

use crate::parser::parse::{ParseResult, Parser};

impl Parser<'_> {
    /// Parse compound statement. Declarations must precede statements.
    pub(crate) fn parse_compound_statement(&mut self) -> ParseResult {
        self.expect_special("{")?;

        while self.is_type_keyword() {
            self.parse_variable_declaration()?;
        }

        while !self.check_special("}") && self.peek().is_some() {
            self.parse_statement()?;
        }

        self.expect_special("}")
    }

    /// Parse a statement
    pub(crate) fn parse_statement(&mut self) -> ParseResult {
        self.nested(|p| {
            if p.check_special("{") {
                return p.parse_compound_statement();
            }

            if p.match_keyword("if") {
                return p.parse_if_statement();
            }

            if p.match_keyword("while") {
                return p.parse_while_statement();
            }

            if p.match_keyword("for") {
                return p.parse_for_statement();
            }

            if p.match_keyword("return") {
                return p.parse_return_statement();
            }

            p.parse_expression_statement()
        })
    }

    /// Parse expression statement: [expr] ;
    pub(crate) fn parse_expression_statement(&mut self) -> ParseResult {
        if self.match_special(";") {
            return Ok(());
        }

        self.parse_expression()?;
        self.expect_special(";")
    }

    /// Parse if statement
    fn parse_if_statement(&mut self) -> ParseResult {
        self.expect_special("(")?;
        self.parse_expression()?;
        self.expect_special(")")?;

        self.parse_statement()?;

        // A dangling else binds to the innermost if
        if self.match_keyword("else") {
            self.parse_statement()?;
        }

        Ok(())
    }

    /// Parse while statement
    fn parse_while_statement(&mut self) -> ParseResult {
        self.expect_special("(")?;
        self.parse_expression()?;
        self.expect_special(")")?;

        self.parse_statement()
    }

    /// Parse for statement
    fn parse_for_statement(&mut self) -> ParseResult {
        self.expect_special("(")?;

        // Init and condition carry their own ';'
        self.parse_expression_statement()?;
        self.parse_expression_statement()?;

        // Increment (optional)
        if !self.check_special(")") {
            self.parse_expression()?;
        }

        self.expect_special(")")?;

        self.parse_statement()
    }

    /// Parse return statement
    fn parse_return_statement(&mut self) -> ParseResult {
        if !self.check_special(";") {
            self.parse_expression()?;
        }

        self.expect_special(";")
    }
}
