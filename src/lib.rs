//! # Introduction
//!
//! minic scans and syntax-checks a small C-like language. The only outputs
//! are the token stream and a single accept/reject verdict; no syntax tree is
//! built and no semantic checks are made.
//!
//! ## Pipeline
//!
//! ```text
//! Source → Lexer → Tokens → Parser → verdict
//!                    └────→ report (summary, JSON dump)
//! ```
//!
//! 1. [`parser`] — classifies lexemes, tokenises the source losslessly and
//!    runs the recursive-descent recognizer.
//! 2. [`report`] — reading source files, the per-category token summary
//!    and JSON token dumps used by the `minic` binary.
//!
//! ## Example
//!
//! ```text
//! let tokens = minic::parser::tokenize("int main(void) { return 0; }")?;
//! minic::parser::parse(&tokens)?;
//! ```

pub mod parser;
pub mod report;
