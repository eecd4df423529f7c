//! Input and output around the front end
//!
//! Everything here is used by the `minic` binary rather than by the parser:
//! loading a source file, the per-category token summary printed to the
//! console, and the JSON token dump.

use crate::parser::token::{Token, TokenKind};
use rustc_hash::FxHashMap;
use std::fmt;
use std::fs;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("cannot read '{}': {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("cannot write '{}': {source}", .path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Unsupported file extension: .{0}")]
    UnsupportedExtension(String),

    #[error("cannot serialize tokens: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Read a source file, normalizing `\r\n` line endings to `\n`.
pub fn read_source(path: &Path) -> Result<String, ReportError> {
    let text = fs::read_to_string(path).map_err(|source| ReportError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    if text.contains("\r\n") {
        Ok(text.replace("\r\n", "\n"))
    } else {
        Ok(text)
    }
}

/// Write `tokens` as a pretty-printed JSON array of
/// `{value, type, line, column}` records. Only `.json` paths are accepted.
pub fn write_tokens(tokens: &[Token], path: &Path) -> Result<(), ReportError> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or_default()
        .to_ascii_lowercase();
    if extension != "json" {
        return Err(ReportError::UnsupportedExtension(extension));
    }

    let write_err = |source| ReportError::Write {
        path: path.to_path_buf(),
        source,
    };

    let file = fs::File::create(path).map_err(write_err)?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, tokens)?;
    writer.write_all(b"\n").map_err(write_err)?;
    writer.flush().map_err(write_err)?;

    log::debug!("wrote {} tokens to {}", tokens.len(), path.display());
    Ok(())
}

/// Token counts per category, printed before the token listing.
pub struct Summary<'a> {
    tokens: &'a [Token],
    counts: FxHashMap<TokenKind, usize>,
}

impl<'a> Summary<'a> {
    pub fn new(tokens: &'a [Token]) -> Self {
        let mut counts = FxHashMap::default();
        for token in tokens {
            *counts.entry(token.kind).or_insert(0) += 1;
        }
        Self { tokens, counts }
    }

    pub fn total(&self) -> usize {
        self.tokens.len()
    }

    pub fn count(&self, kind: TokenKind) -> usize {
        self.counts.get(&kind).copied().unwrap_or(0)
    }
}

impl fmt::Display for Summary<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Total Tokens: {}", self.total())?;
        writeln!(f)?;

        writeln!(f, "Token Type Counts:")?;
        for kind in TokenKind::ALL {
            writeln!(f, "  {:<18}: {}", kind.name(), self.count(kind))?;
        }

        writeln!(f)?;
        writeln!(f, "Tokens:")?;
        for token in self.tokens {
            writeln!(
                f,
                "  ({}, {}) @ {}:{}",
                token.lexeme.escape_debug(),
                token.kind.name(),
                token.location.line,
                token.location.column
            )?;
        }

        writeln!(f, "==============================")
    }
}
