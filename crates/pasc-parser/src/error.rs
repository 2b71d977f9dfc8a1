//! Parse failures that cannot be recovered from locally.

use std::path::PathBuf;

use pasc_diagnostic::ErrorCode;
use thiserror::Error;

/// A failure that stops the parse. Recoverable syntax errors are reported
/// through the [`ErrorReporter`](crate::ErrorReporter) instead.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("unexpected end of file at line {line}")]
    UnexpectedEof { line: u32 },

    #[error("too many syntax errors ({count}), parsing stopped")]
    TooManyErrors { count: usize },

    #[error("cannot read '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ParseError {
    /// The diagnostic code that names this failure.
    pub fn code(&self) -> ErrorCode {
        match self {
            ParseError::UnexpectedEof { .. } => ErrorCode::UnexpectedEof,
            ParseError::TooManyErrors { .. } => ErrorCode::TooManyErrors,
            ParseError::Io { .. } => ErrorCode::IoError,
        }
    }
}

pub type ParseResult<T> = Result<T, ParseError>;
