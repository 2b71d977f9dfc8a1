//! Syntax error reporting.

use pasc_diagnostic::{Diagnostic, DiagnosticKind, ErrorCode, Label};
use pasc_lexer::Token;
use tracing::debug;

/// Collects syntax errors. Flagging never fails and never stops the parse;
/// the parser decides what to do with the count.
#[derive(Debug, Default)]
pub struct ErrorReporter {
    diagnostics: Vec<Diagnostic>,
}

impl ErrorReporter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `code` at `token`.
    pub fn flag(&mut self, token: &Token, code: ErrorCode) {
        debug!(
            code = code.as_str(),
            line = token.line,
            column = token.column,
            text = %token.text,
            "syntax error: {code}"
        );

        let label = if token.is_eof() {
            "end of file reached here".to_string()
        } else {
            format!("found `{}`", token.text)
        };
        self.diagnostics.push(
            Diagnostic::from_code(DiagnosticKind::Parser, token.span, code)
                .with_position(token.position())
                .with_label(Label::new(token.span, label)),
        );
    }

    pub fn error_count(&self) -> usize {
        self.diagnostics.len()
    }

    pub fn into_diagnostics(self) -> Vec<Diagnostic> {
        self.diagnostics
    }
}
