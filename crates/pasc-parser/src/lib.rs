//! Statement parser for the pasc front end.
//!
//! Turns a token stream into an intermediate tree, reporting syntax errors
//! as it goes and recovering from them by panic mode: after an error the
//! parser skips ahead to a token in a precomputed [`recovery`] set and
//! carries on. A malformed statement yields a best-effort tree plus
//! diagnostics; only running out of input mid-construct stops the parse.

mod config;
mod error;
mod expression;
mod parser;
pub mod recovery;
mod reporter;
mod statements;

use std::fs;
use std::path::Path;

use pasc_common::SymbolTable;
use pasc_diagnostic::{Diagnostic, ErrorCode};
use pasc_icode::Node;
use pasc_lexer::{Lexer, TokenKind};

pub use config::ParserConfig;
pub use error::{ParseError, ParseResult};
pub use parser::Parser;
pub use recovery::TokenSet;
pub use reporter::ErrorReporter;

/// Everything a parse produces.
#[derive(Debug)]
pub struct ParseOutput {
    /// The tree, or the failure that stopped the parse.
    pub tree: Result<Node, ParseError>,
    /// Lexer diagnostics first, then parser diagnostics, each in source order.
    pub diagnostics: Vec<Diagnostic>,
    /// Names entered while parsing, including WHEN temporaries.
    pub symbols: SymbolTable,
}

impl ParseOutput {
    pub fn error_count(&self) -> usize {
        self.diagnostics.len()
    }

    pub fn has_errors(&self) -> bool {
        self.tree.is_err() || self.error_count() > 0
    }
}

/// Parse a program with the default configuration.
pub fn parse(source: &str) -> ParseOutput {
    parse_with_config(source, &ParserConfig::default())
}

/// Parse a program.
#[tracing::instrument(level = "debug", skip_all, fields(len = source.len()))]
pub fn parse_with_config(source: &str, config: &ParserConfig) -> ParseOutput {
    run(source, config, |parser| parser.parse_program())
}

/// Parse a single statement, optionally followed by `;`. Anything after it
/// is reported as unexpected.
pub fn parse_statement(source: &str) -> ParseOutput {
    run(source, &ParserConfig::default(), |parser| {
        let statement = parser.parse_statement()?;
        parser.eat(TokenKind::Semicolon);
        if !parser.at_end() {
            parser.flag(ErrorCode::UnexpectedToken);
        }
        Ok(statement)
    })
}

/// Read and parse a program file.
pub fn parse_file(path: impl AsRef<Path>, config: &ParserConfig) -> Result<ParseOutput, ParseError> {
    let path = path.as_ref();
    let source = fs::read_to_string(path).map_err(|source| ParseError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(parse_with_config(&source, config))
}

fn run(
    source: &str,
    config: &ParserConfig,
    entry: impl FnOnce(&mut Parser<'_>) -> ParseResult<Node>,
) -> ParseOutput {
    let (tokens, mut diagnostics) = Lexer::new(source).tokenize();
    let mut symbols = SymbolTable::new();

    let mut parser = Parser::new(tokens, &mut symbols).with_config(config.clone());
    let tree = entry(&mut parser);
    diagnostics.extend(parser.diagnostics());

    ParseOutput {
        tree,
        diagnostics,
        symbols,
    }
}
