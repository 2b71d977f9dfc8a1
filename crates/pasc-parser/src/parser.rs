//! The pasc parser: token cursor, recovery primitive, statement lists.

use pasc_common::{Span, SymbolId, SymbolTable};
use pasc_diagnostic::{Diagnostic, ErrorCode};
use pasc_icode::{Node, NodeKind};
use pasc_lexer::{Token, TokenKind};
use tracing::trace;

use crate::recovery::{TokenSet, is_stmt_start};
use crate::{ErrorReporter, ParseError, ParseResult, ParserConfig};

/// Recursive-descent parser over a token stream.
///
/// The symbol table is borrowed for the lifetime of the parser: assignment
/// targets, variables and WHEN temporaries are entered into it.
pub struct Parser<'s> {
    tokens: Vec<Token>,
    pos: usize,
    reporter: ErrorReporter,
    pub(crate) symbols: &'s mut SymbolTable,
    pub(crate) config: ParserConfig,
}

impl<'s> Parser<'s> {
    /// Create a parser. Comment and error tokens are dropped here; the lexer
    /// has already reported the errors.
    pub fn new(tokens: Vec<Token>, symbols: &'s mut SymbolTable) -> Self {
        let mut tokens: Vec<Token> = tokens
            .into_iter()
            .filter(|t| !matches!(t.kind, TokenKind::Comment | TokenKind::Error))
            .collect();

        if tokens.last().is_none_or(|t| !t.is_eof()) {
            let (end, line, column) = tokens
                .last()
                .map(|t| (t.span.end.0 as usize, t.line, t.column + 1))
                .unwrap_or((0, 1, 1));
            tokens.push(Token {
                kind: TokenKind::EndOfFile,
                text: String::new(),
                value: None,
                span: Span::from_usize(end, end),
                line,
                column,
            });
        }

        Self {
            tokens,
            pos: 0,
            reporter: ErrorReporter::new(),
            symbols,
            config: ParserConfig::default(),
        }
    }

    pub fn with_config(mut self, config: ParserConfig) -> Self {
        self.config = config;
        self
    }

    pub fn error_count(&self) -> usize {
        self.reporter.error_count()
    }

    pub fn diagnostics(self) -> Vec<Diagnostic> {
        self.reporter.into_diagnostics()
    }

    /// Parse a whole program: either `BEGIN ... END .` or a bare sequence of
    /// statements running to end of file, wrapped in one COMPOUND.
    #[tracing::instrument(level = "trace", skip_all)]
    pub fn parse_program(&mut self) -> ParseResult<Node> {
        if self.check(TokenKind::Begin) {
            let root = self.parse_compound_statement()?;
            self.expect(TokenKind::Dot, ErrorCode::MissingPeriod);
            if !self.at_end() {
                self.flag(ErrorCode::UnexpectedToken);
            }
            return Ok(root);
        }

        let mut root = Node::new(NodeKind::Compound).with_line(self.current().line);
        self.parse_statement_list(&mut root, TokenKind::EndOfFile, ErrorCode::UnexpectedEof)?;
        Ok(root)
    }

    /// Parse statements into `parent` until `terminator`, then consume it or
    /// report `missing`.
    pub(crate) fn parse_statement_list(
        &mut self,
        parent: &mut Node,
        terminator: TokenKind,
        missing: ErrorCode,
    ) -> ParseResult<()> {
        while !self.check(terminator) && !self.at_end() {
            let statement = self.parse_statement()?;
            parent.add_child(statement);
            self.check_error_limit()?;

            if self.eat(TokenKind::Semicolon) {
                continue;
            }

            let kind = self.current_kind();
            if is_stmt_start(kind) {
                self.flag(ErrorCode::MissingSemicolon);
            } else if kind != terminator && !self.at_end() {
                self.flag(ErrorCode::UnexpectedToken);
                self.advance();
            }
        }

        self.expect(terminator, missing);
        Ok(())
    }

    fn check_error_limit(&self) -> ParseResult<()> {
        let count = self.error_count();
        if count > self.config.max_errors {
            return Err(ParseError::TooManyErrors { count });
        }
        Ok(())
    }

    /// Enter the current token's name, case-folded, into the symbol table
    /// and record the line it appears on.
    pub(crate) fn enter_current_name(&mut self) -> SymbolId {
        let token = &self.tokens[self.index()];
        let id = self.symbols.enter_local(&token.text.to_lowercase());
        self.symbols.append_line(id, token.line);
        id
    }

    // ========== Token Helpers ==========

    pub(crate) fn current(&self) -> &Token {
        &self.tokens[self.index()]
    }

    pub(crate) fn current_kind(&self) -> TokenKind {
        self.current().kind
    }

    pub(crate) fn current_line(&self) -> u32 {
        self.current().line
    }

    pub(crate) fn index(&self) -> usize {
        self.pos.min(self.tokens.len() - 1)
    }

    /// Kind of the token after the current one.
    pub(crate) fn peek_kind(&self) -> TokenKind {
        let next = (self.pos + 1).min(self.tokens.len() - 1);
        self.tokens[next].kind
    }

    pub(crate) fn at_end(&self) -> bool {
        self.current_kind() == TokenKind::EndOfFile
    }

    pub(crate) fn check(&self, kind: TokenKind) -> bool {
        self.current_kind() == kind
    }

    pub(crate) fn advance(&mut self) {
        if !self.at_end() {
            self.pos += 1;
        }
    }

    pub(crate) fn eat(&mut self, kind: TokenKind) -> bool {
        if self.check(kind) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Consume `kind`, or report `missing` at the current token and carry on
    /// without consuming anything.
    pub(crate) fn expect(&mut self, kind: TokenKind, missing: ErrorCode) -> bool {
        if self.eat(kind) {
            true
        } else {
            self.flag(missing);
            false
        }
    }

    /// Report `code` at the current token.
    pub(crate) fn flag(&mut self, code: ErrorCode) {
        let index = self.index();
        self.reporter.flag(&self.tokens[index], code);
    }

    // ========== Error Recovery ==========

    /// Skip tokens until one in `set` or end of file, and return its kind.
    /// The first skipped token is reported as unexpected; a token already in
    /// `set` is left alone and nothing is reported.
    pub(crate) fn synchronize(&mut self, set: TokenSet) -> TokenKind {
        if set.contains(self.current_kind()) || self.at_end() {
            return self.current_kind();
        }

        self.flag(ErrorCode::UnexpectedToken);
        while !set.contains(self.current_kind()) && !self.at_end() {
            let token = self.current();
            trace!(kind = %token.kind, line = token.line, text = %token.text, "skipping");
            self.advance();
        }
        self.current_kind()
    }

    /// Synchronize at `set`, then consume `kind` or report `missing`.
    pub(crate) fn sync_and_expect(
        &mut self,
        set: TokenSet,
        kind: TokenKind,
        missing: ErrorCode,
    ) -> bool {
        self.synchronize(set);
        self.expect(kind, missing)
    }
}
