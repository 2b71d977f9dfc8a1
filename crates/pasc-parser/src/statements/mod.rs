//! Statement parsers.
//!
//! Each parser starts at the statement's first token and returns one owned
//! subtree rooted at the node that represents the statement.

mod assignment;
mod call;
mod compound;
mod if_stmt;
mod loop_stmt;
mod repeat;
mod when_stmt;
mod while_stmt;

use pasc_icode::{Node, NodeKind};
use pasc_lexer::TokenKind;
use tracing::trace;

use crate::recovery::is_stmt_follow;
use crate::{ParseResult, Parser};

impl Parser<'_> {
    /// Parse one statement. A token that cannot start a statement yields a
    /// NO_OP without being consumed; the enclosing list deals with it.
    pub fn parse_statement(&mut self) -> ParseResult<Node> {
        let kind = self.current_kind();
        let line = self.current_line();
        trace!(%kind, line, "statement");

        let mut node = match kind {
            TokenKind::Begin => self.parse_compound_statement()?,
            TokenKind::Identifier => match self.peek_kind() {
                TokenKind::ColonEquals => self.parse_assignment_statement()?,
                next if next == TokenKind::LeftParen
                    || next == TokenKind::EndOfFile
                    || is_stmt_follow(next) =>
                {
                    self.parse_call_statement()?
                }
                _ => self.parse_assignment_statement()?,
            },
            TokenKind::If => self.parse_if_statement()?,
            TokenKind::While => self.parse_while_statement()?,
            TokenKind::Repeat => self.parse_repeat_statement()?,
            TokenKind::Loop => self.parse_loop_statement()?,
            TokenKind::When => self.parse_when_statement()?,
            _ => Node::new(NodeKind::NoOp),
        };

        if node.line().is_none() {
            node.set_line(line);
        }
        Ok(node)
    }
}
