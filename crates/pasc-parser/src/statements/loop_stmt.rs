use pasc_diagnostic::ErrorCode;
use pasc_icode::{Node, NodeKind};
use pasc_lexer::TokenKind;

use crate::recovery::{DO_SET, RIGHT_PAREN_SET};
use crate::{ParseResult, Parser};

impl Parser<'_> {
    /// Parse a counting loop.
    ///
    /// ```text
    /// LOOP ( init [;] cond [;] update ) DO body
    /// ```
    ///
    /// lowers to `COMPOUND(init, LOOP(TEST(cond), body, update))`, so the
    /// update runs once per iteration after the body. Every node built here
    /// carries the line of the init assignment's first token.
    pub(crate) fn parse_loop_statement(&mut self) -> ParseResult<Node> {
        self.advance(); // LOOP
        self.expect(TokenKind::LeftParen, ErrorCode::MissingLeftParen);

        let line = self.current_line();
        let init = self.parse_assignment_statement()?;
        self.eat(TokenKind::Semicolon);

        let condition = self.parse_expression()?;
        self.eat(TokenKind::Semicolon);

        let mut update = self.parse_assignment_statement()?;
        update.set_line(line);
        self.sync_and_expect(
            RIGHT_PAREN_SET,
            TokenKind::RightParen,
            ErrorCode::MissingRightParen,
        );

        self.sync_and_expect(DO_SET, TokenKind::Do, ErrorCode::MissingDo);
        let body = self.parse_statement()?;

        let test = Node::new(NodeKind::Test)
            .with_line(line)
            .with_child(condition);
        let looping = Node::new(NodeKind::Loop)
            .with_line(line)
            .with_child(test)
            .with_child(body)
            .with_child(update);

        Ok(Node::new(NodeKind::Compound)
            .with_line(line)
            .with_child(init)
            .with_child(looping))
    }
}
