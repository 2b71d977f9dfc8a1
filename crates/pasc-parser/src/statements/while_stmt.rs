use pasc_diagnostic::ErrorCode;
use pasc_icode::{Node, NodeKind};
use pasc_lexer::TokenKind;

use crate::recovery::DO_SET;
use crate::{ParseResult, Parser};

impl Parser<'_> {
    /// `WHILE expr DO stmt` to `LOOP(TEST(expr), stmt)`.
    pub(crate) fn parse_while_statement(&mut self) -> ParseResult<Node> {
        let line = self.current_line();
        self.advance(); // WHILE

        let condition = self.parse_expression()?;
        let test = Node::new(NodeKind::Test).with_line(line).with_child(condition);

        self.sync_and_expect(DO_SET, TokenKind::Do, ErrorCode::MissingDo);
        let body = self.parse_statement()?;

        Ok(Node::new(NodeKind::Loop)
            .with_line(line)
            .with_child(test)
            .with_child(body))
    }
}
