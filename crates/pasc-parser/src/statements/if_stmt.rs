use pasc_diagnostic::ErrorCode;
use pasc_icode::{Node, NodeKind};
use pasc_lexer::TokenKind;

use crate::recovery::THEN_SET;
use crate::{ParseResult, Parser};

impl Parser<'_> {
    /// `IF expr THEN stmt [ELSE stmt]` to `IF(expr, then [, else])`.
    pub(crate) fn parse_if_statement(&mut self) -> ParseResult<Node> {
        let mut node = Node::new(NodeKind::If).with_line(self.current_line());
        self.advance(); // IF

        node.add_child(self.parse_expression()?);

        self.sync_and_expect(THEN_SET, TokenKind::Then, ErrorCode::MissingThen);
        node.add_child(self.parse_statement()?);

        if self.eat(TokenKind::Else) {
            node.add_child(self.parse_statement()?);
        }

        Ok(node)
    }
}
