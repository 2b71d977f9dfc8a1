use pasc_diagnostic::ErrorCode;
use pasc_icode::{Node, NodeKind};
use pasc_lexer::TokenKind;

use crate::{ParseResult, Parser};

impl Parser<'_> {
    /// `REPEAT stmts UNTIL expr` to `LOOP(stmts..., TEST(NOT(expr)))`.
    ///
    /// TEST always means "keep looping while true", so the exit condition
    /// is negated.
    pub(crate) fn parse_repeat_statement(&mut self) -> ParseResult<Node> {
        let line = self.current_line();
        self.advance(); // REPEAT

        let mut node = Node::new(NodeKind::Loop).with_line(line);
        self.parse_statement_list(&mut node, TokenKind::Until, ErrorCode::MissingUntil)?;

        let test_line = self.current_line();
        let condition = self.parse_expression()?;
        let test = Node::new(NodeKind::Test)
            .with_line(test_line)
            .with_child(Node::new(NodeKind::Not).with_child(condition));
        node.add_child(test);

        Ok(node)
    }
}
