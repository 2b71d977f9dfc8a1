use pasc_diagnostic::ErrorCode;
use pasc_icode::{Node, NodeKind};
use pasc_lexer::TokenKind;

use crate::{ParseResult, Parser};

impl Parser<'_> {
    /// `IDENTIFIER [ ( expr {, expr} ) ]`
    ///
    /// Arguments, when present, hang under a single PARAMETERS child.
    pub(crate) fn parse_call_statement(&mut self) -> ParseResult<Node> {
        let line = self.current_line();
        let id = self.enter_current_name();
        self.advance();

        let mut call = Node::new(NodeKind::Call).with_line(line);
        call.set_id(id);

        if self.eat(TokenKind::LeftParen) {
            let mut parameters = Node::new(NodeKind::Parameters).with_line(line);
            if !self.check(TokenKind::RightParen) {
                loop {
                    parameters.add_child(self.parse_expression()?);
                    if !self.eat(TokenKind::Comma) {
                        break;
                    }
                }
            }
            self.expect(TokenKind::RightParen, ErrorCode::MissingRightParen);
            call.add_child(parameters);
        }

        Ok(call)
    }
}
