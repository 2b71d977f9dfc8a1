use pasc_diagnostic::ErrorCode;
use pasc_icode::{Node, NodeKind};
use pasc_lexer::TokenKind;

use crate::recovery::COLON_EQUALS_SET;
use crate::{ParseError, ParseResult, Parser};

impl Parser<'_> {
    /// `IDENTIFIER := expr`
    ///
    /// The target is entered into the symbol table. Without a target there
    /// is nothing to assign to, so a NO_OP comes back in its place.
    pub(crate) fn parse_assignment_statement(&mut self) -> ParseResult<Node> {
        let line = self.current_line();

        if !self.check(TokenKind::Identifier) {
            if self.at_end() {
                self.flag(ErrorCode::UnexpectedEof);
                return Err(ParseError::UnexpectedEof { line });
            }
            self.flag(ErrorCode::MissingIdentifier);
            return Ok(Node::new(NodeKind::NoOp).with_line(line));
        }

        let target = self.enter_current_name();
        self.advance();

        self.sync_and_expect(COLON_EQUALS_SET, TokenKind::ColonEquals, ErrorCode::MissingColonEquals);
        let value = self.parse_expression()?;

        Ok(Node::new(NodeKind::Assign)
            .with_line(line)
            .with_child(Node::variable(target))
            .with_child(value))
    }
}
