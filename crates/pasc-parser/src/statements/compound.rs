use pasc_diagnostic::ErrorCode;
use pasc_icode::{Node, NodeKind};
use pasc_lexer::TokenKind;

use crate::{ParseResult, Parser};

impl Parser<'_> {
    /// `BEGIN stmt {; stmt} END`
    pub(crate) fn parse_compound_statement(&mut self) -> ParseResult<Node> {
        let mut compound = Node::new(NodeKind::Compound).with_line(self.current_line());
        self.advance(); // BEGIN

        self.parse_statement_list(&mut compound, TokenKind::End, ErrorCode::MissingEnd)?;
        Ok(compound)
    }
}
