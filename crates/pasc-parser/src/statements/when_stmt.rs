use pasc_diagnostic::ErrorCode;
use pasc_icode::{Node, NodeKind};
use pasc_lexer::TokenKind;

use crate::recovery::{EQUAL0_SET, GREATERTHAN0_SET, LESSTHAN0_SET};
use crate::{ParseResult, Parser};

impl Parser<'_> {
    /// Parse a three-way sign branch.
    ///
    /// ```text
    /// WHEN expr LESSTHAN0 s1 [;] EQUAL0 s2 [;] GREATERTHAN0 s3
    /// ```
    ///
    /// The expression is evaluated once into a hidden temporary named after
    /// its source line, then tested against zero:
    ///
    /// ```text
    /// COMPOUND
    ///     ASSIGN(tmp, expr)
    ///     IF(LT(tmp, 0), s1,
    ///        IF(EQ(tmp, 0), s2, s3))
    /// ```
    ///
    /// The last branch needs no test of its own: after `< 0` and `= 0` only
    /// `> 0` is left.
    pub(crate) fn parse_when_statement(&mut self) -> ParseResult<Node> {
        let line = self.current_line();
        self.advance(); // WHEN

        let expr_line = self.current_line();
        let expression = self.parse_expression()?;

        let name = self.config.when_temp_name(expr_line);
        let temp = self.symbols.enter_local(&name);
        self.symbols.append_line(temp, expr_line);

        let assign = Node::new(NodeKind::Assign)
            .with_line(expr_line)
            .with_child(Node::variable(temp))
            .with_child(expression);
        let mut compound = Node::new(NodeKind::Compound)
            .with_line(line)
            .with_child(assign);

        // < 0
        self.sync_and_expect(LESSTHAN0_SET, TokenKind::LessThan0, ErrorCode::MissingLessThan0);
        let negative = self.parse_statement()?;
        let mut if_lt = Node::new(NodeKind::If)
            .with_line(line)
            .with_child(compare_with_zero(NodeKind::Lt, temp))
            .with_child(negative);

        // = 0
        self.eat(TokenKind::Semicolon);
        self.synchronize(EQUAL0_SET);
        let eq_line = self.current_line();
        self.expect(TokenKind::Equal0, ErrorCode::MissingEqual0);
        let zero = self.parse_statement()?;
        let mut if_eq = Node::new(NodeKind::If)
            .with_line(eq_line)
            .with_child(compare_with_zero(NodeKind::Eq, temp))
            .with_child(zero);

        // > 0
        self.eat(TokenKind::Semicolon);
        self.sync_and_expect(
            GREATERTHAN0_SET,
            TokenKind::GreaterThan0,
            ErrorCode::MissingGreaterThan0,
        );
        let positive = self.parse_statement()?;

        if_eq.add_child(positive);
        if_lt.add_child(if_eq);
        compound.add_child(if_lt);
        Ok(compound)
    }
}

/// `kind(tmp, 0)` with a fresh VARIABLE node for the temporary.
fn compare_with_zero(kind: NodeKind, temp: pasc_common::SymbolId) -> Node {
    Node::binary(kind, Node::variable(temp), Node::integer(0))
}

#[cfg(test)]
mod tests {
    use crate::{ParserConfig, parse_statement, parse_with_config};
    use pasc_diagnostic::ErrorCode;
    use pasc_icode::NodeKind;

    const SOURCE: &str = "WHEN a - b LESSTHAN0 x := 1; EQUAL0 x := 2; GREATERTHAN0 x := 3";

    #[test]
    fn test_when_evaluates_expression_once() {
        let output = parse_statement(SOURCE);
        let tree = output.tree.unwrap();
        assert!(output.diagnostics.is_empty());
        assert_eq!(tree.child_kinds(), vec![NodeKind::Assign, NodeKind::If]);
        assert_eq!(tree.count(NodeKind::Subtract), 1);
    }

    #[test]
    fn test_when_branch_chain() {
        let tree = parse_statement(SOURCE).tree.unwrap();
        let if_lt = tree.child(1).unwrap();
        assert_eq!(
            if_lt.child_kinds(),
            vec![NodeKind::Lt, NodeKind::Assign, NodeKind::If]
        );
        let if_eq = if_lt.child(2).unwrap();
        assert_eq!(
            if_eq.child_kinds(),
            vec![NodeKind::Eq, NodeKind::Assign, NodeKind::Assign]
        );
    }

    #[test]
    fn test_when_temp_is_named_after_line() {
        let output = parse_statement(SOURCE);
        let tree = output.tree.unwrap();
        let temp = tree.child(0).unwrap().child(0).unwrap().id().unwrap();
        assert_eq!(output.symbols.name(temp), "$when_1");

        let config = ParserConfig::new().when_temp_prefix("__sign");
        let output = parse_with_config(&format!("\n\n{SOURCE}"), &config);
        assert!(output.symbols.lookup("__sign3").is_some());
    }

    #[test]
    fn test_when_missing_first_marker() {
        let output = parse_statement("WHEN n x := 1 EQUAL0 x := 2 GREATERTHAN0 x := 3");
        let codes: Vec<_> = output.diagnostics.iter().filter_map(|d| d.code).collect();
        assert_eq!(codes, vec![ErrorCode::MissingLessThan0]);
        assert_eq!(output.tree.unwrap().count(NodeKind::If), 2);
    }
}
