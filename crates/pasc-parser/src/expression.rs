//! Expression parser.
//!
//! Pascal precedence, loosest first:
//!
//! | level          | operators                 |
//! |----------------|---------------------------|
//! | relational     | `=` `<>` `<` `<=` `>` `>=` |
//! | additive       | unary `+` `-`, `+` `-` `OR` |
//! | multiplicative | `*` `/` `DIV` `MOD` `AND`  |
//! | factor         | `NOT`, `( expr )`, operands |
//!
//! Relational operators do not chain: `a < b < c` stops after `a < b`.

use pasc_diagnostic::ErrorCode;
use pasc_icode::{Node, NodeKind, Value};
use pasc_lexer::{TokenKind, TokenValue};

use crate::{ParseError, ParseResult, Parser};

impl Parser<'_> {
    pub(crate) fn parse_expression(&mut self) -> ParseResult<Node> {
        let left = self.parse_simple_expression()?;

        let Some(kind) = relational_operator(self.current_kind()) else {
            return Ok(left);
        };
        self.advance();
        let right = self.parse_simple_expression()?;
        Ok(Node::binary(kind, left, right))
    }

    fn parse_simple_expression(&mut self) -> ParseResult<Node> {
        let sign = self.current_kind();
        let signed = matches!(sign, TokenKind::Plus | TokenKind::Minus);
        if signed {
            self.advance();
        }

        let mut left = self.parse_term()?;
        if sign == TokenKind::Minus {
            left = Node::new(NodeKind::Negate).with_child(left);
        }

        while let Some(kind) = additive_operator(self.current_kind()) {
            self.advance();
            let right = self.parse_term()?;
            left = Node::binary(kind, left, right);
        }

        Ok(left)
    }

    fn parse_term(&mut self) -> ParseResult<Node> {
        let mut left = self.parse_factor()?;

        while let Some(kind) = multiplicative_operator(self.current_kind()) {
            self.advance();
            let right = self.parse_factor()?;
            left = Node::binary(kind, left, right);
        }

        Ok(left)
    }

    fn parse_factor(&mut self) -> ParseResult<Node> {
        let token = self.current();
        let node = match token.kind {
            TokenKind::Identifier => {
                let id = self.enter_current_name();
                Node::variable(id)
            }
            TokenKind::Integer => {
                let value = match token.value {
                    Some(TokenValue::Integer(v)) => v,
                    _ => 0,
                };
                Node::integer(value)
            }
            TokenKind::Real => {
                let value = match token.value {
                    Some(TokenValue::Real(v)) => v,
                    _ => 0.0,
                };
                Node::new(NodeKind::RealConstant).with_value(Value::Real(value))
            }
            TokenKind::String => {
                let value = match &token.value {
                    Some(TokenValue::Text(s)) => s.clone(),
                    _ => String::new(),
                };
                Node::new(NodeKind::StringConstant).with_value(Value::String(value))
            }
            TokenKind::Not => {
                self.advance();
                let operand = self.parse_factor()?;
                return Ok(Node::new(NodeKind::Not).with_child(operand));
            }
            TokenKind::LeftParen => {
                self.advance();
                let inner = self.parse_expression()?;
                self.expect(TokenKind::RightParen, ErrorCode::MissingRightParen);
                return Ok(inner);
            }
            TokenKind::EndOfFile => {
                let line = token.line;
                self.flag(ErrorCode::UnexpectedEof);
                return Err(ParseError::UnexpectedEof { line });
            }
            _ => {
                // Leave the token for the enclosing statement list to skip.
                self.flag(ErrorCode::UnexpectedToken);
                return Ok(Node::new(NodeKind::NoOp));
            }
        };

        self.advance();
        Ok(node)
    }
}

fn relational_operator(kind: TokenKind) -> Option<NodeKind> {
    match kind {
        TokenKind::Equals => Some(NodeKind::Eq),
        TokenKind::NotEquals => Some(NodeKind::Ne),
        TokenKind::LessThan => Some(NodeKind::Lt),
        TokenKind::LessEquals => Some(NodeKind::Le),
        TokenKind::GreaterThan => Some(NodeKind::Gt),
        TokenKind::GreaterEquals => Some(NodeKind::Ge),
        _ => None,
    }
}

fn additive_operator(kind: TokenKind) -> Option<NodeKind> {
    match kind {
        TokenKind::Plus => Some(NodeKind::Add),
        TokenKind::Minus => Some(NodeKind::Subtract),
        TokenKind::Or => Some(NodeKind::Or),
        _ => None,
    }
}

fn multiplicative_operator(kind: TokenKind) -> Option<NodeKind> {
    match kind {
        TokenKind::Star => Some(NodeKind::Multiply),
        TokenKind::Slash => Some(NodeKind::FloatDivide),
        TokenKind::Div => Some(NodeKind::IntegerDivide),
        TokenKind::Mod => Some(NodeKind::Mod),
        TokenKind::And => Some(NodeKind::And),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pasc_common::SymbolTable;
    use pasc_lexer::Lexer;

    fn expr(source: &str) -> Node {
        let mut symbols = SymbolTable::new();
        let tokens = Lexer::new(source).tokenize().0;
        let mut parser = Parser::new(tokens, &mut symbols);
        parser.parse_expression().unwrap()
    }

    #[test]
    fn test_multiplication_binds_tighter() {
        let tree = expr("a + b * 2");
        assert_eq!(tree.kind, NodeKind::Add);
        assert_eq!(
            tree.child_kinds(),
            vec![NodeKind::Variable, NodeKind::Multiply]
        );
    }

    #[test]
    fn test_unary_minus_applies_to_first_term() {
        let tree = expr("-x + 1");
        assert_eq!(tree.kind, NodeKind::Add);
        assert_eq!(tree.child(0).unwrap().kind, NodeKind::Negate);
    }

    #[test]
    fn test_relational_over_additive() {
        let tree = expr("i + 1 <= n DIV 2");
        assert_eq!(tree.kind, NodeKind::Le);
        assert_eq!(
            tree.child_kinds(),
            vec![NodeKind::Add, NodeKind::IntegerDivide]
        );
    }

    #[test]
    fn test_constants_carry_values() {
        let tree = expr("'it''s' = 2.5");
        assert_eq!(
            tree.child(0).unwrap().value(),
            Some(&Value::String("it's".to_string()))
        );
        assert_eq!(tree.child(1).unwrap().value(), Some(&Value::Real(2.5)));
    }

    #[test]
    fn test_parentheses_and_not() {
        let tree = expr("NOT (a OR b)");
        assert_eq!(tree.kind, NodeKind::Not);
        assert_eq!(tree.child(0).unwrap().kind, NodeKind::Or);
    }

    #[test]
    fn test_eof_is_fatal() {
        let mut symbols = SymbolTable::new();
        let tokens = Lexer::new("a +").tokenize().0;
        let mut parser = Parser::new(tokens, &mut symbols);
        assert!(matches!(
            parser.parse_expression(),
            Err(ParseError::UnexpectedEof { line: 1 })
        ));
        assert_eq!(parser.error_count(), 1);
    }
}
