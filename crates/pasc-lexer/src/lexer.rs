//! The pasc lexer.
//! pasc 词法分析器。

use crate::token::{Token, TokenKind, TokenValue};
use pasc_common::{Position, Span};
use pasc_diagnostic::{Diagnostic, DiagnosticKind, ErrorCode, Label};
use tracing::trace;

/// The pasc lexer.
/// pasc 词法分析器。
///
/// Converts source code into a sequence of classified tokens ending with
/// `EndOfFile`.
/// 将源代码转换为以 `EndOfFile` 结尾的 token 序列。
pub struct Lexer<'src> {
    source: &'src str,
    /// Character iterator with byte offsets
    /// 带字节偏移的字符迭代器
    chars: std::iter::Peekable<std::str::CharIndices<'src>>,
    /// Byte offset of the next unread character
    /// 下一个未读字符的字节偏移
    pos: usize,
    /// Line and column of the next unread character
    /// 下一个未读字符的行号和列号
    line: u32,
    column: u32,
    /// One diagnostic per `Error` token
    /// 每个 `Error` token 对应一条诊断
    diagnostics: Vec<Diagnostic>,
}

impl<'src> Lexer<'src> {
    /// Create a new lexer for the given source code.
    /// 为给定的源代码创建新的词法分析器。
    pub fn new(source: &'src str) -> Self {
        Self {
            source,
            chars: source.char_indices().peekable(),
            pos: 0,
            line: 1,
            column: 1,
            diagnostics: Vec::new(),
        }
    }

    /// Tokenize the entire source.
    /// 对整个源代码进行词法分析。
    #[tracing::instrument(level = "trace", skip_all)]
    pub fn tokenize(mut self) -> (Vec<Token>, Vec<Diagnostic>) {
        let mut tokens = Vec::new();

        loop {
            let token = self.next_token();
            trace!(kind = %token.kind, line = token.line, text = %token.text, "token");
            let is_eof = token.is_eof();
            tokens.push(token);
            if is_eof {
                break;
            }
        }

        (tokens, self.diagnostics)
    }

    /// Extract the next token.
    /// 提取下一个 token。
    pub fn next_token(&mut self) -> Token {
        self.skip_whitespace();

        let start = self.pos;
        let position = self.position();

        let Some(ch) = self.peek_char() else {
            return Token::new(
                TokenKind::EndOfFile,
                "",
                Span::from_usize(start, start),
                position,
            );
        };

        if ch == '{' {
            self.comment(start, position)
        } else if ch.is_alphabetic() {
            self.word(start, position)
        } else if ch.is_ascii_digit() {
            self.number(start, position)
        } else if ch == '\'' {
            self.string(start, position)
        } else {
            self.special_symbol(start, position)
        }
    }

    /// Advance to the next character, keeping line and column current.
    /// 前进到下一个字符，同时更新行号和列号。
    fn advance(&mut self) -> Option<char> {
        let (pos, ch) = self.chars.next()?;
        self.pos = pos + ch.len_utf8();
        if ch == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        Some(ch)
    }

    /// Peek at the next character without consuming it.
    /// 查看下一个字符但不消耗它。
    fn peek_char(&mut self) -> Option<char> {
        self.chars.peek().map(|(_, ch)| *ch)
    }

    /// Peek at the nth character ahead.
    /// 查看前方第 n 个字符。
    fn peek_nth(&self, n: usize) -> Option<char> {
        self.chars.clone().nth(n).map(|(_, ch)| ch)
    }

    fn position(&self) -> Position {
        Position::new(self.line, self.column)
    }

    fn skip_whitespace(&mut self) {
        while let Some(ch) = self.peek_char() {
            if ch.is_whitespace() {
                self.advance();
            } else {
                break;
            }
        }
    }

    fn slice(&self, start: usize) -> &'src str {
        &self.source[start..self.pos]
    }

    /// Extract a `{ ... }` comment. Every whitespace character inside it
    /// becomes a single blank in both the text and the value.
    /// 提取 `{ ... }` 注释，其中每个空白字符都替换为一个空格。
    fn comment(&mut self, start: usize, position: Position) -> Token {
        self.advance(); // consume {

        let mut text = String::new();
        loop {
            match self.advance() {
                Some('}') => {
                    let span = Span::from_usize(start, self.pos);
                    return Token::new(TokenKind::Comment, text.clone(), span, position)
                        .with_value(TokenValue::Text(text));
                }
                Some(ch) if ch.is_whitespace() => text.push(' '),
                Some(ch) => text.push(ch),
                None => {
                    let span = Span::from_usize(start, self.pos);
                    return self.error_token(text, span, position, ErrorCode::UnexpectedEof);
                }
            }
        }
    }

    /// Extract an identifier or reserved word: the longest run of letters,
    /// digits and underscores.
    /// 提取标识符或保留字：由字母、数字和下划线组成的最长序列。
    fn word(&mut self, start: usize, position: Position) -> Token {
        while let Some(ch) = self.peek_char() {
            if ch.is_alphanumeric() || ch == '_' {
                self.advance();
            } else {
                break;
            }
        }

        let text = self.slice(start);
        let kind = TokenKind::reserved_word(text).unwrap_or(TokenKind::Identifier);
        Token::new(kind, text, Span::from_usize(start, self.pos), position)
    }

    /// Extract an unsigned integer or real literal.
    /// 提取无符号整数或实数字面量。
    fn number(&mut self, start: usize, position: Position) -> Token {
        let mut is_real = false;
        self.digits();

        // Fraction part, only when a digit follows the dot so `END.` and
        // record selectors still lex as DOT.
        if self.peek_char() == Some('.') && self.peek_nth(1).is_some_and(|c| c.is_ascii_digit()) {
            self.advance();
            self.digits();
            is_real = true;
        }

        // Exponent part - 指数部分
        if let Some('e' | 'E') = self.peek_char() {
            self.advance();
            is_real = true;
            if let Some('+' | '-') = self.peek_char() {
                self.advance();
            }
            if !self.peek_char().is_some_and(|c| c.is_ascii_digit()) {
                let text = self.slice(start).to_owned();
                let span = Span::from_usize(start, self.pos);
                return self.error_token(text, span, position, ErrorCode::InvalidNumber);
            }
            self.digits();
        }

        let text = self.slice(start);
        let span = Span::from_usize(start, self.pos);

        if is_real {
            match text.parse::<f64>() {
                Ok(value) if value.is_finite() => {
                    Token::new(TokenKind::Real, text, span, position)
                        .with_value(TokenValue::Real(value))
                }
                _ => self.error_token(text.to_owned(), span, position, ErrorCode::RangeReal),
            }
        } else {
            match text.parse::<i64>() {
                Ok(value) => Token::new(TokenKind::Integer, text, span, position)
                    .with_value(TokenValue::Integer(value)),
                Err(_) => {
                    self.error_token(text.to_owned(), span, position, ErrorCode::RangeInteger)
                }
            }
        }
    }

    fn digits(&mut self) {
        while self.peek_char().is_some_and(|c| c.is_ascii_digit()) {
            self.advance();
        }
    }

    /// Extract a quoted string. `''` inside the quotes is one quote.
    /// 提取带引号的字符串，引号内的 `''` 表示一个引号。
    fn string(&mut self, start: usize, position: Position) -> Token {
        self.advance(); // consume opening '

        let mut value = String::new();
        loop {
            match self.advance() {
                Some('\'') => {
                    if self.peek_char() == Some('\'') {
                        self.advance();
                        value.push('\'');
                    } else {
                        break;
                    }
                }
                Some(ch) => value.push(ch),
                None => {
                    let text = self.slice(start).to_owned();
                    let span = Span::from_usize(start, self.pos);
                    return self.error_token(text, span, position, ErrorCode::UnexpectedEof);
                }
            }
        }

        let span = Span::from_usize(start, self.pos);
        Token::new(TokenKind::String, self.slice(start), span, position)
            .with_value(TokenValue::Text(value))
    }

    /// Extract a special symbol, preferring the two-character form.
    /// 提取特殊符号，优先匹配双字符形式。
    fn special_symbol(&mut self, start: usize, position: Position) -> Token {
        let first = self.advance().unwrap_or_default();

        if let Some(second) = self.peek_char() {
            let pair: String = [first, second].iter().collect();
            if let Some(kind) = TokenKind::special_symbol(&pair) {
                self.advance();
                return Token::new(kind, pair, Span::from_usize(start, self.pos), position);
            }
        }

        let text = self.slice(start);
        let span = Span::from_usize(start, self.pos);
        match TokenKind::special_symbol(text) {
            Some(kind) => Token::new(kind, text, span, position),
            None => self.error_token(text.to_owned(), span, position, ErrorCode::InvalidCharacter),
        }
    }

    /// Build an `Error` token and record its diagnostic.
    /// 构造 `Error` token 并记录对应的诊断。
    fn error_token(
        &mut self,
        text: String,
        span: Span,
        position: Position,
        code: ErrorCode,
    ) -> Token {
        self.diagnostics.push(
            Diagnostic::from_code(DiagnosticKind::Lexer, span, code)
                .with_position(position)
                .with_label(Label::new(span, code.description())),
        );
        Token::new(TokenKind::Error, text, span, position).with_value(TokenValue::Error(code))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lex(source: &str) -> Vec<Token> {
        Lexer::new(source).tokenize().0
    }

    #[test]
    fn test_comment_collapses_whitespace() {
        let tokens = lex("{ a\tb\nc }");
        assert_eq!(tokens[0].kind, TokenKind::Comment);
        assert_eq!(tokens[0].text, " a b c ");
        assert_eq!(tokens[0].value, Some(TokenValue::Text(" a b c ".to_string())));
        assert_eq!(tokens[1].kind, TokenKind::EndOfFile);
    }

    #[test]
    fn test_unterminated_comment_is_error_token() {
        let (tokens, diags) = Lexer::new("x { never closed").tokenize();
        assert_eq!(tokens[1].kind, TokenKind::Error);
        assert_eq!(tokens[1].error_code(), Some(ErrorCode::UnexpectedEof));
        assert_eq!(diags.len(), 1);
        assert_eq!(diags[0].code, Some(ErrorCode::UnexpectedEof));
    }

    #[test]
    fn test_word_keeps_identifier_case() {
        let tokens = lex("When MyVar_2");
        assert_eq!(tokens[0].kind, TokenKind::When);
        assert_eq!(tokens[0].text, "When");
        assert_eq!(tokens[1].kind, TokenKind::Identifier);
        assert_eq!(tokens[1].text, "MyVar_2");
    }

    #[test]
    fn test_positions() {
        let tokens = lex("x :=\n  1");
        assert_eq!((tokens[0].line, tokens[0].column), (1, 1));
        assert_eq!((tokens[1].line, tokens[1].column), (1, 3));
        assert_eq!((tokens[2].line, tokens[2].column), (2, 3));
    }
}
