//! Token definitions.
//! Token 定义。

use std::collections::HashMap;
use std::fmt;
use std::sync::LazyLock;

use pasc_common::{Position, Span};
use pasc_diagnostic::ErrorCode;

/// The kind of a token.
///
/// Variants are laid out in three contiguous bands: reserved words
/// (`And..=Loop`), special symbols (`Plus..=UpArrow`), then literal and
/// structural kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum TokenKind {
    // Reserved words
    And,
    Array,
    Begin,
    Case,
    Div,
    Do,
    Else,
    End,
    File,
    For,
    Function,
    If,
    In,
    Mod,
    Nil,
    Not,
    Of,
    Or,
    Packed,
    Procedure,
    Program,
    Repeat,
    Set,
    Then,
    To,
    Downto,
    Until,
    Var,
    While,
    With,
    When,
    LessThan0,
    Equal0,
    GreaterThan0,
    Loop,

    // Special symbols
    Plus,          // +
    Minus,         // -
    Star,          // *
    Slash,         // /
    ColonEquals,   // :=
    Dot,           // .
    Comma,         // ,
    Semicolon,     // ;
    Colon,         // :
    Quote,         // '
    Equals,        // =
    NotEquals,     // <>
    LessThan,      // <
    LessEquals,    // <=
    GreaterEquals, // >=
    GreaterThan,   // >
    LeftParen,     // (
    RightParen,    // )
    LeftBracket,   // [
    RightBracket,  // ]
    LeftBrace,     // {
    RightBrace,    // }
    UpArrow,       // ^

    // Literals and structure
    Identifier,
    Integer,
    Real,
    String,
    Comment,
    Error,
    EndOfFile,
}

impl TokenKind {
    pub const FIRST_RESERVED: TokenKind = TokenKind::And;
    pub const LAST_RESERVED: TokenKind = TokenKind::Loop;
    pub const FIRST_SPECIAL: TokenKind = TokenKind::Plus;
    pub const LAST_SPECIAL: TokenKind = TokenKind::UpArrow;

    /// Number of token kinds.
    pub const COUNT: usize = TokenKind::EndOfFile as usize + 1;

    /// Every kind in declaration order.
    pub const ALL: [TokenKind; TokenKind::COUNT] = {
        use TokenKind::*;
        [
            And, Array, Begin, Case, Div, Do, Else, End, File, For, Function, If, In, Mod, Nil,
            Not, Of, Or, Packed, Procedure, Program, Repeat, Set, Then, To, Downto, Until, Var,
            While, With, When, LessThan0, Equal0, GreaterThan0, Loop, Plus, Minus, Star, Slash,
            ColonEquals, Dot, Comma, Semicolon, Colon, Quote, Equals, NotEquals, LessThan,
            LessEquals, GreaterEquals, GreaterThan, LeftParen, RightParen, LeftBracket,
            RightBracket, LeftBrace, RightBrace, UpArrow, Identifier, Integer, Real, String,
            Comment, Error, EndOfFile,
        ]
    };

    pub const fn index(self) -> usize {
        self as usize
    }

    /// Returns true if this kind is in the reserved-word band.
    pub const fn is_reserved_word(self) -> bool {
        let i = self as u8;
        i >= Self::FIRST_RESERVED as u8 && i <= Self::LAST_RESERVED as u8
    }

    /// Returns true if this kind is in the special-symbol band.
    pub const fn is_special_symbol(self) -> bool {
        let i = self as u8;
        i >= Self::FIRST_SPECIAL as u8 && i <= Self::LAST_SPECIAL as u8
    }

    /// Upper-case name used in token listings and diagnostics.
    pub fn name(self) -> &'static str {
        match self {
            TokenKind::And => "AND",
            TokenKind::Array => "ARRAY",
            TokenKind::Begin => "BEGIN",
            TokenKind::Case => "CASE",
            TokenKind::Div => "DIV",
            TokenKind::Do => "DO",
            TokenKind::Else => "ELSE",
            TokenKind::End => "END",
            TokenKind::File => "FILE",
            TokenKind::For => "FOR",
            TokenKind::Function => "FUNCTION",
            TokenKind::If => "IF",
            TokenKind::In => "IN",
            TokenKind::Mod => "MOD",
            TokenKind::Nil => "NIL",
            TokenKind::Not => "NOT",
            TokenKind::Of => "OF",
            TokenKind::Or => "OR",
            TokenKind::Packed => "PACKED",
            TokenKind::Procedure => "PROCEDURE",
            TokenKind::Program => "PROGRAM",
            TokenKind::Repeat => "REPEAT",
            TokenKind::Set => "SET",
            TokenKind::Then => "THEN",
            TokenKind::To => "TO",
            TokenKind::Downto => "DOWNTO",
            TokenKind::Until => "UNTIL",
            TokenKind::Var => "VAR",
            TokenKind::While => "WHILE",
            TokenKind::With => "WITH",
            TokenKind::When => "WHEN",
            TokenKind::LessThan0 => "LESSTHAN0",
            TokenKind::Equal0 => "EQUAL0",
            TokenKind::GreaterThan0 => "GREATERTHAN0",
            TokenKind::Loop => "LOOP",
            TokenKind::Plus => "PLUS",
            TokenKind::Minus => "MINUS",
            TokenKind::Star => "STAR",
            TokenKind::Slash => "SLASH",
            TokenKind::ColonEquals => "COLON_EQUALS",
            TokenKind::Dot => "DOT",
            TokenKind::Comma => "COMMA",
            TokenKind::Semicolon => "SEMICOLON",
            TokenKind::Colon => "COLON",
            TokenKind::Quote => "QUOTE",
            TokenKind::Equals => "EQUALS",
            TokenKind::NotEquals => "NOT_EQUALS",
            TokenKind::LessThan => "LESS_THAN",
            TokenKind::LessEquals => "LESS_EQUALS",
            TokenKind::GreaterEquals => "GREATER_EQUALS",
            TokenKind::GreaterThan => "GREATER_THAN",
            TokenKind::LeftParen => "LEFT_PAREN",
            TokenKind::RightParen => "RIGHT_PAREN",
            TokenKind::LeftBracket => "LEFT_BRACKET",
            TokenKind::RightBracket => "RIGHT_BRACKET",
            TokenKind::LeftBrace => "LEFT_BRACE",
            TokenKind::RightBrace => "RIGHT_BRACE",
            TokenKind::UpArrow => "UP_ARROW",
            TokenKind::Identifier => "IDENTIFIER",
            TokenKind::Integer => "INTEGER",
            TokenKind::Real => "REAL",
            TokenKind::String => "STRING",
            TokenKind::Comment => "COMMENT",
            TokenKind::Error => "ERROR",
            TokenKind::EndOfFile => "END_OF_FILE",
        }
    }

    /// Canonical source text: the lower-case spelling of a reserved word,
    /// the symbol itself for special symbols, and `None` otherwise.
    pub fn text(self) -> Option<&'static str> {
        let text = match self {
            TokenKind::And => "and",
            TokenKind::Array => "array",
            TokenKind::Begin => "begin",
            TokenKind::Case => "case",
            TokenKind::Div => "div",
            TokenKind::Do => "do",
            TokenKind::Else => "else",
            TokenKind::End => "end",
            TokenKind::File => "file",
            TokenKind::For => "for",
            TokenKind::Function => "function",
            TokenKind::If => "if",
            TokenKind::In => "in",
            TokenKind::Mod => "mod",
            TokenKind::Nil => "nil",
            TokenKind::Not => "not",
            TokenKind::Of => "of",
            TokenKind::Or => "or",
            TokenKind::Packed => "packed",
            TokenKind::Procedure => "procedure",
            TokenKind::Program => "program",
            TokenKind::Repeat => "repeat",
            TokenKind::Set => "set",
            TokenKind::Then => "then",
            TokenKind::To => "to",
            TokenKind::Downto => "downto",
            TokenKind::Until => "until",
            TokenKind::Var => "var",
            TokenKind::While => "while",
            TokenKind::With => "with",
            TokenKind::When => "when",
            TokenKind::LessThan0 => "lessthan0",
            TokenKind::Equal0 => "equal0",
            TokenKind::GreaterThan0 => "greaterthan0",
            TokenKind::Loop => "loop",
            TokenKind::Plus => "+",
            TokenKind::Minus => "-",
            TokenKind::Star => "*",
            TokenKind::Slash => "/",
            TokenKind::ColonEquals => ":=",
            TokenKind::Dot => ".",
            TokenKind::Comma => ",",
            TokenKind::Semicolon => ";",
            TokenKind::Colon => ":",
            TokenKind::Quote => "'",
            TokenKind::Equals => "=",
            TokenKind::NotEquals => "<>",
            TokenKind::LessThan => "<",
            TokenKind::LessEquals => "<=",
            TokenKind::GreaterEquals => ">=",
            TokenKind::GreaterThan => ">",
            TokenKind::LeftParen => "(",
            TokenKind::RightParen => ")",
            TokenKind::LeftBracket => "[",
            TokenKind::RightBracket => "]",
            TokenKind::LeftBrace => "{",
            TokenKind::RightBrace => "}",
            TokenKind::UpArrow => "^",
            _ => return None,
        };
        Some(text)
    }

    /// Look up a reserved word, ignoring case.
    pub fn reserved_word(text: &str) -> Option<TokenKind> {
        RESERVED_WORDS.get(text.to_lowercase().as_str()).copied()
    }

    /// Look up a special symbol by its exact text.
    pub fn special_symbol(text: &str) -> Option<TokenKind> {
        SPECIAL_SYMBOLS.get(text).copied()
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Reserved word text (lower case) to kind. Built once, read-only.
/// 保留字文本（小写）到 token 类型的映射，只构建一次。
pub static RESERVED_WORDS: LazyLock<HashMap<&'static str, TokenKind>> = LazyLock::new(|| {
    TokenKind::ALL
        .iter()
        .filter(|kind| kind.is_reserved_word())
        .filter_map(|&kind| kind.text().map(|text| (text, kind)))
        .collect()
});

/// Special symbol text to kind. Built once, read-only.
/// 特殊符号文本到 token 类型的映射，只构建一次。
pub static SPECIAL_SYMBOLS: LazyLock<HashMap<&'static str, TokenKind>> = LazyLock::new(|| {
    TokenKind::ALL
        .iter()
        .filter(|kind| kind.is_special_symbol())
        .filter_map(|&kind| kind.text().map(|text| (text, kind)))
        .collect()
});

/// The literal value carried by some tokens.
#[derive(Debug, Clone, PartialEq)]
pub enum TokenValue {
    Integer(i64),
    Real(f64),
    /// String contents or comment text.
    Text(String),
    /// Why an `Error` token was produced.
    Error(ErrorCode),
}

/// A classified token. Immutable once produced.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    /// Source text as spelled. A comment's text excludes its braces.
    pub text: String,
    pub value: Option<TokenValue>,
    pub span: Span,
    pub line: u32,
    pub column: u32,
}

impl Token {
    pub fn new(kind: TokenKind, text: impl Into<String>, span: Span, position: Position) -> Self {
        Self {
            kind,
            text: text.into(),
            value: None,
            span,
            line: position.line,
            column: position.column,
        }
    }

    pub fn with_value(mut self, value: TokenValue) -> Self {
        self.value = Some(value);
        self
    }

    pub fn position(&self) -> Position {
        Position::new(self.line, self.column)
    }

    /// The error code of an `Error` token.
    pub fn error_code(&self) -> Option<ErrorCode> {
        match self.value {
            Some(TokenValue::Error(code)) => Some(code),
            _ => None,
        }
    }

    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::EndOfFile
    }
}
