//! Lexical analysis for the pasc front end.
//! pasc 前端的词法分析模块。
//!
//! Converts source text into classified tokens. Comments are kept as
//! `Comment` tokens and unterminated constructs become `Error` tokens, so
//! the caller decides what to skip and what is fatal.
//! 注释保留为 `Comment` token，未终止的结构变为 `Error` token。

mod lexer;
mod token;

pub use lexer::Lexer;
pub use token::{RESERVED_WORDS, SPECIAL_SYMBOLS, Token, TokenKind, TokenValue};
