//! Common data structures for the pasc front end.
//! pasc 前端的公共数据结构。
//!
//! - `Span`, `BytePos`, `Position`: where a token or node came from
//! - `SymbolTable`, `SymbolId`: the local scope the parser enters names into

mod span;
mod symtab;

pub use span::{BytePos, Position, Span};
pub use symtab::{SymbolEntry, SymbolId, SymbolTable};
