//! Intermediate tree for the pasc front end.
//!
//! Statement parsers lower surface syntax into this small vocabulary of
//! nodes. Every subtree is an owned value; a node never has two parents.

mod node;
pub mod printer;

pub use node::{Attributes, Node, NodeKind, Value};
pub use printer::TreePrinter;
