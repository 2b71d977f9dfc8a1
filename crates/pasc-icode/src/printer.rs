//! Parse-tree listing.
//!
//! Renders a tree as indented XML-like markup, one element per node:
//!
//! ```text
//! <COMPOUND line="1">
//!     <ASSIGN line="1">
//!         <VARIABLE id="x" />
//!         <INTEGER_CONSTANT value="0" />
//!     </ASSIGN>
//! </COMPOUND>
//! ```

use crate::{Node, Value};
use pasc_common::SymbolTable;

/// Builds the listing for a tree.
pub struct TreePrinter<'a> {
    symbols: Option<&'a SymbolTable>,
    indent_width: usize,
    output: String,
    indent_level: usize,
}

impl<'a> TreePrinter<'a> {
    pub fn new() -> Self {
        Self {
            symbols: None,
            indent_width: 4,
            output: String::new(),
            indent_level: 0,
        }
    }

    /// Print ID attributes as symbol names instead of raw ids.
    pub fn with_symbols(mut self, symbols: &'a SymbolTable) -> Self {
        self.symbols = Some(symbols);
        self
    }

    pub fn indent_width(mut self, width: usize) -> Self {
        self.indent_width = width;
        self
    }

    /// Render `root` and return the listing.
    pub fn print(mut self, root: &Node) -> String {
        self.node(root);
        self.output
    }

    fn node(&mut self, node: &Node) {
        self.write_indent();
        self.output.push('<');
        self.output.push_str(node.kind.name());
        self.attributes(node);

        if node.children.is_empty() {
            self.output.push_str(" />\n");
            return;
        }

        self.output.push_str(">\n");
        self.indent_level += 1;
        for child in &node.children {
            self.node(child);
        }
        self.indent_level -= 1;

        self.write_indent();
        self.output.push_str("</");
        self.output.push_str(node.kind.name());
        self.output.push_str(">\n");
    }

    fn attributes(&mut self, node: &Node) {
        if let Some(line) = node.line() {
            self.attribute("line", &line.to_string());
        }
        if let Some(id) = node.id() {
            let name = match self.symbols {
                Some(symbols) => symbols.name(id).to_owned(),
                None => id.as_u32().to_string(),
            };
            self.attribute("id", &name);
        }
        if let Some(value) = node.value() {
            let text = match value {
                Value::String(s) => s.clone(),
                other => other.to_string(),
            };
            self.attribute("value", &text);
        }
    }

    fn attribute(&mut self, key: &str, value: &str) {
        self.output.push(' ');
        self.output.push_str(key);
        self.output.push_str("=\"");
        for ch in value.chars() {
            match ch {
                '"' => self.output.push_str("&quot;"),
                '<' => self.output.push_str("&lt;"),
                '>' => self.output.push_str("&gt;"),
                '&' => self.output.push_str("&amp;"),
                _ => self.output.push(ch),
            }
        }
        self.output.push('"');
    }

    fn write_indent(&mut self) {
        let width = self.indent_level * self.indent_width;
        self.output.extend(std::iter::repeat_n(' ', width));
    }
}

impl Default for TreePrinter<'_> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::NodeKind;

    #[test]
    fn test_print_nested() {
        let mut symbols = SymbolTable::new();
        let x = symbols.enter_local("x");
        let tree = Node::new(NodeKind::Compound).with_line(1).with_child(
            Node::new(NodeKind::Assign)
                .with_line(1)
                .with_child(Node::variable(x))
                .with_child(Node::integer(0)),
        );

        let out = TreePrinter::new().with_symbols(&symbols).print(&tree);
        let expected = "\
<COMPOUND line=\"1\">
    <ASSIGN line=\"1\">
        <VARIABLE id=\"x\" />
        <INTEGER_CONSTANT value=\"0\" />
    </ASSIGN>
</COMPOUND>
";
        assert_eq!(out, expected);
    }

    #[test]
    fn test_escapes_string_values() {
        let node = Node::new(NodeKind::StringConstant)
            .with_value(Value::String("a<b".to_string()));
        let out = TreePrinter::new().print(&node);
        assert_eq!(out, "<STRING_CONSTANT value=\"a&lt;b\" />\n");
    }
}
