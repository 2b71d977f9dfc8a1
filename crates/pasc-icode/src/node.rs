//! Intermediate tree nodes.

use pasc_common::SymbolId;
use serde::Serialize;

/// The fixed vocabulary of node kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NodeKind {
    // Statements
    Compound,
    Assign,
    Loop,
    Test,
    Call,
    Parameters,
    If,
    NoOp,

    // Relational operators
    Eq,
    Ne,
    Lt,
    Le,
    Gt,
    Ge,
    Not,

    // Additive operators
    Add,
    Subtract,
    Or,
    Negate,

    // Multiplicative operators
    Multiply,
    IntegerDivide,
    FloatDivide,
    Mod,
    And,

    // Operands
    Variable,
    IntegerConstant,
    RealConstant,
    StringConstant,
}

impl NodeKind {
    pub fn name(self) -> &'static str {
        match self {
            NodeKind::Compound => "COMPOUND",
            NodeKind::Assign => "ASSIGN",
            NodeKind::Loop => "LOOP",
            NodeKind::Test => "TEST",
            NodeKind::Call => "CALL",
            NodeKind::Parameters => "PARAMETERS",
            NodeKind::If => "IF",
            NodeKind::NoOp => "NO_OP",
            NodeKind::Eq => "EQ",
            NodeKind::Ne => "NE",
            NodeKind::Lt => "LT",
            NodeKind::Le => "LE",
            NodeKind::Gt => "GT",
            NodeKind::Ge => "GE",
            NodeKind::Not => "NOT",
            NodeKind::Add => "ADD",
            NodeKind::Subtract => "SUBTRACT",
            NodeKind::Or => "OR",
            NodeKind::Negate => "NEGATE",
            NodeKind::Multiply => "MULTIPLY",
            NodeKind::IntegerDivide => "INTEGER_DIVIDE",
            NodeKind::FloatDivide => "FLOAT_DIVIDE",
            NodeKind::Mod => "MOD",
            NodeKind::And => "AND",
            NodeKind::Variable => "VARIABLE",
            NodeKind::IntegerConstant => "INTEGER_CONSTANT",
            NodeKind::RealConstant => "REAL_CONSTANT",
            NodeKind::StringConstant => "STRING_CONSTANT",
        }
    }
}

impl std::fmt::Display for NodeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A constant carried in a node's VALUE attribute.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Value {
    Integer(i64),
    Real(f64),
    String(String),
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::Integer(i) => write!(f, "{i}"),
            Value::Real(r) => write!(f, "{r}"),
            Value::String(s) => f.write_str(s),
        }
    }
}

/// The attributes a node may carry. The key set is fixed: LINE, ID, VALUE.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Attributes {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<SymbolId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<Value>,
}

/// A tree node. Owns its children in order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Node {
    pub kind: NodeKind,
    #[serde(flatten)]
    pub attrs: Attributes,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Node>,
}

impl Node {
    pub fn new(kind: NodeKind) -> Self {
        Self {
            kind,
            attrs: Attributes::default(),
            children: Vec::new(),
        }
    }

    /// A VARIABLE node bound to a symbol.
    pub fn variable(id: SymbolId) -> Self {
        let mut node = Node::new(NodeKind::Variable);
        node.attrs.id = Some(id);
        node
    }

    pub fn integer(value: i64) -> Self {
        Node::new(NodeKind::IntegerConstant).with_value(Value::Integer(value))
    }

    /// A binary operator node with both operands already attached.
    pub fn binary(kind: NodeKind, left: Node, right: Node) -> Self {
        Node::new(kind).with_child(left).with_child(right)
    }

    pub fn add_child(&mut self, child: Node) {
        self.children.push(child);
    }

    pub fn with_child(mut self, child: Node) -> Self {
        self.children.push(child);
        self
    }

    pub fn with_line(mut self, line: u32) -> Self {
        self.attrs.line = Some(line);
        self
    }

    pub fn with_value(mut self, value: Value) -> Self {
        self.attrs.value = Some(value);
        self
    }

    pub fn set_line(&mut self, line: u32) {
        self.attrs.line = Some(line);
    }

    pub fn set_id(&mut self, id: SymbolId) {
        self.attrs.id = Some(id);
    }

    pub fn line(&self) -> Option<u32> {
        self.attrs.line
    }

    pub fn id(&self) -> Option<SymbolId> {
        self.attrs.id
    }

    pub fn value(&self) -> Option<&Value> {
        self.attrs.value.as_ref()
    }

    pub fn child(&self, index: usize) -> Option<&Node> {
        self.children.get(index)
    }

    /// Kinds of the direct children, in order.
    pub fn child_kinds(&self) -> Vec<NodeKind> {
        self.children.iter().map(|c| c.kind).collect()
    }

    /// Pre-order traversal of this node and all descendants.
    pub fn walk(&self) -> Vec<&Node> {
        let mut out = Vec::new();
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            out.push(node);
            stack.extend(node.children.iter().rev());
        }
        out
    }

    /// Number of nodes of `kind` in this subtree, including `self`.
    pub fn count(&self, kind: NodeKind) -> usize {
        self.walk().iter().filter(|n| n.kind == kind).count()
    }
}
