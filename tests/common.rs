//! Integration tests for pasc-common, pasc-diagnostic and pasc-icode crates.

use pasc_common::{BytePos, Position, Span, SymbolTable};
use pasc_diagnostic::{Diagnostic, DiagnosticKind, ErrorCode, Label, render};
use pasc_icode::{Node, NodeKind, TreePrinter, Value};

// ============================================================================
// Spans and Positions
// ============================================================================

#[test]
fn test_span_range() {
    let span = Span::from_usize(5, 15);
    assert_eq!(span.start, BytePos(5));
    assert_eq!(span.end, BytePos(15));
    assert_eq!(span.range(), 5..15);
}

#[test]
fn test_position_display() {
    assert_eq!(Position::new(12, 4).to_string(), "12:4");
    assert_eq!(Position::default(), Position::START);
}

// ============================================================================
// Symbol Table
// ============================================================================

#[test]
fn test_symbol_table_order() {
    let mut table = SymbolTable::new();
    let z = table.enter_local("zeta");
    let a = table.enter_local("alpha");
    assert!(table.lookup("beta").is_none());

    let in_order: Vec<_> = table.iter().map(|(id, _)| id).collect();
    assert_eq!(in_order, vec![z, a]);

    let sorted: Vec<_> = table
        .sorted_entries()
        .into_iter()
        .map(|(_, e)| e.name.as_str())
        .collect();
    assert_eq!(sorted, vec!["alpha", "zeta"]);
}

// ============================================================================
// Diagnostics
// ============================================================================

#[test]
fn test_error_codes_are_distinct() {
    let codes = [
        ErrorCode::MissingDo,
        ErrorCode::MissingLessThan0,
        ErrorCode::MissingEqual0,
        ErrorCode::MissingGreaterThan0,
    ];
    for (i, a) in codes.iter().enumerate() {
        for b in &codes[i + 1..] {
            assert_ne!(a.as_str(), b.as_str());
            assert_ne!(a.description(), b.description());
        }
    }
}

#[test]
fn test_fatal_codes() {
    assert!(ErrorCode::TooManyErrors.is_fatal());
    assert!(ErrorCode::IoError.is_fatal());
    assert!(!ErrorCode::MissingDo.is_fatal());
}

#[test]
fn test_render_names_the_missing_marker() {
    let source = "WHEN x LESSTHAN0 y := 1";
    let span = Span::from_usize(17, 18);
    let diag = Diagnostic::from_code(DiagnosticKind::Parser, span, ErrorCode::MissingEqual0)
        .with_label(Label::new(span, "found `y`"));
    let out = render(source, "when.pas", &diag).unwrap();
    assert!(out.contains("P0112"));
    assert!(out.contains("missing EQUAL0"));
    assert!(out.contains("found `y`"));
}

// ============================================================================
// Tree Printing
// ============================================================================

#[test]
fn test_printer_shows_names_or_ids() {
    let mut symbols = SymbolTable::new();
    let x = symbols.enter_local("x");
    let tree = Node::new(NodeKind::Assign)
        .with_line(2)
        .with_child(Node::variable(x))
        .with_child(Node::new(NodeKind::RealConstant).with_value(Value::Real(1.5)));

    let named = TreePrinter::new().with_symbols(&symbols).print(&tree);
    assert!(named.contains("<VARIABLE id=\"x\" />"));
    assert!(named.contains("<REAL_CONSTANT value=\"1.5\" />"));

    let raw = TreePrinter::new().indent_width(2).print(&tree);
    assert!(raw.contains("  <VARIABLE id=\"0\" />"));
}
