//! Integration tests for pasc-parser crate: tree shapes.

use pasc_icode::{Node, NodeKind, Value};
use pasc_parser::{ParseOutput, parse, parse_statement};

fn root(output: &ParseOutput) -> &Node {
    output.tree.as_ref().expect("statement should parse")
}

fn kinds(node: &Node) -> Vec<NodeKind> {
    node.child_kinds()
}

// ============================================================================
// LOOP
// ============================================================================

#[test]
fn test_loop_lowering() {
    let output = parse_statement("LOOP(x := 0; x < 3; x := x + 1) DO y := x;");
    let tree = root(&output);
    assert!(!output.has_errors());

    assert_eq!(tree.kind, NodeKind::Compound);
    assert_eq!(kinds(&tree), vec![NodeKind::Assign, NodeKind::Loop]);

    let looping = tree.child(1).unwrap();
    assert_eq!(
        kinds(looping),
        vec![NodeKind::Test, NodeKind::Assign, NodeKind::Assign]
    );

    let test = looping.child(0).unwrap();
    assert_eq!(kinds(test), vec![NodeKind::Lt]);

    // The body assigns y, the update assigns x.
    let y = output.symbols.lookup("y").unwrap();
    let x = output.symbols.lookup("x").unwrap();
    assert_eq!(looping.child(1).unwrap().child(0).unwrap().id(), Some(y));
    assert_eq!(looping.child(2).unwrap().child(0).unwrap().id(), Some(x));
}

#[test]
fn test_loop_has_no_extra_nodes() {
    let output = parse_statement("LOOP(i := 0; i < 5; i := i + 1) DO s := s + i");
    let tree = root(&output);
    // COMPOUND, ASSIGN(i, 0), LOOP, TEST, LT(i, 5), ASSIGN(s, s + i), ASSIGN(i, i + 1)
    assert_eq!(tree.walk().len(), 1 + 3 + 1 + 1 + 3 + 5 + 5);
    assert_eq!(tree.count(NodeKind::Compound), 1);
    assert_eq!(tree.count(NodeKind::Loop), 1);
    assert_eq!(tree.count(NodeKind::Test), 1);
}

#[test]
fn test_loop_with_compound_body() {
    let output = parse_statement(
        "LOOP(i := 1; i <= 10; i := i + 1) DO BEGIN a := a + i; b := b * i END",
    );
    let tree = root(&output);
    assert!(!output.has_errors());
    let body = tree.child(1).unwrap().child(1).unwrap();
    assert_eq!(body.kind, NodeKind::Compound);
    assert_eq!(kinds(body), vec![NodeKind::Assign, NodeKind::Assign]);
}

// ============================================================================
// WHEN
// ============================================================================

#[test]
fn test_when_lowering() {
    let output = parse_statement(
        "WHEN a-b LESSTHAN0 writeln('neg') EQUAL0 writeln('zero') GREATERTHAN0 writeln('pos')",
    );
    let tree = root(&output);
    assert!(!output.has_errors());

    assert_eq!(kinds(&tree), vec![NodeKind::Assign, NodeKind::If]);

    let assign = tree.child(0).unwrap();
    assert_eq!(kinds(assign), vec![NodeKind::Variable, NodeKind::Subtract]);
    let temp = assign.child(0).unwrap().id().unwrap();
    assert!(output.symbols.name(temp).starts_with("$when_"));

    let if_lt = tree.child(1).unwrap();
    assert_eq!(
        kinds(if_lt),
        vec![NodeKind::Lt, NodeKind::Call, NodeKind::If]
    );
    let if_eq = if_lt.child(2).unwrap();
    assert_eq!(kinds(if_eq), vec![NodeKind::Eq, NodeKind::Call, NodeKind::Call]);

    for cond in [if_lt.child(0).unwrap(), if_eq.child(0).unwrap()] {
        assert_eq!(cond.child(0).unwrap().id(), Some(temp));
        assert_eq!(cond.child(1).unwrap().value(), Some(&Value::Integer(0)));
    }
}

#[test]
fn test_when_expression_appears_once() {
    let output = parse_statement(
        "WHEN (a + b) * 2 LESSTHAN0 y := 1; EQUAL0 y := 2; GREATERTHAN0 y := 3",
    );
    let tree = root(&output);
    let assigns_of_multiply = tree
        .walk()
        .into_iter()
        .filter(|n| n.kind == NodeKind::Assign)
        .filter(|n| n.child(1).is_some_and(|c| c.kind == NodeKind::Multiply))
        .count();
    assert_eq!(assigns_of_multiply, 1);
    assert_eq!(tree.count(NodeKind::Multiply), 1);
}

#[test]
fn test_when_temp_name_is_stable() {
    let source = "x := 1;\nWHEN x LESSTHAN0 y := 1 EQUAL0 y := 2 GREATERTHAN0 y := 3";
    let first = parse(source);
    let second = parse(source);
    assert!(first.symbols.lookup("$when_2").is_some());
    assert!(second.symbols.lookup("$when_2").is_some());
}

#[test]
fn test_when_eq_branch_takes_marker_line() {
    let output = parse_statement("WHEN n\nLESSTHAN0 a := 1\nEQUAL0 a := 2\nGREATERTHAN0 a := 3");
    let tree = root(&output);
    let if_lt = tree.child(1).unwrap();
    assert_eq!(if_lt.child(2).unwrap().line(), Some(3));
}

#[test]
fn test_nested_when() {
    let output = parse_statement(
        "WHEN a LESSTHAN0 WHEN b LESSTHAN0 c := 1 EQUAL0 c := 2 GREATERTHAN0 c := 3 \
         EQUAL0 c := 4 GREATERTHAN0 c := 5",
    );
    let tree = root(&output);
    assert!(!output.has_errors());
    assert_eq!(tree.count(NodeKind::If), 4);
}

// ============================================================================
// Other statements
// ============================================================================

#[test]
fn test_while_lowering() {
    let output = parse_statement("WHILE i < 10 DO i := i + 1");
    let tree = root(&output);
    assert!(!output.has_errors());
    assert_eq!(tree.kind, NodeKind::Loop);
    assert_eq!(kinds(&tree), vec![NodeKind::Test, NodeKind::Assign]);
}

#[test]
fn test_repeat_negates_until() {
    let output = parse_statement("REPEAT i := i + 1; j := i UNTIL i > 10");
    let tree = root(&output);
    assert!(!output.has_errors());
    assert_eq!(tree.kind, NodeKind::Loop);
    assert_eq!(
        kinds(&tree),
        vec![NodeKind::Assign, NodeKind::Assign, NodeKind::Test]
    );
    let test = tree.child(2).unwrap();
    assert_eq!(kinds(test), vec![NodeKind::Not]);
    assert_eq!(kinds(test.child(0).unwrap()), vec![NodeKind::Gt]);
}

#[test]
fn test_if_else() {
    let output = parse_statement("IF a = b THEN c := 1 ELSE c := 2");
    let tree = root(&output);
    assert!(!output.has_errors());
    assert_eq!(
        kinds(&tree),
        vec![NodeKind::Eq, NodeKind::Assign, NodeKind::Assign]
    );
}

#[test]
fn test_call_with_parameters() {
    let output = parse_statement("writeln('x = ', x + 1)");
    let tree = root(&output);
    assert!(!output.has_errors());
    assert_eq!(tree.kind, NodeKind::Call);
    assert_eq!(output.symbols.name(tree.id().unwrap()), "writeln");
    let params = tree.child(0).unwrap();
    assert_eq!(params.kind, NodeKind::Parameters);
    assert_eq!(kinds(params), vec![NodeKind::StringConstant, NodeKind::Add]);
}

#[test]
fn test_names_are_case_folded() {
    let output = parse_statement("Total := total + TOTAL");
    let tree = root(&output);
    assert!(!output.has_errors());
    assert_eq!(output.symbols.len(), 1);
    let id = output.symbols.lookup("total").unwrap();
    assert!(tree.walk().iter().filter_map(|n| n.id()).all(|i| i == id));
}

#[test]
fn test_empty_statements_are_no_ops() {
    let output = parse("BEGIN ; ; x := 1 END.");
    assert!(!output.has_errors());
    let tree = output.tree.unwrap();
    assert_eq!(
        kinds(&tree),
        vec![NodeKind::NoOp, NodeKind::NoOp, NodeKind::Assign]
    );
}

#[test]
fn test_bare_program_is_wrapped() {
    let output = parse("a := 1; b := 2; c := 3");
    assert!(!output.has_errors());
    let tree = output.tree.unwrap();
    assert_eq!(tree.kind, NodeKind::Compound);
    assert_eq!(tree.children.len(), 3);
}
