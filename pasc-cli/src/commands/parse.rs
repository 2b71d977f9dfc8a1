//! The `pasc parse` command.
//! `pasc parse` 命令。

use std::fs;

use pasc_common::SymbolTable;
use pasc_diagnostic::emit;
use pasc_icode::{Node, TreePrinter};
use pasc_parser::{ParserConfig, parse_with_config};
use serde::Serialize;

use crate::TreeFormat;
use crate::output;

/// JSON document: the tree plus the names its ID attributes refer to.
/// JSON 文档：语法树及其 ID 属性引用的名字。
#[derive(Serialize)]
struct JsonListing<'a> {
    tree: &'a Node,
    symbols: Vec<&'a str>,
}

/// Parse a file, print diagnostics, then print the tree.
/// 解析文件，打印诊断信息，然后打印语法树。
pub fn run(
    file: &str,
    format: TreeFormat,
    max_errors: usize,
    verbose: bool,
    quiet: bool,
) -> Result<(), String> {
    let source =
        fs::read_to_string(file).map_err(|e| format!("cannot read file '{}': {}", file, e))?;

    let config = ParserConfig::new().max_errors(max_errors);
    let parsed = parse_with_config(&source, &config);

    for diag in &parsed.diagnostics {
        emit(&source, file, diag).map_err(|e| format!("cannot write diagnostics: {e}"))?;
    }

    let tree = parsed
        .tree
        .as_ref()
        .map_err(|e| format!("[{}] {e}", e.code().as_str()))?;

    match format {
        TreeFormat::Xml => {
            let listing = TreePrinter::new().with_symbols(&parsed.symbols).print(tree);
            print!("{listing}");
        }
        TreeFormat::Json => println!("{}", to_json(tree, &parsed.symbols)?),
    }

    if verbose {
        print_cross_reference(&parsed.symbols);
    }

    let errors = parsed.error_count();
    if errors > 0 {
        return Err(format!("{errors} syntax error(s) found"));
    }

    if !quiet {
        output::info(&format!("{} name(s) in symbol table", parsed.symbols.len()));
        output::success("OK - No syntax errors");
    }
    Ok(())
}

/// Names in alphabetical order with the lines that mention them.
/// 按字母顺序列出名字及引用它们的行号。
fn print_cross_reference(symbols: &SymbolTable) {
    output::info("cross-reference:");
    for (_, entry) in symbols.sorted_entries() {
        let lines: Vec<String> = entry.lines.iter().map(|l| format!("{l:03}")).collect();
        eprintln!("    {:<16} {}", entry.name, lines.join(" "));
    }
}

fn to_json(tree: &Node, symbols: &SymbolTable) -> Result<String, String> {
    let names = symbols.iter().map(|(_, entry)| entry.name.as_str()).collect();
    let listing = JsonListing {
        tree,
        symbols: names,
    };
    serde_json::to_string_pretty(&listing).map_err(|e| e.to_string())
}
