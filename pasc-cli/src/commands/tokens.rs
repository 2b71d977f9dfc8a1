//! The `pasc tokens` command.
//! `pasc tokens` 命令。

use std::fs;

use pasc_diagnostic::emit;
use pasc_lexer::{Lexer, Token, TokenValue};

/// Print one line per token, then any lexical errors.
/// 每个 token 打印一行，然后打印词法错误。
pub fn run(file: &str) -> Result<(), String> {
    let source =
        fs::read_to_string(file).map_err(|e| format!("cannot read file '{}': {}", file, e))?;

    let (tokens, diagnostics) = Lexer::new(&source).tokenize();
    for token in &tokens {
        println!("{}", format_token(token));
    }

    for diag in &diagnostics {
        emit(&source, file, diag).map_err(|e| format!("cannot write diagnostics: {e}"))?;
    }

    if !diagnostics.is_empty() {
        return Err(format!("{} lexical error(s) found", diagnostics.len()));
    }
    Ok(())
}

/// `>>> KIND line=L, pos=C, text="T"` with the value on a second line.
fn format_token(token: &Token) -> String {
    let mut line = format!(
        ">>> {:<14} line={:03}, pos={:2}, text=\"{}\"",
        token.kind.name(),
        token.line,
        token.column,
        token.text
    );

    match &token.value {
        Some(TokenValue::Integer(v)) => line.push_str(&format!("\n>>>                 value={v}")),
        Some(TokenValue::Real(v)) => line.push_str(&format!("\n>>>                 value={v}")),
        Some(TokenValue::Text(s)) => line.push_str(&format!("\n>>>                 value=\"{s}\"")),
        Some(TokenValue::Error(code)) => {
            line.push_str(&format!("\n>>>                 error={}", code.description()))
        }
        None => {}
    }
    line
}
