//! Diagnostic and error reporting for the pasc front end.
//!
//! Diagnostics are collected while lexing and parsing and rendered at the
//! end with ariadne.

mod codes;
mod diagnostic;

pub use codes::ErrorCode;
pub use diagnostic::{Diagnostic, DiagnosticKind, Label};

use std::io;

use ariadne::{ColorGenerator, Config, Label as AriadneLabel, Report, ReportKind, Source};

/// Render a diagnostic to stderr.
pub fn emit(source: &str, filename: &str, diagnostic: &Diagnostic) -> io::Result<()> {
    write_report(source, filename, diagnostic, true, io::stderr())
}

/// Render a diagnostic to a string without colors.
pub fn render(source: &str, filename: &str, diagnostic: &Diagnostic) -> io::Result<String> {
    let mut buf = Vec::new();
    write_report(source, filename, diagnostic, false, &mut buf)?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

fn write_report<W: io::Write>(
    source: &str,
    filename: &str,
    diagnostic: &Diagnostic,
    color: bool,
    out: W,
) -> io::Result<()> {
    let mut colors = ColorGenerator::new();
    let mut report = Report::build(ReportKind::Error, filename, diagnostic.span.start.0 as usize)
        .with_config(Config::default().with_color(color))
        .with_message(&diagnostic.message);

    if let Some(code) = &diagnostic.code {
        report = report.with_code(code.as_str());
    }

    for label in &diagnostic.labels {
        let ariadne_label = AriadneLabel::new((filename, label.span.range()))
            .with_message(&label.message)
            .with_color(colors.next());
        report = report.with_label(ariadne_label);
    }

    if let Some(help) = &diagnostic.help {
        report = report.with_help(help);
    }

    report
        .finish()
        .write((filename, Source::from(source)), out)
}
