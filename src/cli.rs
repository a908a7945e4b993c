//! Companion driver for the grammar analyzer.
//!
//! Out of the core's scope (spec §6): reads a rule count and that many rule
//! lines from standard input, prints a colorized FIRST/FOLLOW/LL(1)
//! summary, optionally writes an HTML parsing table, then reads a test
//! count and that many whitespace-separated input strings and reports
//! `yes`/`no` per line via the recognizer. No persisted state.

use crate::analyzer::Analyzer;
use crate::diagnostics::LogSink;
use crate::error::Result;
use crate::symbol::END_MARKER_TOKEN;
use colored::Colorize;
use std::fmt::Write as _;
use std::io::{self, BufRead};

/// Runs the companion driver to completion.
///
/// An optional first command-line argument names a destination file for
/// the HTML parsing table (written only if the grammar is LL(1)).
pub fn run() -> Result<()> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    let mut analyzer = Analyzer::new();
    analyzer.set_sink(LogSink);

    let rule_count = read_count(&mut lines, "rule count")?;
    let mut rule_lines = Vec::with_capacity(rule_count);
    for _ in 0..rule_count {
        rule_lines.push(next_line(&mut lines)?);
    }

    if !analyzer.parse_all(&rule_lines) {
        eprintln!(
            "{}",
            "warning: one or more rule lines were syntactically rejected".yellow()
        );
    }

    print_first_follow_summary(&analyzer);

    if !analyzer.is_ll1() {
        println!("LL(1)? {}", "NO".red().bold());
        return Ok(());
    }
    println!("LL(1)? {}", "YES".green().bold());

    if let Some(html_path) = std::env::args().nth(1) {
        std::fs::write(&html_path, render_html_table(&analyzer))?;
        println!("Wrote parsing table to {html_path}");
    }

    let test_count = read_count(&mut lines, "test count").unwrap_or(0);
    for _ in 0..test_count {
        let Some(line) = next_line_opt(&mut lines)? else {
            break;
        };
        match analyzer.recognize(line.trim()) {
            Ok(true) => println!("{}", "yes".green()),
            Ok(false) => println!("{}", "no".red()),
            Err(e) => eprintln!("{}", format!("error: {e}").red()),
        }
    }

    Ok(())
}

/// Prints one `NAME => FIRST = { ... }, FOLLOW = { ... }` line per
/// nonterminal, with set members highlighted.
fn print_first_follow_summary(analyzer: &Analyzer) {
    for name in analyzer.variables() {
        let first = analyzer.first(&name).unwrap_or_default();
        let follow = analyzer.follow(&name).unwrap_or_default();
        let first_str = first
            .iter()
            .map(|s| s.to_string().magenta().to_string())
            .collect::<Vec<_>>()
            .join(" ");
        let follow_str = follow
            .iter()
            .map(|s| s.to_string().magenta().to_string())
            .collect::<Vec<_>>()
            .join(" ");
        println!("{name} => FIRST = {{ {first_str} }}, FOLLOW = {{ {follow_str} }}");
    }
}

/// Renders the predictive parsing table as an HTML `<table>`: one column
/// per terminal (plus `$`), one row per nonterminal, each cell holding the
/// chosen production's textual form or nothing.
fn render_html_table(analyzer: &Analyzer) -> String {
    let mut out = String::new();
    let mut columns = analyzer.terminals();
    columns.push(END_MARKER_TOKEN.to_string());

    writeln!(out, "<table>").unwrap();
    writeln!(out, "\t<tr>").unwrap();
    writeln!(out, "\t\t<th>Nonterminal</th>").unwrap();
    for column in &columns {
        writeln!(out, "\t\t<th>{column}</th>").unwrap();
    }
    writeln!(out, "\t</tr>").unwrap();

    for name in analyzer.variables() {
        writeln!(out, "\t<tr>").unwrap();
        writeln!(out, "\t\t<td>{name}</td>").unwrap();
        for column in &columns {
            let cell = analyzer
                .production_for(&name, column)
                .ok()
                .flatten()
                .unwrap_or_default();
            writeln!(out, "\t\t<td>{cell}</td>").unwrap();
        }
        writeln!(out, "\t</tr>").unwrap();
    }
    writeln!(out, "</table>").unwrap();
    out
}

/// Reads one line and parses it as a non-negative count.
fn read_count<R: BufRead>(lines: &mut io::Lines<R>, what: &str) -> Result<usize> {
    let line = next_line(lines)?;
    line.trim()
        .parse::<usize>()
        .map_err(|_| io::Error::new(io::ErrorKind::InvalidData, format!("expected {what}")).into())
}

/// Reads one line, erroring at end of input.
fn next_line<R: BufRead>(lines: &mut io::Lines<R>) -> Result<String> {
    lines
        .next()
        .ok_or_else(|| io::Error::new(io::ErrorKind::UnexpectedEof, "expected more input"))?
        .map_err(Into::into)
}

/// Reads one line, returning `None` at end of input instead of erroring.
fn next_line_opt<R: BufRead>(lines: &mut io::Lines<R>) -> Result<Option<String>> {
    match lines.next() {
        Some(Ok(line)) => Ok(Some(line)),
        Some(Err(e)) => Err(e.into()),
        None => Ok(None),
    }
}
