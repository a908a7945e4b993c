//! Stack-driven predictive recognizer.
//!
//! Given a predictive table and a whitespace-separated input string, drives
//! the classic LL(1) pushdown automaton: a stack seeded with `$` and the
//! start symbol, and a cursor into the token stream with `$` appended as
//! its final token.

use crate::error::{AnalyzerError, Result};
use crate::grammar::Grammar;
use crate::symbol::{tokenize, Symbol};
use crate::table::Table;

/// Recognizes `input` against `grammar`'s predictive `table`.
///
/// Returns `Ok(true)`/`Ok(false)` for acceptance/rejection, or `Err` if the
/// grammar has no productions — recognition never panics on malformed
/// input, only on a malformed grammar.
pub fn recognize(grammar: &Grammar, table: &Table, input: &str) -> Result<bool> {
    let start_name = grammar
        .start_symbol()
        .ok_or(AnalyzerError::EmptyGrammar)?
        .to_string();
    let start = Symbol::Nonterminal(start_name);

    let mut input_symbols: Vec<Symbol> = tokenize(input)
        .into_iter()
        .map(|tok| Symbol::Terminal(tok.to_string()))
        .collect();
    input_symbols.push(Symbol::EndMarker);

    let mut stack = vec![Symbol::EndMarker, start];
    let mut pos = 0usize;

    loop {
        let top = stack.last().expect("stack holds at least the end marker").clone();
        let current = &input_symbols[pos];

        if top == Symbol::EndMarker && current == &Symbol::EndMarker {
            return Ok(true);
        }

        if top.is_terminal() && &top == current {
            stack.pop();
            pos += 1;
            continue;
        }

        if top.is_nonterminal() {
            match table.get(&(top.clone(), current.clone())) {
                Some(&idx) => {
                    stack.pop();
                    let rhs = &grammar.all_productions()[idx].rhs;
                    if rhs.as_slice() != [Symbol::Epsilon] {
                        for symbol in rhs.iter().rev() {
                            stack.push(symbol.clone());
                        }
                    }
                }
                None => return Ok(false),
            }
            continue;
        }

        return Ok(false);
    }
}
