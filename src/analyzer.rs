//! The `Analyzer` facade: the single entry point over the symbol/production
//! store, the FIRST/FOLLOW engine, the LL(1) table builder, and the stack
//! recognizer.
//!
//! All mutation goes through [`Analyzer::parse`], [`Analyzer::parse_all`],
//! or [`Analyzer::clear`]; each bumps the epoch and re-runs the update
//! orchestrator (4.C/§3 "Lifecycle") so that every other query always
//! observes analysis consistent with the current grammar.

use crate::diagnostics::{DiagnosticSink, NullSink};
use crate::error::{AnalyzerError, Result};
use crate::grammar::{parse_rule_line, Grammar};
use crate::sets::{self, compute_all_first, compute_all_follow};
use crate::symbol::{Symbol, END_MARKER_TOKEN};
use crate::table::{self, Table};
use std::collections::HashMap;

/// Cached FIRST/FOLLOW/parsing-row state for one nonterminal, tagged with
/// the epoch at which it was computed.
#[derive(Debug, Clone)]
struct NonterminalRecord {
    first: Vec<Symbol>,
    follow: Vec<Symbol>,
    /// Lookahead symbol -> index into the analyzer's production list.
    row: HashMap<Symbol, usize>,
    first_ver: u64,
    follow_ver: u64,
}

/// Facade over a context-free grammar under LL(1) analysis.
pub struct Analyzer {
    grammar: Grammar,
    records: HashMap<String, NonterminalRecord>,
    epoch: u64,
    is_ll1: bool,
    table: Option<Table>,
    sink: Box<dyn DiagnosticSink>,
}

impl Analyzer {
    /// Creates an empty analyzer with no diagnostic sink.
    pub fn new() -> Self {
        Self {
            grammar: Grammar::new(),
            records: HashMap::new(),
            epoch: 0,
            is_ll1: true, // vacuously LL(1): no nonterminal has a conflicting pair.
            table: None,
            sink: Box::new(NullSink),
        }
    }

    /// Replaces the diagnostic sink.
    pub fn set_sink(&mut self, sink: impl DiagnosticSink + 'static) {
        self.sink = Box::new(sink);
    }

    /// The current epoch: bumped on every structural change.
    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    /// Adds one production from its textual rule form. Returns `false`
    /// without mutating the grammar if the line is syntactically invalid.
    pub fn parse(&mut self, rule: &str) -> bool {
        match parse_rule_line(rule) {
            Some((lhs, rhs)) => {
                self.grammar.add_production(&lhs, &rhs);
                self.refresh();
                true
            }
            None => false,
        }
    }

    /// Adds many productions, deferring the update pass until the whole
    /// batch is parsed. Returns the conjunction of per-rule validity; the
    /// epoch is bumped once, not once per rule.
    pub fn parse_all<S: AsRef<str>>(&mut self, rules: &[S]) -> bool {
        let mut all_valid = true;
        let mut added_any = false;
        for rule in rules {
            match parse_rule_line(rule.as_ref()) {
                Some((lhs, rhs)) => {
                    self.grammar.add_production(&lhs, &rhs);
                    added_any = true;
                }
                None => all_valid = false,
            }
        }
        if added_any {
            self.refresh();
        }
        all_valid
    }

    /// Removes all grammar state and bumps the epoch.
    pub fn clear(&mut self) {
        self.grammar.clear();
        self.records.clear();
        self.table = None;
        self.is_ll1 = true;
        self.epoch += 1;
    }

    /// The nonterminals, in insertion order.
    pub fn variables(&self) -> Vec<String> {
        self.grammar.nonterminal_names().to_vec()
    }

    /// The terminals, in insertion order.
    pub fn terminals(&self) -> Vec<String> {
        self.grammar.terminal_names().to_vec()
    }

    /// FIRST(name), sorted for deterministic output.
    ///
    /// `name` may be a terminal (FIRST(t) = {t}) or a nonterminal (the
    /// cached, epoch-tagged set). Returns [`AnalyzerError::UnknownSymbol`]
    /// for any other name.
    pub fn first(&self, name: &str) -> Result<Vec<Symbol>> {
        if let Some(record) = self.records.get(name) {
            debug_assert_eq!(record.first_ver, self.epoch);
            return Ok(record.first.clone());
        }
        if self.grammar.has_terminal(name) {
            return Ok(vec![Symbol::Terminal(name.to_string())]);
        }
        Err(AnalyzerError::UnknownSymbol(name.to_string()))
    }

    /// FOLLOW(name), sorted for deterministic output. Only nonterminals
    /// have a FOLLOW set.
    pub fn follow(&self, name: &str) -> Result<Vec<Symbol>> {
        let record = self
            .records
            .get(name)
            .ok_or_else(|| AnalyzerError::UnknownSymbol(name.to_string()))?;
        debug_assert_eq!(record.follow_ver, self.epoch);
        Ok(record.follow.clone())
    }

    /// Whether the grammar is currently LL(1). An empty grammar is
    /// vacuously LL(1).
    pub fn is_ll1(&self) -> bool {
        self.is_ll1
    }

    /// The textual production chosen for `M[nonterminal, terminal]`, or
    /// `Ok(None)` if that cell is empty. `terminal` may be `"$"` for the
    /// end marker. Errors if the grammar is not LL(1) or `nonterminal` is
    /// unknown.
    pub fn production_for(&self, nonterminal: &str, terminal: &str) -> Result<Option<String>> {
        if !self.is_ll1 {
            return Err(AnalyzerError::NotLl1 { nonterminal: None });
        }
        let record = self
            .records
            .get(nonterminal)
            .ok_or_else(|| AnalyzerError::UnknownSymbol(nonterminal.to_string()))?;
        let lookahead = if terminal == END_MARKER_TOKEN {
            Symbol::EndMarker
        } else {
            Symbol::Terminal(terminal.to_string())
        };
        Ok(record
            .row
            .get(&lookahead)
            .map(|&idx| self.grammar.all_productions()[idx].to_rule_string()))
    }

    /// Drives the stack recognizer over `input`. Errors if the grammar has
    /// no productions or is not LL(1); otherwise returns acceptance.
    pub fn recognize(&self, input: &str) -> Result<bool> {
        if self.grammar.all_productions().is_empty() {
            return Err(AnalyzerError::EmptyGrammar);
        }
        if !self.is_ll1 {
            return Err(AnalyzerError::NotLl1 { nonterminal: None });
        }
        let table = self
            .table
            .as_ref()
            .expect("an LL(1) grammar always has a table after refresh");
        crate::recognize::recognize(&self.grammar, table, input)
    }

    /// The update orchestrator (4.C): bumps the epoch, re-tests LL(1),
    /// refreshes every nonterminal's FIRST/FOLLOW, and rebuilds the
    /// predictive table if the grammar is LL(1).
    fn refresh(&mut self) {
        self.epoch += 1;

        let mut first_memo = compute_all_first(&self.grammar);
        let follow_memo = compute_all_follow(&self.grammar, &mut first_memo);

        let conflict = table::find_conflict(&self.grammar, &mut first_memo, &follow_memo);
        self.is_ll1 = conflict.is_none();
        if let Some(c) = &conflict {
            self.sink
                .warn(&format!("LL(1) conflict at nonterminal {}", c.nonterminal));
        }

        self.records.clear();
        for name in self.grammar.nonterminal_names() {
            let key = Symbol::Nonterminal(name.clone());
            let first = first_memo.get(&key).map(sets::sorted).unwrap_or_default();
            let follow = follow_memo.get(&key).map(sets::sorted).unwrap_or_default();
            self.records.insert(
                name.clone(),
                NonterminalRecord {
                    first,
                    follow,
                    row: HashMap::new(),
                    first_ver: self.epoch,
                    follow_ver: self.epoch,
                },
            );
        }

        if self.is_ll1 {
            let table = table::build_table(&self.grammar, &mut first_memo, &follow_memo);
            for (&(ref nonterminal, ref lookahead), &idx) in &table {
                if let Symbol::Nonterminal(name) = nonterminal {
                    if let Some(record) = self.records.get_mut(name) {
                        record.row.insert(lookahead.clone(), idx);
                    }
                }
            }
            self.table = Some(table);
        } else {
            self.table = None;
        }

        self.sink
            .info(&format!("refreshed analysis at epoch {}", self.epoch));
    }
}

impl Default for Analyzer {
    fn default() -> Self {
        Self::new()
    }
}
