//! Grammar module for context-free grammars.
//!
//! This module provides the symbol/production store (the FIRST component of
//! the analyzer: ordered nonterminals, terminals, and productions) and the
//! rule-line parser that turns one textual production into store mutations.

use crate::symbol::{Symbol, EPSILON_TOKEN};
use std::fmt;

/// A production rule in a context-free grammar: `lhs -> rhs`.
///
/// `rhs` is a non-empty ordered sequence of symbols; `rhs == [Symbol::Epsilon]`
/// denotes an ε-production.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Production {
    /// Left-hand side (always a nonterminal).
    pub lhs: Symbol,
    /// Right-hand side (sequence of symbols).
    pub rhs: Vec<Symbol>,
}

impl Production {
    /// Creates a new production.
    pub fn new(lhs: Symbol, rhs: Vec<Symbol>) -> Self {
        Self { lhs, rhs }
    }

    /// Renders the production in the canonical wire format accepted by
    /// [`parse_rule_line`]: `LHS -> S1 S2 ... Sn`, with `''` for ε.
    pub fn to_rule_string(&self) -> String {
        let rhs = self
            .rhs
            .iter()
            .map(|s| s.to_string())
            .collect::<Vec<_>>()
            .join(" ");
        format!("{} -> {}", self.lhs, rhs)
    }
}

impl fmt::Display for Production {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rhs_str = if self.rhs == [Symbol::Epsilon] {
            "ε".to_string()
        } else {
            self.rhs
                .iter()
                .map(|s| s.to_string())
                .collect::<Vec<_>>()
                .join(" ")
        };
        write!(f, "{} → {}", self.lhs, rhs_str)
    }
}

/// The symbol and production store: holds the ordered set of nonterminals,
/// the set of terminals, and the ordered list of productions.
#[derive(Debug, Clone, Default)]
pub struct Grammar {
    nonterminal_order: Vec<String>,
    terminal_order: Vec<String>,
    productions: Vec<Production>,
    /// Maps a nonterminal name to the indices of its productions, in
    /// insertion order.
    production_indices: std::collections::HashMap<String, Vec<usize>>,
    start_symbol: Option<String>,
}

impl Grammar {
    /// Creates an empty grammar.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether `name` is a known nonterminal.
    pub fn has_nonterminal(&self, name: &str) -> bool {
        self.nonterminal_order.iter().any(|n| n == name)
    }

    /// Whether `name` is a known terminal.
    pub fn has_terminal(&self, name: &str) -> bool {
        self.terminal_order.iter().any(|n| n == name)
    }

    /// The nonterminals, in insertion order.
    pub fn nonterminal_names(&self) -> &[String] {
        &self.nonterminal_order
    }

    /// The terminals, in insertion order.
    pub fn terminal_names(&self) -> &[String] {
        &self.terminal_order
    }

    /// All productions, in insertion order.
    pub fn all_productions(&self) -> &[Production] {
        &self.productions
    }

    /// The productions whose lhs is `name`, in insertion order.
    pub fn productions_of(&self, name: &str) -> Vec<&Production> {
        self.production_indices
            .get(name)
            .map(|idxs| idxs.iter().map(|&i| &self.productions[i]).collect())
            .unwrap_or_default()
    }

    /// The indices (into [`Self::all_productions`]) of the productions
    /// whose lhs is `name`, in insertion order.
    pub fn production_indices_of(&self, name: &str) -> &[usize] {
        self.production_indices
            .get(name)
            .map(|v| v.as_slice())
            .unwrap_or(&[])
    }

    /// The start symbol: the lhs of the first production ever inserted.
    pub fn start_symbol(&self) -> Option<&str> {
        self.start_symbol.as_deref()
    }

    /// Resets to the empty state.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Adds one production, given an already-tokenized lhs name and rhs.
    ///
    /// Promotes `lhs` from the terminal set to the nonterminal set if it was
    /// previously seen only on a right-hand side, fixing up any earlier
    /// productions that reference it as a terminal. Inserts any new rhs
    /// tokens into the terminal set (ε is never inserted).
    pub fn add_production(&mut self, lhs: &str, rhs_tokens: &[String]) {
        self.promote_to_nonterminal(lhs);
        if self.start_symbol.is_none() {
            self.start_symbol = Some(lhs.to_string());
        }

        let is_epsilon_production = rhs_tokens.len() == 1 && rhs_tokens[0] == EPSILON_TOKEN;
        let rhs: Vec<Symbol> = if is_epsilon_production {
            vec![Symbol::Epsilon]
        } else {
            rhs_tokens
                .iter()
                .map(|tok| self.classify_rhs_token(tok))
                .collect()
        };

        let idx = self.productions.len();
        self.productions
            .push(Production::new(Symbol::Nonterminal(lhs.to_string()), rhs));
        self.production_indices
            .entry(lhs.to_string())
            .or_default()
            .push(idx);
    }

    /// Classifies a single rhs token against the store's current knowledge,
    /// inserting it into the terminal set if it is new.
    fn classify_rhs_token(&mut self, token: &str) -> Symbol {
        if token == EPSILON_TOKEN {
            return Symbol::Epsilon;
        }
        if self.has_nonterminal(token) {
            return Symbol::Nonterminal(token.to_string());
        }
        if !self.has_terminal(token) {
            self.terminal_order.push(token.to_string());
        }
        Symbol::Terminal(token.to_string())
    }

    /// Ensures `name` is a nonterminal, promoting it out of the terminal set
    /// (and fixing up prior productions) if necessary.
    fn promote_to_nonterminal(&mut self, name: &str) {
        if self.has_nonterminal(name) {
            return;
        }
        if let Some(pos) = self.terminal_order.iter().position(|n| n == name) {
            self.terminal_order.remove(pos);
            for production in &mut self.productions {
                for sym in &mut production.rhs {
                    if matches!(sym, Symbol::Terminal(n) if n == name) {
                        *sym = Symbol::Nonterminal(name.to_string());
                    }
                }
            }
        }
        self.nonterminal_order.push(name.to_string());
    }
}

impl fmt::Display for Grammar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for prod in &self.productions {
            writeln!(f, "{}", prod)?;
        }
        Ok(())
    }
}

/// Validates a nonterminal name: one or more of `[A-Za-z_-]`.
fn is_valid_name(name: &str) -> bool {
    !name.is_empty()
        && name
            .chars()
            .all(|c| c.is_ascii_alphabetic() || c == '_' || c == '-')
}

/// Parses one textual rule line into `(lhs, rhs_tokens)`.
///
/// # Format
/// `LHS -> S1 S2 ... Sn`, where `LHS` matches `[A-Za-z_-]+` and exactly one
/// space is required on either side of `->` to locate the separator. Returns
/// `None` if the line does not match, the lhs is malformed, or the rhs is
/// empty — the caller treats this as a syntax-rejected rule without
/// mutating the store.
pub fn parse_rule_line(line: &str) -> Option<(String, Vec<String>)> {
    const SEPARATOR: &str = " -> ";

    let trimmed = line.trim();
    let pos = trimmed.find(SEPARATOR)?;

    let lhs = &trimmed[..pos];
    if !is_valid_name(lhs) {
        return None;
    }

    let rhs_str = trimmed[pos + SEPARATOR.len()..].trim();
    if rhs_str.is_empty() {
        return None;
    }

    let tokens: Vec<String> = rhs_str.split_whitespace().map(str::to_string).collect();
    if tokens.is_empty() {
        return None;
    }

    Some((lhs.to_string(), tokens))
}
