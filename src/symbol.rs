//! Symbol types and utilities for context-free grammars.
//!
//! This module defines the core [`Symbol`] type: terminals and nonterminals
//! carry an arbitrary name (any token matching `[A-Za-z_-]+`), plus the two
//! reserved symbols `ε` (the empty string, spelled `''` on the wire) and `$`
//! (the end-of-input marker).

use std::cmp::Ordering;
use std::fmt;

/// The textual spelling of epsilon in rule text and recognizer input.
pub const EPSILON_TOKEN: &str = "''";
/// The textual spelling of the end-of-input marker.
pub const END_MARKER_TOKEN: &str = "$";

/// Represents a symbol in a context-free grammar.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Symbol {
    /// A terminal symbol: appears only in right-hand sides.
    Terminal(String),
    /// A nonterminal symbol: the left-hand side of at least one production.
    Nonterminal(String),
    /// The empty string (ε), spelled `''` on the wire.
    Epsilon,
    /// The end-of-input marker ($), appended by the recognizer.
    EndMarker,
}

impl Symbol {
    /// Builds a symbol from a raw token, given knowledge of whether the name
    /// is already known to be a nonterminal.
    ///
    /// `''` and `$` always map to the reserved symbols regardless of
    /// `is_nonterminal`; any other token becomes a terminal or nonterminal
    /// per the caller's classification.
    pub fn from_token(token: &str, is_nonterminal: bool) -> Self {
        if token == EPSILON_TOKEN {
            Symbol::Epsilon
        } else if token == END_MARKER_TOKEN {
            Symbol::EndMarker
        } else if is_nonterminal {
            Symbol::Nonterminal(token.to_string())
        } else {
            Symbol::Terminal(token.to_string())
        }
    }

    /// Checks if this symbol is a terminal.
    #[inline]
    pub fn is_terminal(&self) -> bool {
        matches!(self, Symbol::Terminal(_))
    }

    /// Checks if this symbol is a nonterminal.
    #[inline]
    pub fn is_nonterminal(&self) -> bool {
        matches!(self, Symbol::Nonterminal(_))
    }

    /// Checks if this symbol is epsilon (ε).
    #[inline]
    pub fn is_epsilon(&self) -> bool {
        matches!(self, Symbol::Epsilon)
    }

    /// Checks if this symbol is the end marker ($).
    #[inline]
    pub fn is_end_marker(&self) -> bool {
        matches!(self, Symbol::EndMarker)
    }

    /// Returns the name of this symbol, if it has one (terminals and
    /// nonterminals only).
    pub fn name(&self) -> Option<&str> {
        match self {
            Symbol::Terminal(n) | Symbol::Nonterminal(n) => Some(n.as_str()),
            Symbol::Epsilon | Symbol::EndMarker => None,
        }
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Symbol::Terminal(n) | Symbol::Nonterminal(n) => write!(f, "{}", n),
            Symbol::Epsilon => write!(f, "{}", EPSILON_TOKEN),
            Symbol::EndMarker => write!(f, "{}", END_MARKER_TOKEN),
        }
    }
}

/// Custom ordering for symbols to ensure deterministic sorting of cached
/// FIRST/FOLLOW sets.
///
/// Order: Epsilon < Terminals < Nonterminals < EndMarker
impl Ord for Symbol {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Symbol::Epsilon, Symbol::Epsilon) => Ordering::Equal,
            (Symbol::Epsilon, _) => Ordering::Less,
            (_, Symbol::Epsilon) => Ordering::Greater,

            (Symbol::EndMarker, Symbol::EndMarker) => Ordering::Equal,
            (Symbol::EndMarker, _) => Ordering::Greater,
            (_, Symbol::EndMarker) => Ordering::Less,

            (Symbol::Terminal(a), Symbol::Terminal(b)) => a.cmp(b),
            (Symbol::Terminal(_), Symbol::Nonterminal(_)) => Ordering::Less,
            (Symbol::Nonterminal(_), Symbol::Terminal(_)) => Ordering::Greater,
            (Symbol::Nonterminal(a), Symbol::Nonterminal(b)) => a.cmp(b),
        }
    }
}

impl PartialOrd for Symbol {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Splits a whitespace-separated rhs/input string into raw tokens.
pub fn tokenize(s: &str) -> Vec<&str> {
    s.split_whitespace().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn epsilon_and_end_marker_are_reserved() {
        assert_eq!(Symbol::from_token(EPSILON_TOKEN, false), Symbol::Epsilon);
        assert_eq!(Symbol::from_token(END_MARKER_TOKEN, true), Symbol::EndMarker);
    }

    #[test]
    fn ordering_places_terminals_before_nonterminals() {
        let t = Symbol::Terminal("id".to_string());
        let n = Symbol::Nonterminal("Expr".to_string());
        assert!(t < n);
        assert!(Symbol::Epsilon < t);
        assert!(n < Symbol::EndMarker);
    }

    #[test]
    fn display_round_trips_names() {
        assert_eq!(Symbol::Terminal("+".to_string()).to_string(), "+");
        assert_eq!(Symbol::Nonterminal("E".to_string()).to_string(), "E");
        assert_eq!(Symbol::Epsilon.to_string(), EPSILON_TOKEN);
        assert_eq!(Symbol::EndMarker.to_string(), END_MARKER_TOKEN);
    }
}
