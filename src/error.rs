//! Error types for the grammar analyzer.

use thiserror::Error;

/// Errors that can occur during grammar parsing and analysis.
#[derive(Error, Debug)]
pub enum AnalyzerError {
    /// A FIRST/FOLLOW query named a symbol that is neither a terminal nor a
    /// nonterminal of the current grammar.
    #[error("unknown symbol: {0}")]
    UnknownSymbol(String),

    /// `production_for`/`recognize` was called on a grammar that is not
    /// LL(1). `nonterminal` names an offending nonterminal when the caller
    /// asked for a diagnostic, and is `None` for a bare LL(1) check failure.
    #[error("grammar is not LL(1){}", .nonterminal.as_deref().map(|n| format!(" (conflict at {n})")).unwrap_or_default())]
    NotLl1 { nonterminal: Option<String> },

    /// `recognize` was called on an analyzer with no productions.
    #[error("grammar has no productions")]
    EmptyGrammar,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Type alias for Results in this crate.
pub type Result<T> = std::result::Result<T, AnalyzerError>;
