//! Diagnostic sink for the analyzer.
//!
//! The core never writes to process-global output on its own behalf; it
//! only forwards non-fatal diagnostics (e.g. which nonterminal an LL(1)
//! conflict was found at) to a caller-supplied sink. Callers may ignore,
//! log, or propagate these at their discretion.

/// Receives diagnostic messages emitted during grammar analysis.
pub trait DiagnosticSink {
    /// Informational progress, e.g. "recomputed FIRST/FOLLOW for 6 nonterminals".
    fn info(&self, message: &str);
    /// A non-fatal anomaly, e.g. an LL(1) conflict naming the nonterminal.
    fn warn(&self, message: &str);
}

/// A sink that forwards diagnostics to the `log` facade, so a consuming
/// binary's logger configuration (e.g. `env_logger`) decides what is shown.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogSink;

impl DiagnosticSink for LogSink {
    fn info(&self, message: &str) {
        log::debug!("{message}");
    }

    fn warn(&self, message: &str) {
        log::warn!("{message}");
    }
}

/// A sink that discards every message; the default when no sink is set.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl DiagnosticSink for NullSink {
    fn info(&self, _message: &str) {}
    fn warn(&self, _message: &str) {}
}
