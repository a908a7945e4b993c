//! LL(1) Grammar Analyzer
//!
//! Reads a context-free grammar as a sequence of textual production rules
//! and reports its terminals/nonterminals, FIRST/FOLLOW sets, whether it is
//! LL(1), and (optionally) parses test strings with the predictive
//! recognizer.
//!
//! # References
//! Aho, Alfred V. et al. "Compilers: Principles, Techniques, and Tools"
//! (2nd Edition). Addison-Wesley, 2006.

use std::process;

fn main() {
    env_logger::init();

    if let Err(e) = cfg_analyzer::cli::run() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
