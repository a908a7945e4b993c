//! Unit tests for the grammar module: the symbol/production store and the
//! rule-line parser.

use cfg_analyzer::grammar::*;
use cfg_analyzer::Symbol;

#[test]
fn parses_multi_char_names() {
    let (lhs, rhs) = parse_rule_line("Expr -> Term ExprPrime").unwrap();
    assert_eq!(lhs, "Expr");
    assert_eq!(rhs, vec!["Term", "ExprPrime"]);
}

#[test]
fn rejects_lines_without_exact_arrow_spacing() {
    assert!(parse_rule_line("Expr->Term").is_none());
    assert!(parse_rule_line("Expr  ->  Term").is_none());
}

#[test]
fn rejects_numeric_or_empty_lhs() {
    assert!(parse_rule_line("E2 -> a").is_none());
    assert!(parse_rule_line(" -> a").is_none());
}

#[test]
fn store_tracks_terminals_and_nonterminals() {
    let mut g = Grammar::new();
    g.add_production("S", &["A".to_string(), "B".to_string()]);
    g.add_production("A", &["a".to_string()]);

    assert!(g.has_nonterminal("S"));
    assert!(g.has_nonterminal("A"));
    assert!(g.has_terminal("a"));
    // B has not been declared as an lhs yet, so it is still a terminal.
    assert!(g.has_terminal("B"));
    assert!(!g.has_nonterminal("B"));
}

#[test]
fn productions_of_preserves_insertion_order() {
    let mut g = Grammar::new();
    g.add_production("S", &["A".to_string(), "B".to_string()]);
    g.add_production("S", &["A".to_string(), "C".to_string()]);
    g.add_production("A", &["a".to_string()]);

    let s_prods = g.productions_of("S");
    assert_eq!(s_prods.len(), 2);
    assert_eq!(s_prods[0].rhs[1], Symbol::Terminal("B".to_string()));
    assert_eq!(s_prods[1].rhs[1], Symbol::Terminal("C".to_string()));
}

#[test]
fn start_symbol_is_lhs_of_first_production_inserted() {
    let mut g = Grammar::new();
    g.add_production("Goal", &["Expr".to_string()]);
    g.add_production("Expr", &["id".to_string()]);
    assert_eq!(g.start_symbol(), Some("Goal"));
}

#[test]
fn epsilon_production_has_singleton_epsilon_rhs() {
    let mut g = Grammar::new();
    g.add_production("S", &["''".to_string()]);
    assert_eq!(g.all_productions()[0].rhs, vec![Symbol::Epsilon]);
}

#[test]
fn to_rule_string_round_trips_modulo_space_collapse() {
    let mut g = Grammar::new();
    g.add_production("Expr", &["Term".to_string(), "ExprPrime".to_string()]);
    assert_eq!(
        g.all_productions()[0].to_rule_string(),
        "Expr -> Term ExprPrime"
    );
}

#[test]
fn clear_resets_to_empty_state() {
    let mut g = Grammar::new();
    g.add_production("S", &["a".to_string()]);
    g.clear();
    assert!(g.all_productions().is_empty());
    assert!(g.nonterminal_names().is_empty());
    assert!(g.terminal_names().is_empty());
    assert_eq!(g.start_symbol(), None);
}
