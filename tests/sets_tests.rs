//! Integration tests for FIRST/FOLLOW computation through the `Analyzer`
//! facade, covering the ε-propagation and mutual-recursion scenarios.

use cfg_analyzer::Symbol;

fn new_analyzer_with(rules: &[&str]) -> cfg_analyzer::Analyzer {
    let mut a = cfg_analyzer::Analyzer::new();
    assert!(a.parse_all(rules));
    a
}

#[test]
fn epsilon_production_propagates_into_first_of_caller() {
    // S -> A b ; A -> a | ''
    let a = new_analyzer_with(&["S -> A b", "A -> a", "A -> ''"]);
    let first_s = a.first("S").unwrap();
    assert!(first_s.contains(&Symbol::Terminal("a".to_string())));
    assert!(first_s.contains(&Symbol::Terminal("b".to_string())));
    assert!(!first_s.contains(&Symbol::Epsilon));
}

#[test]
fn follow_of_nonterminal_before_epsilon_rhs_includes_its_own_follow() {
    // S -> A B ; A -> a ; B -> b | ''
    let a = new_analyzer_with(&["S -> A B", "A -> a", "B -> b", "B -> ''"]);
    let follow_a = a.follow("A").unwrap();
    assert!(follow_a.contains(&Symbol::Terminal("b".to_string())));
    assert!(follow_a.contains(&Symbol::EndMarker));
}

#[test]
fn indirectly_recursive_first_terminates_and_is_correct() {
    // A -> B c ; B -> A d | e
    let a = new_analyzer_with(&["A -> B c", "B -> A d", "B -> e"]);
    let first_a = a.first("A").unwrap();
    assert!(first_a.contains(&Symbol::Terminal("e".to_string())));
    let first_b = a.first("B").unwrap();
    assert!(first_b.contains(&Symbol::Terminal("e".to_string())));
}

#[test]
fn first_of_a_terminal_name_is_itself() {
    let a = new_analyzer_with(&["S -> a"]);
    assert_eq!(a.first("a").unwrap(), vec![Symbol::Terminal("a".to_string())]);
}

#[test]
fn follow_of_start_symbol_always_contains_end_marker() {
    let a = new_analyzer_with(&["S -> a S", "S -> b"]);
    assert!(a.follow("S").unwrap().contains(&Symbol::EndMarker));
}
