//! Integration tests for the LL(1) conflict test and predictive table
//! construction, exercised through the `Analyzer` facade.

use cfg_analyzer::Analyzer;

#[test]
fn grammar_with_common_prefix_is_not_ll1() {
    // S -> a b | a c  (FIRST/FIRST conflict on 'a')
    let mut a = Analyzer::new();
    a.parse_all(&["S -> a b", "S -> a c"]);
    assert!(!a.is_ll1());
}

#[test]
fn epsilon_alternative_conflicting_with_follow_is_rejected() {
    // S -> A b ; A -> b | ''  (FOLLOW(A) contains 'b', clashing with FIRST(b))
    let mut a = Analyzer::new();
    a.parse_all(&["S -> A b", "A -> b", "A -> ''"]);
    assert!(!a.is_ll1());
}

#[test]
fn disjoint_alternatives_with_one_epsilon_branch_are_ll1() {
    // S -> A b ; A -> a | ''  (FOLLOW(A) = {b}, FIRST(a) = {a}: disjoint)
    let mut a = Analyzer::new();
    a.parse_all(&["S -> A b", "A -> a", "A -> ''"]);
    assert!(a.is_ll1());
}

#[test]
fn production_for_names_the_chosen_rule_text() {
    let mut a = Analyzer::new();
    a.parse_all(&["S -> A b", "A -> a", "A -> ''"]);
    assert_eq!(
        a.production_for("A", "a").unwrap(),
        Some("A -> a".to_string())
    );
    assert_eq!(
        a.production_for("A", "b").unwrap(),
        Some("A -> ''".to_string())
    );
    assert_eq!(a.production_for("A", "z").unwrap(), None);
}

#[test]
fn production_for_errors_when_grammar_is_not_ll1() {
    let mut a = Analyzer::new();
    a.parse_all(&["S -> a b", "S -> a c"]);
    assert!(a.production_for("S", "a").is_err());
}
