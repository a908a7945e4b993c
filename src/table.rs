//! LL(1) conflict test and predictive parsing table construction.

use crate::grammar::Grammar;
use crate::sets::{first_of_sequence, FirstMemo, FollowMemo};
use crate::symbol::Symbol;
use std::collections::HashMap;

/// A pairwise LL(1) violation, naming the offending nonterminal and the two
/// conflicting production indices (into [`Grammar::all_productions`]).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conflict {
    pub nonterminal: String,
    pub production_a: usize,
    pub production_b: usize,
}

/// The predictive table: `M[nonterminal, lookahead] -> production index`.
/// Indices are into the grammar's production list so entries are never
/// copied, only referenced.
pub type Table = HashMap<(Symbol, Symbol), usize>;

/// Checks whether two alternative productions of the same nonterminal `A`
/// (with FIRST sets `first_a`/`first_b` and `A`'s FOLLOW set `follow_a`)
/// satisfy the three LL(1) disjointness conditions.
fn pair_conflicts(
    first_a: &std::collections::HashSet<Symbol>,
    first_b: &std::collections::HashSet<Symbol>,
    follow_a: &std::collections::HashSet<Symbol>,
) -> bool {
    // Rule 1: FIRST(pi.rhs) ∩ FIRST(pj.rhs) = ∅. Note this also rejects the
    // case where both alternatives derive ε, since ε would then be a
    // shared member of both sets (rule 2).
    if !first_a.is_disjoint(first_b) {
        return true;
    }

    // Rule 3: if one alternative derives ε, the other's FIRST must be
    // disjoint from FOLLOW(A).
    let a_derives_epsilon = first_a.contains(&Symbol::Epsilon);
    let b_derives_epsilon = first_b.contains(&Symbol::Epsilon);
    if a_derives_epsilon && !first_b.is_disjoint(follow_a) {
        return true;
    }
    if b_derives_epsilon && !first_a.is_disjoint(follow_a) {
        return true;
    }

    false
}

/// Runs the LL(1) test over every nonterminal with two or more productions,
/// checking every pair. Returns the first violation found, if any — the
/// test is total (a single pass/fail suffices) but names an offending
/// nonterminal for diagnostics.
pub fn find_conflict(grammar: &Grammar, first_memo: &mut FirstMemo, follow_memo: &FollowMemo) -> Option<Conflict> {
    for name in grammar.nonterminal_names() {
        let indices = grammar.production_indices_of(name);
        if indices.len() < 2 {
            continue;
        }
        let empty = std::collections::HashSet::new();
        let follow_a = follow_memo
            .get(&Symbol::Nonterminal(name.clone()))
            .unwrap_or(&empty);

        let firsts: Vec<_> = indices
            .iter()
            .map(|&idx| first_of_sequence(grammar, first_memo, &grammar.all_productions()[idx].rhs))
            .collect();

        for i in 0..indices.len() {
            for j in (i + 1)..indices.len() {
                if pair_conflicts(&firsts[i], &firsts[j], follow_a) {
                    return Some(Conflict {
                        nonterminal: name.clone(),
                        production_a: indices[i],
                        production_b: indices[j],
                    });
                }
            }
        }
    }
    None
}

/// Builds the predictive parsing table, assuming the grammar has already
/// passed [`find_conflict`] (returns no violation). For each nonterminal
/// `A` and production `A -> alpha`: every terminal in FIRST(alpha) maps to
/// that production, and if ε ∈ FIRST(alpha), every terminal in FOLLOW(A)
/// does too. Earlier-inserted productions win ties (defensive only — a
/// well-formed LL(1) grammar has at most one candidate per cell).
pub fn build_table(grammar: &Grammar, first_memo: &mut FirstMemo, follow_memo: &FollowMemo) -> Table {
    let mut table = Table::new();

    for (idx, production) in grammar.all_productions().iter().enumerate() {
        let lhs = production.lhs.clone();
        let rhs_first = first_of_sequence(grammar, first_memo, &production.rhs);

        for symbol in &rhs_first {
            if symbol.is_epsilon() {
                continue;
            }
            table.entry((lhs.clone(), symbol.clone())).or_insert(idx);
        }

        if rhs_first.contains(&Symbol::Epsilon) {
            if let Some(follow_a) = follow_memo.get(&lhs) {
                for symbol in follow_a {
                    table.entry((lhs.clone(), symbol.clone())).or_insert(idx);
                }
            }
        }
    }

    table
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grammar::Grammar;
    use crate::sets::{compute_all_first, compute_all_follow};

    fn rule(g: &mut Grammar, lhs: &str, rhs: &[&str]) {
        let rhs: Vec<String> = rhs.iter().map(|s| s.to_string()).collect();
        g.add_production(lhs, &rhs);
    }

    #[test]
    fn arithmetic_grammar_is_ll1() {
        let mut g = Grammar::new();
        rule(&mut g, "E", &["T", "EPrime"]);
        rule(&mut g, "EPrime", &["+", "T", "EPrime"]);
        rule(&mut g, "EPrime", &["''"]);
        rule(&mut g, "T", &["F", "TPrime"]);
        rule(&mut g, "TPrime", &["*", "F", "TPrime"]);
        rule(&mut g, "TPrime", &["''"]);
        rule(&mut g, "F", &["(", "E", ")"]);
        rule(&mut g, "F", &["id"]);

        let mut first_memo = compute_all_first(&g);
        let follow_memo = compute_all_follow(&g, &mut first_memo);
        assert_eq!(find_conflict(&g, &mut first_memo, &follow_memo), None);
    }

    #[test]
    fn left_recursive_grammar_is_not_ll1() {
        let mut g = Grammar::new();
        rule(&mut g, "E", &["E", "+", "T"]);
        rule(&mut g, "E", &["T"]);
        rule(&mut g, "T", &["T", "*", "F"]);
        rule(&mut g, "T", &["F"]);
        rule(&mut g, "F", &["id"]);
        rule(&mut g, "F", &["(", "E", ")"]);

        let mut first_memo = compute_all_first(&g);
        let follow_memo = compute_all_follow(&g, &mut first_memo);
        let conflict = find_conflict(&g, &mut first_memo, &follow_memo);
        assert!(conflict.is_some());
        assert_eq!(conflict.unwrap().nonterminal, "E");
    }

    #[test]
    fn table_has_at_most_one_entry_per_cell() {
        let mut g = Grammar::new();
        rule(&mut g, "E", &["T", "EPrime"]);
        rule(&mut g, "EPrime", &["+", "T", "EPrime"]);
        rule(&mut g, "EPrime", &["''"]);
        rule(&mut g, "T", &["F"]);
        rule(&mut g, "F", &["id"]);

        let mut first_memo = compute_all_first(&g);
        let follow_memo = compute_all_follow(&g, &mut first_memo);
        assert!(find_conflict(&g, &mut first_memo, &follow_memo).is_none());
        let table = build_table(&g, &mut first_memo, &follow_memo);

        // M[EPrime, $] should select the epsilon production.
        let key = (
            Symbol::Nonterminal("EPrime".to_string()),
            Symbol::EndMarker,
        );
        let idx = *table.get(&key).unwrap();
        assert_eq!(g.all_productions()[idx].rhs, vec![Symbol::Epsilon]);
    }
}
