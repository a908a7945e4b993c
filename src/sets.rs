//! FIRST and FOLLOW set computation for context-free grammars.
//!
//! Implements the algorithms from Aho et al., "Compilers: Principles,
//! Techniques, and Tools" (2nd Edition), section 4.4, as memoized recursion
//! rather than worklist fixed-point iteration: FIRST breaks direct left
//! recursion by skipping productions whose leftmost rhs symbol is the lhs
//! itself; FOLLOW breaks mutual recursion with an explicit per-call
//! recursion guard.

use crate::grammar::Grammar;
use crate::symbol::Symbol;
use std::collections::{HashMap, HashSet};

/// Memo table for FIRST, keyed by symbol.
pub type FirstMemo = HashMap<Symbol, HashSet<Symbol>>;
/// Memo table for FOLLOW, keyed by nonterminal symbol.
pub type FollowMemo = HashMap<Symbol, HashSet<Symbol>>;

/// Computes FIRST(X) for a single symbol, memoizing into `memo`.
///
/// Terminals and ε are their own FIRST set. For a nonterminal, the memo
/// entry is seeded with the empty set before recursing into its
/// productions, so that direct or indirect cycles through this symbol
/// return a partial (possibly incomplete) result instead of looping
/// forever; productions whose leftmost rhs symbol equals the lhs are
/// skipped outright, since visiting them contributes nothing beyond their
/// own suffix and would not terminate.
pub fn first_of_symbol(grammar: &Grammar, memo: &mut FirstMemo, symbol: &Symbol) -> HashSet<Symbol> {
    match symbol {
        Symbol::Terminal(_) => HashSet::from([symbol.clone()]),
        Symbol::Epsilon => HashSet::from([Symbol::Epsilon]),
        Symbol::EndMarker => HashSet::new(),
        Symbol::Nonterminal(name) => {
            if let Some(cached) = memo.get(symbol) {
                return cached.clone();
            }
            memo.insert(symbol.clone(), HashSet::new());

            let mut result = HashSet::new();
            for production in grammar.productions_of(name) {
                if production.rhs.first() == Some(symbol) {
                    continue;
                }
                result.extend(first_of_sequence(grammar, memo, &production.rhs));
            }

            memo.insert(symbol.clone(), result.clone());
            result
        }
    }
}

/// Computes FIRST of a sequence of symbols: left to right, including
/// FIRST(Yi) \ {ε} and stopping at the first Yi whose FIRST does not
/// contain ε; if every Yi admits ε (including the empty sequence), ε is
/// included in the result.
pub fn first_of_sequence(grammar: &Grammar, memo: &mut FirstMemo, symbols: &[Symbol]) -> HashSet<Symbol> {
    let mut result = HashSet::new();
    let mut all_epsilon = true;

    for symbol in symbols {
        let first_sym = first_of_symbol(grammar, memo, symbol);
        for sym in &first_sym {
            if !sym.is_epsilon() {
                result.insert(sym.clone());
            }
        }
        if !first_sym.contains(&Symbol::Epsilon) {
            all_epsilon = false;
            break;
        }
    }

    if all_epsilon {
        result.insert(Symbol::Epsilon);
    }

    result
}

/// A sequence "derives ε" iff every symbol's FIRST contains ε (ε itself
/// trivially derives ε). Used by the LL(1) test's rule 2.
pub fn derives_epsilon(grammar: &Grammar, memo: &mut FirstMemo, symbols: &[Symbol]) -> bool {
    first_of_sequence(grammar, memo, symbols).contains(&Symbol::Epsilon)
}

/// Computes FIRST(X) for every nonterminal in the grammar.
pub fn compute_all_first(grammar: &Grammar) -> FirstMemo {
    let mut memo = FirstMemo::new();
    for name in grammar.nonterminal_names() {
        first_of_symbol(grammar, &mut memo, &Symbol::Nonterminal(name.clone()));
    }
    memo
}

/// Computes FOLLOW(X) for a single nonterminal, memoizing into `memo`.
///
/// `guard` records the chain of nonterminals currently under computation
/// for this top-level call; re-entering a nonterminal already in the guard
/// contributes the empty set and lets the enclosing frame close the
/// fixed point through its other productions. The result is stripped of ε
/// (which never belongs in a FOLLOW set) before being cached.
///
/// A result is only memoized when it was computed as the *outermost* call
/// of its guard chain (`guard` empty on entry). A nested call (guard
/// already non-empty) may return a value that is incomplete — some
/// ancestor still mid-computation was cut off by the guard instead of
/// contributing its real FOLLOW set — so caching it would poison the
/// memo for that nonterminal's own later top-level turn in
/// [`compute_all_follow`], which would then hit the memo and never get a
/// chance to recompute the correct value.
pub fn follow_of_nonterminal(
    grammar: &Grammar,
    first_memo: &mut FirstMemo,
    memo: &mut FollowMemo,
    guard: &mut HashSet<Symbol>,
    name: &str,
) -> HashSet<Symbol> {
    let key = Symbol::Nonterminal(name.to_string());
    if let Some(cached) = memo.get(&key) {
        return cached.clone();
    }
    if guard.contains(&key) {
        return HashSet::new();
    }
    let is_outermost = guard.is_empty();
    guard.insert(key.clone());

    let mut result = HashSet::new();
    if grammar.start_symbol() == Some(name) {
        result.insert(Symbol::EndMarker);
    }

    for production in grammar.all_productions() {
        let lhs_name = match &production.lhs {
            Symbol::Nonterminal(n) => n.as_str(),
            _ => continue,
        };
        let rhs = &production.rhs;
        for (i, symbol) in rhs.iter().enumerate() {
            if symbol != &key {
                continue;
            }

            let beta = &rhs[i + 1..];
            let beta_first = first_of_sequence(grammar, first_memo, beta);
            for sym in &beta_first {
                if !sym.is_epsilon() {
                    result.insert(sym.clone());
                }
            }

            let beta_derives_epsilon = beta.is_empty() || beta_first.contains(&Symbol::Epsilon);
            if beta_derives_epsilon && lhs_name != name {
                let follow_lhs = follow_of_nonterminal(grammar, first_memo, memo, guard, lhs_name);
                result.extend(follow_lhs);
            }
        }
    }

    guard.remove(&key);
    result.remove(&Symbol::Epsilon);
    if is_outermost {
        memo.insert(key, result.clone());
    }
    result
}

/// Computes FOLLOW(X) for every nonterminal in the grammar. Each
/// nonterminal gets its own top-level call with a fresh guard, matching the
/// "cleared before each top-level `follow` call" discipline of the public
/// API.
pub fn compute_all_follow(grammar: &Grammar, first_memo: &mut FirstMemo) -> FollowMemo {
    let mut memo = FollowMemo::new();
    for name in grammar.nonterminal_names() {
        let mut guard = HashSet::new();
        follow_of_nonterminal(grammar, first_memo, &mut memo, &mut guard, name);
    }
    memo
}

/// Sorts and deduplicates a set into a deterministic `Vec` for external
/// reporting (FIRST/FOLLOW queries, diagnostics).
pub fn sorted(set: &HashSet<Symbol>) -> Vec<Symbol> {
    let mut v: Vec<Symbol> = set.iter().cloned().collect();
    v.sort();
    v
}
