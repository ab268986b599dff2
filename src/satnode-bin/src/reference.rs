//! A small, independent, non-cycle-accurate recursive DPLL solver used
//! purely as an oracle to cross-check [`satnode`]'s SAT/UNSAT verdict in
//! `run-tests`. This must never be imported by, and never influences, the
//! core crate — it exists only so the test runner has something independent
//! to compare against.

use std::collections::HashMap;

/// DIMACS-signed clauses (positive/negative `i64`, no trailing `0`).
pub type SignedClause = Vec<i64>;

pub fn solve(clauses: &[SignedClause]) -> bool {
    dpll(clauses, &HashMap::new())
}

fn dpll(clauses: &[SignedClause], assignment: &HashMap<i64, bool>) -> bool {
    let mut remaining = Vec::with_capacity(clauses.len());
    for clause in clauses {
        let mut satisfied = false;
        let mut reduced = Vec::new();
        for &lit in clause {
            match assignment.get(&lit.abs()) {
                Some(&val) if (lit > 0) == val => {
                    satisfied = true;
                    break;
                }
                Some(_) => {}
                None => reduced.push(lit),
            }
        }
        if satisfied {
            continue;
        }
        if reduced.is_empty() {
            return false; // empty clause: contradiction
        }
        remaining.push(reduced);
    }

    let Some(var) = remaining.first().and_then(|c| c.first()).map(|l| l.abs()) else {
        return true; // no clauses left: satisfied
    };

    for &val in &[true, false] {
        let mut next = assignment.clone();
        next.insert(var, val);
        if dpll(&remaining, &next) {
            return true;
        }
    }
    false
}
