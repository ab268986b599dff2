//! Builds the core's `R x C` clause matrix from parsed DIMACS clauses.

use crate::dimacs::Cnf;
use satnode::Lit;

/// Right-pads every clause with `0` out to the width of the longest
/// clause. `satnode::Controller` itself also pads defensively, but building
/// the matrix explicitly here keeps the collaborator boundary honest: this
/// crate owns turning parsed clauses into the shape the core expects.
pub fn build_matrix(cnf: &Cnf) -> Vec<Vec<Lit>> {
    let width = cnf.clauses.iter().map(Vec::len).max().unwrap_or(0);
    cnf.clauses
        .iter()
        .map(|clause| {
            let mut row = clause.clone();
            row.resize(width, 0);
            row
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pads_rows_to_longest_clause() {
        let cnf = Cnf {
            num_vars: 3,
            clauses: vec![vec![2], vec![3, 4, 6]],
        };
        let matrix = build_matrix(&cnf);
        assert_eq!(matrix, vec![vec![2, 0, 0], vec![3, 4, 6]]);
    }

    #[test]
    fn empty_clause_list_yields_empty_matrix() {
        let cnf = Cnf {
            num_vars: 0,
            clauses: vec![],
        };
        assert!(build_matrix(&cnf).is_empty());
    }
}
