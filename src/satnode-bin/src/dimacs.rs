//! Lenient DIMACS CNF reader.
//!
//! Ignores blank lines and comment lines (`c ...`); a `p cnf V N` header
//! declares the variable count; every other line is a space-separated run
//! of signed integers terminated by `0` (the terminator is stripped). A
//! line that fails to parse as all-integers is skipped rather than
//! aborting the read, per the parser's documented leniency.

use satnode::Lit;
use std::io::{self, Read};

#[cfg(feature = "logging")]
use log::warn;

/// A parsed CNF instance: the declared variable count and its clauses, each
/// already encoded with [`satnode`]'s `2*v` / `2*v + 1` literal scheme.
#[derive(Debug, Clone, Default)]
pub struct Cnf {
    pub num_vars: u32,
    pub clauses: Vec<Vec<Lit>>,
}

/// Encodes a signed DIMACS literal into the internal literal scheme.
fn encode(raw: i64) -> Lit {
    satnode::literal::encode(raw)
}

/// Parses DIMACS text already read into memory.
pub fn parse(content: &str) -> Cnf {
    let mut num_vars = 0u32;
    let mut clauses = Vec::new();

    for line in content.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('c') {
            continue;
        }
        if line.starts_with("p cnf") {
            if let Some(vars) = line.split_whitespace().nth(2) {
                num_vars = vars.parse().unwrap_or(num_vars);
            }
            continue;
        }

        let parsed: Result<Vec<i64>, _> =
            line.split_whitespace().map(str::parse::<i64>).collect();
        let mut raw_lits = match parsed {
            Ok(lits) => lits,
            Err(_) => {
                #[cfg(feature = "logging")]
                warn!("skipping malformed clause line: {line:?}");
                continue;
            }
        };
        if raw_lits.last() == Some(&0) {
            raw_lits.pop();
        }
        if !raw_lits.is_empty() {
            clauses.push(raw_lits.into_iter().map(encode).collect());
        }
    }

    Cnf { num_vars, clauses }
}

/// Reads a DIMACS file, transparently decompressing it first if its name
/// ends in `.gz`.
pub fn read_file(path: &std::path::Path) -> io::Result<Cnf> {
    let content = if path.extension().is_some_and(|ext| ext == "gz") {
        let file = std::fs::File::open(path)?;
        let mut decoder = flate2::read::GzDecoder::new(file);
        let mut content = String::new();
        decoder.read_to_string(&mut content)?;
        content
    } else {
        std::fs::read_to_string(path)?
    };
    Ok(parse(&content))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_header_and_clauses() {
        let cnf = parse("c a comment\np cnf 3 2\n1 2 0\n-1 3 0\n");
        assert_eq!(cnf.num_vars, 3);
        assert_eq!(cnf.clauses, vec![vec![2, 4], vec![3, 6]]);
    }

    #[test]
    fn blank_lines_and_comments_are_ignored() {
        let cnf = parse("\n c comment\n\np cnf 1 1\n1 0\n");
        assert_eq!(cnf.clauses, vec![vec![2]]);
    }

    #[test]
    fn malformed_clause_line_is_skipped() {
        let cnf = parse("p cnf 2 2\n1 oops 0\n2 0\n");
        assert_eq!(cnf.clauses, vec![vec![4]]);
    }

    #[test]
    fn trailing_zero_terminator_is_stripped() {
        let cnf = parse("p cnf 1 1\n-1 0\n");
        assert_eq!(cnf.clauses, vec![vec![3]]);
    }
}
