//! Decision-variable heuristic.
//!
//! Picks the smallest unassigned variable by default; a one-shot
//! `forced_next` override lets tests pin the next decision without
//! reaching into the controller's private state.

use crate::literal::Var;
use std::collections::HashMap;

#[derive(Debug, Clone)]
pub struct HeuristicEngine {
    num_vars: Var,
    forced_next: Option<Var>,
}

impl HeuristicEngine {
    pub fn new(num_vars: Var) -> Self {
        HeuristicEngine {
            num_vars,
            forced_next: None,
        }
    }

    /// Installs a one-shot override consumed by the next [`predict`](Self::predict).
    pub fn set_next_decision(&mut self, var: Var) {
        self.forced_next = Some(var);
    }

    /// Returns the next decision variable, or `None` if every variable in
    /// `1..=num_vars` is already assigned.
    pub fn predict(&mut self, assigned: &HashMap<Var, bool>) -> Option<Var> {
        if let Some(forced) = self.forced_next.take() {
            return Some(forced);
        }
        (1..=self.num_vars).find(|v| !assigned.contains_key(v))
    }
}
