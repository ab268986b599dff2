//! Top-level controller: the sequential FSM that owns every piece of
//! mutable state and drives the combinational datapath blocks one clause
//! row per cycle.

use crate::datapath::{compare, detect, evaluate, update};
use crate::heuristic::HeuristicEngine;
use crate::literal::{falsifying_assignment, negate, Lit, Var};
use crate::memory::{DynamicMemory, StaticMemory};
use crate::queue::PropagationQueue;
use crate::trail::Trail;
use std::collections::HashMap;

#[cfg(feature = "logging")]
use log::trace;

/// Controller state. `Sat` and `Unsat` are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    Idle,
    Decide,
    Propagate,
    Backtrack,
    Sat,
    Unsat,
}

impl State {
    pub fn is_terminal(self) -> bool {
        matches!(self, State::Sat | State::Unsat)
    }
}

/// Tunable knobs threaded through construction rather than hardcoded, so
/// tests and the CLI can override them (e.g. a small cap on a fixture that
/// is meant to time out).
#[derive(Debug, Clone, Copy)]
pub struct SolverConfig {
    pub max_cycles: u64,
}

impl Default for SolverConfig {
    fn default() -> Self {
        SolverConfig { max_cycles: 5000 }
    }
}

/// What happened on the most recently completed `step()` call, mirroring
/// the instrumentation the reference model exposes per cycle (useful for
/// tests and for anyone building a cycle-by-cycle trace on top of this).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StepOutcome {
    pub state: Option<State>,
    pub decision_var: Option<Var>,
    pub conflict_row: Option<usize>,
    pub bcp_conflict_var: Option<Var>,
    pub row: Option<usize>,
    pub lit: Option<Lit>,
}

impl StepOutcome {
    fn of(state: State) -> Self {
        StepOutcome {
            state: Some(state),
            ..Default::default()
        }
    }
}

/// The cycle-accurate SAT-solver node.
pub struct Controller {
    static_memory: StaticMemory,
    dynamic_memory: DynamicMemory,
    heuristic: HeuristicEngine,
    trail: Trail,
    queue: PropagationQueue,
    state: State,
    current_prop_literal: Option<Lit>,
    cycle_count: u64,
    config: SolverConfig,
}

impl Controller {
    pub fn new(clause_matrix: Vec<Vec<Lit>>, num_vars: Var, config: SolverConfig) -> Self {
        let num_rows = clause_matrix.len();
        let num_cols = clause_matrix.iter().map(Vec::len).max().unwrap_or(0);
        let static_memory = StaticMemory::new(clause_matrix);
        Controller {
            dynamic_memory: DynamicMemory::new(num_rows, num_cols),
            static_memory,
            heuristic: HeuristicEngine::new(num_vars),
            trail: Trail::new(),
            queue: PropagationQueue::new(),
            state: State::Idle,
            current_prop_literal: None,
            cycle_count: 0,
            config,
        }
    }

    pub fn state(&self) -> State {
        self.state
    }

    pub fn cycle_count(&self) -> u64 {
        self.cycle_count
    }

    pub fn assignment(&self) -> &HashMap<Var, bool> {
        self.trail.assignment()
    }

    /// Installs a one-shot forced next decision on the heuristic engine,
    /// for deterministic tests.
    pub fn set_next_decision(&mut self, var: Var) {
        self.heuristic.set_next_decision(var);
    }

    /// Runs exactly one cycle of the state machine.
    pub fn step(&mut self) -> StepOutcome {
        self.cycle_count += 1;

        match self.state {
            State::Idle => {
                self.state = State::Decide;
                StepOutcome::of(self.state)
            }
            State::Decide => self.decide(),
            State::Propagate => self.propagate(),
            State::Backtrack => self.backtrack(),
            State::Sat | State::Unsat => StepOutcome::of(self.state),
        }
    }

    /// Steps until SAT, UNSAT, or the cycle cap is reached. Returns the
    /// final state and the (possibly partial) assignment.
    pub fn solve(&mut self) -> (State, HashMap<Var, bool>) {
        while !self.state.is_terminal() && self.cycle_count < self.config.max_cycles {
            self.step();
        }
        (self.state, self.trail.assignment().clone())
    }

    fn decide(&mut self) -> StepOutcome {
        let assigned = self.trail.assignment().clone();
        let var = self.heuristic.predict(&assigned);
        match var {
            None => {
                self.state = State::Sat;
            }
            Some(var) => {
                #[cfg(feature = "logging")]
                trace!("decide: x{} = false", var);
                self.trail.push(var, false, false);
                self.queue.push_back(2 * var);
                self.static_memory.reset_pointer();
                self.state = State::Propagate;
            }
        }
        StepOutcome {
            state: Some(self.state),
            decision_var: var,
            ..Default::default()
        }
    }

    fn propagate(&mut self) -> StepOutcome {
        if self.current_prop_literal.is_none() {
            match self.queue.pop_front() {
                None => {
                    self.state = State::Decide;
                    return StepOutcome::of(self.state);
                }
                Some(lit) => {
                    self.current_prop_literal = Some(lit);
                    self.static_memory.reset_pointer();
                }
            }
        }

        let current_lit = self.current_prop_literal.expect("just ensured above");
        let row_idx = self.static_memory.row_pointer();
        let static_row = self.static_memory.fetch_row(row_idx).to_vec();
        let dyn_row = self.dynamic_memory.row(row_idx).to_vec();

        let mask = compare(&static_row, current_lit);
        let new_dyn_row = update(&dyn_row, &mask);
        self.dynamic_memory.set_row(row_idx, new_dyn_row.clone());

        if evaluate(&static_row, &new_dyn_row) {
            #[cfg(feature = "logging")]
            trace!("conflict at row {}", row_idx);
            self.state = State::Backtrack;
            self.current_prop_literal = None;
            return StepOutcome {
                state: Some(self.state),
                conflict_row: Some(row_idx),
                ..Default::default()
            };
        }

        if let Some(forced_true_lit) = detect(&static_row, &new_dyn_row) {
            let false_literal = negate(forced_true_lit);
            let (var, val) = falsifying_assignment(false_literal);

            if let Some(existing) = self.trail.value_of(var) {
                if existing != val {
                    #[cfg(feature = "logging")]
                    trace!("bcp conflict: x{} already {}, wanted {}", var, existing, val);
                    self.state = State::Backtrack;
                    self.current_prop_literal = None;
                    return StepOutcome {
                        state: Some(self.state),
                        bcp_conflict_var: Some(var),
                        ..Default::default()
                    };
                }
                // Already assigned consistently: nothing to do.
            } else {
                #[cfg(feature = "logging")]
                trace!("unit: x{} = {} (forced)", var, val);
                self.trail.push(var, val, true);
                self.queue.push_back(false_literal);
            }
        }

        self.static_memory.advance_pointer();
        if self.static_memory.row_pointer() >= self.static_memory.num_rows() {
            self.current_prop_literal = None;
        }

        StepOutcome {
            state: Some(State::Propagate),
            row: Some(row_idx),
            lit: self.current_prop_literal,
            ..Default::default()
        }
    }

    fn backtrack(&mut self) -> StepOutcome {
        let Some(entry) = self.trail.pop() else {
            self.state = State::Unsat;
            return StepOutcome::of(self.state);
        };

        if entry.forced {
            // Already tried both values for this decision; keep popping.
            return StepOutcome::of(self.state);
        }

        #[cfg(feature = "logging")]
        trace!("flip: x{} = {}", entry.var, !entry.value);
        let flipped = !entry.value;
        self.trail.push(entry.var, flipped, true);

        self.dynamic_memory.clear();
        self.queue.clear();
        for e in self.trail.stack() {
            let falsified_lit = if !e.value { 2 * e.var } else { 2 * e.var + 1 };
            self.queue.push_back(falsified_lit);
        }

        self.static_memory.reset_pointer();
        self.current_prop_literal = None;
        self.state = State::Propagate;
        StepOutcome::of(self.state)
    }
}
