//! `satnode`: a cycle-accurate functional model of a hardware SAT-solver
//! node.
//!
//! This crate is a golden reference for RTL verification, not a
//! performance-oriented solver: it commits to a fixed per-cycle schedule
//! (one clause row examined per [`Controller::step`] call) so that an RTL
//! co-simulation harness can assert cycle-for-cycle equivalence, not just
//! matching final results.
//!
//! Modules, leaves first:
//! - [`literal`]: the `2*v` / `2*v + 1` literal encoding and its helpers.
//! - [`memory`]: static clause memory and the dynamic falsified-literal
//!   bitmap.
//! - [`datapath`]: the comparator, bitwise updater, clause evaluator, and
//!   unit detector — pure functions over row slices.
//! - [`heuristic`]: next-decision-variable selection.
//! - [`trail`]: the assignment table and chronological decision stack.
//! - [`queue`]: the FIFO of literals awaiting propagation.
//! - [`controller`]: the sequential FSM (`DECIDE` / `PROPAGATE` /
//!   `BACKTRACK`) that owns all of the above.
//!
//! This crate deliberately does not implement modern CDCL techniques —
//! no learnt clauses, no non-chronological backtracking, no watched
//! literals, no VSIDS — since its purpose is to match a specific,
//! comparatively simple RTL design exactly, not to solve large instances
//! quickly.

pub mod controller;
pub mod datapath;
pub mod heuristic;
pub mod literal;
pub mod memory;
pub mod queue;
pub mod trail;

pub use controller::{Controller, SolverConfig, State, StepOutcome};
pub use literal::{negate, variable, Lit, Var};
