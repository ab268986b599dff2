//! Collaborators around the `satnode` cycle-accurate core: DIMACS parsing,
//! matrix building, hex encode/decode (RTL init + pretty-printer), and a
//! small reference DPLL oracle used only by the test runner.

pub mod dimacs;
pub mod hex;
pub mod matrix;
pub mod reference;
