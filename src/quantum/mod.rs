// src/quantum/mod.rs
//! Quantum state, gate and circuit primitives
//!
//! This module implements the small statevector-level building blocks the
//! decision circuits are made of: validated amplitude vectors, single-qubit
//! gates with dense matrix representations, and gate-sequence circuits.

pub mod state;
pub mod gate;
pub mod circuit;

pub use state::StateVector;
pub use gate::Gate;
pub use circuit::Circuit;
