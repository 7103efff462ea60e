// src/grover/oracle.rs
//! Decision oracles
//!
//! An oracle marks a participant's preferred outcome inside the decision
//! circuit. Callers pick a variant per participant.

use serde::{Deserialize, Serialize};

use crate::error::CircuitError;
use crate::quantum::Circuit;

/// The operation a participant uses to mark its preferred outcome
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum Oracle {
    /// Phase-flip the target qubit (Z gate)
    MarkPreferred,

    /// Rotate the target qubit about the Z axis by the given angle
    PhaseRotation(f64),

    /// Accept unconditionally; leaves the circuit unchanged
    Accept,
}

impl Oracle {
    /// Append this oracle's gates to the circuit at the target qubit
    pub fn apply(&self, circuit: &mut Circuit, qubit: usize) -> Result<(), CircuitError> {
        match self {
            Oracle::MarkPreferred => circuit.z(qubit),
            Oracle::PhaseRotation(theta) => circuit.rz(qubit, *theta),
            Oracle::Accept => Ok(()),
        }
    }
}
