// src/quantum/circuit.rs
//! Gate-sequence circuits
//!
//! A `Circuit` is an ordered sequence of single-qubit gate applications over
//! a fixed register. It is mutable while being composed and applied as-is to
//! a state vector; the simulator never mutates it.

use crate::error::{CircuitError, SimulationError};
use crate::quantum::gate::Gate;
use crate::quantum::state::StateVector;

/// A quantum circuit consisting of a sequence of single-qubit gates
#[derive(Clone, Debug, PartialEq)]
pub struct Circuit {
    ops: Vec<(Gate, usize)>,
    qubit_count: usize,
}

impl Circuit {
    /// Create a new empty circuit over the given register size
    pub fn new(qubit_count: usize) -> Self {
        Circuit {
            ops: Vec::new(),
            qubit_count,
        }
    }

    /// Returns the register size
    pub fn qubit_count(&self) -> usize {
        self.qubit_count
    }

    /// Get the number of gates in the circuit
    pub fn gate_count(&self) -> usize {
        self.ops.len()
    }

    /// The gate sequence, in application order
    pub fn ops(&self) -> &[(Gate, usize)] {
        &self.ops
    }

    /// Append a gate acting on the given qubit
    pub fn push(&mut self, gate: Gate, qubit: usize) -> Result<(), CircuitError> {
        if qubit >= self.qubit_count {
            return Err(CircuitError::QubitOutOfRange {
                index: qubit,
                qubit_count: self.qubit_count,
            });
        }

        self.ops.push((gate, qubit));
        Ok(())
    }

    /// Add a Hadamard gate
    pub fn h(&mut self, qubit: usize) -> Result<(), CircuitError> {
        self.push(Gate::H, qubit)
    }

    /// Add a Pauli-X gate
    pub fn x(&mut self, qubit: usize) -> Result<(), CircuitError> {
        self.push(Gate::X, qubit)
    }

    /// Add a Pauli-Z gate
    pub fn z(&mut self, qubit: usize) -> Result<(), CircuitError> {
        self.push(Gate::Z, qubit)
    }

    /// Add an Rz gate
    pub fn rz(&mut self, qubit: usize, theta: f64) -> Result<(), CircuitError> {
        self.push(Gate::Rz(theta), qubit)
    }

    /// Apply the circuit to a quantum state
    pub fn apply(&self, state: &StateVector) -> Result<StateVector, SimulationError> {
        if state.qubit_count() != self.qubit_count {
            return Err(SimulationError::QubitCountMismatch {
                circuit: self.qubit_count,
                simulator: state.qubit_count(),
            });
        }

        // Apply each gate in sequence
        let mut current_state = state.clone();
        for (gate, qubit) in &self.ops {
            let full_matrix = gate.embed(self.qubit_count, *qubit);
            current_state = current_state.apply_matrix(&full_matrix)?;
        }

        Ok(current_state)
    }

    /// Render the circuit as a text wire diagram, one line per qubit
    pub fn diagram(&self) -> String {
        let mut rows: Vec<String> = (0..self.qubit_count)
            .map(|q| format!("q{}: ", q))
            .collect();

        for (gate, target) in &self.ops {
            let label = format!("─[{}]", gate.name());
            let width = label.chars().count();

            for (q, row) in rows.iter_mut().enumerate() {
                if q == *target {
                    row.push_str(&label);
                } else {
                    row.push_str(&"─".repeat(width));
                }
            }
        }

        for row in &mut rows {
            row.push('─');
        }

        rows.join("\n")
    }
}
