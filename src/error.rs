// src/error.rs
//! Error taxonomy for circuit construction and simulation
//!
//! Construction problems (bad choice counts, out-of-range qubits) are
//! `CircuitError`; anything that goes wrong while running a circuit on the
//! simulator is `SimulationError`.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum CircuitError {
    #[error("Choice count {0} is not a power of two")]
    ChoiceCountNotPowerOfTwo(usize),

    #[error("Decision register must have at least one qubit")]
    EmptyRegister,

    #[error("Qubit index {index} out of range for {qubit_count}-qubit circuit")]
    QubitOutOfRange { index: usize, qubit_count: usize },

    #[error("Simplified diffuser only supports 1-qubit registers, got {0} qubits")]
    UnsupportedRegisterSize(usize),
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SimulationError {
    #[error("State vector dimension mismatch: expected {expected}, got {got}")]
    DimensionMismatch { expected: usize, got: usize },

    #[error("State vector is not normalized. Norm squared: {0}")]
    NotNormalized(f64),

    #[error("Circuit has {circuit} qubits, but simulator has {simulator} qubits")]
    QubitCountMismatch { circuit: usize, simulator: usize },

    #[error("Circuit error: {0}")]
    Circuit(#[from] CircuitError),
}
