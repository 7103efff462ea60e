// src/grover/mod.rs
//! Grover-style decision circuit composition
//!
//! A participant's decision over `choice_count` options is modelled as a
//! Grover search on a log2(choice_count)-qubit register: uniform
//! superposition, then `floor(sqrt(choice_count))` rounds of (oracle,
//! diffuser).

pub mod oracle;

pub use oracle::Oracle;

use crate::error::CircuitError;
use crate::quantum::Circuit;

/// Number of Grover rounds for a search space of the given size
pub fn grover_rounds(choice_count: usize) -> usize {
    (choice_count as f64).sqrt().floor() as usize
}

/// Register size for a decision over the given number of choices
///
/// The choice count must be a power of two with at least two options; one
/// qubit is needed per doubling of the choice space.
pub fn register_size(choice_count: usize) -> Result<usize, CircuitError> {
    if choice_count == 0 || !choice_count.is_power_of_two() {
        return Err(CircuitError::ChoiceCountNotPowerOfTwo(choice_count));
    }
    if choice_count == 1 {
        return Err(CircuitError::EmptyRegister);
    }

    Ok(choice_count.trailing_zeros() as usize)
}

/// Apply a Hadamard to every qubit, preparing the uniform superposition
pub fn uniform_superposition(circuit: &mut Circuit) -> Result<(), CircuitError> {
    for qubit in 0..circuit.qubit_count() {
        circuit.h(qubit)?;
    }
    Ok(())
}

/// Append the simplified diffuser: H, oracle, H on the target qubit
///
/// This is not the canonical inversion-about-the-mean operator; it is only
/// valid for 1-qubit registers, which is all the decision circuits use.
fn diffuser(circuit: &mut Circuit, qubit: usize, oracle: &Oracle) -> Result<(), CircuitError> {
    circuit.h(qubit)?;
    oracle.apply(circuit, qubit)?;
    circuit.h(qubit)?;
    Ok(())
}

/// Build the complete decision circuit for one participant
///
/// The register is initialized to the uniform superposition, then the
/// (oracle, diffuser) pair is applied for `grover_rounds(choice_count)`
/// rounds. Registers larger than one qubit are rejected because the
/// simplified diffuser does not generalize to them.
pub fn decision_circuit(choice_count: usize, oracle: &Oracle) -> Result<Circuit, CircuitError> {
    let qubit_count = register_size(choice_count)?;

    if qubit_count != 1 {
        return Err(CircuitError::UnsupportedRegisterSize(qubit_count));
    }

    let mut circuit = Circuit::new(qubit_count);
    uniform_superposition(&mut circuit)?;

    for _ in 0..grover_rounds(choice_count) {
        oracle.apply(&mut circuit, 0)?;
        diffuser(&mut circuit, 0, oracle)?;
    }

    Ok(circuit)
}
