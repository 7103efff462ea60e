use std::f64::consts::PI;

use num_complex::Complex64;

use qmatch::error::CircuitError;
use qmatch::grover::{decision_circuit, grover_rounds, register_size, Oracle};
use qmatch::quantum::StateVector;

/// Helper function for comparing complex numbers with tolerance
fn complex_approx_eq(a: Complex64, b: Complex64, epsilon: f64) -> bool {
    (a - b).norm() < epsilon
}

const FRAC_1_SQRT_2: f64 = 0.7071067811865475;

#[test]
fn test_grover_rounds_is_floor_sqrt() {
    assert_eq!(grover_rounds(2), 1);
    assert_eq!(grover_rounds(4), 2);
    assert_eq!(grover_rounds(8), 2);
    assert_eq!(grover_rounds(9), 3);
}

#[test]
fn test_register_size_for_power_of_two_choices() {
    assert_eq!(register_size(2).unwrap(), 1);
    assert_eq!(register_size(4).unwrap(), 2);
    assert_eq!(register_size(8).unwrap(), 3);
}

#[test]
fn test_register_size_rejects_invalid_choice_counts() {
    assert_eq!(
        register_size(0).unwrap_err(),
        CircuitError::ChoiceCountNotPowerOfTwo(0)
    );
    assert_eq!(
        register_size(3).unwrap_err(),
        CircuitError::ChoiceCountNotPowerOfTwo(3)
    );
    assert_eq!(register_size(1).unwrap_err(), CircuitError::EmptyRegister);
}

#[test]
fn test_decision_circuit_rejects_multi_qubit_registers() {
    // The simplified diffuser is only valid on one qubit
    assert_eq!(
        decision_circuit(4, &Oracle::MarkPreferred).unwrap_err(),
        CircuitError::UnsupportedRegisterSize(2)
    );
}

#[test]
fn test_mark_preferred_decision_amplitudes() {
    // H, Z, H, Z, H applied to |0⟩ gives (-1/√2)|0⟩ + (1/√2)|1⟩
    let circuit = decision_circuit(2, &Oracle::MarkPreferred).unwrap();
    let state = circuit.apply(&StateVector::zero_state(1)).unwrap();

    assert!(complex_approx_eq(
        state.amplitudes()[0],
        Complex64::new(-FRAC_1_SQRT_2, 0.0),
        1e-10
    ));
    assert!(complex_approx_eq(
        state.amplitudes()[1],
        Complex64::new(FRAC_1_SQRT_2, 0.0),
        1e-10
    ));
}

#[test]
fn test_accept_decision_stays_in_superposition() {
    // The no-op oracle leaves three Hadamards, which collapse to a single H
    let circuit = decision_circuit(2, &Oracle::Accept).unwrap();
    assert_eq!(circuit.gate_count(), 3);

    let state = circuit.apply(&StateVector::zero_state(1)).unwrap();

    assert!(complex_approx_eq(
        state.amplitudes()[0],
        Complex64::new(FRAC_1_SQRT_2, 0.0),
        1e-10
    ));
    assert!(complex_approx_eq(
        state.amplitudes()[1],
        Complex64::new(FRAC_1_SQRT_2, 0.0),
        1e-10
    ));
}

#[test]
fn test_phase_rotation_decision_amplitudes() {
    // Rz(π) differs from Z by a global phase, which survives the circuit as
    // a different amplitude sign pattern: (1/√2)|0⟩ - (1/√2)|1⟩
    let circuit = decision_circuit(2, &Oracle::PhaseRotation(PI)).unwrap();
    let state = circuit.apply(&StateVector::zero_state(1)).unwrap();

    assert!(complex_approx_eq(
        state.amplitudes()[0],
        Complex64::new(FRAC_1_SQRT_2, 0.0),
        1e-10
    ));
    assert!(complex_approx_eq(
        state.amplitudes()[1],
        Complex64::new(-FRAC_1_SQRT_2, 0.0),
        1e-10
    ));
}

#[test]
fn test_decision_circuit_gate_counts() {
    // One round over two choices: init H, oracle, then H-oracle-H diffuser
    let marked = decision_circuit(2, &Oracle::MarkPreferred).unwrap();
    assert_eq!(marked.gate_count(), 5);

    let rotated = decision_circuit(2, &Oracle::PhaseRotation(PI)).unwrap();
    assert_eq!(rotated.gate_count(), 5);
}
