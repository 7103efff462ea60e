use ndarray::Array1;
use num_complex::Complex64;

use qmatch::error::SimulationError;
use qmatch::quantum::{Circuit, StateVector};
use qmatch::simulators::{simulate, StatevectorSimulator};

/// Helper function for comparing complex numbers with tolerance
fn complex_approx_eq(a: Complex64, b: Complex64, epsilon: f64) -> bool {
    (a - b).norm() < epsilon
}

/// Helper function for comparing f64 with tolerance
fn approx_eq(a: f64, b: f64, epsilon: f64) -> bool {
    (a - b).abs() < epsilon
}

const FRAC_1_SQRT_2: f64 = 0.7071067811865475;

#[test]
fn test_hadamard_superposition() {
    let mut circuit = Circuit::new(1);
    circuit.h(0).unwrap();

    let mut simulator = StatevectorSimulator::new(1);
    simulator.run_circuit(&circuit).unwrap();

    let amplitudes = simulator.state().amplitudes();
    assert!(complex_approx_eq(
        amplitudes[0],
        Complex64::new(FRAC_1_SQRT_2, 0.0),
        1e-10
    ));
    assert!(complex_approx_eq(
        amplitudes[1],
        Complex64::new(FRAC_1_SQRT_2, 0.0),
        1e-10
    ));
}

#[test]
fn test_run_circuit_rejects_qubit_count_mismatch() {
    let circuit = Circuit::new(2);
    let mut simulator = StatevectorSimulator::new(1);

    let err = simulator.run_circuit(&circuit).unwrap_err();
    assert_eq!(
        err,
        SimulationError::QubitCountMismatch {
            circuit: 2,
            simulator: 1
        }
    );
}

#[test]
fn test_state_vector_validation() {
    // Wrong dimension
    let err = StateVector::new(2, Array1::zeros(3)).unwrap_err();
    assert_eq!(err, SimulationError::DimensionMismatch { expected: 4, got: 3 });

    // Not normalized
    let mut amplitudes: Array1<Complex64> = Array1::zeros(2);
    amplitudes[0] = Complex64::new(0.5, 0.0);
    match StateVector::new(1, amplitudes).unwrap_err() {
        SimulationError::NotNormalized(norm_sqr) => assert!(approx_eq(norm_sqr, 0.25, 1e-10)),
        other => panic!("unexpected error: {:?}", other),
    }
}

#[test]
fn test_sample_deterministic_state() {
    // |00⟩ with no gates: every shot measures "00"
    let simulator = StatevectorSimulator::new(2);
    let counts = simulator.sample(500);

    assert_eq!(counts.total(), 500);
    assert_eq!(counts.len(), 1);
    assert_eq!(counts.get("00"), 500);
}

#[test]
fn test_sample_statistics_for_superposition() {
    let mut circuit = Circuit::new(1);
    circuit.h(0).unwrap();

    let mut simulator = StatevectorSimulator::new(1);
    simulator.run_circuit(&circuit).unwrap();

    let shots = 2000;
    let counts = simulator.sample(shots);

    assert_eq!(counts.total(), shots);

    // Check that frequencies are close to the 50/50 distribution.
    // Use a larger epsilon due to statistical fluctuations.
    let freq_0 = counts.get("0") as f64 / shots as f64;
    let freq_1 = counts.get("1") as f64 / shots as f64;
    assert!(approx_eq(freq_0, 0.5, 0.06));
    assert!(approx_eq(freq_1, 0.5, 0.06));
}

#[test]
fn test_simulate_returns_pre_measurement_statevector() {
    // H, Z, H maps |0⟩ to |1⟩, so the statevector is definite and every
    // sampled shot lands on "1"
    let mut circuit = Circuit::new(1);
    circuit.h(0).unwrap();
    circuit.z(0).unwrap();
    circuit.h(0).unwrap();

    let result = simulate(&circuit, 256).unwrap();

    assert!(complex_approx_eq(
        result.statevector.amplitudes()[0],
        Complex64::new(0.0, 0.0),
        1e-10
    ));
    assert!(complex_approx_eq(
        result.statevector.amplitudes()[1],
        Complex64::new(1.0, 0.0),
        1e-10
    ));
    assert_eq!(result.counts.get("1"), 256);
    assert_eq!(result.counts.most_frequent(), Some(("1", 256)));
}

#[test]
fn test_statevector_tensor_combines_registers() {
    let mut circuit = Circuit::new(1);
    circuit.h(0).unwrap();
    let plus = circuit.apply(&StateVector::zero_state(1)).unwrap();

    let one = StateVector::computational_basis(1, 1).unwrap();
    let joint = plus.tensor(&one);

    assert_eq!(joint.qubit_count(), 2);
    // (1/√2)(|0⟩ + |1⟩) ⊗ |1⟩ = (1/√2)(|01⟩ + |11⟩)
    assert!(complex_approx_eq(joint.amplitudes()[0], Complex64::new(0.0, 0.0), 1e-10));
    assert!(complex_approx_eq(
        joint.amplitudes()[1],
        Complex64::new(FRAC_1_SQRT_2, 0.0),
        1e-10
    ));
    assert!(complex_approx_eq(joint.amplitudes()[2], Complex64::new(0.0, 0.0), 1e-10));
    assert!(complex_approx_eq(
        joint.amplitudes()[3],
        Complex64::new(FRAC_1_SQRT_2, 0.0),
        1e-10
    ));
}

#[test]
fn test_probabilities_sum_to_one() {
    let mut circuit = Circuit::new(2);
    circuit.h(0).unwrap();
    circuit.h(1).unwrap();
    circuit.x(0).unwrap();

    let mut simulator = StatevectorSimulator::new(2);
    simulator.run_circuit(&circuit).unwrap();

    let total: f64 = simulator.probabilities().iter().sum();
    assert!(approx_eq(total, 1.0, 1e-10));
}
