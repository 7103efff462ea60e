// src/quantum/state.rs
//! Quantum state representation
//!
//! A `StateVector` holds the complex amplitudes of an n-qubit register over
//! its 2^n computational basis states. Basis-state indices are big-endian:
//! qubit 0 is the most significant bit of the index.

use std::fmt::{self, Display};

use ndarray::{Array1, Array2};
use num_complex::Complex64;

use crate::error::SimulationError;

/// State vector representation of a quantum register
#[derive(Clone, Debug, PartialEq)]
pub struct StateVector {
    /// Number of qubits
    qubit_count: usize,

    /// The state vector as an array of complex amplitudes
    amplitudes: Array1<Complex64>,
}

impl StateVector {
    /// Create a new state vector with the given amplitudes
    pub fn new(qubit_count: usize, amplitudes: Array1<Complex64>) -> Result<Self, SimulationError> {
        let expected_dim = 1 << qubit_count;

        if amplitudes.len() != expected_dim {
            return Err(SimulationError::DimensionMismatch {
                expected: expected_dim,
                got: amplitudes.len(),
            });
        }

        let state = StateVector {
            qubit_count,
            amplitudes,
        };

        let norm_sqr = state.norm_sqr();
        if (norm_sqr - 1.0).abs() > 1e-10 {
            return Err(SimulationError::NotNormalized(norm_sqr));
        }

        Ok(state)
    }

    /// Create a new state vector in the computational basis state |index⟩
    pub fn computational_basis(qubit_count: usize, index: usize) -> Result<Self, SimulationError> {
        let dim = 1 << qubit_count;

        if index >= dim {
            return Err(SimulationError::DimensionMismatch {
                expected: dim,
                got: index,
            });
        }

        let mut amplitudes = Array1::zeros(dim);
        amplitudes[index] = Complex64::new(1.0, 0.0);

        Ok(StateVector {
            qubit_count,
            amplitudes,
        })
    }

    /// Create the zero state |00...0⟩
    pub fn zero_state(qubit_count: usize) -> Self {
        let dim = 1 << qubit_count;
        let mut amplitudes = Array1::zeros(dim);
        amplitudes[0] = Complex64::new(1.0, 0.0);

        StateVector {
            qubit_count,
            amplitudes,
        }
    }

    /// Returns the number of qubits in this state
    pub fn qubit_count(&self) -> usize {
        self.qubit_count
    }

    /// Returns the dimension of the state space (2^n for n qubits)
    pub fn dimension(&self) -> usize {
        1 << self.qubit_count
    }

    /// Get a reference to the amplitudes
    pub fn amplitudes(&self) -> &Array1<Complex64> {
        &self.amplitudes
    }

    /// Calculate the probability of measuring the given basis state
    pub fn probability(&self, index: usize) -> f64 {
        if index >= self.dimension() {
            return 0.0;
        }

        self.amplitudes[index].norm_sqr()
    }

    /// Measurement probabilities over all basis states
    pub fn probabilities(&self) -> Vec<f64> {
        self.amplitudes.iter().map(|amp| amp.norm_sqr()).collect()
    }

    fn norm_sqr(&self) -> f64 {
        self.amplitudes.iter().map(|amp| amp.norm_sqr()).sum()
    }

    /// Apply a unitary matrix to this state vector
    pub fn apply_matrix(&self, matrix: &Array2<Complex64>) -> Result<Self, SimulationError> {
        let dim = self.dimension();

        if matrix.shape() != [dim, dim] {
            return Err(SimulationError::DimensionMismatch {
                expected: dim,
                got: matrix.shape()[0],
            });
        }

        let new_amplitudes = matrix.dot(&self.amplitudes);

        Ok(StateVector {
            qubit_count: self.qubit_count,
            amplitudes: new_amplitudes,
        })
    }

    /// Tensor product with another state vector
    ///
    /// The result represents both registers jointly, with this state's qubits
    /// in the most significant positions.
    pub fn tensor(&self, other: &Self) -> Self {
        StateVector {
            qubit_count: self.qubit_count + other.qubit_count,
            amplitudes: crate::tensor::kron(&self.amplitudes, &other.amplitudes),
        }
    }
}

impl Display for StateVector {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "{}-qubit state:", self.qubit_count)?;

        let threshold = 1e-10;
        let mut has_entries = false;

        for i in 0..self.dimension() {
            let amp = self.amplitudes[i];
            if amp.norm_sqr() > threshold {
                has_entries = true;

                // Convert i to binary representation for the ket label
                let bit_string = format!("{:0width$b}", i, width = self.qubit_count);

                let prob = amp.norm_sqr();
                writeln!(
                    f,
                    "  ({:.6}{:+.6}i) |{}⟩ [{:.1}%]",
                    amp.re,
                    amp.im,
                    bit_string,
                    prob * 100.0
                )?;
            }
        }

        if !has_entries {
            writeln!(f, "  (zero state)")?;
        }

        Ok(())
    }
}
