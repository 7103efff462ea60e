// src/quantum/gate.rs
//! Single-qubit quantum gates
//!
//! The decision circuits in this crate only ever need single-qubit gates, so
//! gates are a plain enum with dense 2x2 matrix representations rather than a
//! trait hierarchy.

use ndarray::{array, Array1, Array2};
use num_complex::Complex64;

/// Common complex numbers used in quantum gates
pub mod constants {
    use num_complex::Complex64;

    /// The imaginary unit i
    pub const I: Complex64 = Complex64::new(0.0, 1.0);

    /// 1/sqrt(2)
    pub const FRAC_1_SQRT_2: f64 = 0.7071067811865475;
}

/// A single-qubit quantum gate
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Gate {
    /// Identity gate
    I,

    /// Pauli-X gate (NOT gate)
    X,

    /// Pauli-Z gate (phase flip)
    Z,

    /// Hadamard gate
    H,

    /// Rotation about the Z axis by the given angle
    Rz(f64),
}

impl Gate {
    /// Returns the 2x2 matrix representation of this gate
    pub fn matrix(&self) -> Array2<Complex64> {
        use constants::*;
        match self {
            Gate::I => {
                array![
                    [Complex64::new(1.0, 0.0), Complex64::new(0.0, 0.0)],
                    [Complex64::new(0.0, 0.0), Complex64::new(1.0, 0.0)]
                ]
            }
            Gate::X => {
                array![
                    [Complex64::new(0.0, 0.0), Complex64::new(1.0, 0.0)],
                    [Complex64::new(1.0, 0.0), Complex64::new(0.0, 0.0)]
                ]
            }
            Gate::Z => {
                array![
                    [Complex64::new(1.0, 0.0), Complex64::new(0.0, 0.0)],
                    [Complex64::new(0.0, 0.0), Complex64::new(-1.0, 0.0)]
                ]
            }
            Gate::H => {
                let factor = Complex64::new(FRAC_1_SQRT_2, 0.0);
                array![
                    [factor, factor],
                    [factor, -factor]
                ]
            }
            Gate::Rz(theta) => {
                let half = theta / 2.0;
                array![
                    [(-I * half).exp(), Complex64::new(0.0, 0.0)],
                    [Complex64::new(0.0, 0.0), (I * half).exp()]
                ]
            }
        }
    }

    /// Returns a display name for this gate
    pub fn name(&self) -> String {
        match self {
            Gate::I => "I".to_string(),
            Gate::X => "X".to_string(),
            Gate::Z => "Z".to_string(),
            Gate::H => "H".to_string(),
            Gate::Rz(theta) => format!("Rz({:.2})", theta),
        }
    }

    /// Expand this gate into an operator over a full n-qubit register
    ///
    /// With big-endian ordering (qubit 0 is the most significant index bit),
    /// the full operator is I ⊗ ... ⊗ G ⊗ ... ⊗ I with G at the target
    /// position.
    pub fn embed(&self, qubit_count: usize, target: usize) -> Array2<Complex64> {
        let gate_matrix = self.matrix();

        if qubit_count == 1 && target == 0 {
            return gate_matrix;
        }

        let mut full = identity_matrix(1 << target);
        full = kron_matrix(&full, &gate_matrix);
        full = kron_matrix(&full, &identity_matrix(1 << (qubit_count - 1 - target)));
        full
    }
}

/// Identity matrix of the given dimension
pub fn identity_matrix(dim: usize) -> Array2<Complex64> {
    Array2::from_diag(&Array1::from_elem(dim, Complex64::new(1.0, 0.0)))
}

/// Kronecker product of two matrices
pub fn kron_matrix(a: &Array2<Complex64>, b: &Array2<Complex64>) -> Array2<Complex64> {
    let a_rows = a.shape()[0];
    let a_cols = a.shape()[1];
    let b_rows = b.shape()[0];
    let b_cols = b.shape()[1];

    let mut result = Array2::zeros((a_rows * b_rows, a_cols * b_cols));

    for i in 0..a_rows {
        for j in 0..a_cols {
            for k in 0..b_rows {
                for l in 0..b_cols {
                    result[[i * b_rows + k, j * b_cols + l]] = a[[i, j]] * b[[k, l]];
                }
            }
        }
    }

    result
}
