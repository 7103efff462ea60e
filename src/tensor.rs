// src/tensor.rs
//! Iterated Kronecker products over amplitude vectors
//!
//! This is the combiner that joins independent participants' statevectors
//! into a joint state space. Operands are accumulated left-to-right starting
//! from the scalar unit `[1]`; a repeat-counted operand is expanded into its
//! iterated self-product before the next operand is combined.

use ndarray::Array1;
use num_complex::Complex64;

/// An operand of `tensor_product`
#[derive(Clone, Debug, PartialEq)]
pub enum TensorOperand {
    /// A plain amplitude vector
    Single(Array1<Complex64>),

    /// A vector combined with itself the given number of times
    Repeated(Array1<Complex64>, usize),
}

impl From<Array1<Complex64>> for TensorOperand {
    fn from(vector: Array1<Complex64>) -> Self {
        TensorOperand::Single(vector)
    }
}

impl From<(Array1<Complex64>, usize)> for TensorOperand {
    fn from((vector, repeat): (Array1<Complex64>, usize)) -> Self {
        TensorOperand::Repeated(vector, repeat)
    }
}

/// Kronecker product of two amplitude vectors
///
/// The result has length `a.len() * b.len()`, with
/// `result[i * b.len() + j] == a[i] * b[j]`.
pub fn kron(a: &Array1<Complex64>, b: &Array1<Complex64>) -> Array1<Complex64> {
    let a_len = a.len();
    let b_len = b.len();
    let mut result = Array1::zeros(a_len * b_len);

    for i in 0..a_len {
        for j in 0..b_len {
            result[i * b_len + j] = a[i] * b[j];
        }
    }

    result
}

/// Iterated Kronecker product of the given operands, left to right
///
/// With a single plain operand the input vector is returned unchanged. A
/// `Repeated(v, 0)` operand contributes nothing (it is the scalar unit).
pub fn tensor_product(operands: &[TensorOperand]) -> Array1<Complex64> {
    let mut acc = Array1::from_elem(1, Complex64::new(1.0, 0.0));

    for operand in operands {
        match operand {
            TensorOperand::Single(vector) => {
                acc = kron(&acc, vector);
            }
            TensorOperand::Repeated(vector, repeat) => {
                for _ in 0..*repeat {
                    acc = kron(&acc, vector);
                }
            }
        }
    }

    acc
}
