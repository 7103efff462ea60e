//! Grover-style quantum decision circuits for stable-marriage demonstrations
//!
//! This crate builds tiny Grover-search circuits that model the decisions of
//! participants in a stable-marriage (Gale-Shapley) matching problem, runs
//! them on a small statevector simulator, combines the participants'
//! statevectors into a joint state space with iterated Kronecker products,
//! and renders amplitudes, measurement histograms and circuit diagrams as
//! text.

pub mod error;
pub mod quantum;
pub mod grover;
pub mod simulators;
pub mod tensor;
pub mod matching;
pub mod report;

// Create a prelude module for convenient imports
pub mod prelude {
    pub use crate::error::{CircuitError, SimulationError};
    pub use crate::grover::{decision_circuit, grover_rounds, Oracle};
    pub use crate::matching::{decide, Participant, Role, Scenario};
    pub use crate::quantum::{Circuit, Gate, StateVector};
    pub use crate::simulators::{simulate, Counts, SimulationResult, StatevectorSimulator};
    pub use crate::tensor::{tensor_product, TensorOperand};
}

// Version and crate information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const CRATE_NAME: &str = env!("CARGO_PKG_NAME");
