// src/simulators/mod.rs
//! Statevector simulation backend

pub mod statevector;

pub use statevector::{simulate, Counts, SimulationResult, StatevectorSimulator};
