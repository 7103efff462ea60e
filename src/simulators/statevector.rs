// src/simulators/statevector.rs
//! Statevector simulator and measurement sampling
//!
//! The simulator owns a `StateVector`, runs circuits against it, and samples
//! full-register measurements from the resulting amplitude distribution.
//! Sampling never collapses the state: each shot is an independent draw from
//! the basis-state probabilities, so shots run in parallel.

use std::collections::HashMap;
use std::fmt;

use rand::Rng;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::error::SimulationError;
use crate::quantum::{Circuit, StateVector};

/// A statevector simulator for quantum circuits
#[derive(Clone, Debug)]
pub struct StatevectorSimulator {
    /// The current state of the simulator
    state: StateVector,
}

impl StatevectorSimulator {
    /// Create a new simulator in the |0...0⟩ state
    pub fn new(qubit_count: usize) -> Self {
        StatevectorSimulator {
            state: StateVector::zero_state(qubit_count),
        }
    }

    /// Create a simulator from an existing state vector
    pub fn from_state(state: StateVector) -> Self {
        StatevectorSimulator { state }
    }

    /// Get the current state vector
    pub fn state(&self) -> &StateVector {
        &self.state
    }

    /// Reset the simulator to the |0...0⟩ state
    pub fn reset(&mut self) {
        self.state = StateVector::zero_state(self.state.qubit_count());
    }

    /// Get the number of qubits in the simulator
    pub fn qubit_count(&self) -> usize {
        self.state.qubit_count()
    }

    /// Run a circuit against the current state
    pub fn run_circuit(&mut self, circuit: &Circuit) -> Result<(), SimulationError> {
        if circuit.qubit_count() != self.qubit_count() {
            return Err(SimulationError::QubitCountMismatch {
                circuit: circuit.qubit_count(),
                simulator: self.qubit_count(),
            });
        }

        self.state = circuit.apply(&self.state)?;
        Ok(())
    }

    /// Measurement probabilities over all basis states
    pub fn probabilities(&self) -> Vec<f64> {
        self.state.probabilities()
    }

    /// Sample full-register measurements from the current state
    pub fn sample(&self, shots: usize) -> Counts {
        let probs = self.probabilities();
        let dim = probs.len();

        // Pre-calculate the cumulative distribution once
        let mut cdf = Vec::with_capacity(dim);
        let mut running = 0.0;
        for &p in &probs {
            running += p;
            cdf.push(running);
        }

        let tallies = (0..shots)
            .into_par_iter()
            .map_init(rand::thread_rng, |rng, _| draw(&cdf, rng.gen::<f64>()))
            .fold(
                || vec![0usize; dim],
                |mut acc, index| {
                    acc[index] += 1;
                    acc
                },
            )
            .reduce(
                || vec![0usize; dim],
                |mut left, right| {
                    for (slot, count) in left.iter_mut().zip(right) {
                        *slot += count;
                    }
                    left
                },
            );

        Counts::from_tallies(&tallies, self.qubit_count())
    }
}

/// Determine the basis-state index for a uniform draw against a CDF
fn draw(cdf: &[f64], r: f64) -> usize {
    for (index, &cumulative) in cdf.iter().enumerate() {
        if r < cumulative {
            return index;
        }
    }

    // Floating point rounding can leave r just above the final entry
    cdf.len() - 1
}

/// Measured bit-string frequencies from repeated shots
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Counts {
    counts: HashMap<String, usize>,
}

impl Counts {
    fn from_tallies(tallies: &[usize], qubit_count: usize) -> Self {
        let mut counts = HashMap::new();

        for (index, &count) in tallies.iter().enumerate() {
            if count > 0 {
                let bit_string = format!("{:0width$b}", index, width = qubit_count);
                counts.insert(bit_string, count);
            }
        }

        Counts { counts }
    }

    /// Frequency of the given bit string, zero if never observed
    pub fn get(&self, bit_string: &str) -> usize {
        self.counts.get(bit_string).copied().unwrap_or(0)
    }

    /// Total number of shots recorded
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    /// Number of distinct observed bit strings
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Iterate over (bit string, frequency) pairs in arbitrary order
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.counts.iter().map(|(bits, &count)| (bits.as_str(), count))
    }

    /// The most frequently observed bit string, ties broken lexicographically
    pub fn most_frequent(&self) -> Option<(&str, usize)> {
        self.counts
            .iter()
            .map(|(bits, &count)| (bits.as_str(), count))
            .max_by(|a, b| a.1.cmp(&b.1).then_with(|| b.0.cmp(a.0)))
    }
}

impl fmt::Display for Counts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut entries: Vec<(&str, usize)> = self.iter().collect();
        entries.sort_by(|a, b| a.0.cmp(b.0));

        for (bits, count) in entries {
            writeln!(f, "{}: {}", bits, count)?;
        }

        Ok(())
    }
}

/// The result of one simulated run: the pre-measurement state and the
/// sampled measurement distribution
#[derive(Clone, Debug)]
pub struct SimulationResult {
    pub statevector: StateVector,
    pub counts: Counts,
}

/// Run a circuit on a fresh simulator and measure the full register
///
/// Returns the pre-measurement statevector together with the frequencies of
/// `shots` sampled measurements. Any failure propagates to the caller.
pub fn simulate(circuit: &Circuit, shots: usize) -> Result<SimulationResult, SimulationError> {
    let mut simulator = StatevectorSimulator::new(circuit.qubit_count());
    simulator.run_circuit(circuit)?;

    let statevector = simulator.state().clone();
    let counts = simulator.sample(shots);

    Ok(SimulationResult { statevector, counts })
}
