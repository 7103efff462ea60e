// src/matching/mod.rs
//! Stable-marriage participants and scenarios
//!
//! Each participant runs an independent Grover-style decision circuit over
//! the members of the opposite side. The per-side statevectors are combined
//! with tensor products into joint "state spaces", and the two sides combine
//! into the full joint space over every participant's outcome together.

use ndarray::Array1;
use num_complex::Complex64;
use serde::{Deserialize, Serialize};

use crate::error::SimulationError;
use crate::grover::{decision_circuit, Oracle};
use crate::simulators::{simulate, Counts};
use crate::quantum::StateVector;
use crate::tensor::{tensor_product, TensorOperand};

/// Default number of measurement shots per decision
pub const DEFAULT_SHOTS: usize = 1024;

/// Which side of the matching a participant is on
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    /// The proposing side (the "men" of the classical formulation)
    Proposer,

    /// The accepting side (the "women" of the classical formulation)
    Responder,
}

impl Role {
    fn group_name(&self) -> &'static str {
        match self {
            Role::Proposer => "Proposer",
            Role::Responder => "Responder",
        }
    }
}

/// One decision-maker in the matching
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Participant {
    pub role: Role,
    pub index: usize,
    pub oracle: Oracle,
}

impl Participant {
    pub fn new(role: Role, index: usize, oracle: Oracle) -> Self {
        Participant { role, index, oracle }
    }

    /// Display label, e.g. `Proposer_0`
    pub fn label(&self) -> String {
        format!("{}_{}", self.role.group_name(), self.index)
    }
}

/// The simulated outcome of one participant's decision circuit
#[derive(Clone, Debug)]
pub struct Decision {
    pub participant: Participant,
    pub statevector: StateVector,
    pub counts: Counts,
}

/// Run one participant's decision over the given number of choices
pub fn decide(
    participant: Participant,
    choice_count: usize,
    shots: usize,
) -> Result<Decision, SimulationError> {
    let circuit = decision_circuit(choice_count, &participant.oracle)?;
    let result = simulate(&circuit, shots)?;

    Ok(Decision {
        participant,
        statevector: result.statevector,
        counts: result.counts,
    })
}

/// A full matching scenario: one oracle per participant on each side
#[derive(Clone, Debug)]
pub struct Scenario {
    pub proposers: Vec<Oracle>,
    pub responders: Vec<Oracle>,
    pub shots: usize,
}

impl Scenario {
    pub fn new(proposers: Vec<Oracle>, responders: Vec<Oracle>) -> Self {
        Scenario {
            proposers,
            responders,
            shots: DEFAULT_SHOTS,
        }
    }

    pub fn with_shots(mut self, shots: usize) -> Self {
        self.shots = shots;
        self
    }

    /// Run every participant's decision and combine the statevectors
    ///
    /// Each proposer decides over the responders and vice versa, so each
    /// side's choice count is the size of the opposite side.
    pub fn run(&self) -> Result<MatchingOutcome, SimulationError> {
        let mut decisions = Vec::with_capacity(self.proposers.len() + self.responders.len());

        for (index, oracle) in self.proposers.iter().enumerate() {
            let participant = Participant::new(Role::Proposer, index, *oracle);
            decisions.push(decide(participant, self.responders.len(), self.shots)?);
        }

        for (index, oracle) in self.responders.iter().enumerate() {
            let participant = Participant::new(Role::Responder, index, *oracle);
            decisions.push(decide(participant, self.proposers.len(), self.shots)?);
        }

        let proposer_space = side_space(&decisions, Role::Proposer);
        let responder_space = side_space(&decisions, Role::Responder);

        let joint = tensor_product(&[
            TensorOperand::Single(proposer_space.clone()),
            TensorOperand::Single(responder_space.clone()),
        ]);

        Ok(MatchingOutcome {
            decisions,
            proposer_space,
            responder_space,
            joint,
        })
    }
}

/// Tensor product of the statevectors of every decision on one side
fn side_space(decisions: &[Decision], role: Role) -> Array1<Complex64> {
    let operands: Vec<TensorOperand> = decisions
        .iter()
        .filter(|decision| decision.participant.role == role)
        .map(|decision| TensorOperand::Single(decision.statevector.amplitudes().clone()))
        .collect();

    tensor_product(&operands)
}

/// Joint result of a scenario run
#[derive(Clone, Debug)]
pub struct MatchingOutcome {
    /// Every participant's decision, proposers first
    pub decisions: Vec<Decision>,

    /// Joint state space over all proposers' decisions
    pub proposer_space: Array1<Complex64>,

    /// Joint state space over all responders' decisions
    pub responder_space: Array1<Complex64>,

    /// The combined state space over both sides
    pub joint: Array1<Complex64>,
}
