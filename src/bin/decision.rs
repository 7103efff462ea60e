// src/bin/decision.rs
//! A single participant's decision circuit, with an Rz(π) phase oracle.

use std::f64::consts::PI;

use qmatch::error::SimulationError;
use qmatch::grover::{decision_circuit, Oracle};
use qmatch::matching::{decide, Participant, Role, DEFAULT_SHOTS};
use qmatch::report;

fn main() -> Result<(), SimulationError> {
    let participant = Participant::new(Role::Proposer, 0, Oracle::PhaseRotation(PI));
    let choice_count = 2;

    let circuit = decision_circuit(choice_count, &participant.oracle)?;
    println!("{} decision circuit:", participant.label());
    println!("{}", circuit.diagram());
    println!();

    let decision = decide(participant, choice_count, DEFAULT_SHOTS)?;
    println!("{}", decision.statevector);
    println!("{}", report::histogram(&decision.counts, 40));

    Ok(())
}
