// src/bin/stable_marriage.rs
//! Two proposers and two responders, after the Grover textbook analogy.
//!
//! Preference tables for this scenario:
//!
//! |   Pref      |    1st      |    2nd      |
//! | Proposer 0  | Responder A | Responder B |
//! | Proposer 1  | Responder A | Responder B |
//!
//! |   Pref      |    1st      |    2nd      |
//! | Responder A | Proposer 0  | Proposer 1  |
//! | Responder B | Proposer 1  | Proposer 0  |
//!
//! A proposer-optimal Gale-Shapley run on these tables pairs
//! (Proposer 0, Responder A) and (Proposer 1, Responder B); the same pairs
//! come out of the responder-optimal run. The quantum circuits below
//! illustrate the decisions, they do not verify that classical outcome.

use qmatch::error::SimulationError;
use qmatch::grover::Oracle;
use qmatch::matching::Scenario;
use qmatch::report;

fn main() -> Result<(), SimulationError> {
    // Both proposers mark their preferred responder; responder A marks a
    // preferred proposer while responder B accepts unconditionally.
    let scenario = Scenario::new(
        vec![Oracle::MarkPreferred, Oracle::MarkPreferred],
        vec![Oracle::MarkPreferred, Oracle::Accept],
    );

    let outcome = scenario.run()?;

    for decision in &outcome.decisions {
        println!("{}:", decision.participant.label());
        println!("{}", decision.statevector);
        println!("{}", report::histogram(&decision.counts, 40));
    }

    println!("Couple stability state space:");
    print!("{}", report::amplitude_table(&outcome.joint));

    Ok(())
}
