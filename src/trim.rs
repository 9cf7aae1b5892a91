// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

//!
//! Removal of useless states
//!
//! A state is useful if it is accessible (reachable from an initial state)
//! and co-accessible (a final state is reachable from it). Useless states
//! do not occur on any accepting run.
//!

use log::debug;

use crate::{
    automata::{Automaton, StateSet},
    reachability::{predecessors_star, successors_star},
};

///
/// Set of useful states (both accessible and co-accessible)
///
pub fn useful_states(automaton: &Automaton) -> StateSet {
    let accessible = successors_star(automaton, automaton.initial_states());
    let co_accessible = predecessors_star(automaton, automaton.final_states());
    accessible.intersection(&co_accessible)
}

///
/// Remove the useless states of an automaton
///
/// States are not renumbered: the result keeps
/// - the useful initial states and the useful final states,
/// - the transitions between useful states,
/// - the alphabet of the original automaton.
///
/// A useful state that's neither initial nor final and that has no
/// transition left does not appear in the result.
/// If there are no useful states, the result has no initial state, no
/// final state, and no transitions: it accepts no word.
///
pub fn trim(automaton: &Automaton) -> Automaton {
    let useful = useful_states(automaton);

    let mut result = Automaton::new();
    result.add_symbols(automaton.alphabet().iter().copied());
    for &q in &useful {
        if automaton.is_initial(q) {
            result.add_initial(q);
        }
        if automaton.is_final(q) {
            result.add_final(q);
        }
    }
    result.add_transitions(
        automaton
            .transitions()
            .iter()
            .filter(|t| useful.contains(&t.source) && useful.contains(&t.target))
            .copied(),
    );

    debug!(
        "trim: {} useful states out of {}, {} transitions kept out of {}",
        useful.len(),
        automaton.num_states(),
        result.transitions().len(),
        automaton.transitions().len()
    );
    result
}
