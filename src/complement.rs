// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

//!
//! Completion and complementation
//!
//! An automaton is complete if every state has at least one transition for every symbol of
//! its alphabet. A deterministic automaton can be completed by adding a sink state: a
//! non-final state that loops on every symbol and that receives all missing transitions.
//!
//! The complement of a complete deterministic automaton is obtained by swapping final
//! and non-final states. The complement of an arbitrary automaton is computed by
//! determinizing, completing, then swapping.
//!

use log::debug;

use crate::{automata::Automaton, determinization::determinize};

///
/// Check whether every state has a transition for every symbol in the alphabet
///
pub fn is_complete(automaton: &Automaton) -> bool {
    automaton.states().all(|q| {
        let letters = automaton.out_letters(q);
        automaton.alphabet().is_subset(&letters)
    })
}

///
/// Add a sink state to make an automaton complete
///
/// For every state q and every symbol c of the alphabet, if q has no transition on c,
/// a transition q -c-> sink is added. The sink is a new state numbered
/// `automaton.num_states()`. It's created only if a transition to it is needed, and
/// then it loops on every symbol.
///
/// If the automaton is deterministic, the result is deterministic and accepts
/// the same words.
///
pub fn complete(automaton: &Automaton) -> Automaton {
    let mut result = automaton.clone();
    let sink = automaton.num_states();
    let mut sink_needed = false;

    for q in automaton.states() {
        let letters = automaton.out_letters(q);
        for &c in automaton.alphabet() {
            if !letters.contains(&c) {
                result.add_transition(q, c, sink);
                sink_needed = true;
            }
        }
    }
    if sink_needed {
        result.add_transition_labels(sink, automaton.alphabet().iter().copied(), sink);
        debug!(
            "completion: added sink state {sink} ({} transitions)",
            result.transitions().len() - automaton.transitions().len()
        );
    }
    result
}

///
/// Automaton that accepts the words over the alphabet of `nfa` that `nfa` rejects
///
/// The result is deterministic and complete. Its states are the states of
/// `determinize(nfa)` and possibly a sink state. The sink state is final
/// in the result.
///
pub fn complement(nfa: &Automaton) -> Automaton {
    let det = complete(&determinize(nfa));

    let mut result = Automaton::new();
    result.add_symbols(det.alphabet().iter().copied());
    for q in det.states() {
        if det.is_initial(q) {
            result.add_initial(q);
        }
        if !det.is_final(q) {
            result.add_final(q);
        }
    }
    result.add_transitions(det.transitions().iter().copied());

    debug!(
        "complement: {} states, {} final states",
        result.num_states(),
        result.final_states().len()
    );
    result
}
