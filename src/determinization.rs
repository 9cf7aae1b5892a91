// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

//!
//! Subset construction
//!
//! Each state of the deterministic automaton stands for a set of states of the
//! original automaton. Sets of states are numbered with an [IndexedSet] of
//! [StateSet]s: two equal sets always get the same number.
//!
//! The result is partial: a state has no successor for a symbol `c` if none of
//! the states it stands for has a transition on `c`. Use
//! [complete](crate::complement::complete) to add a sink state.
//!

use log::{debug, trace};

use crate::{
    automata::{Automaton, StateSet},
    indexed_sets::IndexedSet,
    worklists::WorkList,
};

///
/// Deterministic automaton equivalent to `nfa`
///
pub fn determinize(nfa: &Automaton) -> Automaton {
    determinize_with_subsets(nfa).0
}

///
/// Deterministic automaton equivalent to `nfa` and the subsets of states of `nfa`
/// each deterministic state stands for
///
/// State `i` of the result corresponds to the subset `subsets.at(i)`:
/// - state 0 is the only initial state; it stands for the initial states of `nfa`
///   (possibly none, in which case the result accepts no word)
/// - `i` is final iff `subsets[i]` contains a final state of `nfa`
/// - `i -c-> j` iff `subsets[j]` is the non-empty set of `c`-successors of `subsets[i]`
///
/// The result has the same alphabet as `nfa`.
///
pub fn determinize_with_subsets(nfa: &Automaton) -> (Automaton, IndexedSet<StateSet>) {
    let mut dfa = Automaton::new();
    let mut subsets: IndexedSet<StateSet> = IndexedSet::new();
    let mut queue = WorkList::new();

    dfa.add_symbols(nfa.alphabet().iter().copied());

    let init = subsets.get_or_insert_index(nfa.initial_states().clone());
    dfa.add_initial(init);
    queue.push(init);

    while let Some(i) = queue.pop() {
        // clone: subsets grows in the loop below
        let current = match subsets.at(i) {
            Ok(set) => set.clone(),
            Err(_) => continue,
        };
        trace!("subset construction: state {i} = {current}");

        if current.intersects(nfa.final_states()) {
            dfa.add_final(i);
        }

        for &c in nfa.alphabet() {
            let mut next = StateSet::new();
            for &q in &current {
                next.insert_all(nfa.out_states(q, c));
            }
            if !next.is_empty() {
                let j = subsets.get_or_insert_index(next);
                dfa.add_transition(i, c, j);
                queue.push(j);
            }
        }
    }

    debug!(
        "subset construction: {} states, {} transitions ({} states in the NFA)",
        dfa.num_states(),
        dfa.transitions().len(),
        nfa.num_states()
    );
    (dfa, subsets)
}

///
/// Check whether an automaton is deterministic
/// - it has at most one initial state
/// - no state has two transitions labeled by the same symbol
///
pub fn is_deterministic(automaton: &Automaton) -> bool {
    let mut seen = IndexedSet::new();
    automaton.initial_states().len() <= 1
        && automaton
            .transitions()
            .iter()
            .all(|t| seen.insert((t.source, t.label)))
}
