// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

//!
//! Reachability analysis and membership test
//!
//! - [successors] and [word_successors] compute the states reachable from a set
//!   of states by reading a symbol or a word
//! - [successors_star] and [predecessors_star] compute the forward and backward
//!   closures of a set of states
//! - [accepts] checks whether a word is accepted
//!

use log::{debug, trace};

use crate::automata::{Automaton, StateId, StateSet, Symbol};

///
/// States reachable from a state of `sources` by a transition labeled `c`
///
pub fn successors(automaton: &Automaton, sources: &StateSet, c: Symbol) -> StateSet {
    let mut result = StateSet::new();
    for &q in sources {
        result.insert_all(automaton.out_states(q, c));
    }
    result
}

///
/// States reachable from a state of `sources` by reading a word
///
/// If the word is empty, this returns a copy of `sources`.
///
pub fn word_successors(
    automaton: &Automaton,
    sources: &StateSet,
    word: impl IntoIterator<Item = Symbol>,
) -> StateSet {
    word.into_iter()
        .fold(sources.clone(), |current, c| successors(automaton, &current, c))
}

///
/// Check whether a word is accepted
///
/// The word is accepted if one of the states reached from the initial
/// states by reading it is final.
///
pub fn accepts(automaton: &Automaton, word: impl IntoIterator<Item = Symbol>) -> bool {
    let reached = word_successors(automaton, automaton.initial_states(), word);
    reached.intersects(automaton.final_states())
}

//
// Common fixpoint for the two closures: next(q) enumerates the neighbors of q
//
fn closure<I, F>(sources: &StateSet, next: F) -> StateSet
where
    I: IntoIterator<Item = StateId>,
    F: Fn(StateId) -> I,
{
    let mut reached = sources.clone();
    let mut to_explore = sources.clone();
    while let Ok(q) = to_explore.choose() {
        trace!("closure: exploring state {q}");
        for p in next(q) {
            if reached.insert(p) {
                to_explore.insert(p);
            }
        }
    }
    reached
}

///
/// States reachable from `sources` by any number of transitions (forward closure)
///
/// The result includes `sources`.
///
pub fn successors_star(automaton: &Automaton, sources: &StateSet) -> StateSet {
    let result = closure(sources, |q| {
        let mut next = StateSet::new();
        for c in automaton.out_letters(q) {
            next.insert_all(automaton.out_states(q, c));
        }
        next
    });
    debug!(
        "successors*: {} states reachable from {} sources",
        result.len(),
        sources.len()
    );
    result
}

///
/// States from which a state of `sources` is reachable (backward closure)
///
/// The result includes `sources`.
///
pub fn predecessors_star(automaton: &Automaton, sources: &StateSet) -> StateSet {
    let result = closure(sources, |q| {
        let mut previous = StateSet::new();
        for c in automaton.in_letters(q) {
            previous.insert_all(automaton.in_states(c, q));
        }
        previous
    });
    debug!(
        "predecessors*: {} states co-reachable from {} sources",
        result.len(),
        sources.len()
    );
    result
}

///
/// Check whether the automaton accepts no word
///
/// This is the case if no final state is reachable from an initial state.
///
pub fn is_empty_language(automaton: &Automaton) -> bool {
    let accessible = successors_star(automaton, automaton.initial_states());
    !accessible.intersects(automaton.final_states())
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::indexed_sets::IndexedSet;

    //
    // initial state 1, final state 4
    //   1 --a--> 2 --b--> 3 --c--> 4
    //   1 and 4 loop on a, b, c
    // so the language is (a|b|c)* abc (a|b|c)*
    //
    fn abc_automaton() -> Automaton {
        let mut a = Automaton::from_parts(
            vec![1],
            vec![(1, 'a', 2), (2, 'b', 3), (3, 'c', 4)],
            vec![4],
        );
        a.add_transition_labels(1, "abc".chars(), 1);
        a.add_transition_labels(4, "abc".chars(), 4);
        a
    }

    fn states(v: Vec<StateId>) -> StateSet {
        IndexedSet::from(v)
    }

    #[test]
    fn test_successors() {
        let a = abc_automaton();
        assert_eq!(successors(&a, &states(vec![1]), 'a'), states(vec![1, 2]));
        assert_eq!(successors(&a, &states(vec![1, 2]), 'b'), states(vec![1, 3]));
        assert_eq!(successors(&a, &states(vec![2]), 'a'), states(vec![]));
        assert_eq!(successors(&a, &states(vec![]), 'a'), states(vec![]));
    }

    #[test]
    fn test_word_successors() {
        let a = abc_automaton();
        let init = states(vec![1]);
        assert_eq!(word_successors(&a, &init, "".chars()), init);
        assert_eq!(word_successors(&a, &init, "ab".chars()), states(vec![1, 3]));
        assert_eq!(word_successors(&a, &init, "abc".chars()), states(vec![1, 4]));
        assert_eq!(word_successors(&a, &states(vec![2]), "ba".chars()), states(vec![]));
    }

    #[test]
    fn test_accepts() {
        let a = abc_automaton();
        assert!(accepts(&a, "abbabca".chars()));
        assert!(accepts(&a, "aaaabcbb".chars()));
        assert!(!accepts(&a, "aaaabbb".chars()));
        assert!(!accepts(&a, "".chars()));
        assert!(a.accepts("abc".chars()));
        assert!(!a.accepts("acb".chars()));
        // unknown symbols block every run
        assert!(!a.accepts("abcz".chars()));
    }

    #[test]
    fn test_empty_word() {
        let a = Automaton::from_parts(vec![0], vec![(0, 'a', 1)], vec![0]);
        assert!(accepts(&a, "".chars()));
        assert!(!accepts(&a, "a".chars()));
    }

    #[test]
    fn test_closures() {
        let a = abc_automaton();
        let forward = successors_star(&a, &states(vec![2]));
        println!("successors*({{2}}) = {forward}");
        assert_eq!(forward, states(vec![2, 3, 4]));

        let backward = predecessors_star(&a, &states(vec![2]));
        println!("predecessors*({{2}}) = {backward}");
        assert_eq!(backward, states(vec![1, 2]));

        // state 0 is isolated
        assert_eq!(successors_star(&a, &states(vec![0])), states(vec![0]));
        assert_eq!(predecessors_star(&a, &states(vec![0])), states(vec![0]));
        assert!(successors_star(&a, &states(vec![])).is_empty());

        // fixpoint
        let again = successors_star(&a, &forward);
        assert_eq!(again, forward);
    }

    #[test]
    fn test_empty_language() {
        let a = abc_automaton();
        assert!(!is_empty_language(&a));
        assert!(!a.is_empty_language());

        // final state not reachable
        let b = Automaton::from_parts(vec![0], vec![(0, 'a', 1), (2, 'b', 3)], vec![3]);
        assert!(is_empty_language(&b));

        // no initial state
        let c = Automaton::from_parts(vec![], vec![(0, 'a', 1)], vec![1]);
        assert!(is_empty_language(&c));

        assert!(is_empty_language(&Automaton::new()));
    }
}
