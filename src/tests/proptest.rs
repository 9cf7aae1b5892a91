// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

use proptest::{collection, prelude::*};

use crate::{
    automata::{Automaton, StateId, StateSet, Symbol},
    complement::{complement, complete, is_complete},
    determinization::{determinize, is_deterministic},
    product::intersect,
    reachability::successors_star,
    trim::trim,
};

const ALPHABET: [Symbol; 3] = ['a', 'b', 'c'];
const MAX_STATES: StateId = 6;

fn arb_symbol() -> impl Strategy<Value = Symbol> {
    prop::sample::select(ALPHABET.to_vec())
}

fn arb_word() -> impl Strategy<Value = Vec<Symbol>> {
    collection::vec(arb_symbol(), 0..=8)
}

fn arb_words() -> impl Strategy<Value = Vec<Vec<Symbol>>> {
    collection::vec(arb_word(), 1..=20)
}

fn arb_states() -> impl Strategy<Value = Vec<StateId>> {
    collection::vec(0..MAX_STATES, 0..=3)
}

// random automaton over {a, b, c}; all three symbols are declared
fn arb_automaton() -> impl Strategy<Value = Automaton> {
    (
        arb_states(),
        collection::vec((0..MAX_STATES, arb_symbol(), 0..MAX_STATES), 0..=14),
        arb_states(),
    )
        .prop_map(|(initial, transitions, finals)| {
            let mut a = Automaton::from_parts(initial, transitions, finals);
            a.add_symbols(ALPHABET.iter().copied());
            a
        })
}

fn accepts(a: &Automaton, w: &[Symbol]) -> bool {
    a.accepts(w.iter().copied())
}

proptest! {
    #[test]
    fn intersection_is_conjunction(a1 in arb_automaton(), a2 in arb_automaton(), words in arb_words()) {
        let p = intersect(&a1, &a2);
        for w in &words {
            prop_assert_eq!(accepts(&p, w), accepts(&a1, w) && accepts(&a2, w));
        }
    }

    #[test]
    fn determinization_preserves_language(a in arb_automaton(), words in arb_words()) {
        let d = determinize(&a);
        prop_assert!(is_deterministic(&d));
        for w in &words {
            prop_assert_eq!(accepts(&d, w), accepts(&a, w));
        }
    }

    #[test]
    fn completion_preserves_language(a in arb_automaton(), words in arb_words()) {
        let c = complete(&determinize(&a));
        prop_assert!(is_complete(&c));
        prop_assert!(is_deterministic(&c));
        for w in &words {
            prop_assert_eq!(accepts(&c, w), accepts(&a, w));
        }
    }

    #[test]
    fn complement_flips_membership(a in arb_automaton(), words in arb_words()) {
        let c = complement(&a);
        for w in &words {
            prop_assert_ne!(accepts(&c, w), accepts(&a, w));
        }
    }

    #[test]
    fn trim_preserves_language(a in arb_automaton(), words in arb_words()) {
        let t = trim(&a);
        prop_assert_eq!(&trim(&t), &t);
        for w in &words {
            prop_assert_eq!(accepts(&t, w), accepts(&a, w));
        }
    }

    #[test]
    fn successors_star_is_a_closure(a in arb_automaton(), sources in arb_states()) {
        let sources: StateSet = sources.into();
        let reached = successors_star(&a, &sources);
        prop_assert!(sources.is_subset(&reached));
        prop_assert_eq!(&successors_star(&a, &reached), &reached);
    }
}
