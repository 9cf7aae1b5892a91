// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

//!
//! Product construction
//!
//! The product of two automata A1 and A2 simulates both automata in lock-step.
//! Its states are pairs (p1, p2) where p1 is a state of A1 and p2 is a state of A2.
//! Only the pairs reachable from a pair of initial states are constructed.
//! They are numbered in the order they are discovered.
//!

use log::{debug, trace};

use crate::{
    automata::{Automaton, StateId},
    indexed_sets::IndexedSet,
    worklists::WorkList,
};

///
/// Product automaton: accepts the words accepted by both a1 and a2
///
pub fn intersect(a1: &Automaton, a2: &Automaton) -> Automaton {
    intersect_with_pairs(a1, a2).0
}

///
/// Product automaton and the pair of states each product state stands for
///
/// State `i` of the product corresponds to the pair `pairs.at(i)`.
/// - `(i, c, j)` is a transition of the product iff `pairs[i] = (p1, p2)`,
///   `pairs[j] = (q1, q2)`, `p1 -c-> q1` is a transition of a1, and `p2 -c-> q2` is
///   a transition of a2
/// - `i` is initial iff both components of `pairs[i]` are initial
/// - `i` is final iff both components of `pairs[i]` are final
///
/// The alphabet of the product is the intersection of the alphabets of a1 and a2.
///
pub fn intersect_with_pairs(
    a1: &Automaton,
    a2: &Automaton,
) -> (Automaton, IndexedSet<(StateId, StateId)>) {
    let mut result = Automaton::new();
    let mut pairs = IndexedSet::new();
    let mut queue = WorkList::new();

    result.add_symbols(a1.alphabet().intersection(a2.alphabet()));

    for &i1 in a1.initial_states() {
        for &i2 in a2.initial_states() {
            let p = pairs.get_or_insert_index((i1, i2));
            result.add_initial(p);
            queue.push(p);
        }
    }

    while let Some(p) = queue.pop() {
        // every index in the queue was produced by get_or_insert_index
        let (p1, p2) = match pairs.at(p) {
            Ok(&pair) => pair,
            Err(_) => continue,
        };
        trace!("product: state {p} = ({p1}, {p2})");

        if a1.is_final(p1) && a2.is_final(p2) {
            result.add_final(p);
        }

        let letters2 = a2.out_letters(p2);
        for c in a1.out_letters(p1) {
            if !letters2.contains(&c) {
                continue;
            }
            let next2 = a2.out_states(p2, c);
            for n1 in a1.out_states(p1, c) {
                for &n2 in &next2 {
                    let n = pairs.get_or_insert_index((n1, n2));
                    result.add_transition(p, c, n);
                    queue.push(n);
                }
            }
        }
    }

    debug!(
        "product: {} states, {} transitions ({} x {} states in the arguments)",
        result.num_states(),
        result.transitions().len(),
        a1.num_states(),
        a2.num_states()
    );
    (result, pairs)
}

#[cfg(test)]
mod test {
    use super::*;

    // (a|b|c)* abc (a|b|c)*
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

    // words over {a, b, c} with an even number of a's
    fn even_a_automaton() -> Automaton {
        let mut a = Automaton::from_parts(vec![0], vec![(0, 'a', 1), (1, 'a', 0)], vec![0]);
        a.add_transition_labels(0, "bc".chars(), 0);
        a.add_transition_labels(1, "bc".chars(), 1);
        a
    }

    #[test]
    fn test_disjoint_alphabets() {
        let a1 = abc_automaton();
        let a2 = Automaton::from_parts(vec![1], vec![(1, 'd', 1), (1, 'e', 1)], vec![1]);
        let p = intersect(&a1, &a2);
        println!("Product:\n{p}");

        assert!(p.is_empty_language());
        assert!(p.transitions().is_empty());
        assert!(p.alphabet().is_empty());
        assert!(!p.accepts("".chars()));
        assert!(!p.accepts("abc".chars()));
        assert!(!p.accepts("de".chars()));
    }

    #[test]
    fn test_product() {
        let a1 = abc_automaton();
        let a2 = even_a_automaton();
        let (p, pairs) = intersect_with_pairs(&a1, &a2);
        println!(
            "Product:\n{}",
            p.display_with(|q| pairs
                .at(q)
                .map(|(q1, q2)| format!("({q1},{q2})"))
                .unwrap_or_default())
        );

        assert_eq!(pairs.len(), p.num_states());
        assert_eq!(pairs.at(0), Ok(&(1, 0)));
        assert!(p.is_initial(0));

        for w in &["abc", "aabc", "abcca", "cabcab"] {
            let expected = a1.accepts(w.chars()) && a2.accepts(w.chars());
            assert_eq!(p.accepts(w.chars()), expected, "word {w}");
        }
        assert!(p.accepts("aabc".chars()));
        assert!(!p.accepts("abc".chars()));
        assert!(p.accepts("abca".chars()));
    }

    #[test]
    fn test_symbol_missing_on_one_side() {
        // a2 has 'b' in its alphabet but not at its initial state
        let a1 = Automaton::from_parts(vec![0], vec![(0, 'b', 1)], vec![1]);
        let a2 = Automaton::from_parts(vec![0], vec![(0, 'a', 1), (1, 'b', 2)], vec![1, 2]);
        let p = intersect(&a1, &a2);
        assert_eq!(p.alphabet().len(), 1);
        assert!(p.transitions().is_empty());
        assert!(!p.accepts("b".chars()));
    }

    #[test]
    fn test_no_initial_pair() {
        let a1 = Automaton::from_parts(vec![], vec![(0, 'a', 0)], vec![0]);
        let a2 = abc_automaton();
        let p = intersect(&a1, &a2);
        assert_eq!(p.num_states(), 0);
        assert!(p.is_empty_language());
    }
}
