// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

//! Nondeterministic finite automata and classical algorithms on them
//!
//! # Overview
//!
//! Module [automata](crate::automata) defines the [Automaton](crate::automata::Automaton)
//! type: a nondeterministic automaton whose states are integers 0 to N-1 and whose symbols
//! are characters. Automata are built incrementally, and the number of states grows as
//! transitions, initial states, and final states are added.
//!
//! All sets in an automaton are [IndexedSet](crate::indexed_sets::IndexedSet)s:
//! deduplicating containers that keep insertion order and give each element an index.
//!
//! The algorithms take automata by reference and produce new automata:
//! - [reachability](crate::reachability): successors of a set of states, forward and
//!   backward closures, membership test, emptiness check
//! - [trim](crate::trim): removal of useless states
//! - [product](crate::product): intersection by product construction
//! - [determinization](crate::determinization): subset construction
//! - [complement](crate::complement): completion with a sink state and complementation
//!
//! ```
//! use indexed_automata::automata::Automaton;
//!
//! // words over {a, b, c} that contain abc
//! let mut a = Automaton::from_parts(vec![1], vec![(1, 'a', 2), (2, 'b', 3), (3, 'c', 4)], vec![4]);
//! a.add_transition_labels(1, "abc".chars(), 1);
//! a.add_transition_labels(4, "abc".chars(), 4);
//!
//! assert!(a.accepts("abbabca".chars()));
//! assert!(!a.accepts("aaaabbb".chars()));
//!
//! let c = a.complement();
//! assert!(c.accepts("aaaabbb".chars()));
//! ```
//!

#![warn(missing_docs, missing_debug_implementations, rust_2018_idioms)]

pub mod automata;
pub mod complement;
pub mod determinization;
pub mod errors;
pub mod indexed_sets;
pub mod product;
pub mod reachability;
pub mod trim;

mod worklists;

#[cfg(test)]
mod tests;
