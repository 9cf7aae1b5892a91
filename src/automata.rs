// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

//!
//! Nondeterministic finite-state automata
//!
//! States are indexed by an integer from 0 to N-1 where N is the number of states.
//! An automaton is a tuple (N, alphabet, transitions, initial states, final states),
//! where every component except N is an [IndexedSet].
//!
//! Construction is monotonic: states, symbols, and transitions can be added but never
//! removed. Adding a transition, an initial state, or a final state that refers to a state
//! `q >= N` grows N to `q + 1`. Adding a transition labeled by a symbol that's not in the
//! alphabet adds this symbol to the alphabet. Nothing is ever rejected.
//!
//! The algorithms in [reachability](crate::reachability), [trim](crate::trim),
//! [product](crate::product), [determinization](crate::determinization), and
//! [complement](crate::complement) take automata by reference and build new automata.
//!
use std::fmt::Display;

use crate::{
    complement, determinization, indexed_sets::IndexedSet, product, reachability, trim,
};

/// States are integers in the range 0 .. N-1
pub type StateId = usize;

/// Alphabet symbols
pub type Symbol = char;

/// Set of states
pub type StateSet = IndexedSet<StateId>;

///
/// Reserved symbol for epsilon transitions
///
/// No algorithm in this crate computes epsilon closures: a transition labeled
/// by EPSILON is treated like a transition on any other symbol. In particular,
/// [determinize](crate::determinization::determinize) and
/// [intersect](crate::product::intersect) do not give the expected result on
/// automata with epsilon transitions.
///
pub const EPSILON: Symbol = '\0';

///
/// Transition `source -label-> target`
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Transition {
    /// Source state
    pub source: StateId,
    /// Symbol
    pub label: Symbol,
    /// Destination state
    pub target: StateId,
}

impl Transition {
    /// Construct transition source -label-> target
    pub fn new(source: StateId, label: Symbol, target: StateId) -> Self {
        Transition {
            source,
            label,
            target,
        }
    }
}

impl From<(StateId, Symbol, StateId)> for Transition {
    fn from((source, label, target): (StateId, Symbol, StateId)) -> Self {
        Transition::new(source, label, target)
    }
}

// print epsilon as ε
struct SymbolDisplay(Symbol);

impl Display for SymbolDisplay {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.0 == EPSILON {
            write!(f, "\u{03B5}")
        } else {
            write!(f, "{}", self.0)
        }
    }
}

impl Display for Transition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} -{}-> {}",
            self.source,
            SymbolDisplay(self.label),
            self.target
        )
    }
}

///
/// Nondeterministic finite state automaton
///
/// Two automata are equal if they have the same number of states and the same
/// alphabet, transitions, initial states, and final states (as sets).
///
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Automaton {
    // number of states: the states are 0 .. num_states-1
    num_states: usize,
    alphabet: IndexedSet<Symbol>,
    transitions: IndexedSet<Transition>,
    initial: StateSet,
    finals: StateSet,
}

impl Automaton {
    ///
    /// Create an empty automaton: no states, empty alphabet
    ///
    pub fn new() -> Self {
        Self::default()
    }

    ///
    /// Build an automaton from lists of initial states, transitions, and final states
    ///
    /// The alphabet is the set of symbols used in the transitions.
    ///
    pub fn from_parts(
        initial: impl IntoIterator<Item = StateId>,
        transitions: impl IntoIterator<Item = (StateId, Symbol, StateId)>,
        finals: impl IntoIterator<Item = StateId>,
    ) -> Self {
        let mut result = Automaton::new();
        result.add_initials(initial);
        result.add_transitions(transitions.into_iter().map(Transition::from));
        result.add_finals(finals);
        result
    }

    // make sure q is a state: grow num_states if needed
    fn observe_state(&mut self, q: StateId) {
        if q >= self.num_states {
            self.num_states = q + 1;
        }
    }

    ///
    /// Add a fresh state and return it
    ///
    pub fn new_state(&mut self) -> StateId {
        let q = self.num_states;
        self.num_states += 1;
        q
    }

    /// Mark q as an initial state
    pub fn add_initial(&mut self, q: StateId) {
        self.observe_state(q);
        self.initial.insert(q);
    }

    /// Mark several states as initial
    pub fn add_initials(&mut self, states: impl IntoIterator<Item = StateId>) {
        for q in states {
            self.add_initial(q)
        }
    }

    /// Mark q as a final state
    pub fn add_final(&mut self, q: StateId) {
        self.observe_state(q);
        self.finals.insert(q);
    }

    /// Mark several states as final
    pub fn add_finals(&mut self, states: impl IntoIterator<Item = StateId>) {
        for q in states {
            self.add_final(q)
        }
    }

    /// Add a symbol to the alphabet
    pub fn add_symbol(&mut self, c: Symbol) {
        self.alphabet.insert(c);
    }

    /// Add several symbols to the alphabet
    pub fn add_symbols(&mut self, symbols: impl IntoIterator<Item = Symbol>) {
        self.alphabet.insert_all(symbols)
    }

    ///
    /// Add transition source -c-> target
    /// - source and target become states of the automaton if they're not already
    /// - c is added to the alphabet
    ///
    pub fn add_transition(&mut self, source: StateId, c: Symbol, target: StateId) {
        self.observe_state(source);
        self.observe_state(target);
        self.add_symbol(c);
        self.transitions.insert(Transition::new(source, c, target));
    }

    /// Add several transitions
    pub fn add_transitions(&mut self, transitions: impl IntoIterator<Item = Transition>) {
        for t in transitions {
            self.add_transition(t.source, t.label, t.target)
        }
    }

    ///
    /// Add transitions source -c-> target for every c in labels
    ///
    pub fn add_transition_labels(
        &mut self,
        source: StateId,
        labels: impl IntoIterator<Item = Symbol>,
        target: StateId,
    ) {
        for c in labels {
            self.add_transition(source, c, target)
        }
    }

    /// Number of states
    pub fn num_states(&self) -> usize {
        self.num_states
    }

    /// Iterator to go through the states
    pub fn states(&self) -> std::ops::Range<StateId> {
        0..self.num_states
    }

    /// Initial states
    pub fn initial_states(&self) -> &StateSet {
        &self.initial
    }

    /// Final states
    pub fn final_states(&self) -> &StateSet {
        &self.finals
    }

    /// Alphabet
    pub fn alphabet(&self) -> &IndexedSet<Symbol> {
        &self.alphabet
    }

    /// Set of all transitions
    pub fn transitions(&self) -> &IndexedSet<Transition> {
        &self.transitions
    }

    /// Check whether q is an initial state
    pub fn is_initial(&self, q: StateId) -> bool {
        self.initial.contains(&q)
    }

    /// Check whether q is a final state
    pub fn is_final(&self, q: StateId) -> bool {
        self.finals.contains(&q)
    }

    ///
    /// Symbols c such that there's a transition q -c-> p for some p
    ///
    /// This scans all transitions.
    ///
    pub fn out_letters(&self, q: StateId) -> IndexedSet<Symbol> {
        self.transitions
            .iter()
            .filter(|t| t.source == q)
            .map(|t| t.label)
            .collect()
    }

    ///
    /// States p such that q -c-> p is a transition
    ///
    /// This scans all transitions.
    ///
    pub fn out_states(&self, q: StateId, c: Symbol) -> StateSet {
        self.transitions
            .iter()
            .filter(|t| t.source == q && t.label == c)
            .map(|t| t.target)
            .collect()
    }

    ///
    /// Symbols c such that there's a transition p -c-> q for some p
    ///
    /// This scans all transitions.
    ///
    pub fn in_letters(&self, q: StateId) -> IndexedSet<Symbol> {
        self.transitions
            .iter()
            .filter(|t| t.target == q)
            .map(|t| t.label)
            .collect()
    }

    ///
    /// States p such that p -c-> q is a transition
    ///
    /// This scans all transitions.
    ///
    pub fn in_states(&self, c: Symbol, q: StateId) -> StateSet {
        self.transitions
            .iter()
            .filter(|t| t.label == c && t.target == q)
            .map(|t| t.source)
            .collect()
    }

    /// Check whether a word is accepted
    pub fn accepts(&self, word: impl IntoIterator<Item = Symbol>) -> bool {
        reachability::accepts(self, word)
    }

    /// Check whether the automaton accepts no word
    pub fn is_empty_language(&self) -> bool {
        reachability::is_empty_language(self)
    }

    /// Automaton without useless states
    pub fn trim(&self) -> Automaton {
        trim::trim(self)
    }

    /// Product automaton: accepts the words accepted by both self and other
    pub fn intersect(&self, other: &Automaton) -> Automaton {
        product::intersect(self, other)
    }

    /// Equivalent deterministic automaton
    pub fn determinize(&self) -> Automaton {
        determinization::determinize(self)
    }

    /// Automaton for the complement language (relative to the alphabet)
    pub fn complement(&self) -> Automaton {
        complement::complement(self)
    }

    ///
    /// Display the automaton with state names given by a labeling function
    ///
    /// For example, after a subset construction, states can be displayed
    /// as the sets of states they represent:
    /// ```
    /// use indexed_automata::{automata::Automaton, determinization::determinize_with_subsets};
    ///
    /// let nfa = Automaton::from_parts(vec![0], vec![(0, 'a', 0), (0, 'a', 1)], vec![1]);
    /// let (dfa, subsets) = determinize_with_subsets(&nfa);
    /// let text = dfa
    ///     .display_with(|q| subsets.at(q).map(|s| s.to_string()).unwrap_or_default())
    ///     .to_string();
    /// assert!(text.contains("{0} -a-> {0, 1}"));
    /// ```
    ///
    pub fn display_with<F>(&self, label: F) -> LabeledAutomaton<'_, F>
    where
        F: Fn(StateId) -> String,
    {
        LabeledAutomaton {
            automaton: self,
            label,
        }
    }

    // common rendering code for Display and LabeledAutomaton
    fn render(
        &self,
        f: &mut std::fmt::Formatter<'_>,
        label: &dyn Fn(StateId) -> String,
    ) -> std::fmt::Result {
        fn write_states(
            f: &mut std::fmt::Formatter<'_>,
            states: &StateSet,
            label: &dyn Fn(StateId) -> String,
        ) -> std::fmt::Result {
            write!(f, "{{")?;
            for (i, &q) in states.iter().enumerate() {
                if i > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{}", label(q))?;
            }
            writeln!(f, "}}")
        }

        writeln!(f, "Number of states: {}", self.num_states)?;
        write!(f, "Initial states: ")?;
        write_states(f, &self.initial, label)?;
        write!(f, "Alphabet: {{")?;
        for (i, &c) in self.alphabet.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", SymbolDisplay(c))?;
        }
        writeln!(f, "}}")?;
        writeln!(f, "Transitions: {{")?;
        for t in &self.transitions {
            writeln!(
                f,
                "  {} -{}-> {}",
                label(t.source),
                SymbolDisplay(t.label),
                label(t.target)
            )?;
        }
        writeln!(f, "}}")?;
        write!(f, "Final states: ")?;
        write_states(f, &self.finals, label)
    }
}

impl Display for Automaton {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.render(f, &|q| q.to_string())
    }
}

///
/// Display adaptor returned by [display_with](Automaton::display_with)
///
pub struct LabeledAutomaton<'a, F> {
    automaton: &'a Automaton,
    label: F,
}

impl<'a, F> std::fmt::Debug for LabeledAutomaton<'a, F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LabeledAutomaton")
            .field("automaton", self.automaton)
            .finish_non_exhaustive()
    }
}

impl<'a, F: Fn(StateId) -> String> Display for LabeledAutomaton<'a, F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.automaton.render(f, &self.label)
    }
}
