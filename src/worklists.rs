// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

//!
//! Work lists for fixpoint constructions over composite states
//!

use std::hash::Hash;

use crate::indexed_sets::IndexedSet;

///
/// A WorkList holds the elements still to explore (the frontier)
/// and the elements already explored (the treated set).
/// - the push operation adds an element to the frontier if this
///   element is neither in the frontier nor treated. Otherwise, it's a no-op.
/// - the pop operation removes an element from the frontier and marks it treated.
///
/// Elements are popped in no particular order (currently last pushed, first popped).
/// Since an element is never treated twice, a construction that pushes only
/// elements from a finite domain terminates.
///
#[derive(Debug)]
pub struct WorkList<T> {
    frontier: IndexedSet<T>,
    treated: IndexedSet<T>,
}

#[allow(dead_code)]
impl<T: Eq + Hash + Clone> WorkList<T> {
    ///
    /// Create an empty work list
    ///
    pub fn new() -> Self {
        WorkList {
            frontier: IndexedSet::new(),
            treated: IndexedSet::new(),
        }
    }

    ///
    /// Add an element to the frontier if it's not been seen before
    /// - return true if this is a new element
    /// - return false otherwise
    ///
    pub fn push(&mut self, element: T) -> bool {
        if self.treated.contains(&element) {
            false
        } else {
            self.frontier.insert(element)
        }
    }

    ///
    /// Push all elements from an iterator
    ///
    pub fn push_all(&mut self, iter: impl IntoIterator<Item = T>) {
        for x in iter {
            self.push(x);
        }
    }

    ///
    /// Check whether the frontier is empty
    ///
    pub fn is_empty(&self) -> bool {
        self.frontier.is_empty()
    }

    ///
    /// Number of elements in the frontier
    ///
    pub fn len(&self) -> usize {
        self.frontier.len()
    }

    ///
    /// Check whether an element has been popped already
    ///
    pub fn is_treated(&self, element: &T) -> bool {
        self.treated.contains(element)
    }

    ///
    /// Take an element from the frontier and mark it as treated
    /// - return None if the frontier is empty
    ///
    pub fn pop(&mut self) -> Option<T> {
        let element = self.frontier.choose().ok()?;
        self.treated.insert(element.clone());
        Some(element)
    }

    ///
    /// Number of elements treated so far
    ///
    pub fn num_treated(&self) -> usize {
        self.treated.len()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_each_element_is_popped_once() {
        let mut list = WorkList::new();
        assert!(list.push(1));
        assert!(list.push(2));
        assert!(!list.push(1));
        assert_eq!(list.len(), 2);

        let mut popped = Vec::new();
        while let Some(x) = list.pop() {
            popped.push(x);
            // re-pushing treated elements has no effect
            assert!(!list.push(x));
            if x == 2 {
                list.push_all(vec![3, 1, 2]);
            }
        }
        popped.sort_unstable();
        assert_eq!(popped, vec![1, 2, 3]);
        assert_eq!(list.num_treated(), 3);
        assert!(list.is_treated(&3));
        assert!(list.is_empty());
    }
}
