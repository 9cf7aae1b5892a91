// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

//!
//! Indexed sets: deduplicating containers that keep insertion order
//!
//! Each element of an [IndexedSet] has an index: its position in insertion
//! order. The function [get_or_insert_index](IndexedSet::get_or_insert_index)
//! turns a set into an identity map from arbitrary values (pairs of states,
//! sets of states) to compact integers. This is how the product and subset
//! constructions assign state numbers to the composite states they build.
//!
//! Two indexed sets are equal if they contain the same elements, irrespective
//! of insertion order. Hashing is consistent with this equality, so sets can
//! themselves be elements of an indexed set.
//!

use std::{
    collections::hash_map::DefaultHasher,
    fmt::Display,
    hash::{Hash, Hasher},
    iter::FromIterator,
};

use indexmap::IndexSet;

use crate::errors::Error;

///
/// A set of distinct elements stored in insertion order
/// - insertion, membership test, and index lookup are O(1) on average
/// - removal preserves the order of the remaining elements
///
/// The index of an element is stable as long as no element before it
/// is removed. Removing the last element (e.g., with [choose](Self::choose))
/// does not change any other index.
///
#[derive(Debug, Clone)]
pub struct IndexedSet<T> {
    elements: IndexSet<T>,
}

impl<T> Default for IndexedSet<T> {
    fn default() -> Self {
        IndexedSet {
            elements: IndexSet::default(),
        }
    }
}

impl<T: Eq + Hash> IndexedSet<T> {
    ///
    /// Create an empty set
    ///
    pub fn new() -> Self {
        Self::default()
    }

    ///
    /// Create an empty set with room for `capacity` elements
    ///
    pub fn with_capacity(capacity: usize) -> Self {
        IndexedSet {
            elements: IndexSet::with_capacity(capacity),
        }
    }

    /// Number of elements
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Check whether the set is empty
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Check whether `e` is in the set
    pub fn contains(&self, e: &T) -> bool {
        self.elements.contains(e)
    }

    ///
    /// Add element `e` at the end of the set
    /// - no effect if `e` is already present
    /// - return true if `e` is new
    ///
    pub fn insert(&mut self, e: T) -> bool {
        self.elements.insert(e)
    }

    ///
    /// Add all elements produced by an iterator
    ///
    pub fn insert_all(&mut self, iter: impl IntoIterator<Item = T>) {
        for e in iter {
            self.insert(e);
        }
    }

    ///
    /// Remove element `e`
    /// - no effect if `e` is not present
    /// - return true if `e` was removed
    ///
    pub fn remove(&mut self, e: &T) -> bool {
        self.elements.shift_remove(e)
    }

    ///
    /// Remove all elements produced by an iterator
    ///
    pub fn remove_all<'a>(&mut self, iter: impl IntoIterator<Item = &'a T>)
    where
        T: 'a,
    {
        for e in iter {
            self.remove(e);
        }
    }

    /// Remove all elements
    pub fn clear(&mut self) {
        self.elements.clear()
    }

    ///
    /// Element at index i
    ///
    /// # Errors
    ///
    /// If i is not less than the set size, produce [Error::IndexOutOfRange].
    ///
    pub fn at(&self, i: usize) -> Result<&T, Error> {
        self.elements.get_index(i).ok_or(Error::IndexOutOfRange)
    }

    ///
    /// Index of element `e`
    ///
    /// # Errors
    ///
    /// If `e` is not in the set, produce [Error::NotFound].
    ///
    pub fn index_of(&self, e: &T) -> Result<usize, Error> {
        self.elements.get_index_of(e).ok_or(Error::NotFound)
    }

    ///
    /// Index of element `e`, adding `e` at the end of the set if it's not present
    ///
    /// This never fails: two equal elements always get the same index
    /// and two distinct elements never share an index.
    ///
    pub fn get_or_insert_index(&mut self, e: T) -> usize {
        self.elements.insert_full(e).0
    }

    ///
    /// Remove and return the most recently inserted element
    ///
    /// # Errors
    ///
    /// If the set is empty, produce [Error::EmptyCollection].
    ///
    pub fn choose(&mut self) -> Result<T, Error> {
        self.elements.pop().ok_or(Error::EmptyCollection)
    }

    ///
    /// The element [choose](Self::choose) would return, without removing it
    ///
    /// # Errors
    ///
    /// If the set is empty, produce [Error::EmptyCollection].
    ///
    pub fn peek(&self) -> Result<&T, Error> {
        self.elements.last().ok_or(Error::EmptyCollection)
    }

    ///
    /// Iterator in insertion order
    ///
    pub fn iter(&self) -> indexmap::set::Iter<'_, T> {
        self.elements.iter()
    }

    /// Check whether all elements of self are in other
    pub fn is_subset(&self, other: &Self) -> bool {
        self.len() <= other.len() && self.iter().all(|e| other.contains(e))
    }

    /// Check whether self and other have a common element
    pub fn intersects(&self, other: &Self) -> bool {
        let (small, large) = if self.len() <= other.len() {
            (self, other)
        } else {
            (other, self)
        };
        small.iter().any(|e| large.contains(e))
    }
}

impl<T: Eq + Hash + Clone> IndexedSet<T> {
    ///
    /// Union: elements of self followed by the new elements of other
    ///
    pub fn union(&self, other: &Self) -> Self {
        let mut result = self.clone();
        result.insert_all(other.iter().cloned());
        result
    }

    ///
    /// Intersection: elements of self that are also in other
    ///
    pub fn intersection(&self, other: &Self) -> Self {
        self.iter().filter(|e| other.contains(e)).cloned().collect()
    }

    ///
    /// Difference: elements of self that are not in other
    ///
    pub fn difference(&self, other: &Self) -> Self {
        self.iter().filter(|e| !other.contains(e)).cloned().collect()
    }
}

impl<T: Eq + Hash> PartialEq for IndexedSet<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.is_subset(other)
    }
}

impl<T: Eq + Hash> Eq for IndexedSet<T> {}

//
// Equal sets may list their elements in different orders so
// the element hashes are combined with a commutative operation.
//
impl<T: Hash> Hash for IndexedSet<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        let mut sum: u64 = 0;
        for e in &self.elements {
            let mut h = DefaultHasher::new();
            e.hash(&mut h);
            sum = sum.wrapping_add(h.finish());
        }
        self.elements.len().hash(state);
        sum.hash(state);
    }
}

impl<T: Eq + Hash> FromIterator<T> for IndexedSet<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        IndexedSet {
            elements: iter.into_iter().collect(),
        }
    }
}

impl<T: Eq + Hash> Extend<T> for IndexedSet<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.insert_all(iter)
    }
}

impl<T: Eq + Hash> From<Vec<T>> for IndexedSet<T> {
    fn from(v: Vec<T>) -> Self {
        v.into_iter().collect()
    }
}

impl<'a, T> IntoIterator for &'a IndexedSet<T> {
    type Item = &'a T;
    type IntoIter = indexmap::set::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}

impl<T> IntoIterator for IndexedSet<T> {
    type Item = T;
    type IntoIter = indexmap::set::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.into_iter()
    }
}

impl<T: Display> Display for IndexedSet<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{{")?;
        for (i, e) in self.elements.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{e}")?;
        }
        write!(f, "}}")
    }
}
