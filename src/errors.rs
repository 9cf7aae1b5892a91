// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

//!
//! Error codes
//!

#[derive(Debug, PartialEq, Eq, Clone, Copy, thiserror::Error)]
///
/// Error codes produced by the partial operations on indexed sets
///
/// The automaton algorithms never produce these errors: they only
/// use total operations on sets (see [get_or_insert_index](crate::indexed_sets::IndexedSet::get_or_insert_index)).
///
pub enum Error {
    /// A position was queried beyond the size of a set.
    #[error("index out of range")]
    IndexOutOfRange,

    /// The index of an element was requested but the element is not in the set.
    #[error("element not found")]
    NotFound,

    /// An element was extracted or inspected from an empty set.
    #[error("empty collection")]
    EmptyCollection,
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn error_messages() {
        assert_eq!(Error::IndexOutOfRange.to_string(), "index out of range");
        assert_eq!(Error::NotFound.to_string(), "element not found");
        assert_eq!(Error::EmptyCollection.to_string(), "empty collection");
    }
}
