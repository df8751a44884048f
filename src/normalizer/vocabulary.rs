//! The built-in alias vocabulary.
//!
//! `ALIAS_TABLE` is deliberately an ordered slice, not a map: the substring
//! scan in `TagNormalizer::normalize_topic` resolves ambiguous inputs by
//! declaration order, first entry wins. Reordering entries changes observable
//! results for short or ambiguous phrases, so treat the order as part of the
//! vocabulary, not an implementation detail.

use once_cell::sync::Lazy;
use std::collections::{HashMap, HashSet};

/// Lower-cased alias phrase to canonical tag, in precedence order.
pub(super) const ALIAS_TABLE: &[(&str, &str)] = &[
    // control flow
    ("if else", "IF_ELSE"),
    ("if-else", "IF_ELSE"),
    ("if/else", "IF_ELSE"),
    ("conditional", "IF_ELSE"),
    ("conditionals", "IF_ELSE"),
    // loops
    ("loop", "LOOPS"),
    ("loops", "LOOPS"),
    ("for loop", "LOOPS"),
    ("while loop", "LOOPS"),
    ("iteration", "LOOPS"),
    ("iterative", "LOOPS"),
    // nested loops
    ("nested loop", "NESTED_LOOP"),
    ("nested loops", "NESTED_LOOP"),
    ("nested iteration", "NESTED_LOOP"),
    ("double loop", "NESTED_LOOP"),
    ("triple loop", "NESTED_LOOP"),
    // lists and strings
    ("list", "LIST_AND_STRING"),
    ("lists", "LIST_AND_STRING"),
    ("string", "LIST_AND_STRING"),
    ("strings", "LIST_AND_STRING"),
    ("array", "LIST_AND_STRING"),
    ("arrays", "LIST_AND_STRING"),
    ("list and string", "LIST_AND_STRING"),
    ("list & string", "LIST_AND_STRING"),
    // two pointers
    ("two pointer", "TWO_POINTERS"),
    ("two pointers", "TWO_POINTERS"),
    ("2 pointer", "TWO_POINTERS"),
    ("2 pointers", "TWO_POINTERS"),
    ("dual pointer", "TWO_POINTERS"),
    ("dual pointers", "TWO_POINTERS"),
    ("fast slow", "TWO_POINTERS"),
    ("fast slow pointer", "TWO_POINTERS"),
    ("slow fast", "TWO_POINTERS"),
    ("slow fast pointer", "TWO_POINTERS"),
    // prefix sums
    ("prefix sum", "PREFIX_SUM"),
    ("prefixsum", "PREFIX_SUM"),
    ("cumulative sum", "PREFIX_SUM"),
    ("running sum", "PREFIX_SUM"),
    ("partial sum", "PREFIX_SUM"),
    // binary search
    ("binary search", "BINARY_SEARCH"),
    ("binarysearch", "BINARY_SEARCH"),
    ("binsearch", "BINARY_SEARCH"),
    ("bisection", "BINARY_SEARCH"),
    ("divide and conquer", "BINARY_SEARCH"),
    ("divide & conquer", "BINARY_SEARCH"),
    // sliding windows
    ("sliding window", "SLIDING_WINDOWS"),
    ("slidingwindow", "SLIDING_WINDOWS"),
    ("window", "SLIDING_WINDOWS"),
    ("windows", "SLIDING_WINDOWS"),
    ("subarray", "SLIDING_WINDOWS"),
    ("substring", "SLIDING_WINDOWS"),
    ("contiguous", "SLIDING_WINDOWS"),
    // 1d arrays
    ("1d array", "1D_ARRAYS"),
    ("1d arrays", "1D_ARRAYS"),
    ("one dimensional array", "1D_ARRAYS"),
    ("one dimensional arrays", "1D_ARRAYS"),
    ("single dimension", "1D_ARRAYS"),
    ("linear array", "1D_ARRAYS"),
    ("linear arrays", "1D_ARRAYS"),
    // 2d arrays
    ("2d array", "2D_ARRAYS"),
    ("2d arrays", "2D_ARRAYS"),
    ("two dimensional array", "2D_ARRAYS"),
    ("two dimensional arrays", "2D_ARRAYS"),
    ("matrix", "2D_ARRAYS"),
    ("matrices", "2D_ARRAYS"),
    ("grid", "2D_ARRAYS"),
    ("table", "2D_ARRAYS"),
    // recursion
    ("recursion", "RECURSION"),
    ("recursive", "RECURSION"),
    ("recursively", "RECURSION"),
    ("backtrack", "RECURSION"),
    ("backtracking", "RECURSION"),
    ("dfs", "RECURSION"),
    ("depth first search", "RECURSION"),
    // dynamic programming
    ("dynamic programming", "DYNAMIC_PROGRAMMING"),
    ("dynamicprogramming", "DYNAMIC_PROGRAMMING"),
    ("dp", "DYNAMIC_PROGRAMMING"),
    ("memoization", "DYNAMIC_PROGRAMMING"),
    ("memo", "DYNAMIC_PROGRAMMING"),
    ("tabulation", "DYNAMIC_PROGRAMMING"),
    ("bottom up", "DYNAMIC_PROGRAMMING"),
    ("top down", "DYNAMIC_PROGRAMMING"),
    // linked lists
    ("linked list", "LINKED_LIST"),
    ("linkedlist", "LINKED_LIST"),
    ("singly linked", "LINKED_LIST"),
    ("doubly linked", "LINKED_LIST"),
    ("ll node", "LINKED_LIST"),
    ("ll nodes", "LINKED_LIST"),
    // stacks
    ("stack", "STACK"),
    ("stacks", "STACK"),
    ("lifo", "STACK"),
    ("last in first out", "STACK"),
    ("push pop", "STACK"),
    // sets
    ("set", "SET"),
    ("sets", "SET"),
    ("unique", "SET"),
    ("distinct", "SET"),
    ("hashset", "SET"),
    // dictionaries
    ("dictionary", "DICTIONARY"),
    ("dict", "DICTIONARY"),
    ("key value", "DICTIONARY"),
    ("key-value", "DICTIONARY"),
    ("key value pair", "DICTIONARY"),
    ("key-value pair", "DICTIONARY"),
    // hash tables
    ("hash table", "HASHTABLES"),
    ("hashtable", "HASHTABLES"),
    ("hash", "HASHTABLES"),
    ("hashing", "HASHTABLES"),
    ("hashmap", "HASHTABLES"),
    ("hash map", "HASHTABLES"),
    // binary trees
    ("binary tree", "BINARY_TREE"),
    ("binarytree", "BINARY_TREE"),
    ("tree", "BINARY_TREE"),
    ("trees", "BINARY_TREE"),
    ("bt", "BINARY_TREE"),
    ("tree node", "BINARY_TREE"),
    ("tree nodes", "BINARY_TREE"),
    // binary search trees
    ("binary search tree", "BINARY_SEARCH_TREE"),
    ("binarysearchtree", "BINARY_SEARCH_TREE"),
    ("bst", "BINARY_SEARCH_TREE"),
    ("sorted tree", "BINARY_SEARCH_TREE"),
    ("ordered tree", "BINARY_SEARCH_TREE"),
    // common variations folded into the nearest family
    ("array problem", "1D_ARRAYS"),
    ("array problems", "1D_ARRAYS"),
    ("string problem", "LIST_AND_STRING"),
    ("string problems", "LIST_AND_STRING"),
    ("tree problem", "BINARY_TREE"),
    ("tree problems", "BINARY_TREE"),
    ("graph", "BINARY_TREE"),
    ("graphs", "BINARY_TREE"),
    ("sorting", "1D_ARRAYS"),
    ("searching", "BINARY_SEARCH"),
    ("greedy", "DYNAMIC_PROGRAMMING"),
    ("greedy algorithm", "DYNAMIC_PROGRAMMING"),
    ("queue", "STACK"),
    ("queues", "STACK"),
    ("heap", "BINARY_TREE"),
    ("heaps", "BINARY_TREE"),
    ("union find", "1D_ARRAYS"),
    ("union-find", "1D_ARRAYS"),
    ("disjoint set", "1D_ARRAYS"),
    ("disjoint sets", "1D_ARRAYS"),
];

/// Exact-match index over `ALIAS_TABLE`.
pub(super) static EXACT: Lazy<HashMap<&'static str, &'static str>> =
    Lazy::new(|| ALIAS_TABLE.iter().copied().collect());

/// The closed set of canonical tags, for membership checks.
pub(super) static CANONICAL: Lazy<HashSet<&'static str>> =
    Lazy::new(|| ALIAS_TABLE.iter().map(|&(_, tag)| tag).collect());

/// Canonical tags de-duplicated in first-definition order.
pub(super) static CANONICAL_ORDERED: Lazy<Vec<&'static str>> = Lazy::new(|| {
    let mut seen = HashSet::new();
    ALIAS_TABLE
        .iter()
        .map(|&(_, tag)| tag)
        .filter(|tag| seen.insert(*tag))
        .collect()
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_has_expected_size() {
        assert_eq!(ALIAS_TABLE.len(), 142);
        assert_eq!(CANONICAL_ORDERED.len(), 19);
    }

    #[test]
    fn keys_are_lowercase_trimmed_and_unique() {
        let mut seen = HashSet::new();
        for &(key, _) in ALIAS_TABLE {
            assert!(!key.is_empty(), "empty alias key");
            assert_eq!(key, key.trim(), "untrimmed alias key: {key:?}");
            assert_eq!(key, key.to_lowercase(), "non-lowercase alias key: {key:?}");
            assert!(seen.insert(key), "duplicate alias key: {key:?}");
        }
    }

    #[test]
    fn values_are_screaming_snake_case() {
        for &(_, tag) in ALIAS_TABLE {
            assert!(
                tag.chars()
                    .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit() || c == '_'),
                "unexpected character in canonical tag {tag:?}"
            );
            assert!(!tag.starts_with('_') && !tag.ends_with('_'));
        }
    }

    #[test]
    fn first_entry_resolves_empty_substring_matches() {
        // Whitespace-only inputs trim to "", which every key contains, so
        // the head of the table decides the result.
        assert_eq!(ALIAS_TABLE[0], ("if else", "IF_ELSE"));
    }

    #[test]
    fn exact_index_covers_every_alias() {
        assert_eq!(EXACT.len(), ALIAS_TABLE.len());
        for &(key, tag) in ALIAS_TABLE {
            assert_eq!(EXACT.get(key), Some(&tag));
        }
    }

    #[test]
    fn canonical_ordered_matches_membership_set() {
        assert_eq!(CANONICAL_ORDERED.len(), CANONICAL.len());
        for tag in CANONICAL_ORDERED.iter() {
            assert!(CANONICAL.contains(tag));
        }
    }
}
