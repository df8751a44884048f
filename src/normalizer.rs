//! Free-form topic phrases to canonical `SCREAMING_SNAKE_CASE` tags.
//!
//! The normalizer is a pure function layer over a fixed, ordered alias
//! vocabulary (see [`vocabulary`](self)), built so that filter-construction
//! callers never need guard code: every operation is total and returns a
//! defined default for empty, odd, or unrecognized input.

mod vocabulary;

use std::collections::HashSet;

use crate::models::TopicTag;

/// Maps free-form topic phrases to the canonical tag vocabulary.
///
/// Matching runs in stages: exact alias lookup, then an ordered substring
/// scan over the alias table, then a per-word exact lookup, and finally a
/// deterministic syntactic transform that always produces a tag. The
/// substring stage resolves ties by table order, which makes short inputs
/// sensitive to the vocabulary's declaration order; the tests pin the
/// resulting behavior explicitly.
pub struct TagNormalizer;

impl TagNormalizer {
    /// Normalizes a single phrase to a canonical tag.
    ///
    /// Returns `None` only for the empty string. Any other input produces a
    /// tag: a vocabulary hit where one exists, otherwise the
    /// [`to_screaming_snake_case`](Self::to_screaming_snake_case) transform
    /// of the raw input. The transform output may fall outside the canonical
    /// vocabulary; downstream filters then simply match nothing.
    ///
    /// # Examples
    ///
    /// ```
    /// use topictag::TagNormalizer;
    ///
    /// assert_eq!(
    ///     TagNormalizer::normalize_topic("  Two Pointers  ").unwrap(),
    ///     "TWO_POINTERS"
    /// );
    /// assert_eq!(TagNormalizer::normalize_topic("dp").unwrap(), "DYNAMIC_PROGRAMMING");
    /// assert_eq!(TagNormalizer::normalize_topic("xyz123!!").unwrap(), "XYZ123");
    /// assert_eq!(TagNormalizer::normalize_topic(""), None);
    /// ```
    #[must_use]
    pub fn normalize_topic(input: &str) -> Option<TopicTag> {
        if input.is_empty() {
            return None;
        }

        let cleaned = input.trim().to_lowercase();

        if let Some(tag) = vocabulary::EXACT.get(cleaned.as_str()) {
            return Some(TopicTag::new(*tag));
        }

        // Ordered scan; first entry with a substring relation in either
        // direction wins. Note an empty `cleaned` (whitespace-only input)
        // is a substring of every key, so the table head decides.
        for &(key, tag) in vocabulary::ALIAS_TABLE {
            if cleaned.contains(key) || key.contains(cleaned.as_str()) {
                return Some(TopicTag::new(tag));
            }
        }

        for word in cleaned.split_whitespace() {
            if let Some(tag) = vocabulary::EXACT.get(word) {
                return Some(TopicTag::new(*tag));
            }
        }

        // The transform runs on the raw input so camelCase boundaries
        // survive the fallback (lowercasing first would erase them).
        Some(TopicTag::new(Self::to_screaming_snake_case(input)))
    }

    /// Normalizes a collection of phrases into a canonical tag set.
    ///
    /// Applies [`normalize_topic`](Self::normalize_topic) to each element,
    /// drops `None` results, and collapses duplicates. An empty collection
    /// yields an empty set.
    ///
    /// # Examples
    ///
    /// ```
    /// use topictag::TagNormalizer;
    ///
    /// let tags = TagNormalizer::normalize_topics(&["loop", "loops", "for loop"]);
    /// assert_eq!(tags.len(), 1);
    /// assert!(tags.contains("LOOPS"));
    /// ```
    #[must_use]
    pub fn normalize_topics<I, S>(topics: I) -> HashSet<TopicTag>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        topics
            .into_iter()
            .filter_map(|topic| Self::normalize_topic(topic.as_ref()))
            .collect()
    }

    /// Suggests canonical tags for a partial phrase.
    ///
    /// Collects every alias with a substring relation to the trimmed,
    /// lower-cased input (in either direction), maps each to its canonical
    /// tag, and returns the de-duplicated results in first-seen table order.
    /// Empty input yields an empty list.
    ///
    /// # Examples
    ///
    /// ```
    /// use topictag::TagNormalizer;
    ///
    /// let suggestions = TagNormalizer::suggest_topics("array");
    /// assert_eq!(
    ///     suggestions,
    ///     vec!["LIST_AND_STRING", "SLIDING_WINDOWS", "1D_ARRAYS", "2D_ARRAYS"]
    /// );
    ///
    /// assert!(TagNormalizer::suggest_topics("").is_empty());
    /// ```
    #[must_use]
    pub fn suggest_topics(input: &str) -> Vec<TopicTag> {
        if input.is_empty() {
            return Vec::new();
        }

        let cleaned = input.trim().to_lowercase();
        let mut seen = HashSet::new();
        let mut suggestions = Vec::new();

        for &(key, tag) in vocabulary::ALIAS_TABLE {
            if (key.contains(cleaned.as_str()) || cleaned.contains(key)) && seen.insert(tag) {
                suggestions.push(TopicTag::new(tag));
            }
        }

        suggestions
    }

    /// True iff `tag` is a member of the canonical vocabulary.
    ///
    /// The check is exact and case-sensitive: only values reachable from the
    /// alias table count, never fallback-transform output.
    ///
    /// # Examples
    ///
    /// ```
    /// use topictag::TagNormalizer;
    ///
    /// assert!(TagNormalizer::is_recognized("LOOPS"));
    /// assert!(!TagNormalizer::is_recognized("loops"));
    /// assert!(!TagNormalizer::is_recognized("NOT_A_REAL_TAG"));
    /// ```
    #[must_use]
    pub fn is_recognized(tag: &str) -> bool {
        vocabulary::CANONICAL.contains(tag)
    }

    /// Converts a phrase to `SCREAMING_SNAKE_CASE`.
    ///
    /// # Transform rules
    ///
    /// - Trims surrounding whitespace
    /// - Characters outside `[A-Za-z0-9]` and whitespace become spaces
    /// - Whitespace runs collapse to single underscores
    /// - An underscore is inserted at each lower-to-upper case boundary
    /// - The result is upper-cased
    ///
    /// Canonical tags are fixed points of this transform, which is how the
    /// catalog canonicalizes stored tag names before comparing them.
    ///
    /// # Examples
    ///
    /// ```
    /// use topictag::TagNormalizer;
    ///
    /// assert_eq!(TagNormalizer::to_screaming_snake_case("fooBarBaz"), "FOO_BAR_BAZ");
    /// assert_eq!(TagNormalizer::to_screaming_snake_case("xyz123!!"), "XYZ123");
    /// assert_eq!(TagNormalizer::to_screaming_snake_case("  graph theory  "), "GRAPH_THEORY");
    /// assert_eq!(TagNormalizer::to_screaming_snake_case("1D_ARRAYS"), "1D_ARRAYS");
    /// assert_eq!(TagNormalizer::to_screaming_snake_case("!!!"), "");
    /// ```
    #[must_use]
    pub fn to_screaming_snake_case(input: &str) -> String {
        let despecialed: String = input
            .trim()
            .chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() || c.is_whitespace() {
                    c
                } else {
                    ' '
                }
            })
            .collect();

        let joined = despecialed.split_whitespace().collect::<Vec<_>>().join("_");

        let mut result = String::with_capacity(joined.len() + 4);
        let mut prev_lower = false;
        for c in joined.chars() {
            if prev_lower && c.is_ascii_uppercase() {
                result.push('_');
            }
            prev_lower = c.is_ascii_lowercase();
            result.push(c.to_ascii_uppercase());
        }

        result
    }

    /// The canonical vocabulary, de-duplicated in first-definition order.
    ///
    /// # Examples
    ///
    /// ```
    /// use topictag::TagNormalizer;
    ///
    /// let topics = TagNormalizer::canonical_topics();
    /// assert_eq!(topics.first(), Some(&"IF_ELSE"));
    /// assert!(topics.contains(&"DYNAMIC_PROGRAMMING"));
    /// ```
    #[must_use]
    pub fn canonical_topics() -> &'static [&'static str] {
        vocabulary::CANONICAL_ORDERED.as_slice()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_alias_hits_win_immediately() {
        assert_eq!(
            TagNormalizer::normalize_topic("loops").unwrap(),
            "LOOPS"
        );
        assert_eq!(
            TagNormalizer::normalize_topic("divide & conquer").unwrap(),
            "BINARY_SEARCH"
        );
        assert_eq!(
            TagNormalizer::normalize_topic("ll node").unwrap(),
            "LINKED_LIST"
        );
    }

    #[test]
    fn matching_is_case_and_whitespace_insensitive() {
        assert_eq!(
            TagNormalizer::normalize_topic("  Two Pointers  ").unwrap(),
            "TWO_POINTERS"
        );
        assert_eq!(
            TagNormalizer::normalize_topic("SLIDING WINDOW").unwrap(),
            "SLIDING_WINDOWS"
        );
        assert_eq!(
            TagNormalizer::normalize_topic("\tBackTracking\n").unwrap(),
            "RECURSION"
        );
    }

    #[test]
    fn every_alias_roundtrips_to_its_canonical_tag() {
        for &(key, tag) in vocabulary::ALIAS_TABLE {
            assert_eq!(
                TagNormalizer::normalize_topic(key).unwrap(),
                tag,
                "alias {key:?} did not normalize to {tag}"
            );
            // Uppercased alias must land on the same tag via the exact stage.
            assert_eq!(
                TagNormalizer::normalize_topic(&key.to_uppercase()).unwrap(),
                tag,
                "uppercased alias {key:?} drifted"
            );
        }
    }

    #[test]
    fn substring_scan_matches_longer_phrases() {
        // Input contains an alias key.
        assert_eq!(
            TagNormalizer::normalize_topic("binary search problems").unwrap(),
            "BINARY_SEARCH"
        );
        // Alias key contains the input.
        assert_eq!(
            TagNormalizer::normalize_topic("slidingwin").unwrap(),
            "SLIDING_WINDOWS"
        );
    }

    #[test]
    fn substring_ties_resolve_by_table_order() {
        // "has" is a substring of "hashset" (SET block) before any
        // HASHTABLES key, so declaration order picks SET.
        assert_eq!(TagNormalizer::normalize_topic("has").unwrap(), "SET");
        // "search" appears first inside "binary search".
        assert_eq!(
            TagNormalizer::normalize_topic("search").unwrap(),
            "BINARY_SEARCH"
        );
        // "pointer" appears first inside "two pointer".
        assert_eq!(
            TagNormalizer::normalize_topic("pointer").unwrap(),
            "TWO_POINTERS"
        );
    }

    #[test]
    fn whitespace_only_input_resolves_to_table_head() {
        // Trimming leaves "", a substring of every key; the first table
        // entry wins. Non-obvious but deliberate behavior.
        assert_eq!(TagNormalizer::normalize_topic("   ").unwrap(), "IF_ELSE");
        assert_eq!(TagNormalizer::normalize_topic("\t\n").unwrap(), "IF_ELSE");
    }

    #[test]
    fn empty_input_returns_none() {
        assert_eq!(TagNormalizer::normalize_topic(""), None);
    }

    #[test]
    fn unrecognized_input_falls_back_to_transform() {
        assert_eq!(
            TagNormalizer::normalize_topic("xyz123!!").unwrap(),
            "XYZ123"
        );
        assert_eq!(
            TagNormalizer::normalize_topic("fooBarBaz").unwrap(),
            "FOO_BAR_BAZ"
        );
    }

    #[test]
    fn all_punctuation_input_yields_empty_tag() {
        // Falls through every stage and the transform strips everything.
        // The resulting empty tag matches no question downstream.
        assert_eq!(TagNormalizer::normalize_topic("!!!").unwrap(), "");
    }

    #[test]
    fn normalize_topics_collapses_duplicates() {
        let tags = TagNormalizer::normalize_topics(&["loop", "loops", "for loop"]);
        assert_eq!(tags.len(), 1);
        assert!(tags.contains("LOOPS"));
    }

    #[test]
    fn normalize_topics_empty_input_yields_empty_set() {
        let tags = TagNormalizer::normalize_topics(std::iter::empty::<&str>());
        assert!(tags.is_empty());
    }

    #[test]
    fn normalize_topics_mixes_vocabulary_and_fallback_tags() {
        let tags = TagNormalizer::normalize_topics(&["bst", "quantum computing"]);
        assert_eq!(tags.len(), 2);
        assert!(tags.contains("BINARY_SEARCH_TREE"));
        assert!(tags.contains("QUANTUM_COMPUTING"));
    }

    #[test]
    fn normalize_topics_accepts_any_string_iterable() {
        let owned = vec![String::from("dp"), String::from("memoization")];
        let tags = TagNormalizer::normalize_topics(owned);
        assert_eq!(tags.len(), 1);
        assert!(tags.contains("DYNAMIC_PROGRAMMING"));

        let mapped =
            TagNormalizer::normalize_topics(["stack", "lifo"].iter().map(|s| s.to_uppercase()));
        assert_eq!(mapped.len(), 1);
        assert!(mapped.contains("STACK"));
    }

    #[test]
    fn suggest_collects_all_matches_in_table_order() {
        // "subarray" sits between the list block and the 1d-array block,
        // so SLIDING_WINDOWS lands second.
        assert_eq!(
            TagNormalizer::suggest_topics("array"),
            vec!["LIST_AND_STRING", "SLIDING_WINDOWS", "1D_ARRAYS", "2D_ARRAYS"]
        );
        assert_eq!(
            TagNormalizer::suggest_topics("sum"),
            vec!["PREFIX_SUM"]
        );
    }

    #[test]
    fn suggest_deduplicates_tags_with_many_matching_aliases() {
        let suggestions = TagNormalizer::suggest_topics("pointer");
        assert_eq!(suggestions, vec!["TWO_POINTERS"]);
    }

    #[test]
    fn suggest_empty_input_yields_nothing() {
        assert!(TagNormalizer::suggest_topics("").is_empty());
    }

    #[test]
    fn suggest_whitespace_only_input_returns_whole_vocabulary() {
        // "" is a substring of every key, so everything matches, in
        // first-seen order.
        let suggestions = TagNormalizer::suggest_topics("   ");
        assert_eq!(suggestions.len(), 19);
        assert_eq!(suggestions[0], "IF_ELSE");
        let expected: Vec<&str> = TagNormalizer::canonical_topics().to_vec();
        let got: Vec<&str> = suggestions.iter().map(|t| t.as_str()).collect();
        assert_eq!(got, expected);
    }

    #[test]
    fn is_recognized_accepts_only_canonical_values() {
        assert!(TagNormalizer::is_recognized("LOOPS"));
        assert!(TagNormalizer::is_recognized("1D_ARRAYS"));
        assert!(!TagNormalizer::is_recognized("NOT_A_REAL_TAG"));
        assert!(!TagNormalizer::is_recognized("loops"));
        assert!(!TagNormalizer::is_recognized(""));
    }

    #[test]
    fn transform_handles_camel_case_boundaries() {
        assert_eq!(
            TagNormalizer::to_screaming_snake_case("fooBarBaz"),
            "FOO_BAR_BAZ"
        );
        assert_eq!(
            TagNormalizer::to_screaming_snake_case("graphTheory101"),
            "GRAPH_THEORY101"
        );
    }

    #[test]
    fn transform_strips_punctuation_and_collapses_whitespace() {
        assert_eq!(TagNormalizer::to_screaming_snake_case("xyz123!!"), "XYZ123");
        assert_eq!(
            TagNormalizer::to_screaming_snake_case("  bit   manipulation  "),
            "BIT_MANIPULATION"
        );
        assert_eq!(
            TagNormalizer::to_screaming_snake_case("segment-tree (lazy)"),
            "SEGMENT_TREE_LAZY"
        );
        assert_eq!(TagNormalizer::to_screaming_snake_case("!!!"), "");
    }

    #[test]
    fn canonical_tags_are_transform_fixed_points() {
        for tag in TagNormalizer::canonical_topics() {
            assert_eq!(
                TagNormalizer::to_screaming_snake_case(tag),
                *tag,
                "canonical tag {tag} is not a transform fixed point"
            );
        }
    }

    #[test]
    fn already_canonical_input_is_stable() {
        // "LOOPS" hits the vocabulary through its lower-cased alias.
        assert_eq!(TagNormalizer::normalize_topic("LOOPS").unwrap(), "LOOPS");
        // A screaming-case phrase with no alias falls through to the
        // transform, which leaves it unchanged.
        assert_eq!(
            TagNormalizer::normalize_topic("SEGMENT_DEMO").unwrap(),
            "SEGMENT_DEMO"
        );
    }

    #[test]
    fn canonical_topics_lists_nineteen_tags_in_definition_order() {
        let topics = TagNormalizer::canonical_topics();
        assert_eq!(topics.len(), 19);
        assert_eq!(topics[0], "IF_ELSE");
        assert_eq!(topics[1], "LOOPS");
        assert_eq!(topics[18], "BINARY_SEARCH_TREE");
    }
}
