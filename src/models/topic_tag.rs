use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;

/// A canonical topic identifier in `SCREAMING_SNAKE_CASE`.
///
/// Values come from two places only: the built-in alias vocabulary, or the
/// deterministic fallback transform applied to unrecognized phrases. Question
/// records carry these as their topic tags, and filters compare them by exact
/// string equality.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TopicTag(String);

impl TopicTag {
    /// Creates a tag from a canonical string.
    ///
    /// # Examples
    ///
    /// ```
    /// use topictag::TopicTag;
    ///
    /// let tag = TopicTag::new("LOOPS");
    /// assert_eq!(tag.as_str(), "LOOPS");
    /// ```
    pub fn new(tag: impl Into<String>) -> Self {
        Self(tag.into())
    }

    /// Returns the tag as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the tag and returns the underlying string.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for TopicTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// Allows `HashSet<TopicTag>` lookups with a plain `&str` key.
impl Borrow<str> for TopicTag {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for TopicTag {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for TopicTag {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}
