use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use super::{Difficulty, Platform, QuestionId, TopicTag};
use crate::utils::slug_to_title;

/// A practice question from the external bank.
///
/// Questions arrive in memory from an external source (a JSON bank file in
/// the CLI). Each question carries canonical topic tags and optional
/// per-platform URLs; a missing or empty URL means the question is not
/// hosted on that platform.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    /// Opaque identifier from the external source.
    pub id: QuestionId,
    /// URL-safe name, e.g. `two-sum`.
    pub slug: String,
    /// Difficulty grade.
    pub difficulty: Difficulty,
    /// Points awarded for solving.
    #[serde(default)]
    pub points: i64,
    /// Problem URL on LeetCode, if hosted there.
    #[serde(default)]
    pub leetcode_url: Option<String>,
    /// Problem URL on CodeChef, if hosted there.
    #[serde(default)]
    pub codechef_url: Option<String>,
    /// Problem URL on Codeforces, if hosted there.
    #[serde(default)]
    pub codeforces_url: Option<String>,
    /// Whether the question is in the practice arena rotation.
    #[serde(default)]
    pub in_arena: bool,
    /// When the question entered the arena rotation.
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub arena_added_at: Option<OffsetDateTime>,
    /// When this question was created.
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    /// Canonical topic tags.
    #[serde(default)]
    pub tags: Vec<TopicTag>,
}

impl Question {
    /// Returns the question's URL on the given platform.
    ///
    /// Empty strings count as absent, matching how upstream records encode
    /// "not hosted here".
    pub fn url_for(&self, platform: Platform) -> Option<&str> {
        let url = match platform {
            Platform::Leetcode => self.leetcode_url.as_deref(),
            Platform::Codechef => self.codechef_url.as_deref(),
            Platform::Codeforces => self.codeforces_url.as_deref(),
        };
        url.filter(|u| !u.is_empty())
    }

    /// Renders a human-readable title from the slug.
    ///
    /// # Examples
    ///
    /// ```
    /// use topictag::QuestionBuilder;
    ///
    /// let question = QuestionBuilder::new()
    ///     .id("q1")
    ///     .slug("two-sum")
    ///     .build();
    /// assert_eq!(question.title(), "Two Sum");
    /// ```
    pub fn title(&self) -> String {
        slug_to_title(&self.slug)
    }
}

/// Builder for constructing `Question` instances with optional fields.
///
/// # Examples
///
/// ```
/// use topictag::{Difficulty, QuestionBuilder, TopicTag};
///
/// let question = QuestionBuilder::new()
///     .id("q1")
///     .slug("valid-parentheses")
///     .difficulty(Difficulty::Easy)
///     .tags(vec![TopicTag::new("STACK")])
///     .build();
///
/// assert_eq!(question.slug, "valid-parentheses");
/// assert_eq!(question.difficulty, Difficulty::Easy);
/// assert_eq!(question.tags, vec![TopicTag::new("STACK")]);
/// ```
#[derive(Debug, Default)]
pub struct QuestionBuilder {
    id: Option<QuestionId>,
    slug: Option<String>,
    difficulty: Option<Difficulty>,
    points: Option<i64>,
    leetcode_url: Option<String>,
    codechef_url: Option<String>,
    codeforces_url: Option<String>,
    in_arena: Option<bool>,
    arena_added_at: Option<OffsetDateTime>,
    created_at: Option<OffsetDateTime>,
    tags: Option<Vec<TopicTag>>,
}

impl QuestionBuilder {
    /// Creates a new `QuestionBuilder`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the question ID.
    pub fn id(mut self, id: impl Into<QuestionId>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Sets the slug.
    pub fn slug(mut self, slug: impl Into<String>) -> Self {
        self.slug = Some(slug.into());
        self
    }

    /// Sets the difficulty grade.
    pub fn difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulty = Some(difficulty);
        self
    }

    /// Sets the points awarded for solving.
    pub fn points(mut self, points: i64) -> Self {
        self.points = Some(points);
        self
    }

    /// Sets the LeetCode URL.
    pub fn leetcode_url(mut self, url: impl Into<String>) -> Self {
        self.leetcode_url = Some(url.into());
        self
    }

    /// Sets the CodeChef URL.
    pub fn codechef_url(mut self, url: impl Into<String>) -> Self {
        self.codechef_url = Some(url.into());
        self
    }

    /// Sets the Codeforces URL.
    pub fn codeforces_url(mut self, url: impl Into<String>) -> Self {
        self.codeforces_url = Some(url.into());
        self
    }

    /// Marks the question as part of the arena rotation.
    pub fn in_arena(mut self, in_arena: bool) -> Self {
        self.in_arena = Some(in_arena);
        self
    }

    /// Sets when the question entered the arena rotation.
    pub fn arena_added_at(mut self, arena_added_at: OffsetDateTime) -> Self {
        self.arena_added_at = Some(arena_added_at);
        self
    }

    /// Sets the created timestamp.
    pub fn created_at(mut self, created_at: OffsetDateTime) -> Self {
        self.created_at = Some(created_at);
        self
    }

    /// Sets the topic tags.
    pub fn tags(mut self, tags: Vec<TopicTag>) -> Self {
        self.tags = Some(tags);
        self
    }

    /// Builds the `Question`, using defaults for optional fields.
    ///
    /// Difficulty defaults to `MEDIUM`, matching the external schema default.
    ///
    /// # Panics
    ///
    /// Panics if `id` or `slug` have not been set.
    pub fn build(self) -> Question {
        Question {
            id: self.id.expect("id is required"),
            slug: self.slug.expect("slug is required"),
            difficulty: self.difficulty.unwrap_or(Difficulty::Medium),
            points: self.points.unwrap_or(0),
            leetcode_url: self.leetcode_url,
            codechef_url: self.codechef_url,
            codeforces_url: self.codeforces_url,
            in_arena: self.in_arena.unwrap_or(false),
            arena_added_at: self.arena_added_at,
            created_at: self.created_at.unwrap_or_else(OffsetDateTime::now_utc),
            tags: self.tags.unwrap_or_default(),
        }
    }
}
