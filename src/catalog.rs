//! In-memory filtering over an externally-sourced question bank.
//!
//! The bank arrives as a slice of [`Question`] records (the CLI loads a JSON
//! file; servers would pass rows they already fetched). Filtering happens
//! entirely in memory: topics are normalized through [`TagNormalizer`],
//! compared against each question's canonicalized tags, then the remaining
//! predicate filters run in a fixed order.

use std::collections::HashSet;

use serde::Serialize;

use crate::models::{Difficulty, Platform, Question, QuestionId, Submission, TopicTag};
use crate::normalizer::TagNormalizer;

/// Results per query unless the caller asks otherwise.
const DEFAULT_LIMIT: usize = 50;
/// Hard bounds on the result count; requests outside are clamped, not refused.
const MIN_LIMIT: usize = 1;
const MAX_LIMIT: usize = 100;

/// Filter predicate for [`filter_questions`].
///
/// All predicates are optional; an unset predicate does not restrict the
/// result. Setters chain.
///
/// # Examples
///
/// ```
/// use topictag::{Difficulty, Platform, QuestionFilter};
///
/// let filter = QuestionFilter::new()
///     .topics(["two pointers", "sliding window"])
///     .platform(Platform::Leetcode)
///     .difficulty(Difficulty::Medium)
///     .unsolved_only(true)
///     .limit(10);
/// assert_eq!(filter.effective_limit(), 10);
/// ```
#[derive(Debug, Clone, Default)]
pub struct QuestionFilter {
    topics: Vec<String>,
    platform: Option<Platform>,
    difficulties: Vec<Difficulty>,
    slug: Option<String>,
    url: Option<String>,
    unsolved_only: bool,
    limit: Option<usize>,
}

impl QuestionFilter {
    /// Creates an empty filter that matches the whole bank.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the free-form topic phrases to filter by.
    ///
    /// Phrases run through [`TagNormalizer::normalize_topics`]; the platform
    /// names `LEETCODE`, `CODECHEF`, and `CODEFORCES` act as pseudo-topics
    /// that bias results toward that platform instead of matching tags.
    pub fn topics<I, S>(mut self, topics: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.topics = topics.into_iter().map(Into::into).collect();
        self
    }

    /// Restricts results to questions hosted on one platform.
    ///
    /// An explicit platform overrides any platform pseudo-topics.
    pub fn platform(mut self, platform: Platform) -> Self {
        self.platform = Some(platform);
        self
    }

    /// Adds a difficulty grade to keep; call repeatedly to allow several.
    pub fn difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulties.push(difficulty);
        self
    }

    /// Keeps only the question with this slug (case-insensitive).
    pub fn slug(mut self, slug: impl Into<String>) -> Self {
        self.slug = Some(slug.into());
        self
    }

    /// Keeps only questions whose slug matches the URL's trailing segment.
    ///
    /// Ignored when a slug predicate is also set.
    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    /// Drops questions the user has already solved.
    pub fn unsolved_only(mut self, unsolved_only: bool) -> Self {
        self.unsolved_only = unsolved_only;
        self
    }

    /// Caps the number of results. Values outside 1..=100 are clamped.
    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    /// The result cap after clamping, defaulting to 50.
    #[must_use]
    pub fn effective_limit(&self) -> usize {
        self.limit.unwrap_or(DEFAULT_LIMIT).clamp(MIN_LIMIT, MAX_LIMIT)
    }
}

/// Per-user state used to decorate and filter results.
///
/// Submissions and bookmarks are already scoped to one user by the caller.
#[derive(Debug, Clone, Default)]
pub struct UserActivity {
    solved: HashSet<QuestionId>,
    bookmarked: HashSet<QuestionId>,
}

impl UserActivity {
    /// Creates an empty activity record (nothing solved, nothing bookmarked).
    pub fn new() -> Self {
        Self::default()
    }

    /// Derives the solved set from a user's submissions.
    ///
    /// A question counts as solved when any submission for it was accepted.
    pub fn from_submissions(submissions: &[Submission]) -> Self {
        let solved = submissions
            .iter()
            .filter(|s| s.is_accepted())
            .map(|s| s.question_id.clone())
            .collect();
        Self {
            solved,
            bookmarked: HashSet::new(),
        }
    }

    /// Replaces the bookmark set.
    pub fn with_bookmarks<I: IntoIterator<Item = QuestionId>>(mut self, bookmarks: I) -> Self {
        self.bookmarked = bookmarks.into_iter().collect();
        self
    }

    /// True iff the user has an accepted submission for this question.
    pub fn is_solved(&self, id: &QuestionId) -> bool {
        self.solved.contains(id)
    }

    /// True iff the user bookmarked this question.
    pub fn is_bookmarked(&self, id: &QuestionId) -> bool {
        self.bookmarked.contains(id)
    }
}

/// A bank question decorated with per-user flags.
#[derive(Debug, Clone, Serialize)]
pub struct QuestionMatch<'a> {
    /// The matched bank record.
    #[serde(flatten)]
    pub question: &'a Question,
    /// Whether the user has an accepted submission for it.
    pub is_solved: bool,
    /// Whether the user bookmarked it.
    pub is_bookmarked: bool,
}

impl QuestionMatch<'_> {
    /// Renders a human-readable title from the question's slug.
    #[must_use]
    pub fn title(&self) -> String {
        self.question.title()
    }
}

/// Filters the bank by the given predicate and decorates matches.
///
/// Evaluation order:
/// 1. Topic phrases are normalized; platform names among them set a platform
///    bias, and an explicit platform predicate overrides the bias entirely.
/// 2. The normalized tags are intersected with the bank's canonicalized tag
///    universe. Questions carrying any wanted tag form the pool. When topics
///    were requested but none exist in the bank, the result is empty. A
///    platform bias without usable tags falls back to the whole bank ordered
///    newest first. With no topics and no platform, nothing is restricted.
/// 3. Platform bias keeps only questions with a URL on that platform, then
///    difficulty, slug (which shadows url), url, and unsolved filters apply,
///    and the result is truncated to [`QuestionFilter::effective_limit`].
///
/// Stored tags are canonicalized with
/// [`TagNormalizer::to_screaming_snake_case`] before comparison, so banks
/// carrying display names like `"Linked List"` still match.
#[must_use]
pub fn filter_questions<'a>(
    bank: &'a [Question],
    activity: &UserActivity,
    filter: &QuestionFilter,
) -> Vec<QuestionMatch<'a>> {
    let normalized = TagNormalizer::normalize_topics(&filter.topics);

    let mut wants_codechef = normalized.contains(Platform::Codechef.as_str());
    let mut wants_leetcode = normalized.contains(Platform::Leetcode.as_str());
    let mut wants_codeforces = normalized.contains(Platform::Codeforces.as_str());
    if let Some(platform) = filter.platform {
        wants_codechef = platform == Platform::Codechef;
        wants_leetcode = platform == Platform::Leetcode;
        wants_codeforces = platform == Platform::Codeforces;
    }
    let platform_bias = wants_codechef || wants_leetcode || wants_codeforces;

    // Wanted tags: requested topics that actually exist in the bank.
    let mut wanted: HashSet<TopicTag> = HashSet::new();
    for question in bank {
        for tag in &question.tags {
            let canonical = TagNormalizer::to_screaming_snake_case(tag.as_str());
            if normalized.contains(canonical.as_str()) {
                wanted.insert(TopicTag::new(canonical));
            }
        }
    }

    let pool: Vec<&Question> = if wanted.is_empty() {
        if platform_bias {
            // Platform-only request: broad pool, newest first.
            let mut all: Vec<&Question> = bank.iter().collect();
            all.sort_by(|a, b| b.created_at.cmp(&a.created_at));
            all
        } else if !normalized.is_empty() {
            // Topics were requested but none match the bank.
            return Vec::new();
        } else {
            bank.iter().collect()
        }
    } else {
        bank.iter()
            .filter(|q| {
                q.tags.iter().any(|tag| {
                    wanted.contains(TagNormalizer::to_screaming_snake_case(tag.as_str()).as_str())
                })
            })
            .collect()
    };

    let mut items: Vec<QuestionMatch<'a>> = pool
        .into_iter()
        .map(|question| QuestionMatch {
            question,
            is_solved: activity.is_solved(&question.id),
            is_bookmarked: activity.is_bookmarked(&question.id),
        })
        .collect();

    if wants_codechef {
        items.retain(|m| m.question.url_for(Platform::Codechef).is_some());
    }
    if wants_leetcode {
        items.retain(|m| m.question.url_for(Platform::Leetcode).is_some());
    }
    if wants_codeforces {
        items.retain(|m| m.question.url_for(Platform::Codeforces).is_some());
    }

    if !filter.difficulties.is_empty() {
        items.retain(|m| filter.difficulties.contains(&m.question.difficulty));
    }

    if let Some(slug) = &filter.slug {
        let wanted_slug = slug.trim().to_lowercase();
        items.retain(|m| m.question.slug.to_lowercase() == wanted_slug);
    } else if let Some(url) = &filter.url {
        let cleaned = url.trim().to_lowercase();
        match cleaned.split('/').filter(|part| !part.is_empty()).last() {
            Some(last_segment) => {
                items.retain(|m| m.question.slug.to_lowercase() == last_segment);
            }
            None => {
                // Slash-only URL: fall back to platform domain hints.
                if cleaned.contains("leetcode") {
                    items.retain(|m| m.question.url_for(Platform::Leetcode).is_some());
                }
                if cleaned.contains("codechef") {
                    items.retain(|m| m.question.url_for(Platform::Codechef).is_some());
                }
            }
        }
    }

    if filter.unsolved_only {
        items.retain(|m| !m.is_solved);
    }

    items.truncate(filter.effective_limit());
    items
}

/// The bank's distinct topic tags, sorted by name.
#[must_use]
pub fn distinct_topics(bank: &[Question]) -> Vec<TopicTag> {
    let mut seen = HashSet::new();
    let mut topics: Vec<TopicTag> = bank
        .iter()
        .flat_map(|q| q.tags.iter())
        .filter(|tag| seen.insert((*tag).clone()))
        .cloned()
        .collect();
    topics.sort();
    topics
}
