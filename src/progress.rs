//! Submission aggregation: progress reports, streaks, and activity feeds.
//!
//! All functions are pure over caller-provided records. Callers pass the
//! reference instant (`now`) explicitly, so reports are reproducible and the
//! library never reads the clock.

use std::collections::{HashMap, HashSet};
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use time::{Date, Duration, OffsetDateTime, UtcOffset};

use crate::models::{Difficulty, Question, Submission, TopicTag};
use crate::utils::slug_to_title;

/// Longest streak the scan will look back for, in days.
const STREAK_LOOKBACK_DAYS: u32 = 365;

/// Reporting window for [`progress_report`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeRange {
    /// The last 7 days.
    Week,
    /// The last 30 days.
    Month,
    /// No cutoff.
    All,
}

impl TimeRange {
    /// Returns the window's cutoff instant, or `None` for [`TimeRange::All`].
    #[must_use]
    pub fn since(self, now: OffsetDateTime) -> Option<OffsetDateTime> {
        match self {
            Self::Week => Some(now - Duration::days(7)),
            Self::Month => Some(now - Duration::days(30)),
            Self::All => None,
        }
    }

    /// Returns the lowercase name used on the wire and the CLI.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Week => "week",
            Self::Month => "month",
            Self::All => "all",
        }
    }
}

impl fmt::Display for TimeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Error returned when parsing an unknown time range name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown time range '{0}' (expected week, month, or all)")]
pub struct ParseTimeRangeError(pub String);

impl FromStr for TimeRange {
    type Err = ParseTimeRangeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "week" => Ok(Self::Week),
            "month" => Ok(Self::Month),
            "all" => Ok(Self::All),
            _ => Err(ParseTimeRangeError(s.to_string())),
        }
    }
}

/// Per-difficulty attempt and solve counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DifficultySlice {
    /// The difficulty grade this slice covers.
    pub difficulty: Difficulty,
    /// Distinct questions solved at this grade.
    pub solved: u32,
    /// Distinct questions attempted at this grade.
    pub attempted: u32,
    /// `round(solved / attempted * 100)`, or 0 when nothing was attempted.
    pub success_rate: u32,
}

/// Aggregated view of a user's submissions over a time window.
#[derive(Debug, Clone, Serialize)]
pub struct ProgressReport {
    /// Distinct questions with an accepted submission in the window.
    ///
    /// Counts submissions whose question is unknown to the bank too; only
    /// the per-difficulty slices require a known question.
    pub total_solved: usize,
    /// One slice per difficulty grade, easiest first.
    pub difficulty_breakdown: Vec<DifficultySlice>,
    /// Consecutive days ending today with at least one accepted submission.
    pub current_streak: u32,
    /// The window this report covers.
    pub time_range: TimeRange,
}

/// What a feed entry records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityKind {
    /// The submission was accepted.
    ProblemSolved,
    /// Any other verdict.
    ProblemAttempted,
}

/// One row of the recent-activity feed.
#[derive(Debug, Clone, Serialize)]
pub struct ActivityEntry {
    /// Solved or attempted.
    pub kind: ActivityKind,
    /// The question's slug, or the raw submission question id when the
    /// question is unknown to the bank.
    pub problem: String,
    /// Human-readable title derived from the slug.
    pub title: String,
    /// The question's difficulty, defaulting to `EASY` when unknown.
    pub difficulty: Difficulty,
    /// When the submission was made.
    #[serde(with = "time::serde::rfc3339")]
    pub timestamp: OffsetDateTime,
    /// Verdict summary, e.g. `Status: WRONG_ANSWER`.
    pub description: String,
}

/// Builds a progress report from a user's submissions.
///
/// Submissions outside the window are ignored. Attempted and solved counts
/// are per distinct question; submissions referencing questions missing from
/// `bank` are skipped in the difficulty breakdown but still count toward
/// `total_solved`. The streak looks at accepted submissions inside the same
/// window, so a `week` report cannot show a streak longer than seven days.
///
/// # Examples
///
/// ```
/// use time::macros::datetime;
/// use topictag::{progress_report, TimeRange};
///
/// let report = progress_report(&[], &[], TimeRange::All, datetime!(2024-06-01 12:00 UTC));
/// assert_eq!(report.total_solved, 0);
/// assert_eq!(report.current_streak, 0);
/// ```
#[must_use]
pub fn progress_report(
    submissions: &[Submission],
    bank: &[Question],
    range: TimeRange,
    now: OffsetDateTime,
) -> ProgressReport {
    let since = range.since(now);
    let in_range: Vec<&Submission> = submissions
        .iter()
        .filter(|s| since.is_none_or(|cutoff| s.created_at >= cutoff))
        .collect();

    let by_id: HashMap<&str, &Question> = bank.iter().map(|q| (q.id.as_str(), q)).collect();

    let mut attempted: HashSet<&str> = HashSet::new();
    let mut solved: HashSet<&str> = HashSet::new();
    for submission in &in_range {
        attempted.insert(submission.question_id.as_str());
        if submission.is_accepted() {
            solved.insert(submission.question_id.as_str());
        }
    }

    let mut breakdown: Vec<DifficultySlice> = Difficulty::ALL
        .iter()
        .map(|&difficulty| DifficultySlice {
            difficulty,
            solved: 0,
            attempted: 0,
            success_rate: 0,
        })
        .collect();

    for id in &attempted {
        let Some(question) = by_id.get(id) else {
            continue;
        };
        if let Some(slice) = breakdown
            .iter_mut()
            .find(|s| s.difficulty == question.difficulty)
        {
            slice.attempted += 1;
            if solved.contains(id) {
                slice.solved += 1;
            }
        }
    }
    for slice in &mut breakdown {
        if slice.attempted > 0 {
            slice.success_rate =
                (f64::from(slice.solved) / f64::from(slice.attempted) * 100.0).round() as u32;
        }
    }

    let mut accepted_days: HashSet<Date> = HashSet::new();
    for submission in &in_range {
        if submission.is_accepted() {
            accepted_days.insert(submission.created_at.to_offset(UtcOffset::UTC).date());
        }
    }
    let today = now.to_offset(UtcOffset::UTC).date();

    ProgressReport {
        total_solved: solved.len(),
        difficulty_breakdown: breakdown,
        current_streak: current_streak(&accepted_days, today),
        time_range: range,
    }
}

/// Counts consecutive days ending at `today` with an accepted submission.
///
/// Scans backwards from `today` through `accepted_days` (UTC dates) and
/// stops at the first gap, looking back at most a year. A day without an
/// accepted submission today means the streak is 0.
#[must_use]
pub fn current_streak(accepted_days: &HashSet<Date>, today: Date) -> u32 {
    let mut streak = 0;
    let mut day = today;
    for _ in 0..STREAK_LOOKBACK_DAYS {
        if !accepted_days.contains(&day) {
            break;
        }
        streak += 1;
        match day.previous_day() {
            Some(previous) => day = previous,
            None => break,
        }
    }
    streak
}

/// Builds a newest-first feed of the user's latest submissions.
///
/// Each entry is decorated with the question's slug, title, and difficulty.
/// Submissions for questions missing from `bank` fall back to the raw
/// question id and `EASY`, so the feed never drops rows.
#[must_use]
pub fn recent_activity(
    submissions: &[Submission],
    bank: &[Question],
    limit: usize,
) -> Vec<ActivityEntry> {
    let by_id: HashMap<&str, &Question> = bank.iter().map(|q| (q.id.as_str(), q)).collect();

    let mut ordered: Vec<&Submission> = submissions.iter().collect();
    ordered.sort_by(|a, b| b.created_at.cmp(&a.created_at));

    ordered
        .into_iter()
        .take(limit)
        .map(|submission| {
            let kind = if submission.is_accepted() {
                ActivityKind::ProblemSolved
            } else {
                ActivityKind::ProblemAttempted
            };
            let (problem, title, difficulty) = match by_id.get(submission.question_id.as_str()) {
                Some(question) => (
                    question.slug.clone(),
                    slug_to_title(&question.slug),
                    question.difficulty,
                ),
                None => (
                    submission.question_id.to_string(),
                    submission.question_id.to_string(),
                    Difficulty::Easy,
                ),
            };
            ActivityEntry {
                kind,
                problem,
                title,
                difficulty,
                timestamp: submission.created_at,
                description: format!("Status: {}", submission.status),
            }
        })
        .collect()
}

/// The most frequent tags across the given questions.
///
/// Frequency counts one per question per tag, sorted descending; ties keep
/// first-appearance order. Useful for "preferred topics" summaries over a
/// user's recently attempted questions.
#[must_use]
pub fn top_topics(questions: &[Question], limit: usize) -> Vec<TopicTag> {
    let mut counts: Vec<(&TopicTag, usize)> = Vec::new();
    for question in questions {
        for tag in &question.tags {
            match counts.iter_mut().find(|(seen, _)| *seen == tag) {
                Some((_, count)) => *count += 1,
                None => counts.push((tag, 1)),
            }
        }
    }
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts
        .into_iter()
        .take(limit)
        .map(|(tag, _)| tag.clone())
        .collect()
}
