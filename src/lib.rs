pub mod catalog;
pub mod models;
pub mod normalizer;
pub mod progress;
pub mod utils;

pub use catalog::{QuestionFilter, QuestionMatch, UserActivity, distinct_topics, filter_questions};
pub use models::{
    Difficulty, ParseDifficultyError, ParsePlatformError, ParseSubmissionStatusError, Platform,
    Question, QuestionBuilder, QuestionId, Submission, SubmissionStatus, TopicTag,
};
pub use normalizer::TagNormalizer;
pub use progress::{
    ActivityEntry, ActivityKind, DifficultySlice, ParseTimeRangeError, ProgressReport, TimeRange,
    progress_report, recent_activity, top_topics,
};
pub use utils::{default_bank_path, slug_to_title};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalizer_accessible_from_crate_root() {
        let tag = TagNormalizer::normalize_topic("binary search");
        assert_eq!(tag, Some(TopicTag::new("BINARY_SEARCH")));
    }

    #[test]
    fn types_accessible_from_crate_root() {
        use time::macros::datetime;

        let question = QuestionBuilder::new()
            .id("q1")
            .slug("two-sum")
            .difficulty(Difficulty::Easy)
            .build();
        assert_eq!(question.title(), "Two Sum");

        let submission = Submission::new(
            "q1",
            SubmissionStatus::Accepted,
            datetime!(2024-06-01 12:00 UTC),
        );
        assert!(submission.is_accepted());

        let activity = UserActivity::from_submissions(&[submission]);
        assert!(activity.is_solved(&QuestionId::new("q1")));

        assert_eq!(TimeRange::Week.to_string(), "week");
        assert_eq!(Platform::Leetcode.as_str(), "LEETCODE");
    }
}
