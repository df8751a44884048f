mod difficulty;
mod ids;
mod platform;
mod question;
mod submission;
mod topic_tag;

pub use difficulty::{Difficulty, ParseDifficultyError};
pub use ids::QuestionId;
pub use platform::{ParsePlatformError, Platform};
pub use question::{Question, QuestionBuilder};
pub use submission::{ParseSubmissionStatusError, Submission, SubmissionStatus};
pub use topic_tag::TopicTag;
