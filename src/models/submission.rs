use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use time::OffsetDateTime;

use super::QuestionId;

/// Judge verdict for a submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SubmissionStatus {
    Pending,
    Accepted,
    WrongAnswer,
    TimeLimitExceeded,
    MemoryLimitExceeded,
    RuntimeError,
    CompilationError,
}

impl SubmissionStatus {
    /// Returns the wire name for this status.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "PENDING",
            Self::Accepted => "ACCEPTED",
            Self::WrongAnswer => "WRONG_ANSWER",
            Self::TimeLimitExceeded => "TIME_LIMIT_EXCEEDED",
            Self::MemoryLimitExceeded => "MEMORY_LIMIT_EXCEEDED",
            Self::RuntimeError => "RUNTIME_ERROR",
            Self::CompilationError => "COMPILATION_ERROR",
        }
    }

    /// True iff this verdict counts as solving the question.
    pub fn is_accepted(self) -> bool {
        matches!(self, Self::Accepted)
    }
}

impl fmt::Display for SubmissionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Error returned when parsing an unknown submission status.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown submission status '{0}'")]
pub struct ParseSubmissionStatusError(pub String);

impl FromStr for SubmissionStatus {
    type Err = ParseSubmissionStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "PENDING" => Ok(Self::Pending),
            "ACCEPTED" => Ok(Self::Accepted),
            "WRONG_ANSWER" => Ok(Self::WrongAnswer),
            "TIME_LIMIT_EXCEEDED" => Ok(Self::TimeLimitExceeded),
            "MEMORY_LIMIT_EXCEEDED" => Ok(Self::MemoryLimitExceeded),
            "RUNTIME_ERROR" => Ok(Self::RuntimeError),
            "COMPILATION_ERROR" => Ok(Self::CompilationError),
            _ => Err(ParseSubmissionStatusError(s.to_string())),
        }
    }
}

/// One judged attempt at a question.
///
/// Submissions are already scoped to a single user by the caller; the
/// record carries no user id of its own.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Submission {
    /// The question this attempt targets.
    pub question_id: QuestionId,
    /// Judge verdict.
    pub status: SubmissionStatus,
    /// When the attempt was made.
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

impl Submission {
    /// Creates a new submission record.
    pub fn new(
        question_id: impl Into<QuestionId>,
        status: SubmissionStatus,
        created_at: OffsetDateTime,
    ) -> Self {
        Self {
            question_id: question_id.into(),
            status,
            created_at,
        }
    }

    /// True iff this submission solved the question.
    pub fn is_accepted(&self) -> bool {
        self.status.is_accepted()
    }
}
