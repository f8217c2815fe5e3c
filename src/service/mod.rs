//! Question Service client module
//!
//! The game only ever talks to the service through [`QuestionService`], so
//! the state machine and tests stay independent of HTTP.

use async_trait::async_trait;

use crate::models::{AnswerSubmission, Question, Verdict};
use crate::Result;

pub mod http;

pub use http::HttpQuestionService;

/// Remote source of questions and answer checks
#[async_trait]
pub trait QuestionService: Send + Sync {
    /// Fetch a fresh question.
    ///
    /// # Errors
    ///
    /// Transport failures, non-success statuses and `sucesso: false`
    /// responses all come back as `QuizError`.
    async fn fetch_question(&self) -> Result<Question>;

    /// Ask the service whether `submission` is correct.
    ///
    /// # Errors
    ///
    /// Same failure classes as [`QuestionService::fetch_question`].
    async fn verify_answer(&self, submission: &AnswerSubmission) -> Result<Verdict>;
}
