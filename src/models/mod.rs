//! Data models module
//!
//! Contains the question and verdict types exchanged with the Question
//! Service and the session counters kept by the game.

pub mod question;
pub mod session;

// Re-export commonly used types
pub use question::{
    AnswerSubmission,
    Question,
    QuestionEnvelope,
    QuestionId,
    Verdict,
    VerdictEnvelope,
};
pub use session::{accuracy_percent, SessionState, SessionStats};
