//! Banana Quiz
//!
//! A terminal quiz mini-game: counts bananas, asks how many there are, and
//! keeps a running score. Questions come from, and answers are checked by,
//! an external Question Service reached over HTTP.

use reqwest::StatusCode;
use thiserror::Error;

pub mod app;
pub mod config;
pub mod models;
pub mod service;
pub mod util;

/// Which Question Service endpoint a failure came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    /// `GET /api/gerar-questao`
    GenerateQuestion,
    /// `POST /api/verificar-resposta`
    VerifyAnswer,
}

impl Endpoint {
    /// Path relative to the service base URL
    pub fn path(&self) -> &'static str {
        match self {
            Endpoint::GenerateQuestion => "/api/gerar-questao",
            Endpoint::VerifyAnswer => "/api/verificar-resposta",
        }
    }
}

// Common error types
#[derive(Debug, Error)]
pub enum QuizError {
    /// Network or transport failure, including timeouts and undecodable bodies
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),
    /// The service answered with a non-success HTTP status
    #[error("{endpoint:?} returned HTTP {status}")]
    HttpStatus {
        endpoint: Endpoint,
        status: StatusCode,
    },
    /// The service answered `sucesso: false`
    #[error("service error: {0}")]
    Service(String),
    /// Configuration validation or parsing error
    #[error("configuration error: {0}")]
    Config(String),
    /// I/O operation failed, including terminal setup
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl QuizError {
    /// Best available message to show the player in a notice.
    ///
    /// Transport, status and service failures all collapse to a single string;
    /// the UI treats them the same way.
    pub fn user_message(&self) -> String {
        match self {
            QuizError::Transport(err) if err.is_timeout() => {
                "The question server took too long to respond.".to_string()
            }
            QuizError::Transport(err) if err.is_decode() => {
                "The question server sent a response that could not be read.".to_string()
            }
            QuizError::Transport(err) => format!("Could not reach the question server: {}", err),
            QuizError::HttpStatus { endpoint, .. } => match endpoint {
                Endpoint::GenerateQuestion => {
                    "Failed to fetch a question from the server.".to_string()
                }
                Endpoint::VerifyAnswer => "Failed to verify the answer.".to_string(),
            },
            QuizError::Service(msg) => msg.clone(),
            _ => self.to_string(),
        }
    }
}

impl From<toml::de::Error> for QuizError {
    fn from(err: toml::de::Error) -> Self {
        QuizError::Config(format!("TOML parsing error: {}", err))
    }
}

impl From<toml::ser::Error> for QuizError {
    fn from(err: toml::ser::Error) -> Self {
        QuizError::Config(format!("TOML serialization error: {}", err))
    }
}

/// Result type alias for quiz operations
pub type Result<T> = std::result::Result<T, QuizError>;

// Common types and constants
pub const APP_NAME: &str = "banana-quiz";
pub const CONFIG_FILE: &str = "banana-quiz.toml";
pub const LOG_FILE: &str = "banana-quiz.log";
pub const DEFAULT_BASE_URL: &str = "http://localhost:3000";
pub const DEFAULT_POINTS_PER_CORRECT: u32 = 10;
pub const DEFAULT_STATS_INTERVAL: u32 = 5;
