//! Question and answer data models
//!
//! Contains the question fetched from the Question Service, the answer
//! submission sent back for checking, and the verdict returned. Field names
//! on the wire follow the service's Portuguese JSON keys.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Question identifier as issued by the service
///
/// Echoed back verbatim when submitting an answer, so numeric ids keep their
/// exact JSON representation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum QuestionId {
    Number(serde_json::Number),
    Text(String),
}

impl fmt::Display for QuestionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QuestionId::Number(n) => write!(f, "{}", n),
            QuestionId::Text(s) => write!(f, "{}", s),
        }
    }
}

impl From<u64> for QuestionId {
    fn from(id: u64) -> Self {
        QuestionId::Number(id.into())
    }
}

/// A banana-counting question
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    /// Identifier assigned by the service
    pub id: QuestionId,
    /// Prompt text shown to the player
    #[serde(rename = "pergunta")]
    pub prompt: String,
    /// Number of bananas displayed, which is also the correct answer
    #[serde(rename = "quantidadeCorreta")]
    pub correct_count: u32,
    /// Answer options in display order
    #[serde(rename = "opcoes")]
    pub options: Vec<u32>,
}

impl Question {
    /// Option value at a display position
    pub fn option(&self, index: usize) -> Option<u32> {
        self.options.get(index).copied()
    }

    /// Build the submission for the option chosen by the player
    pub fn submission(&self, selected: u32) -> AnswerSubmission {
        AnswerSubmission {
            question_id: self.id.clone(),
            selected,
            correct: self.correct_count,
        }
    }
}

/// Body of `POST /api/verificar-resposta`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerSubmission {
    #[serde(rename = "questaoId")]
    pub question_id: QuestionId,
    #[serde(rename = "respostaSelecionada")]
    pub selected: u32,
    #[serde(rename = "respostaCorreta")]
    pub correct: u32,
}

/// Outcome of an answer check
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verdict {
    /// Whether the selected option was right
    pub correct: bool,
    /// Message from the service
    pub message: String,
    /// Correct value according to the service
    pub correct_answer: u32,
}

/// Response envelope of `GET /api/gerar-questao`
#[derive(Debug, Clone, Deserialize)]
pub struct QuestionEnvelope {
    #[serde(rename = "sucesso", default)]
    pub success: bool,
    #[serde(rename = "questao")]
    pub question: Option<Question>,
    #[serde(rename = "erro")]
    pub error: Option<String>,
}

/// Response envelope of `POST /api/verificar-resposta`
#[derive(Debug, Clone, Deserialize)]
pub struct VerdictEnvelope {
    #[serde(rename = "sucesso", default)]
    pub success: bool,
    #[serde(rename = "correto", default)]
    pub correct: bool,
    #[serde(rename = "mensagem", default)]
    pub message: String,
    #[serde(rename = "respostaCorreta")]
    pub correct_answer: Option<u32>,
    #[serde(rename = "erro")]
    pub error: Option<String>,
}

impl VerdictEnvelope {
    /// Convert a successful envelope into a verdict.
    ///
    /// When the service omits the correct value, the submitted correct count
    /// stands in for it.
    pub fn into_verdict(self, submission: &AnswerSubmission) -> Verdict {
        Verdict {
            correct: self.correct,
            message: self.message,
            correct_answer: self.correct_answer.unwrap_or(submission.correct),
        }
    }
}
