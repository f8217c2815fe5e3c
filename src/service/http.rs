//! HTTP implementation of the Question Service client

use async_trait::async_trait;
use reqwest::Client;

use crate::config::QuizConfig;
use crate::models::{AnswerSubmission, Question, QuestionEnvelope, Verdict, VerdictEnvelope};
use crate::service::QuestionService;
use crate::{Endpoint, QuizError, Result};

const UNKNOWN_QUESTION_ERROR: &str = "Unknown error while generating a question.";
const UNKNOWN_VERIFY_ERROR: &str = "Unknown error while verifying the answer.";

/// Question Service reached over HTTP
#[derive(Clone, Debug)]
pub struct HttpQuestionService {
    client: Client,
    base_url: String,
}

impl HttpQuestionService {
    /// Build a client for the configured base URL and timeout
    pub fn new(config: &QuizConfig) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            client: builder.build()?,
            base_url: config.base_url.clone(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, endpoint: Endpoint) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), endpoint.path())
    }
}

#[async_trait]
impl QuestionService for HttpQuestionService {
    async fn fetch_question(&self) -> Result<Question> {
        let endpoint = Endpoint::GenerateQuestion;
        tracing::debug!(url = %self.url(endpoint), "fetching question");

        let response = self.client.get(self.url(endpoint)).send().await?;
        if !response.status().is_success() {
            return Err(QuizError::HttpStatus {
                endpoint,
                status: response.status(),
            });
        }

        let body: QuestionEnvelope = response.json().await?;
        match body {
            QuestionEnvelope {
                success: true,
                question: Some(question),
                ..
            } => {
                tracing::info!(id = %question.id, bananas = question.correct_count, "question received");
                Ok(question)
            }
            QuestionEnvelope { error, .. } => Err(QuizError::Service(
                error.unwrap_or_else(|| UNKNOWN_QUESTION_ERROR.to_string()),
            )),
        }
    }

    async fn verify_answer(&self, submission: &AnswerSubmission) -> Result<Verdict> {
        let endpoint = Endpoint::VerifyAnswer;
        tracing::debug!(
            url = %self.url(endpoint),
            id = %submission.question_id,
            selected = submission.selected,
            "verifying answer"
        );

        let response = self
            .client
            .post(self.url(endpoint))
            .json(submission)
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(QuizError::HttpStatus {
                endpoint,
                status: response.status(),
            });
        }

        let body: VerdictEnvelope = response.json().await?;
        if !body.success {
            return Err(QuizError::Service(
                body.error
                    .unwrap_or_else(|| UNKNOWN_VERIFY_ERROR.to_string()),
            ));
        }

        let verdict = body.into_verdict(submission);
        tracing::info!(id = %submission.question_id, correct = verdict.correct, "answer verified");
        Ok(verdict)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_joins_without_double_slash() {
        let config = QuizConfig::default().with_base_url("http://localhost:3000/");
        let service = HttpQuestionService::new(&config).unwrap();
        assert_eq!(
            service.url(Endpoint::GenerateQuestion),
            "http://localhost:3000/api/gerar-questao"
        );
        assert_eq!(
            service.url(Endpoint::VerifyAnswer),
            "http://localhost:3000/api/verificar-resposta"
        );
    }

    #[test]
    fn test_keeps_base_url() {
        let service = HttpQuestionService::new(&QuizConfig::default()).unwrap();
        assert_eq!(service.base_url(), "http://localhost:3000");
    }
}
