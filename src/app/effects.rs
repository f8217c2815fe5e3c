//! Effect execution
//!
//! Runs the I/O requested by state transitions against a
//! [`QuestionService`] and turns the outcome into a [`Completion`].

use crate::app::state::{Completion, Effect};
use crate::service::QuestionService;
use std::sync::Arc;
use tokio::sync::mpsc;

/// Perform one effect to completion
pub async fn perform(service: &dyn QuestionService, effect: Effect) -> Completion {
    match effect {
        Effect::Wait(delay) => {
            tokio::time::sleep(delay).await;
            Completion::LoadingElapsed
        }
        Effect::FetchQuestion => Completion::QuestionFetched(service.fetch_question().await),
        Effect::VerifyAnswer(submission) => {
            Completion::AnswerVerified(service.verify_answer(&submission).await)
        }
    }
}

/// Run an effect on the tokio runtime, delivering its completion to `tx`
pub fn spawn(
    service: Arc<dyn QuestionService>,
    effect: Effect,
    tx: mpsc::UnboundedSender<Completion>,
) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        let completion = perform(service.as_ref(), effect).await;
        if tx.send(completion).is_err() {
            tracing::debug!("completion dropped, UI loop has exited");
        }
    })
}
