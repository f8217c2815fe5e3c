//! End-to-end screen flow against a scripted question service

use async_trait::async_trait;
use banana_quiz::app::effects;
use banana_quiz::app::{Action, Effect, GameState, Rules, Screen};
use banana_quiz::models::{AnswerSubmission, Question, QuestionId, Verdict};
use banana_quiz::service::QuestionService;
use banana_quiz::{QuizError, Result};
use std::collections::VecDeque;
use std::sync::Mutex;
use std::time::Duration;

#[derive(Default)]
struct ScriptedService {
    questions: Mutex<VecDeque<Result<Question>>>,
    verdicts: Mutex<VecDeque<Result<Verdict>>>,
    submissions: Mutex<Vec<AnswerSubmission>>,
}

impl ScriptedService {
    fn push_question(&self, question: Result<Question>) {
        self.questions.lock().unwrap().push_back(question);
    }

    fn push_verdict(&self, verdict: Result<Verdict>) {
        self.verdicts.lock().unwrap().push_back(verdict);
    }

    fn submissions(&self) -> Vec<AnswerSubmission> {
        self.submissions.lock().unwrap().clone()
    }
}

#[async_trait]
impl QuestionService for ScriptedService {
    async fn fetch_question(&self) -> Result<Question> {
        self.questions
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(QuizError::Service("no question scripted".into())))
    }

    async fn verify_answer(&self, submission: &AnswerSubmission) -> Result<Verdict> {
        self.submissions.lock().unwrap().push(submission.clone());
        self.verdicts
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(QuizError::Service("no verdict scripted".into())))
    }
}

fn rules() -> Rules {
    Rules {
        points_per_correct: 10,
        stats_interval: 5,
        loading_delay: Duration::ZERO,
    }
}

fn question(id: u64, count: u32, options: &[u32]) -> Question {
    Question {
        id: QuestionId::from(id),
        prompt: "Quantas bananas você vê?".into(),
        correct_count: count,
        options: options.to_vec(),
    }
}

fn verdict(correct: bool, answer: u32) -> Verdict {
    Verdict {
        correct,
        message: if correct { "Parabéns!" } else { "Tente novamente!" }.into(),
        correct_answer: answer,
    }
}

/// Dispatch an action and run any resulting effect to completion
async fn drive(state: &mut GameState, service: &ScriptedService, action: Action) -> bool {
    match state.dispatch(action) {
        Some(effect) => {
            let completion = effects::perform(service, effect).await;
            state.complete(completion);
            true
        }
        None => false,
    }
}

async fn booted() -> GameState {
    let mut state = GameState::new(rules());
    let boot = state.boot();
    assert_eq!(boot, Effect::Wait(Duration::ZERO));
    state.complete(effects::perform(&ScriptedService::default(), boot).await);
    assert_eq!(state.screen(), Screen::Home);
    state
}

#[tokio::test]
async fn test_correct_answer_scores_ten() {
    let service = ScriptedService::default();
    service.push_question(Ok(question(1, 3, &[2, 3, 4])));
    service.push_verdict(Ok(verdict(true, 3)));

    let mut state = booted().await;
    assert!(drive(&mut state, &service, Action::Start).await);
    assert_eq!(state.screen(), Screen::Game);
    assert_eq!(state.question().unwrap().correct_count, 3);

    // Select the option whose value is 3
    assert!(drive(&mut state, &service, Action::Answer(1)).await);
    assert_eq!(state.screen(), Screen::Feedback);
    assert_eq!(state.session().score, 10);
    assert_eq!(state.session().correct_answers, 1);

    assert_eq!(
        service.submissions(),
        vec![AnswerSubmission {
            question_id: QuestionId::from(1),
            selected: 3,
            correct: 3,
        }]
    );
}

#[tokio::test]
async fn test_fifth_question_continues_to_stats() {
    let service = ScriptedService::default();
    for id in 1..=5 {
        service.push_question(Ok(question(id, 2, &[1, 2, 3])));
        service.push_verdict(Ok(verdict(false, 2)));
    }

    let mut state = booted().await;
    drive(&mut state, &service, Action::Start).await;
    for round in 1..=5 {
        drive(&mut state, &service, Action::SubmitSelected).await;
        assert_eq!(state.screen(), Screen::Feedback);
        let fetched = drive(&mut state, &service, Action::Continue).await;
        if round < 5 {
            assert!(fetched);
            assert_eq!(state.screen(), Screen::Game);
        } else {
            assert!(!fetched);
            assert_eq!(state.screen(), Screen::Stats);
        }
    }

    let stats = state.stats();
    assert_eq!(stats.total_questions, 5);
    assert_eq!(stats.correct_answers, 0);
    assert_eq!(stats.accuracy, 0);
    assert_eq!(stats.score, 0);
}

#[tokio::test]
async fn test_stats_after_mixed_answers() {
    let service = ScriptedService::default();
    for id in 1..=5 {
        service.push_question(Ok(question(id, 2, &[1, 2, 3])));
        service.push_verdict(Ok(verdict(id != 3, 2)));
    }

    let mut state = booted().await;
    drive(&mut state, &service, Action::Start).await;
    for _ in 0..5 {
        drive(&mut state, &service, Action::Answer(1)).await;
        drive(&mut state, &service, Action::Continue).await;
    }

    assert_eq!(state.screen(), Screen::Stats);
    let stats = state.stats();
    assert_eq!(stats.total_questions, 5);
    assert_eq!(stats.correct_answers, 4);
    assert_eq!(stats.accuracy, 80);
    assert_eq!(stats.score, 40);
}

#[tokio::test]
async fn test_play_again_does_not_reset_counters() {
    let service = ScriptedService::default();
    for id in 1..=6 {
        service.push_question(Ok(question(id, 1, &[1, 2])));
        service.push_verdict(Ok(verdict(true, 1)));
    }

    let mut state = booted().await;
    drive(&mut state, &service, Action::Start).await;
    for _ in 0..5 {
        drive(&mut state, &service, Action::Answer(0)).await;
        drive(&mut state, &service, Action::Continue).await;
    }
    assert_eq!(state.screen(), Screen::Stats);

    assert!(drive(&mut state, &service, Action::PlayAgain).await);
    assert_eq!(state.screen(), Screen::Game);
    assert_eq!(state.session().question_number, 6);
    assert_eq!(state.session().total_questions, 6);
    assert_eq!(state.session().score, 50);
}

#[tokio::test]
async fn test_fetch_failure_then_manual_retry() {
    let service = ScriptedService::default();
    service.push_question(Err(QuizError::Service("Servidor ocupado".into())));
    service.push_question(Ok(question(2, 4, &[3, 4, 5])));

    let mut state = booted().await;
    drive(&mut state, &service, Action::Start).await;
    assert_eq!(state.screen(), Screen::Game);
    assert_eq!(state.notice(), Some("Servidor ocupado"));
    assert!(state.question().is_none());
    assert_eq!(state.session().total_questions, 0);

    // Nothing gets through until the notice is dismissed
    assert!(!drive(&mut state, &service, Action::RetryFetch).await);
    drive(&mut state, &service, Action::DismissNotice).await;
    assert!(drive(&mut state, &service, Action::RetryFetch).await);

    assert_eq!(state.notice(), None);
    assert_eq!(state.question().unwrap().correct_count, 4);
    assert_eq!(state.session().total_questions, 1);
}

#[tokio::test]
async fn test_verify_failure_reenables_answering() {
    let service = ScriptedService::default();
    service.push_question(Ok(question(1, 3, &[2, 3, 4])));
    service.push_verdict(Err(QuizError::Service("Tempo esgotado".into())));
    service.push_verdict(Ok(verdict(false, 3)));

    let mut state = booted().await;
    drive(&mut state, &service, Action::Start).await;
    drive(&mut state, &service, Action::Answer(0)).await;

    assert_eq!(state.screen(), Screen::Game);
    assert!(!state.answer_locked());
    assert_eq!(state.notice(), Some("Tempo esgotado"));

    drive(&mut state, &service, Action::DismissNotice).await;
    drive(&mut state, &service, Action::Answer(2)).await;
    assert_eq!(state.screen(), Screen::Feedback);
    let feedback = state.feedback().unwrap();
    assert!(!feedback.correct);
    assert_eq!(feedback.correct_answer, 3);
    assert_eq!(service.submissions().len(), 2);
}

#[tokio::test]
async fn test_failed_follow_up_fetch_can_be_retried() {
    let service = ScriptedService::default();
    service.push_question(Ok(question(1, 2, &[1, 2])));
    service.push_verdict(Ok(verdict(true, 2)));
    service.push_question(Err(QuizError::Service("Falha".into())));
    service.push_question(Ok(question(3, 5, &[5, 6])));

    let mut state = booted().await;
    drive(&mut state, &service, Action::Start).await;
    drive(&mut state, &service, Action::Answer(1)).await;
    drive(&mut state, &service, Action::Continue).await;

    // Old question stays on screen, locked
    assert_eq!(state.screen(), Screen::Game);
    assert!(state.answer_locked());
    assert!(!drive(&mut state, &service, Action::Answer(0)).await);

    drive(&mut state, &service, Action::DismissNotice).await;
    assert!(state.can_retry_fetch());
    drive(&mut state, &service, Action::RetryFetch).await;
    assert_eq!(state.question().unwrap().id, QuestionId::from(3));
    assert_eq!(state.session().question_number, 2);
    assert!(!state.answer_locked());
}

#[tokio::test]
async fn test_total_counts_completed_cycles() {
    for n in 1..=11u32 {
        let service = ScriptedService::default();
        for id in 1..=n {
            service.push_question(Ok(question(id as u64, 2, &[1, 2])));
            service.push_verdict(Ok(verdict(id % 2 == 0, 2)));
        }

        let mut state = booted().await;
        drive(&mut state, &service, Action::Start).await;
        for cycle in 1..=n {
            drive(&mut state, &service, Action::Answer(1)).await;
            if cycle < n && !drive(&mut state, &service, Action::Continue).await {
                drive(&mut state, &service, Action::PlayAgain).await;
            }
        }
        assert_eq!(state.session().total_questions, n);
        assert_eq!(state.session().correct_answers, n / 2);
    }
}
