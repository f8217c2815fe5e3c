//! Session scoring models
//!
//! Counters for the current play session and the stats snapshot derived
//! from them.

/// Running counters for one play session
///
/// Lives as long as the process. Playing again keeps accumulating.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionState {
    /// Accumulated points
    pub score: u32,
    /// Number of the question currently displayed (1-based once one is shown)
    pub question_number: u32,
    /// Questions displayed so far
    pub total_questions: u32,
    /// Questions answered correctly
    pub correct_answers: u32,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that a new question is on screen
    pub fn record_question_shown(&mut self) {
        self.question_number += 1;
        self.total_questions += 1;
    }

    /// Record a correct answer worth `points`
    pub fn record_correct(&mut self, points: u32) {
        self.score += points;
        self.correct_answers += 1;
    }

    /// Whether the stats checkpoint has been reached for `interval`
    pub fn at_checkpoint(&self, interval: u32) -> bool {
        interval > 0 && self.question_number > 0 && self.question_number % interval == 0
    }

    pub fn stats(&self) -> SessionStats {
        SessionStats::from(self)
    }
}

/// Snapshot shown on the stats screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionStats {
    pub total_questions: u32,
    pub correct_answers: u32,
    /// Whole-number percentage
    pub accuracy: u32,
    pub score: u32,
}

impl From<&SessionState> for SessionStats {
    fn from(session: &SessionState) -> Self {
        Self {
            total_questions: session.total_questions,
            correct_answers: session.correct_answers,
            accuracy: accuracy_percent(session.correct_answers, session.total_questions),
            score: session.score,
        }
    }
}

/// `round(correct / total * 100)`, or 0 with no questions
pub fn accuracy_percent(correct: u32, total: u32) -> u32 {
    if total == 0 {
        return 0;
    }
    (correct as f64 / total as f64 * 100.0).round() as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accuracy_zero_total() {
        assert_eq!(accuracy_percent(0, 0), 0);
    }

    #[test]
    fn test_accuracy_rounding() {
        assert_eq!(accuracy_percent(1, 3), 33);
        assert_eq!(accuracy_percent(2, 3), 67);
        assert_eq!(accuracy_percent(1, 8), 13); // 12.5 rounds up
        assert_eq!(accuracy_percent(5, 5), 100);
    }

    #[test]
    fn test_accuracy_matches_formula_for_all_small_sessions() {
        for total in 1..=40u32 {
            for correct in 0..=total {
                let expected = (100.0 * correct as f64 / total as f64).round() as u32;
                assert_eq!(accuracy_percent(correct, total), expected);
            }
        }
    }

    #[test]
    fn test_question_counters_track_cycles() {
        let mut session = SessionState::new();
        for n in 1..=12 {
            session.record_question_shown();
            assert_eq!(session.total_questions, n);
            assert_eq!(session.question_number, n);
        }
    }

    #[test]
    fn test_checkpoint_every_interval() {
        let mut session = SessionState::new();
        assert!(!session.at_checkpoint(5));
        let mut checkpoints = Vec::new();
        for _ in 0..10 {
            session.record_question_shown();
            if session.at_checkpoint(5) {
                checkpoints.push(session.question_number);
            }
        }
        assert_eq!(checkpoints, vec![5, 10]);
    }

    #[test]
    fn test_stats_snapshot() {
        let mut session = SessionState::new();
        for _ in 0..4 {
            session.record_question_shown();
        }
        session.record_correct(10);
        session.record_correct(10);
        session.record_correct(10);

        let stats = session.stats();
        assert_eq!(stats.total_questions, 4);
        assert_eq!(stats.correct_answers, 3);
        assert_eq!(stats.accuracy, 75);
        assert_eq!(stats.score, 30);
    }
}
