use super::question::Question;
use bevy::log::debug;
use rand::Rng;
use std::time::Duration;

/// Tunables for a puzzle round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PuzzleRules {
    /// Questions asked per terminal visit.
    pub question_count: usize,
    /// Countdown per question. Resets when a question is answered correctly.
    pub time_limit: Duration,
    /// Clearing this level wins the run.
    pub final_level: u32,
}

impl Default for PuzzleRules {
    fn default() -> Self {
        Self {
            question_count: 3,
            time_limit: Duration::from_secs(60),
            final_level: 5,
        }
    }
}

/// Key press as seen by the puzzle, already stripped of engine details.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PuzzleKey {
    Backspace,
    Enter,
    Char(char),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailCause {
    WrongAnswer,
    Timeout,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Continue,
    NextQuestion,
    LevelCleared,
    Win,
    Fail(FailCause),
}

/// Characters that can be typed into an answer.
pub fn accepts(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '(' | ')' | '*' | '=' | ' ')
}

/// A timed run of questions at one level.
#[derive(Debug, Clone)]
pub struct PuzzleSession {
    level: u32,
    questions: Vec<Question>,
    current: usize,
    input: String,
    question_started: Duration,
    time_limit: Duration,
    final_level: u32,
}

impl PuzzleSession {
    pub fn start<R: Rng + ?Sized>(
        level: u32,
        rules: &PuzzleRules,
        now: Duration,
        rng: &mut R,
    ) -> Self {
        let questions = (0..rules.question_count)
            .map(|_| Question::generate(level, rng))
            .collect::<Vec<_>>();
        for (i, q) in questions.iter().enumerate() {
            debug!("Question {} at level {}: {:?}", i + 1, level, q.problem());
        }
        Self::with_questions(level, questions, rules, now)
    }

    /// Session over a fixed question list.
    pub fn with_questions(
        level: u32,
        questions: Vec<Question>,
        rules: &PuzzleRules,
        now: Duration,
    ) -> Self {
        Self {
            level,
            questions,
            current: 0,
            input: String::new(),
            question_started: now,
            time_limit: rules.time_limit,
            final_level: rules.final_level,
        }
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    /// `None` once every question has been answered.
    pub fn current_question(&self) -> Option<&Question> {
        self.questions.get(self.current)
    }

    pub fn on_key(&mut self, key: PuzzleKey, now: Duration) -> Outcome {
        match key {
            PuzzleKey::Backspace => {
                self.input.pop();
                Outcome::Continue
            }
            PuzzleKey::Enter => self.submit(now),
            PuzzleKey::Char(c) => {
                if accepts(c) {
                    self.input.push(c);
                }
                Outcome::Continue
            }
        }
    }

    fn submit(&mut self, now: Duration) -> Outcome {
        let Some(question) = self.current_question() else {
            return Outcome::Continue;
        };
        if self.input.trim() != question.answer() {
            return Outcome::Fail(FailCause::WrongAnswer);
        }

        self.current += 1;
        if self.current < self.questions.len() {
            self.input.clear();
            self.question_started = now;
            Outcome::NextQuestion
        } else if self.level < self.final_level {
            Outcome::LevelCleared
        } else {
            Outcome::Win
        }
    }

    /// Whole seconds left on the current question, rounded down.
    pub fn remaining_secs(&self, now: Duration) -> u64 {
        let elapsed = now.saturating_sub(self.question_started);
        self.time_limit.saturating_sub(elapsed).as_secs()
    }

    pub fn on_tick(&self, now: Duration) -> Outcome {
        if self.current_question().is_some() && self.remaining_secs(now) == 0 {
            Outcome::Fail(FailCause::Timeout)
        } else {
            Outcome::Continue
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quiz::question::Problem;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn times(a: u32, b: u32) -> Question {
        Question::from_problem(Problem::Multiplication { a, b })
    }

    fn session(level: u32) -> PuzzleSession {
        PuzzleSession::with_questions(
            level,
            vec![times(2, 3), times(4, 5), times(6, 7)],
            &PuzzleRules::default(),
            Duration::ZERO,
        )
    }

    fn type_str(s: &mut PuzzleSession, text: &str) {
        for c in text.chars() {
            assert_eq!(s.on_key(PuzzleKey::Char(c), Duration::ZERO), Outcome::Continue);
        }
    }

    fn answer(s: &mut PuzzleSession, text: &str, now: Duration) -> Outcome {
        type_str(s, text);
        s.on_key(PuzzleKey::Enter, now)
    }

    #[test]
    fn test_start_generates_question_count() {
        let mut rng = Pcg32::seed_from_u64(7);
        let s = PuzzleSession::start(2, &PuzzleRules::default(), Duration::ZERO, &mut rng);
        assert_eq!(s.questions().len(), 3);
        assert_eq!(s.current_index(), 0);
        assert!(s.input().is_empty());
        assert_eq!(s.level(), 2);
    }

    #[test]
    fn test_backspace_on_empty_is_noop() {
        let mut s = session(1);
        assert_eq!(s.on_key(PuzzleKey::Backspace, Duration::ZERO), Outcome::Continue);
        assert_eq!(s.input(), "");

        type_str(&mut s, "12");
        s.on_key(PuzzleKey::Backspace, Duration::ZERO);
        assert_eq!(s.input(), "1");
    }

    #[test]
    fn test_filters_characters() {
        let mut s = session(1);
        type_str(&mut s, "aZ9 +-()*=");
        for c in ['!', '?', '.', '/', '\t', 'é'] {
            assert_eq!(s.on_key(PuzzleKey::Char(c), Duration::ZERO), Outcome::Continue);
        }
        assert_eq!(s.input(), "aZ9 +-()*=");
    }

    #[test]
    fn test_correct_answer_advances_and_resets() {
        let mut s = session(1);
        let later = Duration::from_secs(30);
        assert_eq!(answer(&mut s, " 6 ", later), Outcome::NextQuestion);
        assert_eq!(s.current_index(), 1);
        assert_eq!(s.input(), "");
        // timer restarted at the moment of the correct answer
        assert_eq!(s.remaining_secs(later), 60);
    }

    #[test]
    fn test_wrong_answer_fails() {
        let mut s = session(3);
        assert_eq!(
            answer(&mut s, "7", Duration::ZERO),
            Outcome::Fail(FailCause::WrongAnswer)
        );
        assert_eq!(s.current_index(), 0);
    }

    #[test]
    fn test_empty_submission_fails() {
        let mut s = session(1);
        assert_eq!(
            s.on_key(PuzzleKey::Enter, Duration::ZERO),
            Outcome::Fail(FailCause::WrongAnswer)
        );
    }

    #[test]
    fn test_last_answer_clears_level_below_final() {
        let mut s = session(4);
        assert_eq!(answer(&mut s, "6", Duration::ZERO), Outcome::NextQuestion);
        assert_eq!(answer(&mut s, "20", Duration::ZERO), Outcome::NextQuestion);
        assert_eq!(answer(&mut s, "42", Duration::ZERO), Outcome::LevelCleared);
        assert_eq!(s.current_index(), 3);
        assert!(s.current_question().is_none());
    }

    #[test]
    fn test_last_answer_at_final_level_wins() {
        let mut s = session(5);
        answer(&mut s, "6", Duration::ZERO);
        answer(&mut s, "20", Duration::ZERO);
        assert_eq!(answer(&mut s, "42", Duration::ZERO), Outcome::Win);
    }

    #[test]
    fn test_enter_after_completion_is_ignored() {
        let mut s = session(1);
        answer(&mut s, "6", Duration::ZERO);
        answer(&mut s, "20", Duration::ZERO);
        answer(&mut s, "42", Duration::ZERO);
        assert_eq!(s.on_key(PuzzleKey::Enter, Duration::ZERO), Outcome::Continue);
        assert_eq!(s.current_index(), 3);
    }

    #[test]
    fn test_remaining_rounds_down() {
        let s = session(1);
        assert_eq!(s.remaining_secs(Duration::ZERO), 60);
        assert_eq!(s.remaining_secs(Duration::from_millis(500)), 59);
        assert_eq!(s.remaining_secs(Duration::from_millis(58_999)), 1);
        assert_eq!(s.remaining_secs(Duration::from_millis(59_001)), 0);
        assert_eq!(s.remaining_secs(Duration::from_secs(600)), 0);
    }

    #[test]
    fn test_tick_times_out() {
        let s = session(1);
        assert_eq!(s.on_tick(Duration::from_secs(30)), Outcome::Continue);
        assert_eq!(s.on_tick(Duration::from_millis(59_000)), Outcome::Continue);
        assert_eq!(
            s.on_tick(Duration::from_millis(60_000)),
            Outcome::Fail(FailCause::Timeout)
        );
    }

    #[test]
    fn test_idle_session_eventually_fails() {
        let s = session(1);
        let outcome = (0..=3600u64)
            .map(|frame| s.on_tick(Duration::from_millis(frame * 17)))
            .find(|o| *o != Outcome::Continue);
        assert_eq!(outcome, Some(Outcome::Fail(FailCause::Timeout)));
    }
}
