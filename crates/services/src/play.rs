use std::fmt;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use rand::Rng;
use tracing::debug;

use millionaire_core::model::{Difficulty, GameSession, Hint, Question, ScoreRecord};

use crate::error::GameError;
use crate::hints::{HintDispatcher, HintEffect};
use crate::observer::{SessionEvent, SessionObserver};

/// Result of answering the current question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnswerOutcome {
    /// Right answer, another question follows.
    Correct { correct: u32, coins: u32 },
    /// Right answer to the last question.
    Won { coins: u32 },
    /// Wrong answer; the game is over.
    Lost { correct_answer: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Playing,
    Won,
    Lost,
}

/// One playthrough: the selected questions, the position in them and the
/// session counters.
pub struct GamePlay {
    questions: Vec<Question>,
    current: usize,
    session: GameSession,
    difficulty: Difficulty,
    phase: Phase,
    observers: Vec<Arc<dyn SessionObserver>>,
}

impl GamePlay {
    /// Start playing through `questions` in order.
    ///
    /// # Errors
    ///
    /// Returns `GameError::Session` if the question count cannot be played.
    pub fn new(questions: Vec<Question>, difficulty: Difficulty) -> Result<Self, GameError> {
        let session = GameSession::new(questions.len())?;
        Ok(Self {
            questions,
            current: 0,
            session,
            difficulty,
            phase: Phase::Playing,
            observers: Vec::new(),
        })
    }

    pub fn subscribe(&mut self, observer: Arc<dyn SessionObserver>) {
        self.observers.push(observer);
    }

    #[must_use]
    pub fn session(&self) -> &GameSession {
        &self.session
    }

    #[must_use]
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    #[must_use]
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    /// The question waiting for an answer, `None` once the game is over.
    #[must_use]
    pub fn current_question(&self) -> Option<&Question> {
        if self.is_over() {
            return None;
        }
        self.questions.get(self.current)
    }

    /// 1-based number of the current question.
    #[must_use]
    pub fn question_number(&self) -> usize {
        (self.current + 1).min(self.questions.len())
    }

    #[must_use]
    pub fn total_questions(&self) -> usize {
        self.questions.len()
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.phase != Phase::Playing
    }

    #[must_use]
    pub fn is_lost(&self) -> bool {
        self.phase == Phase::Lost
    }

    /// Answer the current question.
    ///
    /// # Errors
    ///
    /// Returns `GameError::GameOver` once the game has been won or lost.
    pub fn answer(&mut self, answer: &str) -> Result<AnswerOutcome, GameError> {
        let question = self.current_question().ok_or(GameError::GameOver)?;

        if !question.is_correct(answer) {
            let correct_answer = question.correct_answer().to_owned();
            self.phase = Phase::Lost;
            debug!(
                question = self.question_number(),
                correct = self.session.correct_answers(),
                "wrong answer"
            );
            return Ok(AnswerOutcome::Lost { correct_answer });
        }

        self.session.record_correct_answer()?;
        self.current += 1;
        let (correct, coins) = (self.session.correct_answers(), self.session.coins());
        self.notify(&SessionEvent::CorrectAnswer {
            correct,
            coins,
            score: self.session.score(),
        });

        if self.current >= self.questions.len() {
            self.phase = Phase::Won;
            return Ok(AnswerOutcome::Won { coins });
        }
        Ok(AnswerOutcome::Correct { correct, coins })
    }

    /// Use a hint on the current question.
    ///
    /// Returns `Ok(None)` when the hint was already used in this game.
    ///
    /// # Errors
    ///
    /// Returns `GameError::GameOver` once the game has been won or lost.
    pub fn use_hint<R: Rng + ?Sized>(
        &mut self,
        hint: Hint,
        rng: &mut R,
    ) -> Result<Option<HintEffect>, GameError> {
        let question = self.current_question().ok_or(GameError::GameOver)?;
        if !self.session.is_hint_available(hint) {
            return Ok(None);
        }

        let effect = HintDispatcher::new(question).apply(hint, rng);
        self.session.use_hint(hint);
        self.notify(&SessionEvent::HintUsed {
            hint,
            remaining: self.session.available_hints().len(),
        });
        Ok(Some(effect))
    }

    /// End the game and score it.
    ///
    /// Only a wrong answer counts as a loss; leaving early keeps the coins won so far.
    #[must_use]
    pub fn finish(self, at: DateTime<Utc>) -> ScoreRecord {
        let record = self
            .session
            .clone()
            .finalize(self.is_lost(), self.difficulty, at);
        self.notify(&SessionEvent::Finished(record.clone()));
        record
    }

    fn notify(&self, event: &SessionEvent) {
        for observer in &self.observers {
            observer.on_event(event);
        }
    }
}

impl fmt::Debug for GamePlay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GamePlay")
            .field("questions_len", &self.questions.len())
            .field("current", &self.current)
            .field("session", &self.session)
            .field("difficulty", &self.difficulty)
            .field("phase", &self.phase)
            .field("observers_len", &self.observers.len())
            .finish()
    }
}
