use std::fmt;

use rand::Rng;

use millionaire_core::model::{ANSWERS_PER_QUESTION, Hint, Question};

//
// ─── PHONE A FRIEND ────────────────────────────────────────────────────────────
//

/// What the friend says on the phone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FriendCall {
    /// Two different guesses, either of which may be wrong.
    DoesNotKnow(String, String),
    /// One wrong answer and the correct one, in random order.
    Unsure(String, String),
    /// The correct answer.
    Certain(String),
}

impl FriendCall {
    /// Answers the friend mentions, in the order they are said.
    #[must_use]
    pub fn answers(&self) -> Vec<&str> {
        match self {
            FriendCall::DoesNotKnow(a, b) | FriendCall::Unsure(a, b) => {
                vec![a.as_str(), b.as_str()]
            }
            FriendCall::Certain(answer) => vec![answer.as_str()],
        }
    }
}

impl fmt::Display for FriendCall {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FriendCall::DoesNotKnow(a, b) => write!(
                f,
                "Привет! Я не знаю ответа на этот вопрос 🙁\nМожет ответ «{a}» или «{b}»\n\
                 Hi! I don't know the answer to this one 🙁\nMaybe it's «{a}» or «{b}»"
            ),
            FriendCall::Unsure(a, b) => write!(
                f,
                "Привет! Я уверен, что это либо «{a}», либо «{b}» 🙂\n\
                 Hi! I'm sure it's either «{a}» or «{b}» 🙂"
            ),
            FriendCall::Certain(answer) => write!(
                f,
                "Привет! Прямо в точку, я знаю ответ! 😋\nПравильный вариант - это «{answer}»\n\
                 Hi! Spot on, I know this one! 😋\nThe correct answer is «{answer}»"
            ),
        }
    }
}

//
// ─── EFFECTS ───────────────────────────────────────────────────────────────────
//

/// What the UI should do after a hint is used.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HintEffect {
    /// Hide these two wrong answers.
    HideAnswers([String; 2]),
    /// Show the audience vote breakdown.
    AudienceVotes(String),
    Friend(FriendCall),
}

//
// ─── DISPATCHER ────────────────────────────────────────────────────────────────
//

/// Computes hint effects for one question.
///
/// Whether a hint may still be used is tracked by the session, not here.
#[derive(Debug, Clone, Copy)]
pub struct HintDispatcher<'q> {
    question: &'q Question,
}

impl<'q> HintDispatcher<'q> {
    #[must_use]
    pub fn new(question: &'q Question) -> Self {
        Self { question }
    }

    pub fn apply<R: Rng + ?Sized>(&self, hint: Hint, rng: &mut R) -> HintEffect {
        match hint {
            Hint::FiftyFifty => HintEffect::HideAnswers(self.fifty_fifty(rng)),
            Hint::AudienceHelp => HintEffect::AudienceVotes(self.audience_help()),
            Hint::PhoneFriend => HintEffect::Friend(self.phone_a_friend(rng)),
        }
    }

    /// Pick two distinct wrong answers to hide.
    pub fn fifty_fifty<R: Rng + ?Sized>(&self, rng: &mut R) -> [String; 2] {
        let first = self.random_incorrect(rng, None);
        let second = self.random_incorrect(rng, Some(first));
        [self.answer(first), self.answer(second)]
    }

    /// Audience vote breakdown for every answer, one line each.
    #[must_use]
    pub fn audience_help(&self) -> String {
        let presented: Vec<&str> = self.question.answers().iter().map(|a| a.text()).collect();
        self.audience_help_for(&presented)
    }

    /// Audience vote breakdown for the answers as presented; unknown answers are skipped.
    #[must_use]
    pub fn audience_help_for(&self, presented: &[&str]) -> String {
        presented
            .iter()
            .filter_map(|answer| {
                let percent = self.question.percent_for(answer)?;
                Some(format!("for \"{answer}\" --> {percent}% of the room"))
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Call a friend, who knows the answer with probability one third.
    pub fn phone_a_friend<R: Rng + ?Sized>(&self, rng: &mut R) -> FriendCall {
        match rng.random_range(0..90) {
            0..30 => {
                let first = rng.random_range(0..ANSWERS_PER_QUESTION);
                let second = loop {
                    let index = rng.random_range(0..ANSWERS_PER_QUESTION);
                    if index != first {
                        break index;
                    }
                };
                FriendCall::DoesNotKnow(self.answer(first), self.answer(second))
            }
            30..60 => {
                let wrong = self.answer(self.random_incorrect(rng, None));
                let correct = self.question.correct_answer().to_owned();
                if rng.random_bool(0.5) {
                    FriendCall::Unsure(wrong, correct)
                } else {
                    FriendCall::Unsure(correct, wrong)
                }
            }
            _ => FriendCall::Certain(self.question.correct_answer().to_owned()),
        }
    }

    fn answer(&self, index: usize) -> String {
        self.question
            .answer_at(index)
            .map(str::to_owned)
            .unwrap_or_default()
    }

    // A valid question always has three wrong answers, so this terminates.
    fn random_incorrect<R: Rng + ?Sized>(&self, rng: &mut R, except: Option<usize>) -> usize {
        loop {
            let index = rng.random_range(0..ANSWERS_PER_QUESTION);
            if Some(index) == except {
                continue;
            }
            match self.question.answer_at(index) {
                Some(answer) if !self.question.is_correct(answer) => return index,
                _ => {}
            }
        }
    }
}
