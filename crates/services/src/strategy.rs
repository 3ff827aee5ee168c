//! Picks and orders the questions for a new game.

use rand::Rng;
use rand::seq::SliceRandom;

use millionaire_core::model::{Difficulty, GameSettings, Question, QuestionOrder, bank};
use millionaire_core::prize::MAX_QUESTIONS;

/// Questions for one game under the given settings.
///
/// Easy and medium games replace a random number of bank questions at the end
/// with the player's own questions; hard games use the bank only.
pub fn select_questions<R: Rng + ?Sized>(
    settings: GameSettings,
    user_questions: &[Question],
    rng: &mut R,
) -> Vec<Question> {
    let mut questions = match settings.difficulty {
        Difficulty::Easy => mix_in(bank::easy_questions(), user_questions, rng),
        Difficulty::Medium => mix_in(bank::hard_questions(), user_questions, rng),
        Difficulty::Hard => bank::hard_questions(),
    };
    questions.truncate(usize::try_from(MAX_QUESTIONS).unwrap_or(usize::MAX));

    match settings.order {
        QuestionOrder::Serial => {}
        QuestionOrder::Random => questions.shuffle(rng),
    }
    questions
}

fn mix_in<R: Rng + ?Sized>(
    mut bank: Vec<Question>,
    user_questions: &[Question],
    rng: &mut R,
) -> Vec<Question> {
    let max = user_questions.len().min(bank.len());
    let taken = rng.random_range(0..=max);
    bank.truncate(bank.len() - taken);
    bank.extend(user_questions.iter().take(taken).cloned());
    bank
}
