//! Prize ladder and score arithmetic.

/// Coins awarded after 1..=10 correct answers.
pub const PRIZE_LADDER: [u32; 10] = [
    2_000, 4_000, 8_000, 16_000, 32_000, 64_000, 125_000, 250_000, 500_000, 1_000_000,
];

/// Longest game the ladder can pay out.
pub const MAX_QUESTIONS: u32 = 10;

/// Correct answers needed before a loss still pays out.
pub const LOSS_PAYOUT_THRESHOLD: u32 = 3;

/// Coins for the given number of correct answers, `None` for 0 or past the ladder.
#[must_use]
pub fn prize_for(correct: u32) -> Option<u32> {
    let index = usize::try_from(correct.checked_sub(1)?).ok()?;
    PRIZE_LADDER.get(index).copied()
}

/// Coins kept when the game ends on a wrong answer.
///
/// Below [`LOSS_PAYOUT_THRESHOLD`] correct answers nothing is paid.
#[must_use]
pub fn fallback_prize(correct: u32) -> u32 {
    if correct < LOSS_PAYOUT_THRESHOLD {
        return 0;
    }
    prize_for(correct).unwrap_or(0)
}

/// Score percentage, truncated the same way at every step: `100 / total * correct`.
#[must_use]
pub fn score_percentage(total: u32, correct: u32) -> u32 {
    if total == 0 {
        return 0;
    }
    100 / total * correct
}
