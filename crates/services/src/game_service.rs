use rand::Rng;
use tracing::info;

use millionaire_core::model::{
    Difficulty, GameSettings, Question, QuestionOrder, QuestionsBuilder, ScoreRecord,
};
use storage::repository::Storage;

use crate::config::AppConfig;
use crate::error::GameError;
use crate::play::GamePlay;
use crate::strategy::select_questions;
use crate::Clock;

/// Entry point for the game: settings, the player's own questions, starting
/// and scoring games, and the score history.
#[derive(Clone)]
pub struct GameService {
    clock: Clock,
    storage: Storage,
}

impl GameService {
    #[must_use]
    pub fn new(storage: Storage, clock: Clock) -> Self {
        Self { clock, storage }
    }

    #[must_use]
    pub fn in_memory(clock: Clock) -> Self {
        Self::new(Storage::in_memory(), clock)
    }

    /// Build a service backed by `SQLite` at `config.db_url`.
    ///
    /// # Errors
    ///
    /// Returns `GameError::Sqlite` if the database cannot be opened or migrated.
    pub async fn sqlite(config: &AppConfig, clock: Clock) -> Result<Self, GameError> {
        let storage = Storage::sqlite(&config.db_url).await?;
        Ok(Self::new(storage, clock))
    }

    pub async fn settings(&self) -> GameSettings {
        self.storage.settings.restore().await
    }

    /// # Errors
    ///
    /// Returns `GameError::Storage` if the setting cannot be saved.
    pub async fn set_difficulty(&self, difficulty: Difficulty) -> Result<(), GameError> {
        self.storage.settings.save_difficulty(difficulty).await?;
        Ok(())
    }

    /// # Errors
    ///
    /// Returns `GameError::Storage` if the setting cannot be saved.
    pub async fn set_question_order(&self, order: QuestionOrder) -> Result<(), GameError> {
        self.storage.settings.save_order(order).await?;
        Ok(())
    }

    /// Past results, newest first.
    pub async fn score_history(&self) -> Vec<ScoreRecord> {
        self.storage.scores.restore().await
    }

    /// # Errors
    ///
    /// Returns `GameError::Storage` if the history cannot be removed.
    pub async fn clear_score_history(&self) -> Result<(), GameError> {
        self.storage.scores.clear().await?;
        info!("score history cleared");
        Ok(())
    }

    pub async fn user_questions(&self) -> Vec<Question> {
        self.storage.questions.restore().await
    }

    /// Validate the builder's questions and store them after the existing ones.
    ///
    /// Returns how many questions were added. Nothing is stored if any entry
    /// is invalid.
    ///
    /// # Errors
    ///
    /// Returns `GameError::Build` for invalid input and `GameError::Storage`
    /// if the questions cannot be saved.
    pub async fn add_user_questions(&self, builder: &QuestionsBuilder) -> Result<usize, GameError> {
        let questions = builder.build()?;
        let added = questions.len();
        if added == 0 {
            return Ok(0);
        }

        let stored = self.storage.questions.append(questions).await?;
        info!(added, total = stored.len(), "user questions saved");
        Ok(added)
    }

    /// Pick questions for the saved settings and start a game.
    ///
    /// # Errors
    ///
    /// Returns `GameError::Session` if no playable question list can be built.
    pub async fn start_game<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<GamePlay, GameError> {
        let settings = self.settings().await;
        let user_questions = self.user_questions().await;
        let questions = select_questions(settings, &user_questions, rng);

        info!(
            difficulty = ?settings.difficulty,
            order = ?settings.order,
            questions = questions.len(),
            "game started"
        );
        GamePlay::new(questions, settings.difficulty)
    }

    /// Score a finished or abandoned game and put it at the top of the history.
    ///
    /// # Errors
    ///
    /// Returns `GameError::Storage` if the history cannot be saved.
    pub async fn finish_game(&self, play: GamePlay) -> Result<ScoreRecord, GameError> {
        let lost = play.is_lost();
        let record = play.finish(self.clock.now());
        self.storage.scores.prepend(record.clone()).await?;

        info!(
            lost,
            score = record.score(),
            coins = record.coins(),
            hints_used = record.hints_used(),
            "game finished"
        );
        Ok(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use millionaire_core::time::{fixed_clock, fixed_now};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn builder_with(count: usize) -> QuestionsBuilder {
        let mut builder = QuestionsBuilder::new();
        for i in 0..count {
            builder.set_question(format!("Custom question {i}?"));
            for (text, percent) in [("Red", 40), ("Green", 30), ("Blue", 20), ("Black", 10)] {
                builder.set_answer(text, percent);
            }
            builder.set_correct_answer("Red");
        }
        builder
    }

    #[tokio::test]
    async fn settings_default_and_persist() {
        let service = GameService::in_memory(fixed_clock());
        assert_eq!(service.settings().await, GameSettings::default());

        service.set_difficulty(Difficulty::Hard).await.unwrap();
        service.set_question_order(QuestionOrder::Random).await.unwrap();
        assert_eq!(
            service.settings().await,
            GameSettings::new(Difficulty::Hard, QuestionOrder::Random)
        );
    }

    #[tokio::test]
    async fn serial_easy_game_starts_with_bank_order() {
        let service = GameService::in_memory(fixed_clock());
        let mut rng = StdRng::seed_from_u64(1);
        let play = service.start_game(&mut rng).await.unwrap();

        assert_eq!(play.total_questions(), 10);
        assert_eq!(play.difficulty(), Difficulty::Easy);
        assert_eq!(
            play.questions(),
            millionaire_core::model::bank::easy_questions().as_slice()
        );
    }

    #[tokio::test]
    async fn add_user_questions_appends_and_rejects_invalid() {
        let service = GameService::in_memory(fixed_clock());
        assert_eq!(service.add_user_questions(&builder_with(2)).await.unwrap(), 2);
        assert_eq!(service.add_user_questions(&builder_with(1)).await.unwrap(), 1);
        assert_eq!(service.user_questions().await.len(), 3);

        let mut broken = builder_with(1);
        broken.set_question("Dangling?");
        assert!(matches!(
            service.add_user_questions(&broken).await,
            Err(GameError::Build(_))
        ));
        assert_eq!(service.user_questions().await.len(), 3);

        assert_eq!(
            service.add_user_questions(&QuestionsBuilder::new()).await.unwrap(),
            0
        );
    }

    #[tokio::test]
    async fn finish_game_prepends_history() {
        let service = GameService::in_memory(fixed_clock());
        let mut rng = StdRng::seed_from_u64(3);

        let play = service.start_game(&mut rng).await.unwrap();
        let first = service.finish_game(play).await.unwrap();
        assert_eq!(first.coins(), 0);
        assert_eq!(first.recorded_at(), fixed_now());

        let mut play = service.start_game(&mut rng).await.unwrap();
        let correct = play.current_question().unwrap().correct_answer().to_owned();
        play.answer(&correct).unwrap();
        let second = service.finish_game(play).await.unwrap();
        assert_eq!(second.coins(), 2_000);

        assert_eq!(service.score_history().await, vec![second, first]);

        service.clear_score_history().await.unwrap();
        assert!(service.score_history().await.is_empty());
    }
}
