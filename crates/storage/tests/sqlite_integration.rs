use chrono::Duration;
use millionaire_core::model::{
    AnswerOption, Difficulty, Question, QuestionOrder, ScoreRecord,
};
use millionaire_core::time::fixed_now;
use storage::repository::{KeyValueRepository, Storage};
use storage::sqlite::SqliteRepository;
use storage::stores::SCORES_KEY;

fn question(text: &str, correct: &str) -> Question {
    Question::new(
        text,
        [
            AnswerOption::new("Red", 10),
            AnswerOption::new("Green", 20),
            AnswerOption::new("Blue", 30),
            AnswerOption::new("Yellow", 40),
        ],
        correct,
    )
    .unwrap()
}

#[tokio::test]
async fn sqlite_key_value_roundtrip() {
    let repo = SqliteRepository::connect("sqlite:file:memdb_kv?mode=memory&cache=shared")
        .await
        .expect("connect");
    repo.migrate().await.expect("migrate");
    // Running migrations twice is a no-op.
    repo.migrate().await.expect("migrate again");

    assert_eq!(repo.get("missing").await.unwrap(), None);

    repo.set("settings.level", "\"hard\"").await.unwrap();
    repo.set("settings.level", "\"medium\"").await.unwrap();
    assert_eq!(
        repo.get("settings.level").await.unwrap().as_deref(),
        Some("\"medium\"")
    );

    repo.remove("settings.level").await.unwrap();
    assert_eq!(repo.get("settings.level").await.unwrap(), None);
}

#[tokio::test]
async fn sqlite_storage_persists_typed_stores() {
    let storage = Storage::sqlite("sqlite:file:memdb_stores?mode=memory&cache=shared")
        .await
        .expect("storage");

    assert!(storage.scores.restore().await.is_empty());

    let now = fixed_now();
    let older = ScoreRecord::new(now, 30, 8_000, 2, Difficulty::Easy);
    let newer = ScoreRecord::new(now + Duration::minutes(5), 100, 1_000_000, 0, Difficulty::Hard);
    storage.scores.prepend(older.clone()).await.unwrap();
    storage.scores.prepend(newer.clone()).await.unwrap();
    assert_eq!(storage.scores.restore().await, vec![newer, older]);

    storage.settings.save_difficulty(Difficulty::Medium).await.unwrap();
    storage.settings.save_order(QuestionOrder::Random).await.unwrap();
    let settings = storage.settings.restore().await;
    assert_eq!(settings.difficulty, Difficulty::Medium);
    assert_eq!(settings.order, QuestionOrder::Random);

    let questions = vec![question("Sky?", "Blue"), question("Grass?", "Green")];
    storage.questions.save(&questions).await.unwrap();
    assert_eq!(storage.questions.restore().await, questions);

    storage.scores.clear().await.unwrap();
    assert!(storage.scores.restore().await.is_empty());
}

#[tokio::test]
async fn sqlite_corrupt_history_restores_empty() {
    let repo = SqliteRepository::connect("sqlite:file:memdb_corrupt?mode=memory&cache=shared")
        .await
        .expect("connect");
    repo.migrate().await.expect("migrate");
    repo.set(SCORES_KEY, "[{\"score\":").await.unwrap();

    let storage = Storage::new(std::sync::Arc::new(repo));
    assert!(storage.scores.restore().await.is_empty());
}
