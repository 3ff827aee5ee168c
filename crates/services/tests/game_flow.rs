use std::collections::HashSet;
use std::sync::Arc;

use millionaire_core::model::{Difficulty, Hint, QuestionOrder, QuestionsBuilder, bank};
use millionaire_core::time::{fixed_clock, fixed_now};
use rand::SeedableRng;
use rand::rngs::StdRng;
use services::{AnswerOutcome, AppConfig, GamePlay, GameService, HintEffect, SessionEvent};

fn custom_questions(count: usize) -> QuestionsBuilder {
    let mut builder = QuestionsBuilder::new();
    for i in 0..count {
        builder.set_question(format!("Which colour is number {i}?"));
        for (text, percent) in [("Teal", 55), ("Amber", 25), ("Ivory", 15), ("Umber", 5)] {
            builder.set_answer(text, percent);
        }
        builder.set_correct_answer("Teal");
    }
    builder
}

fn answer_correctly(play: &mut GamePlay) -> AnswerOutcome {
    let correct = play.current_question().unwrap().correct_answer().to_owned();
    play.answer(&correct).unwrap()
}

#[tokio::test]
async fn full_win_with_hints_is_recorded() {
    let service = GameService::in_memory(fixed_clock());
    let mut rng = StdRng::seed_from_u64(42);
    let (tx, mut rx) = tokio::sync::mpsc::unbounded_channel::<SessionEvent>();

    let mut play = service.start_game(&mut rng).await.unwrap();
    play.subscribe(Arc::new(tx));

    let effect = play.use_hint(Hint::AudienceHelp, &mut rng).unwrap();
    assert!(matches!(effect, Some(HintEffect::AudienceVotes(_))));

    let mut last = None;
    while !play.is_over() {
        last = Some(answer_correctly(&mut play));
    }
    assert_eq!(last, Some(AnswerOutcome::Won { coins: 1_000_000 }));

    let record = service.finish_game(play).await.unwrap();
    assert_eq!(record.coins(), 1_000_000);
    assert_eq!(record.score(), 100);
    assert_eq!(record.hints_used(), 1);
    assert_eq!(record.recorded_at(), fixed_now());
    assert_eq!(service.score_history().await, vec![record.clone()]);

    let mut events = Vec::new();
    while let Ok(event) = rx.try_recv() {
        events.push(event);
    }
    assert_eq!(events.len(), 12);
    assert!(matches!(events[0], SessionEvent::HintUsed { remaining: 2, .. }));
    assert_eq!(events.last(), Some(&SessionEvent::Finished(record)));
}

#[tokio::test]
async fn loss_after_five_pays_fifth_tier() {
    let service = GameService::in_memory(fixed_clock());
    service.set_difficulty(Difficulty::Hard).await.unwrap();
    let mut rng = StdRng::seed_from_u64(7);

    let mut play = service.start_game(&mut rng).await.unwrap();
    assert_eq!(play.questions(), bank::hard_questions().as_slice());
    for _ in 0..5 {
        answer_correctly(&mut play);
    }
    let wrong = play
        .current_question()
        .unwrap()
        .incorrect_answers()
        .next()
        .unwrap()
        .to_owned();
    assert!(matches!(
        play.answer(&wrong).unwrap(),
        AnswerOutcome::Lost { .. }
    ));

    let record = service.finish_game(play).await.unwrap();
    assert_eq!(record.coins(), 32_000);
    assert_eq!(record.score(), 50);
    assert_eq!(record.difficulty(), Difficulty::Hard);
}

#[tokio::test]
async fn user_questions_only_replace_the_tail_below_hard() {
    let service = GameService::in_memory(fixed_clock());
    service.add_user_questions(&custom_questions(4)).await.unwrap();
    let custom: HashSet<String> = service
        .user_questions()
        .await
        .iter()
        .map(|q| q.text().to_owned())
        .collect();

    let mut saw_custom = false;
    for seed in 0..20 {
        let mut rng = StdRng::seed_from_u64(seed);
        let play = service.start_game(&mut rng).await.unwrap();
        let mixed = play
            .questions()
            .iter()
            .filter(|q| custom.contains(q.text()))
            .count();
        assert!(mixed <= 4);
        saw_custom |= mixed > 0;
        assert_eq!(play.total_questions(), 10);
    }
    assert!(saw_custom);

    service.set_difficulty(Difficulty::Hard).await.unwrap();
    for seed in 0..20 {
        let mut rng = StdRng::seed_from_u64(seed);
        let play = service.start_game(&mut rng).await.unwrap();
        assert!(play.questions().iter().all(|q| !custom.contains(q.text())));
    }
}

#[tokio::test]
async fn random_order_keeps_the_same_questions() {
    let service = GameService::in_memory(fixed_clock());
    service.set_question_order(QuestionOrder::Random).await.unwrap();
    let mut rng = StdRng::seed_from_u64(9);

    let play = service.start_game(&mut rng).await.unwrap();
    let played: HashSet<String> = play.questions().iter().map(|q| q.text().to_owned()).collect();
    let expected: HashSet<String> = bank::easy_questions()
        .iter()
        .map(|q| q.text().to_owned())
        .collect();
    assert_eq!(played, expected);
}

#[tokio::test]
async fn sqlite_service_keeps_history_across_instances() {
    let config = AppConfig {
        db_url: "sqlite:file:memdb_game_flow?mode=memory&cache=shared".into(),
        log_level: None,
    };
    let first = GameService::sqlite(&config, fixed_clock()).await.unwrap();
    first.set_difficulty(Difficulty::Medium).await.unwrap();
    first.add_user_questions(&custom_questions(2)).await.unwrap();

    let mut rng = StdRng::seed_from_u64(11);
    let mut play = first.start_game(&mut rng).await.unwrap();
    answer_correctly(&mut play);
    answer_correctly(&mut play);
    let record = first.finish_game(play).await.unwrap();

    let second = GameService::sqlite(&config, fixed_clock()).await.unwrap();
    assert_eq!(second.settings().await.difficulty, Difficulty::Medium);
    assert_eq!(second.user_questions().await.len(), 2);
    assert_eq!(second.score_history().await, vec![record]);
}
