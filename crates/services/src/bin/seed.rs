use std::fmt;

use chrono::{DateTime, Utc};
use millionaire_core::model::QuestionsBuilder;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use services::{AppConfig, Clock, GameService, telemetry};
use tracing::info;

#[derive(Debug, Clone)]
struct Args {
    db_url: Option<String>,
    user_questions: u32,
    games: u32,
    seed: u64,
    now: Option<DateTime<Utc>>,
}

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidDbUrl { raw: String },
    InvalidNumber { flag: &'static str, raw: String },
    InvalidNow { raw: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidDbUrl { raw } => write!(f, "invalid --db value: {raw}"),
            ArgsError::InvalidNumber { flag, raw } => write!(f, "invalid {flag} value: {raw}"),
            ArgsError::InvalidNow { raw } => {
                write!(f, "invalid --now value (expected RFC3339): {raw}")
            }
        }
    }
}

impl std::error::Error for ArgsError {}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

fn parse_number<T: std::str::FromStr>(raw: String, flag: &'static str) -> Result<T, ArgsError> {
    raw.parse::<T>()
        .map_err(|_| ArgsError::InvalidNumber { flag, raw })
}

fn env_number<T: std::str::FromStr>(name: &str, default: T) -> T {
    std::env::var(name)
        .ok()
        .and_then(|value| value.parse::<T>().ok())
        .unwrap_or(default)
}

impl Args {
    fn parse() -> Result<Self, ArgsError> {
        let mut db_url = None;
        let mut user_questions = env_number("MILLIONAIRE_SEED_QUESTIONS", 3);
        let mut games = env_number("MILLIONAIRE_SEED_GAMES", 5);
        let mut seed = env_number("MILLIONAIRE_SEED", 2024);
        let mut now: Option<DateTime<Utc>> = None;

        let mut args = std::env::args().skip(1);
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--db" => {
                    let value = require_value(&mut args, "--db")?;
                    if value.trim().is_empty() {
                        return Err(ArgsError::InvalidDbUrl { raw: value });
                    }
                    db_url = Some(value);
                }
                "--user-questions" => {
                    let value = require_value(&mut args, "--user-questions")?;
                    user_questions = parse_number(value, "--user-questions")?;
                }
                "--games" => {
                    let value = require_value(&mut args, "--games")?;
                    games = parse_number(value, "--games")?;
                }
                "--seed" => {
                    let value = require_value(&mut args, "--seed")?;
                    seed = parse_number(value, "--seed")?;
                }
                "--now" => {
                    let value = require_value(&mut args, "--now")?;
                    let parsed = DateTime::parse_from_rfc3339(&value)
                        .map_err(|_| ArgsError::InvalidNow { raw: value.clone() })?
                        .with_timezone(&Utc);
                    now = Some(parsed);
                }
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(Self {
            db_url,
            user_questions,
            games,
            seed,
            now,
        })
    }
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p services --bin seed -- [options]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --db <sqlite_url>         SQLite URL (default: from config)");
    eprintln!("  --user-questions <n>      Number of sample user questions to store (default: 3)");
    eprintln!("  --games <n>               Number of simulated games to record (default: 5)");
    eprintln!("  --seed <n>                Random seed for the simulated games (default: 2024)");
    eprintln!("  --now <rfc3339>           Fixed current time for deterministic seeding");
    eprintln!("  -h, --help                Show this help");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  MILLIONAIRE_CONFIG_PATH, MILLIONAIRE_DB_URL, LOG_LEVEL, LOG_FORMAT");
    eprintln!("  MILLIONAIRE_SEED_QUESTIONS, MILLIONAIRE_SEED_GAMES, MILLIONAIRE_SEED");
}

const SAMPLES: [(&str, &str, [(&str, u8); 4]); 3] = [
    (
        "What is the boiling point of water at sea level in Celsius?",
        "100",
        [("90", 5), ("100", 80), ("110", 10), ("120", 5)],
    ),
    (
        "How many continents are there?",
        "7",
        [("5", 10), ("6", 20), ("7", 65), ("8", 5)],
    ),
    (
        "Which gas do plants absorb from the air?",
        "Carbon dioxide",
        [("Oxygen", 30), ("Nitrogen", 10), ("Carbon dioxide", 55), ("Helium", 5)],
    ),
];

fn sample_questions(count: u32) -> QuestionsBuilder {
    let mut builder = QuestionsBuilder::new();
    for (text, correct, answers) in SAMPLES.iter().cycle().take(count as usize) {
        builder.set_question(*text);
        for (answer, percent) in answers {
            builder.set_answer(*answer, *percent);
        }
        builder.set_correct_answer(*correct);
    }
    builder
}

async fn play_one(
    service: &GameService,
    rng: &mut StdRng,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut play = service.start_game(rng).await?;

    // The simulated player gets each question right with 80% odds and may walk away early.
    while let Some(question) = play.current_question() {
        if rng.random_bool(0.1) {
            break;
        }
        let answer = if rng.random_bool(0.8) {
            question.correct_answer().to_owned()
        } else {
            question
                .incorrect_answers()
                .next()
                .unwrap_or_default()
                .to_owned()
        };
        play.answer(&answer)?;
    }

    service.finish_game(play).await?;
    Ok(())
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse().map_err(|e| {
        eprintln!("{e}");
        print_usage();
        e
    })?;

    let mut config = AppConfig::from_env()?;
    telemetry::init_tracing(config.log_filter());
    if let Some(db_url) = args.db_url.clone() {
        config.db_url = db_url;
    }

    let clock = args.now.map_or(Clock::System, Clock::fixed);
    let service = GameService::sqlite(&config, clock).await?;

    let added = service
        .add_user_questions(&sample_questions(args.user_questions))
        .await?;

    let mut rng = StdRng::seed_from_u64(args.seed);
    for _ in 0..args.games {
        play_one(&service, &mut rng).await?;
    }

    info!(
        db_url = %config.db_url,
        user_questions = added,
        games = args.games,
        history = service.score_history().await.len(),
        "seeded database"
    );

    Ok(())
}

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        eprintln!("{err}");
        std::process::exit(2);
    }
}
