#![forbid(unsafe_code)]

pub mod config;
pub mod error;
pub mod game_service;
pub mod hints;
pub mod observer;
pub mod play;
pub mod strategy;
pub mod telemetry;

pub use millionaire_core::Clock;

pub use config::AppConfig;
pub use error::{ConfigError, GameError};
pub use game_service::GameService;
pub use hints::{FriendCall, HintDispatcher, HintEffect};
pub use observer::{SessionEvent, SessionObserver};
pub use play::{AnswerOutcome, GamePlay};
pub use strategy::select_questions;
