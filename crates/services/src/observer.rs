use tokio::sync::mpsc::UnboundedSender;
use tracing::debug;

use millionaire_core::model::{Hint, ScoreRecord};

/// Changes a UI may want to reflect while a game is running.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    CorrectAnswer { correct: u32, coins: u32, score: u32 },
    HintUsed { hint: Hint, remaining: usize },
    Finished(ScoreRecord),
}

/// Receives session events as they happen.
pub trait SessionObserver: Send + Sync {
    fn on_event(&self, event: &SessionEvent);
}

impl SessionObserver for UnboundedSender<SessionEvent> {
    fn on_event(&self, event: &SessionEvent) {
        if self.send(event.clone()).is_err() {
            debug!("session event receiver dropped");
        }
    }
}
