use thiserror::Error;

use crate::model::{BuildError, QuestionError, SessionError};

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    #[error(transparent)]
    Question(#[from] QuestionError),
    #[error(transparent)]
    Build(#[from] BuildError),
    #[error(transparent)]
    Session(#[from] SessionError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{GameSession, QuestionsBuilder};

    #[test]
    fn wraps_model_errors() {
        let err: Error = GameSession::new(0).unwrap_err().into();
        assert!(matches!(err, Error::Session(_)));

        let mut builder = QuestionsBuilder::new();
        builder.set_question("Unanswered?");
        let err = Error::from(builder.build().unwrap_err());
        assert!(err.to_string().contains("is not equal"));
    }
}
