use thiserror::Error;

/// Why a guess, word or configuration was refused
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("guess a single letter")]
    NotSingleCharacter,
    #[error("'{0}' is not a letter")]
    NotALetter(char),
    #[error("Word is required")]
    WordRequired,
    #[error("round count must be at least 1")]
    ZeroRounds,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    /// Malformed input; the event was ignored and the caller should re-prompt
    #[error(transparent)]
    InvalidInput(#[from] InputError),
    /// Operation not supported by the current status
    #[error("cannot {operation} while {status}")]
    InvalidTransition {
        operation: &'static str,
        status: &'static str,
    },
}
