//! Game logic: round engine, word source, word validation, themes

pub mod engine;
pub mod error;
pub mod theme;
pub mod validation;
pub mod words;

pub use engine::{
    Effect, GameConfiguration, GameMode, GameResult, GuessOutcome, LetterState, Player,
    PlayerRole, RoundEngine, RoundOutcome, Status, DEFAULT_ROUNDS, MAX_LIVES,
};
pub use error::EngineError;
pub use theme::Theme;
pub use validation::{LetterValidator, WordValidator};
pub use words::{WordBank, WordSource};
