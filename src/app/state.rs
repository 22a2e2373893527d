//! In-game state: one engine plus the input buffer and feedback line

use crate::game::{
    Effect, EngineError, GameConfiguration, GameMode, GameResult, GuessOutcome, LetterValidator,
    Player, PlayerRole, RoundEngine, Status, WordBank, WordSource, WordValidator,
};
use tracing::warn;

/// Longest word or phrase a player may type
pub const MAX_WORD_LENGTH: usize = 30;

/// A game in progress
pub struct App<S = WordBank> {
    engine: RoundEngine<S>,
    validator: LetterValidator,
    /// Word being typed by the word provider (duel)
    pub input: String,
    /// Feedback message from the last action
    pub feedback: String,
    /// Set once the player dismisses the game-over screen
    pub finished: bool,
}

impl<S: WordSource> App<S> {
    /// Configure a new engine and start the game
    pub fn start(config: GameConfiguration, source: S) -> Result<Self, EngineError> {
        let mut engine = RoundEngine::new(source);
        engine.select_mode(config)?;
        let mut app = Self {
            engine,
            validator: LetterValidator,
            input: String::new(),
            feedback: String::new(),
            finished: false,
        };
        app.feedback = app.status_prompt();
        Ok(app)
    }

    pub fn engine(&self) -> &RoundEngine<S> {
        &self.engine
    }

    /// Handle character input: word entry or a letter guess
    pub fn on_char(&mut self, c: char) {
        match self.engine.status() {
            Status::AwaitingWord => {
                if self.input.chars().count() < MAX_WORD_LENGTH {
                    self.input.push(c);
                    self.feedback.clear();
                }
            }
            Status::Playing => {
                let result = self.engine.guess_letter(&c.to_string());
                self.apply(result);
            }
            _ => {}
        }
    }

    /// Handle backspace (word entry only)
    pub fn on_backspace(&mut self) {
        if self.engine.status() == Status::AwaitingWord {
            self.input.pop();
            self.feedback.clear();
        }
    }

    /// Handle Enter: submit a word or move past a result screen
    pub fn on_submit(&mut self) {
        match self.engine.status() {
            Status::AwaitingWord => self.submit_input(),
            Status::RoundResult(_) => {
                let result = self.engine.advance();
                self.apply(result);
            }
            Status::SwitchRoles => {
                let result = self.engine.confirm_switch();
                self.apply(result);
            }
            Status::End => {
                self.finished = true;
            }
            Status::Setup | Status::Playing => {}
        }
    }

    /// Abandon the game; returns its settings so the menu can reuse them
    pub fn leave(&mut self) -> GameConfiguration {
        let config = self.engine.config().clone();
        self.engine.reset_game();
        self.input.clear();
        self.feedback.clear();
        self.finished = true;
        config
    }

    fn submit_input(&mut self) {
        if !self.validator.is_acceptable(&self.input) {
            let reason = self.validator.check(&self.input).message();
            warn!(%reason, "word submission rejected");
            self.feedback = reason;
            return;
        }

        let word = self.input.to_lowercase();
        let result = self.engine.submit_word(&word);
        if result.is_ok() {
            self.input.clear();
        }
        self.apply(result);
    }

    fn apply(&mut self, result: Result<Effect, EngineError>) {
        match result {
            Ok(effect) => self.feedback = self.describe(effect),
            Err(e) => {
                warn!(error = %e, "action rejected");
                self.feedback = e.to_string();
            }
        }
    }

    fn describe(&self, effect: Effect) -> String {
        let round = self.engine.round();
        match effect {
            Effect::Guess(GuessOutcome::Repeated) => "Already tried that letter".to_string(),
            Effect::Guess(GuessOutcome::Correct) => "Nice!".to_string(),
            Effect::Guess(GuessOutcome::Incorrect { remaining_lives }) => {
                format!("Nope. {} lives left", remaining_lives)
            }
            Effect::Guess(GuessOutcome::Solved) | Effect::RoundEnded(_) => {
                "Congratulations! You guessed the word correctly!".to_string()
            }
            Effect::Guess(GuessOutcome::Hanged) => {
                format!("The word was: {}", round.current_word())
            }
            Effect::GameOver(result) => self.end_message_for(result),
            _ => self.status_prompt(),
        }
    }

    /// Prompt for the current status
    fn status_prompt(&self) -> String {
        let config = self.engine.config();
        match self.engine.status() {
            Status::AwaitingWord => format!(
                "{}: enter a word for {} to guess",
                config.player_name(self.engine.word_provider()),
                config.player_name(self.engine.round().current_player())
            ),
            Status::Playing => "Guess a letter".to_string(),
            Status::SwitchRoles => "Switch seats! Press Enter when ready".to_string(),
            _ => String::new(),
        }
    }

    /// Closing line for the game-over screen
    pub fn end_message(&self) -> Option<String> {
        self.engine.result().map(|r| self.end_message_for(r))
    }

    fn end_message_for(&self, result: GameResult) -> String {
        let config = self.engine.config();
        match result {
            GameResult::Solved { solved, rounds } => {
                let verdict = if solved >= rounds * 4 / 5 {
                    "Excellent job!"
                } else if solved >= rounds / 2 {
                    "Well done!"
                } else {
                    "Better luck next time!"
                };
                format!(
                    "You correctly guessed {} out of {} words. {}",
                    solved, rounds, verdict
                )
            }
            GameResult::Winner(player) => format!("{} wins!", config.player_name(player)),
            GameResult::Tie => "It's a tie!".to_string(),
        }
    }

    /// Name of whoever is guessing right now
    pub fn guesser_name(&self) -> &str {
        self.engine
            .config()
            .player_name(self.engine.round().current_player())
    }

    /// Scoreboard rows: (name, score, is guessing)
    pub fn scoreboard(&self) -> Vec<(String, u32, bool)> {
        let config = self.engine.config();
        let round = self.engine.round();
        let players: &[Player] = match config.mode {
            GameMode::Solo => &[Player::One],
            GameMode::Duel => &[Player::One, Player::Two],
        };
        players
            .iter()
            .map(|p| {
                (
                    config.player_name(*p).to_string(),
                    round.scores()[p.index()],
                    self.engine.role_of(*p) == PlayerRole::Guesser,
                )
            })
            .collect()
    }
}
