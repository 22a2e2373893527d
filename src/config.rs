//! Command-line configuration

use crate::game::{GameConfiguration, GameMode, Theme, DEFAULT_ROUNDS};
use clap::Parser;

/// Most rounds the menu offers
pub const MAX_ROUNDS: u32 = 10;

/// Terminal hangman for one player or two at the same keyboard
#[derive(Debug, Clone, Parser)]
#[command(name = "hangman", version)]
pub struct Cli {
    /// Rounds per game (a duel round is one turn for each player)
    #[arg(short, long, default_value_t = DEFAULT_ROUNDS, value_parser = clap::value_parser!(u32).range(1..=10))]
    pub rounds: u32,

    /// Name shown for player 1
    #[arg(long, default_value = "Player 1")]
    pub player1: String,

    /// Name shown for player 2
    #[arg(long, default_value = "Player 2")]
    pub player2: String,

    /// Look of the hanged figure
    #[arg(short, long, value_enum, default_value_t = Theme::Classic)]
    pub theme: Theme,

    /// Seed for solo word selection, for repeatable games
    #[arg(long)]
    pub seed: Option<u64>,

    /// Log level when HANGMAN_LOG is not set
    #[arg(long, default_value = "info")]
    pub log_level: String,
}

impl Cli {
    /// Starting values for the menu
    pub fn game_defaults(&self) -> GameConfiguration {
        GameConfiguration::new(GameMode::Solo)
            .with_rounds(self.rounds.clamp(1, MAX_ROUNDS))
            .with_names(self.player1.clone(), self.player2.clone())
            .with_theme(self.theme)
    }
}
