//! Round engine: the rules of a hangman game as an explicit state machine
//!
//! Every caller action is an [`Event`]. [`RoundEngine::handle`] matches the
//! current [`Status`] against the event; that match is the whole transition
//! table. Each event is validated before any field is touched, so a
//! rejected event leaves the engine exactly as it was.
//!
//! Lifecycle:
//! - Setup -> Playing (solo, word drawn from the source)
//! - Setup -> AwaitingWord (duel)
//! - AwaitingWord -> Playing
//! - Playing -> RoundResult(Won | Lost)
//! - RoundResult -> Playing (solo) | SwitchRoles (duel) | End
//! - SwitchRoles -> AwaitingWord
//! - any -> Setup (reset)

use super::error::{EngineError, InputError};
use super::theme::Theme;
use super::words::WordSource;
use tracing::{debug, info, warn};

/// Wrong guesses allowed before a round is lost
pub const MAX_LIVES: u32 = 6;

/// Rounds per game when the caller does not pick a number
pub const DEFAULT_ROUNDS: u32 = 5;

const DEFAULT_PLAYER1_NAME: &str = "Player 1";
const DEFAULT_PLAYER2_NAME: &str = "Player 2";

/// How the game is played
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameMode {
    /// One player guesses words drawn from the word source
    Solo,
    /// Two players take turns supplying and guessing words
    Duel,
}

impl GameMode {
    pub fn label(&self) -> &'static str {
        match self {
            GameMode::Solo => "Solo",
            GameMode::Duel => "Duel",
        }
    }

    /// Number of guessing rounds played for `total_rounds` configured rounds.
    /// A duel round is two turns, one per guesser.
    pub fn round_budget(&self, total_rounds: u32) -> u32 {
        match self {
            GameMode::Solo => total_rounds,
            GameMode::Duel => total_rounds.saturating_mul(2),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    One,
    Two,
}

impl Player {
    /// Slot in the score tally
    pub fn index(&self) -> usize {
        match self {
            Player::One => 0,
            Player::Two => 1,
        }
    }

    pub fn other(&self) -> Player {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerRole {
    WordProvider,
    Guesser,
}

/// Settings fixed for the duration of a game
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfiguration {
    pub mode: GameMode,
    pub total_rounds: u32,
    pub player1_name: String,
    pub player2_name: String,
    pub theme: Theme,
}

impl Default for GameConfiguration {
    fn default() -> Self {
        Self {
            mode: GameMode::Solo,
            total_rounds: DEFAULT_ROUNDS,
            player1_name: DEFAULT_PLAYER1_NAME.to_string(),
            player2_name: DEFAULT_PLAYER2_NAME.to_string(),
            theme: Theme::default(),
        }
    }
}

impl GameConfiguration {
    pub fn new(mode: GameMode) -> Self {
        Self {
            mode,
            ..Self::default()
        }
    }

    pub fn with_rounds(mut self, total_rounds: u32) -> Self {
        self.total_rounds = total_rounds;
        self
    }

    pub fn with_names(mut self, player1: impl Into<String>, player2: impl Into<String>) -> Self {
        self.player1_name = player1.into();
        self.player2_name = player2.into();
        self
    }

    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    /// Effective number of rounds before the game ends
    pub fn round_budget(&self) -> u32 {
        self.mode.round_budget(self.total_rounds)
    }

    pub fn player_name(&self, player: Player) -> &str {
        match player {
            Player::One => &self.player1_name,
            Player::Two => &self.player2_name,
        }
    }

    /// Blank names fall back to the defaults
    fn normalized(mut self) -> Self {
        if self.player1_name.trim().is_empty() {
            self.player1_name = DEFAULT_PLAYER1_NAME.to_string();
        }
        if self.player2_name.trim().is_empty() {
            self.player2_name = DEFAULT_PLAYER2_NAME.to_string();
        }
        self
    }
}

/// How a letter on the keyboard should be shown
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LetterState {
    Unused,
    Hit,
    Miss,
}

/// Progress of the game, mutated on every event
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundState {
    current_word: String,
    guessed_letters: Vec<char>,
    incorrect_guess_count: u32,
    remaining_lives: u32,
    current_player: Player,
    current_round: u32,
    scores: [u32; 2],
}

impl RoundState {
    fn new() -> Self {
        Self {
            current_word: String::new(),
            guessed_letters: Vec::new(),
            incorrect_guess_count: 0,
            remaining_lives: MAX_LIVES,
            current_player: Player::One,
            current_round: 1,
            scores: [0, 0],
        }
    }

    /// The secret word, lowercase
    pub fn current_word(&self) -> &str {
        &self.current_word
    }

    /// Letters tried this round, in guess order
    pub fn guessed_letters(&self) -> &[char] {
        &self.guessed_letters
    }

    pub fn incorrect_guess_count(&self) -> u32 {
        self.incorrect_guess_count
    }

    pub fn remaining_lives(&self) -> u32 {
        self.remaining_lives
    }

    /// The player currently guessing
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// 1-based index of the current round
    pub fn current_round(&self) -> u32 {
        self.current_round
    }

    /// Words solved per player; solo games only use the first slot
    pub fn scores(&self) -> [u32; 2] {
        self.scores
    }

    /// True once every non-space letter of the word has been guessed
    pub fn is_solved(&self) -> bool {
        self.current_word
            .chars()
            .filter(|c| *c != ' ')
            .all(|c| self.guessed_letters.contains(&c))
    }

    /// The word with unguessed letters replaced by `_`; spaces are kept
    pub fn masked_word(&self) -> String {
        self.current_word
            .chars()
            .map(|c| {
                if c == ' ' || self.guessed_letters.contains(&c) {
                    c
                } else {
                    '_'
                }
            })
            .collect()
    }

    /// Guessed letters that are not in the word, in guess order
    pub fn wrong_guesses(&self) -> Vec<char> {
        self.guessed_letters
            .iter()
            .copied()
            .filter(|c| !self.current_word.contains(*c))
            .collect()
    }

    pub fn letter_state(&self, letter: char) -> LetterState {
        let letter = normalize(letter);
        if !self.guessed_letters.contains(&letter) {
            LetterState::Unused
        } else if self.current_word.contains(letter) {
            LetterState::Hit
        } else {
            LetterState::Miss
        }
    }

    /// Derive the miss count and lives from the guessed letters
    fn recount(&mut self) {
        let misses = self
            .guessed_letters
            .iter()
            .filter(|c| !self.current_word.contains(**c))
            .count();
        self.incorrect_guess_count = u32::try_from(misses).unwrap_or(u32::MAX);
        self.remaining_lives = MAX_LIVES.saturating_sub(self.incorrect_guess_count);
    }

    fn clear_guesses(&mut self) {
        self.guessed_letters.clear();
        self.recount();
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundOutcome {
    Won,
    Lost,
}

/// Where the engine is in the game lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// No game configured
    Setup,
    /// Duel only: the word provider must submit a word
    AwaitingWord,
    /// Accepting letter guesses
    Playing,
    /// Round finished, waiting for the caller to advance
    RoundResult(RoundOutcome),
    /// Duel only: players swap provider and guesser
    SwitchRoles,
    /// Round budget exhausted
    End,
}

impl Status {
    pub fn name(&self) -> &'static str {
        match self {
            Status::Setup => "setting up",
            Status::AwaitingWord => "awaiting a word",
            Status::Playing => "playing",
            Status::RoundResult(_) => "showing a round result",
            Status::SwitchRoles => "switching roles",
            Status::End => "game over",
        }
    }
}

/// Caller actions accepted by the engine
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    SelectMode(GameConfiguration),
    SubmitWord(String),
    GuessLetter(String),
    Advance,
    ConfirmSwitch,
}

impl Event {
    pub fn name(&self) -> &'static str {
        match self {
            Event::SelectMode(_) => "select a mode",
            Event::SubmitWord(_) => "submit a word",
            Event::GuessLetter(_) => "guess a letter",
            Event::Advance => "advance",
            Event::ConfirmSwitch => "switch roles",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessOutcome {
    /// Letter was already tried; nothing changed
    Repeated,
    Correct,
    Incorrect { remaining_lives: u32 },
    /// Guess completed the word
    Solved,
    /// Guess used up the last life
    Hanged,
}

/// Final standing once the game is over
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameResult {
    Solved { solved: u32, rounds: u32 },
    Winner(Player),
    Tie,
}

impl GameResult {
    pub fn from_scores(mode: GameMode, scores: [u32; 2], total_rounds: u32) -> Self {
        match mode {
            GameMode::Solo => GameResult::Solved {
                solved: scores[0],
                rounds: total_rounds,
            },
            GameMode::Duel => match scores[0].cmp(&scores[1]) {
                std::cmp::Ordering::Greater => GameResult::Winner(Player::One),
                std::cmp::Ordering::Less => GameResult::Winner(Player::Two),
                std::cmp::Ordering::Equal => GameResult::Tie,
            },
        }
    }
}

/// What an accepted event did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// The given player must now supply a word
    AwaitingWord { provider: Player },
    RoundStarted { round: u32 },
    /// The round ended without any guess (word had no letters)
    RoundEnded(RoundOutcome),
    Guess(GuessOutcome),
    SwitchRoles,
    GameOver(GameResult),
    Reset,
}

/// The hangman state machine
#[derive(Debug)]
pub struct RoundEngine<S> {
    config: GameConfiguration,
    round: RoundState,
    status: Status,
    source: S,
}

impl<S: WordSource> RoundEngine<S> {
    /// Create an engine in `Setup` that draws solo words from `source`
    pub fn new(source: S) -> Self {
        let config = GameConfiguration::default();
        let round = RoundState::new();
        Self {
            config,
            round,
            status: Status::Setup,
            source,
        }
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn config(&self) -> &GameConfiguration {
        &self.config
    }

    pub fn round(&self) -> &RoundState {
        &self.round
    }

    /// The player supplying the word (the one not guessing)
    pub fn word_provider(&self) -> Player {
        self.round.current_player.other()
    }

    pub fn role_of(&self, player: Player) -> PlayerRole {
        if player == self.round.current_player {
            PlayerRole::Guesser
        } else {
            PlayerRole::WordProvider
        }
    }

    /// Round number as shown to players; a duel round spans two turns
    pub fn display_round(&self) -> u32 {
        match self.config.mode {
            GameMode::Solo => self.round.current_round,
            GameMode::Duel => self.round.current_round.div_ceil(2),
        }
    }

    /// Final standing, available once the game has ended
    pub fn result(&self) -> Option<GameResult> {
        match self.status {
            Status::End => Some(GameResult::from_scores(
                self.config.mode,
                self.round.scores,
                self.config.total_rounds,
            )),
            _ => None,
        }
    }

    pub fn select_mode(&mut self, config: GameConfiguration) -> Result<Effect, EngineError> {
        self.handle(Event::SelectMode(config))
    }

    pub fn submit_word(&mut self, word: &str) -> Result<Effect, EngineError> {
        self.handle(Event::SubmitWord(word.to_string()))
    }

    pub fn guess_letter(&mut self, letter: &str) -> Result<Effect, EngineError> {
        self.handle(Event::GuessLetter(letter.to_string()))
    }

    pub fn advance(&mut self) -> Result<Effect, EngineError> {
        self.handle(Event::Advance)
    }

    pub fn confirm_switch(&mut self) -> Result<Effect, EngineError> {
        self.handle(Event::ConfirmSwitch)
    }

    pub fn reset_game(&mut self) -> Effect {
        self.on_reset()
    }

    /// Apply one event to the current status
    pub fn handle(&mut self, event: Event) -> Result<Effect, EngineError> {
        match (self.status, event) {
            (Status::Setup, Event::SelectMode(config)) => self.on_select_mode(config),
            (Status::AwaitingWord, Event::SubmitWord(word)) => self.on_submit_word(&word),
            (Status::Playing, Event::GuessLetter(input)) => self.on_guess(&input),
            (Status::RoundResult(outcome), Event::Advance) => Ok(self.on_advance(outcome)),
            (Status::SwitchRoles, Event::ConfirmSwitch) => Ok(self.on_confirm_switch()),
            (status, event) => {
                warn!(
                    operation = event.name(),
                    status = status.name(),
                    "rejected out-of-order event"
                );
                Err(EngineError::InvalidTransition {
                    operation: event.name(),
                    status: status.name(),
                })
            }
        }
    }

    fn on_select_mode(&mut self, config: GameConfiguration) -> Result<Effect, EngineError> {
        if config.total_rounds == 0 {
            return Err(InputError::ZeroRounds.into());
        }

        let config = config.normalized();
        info!(
            mode = config.mode.label(),
            rounds = config.total_rounds,
            theme = config.theme.id(),
            "game configured"
        );
        self.round = RoundState::new();
        self.config = config;

        match self.config.mode {
            GameMode::Solo => Ok(self.start_solo_round()),
            GameMode::Duel => {
                self.status = Status::AwaitingWord;
                Ok(Effect::AwaitingWord {
                    provider: self.word_provider(),
                })
            }
        }
    }

    fn on_submit_word(&mut self, word: &str) -> Result<Effect, EngineError> {
        if word.trim().is_empty() {
            return Err(InputError::WordRequired.into());
        }
        Ok(self.begin_round(word.to_lowercase()))
    }

    fn on_guess(&mut self, input: &str) -> Result<Effect, EngineError> {
        let mut chars = input.chars();
        let c = match (chars.next(), chars.next()) {
            (Some(c), None) => c,
            _ => return Err(InputError::NotSingleCharacter.into()),
        };
        if !c.is_alphabetic() {
            return Err(InputError::NotALetter(c).into());
        }

        let letter = normalize(c);
        if self.round.guessed_letters.contains(&letter) {
            debug!(%letter, "letter already guessed");
            return Ok(Effect::Guess(GuessOutcome::Repeated));
        }

        self.round.guessed_letters.push(letter);
        self.round.recount();

        // A win on the same guess takes precedence over running out of lives
        let outcome = if self.round.is_solved() {
            self.finish_round(RoundOutcome::Won);
            GuessOutcome::Solved
        } else if self.round.remaining_lives == 0 {
            self.finish_round(RoundOutcome::Lost);
            GuessOutcome::Hanged
        } else if self.round.current_word.contains(letter) {
            GuessOutcome::Correct
        } else {
            GuessOutcome::Incorrect {
                remaining_lives: self.round.remaining_lives,
            }
        };
        debug!(%letter, ?outcome, "letter guessed");
        Ok(Effect::Guess(outcome))
    }

    fn on_advance(&mut self, outcome: RoundOutcome) -> Effect {
        let budget = self.config.round_budget();
        debug!(
            round = self.round.current_round,
            budget,
            ?outcome,
            "advancing"
        );

        if self.round.current_round >= budget {
            self.status = Status::End;
            let result = GameResult::from_scores(
                self.config.mode,
                self.round.scores,
                self.config.total_rounds,
            );
            info!(scores = ?self.round.scores, ?result, "game over");
            return Effect::GameOver(result);
        }

        self.round.current_round += 1;
        self.round.clear_guesses();

        match self.config.mode {
            GameMode::Solo => self.start_solo_round(),
            GameMode::Duel => {
                self.status = Status::SwitchRoles;
                Effect::SwitchRoles
            }
        }
    }

    fn on_confirm_switch(&mut self) -> Effect {
        self.round.current_player = self.round.current_player.other();
        self.round.current_word.clear();
        self.round.clear_guesses();
        self.status = Status::AwaitingWord;
        info!(guesser = ?self.round.current_player, "roles switched");
        Effect::AwaitingWord {
            provider: self.word_provider(),
        }
    }

    fn on_reset(&mut self) -> Effect {
        self.config = GameConfiguration::default();
        self.round = RoundState::new();
        self.status = Status::Setup;
        info!("game reset");
        Effect::Reset
    }

    fn start_solo_round(&mut self) -> Effect {
        let word = self.source.next_words(1).into_iter().next().unwrap_or_default();
        if word.trim().is_empty() {
            warn!("word source returned no usable word");
        }
        self.begin_round(word.to_lowercase())
    }

    /// Install a new secret word and start guessing
    fn begin_round(&mut self, word: String) -> Effect {
        self.round.current_word = word;
        self.round.clear_guesses();
        self.status = Status::Playing;
        debug!(round = self.round.current_round, "round started");

        // A word without letters is solved before the first guess
        if self.round.is_solved() {
            self.finish_round(RoundOutcome::Won);
            return Effect::RoundEnded(RoundOutcome::Won);
        }
        Effect::RoundStarted {
            round: self.round.current_round,
        }
    }

    fn finish_round(&mut self, outcome: RoundOutcome) {
        if outcome == RoundOutcome::Won {
            let idx = self.round.current_player.index();
            self.round.scores[idx] = self.round.scores[idx].saturating_add(1);
        }
        self.status = Status::RoundResult(outcome);
        info!(
            round = self.round.current_round,
            player = ?self.round.current_player,
            ?outcome,
            "round finished"
        );
    }
}

fn normalize(letter: char) -> char {
    letter.to_lowercase().next().unwrap_or(letter)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::VecDeque;

    /// Word source that hands out a fixed list in order
    struct Scripted(VecDeque<String>);

    impl Scripted {
        fn new(words: &[&str]) -> Self {
            Self(words.iter().map(|w| w.to_string()).collect())
        }
    }

    impl WordSource for Scripted {
        fn next_words(&mut self, count: usize) -> Vec<String> {
            (0..count).filter_map(|_| self.0.pop_front()).collect()
        }
    }

    fn solo(words: &[&str], rounds: u32) -> RoundEngine<Scripted> {
        let mut engine = RoundEngine::new(Scripted::new(words));
        engine
            .select_mode(GameConfiguration::new(GameMode::Solo).with_rounds(rounds))
            .unwrap();
        engine
    }

    fn duel(rounds: u32) -> RoundEngine<Scripted> {
        let mut engine = RoundEngine::new(Scripted::new(&[]));
        engine
            .select_mode(GameConfiguration::new(GameMode::Duel).with_rounds(rounds))
            .unwrap();
        engine
    }

    fn guess_all(engine: &mut RoundEngine<Scripted>, letters: &str) -> Effect {
        let mut last = Effect::Reset;
        for c in letters.chars() {
            last = engine.guess_letter(&c.to_string()).unwrap();
        }
        last
    }

    fn permutations(letters: &[char]) -> Vec<Vec<char>> {
        if letters.len() <= 1 {
            return vec![letters.to_vec()];
        }
        let mut out = Vec::new();
        for i in 0..letters.len() {
            let mut rest = letters.to_vec();
            let first = rest.remove(i);
            for mut tail in permutations(&rest) {
                tail.insert(0, first);
                out.push(tail);
            }
        }
        out
    }

    #[test]
    fn test_new_engine_in_setup() {
        let engine = RoundEngine::new(Scripted::new(&[]));
        assert_eq!(engine.status(), Status::Setup);
        assert_eq!(engine.config(), &GameConfiguration::default());
        assert_eq!(engine.round().remaining_lives(), MAX_LIVES);
        assert!(engine.result().is_none());
    }

    #[test]
    fn test_solo_cat_scenario() {
        let mut engine = solo(&["cat"], 3);
        assert_eq!(engine.status(), Status::Playing);
        assert_eq!(engine.round().current_word(), "cat");

        assert_eq!(
            engine.guess_letter("c").unwrap(),
            Effect::Guess(GuessOutcome::Correct)
        );
        assert_eq!(
            engine.guess_letter("a").unwrap(),
            Effect::Guess(GuessOutcome::Correct)
        );
        assert_eq!(
            engine.guess_letter("t").unwrap(),
            Effect::Guess(GuessOutcome::Solved)
        );

        assert_eq!(engine.status(), Status::RoundResult(RoundOutcome::Won));
        assert_eq!(engine.round().incorrect_guess_count(), 0);
        assert_eq!(engine.round().scores(), [1, 0]);
    }

    #[test]
    fn test_duel_dog_loss_scenario() {
        let mut engine = duel(1);
        engine.submit_word("dog").unwrap();

        let last = guess_all(&mut engine, "xyzqwe");
        assert_eq!(last, Effect::Guess(GuessOutcome::Hanged));
        assert_eq!(engine.status(), Status::RoundResult(RoundOutcome::Lost));
        assert_eq!(engine.round().remaining_lives(), 0);
        assert_eq!(engine.round().incorrect_guess_count(), MAX_LIVES);
        assert_eq!(engine.round().scores(), [0, 0]);
    }

    #[test]
    fn test_spaces_never_need_guessing() {
        let mut engine = duel(1);
        engine.submit_word("ab cd").unwrap();
        assert_eq!(engine.round().masked_word(), "__ __");

        let last = guess_all(&mut engine, "abcd");
        assert_eq!(last, Effect::Guess(GuessOutcome::Solved));
        assert_eq!(engine.round().masked_word(), "ab cd");
    }

    #[test]
    fn test_repeated_guess_is_idempotent() {
        let mut engine = solo(&["hangman"], 1);
        for letter in ["a", "z"] {
            engine.guess_letter(letter).unwrap();
            let snapshot = engine.round().clone();
            assert_eq!(
                engine.guess_letter(letter).unwrap(),
                Effect::Guess(GuessOutcome::Repeated)
            );
            assert_eq!(engine.round(), &snapshot);
            assert_eq!(engine.status(), Status::Playing);
        }
    }

    #[test]
    fn test_guess_is_case_insensitive() {
        let mut engine = solo(&["cat"], 1);
        engine.guess_letter("C").unwrap();
        assert_eq!(engine.round().guessed_letters(), &['c']);
        assert_eq!(
            engine.guess_letter("c").unwrap(),
            Effect::Guess(GuessOutcome::Repeated)
        );
        assert_eq!(engine.round().letter_state('C'), LetterState::Hit);
    }

    #[test]
    fn test_malformed_guess_rejected_without_change() {
        let mut engine = solo(&["cat"], 1);
        let snapshot = engine.round().clone();

        assert_eq!(
            engine.guess_letter(""),
            Err(EngineError::InvalidInput(InputError::NotSingleCharacter))
        );
        assert_eq!(
            engine.guess_letter("ab"),
            Err(EngineError::InvalidInput(InputError::NotSingleCharacter))
        );
        assert_eq!(
            engine.guess_letter(" "),
            Err(EngineError::InvalidInput(InputError::NotALetter(' ')))
        );
        assert_eq!(
            engine.guess_letter("7"),
            Err(EngineError::InvalidInput(InputError::NotALetter('7')))
        );
        assert_eq!(engine.round(), &snapshot);
        assert_eq!(engine.status(), Status::Playing);
    }

    #[test]
    fn test_every_permutation_of_correct_letters_wins_cleanly() {
        let mut letters: Vec<char> = "banana".chars().collect();
        letters.sort();
        letters.dedup();

        for order in permutations(&letters) {
            let mut engine = solo(&["banana"], 1);
            let guesses: String = order.iter().collect();
            assert_eq!(
                guess_all(&mut engine, &guesses),
                Effect::Guess(GuessOutcome::Solved)
            );
            assert_eq!(engine.round().incorrect_guess_count(), 0);
            assert_eq!(engine.round().remaining_lives(), MAX_LIVES);
        }
    }

    #[test]
    fn test_lives_track_wrong_guesses() {
        let mut engine = solo(&["hangman"], 1);
        engine.guess_letter("h").unwrap();
        assert_eq!(
            engine.guess_letter("x").unwrap(),
            Effect::Guess(GuessOutcome::Incorrect { remaining_lives: 5 })
        );
        engine.guess_letter("q").unwrap();
        assert_eq!(engine.round().incorrect_guess_count(), 2);
        assert_eq!(engine.round().remaining_lives(), 4);
        assert_eq!(engine.round().wrong_guesses(), vec!['x', 'q']);
        assert_eq!(engine.round().letter_state('q'), LetterState::Miss);
        assert_eq!(engine.round().letter_state('m'), LetterState::Unused);
    }

    #[test]
    fn test_loss_after_correct_guesses() {
        let mut engine = solo(&["cat"], 1);
        engine.guess_letter("c").unwrap();
        engine.guess_letter("a").unwrap();
        let last = guess_all(&mut engine, "bdefgh");
        assert_eq!(last, Effect::Guess(GuessOutcome::Hanged));
        assert_eq!(engine.round().remaining_lives(), 0);
        assert_eq!(engine.round().scores(), [0, 0]);
    }

    #[test]
    fn test_guess_after_round_over_rejected() {
        let mut engine = solo(&["a"], 1);
        engine.guess_letter("a").unwrap();
        assert!(matches!(
            engine.guess_letter("b"),
            Err(EngineError::InvalidTransition { .. })
        ));
    }

    #[test]
    fn test_advance_while_playing_rejected() {
        let mut engine = solo(&["cat"], 1);
        let err = engine.advance().unwrap_err();
        assert_eq!(
            err,
            EngineError::InvalidTransition {
                operation: "advance",
                status: "playing",
            }
        );
        assert_eq!(err.to_string(), "cannot advance while playing");
        assert_eq!(engine.status(), Status::Playing);
    }

    /// Play a one-round duel until the engine reaches `target`
    fn drive_to(target: Status) -> RoundEngine<Scripted> {
        let mut engine = RoundEngine::new(Scripted::new(&[]));
        while engine.status() != target {
            match engine.status() {
                Status::Setup => engine
                    .select_mode(GameConfiguration::new(GameMode::Duel).with_rounds(1))
                    .unwrap(),
                Status::AwaitingWord => engine.submit_word("dog").unwrap(),
                Status::Playing => guess_all(&mut engine, "dog"),
                Status::RoundResult(_) => engine.advance().unwrap(),
                Status::SwitchRoles => engine.confirm_switch().unwrap(),
                Status::End => panic!("{:?} not reached", target),
            };
        }
        engine
    }

    #[test]
    fn test_operations_rejected_outside_their_status() {
        type Operation = fn(&mut RoundEngine<Scripted>) -> Result<Effect, EngineError>;
        let operations: [(&str, Operation); 5] = [
            ("select a mode", |e| e.select_mode(GameConfiguration::default())),
            ("submit a word", |e| e.submit_word("dog")),
            ("guess a letter", |e| e.guess_letter("d")),
            ("advance", |e| e.advance()),
            ("switch roles", |e| e.confirm_switch()),
        ];
        let statuses = [
            (Status::Setup, "select a mode"),
            (Status::AwaitingWord, "submit a word"),
            (Status::Playing, "guess a letter"),
            (Status::RoundResult(RoundOutcome::Won), "advance"),
            (Status::SwitchRoles, "switch roles"),
            (Status::End, ""),
        ];

        for (status, allowed) in statuses {
            for (operation, apply) in operations {
                if operation == allowed {
                    continue;
                }
                let mut engine = drive_to(status);
                let before = engine.round().clone();

                assert_eq!(
                    apply(&mut engine),
                    Err(EngineError::InvalidTransition {
                        operation,
                        status: status.name(),
                    }),
                    "{} while {}",
                    operation,
                    status.name()
                );
                assert_eq!(engine.status(), status);
                assert_eq!(engine.round(), &before);
            }
        }
    }

    #[test]
    fn test_every_round_starts_with_full_lives() {
        let mut engine = solo(&["cat", "dog"], 2);
        assert_eq!(engine.round().remaining_lives(), MAX_LIVES);
        assert_eq!(
            engine.guess_letter("c").unwrap(),
            Effect::Guess(GuessOutcome::Correct)
        );
        assert_eq!(engine.status(), Status::Playing);

        guess_all(&mut engine, "xyzqw");
        assert_eq!(engine.round().remaining_lives(), 1);
        guess_all(&mut engine, "v");
        assert_eq!(engine.status(), Status::RoundResult(RoundOutcome::Lost));

        engine.advance().unwrap();
        assert_eq!(engine.round().remaining_lives(), MAX_LIVES);
        assert_eq!(
            engine.guess_letter("d").unwrap(),
            Effect::Guess(GuessOutcome::Correct)
        );
    }

    #[test]
    fn test_solo_plays_exactly_total_rounds() {
        let mut engine = solo(&["ab", "cd", "ef", "gh"], 3);
        let mut rounds_played = 0;

        loop {
            let word = engine.round().current_word().to_string();
            rounds_played += 1;
            assert_eq!(engine.round().current_round(), rounds_played);
            // Win odd rounds, lose even ones
            if rounds_played % 2 == 1 {
                guess_all(&mut engine, &word);
            } else {
                guess_all(&mut engine, "uvwxyz");
            }
            if let Effect::GameOver(result) = engine.advance().unwrap() {
                assert_eq!(result, GameResult::Solved { solved: 2, rounds: 3 });
                break;
            }
            assert_eq!(engine.status(), Status::Playing);
            assert!(engine.round().guessed_letters().is_empty());
        }

        assert_eq!(rounds_played, 3);
        assert_eq!(engine.status(), Status::End);
        assert_eq!(engine.round().current_round(), 3);
    }

    #[test]
    fn test_duel_plays_twice_total_rounds() {
        let mut engine = duel(2);
        let mut turns = 0;
        let mut guessers = Vec::new();

        loop {
            assert_eq!(engine.status(), Status::AwaitingWord);
            engine.submit_word("Dog").unwrap();
            turns += 1;
            guessers.push(engine.round().current_player());

            // Player one solves, player two is hanged
            match engine.round().current_player() {
                Player::One => guess_all(&mut engine, "dog"),
                Player::Two => guess_all(&mut engine, "abcefh"),
            };

            match engine.advance().unwrap() {
                Effect::GameOver(result) => {
                    assert_eq!(result, GameResult::Winner(Player::One));
                    break;
                }
                Effect::SwitchRoles => {
                    assert_eq!(engine.status(), Status::SwitchRoles);
                    engine.confirm_switch().unwrap();
                }
                other => panic!("unexpected effect {:?}", other),
            }
        }

        assert_eq!(turns, 4);
        assert_eq!(
            guessers,
            vec![Player::One, Player::Two, Player::One, Player::Two]
        );
        assert_eq!(engine.round().scores(), [2, 0]);
        assert_eq!(engine.round().current_round(), 4);
        assert_eq!(engine.display_round(), 2);
    }

    #[test]
    fn test_confirm_switch_swaps_roles() {
        let mut engine = duel(2);
        assert_eq!(engine.role_of(Player::One), PlayerRole::Guesser);
        assert_eq!(engine.word_provider(), Player::Two);

        engine.submit_word("cat").unwrap();
        guess_all(&mut engine, "cat");
        engine.advance().unwrap();
        assert_eq!(
            engine.confirm_switch().unwrap(),
            Effect::AwaitingWord {
                provider: Player::One
            }
        );

        assert_eq!(engine.round().current_player(), Player::Two);
        assert_eq!(engine.role_of(Player::One), PlayerRole::WordProvider);
        assert_eq!(engine.round().current_word(), "");
        assert!(engine.round().guessed_letters().is_empty());
        assert_eq!(engine.round().remaining_lives(), MAX_LIVES);
        assert_eq!(engine.round().current_round(), 2);
    }

    #[test]
    fn test_duel_player_two_scores_own_slot() {
        let mut engine = duel(1);
        engine.submit_word("ox").unwrap();
        guess_all(&mut engine, "ox");
        engine.advance().unwrap();
        engine.confirm_switch().unwrap();
        engine.submit_word("ax").unwrap();
        guess_all(&mut engine, "ax");
        assert_eq!(engine.round().scores(), [1, 1]);
        assert_eq!(
            engine.advance().unwrap(),
            Effect::GameOver(GameResult::Tie)
        );
        assert_eq!(engine.result(), Some(GameResult::Tie));
    }

    #[test]
    fn test_winner_from_scores() {
        assert_eq!(
            GameResult::from_scores(GameMode::Duel, [3, 5], 4),
            GameResult::Winner(Player::Two)
        );
        assert_eq!(
            GameResult::from_scores(GameMode::Duel, [4, 4], 4),
            GameResult::Tie
        );
        assert_eq!(
            GameResult::from_scores(GameMode::Solo, [4, 0], 5),
            GameResult::Solved { solved: 4, rounds: 5 }
        );
    }

    #[test]
    fn test_zero_rounds_rejected() {
        let mut engine = RoundEngine::new(Scripted::new(&["cat"]));
        assert_eq!(
            engine.select_mode(GameConfiguration::new(GameMode::Solo).with_rounds(0)),
            Err(EngineError::InvalidInput(InputError::ZeroRounds))
        );
        assert_eq!(engine.status(), Status::Setup);
        assert_eq!(engine.config(), &GameConfiguration::default());
    }

    #[test]
    fn test_blank_names_use_defaults() {
        let mut engine = RoundEngine::new(Scripted::new(&[]));
        engine
            .select_mode(
                GameConfiguration::new(GameMode::Duel)
                    .with_names("Ada", "  ")
                    .with_theme(Theme::Pirate),
            )
            .unwrap();
        assert_eq!(engine.config().player_name(Player::One), "Ada");
        assert_eq!(engine.config().player_name(Player::Two), "Player 2");
        assert_eq!(engine.config().theme, Theme::Pirate);
    }

    #[test]
    fn test_select_mode_twice_rejected() {
        let mut engine = solo(&["cat"], 1);
        assert!(matches!(
            engine.select_mode(GameConfiguration::new(GameMode::Duel)),
            Err(EngineError::InvalidTransition { .. })
        ));
        assert_eq!(engine.config().mode, GameMode::Solo);
    }

    #[test]
    fn test_blank_submission_rejected() {
        let mut engine = duel(1);
        assert_eq!(
            engine.submit_word("   "),
            Err(EngineError::InvalidInput(InputError::WordRequired))
        );
        assert_eq!(engine.status(), Status::AwaitingWord);
    }

    #[test]
    fn test_submitted_word_lowercased() {
        let mut engine = duel(1);
        engine.submit_word("Ice Cream").unwrap();
        assert_eq!(engine.round().current_word(), "ice cream");
    }

    #[test]
    fn test_empty_solo_word_is_immediate_win() {
        let mut engine = RoundEngine::new(Scripted::new(&[]));
        let effect = engine
            .select_mode(GameConfiguration::new(GameMode::Solo).with_rounds(1))
            .unwrap();
        assert_eq!(effect, Effect::RoundEnded(RoundOutcome::Won));
        assert_eq!(engine.status(), Status::RoundResult(RoundOutcome::Won));
        assert_eq!(engine.round().scores(), [1, 0]);
    }

    #[test]
    fn test_scores_never_decrease() {
        let mut engine = solo(&["ab", "cd", "ef", "gh", "ij"], 5);
        let mut previous = engine.round().scores();
        let plans = ["ab", "zyxwvu", "ef", "zyxwvu", "ij"];

        for plan in plans {
            for c in plan.chars() {
                engine.guess_letter(&c.to_string()).unwrap();
                let scores = engine.round().scores();
                assert!(scores[0] >= previous[0]);
                previous = scores;
            }
            engine.advance().unwrap();
        }
        assert_eq!(engine.result(), Some(GameResult::Solved { solved: 3, rounds: 5 }));
    }

    #[test]
    fn test_reset_from_any_state() {
        let mut engine = duel(3);
        engine.submit_word("dog").unwrap();
        guess_all(&mut engine, "do");

        assert_eq!(engine.reset_game(), Effect::Reset);
        assert_eq!(engine.status(), Status::Setup);
        assert_eq!(engine.config(), &GameConfiguration::default());
        assert_eq!(engine.round().scores(), [0, 0]);
        assert_eq!(engine.round().current_round(), 1);
    }

    #[test]
    fn test_display_round_counts_cycles_in_duel() {
        let mut engine = duel(3);
        assert_eq!(engine.display_round(), 1);
        engine.submit_word("a").unwrap();
        guess_all(&mut engine, "a");
        engine.advance().unwrap();
        assert_eq!(engine.round().current_round(), 2);
        assert_eq!(engine.display_round(), 1);
    }
}
