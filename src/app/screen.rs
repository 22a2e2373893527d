//! Application screen state management
//!
//! Handles transitions between the two top-level screens:
//! - Menu: mode, round count, player names and theme
//! - Game: a game in progress, from first word to final score

use crate::config::MAX_ROUNDS;
use crate::game::{GameConfiguration, GameMode, WordBank};
use tracing::{debug, error};

use super::state::App;

/// Longest player name the menu accepts
pub const MAX_NAME_LENGTH: usize = 15;

/// Menu option on the main screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuOption {
    PlaySolo,
    PlayDuel,
    Rounds,
    Theme,
    Player1Name,
    Player2Name,
    Quit,
}

impl MenuOption {
    /// Get all menu options in order
    pub fn all() -> &'static [MenuOption] {
        &[
            MenuOption::PlaySolo,
            MenuOption::PlayDuel,
            MenuOption::Rounds,
            MenuOption::Theme,
            MenuOption::Player1Name,
            MenuOption::Player2Name,
            MenuOption::Quit,
        ]
    }

    /// Get the display label for this option
    pub fn label(&self) -> &'static str {
        match self {
            MenuOption::PlaySolo => "Play Solo",
            MenuOption::PlayDuel => "Play Duel",
            MenuOption::Rounds => "Rounds",
            MenuOption::Theme => "Theme",
            MenuOption::Player1Name => "Player 1",
            MenuOption::Player2Name => "Player 2",
            MenuOption::Quit => "Quit",
        }
    }
}

/// The current application screen
pub enum Screen {
    /// Main menu
    Menu {
        selected: usize,
        /// Settings the next game starts with
        draft: GameConfiguration,
        /// Name being edited, if any
        name_input: Option<String>,
        /// Why the last start attempt failed
        error: Option<String>,
    },
    /// A game in progress
    Game { app: Box<App> },
}

/// Main application coordinator
pub struct AppCoordinator {
    /// Current screen
    pub screen: Screen,
    /// Whether the application should quit
    pub should_quit: bool,
    seed: Option<u64>,
    games_started: u64,
}

impl AppCoordinator {
    /// Create a new app coordinator starting at the menu
    pub fn new(defaults: GameConfiguration, seed: Option<u64>) -> Self {
        Self {
            screen: menu_screen(defaults),
            should_quit: false,
            seed,
            games_started: 0,
        }
    }

    /// Quit the application
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Go back to the main menu, keeping the last game's settings
    pub fn go_to_menu(&mut self) {
        if let Screen::Game { app } = &mut self.screen {
            let config = app.leave();
            self.screen = menu_screen(config);
        }
    }

    /// Handle Up
    pub fn on_up(&mut self) {
        if let Screen::Menu { selected, name_input: None, .. } = &mut self.screen {
            if *selected > 0 {
                *selected -= 1;
            }
        }
    }

    /// Handle Down
    pub fn on_down(&mut self) {
        if let Screen::Menu { selected, name_input: None, .. } = &mut self.screen {
            if *selected < MenuOption::all().len() - 1 {
                *selected += 1;
            }
        }
    }

    /// Handle Left: decrease rounds or pick the previous theme
    pub fn on_left(&mut self) {
        self.adjust(false);
    }

    /// Handle Right: increase rounds or pick the next theme
    pub fn on_right(&mut self) {
        self.adjust(true);
    }

    fn adjust(&mut self, forward: bool) {
        if let Screen::Menu { selected, draft, name_input: None, .. } = &mut self.screen {
            match MenuOption::all()[*selected] {
                MenuOption::Rounds => {
                    draft.total_rounds = if forward {
                        (draft.total_rounds + 1).min(MAX_ROUNDS)
                    } else {
                        draft.total_rounds.saturating_sub(1).max(1)
                    };
                }
                MenuOption::Theme => {
                    draft.theme = if forward {
                        draft.theme.next()
                    } else {
                        draft.theme.prev()
                    };
                }
                _ => {}
            }
        }
    }

    /// Handle character input
    pub fn on_char(&mut self, c: char) {
        match &mut self.screen {
            Screen::Menu { name_input: Some(input), .. } => {
                if input.chars().count() < MAX_NAME_LENGTH && (c.is_alphanumeric() || c == ' ') {
                    input.push(c);
                }
            }
            Screen::Menu { .. } => {}
            Screen::Game { app } => app.on_char(c),
        }
    }

    /// Handle Backspace
    pub fn on_backspace(&mut self) {
        match &mut self.screen {
            Screen::Menu { name_input: Some(input), .. } => {
                input.pop();
            }
            Screen::Menu { .. } => {}
            Screen::Game { app } => app.on_backspace(),
        }
    }

    /// Handle Esc: cancel editing, leave the game, or quit from the menu
    pub fn on_esc(&mut self) {
        match &mut self.screen {
            Screen::Menu { name_input, .. } if name_input.is_some() => {
                *name_input = None;
            }
            Screen::Menu { .. } => self.quit(),
            Screen::Game { .. } => self.go_to_menu(),
        }
    }

    /// Handle Enter
    pub fn on_enter(&mut self) {
        match &mut self.screen {
            Screen::Game { app } => {
                app.on_submit();
                if app.finished {
                    self.go_to_menu();
                }
            }
            Screen::Menu { selected, draft, name_input, error } => {
                let option = MenuOption::all()[*selected];
                match (option, name_input.take()) {
                    (MenuOption::Player1Name, Some(name)) => {
                        if !name.trim().is_empty() {
                            draft.player1_name = name;
                        }
                    }
                    (MenuOption::Player2Name, Some(name)) => {
                        if !name.trim().is_empty() {
                            draft.player2_name = name;
                        }
                    }
                    (MenuOption::Player1Name, None) => {
                        *name_input = Some(draft.player1_name.clone());
                    }
                    (MenuOption::Player2Name, None) => {
                        *name_input = Some(draft.player2_name.clone());
                    }
                    (MenuOption::PlaySolo, _) => {
                        draft.mode = GameMode::Solo;
                        let config = draft.clone();
                        if let Err(message) = self.start_game(config) {
                            self.set_menu_error(message);
                        }
                    }
                    (MenuOption::PlayDuel, _) => {
                        draft.mode = GameMode::Duel;
                        let config = draft.clone();
                        if let Err(message) = self.start_game(config) {
                            self.set_menu_error(message);
                        }
                    }
                    (MenuOption::Quit, _) => self.quit(),
                    (MenuOption::Rounds | MenuOption::Theme, _) => {
                        *error = None;
                    }
                }
            }
        }
    }

    fn start_game(&mut self, config: GameConfiguration) -> Result<(), String> {
        let bank = match self.seed {
            Some(seed) => WordBank::with_seed(seed.wrapping_add(self.games_started)),
            None => WordBank::new(),
        };
        match App::start(config, bank) {
            Ok(app) => {
                debug!(corpus = WordBank::words().len(), seed = ?self.seed, "game started");
                self.games_started += 1;
                self.screen = Screen::Game { app: Box::new(app) };
                Ok(())
            }
            Err(e) => {
                error!(error = %e, "could not start game");
                Err(e.to_string())
            }
        }
    }

    fn set_menu_error(&mut self, message: String) {
        if let Screen::Menu { error, .. } = &mut self.screen {
            *error = Some(message);
        }
    }
}

fn menu_screen(draft: GameConfiguration) -> Screen {
    Screen::Menu {
        selected: 0,
        draft,
        name_input: None,
        error: None,
    }
}
