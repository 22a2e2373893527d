//! UI rendering using ratatui
//!
//! Screens:
//! - Menu: mode, rounds, names, theme
//! - Word entry: duel word provider types a secret word
//! - Playing: gallows, masked word, keyboard, scoreboard
//! - Round result, role switch and game over

use crate::app::{App, AppCoordinator, MenuOption, Screen};
use crate::game::{GameConfiguration, GameMode, LetterState, RoundOutcome, Status, MAX_LIVES};
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, List, ListItem, Paragraph},
};

use super::gallows;

const KEYBOARD_ROWS: [&str; 3] = ["qwertyuiop", "asdfghjkl", "zxcvbnm"];

/// Render the appropriate screen based on app state
pub fn render(frame: &mut Frame, coordinator: &AppCoordinator) {
    match &coordinator.screen {
        Screen::Menu { selected, draft, name_input, error } => {
            render_menu(frame, *selected, draft, name_input.as_deref(), error.as_deref());
        }
        Screen::Game { app } => {
            render_game(frame, app);
        }
    }
}

/// Render the main menu
fn render_menu(
    frame: &mut Frame,
    selected: usize,
    draft: &GameConfiguration,
    name_input: Option<&str>,
    error: Option<&str>,
) {
    let area = frame.area();

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(8), // Logo
            Constraint::Length(1), // Error line
            Constraint::Min(9),    // Menu options
            Constraint::Length(2), // Footer
        ])
        .margin(2)
        .split(area);

    let logo = r#"
 _
| |__   __ _ _ __   __ _ _ __ ___   __ _ _ __
| '_ \ / _` | '_ \ / _` | '_ ` _ \ / _` | '_ \
| | | | (_| | | | | (_| | | | | | | (_| | | | |
|_| |_|\__,_|_| |_|\__, |_| |_| |_|\__,_|_| |_|
                   |___/
"#;
    let logo_widget = Paragraph::new(logo)
        .style(Style::default().fg(Color::Yellow).bold())
        .alignment(Alignment::Center);
    frame.render_widget(logo_widget, layout[0]);

    if let Some(message) = error {
        let error_widget = Paragraph::new(message)
            .style(Style::default().fg(Color::Red))
            .alignment(Alignment::Center);
        frame.render_widget(error_widget, layout[1]);
    }

    let items: Vec<ListItem> = MenuOption::all()
        .iter()
        .enumerate()
        .map(|(i, opt)| {
            let is_selected = i == selected;
            let style = if is_selected {
                Style::default().fg(Color::Yellow).bold()
            } else {
                Style::default().fg(Color::White)
            };
            let prefix = if is_selected { "> " } else { "  " };
            let value = match opt {
                MenuOption::Rounds => format!(": < {} >", draft.total_rounds),
                MenuOption::Theme => format!(
                    ": < {} > {}",
                    draft.theme.label(),
                    draft.theme.description()
                ),
                MenuOption::Player1Name | MenuOption::Player2Name => {
                    let name = if *opt == MenuOption::Player1Name {
                        &draft.player1_name
                    } else {
                        &draft.player2_name
                    };
                    match name_input {
                        Some(input) if is_selected => format!(": [{}]_", input),
                        _ => format!(": {}", name),
                    }
                }
                _ => String::new(),
            };
            ListItem::new(format!("{}{}{}", prefix, opt.label(), value)).style(style)
        })
        .collect();

    let menu = List::new(items).block(Block::default());
    frame.render_widget(menu, layout[2]);

    let footer_text = if name_input.is_some() {
        "Type a name  Enter Save  Esc Cancel"
    } else {
        "↑↓ Navigate  ←→ Change  Enter Select  Esc Quit"
    };
    let footer = Paragraph::new(footer_text)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(footer, layout[3]);
}

/// Render a game in progress
fn render_game(frame: &mut Frame, app: &App) {
    let area = frame.area();

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header with round counter
            Constraint::Min(0),    // Main content area
            Constraint::Length(1), // Footer
        ])
        .split(area);

    render_header(frame, layout[0], app);

    let footer_text = match app.engine().status() {
        Status::AwaitingWord => "Type the word  Enter Submit  Esc Menu",
        Status::Playing => "Type a letter to guess  Esc Menu",
        Status::RoundResult(_) => "Enter Next  Esc Menu",
        Status::SwitchRoles => "Enter Ready  Esc Menu",
        Status::End => "Enter Play Again",
        Status::Setup => "",
    };

    match app.engine().status() {
        Status::AwaitingWord => render_word_entry(frame, layout[1], app),
        Status::Playing | Status::RoundResult(_) => render_board(frame, layout[1], app),
        Status::SwitchRoles => render_switch(frame, layout[1], app),
        Status::End => render_game_over(frame, layout[1], app),
        Status::Setup => {}
    }

    let footer = Paragraph::new(footer_text)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(footer, layout[2]);
}

/// Render the header: logo, round counter, mode
fn render_header(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(Style::default().fg(Color::DarkGray));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let header_layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(10),
            Constraint::Min(20),
            Constraint::Length(10),
        ])
        .split(inner);

    let logo = Paragraph::new("HANGMAN")
        .style(Style::default().fg(Color::Yellow).bold())
        .alignment(Alignment::Left);
    frame.render_widget(logo, header_layout[0]);

    let engine = app.engine();
    let round = Paragraph::new(round_label(app))
    .style(Style::default().fg(Color::Cyan).bold())
    .alignment(Alignment::Center);
    frame.render_widget(round, header_layout[1]);

    let mode = Paragraph::new(engine.config().mode.label())
        .style(Style::default().fg(Color::Magenta))
        .alignment(Alignment::Right);
    frame.render_widget(mode, header_layout[2]);
}

/// Header round counter; duels also count individual turns
fn round_label(app: &App) -> String {
    let engine = app.engine();
    let config = engine.config();
    let label = format!("Round {}/{}", engine.display_round(), config.total_rounds);
    match config.mode {
        GameMode::Solo => label,
        GameMode::Duel => format!(
            "{}  Turn {}/{}",
            label,
            engine.round().current_round(),
            config.round_budget()
        ),
    }
}

/// Render the duel word-entry prompt
fn render_word_entry(frame: &mut Frame, area: Rect, app: &App) {
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(30),
            Constraint::Length(2), // Prompt
            Constraint::Length(3), // Input box
            Constraint::Length(1), // Feedback / hint
            Constraint::Min(0),
        ])
        .horizontal_margin(4)
        .split(area);

    let provider = app
        .engine()
        .config()
        .player_name(app.engine().word_provider());
    let prompt = Paragraph::new(format!(
        "{}: submit your word. Make it challenging but fair!\n{}, look away!",
        provider,
        app.guesser_name()
    ))
    .style(Style::default().fg(Color::White).bold())
    .alignment(Alignment::Center);
    frame.render_widget(prompt, layout[1]);

    let input = Paragraph::new(format!("{}_", mask_input(&app.input)))
        .style(Style::default().fg(Color::Cyan))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray))
                .title("Secret word"),
        );
    frame.render_widget(input, layout[2]);

    let (feedback_text, feedback_color) = format_feedback(&app.feedback);
    let feedback = Paragraph::new(feedback_text)
        .style(Style::default().fg(feedback_color))
        .alignment(Alignment::Center);
    frame.render_widget(feedback, layout[3]);
}

/// Render the play area: gallows | word and keyboard | scoreboard
fn render_board(frame: &mut Frame, area: Rect, app: &App) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(14), // Gallows
            Constraint::Min(30),    // Word, feedback, keyboard
            Constraint::Length(24), // Scoreboard
        ])
        .split(area);

    render_gallows(frame, columns[0], app);
    render_play_area(frame, columns[1], app);
    render_scoreboard(frame, columns[2], app);
}

fn render_gallows(frame: &mut Frame, area: Rect, app: &App) {
    let engine = app.engine();
    let parts = gallows::parts_shown(
        engine.round().incorrect_guess_count(),
        MAX_LIVES,
    );
    let color = if engine.status() == Status::RoundResult(RoundOutcome::Lost) {
        Color::Red
    } else {
        Color::White
    };
    let text = gallows::draw(engine.config().theme, parts).join("\n");
    let widget = Paragraph::new(text)
        .style(Style::default().fg(color))
        .block(Block::default().padding(ratatui::widgets::Padding::top(1)));
    frame.render_widget(widget, area);
}

fn render_play_area(frame: &mut Frame, area: Rect, app: &App) {
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(1), // Guesser
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Masked word
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Lives and wrong guesses
            Constraint::Length(1), // Feedback
            Constraint::Length(1), // Spacer
            Constraint::Length(3), // Keyboard
            Constraint::Min(0),
        ])
        .split(area);

    let engine = app.engine();
    let round = engine.round();

    let guesser = Paragraph::new(format!("{} is guessing", app.guesser_name()))
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(guesser, layout[0]);

    let word = Paragraph::new(format_masked_word(&round.masked_word()))
        .style(Style::default().fg(Color::Cyan).bold())
        .alignment(Alignment::Center);
    frame.render_widget(word, layout[2]);

    let wrong: String = round
        .wrong_guesses()
        .iter()
        .map(|c| c.to_ascii_uppercase().to_string())
        .collect::<Vec<_>>()
        .join(" ");
    let lives_color = match round.remaining_lives() {
        0..=1 => Color::Red,
        2..=3 => Color::Yellow,
        _ => Color::Green,
    };
    let lives = Paragraph::new(Line::from(vec![
        Span::styled(
            format!("Lives: {}", round.remaining_lives()),
            Style::default().fg(lives_color).bold(),
        ),
        Span::raw("   Wrong: "),
        Span::styled(wrong, Style::default().fg(Color::Red)),
        Span::styled(
            format!("   Guesses: {}", round.guessed_letters().len()),
            Style::default().fg(Color::DarkGray),
        ),
    ]))
    .alignment(Alignment::Center);
    frame.render_widget(lives, layout[4]);

    let (feedback_text, feedback_color) = format_feedback(&app.feedback);
    let feedback = Paragraph::new(feedback_text)
        .style(Style::default().fg(feedback_color))
        .alignment(Alignment::Center);
    frame.render_widget(feedback, layout[5]);

    let keyboard: Vec<Line> = KEYBOARD_ROWS
        .iter()
        .map(|row| {
            let spans: Vec<Span> = row
                .chars()
                .map(|c| {
                    let color = match round.letter_state(c) {
                        LetterState::Unused => Color::White,
                        LetterState::Hit => Color::Green,
                        LetterState::Miss => Color::DarkGray,
                    };
                    Span::styled(
                        format!(" {} ", c.to_ascii_uppercase()),
                        Style::default().fg(color),
                    )
                })
                .collect();
            Line::from(spans)
        })
        .collect();
    let keyboard_widget = Paragraph::new(keyboard).alignment(Alignment::Center);
    frame.render_widget(keyboard_widget, layout[7]);
}

/// Render the scoreboard (right panel)
fn render_scoreboard(frame: &mut Frame, area: Rect, app: &App) {
    let duel = app.engine().config().mode == GameMode::Duel;
    let mut items: Vec<ListItem> = app
        .scoreboard()
        .into_iter()
        .map(|(name, score, guessing)| {
            let style = if guessing {
                Style::default().fg(Color::Cyan).bold()
            } else {
                Style::default().fg(Color::White)
            };
            let marker = if guessing && duel { "> " } else { "  " };
            ListItem::new(format!("{}{} - {}", marker, name, score)).style(style)
        })
        .collect();
    if !duel {
        items.push(ListItem::new("  Word bank - word provider").style(Style::default().fg(Color::DarkGray)));
    }

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title("Score"),
    );
    frame.render_widget(list, area);
}

/// Render the role-switch screen between duel turns
fn render_switch(frame: &mut Frame, area: Rect, app: &App) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(30), Constraint::Length(24)])
        .split(area);

    let engine = app.engine();
    let config = engine.config();
    // Roles flip on confirm: the current guesser provides next
    let next_provider = config.player_name(engine.round().current_player());
    let next_guesser = config.player_name(engine.word_provider());

    let text = vec![
        Line::from(""),
        Line::from("Switch roles!".bold().fg(Color::Yellow)),
        Line::from(""),
        Line::from(format!("{} will pick the next word", next_provider)),
        Line::from(format!("{} will guess", next_guesser)),
    ];
    let widget = Paragraph::new(text).alignment(Alignment::Center);
    frame.render_widget(widget, columns[0]);
    render_scoreboard(frame, columns[1], app);
}

/// Render the final score and verdict
fn render_game_over(frame: &mut Frame, area: Rect, app: &App) {
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(9), // Figure
            Constraint::Length(2), // Title
            Constraint::Length(3), // Scores
            Constraint::Length(1), // Spacer
            Constraint::Length(2), // Verdict
            Constraint::Min(0),
        ])
        .split(area);

    let engine = app.engine();
    let figure = gallows::draw(engine.config().theme, gallows::FIGURE_PARTS).join("\n");
    let figure_widget = Paragraph::new(figure)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(figure_widget, layout[0]);

    let title = Paragraph::new("GAME OVER!")
        .style(Style::default().fg(Color::Red).bold())
        .alignment(Alignment::Center);
    frame.render_widget(title, layout[1]);

    let scores: Vec<Line> = app
        .scoreboard()
        .into_iter()
        .map(|(name, score, _)| Line::from(format!("{}: {} points", name, score)))
        .collect();
    let scores_widget = Paragraph::new(scores)
        .style(Style::default().fg(Color::Cyan))
        .alignment(Alignment::Center);
    frame.render_widget(scores_widget, layout[2]);

    let verdict = Paragraph::new(app.end_message().unwrap_or_default())
        .style(Style::default().fg(Color::Yellow).bold())
        .alignment(Alignment::Center);
    frame.render_widget(verdict, layout[4]);
}

/// Uppercase the masked word and space out its characters
fn format_masked_word(masked: &str) -> String {
    masked
        .chars()
        .map(|c| c.to_uppercase().to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Hide a secret word while it is typed; spaces stay visible
fn mask_input(input: &str) -> String {
    input
        .chars()
        .map(|c| if c == ' ' { ' ' } else { '*' })
        .collect()
}

/// Format feedback with appropriate color
fn format_feedback(feedback: &str) -> (String, Color) {
    if feedback.is_empty() {
        return (String::new(), Color::White);
    }

    let color = if feedback.starts_with("Nice") || feedback.starts_with("Congratulations") {
        Color::Green
    } else if feedback.starts_with("Nope")
        || feedback.starts_with("The word was")
        || feedback.starts_with("Only letters")
        || feedback.starts_with("Word is required")
        || feedback.ends_with("is not a letter")
        || feedback.starts_with("guess a single")
    {
        Color::Red
    } else if feedback.starts_with("Already") {
        Color::Yellow
    } else {
        Color::White
    };

    (feedback.to_string(), color)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_masked_word() {
        assert_eq!(format_masked_word("c_t"), "C _ T");
        assert_eq!(format_masked_word("a_ _d"), "A _   _ D");
        assert_eq!(format_masked_word(""), "");
    }

    #[test]
    fn test_round_label() {
        use crate::game::WordBank;

        let solo = App::start(
            GameConfiguration::new(GameMode::Solo).with_rounds(3),
            WordBank::with_seed(7),
        )
        .unwrap();
        assert_eq!(round_label(&solo), "Round 1/3");

        let mut duel = App::start(
            GameConfiguration::new(GameMode::Duel).with_rounds(3),
            WordBank::with_seed(7),
        )
        .unwrap();
        assert_eq!(round_label(&duel), "Round 1/3  Turn 1/6");
        duel.on_char('a');
        duel.on_submit();
        duel.on_char('a');
        duel.on_submit();
        assert_eq!(duel.engine().status(), Status::SwitchRoles);
        assert_eq!(round_label(&duel), "Round 1/3  Turn 2/6");
    }

    #[test]
    fn test_mask_input() {
        assert_eq!(mask_input("ice cream"), "*** *****");
    }

    #[test]
    fn test_feedback_colors() {
        assert_eq!(format_feedback("Nice!").1, Color::Green);
        assert_eq!(format_feedback("Nope. 5 lives left").1, Color::Red);
        assert_eq!(format_feedback("'1' is not a letter").1, Color::Red);
        assert_eq!(format_feedback("Already tried that letter").1, Color::Yellow);
        assert_eq!(format_feedback("Guess a letter").1, Color::White);
        assert_eq!(format_feedback(""), (String::new(), Color::White));
    }
}
