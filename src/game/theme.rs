//! Cosmetic themes for the gallows figure

use clap::ValueEnum;

/// Visual theme for the hanged figure. Has no effect on game rules.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, ValueEnum)]
pub enum Theme {
    #[default]
    Classic,
    Pirate,
    Cowboy,
    Astronaut,
}

impl Theme {
    /// Get all themes in menu order
    pub fn all() -> &'static [Theme] {
        &[Theme::Classic, Theme::Pirate, Theme::Cowboy, Theme::Astronaut]
    }

    /// Stable identifier, used in logs
    pub fn id(&self) -> &'static str {
        match self {
            Theme::Classic => "default",
            Theme::Pirate => "pirate",
            Theme::Cowboy => "cowboy",
            Theme::Astronaut => "space",
        }
    }

    /// Get the display label for this theme
    pub fn label(&self) -> &'static str {
        match self {
            Theme::Classic => "Classic",
            Theme::Pirate => "Pirate",
            Theme::Cowboy => "Cowboy",
            Theme::Astronaut => "Astronaut",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Theme::Classic => "The traditional hangman look",
            Theme::Pirate => "Arrrr! A swashbuckling theme",
            Theme::Cowboy => "Wild west style hangman",
            Theme::Astronaut => "Space-themed hangman",
        }
    }

    /// The theme after this one, wrapping around
    pub fn next(self) -> Theme {
        let all = Self::all();
        let pos = all.iter().position(|t| *t == self).unwrap_or(0);
        all[(pos + 1) % all.len()]
    }

    /// The theme before this one, wrapping around
    pub fn prev(self) -> Theme {
        let all = Self::all();
        let pos = all.iter().position(|t| *t == self).unwrap_or(0);
        all[(pos + all.len() - 1) % all.len()]
    }
}
