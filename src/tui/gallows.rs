//! ASCII gallows figure, one body part per wrong guess

use crate::game::Theme;

/// Number of body parts in a complete figure
pub const FIGURE_PARTS: u32 = 6;

/// Glyphs for each body part, in drawing order
struct Figure {
    head: char,
    torso: char,
    left_arm: char,
    right_arm: char,
    left_leg: char,
    right_leg: char,
}

fn figure(theme: Theme) -> Figure {
    match theme {
        Theme::Classic => Figure {
            head: 'O',
            torso: '|',
            left_arm: '/',
            right_arm: '\\',
            left_leg: '/',
            right_leg: '\\',
        },
        // Eyepatch and a peg leg
        Theme::Pirate => Figure {
            head: '@',
            torso: '|',
            left_arm: '/',
            right_arm: '\\',
            left_leg: '/',
            right_leg: '|',
        },
        Theme::Cowboy => Figure {
            head: 'Ô',
            torso: '$',
            left_arm: '/',
            right_arm: '\\',
            left_leg: '/',
            right_leg: '\\',
        },
        Theme::Astronaut => Figure {
            head: 'Ø',
            torso: '#',
            left_arm: '=',
            right_arm: '=',
            left_leg: '/',
            right_leg: '\\',
        },
    }
}

/// Body parts to show for `misses` out of `max_lives`
pub fn parts_shown(misses: u32, max_lives: u32) -> u32 {
    if max_lives == 0 {
        return FIGURE_PARTS;
    }
    (misses.saturating_mul(FIGURE_PARTS) / max_lives).min(FIGURE_PARTS)
}

/// Draw the gallows with `parts` body parts
pub fn draw(theme: Theme, parts: u32) -> Vec<String> {
    let f = figure(theme);
    let part = |n: u32, c: char| if parts >= n { c } else { ' ' };

    vec![
        "  +---+".to_string(),
        "  |   |".to_string(),
        format!("  {}   |", part(1, f.head)),
        format!(
            " {}{}{}  |",
            part(3, f.left_arm),
            part(2, f.torso),
            part(4, f.right_arm)
        ),
        format!(" {} {}  |", part(5, f.left_leg), part(6, f.right_leg)),
        "      |".to_string(),
        "=========".to_string(),
    ]
}
