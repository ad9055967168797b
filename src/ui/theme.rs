use ratatui::style::{Color, Modifier, Style};

/// Color theme.
///
/// Text and chrome use the terminal's default foreground (Color::Reset).
/// Color is reserved for focus, the edit caret and the add affordances.
pub struct Theme;

impl Theme {
    pub const FG: Color = Color::Reset;
    pub const DIM: Color = Color::DarkGray;

    // List
    pub const LIST_TITLE: Color = Color::Reset;
    pub const LIST_BORDER: Color = Color::DarkGray;
    pub const LIST_FOCUSED_BORDER: Color = Color::Reset;

    // Card
    pub const CARD_BORDER: Color = Color::DarkGray;
    pub const CARD_SELECTED_BORDER: Color = Color::Reset;

    // Editing
    pub const EDIT_BORDER: Color = Color::Blue;
    pub const ADD: Color = Color::Green;
    pub const DANGER: Color = Color::Red;

    pub fn dim_style() -> Style {
        Style::default().fg(Self::DIM)
    }

    pub fn status_style() -> Style {
        Style::default().fg(Self::FG)
    }

    /// Reverse-video badge used for mode names and prompts.
    pub fn badge_style() -> Style {
        Style::default()
            .fg(Self::FG)
            .add_modifier(Modifier::BOLD | Modifier::REVERSED)
    }

    pub fn caret_style() -> Style {
        Style::default().add_modifier(Modifier::REVERSED)
    }
}
