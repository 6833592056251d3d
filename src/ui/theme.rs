use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::BorderType;

pub struct Theme;

impl Theme {
    pub const BG_ELEVATED: Color = Color::Rgb(28, 31, 40);
    pub const BORDER_DIM: Color = Color::Rgb(58, 62, 75);
    pub const TEXT_PRIMARY: Color = Color::Rgb(230, 233, 240);
    pub const TEXT_SECONDARY: Color = Color::Rgb(160, 166, 180);
    pub const TEXT_MUTED: Color = Color::Rgb(105, 110, 125);
    /// Brand blue from the mock, used for the active tab and the wordmark.
    pub const ACCENT_BLUE: Color = Color::Rgb(24, 119, 242);
    pub const ACCENT_GREEN: Color = Color::Rgb(66, 183, 42);
    pub const ACCENT_AMBER: Color = Color::Rgb(230, 180, 80);

    pub fn border() -> Style {
        Style::default().fg(Self::BORDER_DIM)
    }

    pub fn border_type() -> BorderType {
        BorderType::Rounded
    }

    pub fn section_title() -> Style {
        Style::default()
            .fg(Self::TEXT_PRIMARY)
            .add_modifier(Modifier::BOLD)
    }

    pub fn logo() -> Style {
        Style::default()
            .fg(Self::ACCENT_BLUE)
            .add_modifier(Modifier::BOLD)
    }

    pub fn tab_active() -> Style {
        Style::default()
            .fg(Self::ACCENT_BLUE)
            .add_modifier(Modifier::BOLD)
    }

    pub fn tab_inactive() -> Style {
        Style::default().fg(Self::TEXT_SECONDARY)
    }

    pub fn screen_title() -> Style {
        Style::default()
            .fg(Self::TEXT_PRIMARY)
            .add_modifier(Modifier::BOLD)
    }

    pub fn username() -> Style {
        Style::default()
            .fg(Self::TEXT_PRIMARY)
            .add_modifier(Modifier::BOLD)
    }

    pub fn subtitle() -> Style {
        Style::default().fg(Self::TEXT_SECONDARY)
    }

    pub fn placeholder_text() -> Style {
        Style::default()
            .fg(Self::TEXT_MUTED)
            .add_modifier(Modifier::ITALIC)
    }

    pub fn header_icon() -> Style {
        Style::default().fg(Self::TEXT_SECONDARY)
    }

    pub fn action_label() -> Style {
        Style::default().fg(Self::TEXT_SECONDARY)
    }

    pub fn image_fill() -> Style {
        Style::default().fg(Self::BORDER_DIM)
    }

    pub fn status_bar() -> Style {
        Style::default()
            .fg(Self::TEXT_SECONDARY)
            .bg(Self::BG_ELEVATED)
    }
}
