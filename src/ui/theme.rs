use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::BorderType;

/// Form palette: slate backdrop, light card, grey inputs.
pub struct Theme;

impl Theme {
    pub const BG_BACKDROP: Color = Color::Rgb(0x3e, 0x51, 0x51);
    pub const BG_CARD: Color = Color::Rgb(0xee, 0xee, 0xee);
    pub const BG_INPUT: Color = Color::Rgb(0xcc, 0xcc, 0xcc);
    pub const BORDER_DIM: Color = Color::Rgb(0xb0, 0xb0, 0xb0);
    pub const ACCENT_SAND: Color = Color::Rgb(0xde, 0xcb, 0xa4);
    pub const BUTTON: Color = Color::Rgb(0x3e, 0x51, 0x51);
    pub const BUTTON_FOCUSED: Color = Color::Rgb(0x4b, 0x69, 0x60);
    pub const TEXT_PRIMARY: Color = Color::Rgb(0x11, 0x11, 0x11);
    pub const TEXT_SECONDARY: Color = Color::Rgb(0x55, 0x55, 0x55);

    pub fn backdrop() -> Style {
        Style::default().bg(Self::BG_BACKDROP)
    }

    pub fn card() -> Style {
        Style::default().fg(Self::TEXT_PRIMARY).bg(Self::BG_CARD)
    }

    pub fn card_border() -> Style {
        Style::default().fg(Self::ACCENT_SAND).bg(Self::BG_CARD)
    }

    pub fn title() -> Style {
        Style::default()
            .fg(Self::TEXT_PRIMARY)
            .add_modifier(Modifier::BOLD)
    }

    pub fn border() -> Style {
        Style::default().fg(Self::BORDER_DIM)
    }

    pub fn border_focused() -> Style {
        Style::default().fg(Self::BUTTON_FOCUSED)
    }

    pub fn border_type() -> BorderType {
        BorderType::Rounded
    }

    pub fn border_type_focused() -> BorderType {
        BorderType::Thick
    }

    pub fn label() -> Style {
        Style::default().fg(Self::TEXT_SECONDARY)
    }

    pub fn label_focused() -> Style {
        Style::default()
            .fg(Self::BUTTON_FOCUSED)
            .add_modifier(Modifier::BOLD)
    }

    pub fn input(bg: Color) -> Style {
        Style::default().fg(Self::TEXT_PRIMARY).bg(bg)
    }

    pub fn radio_selected() -> Style {
        Style::default()
            .fg(Self::BUTTON_FOCUSED)
            .add_modifier(Modifier::BOLD)
    }

    pub fn radio_normal() -> Style {
        Style::default().fg(Self::TEXT_PRIMARY)
    }

    pub fn error_message() -> Style {
        Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
    }

    pub fn button(focused: bool) -> Style {
        let bg = if focused { Self::BUTTON_FOCUSED } else { Self::BUTTON };
        let style = Style::default().fg(Color::White).bg(bg);
        if focused {
            style.add_modifier(Modifier::BOLD)
        } else {
            style
        }
    }

    pub fn status_bar() -> Style {
        Style::default().fg(Color::White).bg(Color::DarkGray)
    }

    pub fn status_key() -> Style {
        Style::default().fg(Self::ACCENT_SAND).bg(Color::DarkGray)
    }
}
