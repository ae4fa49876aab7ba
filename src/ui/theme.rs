//! Palettes: dark and light, selected by the app-level theme value.

use ratatui::style::Color;

use crate::state::Theme;

/// Colors for one theme. Widgets take a palette reference instead of
/// reaching for globals, so a toggle restyles the next frame wholesale.
pub struct Palette {
    /// Main canvas (chat area).
    pub bg: Color,
    /// Input bar, status, header.
    pub elevated: Color,
    /// Borders / separators.
    pub border: Color,
    /// Primary accent (prompt, You label).
    pub accent: Color,
    /// Assistant label, card rule.
    pub accent_soft: Color,
    /// Body text.
    pub text: Color,
    /// Secondary text (descriptions, notices).
    pub text_dim: Color,
    /// Hints.
    pub muted: Color,
    /// Links (card URLs).
    pub link: Color,
    /// Match score.
    pub score: Color,
    /// Error entries.
    pub error: Color,
}

const DARK: Palette = Palette {
    bg: Color::Rgb(0x18, 0x1c, 0x22),
    elevated: Color::Rgb(0x16, 0x1a, 0x1f),
    border: Color::Rgb(0x2d, 0x34, 0x3e),
    accent: Color::Rgb(0x6b, 0xbc, 0xff),
    accent_soft: Color::Rgb(0x99, 0xd4, 0xff),
    text: Color::Rgb(0xf2, 0xf4, 0xf8),
    text_dim: Color::Rgb(0xbc, 0xc5, 0xd0),
    muted: Color::Rgb(0x94, 0x9e, 0xad),
    link: Color::Rgb(0x7f, 0xc8, 0xff),
    score: Color::Rgb(0x7d, 0xd6, 0xa0),
    error: Color::Rgb(0xf0, 0x6c, 0x6c),
};

const LIGHT: Palette = Palette {
    bg: Color::Rgb(0xfa, 0xfa, 0xf7),
    elevated: Color::Rgb(0xef, 0xef, 0xea),
    border: Color::Rgb(0xc8, 0xcc, 0xd2),
    accent: Color::Rgb(0x1a, 0x5f, 0xb4),
    accent_soft: Color::Rgb(0x2a, 0x76, 0xc6),
    text: Color::Rgb(0x20, 0x24, 0x2a),
    text_dim: Color::Rgb(0x4a, 0x52, 0x5c),
    muted: Color::Rgb(0x6e, 0x78, 0x84),
    link: Color::Rgb(0x15, 0x65, 0xc0),
    score: Color::Rgb(0x1e, 0x7a, 0x46),
    error: Color::Rgb(0xc0, 0x1c, 0x28),
};

pub fn palette(theme: Theme) -> &'static Palette {
    match theme {
        Theme::Dark => &DARK,
        Theme::Light => &LIGHT,
    }
}

pub const HEADER_HEIGHT: u16 = 1;
pub const STATUS_HEIGHT: u16 = 1;
pub const INPUT_HEIGHT: u16 = 2;
pub const MIN_CHAT_LINES: u16 = 3;
/// Blank line between chat entries.
pub const MESSAGE_GAP: usize = 1;
/// Inner horizontal margin (chars each side).
pub const MARGIN_X: u16 = 1;
pub const SPINNER: &[char] = &['⠋', '⠙', '⠹', '⠸', '⠼', '⠴', '⠦', '⠧', '⠇', '⠏'];
/// Ticks between successive card reveals. Presentational only.
pub const CARD_STAGGER_TICKS: usize = 2;
