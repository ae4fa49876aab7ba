//! Keybindings: Enter submit, Ctrl+T theme, Ctrl+L clear, Up/Down history,
//! PgUp/PgDn scroll, bare j/k/g/G/q only while the input is empty.

use crate::actions::Action;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::time::Duration;

pub const TICK_RATE: Duration = Duration::from_millis(80);

pub fn key_to_action(event: &KeyEvent, input_empty: bool) -> Option<Action> {
    // Accept Press and Repeat (hold key); ignore Release so we don't double-handle.
    if event.kind == KeyEventKind::Release {
        return None;
    }
    let (code, mods) = (event.code, event.modifiers);

    if code == KeyCode::Char('c') && mods.contains(KeyModifiers::CONTROL) {
        return Some(Action::Quit);
    }
    if code == KeyCode::Char('t') && mods.contains(KeyModifiers::CONTROL) {
        return Some(Action::ThemeToggle);
    }
    if code == KeyCode::Char('l') && mods.contains(KeyModifiers::CONTROL) {
        return Some(Action::ClearInput);
    }
    if code == KeyCode::Esc && mods.is_empty() {
        return Some(Action::ClearInput);
    }

    if code == KeyCode::Enter && mods.is_empty() {
        return Some(Action::Submit);
    }
    if code == KeyCode::Backspace && mods.is_empty() {
        return Some(Action::Backspace);
    }
    if code == KeyCode::Left && mods.is_empty() {
        return Some(Action::CursorLeft);
    }
    if code == KeyCode::Right && mods.is_empty() {
        return Some(Action::CursorRight);
    }

    if code == KeyCode::Up && mods.is_empty() {
        return Some(Action::HistoryUp);
    }
    if code == KeyCode::Down && mods.is_empty() {
        return Some(Action::HistoryDown);
    }

    if code == KeyCode::PageUp && mods.is_empty() {
        return Some(Action::ChatScrollPageUp);
    }
    if code == KeyCode::PageDown && mods.is_empty() {
        return Some(Action::ChatScrollPageDown);
    }

    // Bare-letter shortcuts only while nothing is typed, so the same keys
    // still reach the query input.
    if input_empty && mods.is_empty() {
        match code {
            KeyCode::Char('q') => return Some(Action::Quit),
            KeyCode::Char('j') => return Some(Action::ChatScrollDown),
            KeyCode::Char('k') => return Some(Action::ChatScrollUp),
            KeyCode::Char('g') => return Some(Action::ChatScrollTop),
            _ => {}
        }
    }
    if input_empty && code == KeyCode::Char('G') && mods.contains(KeyModifiers::SHIFT) {
        return Some(Action::ChatScrollBottom);
    }

    // Any other character goes to input (allow Alt for accented chars; only block Ctrl/Cmd).
    if let KeyCode::Char(c) = code {
        if !mods.contains(KeyModifiers::CONTROL) && !mods.contains(KeyModifiers::SUPER) {
            return Some(Action::Char(c));
        }
    }

    None
}
