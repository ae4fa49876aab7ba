//! Status bar: loading state on the left, theme label and key hints right.

use ratatui::{style::Style, text::Span, widgets::Paragraph, Frame};

use crate::state::Theme;
use crate::ui::theme::Palette;

pub fn render(
    f: &mut Frame,
    area: ratatui::prelude::Rect,
    loading: bool,
    spinner_char: char,
    theme: Theme,
    p: &Palette,
) {
    let left = if loading {
        format!(" {spinner_char} Waiting for recommendations…")
    } else {
        " Ready".to_string()
    };
    let right = format!(
        " {}  ·  ↑↓ history  PgUp/PgDn scroll  Ctrl+T theme  Enter send ",
        theme.label()
    );
    let width = area.width as usize;
    let left_len = left.chars().count();
    let right_len = right.chars().count();
    let pad = width.saturating_sub(left_len + right_len);
    let line = format!("{}{}{}", left, " ".repeat(pad), right);
    let span = Span::styled(line, Style::default().fg(p.muted).bg(p.elevated));
    let para = Paragraph::new(span);
    f.render_widget(para, area);
}
