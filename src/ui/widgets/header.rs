//! Header line: app title, version, backend URL.

use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::ui::theme::Palette;

const VERSION: &str = env!("CARGO_PKG_VERSION");

pub fn render(f: &mut Frame, base_url: &str, area: ratatui::prelude::Rect, p: &Palette) {
    let line = Line::from(vec![
        Span::styled(
            " Recs ",
            Style::default().fg(p.accent).add_modifier(Modifier::BOLD),
        ),
        Span::styled(format!("v{VERSION}"), Style::default().fg(p.text_dim)),
        Span::styled("  ·  backend ", Style::default().fg(p.muted)),
        Span::styled(base_url, Style::default().fg(p.text_dim)),
    ]);
    let para = Paragraph::new(line).style(Style::default().bg(p.elevated));
    f.render_widget(para, area);
}
