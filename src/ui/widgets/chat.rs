//! Chat log: user/assistant entries, recommendation cards, loading entry.

use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
    Frame,
};

use crate::backend::Recommendation;
use crate::services;
use crate::state::{ChatEntry, ChatState};
use crate::ui::theme::{Palette, CARD_STAGGER_TICKS, MESSAGE_GAP};

const ASSISTANT_LABEL: &str = "Recs";
/// Continuation indent under a labelled first line.
const INDENT: &str = "     ";

pub fn render(
    f: &mut Frame,
    chat: &ChatState,
    loading: bool,
    area: ratatui::prelude::Rect,
    p: &Palette,
    spinner_char: char,
    tick: usize,
) {
    let mut lines: Vec<Line> = Vec::new();

    for (i, entry) in chat.entries.iter().enumerate() {
        if i > 0 {
            for _ in 0..MESSAGE_GAP {
                lines.push(Line::from(Span::raw("")));
            }
        }
        lines.extend(entry_lines(entry, p, tick));
    }

    // Transient loading entry: always last, gone once the request settles.
    if loading {
        if !lines.is_empty() {
            for _ in 0..MESSAGE_GAP {
                lines.push(Line::from(Span::raw("")));
            }
        }
        lines.push(Line::from(vec![
            Span::styled(
                format!("{ASSISTANT_LABEL} "),
                Style::default().fg(p.accent_soft).add_modifier(Modifier::BOLD),
            ),
            Span::styled(format!(" {spinner_char} "), Style::default().fg(p.accent)),
            Span::styled("Searching assessments…", Style::default().fg(p.text)),
        ]));
    }

    if lines.is_empty() {
        lines.push(Line::from(Span::styled(
            "Ask anything. Enter to send · Ctrl+T theme",
            Style::default().fg(p.text_dim),
        )));
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(p.border))
        .style(Style::default().bg(p.bg));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let height = inner.height as usize;
    let max_scroll = lines.len().saturating_sub(height);
    // Appends re-pin the viewport to the bottom (max scroll offset).
    let scroll = if chat.follow {
        max_scroll
    } else {
        chat.scroll.min(max_scroll)
    };
    let visible: Vec<Line> = lines.into_iter().skip(scroll).take(height).collect();
    let para = Paragraph::new(visible)
        .style(Style::default().fg(p.text).bg(p.bg))
        .wrap(Wrap { trim: false });
    f.render_widget(para, inner);
}

/// Lines for one log entry. Pure so the rendering rules are testable
/// without a terminal.
fn entry_lines<'a>(entry: &'a ChatEntry, p: &Palette, now_tick: usize) -> Vec<Line<'a>> {
    match entry {
        ChatEntry::User(text) => labelled_lines(
            "You",
            Style::default().fg(p.accent).add_modifier(Modifier::BOLD),
            text,
            Style::default().fg(p.text),
        ),
        ChatEntry::Notice(text) => text
            .lines()
            .map(|s| Line::from(Span::styled(s, Style::default().fg(p.text_dim))))
            .collect(),
        ChatEntry::Error(text) => {
            let mut spans = vec![Span::styled("⚠ ", Style::default().fg(p.error))];
            spans.push(Span::styled(
                text.as_str(),
                Style::default().fg(p.error),
            ));
            vec![Line::from(spans)]
        }
        ChatEntry::Response {
            lead_in,
            recommendations,
            born_tick,
        } => {
            let mut lines = labelled_lines(
                ASSISTANT_LABEL,
                Style::default().fg(p.accent_soft).add_modifier(Modifier::BOLD),
                lead_in,
                Style::default().fg(p.text),
            );
            if recommendations.is_empty() {
                lines.push(Line::from(Span::styled(
                    format!("{INDENT}{}", services::NO_MATCHES),
                    Style::default().fg(p.text),
                )));
            } else {
                let elapsed = now_tick.saturating_sub(*born_tick);
                for (index, rec) in recommendations.iter().enumerate() {
                    // Stagger reveal by card index; cosmetic only.
                    if elapsed < (index + 1) * CARD_STAGGER_TICKS {
                        break;
                    }
                    lines.push(Line::from(Span::raw("")));
                    lines.extend(card_lines(rec, p));
                }
            }
            lines
        }
    }
}

/// One recommendation card: score, linked title, plain-text description.
fn card_lines<'a>(rec: &'a Recommendation, p: &Palette) -> Vec<Line<'a>> {
    let rule = Span::styled("▎ ", Style::default().fg(p.accent_soft));
    vec![
        Line::from(vec![
            Span::raw(INDENT),
            rule.clone(),
            Span::styled(
                services::match_label(rec.similarity),
                Style::default().fg(p.score).add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(vec![
            Span::raw(INDENT),
            rule.clone(),
            Span::styled(
                rec.title.as_str(),
                Style::default().fg(p.text).add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(vec![
            Span::raw(INDENT),
            rule.clone(),
            Span::styled(
                rec.url.as_str(),
                Style::default()
                    .fg(p.link)
                    .add_modifier(Modifier::UNDERLINED),
            ),
        ]),
        Line::from(vec![
            Span::raw(INDENT),
            rule,
            // Literal text, never parsed as markup.
            Span::styled(rec.description.as_str(), Style::default().fg(p.text_dim)),
        ]),
    ]
}

fn labelled_lines<'a>(
    label: &'static str,
    label_style: Style,
    text: &'a str,
    content_style: Style,
) -> Vec<Line<'a>> {
    let mut out = Vec::new();
    let mut body = text.lines();
    let first = body.next().unwrap_or("");
    out.push(Line::from(vec![
        Span::styled(format!("{label} "), label_style),
        Span::styled(first, content_style),
    ]));
    for line in body {
        out.push(Line::from(vec![
            Span::raw(INDENT),
            Span::styled(line, content_style),
        ]));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::Theme;
    use crate::ui::theme::palette;

    fn flatten(lines: &[Line]) -> Vec<String> {
        lines
            .iter()
            .map(|l| l.spans.iter().map(|s| s.content.as_ref()).collect())
            .collect()
    }

    fn rec(title: &str, similarity: f64) -> Recommendation {
        Recommendation {
            title: title.to_string(),
            url: format!("https://example.com/{title}"),
            description: format!("{title} description"),
            similarity,
        }
    }

    #[test]
    fn response_renders_one_card_per_item_with_rounded_score() {
        let entry = ChatEntry::Response {
            lead_in: "Lead in:".into(),
            recommendations: vec![rec("a", 0.873), rec("b", 0.5), rec("c", 0.049)],
            born_tick: 0,
        };
        // Well past the stagger window, all cards are visible.
        let text = flatten(&entry_lines(&entry, palette(Theme::Dark), 1_000));
        let joined = text.join("\n");
        assert_eq!(joined.matches("Match: ").count(), 3);
        assert!(joined.contains("Match: 87%"));
        assert!(joined.contains("Match: 50%"));
        assert!(joined.contains("Match: 5%"));
        assert!(joined.contains("https://example.com/a"));
        assert!(joined.contains("b description"));
    }

    #[test]
    fn empty_response_renders_no_matches_sentence_and_no_cards() {
        let entry = ChatEntry::Response {
            lead_in: "Lead in:".into(),
            recommendations: vec![],
            born_tick: 0,
        };
        let joined = flatten(&entry_lines(&entry, palette(Theme::Light), 1_000)).join("\n");
        assert!(joined.contains(services::NO_MATCHES));
        assert!(!joined.contains("Match: "));
    }

    #[test]
    fn stagger_hides_later_cards_right_after_append() {
        let entry = ChatEntry::Response {
            lead_in: "Lead in:".into(),
            recommendations: vec![rec("a", 0.9), rec("b", 0.8), rec("c", 0.7)],
            born_tick: 100,
        };
        let p = palette(Theme::Dark);
        let at_birth = flatten(&entry_lines(&entry, p, 100)).join("\n");
        assert_eq!(at_birth.matches("Match: ").count(), 0);

        let mid = flatten(&entry_lines(&entry, p, 100 + CARD_STAGGER_TICKS)).join("\n");
        assert_eq!(mid.matches("Match: ").count(), 1);

        let done = flatten(&entry_lines(&entry, p, 100 + 3 * CARD_STAGGER_TICKS)).join("\n");
        assert_eq!(done.matches("Match: ").count(), 3);
    }

    #[test]
    fn error_entry_carries_the_message_text() {
        let entry = ChatEntry::Error("Query cannot be empty".into());
        let joined = flatten(&entry_lines(&entry, palette(Theme::Dark), 0)).join("\n");
        assert!(joined.contains("Query cannot be empty"));
    }
}
