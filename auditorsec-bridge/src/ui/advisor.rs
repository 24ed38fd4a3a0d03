//! Advisor panel: formatted analysis, spinner while a request is in flight.

use super::theme;
use crate::app::App;
use crate::helpers::format_duration_short;

use auditorsec_core::formatter::DisplayBlock;
use chrono::Utc;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

pub const ANALYZING: &str = "Analyzing multi-dimensional risk vectors...";

/// Turn display blocks into styled lines, one line per block.
pub fn block_lines(blocks: &[DisplayBlock]) -> Vec<Line<'static>> {
    blocks
        .iter()
        .map(|block| match block {
            DisplayBlock::Heading { level, text } => {
                Line::from(Span::styled(text.clone(), theme::heading(*level)))
            }
            DisplayBlock::ListItem { text } => Line::from(vec![
                Span::styled("  • ", Style::default().fg(theme::ACCENT)),
                Span::raw(text.clone()),
            ]),
            DisplayBlock::CodeLine { text } => Line::from(vec![
                Span::styled("  │ ", theme::muted()),
                Span::styled(text.clone(), theme::code()),
            ]),
            DisplayBlock::Paragraph { text } => Line::from(text.clone()),
            DisplayBlock::Blank => Line::default(),
        })
        .collect()
}

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let mut title = vec![Span::styled(" AI STRATEGIC ADVISOR ", theme::title())];

    let lines = if app.state.is_analyzing() {
        vec![
            Line::default(),
            Line::from(Span::styled(
                format!("{} {}", app.spinner(), ANALYZING),
                Style::default().fg(theme::ACCENT).add_modifier(Modifier::ITALIC),
            )),
        ]
    } else {
        if let Some(analysis) = &app.state.analysis {
            let age = (Utc::now() - analysis.received_at).num_seconds();
            title.push(Span::styled(
                format!(
                    "· {} · analysed {} ago ",
                    analysis.template.label(),
                    format_duration_short(age)
                ),
                theme::muted(),
            ));
        }
        block_lines(&app.state.display_blocks())
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::border(true))
        .title(Line::from(title));
    f.render_widget(
        Paragraph::new(lines)
            .block(block)
            .wrap(Wrap { trim: false })
            .scroll((app.advisor_scroll, 0)),
        area,
    );
}
