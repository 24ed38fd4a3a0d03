//! System health: recent ecosystem events and the integration map.

use super::theme;
use crate::app::App;

use auditorsec_core::feed::EventKind;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let [events, integrations] =
        Layout::vertical([Constraint::Min(0), Constraint::Length(5)]).areas(area);

    let lines: Vec<Line> = app
        .events
        .iter()
        .map(|e| {
            Line::from(vec![
                Span::styled("● ", theme::event(e.kind)),
                Span::raw(e.message.clone()),
                Span::styled(format!("  {}", e.age), theme::muted()),
            ])
        })
        .collect();

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::border(true))
        .title(Span::styled(" ECOSYSTEM EVENTS ", theme::title()));
    f.render_widget(Paragraph::new(lines).block(block), events);

    let lines: Vec<Line> = app
        .integrations
        .iter()
        .map(|i| {
            Line::from(vec![
                Span::raw(format!("{:<20}", i.name)),
                Span::styled(i.status.clone(), integration_style(&i.status)),
            ])
        })
        .collect();

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::border(false))
        .title(Span::styled(" INTEGRATION MAP ", theme::title()));
    f.render_widget(Paragraph::new(lines).block(block), integrations);
}

/// Statuses still settling ("SYNCING...") are shown as informational.
fn integration_style(status: &str) -> Style {
    let kind = if status.ends_with("...") {
        EventKind::Info
    } else {
        EventKind::Success
    };
    theme::event(kind).add_modifier(Modifier::BOLD)
}
