//! Compliance vault: milestone timeline of the active track.

use super::theme;
use crate::app::App;

use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let mut lines = Vec::new();

    if let Some(track) = app.state.active_track() {
        lines.push(Line::from(Span::styled(
            format!(
                "{} Track · {}/{} milestones completed",
                track.track_type.label(),
                track.completed_milestones(),
                track.milestones.len()
            ),
            theme::muted(),
        )));
        lines.push(Line::default());

        for m in &track.milestones {
            let style = theme::milestone(m.status);
            lines.push(Line::from(vec![
                Span::styled(format!("{} ", theme::milestone_marker(m.status)), style),
                Span::styled(format!("{}  ", m.date), theme::muted()),
                Span::styled(m.title.clone(), Style::default().add_modifier(Modifier::BOLD)),
                Span::styled(format!("  [{}]", m.status.label()), style),
            ]));
            lines.push(Line::from(Span::raw(format!("    {}", m.description))));
        }
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::border(true))
        .title(Span::styled(" COMPLIANCE VAULT ", theme::title()));
    f.render_widget(
        Paragraph::new(lines).block(block).wrap(Wrap { trim: false }),
        area,
    );
}
