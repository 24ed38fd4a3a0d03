//! Footer: query editor, or key hints while browsing.

use super::theme;
use crate::app::App;
use crate::keyboard::InputMode;

use ratatui::layout::{Position, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

pub const BROWSE_HINTS: &str =
    "↑↓ track  Tab view  r re-evaluate  m mitigation  / ask  PgUp/PgDn scroll  x dismiss  q quit";

pub const EDIT_HINTS: &str = " Enter submit · Esc cancel ";

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    match app.mode {
        InputMode::EditingQuery => {
            let block = Block::default()
                .borders(Borders::ALL)
                .border_style(theme::border(true))
                .title(Span::styled(" ASK THE ADVISOR ", theme::title()))
                .title_bottom(Line::from(Span::styled(EDIT_HINTS, theme::muted())));
            let inner = block.inner(area);
            f.render_widget(Paragraph::new(app.state.query.as_str()).block(block), area);

            let offset = app.state.query.chars().count() as u16;
            let x = inner.x.saturating_add(offset).min(inner.right().saturating_sub(1));
            f.set_cursor_position(Position::new(x, inner.y));
        }
        InputMode::Browse => {
            let text = if app.state.query.is_empty() {
                Line::from(Span::styled(BROWSE_HINTS, theme::muted()))
            } else {
                Line::from(vec![
                    Span::styled("query: ", theme::muted()),
                    Span::raw(app.state.query.clone()),
                    Span::styled("   / edit · Enter in editor to ask", theme::muted()),
                ])
            };
            let block = Block::default()
                .borders(Borders::ALL)
                .border_style(theme::border(false));
            f.render_widget(Paragraph::new(text).block(block), area);
        }
    }
}
