use super::theme;
use crate::app::App;

use auditorsec_core::feed::EventKind;
use auditorsec_core::state::View;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph};
use ratatui::Frame;

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let [tracks, ops, status] = Layout::vertical([
        Constraint::Min(5),
        Constraint::Length(5),
        Constraint::Length(6),
    ])
    .areas(area);

    render_tracks(f, tracks, app);
    render_ops(f, ops, app);
    render_status(f, status, app);
}

fn render_tracks(f: &mut Frame, area: Rect, app: &App) {
    let items: Vec<ListItem> = app
        .state
        .catalog()
        .tracks()
        .iter()
        .map(|t| {
            ListItem::new(Line::from(vec![
                Span::raw(t.track_type.label().to_string()),
                Span::styled(format!("  {}%", t.progress), theme::muted()),
            ]))
        })
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(theme::border(app.state.view == View::Overview))
                .title(Span::styled(" STRATEGIC TRACKS ", theme::title())),
        )
        .highlight_style(Style::default().fg(theme::ACCENT).add_modifier(Modifier::BOLD))
        .highlight_symbol("▶ ");

    let mut list_state = ListState::default().with_selected(Some(app.state.active_index()));
    f.render_stateful_widget(list, area, &mut list_state);
}

fn render_ops(f: &mut Frame, area: Rect, app: &App) {
    let lines: Vec<Line> = View::all()
        .iter()
        .enumerate()
        .map(|(i, view)| {
            let style = if *view == app.state.view {
                Style::default().fg(theme::ACCENT).add_modifier(Modifier::BOLD)
            } else {
                theme::muted()
            };
            Line::from(Span::styled(format!("{} {}", i + 1, view.label()), style))
        })
        .collect();

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::border(false))
        .title(Span::styled(" OPERATIONS ", theme::title()));
    f.render_widget(Paragraph::new(lines).block(block), area);
}

fn render_status(f: &mut Frame, area: Rect, app: &App) {
    let engine = if app.state.is_analyzing() {
        Span::styled(format!("{} analyzing", app.spinner()), theme::event(EventKind::Info))
    } else {
        Span::styled("● idle", theme::event(EventKind::Success))
    };

    let mut lines = vec![
        Line::from(vec![Span::styled("engine ", theme::muted()), engine]),
        Line::from(vec![
            Span::styled("model  ", theme::muted()),
            Span::raw(app.advisor.model().to_string()),
        ]),
    ];

    if let Some(latest) = app.state.notifications.last() {
        lines.push(Line::from(Span::styled(
            crate::helpers::truncate(&latest.message, area.width.saturating_sub(4) as usize),
            theme::event(latest.kind),
        )));
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::border(false))
        .title(Span::styled(" STATUS ", theme::title()));
    f.render_widget(Paragraph::new(lines).block(block), area);
}
