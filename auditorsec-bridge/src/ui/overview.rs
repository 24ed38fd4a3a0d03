//! Overview: track header, progress, revenue growth, alternatives, risks.

use super::theme;
use crate::app::App;
use crate::helpers::{bar, format_compact};

use auditorsec_core::tracks::TrackData;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Gauge, Paragraph, Wrap};
use ratatui::Frame;

/// Progress at which a track is shown as ready rather than in beta.
pub const MVP_READY_THRESHOLD: u8 = 80;

/// Prefix of the highest-impact alternative.
pub const STRONGEST_MARKER: &str = "★ ";

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let Some(track) = app.state.active_track() else {
        f.render_widget(
            Paragraph::new("No tracks loaded").style(theme::muted()),
            area,
        );
        return;
    };

    let [header, gauge, body] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Length(3),
        Constraint::Min(0),
    ])
    .areas(area);
    let [left, right] =
        Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)]).areas(body);
    let [chart, risks] =
        Layout::vertical([Constraint::Percentage(50), Constraint::Percentage(50)]).areas(left);

    render_header(f, header, track);
    render_progress(f, gauge, track);
    render_revenue(f, chart, app);
    render_risks(f, risks, track);
    render_alternatives(f, right, track);
}

fn render_header(f: &mut Frame, area: Rect, track: &TrackData) {
    let line = Line::from(vec![
        Span::styled(
            format!("{} Track", track.track_type.label()),
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        ),
        Span::styled("  revenue ", theme::muted()),
        Span::styled(format!("{} / Month", track.revenue), Style::default().fg(Color::Green)),
        Span::styled("  pilots ", theme::muted()),
        Span::raw(track.active_pilots.to_string()),
    ]);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::border(true))
        .title(Span::styled(" AUDITORSEC COMMAND ", theme::title()));
    f.render_widget(Paragraph::new(line).block(block), area);
}

fn render_progress(f: &mut Frame, area: Rect, track: &TrackData) {
    let stage = if track.progress >= MVP_READY_THRESHOLD {
        "MVP READY"
    } else {
        "BETA DEPLOY"
    };

    let gauge = Gauge::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(theme::border(false))
                .title(Span::styled(" TRACK PROGRESS ", theme::title())),
        )
        .gauge_style(Style::default().fg(theme::ACCENT))
        .percent(u16::from(track.progress.min(100)))
        .label(format!("{}% · {}", track.progress, stage));
    f.render_widget(gauge, area);
}

fn render_revenue(f: &mut Frame, area: Rect, app: &App) {
    let series = &app.revenue;
    let max = series.max_value();
    let bar_width = area.width.saturating_sub(16) as usize;

    let mut lines: Vec<Line> = series
        .points()
        .iter()
        .map(|p| {
            let color = if p.revenue >= p.target {
                Color::Green
            } else {
                theme::ACCENT
            };
            Line::from(vec![
                Span::styled(format!("{:<4}", p.month), theme::muted()),
                Span::styled(bar(p.revenue, max, bar_width), Style::default().fg(color)),
                Span::raw(format!(" {:>6}", format_compact(p.revenue))),
            ])
        })
        .collect();

    lines.push(Line::from(Span::styled(
        format!(
            "{} of {} months ahead of target",
            series.ahead_of_target(),
            series.points().len()
        ),
        theme::muted(),
    )));

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::border(false))
        .title(Span::styled(" REVENUE GROWTH ", theme::title()));
    f.render_widget(Paragraph::new(lines).block(block), area);
}

fn render_risks(f: &mut Frame, area: Rect, track: &TrackData) {
    let bar_width = area.width.saturating_sub(12) as usize;
    let mut lines = Vec::new();

    for (i, risk) in track.critical_risks.iter().enumerate() {
        let severity = TrackData::risk_severity(i);
        lines.push(Line::from(Span::raw(risk.clone())));
        lines.push(Line::from(vec![
            Span::styled(
                bar(u64::from(severity), 100, bar_width),
                Style::default().fg(Color::Red),
            ),
            Span::styled(format!(" {}%", severity), theme::muted()),
        ]));
    }
    lines.push(Line::from(Span::styled(
        "m: generate mitigation plan",
        Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
    )));

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::border(false))
        .title(Span::styled(" CRITICAL RISKS ", theme::title()));
    f.render_widget(
        Paragraph::new(lines).block(block).wrap(Wrap { trim: true }),
        area,
    );
}

fn render_alternatives(f: &mut Frame, area: Rect, track: &TrackData) {
    let strongest = track.strongest_alternative().map(|a| a.name.as_str());
    let mut lines = Vec::new();

    for alt in &track.alternatives {
        let marker = if Some(alt.name.as_str()) == strongest {
            Span::styled(STRONGEST_MARKER, Style::default().fg(Color::Yellow))
        } else {
            Span::raw("  ")
        };
        lines.push(Line::from(vec![
            marker,
            Span::styled(alt.name.clone(), Style::default().add_modifier(Modifier::BOLD)),
            Span::raw("  "),
            Span::styled(
                format!("{} risk", alt.risk_level.label().to_uppercase()),
                theme::risk(alt.risk_level),
            ),
            Span::styled(format!("  impact {}/10", alt.impact), theme::muted()),
        ]));
        for pro in &alt.pros {
            lines.push(Line::from(Span::styled(
                format!("  + {}", pro),
                Style::default().fg(Color::Green),
            )));
        }
        for con in &alt.cons {
            lines.push(Line::from(Span::styled(
                format!("  - {}", con),
                Style::default().fg(Color::Red),
            )));
        }
        lines.push(Line::default());
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::border(false))
        .title(Span::styled(" STRATEGIC ALTERNATIVES ", theme::title()));
    f.render_widget(
        Paragraph::new(lines).block(block).wrap(Wrap { trim: true }),
        area,
    );
}
