//! Colors and styles shared by the views.

use auditorsec_core::feed::EventKind;
use auditorsec_core::tracks::{MilestoneStatus, RiskLevel};
use ratatui::style::{Color, Modifier, Style};

pub const ACCENT: Color = Color::Indexed(69);
pub const MUTED: Color = Color::DarkGray;

pub fn title() -> Style {
    Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
}

pub fn border(focused: bool) -> Style {
    if focused {
        Style::default().fg(ACCENT)
    } else {
        Style::default().fg(MUTED)
    }
}

pub fn muted() -> Style {
    Style::default().fg(MUTED)
}

/// Level 1 is loudest; anything deeper than 3 never reaches here.
pub fn heading(level: u8) -> Style {
    match level {
        1 => Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
        2 => Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        _ => Style::default().fg(Color::LightBlue).add_modifier(Modifier::BOLD),
    }
}

pub fn code() -> Style {
    Style::default().fg(Color::Green).bg(Color::Black)
}

pub fn risk(level: RiskLevel) -> Style {
    let color = match level {
        RiskLevel::Low => Color::Green,
        RiskLevel::Medium => Color::Yellow,
        RiskLevel::High => Color::Red,
    };
    Style::default().fg(color).add_modifier(Modifier::BOLD)
}

pub fn event(kind: EventKind) -> Style {
    let color = match kind {
        EventKind::Success => Color::Green,
        EventKind::Warning => Color::Yellow,
        EventKind::Info => Color::LightBlue,
    };
    Style::default().fg(color)
}

pub fn milestone(status: MilestoneStatus) -> Style {
    match status {
        MilestoneStatus::Completed => Style::default().fg(Color::Green),
        MilestoneStatus::InProgress => Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        MilestoneStatus::Pending => Style::default().fg(MUTED),
        MilestoneStatus::Delayed => Style::default().fg(Color::Red),
    }
}

pub fn milestone_marker(status: MilestoneStatus) -> &'static str {
    match status {
        MilestoneStatus::Completed => "✔",
        MilestoneStatus::InProgress => "◐",
        MilestoneStatus::Pending => "○",
        MilestoneStatus::Delayed => "✖",
    }
}
