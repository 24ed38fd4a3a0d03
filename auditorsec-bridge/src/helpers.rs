//! Shared formatting functions.
//!
//! Zero UI dependencies. Used by both the dashboard and the one-shot commands.

// ────────────────────────────────────────────────────────────────
// Durations
// ────────────────────────────────────────────────────────────────

pub fn format_duration_short(secs: i64) -> String {
    let secs = secs.max(0);
    if secs < 60 {
        format!("{}s", secs)
    } else if secs < 3600 {
        format!("{}m", secs / 60)
    } else {
        let h = secs / 3600;
        let m = (secs % 3600) / 60;
        format!("{}h {}m", h, m)
    }
}

// ────────────────────────────────────────────────────────────────
// Numbers
// ────────────────────────────────────────────────────────────────

/// 65000 -> "65.0k", 1_200_000 -> "1.2M".
pub fn format_compact(value: u64) -> String {
    if value >= 1_000_000 {
        format!("{:.1}M", value as f64 / 1_000_000.0)
    } else if value >= 1_000 {
        format!("{:.1}k", value as f64 / 1_000.0)
    } else {
        value.to_string()
    }
}

// ────────────────────────────────────────────────────────────────
// Bars
// ────────────────────────────────────────────────────────────────

/// Text bar `width` cells wide, filled to `value / max`.
pub fn bar(value: u64, max: u64, width: usize) -> String {
    let filled = if max == 0 {
        0
    } else {
        ((value as f64 / max as f64) * width as f64).round() as usize
    }
    .min(width);
    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Shorten `s` to at most `max` chars, marking the cut with an ellipsis.
pub fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        return s.to_string();
    }
    if max == 0 {
        return String::new();
    }
    let kept: String = s.chars().take(max - 1).collect();
    format!("{}…", kept)
}
