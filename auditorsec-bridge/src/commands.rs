//! One-shot CLI subcommands.

use crate::config::Config;

use auditorsec_core::advisor::{AdvisorOutcome, StrategicAdvisor};
use auditorsec_core::formatter::{self, DisplayBlock};
use auditorsec_core::prompt::PromptTemplate;
use auditorsec_core::tracks::TrackCatalog;
use auditorsec_neural::GeminiClient;

use anyhow::{bail, Context, Result};
use owo_colors::OwoColorize;
use std::io::Read;
use std::path::Path;
use std::sync::Arc;

/// Render display blocks as terminal text, coloured when `color` is set.
pub fn render_ansi(blocks: &[DisplayBlock], color: bool) -> String {
    let mut out = String::new();

    for block in blocks {
        let line = match block {
            DisplayBlock::Heading { level, text } if color => match level {
                1 => text.bold().underline().to_string(),
                2 => text.bright_blue().bold().to_string(),
                _ => text.cyan().bold().to_string(),
            },
            DisplayBlock::Heading { text, .. } => text.clone(),
            DisplayBlock::ListItem { text } if color => {
                format!("  {} {}", "•".bright_blue(), text)
            }
            DisplayBlock::ListItem { text } => format!("  • {}", text),
            DisplayBlock::CodeLine { text } if color => {
                format!("  {} {}", "│".dimmed(), text.green())
            }
            DisplayBlock::CodeLine { text } => format!("  │ {}", text),
            DisplayBlock::Paragraph { text } => text.clone(),
            DisplayBlock::Blank => String::new(),
        };
        out.push_str(&line);
        out.push('\n');
    }

    out
}

/// Tracks as a plain table.
pub fn tracks_table(catalog: &TrackCatalog) -> String {
    let mut out = format!(
        "{:<10} {:<20} {:>8} {:>10} {:>7} {:>11}\n",
        "ID", "TRACK", "PROGRESS", "REVENUE", "PILOTS", "MILESTONES"
    );
    for t in catalog.tracks() {
        out.push_str(&format!(
            "{:<10} {:<20} {:>7}% {:>10} {:>7} {:>8}/{:<2}\n",
            t.id,
            t.track_type.label(),
            t.progress,
            t.revenue,
            t.active_pilots,
            t.completed_milestones(),
            t.milestones.len()
        ));
    }
    out
}

pub fn run_tracks(json: bool) -> Result<()> {
    let catalog = TrackCatalog::seeded();
    if json {
        let text = serde_json::to_string_pretty(catalog.tracks())
            .context("Failed to serialise track catalog")?;
        println!("{}", text);
    } else {
        print!("{}", tracks_table(&catalog));
    }
    Ok(())
}

/// Build the template for `ask` from its flags.
pub fn ask_template(mitigation: bool, query: &[String]) -> PromptTemplate {
    if mitigation {
        PromptTemplate::MitigationPlan
    } else {
        PromptTemplate::from_query(&query.join(" "))
    }
}

pub async fn run_ask(
    config: &Config,
    track_id: &str,
    template: PromptTemplate,
    color: bool,
) -> Result<()> {
    let catalog = TrackCatalog::seeded();
    let track = catalog
        .get(track_id)
        .with_context(|| format!("Cannot ask about track '{}'", track_id))?;

    let client = GeminiClient::new(&config.base_url, &config.model, config.api_key.clone());
    let advisor = StrategicAdvisor::new(Arc::new(client));

    let analysis = advisor.advise(track, template).await;
    print!("{}", render_ansi(&analysis.response.blocks, color));

    if let AdvisorOutcome::Failed { reason, .. } = &analysis.outcome {
        bail!("Strategic advice request failed: {}", reason);
    }
    Ok(())
}

pub fn run_format(path: Option<&Path>, json: bool, color: bool) -> Result<()> {
    let raw = match path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read stdin")?;
            buf
        }
    };

    let blocks = formatter::format(&raw);
    if json {
        let text =
            serde_json::to_string_pretty(&blocks).context("Failed to serialise display blocks")?;
        println!("{}", text);
    } else {
        print!("{}", render_ansi(&blocks, color));
    }
    Ok(())
}
