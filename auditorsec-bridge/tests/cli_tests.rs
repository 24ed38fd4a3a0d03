//! Command-line parsing tests.

use auditorsec_bridge::cli::{Cli, Command};
use auditorsec_bridge::commands::ask_template;
use auditorsec_core::prompt::PromptTemplate;
use clap::Parser;
use std::path::PathBuf;

#[test]
fn no_subcommand_opens_dashboard() {
    let cli = Cli::try_parse_from(["auditorsec"]).unwrap();
    assert_eq!(cli.command(), Command::Dashboard);
}

#[test]
fn tracks_json_flag() {
    let cli = Cli::try_parse_from(["auditorsec", "tracks", "--json"]).unwrap();
    assert_eq!(cli.command(), Command::Tracks { json: true });
}

#[test]
fn ask_defaults_to_security_track() {
    let cli = Cli::try_parse_from(["auditorsec", "ask"]).unwrap();
    assert_eq!(
        cli.command(),
        Command::Ask {
            track: "track-2".into(),
            mitigation: false,
            query: vec![],
        }
    );
}

#[test]
fn ask_collects_query_words() {
    let cli =
        Cli::try_parse_from(["auditorsec", "ask", "--track", "track-1", "how", "to", "scale"])
            .unwrap();
    let Command::Ask { track, query, .. } = cli.command() else {
        panic!("expected ask");
    };
    assert_eq!(track, "track-1");
    assert_eq!(query, vec!["how", "to", "scale"]);
}

#[test]
fn mitigation_conflicts_with_query() {
    assert!(Cli::try_parse_from(["auditorsec", "ask", "--mitigation", "why"]).is_err());
}

#[test]
fn global_flags_after_subcommand() {
    let cli = Cli::try_parse_from([
        "auditorsec",
        "format",
        "reply.md",
        "--model",
        "gemini-pro",
        "--config",
        "/tmp/a.toml",
    ])
    .unwrap();
    assert_eq!(cli.model.as_deref(), Some("gemini-pro"));
    assert_eq!(cli.config, Some(PathBuf::from("/tmp/a.toml")));
    assert_eq!(
        cli.command(),
        Command::Format {
            path: Some(PathBuf::from("reply.md")),
            json: false,
        }
    );
}

#[test]
fn ask_template_from_flags() {
    assert_eq!(ask_template(true, &[]), PromptTemplate::MitigationPlan);
    assert_eq!(ask_template(false, &[]), PromptTemplate::StrategicAlternatives);
    assert_eq!(
        ask_template(false, &["  cut".into(), "costs ".into()]),
        PromptTemplate::Custom("cut costs".into())
    );
}
