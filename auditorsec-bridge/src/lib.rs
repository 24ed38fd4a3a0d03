//! AuditorSEC Command front end.
//!
//! Module layout:
//! - `app`      : application struct, effect dispatch
//! - `messages` : Message enum fed into `update`
//! - `update`   : central message handler
//! - `keyboard` : key → command mapping (pure)
//! - `ui`       : ratatui views
//! - `commands` : one-shot CLI subcommands
//! - `config`   : configuration resolution
//! - `logging`  : tracing subscriber setup
//! - `helpers`  : formatting utilities

pub mod app;
pub mod cli;
pub mod commands;
pub mod config;
pub mod helpers;
pub mod keyboard;
pub mod logging;
pub mod messages;
pub mod ui;
pub mod update;
