//! Update logic: the central message handler.

use crate::app::App;
use crate::keyboard::{map_key, InputMode, KeyCommand};
use crate::messages::Message;

use auditorsec_core::state::Action;

/// Lines moved per PageUp/PageDown in the advisor panel.
pub const SCROLL_STEP: u16 = 5;

pub fn update(app: &mut App, message: Message) {
    match message {
        Message::Key(key) => {
            let command = map_key(key, app.mode, app.state.view, &app.state.query);
            apply_command(app, command);
        }

        Message::AnalysisReady(analysis) => {
            if let Some(analysis) = app.advisor.accept(analysis) {
                app.dispatch(Action::AnalysisReady(analysis));
            }
        }

        Message::Tick => {
            if app.state.is_analyzing() {
                app.spinner_frame = app.spinner_frame.wrapping_add(1);
            }
        }

        // ratatui re-lays out on the next draw.
        Message::Resize(cols, rows) => {
            tracing::debug!(cols, rows, "terminal resized");
        }
    }
}

pub fn apply_command(app: &mut App, command: KeyCommand) {
    match command {
        KeyCommand::Quit => app.should_quit = true,
        KeyCommand::Dispatch(action) => app.dispatch(action),
        KeyCommand::StartEditing => app.mode = InputMode::EditingQuery,
        KeyCommand::StopEditing { submit } => {
            app.mode = InputMode::Browse;
            if submit {
                app.dispatch(Action::SubmitQuery);
            }
        }
        KeyCommand::ScrollUp => {
            app.advisor_scroll = app.advisor_scroll.saturating_sub(SCROLL_STEP);
        }
        KeyCommand::ScrollDown => {
            app.advisor_scroll = app.advisor_scroll.saturating_add(SCROLL_STEP);
        }
        // The status panel shows the newest notification.
        KeyCommand::DismissNotification => {
            if let Some(last) = app.state.notifications.len().checked_sub(1) {
                app.dispatch(Action::DismissNotification(last));
            }
        }
        KeyCommand::Ignore => {}
    }
}
