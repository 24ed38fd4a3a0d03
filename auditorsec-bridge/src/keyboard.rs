//! Key → command mapping.
//!
//! Pure function of the key event, the input mode and the current view so
//! it can be tested without a terminal.

use auditorsec_core::state::{Action, View};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    #[default]
    Browse,
    EditingQuery,
}

#[derive(Debug, Clone, PartialEq)]
pub enum KeyCommand {
    Quit,
    Dispatch(Action),
    StartEditing,
    /// Leave the query editor; `submit` sends the query.
    StopEditing { submit: bool },
    ScrollUp,
    ScrollDown,
    DismissNotification,
    Ignore,
}

pub fn map_key(key: KeyEvent, mode: InputMode, view: View, query: &str) -> KeyCommand {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return KeyCommand::Quit;
    }

    match mode {
        InputMode::Browse => map_browse(key, view),
        InputMode::EditingQuery => map_editing(key, query),
    }
}

fn map_browse(key: KeyEvent, view: View) -> KeyCommand {
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => KeyCommand::Quit,
        KeyCode::Up | KeyCode::Char('k') => KeyCommand::Dispatch(Action::SelectPreviousTrack),
        KeyCode::Down | KeyCode::Char('j') => KeyCommand::Dispatch(Action::SelectNextTrack),
        KeyCode::Tab => KeyCommand::Dispatch(Action::SwitchView(view.next())),
        KeyCode::Char('1') => KeyCommand::Dispatch(Action::SwitchView(View::Overview)),
        KeyCode::Char('2') => KeyCommand::Dispatch(Action::SwitchView(View::ComplianceVault)),
        KeyCode::Char('3') => KeyCommand::Dispatch(Action::SwitchView(View::SystemHealth)),
        KeyCode::Char('r') => KeyCommand::Dispatch(Action::ReEvaluate),
        KeyCode::Char('m') => KeyCommand::Dispatch(Action::RequestMitigation),
        KeyCode::Char('/') | KeyCode::Char('i') => KeyCommand::StartEditing,
        KeyCode::Char('x') => KeyCommand::DismissNotification,
        KeyCode::PageUp => KeyCommand::ScrollUp,
        KeyCode::PageDown => KeyCommand::ScrollDown,
        _ => KeyCommand::Ignore,
    }
}

fn map_editing(key: KeyEvent, query: &str) -> KeyCommand {
    match key.code {
        KeyCode::Esc => KeyCommand::StopEditing { submit: false },
        KeyCode::Enter => KeyCommand::StopEditing { submit: true },
        KeyCode::Backspace => {
            let mut next = query.to_string();
            next.pop();
            KeyCommand::Dispatch(Action::QueryChanged(next))
        }
        KeyCode::Char(c) => {
            let mut next = query.to_string();
            next.push(c);
            KeyCommand::Dispatch(Action::QueryChanged(next))
        }
        _ => KeyCommand::Ignore,
    }
}
