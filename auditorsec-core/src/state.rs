//! Dashboard state + reducer.
//!
//! All UI state lives in [`DashboardState`]; the front end turns input into
//! [`Action`]s and feeds them through [`reduce`]. The reducer never performs
//! I/O: when a new analysis is needed it returns [`Effect::RequestAnalysis`]
//! and the caller issues the ticket and dispatches the request.

use crate::advisor::{AdvisorOutcome, Analysis, RequestTicket, PLACEHOLDER};
use crate::feed::EventKind;
use crate::formatter::DisplayBlock;
use crate::prompt::PromptTemplate;
use crate::tracks::{TrackCatalog, TrackData};

use chrono::{DateTime, Utc};

/// Oldest notifications are dropped past this many.
pub const MAX_NOTIFICATIONS: usize = 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Overview,
    ComplianceVault,
    SystemHealth,
}

impl View {
    pub fn label(&self) -> &'static str {
        match self {
            View::Overview => "Overview",
            View::ComplianceVault => "Compliance Vault",
            View::SystemHealth => "System Health",
        }
    }

    pub fn all() -> &'static [View] {
        &[View::Overview, View::ComplianceVault, View::SystemHealth]
    }

    pub fn next(&self) -> View {
        match self {
            View::Overview => View::ComplianceVault,
            View::ComplianceVault => View::SystemHealth,
            View::SystemHealth => View::Overview,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub message: String,
    pub kind: EventKind,
    pub at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    SelectTrack(String),
    SelectNextTrack,
    SelectPreviousTrack,
    SwitchView(View),
    QueryChanged(String),
    SubmitQuery,
    ReEvaluate,
    RequestMitigation,
    AnalysisRequested(RequestTicket),
    AnalysisReady(Analysis),
    DismissNotification(usize),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    RequestAnalysis(PromptTemplate),
}

#[derive(Debug, Clone)]
pub struct DashboardState {
    catalog: TrackCatalog,
    active_track: usize,
    pub view: View,
    pub query: String,
    pub analysis: Option<Analysis>,
    pub pending: Option<RequestTicket>,
    pub notifications: Vec<Notification>,
}

impl DashboardState {
    /// Fresh state on the catalog's default track, plus the initial request
    /// the dashboard makes as soon as it opens.
    pub fn boot(catalog: TrackCatalog) -> (Self, Effect) {
        let active_track = catalog
            .default_track()
            .and_then(|t| catalog.position(&t.id))
            .unwrap_or(0);

        let effect = if catalog.is_empty() {
            Effect::None
        } else {
            Effect::RequestAnalysis(PromptTemplate::StrategicAlternatives)
        };

        let state = Self {
            catalog,
            active_track,
            view: View::default(),
            query: String::new(),
            analysis: None,
            pending: None,
            notifications: Vec::new(),
        };
        (state, effect)
    }

    pub fn catalog(&self) -> &TrackCatalog {
        &self.catalog
    }

    pub fn active_index(&self) -> usize {
        self.active_track
    }

    pub fn active_track(&self) -> Option<&TrackData> {
        self.catalog.tracks().get(self.active_track)
    }

    pub fn is_analyzing(&self) -> bool {
        self.pending.is_some()
    }

    /// Blocks for the advisor panel; the placeholder when nothing has arrived.
    pub fn display_blocks(&self) -> Vec<DisplayBlock> {
        match &self.analysis {
            Some(a) if !a.response.is_empty() => a.response.blocks.clone(),
            _ => vec![DisplayBlock::Paragraph {
                text: PLACEHOLDER.to_string(),
            }],
        }
    }

    pub fn notify(&mut self, kind: EventKind, message: impl Into<String>) {
        self.notifications.push(Notification {
            message: message.into(),
            kind,
            at: Utc::now(),
        });
        if self.notifications.len() > MAX_NOTIFICATIONS {
            let excess = self.notifications.len() - MAX_NOTIFICATIONS;
            self.notifications.drain(..excess);
        }
    }

    fn select_index(&mut self, index: usize) -> Effect {
        if index == self.active_track || index >= self.catalog.len() {
            return Effect::None;
        }
        self.active_track = index;
        Effect::RequestAnalysis(PromptTemplate::StrategicAlternatives)
    }
}

/// Apply `action` to `state`, returning any side effect the caller must run.
pub fn reduce(state: &mut DashboardState, action: Action) -> Effect {
    match action {
        Action::SelectTrack(id) => match state.catalog.position(&id) {
            Some(index) => state.select_index(index),
            None => {
                tracing::warn!(track = %id, "select of unknown track ignored");
                Effect::None
            }
        },

        Action::SelectNextTrack => {
            let len = state.catalog.len();
            if len == 0 {
                return Effect::None;
            }
            state.select_index((state.active_track + 1) % len)
        }

        Action::SelectPreviousTrack => {
            let len = state.catalog.len();
            if len == 0 {
                return Effect::None;
            }
            state.select_index((state.active_track + len - 1) % len)
        }

        Action::SwitchView(view) => {
            state.view = view;
            Effect::None
        }

        Action::QueryChanged(query) => {
            state.query = query;
            Effect::None
        }

        // Manual requests are ignored while one is in flight.
        Action::SubmitQuery => {
            if state.is_analyzing() || state.query.trim().is_empty() {
                return Effect::None;
            }
            Effect::RequestAnalysis(PromptTemplate::from_query(&state.query))
        }

        Action::ReEvaluate => {
            if state.is_analyzing() {
                return Effect::None;
            }
            Effect::RequestAnalysis(PromptTemplate::StrategicAlternatives)
        }

        Action::RequestMitigation => {
            if state.is_analyzing() {
                return Effect::None;
            }
            Effect::RequestAnalysis(PromptTemplate::MitigationPlan)
        }

        Action::AnalysisRequested(ticket) => {
            state.pending = Some(ticket);
            Effect::None
        }

        Action::AnalysisReady(analysis) => {
            if state.pending != Some(analysis.ticket) {
                tracing::debug!(
                    seq = analysis.ticket.seq(),
                    "dropping analysis for superseded request"
                );
                return Effect::None;
            }
            state.pending = None;

            match &analysis.outcome {
                AdvisorOutcome::Generated => {}
                AdvisorOutcome::Empty => {
                    state.notify(EventKind::Warning, "Advisor returned an empty analysis")
                }
                AdvisorOutcome::Failed { auth: true, .. } => state.notify(
                    EventKind::Warning,
                    "Strategic engine rejected the credentials; check GEMINI_API_KEY",
                ),
                AdvisorOutcome::Failed { .. } => {
                    state.notify(EventKind::Warning, "Strategic engine request failed")
                }
            }

            state.analysis = Some(analysis);
            Effect::None
        }

        Action::DismissNotification(index) => {
            if index < state.notifications.len() {
                state.notifications.remove(index);
            }
            Effect::None
        }
    }
}
