//! Application struct + terminal event loop.

use crate::config::Config;
use crate::keyboard::InputMode;
use crate::messages::Message;
use crate::ui;
use crate::update::update;

use auditorsec_core::advisor::{Analysis, StrategicAdvisor};
use auditorsec_core::feed::{
    integrations, recent_events, EcosystemEvent, Integration, RevenueSeries,
};
use auditorsec_core::state::{reduce, Action, DashboardState, Effect};
use auditorsec_core::tracks::TrackCatalog;
use auditorsec_neural::GeminiClient;

use anyhow::Result;
use crossterm::event::{Event, EventStream, KeyEventKind};
use futures::StreamExt;
use ratatui::DefaultTerminal;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;

pub const SPINNER: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

const TICK_RATE: Duration = Duration::from_millis(120);

pub struct App {
    pub state: DashboardState,
    pub advisor: StrategicAdvisor,
    pub mode: InputMode,
    /// Lines scrolled in the advisor panel.
    pub advisor_scroll: u16,
    pub spinner_frame: usize,
    pub should_quit: bool,
    pub revenue: RevenueSeries,
    pub events: Vec<EcosystemEvent>,
    pub integrations: Vec<Integration>,
    tx: mpsc::Sender<Analysis>,
}

impl App {
    /// Build the app and fire the initial analysis request.
    pub fn boot(
        catalog: TrackCatalog,
        advisor: StrategicAdvisor,
        tx: mpsc::Sender<Analysis>,
    ) -> Self {
        let (state, effect) = DashboardState::boot(catalog);
        let mut app = Self {
            state,
            advisor,
            mode: InputMode::default(),
            advisor_scroll: 0,
            spinner_frame: 0,
            should_quit: false,
            revenue: RevenueSeries::seeded(),
            events: recent_events(),
            integrations: integrations(),
            tx,
        };
        app.run_effect(effect);
        app
    }

    /// Feed an action through the reducer and run whatever it asks for.
    pub fn dispatch(&mut self, action: Action) {
        let effect = reduce(&mut self.state, action);
        self.run_effect(effect);
    }

    pub fn run_effect(&mut self, effect: Effect) {
        let Effect::RequestAnalysis(template) = effect else {
            return;
        };
        let Some(track) = self.state.active_track().cloned() else {
            return;
        };

        let ticket = self.advisor.issue();
        reduce(&mut self.state, Action::AnalysisRequested(ticket));
        self.advisor_scroll = 0;
        self.advisor.dispatch(ticket, track, template, self.tx.clone());
    }

    pub fn spinner(&self) -> &'static str {
        SPINNER[self.spinner_frame % SPINNER.len()]
    }
}

/// Open the dashboard and block until the user quits.
pub async fn run_dashboard(config: &Config) -> Result<()> {
    let client = GeminiClient::new(&config.base_url, &config.model, config.api_key.clone());
    if !client.has_api_key() {
        tracing::warn!("no API key configured; advisor requests will fail");
    }
    let advisor = StrategicAdvisor::new(Arc::new(client));

    let (tx, mut rx) = mpsc::channel(16);
    let mut app = App::boot(TrackCatalog::seeded(), advisor, tx);

    let mut terminal = ratatui::init();
    let result = event_loop(&mut terminal, &mut app, &mut rx).await;
    ratatui::restore();

    tracing::info!("dashboard closed");
    result
}

async fn event_loop(
    terminal: &mut DefaultTerminal,
    app: &mut App,
    rx: &mut mpsc::Receiver<Analysis>,
) -> Result<()> {
    let mut events = EventStream::new();
    let mut ticker = tokio::time::interval(TICK_RATE);

    while !app.should_quit {
        terminal.draw(|frame| ui::draw(frame, app))?;

        let message = tokio::select! {
            maybe_event = events.next() => match maybe_event {
                Some(Ok(Event::Key(key))) if key.kind == KeyEventKind::Press => Message::Key(key),
                Some(Ok(Event::Resize(cols, rows))) => Message::Resize(cols, rows),
                Some(Ok(_)) => continue,
                Some(Err(e)) => return Err(e.into()),
                None => break,
            },
            Some(analysis) = rx.recv() => Message::AnalysisReady(analysis),
            _ = ticker.tick() => Message::Tick,
        };

        update(app, message);
    }

    Ok(())
}
