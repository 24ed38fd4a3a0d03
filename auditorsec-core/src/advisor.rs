//! Strategic advisor: prompt -> text-generation service -> formatted blocks.
//!
//! Every request carries a [`RequestTicket`] from a shared
//! [`RequestSequencer`]. Only the most recently issued ticket is current;
//! results for older tickets are discarded so a slow response can never
//! overwrite a newer one.

use crate::formatter::FormattedResponse;
use crate::prompt::{build_prompt, PromptTemplate};
use crate::tracks::TrackData;

use auditorsec_neural::privacy::PrivacyGuard;
use auditorsec_neural::{NeuralError, TextGenerator};
use chrono::{DateTime, Utc};

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

/// Shown while no analysis has been received yet.
pub const PLACEHOLDER: &str = "Initialize strategic engine to receive analysis";

/// Substituted when the service answers with no text.
pub const EMPTY_FALLBACK: &str = "Analysis unavailable at this time.";

/// Substituted when the request fails (transport or auth).
pub const FAILURE_FALLBACK: &str = "Critical failure in strategic engine. Please re-authenticate.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RequestTicket(u64);

impl RequestTicket {
    pub fn seq(&self) -> u64 {
        self.0
    }
}

/// Monotonic ticket counter shared by everything that issues requests.
#[derive(Debug, Default)]
pub struct RequestSequencer {
    latest: AtomicU64,
}

impl RequestSequencer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn issue(&self) -> RequestTicket {
        RequestTicket(self.latest.fetch_add(1, Ordering::SeqCst) + 1)
    }

    pub fn is_latest(&self, ticket: &RequestTicket) -> bool {
        self.latest.load(Ordering::SeqCst) == ticket.0
    }

    pub fn latest(&self) -> Option<RequestTicket> {
        match self.latest.load(Ordering::SeqCst) {
            0 => None,
            n => Some(RequestTicket(n)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AdvisorOutcome {
    Generated,
    /// The service answered, but with no text.
    Empty,
    /// The request failed; `reason` is for logs, not for display. `auth`
    /// marks a missing or rejected API key.
    Failed { reason: String, auth: bool },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Analysis {
    pub ticket: RequestTicket,
    pub track_id: String,
    pub template: PromptTemplate,
    pub outcome: AdvisorOutcome,
    /// Raw text as displayed (the fallback message when not `Generated`).
    pub text: String,
    pub response: FormattedResponse,
    pub received_at: DateTime<Utc>,
}

impl Analysis {
    pub fn is_fallback(&self) -> bool {
        self.outcome != AdvisorOutcome::Generated
    }
}

#[derive(Clone)]
pub struct StrategicAdvisor {
    backend: Arc<dyn TextGenerator>,
    sequencer: Arc<RequestSequencer>,
}

impl std::fmt::Debug for StrategicAdvisor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StrategicAdvisor")
            .field("model", &self.backend.model())
            .field("latest", &self.sequencer.latest())
            .finish()
    }
}

impl StrategicAdvisor {
    pub fn new(backend: Arc<dyn TextGenerator>) -> Self {
        Self {
            backend,
            sequencer: Arc::new(RequestSequencer::new()),
        }
    }

    pub fn model(&self) -> &str {
        self.backend.model()
    }

    pub fn issue(&self) -> RequestTicket {
        self.sequencer.issue()
    }

    pub fn is_latest(&self, ticket: &RequestTicket) -> bool {
        self.sequencer.is_latest(ticket)
    }

    /// Issue a fresh ticket and run the request to completion.
    pub async fn advise(&self, track: &TrackData, template: PromptTemplate) -> Analysis {
        let ticket = self.issue();
        self.run(ticket, track, template).await
    }

    /// Run one request under an already-issued ticket. Never fails: service
    /// errors turn into the fallback message.
    pub async fn run(
        &self,
        ticket: RequestTicket,
        track: &TrackData,
        template: PromptTemplate,
    ) -> Analysis {
        let template = match template {
            PromptTemplate::Custom(query) => {
                PromptTemplate::from_query(&PrivacyGuard::scrub(&query))
            }
            other => other,
        };
        let prompt = build_prompt(track, &template);

        tracing::info!(
            seq = ticket.seq(),
            track = %track.id,
            task = template.label(),
            model = self.backend.model(),
            "requesting analysis"
        );

        let (outcome, text) = match self.backend.generate(&prompt).await {
            Ok(text) if text.trim().is_empty() => {
                tracing::warn!(seq = ticket.seq(), "service returned empty analysis");
                (AdvisorOutcome::Empty, EMPTY_FALLBACK.to_string())
            }
            Ok(text) => (AdvisorOutcome::Generated, text),
            Err(e) => {
                let auth = e
                    .downcast_ref::<NeuralError>()
                    .is_some_and(NeuralError::is_auth);
                tracing::error!(seq = ticket.seq(), auth, "Strategic advice error: {:#}", e);
                (
                    AdvisorOutcome::Failed {
                        reason: format!("{:#}", e),
                        auth,
                    },
                    FAILURE_FALLBACK.to_string(),
                )
            }
        };

        Analysis {
            ticket,
            track_id: track.id.clone(),
            template,
            outcome,
            response: FormattedResponse::from_raw(&text),
            text,
            received_at: Utc::now(),
        }
    }

    /// Keep the analysis only if no newer request has been issued since.
    pub fn accept(&self, analysis: Analysis) -> Option<Analysis> {
        if self.is_latest(&analysis.ticket) {
            Some(analysis)
        } else {
            tracing::debug!(
                seq = analysis.ticket.seq(),
                "discarding stale analysis"
            );
            None
        }
    }

    /// Spawn the request on the runtime and deliver the result on `tx`.
    pub fn dispatch(
        &self,
        ticket: RequestTicket,
        track: TrackData,
        template: PromptTemplate,
        tx: mpsc::Sender<Analysis>,
    ) -> JoinHandle<()> {
        let advisor = self.clone();
        tokio::spawn(async move {
            let analysis = advisor.run(ticket, &track, template).await;
            // Receiver gone means the UI is shutting down.
            let _ = tx.send(analysis).await;
        })
    }
}
