//! Message enum fed into [`crate::update::update`].

use auditorsec_core::advisor::Analysis;
use crossterm::event::KeyEvent;

#[derive(Debug, Clone)]
pub enum Message {
    Key(KeyEvent),
    /// A request finished; may be stale.
    AnalysisReady(Analysis),
    /// Spinner / relative-time refresh.
    Tick,
    Resize(u16, u16),
}
