//! ratatui views.
//!
//! ```text
//! ┌ sidebar ┐┌ view (overview / vault / health) ┐
//! │ tracks  ││                                   │
//! │ ops     │├ advisor ──────────────────────────┤
//! │ status  ││                                   │
//! └─────────┘└───────────────────────────────────┘
//!  query bar / key hints
//! ```

pub mod advisor;
pub mod health;
pub mod inputbar;
pub mod overview;
pub mod sidebar;
pub mod theme;
pub mod vault;

use crate::app::App;

use auditorsec_core::state::View;
use ratatui::layout::{Constraint, Layout};
use ratatui::Frame;

pub const SIDEBAR_WIDTH: u16 = 28;

pub fn draw(frame: &mut Frame, app: &App) {
    let [body, footer] =
        Layout::vertical([Constraint::Min(0), Constraint::Length(3)]).areas(frame.area());
    let [side, main] =
        Layout::horizontal([Constraint::Length(SIDEBAR_WIDTH), Constraint::Min(0)]).areas(body);

    sidebar::render(frame, side, app);

    match app.state.view {
        View::Overview => {
            let [top, bottom] =
                Layout::vertical([Constraint::Percentage(55), Constraint::Percentage(45)])
                    .areas(main);
            overview::render(frame, top, app);
            advisor::render(frame, bottom, app);
        }
        View::ComplianceVault => vault::render(frame, main, app),
        View::SystemHealth => health::render(frame, main, app),
    }

    inputbar::render(frame, footer, app);
}
