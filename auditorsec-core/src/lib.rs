pub mod advisor;
pub mod feed;
pub mod formatter;
pub mod prompt;
pub mod state;
pub mod tracks;

// Re-export the main entry points so users can just use `auditorsec_core::format`
pub use advisor::{Analysis, RequestTicket, StrategicAdvisor};
pub use formatter::{format, DisplayBlock, FormattedResponse};
pub use prompt::{build_prompt, PromptTemplate};
pub use state::{reduce, Action, DashboardState, Effect};
pub use tracks::{TrackCatalog, TrackData, TrackType};
