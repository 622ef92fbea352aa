//! Per-page data controllers: each owns its slice of fetch state (items,
//! loading flag, error message) and re-fetches when its query changes.

mod dashboard;
mod lead_detail;
mod leads;
mod sources;

pub use dashboard::{use_dashboard, DashboardState};
pub use lead_detail::{use_lead_detail, LeadDetailState};
pub use leads::{use_leads, LeadsState};
pub use sources::{use_sources, SourcesState};
