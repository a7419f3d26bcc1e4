//! Dashboard module
//!
//! Provides the single page of this app: three balance summary cards and a
//! transaction table, loaded from the backend API once per request.

mod cards;
mod handlers;
mod icons;
mod state;
mod table;

pub use handlers::{DashboardState, get_dashboard_page};
pub use state::LoadState;
