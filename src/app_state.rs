//! Implements a struct that holds the state of the web server.

use crate::api::DashboardApi;

/// The state of the web server.
///
/// Generic over the backend client so tests can swap in a canned or failing
/// [DashboardApi] implementation.
#[derive(Debug, Clone)]
pub struct AppState<A>
where
    A: DashboardApi + Send + Sync,
{
    /// The client for the backend that owns the transaction data.
    pub api: A,
}

impl<A> AppState<A>
where
    A: DashboardApi + Send + Sync,
{
    /// Create a new [AppState].
    pub fn new(api: A) -> Self {
        Self { api }
    }
}
