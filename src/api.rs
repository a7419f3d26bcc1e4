//! The transport client for the backend API.
//!
//! The dashboard's data lives behind a separate backend service. This module
//! defines the seam the rest of the app talks through ([DashboardApi]) and
//! the production HTTP implementation ([HttpDashboardApi]), which issues a
//! single GET request and parses the JSON body into typed records.
//!
//! There is deliberately no retry, backoff or partial-result policy: a
//! failure propagates to the load boundary, which resolves it into the
//! failed view state.

use async_trait::async_trait;
use serde::Deserialize;

use crate::{Error, balance::Balance, transaction::Transaction};

/// The backend route serving the dashboard payload, relative to the base URL.
const TRANSACTIONS_PATH: &str = "/transactions";

/// The full dashboard payload: every transaction plus the aggregate balance.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DashboardData {
    /// Transactions in the order the backend returns them.
    pub transactions: Vec<Transaction>,
    /// The aggregate balance over all transactions.
    pub balance: Balance,
}

/// Fetches the dashboard payload from the backend.
///
/// Handlers depend on this trait rather than on a concrete client so tests
/// can substitute a canned or failing backend.
#[async_trait]
pub trait DashboardApi {
    /// Fetch the transaction list and aggregate balance.
    ///
    /// # Errors
    /// Returns [Error::ApiRequest] if the request could not be sent,
    /// [Error::ApiStatus] on a non-2xx response, and
    /// [Error::MalformedResponse] if the body does not match the expected
    /// record shapes.
    async fn fetch_dashboard_data(&self) -> Result<DashboardData, Error>;
}

/// The production [DashboardApi]: a thin HTTP client over the backend.
#[derive(Debug, Clone)]
pub struct HttpDashboardApi {
    client: reqwest::Client,
    base_url: String,
}

impl HttpDashboardApi {
    /// Creates a client against `base_url`, e.g. `http://localhost:3333`.
    pub fn new(base_url: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_owned(),
        }
    }
}

#[async_trait]
impl DashboardApi for HttpDashboardApi {
    async fn fetch_dashboard_data(&self) -> Result<DashboardData, Error> {
        let url = format!("{}{}", self.base_url, TRANSACTIONS_PATH);

        let response = self.client.get(&url).send().await?.error_for_status()?;
        let data = response.json().await?;

        Ok(data)
    }
}
