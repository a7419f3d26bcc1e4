//! GoFinances is a web app that displays your transactions and account
//! balance in a dashboard.
//!
//! This library serves HTML pages directly, fetching the underlying data
//! from a separate backend API on each request.

#![warn(missing_docs)]

use std::{net::SocketAddr, time::Duration};

use axum::response::{IntoResponse, Response};
use axum_server::Handle;
use tokio::signal;

mod api;
mod app_state;
mod balance;
mod dashboard;
mod endpoints;
mod format;
mod html;
mod internal_server_error;
mod logging;
mod navigation;
mod not_found;
mod routing;
mod transaction;
mod view_model;

pub use api::{DashboardApi, DashboardData, HttpDashboardApi};
pub use app_state::AppState;
pub use logging::logging_middleware;
pub use routing::build_router;

use crate::internal_server_error::InternalServerError;

/// An async task that waits for either the ctrl+c or terminate signal, whichever comes first, and
/// then signals the server to shut down gracefully.
///
/// `handle` is a handle to an Axum `Server`.
pub async fn graceful_shutdown(handle: Handle<SocketAddr>) {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::debug!("Received ctrl+c signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
        _ = terminate => {
            tracing::debug!("Received terminate signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
    }
}

/// The errors that may occur in the application.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// The request to the backend API could not be sent or completed.
    ///
    /// Covers connection refusals, DNS failures and timeouts. The string is
    /// the underlying transport error, intended for the server logs.
    #[error("could not reach the backend API: {0}")]
    ApiRequest(String),

    /// The backend API answered with a non-success status code.
    #[error("the backend API responded with status {0}")]
    ApiStatus(u16),

    /// The backend API answered with a body that does not match the expected
    /// transaction and balance records.
    #[error("could not parse the backend API response: {0}")]
    MalformedResponse(String),

    /// An amount in the backend payload was NaN or infinite.
    ///
    /// Such values cannot be formatted as currency, so the whole payload is
    /// rejected rather than rendering a partial dashboard.
    #[error("{0} is not a finite amount")]
    NonFiniteAmount(f64),
}

impl From<reqwest::Error> for Error {
    fn from(value: reqwest::Error) -> Self {
        if let Some(status) = value.status() {
            Error::ApiStatus(status.as_u16())
        } else if value.is_decode() {
            Error::MalformedResponse(value.to_string())
        } else {
            Error::ApiRequest(value.to_string())
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        tracing::error!("An unexpected error occurred: {}", self);
        InternalServerError::default().into_response()
    }
}
