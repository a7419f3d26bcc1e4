//! Dashboard HTTP handler and page rendering.
//!
//! The handler is the load boundary: every failure from the transport or
//! the view-model build is resolved into a [LoadState] here, so no error
//! escapes as an unhandled rejection. All view state is request-scoped and
//! owned by the handler, which cannot outlive its response, so there is no
//! late-resumption hazard to guard against.

use axum::{
    extract::{FromRef, State},
    response::{IntoResponse, Response},
};
use maud::{Markup, html};

use crate::{
    AppState,
    api::DashboardApi,
    html::{PAGE_CONTAINER_STYLE, base},
    navigation::PageHeader,
};

use super::{
    cards::summary_cards,
    state::LoadState,
    table::{empty_state_view, load_failed_view, transactions_table},
};

/// The state needed for displaying the dashboard page.
#[derive(Debug, Clone)]
pub struct DashboardState<A>
where
    A: DashboardApi + Send + Sync,
{
    /// The client for the backend that owns the transaction data.
    pub api: A,
}

impl<A> FromRef<AppState<A>> for DashboardState<A>
where
    A: DashboardApi + Clone + Send + Sync,
{
    fn from_ref(state: &AppState<A>) -> Self {
        Self {
            api: state.api.clone(),
        }
    }
}

/// Display the dashboard: balance summary cards and the transaction table.
///
/// Performs exactly one fetch against the backend per request and renders
/// whichever view the resulting [LoadState] calls for.
pub async fn get_dashboard_page<A>(State(state): State<DashboardState<A>>) -> Response
where
    A: DashboardApi + Send + Sync,
{
    let outcome = state.api.fetch_dashboard_data().await;
    let load_state = LoadState::default().resolve(outcome);

    dashboard_view(&load_state).into_response()
}

/// Renders the full dashboard page for a given view state.
///
/// The header and the three summary cards render in every state; the region
/// below them is the table, the empty-state message, or the failure notice.
fn dashboard_view(load_state: &LoadState) -> Markup {
    let header = PageHeader.into_html();
    let cards = summary_cards(load_state.view_model().map(|view_model| &view_model.balance));

    let content = html!(
        (header)

        div class={(PAGE_CONTAINER_STYLE) " max-w-screen-xl"} {
            (cards)

            @match load_state {
                LoadState::Loaded(view_model) if !view_model.transactions.is_empty() => {
                    (transactions_table(&view_model.transactions))
                }
                LoadState::Loaded(_) | LoadState::Empty => {
                    (empty_state_view())
                }
                LoadState::Failed => {
                    (load_failed_view())
                }
            }
        }
    );

    base("Dashboard", &content)
}
