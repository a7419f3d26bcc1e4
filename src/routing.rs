//! Application router configuration.

use axum::{
    Router, middleware,
    response::Redirect,
    routing::get,
};
use tower_http::services::ServeDir;

use crate::{
    AppState,
    api::DashboardApi,
    dashboard::get_dashboard_page,
    endpoints,
    logging::logging_middleware,
    not_found::get_404_not_found,
};

/// Return a router with all the app's routes.
pub fn build_router<A>(state: AppState<A>) -> Router
where
    A: DashboardApi + Clone + Send + Sync + 'static,
{
    Router::new()
        .route(endpoints::ROOT, get(get_index_page))
        .route(endpoints::DASHBOARD_VIEW, get(get_dashboard_page::<A>))
        .nest_service(endpoints::STATIC, ServeDir::new("static/"))
        .fallback(get_404_not_found)
        .layer(middleware::from_fn(logging_middleware))
        .with_state(state)
}

/// The root path '/' redirects to the dashboard page.
async fn get_index_page() -> Redirect {
    Redirect::to(endpoints::DASHBOARD_VIEW)
}
