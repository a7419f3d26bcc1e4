//! The fallback page for routes that do not exist.

use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};

use crate::html::error_view;

/// Display the 404 not found page.
pub async fn get_404_not_found() -> Response {
    get_404_not_found_response()
}

/// Get a response containing the rendered 404 not found page.
pub fn get_404_not_found_response() -> Response {
    (
        StatusCode::NOT_FOUND,
        Html(
            error_view(
                "Página não encontrada",
                "404",
                "Essa página não existe.",
                "Confira o endereço ou volte ao painel.",
            )
            .into_string(),
        ),
    )
        .into_response()
}

#[cfg(test)]
mod not_found_tests {
    use axum::http::StatusCode;

    use super::get_404_not_found;

    #[tokio::test]
    async fn returns_not_found_status() {
        let response = get_404_not_found().await;

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
