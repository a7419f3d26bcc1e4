//! The page to display when a request fails inside the server.

use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};

use crate::html::error_view;

/// The internal server error page, with an explanation of what went wrong and
/// what the user can do about it.
pub struct InternalServerError<'a> {
    /// A short description of what went wrong.
    pub description: &'a str,
    /// What the user can do to fix or work around the error.
    pub fix: &'a str,
}

impl Default for InternalServerError<'_> {
    fn default() -> Self {
        Self {
            description: "Desculpe, algo deu errado.",
            fix: "Tente novamente mais tarde ou verifique os logs do servidor.",
        }
    }
}

impl InternalServerError<'_> {
    /// Render the page to HTML.
    pub fn into_html(self) -> Html<String> {
        Html(error_view("Erro interno", "500", self.description, self.fix).into_string())
    }
}

impl IntoResponse for InternalServerError<'_> {
    fn into_response(self) -> Response {
        (StatusCode::INTERNAL_SERVER_ERROR, self.into_html()).into_response()
    }
}

#[cfg(test)]
mod internal_server_error_tests {
    use axum::{http::StatusCode, response::IntoResponse};

    use super::InternalServerError;

    #[tokio::test]
    async fn returns_internal_server_error_status() {
        let response = InternalServerError::default().into_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
