use aide::axum::IntoApiResponse;
use axum::response::{Html, IntoResponse};

/// The bid form. It drives the `/lots` and `/bids` endpoints.
const FORM: &str = include_str!("form.html");

/// Serve the bid form.
pub(crate) async fn serve_form() -> impl IntoApiResponse {
    Html(FORM).into_response()
}
