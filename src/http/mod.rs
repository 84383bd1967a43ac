//! The HTTP surface of the API.

use axum::response::Html;
use axum::{Router, routing};

use crate::config::TracingConfig;
use crate::services::CafeService;

mod error;
pub(crate) use error::{AsErrorResponse, ErrorResponse};

pub(crate) mod extract;
pub(crate) mod middleware;

/// The static landing page served at `/`.
static LANDING_PAGE: &str = include_str!("landing_page.html");

/// Returns the top-level router.
///
/// This is what we pass to [`axum::serve()`].
pub(crate) fn router(cafe_service: CafeService, tracing_config: &TracingConfig) -> Router
{
	Router::new()
		.route("/", routing::get(landing_page))
		.nest("/api/V1/cafes", crate::services::cafes::http::router(cafe_service))
		.fallback(fallback)
		.layer(middleware::catch_panic::layer())
		.layer(middleware::trace::layer(tracing_config.include_http_headers))
		.layer(middleware::request_id::propagate_layer())
		.layer(middleware::request_id::set_layer())
}

async fn landing_page() -> Html<&'static str>
{
	Html(LANDING_PAGE)
}

async fn fallback() -> ErrorResponse
{
	ErrorResponse::not_found("there is nothing here")
}
