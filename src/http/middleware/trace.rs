//! Request tracing.

use std::net::SocketAddr;
use std::time::Duration;

use axum::extract::ConnectInfo;
use tower_http::classify::ServerErrorsFailureClass;
use tower_http::request_id::RequestId;
use tower_http::trace::{
	DefaultOnBodyChunk,
	DefaultOnEos,
	HttpMakeClassifier,
	MakeSpan,
	OnFailure,
	OnRequest,
	OnResponse,
	TraceLayer,
};
use tracing::field;

/// Creates a layer, which produces a middleware that will emit tracing spans & events
/// for every HTTP request.
///
/// The `include_headers` parameter can be used to control whether request/response headers should
/// be included in the traces.
pub(crate) fn layer<B>(
	include_headers: bool,
) -> TraceLayer<
	HttpMakeClassifier,
	impl MakeSpan<B> + Clone,
	impl OnRequest<B> + Clone,
	impl OnResponse<B> + Clone,
	DefaultOnBodyChunk,
	DefaultOnEos,
	impl OnFailure<ServerErrorsFailureClass> + Clone,
>
{
	let on_request = move |request: &http::Request<B>, span: &tracing::Span| {
		on_request(request, span, include_headers);
	};

	let on_response = move |response: &http::Response<B>, latency: Duration, span: &tracing::Span| {
		on_response(response, latency, span, include_headers);
	};

	TraceLayer::new_for_http()
		.make_span_with(make_span)
		.on_request(on_request)
		.on_response(on_response)
		.on_failure(on_failure)
}

/// Creates each request span.
///
/// The request ID is injected by the `SetRequestIdLayer` running before this
/// middleware, and the client address by
/// `Router::into_make_service_with_connect_info()`. Either may be missing (e.g.
/// in tests), in which case the field is left empty.
fn make_span<B>(request: &http::Request<B>) -> tracing::Span
{
	let span = info_span! {
		target: "cafe_api::http",
		"request",
		request.id = field::Empty,
		request.client_addr = field::Empty,
		request.method = field::Empty,
		request.uri = field::Empty,
		request.headers = field::Empty,
		response.status = field::Empty,
		response.headers = field::Empty,
		latency = field::Empty,
	};

	if let Some(request_id) = request
		.extensions()
		.get::<RequestId>()
		.and_then(|request_id| request_id.header_value().to_str().ok())
	{
		span.record("request.id", request_id);
	}

	if let Some(&ConnectInfo(client_addr)) = request.extensions().get::<ConnectInfo<SocketAddr>>() {
		span.record("request.client_addr", field::display(client_addr));
	}

	span
}

/// Records metadata about the request.
///
/// Only the path of the URI is recorded, as query strings may carry secrets.
fn on_request<B>(request: &http::Request<B>, span: &tracing::Span, include_headers: bool)
{
	span.record("request.method", field::display(request.method()));
	span.record("request.uri", field::display(request.uri().path()));

	if include_headers {
		span.record("request.headers", field::debug(request.headers()));
	}

	debug!(target: "cafe_api::http", "starting to process request");
}

/// Records metadata about the response.
fn on_response<B>(
	response: &http::Response<B>,
	latency: Duration,
	span: &tracing::Span,
	include_headers: bool,
)
{
	span.record("response.status", field::display(response.status()));

	if include_headers {
		span.record("response.headers", field::debug(response.headers()));
	}

	span.record("latency", field::debug(latency));

	info!(
		target: "cafe_api::http",
		status = response.status().as_u16(),
		?latency,
		"finished processing request",
	);
}

/// Called whenever a request "failed".
///
/// What qualifies as a "failure" is determined by `ServerErrorsFailureClass`, which in practice
/// means a `5xx` status code.
fn on_failure(failure_class: ServerErrorsFailureClass, latency: Duration, span: &tracing::Span)
{
	span.in_scope(|| match failure_class {
		ServerErrorsFailureClass::StatusCode(status) => {
			error!(%status, ?latency, "http handler failed");
		},
		ServerErrorsFailureClass::Error(error) => {
			error!(%error, ?latency, "http handler failed");
		},
	});
}
