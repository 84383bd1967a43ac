//! JSON error responses.
//!
//! Every error the API returns has the shape `{"error": ...}`. Most errors
//! nest their message under the canonical reason phrase of their status code,
//! e.g. `{"error": {"Not Found": "..."}}`; some ("untitled" errors) put the
//! message there directly.

use std::error::Error as StdError;

use axum::Json;
use axum::response::{IntoResponse, Response};
use http::StatusCode;
use serde_json::{Map, Value};

/// An error that can be turned into an [`ErrorResponse`].
pub(crate) trait AsErrorResponse: StdError + Sized + 'static
{
	/// The status code of the response.
	fn status(&self) -> StatusCode;

	/// Whether the message should be nested under the status' reason phrase.
	fn titled(&self) -> bool
	{
		true
	}

	/// Creates the response.
	///
	/// Server errors are logged here, as their message is not very helpful
	/// to anyone reading the response.
	fn as_error_response(&self) -> ErrorResponse
	{
		let status = self.status();

		if status.is_server_error() {
			error!(error = self as &dyn StdError, source = ?self.source(), "failed to handle request");
		} else {
			debug!(error = self as &dyn StdError, %status, "rejecting request");
		}

		ErrorResponse::new(status, self.to_string(), self.titled())
	}
}

/// An HTTP response with a JSON error body.
#[derive(Debug)]
pub(crate) struct ErrorResponse
{
	status: StatusCode,
	body: Value,
}

impl ErrorResponse
{
	pub(crate) fn new(status: StatusCode, message: impl Into<String>, titled: bool) -> Self
	{
		let message = Value::String(message.into());
		let error = if titled {
			let title = status.canonical_reason().unwrap_or("Error");
			Value::Object(Map::from_iter([(title.to_owned(), message)]))
		} else {
			message
		};

		Self { status, body: Value::Object(Map::from_iter([("error".to_owned(), error)])) }
	}

	/// A `404 Not Found` response with the given message.
	pub(crate) fn not_found(message: impl Into<String>) -> Self
	{
		Self::new(StatusCode::NOT_FOUND, message, true)
	}

	/// The `500 Internal Server Error` response.
	pub(crate) fn internal() -> Self
	{
		Self::new(
			StatusCode::INTERNAL_SERVER_ERROR,
			"something went wrong; please report this incident",
			true,
		)
	}
}

impl IntoResponse for ErrorResponse
{
	fn into_response(self) -> Response
	{
		(self.status, Json(self.body)).into_response()
	}
}

#[cfg(test)]
mod tests
{
	use http::StatusCode;
	use serde_json::json;

	use super::ErrorResponse;

	#[test]
	fn titled_errors_are_nested_under_reason_phrase()
	{
		let response = ErrorResponse::not_found("Sorry, we don't have any cafes yet");

		assert_eq!(response.status, StatusCode::NOT_FOUND);
		assert_eq!(
			response.body,
			json!({ "error": { "Not Found": "Sorry, we don't have any cafes yet" } }),
		);
	}

	#[test]
	fn untitled_errors_are_flat()
	{
		let response = ErrorResponse::new(StatusCode::FORBIDDEN, "nope", false);

		assert_eq!(response.body, json!({ "error": "nope" }));
	}
}
