//! A middleware to catch panics and turn them into responses.
//!
//! See [`tower_http::catch_panic`] for more details.

use std::any::Any;

use axum::response::IntoResponse;
use tower_http::catch_panic::{CatchPanicLayer, ResponseForPanic};

use crate::http::ErrorResponse;

/// Creates a layer, which produces a middleware that will catch panics in its inner
/// service and turn them into `500 Internal Server Error` responses.
pub(crate) fn layer() -> CatchPanicLayer<PanicHandler>
{
	CatchPanicLayer::custom(PanicHandler)
}

#[derive(Debug, Clone, Copy)]
pub(crate) struct PanicHandler;

impl ResponseForPanic for PanicHandler
{
	type ResponseBody = axum::body::Body;

	fn response_for_panic(
		&mut self,
		error: Box<dyn Any + Send + 'static>,
	) -> http::Response<Self::ResponseBody>
	{
		let panic_message = error
			.downcast_ref::<String>()
			.map(String::as_str)
			.or_else(|| error.downcast_ref::<&str>().copied());

		error!(?panic_message, "http handler panicked");

		ErrorResponse::internal().into_response()
	}
}
