//! The [`Path`] [extractor] and related types.
//!
//! [extractor]: axum::extract

use axum::extract::FromRequestParts;
use http::StatusCode;

use crate::http::AsErrorResponse;

mod base {
	pub(crate) use axum::extract::Path as Extractor;
	pub(crate) use axum::extract::rejection::PathRejection as Rejection;
}

/// An extractor for URI path parameters.
///
/// See [`axum::extract::Path`] for more details.
#[derive(Debug, FromRequestParts)]
#[from_request(via(base::Extractor), rejection(PathRejection))]
pub(crate) struct Path<T>(pub T);

/// Rejection for the [`Path`] extractor.
#[derive(Debug, Error)]
#[error(transparent)]
pub(crate) struct PathRejection(#[from] base::Rejection);

impl AsErrorResponse for PathRejection
{
	fn status(&self) -> StatusCode
	{
		match self.0 {
			// The route and the handler disagree about the parameters.
			base::Rejection::MissingPathParams(_) => StatusCode::INTERNAL_SERVER_ERROR,

			_ => StatusCode::BAD_REQUEST,
		}
	}
}

impl_into_response!(PathRejection);
