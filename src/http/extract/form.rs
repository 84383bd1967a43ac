//! The [`Form`] [extractor] and related types.
//!
//! Only `application/x-www-form-urlencoded` bodies are supported.
//!
//! [extractor]: axum::extract

use axum::extract::FromRequest;
use http::StatusCode;

use crate::http::AsErrorResponse;

mod base {
	pub(crate) use axum_extra::extract::{Form as Extractor, FormRejection as Rejection};
}

/// An extractor for URL-encoded form bodies.
///
/// See [`axum_extra::extract::Form`] for more details.
#[derive(Debug, FromRequest)]
#[from_request(via(base::Extractor), rejection(FormRejection))]
pub(crate) struct Form<T>(pub T);

/// Rejection for the [`Form`] extractor.
#[derive(Debug, Error)]
#[error(transparent)]
pub(crate) struct FormRejection(#[from] base::Rejection);

impl AsErrorResponse for FormRejection
{
	fn status(&self) -> StatusCode
	{
		StatusCode::BAD_REQUEST
	}
}

impl_into_response!(FormRejection);
