//! The [`Query`] [extractor] and related types.
//!
//! [extractor]: axum::extract

use axum::extract::FromRequestParts;
use http::StatusCode;

use crate::http::AsErrorResponse;

mod base {
	pub(crate) use axum_extra::extract::{Query as Extractor, QueryRejection as Rejection};
}

/// An extractor for URI query parameters.
///
/// See [`axum_extra::extract::Query`] for more details.
#[derive(Debug, FromRequestParts)]
#[from_request(via(base::Extractor), rejection(QueryRejection))]
pub(crate) struct Query<T>(pub T);

/// Rejection for the [`Query`] extractor.
#[derive(Debug, Error)]
#[error(transparent)]
pub(crate) struct QueryRejection(#[from] base::Rejection);

impl AsErrorResponse for QueryRejection
{
	fn status(&self) -> StatusCode
	{
		StatusCode::BAD_REQUEST
	}
}

impl_into_response!(QueryRejection);
