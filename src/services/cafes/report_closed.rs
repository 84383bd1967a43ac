//! This module implements functionality to delete cafes that have closed down.

use http::StatusCode;
use serde::Deserialize;

use super::{CafeID, CafeRepository, CafeService};
use crate::auth::Forbidden;
use crate::http::AsErrorResponse;

/// Request for reporting a cafe as closed.
#[derive(Debug, Default, Deserialize)]
pub struct Request
{
	/// The key authorizing the deletion.
	#[serde(default, rename = "api-key")]
	pub api_key: Option<String>,
}

impl<R> CafeService<R>
where
	R: CafeRepository,
{
	/// Deletes a cafe.
	///
	/// The caller is authorized before we check whether the cafe exists, so
	/// unauthorized callers cannot find out which IDs exist.
	#[instrument(skip(request), err(Debug, level = "debug"))]
	pub async fn report_closed(
		&self,
		cafe_id: CafeID,
		request: Request,
	) -> Result<(), ReportClosedError>
	{
		self.authorization.authorize(request.api_key.as_deref())?;

		if !self.repository.delete(cafe_id).await? {
			return Err(ReportClosedError::CafeNotFound);
		}

		info!(%cafe_id, "deleted cafe");

		Ok(())
	}
}

with_database_error! {
	/// Errors that can occur when reporting a cafe as closed.
	#[derive(Debug, Error)]
	pub enum ReportClosedError {
		#[error(transparent)]
		Forbidden(#[from] Forbidden),

		#[error("Sorry, a cafe with that id was not found in the database")]
		CafeNotFound,
	}
}

impl AsErrorResponse for ReportClosedError
{
	fn status(&self) -> StatusCode
	{
		match self {
			Self::Forbidden(error) => error.status(),
			Self::CafeNotFound => StatusCode::NOT_FOUND,
			Self::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
		}
	}

	fn titled(&self) -> bool
	{
		match self {
			Self::Forbidden(error) => error.titled(),
			Self::CafeNotFound | Self::Database(_) => true,
		}
	}
}

impl_into_response!(ReportClosedError);
