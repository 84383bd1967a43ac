//! This module implements functionality to list every cafe.

use http::StatusCode;

use super::{Cafe, CafeRepository, CafeService};
use crate::http::AsErrorResponse;

impl<R> CafeService<R>
where
	R: CafeRepository,
{
	/// Returns every cafe, in the order they were added.
	///
	/// An empty list is not an error.
	#[instrument(err(Debug, level = "debug"))]
	pub async fn get_cafes(&self) -> Result<Vec<Cafe>, GetCafesError>
	{
		let cafes = self.repository.find_all().await?;

		debug!(count = cafes.len(), "fetched cafes");

		Ok(cafes)
	}
}

with_database_error! {
	/// Errors that can occur when listing cafes.
	#[derive(Debug, Error)]
	pub enum GetCafesError {}
}

impl AsErrorResponse for GetCafesError
{
	fn status(&self) -> StatusCode
	{
		match self {
			Self::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
		}
	}
}

impl_into_response!(GetCafesError);
