//! This module implements functionality to get a random cafe.

use http::StatusCode;
use rand::Rng;

use super::{Cafe, CafeRepository, CafeService};
use crate::http::AsErrorResponse;

impl<R> CafeService<R>
where
	R: CafeRepository,
{
	/// Picks a cafe uniformly at random.
	#[instrument(err(Debug, level = "debug"))]
	pub async fn get_random_cafe(&self) -> Result<Cafe, GetRandomCafeError>
	{
		let mut cafes = self.repository.find_all().await?;

		if cafes.is_empty() {
			return Err(GetRandomCafeError::NoCafes);
		}

		let index = rand::rng().random_range(0..cafes.len());

		Ok(cafes.swap_remove(index))
	}
}

with_database_error! {
	/// Errors that can occur when getting a random cafe.
	#[derive(Debug, Error)]
	pub enum GetRandomCafeError {
		#[error("Sorry, we don't have any cafes yet")]
		NoCafes,
	}
}

impl AsErrorResponse for GetRandomCafeError
{
	fn status(&self) -> StatusCode
	{
		match self {
			Self::NoCafes => StatusCode::NOT_FOUND,
			Self::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
		}
	}
}

impl_into_response!(GetRandomCafeError);
