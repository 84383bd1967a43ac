//! This module implements functionality to search cafes by location.

use http::StatusCode;
use serde::Deserialize;

use super::{Cafe, CafeRepository, CafeService};
use crate::http::AsErrorResponse;

/// Request for searching cafes.
#[derive(Debug, Default, Deserialize)]
pub struct Request
{
	/// A substring of the location to search for.
	#[serde(default)]
	pub loc: Option<String>,
}

impl<R> CafeService<R>
where
	R: CafeRepository,
{
	/// Returns every cafe whose location contains `request.loc`.
	///
	/// Finding nothing is an error, and so is not searching for anything.
	#[instrument(err(Debug, level = "debug"))]
	pub async fn search_cafes(&self, request: Request) -> Result<Vec<Cafe>, SearchCafesError>
	{
		let Some(location) = request.loc.filter(|location| !location.is_empty()) else {
			return Err(SearchCafesError::NoMatches);
		};

		let cafes = self.repository.find_by_location_substring(&location).await?;

		if cafes.is_empty() {
			return Err(SearchCafesError::NoMatches);
		}

		Ok(cafes)
	}
}

with_database_error! {
	/// Errors that can occur when searching cafes.
	#[derive(Debug, Error)]
	pub enum SearchCafesError {
		#[error("Sorry, we don't have a cafe at that location")]
		NoMatches,
	}
}

impl AsErrorResponse for SearchCafesError
{
	fn status(&self) -> StatusCode
	{
		match self {
			Self::NoMatches => StatusCode::NOT_FOUND,
			Self::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
		}
	}
}

impl_into_response!(SearchCafesError);
