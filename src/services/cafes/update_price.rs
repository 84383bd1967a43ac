//! This module implements functionality to update a cafe's coffee price.

use http::StatusCode;
use serde::Deserialize;

use super::{CafeID, CafeRepository, CafeService};
use crate::http::AsErrorResponse;

/// Request for updating a cafe's coffee price.
#[derive(Debug, Default, Deserialize)]
pub struct Request
{
	/// The new price.
	///
	/// If this is omitted, the price is cleared. An empty value is stored as-is.
	#[serde(default, deserialize_with = "crate::serde::deserialize_keep_empty")]
	pub new_price: Option<String>,
}

impl<R> CafeService<R>
where
	R: CafeRepository,
{
	/// Overwrites the coffee price of a cafe.
	///
	/// No other field is touched.
	#[instrument(err(Debug, level = "debug"))]
	pub async fn update_price(
		&self,
		cafe_id: CafeID,
		request: Request,
	) -> Result<(), UpdatePriceError>
	{
		if !self
			.repository
			.update_price(cafe_id, request.new_price.as_deref())
			.await?
		{
			return Err(UpdatePriceError::CafeNotFound);
		}

		info!(%cafe_id, new_price = ?request.new_price, "updated coffee price");

		Ok(())
	}
}

with_database_error! {
	/// Errors that can occur when updating a cafe's coffee price.
	#[derive(Debug, Error)]
	pub enum UpdatePriceError {
		#[error("Sorry, a cafe with that id was not found in the database")]
		CafeNotFound,
	}
}

impl AsErrorResponse for UpdatePriceError
{
	fn status(&self) -> StatusCode
	{
		match self {
			Self::CafeNotFound => StatusCode::NOT_FOUND,
			Self::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
		}
	}
}

impl_into_response!(UpdatePriceError);
