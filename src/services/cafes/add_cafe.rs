//! This module implements functionality to add new cafes.

use http::StatusCode;
use serde::Deserialize;

use super::{CafeID, CafeRepository, CafeService, NewCafe};
use crate::http::AsErrorResponse;

/// Request for adding a new cafe.
///
/// This is submitted as a URL-encoded form. Every field is optional here so
/// that missing ones can be reported by name.
///
/// An empty value (`key=`) is kept as an empty string, so only absent keys
/// count as missing.
///
/// The boolean fields use "truthiness": any non-empty value (including
/// `false`!) means `true`, while an empty or missing value means `false`.
#[derive(Debug, Default, Deserialize)]
pub struct Request
{
	#[serde(default, deserialize_with = "crate::serde::deserialize_keep_empty")]
	pub name: Option<String>,

	#[serde(default, deserialize_with = "crate::serde::deserialize_keep_empty")]
	pub map_url: Option<String>,

	#[serde(default, deserialize_with = "crate::serde::deserialize_keep_empty")]
	pub img_url: Option<String>,

	#[serde(
		default,
		rename = "loc",
		deserialize_with = "crate::serde::deserialize_keep_empty"
	)]
	pub location: Option<String>,

	#[serde(default, deserialize_with = "crate::serde::deserialize_keep_empty")]
	pub seats: Option<String>,

	#[serde(
		default,
		rename = "toilet",
		deserialize_with = "crate::serde::deserialize_keep_empty"
	)]
	pub has_toilet: Option<String>,

	#[serde(
		default,
		rename = "wifi",
		deserialize_with = "crate::serde::deserialize_keep_empty"
	)]
	pub has_wifi: Option<String>,

	#[serde(
		default,
		rename = "sockets",
		deserialize_with = "crate::serde::deserialize_keep_empty"
	)]
	pub has_sockets: Option<String>,

	#[serde(
		default,
		rename = "calls",
		deserialize_with = "crate::serde::deserialize_keep_empty"
	)]
	pub can_take_calls: Option<String>,

	#[serde(default, deserialize_with = "crate::serde::deserialize_keep_empty")]
	pub coffee_price: Option<String>,
}

impl<R> CafeService<R>
where
	R: CafeRepository,
{
	/// Adds a new cafe.
	#[instrument(err(Debug, level = "debug"))]
	pub async fn add_cafe(&self, request: Request) -> Result<CafeID, AddCafeError>
	{
		let cafe = request.into_new_cafe()?;
		let cafe_id = self.repository.insert(&cafe).await.map_err(|error| {
			if error.is_unique_violation_of("cafe.name") {
				AddCafeError::NameAlreadyTaken
			} else {
				AddCafeError::Database(error)
			}
		})?;

		info!(%cafe_id, name = %cafe.name, "added cafe");

		Ok(cafe_id)
	}
}

impl Request
{
	/// Validates the request.
	///
	/// Fields are checked in column order, so the first missing one is reported.
	fn into_new_cafe(self) -> Result<NewCafe, AddCafeError>
	{
		Ok(NewCafe {
			name: self.name.ok_or(AddCafeError::MissingField("name"))?,
			map_url: self.map_url.ok_or(AddCafeError::MissingField("map_url"))?,
			img_url: self.img_url.ok_or(AddCafeError::MissingField("img_url"))?,
			location: self.location.ok_or(AddCafeError::MissingField("loc"))?,
			seats: self.seats.ok_or(AddCafeError::MissingField("seats"))?,
			has_toilet: is_truthy(self.has_toilet.as_deref()),
			has_wifi: is_truthy(self.has_wifi.as_deref()),
			has_sockets: is_truthy(self.has_sockets.as_deref()),
			can_take_calls: is_truthy(self.can_take_calls.as_deref()),
			coffee_price: self.coffee_price,
		})
	}
}

fn is_truthy(value: Option<&str>) -> bool
{
	value.is_some_and(|value| !value.is_empty())
}

with_database_error! {
	/// Errors that can occur when adding a cafe.
	#[derive(Debug, Error)]
	pub enum AddCafeError {
		#[error("missing required field `{0}`")]
		MissingField(&'static str),

		#[error("Sorry, a cafe with that name already exists")]
		NameAlreadyTaken,
	}
}

impl AsErrorResponse for AddCafeError
{
	fn status(&self) -> StatusCode
	{
		match self {
			Self::MissingField(_) => StatusCode::BAD_REQUEST,
			Self::NameAlreadyTaken => StatusCode::CONFLICT,
			Self::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
		}
	}
}

impl_into_response!(AddCafeError);
