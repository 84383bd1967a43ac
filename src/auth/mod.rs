//! Authorization for destructive operations.
//!
//! Deleting a cafe requires the caller to present a key. What counts as a
//! valid key is decided by an [`AuthorizeDeletion`] implementation; the API
//! uses [`SharedSecret`], which compares against a single configured value.

use derive_more::Debug;
use http::StatusCode;
use subtle::ConstantTimeEq;

use crate::http::AsErrorResponse;

/// Decides whether a request may delete a cafe.
pub trait AuthorizeDeletion: Send + Sync + 'static
{
	/// Checks the key presented by the caller, if any.
	fn authorize(&self, api_key: Option<&str>) -> Result<(), Forbidden>;
}

/// Authorizes requests presenting one specific key.
#[derive(Debug, Clone)]
#[debug("SharedSecret")]
pub struct SharedSecret(Box<str>);

/// The caller is not allowed to perform the operation.
#[derive(Debug, Error)]
#[error("Sorry, that's not allowed. make sure you have the correct api_key")]
pub struct Forbidden;

impl SharedSecret
{
	/// Creates a new [`SharedSecret`] accepting only `secret`.
	pub fn new(secret: impl Into<Box<str>>) -> Self
	{
		Self(secret.into())
	}
}

impl AuthorizeDeletion for SharedSecret
{
	fn authorize(&self, api_key: Option<&str>) -> Result<(), Forbidden>
	{
		let Some(api_key) = api_key else {
			debug!("no api key provided");
			return Err(Forbidden);
		};

		if bool::from(self.0.as_bytes().ct_eq(api_key.as_bytes())) {
			Ok(())
		} else {
			debug!("api key does not match");
			Err(Forbidden)
		}
	}
}

impl AsErrorResponse for Forbidden
{
	fn status(&self) -> StatusCode
	{
		StatusCode::FORBIDDEN
	}

	fn titled(&self) -> bool
	{
		false
	}
}

impl_into_response!(Forbidden);

#[cfg(test)]
mod tests
{
	use super::{AuthorizeDeletion, SharedSecret};

	#[test]
	fn accepts_matching_key()
	{
		let secret = SharedSecret::new("TopSecretAPIKey");

		assert!(secret.authorize(Some("TopSecretAPIKey")).is_ok());
	}

	#[test]
	fn rejects_everything_else()
	{
		let secret = SharedSecret::new("TopSecretAPIKey");

		assert!(secret.authorize(None).is_err());
		assert!(secret.authorize(Some("")).is_err());
		assert!(secret.authorize(Some("TopSecret")).is_err());
		assert!(secret.authorize(Some("topsecretapikey")).is_err());
	}
}
