/// Adds a `Database` variant to an error enum.
///
/// Its message ends up in the response body, so it does not say anything about
/// the underlying error; that one is logged when the response is created.
macro_rules! with_database_error {
	(
		$(#[$meta:meta])*
		$vis:vis enum $name:ident {
			$($variants:tt)*
		}
	) => {
		$(#[$meta])*
		$vis enum $name {
			$($variants)*

			#[error("something went wrong; please report this incident")]
			Database(#[from] $crate::database::DatabaseError),
		}
	};
}

/// Implements [`IntoResponse`] for a type implementing [`AsErrorResponse`].
///
/// [`IntoResponse`]: axum::response::IntoResponse
/// [`AsErrorResponse`]: crate::http::AsErrorResponse
macro_rules! impl_into_response {
	($ty:ty) => {
		impl ::axum::response::IntoResponse for $ty
		{
			fn into_response(self) -> ::axum::response::Response
			{
				::axum::response::IntoResponse::into_response(
					$crate::http::AsErrorResponse::as_error_response(&self),
				)
			}
		}
	};
}
