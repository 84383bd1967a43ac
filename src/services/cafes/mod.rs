//! A service to manage cafes.

use std::sync::Arc;

use derive_more::Debug;

use crate::auth::AuthorizeDeletion;
use crate::database::ConnectionPool;

mod models;
pub use models::{Cafe, CafeID, NewCafe};

mod repository;
pub use repository::CafeRepository;

pub mod get_random_cafe;
pub use get_random_cafe::GetRandomCafeError;

pub mod get_cafes;
pub use get_cafes::GetCafesError;

pub mod search_cafes;
pub use search_cafes::SearchCafesError;

pub mod add_cafe;
pub use add_cafe::AddCafeError;

pub mod update_price;
pub use update_price::UpdatePriceError;

pub mod report_closed;
pub use report_closed::ReportClosedError;

pub mod http;


/// A service to manage cafes.
///
/// Storage is abstracted by [`CafeRepository`]; the API uses a SQLite
/// [`ConnectionPool`].
#[derive(Debug, Clone)]
pub struct CafeService<R = ConnectionPool>
{
	repository: R,

	#[debug(skip)]
	authorization: Arc<dyn AuthorizeDeletion>,
}

impl<R> CafeService<R>
where
	R: CafeRepository,
{
	/// Creates a new [`CafeService`].
	///
	/// `authorization` decides who gets to report cafes as closed.
	pub fn new(repository: R, authorization: impl AuthorizeDeletion) -> Self
	{
		Self { repository, authorization: Arc::new(authorization) }
	}
}
