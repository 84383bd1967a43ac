use derive_more::Debug;
use sqlx::pool::PoolOptions;
use sqlx::sqlite::SqliteConnectOptions;

use crate::config::DatabaseConfig;
use crate::database::{self, Driver, Pool};

/// A pool of database connections.
#[derive(Debug, Clone)]
#[debug("ConnectionPool")]
pub struct ConnectionPool(Pool);

impl ConnectionPool
{
	/// Opens the database file described by `config`, creating it if necessary,
	/// and makes sure the schema exists.
	#[instrument(err)]
	pub async fn new(config: &DatabaseConfig) -> database::Result<Self>
	{
		let options = SqliteConnectOptions::new()
			.filename(&config.path)
			.create_if_missing(true);

		let pool = PoolOptions::<Driver>::new()
			.min_connections(config.min_connections)
			.max_connections(config.max_connections.get())
			.connect_with(options)
			.await?;

		Self::init(pool).await
	}

	/// Creates a pool backed by a private in-memory database.
	///
	/// The pool holds on to exactly 1 connection forever, as the database
	/// disappears once its last connection is closed.
	#[cfg(test)]
	pub async fn in_memory() -> database::Result<Self>
	{
		let options = "sqlite::memory:".parse::<SqliteConnectOptions>()?;
		let pool = PoolOptions::<Driver>::new()
			.min_connections(1)
			.max_connections(1)
			.idle_timeout(None)
			.max_lifetime(None)
			.connect_with(options)
			.await?;

		Self::init(pool).await
	}

	async fn init(pool: Pool) -> database::Result<Self>
	{
		sqlx::raw_sql(database::SCHEMA).execute(&pool).await?;

		debug!("database schema is up to date");

		Ok(Self(pool))
	}

	/// Returns a reference to the underlying [`sqlx::Pool`], which can be used
	/// as an executor.
	pub(crate) fn as_pool(&self) -> &Pool
	{
		&self.0
	}

	/// Closes all connections.
	///
	/// Waits for checked out connections to be returned first.
	#[instrument(level = "debug")]
	pub async fn close(&self)
	{
		self.0.close().await;
	}
}
