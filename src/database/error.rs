/// A database error.
#[derive(Debug, Error)]
#[error("database error: {0}")]
pub struct DatabaseError(#[from] sqlx::Error);

impl DatabaseError
{
	/// Checks if this error was caused by a `UNIQUE` constraint violation of
	/// the given `column`.
	///
	/// SQLite reports these as `UNIQUE constraint failed: <table>.<column>`.
	pub fn is_unique_violation_of(&self, column: &str) -> bool
	{
		self.0
			.as_database_error()
			.is_some_and(|error| error.is_unique_violation() && error.message().contains(column))
	}
}
