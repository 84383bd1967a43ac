//! Database access.
//!
//! The API stores everything in a single SQLite file. The schema is applied
//! every time a [`ConnectionPool`] is created, so a fresh file is usable
//! immediately.

mod error;
pub use error::DatabaseError;

mod pool;
pub use pool::ConnectionPool;

pub type Driver = sqlx::Sqlite;
pub type Pool = sqlx::Pool<Driver>;
pub type Result<T, E = DatabaseError> = std::result::Result<T, E>;

/// `CREATE TABLE IF NOT EXISTS` statements for every table.
const SCHEMA: &str = include_str!("schema.sql");

/// Escapes `%`, `_` and `\` so `value` only ever matches itself in a `LIKE`
/// pattern using `ESCAPE '\'`.
pub(crate) fn escape_like(value: &str) -> String
{
	let mut escaped = String::with_capacity(value.len());

	for character in value.chars() {
		if matches!(character, '%' | '_' | '\\') {
			escaped.push('\\');
		}

		escaped.push(character);
	}

	escaped
}

#[cfg(test)]
mod tests
{
	use super::escape_like;

	#[test]
	fn escape_like_works()
	{
		assert_eq!(escape_like("Downtown"), "Downtown");
		assert_eq!(escape_like("100%_real\\"), "100\\%\\_real\\\\");
	}
}
