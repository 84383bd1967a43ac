//! Storage for cafes.

use std::fmt;

use super::{Cafe, CafeID, NewCafe};
use crate::database::{self, ConnectionPool};

/// Storage for cafes.
///
/// Every method performs exactly 1 query.
pub trait CafeRepository: fmt::Debug + Clone + Send + Sync + 'static
{
	/// Returns every cafe, in insertion order.
	fn find_all(&self) -> impl Future<Output = database::Result<Vec<Cafe>>> + Send;

	/// Returns the cafe with the given ID.
	fn find_by_id(
		&self,
		cafe_id: CafeID,
	) -> impl Future<Output = database::Result<Option<Cafe>>> + Send;

	/// Returns every cafe whose location contains `location`.
	///
	/// Matching is ASCII case-insensitive.
	fn find_by_location_substring(
		&self,
		location: &str,
	) -> impl Future<Output = database::Result<Vec<Cafe>>> + Send;

	/// Stores a new cafe and returns its ID.
	fn insert(&self, cafe: &NewCafe) -> impl Future<Output = database::Result<CafeID>> + Send;

	/// Overwrites the coffee price of the given cafe.
	///
	/// Returns whether the cafe exists.
	fn update_price(
		&self,
		cafe_id: CafeID,
		new_price: Option<&str>,
	) -> impl Future<Output = database::Result<bool>> + Send;

	/// Deletes the given cafe.
	///
	/// Returns whether the cafe existed.
	fn delete(&self, cafe_id: CafeID) -> impl Future<Output = database::Result<bool>> + Send;
}

const SELECT_CAFES: &str = "SELECT
  id,
  name,
  map_url,
  img_url,
  location,
  seats,
  has_toilet,
  has_wifi,
  has_sockets,
  can_take_calls,
  coffee_price
FROM cafe";

impl CafeRepository for ConnectionPool
{
	#[instrument(level = "debug", err(Debug, level = "debug"))]
	async fn find_all(&self) -> database::Result<Vec<Cafe>>
	{
		let cafes = sqlx::query_as::<_, Cafe>(&format!("{SELECT_CAFES} ORDER BY id"))
			.fetch_all(self.as_pool())
			.await?;

		Ok(cafes)
	}

	#[instrument(level = "debug", err(Debug, level = "debug"))]
	async fn find_by_id(&self, cafe_id: CafeID) -> database::Result<Option<Cafe>>
	{
		let cafe = sqlx::query_as::<_, Cafe>(&format!("{SELECT_CAFES} WHERE id = ?"))
			.bind(cafe_id)
			.fetch_optional(self.as_pool())
			.await?;

		Ok(cafe)
	}

	#[instrument(level = "debug", err(Debug, level = "debug"))]
	async fn find_by_location_substring(&self, location: &str) -> database::Result<Vec<Cafe>>
	{
		let pattern = format!("%{}%", database::escape_like(location));
		let cafes = sqlx::query_as::<_, Cafe>(&format!(
			"{SELECT_CAFES} WHERE location LIKE ? ESCAPE '\\' ORDER BY id"
		))
		.bind(pattern)
		.fetch_all(self.as_pool())
		.await?;

		Ok(cafes)
	}

	#[instrument(level = "debug", err(Debug, level = "debug"))]
	async fn insert(&self, cafe: &NewCafe) -> database::Result<CafeID>
	{
		let result = sqlx::query(
			"INSERT INTO cafe (
			   name,
			   map_url,
			   img_url,
			   location,
			   seats,
			   has_toilet,
			   has_wifi,
			   has_sockets,
			   can_take_calls,
			   coffee_price
			 )
			 VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
		)
		.bind(&cafe.name)
		.bind(&cafe.map_url)
		.bind(&cafe.img_url)
		.bind(&cafe.location)
		.bind(&cafe.seats)
		.bind(cafe.has_toilet)
		.bind(cafe.has_wifi)
		.bind(cafe.has_sockets)
		.bind(cafe.can_take_calls)
		.bind(cafe.coffee_price.as_deref())
		.execute(self.as_pool())
		.await?;

		Ok(CafeID(result.last_insert_rowid()))
	}

	#[instrument(level = "debug", err(Debug, level = "debug"))]
	async fn update_price(&self, cafe_id: CafeID, new_price: Option<&str>) -> database::Result<bool>
	{
		let result = sqlx::query("UPDATE cafe SET coffee_price = ? WHERE id = ?")
			.bind(new_price)
			.bind(cafe_id)
			.execute(self.as_pool())
			.await?;

		Ok(result.rows_affected() > 0)
	}

	#[instrument(level = "debug", err(Debug, level = "debug"))]
	async fn delete(&self, cafe_id: CafeID) -> database::Result<bool>
	{
		let result = sqlx::query("DELETE FROM cafe WHERE id = ?")
			.bind(cafe_id)
			.execute(self.as_pool())
			.await?;

		Ok(result.rows_affected() > 0)
	}
}

#[cfg(test)]
mod tests
{
	use super::CafeRepository;
	use crate::database::ConnectionPool;
	use crate::services::cafes::{CafeID, NewCafe};

	fn new_cafe(name: &str, location: &str) -> NewCafe
	{
		NewCafe {
			name: name.to_owned(),
			map_url: format!("https://maps.example.com/{name}"),
			img_url: format!("https://img.example.com/{name}.jpg"),
			location: location.to_owned(),
			seats: "20-30".to_owned(),
			has_toilet: true,
			has_wifi: false,
			has_sockets: true,
			can_take_calls: false,
			coffee_price: Some("£2.40".to_owned()),
		}
	}

	#[tokio::test]
	async fn insert_then_find() -> color_eyre::Result<()>
	{
		let pool = ConnectionPool::in_memory().await?;
		let cafe = new_cafe("Science Gallery London", "London Bridge");
		let cafe_id = pool.insert(&cafe).await?;

		let stored = pool.find_by_id(cafe_id).await?;

		assert!(stored.is_some_and(|stored| {
			stored.id == cafe_id
				&& stored.name == cafe.name
				&& stored.location == cafe.location
				&& stored.has_toilet
				&& !stored.has_wifi
				&& stored.coffee_price == cafe.coffee_price
		}));

		Ok(())
	}

	#[tokio::test]
	async fn find_all_keeps_insertion_order() -> color_eyre::Result<()>
	{
		let pool = ConnectionPool::in_memory().await?;

		for name in ["Alpha", "Bravo", "Charlie"] {
			pool.insert(&new_cafe(name, "Peckham")).await?;
		}

		let names = pool
			.find_all()
			.await?
			.into_iter()
			.map(|cafe| cafe.name)
			.collect::<Vec<_>>();

		assert_eq!(names, ["Alpha", "Bravo", "Charlie"]);

		Ok(())
	}

	#[tokio::test]
	async fn location_search_is_case_insensitive_substring_match() -> color_eyre::Result<()>
	{
		let pool = ConnectionPool::in_memory().await?;

		pool.insert(&new_cafe("Alpha", "Peckham")).await?;
		pool.insert(&new_cafe("Bravo", "Shoreditch")).await?;

		let hits = pool.find_by_location_substring("eckh").await?;
		assert_eq!(hits.len(), 1);
		assert_eq!(hits[0].name, "Alpha");

		assert_eq!(pool.find_by_location_substring("PECKHAM").await?.len(), 1);
		assert!(pool.find_by_location_substring("Hackney").await?.is_empty());

		Ok(())
	}

	#[tokio::test]
	async fn location_search_treats_wildcards_literally() -> color_eyre::Result<()>
	{
		let pool = ConnectionPool::in_memory().await?;

		pool.insert(&new_cafe("Alpha", "Peckham")).await?;

		assert!(pool.find_by_location_substring("%").await?.is_empty());
		assert!(pool.find_by_location_substring("P_ckham").await?.is_empty());

		Ok(())
	}

	#[tokio::test]
	async fn duplicate_names_are_rejected() -> color_eyre::Result<()>
	{
		let pool = ConnectionPool::in_memory().await?;

		pool.insert(&new_cafe("Alpha", "Peckham")).await?;

		let Err(error) = pool.insert(&new_cafe("Alpha", "Hackney")).await else {
			color_eyre::eyre::bail!("inserting a duplicate name should fail");
		};

		assert!(error.is_unique_violation_of("cafe.name"));
		assert_eq!(pool.find_all().await?.len(), 1);

		Ok(())
	}

	#[tokio::test]
	async fn update_and_delete_report_missing_rows() -> color_eyre::Result<()>
	{
		let pool = ConnectionPool::in_memory().await?;
		let cafe_id = pool.insert(&new_cafe("Alpha", "Peckham")).await?;

		assert!(pool.update_price(cafe_id, None).await?);
		assert!(!pool.update_price(CafeID(cafe_id.0 + 1), Some("£3")).await?);

		assert!(pool.delete(cafe_id).await?);
		assert!(!pool.delete(cafe_id).await?);

		Ok(())
	}

	#[tokio::test]
	async fn ids_are_not_reused() -> color_eyre::Result<()>
	{
		let pool = ConnectionPool::in_memory().await?;
		let first = pool.insert(&new_cafe("Alpha", "Peckham")).await?;

		pool.delete(first).await?;

		let second = pool.insert(&new_cafe("Bravo", "Peckham")).await?;

		assert_ne!(first, second);

		Ok(())
	}
}
