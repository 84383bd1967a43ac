use serde::{Deserialize, Serialize};

/// A unique identifier for a cafe.
///
/// IDs are assigned by the database and never reused.
#[derive(
	Debug,
	Clone,
	Copy,
	PartialEq,
	Eq,
	Hash,
	derive_more::Display,
	Serialize,
	Deserialize,
	sqlx::Type,
)]
#[serde(transparent)]
#[sqlx(transparent)]
pub struct CafeID(pub i64);

/// A cafe.
///
/// Fields are in the same order as the table's columns, which is also the
/// order in which they are serialized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Cafe
{
	pub id: CafeID,
	pub name: String,
	pub map_url: String,
	pub img_url: String,
	pub location: String,

	/// A free-form description such as `"20-30"`.
	pub seats: String,

	pub has_toilet: bool,
	pub has_wifi: bool,
	pub has_sockets: bool,
	pub can_take_calls: bool,

	/// A free-form price such as `"£2.40"`, if known.
	pub coffee_price: Option<String>,
}

/// A cafe that has not been stored yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCafe
{
	pub name: String,
	pub map_url: String,
	pub img_url: String,
	pub location: String,
	pub seats: String,
	pub has_toilet: bool,
	pub has_wifi: bool,
	pub has_sockets: bool,
	pub can_take_calls: bool,
	pub coffee_price: Option<String>,
}
