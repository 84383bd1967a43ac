use serde::de::{Deserialize, Deserializer};

/// Deserializes an optional field that is known to be present.
///
/// `serde_html_form` decodes `key=` into `None` when the target is an `Option`. Fields using this
/// function must also be marked `#[serde(default)]`: serde only calls it for keys that are
/// present, so a missing key still ends up as `None`, while `key=` becomes `Some("")`.
pub(crate) fn deserialize_keep_empty<'de, T, D>(deserializer: D) -> Result<Option<T>, D::Error>
where
	T: Deserialize<'de>,
	D: Deserializer<'de>,
{
	T::deserialize(deserializer).map(Some)
}
