//! Custom [`serde`] helper functions used via `#[serde(deserialize_with = "…")]`.

mod keep_empty;
pub(crate) use keep_empty::deserialize_keep_empty;
