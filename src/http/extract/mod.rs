//! Custom [extractors].
//!
//! These are wrappers around existing extractors that only alter the rejection
//! responses, so that they match the JSON error shape used everywhere else.
//!
//! [extractors]: axum::extract

pub(crate) mod path;
pub(crate) use path::Path;

pub(crate) mod query;
pub(crate) use query::Query;

pub(crate) mod form;
pub(crate) use form::Form;
