//! API services.
//!
//! The API's business logic is split up into services. A service provides a
//! constructor and one method per operation, each of which lives in its own
//! module together with its error type.
//!
//! If a service maps to an HTTP endpoint, it will also export an `http` module
//! with a `router` function returning an [`axum::Router`].

pub mod cafes;
pub use cafes::CafeService;
